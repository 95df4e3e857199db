use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    ("</>", "Código Limpo", "Desenvolvimento com as melhores práticas e padrões da indústria"),
    ("⚡", "Performance", "Soluções otimizadas para máxima velocidade e eficiência"),
    ("👥", "Colaboração", "Trabalho em equipe e comunicação transparente em todos os projetos"),
    ("🏆", "Qualidade", "Compromisso com a excelência em cada linha de código"),
];

const VALUES: [&str; 5] = [
    "Excelência em cada projeto",
    "Inovação constante",
    "Transparência total",
    "Foco no cliente",
    "Compromisso com prazos",
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section muted">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Sobre a "}<span class="gradient-text">{"Digaotech"}</span></h2>
                    <div class="divider"></div>
                    <p>{"Somos uma empresa especializada em transformar desafios complexos em soluções tecnológicas elegantes e eficientes."}</p>
                </div>

                <div class="two-columns">
                    <div class="about-text">
                        <div>
                            <h3 class="accent-blue">{"Nossa Missão"}</h3>
                            <p>{"Democratizar o acesso à tecnologia de ponta, oferecendo soluções inovadoras que impulsionam o crescimento e a eficiência dos nossos clientes, sempre priorizando a qualidade, a segurança e a sustentabilidade."}</p>
                        </div>
                        <div>
                            <h3 class="accent-gold">{"Nossa Visão"}</h3>
                            <p>{"Ser referência nacional em desenvolvimento de soluções tecnológicas personalizadas, reconhecida pela excelência técnica, inovação constante e pelo impacto positivo que geramos na transformação digital das empresas."}</p>
                        </div>
                        <div>
                            <h3>{"Nossos Valores"}</h3>
                            <ul class="values">
                                { for VALUES.iter().enumerate().map(|(i, value)| html! {
                                    <li>
                                        <span class={classes!("dot", if i % 2 == 0 { "blue" } else { "gold" })}></span>
                                        <span>{*value}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>

                    <div class="feature-grid">
                        { for FEATURES.iter().map(|(icon, title, description)| html! {
                            <div class="card feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="team">
                    <h3>{"Nossa "}<span class="gradient-text">{"Equipe"}</span></h3>
                    <div class="card team-card">
                        <div class="avatar-initials">{"DT"}</div>
                        <div>
                            <h4>{"Rodrigo Santos"}</h4>
                            <p class="accent-blue">{"Founder & CEO"}</p>
                            <p>{"Desenvolvedor Full Stack com mais de 8 anos de experiência em tecnologias web modernas, especialista em React, Node.js, Python e arquiteturas cloud. Apaixonado por criar soluções que fazem a diferença no mundo real."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
