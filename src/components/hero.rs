use yew::prelude::*;

const STATS: [(&str, &str, &str); 4] = [
    ("50+", "Projetos", "accent-blue"),
    ("5+", "Anos", "accent-gold"),
    ("30+", "Clientes", "accent-blue"),
    ("24/7", "Suporte", "accent-gold"),
];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-glow glow-a"></div>
            <div class="hero-glow glow-b"></div>

            <div class="container hero-content">
                <h1 class="hero-title">
                    <span class="gradient-text glow-pulse">{"DIGAOTECH"}</span>
                </h1>
                <div class="divider"></div>

                <h2 class="hero-subtitle">
                    {"Transformando ideias em"}
                    <span class="accent-blue">{" soluções tecnológicas"}</span>
                </h2>

                <p class="hero-description">
                    {"Desenvolvimento de sistemas, automações inteligentes, integrações de APIs e soluções em IA para impulsionar seu negócio para o futuro digital."}
                </p>

                <div class="hero-actions">
                    <a href="#projects" class="button-primary">{"Ver Projetos"}</a>
                    <a href="#contact" class="button-outline">{"Fale Conosco"}</a>
                </div>

                <div class="hero-stats">
                    { for STATS.iter().map(|(value, label, accent)| html! {
                        <div class="stat">
                            <div class={classes!("stat-value", *accent)}>{*value}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <a href="#about" class="scroll-hint">{"⌄"}</a>
        </section>
    }
}
