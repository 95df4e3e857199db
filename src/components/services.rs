use yew::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    gradient: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "</>",
        title: "Desenvolvimento Web",
        description: "Aplicações web modernas e responsivas usando React, Next.js, TypeScript e as mais recentes tecnologias.",
        features: ["React & Next.js", "TypeScript", "Tailwind CSS", "PWA"],
        gradient: "linear-gradient(135deg, #3b82f6, #00d4ff)",
    },
    Service {
        icon: "📱",
        title: "Aplicativos Mobile",
        description: "Apps nativos e híbridos para iOS e Android com performance excepcional e UX intuitiva.",
        features: ["React Native", "Flutter", "iOS & Android", "App Store"],
        gradient: "linear-gradient(135deg, #22c55e, #10b981)",
    },
    Service {
        icon: "☁️",
        title: "Soluções Cloud",
        description: "Infraestrutura escalável na nuvem com AWS, Azure e Google Cloud Platform.",
        features: ["AWS & Azure", "Docker", "Kubernetes", "CI/CD"],
        gradient: "linear-gradient(135deg, #a855f7, #8b5cf6)",
    },
    Service {
        icon: "⚡",
        title: "Automações & IA",
        description: "Automação de processos e integração de IA para otimizar operações e reduzir custos.",
        features: ["Machine Learning", "Chatbots", "RPA", "APIs IA"],
        gradient: "linear-gradient(135deg, #ffd700, #eab308)",
    },
    Service {
        icon: "🗄️",
        title: "APIs & Integrações",
        description: "Desenvolvimento de APIs RESTful e GraphQL, integrações com sistemas externos.",
        features: ["REST & GraphQL", "Microserviços", "Webhooks", "ETL"],
        gradient: "linear-gradient(135deg, #ef4444, #ec4899)",
    },
    Service {
        icon: "🛡️",
        title: "Segurança & DevOps",
        description: "Implementação de práticas de segurança e DevOps para máxima confiabilidade.",
        features: ["Segurança", "Monitoramento", "Backup", "DevOps"],
        gradient: "linear-gradient(135deg, #14b8a6, #06b6d4)",
    },
];

const PROCESS: [(&str, &str, &str); 4] = [
    ("01", "Análise", "Entendemos suas necessidades e objetivos"),
    ("02", "Planejamento", "Criamos a estratégia e arquitetura da solução"),
    ("03", "Desenvolvimento", "Desenvolvemos com metodologias ágeis"),
    ("04", "Entrega", "Deploy, testes e suporte contínuo"),
];

fn service_card(service: &Service) -> Html {
    html! {
        <div class="card service-card">
            <div class="service-icon" style={format!("background: {};", service.gradient)}>
                {service.icon}
            </div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a href="#contact" class="service-more">{"Saiba mais →"}</a>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Nossos "}<span class="gradient-text">{"Serviços"}</span></h2>
                    <div class="divider"></div>
                    <p>{"Oferecemos soluções completas em tecnologia para impulsionar seu negócio, do planejamento à entrega."}</p>
                </div>

                <div class="service-grid">
                    { for SERVICES.iter().map(service_card) }
                </div>

                <div class="process">
                    <h3>{"Nosso "}<span class="gradient-text">{"Processo"}</span></h3>
                    <div class="process-grid">
                        { for PROCESS.iter().map(|(step, title, description)| html! {
                            <div class="process-step">
                                <div class="process-number">{*step}</div>
                                <h4>{*title}</h4>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
