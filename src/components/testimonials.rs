use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

const AUTOPLAY_MS: u32 = 5000;

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub avatar: &'static str,
    pub rating: usize,
    pub comment: &'static str,
    pub project: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Marina Silva",
        company: "TechStart Inovações",
        position: "CEO",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        rating: 5,
        comment: "A Digaotech transformou completamente nossa operação digital. O sistema de automação que desenvolveram aumentou nossa produtividade em 300%. Profissionais extremamente competentes!",
        project: "Sistema de Automação Empresarial",
    },
    Testimonial {
        name: "Carlos Mendoza",
        company: "E-commerce Plus",
        position: "CTO",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        rating: 5,
        comment: "Trabalhar com a Digaotech foi uma experiência fantástica. Eles entregaram nossa plataforma de e-commerce antes do prazo e com qualidade excepcional. Recomendo sem hesitar!",
        project: "Plataforma E-commerce",
    },
    Testimonial {
        name: "Ana Rodrigues",
        company: "HealthTech Solutions",
        position: "Diretora de Inovação",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        rating: 5,
        comment: "O app mobile que a Digaotech desenvolveu para nossa clínica revolucionou o atendimento aos pacientes. Interface intuitiva, performance excelente e suporte técnico impecável.",
        project: "Aplicativo Mobile para Saúde",
    },
    Testimonial {
        name: "Roberto Santos",
        company: "LogiTrans Brasil",
        position: "Gerente de TI",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        rating: 5,
        comment: "A solução de IA que implementaram em nosso sistema de logística otimizou nossas rotas e reduziu custos em 40%. Equipe altamente qualificada e sempre disponível.",
        project: "Otimização com IA",
    },
    Testimonial {
        name: "Fernanda Costa",
        company: "EduTech Online",
        position: "Fundadora",
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        rating: 5,
        comment: "Nossa plataforma de ensino online nunca foi tão robusta! A Digaotech superou todas nossas expectativas com uma arquitetura escalável e recursos inovadores.",
        project: "Plataforma de Ensino EAD",
    },
];

/// Wrap-around position in a list of `len` slides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    pub current: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            current: (self.current + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range targets leave the position unchanged.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self {
                current: index,
                ..self
            }
        } else {
            self
        }
    }
}

fn stars(count: usize) -> Html {
    (0..count).map(|_| html! { <span class="star">{"★"}</span> }).collect()
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));
    let autoplay = use_state(|| true);

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.set(carousel.next()),
            if *autoplay { AUTOPLAY_MS } else { 0 },
        );
    }

    let move_to = |step: fn(Carousel) -> Carousel| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(step(*carousel)))
    };
    let on_prev = move_to(Carousel::prev);
    let on_next = move_to(Carousel::next);

    let go_to = {
        let carousel = carousel.clone();
        move |index: usize| {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(index)))
        }
    };

    let set_autoplay = |enabled: bool| {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(enabled))
    };
    let toggle_autoplay = set_autoplay(!*autoplay);

    let current = &TESTIMONIALS[carousel.current];

    html! {
        <section class="section testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>{"O que nossos "}<span class="gradient-text">{"clientes"}</span>{" dizem"}</h2>
                    <div class="divider"></div>
                    <p>{"Depoimentos reais de clientes que confiaram na Digaotech para transformar seus negócios."}</p>
                </div>

                <div class="testimonial-stage">
                    <div class="card testimonial-card"
                        onmouseenter={set_autoplay(false)}
                        onmouseleave={set_autoplay(true)}>
                        <div class="stars">{stars(current.rating)}</div>
                        <blockquote>{format!("\"{}\"", current.comment)}</blockquote>
                        <div class="testimonial-project">{format!("Projeto: {}", current.project)}</div>
                        <div class="testimonial-author">
                            <img src={current.avatar} alt={current.name} />
                            <div>
                                <h4>{current.name}</h4>
                                <p>{current.position}</p>
                                <p class="accent-blue">{current.company}</p>
                            </div>
                        </div>
                        <button class="carousel-arrow left" onclick={on_prev}>{"‹"}</button>
                        <button class="carousel-arrow right" onclick={on_next}>{"›"}</button>
                    </div>

                    <div class="carousel-dots">
                        { for (0..TESTIMONIALS.len()).map(|index| html! {
                            <button
                                class={classes!("dot", (index == carousel.current).then(|| "active"))}
                                onclick={go_to(index)}
                            />
                        }) }
                    </div>

                    <div class="autoplay-toggle">
                        <button onclick={toggle_autoplay}>
                            { if *autoplay { "⏸️ Pausar slideshow automático" } else { "▶️ Reproduzir slideshow automático" } }
                        </button>
                    </div>
                </div>

                <div class="mini-testimonials">
                    { for TESTIMONIALS.iter().take(3).enumerate().map(|(index, testimonial)| html! {
                        <div
                            class={classes!("card", "mini-testimonial", (index == carousel.current % 3).then(|| "active"))}
                            onclick={go_to(index)}
                        >
                            <div class="mini-author">
                                <img src={testimonial.avatar} alt={testimonial.name} />
                                <div>
                                    <h5>{testimonial.name}</h5>
                                    <p>{testimonial.company}</p>
                                </div>
                            </div>
                            <div class="stars">{stars(testimonial.rating)}</div>
                            <p class="clamp">{testimonial.comment}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.prev().current, 4);
        assert_eq!(carousel.go_to(4).next().current, 0);
        assert_eq!(carousel.next().next().prev().current, 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let carousel = Carousel::new(5).go_to(2);
        assert_eq!(carousel.go_to(9).current, 2);
        assert_eq!(carousel.go_to(0).current, 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.next().current, 0);
        assert_eq!(carousel.prev().current, 0);
    }

    #[test]
    fn every_testimonial_is_rated() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
