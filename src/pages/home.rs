use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::components::{
    about::AboutSection, contact::ContactSection, footer::Footer, header::Header,
    hero::HeroSection, projects::ProjectsSection, services::ServicesSection,
    testimonials::TestimonialsSection,
};
use crate::config;
use crate::intro::component::IntroAnimation;

/// Whether the intro already played in this browser session.
pub fn intro_already_shown() -> bool {
    window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::INTRO_SHOWN_KEY).ok())
        .flatten()
        .is_some()
}

fn remember_intro_shown() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(config::INTRO_SHOWN_KEY, "true");
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let show_intro = use_state(|| !intro_already_shown());

    let on_intro_complete = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| {
            info!("Intro finished, rendering page");
            remember_intro_shown();
            show_intro.set(false);
        })
    };

    if *show_intro {
        return html! { <IntroAnimation on_complete={on_intro_complete} /> };
    }

    html! {
        <div class="page fade-in">
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <ServicesSection />
                <ProjectsSection />
                <TestimonialsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
