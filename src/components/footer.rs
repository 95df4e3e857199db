use chrono::Datelike;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::header::NAV_ITEMS;

const SOCIALS: [(&str, &str); 4] = [
    ("LinkedIn", "💼"),
    ("GitHub", "🐙"),
    ("Twitter", "🐦"),
    ("Instagram", "📷"),
];

const FOOTER_SERVICES: [&str; 6] = [
    "Desenvolvimento Web",
    "Apps Mobile",
    "Soluções Cloud",
    "Automações & IA",
    "APIs & Integrações",
    "Consultoria Tech",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="nav-logo">
                        <span class="logo-badge">{"D"}</span>
                        <span class="gradient-text">{"DIGAOTECH"}</span>
                    </div>
                    <p>{"Transformando ideias em soluções tecnológicas inovadoras. Desenvolvimento web, mobile, automações e IA para impulsionar seu negócio."}</p>
                    <div class="socials">
                        { for SOCIALS.iter().map(|(name, icon)| html! {
                            <a href="#" class="social-link" title={*name}>{*icon}</a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3>{"Links Rápidos"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|(name, href)| html! {
                            <li><a href={*href}>{*name}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Serviços"}</h3>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|service| html! { <li><span>{*service}</span></li> }) }
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <span>{format!("© {} Digaotech. Desenvolvido com ❤️ e muito ☕", year)}</span>
                <button class="back-to-top" onclick={scroll_to_top}>{"Voltar ao topo ↑"}</button>
            </div>
        </footer>
    }
}
