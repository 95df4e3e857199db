use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Início", "#home"),
    ("Sobre", "#about"),
    ("Serviços", "#services"),
    ("Projetos", "#projects"),
    ("Contato", "#contact"),
];

pub fn stored_dark_mode() -> bool {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::DARK_MODE_KEY).ok())
        .flatten()
        .map(|value| value == "true")
        .unwrap_or(false)
}

/// Persists the choice and toggles the `dark` class on `<html>`.
pub fn apply_dark_mode(enabled: bool) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::DARK_MODE_KEY, &enabled.to_string());
        }
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.class_list().toggle_with_force("dark", enabled);
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let dark_mode = use_state(stored_dark_mode);

    {
        let dark_mode = *dark_mode;
        use_effect_with_deps(move |_| {
            apply_dark_mode(dark_mode);
            || ()
        }, ());
    }

    let toggle_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let enabled = !*dark_mode;
            apply_dark_mode(enabled);
            dark_mode.set(enabled);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let mode_icon = if *dark_mode { "☀️" } else { "🌙" };

    html! {
        <header class="site-header">
            <nav class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="logo-badge">{"D"}</span>
                    <span class="gradient-text">{"DIGAOTECH"}</span>
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|(name, href)| html! {
                        <a href={*href} class="nav-link">{*name}</a>
                    }) }
                    <button class="mode-toggle" onclick={toggle_dark_mode.clone()}>
                        {mode_icon}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|(name, href)| html! {
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*name}</a>
                            }) }
                            <button class="mode-toggle" onclick={toggle_dark_mode}>
                                <span>{mode_icon}</span>
                                <span>{ if *dark_mode { "Modo Claro" } else { "Modo Escuro" } }</span>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
