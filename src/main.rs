use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod intro {
    pub mod component;
    pub mod error;
    pub mod motion;
    pub mod sequencer;
    pub mod state;
}
mod services {
    pub mod github;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod projects;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"Página não encontrada"}</p>
                    <Link<Route> to={Route::Home} classes="button-primary">
                        {"Voltar ao início"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
