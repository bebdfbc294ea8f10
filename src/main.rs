use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod motion;
mod scene;
mod data {
    pub mod icons;
    pub mod services;
    pub mod tech_stack;
    pub mod portfolio;
    pub mod demos;
    pub mod site;
}
mod inquiry {
    pub mod form;
    pub mod validation;
    pub mod wizard;
    pub mod submit;
}
mod pricing {
    pub mod calculator;
    pub mod quote;
}
mod components {
    pub mod navbar;
    pub mod hero;
    pub mod service_showcase;
    pub mod tech_carousel;
    pub mod portfolio_gallery;
    pub mod demo_viewer;
    pub mod pricing_calculator;
    pub mod quote_modal;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

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
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home}>{"Back to CodeCraft"}</Link<Route>>
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
