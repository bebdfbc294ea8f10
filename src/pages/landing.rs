use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm, demo_viewer::DemoViewer, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio_gallery::PortfolioGallery, pricing_calculator::PricingCalculator, service_showcase::ServiceShowcase,
    tech_carousel::TechCarousel,
};

/// Scrolls the inquiry form into view.
fn scroll_to_contact() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact"))
    else {
        log::warn!("Contact section not found");
        return;
    };
    section.scroll_into_view();
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_quote = Callback::from(|_: ()| scroll_to_contact());

    html! {
        <>
            <Navbar on_quote={on_quote.clone()} />
            <main>
                <Hero {on_quote} />
                <ServiceShowcase />
                <TechCarousel />
                <PortfolioGallery />
                <DemoViewer />
                <PricingCalculator />
                <ContactForm />
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    color: #111827;
                    background: #ffffff;
                }
                html {
                    scroll-behavior: smooth;
                }
                "#}
            </style>
        </>
    }
}
