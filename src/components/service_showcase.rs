use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::icons::{icon, Icon};
use crate::data::services::STUDIO_SERVICES;

#[function_component(ServiceShowcase)]
pub fn service_showcase() -> Html {
    let active = use_state(|| None::<usize>);
    let hovered = use_state(|| None::<usize>);

    let cards = STUDIO_SERVICES.iter().enumerate().map(|(i, service)| {
        let is_active = *active == Some(i);
        let expanded = is_active || *hovered == Some(i);

        let toggle = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(if *active == Some(i) { None } else { Some(i) });
            })
        };
        let enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
        };
        let leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        let background = if expanded {
            service.tone.soft_gradient()
        } else {
            "white"
        };

        html! {
            <div
                class={classes!("service-card", is_active.then(|| "active"))}
                style={format!("background: {}", background)}
                onclick={toggle}
                onmouseenter={enter}
                onmouseleave={leave}
            >
                <div class="service-icon" style={format!("background: {}", service.tone.strong_gradient())}>
                    {icon(service.icon)}
                </div>
                <h3 style={format!("color: {}", service.tone.text_color())}>{service.title}</h3>
                <p>{service.description}</p>
                if expanded {
                    <ul class="service-features">
                        { for service.features.iter().map(|feature| html! {
                            <li>{icon(Icon::Check)}{" "}{*feature}</li>
                        }) }
                    </ul>
                }
                <span class="service-more">{"Learn more "}{icon(Icon::ArrowRight)}</span>
            </div>
        }
    });

    html! {
        <section id="services" class="services">
            <div class="section-header">
                <span class="section-eyebrow">{"What We Do"}</span>
                <h2>{"Services Built for Growth"}</h2>
                <p>{"End-to-end digital craftsmanship, from the first sketch to the last deploy."}</p>
            </div>
            <div class="service-grid">
                { for cards }
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 1.5rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .section-eyebrow {
                    color: #7c3aed;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.85rem;
                }
                .section-header h2 {
                    font-size: 2.5rem;
                    color: #111827;
                    margin: 0.75rem 0;
                }
                .section-header p {
                    color: #6b7280;
                    max-width: 40rem;
                    margin: 0 auto;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    border-radius: 1.5rem;
                    padding: 2rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .service-card:hover, .service-card.active {
                    transform: translateY(-6px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }
                .service-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    margin-bottom: 1.25rem;
                }
                .service-card p {
                    color: #4b5563;
                }
                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0;
                    display: grid;
                    gap: 0.5rem;
                    color: #374151;
                }
                .service-more {
                    color: #7c3aed;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
