use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::icons::{icon, Icon};
use crate::data::site::{CONTACT_PHONE, NAV_ITEMS, NAV_SCROLL_THRESHOLD, STUDIO_NAME};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_quote: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let open_dropdown = use_state(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(y > NAV_SCROLL_THRESHOLD);
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach navbar scroll listener");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let request_quote = {
        let on_quote = props.on_quote.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_quote.emit(());
        })
    };

    let desktop_items = NAV_ITEMS.iter().map(|item| {
        let is_open = *open_dropdown == Some(item.name);
        let enter = {
            let open_dropdown = open_dropdown.clone();
            let name = item.name;
            let has_dropdown = item.has_dropdown();
            Callback::from(move |_: MouseEvent| {
                if has_dropdown {
                    open_dropdown.set(Some(name));
                }
            })
        };
        let leave = {
            let open_dropdown = open_dropdown.clone();
            Callback::from(move |_: MouseEvent| open_dropdown.set(None))
        };

        html! {
            <div class="nav-item" onmouseenter={enter} onmouseleave={leave}>
                <a href={item.href} class="nav-link">
                    {item.name}
                    if item.has_dropdown() {
                        <span class={classes!("caret", is_open.then(|| "open"))}>{"▾"}</span>
                    }
                </a>
                if item.has_dropdown() && is_open {
                    <div class="nav-dropdown">
                        { for item.dropdown.iter().map(|link| html! {
                            <a href={link.href} class="nav-dropdown-link">{link.name}</a>
                        }) }
                    </div>
                }
            </div>
        }
    });

    let mobile_items = NAV_ITEMS.iter().map(|item| {
        html! {
            <div class="mobile-item">
                <a href={item.href} class="nav-link" onclick={close_menu.clone()}>{item.name}</a>
                if item.has_dropdown() {
                    <div class="mobile-sub">
                        { for item.dropdown.iter().map(|link| html! {
                            <a href={link.href} onclick={close_menu.clone()}>{link.name}</a>
                        }) }
                    </div>
                }
            </div>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="logo-mark">{"C"}</span>
                    {STUDIO_NAME}
                </a>

                <div class="nav-desktop">
                    { for desktop_items }
                </div>

                <div class="nav-actions">
                    <a href={format!("tel:{}", CONTACT_PHONE)} class="nav-phone">
                        {icon(Icon::Phone)}
                        <span>{CONTACT_PHONE}</span>
                    </a>
                    <button class="nav-cta" onclick={request_quote.clone()}>{"Get Quote"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    if *menu_open {
                        {icon(Icon::Close)}
                    } else {
                        <>
                            <span></span>
                            <span></span>
                            <span></span>
                        </>
                    }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for mobile_items }
                    <button class="nav-cta" onclick={request_quote}>{"Get Quote"}</button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.3s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1f2937;
                    text-decoration: none;
                }
                .logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    background: linear-gradient(135deg, #9333ea, #2563eb);
                }
                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }
                .nav-item {
                    position: relative;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #9333ea;
                }
                .caret {
                    margin-left: 0.25rem;
                    display: inline-block;
                    transition: transform 0.2s;
                }
                .caret.open {
                    transform: rotate(180deg);
                }
                .nav-dropdown {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 14rem;
                    background: white;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                    padding: 0.5rem 0;
                }
                .nav-dropdown-link {
                    display: block;
                    padding: 0.6rem 1rem;
                    color: #374151;
                    text-decoration: none;
                }
                .nav-dropdown-link:hover {
                    background: #f5f3ff;
                    color: #9333ea;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-phone {
                    display: flex;
                    gap: 0.4rem;
                    color: #4b5563;
                    text-decoration: none;
                }
                .nav-cta {
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    color: white;
                    border: none;
                    padding: 0.6rem 1.4rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    flex-direction: column;
                    gap: 4px;
                }
                .burger-menu span:not(.icon) {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                    display: block;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem 1.5rem;
                    background: white;
                }
                .mobile-sub {
                    display: flex;
                    flex-direction: column;
                    padding-left: 1rem;
                    gap: 0.4rem;
                }
                .mobile-sub a {
                    color: #6b7280;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .nav-desktop, .nav-actions {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
