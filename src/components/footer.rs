use chrono::Datelike;
use yew::prelude::*;

use crate::data::icons::icon;
use crate::data::site::{
    FooterLink, FOOTER_COMPANY, FOOTER_CONTACT, FOOTER_SERVICES, RECENT_PROJECTS, SOCIAL_LINKS, STUDIO_NAME, TAGLINE,
};

fn link_list(title: &str, links: &[FooterLink]) -> Html {
    html! {
        <div class="footer-col">
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|link| html! {
                    <li>
                        <a href={link.href}>
                            if let Some(kind) = link.icon {
                                {icon(kind)}{" "}
                            }
                            {link.name}
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-col footer-brand">
                    <a href="#home" class="footer-logo">{STUDIO_NAME}</a>
                    <p>{TAGLINE}</p>
                    <ul class="footer-contact">
                        { for FOOTER_CONTACT.iter().map(|line| html! {
                            <li><a href={line.href}>{icon(line.icon)}{" "}{line.text}</a></li>
                        }) }
                    </ul>
                    <div class="socials">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.name}
                                class="social"
                            >
                                {social.short}
                            </a>
                        }) }
                    </div>
                </div>
                {link_list("Services", &FOOTER_SERVICES)}
                {link_list("Company", &FOOTER_COMPANY)}
                <div class="footer-col">
                    <h4>{"Recent Projects"}</h4>
                    <ul>
                        { for RECENT_PROJECTS.iter().map(|name| html! { <li><a href="#portfolio">{*name}</a></li> }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, STUDIO_NAME)}</span>
                <span>
                    <a href="#privacy">{"Privacy Policy"}</a>
                    {" · "}
                    <a href="#terms">{"Terms of Service"}</a>
                </span>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.5fr 1fr 1fr 1fr;
                    gap: 2.5rem;
                }
                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: white;
                    text-decoration: none;
                }
                .footer-col h4 {
                    color: white;
                    margin: 0 0 1rem;
                }
                .footer-col ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 0.6rem;
                }
                .site-footer a {
                    color: #9ca3af;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: white;
                }
                .socials {
                    display: flex;
                    gap: 0.6rem;
                    margin-top: 1.5rem;
                }
                .social {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 9999px;
                    background: #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.85rem;
                }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
