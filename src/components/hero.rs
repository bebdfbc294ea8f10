use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HERO_ROTATION_MS;
use crate::data::icons::{icon, Icon};
use crate::data::services::{STUDIO_SERVICES, TRUST_STATS};
use crate::data::site::TAGLINE;
use crate::motion::next_index;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_quote: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_index(*current, STUDIO_SERVICES.len())),
            HERO_ROTATION_MS,
        );
    }

    let featured = &STUDIO_SERVICES[*current % STUDIO_SERVICES.len()];
    let request_quote = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-blob hero-blob-a"></div>
            <div class="hero-blob hero-blob-b"></div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        {icon(Icon::Sparkles)}
                        <span>{TAGLINE}</span>
                    </div>
                    <h1>
                        {"We Build "}
                        <span class="gradient-text">{"Digital Experiences"}</span>
                        {" That Matter"}
                    </h1>
                    <p class="hero-lead">
                        {"From stunning websites to powerful mobile apps and immersive 3D experiences, we turn ideas into products your customers love."}
                    </p>

                    <div class="hero-actions">
                        <button class="btn-primary" onclick={request_quote}>
                            {"Start Your Project "}
                            {icon(Icon::ArrowRight)}
                        </button>
                        <a href="#portfolio" class="btn-secondary">
                            {icon(Icon::Play)}
                            {" View Our Work"}
                        </a>
                    </div>

                    <div class="hero-stats">
                        { for TRUST_STATS.iter().map(|stat| html! {
                            <div class="hero-stat">
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-feature">
                    <div class="feature-card" style={format!("background: {}", featured.tone.soft_gradient())}>
                        <div class="feature-label">{"Currently featuring"}</div>
                        <div class="feature-icon" style={format!("background: {}", featured.tone.strong_gradient())}>
                            {icon(featured.icon)}
                        </div>
                        <h3 style={format!("color: {}", featured.tone.text_color())}>{featured.title}</h3>
                        <p>{featured.description}</p>
                    </div>
                    <div class="hero-dots">
                        { for (0..STUDIO_SERVICES.len()).map(|i| {
                            let pick = {
                                let current = current.clone();
                                Callback::from(move |_: MouseEvent| current.set(i))
                            };
                            html! {
                                <button
                                    class={classes!("hero-dot", (i == *current).then(|| "active"))}
                                    onclick={pick}
                                    aria-label={format!("Show service {}", i + 1)}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 1.5rem 4rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, #faf5ff, #eff6ff, #eef2ff);
                }
                .hero-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(60px);
                    opacity: 0.35;
                }
                .hero-blob-a { top: -4rem; left: -4rem; background: #c084fc; }
                .hero-blob-b { bottom: -4rem; right: -4rem; background: #60a5fa; }
                .hero-grid {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    background: white;
                    color: #7c3aed;
                    font-size: 0.9rem;
                    box-shadow: 0 2px 10px rgba(124, 58, 237, 0.15);
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    color: #111827;
                    margin: 1.5rem 0;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-lead {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 36rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                    flex-wrap: wrap;
                }
                .btn-primary {
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    color: white;
                    border: none;
                    padding: 0.9rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .btn-secondary {
                    border: 2px solid #d1d5db;
                    color: #374151;
                    padding: 0.8rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-stats {
                    display: flex;
                    gap: 2.5rem;
                }
                .hero-stat-value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #7c3aed;
                }
                .hero-stat-label {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .feature-card {
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.1);
                    transition: background 0.5s ease;
                }
                .feature-label {
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    margin: 1.5rem 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .hero-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .hero-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 9999px;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero-dot.active {
                    width: 2rem;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                }
                @media (max-width: 900px) {
                    .hero-grid { grid-template-columns: 1fr; }
                    .hero h1 { font-size: 2.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
