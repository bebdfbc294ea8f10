use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CAROUSEL_TICK_MS;
use crate::data::icons::{icon, Icon};
use crate::data::tech_stack::{monogram, TECH_CATEGORIES, TECH_STATS};
use crate::motion::{auto_scroll, jump, Drag};

/// `(scroll_left, scroll_width - client_width)` of the track.
fn track_metrics(track: &Element) -> (f64, f64) {
    let offset = f64::from(track.scroll_left());
    let max = f64::from(track.scroll_width() - track.client_width());
    (offset, max)
}

fn set_offset(track: &Element, offset: f64) {
    track.set_scroll_left(offset.round() as i32);
}

#[function_component(TechCarousel)]
pub fn tech_carousel() -> Html {
    let active = use_state(|| 0usize);
    let paused = use_state(|| false);
    let hovering = use_state(|| false);
    let drag = use_state(|| None::<Drag>);
    let track_ref = use_node_ref();

    let running = !*paused && !*hovering && drag.is_none();
    {
        let track_ref = track_ref.clone();
        use_interval(
            move || {
                if let Some(track) = track_ref.cast::<Element>() {
                    let (offset, max) = track_metrics(&track);
                    set_offset(&track, auto_scroll(offset, max));
                }
            },
            if running { CAROUSEL_TICK_MS } else { 0 },
        );
    }

    {
        // New category starts from the left edge.
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(track) = track_ref.cast::<Element>() {
                    set_offset(&track, 0.0);
                }
                || ()
            },
            *active,
        );
    }

    let toggle_pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(!*paused))
    };

    let arrow = |forward: bool| {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track_ref.cast::<Element>() {
                let (offset, max) = track_metrics(&track);
                set_offset(&track, jump(offset, forward, max));
            }
        })
    };

    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };

    let on_mouse_leave = {
        let hovering = hovering.clone();
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(false);
            drag.set(None);
        })
    };

    let on_mouse_down = {
        let drag = drag.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(track) = track_ref.cast::<Element>() {
                let (offset, _) = track_metrics(&track);
                drag.set(Some(Drag::begin(f64::from(e.page_x()), offset)));
            }
        })
    };

    let on_mouse_move = {
        let drag = drag.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(current) = *drag else { return };
            e.prevent_default();
            if let Some(track) = track_ref.cast::<Element>() {
                let (_, max) = track_metrics(&track);
                set_offset(&track, current.offset_at(f64::from(e.page_x()), max));
            }
        })
    };

    let on_mouse_up = {
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| drag.set(None))
    };

    let category = &TECH_CATEGORIES[*active % TECH_CATEGORIES.len()];

    html! {
        <section id="tech" class="tech">
            <div class="section-header">
                <span class="section-eyebrow">{"Our Stack"}</span>
                <h2>{"Technologies We Master"}</h2>
                <p>{"Modern tools for every layer of your product."}</p>
            </div>

            <div class="tech-tabs">
                { for TECH_CATEGORIES.iter().enumerate().map(|(i, cat)| {
                    let select = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(i))
                    };
                    let style = (i == *active).then(|| format!("background: {}; color: white", cat.gradient));
                    html! {
                        <button class="tech-tab" style={style} onclick={select}>{cat.name}</button>
                    }
                }) }
            </div>

            <div class="tech-controls">
                <button class="round-btn" onclick={arrow(false)} aria-label="Scroll left">{icon(Icon::ArrowLeft)}</button>
                <button class="round-btn" onclick={toggle_pause} aria-label="Toggle auto-scroll">
                    if *paused { {icon(Icon::Play)} } else { {icon(Icon::Pause)} }
                </button>
                <button class="round-btn" onclick={arrow(true)} aria-label="Scroll right">{icon(Icon::ArrowRight)}</button>
            </div>

            <div
                ref={track_ref}
                class={classes!("tech-track", drag.is_some().then(|| "dragging"))}
                onmouseenter={on_mouse_enter}
                onmouseleave={on_mouse_leave}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up}
            >
                { for category.technologies.iter().chain(category.technologies.iter()).map(|tech| html! {
                    <div class="tech-card">
                        <div class="tech-logo" style={format!("background: {}", category.gradient)}>
                            {monogram(tech)}
                        </div>
                        <span>{*tech}</span>
                    </div>
                }) }
            </div>

            <div class="tech-stats">
                { for TECH_STATS.iter().map(|stat| html! {
                    <div class="tech-stat">
                        <div class="tech-stat-value">{stat.value}</div>
                        <div class="tech-stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .tech {
                    padding: 6rem 1.5rem;
                    background: #f9fafb;
                }
                .tech-tabs {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .tech-tab {
                    border: none;
                    background: white;
                    color: #374151;
                    padding: 0.6rem 1.4rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
                }
                .tech-controls {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .round-btn {
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 9999px;
                    border: 1px solid #e5e7eb;
                    background: white;
                    cursor: pointer;
                }
                .tech-track {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: hidden;
                    cursor: grab;
                    user-select: none;
                    padding: 1rem 0;
                }
                .tech-track.dragging {
                    cursor: grabbing;
                }
                .tech-card {
                    flex: 0 0 10rem;
                    background: white;
                    border-radius: 1.25rem;
                    padding: 1.5rem 1rem;
                    text-align: center;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    color: #374151;
                    font-weight: 500;
                }
                .tech-logo {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.9rem;
                    margin: 0 auto 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .tech-stats {
                    max-width: 960px;
                    margin: 3rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .tech-stat {
                    background: white;
                    border-radius: 1.25rem;
                    padding: 1.5rem;
                    text-align: center;
                }
                .tech-stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #7c3aed;
                }
                .tech-stat-label {
                    color: #6b7280;
                }
                "#}
            </style>
        </section>
    }
}
