use web_sys::{HtmlCanvasElement, HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::DEMO_FRAME_MS;
use crate::data::demos::{
    DemoControls, DemoKind, Material, DEMOS, MAX_LIGHT, MAX_PARTICLES, MIN_LIGHT, MIN_PARTICLES, PRESET_COLORS,
};
use crate::data::icons::{icon, Icon};
use crate::scene::draw_scene;

fn on_input<F>(controls: &UseStateHandle<DemoControls>, change: F) -> Callback<InputEvent>
where
    F: Fn(&mut DemoControls, String) + 'static,
{
    let controls = controls.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*controls).clone();
        change(&mut next, value);
        controls.set(next);
    })
}

fn on_click<F>(controls: &UseStateHandle<DemoControls>, change: F) -> Callback<MouseEvent>
where
    F: Fn(&mut DemoControls) + 'static,
{
    let controls = controls.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*controls).clone();
        change(&mut next);
        controls.set(next);
    })
}

#[function_component(DemoViewer)]
pub fn demo_viewer() -> Html {
    let controls = use_state(DemoControls::default);
    let frame = use_state(|| 0u32);
    let canvas_ref = use_node_ref();

    {
        let frame = frame.clone();
        use_interval(
            move || frame.set(frame.wrapping_add(1)),
            if controls.playing { DEMO_FRAME_MS } else { 0 },
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(frame, controls)| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(e) = draw_scene(canvas, controls, *frame) {
                            log::error!("Failed to draw demo scene: {}", e);
                        }
                    }
                    None => log::warn!("Demo canvas is not mounted"),
                }
                || ()
            },
            (*frame, (*controls).clone()),
        );
    }

    let on_cube_color = on_input(&controls, |c, v| c.cube_color = v);
    let on_product_color = on_input(&controls, |c, v| c.product_color = v);
    let on_particles = on_input(&controls, |c, v| {
        if let Ok(count) = v.parse::<u32>() {
            c.set_particle_count(count);
        }
    });
    let on_light = on_input(&controls, |c, v| {
        if let Ok(intensity) = v.parse::<f64>() {
            c.set_light_intensity(intensity);
        }
    });
    let toggle_play = on_click(&controls, |c| c.playing = !c.playing);
    let toggle_fullscreen = on_click(&controls, |c| c.fullscreen = !c.fullscreen);
    let reset = on_click(&controls, DemoControls::reset);

    let demo = controls.demo();

    let tabs = DEMOS.iter().enumerate().map(|(i, d)| {
        let select = on_click(&controls, move |c| c.select(i));
        html! {
            <button class={classes!("demo-tab", (i == controls.active).then(|| "active"))} onclick={select}>
                <span class="demo-tab-title">{d.title}</span>
                <span class="demo-tab-category">{d.category}</span>
            </button>
        }
    });

    let color_swatches = |current: &str, is_product: bool| {
        PRESET_COLORS
            .iter()
            .map(|&color| {
                let pick = on_click(&controls, move |c| {
                    if is_product {
                        c.product_color = color.to_string();
                    } else {
                        c.cube_color = color.to_string();
                    }
                });
                html! {
                    <button
                        class={classes!("swatch", (current == color).then(|| "selected"))}
                        style={format!("background: {}", color)}
                        onclick={pick}
                        aria-label={color}
                    />
                }
            })
            .collect::<Html>()
    };

    let demo_specific = match demo.kind {
        DemoKind::AnimatedCube => html! {
            <div class="control">
                <label>{"Cube Color"}</label>
                <div class="swatches">{color_swatches(&controls.cube_color, false)}</div>
                <input type="color" value={controls.cube_color.clone()} oninput={on_cube_color} />
            </div>
        },
        DemoKind::ProductConfigurator => html! {
            <>
                <div class="control">
                    <label>{"Product Color"}</label>
                    <div class="swatches">{color_swatches(&controls.product_color, true)}</div>
                    <input type="color" value={controls.product_color.clone()} oninput={on_product_color} />
                </div>
                <div class="control">
                    <label>{"Material"}</label>
                    <div class="materials">
                        { for Material::ALL.iter().map(|&material| {
                            let pick = on_click(&controls, move |c| c.material = material);
                            html! {
                                <button
                                    class={classes!("material-btn", (controls.material == material).then(|| "selected"))}
                                    onclick={pick}
                                >
                                    {material.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </>
        },
        DemoKind::ParticleSystem => html! {
            <div class="control">
                <label>{format!("Particles: {}", controls.particle_count)}</label>
                <input
                    type="range"
                    min={MIN_PARTICLES.to_string()}
                    max={MAX_PARTICLES.to_string()}
                    step="100"
                    value={controls.particle_count.to_string()}
                    oninput={on_particles}
                />
            </div>
        },
        DemoKind::InteractiveEnvironment => html! {
            <div class="control">
                <label>{format!("Light Intensity: {:.1}", controls.light_intensity)}</label>
                <input
                    type="range"
                    min={MIN_LIGHT.to_string()}
                    max={MAX_LIGHT.to_string()}
                    step="0.1"
                    value={controls.light_intensity.to_string()}
                    oninput={on_light}
                />
            </div>
        },
        DemoKind::MorphingGeometry => html! {},
    };

    html! {
        <section id="3d-websites" class="demos">
            <div class="section-header">
                <span class="section-eyebrow">{"3D Lab"}</span>
                <h2>{"Interactive 3D Experiences"}</h2>
                <p>{"Play with a few of the effects we ship in production."}</p>
            </div>

            <div class="demo-tabs">{ for tabs }</div>

            <div class="demo-layout">
                <div class={classes!("demo-stage", controls.fullscreen.then(|| "fullscreen"))}>
                    <canvas ref={canvas_ref} width="800" height="500"></canvas>
                    <div class="stage-buttons">
                        <button class="round-btn" onclick={toggle_play} aria-label="Play or pause">
                            if controls.playing { {icon(Icon::Pause)} } else { {icon(Icon::Play)} }
                        </button>
                        <button class="round-btn" onclick={toggle_fullscreen} aria-label="Toggle fullscreen">
                            if controls.fullscreen { {icon(Icon::Minimize)} } else { {icon(Icon::Maximize)} }
                        </button>
                    </div>
                </div>

                <aside class="demo-panel">
                    <h3>{demo.title}</h3>
                    <p>{demo.description}</p>
                    <span class="complexity" style={format!("color: {}", demo.complexity.color())}>
                        {demo.complexity.label()}
                    </span>

                    {demo_specific}

                    <button class="reset-btn" onclick={reset}>{"Reset Controls"}</button>

                    <h4>{"Controls"}</h4>
                    <ul class="demo-list">
                        { for demo.controls.iter().map(|c| html! { <li>{*c}</li> }) }
                    </ul>
                    <h4>{"Built With"}</h4>
                    <div class="tech-tags">
                        { for demo.technologies.iter().map(|t| html! { <span class="tech-tag">{*t}</span> }) }
                    </div>
                </aside>
            </div>

            <style>
                {r#"
                .demos {
                    padding: 6rem 1.5rem;
                    background: linear-gradient(180deg, #ffffff, #f5f3ff);
                }
                .demo-tabs {
                    max-width: 1280px;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 0.75rem;
                }
                .demo-tab {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.25rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                    border-radius: 1rem;
                    padding: 0.9rem 1rem;
                    cursor: pointer;
                }
                .demo-tab.active {
                    border-color: #8b5cf6;
                    box-shadow: 0 6px 20px rgba(139, 92, 246, 0.2);
                }
                .demo-tab-title {
                    font-weight: 600;
                    color: #111827;
                }
                .demo-tab-category {
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                .demo-layout {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .demo-stage {
                    position: relative;
                    background: #f8fafc;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .demo-stage canvas {
                    width: 100%;
                    height: auto;
                    display: block;
                }
                .demo-stage.fullscreen {
                    position: fixed;
                    inset: 0;
                    z-index: 120;
                    border-radius: 0;
                    display: flex;
                    align-items: center;
                }
                .stage-buttons {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    display: flex;
                    gap: 0.5rem;
                }
                .demo-panel {
                    background: white;
                    border-radius: 1.5rem;
                    padding: 1.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                }
                .complexity {
                    font-weight: 600;
                    font-size: 0.85rem;
                }
                .control {
                    margin: 1.25rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .swatches, .materials {
                    display: flex;
                    gap: 0.5rem;
                    flex-wrap: wrap;
                }
                .swatch {
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 9999px;
                    border: 2px solid white;
                    box-shadow: 0 0 0 1px #e5e7eb;
                    cursor: pointer;
                }
                .swatch.selected {
                    box-shadow: 0 0 0 2px #111827;
                }
                .material-btn {
                    text-transform: capitalize;
                    border: 1px solid #e5e7eb;
                    background: white;
                    padding: 0.4rem 1rem;
                    border-radius: 0.6rem;
                    cursor: pointer;
                }
                .material-btn.selected {
                    background: #8b5cf6;
                    color: white;
                    border-color: #8b5cf6;
                }
                .reset-btn {
                    width: 100%;
                    border: 1px solid #d1d5db;
                    background: white;
                    padding: 0.6rem;
                    border-radius: 0.75rem;
                    cursor: pointer;
                }
                .demo-list {
                    color: #4b5563;
                    padding-left: 1.25rem;
                }
                @media (max-width: 900px) {
                    .demo-layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
