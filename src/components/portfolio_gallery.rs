use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::icons::{icon, Icon};
use crate::data::portfolio::{filter_projects, find_project, PortfolioFilter, Project};

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("No document body to lock scrolling on");
        return;
    };
    let result = if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("Could not update body overflow");
    }
}

#[function_component(PortfolioGallery)]
pub fn portfolio_gallery() -> Html {
    let filter = use_state(|| PortfolioFilter::All);
    let selected = use_state(|| None::<u32>);

    {
        let locked = selected.is_some();
        use_effect_with_deps(
            move |locked| {
                lock_body_scroll(*locked);
                || lock_body_scroll(false)
            },
            locked,
        );
    }

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let filters = PortfolioFilter::ALL.iter().map(|&option| {
        let pick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(option))
        };
        let style = (option == *filter).then(|| format!("background: {}; color: white", option.gradient()));
        html! {
            <button class="filter-btn" style={style} onclick={pick}>
                {icon(option.icon())}{" "}{option.label()}
            </button>
        }
    });

    let cards = filter_projects(*filter).into_iter().map(|project| {
        let open = {
            let selected = selected.clone();
            let id = project.id;
            Callback::from(move |_: MouseEvent| selected.set(Some(id)))
        };
        let (shown, more) = project.card_technologies();
        html! {
            <article class="project-card" data-category={project.category.label()} onclick={open}>
                <div class="project-image" style={format!("background-image: url('{}')", project.image)}>
                    if project.featured {
                        <span class="featured-badge">{icon(Icon::Star)}{" Featured"}</span>
                    }
                </div>
                <div class="project-body">
                    <div class="project-meta">
                        <span>{project.client_type}</span>
                        <span>{icon(Icon::Calendar)}{" "}{project.completed_label()}</span>
                    </div>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <div class="tech-tags">
                        { for shown.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
                        if more > 0 {
                            <span class="tech-tag more">{format!("+{} more", more)}</span>
                        }
                    </div>
                </div>
            </article>
        }
    });

    html! {
        <section id="portfolio" class="portfolio">
            <div class="section-header">
                <span class="section-eyebrow">{"Our Work"}</span>
                <h2>{"Featured Projects"}</h2>
                <p>{"A selection of products we have designed, built and shipped."}</p>
            </div>

            <div class="filters">{ for filters }</div>
            <div class="project-grid">{ for cards }</div>

            if let Some(project) = (*selected).and_then(find_project) {
                {project_modal(project, close_modal)}
            }

            <style>
                {r#"
                .portfolio {
                    padding: 6rem 1.5rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .filter-btn {
                    border: 1px solid #e5e7eb;
                    background: white;
                    color: #374151;
                    padding: 0.6rem 1.2rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    font-weight: 500;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    background: white;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .project-card:hover {
                    transform: translateY(-6px);
                }
                .project-image {
                    position: relative;
                    height: 13rem;
                    background-size: cover;
                    background-position: center;
                    background-color: #ede9fe;
                }
                .featured-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    color: white;
                    padding: 0.3rem 0.8rem;
                    border-radius: 9999px;
                    font-size: 0.8rem;
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-meta {
                    display: flex;
                    justify-content: space-between;
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .tech-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tech-tag {
                    background: #f3f4f6;
                    color: #374151;
                    padding: 0.25rem 0.7rem;
                    border-radius: 9999px;
                    font-size: 0.8rem;
                }
                .tech-tag.more {
                    background: #ede9fe;
                    color: #7c3aed;
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(17, 24, 39, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                    padding: 1.5rem;
                }
                .modal {
                    background: white;
                    border-radius: 1.5rem;
                    max-width: 56rem;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    position: relative;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    border: none;
                    background: white;
                    border-radius: 9999px;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                .modal-content {
                    padding: 2rem;
                }
                .modal-columns {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .modal-details dt {
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .modal-details dd {
                    margin: 0 0 0.75rem;
                    font-weight: 600;
                }
                .modal-links {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .modal-links a {
                    padding: 0.7rem 1.5rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    font-weight: 600;
                    color: white;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                }
                .modal-links a.outline {
                    color: #374151;
                    background: white;
                    border: 1px solid #d1d5db;
                }
                "#}
            </style>
        </section>
    }
}

fn project_modal(project: &'static Project, on_close: Callback<MouseEvent>) -> Html {
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal" onclick={stop}>
                <button class="modal-close" onclick={on_close} aria-label="Close">{icon(Icon::Close)}</button>
                <div class="project-image" style={format!("background-image: url('{}')", project.image)}></div>
                <div class="modal-content">
                    <h2>{project.title}</h2>
                    <div class="modal-columns">
                        <div>
                            <p>{project.long_description}</p>
                            <h4>{"Technologies"}</h4>
                            <div class="tech-tags">
                                { for project.technologies.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
                            </div>
                            if !project.awards.is_empty() {
                                <h4>{"Awards"}</h4>
                                <ul>
                                    { for project.awards.iter().map(|award| html! { <li>{icon(Icon::Award)}{" "}{*award}</li> }) }
                                </ul>
                            }
                        </div>
                        <dl class="modal-details">
                            <dt>{"Client"}</dt>
                            <dd>{project.client_type}</dd>
                            <dt>{"Completed"}</dt>
                            <dd>{project.completed_label()}</dd>
                            <dt>{"Category"}</dt>
                            <dd>{PortfolioFilter::Only(project.category).label()}</dd>
                        </dl>
                    </div>
                    <div class="modal-links">
                        <a href={project.live_url} target="_blank" rel="noopener noreferrer">{"View Live Site"}</a>
                        if let Some(github) = project.github_url {
                            <a class="outline" href={github} target="_blank" rel="noopener noreferrer">{"View Code"}</a>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
