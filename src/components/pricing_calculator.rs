use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::quote_modal::QuoteModal;
use crate::data::icons::{icon, Icon};
use crate::pricing::calculator::{
    format_usd, Feature, PricingSelection, ProjectType, Timeline, MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};

/// Click handler that applies `change` to a copy of the selection.
fn edit<F>(selection: &UseStateHandle<PricingSelection>, change: F) -> Callback<MouseEvent>
where
    F: Fn(&mut PricingSelection) + 'static,
{
    let selection = selection.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*selection).clone();
        change(&mut next);
        selection.set(next);
    })
}

#[function_component(PricingCalculator)]
pub fn pricing_calculator() -> Html {
    let selection = use_state(PricingSelection::default);
    let show_quote = use_state(|| false);

    let project_cards = ProjectType::ALL.iter().map(|&project_type| {
        let selected = selection.project_type == project_type;
        html! {
            <button
                class={classes!("choice-card", selected.then(|| "selected"))}
                onclick={edit(&selection, move |s| s.project_type = project_type)}
            >
                <div class="choice-head">
                    {icon(project_type.icon())}
                    <span class="choice-title">{project_type.name()}</span>
                    <span class="choice-price">{format!("from {}", format_usd(u64::from(project_type.base_price())))}</span>
                </div>
                <p>{project_type.description()}</p>
                <ul class="included">
                    { for project_type.included().iter().map(|item| html! { <li>{icon(Icon::Check)}{" "}{*item}</li> }) }
                </ul>
            </button>
        }
    });

    let feature_cards = Feature::ALL.iter().map(|&feature| {
        let selected = selection.has_feature(feature);
        html! {
            <button
                class={classes!("feature-card", selected.then(|| "selected"))}
                onclick={edit(&selection, move |s| s.toggle_feature(feature))}
            >
                <span class="feature-icon-sm">{icon(feature.icon())}</span>
                <span class="feature-text">
                    <strong>{feature.name()}</strong>
                    <small>{feature.description()}</small>
                    <span class="feature-category">{feature.category().label()}</span>
                </span>
                <span class="feature-price">{format!("+{}", format_usd(u64::from(feature.price())))}</span>
            </button>
        }
    });

    let timeline_cards = Timeline::ALL.iter().map(|&timeline| {
        let selected = selection.timeline == timeline;
        html! {
            <button
                class={classes!("timeline-card", selected.then(|| "selected"))}
                onclick={edit(&selection, move |s| s.timeline = timeline)}
            >
                <strong>{timeline.name()}</strong>
                <small>{format!("{} weeks", timeline.weeks())}</small>
                <small>{timeline.description()}</small>
                if let Some(label) = timeline.adjustment_label() {
                    <span class="adjust">{label}</span>
                }
            </button>
        }
    });

    let team = selection.team_size;
    let breakdown = selection.breakdown();

    let open_quote = {
        let show_quote = show_quote.clone();
        Callback::from(move |_: MouseEvent| show_quote.set(true))
    };
    let close_quote = {
        let show_quote = show_quote.clone();
        Callback::from(move |_: ()| show_quote.set(false))
    };

    html! {
        <section id="pricing" class="pricing">
            <div class="section-header">
                <span class="section-eyebrow">{icon(Icon::Calculator)}{" Pricing Calculator"}</span>
                <h2>{"Estimate Your Project"}</h2>
                <p>{"Pick a project type, add features and see your estimate update instantly."}</p>
            </div>

            <div class="pricing-layout">
                <div class="pricing-options">
                    <h3>{"1. Project Type"}</h3>
                    <div class="choice-grid">{ for project_cards }</div>

                    <h3>{"2. Features"}</h3>
                    <div class="feature-grid">{ for feature_cards }</div>

                    <h3>{icon(Icon::Clock)}{" 3. Timeline"}</h3>
                    <div class="timeline-grid">{ for timeline_cards }</div>

                    <h3>{icon(Icon::Users)}{" 4. Team Size"}</h3>
                    <div class="stepper">
                        <button
                            class="round-btn"
                            disabled={team.get() <= MIN_TEAM_SIZE}
                            onclick={edit(&selection, |s| s.team_size = s.team_size.decrement())}
                            aria-label="Fewer developers"
                        >
                            {icon(Icon::Minus)}
                        </button>
                        <span class="stepper-value">{format!("{} developers", team.get())}</span>
                        <button
                            class="round-btn"
                            disabled={team.get() >= MAX_TEAM_SIZE}
                            onclick={edit(&selection, |s| s.team_size = s.team_size.increment())}
                            aria-label="More developers"
                        >
                            {icon(Icon::Plus)}
                        </button>
                        if let Some(label) = team.adjustment_label() {
                            <span class="adjust">{label}</span>
                        }
                    </div>
                </div>

                <aside class="price-summary">
                    <h3>{icon(Icon::Dollar)}{" Estimate"}</h3>
                    <div class="summary-line">
                        <span>{breakdown.base.0}</span>
                        <span>{format_usd(u64::from(breakdown.base.1))}</span>
                    </div>
                    { for breakdown.features.iter().map(|(name, price)| html! {
                        <div class="summary-line muted">
                            <span>{*name}</span>
                            <span>{format!("+{}", format_usd(u64::from(*price)))}</span>
                        </div>
                    }) }
                    if let Some(adjust) = &breakdown.timeline_adjustment {
                        <div class="summary-line muted">
                            <span>{"Timeline adjustment"}</span>
                            <span>{adjust}</span>
                        </div>
                    }
                    if let Some(adjust) = &breakdown.team_adjustment {
                        <div class="summary-line muted">
                            <span>{"Team size adjustment"}</span>
                            <span>{adjust}</span>
                        </div>
                    }
                    <div class="summary-total">
                        <span>{"Total"}</span>
                        <span>{format_usd(breakdown.total)}</span>
                    </div>
                    <p class="summary-weeks">{icon(Icon::Calendar)}{format!(" Estimated delivery: {} weeks", breakdown.weeks)}</p>
                    <button class="btn-primary wide" onclick={open_quote}>{"Get Custom Quote"}</button>
                    <p class="summary-note">{"Final pricing may vary based on detailed requirements."}</p>
                </aside>
            </div>

            if *show_quote {
                <QuoteModal selection={(*selection).clone()} on_close={close_quote} />
            }

            <style>
                {r#"
                .pricing {
                    padding: 6rem 1.5rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .pricing-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }
                .pricing-options h3 {
                    margin: 2rem 0 1rem;
                    color: #111827;
                }
                .choice-grid, .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1rem;
                }
                .timeline-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.75rem;
                }
                .choice-card, .feature-card, .timeline-card {
                    text-align: left;
                    background: white;
                    border: 2px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 1.1rem;
                    cursor: pointer;
                    font: inherit;
                    transition: border-color 0.2s, box-shadow 0.2s;
                }
                .choice-card.selected, .feature-card.selected, .timeline-card.selected {
                    border-color: #8b5cf6;
                    box-shadow: 0 8px 24px rgba(139, 92, 246, 0.18);
                    background: #faf5ff;
                }
                .choice-head {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .choice-title {
                    font-weight: 600;
                    flex: 1;
                }
                .choice-price, .feature-price {
                    color: #7c3aed;
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .included {
                    list-style: none;
                    padding: 0;
                    margin: 0.5rem 0 0;
                    color: #4b5563;
                    font-size: 0.85rem;
                }
                .feature-card {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .feature-text {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }
                .feature-category {
                    margin-top: 0.3rem;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #a78bfa;
                }
                .feature-text small, .timeline-card small {
                    color: #6b7280;
                }
                .timeline-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .adjust {
                    color: #ea580c;
                    font-weight: 600;
                    font-size: 0.85rem;
                }
                .stepper {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .stepper-value {
                    font-weight: 600;
                    min-width: 8rem;
                    text-align: center;
                }
                .price-summary {
                    position: sticky;
                    top: 6rem;
                    background: white;
                    border-radius: 1.5rem;
                    padding: 1.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .summary-line {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
                }
                .summary-line.muted {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .summary-total {
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #e5e7eb;
                    margin-top: 0.75rem;
                    padding-top: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #7c3aed;
                }
                .summary-weeks, .summary-note {
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .btn-primary.wide {
                    width: 100%;
                    margin-top: 1rem;
                }
                @media (max-width: 900px) {
                    .pricing-layout { grid-template-columns: 1fr; }
                    .timeline-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
