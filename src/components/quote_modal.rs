use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::QUOTE_ENDPOINT;
use crate::data::icons::{icon, Icon};
use crate::inquiry::submit::Submitter;
use crate::pricing::calculator::{format_usd, PricingSelection};
use crate::pricing::quote::{build_quote_request, QuoteDraft, QuoteField};

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    pub selection: PricingSelection,
    pub on_close: Callback<()>,
}

#[function_component(QuoteModal)]
pub fn quote_modal(props: &QuoteModalProps) -> Html {
    let draft = use_state(QuoteDraft::default);
    let field_errors = use_state(Vec::<(QuoteField, &'static str)>::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);
    let is_loading = use_state(|| false);

    let set_field = |field: QuoteField| {
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            };
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
            field_errors.set(field_errors.iter().copied().filter(|(f, _)| *f != field).collect());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let selection = props.selection.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let sent = sent.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            let request = match build_quote_request(&draft, &selection) {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };

            is_loading.set(true);
            error.set(None);
            let error = error.clone();
            let sent = sent.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                match Submitter::default().send(QUOTE_ENDPOINT, &request).await {
                    Ok(()) => {
                        log::info!("Quote request for {} sent", format_usd(request.estimated_total));
                        sent.set(true);
                    }
                    Err(e) => {
                        log::error!("Quote request failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let error_for = |field: QuoteField| {
        field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| html! { <p class="field-error">{*message}</p> })
    };

    let selection = &props.selection;

    html! {
        <div class="quote-backdrop" onclick={close.clone()}>
            <div class="quote-modal" onclick={stop}>
                <button class="quote-close" onclick={close.clone()} aria-label="Close">{icon(Icon::Close)}</button>

                if *sent {
                    <div class="quote-sent">
                        <div class="quote-sent-icon">{icon(Icon::Check)}</div>
                        <h3>{"Quote Request Sent!"}</h3>
                        <p>{"We'll get back to you within 24 hours with a detailed proposal."}</p>
                        <button class="btn-primary" onclick={close}>{"Close"}</button>
                    </div>
                } else {
                    <>
                        <h3>{"Get Your Custom Quote"}</h3>
                        <div class="quote-summary">
                            <div>
                                <span>{"Project"}</span>
                                <strong>{selection.project_type.name()}</strong>
                            </div>
                            <div>
                                <span>{"Features"}</span>
                                <strong>{selection.features.len()}</strong>
                            </div>
                            <div>
                                <span>{"Timeline"}</span>
                                <strong>{selection.timeline.name()}</strong>
                            </div>
                            <div>
                                <span>{"Estimate"}</span>
                                <strong>{format_usd(selection.total())}</strong>
                            </div>
                        </div>

                        if let Some(message) = &*error {
                            <div class="form-banner">{icon(Icon::Alert)}{" "}{message}</div>
                        }

                        <form {onsubmit} class="quote-form">
                            <div class="quote-row">
                                <div>
                                    <input type="text" placeholder="Full Name *" value={draft.full_name.clone()} oninput={set_field(QuoteField::FullName)} />
                                    {error_for(QuoteField::FullName)}
                                </div>
                                <div>
                                    <input type="email" placeholder="Email *" value={draft.email.clone()} oninput={set_field(QuoteField::Email)} />
                                    {error_for(QuoteField::Email)}
                                </div>
                            </div>
                            <div class="quote-row">
                                <input type="text" placeholder="Company" value={draft.company.clone()} oninput={set_field(QuoteField::Company)} />
                                <input type="tel" placeholder="Phone" value={draft.phone.clone()} oninput={set_field(QuoteField::Phone)} />
                            </div>
                            <textarea
                                rows="3"
                                placeholder="Tell us more about your project"
                                value={draft.description.clone()}
                                oninput={set_field(QuoteField::Description)}
                            />
                            <label class="quote-date">
                                {"Preferred start date"}
                                <input type="date" value={draft.start_date.clone()} oninput={set_field(QuoteField::StartDate)} />
                            </label>
                            {error_for(QuoteField::StartDate)}
                            <button type="submit" class="btn-primary" disabled={*is_loading}>
                                if *is_loading { {"Sending..."} } else { {"Request Quote"} }
                            </button>
                        </form>
                    </>
                }
            </div>
            <style>
                {r#"
                .quote-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(17, 24, 39, 0.6);
                    z-index: 110;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .quote-modal {
                    position: relative;
                    background: white;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    width: 100%;
                    max-width: 36rem;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .quote-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 1.2rem;
                }
                .quote-summary {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                    background: #f5f3ff;
                    border-radius: 1rem;
                    padding: 1rem;
                    margin: 1rem 0;
                }
                .quote-summary span {
                    display: block;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .quote-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                }
                .quote-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.9rem;
                }
                .quote-form input, .quote-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #d1d5db;
                    border-radius: 0.75rem;
                    padding: 0.7rem 0.9rem;
                    font: inherit;
                }
                .quote-date {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    color: #4b5563;
                    font-size: 0.9rem;
                }
                .quote-sent {
                    text-align: center;
                    padding: 1rem 0;
                }
                .quote-sent-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                }
                "#}
            </style>
        </div>
    }
}
