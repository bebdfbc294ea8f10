use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::data::icons::{icon, Icon};
use crate::data::site::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::inquiry::form::{Attachment, BudgetRange, DeliveryWindow, Field, ServiceId, TextField};
use crate::inquiry::submit::{SubmissionError, Submitter};
use crate::inquiry::wizard::{step_title, InquiryWizard, Phase, TOTAL_STEPS};

pub enum ContactFormMsg {
    ToggleService(ServiceId),
    SelectPrimary(ServiceId),
    SetBudget(BudgetRange),
    SetTimeline(DeliveryWindow),
    SetText(TextField, String),
    FilesPicked(Vec<Attachment>),
    RemoveFile(usize),
    Next,
    Back,
    Submit,
    Submitted(Result<(), SubmissionError>),
    Reset,
}

pub struct ContactForm {
    wizard: InquiryWizard,
    submitter: Submitter,
}

/// Reads name, size and type off the picked files and clears the input so the
/// same file can be picked again.
fn picked_files(input: &HtmlInputElement) -> Vec<Attachment> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let files = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| Attachment {
            name: file.name(),
            size_bytes: file.size() as u64,
            content_type: file.type_(),
        })
        .collect();
    input.set_value("");
    files
}

impl ContactForm {
    fn error(&self, field: Field) -> Html {
        match self.wizard.errors().get(field) {
            Some(message) => html! { <p class="field-error">{icon(Icon::Alert)}{" "}{message}</p> },
            None => html! {},
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: TextField, label: &str, kind: &str, placeholder: &str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            ContactFormMsg::SetText(field, value)
        });
        let invalid = self.wizard.errors().has(field.into());
        html! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    name={Field::from(field).key()}
                    type={kind.to_string()}
                    class={classes!(invalid.then(|| "invalid"))}
                    placeholder={placeholder.to_string()}
                    value={self.wizard.form().text(field).to_string()}
                    {oninput}
                />
                {self.error(field.into())}
            </div>
        }
    }

    fn text_area(&self, ctx: &Context<Self>, field: TextField, label: &str, placeholder: &str, rows: u32) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            ContactFormMsg::SetText(field, value)
        });
        let invalid = self.wizard.errors().has(field.into());
        html! {
            <div class="form-field">
                <label>{label}</label>
                <textarea
                    name={Field::from(field).key()}
                    class={classes!(invalid.then(|| "invalid"))}
                    rows={rows.to_string()}
                    placeholder={placeholder.to_string()}
                    value={self.wizard.form().text(field).to_string()}
                    {oninput}
                />
                {self.error(field.into())}
            </div>
        }
    }

    fn services_step(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        html! {
            <>
                <h3>{"Which services are you interested in?"}</h3>
                <div class="option-grid">
                    { for ServiceId::ALL.iter().map(|&service| {
                        let selected = form.is_selected(service);
                        let onclick = ctx.link().callback(move |_: MouseEvent| ContactFormMsg::ToggleService(service));
                        html! {
                            <button type="button" class={classes!("option-card", selected.then(|| "selected"))} {onclick}>
                                <span class="option-icon" style={format!("color: {}", service.accent())}>{icon(service.icon())}</span>
                                <strong>{service.name()}</strong>
                                <small>{service.description()}</small>
                            </button>
                        }
                    }) }
                </div>
                {self.error(Field::SelectedServices)}

                if !form.selected_services.is_empty() {
                    <h3>{"Which one matters most?"}</h3>
                    <div class="chip-row">
                        { for form.selected_services.iter().map(|&service| {
                            let primary = form.primary_service == Some(service);
                            let onclick = ctx.link().callback(move |_: MouseEvent| ContactFormMsg::SelectPrimary(service));
                            html! {
                                <button type="button" class={classes!("chip", primary.then(|| "selected"))} {onclick}>
                                    {service.name()}
                                </button>
                            }
                        }) }
                    </div>
                }
                {self.error(Field::PrimaryService)}
            </>
        }
    }

    fn details_step(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        html! {
            <>
                <h3>{icon(Icon::Dollar)}{" What's your budget range?"}</h3>
                <div class="chip-row">
                    { for BudgetRange::ALL.iter().map(|&budget| {
                        let onclick = ctx.link().callback(move |_: MouseEvent| ContactFormMsg::SetBudget(budget));
                        html! {
                            <button type="button" class={classes!("chip", (form.budget == Some(budget)).then(|| "selected"))} {onclick}>
                                {budget.label()}
                            </button>
                        }
                    }) }
                </div>
                {self.error(Field::Budget)}

                <h3>{icon(Icon::Clock)}{" When do you need it?"}</h3>
                <div class="chip-row">
                    { for DeliveryWindow::ALL.iter().map(|&window| {
                        let onclick = ctx.link().callback(move |_: MouseEvent| ContactFormMsg::SetTimeline(window));
                        html! {
                            <button type="button" class={classes!("chip", (form.timeline == Some(window)).then(|| "selected"))} {onclick}>
                                {window.label()}
                            </button>
                        }
                    }) }
                </div>
                {self.error(Field::Timeline)}
            </>
        }
    }

    fn contact_step(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="field-grid">
                {self.text_input(ctx, TextField::FirstName, "First Name *", "text", "John")}
                {self.text_input(ctx, TextField::LastName, "Last Name *", "text", "Doe")}
                {self.text_input(ctx, TextField::Email, "Email *", "email", "john@example.com")}
                {self.text_input(ctx, TextField::Phone, "Phone", "tel", "+1 (555) 000-0000")}
                {self.text_input(ctx, TextField::Company, "Company", "text", "Acme Inc.")}
                {self.text_input(ctx, TextField::Position, "Position", "text", "Product Manager")}
            </div>
        }
    }

    fn additional_step(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            ContactFormMsg::FilesPicked(picked_files(&input))
        });
        html! {
            <>
                {self.text_area(ctx, TextField::ProjectDescription, "Project Description *", "Tell us about your project, its features and requirements", 5)}
                {self.text_area(ctx, TextField::Goals, "Goals", "What do you want to achieve?", 3)}
                {self.text_area(ctx, TextField::TargetAudience, "Target Audience", "Who will use it?", 3)}
                {self.text_area(ctx, TextField::Inspiration, "Inspiration", "Links to sites or apps you like", 3)}

                <div class="form-field">
                    <label>{"Attachments"}</label>
                    <label class="upload-zone">
                        {icon(Icon::Upload)}
                        <span>{"Click to upload briefs, mockups or documents"}</span>
                        <small>{"Images, PDF, DOC, DOCX, TXT"}</small>
                        <input type="file" multiple={true} accept="image/*,.pdf,.doc,.docx,.txt" {onchange} />
                    </label>
                    <ul class="file-list">
                        { for self.wizard.form().files.iter().enumerate().map(|(i, file)| {
                            let onclick = ctx.link().callback(move |_: MouseEvent| ContactFormMsg::RemoveFile(i));
                            html! {
                                <li>
                                    <span>{&file.name}</span>
                                    <small>{file.size_label()}</small>
                                    <button type="button" class="file-remove" {onclick} aria-label="Remove file">{icon(Icon::Close)}</button>
                                </li>
                            }
                        }) }
                    </ul>
                    {self.error(Field::Files)}
                </div>
            </>
        }
    }

    fn review_step(&self) -> Html {
        let form = self.wizard.form();
        let services = form
            .selected_services
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ");
        let or_dash = |value: &str| if value.trim().is_empty() { "-".to_string() } else { value.to_string() };

        html! {
            <div class="review">
                <div class="review-block">
                    <h4>{"Services"}</h4>
                    <p>{services}</p>
                    <p>{"Primary: "}{form.primary_service.map(|s| s.name()).unwrap_or("-")}</p>
                </div>
                <div class="review-block">
                    <h4>{"Project"}</h4>
                    <p>{"Budget: "}{form.budget.map(|b| b.label()).unwrap_or("-")}</p>
                    <p>{"Timeline: "}{form.timeline.map(|t| t.label()).unwrap_or("-")}</p>
                </div>
                <div class="review-block">
                    <h4>{"Contact"}</h4>
                    <p>{form.full_name()}</p>
                    <p>{&form.email}</p>
                    <p>{or_dash(&form.phone)}</p>
                    <p>{or_dash(&form.company)}{" / "}{or_dash(&form.position)}</p>
                </div>
                <div class="review-block">
                    <h4>{"Details"}</h4>
                    <p>{&form.project_description}</p>
                    if !form.files.is_empty() {
                        <p>{format!("{} file(s) attached, {:.1} MB", form.files.len(), form.attachment_bytes() as f64 / (1024.0 * 1024.0))}</p>
                    }
                </div>
            </div>
        }
    }

    fn thank_you(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Reset);
        html! {
            <div class="thank-you">
                <div class="thank-you-icon">{icon(Icon::Check)}</div>
                <h3>{"Thank You!"}</h3>
                <p>{"Your project inquiry has been received. We'll review it and get back to you within 24 hours."}</p>
                <button class="btn-primary" {onclick}>{"Submit Another Project"}</button>
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: InquiryWizard::new(),
            submitter: Submitter::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::ToggleService(service) => self.wizard.toggle_service(service),
            ContactFormMsg::SelectPrimary(service) => {
                self.wizard.select_primary(service);
            }
            ContactFormMsg::SetBudget(budget) => self.wizard.set_budget(budget),
            ContactFormMsg::SetTimeline(timeline) => self.wizard.set_timeline(timeline),
            ContactFormMsg::SetText(field, value) => self.wizard.set_text(field, value),
            ContactFormMsg::FilesPicked(files) => self.wizard.add_files(files),
            ContactFormMsg::RemoveFile(index) => self.wizard.remove_file(index),
            ContactFormMsg::Next => {
                if !self.wizard.advance() {
                    log::info!("Step {} has {} invalid field(s)", self.wizard.step(), self.wizard.errors().fields().len());
                }
            }
            ContactFormMsg::Back => self.wizard.retreat(),
            ContactFormMsg::Submit => {
                let Some(payload) = self.wizard.begin_submit() else {
                    return true;
                };
                let submitter = self.submitter.clone();
                ctx.link().send_future(async move {
                    ContactFormMsg::Submitted(submitter.submit_inquiry(payload).await)
                });
            }
            ContactFormMsg::Submitted(result) => {
                match &result {
                    Ok(()) => log::info!("Inquiry submitted"),
                    Err(e) => log::error!("Inquiry submission failed: {}", e),
                }
                self.wizard.finish_submit(result);
            }
            ContactFormMsg::Reset => self.wizard.reset(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let phase = self.wizard.phase();
        let submitting = phase == Phase::Submitting;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let next = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Next);
        let back = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Back);

        let body = match step {
            1 => self.services_step(ctx),
            2 => self.details_step(ctx),
            3 => self.contact_step(ctx),
            4 => self.additional_step(ctx),
            _ => self.review_step(),
        };

        html! {
            <section id="contact" class="contact">
                <div class="section-header">
                    <span class="section-eyebrow">{"Start a Project"}</span>
                    <h2>{"Tell Us About Your Idea"}</h2>
                    <p>
                        {"Prefer to talk? Call "}
                        <a href={format!("tel:{}", CONTACT_PHONE)}>{CONTACT_PHONE}</a>
                        {" or email "}
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </p>
                </div>

                <div class="contact-card">
                    if phase == Phase::Submitted {
                        {self.thank_you(ctx)}
                    } else {
                        <>
                            <div class="progress">
                                { for (1..=TOTAL_STEPS).map(|n| html! {
                                    <div class={classes!("progress-dot", (n <= step).then(|| "done"))}>
                                        if n < step { {icon(Icon::Check)} } else { {n} }
                                    </div>
                                }) }
                            </div>
                            <p class="step-label">{format!("Step {} of {}: {}", step, TOTAL_STEPS, step_title(step))}</p>

                            if let Some(message) = self.wizard.submit_error() {
                                <div class="form-banner">
                                    {icon(Icon::Alert)}
                                    {format!(" We couldn't send your inquiry. {} Please try again.", message)}
                                </div>
                            }

                            <form {onsubmit}>
                                {body}

                                <div class="form-nav">
                                    if step > 1 {
                                        <button type="button" class="btn-secondary" onclick={back} disabled={submitting}>
                                            {icon(Icon::ArrowLeft)}{" Previous"}
                                        </button>
                                    }
                                    if self.wizard.is_last_step() {
                                        <button type="submit" class="btn-primary" disabled={submitting}>
                                            if submitting { {"Submitting..."} } else { {"Submit Project"} }
                                        </button>
                                    } else {
                                        <button type="button" class="btn-primary" onclick={next}>
                                            {"Next "}{icon(Icon::ArrowRight)}
                                        </button>
                                    }
                                </div>
                            </form>
                        </>
                    }
                </div>

                <style>
                    {r#"
                    .contact {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, #faf5ff, #eff6ff);
                    }
                    .contact-card {
                        max-width: 56rem;
                        margin: 0 auto;
                        background: white;
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.08);
                    }
                    .progress {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 1rem;
                    }
                    .progress-dot {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #e5e7eb;
                        color: #6b7280;
                        font-weight: 600;
                    }
                    .progress-dot.done {
                        background: linear-gradient(135deg, #9333ea, #2563eb);
                        color: white;
                    }
                    .step-label {
                        color: #6b7280;
                        margin-bottom: 1.5rem;
                    }
                    .option-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
                        gap: 1rem;
                    }
                    .option-card {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                        text-align: left;
                        padding: 1rem;
                        border: 2px solid #e5e7eb;
                        border-radius: 1rem;
                        background: white;
                        cursor: pointer;
                        font: inherit;
                    }
                    .option-card small {
                        color: #6b7280;
                    }
                    .option-card.selected, .chip.selected {
                        border-color: #8b5cf6;
                        background: #faf5ff;
                    }
                    .option-icon {
                        font-size: 1.5rem;
                    }
                    .chip-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.6rem;
                    }
                    .chip {
                        border: 2px solid #e5e7eb;
                        background: white;
                        padding: 0.55rem 1.1rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        font: inherit;
                    }
                    .field-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem 1.5rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        margin-bottom: 1rem;
                    }
                    .form-field label {
                        font-weight: 500;
                        color: #374151;
                    }
                    .form-field input, .form-field textarea {
                        border: 1px solid #d1d5db;
                        border-radius: 0.75rem;
                        padding: 0.7rem 0.9rem;
                        font: inherit;
                    }
                    .form-field .invalid {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #dc2626;
                        font-size: 0.85rem;
                        margin: 0.25rem 0 0;
                    }
                    .form-banner {
                        background: #fef2f2;
                        color: #b91c1c;
                        border: 1px solid #fecaca;
                        border-radius: 0.75rem;
                        padding: 0.8rem 1rem;
                        margin-bottom: 1rem;
                    }
                    .upload-zone {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.3rem;
                        border: 2px dashed #d1d5db;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        cursor: pointer;
                        color: #6b7280;
                    }
                    .upload-zone input {
                        display: none;
                    }
                    .file-list {
                        list-style: none;
                        padding: 0;
                        margin: 0.5rem 0 0;
                    }
                    .file-list li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        background: #f9fafb;
                        border-radius: 0.6rem;
                        margin-bottom: 0.4rem;
                    }
                    .file-list li span {
                        flex: 1;
                    }
                    .file-remove {
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #9ca3af;
                    }
                    .review {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .review-block {
                        background: #f9fafb;
                        border-radius: 1rem;
                        padding: 1rem 1.25rem;
                    }
                    .review-block h4 {
                        margin: 0 0 0.5rem;
                        color: #7c3aed;
                    }
                    .review-block p {
                        margin: 0.2rem 0;
                        color: #374151;
                        white-space: pre-wrap;
                    }
                    .form-nav {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 2rem;
                    }
                    .form-nav .btn-primary:only-child {
                        margin-left: auto;
                    }
                    .thank-you {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .thank-you-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        background: #dcfce7;
                        color: #16a34a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                    }
                    @media (max-width: 700px) {
                        .field-grid, .review { grid-template-columns: 1fr; }
                    }
                    "#}
                </style>
            </section>
        }
    }
}
