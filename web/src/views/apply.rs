use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{
    AcademicPeriod, ApiStatus, ApplicationRequest, Bank, DocumentType, Program, University,
};
use thaw::*;

use crate::components::LoadingView;
use crate::server::{
    get_active_period, get_banks, get_document_types, get_program, get_universities,
    submit_admission_application,
};

#[component]
pub fn ApplyPage() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();
    let program_uuid = move || params.get().get("uuid").unwrap_or_default();

    let form_resource = Resource::new(program_uuid, |uuid| async move {
        if uuid.is_empty() {
            return None;
        }
        let program = get_program(uuid).await.ok()?;
        let period = get_active_period().await.ok()?;
        let universities = get_universities().await.unwrap_or_default();
        let banks = get_banks().await.unwrap_or_default();
        let document_types = get_document_types().await.unwrap_or_default();
        Some((program, period, universities, banks, document_types))
    });

    view! {
        <div class="apply-page">
            <Suspense fallback=move || view! { <LoadingView message=None/> }>
                {move || {
                    match form_resource.get() {
                        None => view! { <LoadingView message=None/> }.into_any(),
                        Some(None) => view! {
                            <div class="apply-not-found">
                                <h1>"Program not found"</h1>
                                <p>"The program you are trying to apply to does not exist or is no longer open."</p>
                                <a href="/">"Back to the program catalog"</a>
                            </div>
                        }.into_any(),
                        Some(Some((program, period, universities, banks, document_types))) => view! {
                            <RegistrationForm
                                program
                                period
                                universities
                                banks
                                document_types
                            />
                        }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn RegistrationForm(
    program: Program,
    period: AcademicPeriod,
    universities: Vec<University>,
    banks: Vec<Bank>,
    document_types: Vec<DocumentType>,
) -> impl IntoView {
    // Contact and identity fields
    let document_type = RwSignal::new(String::new());
    let document_number = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    // Background and payment fields
    let university_id = RwSignal::new(String::new());
    let undergraduate_major = RwSignal::new(String::new());
    let bank = RwSignal::new(String::new());

    // Invoice block
    let with_invoice = RwSignal::new(false);
    let ruc_number = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let business_address = RwSignal::new(String::new());

    // Submission state
    let is_submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let submission_error = RwSignal::new(Option::<String>::None);
    let validation_errors = RwSignal::new(Option::<HashMap<String, Vec<String>>>::None);

    let field_error = move |field: &'static str| {
        validation_errors
            .get()
            .and_then(|errors| errors.get(field).and_then(|messages| messages.first().cloned()))
    };

    let is_form_valid = move || {
        let base = !document_type.get().trim().is_empty()
            && !document_number.get().trim().is_empty()
            && !first_name.get().trim().is_empty()
            && !last_name.get().trim().is_empty()
            && !birth_date.get().trim().is_empty()
            && email.get().contains('@')
            && !phone.get().trim().is_empty()
            && !university_id.get().trim().is_empty()
            && !undergraduate_major.get().trim().is_empty()
            && !bank.get().trim().is_empty();
        if with_invoice.get() {
            base && ruc_number.get().trim().len() == 11
                && !business_name.get().trim().is_empty()
        } else {
            base
        }
    };

    let is_button_disabled = Memo::new(move |_| !is_form_valid() || is_submitting.get());

    let program_id = program.id;
    let period_id = period.id;

    let handle_submit = move || {
        is_submitting.set(true);
        submission_error.set(None);
        validation_errors.set(None);

        let application = ApplicationRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            personal_email: email.get(),
            phones: phone.get().trim().replace(' ', ""),
            document_type: document_type.get(),
            document_number: document_number.get(),
            program_id,
            academic_period_id: period_id,
            payment_order_bank: bank.get(),
            birth_date: birth_date.get(),
            university_id: university_id.get().parse::<i64>().unwrap_or_default(),
            undergraduate_major: undergraduate_major.get(),
            with_invoice: with_invoice.get(),
            ruc_number: optional(ruc_number.get()),
            business_name: optional(business_name.get()),
            business_address: optional(business_address.get()),
            registered_address: None,
        };

        spawn_local(async move {
            match submit_admission_application(application).await {
                Ok(response) => {
                    if response.status == ApiStatus::Success {
                        submitted.set(true);
                    } else {
                        if response.is_duplicate_applicant() {
                            submission_error.set(Some(
                                "This applicant is already registered. Please check the document number and email you entered.".to_string(),
                            ));
                        } else {
                            submission_error.set(Some(response.message.clone()));
                        }
                        validation_errors.set(response.errors);
                    }
                }
                Err(e) => {
                    submission_error.set(Some(format!(
                        "Could not reach the admission server: {}. Please try again.",
                        e
                    )));
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="apply-card">
            <div class="apply-header">
                <h1>"Application Form"</h1>
                <p class="apply-header-program">{program.name.clone()}</p>
                <p class="apply-header-period">"Admission period: " {period.name.clone()}</p>
            </div>

            {move || {
                if submitted.get() {
                    view! {
                        <div class="apply-success">
                            <div class="apply-success-icon">"\u{2713}"</div>
                            <h2>"Application submitted"</h2>
                            <p>
                                "Your application was received. Sign in with the credentials sent to your email to upload your documents."
                            </p>
                            <a href="/login">"Go to sign in"</a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <form class="apply-form" on:submit=move |ev| {
                            ev.prevent_default();
                            if is_form_valid() {
                                handle_submit();
                            }
                        }>
                            {move || {
                                submission_error.get().map(|msg| view! {
                                    <div class="apply-error">
                                        <MessageBar intent=MessageBarIntent::Error>
                                            {msg}
                                        </MessageBar>
                                    </div>
                                })
                            }}

                            <div class="form-section">
                                <h3>"Identity"</h3>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="document-type">"Document type *"</label>
                                        <select
                                            id="document-type"
                                            on:change=move |ev| document_type.set(event_target_value(&ev))
                                        >
                                            <option value="">"Select a document type"</option>
                                            {document_types.iter().map(|kind| {
                                                let value = kind.id.clone();
                                                let selected_value = kind.id.clone();
                                                view! {
                                                    <option
                                                        value=value
                                                        selected=move || document_type.get() == selected_value
                                                    >
                                                        {kind.name.clone()}
                                                    </option>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </select>
                                        <FieldError message=Signal::derive(move || field_error("document_type"))/>
                                    </div>
                                    <div class="form-group">
                                        <label for="document-number">"Document number *"</label>
                                        <Input
                                            id="document-number"
                                            placeholder="12345678"
                                            value=document_number
                                        />
                                        <FieldError message=Signal::derive(move || field_error("document_number"))/>
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="first-name">"First names *"</label>
                                        <Input id="first-name" value=first_name/>
                                        <FieldError message=Signal::derive(move || field_error("first_name"))/>
                                    </div>
                                    <div class="form-group">
                                        <label for="last-name">"Last names *"</label>
                                        <Input id="last-name" value=last_name/>
                                        <FieldError message=Signal::derive(move || field_error("last_name"))/>
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="birth-date">"Birth date *"</label>
                                        <Input
                                            id="birth-date"
                                            input_type=InputType::Date
                                            value=birth_date
                                        />
                                        <FieldError message=Signal::derive(move || field_error("birth_date"))/>
                                    </div>
                                </div>
                            </div>

                            <div class="form-section">
                                <h3>"Contact"</h3>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="email">"Personal email *"</label>
                                        <Input
                                            id="email"
                                            input_type=InputType::Email
                                            placeholder="you@example.com"
                                            value=email
                                        />
                                        <FieldError message=Signal::derive(move || field_error("personal_email"))/>
                                    </div>
                                    <div class="form-group">
                                        <label for="phone">"Mobile phone *"</label>
                                        <Input
                                            id="phone"
                                            input_type=InputType::Tel
                                            placeholder="987 654 321"
                                            value=phone
                                        />
                                        <FieldError message=Signal::derive(move || field_error("phones"))/>
                                    </div>
                                </div>
                            </div>

                            <div class="form-section">
                                <h3>"Academic background"</h3>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="university">"University of origin *"</label>
                                        <select
                                            id="university"
                                            on:change=move |ev| university_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Select your university"</option>
                                            {universities.iter().map(|university| {
                                                let value = university.id.to_string();
                                                let selected_value = university.id.to_string();
                                                view! {
                                                    <option
                                                        value=value
                                                        selected=move || university_id.get() == selected_value
                                                    >
                                                        {university.name.clone()}
                                                    </option>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </select>
                                        <FieldError message=Signal::derive(move || field_error("university_id"))/>
                                    </div>
                                    <div class="form-group">
                                        <label for="major">"Undergraduate major *"</label>
                                        <Input id="major" value=undergraduate_major/>
                                        <FieldError message=Signal::derive(move || field_error("undergraduate_major"))/>
                                    </div>
                                </div>
                            </div>

                            <div class="form-section">
                                <h3>"Payment"</h3>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="bank">"Bank for the payment order *"</label>
                                        <select
                                            id="bank"
                                            on:change=move |ev| bank.set(event_target_value(&ev))
                                        >
                                            <option value="">"Select a bank"</option>
                                            {banks.iter().map(|entry| {
                                                let value = entry.name.clone();
                                                let selected_value = entry.name.clone();
                                                view! {
                                                    <option
                                                        value=value
                                                        selected=move || bank.get() == selected_value
                                                    >
                                                        {entry.name.clone()}
                                                    </option>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </select>
                                        <FieldError message=Signal::derive(move || field_error("payment_order_bank"))/>
                                    </div>
                                </div>

                                <div class="form-group form-group-inline">
                                    <label class="invoice-toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || with_invoice.get()
                                            on:change=move |ev| with_invoice.set(event_target_checked(&ev))
                                        />
                                        " I need an invoice (RUC)"
                                    </label>
                                </div>

                                {move || {
                                    with_invoice.get().then(|| view! {
                                        <div class="form-row invoice-block">
                                            <div class="form-group">
                                                <label for="ruc">"RUC (11 digits) *"</label>
                                                <Input id="ruc" value=ruc_number/>
                                                <FieldError message=Signal::derive(move || field_error("ruc_number"))/>
                                            </div>
                                            <div class="form-group">
                                                <label for="business-name">"Business name *"</label>
                                                <Input id="business-name" value=business_name/>
                                                <FieldError message=Signal::derive(move || field_error("business_name"))/>
                                            </div>
                                            <div class="form-group">
                                                <label for="business-address">"Business address"</label>
                                                <Input id="business-address" value=business_address/>
                                            </div>
                                        </div>
                                    })
                                }}
                            </div>

                            <div class="apply-actions">
                                <Button
                                    button_type=ButtonType::Submit
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::from(is_button_disabled)
                                    loading=is_submitting
                                >
                                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Application" }}
                                </Button>
                            </div>
                        </form>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|text| view! {
                <p class="field-error">{text}</p>
            })
        }}
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
