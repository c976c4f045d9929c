//! The complaint portal page: one centered card with the form, its
//! submit button and the outcome banners.

use leptos::prelude::*;

use crate::api;
use crate::form::{ComplaintForm, Field as FormField, SubmissionStatus};

#[component]
pub fn ComplaintPortal() -> impl IntoView {
    let form = RwSignal::new(ComplaintForm::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No payload means validation failed or a request is already in
        // flight; either way nothing goes out.
        let Some(request) = form.try_update(|f| f.try_begin_submit()).flatten() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::submit_complaint(&request).await;
            if let Err(message) = &outcome {
                log::error!("complaint submission failed: {}", message);
            }
            form.update(|f| f.resolve(outcome));
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow-md p-8">
                <h1 class="text-center text-2xl font-semibold text-gray-800 mb-1">
                    "Customer Complaint Portal"
                </h1>
                <p class="text-center text-sm text-gray-500 mb-6">
                    "We value your feedback — please tell us about your experience."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <Field label="Name">
                            <input
                                type="text"
                                class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:ring-2 focus:ring-indigo-200 focus:border-indigo-500"
                                placeholder="Full name"
                                prop:value=move || form.with(|f| f.state.name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Name, event_target_value(&ev)))
                                }
                            />
                        </Field>
                        <FieldError message=Signal::derive(move || form.with(|f| f.errors.name)) />
                    </div>

                    <div>
                        <Field label="Email">
                            <input
                                type="email"
                                class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:ring-2 focus:ring-indigo-200 focus:border-indigo-500"
                                placeholder="you@example.com"
                                prop:value=move || form.with(|f| f.state.email.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Email, event_target_value(&ev)))
                                }
                            />
                        </Field>
                        <FieldError message=Signal::derive(move || form.with(|f| f.errors.email)) />
                    </div>

                    <div>
                        <Field label="Complaint">
                            <textarea
                                rows="5"
                                class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:ring-2 focus:ring-indigo-200 focus:border-indigo-500"
                                placeholder="Describe your issue..."
                                prop:value=move || form.with(|f| f.state.complaint.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Complaint, event_target_value(&ev)))
                                }
                            ></textarea>
                        </Field>
                        <FieldError message=Signal::derive(move || form.with(|f| f.errors.complaint)) />
                    </div>

                    <div class="flex items-center justify-between">
                        <button
                            type="submit"
                            disabled=move || form.with(|f| f.is_loading())
                            class="inline-flex items-center px-4 py-2 bg-indigo-600 text-white rounded-md shadow hover:bg-indigo-700 disabled:opacity-60"
                        >
                            {move || if form.with(|f| f.is_loading()) {
                                view! {
                                    <svg class="animate-spin -ml-1 mr-2 h-5 w-5 text-white" fill="none" viewBox="0 0 24 24">
                                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
                                    </svg>
                                    "Sending..."
                                }.into_any()
                            } else {
                                view! { "Submit Complaint" }.into_any()
                            }}
                        </button>
                    </div>
                </form>

                <div class="mt-6">
                    {move || (form.with(|f| f.status) == SubmissionStatus::Success).then(|| view! {
                        <div class="rounded-md bg-green-50 p-3 text-green-800 text-sm">
                            "Thanks — your complaint has been submitted. We'll follow up if needed."
                        </div>
                    })}

                    {move || form
                        .with(|f| (f.status == SubmissionStatus::Error).then(|| f.error_message.clone()))
                        .map(|message| view! {
                            <div class="rounded-md bg-red-50 p-3 text-red-800 text-sm">
                                "There was a problem sending your complaint: " {message}
                            </div>
                        })}
                </div>

                <div class="mt-4 text-xs text-gray-400 text-center">
                    "Powered by your API Gateway endpoint"
                </div>
            </div>
        </div>
    }
}

/// Label wrapper shared by the three inputs.
#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-gray-700">
            <div class="mb-1">{label}</div>
            {children()}
        </label>
    }
}

/// Inline message under a field, rendered only while the field is failing.
#[component]
fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <p class="mt-1 text-sm text-red-600">{text}</p>
            }
        })
    }
}
