use std::time::Duration;

use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
};

use crate::{
    contact::{ContactForm, Field, MailtoRequest, Notification, Submission},
    profile::SITE_PROFILE,
    sections::Section,
};

const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[component]
pub fn ContactSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let settings = &SITE_PROFILE.contact;
    let form = RwSignal::new(ContactForm::new());
    let (notice, set_notice) = signal(None::<Notification>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let res = form.try_update(|f| f.submit(&settings.mode));
        match res {
            Some(Ok(Submission::Notified(n))) => {
                set_notice.set(Some(n));
                set_timeout(move || set_notice.set(None), NOTICE_TIMEOUT);
            }
            Some(Ok(Submission::Compose(request))) => open_mail_client(&request),
            // errors are already stored on the form
            Some(Err(_)) | None => {}
        }
    };

    view! {
        <section id=Section::Contact.id() node_ref=node_ref class="py-20">
            <h2 class="text-3xl font-semibold text-gray-900 mb-8 text-center">
                {settings.heading.as_str()}
            </h2>
            <p class="text-lg text-gray-700 text-center mb-12">{settings.intro.as_str()}</p>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! {
                            <div
                                role="status"
                                class="max-w-lg mx-auto mb-6 p-4 rounded-md border border-green-300 bg-green-50"
                            >
                                <p class="font-medium text-gray-900">{n.title}</p>
                                <p class="text-sm text-gray-700">{n.description}</p>
                            </div>
                        }
                    })
            }}
            <form on:submit=on_submit novalidate class="max-w-lg mx-auto space-y-6">
                <FormField form field=Field::Name placeholder="Your Name" />
                <FormField form field=Field::Email placeholder="you@example.com" />
                <FormField
                    form
                    field=Field::Message
                    placeholder="Your message, at least 10 characters"
                />
                <button
                    type="submit"
                    disabled=move || !form.with(ContactForm::is_submittable)
                    aria-label="Send Message"
                    class="w-full bg-gray-900 hover:bg-gray-800 text-white font-medium py-3 rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    "Send Message"
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    let id = field.as_str();
    let error_id = format!("{id}-error");
    let has_error = move || form.with(|f| f.error(field).is_some());
    let class = move || {
        if has_error() {
            "w-full px-3 py-2 rounded-md border border-red-500 focus:ring-2 focus:ring-blue-500"
        } else {
            "w-full px-3 py-2 rounded-md border border-gray-300 focus:ring-2 focus:ring-blue-500"
        }
    };
    let input_type = if field == Field::Email { "email" } else { "text" };
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(field, text));
    };

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=id
                rows="4"
                placeholder=placeholder
                required
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                class=move || format!("{} resize-none", class())
                prop:value=value
                on:input=on_input
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                class=class
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-900 mb-2">
                {format!("{} *", field.label())}
            </label>
            {control}
            {move || {
                form.with(|f| f.error(field))
                    .map(|err| {
                        view! {
                            <p id=error_id.clone() class="text-red-500 text-sm mt-1">
                                {err.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

fn open_mail_client(request: &MailtoRequest) {
    if let Err(e) = window().location().set_href(&request.to_url()) {
        log::error!("couldn't open mail client: {e:?}");
    }
}
