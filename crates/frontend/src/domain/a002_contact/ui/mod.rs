use contracts::domain::a002_contact::message::ContactMessage;
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_contact::model;
use crate::shared::api::use_api;
use crate::shared::components::field_errors::FieldError;
use crate::shared::components::page_header::PageHeader;

/// Result of the last submission shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStatus {
    Sent,
    Failed(String),
}

#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    let api = use_api();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let status = RwSignal::new(None::<SendStatus>);
    let sending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(list) = msg.validate() {
            errors.set(list);
            return;
        }
        errors.set(Vec::new());
        status.set(None);
        sending.set(true);

        let api = api.clone();
        spawn_local(async move {
            match model::send_contact(&api, &msg).await {
                Ok(()) => {
                    status.set(Some(SendStatus::Sent));
                    for field in [name, email, subject, message] {
                        field.set(String::new());
                    }
                }
                Err(e) => status.set(Some(SendStatus::Failed(e.to_string()))),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="page contact">
            <PageHeader
                title="Contact Us"
                subtitle="Have a question or a story idea? Send us a message."
            />

            {move || status.get().map(|s| match s {
                SendStatus::Sent => view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>"Thank you! Your message has been sent."</div>
                    </MessageBar>
                }
                .into_any(),
                SendStatus::Failed(e) => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{format!("Failed to send message: {}", e)}</div>
                    </MessageBar>
                }
                .into_any(),
            })}

            <form class="contact__form" on:submit=submit>
                <div class="form-group">
                    <label>"Name"</label>
                    <Input value=name />
                    <FieldError errors=errors field="name" />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <Input value=email input_type=InputType::Email />
                    <FieldError errors=errors field="email" />
                </div>
                <div class="form-group">
                    <label>"Subject"</label>
                    <Input value=subject />
                    <FieldError errors=errors field="subject" />
                </div>
                <div class="form-group">
                    <label>"Message"</label>
                    <Textarea value=message />
                    <FieldError errors=errors field="message" />
                </div>
                <Button appearance=ButtonAppearance::Primary disabled=sending>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </Button>
            </form>
        </div>
    }
}
