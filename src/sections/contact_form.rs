use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::reveal::FadeIn;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        for (field, value) in [(Field::Name, name), (Field::Email, email), (Field::Message, message)] {
            if value.is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }
        if !is_valid_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn field_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<ContactFormError>);
    let submitted = use_state(|| false);
    let focused = use_state(|| None::<Field>);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = |field: Field| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let Some(value) = field_value(&e) else {
                warn!("Contact field {:?} has no readable value", field);
                return;
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            error.set(None);
        })
    };
    let on_focus = |field: Field| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };
    let on_blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(submission) => {
                    info!("Contact form submitted by {}", submission.email);
                    match serde_json::to_string(&submission) {
                        Ok(json) => gloo_console::log!("Form submitted:", json),
                        Err(e) => warn!("Could not serialize contact submission: {}", e),
                    }
                    error.set(None);
                    submitted.set(true);
                    let submitted = submitted.clone();
                    *reset_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_SUCCESS_MILLIS, move || {
                        submitted.set(false);
                    }));
                }
                Err(e) => {
                    info!("Contact form rejected: {}", e);
                    error.set(Some(e));
                }
            }
        })
    };

    let field_class = |field: Field| classes!("contact-input", (*focused == Some(field)).then(|| "focused"));

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <FadeIn>
                    <div class="section-heading">
                        <h2 class="serif">{"Questions? We Care."}</h2>
                        <p>{"Your jewelry is in expert hands."}</p>
                    </div>
                </FadeIn>
                <FadeIn delay={0.15}>
                    <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                        <div>
                            <label for="name">{Field::Name.label()}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                class={field_class(Field::Name)}
                                placeholder="John Doe"
                                value={form.name.clone()}
                                oninput={on_input(Field::Name)}
                                onfocus={on_focus(Field::Name)}
                                onblur={on_blur.clone()}
                            />
                        </div>
                        <div>
                            <label for="email">{Field::Email.label()}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                class={field_class(Field::Email)}
                                placeholder="johndoe@gmail.com"
                                value={form.email.clone()}
                                oninput={on_input(Field::Email)}
                                onfocus={on_focus(Field::Email)}
                                onblur={on_blur.clone()}
                            />
                        </div>
                        <div>
                            <label for="message">{Field::Message.label()}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                class={field_class(Field::Message)}
                                placeholder="Your message..."
                                value={form.message.clone()}
                                oninput={on_input(Field::Message)}
                                onfocus={on_focus(Field::Message)}
                                onblur={on_blur}
                            />
                        </div>
                        {
                            if let Some(error) = &*error {
                                html! { <p class="contact-error">{error.to_string()}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="contact-submit">
                            {
                                if *submitted {
                                    html! {
                                        <span key="success" class="contact-submit-label">
                                            <svg class="contact-check" viewBox="0 0 20 20" fill="currentColor">
                                                <path fill-rule="evenodd" clip-rule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" />
                                            </svg>
                                            {"Sent!"}
                                        </span>
                                    }
                                } else {
                                    html! { <span key="submit" class="contact-submit-label">{"Submit"}</span> }
                                }
                            }
                        </button>
                    </form>
                </FadeIn>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 3rem 1rem;
                        background: #F7F9F6;
                    }
                    .contact-inner {
                        max-width: 32rem;
                        margin: 0 auto;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .contact-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        background: #E6EFEA;
                        color: #1F3D2B;
                        font: inherit;
                        border: 1px solid rgba(159, 211, 199, 0.4);
                        box-shadow: 0 2px 8px rgba(31, 61, 43, 0.04);
                        resize: none;
                        outline: none;
                        transition: transform 0.2s, box-shadow 0.2s, border-color 0.2s;
                    }
                    .contact-input::placeholder {
                        color: rgba(31, 61, 43, 0.4);
                    }
                    .contact-input.focused {
                        transform: scale(1.01);
                        border-color: rgba(46, 125, 90, 0.5);
                        box-shadow: 0 0 0 3px rgba(46, 125, 90, 0.15);
                    }
                    .contact-error {
                        margin: 0;
                        color: #B3261E;
                        font-size: 0.875rem;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #2E7D5A;
                        color: white;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                        overflow: hidden;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .contact-submit:hover {
                        transform: scale(1.02);
                        box-shadow: 0 10px 30px rgba(46, 125, 90, 0.3);
                    }
                    .contact-submit:active {
                        transform: scale(0.98);
                    }
                    .contact-submit-label {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        animation: slideUp 0.3s ease-out;
                    }
                    .contact-check {
                        width: 1.25rem;
                        height: 1.25rem;
                        animation: popIn 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    @keyframes slideUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm { name: name.into(), email: email.into(), message: message.into() }
    }

    #[test]
    fn accepts_a_complete_form_and_trims_it() {
        let submission = form("  Ada ", " ada@example.com ", " Does it fit a watch? ").validate().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Does it fit a watch?");
    }

    #[test]
    fn reports_the_first_missing_field() {
        assert_eq!(form("", "", "").validate(), Err(ContactFormError::MissingField(Field::Name)));
        assert_eq!(form("Ada", "   ", "hi").validate(), Err(ContactFormError::MissingField(Field::Email)));
        assert_eq!(form("Ada", "ada@example.com", "\n").validate(), Err(ContactFormError::MissingField(Field::Message)));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@example.", "a@b@c.com", "ada @example.com"] {
            assert_eq!(form("Ada", email, "hi").validate(), Err(ContactFormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn accepts_common_email_shapes() {
        for email in ["ada@example.com", "ada.lovelace+rings@mail.co.uk", "a@b.io"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(ContactFormError::MissingField(Field::Email).to_string(), "Email is required");
        assert_eq!(ContactFormError::InvalidEmail.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn submission_serializes_for_the_console() {
        let submission = form("Ada", "ada@example.com", "hi").validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["message"], "hi");
    }
}
