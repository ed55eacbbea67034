use gloo_timers::callback::Timeout;
use log::info;
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const CONFIRMATION_MS: u32 = 4_000;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("We need an email address to reply to.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Your message is empty.")]
    MissingMessage,
}

fn looks_like_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(AttrValue::from("Submit"))]
    pub submit_label: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let sent = use_state(|| false);
    // Dropping the handle cancels the pending timeout, so an unmount never fires it.
    let confirmation = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            if let Err(err) = submission.validate() {
                error.set(Some(err));
                return;
            }

            let payload = serde_json::to_string(&submission).unwrap_or_default();
            gloo_console::log!("Form submitted", payload);
            info!("contact form submitted by {}", submission.email);

            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            error.set(None);
            sent.set(true);

            let sent = sent.clone();
            *confirmation.borrow_mut() = Some(Timeout::new(CONFIRMATION_MS, move || sent.set(false)));
        })
    };

    html! {
        <form class="contact-form card" {onsubmit} novalidate={true}>
            { for props.title.iter().map(|title| html! { <h3>{ title.clone() }</h3> }) }
            <label for="contact-name">{"Name"}</label>
            <input type="text" id="contact-name" value={(*name).clone()} oninput={on_name} required={true} />
            <label for="contact-email">{"Email"}</label>
            <input type="email" id="contact-email" value={(*email).clone()} oninput={on_email} required={true} />
            <label for="contact-message">{"Message"}</label>
            <textarea id="contact-message" rows="4" value={(*message).clone()} oninput={on_message} required={true} />
            {
                if let Some(err) = &*error {
                    html! { <p class="form-error">{ err.to_string() }</p> }
                } else if *sent {
                    html! { <p class="form-success">{"Thanks! We'll get back to you soon."}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="cta-button primary wide">{ props.submit_label.clone() }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn complete_message_is_valid() {
        assert_eq!(message("Ada", "ada@iworld.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected_in_order() {
        assert_eq!(message("  ", "", "").validate(), Err(FormError::MissingName));
        assert_eq!(message("Ada", " ", "").validate(), Err(FormError::MissingEmail));
        assert_eq!(message("Ada", "ada@iworld.com", "\n").validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["ada", "ada@", "@iworld.com", "ada@iworld", "ada@.com", "ada@iworld.", "a da@iworld.com", "a@b@c.com"] {
            assert_eq!(message("Ada", bad, "Hi").validate(), Err(FormError::InvalidEmail), "{}", bad);
        }
    }
}
