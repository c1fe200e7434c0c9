use leptos::prelude::*;

use crate::shared::components::PageHeader;

/// Minimal pre-submit check; there is no submission backend, so this only
/// guards the local success state.
fn validate(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please enter your name.");
    }
    if !email.contains('@') || email.trim().len() < 3 {
        return Err("Please enter a valid email address.");
    }
    if message.trim().is_empty() {
        return Err("Please write a short message.");
    }
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (feedback, set_feedback) = signal::<Option<&'static str>>(None);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate(&name.get(), &email.get(), &message.get()) {
            Ok(()) => {
                log::info!("contact form submitted by {}", email.get_untracked());
                set_feedback.set(None);
                set_submitted.set(true);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(problem) => set_feedback.set(Some(problem)),
        }
    };

    view! {
        <PageHeader
            title="Contact us"
            subtitle="Questions, partnership ideas or a missing sport? Write to us."
        />

        <Show
            when=move || !submitted.get()
            fallback=|| {
                view! {
                    <div class="card contact-success">
                        <h2>"Thanks for reaching out!"</h2>
                        <p>"We read every message and usually reply within two working days."</p>
                    </div>
                }
            }
        >
            <form class="card contact-form" on:submit=on_submit>
                {move || {
                    feedback
                        .get()
                        .map(|problem| view! { <p class="error-message">{problem}</p> })
                }}
                <label class="contact-form__field">
                    "Name"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    "Email"
                    <input
                        class="input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__field">
                    "Message"
                    <textarea
                        class="input"
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="button button--secondary" type="submit">
                    "Send message"
                </button>
            </form>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        assert!(validate("Ana", "ana@example.com", "Hi there").is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(validate("", "ana@example.com", "Hi").is_err());
        assert!(validate("Ana", "ana@example.com", "   ").is_err());
    }

    #[test]
    fn test_email_needs_at_sign() {
        assert!(validate("Ana", "ana.example.com", "Hi").is_err());
        assert!(validate("Ana", "@", "Hi").is_err());
    }
}
