use leptos::prelude::*;

use crate::shared::components::PageHeader;

const SECTIONS: &[(&str, &str)] = &[
    (
        "What we collect",
        "Account details you provide (name, email, sport preferences), content you \
         publish on your profile, and event registrations.",
    ),
    (
        "What we never do",
        "We do not sell personal data and we do not show your contact details to other \
         users without your consent.",
    ),
    (
        "Your controls",
        "You can export or delete your account at any time from the profile settings; \
         deletion removes your profile from search within 24 hours.",
    ),
    (
        "Cookies and local storage",
        "We use local storage for session preferences such as your display theme, and \
         functional cookies for sign-in. There is no third-party ad tracking.",
    ),
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageHeader title="Privacy policy" subtitle="Last updated March 2026." />

        {SECTIONS
            .iter()
            .map(|(title, body)| {
                view! {
                    <section class="content-section">
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </section>
                }
            })
            .collect_view()}
    }
}
