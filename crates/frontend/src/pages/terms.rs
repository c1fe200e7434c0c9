use leptos::prelude::*;

use crate::shared::components::PageHeader;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Your account",
        "You are responsible for the accuracy of your profile and for keeping your \
         sign-in credentials private. One account per person.",
    ),
    (
        "Community conduct",
        "Harassment, result manipulation and impersonation lead to removal. Organizers \
         set additional rules per event.",
    ),
    (
        "Events and payments",
        "Paid registrations are contracts between you and the organizer; UinSports \
         processes the payment and holds the organizer to the published refund policy.",
    ),
    (
        "Liability",
        "Sport carries inherent risk. Participation in events found through the \
         platform is at your own responsibility.",
    ),
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageHeader title="Terms of service" subtitle="Last updated March 2026." />

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
