use leptos::prelude::*;

use crate::shared::components::PageHeader;

struct ValueItem {
    title: &'static str,
    text: &'static str,
}

const VALUES: &[ValueItem] = &[
    ValueItem {
        title: "Sport is for everyone",
        text: "From weekend runners to semi-pro teams, every level of play deserves good \
               opponents and a fair field.",
    },
    ValueItem {
        title: "Community first",
        text: "We grow city by city with the clubs and organizers who already hold their \
               local scene together.",
    },
    ValueItem {
        title: "Athletes own their story",
        text: "Your results, your clips and your profile belong to you and move with you \
               between teams.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHeader
            title="About UinSports"
            subtitle="We are building the network layer for amateur and semi-pro sport."
        />

        <section class="content-section">
            <h2>"Why we started"</h2>
            <p>
                "Finding a team, a court and an opponent still runs on group chats and "
                "word of mouth. UinSports replaces that with one searchable network: "
                "athletes publish profiles, organizers publish events, and communities "
                "keep both connected between seasons."
            </p>
        </section>

        <section class="feature-grid">
            {VALUES
                .iter()
                .map(|value| {
                    view! {
                        <div class="card feature-card">
                            <h3 class="feature-card__title">{value.title}</h3>
                            <p class="feature-card__text">{value.text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="content-section">
            <h2>"Where we are"</h2>
            <p>
                "The platform is live in 14 cities with more than 40 sports represented. "
                "If your scene is missing, " <a href="/contact">"tell us"</a>
                " and we will help you bootstrap it."
            </p>
        </section>
    }
}
