use leptos::prelude::*;

use crate::shared::components::PageHeader;

struct OrganizerTool {
    title: &'static str,
    text: &'static str,
}

const TOOLS: &[OrganizerTool] = &[
    OrganizerTool {
        title: "Event publishing",
        text: "Post tournaments, leagues and open sessions; registrations land in one list.",
    },
    OrganizerTool {
        title: "Roster management",
        text: "Invite athletes from the network, track confirmations and fill last-minute spots.",
    },
    OrganizerTool {
        title: "Reach the right players",
        text: "Events surface to athletes by sport, level and distance, not by follower count.",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("1", "Create an organizer profile"),
    ("2", "Publish your first event"),
    ("3", "Confirm the roster and play"),
];

#[component]
pub fn OrganizersPage() -> impl IntoView {
    let (tab, set_tab) = signal(0usize);

    let tab_class = move |index: usize| {
        if tab.get() == index {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    view! {
        <PageHeader
            title="For organizers"
            subtitle="Clubs, leagues and venues run their events through UinSports."
        />

        <section class="feature-grid">
            {TOOLS
                .iter()
                .map(|tool| {
                    view! {
                        <div class="card feature-card">
                            <h3 class="feature-card__title">{tool.title}</h3>
                            <p class="feature-card__text">{tool.text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="card breakdown-card">
            <div class="tabs" role="tablist">
                <button class=move || tab_class(0) on:click=move |_| set_tab.set(0)>
                    "How it works"
                </button>
                <button class=move || tab_class(1) on:click=move |_| set_tab.set(1)>
                    "Pricing"
                </button>
            </div>
            <Show
                when=move || tab.get() == 0
                fallback=|| {
                    view! {
                        <p>
                            "Publishing community events is free. Ticketed events pay a flat "
                            "fee per registration; there are no monthly plans."
                        </p>
                    }
                }
            >
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(number, text)| {
                            view! {
                                <li class="steps__item">
                                    <span class="steps__number">{*number}</span>
                                    {*text}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </Show>
        </section>

        <section class="cta-section">
            <h2>"Ready to host?"</h2>
            <a class="button button--secondary" href="/contact">
                "Talk to the team"
            </a>
        </section>
    }
}
