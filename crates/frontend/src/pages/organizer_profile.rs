use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatCard};

/// Placeholder organizer profile shown while organizer accounts are in
/// closed beta.
#[component]
pub fn OrganizerProfilePage() -> impl IntoView {
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
            title="Rotterdam Court Kings"
            subtitle="Organizer · basketball · 3x3 and 5x5"
        />

        <section class="stats-strip">
            <StatCard value="48" label="Events hosted" />
            <StatCard value="1 250" label="Participants" />
            <StatCard value="4.8" label="Average rating" />
        </section>

        <section class="card breakdown-card">
            <div class="tabs" role="tablist">
                <button class=move || tab_class(0) on:click=move |_| set_tab.set(0)>
                    "Upcoming"
                </button>
                <button class=move || tab_class(1) on:click=move |_| set_tab.set(1)>
                    "Past events"
                </button>
            </div>
            <Show
                when=move || tab.get() == 0
                fallback=|| {
                    view! {
                        <p class="muted">
                            "Past event archives open with the public organizer launch."
                        </p>
                    }
                }
            >
                <p class="muted">"No upcoming events published yet."</p>
            </Show>
        </section>
    }
}
