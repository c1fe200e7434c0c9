use contracts::{Athlete, AthleteFilter};
use leptos::prelude::*;

use crate::shared::api::fetch_athletes;
use crate::shared::components::{AthleteCard, StatCard};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Find your people",
        description: "Join communities around your sport, your city and your level.",
    },
    Feature {
        title: "Show what you can do",
        description: "A public athlete profile with your results, clips and upcoming events.",
    },
    Feature {
        title: "Compete more often",
        description: "Organizers post open tournaments and pick-up games every day.",
    },
    Feature {
        title: "Train together",
        description: "Match with athletes at your level for practice sessions near you.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (featured, set_featured) = signal::<Vec<Athlete>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_athletes(Some(&AthleteFilter::featured())).await {
            Ok(athletes) => {
                set_featured.set(athletes);
                set_error.set(None);
            }
            Err(e) => {
                log::warn!("featured athletes unavailable: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    view! {
        <section class="hero">
            <h1 class="hero__title">"Every athlete deserves a team"</h1>
            <p class="hero__subtitle">
                "UinSports connects athletes, teams and organizers in one place. "
                "Build your profile, find your community and never miss a game."
            </p>
            <div class="hero__actions">
                <a class="button button--secondary" href="/community">
                    "Explore the community"
                </a>
                <a class="button button--outlined" href="/about">
                    "How it works"
                </a>
            </div>
        </section>

        <section class="stats-strip">
            <StatCard value="12 000+" label="Registered athletes" />
            <StatCard value="40+" label="Sports covered" />
            <StatCard value="850" label="Events organized" />
            <StatCard value="127" label="Joined today" />
        </section>

        <section class="feature-grid">
            {FEATURES
                .iter()
                .map(|feature| {
                    view! {
                        <div class="card feature-card">
                            <h3 class="feature-card__title">{feature.title}</h3>
                            <p class="feature-card__text">{feature.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section class="featured-athletes">
            <h2>"Featured athletes"</h2>
            <Show when=move || loading.get()>
                <p class="muted">"Loading athletes..."</p>
            </Show>
            {move || {
                error
                    .get()
                    .map(|e| view! { <p class="error-message">{e}</p> })
            }}
            <div class="athlete-grid">
                {move || {
                    featured
                        .get()
                        .into_iter()
                        .map(|athlete| view! { <AthleteCard athlete=athlete /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
