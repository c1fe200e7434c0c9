use contracts::Athlete;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::api::fetch_athletes;
use crate::shared::components::stat_card::format_count;
use crate::shared::components::StatCard;

#[component]
pub fn AthleteProfilePage() -> impl IntoView {
    let params = use_params_map();
    let (athlete, set_athlete) = signal::<Option<Athlete>>(None);
    let (loading, set_loading) = signal(true);

    // The route id is fixed for this page instance; look it up in the
    // listing once (the service has no per-athlete endpoint).
    let id = params.get_untracked().get("id").unwrap_or_default();
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_athletes(None).await {
            Ok(athletes) => {
                set_athlete.set(athletes.into_iter().find(|a| a.id == id));
            }
            Err(e) => log::warn!("athlete lookup failed: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <Show when=move || loading.get()>
            <p class="muted">"Loading profile..."</p>
        </Show>
        {move || {
            if loading.get() {
                return None;
            }
            Some(
                match athlete.get() {
                    Some(a) => {
                        view! {
                            <section class="profile-hero">
                                <div class="athlete-card__avatar profile-hero__avatar">
                                    {a.initials.clone()}
                                </div>
                                <div>
                                    <h1>{a.name.clone()}</h1>
                                    <p class="muted">
                                        {a.sport.clone()} " · " {a.location.clone()}
                                    </p>
                                </div>
                            </section>
                            <section class="stats-strip">
                                <StatCard value=format_count(a.stats.events) label="Events" />
                                <StatCard
                                    value=format_count(a.stats.followers)
                                    label="Followers"
                                />
                                <StatCard
                                    value=format_count(a.stats.communities)
                                    label="Communities"
                                />
                            </section>
                            <section class="content-section">
                                <h2>"About"</h2>
                                <p>{a.bio.clone()}</p>
                            </section>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <section class="content-section">
                                <h1>"Athlete not found"</h1>
                                <p>
                                    "This profile does not exist or is no longer public. "
                                    <a href="/community">"Browse the community"</a>
                                </p>
                            </section>
                        }
                            .into_any()
                    }
                },
            )
        }}
    }
}
