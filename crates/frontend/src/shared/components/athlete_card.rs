use contracts::Athlete;
use leptos::prelude::*;

use super::stat_card::format_count;

/// Profile card for the athlete grids. Links to the athlete's profile page.
#[component]
pub fn AthleteCard(athlete: Athlete) -> impl IntoView {
    let href = format!("/athletes/{}", athlete.id);

    view! {
        <a class="athlete-card" href=href>
            <div class="athlete-card__avatar">{athlete.initials.clone()}</div>
            <div class="athlete-card__name">{athlete.name.clone()}</div>
            <div class="athlete-card__meta">
                <span class="chip">{athlete.sport.clone()}</span>
                <span class="athlete-card__location">{athlete.location.clone()}</span>
            </div>
            <div class="athlete-card__stats">
                <span>{format_count(athlete.stats.events)} " events"</span>
                <span>{format_count(athlete.stats.followers)} " followers"</span>
            </div>
        </a>
    }
}
