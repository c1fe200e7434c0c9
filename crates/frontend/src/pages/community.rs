use contracts::{Athlete, BreakdownSlice, CommunityBreakdown};
use leptos::prelude::*;

use crate::shared::api::{fetch_athletes, fetch_communities};
use crate::shared::components::{AthleteCard, PageHeader};

/// Client-side narrowing of the fetched athlete list by the selected chips.
fn filter_athletes(athletes: &[Athlete], sport: Option<&str>, gender: Option<&str>) -> Vec<Athlete> {
    athletes
        .iter()
        .filter(|a| sport.map_or(true, |s| a.sport == s))
        .filter(|a| gender.map_or(true, |g| a.gender == g))
        .cloned()
        .collect()
}

/// Horizontal bar rows for one breakdown tab. Bar widths are relative to the
/// largest slice.
#[component]
fn BreakdownBars(slices: Vec<BreakdownSlice>) -> impl IntoView {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(1).max(1);

    view! {
        <div class="breakdown">
            {slices
                .into_iter()
                .map(|slice| {
                    let width = (slice.value as f64 / max as f64 * 100.0).round();
                    let bar_style = format!(
                        "width: {}%; background-color: {};",
                        width, slice.color
                    );
                    view! {
                        <div class="breakdown__row">
                            <span class="breakdown__name">{slice.name.clone()}</span>
                            <div class="breakdown__track">
                                <div class="breakdown__bar" style=bar_style></div>
                            </div>
                            <span class="breakdown__value">{slice.value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let (breakdown, set_breakdown) = signal(CommunityBreakdown::default());
    let (athletes, set_athletes) = signal::<Vec<Athlete>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (tab, set_tab) = signal(0usize);
    let (selected_sport, set_selected_sport) = signal::<Option<String>>(None);
    let (selected_gender, set_selected_gender) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_communities().await {
            Ok(data) => set_breakdown.set(data),
            Err(e) => set_error.set(Some(e)),
        }
        match fetch_athletes(None).await {
            Ok(list) => set_athletes.set(list),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let visible_athletes = Memo::new(move |_| {
        filter_athletes(
            &athletes.get(),
            selected_sport.get().as_deref(),
            selected_gender.get().as_deref(),
        )
    });

    let tab_class = move |index: usize| {
        if tab.get() == index {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    view! {
        <PageHeader
            title="Community"
            subtitle="Who plays what on UinSports, and the athletes behind the numbers."
        />

        {move || {
            error
                .get()
                .map(|e| view! { <p class="error-message">{e}</p> })
        }}

        <section class="card breakdown-card">
            <div class="tabs" role="tablist">
                <button class=move || tab_class(0) on:click=move |_| set_tab.set(0)>
                    "By sport"
                </button>
                <button class=move || tab_class(1) on:click=move |_| set_tab.set(1)>
                    "By gender"
                </button>
            </div>
            {move || {
                let data = breakdown.get();
                if tab.get() == 0 {
                    view! { <BreakdownBars slices=data.sports /> }
                } else {
                    view! { <BreakdownBars slices=data.gender /> }
                }
            }}
        </section>

        <section class="community-filter">
            <div class="chip-row">
                <button
                    class=move || {
                        if selected_sport.get().is_none() { "chip chip--active" } else { "chip" }
                    }
                    on:click=move |_| set_selected_sport.set(None)
                >
                    "All sports"
                </button>
                {move || {
                    breakdown
                        .get()
                        .sports
                        .into_iter()
                        .map(|slice| {
                            let name = slice.name.clone();
                            let chip_name = name.clone();
                            let chip_class = move || {
                                if selected_sport.get().as_deref() == Some(chip_name.as_str()) {
                                    "chip chip--active"
                                } else {
                                    "chip"
                                }
                            };
                            view! {
                                <button
                                    class=chip_class
                                    on:click=move |_| set_selected_sport.set(Some(name.clone()))
                                >
                                    {slice.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="chip-row">
                {["All", "Women", "Men"]
                    .into_iter()
                    .map(|label| {
                        let value = match label {
                            "All" => None,
                            other => Some(other.to_string()),
                        };
                        let chip_value = value.clone();
                        let chip_class = move || {
                            if selected_gender.get() == chip_value {
                                "chip chip--active"
                            } else {
                                "chip"
                            }
                        };
                        view! {
                            <button
                                class=chip_class
                                on:click=move |_| set_selected_gender.set(value.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="featured-athletes">
            <Show when=move || loading.get()>
                <p class="muted">"Loading community..."</p>
            </Show>
            <div class="athlete-grid">
                {move || {
                    visible_athletes
                        .get()
                        .into_iter()
                        .map(|athlete| view! { <AthleteCard athlete=athlete /> })
                        .collect_view()
                }}
            </div>
            <Show when=move || !loading.get() && visible_athletes.get().is_empty()>
                <p class="muted">"No athletes match the selected filters."</p>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::AthleteStats;

    fn athlete(name: &str, sport: &str, gender: &str) -> Athlete {
        Athlete {
            id: name.to_lowercase(),
            name: name.to_string(),
            sport: sport.to_string(),
            gender: gender.to_string(),
            location: "Rotterdam".to_string(),
            initials: name.chars().take(2).collect(),
            featured: false,
            bio: String::new(),
            stats: AthleteStats::default(),
        }
    }

    #[test]
    fn test_no_filter_keeps_everyone() {
        let all = vec![athlete("Ana", "Football", "Women"), athlete("Bo", "Tennis", "Men")];
        assert_eq!(filter_athletes(&all, None, None).len(), 2);
    }

    #[test]
    fn test_sport_and_gender_filters_compose() {
        let all = vec![
            athlete("Ana", "Football", "Women"),
            athlete("Bo", "Football", "Men"),
            athlete("Cy", "Tennis", "Women"),
        ];
        let football_women = filter_athletes(&all, Some("Football"), Some("Women"));
        assert_eq!(football_women.len(), 1);
        assert_eq!(football_women[0].name, "Ana");
    }

    #[test]
    fn test_filter_is_exact_match() {
        let all = vec![athlete("Ana", "Football", "Women")];
        assert!(filter_athletes(&all, Some("Foot"), None).is_empty());
    }
}
