use leptos::prelude::*;
use once_cell::sync::Lazy;

use crate::shared::components::PageHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    pub name: &'static str,
    pub entries: Vec<FaqEntry>,
}

static FAQ_CATEGORIES: Lazy<Vec<FaqCategory>> = Lazy::new(|| {
    vec![
        FaqCategory {
            name: "Getting started",
            entries: vec![
                FaqEntry {
                    question: "Is UinSports free for athletes?",
                    answer: "Yes. Creating a profile, joining communities and registering \
                             for open events costs nothing.",
                },
                FaqEntry {
                    question: "Which sports are supported?",
                    answer: "Over 40 sports, from football and basketball to climbing and \
                             fencing. Missing yours? Request it from your profile.",
                },
            ],
        },
        FaqCategory {
            name: "Profiles",
            entries: vec![
                FaqEntry {
                    question: "Can I link my results from other platforms?",
                    answer: "You can attach external links and upload result sheets; verified \
                             imports are rolled out per sport.",
                },
                FaqEntry {
                    question: "Who can see my profile?",
                    answer: "Profiles are public by default. You can restrict visibility to \
                             your communities in the privacy settings.",
                },
            ],
        },
        FaqCategory {
            name: "Events",
            entries: vec![
                FaqEntry {
                    question: "How do refunds work for paid events?",
                    answer: "Refund policy is set per event by the organizer and shown before \
                             you register.",
                },
                FaqEntry {
                    question: "Can I organize an event as an athlete?",
                    answer: "Yes, any account can switch on organizer tools and publish \
                             community events.",
                },
            ],
        },
    ]
});

/// Case-insensitive substring filter over question and answer text.
/// Categories left with no matching entries are dropped; an empty query
/// returns everything unchanged.
pub fn filter_categories(categories: &[FaqCategory], query: &str) -> Vec<FaqCategory> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return categories.to_vec();
    }
    categories
        .iter()
        .map(|category| FaqCategory {
            name: category.name,
            entries: category
                .entries
                .iter()
                .filter(|entry| {
                    entry.question.to_lowercase().contains(&needle)
                        || entry.answer.to_lowercase().contains(&needle)
                })
                .copied()
                .collect(),
        })
        .filter(|category| !category.entries.is_empty())
        .collect()
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let filtered = Memo::new(move |_| filter_categories(&FAQ_CATEGORIES, &query.get()));

    view! {
        <PageHeader
            title="Frequently asked questions"
            subtitle="Answers about profiles, communities and events."
        />

        <div class="faq-search">
            <input
                class="input"
                type="search"
                placeholder="Search questions..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </div>

        <Show
            when=move || !filtered.get().is_empty()
            fallback=|| view! { <p class="muted">"No questions match your search."</p> }
        >
            {move || {
                filtered
                    .get()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <section class="faq-category">
                                <h2>{category.name}</h2>
                                {category
                                    .entries
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <details class="card faq-entry">
                                                <summary class="faq-entry__question">
                                                    {entry.question}
                                                </summary>
                                                <p class="faq-entry__answer">{entry.answer}</p>
                                            </details>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_identity() {
        let filtered = filter_categories(&FAQ_CATEGORIES, "");
        assert_eq!(&filtered, &*FAQ_CATEGORIES);
        let padded = filter_categories(&FAQ_CATEGORIES, "   ");
        assert_eq!(&padded, &*FAQ_CATEGORIES);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let filtered = filter_categories(&FAQ_CATEGORIES, "REFUND");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Events");
        assert_eq!(filtered[0].entries.len(), 1);
    }

    #[test]
    fn test_answers_are_searched_too() {
        let filtered = filter_categories(&FAQ_CATEGORIES, "privacy settings");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Profiles");
    }

    #[test]
    fn test_no_match_drops_all_categories() {
        assert!(filter_categories(&FAQ_CATEGORIES, "zamboni").is_empty());
    }
}
