use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::nav_state::{is_active, NAV_ITEMS};

/// Slide-in navigation panel for compact layouts.
///
/// `on_close` fires on the explicit close button, on backdrop click, and on
/// link selection.
#[component]
pub fn Drawer<F>(on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="drawer">
            <div class="drawer__backdrop" on:click=move |_| on_close()></div>
            <div class="drawer__panel">
                <div class="drawer__header">
                    <span class="navbar__logo">"UinSports"</span>
                    <button
                        class="drawer__close"
                        aria-label="Close navigation menu"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                <hr class="drawer__divider" />
                <nav class="drawer__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let link_class = move || {
                                if is_active(&pathname.get(), item.path) {
                                    "drawer__link drawer__link--active"
                                } else {
                                    "drawer__link"
                                }
                            };
                            view! {
                                <a class=link_class href=item.path on:click=move |_| on_close()>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <hr class="drawer__divider" />
                <div class="drawer__actions">
                    <a class="button button--outlined" href="/faq" on:click=move |_| on_close()>
                        "FAQ"
                    </a>
                    <a
                        class="button button--secondary"
                        href="/contact"
                        on:click=move |_| on_close()
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
        </div>
    }
}
