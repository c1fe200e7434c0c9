use leptos::prelude::*;
use leptos_router::hooks::use_location;
use web_sys::window;

use super::drawer::Drawer;
use super::nav_state::{is_active, NavState, NAV_ITEMS};
use crate::shared::theme::{use_breakpoint, ThemeToggle};

/// Sticky top navigation bar.
///
/// Transparent while the page is at the top, opaque once scrolled. On
/// compact layouts the link row is replaced by a menu button that opens the
/// drawer.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let breakpoint = use_breakpoint();
    let location = use_location();
    let pathname = location.pathname;

    // Scroll listener, attached for the lifetime of the bar.
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        nav.update(|state| state.set_scroll_offset(offset));
    });
    on_cleanup(move || handle.remove());

    let bar_class = move || {
        if nav.get().scrolled {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    };
    let is_compact = move || breakpoint.get().is_compact();

    view! {
        <header class=bar_class>
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span class="navbar__logo">"UinSports"</span>
                </a>

                <Show when=move || !is_compact()>
                    <nav class="navbar__links">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let link_class = move || {
                                    if is_active(&pathname.get(), item.path) {
                                        "navbar__link navbar__link--active"
                                    } else {
                                        "navbar__link"
                                    }
                                };
                                view! {
                                    <a class=link_class href=item.path>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a class="button button--secondary" href="/contact">
                            "Get in touch"
                        </a>
                        <ThemeToggle />
                    </nav>
                </Show>

                <Show when=is_compact>
                    <div class="navbar__compact-actions">
                        <ThemeToggle />
                        <button
                            class="navbar__menu-button"
                            aria-label="Open navigation menu"
                            on:click=move |_| nav.update(|state| state.open_drawer())
                        >
                            "☰"
                        </button>
                    </div>
                </Show>
            </div>
        </header>

        <Show when=move || nav.get().drawer_open>
            <Drawer on_close=move || nav.update(|state| state.close_drawer()) />
        </Show>
    }
}
