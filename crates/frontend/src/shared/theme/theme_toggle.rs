use leptos::prelude::*;

use super::{use_theme, Mode};

/// Light/dark toggle button shown in the top bar and the drawer.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    let label = move || match ctx.mode.get() {
        Mode::Light => "Switch to dark mode",
        Mode::Dark => "Switch to light mode",
    };
    let glyph = move || match ctx.mode.get() {
        Mode::Light => "🌙",
        Mode::Dark => "☀",
    };

    view! {
        <button
            class="theme-toggle"
            title=label
            aria-label=label
            on:click=move |_| ctx.toggle()
        >
            {glyph}
        </button>
    }
}
