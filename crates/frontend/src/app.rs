use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::theme::{use_design_tokens, ThemeProvider};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <ThemedRoot />
        </ThemeProvider>
    }
}

/// Single consumption point for the design tokens: the resolved set is
/// published as CSS variables on the app root, and every component below
/// styles itself through `var(--...)`.
#[component]
fn ThemedRoot() -> impl IntoView {
    let tokens = use_design_tokens();

    view! {
        <div class="app" style=move || tokens.get().css_variables()>
            <AppRoutes />
        </div>
    }
}
