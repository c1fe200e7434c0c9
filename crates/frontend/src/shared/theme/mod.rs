//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The preference is persisted in
//! localStorage, mirrored onto the document as a `data-theme` attribute, and
//! resolved into design tokens that the app root publishes as CSS variables.

pub mod responsive;
pub mod storage;
pub mod theme_toggle;
pub mod tokens;

use leptos::prelude::*;

pub use responsive::{use_breakpoint, Breakpoint};
pub use storage::Mode;
pub use theme_toggle::ThemeToggle;
pub use tokens::DesignTokens;

/// Theme context type. Owned by the app root; everything below reads it
/// through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode signal.
    pub mode: RwSignal<Mode>,
}

impl ThemeContext {
    /// Set the mode, persist it, and update the document attribute.
    /// Subscribers re-render synchronously through the signal graph.
    pub fn set_mode(&self, mode: Mode) {
        self.mode.set(mode);
        storage::save_mode(mode);
        storage::apply_document_mode(mode);
    }

    /// Get the current mode.
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Flip light <-> dark.
    pub fn toggle(&self) {
        self.set_mode(self.mode.get().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // Load the persisted preference once at startup
    let initial_mode = storage::load_mode();
    storage::apply_document_mode(initial_mode);

    let context = ThemeContext {
        mode: RwSignal::new(initial_mode),
    };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Resolved tokens for the current mode, already scaled for the current
/// viewport breakpoint.
pub fn use_design_tokens() -> Memo<DesignTokens> {
    let theme = use_theme();
    let breakpoint = use_breakpoint();
    Memo::new(move |_| DesignTokens::generate(theme.mode.get()).scaled_for(breakpoint.get()))
}
