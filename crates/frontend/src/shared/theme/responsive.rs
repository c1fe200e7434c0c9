//! Viewport breakpoints and responsive font scaling.

use leptos::prelude::*;
use web_sys::window;

use super::tokens::{DesignTokens, TextRole};

/// Breakpoint thresholds in CSS pixels (lower bound of Sm / Md / Lg).
pub const SM_MIN_PX: f64 = 600.0;
pub const MD_MIN_PX: f64 = 900.0;
pub const LG_MIN_PX: f64 = 1200.0;

/// Viewport width class. Defaults to `Lg` so the layout is desktop-first
/// until the first measurement lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    #[default]
    Lg,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < SM_MIN_PX {
            Breakpoint::Xs
        } else if width < MD_MIN_PX {
            Breakpoint::Sm
        } else if width < LG_MIN_PX {
            Breakpoint::Md
        } else {
            Breakpoint::Lg
        }
    }

    /// Compact layouts (below the medium breakpoint) swap the horizontal
    /// nav links for the drawer.
    pub fn is_compact(&self) -> bool {
        matches!(self, Breakpoint::Xs | Breakpoint::Sm)
    }

    /// Heading scale factor, non-increasing as the viewport narrows.
    fn heading_factor(&self) -> f32 {
        match self {
            Breakpoint::Xs => 0.78,
            Breakpoint::Sm => 0.88,
            Breakpoint::Md => 0.95,
            Breakpoint::Lg => 1.0,
        }
    }
}

impl DesignTokens {
    /// Apply responsive scaling to the heading sizes. Body, subtitle, and
    /// button text keep their base size at every breakpoint.
    pub fn scaled_for(mut self, breakpoint: Breakpoint) -> Self {
        let factor = breakpoint.heading_factor();
        for role in TextRole::ALL {
            if role.is_heading() {
                self.typography.style_mut(role).size_rem *= factor;
            }
        }
        self
    }
}

fn measure() -> Breakpoint {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(Breakpoint::from_width)
        .unwrap_or_default()
}

/// Track the viewport breakpoint reactively.
///
/// Measures once immediately, then on every window `resize`. The listener is
/// removed when the calling component is cleaned up, so repeated mounts do
/// not accumulate listeners.
pub fn use_breakpoint() -> ReadSignal<Breakpoint> {
    let (breakpoint, set_breakpoint) = signal(measure());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        set_breakpoint.set(measure());
    });
    on_cleanup(move || handle.remove());

    breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::storage::Mode;

    #[test]
    fn test_breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(599.9), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(600.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(899.9), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(900.0), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1280.0), Breakpoint::Lg);
    }

    #[test]
    fn test_compact_below_medium() {
        assert!(Breakpoint::Xs.is_compact());
        assert!(Breakpoint::Sm.is_compact());
        assert!(!Breakpoint::Md.is_compact());
        assert!(!Breakpoint::Lg.is_compact());
    }

    #[test]
    fn test_default_is_not_compact() {
        assert!(!Breakpoint::default().is_compact());
    }

    #[test]
    fn test_font_scale_monotonic_across_breakpoints() {
        let ordered = [Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg];
        for mode in [Mode::Light, Mode::Dark] {
            for pair in ordered.windows(2) {
                let narrow = DesignTokens::generate(mode).scaled_for(pair[0]);
                let wide = DesignTokens::generate(mode).scaled_for(pair[1]);
                for role in TextRole::ALL {
                    assert!(
                        narrow.typography.style(role).size_rem
                            <= wide.typography.style(role).size_rem,
                        "{:?} grew when shrinking from {:?} to {:?}",
                        role,
                        pair[1],
                        pair[0]
                    );
                }
            }
        }
    }

    #[test]
    fn test_widest_breakpoint_keeps_base_sizes() {
        let base = DesignTokens::generate(Mode::Light);
        assert_eq!(base.scaled_for(Breakpoint::Lg), base);
    }
}
