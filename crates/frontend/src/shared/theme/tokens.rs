//! Design-token generation.
//!
//! All mode-dependent color decisions live in [`DesignTokens::generate`];
//! components never branch on [`Mode`] themselves. The token set is a pure
//! function of the mode: two calls with the same mode yield identical values.

use std::fmt::Write;

use super::storage::Mode;

/// A color with its hover variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSet {
    pub main: &'static str,
    pub hover: &'static str,
    /// Text color that stays readable on `main`.
    pub contrast: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: ColorSet,
    pub secondary: ColorSet,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

/// Semantic text roles, mirroring the heading scale plus body and button text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    H1,
    H2,
    H3,
    H4,
    Subtitle1,
    Body1,
    Button,
}

impl TextRole {
    pub const ALL: [TextRole; 7] = [
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::H4,
        TextRole::Subtitle1,
        TextRole::Body1,
        TextRole::Button,
    ];

    /// Heading roles shrink on narrow viewports; body and button text do not.
    pub fn is_heading(&self) -> bool {
        matches!(self, TextRole::H1 | TextRole::H2 | TextRole::H3 | TextRole::H4)
    }

    fn css_name(&self) -> &'static str {
        match self {
            TextRole::H1 => "h1",
            TextRole::H2 => "h2",
            TextRole::H3 => "h3",
            TextRole::H4 => "h4",
            TextRole::Subtitle1 => "subtitle1",
            TextRole::Body1 => "body1",
            TextRole::Button => "button",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeStyle {
    pub weight: u16,
    pub size_rem: f32,
    pub line_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub subtitle1: TypeStyle,
    pub body1: TypeStyle,
    pub button: TypeStyle,
}

impl Typography {
    pub fn style(&self, role: TextRole) -> TypeStyle {
        match role {
            TextRole::H1 => self.h1,
            TextRole::H2 => self.h2,
            TextRole::H3 => self.h3,
            TextRole::H4 => self.h4,
            TextRole::Subtitle1 => self.subtitle1,
            TextRole::Body1 => self.body1,
            TextRole::Button => self.button,
        }
    }

    pub fn style_mut(&mut self, role: TextRole) -> &mut TypeStyle {
        match role {
            TextRole::H1 => &mut self.h1,
            TextRole::H2 => &mut self.h2,
            TextRole::H3 => &mut self.h3,
            TextRole::H4 => &mut self.h4,
            TextRole::Subtitle1 => &mut self.subtitle1,
            TextRole::Body1 => &mut self.body1,
            TextRole::Button => &mut self.button,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub border_radius: u8,
    pub button_radius: u8,
}

/// Style override for one UI element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub background: &'static str,
    pub hover_background: &'static str,
    pub border_color: &'static str,
    pub shadow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStyles {
    pub app_bar: SurfaceStyle,
    pub button: SurfaceStyle,
    pub card: SurfaceStyle,
    pub chip: SurfaceStyle,
    pub input: SurfaceStyle,
}

/// The full resolved token set for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTokens {
    pub mode: Mode,
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentStyles,
}

// Brand accent, identical in both modes.
const SECONDARY: ColorSet = ColorSet {
    main: "#F26A27",
    hover: "rgba(242, 106, 39, 0.9)",
    contrast: "#ffffff",
};

const FONT_FAMILY: &str = "\"Inter\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif";

const TYPOGRAPHY: Typography = Typography {
    font_family: FONT_FAMILY,
    h1: TypeStyle {
        weight: 700,
        size_rem: 3.0,
        line_height: 1.1,
    },
    h2: TypeStyle {
        weight: 700,
        size_rem: 2.25,
        line_height: 1.2,
    },
    h3: TypeStyle {
        weight: 700,
        size_rem: 1.875,
        line_height: 1.3,
    },
    h4: TypeStyle {
        weight: 700,
        size_rem: 1.5,
        line_height: 1.35,
    },
    subtitle1: TypeStyle {
        weight: 600,
        size_rem: 1.0,
        line_height: 1.5,
    },
    body1: TypeStyle {
        weight: 400,
        size_rem: 1.0,
        line_height: 1.5,
    },
    button: TypeStyle {
        weight: 700,
        size_rem: 0.875,
        line_height: 1.75,
    },
};

const SHAPE: Shape = Shape {
    border_radius: 12,
    button_radius: 8,
};

impl DesignTokens {
    /// Generate the token set for a mode. Pure and total; the typography
    /// scale, shape, and secondary accent are mode-invariant.
    pub fn generate(mode: Mode) -> Self {
        let palette = match mode {
            Mode::Light => Palette {
                primary: ColorSet {
                    main: "#0C3042",
                    hover: "#164A63",
                    contrast: "#ffffff",
                },
                secondary: SECONDARY,
                background_default: "#f8fafc",
                background_paper: "#ffffff",
                text_primary: "#0C3042",
                text_secondary: "#6b7280",
                divider: "#e5e7eb",
            },
            Mode::Dark => Palette {
                primary: ColorSet {
                    main: "#418BCA",
                    hover: "#5d9fd6",
                    contrast: "#0b1220",
                },
                secondary: SECONDARY,
                background_default: "#0b1220",
                background_paper: "#11283b",
                text_primary: "#e5e7eb",
                text_secondary: "#9ca3af",
                divider: "#1f2a37",
            },
        };

        let components = match mode {
            Mode::Light => ComponentStyles {
                app_bar: SurfaceStyle {
                    background: "rgba(255, 255, 255, 0.95)",
                    hover_background: "rgba(255, 255, 255, 0.95)",
                    border_color: "rgba(229, 231, 235, 0.5)",
                    shadow: "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
                },
                button: SurfaceStyle {
                    background: "#F26A27",
                    hover_background: "rgba(242, 106, 39, 0.9)",
                    border_color: "transparent",
                    shadow: "none",
                },
                card: SurfaceStyle {
                    background: "#ffffff",
                    hover_background: "#ffffff",
                    border_color: "#e5e7eb",
                    shadow: "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
                },
                chip: SurfaceStyle {
                    background: "rgba(12, 48, 66, 0.08)",
                    hover_background: "rgba(12, 48, 66, 0.16)",
                    border_color: "transparent",
                    shadow: "none",
                },
                input: SurfaceStyle {
                    background: "#ffffff",
                    hover_background: "#ffffff",
                    border_color: "#e5e7eb",
                    shadow: "none",
                },
            },
            Mode::Dark => ComponentStyles {
                app_bar: SurfaceStyle {
                    background: "rgba(11, 18, 32, 0.95)",
                    hover_background: "rgba(11, 18, 32, 0.95)",
                    border_color: "rgba(31, 42, 55, 0.6)",
                    shadow: "0 1px 3px 0 rgba(0, 0, 0, 0.5), 0 1px 2px 0 rgba(0, 0, 0, 0.4)",
                },
                button: SurfaceStyle {
                    background: "#F26A27",
                    hover_background: "rgba(242, 106, 39, 0.9)",
                    border_color: "transparent",
                    shadow: "none",
                },
                card: SurfaceStyle {
                    background: "#11283b",
                    hover_background: "#11283b",
                    border_color: "#1f2a37",
                    shadow: "0 1px 3px 0 rgba(0, 0, 0, 0.5), 0 1px 2px 0 rgba(0, 0, 0, 0.4)",
                },
                chip: SurfaceStyle {
                    background: "rgba(65, 139, 202, 0.16)",
                    hover_background: "rgba(65, 139, 202, 0.28)",
                    border_color: "transparent",
                    shadow: "none",
                },
                input: SurfaceStyle {
                    background: "#11283b",
                    hover_background: "#11283b",
                    border_color: "#1f2a37",
                    shadow: "none",
                },
            },
        };

        Self {
            mode,
            palette,
            typography: TYPOGRAPHY,
            shape: SHAPE,
            components,
        }
    }

    /// Render the token set as a CSS custom-property block. The app root
    /// carries this as its inline style; every component reads colors
    /// through `var(--...)` instead of re-deriving them per mode.
    pub fn css_variables(&self) -> String {
        let mut out = String::with_capacity(1024);
        let p = &self.palette;
        let _ = write!(
            out,
            "--color-primary: {}; --color-primary-hover: {}; --color-primary-contrast: {}; ",
            p.primary.main, p.primary.hover, p.primary.contrast
        );
        let _ = write!(
            out,
            "--color-secondary: {}; --color-secondary-hover: {}; --color-secondary-contrast: {}; ",
            p.secondary.main, p.secondary.hover, p.secondary.contrast
        );
        let _ = write!(
            out,
            "--color-bg: {}; --color-paper: {}; --color-text: {}; --color-text-secondary: {}; --color-divider: {}; ",
            p.background_default, p.background_paper, p.text_primary, p.text_secondary, p.divider
        );
        let _ = write!(out, "--font-family: {}; ", self.typography.font_family);
        for role in TextRole::ALL {
            let style = self.typography.style(role);
            let _ = write!(
                out,
                "--font-size-{name}: {size}rem; --font-weight-{name}: {weight}; --line-height-{name}: {lh}; ",
                name = role.css_name(),
                size = style.size_rem,
                weight = style.weight,
                lh = style.line_height
            );
        }
        let _ = write!(
            out,
            "--radius: {}px; --radius-button: {}px; ",
            self.shape.border_radius, self.shape.button_radius
        );
        let c = &self.components;
        for (name, surface) in [
            ("appbar", &c.app_bar),
            ("button", &c.button),
            ("card", &c.card),
            ("chip", &c.chip),
            ("input", &c.input),
        ] {
            let _ = write!(
                out,
                "--{name}-bg: {}; --{name}-bg-hover: {}; --{name}-border: {}; --{name}-shadow: {};",
                surface.background,
                surface.hover_background,
                surface.border_color,
                surface.shadow,
                name = name
            );
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(DesignTokens::generate(mode), DesignTokens::generate(mode));
        }
    }

    #[test]
    fn test_modes_produce_distinct_palettes() {
        let light = DesignTokens::generate(Mode::Light);
        let dark = DesignTokens::generate(Mode::Dark);
        assert_ne!(light.palette.primary.main, dark.palette.primary.main);
        assert_ne!(light.palette.background_default, dark.palette.background_default);
        assert_ne!(light.palette.background_paper, dark.palette.background_paper);
    }

    #[test]
    fn test_secondary_accent_is_mode_invariant() {
        let light = DesignTokens::generate(Mode::Light);
        let dark = DesignTokens::generate(Mode::Dark);
        assert_eq!(light.palette.secondary, dark.palette.secondary);
        assert_eq!(light.components.button, dark.components.button);
    }

    #[test]
    fn test_typography_and_shape_are_mode_invariant() {
        let light = DesignTokens::generate(Mode::Light);
        let dark = DesignTokens::generate(Mode::Dark);
        assert_eq!(light.typography, dark.typography);
        assert_eq!(light.shape, dark.shape);
    }

    #[test]
    fn test_double_toggle_restores_tokens() {
        let start = DesignTokens::generate(Mode::Light);
        let after = DesignTokens::generate(Mode::Light.toggled().toggled());
        assert_eq!(start, after);
    }

    #[test]
    fn test_css_variables_cover_palette_and_type_scale() {
        let vars = DesignTokens::generate(Mode::Dark).css_variables();
        assert!(vars.contains("--color-primary: #418BCA;"));
        assert!(vars.contains("--color-secondary: #F26A27;"));
        assert!(vars.contains("--font-size-h1: 3rem;"));
        assert!(vars.contains("--radius: 12px;"));
        assert!(vars.contains("--appbar-bg: rgba(11, 18, 32, 0.95);"));
    }
}
