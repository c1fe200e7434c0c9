use leptos::prelude::*;

/// Group separator for headline numbers: 12803 -> "12 803" (non-breaking
/// spaces).
pub fn format_count(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Headline-number card used on the home and profile pages.
#[component]
pub fn StatCard(
    /// Label displayed below the value
    #[prop(into)]
    label: String,
    /// Formatted value (e.g. "12 000+" or a plain count)
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12803), "12\u{00a0}803");
        assert_eq!(format_count(1_000_000), "1\u{00a0}000\u{00a0}000");
    }
}
