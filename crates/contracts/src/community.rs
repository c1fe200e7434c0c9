use serde::{Deserialize, Serialize};

/// One wedge of a community breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub value: u32,
    /// Display color for the slice, a CSS color string.
    pub color: String,
}

/// Membership breakdown served by the communities endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityBreakdown {
    #[serde(default)]
    pub sports: Vec<BreakdownSlice>,
    #[serde(default)]
    pub gender: Vec<BreakdownSlice>,
}

impl CommunityBreakdown {
    /// Total members across the sports slices.
    pub fn total_members(&self) -> u32 {
        self.sports.iter().map(|s| s.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_members() {
        let breakdown = CommunityBreakdown {
            sports: vec![
                BreakdownSlice {
                    name: "Football".into(),
                    value: 320,
                    color: "#418BCA".into(),
                },
                BreakdownSlice {
                    name: "Basketball".into(),
                    value: 180,
                    color: "#F26A27".into(),
                },
            ],
            gender: vec![],
        };
        assert_eq!(breakdown.total_members(), 500);
    }

    #[test]
    fn test_defaults_on_partial_payload() {
        let breakdown: CommunityBreakdown = serde_json::from_str("{}").unwrap();
        assert!(breakdown.sports.is_empty());
        assert!(breakdown.gender.is_empty());
    }
}
