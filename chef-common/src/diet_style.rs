use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recipe style filter. Tags recipes and is user-selectable, but selecting
/// one does not narrow the recipe list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietStyle {
    #[default]
    Normal,
    Diet,
    Vegan,
    Eco,
}

impl DietStyle {
    pub const ALL: [DietStyle; 4] = [
        DietStyle::Normal,
        DietStyle::Diet,
        DietStyle::Vegan,
        DietStyle::Eco,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietStyle::Normal => "normal",
            DietStyle::Diet => "diet",
            DietStyle::Vegan => "vegan",
            DietStyle::Eco => "eco",
        }
    }

    /// Label shown on the style picker and recipe cards
    pub fn label(&self) -> &'static str {
        match self {
            DietStyle::Normal => "Regular",
            DietStyle::Diet => "Diet",
            DietStyle::Vegan => "Vegan",
            DietStyle::Eco => "Budget",
        }
    }
}

impl fmt::Display for DietStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseError::UnknownDietStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(DietStyle::default(), DietStyle::Normal);
    }

    #[test]
    fn test_parse_roundtrips_ids() {
        for style in DietStyle::ALL {
            assert_eq!(style.as_str().parse::<DietStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "Vegan".parse::<DietStyle>(),
            Err(ParseError::UnknownDietStyle(_))
        ));
    }

    #[test]
    fn test_eco_label() {
        assert_eq!(DietStyle::Eco.label(), "Budget");
    }
}
