use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level view of the app. Exactly one is current at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Camera,
    Analysis,
    Recipes,
    Cooking,
    Share,
    Profile,
}

impl Screen {
    /// All screens in flow order
    pub const ALL: [Screen; 6] = [
        Screen::Camera,
        Screen::Analysis,
        Screen::Recipes,
        Screen::Cooking,
        Screen::Share,
        Screen::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Camera => "camera",
            Screen::Analysis => "analysis",
            Screen::Recipes => "recipes",
            Screen::Cooking => "cooking",
            Screen::Share => "share",
            Screen::Profile => "profile",
        }
    }

    /// Screens that only make sense with a recipe selected
    pub fn needs_recipe(&self) -> bool {
        matches!(self, Screen::Cooking | Screen::Share)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| ParseError::UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_camera() {
        assert_eq!(Screen::default(), Screen::Camera);
    }

    #[test]
    fn test_parse_known() {
        assert_eq!("share".parse::<Screen>(), Ok(Screen::Share));
        assert_eq!("profile".parse::<Screen>(), Ok(Screen::Profile));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Settings".parse::<Screen>(),
            Err(ParseError::UnknownScreen("Settings".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Screen::Recipes).unwrap();
        assert_eq!(json, "\"recipes\"");
        let back: Screen = serde_json::from_str("\"cooking\"").unwrap();
        assert_eq!(back, Screen::Cooking);
    }

    #[test]
    fn test_needs_recipe() {
        let gated: Vec<_> = Screen::ALL.into_iter().filter(Screen::needs_recipe).collect();
        assert_eq!(gated, vec![Screen::Cooking, Screen::Share]);
    }
}
