//! Light/dark theme toggle.

/// localStorage key the client persists the choice under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on the document root to drive the stylesheet variables.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page color scheme. Dark is the default for first-time visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite scheme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Value stored in localStorage and set on [`THEME_ATTRIBUTE`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything unrecognized falls back to dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggling_twice_returns_to_the_start() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn unrecognized_stored_values_fall_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn as_str_round_trips_through_from_stored() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
