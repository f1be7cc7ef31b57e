//! Light/dark display mode

/// Root attribute read by the styling layer
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to [`THEME_ATTRIBUTE`]
    pub fn marker(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Rendering surface that exposes a root element attribute
pub trait ThemeSurface {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Owns the current mode and pushes it to a surface
#[derive(Debug, Clone, Default)]
pub struct ThemeToggle {
    mode: ThemeMode,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply the current mode without changing it
    pub fn apply(&self, surface: &mut impl ThemeSurface) {
        surface.set_attribute(THEME_ATTRIBUTE, self.mode.marker());
    }

    /// Flip the mode and apply it. Returns the new mode.
    pub fn toggle(&mut self, surface: &mut impl ThemeSurface) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.apply(surface);
        tracing::info!("Theme switched to {}", self.mode.marker());
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RootElement {
        attributes: HashMap<String, String>,
    }

    impl ThemeSurface for RootElement {
        fn set_attribute(&mut self, name: &str, value: &str) {
            self.attributes.insert(name.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_default_is_light() {
        let toggle = ThemeToggle::new();
        assert_eq!(toggle.mode(), ThemeMode::Light);
        assert!(!toggle.mode().is_dark());
    }

    #[test]
    fn test_toggle_sets_marker() {
        let mut root = RootElement::default();
        let mut toggle = ThemeToggle::new();

        assert_eq!(toggle.toggle(&mut root), ThemeMode::Dark);
        assert_eq!(root.attributes.get(THEME_ATTRIBUTE).map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut root = RootElement::default();
        let mut toggle = ThemeToggle::new();
        toggle.apply(&mut root);
        let before = root.attributes.clone();

        toggle.toggle(&mut root);
        toggle.toggle(&mut root);

        assert_eq!(toggle.mode(), ThemeMode::Light);
        assert_eq!(root.attributes, before);
    }
}
