//! Dark/light display state for the signed-in area.

use crate::page::Page;

/// Display mode. Only the dashboard honours it; every other page is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTheme {
    pub dark: bool,
}

impl Default for DisplayTheme {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl DisplayTheme {
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Style tokens for the current mode.
    pub fn tokens(self) -> ThemeTokens {
        if self.dark {
            ThemeTokens::DARK
        } else {
            ThemeTokens::LIGHT
        }
    }

    /// Icon name for the toggle button (shows the mode it switches to).
    pub fn toggle_icon(self) -> &'static str {
        if self.dark {
            "light_mode"
        } else {
            "dark_mode"
        }
    }
}

/// Whether the navbar renders in dark mode on `page`.
pub fn navbar_dark_mode(page: Page, theme: DisplayTheme) -> bool {
    match page {
        Page::Dashboard => theme.dark,
        _ => true,
    }
}

/// CSS classes per themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub bg: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub input_bg: &'static str,
    pub hover_bg: &'static str,
    pub input_border: &'static str,
    pub skeleton_bg: &'static str,
}

impl ThemeTokens {
    pub const DARK: ThemeTokens = ThemeTokens {
        bg: "dx-bg-dark",
        surface: "dx-surface-dark",
        text: "dx-text-dark",
        text_secondary: "dx-text-secondary-dark",
        border: "dx-border-dark",
        input_bg: "dx-input-bg-dark",
        hover_bg: "dx-hover-dark",
        input_border: "dx-input-border-dark",
        skeleton_bg: "dx-skeleton-dark",
    };

    pub const LIGHT: ThemeTokens = ThemeTokens {
        bg: "dx-bg-light",
        surface: "dx-surface-light",
        text: "dx-text-light",
        text_secondary: "dx-text-secondary-light",
        border: "dx-border-light",
        input_bg: "dx-input-bg-light",
        hover_bg: "dx-hover-light",
        input_border: "dx-input-border-light",
        skeleton_bg: "dx-skeleton-light",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let mut theme = DisplayTheme::default();
        assert!(theme.dark);
        theme.toggle();
        assert!(!theme.dark);
        assert_eq!(theme.tokens(), ThemeTokens::LIGHT);
        assert_eq!(theme.toggle_icon(), "dark_mode");
    }

    #[test]
    fn test_navbar_dark_outside_dashboard() {
        let light = DisplayTheme { dark: false };
        for page in Page::ALL {
            let expected = page != Page::Dashboard;
            assert_eq!(navbar_dark_mode(page, light), expected, "page {}", page);
            assert!(navbar_dark_mode(page, DisplayTheme::default()));
        }
    }
}
