use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDots {
    pub red: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
}

/// Named colours used by the developer pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub terminal_bg: &'static str,
    pub terminal_header: &'static str,
    pub terminal_border: &'static str,
    pub terminal_tab: &'static str,
    pub terminal_tab_active: &'static str,
    pub terminal_dots: TerminalDots,
    pub command: &'static str,
    pub variable: &'static str,
    pub string: &'static str,
    pub keyword: &'static str,
    pub comment: &'static str,
    pub error: &'static str,
    pub cursor: &'static str,
    pub icon_bg: &'static str,
    pub icon_color: &'static str,
    pub nav_text: &'static str,
    pub nav_hover: &'static str,
}

pub const DARK: Palette = Palette {
    background: "rgb(15, 23, 42)",
    text_primary: "rgb(248, 250, 252)",
    text_secondary: "rgb(148, 163, 184)",
    text_muted: "rgb(71, 85, 105)",
    terminal_bg: "rgb(17, 24, 39)",
    terminal_header: "rgb(31, 41, 55)",
    terminal_border: "rgb(55, 65, 81)",
    terminal_tab: "rgb(31, 41, 55)",
    terminal_tab_active: "rgb(17, 24, 39)",
    terminal_dots: TerminalDots {
        red: "rgb(239, 68, 68)",
        yellow: "rgb(245, 158, 11)",
        green: "rgb(34, 197, 94)",
    },
    command: "rgb(34, 197, 94)",
    variable: "rgb(147, 197, 253)",
    string: "rgb(251, 146, 60)",
    keyword: "rgb(250, 204, 21)",
    comment: "rgb(168, 85, 247)",
    error: "rgb(239, 68, 68)",
    cursor: "rgb(34, 197, 94)",
    icon_bg: "rgb(30, 41, 59)",
    icon_color: "rgb(250, 248, 246)",
    nav_text: "rgb(248, 250, 252)",
    nav_hover: "rgba(51, 65, 85, 0.1)",
};

pub const LIGHT: Palette = Palette {
    background: "rgb(248, 250, 252)",
    text_primary: "rgb(15, 23, 42)",
    text_secondary: "rgb(71, 85, 105)",
    text_muted: "rgb(100, 116, 139)",
    terminal_bg: "rgb(255, 255, 255)",
    terminal_header: "rgb(249, 250, 251)",
    terminal_border: "rgb(229, 231, 235)",
    terminal_tab: "rgb(249, 250, 251)",
    terminal_tab_active: "rgb(255, 255, 255)",
    terminal_dots: TerminalDots {
        red: "rgb(209, 213, 219)",
        yellow: "rgb(209, 213, 219)",
        green: "rgb(209, 213, 219)",
    },
    command: "rgb(71, 85, 105)",
    variable: "rgb(15, 23, 42)",
    string: "rgb(100, 116, 139)",
    keyword: "rgb(71, 85, 105)",
    comment: "rgb(148, 163, 184)",
    error: "rgb(185, 28, 28)",
    cursor: "rgb(71, 85, 105)",
    icon_bg: "transparent",
    icon_color: "rgb(71, 85, 105)",
    nav_text: "rgb(15, 23, 42)",
    nav_hover: "rgba(100, 116, 139, 0.1)",
};

/// Turn an `rgb(r, g, b)` palette colour into `rgba(r, g, b, alpha)`.
/// Anything else is returned unchanged.
pub fn with_alpha(colour: &str, alpha: f64) -> String {
    match colour
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(channels) => format!("rgba({channels}, {alpha})"),
        None => colour.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_eq!(Theme::Dark.palette().background, "rgb(15, 23, 42)");
        assert_eq!(Theme::Light.palette().background, "rgb(248, 250, 252)");
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        // light theme mutes the window buttons
        let dots = Theme::Light.palette().terminal_dots;
        assert_eq!(dots.red, dots.green);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(
            with_alpha(DARK.variable, 0.25),
            "rgba(147, 197, 253, 0.25)"
        );
        assert_eq!(with_alpha(LIGHT.icon_bg, 0.5), "transparent");
        assert_eq!(with_alpha(DARK.nav_hover, 0.5), DARK.nav_hover);
    }
}
