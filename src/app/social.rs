use leptos::prelude::*;
use leptos_router::components::A;

use crate::theme::Theme;

pub const GITHUB_URL: &str = "https://github.com/benuh";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/benjamin-hu-556104176/";
pub const X_URL: &str = "https://x.com/benerichu";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/benjamin.c.hu/#";
pub const EMAIL_URL: &str = "mailto:huchangcan@gmail.com";

const DEFAULT_SIZE: &str = "clamp(2.5rem, 4vw, 3rem)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    X,
    Instagram,
    Email,
    Code,
}

impl Icon {
    pub fn label(&self) -> &'static str {
        match self {
            Icon::GitHub => "GitHub",
            Icon::LinkedIn => "LinkedIn",
            Icon::X => "X",
            Icon::Instagram => "Instagram",
            Icon::Email => "Email",
            Icon::Code => "Developer",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Icon::GitHub => "M12 0C5.37 0 0 5.37 0 12c0 5.3 3.44 9.8 8.21 11.39.6.11.79-.26.79-.58v-2.23c-3.34.73-4.03-1.42-4.03-1.42-.55-1.39-1.33-1.76-1.33-1.76-1.09-.74.08-.73.08-.73 1.2.08 1.84 1.24 1.84 1.24 1.07 1.83 2.81 1.3 3.49 1 .11-.78.42-1.31.76-1.6-2.67-.31-5.47-1.34-5.47-5.93 0-1.31.47-2.38 1.24-3.22-.12-.3-.54-1.52.12-3.18 0 0 1-.32 3.3 1.23a11.5 11.5 0 0 1 6 0c2.29-1.55 3.3-1.23 3.3-1.23.65 1.66.24 2.88.12 3.18.77.84 1.23 1.91 1.23 3.22 0 4.61-2.81 5.62-5.48 5.92.43.37.82 1.1.82 2.22v3.29c0 .32.19.69.8.58C20.57 21.8 24 17.3 24 12c0-6.63-5.37-12-12-12z",
            Icon::LinkedIn => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
            Icon::X => "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
            Icon::Instagram => "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm0 2a3 3 0 0 0-3 3v10a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3V7a3 3 0 0 0-3-3H7zm5 3.5a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9zm0 2a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5zM17.5 6a1 1 0 1 1 0 2 1 1 0 0 1 0-2z",
            Icon::Email => "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z",
            Icon::Code => "M9.4 16.6L4.8 12l4.6-4.6L8 6l-6 6 6 6 1.4-1.4zm5.2 0L19.2 12l-4.6-4.6L16 6l6 6-6 6-1.4-1.4z",
        }
    }

    fn is_external(&self) -> bool {
        !matches!(self, Icon::Email | Icon::Code)
    }
}

fn icon_style(size: &str, background: &str, colour: &str, hovered: bool) -> String {
    let (scale, shadow) = if hovered {
        ("1.1", "0 10px 15px -3px rgba(0,0,0,0.3)")
    } else {
        ("1", "none")
    };
    format!(
        "width: {size}; height: {size}; background-color: {background}; color: {colour}; transform: scale({scale}); box-shadow: {shadow};"
    )
}

/// Round icon link. Colours follow the current theme.
#[component]
pub fn SocialIcon(
    icon: Icon,
    href: &'static str,
    #[prop(optional)] size: Option<&'static str>,
    /// seconds before the icon fades in
    #[prop(optional)]
    delay: Option<f64>,
) -> impl IntoView {
    let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));
    let hovered = RwSignal::new(false);
    let size = size.unwrap_or(DEFAULT_SIZE);
    let appear = delay
        .map(|d| format!("animation-delay: {d}s;"))
        .unwrap_or_default();
    let style = move || {
        let palette = theme.get().palette();
        format!(
            "{appear} {}",
            icon_style(size, palette.icon_bg, palette.icon_color, hovered.get())
        )
    };
    let glyph = view! {
        <svg class="w-3/5 h-3/5" fill="currentColor" fill-rule="evenodd" viewBox="0 0 24 24">
            <path d=icon.path()></path>
        </svg>
    };
    let class = "w-full h-full flex items-center justify-center";
    let link = if icon == Icon::Code {
        view! {
            <A href=href attr:class=class attr:aria-label=icon.label()>
                {glyph}
            </A>
        }
        .into_any()
    } else {
        let (target, rel) = if icon.is_external() {
            (Some("_blank"), Some("noopener noreferrer"))
        } else {
            (None, None)
        };
        view! {
            <a href=href target=target rel=rel class=class aria-label=icon.label()>
                {glyph}
            </a>
        }
        .into_any()
    };

    view! {
        <div
            class="p-2 rounded-full transition-all duration-300 animate-fade-in-up"
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {link}
        </div>
    }
}

/// Bottom-right contact links on the landing page
#[component]
pub fn SocialIcons() -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-6 flex flex-col gap-3 z-50">
            <SocialIcon icon=Icon::GitHub href=GITHUB_URL size="1.5rem" delay=2.0 />
            <SocialIcon icon=Icon::LinkedIn href=LINKEDIN_URL size="1.5rem" delay=2.2 />
            <SocialIcon icon=Icon::Email href=EMAIL_URL size="1.5rem" delay=2.4 />
            <SocialIcon icon=Icon::Code href="/developer" size="1.5rem" delay=2.6 />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_style_hover() {
        let idle = icon_style("1.5rem", "rgb(30, 41, 59)", "white", false);
        assert_eq!(
            idle,
            "width: 1.5rem; height: 1.5rem; background-color: rgb(30, 41, 59); color: white; transform: scale(1); box-shadow: none;"
        );
        let hovered = icon_style("1.5rem", "rgb(30, 41, 59)", "white", true);
        assert!(hovered.contains("transform: scale(1.1)"));
    }

    #[test]
    fn test_only_profiles_open_new_tabs() {
        assert!(Icon::GitHub.is_external());
        assert!(Icon::Instagram.is_external());
        assert!(!Icon::Email.is_external());
        assert!(!Icon::Code.is_external());
    }
}
