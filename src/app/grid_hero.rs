use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_router::components::A;
use leptos_use::on_click_outside;

use crate::theme::{with_alpha, Theme};

use super::hooks::use_typewriter;
use super::slide_deck::DeckNavigator;
use super::social::{GITHUB_URL, INSTAGRAM_URL, LINKEDIN_URL, X_URL};

const FULL_NAME: &str = "BENJAMIN HU";
const FULL_TITLE: &str = "Software Developer";
const RESUME_PATH: &str = "/BH_Resume.pdf";

pub const GRID_COLUMNS: usize = 12;
pub const GRID_ROWS: usize = 3;

/// Slide positions in the grid deck, hero first
pub mod slide {
    pub const WHO: usize = 1;
    pub const SKILLS: usize = 2;
    pub const EXPERIENCE: usize = 3;
    pub const PROJECTS: usize = 4;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn class(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-3 left-3",
            Corner::BottomLeft => "bottom-3 left-3",
            Corner::BottomRight => "bottom-3 right-3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    Home,
    Jump { label: &'static str, slide: usize },
    Resume,
    Social,
}

/// What sits in the corner of grid box `index`, if anything
pub fn cell(index: usize) -> Option<(Corner, CellAction)> {
    let cell = match index {
        0 => (Corner::TopLeft, CellAction::Home),
        3 => (
            Corner::BottomLeft,
            CellAction::Jump {
                label: "EXP",
                slide: slide::EXPERIENCE,
            },
        ),
        8 => (
            Corner::BottomLeft,
            CellAction::Jump {
                label: "WHO",
                slide: slide::WHO,
            },
        ),
        11 => (Corner::TopLeft, CellAction::Resume),
        22 => (
            Corner::BottomRight,
            CellAction::Jump {
                label: "SKILLS",
                slide: slide::SKILLS,
            },
        ),
        26 => (
            Corner::TopLeft,
            CellAction::Jump {
                label: "PROJECTS",
                slide: slide::PROJECTS,
            },
        ),
        35 => (Corner::BottomRight, CellAction::Social),
        _ => return None,
    };
    Some(cell)
}

const LABEL: &str =
    "font-mono text-sm font-bold text-white tracking-widest uppercase inline-block cursor-pointer hover-static";
const SMALL_LABEL: &str =
    "font-mono text-[0.7rem] font-bold text-white tracking-wider uppercase no-underline inline-block hover-static";

fn box_style(hovered: bool, glow: &str) -> String {
    if hovered {
        format!(
            "background-color: rgba(255,255,255,0.15); border-color: rgba(255,255,255,0.6); transform: scale(1.02); box-shadow: 0 0 25px {glow}, inset 0 0 25px rgba(255,255,255,0.15);"
        )
    } else {
        "background-color: transparent; border-color: rgba(255,255,255,0.05); transform: scale(1); box-shadow: none;".to_string()
    }
}

#[component]
fn ResumeMenu() -> impl IntoView {
    let open = RwSignal::new(false);
    let menu_ref = NodeRef::<html::Div>::new();
    let _ = on_click_outside(menu_ref, move |_| open.set(false));

    view! {
        <div class="relative" node_ref=menu_ref>
            <span class=LABEL on:click=move |_| open.update(|o| *o = !*o)>
                "RESUME"
            </span>
            <Show when=move || open.get()>
                <div class="absolute z-30 py-1 w-full top-full left-0 right-0">
                    <a
                        class=format!("{SMALL_LABEL} block w-full py-1 pl-1 text-left hover:bg-white/10")
                        href=RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |_| open.set(false)
                    >
                        "VIEW"
                    </a>
                    <a
                        class=format!("{SMALL_LABEL} block w-full py-1 pl-1 text-left hover:bg-white/10")
                        href=RESUME_PATH
                        download="Benjamin_Hu_Resume.pdf"
                        on:click=move |_| open.set(false)
                    >
                        "DOWNLOAD"
                    </a>
                </div>
            </Show>
        </div>
    }
}

fn cell_label(action: CellAction, navigator: Option<DeckNavigator>) -> impl IntoView {
    match action {
        CellAction::Home => view! {
            <A href="/" attr:class=LABEL>
                "cd ~/"
            </A>
        }
        .into_any(),
        CellAction::Jump { label, slide } => view! {
            <span
                class=LABEL
                on:click=move |_| {
                    if let Some(navigator) = navigator {
                        navigator.jump_to(slide);
                    }
                }
            >
                {label}
            </span>
        }
        .into_any(),
        CellAction::Resume => view! { <ResumeMenu /> }.into_any(),
        CellAction::Social => view! {
            <div class="flex flex-col gap-2 items-end text-right">
                {[
                    ("GITHUB", GITHUB_URL),
                    ("LINKEDIN", LINKEDIN_URL),
                    ("X", X_URL),
                    ("INSTAGRAM", INSTAGRAM_URL),
                ]
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a class=SMALL_LABEL href=href target="_blank" rel="noopener noreferrer">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Landing slide of the grid deck: a 12x3 grid of glowing boxes with
/// navigation tucked into a few corners, and a typed name in the middle.
#[component]
pub fn GridHero() -> impl IntoView {
    let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));
    let navigator = use_context::<DeckNavigator>();
    let hovered = RwSignal::new(None::<usize>);

    let name = use_typewriter(FULL_NAME, 150, Some(0.0));
    let title = use_typewriter(FULL_TITLE, 80, None);
    let show_cursor = RwSignal::new(true);
    let name_done = name.is_done();
    let title_done = title.is_done();
    let title_starter = title.clone();
    Effect::watch(
        move || name_done.get(),
        move |done, _, _| {
            if *done {
                let title = title_starter.clone();
                set_timeout(move || title.start(), Duration::from_millis(500));
            }
        },
        false,
    );
    Effect::watch(
        move || title_done.get(),
        move |done, _, _| {
            if *done {
                set_timeout(move || show_cursor.set(false), Duration::from_secs(1));
            }
        },
        false,
    );

    let variable = Signal::derive(move || theme.get().palette().variable);
    // endpoints for the text-glow keyframes
    let name_shadow = move || {
        let glow = |alpha| with_alpha(variable.get(), alpha);
        format!(
            "--glow-from: 0 0 20px {}, 0 0 40px {}, 0 0 60px {}; --glow-to: 0 0 30px {}, 0 0 50px {}, 0 0 70px {};",
            glow(0.38),
            glow(0.19),
            glow(0.13),
            glow(0.5),
            glow(0.31),
            glow(0.19)
        )
    };
    let corner_style = move |angle: u32| {
        format!(
            "background: linear-gradient({angle}deg, {}, transparent);",
            with_alpha(variable.get(), 0.38)
        )
    };

    view! {
        <div class="absolute inset-0 grid grid-cols-12 grid-rows-3 gap-1 p-4">
            {(0..GRID_COLUMNS * GRID_ROWS)
                .map(|i| {
                    let label = cell(i)
                        .map(|(corner, action)| {
                            view! {
                                <div class=format!("absolute z-10 {}", corner.class())>
                                    {cell_label(action, navigator)}
                                </div>
                            }
                        });
                    view! {
                        <div
                            class="relative border rounded-xl overflow-hidden cursor-pointer transition-all duration-500 animate-fade-in-up"
                            style=move || {
                                let glow = with_alpha(variable.get(), 0.31);
                                format!(
                                    "animation-delay: {:.2}s; {}",
                                    i as f64 * 0.01,
                                    box_style(hovered.get() == Some(i), &glow),
                                )
                            }
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| {
                                hovered.update(|h| {
                                    if *h == Some(i) {
                                        *h = None;
                                    }
                                })
                            }
                        >
                            {label}
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="absolute inset-0 flex flex-col items-center justify-center z-20 pointer-events-none">
            <div class="text-center">
                <h1
                    class="font-sans font-black text-white m-0 tracking-tight text-[clamp(3rem,8vw,6rem)] animate-text-glow"
                    style=name_shadow
                >
                    {name.visible()}
                    <Show when=move || show_cursor.get() && !name_done.get()>
                        <span class="animate-pulse">"|"</span>
                    </Show>
                </h1>
                <p class="mt-4 font-mono text-[#cccccc] tracking-[0.15em] uppercase opacity-90 text-[clamp(0.9rem,2vw,1.4rem)]">
                    {title.visible()}
                    <Show when=move || show_cursor.get() && name_done.get() && !title_done.get()>
                        <span class="animate-pulse">"|"</span>
                    </Show>
                </p>
            </div>
        </div>

        <div
            class="absolute top-0 left-0 w-20 h-20 opacity-30 animate-pulse-corner [clip-path:polygon(0_0,100%_0,0_100%)]"
            style=move || corner_style(135)
        ></div>
        <div
            class="absolute bottom-0 right-0 w-20 h-20 opacity-30 animate-pulse-corner [animation-delay:2s] [clip-path:polygon(100%_100%,0_100%,100%_0)]"
            style=move || corner_style(315)
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_cells() {
        let cells: Vec<usize> = (0..GRID_COLUMNS * GRID_ROWS)
            .filter(|&i| cell(i).is_some())
            .collect();
        assert_eq!(cells, vec![0, 3, 8, 11, 22, 26, 35]);
        assert_eq!(cell(0), Some((Corner::TopLeft, CellAction::Home)));
        assert_eq!(cell(35), Some((Corner::BottomRight, CellAction::Social)));
        assert_eq!(cell(36), None);
    }

    #[test]
    fn test_jump_targets_are_distinct() {
        let mut targets: Vec<usize> = (0..GRID_COLUMNS * GRID_ROWS)
            .filter_map(|i| match cell(i) {
                Some((_, CellAction::Jump { slide, .. })) => Some(slide),
                _ => None,
            })
            .collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![slide::WHO, slide::SKILLS, slide::EXPERIENCE, slide::PROJECTS]
        );
    }

    #[test]
    fn test_box_style() {
        assert!(box_style(false, "red").contains("box-shadow: none"));
        let hovered = box_style(true, "rgba(1, 2, 3, 0.31)");
        assert!(hovered.contains("scale(1.02)"));
        assert!(hovered.contains("0 0 25px rgba(1, 2, 3, 0.31)"));
    }
}
