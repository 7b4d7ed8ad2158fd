use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_interval_fn,
    use_timeout_fn, UseEventListenerOptions, UseTimeoutFnReturn,
};

use crate::slides::{
    DeckConfig, KeyCommand, SettleToken, TransitionController, TransitionEffect, WheelOutcome,
};

use super::progress_lines::ProgressLines;

const DEFAULT_BACKGROUND: &str = "#fafafa";

/// One page of a deck
#[derive(Clone)]
pub struct DeckSlide {
    pub title: String,
    pub content: ViewFn,
}

impl DeckSlide {
    pub fn new<V>(title: impl Into<String>, content: impl Fn() -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        Self {
            title: title.into(),
            content: ViewFn::from(content),
        }
    }
}

/// Provided to slide content so it can move its own deck, e.g. a menu on
/// the first slide.
#[derive(Clone, Copy)]
pub struct DeckNavigator {
    controller: RwSignal<TransitionController>,
}

impl DeckNavigator {
    pub fn jump_to(&self, index: usize) {
        self.controller.update(|c| {
            c.jump_to(index);
        });
    }
}

/// Navigation drawn over the slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chrome {
    Hidden,
    Lines { overview_button: bool },
    Dots { overview_button: bool },
}

impl Chrome {
    fn new(
        count: usize,
        overview: bool,
        progress_lines: bool,
        show_indicators: bool,
        overview_enabled: bool,
    ) -> Self {
        if overview || count < 2 {
            Chrome::Hidden
        } else if progress_lines {
            Chrome::Lines {
                overview_button: overview_enabled,
            }
        } else if show_indicators {
            Chrome::Dots {
                overview_button: overview_enabled,
            }
        } else {
            Chrome::Hidden
        }
    }

    fn lines(&self) -> bool {
        matches!(self, Chrome::Lines { .. })
    }

    fn dots(&self) -> bool {
        matches!(self, Chrome::Dots { .. })
    }

    fn overview_button(&self) -> bool {
        match self {
            Chrome::Lines { overview_button } | Chrome::Dots { overview_button } => {
                *overview_button
            }
            Chrome::Hidden => false,
        }
    }
}

fn background_style(background: &str) -> String {
    format!("background-color: {background};")
}

/// A full-viewport stack of slides driven by the wheel and the keyboard.
///
/// Only the current slide and the few slides the effect keeps on screen are
/// mounted. Partial scrolls move the slides directly and snap back after
/// `settle_timeout_ms` without further input.
#[component]
pub fn SlideDeck(
    #[prop(into)] slides: Signal<Vec<DeckSlide>>,
    #[prop(optional)] config: DeckConfig,
    /// right-edge line navigation instead of dots
    #[prop(optional)]
    progress_lines: bool,
    #[prop(optional, into)] background: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let controller = RwSignal::new(TransitionController::new(
        slides.with_untracked(Vec::len),
        config,
    ));
    provide_context(DeckNavigator { controller });
    let config = controller.with_untracked(|c| c.config().clone());
    let background = background.unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());
    let deck_style = background_style(&background);
    let show_indicators = config.show_indicators;
    let overview_enabled = config.overview_enabled;
    let base_duration = if config.effect == TransitionEffect::None {
        0
    } else {
        config.transition_duration_ms
    };

    // slides added or removed after mount
    Effect::watch(
        move || slides.with(Vec::len),
        move |len, _, _| {
            if controller.with_untracked(TransitionController::len) != *len {
                controller.update(|c| c.set_len(*len));
            }
        },
        false,
    );

    let UseTimeoutFnReturn {
        start: start_settle,
        stop: stop_settle,
        ..
    } = use_timeout_fn(
        move |token: SettleToken| {
            if controller.with_untracked(|c| c.pending_settle() == Some(token)) {
                controller.update(|c| {
                    c.settle(token);
                });
            }
        },
        f64::from(config.settle_timeout_ms),
    );

    let deck_ref = NodeRef::<html::Div>::new();
    let _ = use_event_listener_with_options(
        deck_ref,
        ev::wheel,
        {
            let stop_settle = stop_settle.clone();
            move |ev| {
                let active = controller.with_untracked(|c| {
                    c.is_interactive() && c.config().enable_scroll
                });
                if !active {
                    return;
                }
                ev.prevent_default();
                match controller.try_update(|c| c.on_wheel(ev.delta_y())) {
                    Some(WheelOutcome::Pending { token, .. }) => start_settle(token),
                    Some(WheelOutcome::Committed { .. }) => stop_settle(),
                    _ => {}
                }
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(command) = KeyCommand::from_key(&ev.key()) else {
            return;
        };
        let now = chrono::Utc::now().timestamp_millis() as f64;
        if controller
            .try_update(|c| c.on_key(command, now))
            .unwrap_or(false)
        {
            ev.prevent_default();
            stop_settle();
        }
    });

    if let Some(ms) = config.autoplay_ms {
        let _ = use_interval_fn(
            move || {
                if controller.with_untracked(|c| c.state().is_transitioning) {
                    return;
                }
                controller.update(|c| {
                    c.autoplay_tick();
                });
            },
            u64::from(ms),
        );
    }

    let jump = Callback::new(move |index: usize| {
        controller.update(|c| {
            c.jump_to(index);
        });
    });
    let show_overview = Callback::new(move |_: ()| {
        controller.update(|c| {
            c.enter_overview();
        });
    });
    let count = Signal::derive(move || controller.with(TransitionController::len));
    let current = Signal::derive(move || controller.with(TransitionController::current_index));
    let overview = Memo::new(move |_| controller.with(TransitionController::in_overview));
    let chrome = Memo::new(move |_| {
        Chrome::new(
            count.get(),
            overview.get(),
            progress_lines,
            show_indicators,
            overview_enabled,
        )
    });
    let on_overview = move || {
        chrome
            .get_untracked()
            .overview_button()
            .then_some(show_overview)
    };
    let peek = Memo::new(move |_| controller.with(TransitionController::peek_index));
    // follow the wheel directly mid-gesture, animate otherwise
    let duration = Memo::new(move |_| {
        if controller.with(|c| c.state().is_transitioning) {
            0
        } else {
            base_duration
        }
    });

    let slide_layers = move || {
        slides
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, slide)| {
                let transform = Memo::new(move |_| controller.with(|c| c.transform_of(index)));
                view! {
                    <Show when=move || transform.get().visible>
                        <div
                            class="absolute inset-0 flex items-center justify-center will-change-transform"
                            data-peek=move || (peek.get() == Some(index)).to_string()
                            aria-hidden=move || (current.get() != index).to_string()
                            style=move || transform.get().to_style(duration.get())
                        >
                            {slide.content.run()}
                        </div>
                    </Show>
                }
            })
            .collect_view()
    };

    view! {
        <div
            node_ref=deck_ref
            class=format!("relative w-full h-screen overflow-hidden {class}")
            style=deck_style
            role="region"
            aria-roledescription="slide deck"
        >
            <Show when=move || !overview.get()>
                <div class="relative w-full h-full overflow-hidden">{slide_layers}</div>
            </Show>
            <Show when=move || overview.get()>
                <OverviewPanel slides background=background.clone() on_select=jump />
            </Show>
            <Show when=move || chrome.get().lines()>
                <ProgressLines count current on_select=jump on_overview=on_overview() />
            </Show>
            <Show when=move || chrome.get().dots()>
                <Indicators count current on_select=jump on_overview=on_overview() />
            </Show>
            <p class="sr-only" aria-live="polite">
                {move || format!("Slide {} of {}", current.get() + 1, count.get())}
            </p>
        </div>
    }
}

#[component]
fn Indicators(
    count: Signal<usize>,
    current: Signal<usize>,
    on_select: Callback<usize>,
    on_overview: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex items-center space-x-2 z-50">
            {move || {
                (0..count.get())
                    .map(|index| {
                        view! {
                            <button
                                aria-label=format!("Go to slide {}", index + 1)
                                class=move || {
                                    if current.get() == index {
                                        "w-3 h-3 rounded-full transition-all duration-300 bg-blue-500 scale-125"
                                    } else {
                                        "w-3 h-3 rounded-full transition-all duration-300 bg-gray-300 hover:bg-gray-400"
                                    }
                                }
                                on:click=move |_| on_select.run(index)
                            ></button>
                        }
                    })
                    .collect_view()
            }}
            {on_overview.map(|on_click| view! { <OverviewButton on_click /> })}
        </div>
    }
}

/// Opens the overview panel
#[component]
pub fn OverviewButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="w-3 h-6 rounded border border-white/30 transition-all duration-300 hover:scale-125 flex items-center justify-center"
            aria-label="Show all slides"
            on:click=move |_| on_click.run(())
        >
            <div class="w-1 h-3 bg-current opacity-50"></div>
        </button>
    }
}

/// Grid of scaled-down previews shown after scrolling past the last slide
#[component]
fn OverviewPanel(
    slides: Signal<Vec<DeckSlide>>,
    background: String,
    on_select: Callback<usize>,
) -> impl IntoView {
    let panel_style = background_style(&background);
    let card_style = panel_style.clone();
    view! {
        <div class="absolute inset-0 p-12 overflow-y-auto animate-fade-in" style=panel_style>
            <div class="max-w-7xl mx-auto">
                <h2 class="text-center mb-16 font-black tracking-tight text-4xl md:text-6xl text-neutral-500">
                    "All Slides"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        slides
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, slide)| {
                                view! {
                                    <button
                                        class="relative group text-left cursor-pointer"
                                        aria-label=format!("Open {}", slide.title)
                                        on:click=move |_| on_select.run(index)
                                    >
                                        <div class="mb-4 flex justify-between text-sm font-medium text-neutral-500">
                                            <span>{format!("{:02}", index + 1)}</span>
                                            <span>{slide.title.clone()}</span>
                                        </div>
                                        <div
                                            class="w-full h-64 overflow-hidden rounded-lg border border-gray-700 transition-all duration-300 group-hover:border-gray-400 group-hover:shadow-lg"
                                            style=card_style.clone()
                                        >
                                            <div class="w-full h-full overflow-hidden relative pointer-events-none">
                                                <div
                                                    class="absolute inset-0 origin-top-left"
                                                    style="transform: scale(0.27); width: 370%; height: 370%;"
                                                >
                                                    {slide.content.run()}
                                                </div>
                                            </div>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_needs_two_slides() {
        assert_eq!(Chrome::new(0, false, true, false, false), Chrome::Hidden);
        assert_eq!(Chrome::new(1, false, false, true, true), Chrome::Hidden);
        assert!(Chrome::new(2, false, true, false, false).lines());
        assert!(Chrome::new(2, false, false, true, false).dots());
    }

    #[test]
    fn test_chrome_prefers_lines_over_dots() {
        let chrome = Chrome::new(5, false, true, true, false);
        assert!(chrome.lines());
        assert!(!chrome.dots());
        assert_eq!(Chrome::new(5, false, false, false, true), Chrome::Hidden);
    }

    #[test]
    fn test_chrome_overview_button() {
        assert!(Chrome::new(3, false, true, false, true).overview_button());
        assert!(Chrome::new(3, false, false, true, true).overview_button());
        assert!(!Chrome::new(3, false, true, false, false).overview_button());
        // the panel replaces all navigation while open
        let open = Chrome::new(3, true, true, false, true);
        assert_eq!(open, Chrome::Hidden);
        assert!(!open.overview_button());
    }

    #[test]
    fn test_background_style() {
        assert_eq!(background_style("#000000"), "background-color: #000000;");
    }
}
