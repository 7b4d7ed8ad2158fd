use leptos::prelude::*;

use super::slide_deck::OverviewButton;

const ACTIVE: (&str, &str) = ("20px", "#fafafa");
const HOVERED: (&str, &str) = ("16px", "#e5e5e5");
const IDLE: (&str, &str) = ("12px", "#cccccc");

fn line_style(active: bool, hovered: bool) -> String {
    let (width, colour) = if active {
        ACTIVE
    } else if hovered {
        HOVERED
    } else {
        IDLE
    };
    format!("width: {width}; background-color: {colour};")
}

/// Vertical stack of thin lines on the right edge, one per slide.
#[component]
pub fn ProgressLines(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
    /// adds a button under the lines that opens the overview panel
    on_overview: Option<Callback<()>>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <nav
            class="fixed right-8 top-1/2 -translate-y-1/2 z-50"
            aria-label="Slides"
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="relative flex flex-col items-end gap-4">
                {move || {
                    (0..count.get())
                        .map(|index| {
                            view! {
                                <button
                                    class="relative z-10 p-2"
                                    aria-label=format!("Go to slide {}", index + 1)
                                    on:click=move |_| on_select.run(index)
                                    on:mouseenter=move |_| hovered.set(Some(index))
                                >
                                    <div
                                        class="h-px transition-all duration-200"
                                        style=move || {
                                            line_style(
                                                current.get() == index,
                                                hovered.get() == Some(index),
                                            )
                                        }
                                    ></div>
                                </button>
                            }
                        })
                        .collect_view()
                }}
                {on_overview
                    .map(|on_click| {
                        view! {
                            <div class="w-6 h-px bg-white/30 my-2"></div>
                            <div class="p-2">
                                <OverviewButton on_click />
                            </div>
                        }
                    })}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_precedence() {
        assert_eq!(
            line_style(true, true),
            "width: 20px; background-color: #fafafa;"
        );
        assert_eq!(
            line_style(false, true),
            "width: 16px; background-color: #e5e5e5;"
        );
        assert_eq!(
            line_style(false, false),
            "width: 12px; background-color: #cccccc;"
        );
    }
}
