use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_query_map};

use crate::slides::{DeckConfig, TransitionEffect, DEFAULT_AUTOPLAY_MS};

use super::slide_deck::{DeckSlide, SlideDeck};

/// Query keys understood by [`DeckConfig::apply_override`]
const OVERRIDE_KEYS: [&str; 8] = [
    "effect",
    "sensitivity",
    "settle",
    "depth",
    "start",
    "indicators",
    "overview",
    "autoplay",
];

const COLOURS: [&str; 6] = ["#1e3a8a", "#7c2d12", "#14532d", "#581c87", "#831843", "#134e4a"];

fn demo_slide(number: usize) -> DeckSlide {
    let colour = COLOURS[(number - 1) % COLOURS.len()];
    DeckSlide::new(format!("Slide {number}"), move || {
        view! {
            <div
                class="w-[80vw] h-[80vh] rounded-lg shadow-xl flex flex-col items-center justify-center text-white font-sans"
                style=format!("background-color: {colour};")
            >
                <span class="text-sm uppercase tracking-widest opacity-70">"slide"</span>
                <span class="text-[clamp(4rem,12vw,10rem)] font-black leading-none">
                    {format!("{number:02}")}
                </span>
            </div>
        }
    })
}

/// Playground for every transition effect. Deck settings come from the query
/// string, e.g. `/slides?effect=stack&depth=2&overview=on`.
#[component]
pub fn SlidesDemoPage() -> impl IntoView {
    let query = use_query_map();
    let slides = RwSignal::new((1..=4).map(demo_slide).collect::<Vec<_>>());
    let autoplay = RwSignal::new(false);

    let config = Memo::new(move |_| {
        let overrides = query.with(|q| {
            OVERRIDE_KEYS
                .iter()
                .filter_map(|key| q.get(key).map(|value| (*key, value)))
                .collect::<Vec<_>>()
        });
        let config = DeckConfig::default()
            .with_overrides(overrides.iter().map(|(key, value)| (*key, value.as_str())));
        if autoplay.get() && config.autoplay_ms.is_none() {
            config.with_autoplay(DEFAULT_AUTOPLAY_MS)
        } else {
            config
        }
    });
    let effect = Memo::new(move |_| config.with(|c| c.effect));

    let add = move |_| {
        slides.update(|s| {
            let next = s.len() + 1;
            s.push(demo_slide(next));
        })
    };
    let remove = move |_| {
        slides.update(|s| {
            if s.len() > 1 {
                s.pop();
            }
        })
    };

    view! {
        <Title text="Slides" />
        <div class="fixed top-4 left-4 z-[60] flex flex-col gap-3 rounded-lg bg-black/70 p-4 font-mono text-xs text-white">
            <div class="flex flex-wrap gap-2">
                {TransitionEffect::all()
                    .into_iter()
                    .map(|e| {
                        view! {
                            <A
                                href=format!("/slides?effect={e}")
                                attr:class=move || {
                                    if effect.get() == e {
                                        "rounded px-2 py-1 bg-blue-500"
                                    } else {
                                        "rounded px-2 py-1 bg-white/10 hover:bg-white/20"
                                    }
                                }
                            >
                                {e.as_str()}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-2">
                <button class="rounded px-2 py-1 bg-white/10 hover:bg-white/20" on:click=add>
                    "+ slide"
                </button>
                <button class="rounded px-2 py-1 bg-white/10 hover:bg-white/20" on:click=remove>
                    "- slide"
                </button>
                <button
                    class="rounded px-2 py-1 bg-white/10 hover:bg-white/20"
                    aria-pressed=move || autoplay.get().to_string()
                    on:click=move |_| autoplay.update(|a| *a = !*a)
                >
                    {move || if autoplay.get() { "autoplay on" } else { "autoplay off" }}
                </button>
                <span class="opacity-70">{move || format!("{} slides", slides.with(Vec::len))}</span>
            </div>
        </div>
        // a new deck whenever its settings change
        {move || {
            let config = config.get();
            log::debug!("mounting demo deck with {config:?}");
            view! { <SlideDeck slides config background="#111111" class="font-sans" /> }
        }}
    }
}
