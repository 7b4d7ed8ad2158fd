use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::use_media_query;

use super::hooks::{use_new_york_clock, use_typewriter};
use super::social::SocialIcons;
use super::PageTransition;

const QUOTE: &str = "We are all visitors to this time, this place. We are just passing through. Our purpose here is to observe, to learn, to grow, to love... and then we return home.";
const QUOTE_DELAY_MS: f64 = 3000.0;
const QUOTE_TICK_MS: u64 = 50;

const OVERLAY_TEXT: &str = "text-white font-normal [text-shadow:2px_2px_4px_rgba(0,0,0,0.5)]";

/// Class sets for the painting and its three overlays
struct HeroLayout {
    frame: &'static str,
    image: &'static str,
    name: &'static str,
    quote: &'static str,
    clock: &'static str,
}

const DESKTOP: HeroLayout = HeroLayout {
    frame: "flex justify-center relative",
    image: "max-w-[51rem]",
    name: "absolute top-6 left-6 text-left text-5xl md:text-6xl lg:text-7xl",
    quote: "absolute bottom-6 left-6 text-left max-w-md text-sm md:text-base lg:text-lg",
    clock: "absolute bottom-6 right-6 text-right text-lg md:text-xl lg:text-2xl",
};

const MOBILE: HeroLayout = HeroLayout {
    frame: "flex justify-center relative px-4 sm:px-0",
    image: "max-w-[90vw]",
    name: "absolute top-[3%] left-[3%] text-left text-[clamp(2rem,6vw,5rem)]",
    quote: "absolute bottom-[3%] left-[3%] text-left max-w-[45%] text-[clamp(0.7rem,2vw,1.2rem)]",
    clock: "absolute bottom-[3%] right-[3%] text-right text-[clamp(0.9rem,2.5vw,1.8rem)]",
};

#[component]
fn Hero(#[prop(optional)] compact: bool) -> impl IntoView {
    let layout = if compact { &MOBILE } else { &DESKTOP };
    let time = use_new_york_clock();
    let quote = use_typewriter(QUOTE, QUOTE_TICK_MS, Some(QUOTE_DELAY_MS));
    let typing = quote.is_done();

    view! {
        <div class="text-center animate-fade-in-up">
            <div class=layout.frame>
                <img
                    src="/View_of_Dresden_by_Moonlight.jpg"
                    alt="View of Dresden by Moonlight"
                    class=format!("rounded-lg shadow-lg w-full h-auto {}", layout.image)
                />
                <div class=format!("{} {OVERLAY_TEXT} animate-fade-in", layout.name)>
                    <div>"Benjamin"</div>
                    <div>"Hu"</div>
                </div>
                <div class=format!(
                    "{} {OVERLAY_TEXT} animate-fade-in [animation-delay:2s]",
                    layout.quote,
                )>
                    "“"
                    {quote.visible()}
                    <Show when=move || !typing.get()>
                        <span class="animate-pulse">"|"</span>
                    </Show>
                    "”"
                </div>
                <div class=format!(
                    "{} {OVERLAY_TEXT} animate-fade-in [animation-delay:1.5s]",
                    layout.clock,
                )>
                    <div class="text-[0.8em] opacity-80">"New York"</div>
                    <div>{time}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let is_mobile = use_media_query("(max-width: 768px)");

    view! {
        <Title text="Home" />
        <PageTransition>
            <div class="min-h-screen flex items-center justify-center bg-[rgb(250,248,246)]">
                {move || {
                    if is_mobile.get() {
                        Either::Left(view! { <Hero compact=true /> })
                    } else {
                        Either::Right(view! { <Hero /> })
                    }
                }}
                <SocialIcons />
            </div>
        </PageTransition>
    }
}
