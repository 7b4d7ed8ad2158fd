use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::{
    slides::{DeckConfig, TransitionEffect},
    theme::Theme,
};

use super::grid_hero::GridHero;
use super::slide_content::{
    ApproachSlide, ExperienceSlide, FramedSlide, IntroSlide, ProjectsSlide, SkillsSlide, SlideCard,
    SpecialtySlide, WhoSlide,
};
use super::slide_deck::{DeckSlide, SlideDeck};
use super::social::{Icon, SocialIcon, GITHUB_URL, INSTAGRAM_URL, LINKEDIN_URL, X_URL};
use super::terminal::Terminal;
use super::PageTransition;

const BLACK: &str = "#000000";

/// Profile, links and the terminal widget
#[component]
pub fn DeveloperPage() -> impl IntoView {
    let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));
    let palette = move || theme.get().palette();
    let toggle_label = move || match theme.get() {
        Theme::Dark => "☀ light",
        Theme::Light => "☾ dark",
    };

    view! {
        <Title text="Developer" />
        <PageTransition>
            <div
                class="min-h-screen transition-colors duration-300"
                style=move || {
                    format!(
                        "background-color: {}; color: {};",
                        palette().background,
                        palette().text_primary,
                    )
                }
            >
                <nav class="flex items-center justify-between px-6 py-4 font-mono text-sm">
                    <A
                        href="/"
                        attr:class="rounded px-2 py-1 transition-colors hover:opacity-80"
                        attr:style=move || format!("color: {};", palette().nav_text)
                    >
                        "<- cd ~/"
                    </A>
                    <button
                        class="rounded px-2 py-1 transition-colors"
                        style=move || {
                            format!(
                                "color: {}; background-color: {};",
                                palette().nav_text,
                                palette().nav_hover,
                            )
                        }
                        aria-label="Toggle theme"
                        on:click=move |_| theme.update(|t| *t = t.toggle())
                    >
                        {toggle_label}
                    </button>
                </nav>

                <main class="mx-auto max-w-6xl px-6 py-8 grid gap-12 lg:grid-cols-[1fr_2fr] items-start">
                    <section class="flex flex-col items-center text-center gap-4 animate-fade-in-up">
                        <img
                            src="/profile.jpg"
                            alt="Benjamin Hu"
                            class="w-40 h-40 rounded-full object-cover shadow-lg"
                        />
                        <h1 class="text-3xl font-bold">"Benjamin Hu"</h1>
                        <p
                            class="font-mono"
                            style=move || format!("color: {};", palette().command)
                        >
                            "> Software Developer"
                        </p>
                        <div class="flex gap-3 mt-2">
                            <SocialIcon icon=Icon::GitHub href=GITHUB_URL />
                            <SocialIcon icon=Icon::LinkedIn href=LINKEDIN_URL />
                            <SocialIcon icon=Icon::Instagram href=INSTAGRAM_URL />
                            <SocialIcon icon=Icon::X href=X_URL />
                        </div>
                    </section>
                    <Terminal class="animate-fade-in-up [animation-delay:0.3s]" />
                </main>

                <footer
                    class="py-6 text-center font-mono text-xs"
                    style=move || format!("color: {};", palette().text_muted)
                >
                    {format!("built {}", env!("BUILD_TIME"))}
                </footer>
            </div>
        </PageTransition>
    }
}

/// Three statement cards sliding horizontally over black
#[component]
pub fn DeveloperV2Page() -> impl IntoView {
    let slides = Signal::stored(vec![
        DeckSlide::new("Intro", || view! { <SlideCard><IntroSlide /></SlideCard> }),
        DeckSlide::new("Approach", || view! { <SlideCard><ApproachSlide /></SlideCard> }),
        DeckSlide::new("Specialty", || view! { <SlideCard><SpecialtySlide /></SlideCard> }),
    ]);
    let config = DeckConfig::default()
        .with_effect(TransitionEffect::Slide)
        .with_sensitivity(80.0)
        .with_settle_timeout(200)
        .with_overview();

    view! {
        <Title text="Developer" />
        <SlideDeck slides config progress_lines=true background=BLACK />
    }
}

/// Grid hero followed by the portfolio slides, shuffled like a deck of cards
#[component]
pub fn DeveloperV3Page() -> impl IntoView {
    let slides = Signal::stored(vec![
        DeckSlide::new("Home", || view! { <FramedSlide dark=true><GridHero /></FramedSlide> }),
        DeckSlide::new("Who", || view! { <FramedSlide><WhoSlide /></FramedSlide> }),
        DeckSlide::new("Skills", || view! { <FramedSlide><SkillsSlide /></FramedSlide> }),
        DeckSlide::new("Experience", || {
            view! { <FramedSlide><ExperienceSlide /></FramedSlide> }
        }),
        DeckSlide::new("Projects", || view! { <FramedSlide><ProjectsSlide /></FramedSlide> }),
    ]);
    let config = DeckConfig::default()
        .with_effect(TransitionEffect::Shuffle)
        .with_indicators();

    view! {
        <Title text="Developer" />
        <SlideDeck slides config background=BLACK />
    }
}
