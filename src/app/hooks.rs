use std::sync::Arc;

use chrono::Utc;
use leptos::prelude::*;
use leptos_use::{
    use_interval_fn, use_interval_fn_with_options, use_timeout_fn, utils::Pausable,
    UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::{clock, typewriter::Typewriter};

/// A [`Typewriter`] ticking on an interval. The interval pauses itself once
/// the text is fully shown.
#[derive(Clone)]
pub struct TypewriterHandle {
    writer: RwSignal<Typewriter>,
    resume: Arc<dyn Fn() + Send + Sync>,
}

impl TypewriterHandle {
    pub fn visible(&self) -> Signal<String> {
        let writer = self.writer;
        Signal::derive(move || writer.with(|t| t.visible().to_string()))
    }

    pub fn is_done(&self) -> Signal<bool> {
        let writer = self.writer;
        Signal::derive(move || writer.with(Typewriter::is_done))
    }

    pub fn start(&self) {
        (self.resume)();
    }

    pub fn restart(&self, text: impl Into<String>) {
        let text = text.into();
        self.writer.update(|t| t.reset(text));
        self.start();
    }

    pub fn skip(&self) {
        self.writer.update(Typewriter::finish);
    }
}

/// Type out `text` one character every `tick_ms`. With `start_after_ms` the
/// typing begins on its own after that delay, otherwise call
/// [`TypewriterHandle::start`].
pub fn use_typewriter(
    text: impl Into<String>,
    tick_ms: u64,
    start_after_ms: Option<f64>,
) -> TypewriterHandle {
    let writer = RwSignal::new(Typewriter::new(text));
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            writer.update(|t| {
                t.tick();
            })
        },
        tick_ms,
        UseIntervalFnOptions::default().immediate(false),
    );
    Effect::new(move |_| {
        if writer.with(Typewriter::is_done) {
            pause();
        }
    });

    let handle = TypewriterHandle {
        writer,
        resume: Arc::new(resume),
    };
    if let Some(delay) = start_after_ms {
        let delayed = handle.clone();
        let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| delayed.start(), delay);
        // effects only run in the browser
        Effect::new(move |_| untrack(|| start(())));
    }
    handle
}

/// New York wall clock, refreshed every minute. Empty until hydrated so the
/// server render never disagrees with the browser.
pub fn use_new_york_clock() -> Signal<String> {
    let (time, set_time) = signal(String::new());
    let refresh = move || set_time.set(clock::new_york_time(Utc::now()));
    let _ = use_interval_fn(refresh, 60_000);
    Effect::new(move |_| refresh());
    time.into()
}
