use leptos::{ev::KeyboardEvent, prelude::*};

use crate::{
    skills::{self, Autocomplete, LineKind, SkillsOutput},
    theme::{Palette, Theme},
};

use super::hooks::use_typewriter;

const MONO: &str = "font-family: \"JetBrains Mono\", monospace;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Intro,
    Skills,
    Projects,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Intro, Tab::Skills, Tab::Projects];

    pub fn file_name(&self) -> &'static str {
        match self {
            Tab::Intro => "intro.md",
            Tab::Skills => "skills.py",
            Tab::Projects => "projects.html",
        }
    }
}

fn line_colour(kind: LineKind, palette: &Palette) -> &'static str {
    match kind {
        LineKind::Declaration => palette.comment,
        LineKind::Key => palette.variable,
        LineKind::Item => palette.string,
        LineKind::Error => palette.error,
        LineKind::Plain => palette.text_secondary,
    }
}

fn tab_style(active: bool, palette: &Palette) -> String {
    let (background, colour) = if active {
        (palette.terminal_tab_active, palette.text_primary)
    } else {
        (palette.terminal_tab, palette.text_secondary)
    };
    format!(
        "{MONO} font-size: 12px; background-color: {background}; color: {colour}; border-color: {};",
        palette.terminal_border
    )
}

/// Tabbed fake terminal on the developer page
#[component]
pub fn Terminal(#[prop(optional, into)] class: String) -> impl IntoView {
    let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));
    let palette = move || theme.get().palette();
    let active = RwSignal::new(Tab::Intro);

    view! {
        <div
            class=format!("rounded-lg overflow-hidden shadow-2xl {class}")
            style=move || format!("background-color: {};", palette().terminal_bg)
        >
            <div
                class="px-4 py-3 flex items-center justify-between"
                style=move || format!("background-color: {};", palette().terminal_header)
            >
                <div class="flex items-center space-x-2">
                    {move || {
                        let dots = palette().terminal_dots;
                        [dots.red, dots.yellow, dots.green]
                            .into_iter()
                            .map(|colour| {
                                view! {
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {colour};")
                                    ></div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div style=move || {
                    format!("{MONO} font-size: 12px; color: {};", palette().text_secondary)
                }>"benjamin@portfolio:~"</div>
            </div>

            <div
                class="flex border-b"
                style=move || {
                    format!(
                        "background-color: {}; border-color: {};",
                        palette().terminal_header,
                        palette().terminal_border,
                    )
                }
            >
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="px-4 py-2 text-sm border-r transition-colors"
                                style=move || tab_style(active.get() == tab, palette())
                                on:click=move |_| active.set(tab)
                            >
                                {tab.file_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="p-6 min-h-[500px]">
                <Show when=move || active.get() == Tab::Intro>
                    <IntroTab theme />
                </Show>
                <SkillsTab theme active />
                <Show when=move || active.get() == Tab::Projects>
                    <div
                        class="animate-fade-in-up"
                        style=move || {
                            format!(
                                "{MONO} font-size: 12px; line-height: 1.6; color: {};",
                                palette().text_primary,
                            )
                        }
                    >
                        <div class="mb-4" style=move || format!("color: {};", palette().command)>
                            "$ open projects.html"
                        </div>
                        <div style=move || format!("color: {};", palette().text_secondary)>
                            "Loading project portfolio..."
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn IntroTab(theme: RwSignal<Theme>) -> impl IntoView {
    let palette = move || theme.get().palette();
    let colour = move |pick: fn(&Palette) -> &'static str| {
        move || format!("color: {};", pick(palette()))
    };
    let field = move |name: &'static str, value: &'static str, last: bool| {
        view! {
            <div>
                <span style=colour(|p| p.command)>{format!("{name}:")}</span>
                " "
                <span style=colour(|p| p.string)>{format!("\"{value}\"")}</span>
                {(!last).then_some(",")}
            </div>
        }
    };

    view! {
        <div
            class="animate-fade-in-up"
            style=move || {
                format!("{MONO} font-size: 14px; line-height: 1.6; color: {};", palette().text_primary)
            }
        >
            <div class="mb-4" style=colour(|p| p.command)>
                "$ cat intro.md"
            </div>
            <div class="space-y-4">
                <div class="text-lg font-medium" style=colour(|p| p.variable)>
                    "# Hello! Welcome to my World 👋"
                </div>
                <div style=colour(|p| p.text_secondary)>
                    <div class="mb-3">
                        <span style=colour(|p| p.keyword)>"const"</span>
                        " "
                        <span style=colour(|p| p.variable)>"philosophy"</span>
                        " = {"
                    </div>
                    <div class="pl-4 space-y-2">
                        {field("build", "thoughtful solutions", false)}
                        {field("create", "with intention and care", false)}
                        {field("think", "from angles and dimensions", true)}
                    </div>
                    <div class="mt-3">"}"</div>
                </div>
                <div class="mt-6" style=colour(|p| p.text_secondary)>
                    <div class="mb-2">
                        <span style=colour(|p| p.comment)>"//"</span>
                        " Always learning, always building"
                    </div>
                    <div>
                        <span style=colour(|p| p.comment)>"//"</span>
                        " Let's create something amazing together"
                    </div>
                </div>
                <div class="mt-6" style=colour(|p| p.cursor)>
                    <span class="animate-pulse">"▊"</span>
                </div>
            </div>
        </div>
    }
}

/// The `skills[...]` prompt. Stays mounted while hidden so the last answer
/// survives tab switches; it is retyped each time the tab is shown.
#[component]
fn SkillsTab(theme: RwSignal<Theme>, active: RwSignal<Tab>) -> impl IntoView {
    let palette = move || theme.get().palette();
    let prompt = RwSignal::new(Autocomplete::default());
    let output = RwSignal::new(SkillsOutput::All);
    let typed = use_typewriter("", 1, None);

    let restarter = typed.clone();
    Effect::watch(
        move || (active.get(), output.get()),
        move |(tab, output), _, _| {
            if *tab == Tab::Skills {
                restarter.restart(skills::render(*output));
            }
        },
        true,
    );

    let keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            if let Some(result) = prompt.try_update(Autocomplete::submit) {
                output.set(result);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            prompt.update(Autocomplete::select_next);
        }
        "ArrowUp" => {
            ev.prevent_default();
            prompt.update(Autocomplete::select_prev);
        }
        "Tab" => {
            if prompt.with_untracked(|p| p.open) {
                ev.prevent_default();
                prompt.update(Autocomplete::accept);
            }
        }
        "Escape" => prompt.update(Autocomplete::dismiss),
        _ => {}
    };

    let visible = typed.visible();
    let done = typed.is_done();
    let skipper = typed.clone();
    let lines = move || {
        let palette = palette();
        visible
            .get()
            .split('\n')
            .map(|line| {
                let (kind, before, coloured, after) = skills::highlight(line);
                let text = if line.is_empty() { "\u{a0}" } else { before };
                view! {
                    <div class="min-h-[1.2em]">
                        {text.to_string()}
                        <span style=format!("color: {};", line_colour(kind, palette))>
                            {coloured.to_string()}
                        </span>
                        {after.to_string()}
                    </div>
                }
            })
            .collect_view()
    };
    let dropdown = move || {
        let selected = prompt.with(|p| p.selected);
        prompt
            .with(Autocomplete::options)
            .into_iter()
            .enumerate()
            .map(|(index, option)| {
                let highlighted = index == selected;
                view! {
                    <div
                        class=if highlighted {
                            "px-3 py-2 cursor-pointer transition-colors bg-blue-600 text-white"
                        } else {
                            "px-3 py-2 cursor-pointer transition-colors hover:bg-gray-700"
                        }
                        style=format!("{MONO} font-size: 12px;")
                        on:click=move |_| prompt.update(|p| p.choose(option))
                    >
                        <span style=move || format!("color: {};", palette().variable)>
                            {format!("\"{option}\"")}
                        </span>
                        {(option == skills::ALL_KEY)
                            .then(|| {
                                view! {
                                    <span
                                        class="ml-2"
                                        style=move || format!("color: {};", palette().text_muted)
                                    >
                                        "# show all skills"
                                    </span>
                                }
                            })}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || active.get() == Tab::Skills>
            <div
                class="animate-fade-in-up"
                style=move || {
                    format!("{MONO} font-size: 12px; line-height: 1.6; color: {};", palette().text_primary)
                }
            >
                <div class="mb-4" style=move || format!("color: {};", palette().command)>
                    "$ python3 skills.py"
                </div>
                <div class="space-y-4">
                    <div style=move || format!("color: {};", palette().command)>
                        <div>"# Interactive Python Shell"</div>
                        <div>"# Try: skills[\"languages\"] or type a key name"</div>
                    </div>
                    <div class="mb-4 relative">
                        <div class="flex items-center">
                            <span class="mr-2" style=move || format!("color: {};", palette().command)>
                                ">>> skills["
                            </span>
                            <input
                                type="text"
                                class="bg-transparent outline-none flex-1"
                                style=move || format!("{MONO} color: {};", palette().string)
                                placeholder="key_name # type 'all' for all skills"
                                prop:value=move || prompt.with(|p| p.input.clone())
                                on:input=move |ev| {
                                    prompt.update(|p| p.type_input(event_target_value(&ev)))
                                }
                                on:keydown=keydown
                            />
                            <span style=move || format!("color: {};", palette().command)>"]"</span>
                        </div>
                        <Show when=move || prompt.with(|p| p.open)>
                            <div
                                class="absolute top-full left-0 right-0 mt-1 border rounded shadow-lg z-10"
                                style=move || {
                                    format!(
                                        "background-color: {}; border-color: {};",
                                        palette().terminal_header,
                                        palette().terminal_border,
                                    )
                                }
                            >
                                {dropdown}
                            </div>
                        </Show>
                    </div>
                    <div
                        class="whitespace-pre-wrap font-mono text-sm leading-relaxed cursor-pointer"
                        style=move || format!("color: {};", palette().text_secondary)
                        on:click={
                            let skipper = skipper.clone();
                            move |_| skipper.skip()
                        }
                    >
                        {lines}
                        <Show when=move || !done.get()>
                            <span
                                class="animate-pulse"
                                style=move || format!("color: {};", palette().cursor)
                            >
                                "▊"
                            </span>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK, LIGHT};

    #[test]
    fn test_tab_files() {
        let names: Vec<_> = Tab::ALL.iter().map(Tab::file_name).collect();
        assert_eq!(names, vec!["intro.md", "skills.py", "projects.html"]);
    }

    #[test]
    fn test_line_colours() {
        assert_eq!(line_colour(LineKind::Error, &DARK), DARK.error);
        assert_eq!(line_colour(LineKind::Item, &LIGHT), LIGHT.string);
        assert_ne!(
            line_colour(LineKind::Key, &DARK),
            line_colour(LineKind::Declaration, &DARK)
        );
    }

    #[test]
    fn test_active_tab_style() {
        let active = tab_style(true, &DARK);
        assert!(active.contains(&format!("background-color: {};", DARK.terminal_tab_active)));
        assert!(active.contains(&format!("color: {};", DARK.text_primary)));
        let idle = tab_style(false, &DARK);
        assert!(idle.contains(&format!("color: {};", DARK.text_secondary)));
    }
}
