//! The `skills[...]` lookup behind the terminal widget's `skills.py` tab.

pub const ALL_KEY: &str = "all";

pub struct SkillCategory {
    pub key: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        key: "languages",
        skills: &[
            "Python",
            "JavaScript",
            "TypeScript",
            "C",
            "C++",
            "C#",
            "Java",
            "Swift",
            "Go",
            "R",
            "Verilog",
        ],
    },
    SkillCategory {
        key: "frontend",
        skills: &[
            "React",
            "Vue.js",
            "Angular",
            "Redux",
            "Three.js",
            "Tailwind CSS",
            "Vite",
        ],
    },
    SkillCategory {
        key: "backend",
        skills: &["Node.js", "Django", "Flask", "SpringBoot", "ASP.NET"],
    },
    SkillCategory {
        key: "databases",
        skills: &["MySQL", "PostgreSQL", "MongoDB"],
    },
    SkillCategory {
        key: "cloud_devops",
        skills: &["AWS", "Google Cloud", "Kubernetes", "Docker"],
    },
    SkillCategory {
        key: "ai_ml",
        skills: &["TensorFlow", "PyTorch", "OpenCV"],
    },
    SkillCategory {
        key: "specialized",
        skills: &[
            "Cryptography",
            "Operational Research",
            "Physical Modeling",
            "OpenGL",
            "Computer Vision",
            "Computer Graphics",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsOutput {
    All,
    Category(&'static str),
    Error,
}

/// How a rendered output line should be coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Declaration,
    Key,
    Item,
    Error,
    Plain,
}

fn category(key: &str) -> Option<&'static SkillCategory> {
    SKILLS.iter().find(|c| c.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    SKILLS.iter().map(|c| c.key)
}

/// Keys (plus `all`) containing `input`, ignoring case
pub fn options(input: &str) -> Vec<&'static str> {
    let needle = input.to_lowercase();
    keys()
        .chain(std::iter::once(ALL_KEY))
        .filter(|k| needle.is_empty() || k.to_lowercase().contains(&needle))
        .collect()
}

pub fn evaluate(input: &str) -> SkillsOutput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "skills" | ALL_KEY => SkillsOutput::All,
        key => category(key)
            .map(|c| SkillsOutput::Category(c.key))
            .unwrap_or(SkillsOutput::Error),
    }
}

fn push_list(out: &mut String, items: &[&str], indent: &str) {
    for (i, item) in items.iter().enumerate() {
        let comma = if i + 1 < items.len() { "," } else { "" };
        out.push_str(&format!("{indent}\"{item}\"{comma}\n"));
    }
}

/// Render an output the way a Python shell would print the dictionary
pub fn render(output: SkillsOutput) -> String {
    match output {
        SkillsOutput::All => {
            let mut content = String::from("skills = {\n");
            for (i, c) in SKILLS.iter().enumerate() {
                content.push_str(&format!("  \"{}\": [\n", c.key));
                push_list(&mut content, c.skills, "    ");
                let comma = if i + 1 < SKILLS.len() { "," } else { "" };
                content.push_str(&format!("  ]{comma}\n"));
            }
            content.push_str("}\n");
            content
        }
        SkillsOutput::Category(key) => {
            let Some(c) = category(key) else {
                return render(SkillsOutput::Error);
            };
            let mut content = format!("skills[\"{key}\"] = [\n");
            push_list(&mut content, c.skills, "  ");
            content.push_str("]\n");
            content
        }
        SkillsOutput::Error => format!(
            "KeyError: Invalid key. Available keys: {}\n",
            keys().collect::<Vec<_>>().join(", ")
        ),
    }
}

pub fn classify(line: &str) -> LineKind {
    let has_skills = line.contains("skills");
    if has_skills && line.contains('=') {
        LineKind::Declaration
    } else if line.contains("\":") && !has_skills {
        LineKind::Key
    } else if line.contains("KeyError") || line.contains("Available keys") {
        LineKind::Error
    } else if line.contains('"') && !line.contains(':') && !has_skills {
        LineKind::Item
    } else {
        LineKind::Plain
    }
}

/// Split a rendered line into the part before, the coloured part, and the
/// part after.
pub fn highlight(line: &str) -> (LineKind, &str, &str, &str) {
    let kind = classify(line);
    let span = match kind {
        LineKind::Declaration => line.find("skills").map(|s| (s, s + "skills".len())),
        LineKind::Key => line
            .find('"')
            .and_then(|s| line[s + 1..].find('"').map(|e| (s, s + e + 2))),
        LineKind::Item | LineKind::Error => Some((0, line.len())),
        LineKind::Plain => None,
    };
    let (start, end) = span.unwrap_or((0, 0));
    (kind, &line[..start], &line[start..end], &line[end..])
}

/// Input box state for the skills prompt, including the suggestion dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    pub input: String,
    pub selected: usize,
    pub open: bool,
}

impl Autocomplete {
    pub fn options(&self) -> Vec<&'static str> {
        options(&self.input)
    }

    pub fn type_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.open = !self.input.is_empty() && !self.options().is_empty();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.open && self.selected + 1 < self.options().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.open && self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Tab: fill the input with the highlighted suggestion
    pub fn accept(&mut self) {
        if !self.open {
            return;
        }
        if let Some(option) = self.options().get(self.selected) {
            self.input = option.to_string();
        }
        self.dismiss();
    }

    /// Click on a suggestion
    pub fn choose(&mut self, option: &str) {
        self.input = option.to_string();
        self.dismiss();
    }

    pub fn dismiss(&mut self) {
        self.open = false;
        self.selected = 0;
    }

    /// Enter: evaluate the highlighted suggestion if the dropdown is open,
    /// otherwise whatever was typed. Clears the prompt.
    pub fn submit(&mut self) -> SkillsOutput {
        let query = match self.open.then(|| self.options().get(self.selected).copied()) {
            Some(Some(option)) => option.to_string(),
            _ => self.input.clone(),
        };
        self.input.clear();
        self.dismiss();
        evaluate(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(""), SkillsOutput::All);
        assert_eq!(evaluate("  Skills "), SkillsOutput::All);
        assert_eq!(evaluate("ALL"), SkillsOutput::All);
        assert_eq!(evaluate("frontend"), SkillsOutput::Category("frontend"));
        assert_eq!(evaluate("AI_ML"), SkillsOutput::Category("ai_ml"));
        assert_eq!(evaluate("\"frontend\""), SkillsOutput::Error);
        assert_eq!(evaluate("cooking"), SkillsOutput::Error);
    }

    #[test]
    fn test_options() {
        assert_eq!(options("").len(), SKILLS.len() + 1);
        assert_eq!(options("end"), vec!["frontend", "backend"]);
        assert_eq!(options("AL"), vec!["specialized", "all"]);
        assert!(options("zzz").is_empty());
    }

    #[test]
    fn test_render_category() {
        let text = render(SkillsOutput::Category("databases"));
        assert_eq!(
            text,
            "skills[\"databases\"] = [\n  \"MySQL\",\n  \"PostgreSQL\",\n  \"MongoDB\"\n]\n"
        );
    }

    #[test]
    fn test_render_all() {
        let text = render(SkillsOutput::All);
        assert!(text.starts_with("skills = {\n  \"languages\": [\n    \"Python\",\n"));
        assert!(text.ends_with("    \"Computer Graphics\"\n  ]\n}\n"));
        // no trailing comma after the last category
        assert!(!text.contains("],\n}"));
    }

    #[test]
    fn test_render_error() {
        let text = render(SkillsOutput::Error);
        assert!(text.starts_with("KeyError: Invalid key. Available keys: languages, frontend"));
        assert!(text.trim_end().ends_with("specialized"));
    }

    #[test]
    fn test_classify_rendered_lines() {
        let all = render(SkillsOutput::All);
        let kinds: Vec<LineKind> = all.lines().map(classify).collect();
        assert_eq!(kinds[0], LineKind::Declaration);
        assert_eq!(kinds[1], LineKind::Key);
        assert_eq!(kinds[2], LineKind::Item);
        assert_eq!(classify("  ],"), LineKind::Plain);
        assert_eq!(classify("}"), LineKind::Plain);
        assert_eq!(classify("skills[\"ai_ml\"] = ["), LineKind::Declaration);
        assert_eq!(
            classify(render(SkillsOutput::Error).trim_end()),
            LineKind::Error
        );
    }

    #[test]
    fn test_highlight_spans() {
        assert_eq!(
            highlight("skills = {"),
            (LineKind::Declaration, "", "skills", " = {")
        );
        assert_eq!(
            highlight("  \"languages\": ["),
            (LineKind::Key, "  ", "\"languages\"", ": [")
        );
        assert_eq!(
            highlight("    \"Go\","),
            (LineKind::Item, "", "    \"Go\",", "")
        );
        assert_eq!(highlight("  ],"), (LineKind::Plain, "", "", "  ],"));
        // mid-typing, a key looks like an item until its colon arrives
        assert_eq!(highlight("  \"lan").0, LineKind::Item);
    }

    #[test]
    fn test_autocomplete_flow() {
        let mut ac = Autocomplete::default();
        ac.type_input("a");
        assert!(ac.open);
        let opts = ac.options();
        assert!(opts.len() > 2);

        ac.select_next();
        ac.select_next();
        assert_eq!(ac.selected, 2);
        ac.select_prev();
        assert_eq!(ac.selected, 1);

        let expected = opts[1];
        ac.accept();
        assert_eq!(ac.input, expected);
        assert!(!ac.open);

        let out = ac.submit();
        assert_eq!(out, evaluate(expected));
        assert!(ac.input.is_empty());
    }

    #[test]
    fn test_submit_uses_highlighted_option() {
        let mut ac = Autocomplete::default();
        ac.type_input("back");
        assert_eq!(ac.submit(), SkillsOutput::Category("backend"));

        ac.type_input("nothing-matches");
        assert!(!ac.open);
        assert_eq!(ac.submit(), SkillsOutput::Error);

        assert_eq!(ac.submit(), SkillsOutput::All);
    }

    #[test]
    fn test_select_bounds() {
        let mut ac = Autocomplete::default();
        ac.select_next();
        assert_eq!(ac.selected, 0);
        ac.type_input("backend");
        ac.select_next();
        assert_eq!(ac.selected, 0);
        ac.dismiss();
        ac.choose("ai_ml");
        assert_eq!(ac.input, "ai_ml");
    }
}
