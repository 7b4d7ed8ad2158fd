use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const EXPERIENCE: &[Role] = &[
    Role {
        title: "Full Stack Engineer",
        company: "Vantage Risk",
        period: "Jan 2024 - Present",
        summary: "Developing AI-powered risk assessment tools and fintech solutions. Leading frontend architecture and implementing machine learning integrations.",
    },
    Role {
        title: "Full Stack Engineer",
        company: "Theom.AI",
        period: "Apr 2023 - Dec 2023",
        summary: "Built cybersecurity platforms with AI-driven threat detection. Developed scalable web applications and integrated machine learning models.",
    },
    Role {
        title: "Research Assistant",
        company: "UC Irvine",
        period: "Jul 2021 - Jun 2022",
        summary: "Conducted research in machine learning and data analysis. Published papers and contributed to open-source research projects.",
    },
];

struct Project {
    name: &'static str,
    stack: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "AI Risk Assessment Platform",
        stack: "React • Python • TensorFlow • AWS",
        summary: "Built a comprehensive platform for automated risk assessment using machine learning models. Processes thousands of data points to provide real-time risk scores.",
    },
    Project {
        name: "Cybersecurity Dashboard",
        stack: "Next.js • Node.js • PostgreSQL • Docker",
        summary: "Developed a real-time security monitoring dashboard with threat detection capabilities. Features automated alerts and comprehensive reporting.",
    },
    Project {
        name: "Portfolio Terminal",
        stack: "TypeScript • React • Framer Motion",
        summary: "Interactive terminal-style portfolio with custom commands, animations, and dynamic content. Features advanced typing effects and smooth transitions.",
    },
    Project {
        name: "Research Platform",
        stack: "Python • Jupyter • Pandas • Matplotlib",
        summary: "Built data analysis tools for academic research, processing large datasets and generating insights. Published findings in peer-reviewed journals.",
    },
];

const FRONTEND: &[&str] = &[
    "React & Next.js",
    "TypeScript & JavaScript",
    "Tailwind CSS & Styled Components",
    "Framer Motion & Animations",
    "HTML5 & CSS3",
];

const BACKEND: &[&str] = &[
    "Python & Node.js",
    "AI/ML & TensorFlow",
    "Docker & AWS",
    "PostgreSQL & MongoDB",
    "Git & CI/CD",
];

const SLIDE_TITLE: &str = "font-sans font-black text-[#1a1a1a] tracking-tight leading-tight text-[clamp(2rem,4vw,3.5rem)] m-0";
const EYEBROW: &str = "font-sans text-sm text-[#666666] uppercase font-semibold tracking-wide m-0";
const BODY: &str = "font-sans text-[#333333] leading-relaxed text-[clamp(1rem,2vw,1.25rem)] m-0";

/// White card centred on the slide
#[component]
pub fn SlideCard(children: Children) -> impl IntoView {
    view! {
        <div class="relative w-full h-screen flex items-center justify-center p-16">
            <div class="w-full max-w-4xl h-full max-h-[600px] flex items-center justify-center rounded-lg shadow-lg bg-white border border-[#e5e5e5]">
                {children()}
            </div>
        </div>
    }
}

/// Large framed panel used by the grid deck. `dark` is for the hero.
#[component]
pub fn FramedSlide(children: Children, #[prop(optional)] dark: bool) -> impl IntoView {
    let background = if dark { "#473f3f" } else { "#ffffff" };
    view! {
        <div class="w-full h-screen flex items-center justify-center">
            <div
                class="relative rounded-lg shadow-xl flex items-center justify-center w-[90vw] h-[90vh] border border-[#e5e5e5]"
                style=format!("background-color: {background};")
            >
                {children()}
            </div>
        </div>
    }
}

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="p-0 m-0 list-none space-y-2">
            {items.iter().map(|item| view! { <li>{format!("• {item}")}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn IntroSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col justify-between p-12">
            <h1 class=SLIDE_TITLE>"Hi, we are Benjamin."</h1>
            <div class="space-y-8">
                <p class=EYEBROW>"Here's how we got from 0 to 1"</p>
                <div>
                    <p class=BODY>
                        "A solo developer and designer established in 2024 with passion for creating digital solutions. Products I work on are used by developers and creators worldwide."
                    </p>
                    <p class=format!("{BODY} mt-4")>
                        "I help individuals and companies understand, develop, and position their products while solving their users' pain points."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ApproachSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col justify-between p-12">
            <h1 class=SLIDE_TITLE>"Meticulous and experienced."</h1>
            <div class="space-y-8">
                <p class=EYEBROW>"To get where I am today, I focus on quality and learning."</p>
                <div class=BODY>
                    {bullet_list(
                        &[
                            "I strive for excellence in every project",
                            "Continuous learning and skill development",
                            "Attention to detail is my core principle",
                            "Delivering on time and budget always",
                        ],
                    )}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SpecialtySlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col justify-between p-12">
            <h1 class=SLIDE_TITLE>"Specialized in"</h1>
            <div class="grid grid-cols-2 gap-8">
                <div>
                    <p class=format!("{EYEBROW} mb-4")>"Development"</p>
                    <div class=BODY>
                        {bullet_list(
                            &["React & Next.js", "TypeScript & JavaScript", "API & Backend Development"],
                        )}
                    </div>
                </div>
                <div>
                    <p class=format!("{EYEBROW} mb-4")>"Design"</p>
                    <div class=BODY>
                        {bullet_list(&["UI/UX Design", "Design Systems", "Motion Design"])}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn WhoSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full relative p-12">
            <h1 class=SLIDE_TITLE>"Hi, this is Benjamin"</h1>
            <div class="absolute left-12 right-12 top-1/2 -translate-y-1/2 h-[200px] overflow-hidden rounded-lg bg-white">
                <Skyline />
            </div>
            <div class="absolute bottom-12 right-12 max-w-2xl">
                <p class=BODY>
                    "I'm a software developer who loves building digital solutions that make a real difference. I work as a full-stack engineer and constantly enjoy learning new technologies to expand my knowledge and skills. My passion lies in creating practical applications that solve real-world problems while exploring the intersection of technology and creativity in every project I work on."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col justify-between p-12">
            <h1 class=SLIDE_TITLE>"Skills & Technologies"</h1>
            <div class="grid grid-cols-2 gap-12">
                <div>
                    <p class=format!("{EYEBROW} mb-4")>"Frontend"</p>
                    <div class=BODY>{bullet_list(FRONTEND)}</div>
                </div>
                <div>
                    <p class=format!("{EYEBROW} mb-4")>"Backend & Tools"</p>
                    <div class=BODY>{bullet_list(BACKEND)}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col p-12 gap-8 overflow-y-auto">
            <h1 class=SLIDE_TITLE>"Experience"</h1>
            {EXPERIENCE
                .iter()
                .map(|role| {
                    view! {
                        <div class="border-l-2 border-[#1a1a1a] pl-6">
                            <div class="flex justify-between items-baseline gap-4">
                                <div>
                                    <h3 class="font-sans font-bold text-xl text-[#1a1a1a] m-0">
                                        {role.title}
                                    </h3>
                                    <p class="font-sans text-[#666666] m-0">{role.company}</p>
                                </div>
                                <span class="font-mono text-sm text-[#999999] whitespace-nowrap">
                                    {role.period}
                                </span>
                            </div>
                            <p class=format!("{BODY} mt-2 text-base")>{role.summary}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsSlide() -> impl IntoView {
    view! {
        <div class="w-full h-full flex flex-col p-12 gap-8 overflow-y-auto">
            <h1 class=SLIDE_TITLE>"Featured Projects"</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="rounded-lg border border-[#e5e5e5] p-6">
                                <h3 class="font-sans font-bold text-xl text-[#1a1a1a] m-0">
                                    {project.name}
                                </h3>
                                <p class="font-mono text-xs text-[#666666] mt-1">{project.stack}</p>
                                <p class=format!("{BODY} mt-3 text-base")>{project.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

const SKYLINE_SEED: u64 = 0x5eed_c17e;
const SKYLINE_BUILDINGS: usize = 100;

const BUILDING_COLOURS: [&str; 9] = [
    "#000000", "#0d1117", "#1a1a1a", "#262626", "#333333", "#404040", "#4d4d4d", "#595959",
    "#666666",
];

/// Roof outlines; `None` is a flat top. Shape 2 carries an antenna.
const ROOFS: [Option<&str>; 10] = [
    None,
    Some("polygon(0 100%, 0 70%, 25% 70%, 25% 50%, 50% 50%, 50% 30%, 75% 30%, 75% 15%, 100% 15%, 100% 100%)"),
    None,
    Some("polygon(0 100%, 0 40%, 50% 0%, 100% 40%, 100% 100%)"),
    Some("polygon(0 100%, 0 60%, 20% 50%, 30% 30%, 40% 20%, 60% 20%, 70% 30%, 80% 50%, 100% 60%, 100% 100%)"),
    Some("polygon(0 100%, 0 30%, 20% 20%, 30% 10%, 70% 10%, 80% 20%, 100% 30%, 100% 100%)"),
    Some("polygon(0 100%, 0 80%, 60% 60%, 80% 40%, 90% 20%, 100% 0%, 100% 100%)"),
    Some("polygon(0 100%, 0 40%, 15% 40%, 15% 30%, 25% 30%, 25% 40%, 40% 40%, 40% 25%, 60% 25%, 60% 40%, 75% 40%, 75% 30%, 85% 30%, 85% 40%, 100% 40%, 100% 100%)"),
    Some("polygon(0 100%, 0 50%, 60% 50%, 60% 20%, 100% 20%, 100% 100%)"),
    Some("polygon(0 100%, 0 85%, 30% 85%, 30% 65%, 50% 65%, 50% 45%, 70% 45%, 70% 25%, 90% 25%, 90% 10%, 100% 10%, 100% 100%)"),
];
const ANTENNA_ROOF: usize = 2;
const PYRAMID_ROOF: usize = 3;

/// Small deterministic generator so server and browser draw the same city
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Building {
    width: f64,
    height: f64,
    colour: &'static str,
    margin: f64,
    roof: usize,
    depth: usize,
    columns: usize,
    /// window grid, row-major
    lit: Vec<bool>,
}

impl Building {
    fn style(&self) -> String {
        let mut style = format!(
            "width: {:.1}px; height: {:.1}%; background-color: {}; margin-right: {:.1}px; z-index: {}; box-shadow: inset -2px 0 0 rgba(0,0,0,0.5); image-rendering: pixelated;",
            self.width, self.height, self.colour, self.margin, self.depth
        );
        if let Some(clip) = ROOFS[self.roof] {
            style.push_str(&format!(" clip-path: {clip};"));
        }
        style
    }
}

fn skyline(seed: u64, count: usize) -> Vec<Building> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let width = rng.next_f64() * 80.0 + 15.0;
            let height = rng.next_f64() * 95.0 + 20.0;
            let colour = BUILDING_COLOURS[rng.below(BUILDING_COLOURS.len())];
            let margin = rng.next_f64() * 20.0 - 15.0;
            let roof = rng.below(ROOFS.len());
            let depth = rng.below(10) + 1;
            let columns = if width < 40.0 {
                2
            } else if width < 60.0 {
                3
            } else {
                4
            };
            let floors = (height / 100.0 * 8.0) as usize;
            let lit = (0..floors * columns).map(|_| rng.next_f64() > 0.3).collect();
            Building {
                width,
                height,
                colour,
                margin,
                roof,
                depth,
                columns,
                lit,
            }
        })
        .collect()
}

#[component]
fn Skyline() -> impl IntoView {
    let buildings = skyline(SKYLINE_SEED, SKYLINE_BUILDINGS);
    view! {
        <div class="absolute bottom-0 flex items-end h-full w-[200%] animate-city-slide">
            {buildings
                .into_iter()
                .map(|building| {
                    let antenna = (building.roof == ANTENNA_ROOF)
                        .then(|| {
                            view! {
                                <div
                                    class="absolute -top-[15px] left-1/2 -translate-x-1/2 w-[2px] h-[15px]"
                                    style=format!("background-color: {};", building.colour)
                                ></div>
                            }
                        });
                    let windows = building
                        .lit
                        .iter()
                        .enumerate()
                        .map(|(i, lit)| {
                            let floor = i / building.columns;
                            // the pyramid roof has no room for the top floors
                            let hidden = building.roof == PYRAMID_ROOF && floor < 2;
                            view! {
                                <div
                                    class="w-[4px] h-[6px] border border-[#666666]"
                                    style=format!(
                                        "background-color: {}; opacity: {};",
                                        if *lit { "#ffffff" } else { "#404040" },
                                        if hidden { 0 } else { 1 },
                                    )
                                ></div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="flex-shrink-0 relative" style=building.style()>
                            {antenna}
                            <div
                                class="absolute inset-1 grid gap-[3px] p-1"
                                style=format!(
                                    "grid-template-columns: repeat({}, 1fr);",
                                    building.columns,
                                )
                            >
                                {windows}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skyline_is_deterministic() {
        assert_eq!(skyline(7, 20), skyline(7, 20));
        assert_ne!(skyline(7, 20), skyline(8, 20));
    }

    #[test]
    fn test_skyline_ranges() {
        for b in skyline(SKYLINE_SEED, SKYLINE_BUILDINGS) {
            assert!((15.0..95.0).contains(&b.width));
            assert!((20.0..115.0).contains(&b.height));
            assert!((-15.0..5.0).contains(&b.margin));
            assert!((1..=10).contains(&b.depth));
            assert!(b.roof < ROOFS.len());
            assert_eq!(b.lit.len() % b.columns, 0);
            assert_eq!(b.lit.len() / b.columns, (b.height / 100.0 * 8.0) as usize);
        }
    }

    #[test]
    fn test_building_style() {
        let flat = Building {
            width: 20.0,
            height: 50.0,
            colour: "#000000",
            margin: -1.0,
            roof: 0,
            depth: 3,
            columns: 2,
            lit: vec![true, false],
        };
        let style = flat.style();
        assert!(style.starts_with("width: 20.0px; height: 50.0%; background-color: #000000;"));
        assert!(!style.contains("clip-path"));

        let pyramid = Building {
            roof: PYRAMID_ROOF,
            ..flat
        };
        assert!(pyramid.style().contains("clip-path: polygon(0 100%, 0 40%"));
    }
}
