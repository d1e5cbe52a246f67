use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{
    hooks::{use_scroll_tracker, use_spring, use_typewriter},
    nav::NavBar,
    reveal::{use_revealed, Reveal},
};
use crate::{
    config::SiteConfig,
    content::{
        projects_featured_first, skill_bar_width, Icon, Skill, ACHIEVEMENTS, PROFILE, SKILLS, STATS,
    },
    motion::{Transition, Variant},
    scroll::HeroTransform,
};

/// Delay between siblings in a staggered group, in seconds.
const STAGGER: f64 = 0.1;

/// Top-level controller for the portfolio page: the only place scroll state
/// is written. Children get it read-only through context.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let config = SiteConfig::global();
    let scroll = use_scroll_tracker(config.scroll.clone());
    provide_context(scroll.state);

    let shift = use_spring(
        Signal::derive(move || scroll.hero.get().translate_y),
        config.spring,
    );
    let fade = use_spring(
        Signal::derive(move || scroll.hero.get().opacity),
        config.spring,
    );
    let hero_style = Signal::derive(move || {
        HeroTransform {
            progress: scroll.hero.with(|h| h.progress),
            translate_y: shift.get(),
            opacity: fade.get().clamp(0.0, 1.0),
        }
        .style()
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-indigo-900">
            <Backdrop />
            <NavBar />
            <div class="relative z-10">
                <Hero style=hero_style />
                <SkillsSection />
                <ProjectsSection />
                <AchievementsSection />
                <StatsSection />
                <ContactSection />
                <Footer />
            </div>
        </div>
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class="absolute -top-40 -right-40 w-80 h-80 bg-blue-500/20 rounded-full blur-3xl animate-pulse"></div>
            <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-500/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-emerald-500/10 rounded-full blur-3xl animate-pulse delay-2000"></div>
        </div>
    }
}

#[component]
fn IconBadge(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span class=class aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}

#[component]
fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] accent_first: bool,
    blurb: &'static str,
) -> impl IntoView {
    let accent = view! { <span class="gradient-text">{accent}</span> };
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">
                {if accent_first {
                    view! { {accent} " " {lead} }.into_any()
                } else {
                    view! { {lead} " " {accent} }.into_any()
                }}
            </h2>
            <p class="text-xl text-slate-300 max-w-2xl mx-auto">{blurb}</p>
        </Reveal>
    }
}

#[component]
fn Hero(style: Signal<String>) -> impl IntoView {
    let typewriter = &SiteConfig::global().typewriter;
    let roles = typewriter
        .roles
        .iter()
        .filter(|r| !r.is_empty())
        .cloned()
        .collect::<Vec<_>>();
    let role_count = roles.len();
    let hold = typewriter.hold();
    let (role, set_role) = signal(0usize);
    let role_text = Signal::derive(move || {
        roles
            .get(role.get() % role_count.max(1))
            .cloned()
            .unwrap_or_default()
    });
    let typed = use_typewriter(role_text, typewriter.tick());

    // hold each finished role on screen, then move to the next one
    Effect::new(move |_| {
        if !typed.done.get() || role_count < 2 {
            return;
        }
        match set_timeout_with_handle(move || set_role.update(|i| *i += 1), hold) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't schedule next role: {e:?}"),
        }
    });

    let item = |i: usize| Transition::ITEM.staggered(i, STAGGER);

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 py-20">
            <div class="max-w-6xl mx-auto text-center will-change-transform" style=style>
                <Reveal on_mount=true transition=item(0) class="mb-8">
                    <div class="relative inline-block">
                        <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 p-1">
                            <div class="w-full h-full rounded-full bg-slate-900 flex items-center justify-center">
                                <span class="text-4xl font-bold text-white">{PROFILE.initials}</span>
                            </div>
                        </div>
                        <div class="absolute -top-2 -right-2 w-8 h-8 bg-green-500 rounded-full flex items-center justify-center">
                            <div class="w-3 h-3 bg-white rounded-full animate-pulse"></div>
                        </div>
                    </div>
                </Reveal>
                <Reveal on_mount=true transition=item(1)>
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                        <span class="gradient-text">{PROFILE.name}</span>
                    </h1>
                </Reveal>
                <Reveal on_mount=true transition=item(2)>
                    <p class="text-2xl md:text-3xl font-mono text-blue-300 mb-4 h-10" aria-live="polite">
                        {move || typed.text.get()}
                        <span class="typewriter-caret">"|"</span>
                    </p>
                </Reveal>
                <Reveal on_mount=true transition=item(3)>
                    <p class="text-xl md:text-2xl text-slate-300 mb-8 max-w-3xl mx-auto">
                        {PROFILE.headline}
                    </p>
                </Reveal>
                <Reveal on_mount=true transition=item(4) class="flex flex-wrap justify-center gap-4 mb-12">
                    <a href="#contact" class="btn-primary group">
                        <IconBadge icon=Icon::Mail class="mr-2 group-hover:animate-bounce" />
                        "Get In Touch"
                    </a>
                    <a href="#projects" class="btn-secondary group">
                        <IconBadge
                            icon=Icon::Github
                            class="mr-2 inline-block group-hover:rotate-12 transition-transform"
                        />
                        "View Projects"
                    </a>
                </Reveal>
                <Reveal on_mount=true transition=item(5) class="flex justify-center space-x-8 text-slate-400">
                    <div class="flex items-center space-x-2">
                        <IconBadge icon=Icon::MapPin />
                        <span>{PROFILE.location}</span>
                    </div>
                    <div class="flex items-center space-x-2">
                        <IconBadge icon=Icon::Phone />
                        <span>{PROFILE.phone}</span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="Technical"
                    accent="Expertise"
                    blurb="Mastering modern technologies to build scalable and innovative solutions"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let bar = NodeRef::<html::Div>::new();
    let filled = use_revealed(bar, false);
    let timing = Transition::BAR.with_delay(index as f64 * STAGGER).css(&["width"]);
    let width = skill_bar_width(skill.level);
    let bar_style = move || {
        let w = if filled.get() { width.as_str() } else { "0%" };
        format!("width: {w}; transition: {timing};")
    };

    view! {
        <Reveal transition=Transition::ITEM.staggered(index, STAGGER) class="skill-card-hover">
            <div class="glass-effect border border-slate-700 rounded-xl h-full p-6">
                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center space-x-3">
                        <div class=format!("p-2 rounded-lg {}", skill.color)>
                            <IconBadge icon=skill.icon class="block w-5 text-center text-sm" />
                        </div>
                        <h3 class="text-lg font-semibold text-white">{skill.name}</h3>
                    </div>
                    <span class="text-sm text-slate-400">{format!("{}%", skill.level)}</span>
                </div>
                <div node_ref=bar class="w-full bg-slate-700 rounded-full h-2">
                    <div class=format!("h-2 rounded-full {}", skill.color) style=bar_style></div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="Featured"
                    accent="Projects"
                    blurb="Showcasing innovative solutions and creative problem-solving"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {projects_featured_first()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal
                                    transition=Transition::ITEM.staggered(index, STAGGER)
                                    class="project-card-hover"
                                >
                                    <article class="glass-effect border border-slate-700 rounded-xl overflow-hidden h-full">
                                        <div class="relative">
                                            <img
                                                src=project.image
                                                alt=project.title
                                                loading="lazy"
                                                class="w-full h-48 object-cover"
                                            />
                                            {project
                                                .featured
                                                .then(|| {
                                                    view! {
                                                        <span class="absolute top-4 right-4 rounded-full px-2.5 py-0.5 text-xs font-semibold bg-yellow-500 text-black">
                                                            <IconBadge icon=Icon::Star class="mr-1" />
                                                            "Featured"
                                                        </span>
                                                    }
                                                })}
                                        </div>
                                        <div class="p-6">
                                            <h3 class="text-white text-xl font-semibold mb-2">
                                                {project.title}
                                            </h3>
                                            <p class="text-slate-300 mb-4">{project.description}</p>
                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .technologies
                                                    .iter()
                                                    .map(|tech| {
                                                        view! {
                                                            <span class="rounded-full px-2.5 py-0.5 text-xs bg-slate-700 text-slate-200">
                                                                {*tech}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <div class="flex space-x-4">
                                                <a href=project.github class="btn-outline-sm flex-1">
                                                    <IconBadge icon=Icon::Github class="mr-2" />
                                                    "Code"
                                                </a>
                                                <a href=project.live class="btn-solid-sm flex-1">
                                                    <IconBadge icon=Icon::ExternalLink class="mr-2" />
                                                    "Live Demo"
                                                </a>
                                            </div>
                                        </div>
                                    </article>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="& Recognition"
                    accent="Achievements"
                    accent_first=true
                    blurb="Milestones that mark my journey in technology and innovation"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
                            view! {
                                <Reveal
                                    transition=Transition::ITEM.staggered(index, STAGGER)
                                    class="card-hover"
                                >
                                    <div class="glass-effect border border-slate-700 rounded-xl text-center h-full p-6">
                                        <div class="w-16 h-16 mx-auto mb-4 bg-gradient-to-r from-yellow-400 to-orange-500 rounded-full flex items-center justify-center">
                                            <IconBadge icon=Icon::Award class="text-3xl" />
                                        </div>
                                        <h3 class="text-lg font-semibold text-white mb-2">
                                            {achievement.title}
                                        </h3>
                                        <p class="text-slate-400 text-sm mb-1">
                                            {achievement.organization}
                                        </p>
                                        <p class="text-slate-500 text-xs">{achievement.year}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-8">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <Reveal
                                transition=Transition::ITEM.staggered(index, STAGGER)
                                class="text-center"
                            >
                                <div class="w-16 h-16 mx-auto mb-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                    <IconBadge icon=stat.icon class="text-2xl" />
                                </div>
                                <Reveal
                                    hidden=Variant::POP_HIDDEN
                                    transition=Transition::POP.staggered(index, STAGGER)
                                >
                                    <h3 class="text-3xl md:text-4xl font-bold text-white mb-2">
                                        {stat.number}
                                    </h3>
                                </Reveal>
                                <p class="text-slate-400">{stat.label}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <Reveal class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                    "Let's Build Something " <span class="gradient-text">"Amazing"</span>
                </h2>
                <p class="text-xl text-slate-300 mb-8 max-w-2xl mx-auto">
                    "Ready to turn your ideas into reality? Let's collaborate and create innovative solutions together."
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <a href=PROFILE.mailto() class="btn-primary group">
                        <IconBadge icon=Icon::Mail class="mr-2 group-hover:animate-bounce" />
                        {PROFILE.email}
                    </a>
                    <a href=PROFILE.tel() class="btn-secondary group">
                        <IconBadge icon=Icon::Phone class="mr-2 group-hover:animate-pulse" />
                        {PROFILE.phone}
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-slate-700">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-slate-400">
                    {format!(
                        "© {} {}. Crafted with passion and innovation.",
                        env!("BUILD_YEAR"),
                        PROFILE.name,
                    )}
                </p>
            </div>
        </footer>
    }
}
