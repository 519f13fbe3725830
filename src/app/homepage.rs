use leptos::prelude::*;

use crate::config::PageConfig;
use crate::content::{build_year, Site};
use crate::section::Section;
use crate::tracker::glow_background;

use super::contact::Contact;
use super::header::Header;
use super::projects::Projects;
use super::resume::{Experience, Skills};
use super::trackers::{use_page_trackers, use_reveal, SectionRefs};

/// The whole single-page portfolio, parameterized by theme, animation style and
/// content catalog. Sections missing from `config.sections` are not rendered.
#[component]
pub fn PortfolioPage(config: PageConfig, site: &'static Site) -> impl IntoView {
    let refs = SectionRefs::new(&config.sections);
    let trackers = use_page_trackers(&config, &refs);
    let theme = config.theme;
    let glow = theme.glow_rgba();

    let progress_style = move || {
        trackers
            .scroll
            .with(|s| format!("width: {}%", s.progress_percent))
    };
    let glow_style = move || {
        trackers
            .pointer
            .with(|p| format!("background: {}", glow_background(*p, glow)))
    };

    let sections = config
        .sections
        .iter()
        .map(|section| {
            let section_ref = refs.get(*section);
            match section {
                Section::Home => view! { <Hero site section_ref /> }.into_any(),
                Section::Projects => {
                    view! { <Projects projects=&site.projects section_ref /> }.into_any()
                }
                Section::Experience => view! {
                    <Experience experience=&site.experience education=&site.education section_ref />
                }
                .into_any(),
                Section::Skills => view! {
                    <Skills skills=&site.skills certifications=&site.certifications section_ref />
                }
                .into_any(),
                Section::Contact => {
                    view! { <Contact profile=&site.profile section_ref /> }.into_any()
                }
            }
        })
        .collect::<Vec<_>>();

    let footer_year = build_year().map(|y| y.to_string()).unwrap_or_default();

    view! {
        <div class=format!(
            "min-h-screen text-white relative overflow-x-hidden page-root {}",
            theme.class(),
        )>
            <div class="scroll-progress" style=progress_style />
            <div
                class="fixed inset-0 pointer-events-none z-0 transition-opacity duration-500"
                style=glow_style
            />
            <Header
                monogram=site.profile.monogram.clone()
                sections=config.sections.clone()
                theme
                scroll=trackers.scroll
                menu=trackers.menu
            />
            {sections}
            <footer class="py-8 text-center border-t page-footer">
                <p class="text-sm text-gray-500 hover:text-gray-300 transition-colors">
                    "© " {footer_year} " "
                    <span class="gradient-mixed font-semibold">{site.profile.full_name()}</span>
                    " • " {site.profile.footer_note.clone()}
                </p>
            </footer>
        </div>
    }
}

#[component]
fn Hero(site: &'static Site, section_ref: NodeRef<leptos::html::Section>) -> impl IntoView {
    let reveal = use_reveal();
    let profile = &site.profile;
    let line = move |step: u8, base: &'static str| {
        move || format!("{base} {}", reveal.class(Section::Home, Some(step)))
    };

    let roles = profile
        .roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            view! {
                {(i > 0).then_some(" & ")}
                <span class="gradient-mixed font-semibold">{role.clone()}</span>
            }
        })
        .collect_view();

    let socials = profile
        .socials
        .iter()
        .map(|link| {
            let external = link.is_external();
            view! {
                <a
                    href=link.href.clone()
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    aria-label=link.label.clone()
                    class="social-icon w-14 h-14 flex items-center justify-center rounded-full"
                >
                    <i class=format!("icon-{} w-5 h-5", link.icon) />
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Home.id()
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center relative pt-20 glow-section"
        >
            <div class="max-w-5xl mx-auto px-6 text-center relative z-10">
                <div class=line(0, "mb-8")>
                    <div class="inline-flex items-center gap-3 px-6 py-3 glass-card rounded-full transition-all duration-500 cursor-default">
                        <i class="icon-sparkles w-5 h-5 animate-pulse accent-primary" />
                        <span class="text-gray-300 text-sm tracking-widest uppercase font-medium">
                            {profile.tagline.clone()}
                        </span>
                        <i class="icon-sparkles w-5 h-5 animate-pulse accent-secondary" />
                    </div>
                </div>
                <h1 class=line(1, "text-6xl md:text-8xl font-bold tracking-tight mb-4")>
                    <span class="gradient-primary animate-text-glow">
                        {profile.first_name.clone()}
                    </span>
                </h1>
                <h1 class=line(2, "text-6xl md:text-8xl font-bold tracking-tight mb-8")>
                    <span class="gradient-secondary">{profile.last_name.clone()}</span>
                </h1>
                <p class=line(3, "text-xl md:text-2xl text-gray-400 mb-6 font-light tracking-wide")>
                    {roles}
                </p>
                <p class=line(
                    4,
                    "text-base text-gray-500 mb-12 max-w-2xl mx-auto leading-relaxed",
                )>{profile.summary.clone()}</p>
                <div class=line(5, "flex flex-col sm:flex-row gap-4 justify-center mb-16")>
                    <a
                        href=profile.mailto()
                        class="btn-primary px-10 py-4 rounded-full text-sm uppercase tracking-wider"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=Section::Projects.href()
                        class="btn-secondary px-10 py-4 rounded-full text-sm uppercase tracking-wider"
                    >
                        "View Projects"
                    </a>
                </div>
                <div class=line(6, "flex gap-5 justify-center")>{socials}</div>
                <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 hidden md:block">
                    <i class="icon-chevron-down w-8 h-8 animate-bounce accent-muted" />
                </div>
            </div>
        </section>
    }
}
