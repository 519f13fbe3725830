use leptos::{html, prelude::*};

use crate::content::Project;
use crate::section::Section;
use crate::tracker::stagger_style;

use super::resume::SectionHeading;
use super::trackers::use_reveal;

const CARD_STAGGER_MS: u32 = 100;

#[component]
pub fn Projects(
    projects: &'static [Project],
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    let reveal = use_reveal();

    let cards = projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let tags = project
                .visible_tech()
                .iter()
                .map(|tech| {
                    view! { <span class="tech-tag text-xs px-3 py-1.5 rounded-full">{tech.clone()}</span> }
                })
                .collect_view();
            let hidden = project.hidden_tech_count();
            view! {
                <div
                    class=move || {
                        format!("project-card rounded-2xl p-6 {}", reveal.class(Section::Projects, None))
                    }
                    style=stagger_style(idx, CARD_STAGGER_MS)
                >
                    <div class="flex items-center justify-between mb-4">
                        <div class="icon-box w-12 h-12 rounded-xl flex items-center justify-center accent-primary">
                            <i class=format!("icon-{} w-5 h-5", project.icon) />
                        </div>
                        <span class="metric-badge text-xs px-3 py-1.5 rounded-full font-semibold">
                            {project.metric.clone()}
                        </span>
                    </div>
                    <h3 class="text-lg font-bold mb-3 text-white">{project.title.clone()}</h3>
                    <p class="text-gray-400 mb-5 text-sm leading-relaxed">
                        {project.description.clone()}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-5">
                        {tags}
                        {(hidden > 0)
                            .then(|| {
                                view! {
                                    <span class="text-xs px-3 py-1.5 text-gray-500 font-medium">
                                        {format!("+{hidden}")}
                                    </span>
                                }
                            })}
                    </div>
                    <a
                        href=project.link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link text-sm"
                    >
                        "View Project "
                        <i class="icon-arrow-up-right w-4 h-4" />
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="gradient-divider-thick" />
        <section
            id=Section::Projects.id()
            node_ref=section_ref
            class="py-32 px-6 relative glow-section"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    section=Section::Projects
                    kicker="Portfolio"
                    title="Featured Projects"
                    gradient="gradient-primary"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
