use leptos::{html, prelude::*};

use crate::content::{Education, Experience as Role, SkillGroup};
use crate::section::Section;
use crate::tracker::stagger_style;

use super::trackers::use_reveal;

const ROLE_STAGGER_MS: u32 = 150;
const SKILL_STAGGER_MS: u32 = 100;

#[component]
pub fn Experience(
    experience: &'static [Role],
    education: &'static Education,
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    let reveal = use_reveal();

    let roles = experience
        .iter()
        .enumerate()
        .map(|(idx, role)| {
            let achievements = role
                .achievements
                .iter()
                .map(|a| {
                    view! {
                        <li class="flex items-start gap-4 text-gray-400 group">
                            <span class="mt-1.5 text-sm font-bold accent-primary">"●"</span>
                            <span class="text-sm leading-relaxed group-hover:text-gray-200 transition-colors">
                                {a.clone()}
                            </span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div
                    class=move || {
                        format!("experience-card rounded-2xl p-8 {}", reveal.class(Section::Experience, None))
                    }
                    style=stagger_style(idx, ROLE_STAGGER_MS)
                >
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-6">
                        <div>
                            <h3 class="text-xl md:text-2xl font-bold gradient-primary">
                                {role.role.clone()}
                            </h3>
                            <p class="text-lg text-gray-300 font-semibold">{role.company.clone()}</p>
                            <p class="text-sm text-gray-500">{role.location.clone()}</p>
                        </div>
                        <Period period=role.period.clone() />
                    </div>
                    <ul class="space-y-3">{achievements}</ul>
                </div>
            }
        })
        .collect_view();

    let courses = education
        .courses
        .iter()
        .map(|c| view! { <span class="tech-tag text-xs px-4 py-2 rounded-full">{c.clone()}</span> })
        .collect_view();

    view! {
        <div class="gradient-divider-thick" />
        <section
            id=Section::Experience.id()
            node_ref=section_ref
            class="py-32 px-6 relative glow-section-secondary"
        >
            <div class="max-w-6xl mx-auto relative">
                <SectionHeading section=Section::Experience kicker="Career" title="Experience" gradient="gradient-secondary" />
                <div class="space-y-6">{roles}</div>
                <div class=move || {
                    format!(
                        "mt-12 experience-card rounded-2xl p-8 {}",
                        reveal.class(Section::Experience, Some(3)),
                    )
                }>
                    <div class="flex items-center gap-4 mb-6">
                        <div class="icon-box p-3 rounded-xl">
                            <i class="icon-file-text w-6 h-6 accent-secondary" />
                        </div>
                        <h3 class="text-2xl font-bold gradient-secondary">"Education"</h3>
                    </div>
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-6">
                        <div>
                            <h4 class="text-xl font-bold text-white">{education.degree.clone()}</h4>
                            <p class="text-lg text-gray-300 font-semibold">{education.school.clone()}</p>
                            <p class="text-sm text-gray-500">{education.location.clone()}</p>
                        </div>
                        <Period period=education.period.clone() />
                    </div>
                    <div class="mt-6">
                        <p class="text-gray-500 mb-3 text-sm tracking-wider uppercase font-semibold">
                            "Key Courses"
                        </p>
                        <div class="flex flex-wrap gap-2">{courses}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(
    skills: &'static [SkillGroup],
    certifications: &'static [String],
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    let reveal = use_reveal();

    let groups = skills
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let items = group
                .items
                .iter()
                .map(|s| {
                    view! {
                        <span class="tech-tag px-4 py-2 rounded-lg text-sm cursor-default">{s.clone()}</span>
                    }
                })
                .collect_view();
            view! {
                <div
                    class=move || {
                        format!("skill-card rounded-2xl p-6 {}", reveal.class(Section::Skills, None))
                    }
                    style=stagger_style(idx, SKILL_STAGGER_MS)
                >
                    <h3 class="text-lg font-bold mb-5 gradient-secondary flex items-center gap-3">
                        <i class="icon-code w-5 h-5 accent-primary" />
                        {group.category.clone()}
                    </h3>
                    <div class="flex flex-wrap gap-2">{items}</div>
                </div>
            }
        })
        .collect_view();

    let certs = certifications
        .iter()
        .map(|cert| {
            view! {
                <div class="cert-item flex items-center gap-4 text-gray-400 cursor-default">
                    <span class="cert-check text-lg">"✓"</span>
                    <span class="text-sm font-medium">{cert.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="gradient-divider-glow" />
        <section id=Section::Skills.id() node_ref=section_ref class="py-32 px-6 glow-section-mixed">
            <div class="max-w-6xl mx-auto">
                <SectionHeading section=Section::Skills kicker="Expertise" title="Technical Skills" gradient="gradient-mixed" />
                <div class="grid md:grid-cols-2 gap-6">{groups}</div>
                {(!certifications.is_empty())
                    .then(|| {
                        view! {
                            <div class=move || {
                                format!(
                                    "mt-12 skill-card rounded-2xl p-8 {}",
                                    reveal.class(Section::Skills, Some(4)),
                                )
                            }>
                                <h3 class="text-xl font-bold mb-8 gradient-primary flex items-center gap-3">
                                    <i class="icon-award w-6 h-6 accent-secondary" />
                                    "Certifications"
                                </h3>
                                <div class="grid md:grid-cols-2 gap-4">{certs}</div>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

/// Kicker line plus section title, revealed with its section.
#[component]
pub fn SectionHeading(
    section: Section,
    kicker: &'static str,
    title: &'static str,
    gradient: &'static str,
) -> impl IntoView {
    let reveal = use_reveal();
    view! {
        <div class=move || format!("text-center mb-20 {}", reveal.class(section, None))>
            <p class="text-sm tracking-widest uppercase mb-4 font-semibold accent-secondary">
                {kicker}
            </p>
            <h2 class=format!("text-4xl md:text-6xl font-bold {gradient}")>{title}</h2>
        </div>
    }
}

#[component]
fn Period(period: String) -> impl IntoView {
    view! {
        <span class="text-gray-400 mt-2 md:mt-0 text-sm tracking-wider bg-white/5 px-4 py-2 rounded-full font-medium border border-white/10">
            {period}
        </span>
    }
}
