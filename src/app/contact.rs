use leptos::{html, prelude::*};

use crate::content::Profile;
use crate::section::Section;

use super::resume::SectionHeading;
use super::trackers::use_reveal;

#[component]
pub fn Contact(profile: &'static Profile, section_ref: NodeRef<html::Section>) -> impl IntoView {
    let reveal = use_reveal();

    let phone = profile.phone.as_ref().map(|phone| {
        view! {
            <a
                href=format!("tel:{phone}")
                class="contact-card flex flex-col items-center justify-center gap-4 p-8 rounded-2xl"
            >
                <i class="icon-phone contact-icon w-8 h-8" />
                <span class="text-sm text-gray-300 font-semibold">"Phone"</span>
            </a>
        }
    });

    let socials = profile
        .socials
        .iter()
        .filter(|link| link.is_external())
        .map(|link| {
            view! {
                <a
                    href=link.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label.clone()
                    class="social-icon w-14 h-14 flex items-center justify-center rounded-full"
                >
                    <i class=format!("icon-{} w-6 h-6", link.icon) />
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="gradient-divider-glow" />
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            class="py-32 px-6 relative glow-section"
        >
            <div class="max-w-4xl mx-auto text-center relative">
                <SectionHeading
                    section=Section::Contact
                    kicker="Get In Touch"
                    title="Let's Connect"
                    gradient="gradient-mixed"
                />
                <p class=move || {
                    format!(
                        "text-gray-400 max-w-xl mx-auto text-lg -mt-14 mb-16 {}",
                        reveal.class(Section::Contact, None),
                    )
                }>{profile.contact_blurb.clone()}</p>
                <div class=move || {
                    format!(
                        "grid sm:grid-cols-3 gap-6 mb-12 {}",
                        reveal.class(Section::Contact, Some(2)),
                    )
                }>
                    <a
                        href=profile.mailto()
                        class="contact-card flex flex-col items-center justify-center gap-4 p-8 rounded-2xl"
                    >
                        <i class="icon-mail contact-icon w-8 h-8" />
                        <span class="text-sm text-gray-300 font-semibold">"Email"</span>
                    </a>
                    {phone}
                    <div class="contact-card flex flex-col items-center justify-center gap-4 p-8 rounded-2xl">
                        <i class="icon-map-pin contact-icon w-8 h-8" />
                        <span class="text-sm text-gray-300 font-semibold">
                            {profile.location.clone()}
                        </span>
                    </div>
                </div>
                <div class=move || {
                    format!("flex gap-5 justify-center {}", reveal.class(Section::Contact, Some(3)))
                }>{socials}</div>
            </div>
        </section>
    }
}
