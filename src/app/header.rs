use leptos::prelude::*;

use crate::config::Theme;
use crate::section::Section;
use crate::tracker::ScrollState;

use super::trackers::MenuControls;

#[component]
pub fn Header(
    monogram: String,
    sections: Vec<Section>,
    theme: Theme,
    scroll: Signal<ScrollState>,
    menu: MenuControls,
) -> impl IntoView {
    let accent = theme.accent_text();
    let desktop_links = sections
        .iter()
        .map(|section| {
            let section = *section;
            let class = move || {
                if scroll.with(|s| s.active_section == section) {
                    format!("nav-link text-sm tracking-wider uppercase py-1 active {accent}")
                } else {
                    "nav-link text-sm tracking-wider uppercase py-1".to_string()
                }
            };
            view! {
                <a href=section.href() class=class>
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        sections
            .iter()
            .map(|section| {
                view! {
                    <a
                        href=section.href()
                        class="text-gray-400 transition-colors duration-300 pl-4 border-l-2 border-transparent text-sm tracking-wider uppercase font-medium mobile-link"
                        on:click=move |_| menu.navigate()
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full nav-glass z-50">
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href=Section::Home.href()
                        class="text-3xl font-bold gradient-primary cursor-pointer hover:scale-110 transition-transform duration-500 animate-text-glow"
                    >
                        {monogram}
                    </a>
                    <div class="hidden md:flex gap-10">{desktop_links}</div>
                    <button
                        class="md:hidden p-2 rounded-lg transition-colors menu-button"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.open.get().to_string()
                        on:click=move |_| menu.toggle()
                    >
                        <i class=move || {
                            if menu.open.get() {
                                format!("icon-x w-6 h-6 {accent}")
                            } else {
                                format!("icon-menu w-6 h-6 {accent}")
                            }
                        } />
                    </button>
                </div>
                <Show when=move || menu.open.get()>
                    <div class="md:hidden mt-4 pb-4 flex flex-col gap-4 animate-slide-up">
                        {mobile_links.clone()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
