use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_element_bounding, use_window_scroll, UseElementBoundingReturn};

use super::{
    contact::ContactSection,
    nav::NavBar,
    sections::{AboutSection, ExperienceSection, Footer, HeroSection, ProjectsSection, SkillsSection},
};
use crate::sections::{active_section, is_scrolled, Bounds, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    let refs = Section::ALL.map(|_| NodeRef::<html::Section>::new());
    let bounds = refs.map(|node_ref| {
        let UseElementBoundingReturn { top, bottom, .. } = use_element_bounding(node_ref);
        (top, bottom)
    });

    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));

    // keep the last match while the line sits in a gap between sections
    let (active, set_active) = signal(Section::default());
    Effect::new(move |_| {
        let current = active_section(|s| {
            let (top, bottom) = bounds[s.index()];
            refs[s.index()]
                .get()
                .map(|_| Bounds::new(top.get(), bottom.get()))
        });
        if let Some(section) = current {
            if section != active.get_untracked() {
                set_active.set(section);
            }
        }
    });

    let node_ref = |s: Section| refs[s.index()];

    view! {
        <Title text="Portfolio" />
        <NavBar active scrolled />
        <div class="max-w-4xl mx-auto px-6">
            <HeroSection node_ref=node_ref(Section::Hero) />
            <AboutSection node_ref=node_ref(Section::About) />
            <SkillsSection node_ref=node_ref(Section::Skills) />
            <ProjectsSection node_ref=node_ref(Section::Projects) />
            <ExperienceSection node_ref=node_ref(Section::Experience) />
            <ContactSection node_ref=node_ref(Section::Contact) />
            <Footer />
        </div>
    }
}
