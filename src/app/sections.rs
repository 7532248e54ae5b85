use leptos::{either::Either, html, prelude::*};

use crate::{profile::SITE_PROFILE, sections::Section};

#[component]
pub fn HeroSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let profile = &*SITE_PROFILE;
    view! {
        <section id=Section::Hero.id() node_ref=node_ref class="pt-32 pb-20">
            <div class="text-center">
                <div class="mb-8 inline-block">
                    {match profile.avatar.as_deref() {
                        Some(src) => {
                            Either::Left(
                                view! {
                                    <img
                                        src=src
                                        alt=profile.name.as_str()
                                        class="w-32 h-32 mx-auto rounded-full"
                                    />
                                },
                            )
                        }
                        None => {
                            Either::Right(
                                view! {
                                    <div class="w-32 h-32 mx-auto rounded-full bg-gray-100 flex items-center justify-center text-3xl">
                                        {profile.initials.as_str()}
                                    </div>
                                },
                            )
                        }
                    }}
                </div>
                <h1 class="text-5xl font-semibold text-gray-900 mb-4">{profile.name.as_str()}</h1>
                <p class="text-xl text-gray-600 mb-8 leading-relaxed">
                    {profile.headline.as_str()}
                </p>
                <div class="flex justify-center space-x-6">
                    {profile
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-600 hover:text-gray-900 text-2xl"
                                    aria-label=link.label.as_str()
                                >
                                    <i class=link.icon.as_str()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=Section::About.id() node_ref=node_ref class="py-20">
            <h2 class="text-3xl font-semibold text-gray-900 mb-8 text-center">"About Me"</h2>
            <p class="text-lg text-gray-700 leading-relaxed max-w-3xl mx-auto text-center">
                {SITE_PROFILE.about.as_str()}
            </p>
        </section>
    }
}

#[component]
pub fn SkillsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() node_ref=node_ref class="py-20">
            <h2 class="text-3xl font-semibold text-gray-900 mb-12 text-center">
                "Skills & Expertise"
            </h2>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 max-w-2xl mx-auto">
                {SITE_PROFILE
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="py-2 px-4 text-center rounded-md border border-gray-300 text-gray-700">
                                {skill.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() node_ref=node_ref class="py-20">
            <h2 class="text-3xl font-semibold text-gray-900 mb-12 text-center">
                "Selected Projects"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {SITE_PROFILE
                    .projects
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="rounded-lg border border-gray-200 p-6">
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">
                                    {project.title.as_str()}
                                </h3>
                                <p class="text-gray-700 leading-relaxed mb-4">
                                    {project.description.as_str()}
                                </p>
                                <a
                                    href=project.repository.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-600 hover:text-blue-800 font-medium"
                                >
                                    "View on GitHub"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() node_ref=node_ref class="py-20">
            <h2 class="text-3xl font-semibold text-gray-900 mb-12 text-center">"Experience"</h2>
            <div class="space-y-12 max-w-3xl mx-auto">
                {SITE_PROFILE
                    .experience
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="border-l-4 border-blue-600 pl-6">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">
                                    {format!("{} @ {}", entry.role, entry.company)}
                                </h3>
                                <p class="text-sm text-gray-500 mb-4">{entry.period.as_str()}</p>
                                <ul class="list-disc pl-5 space-y-2 text-gray-700">
                                    {entry
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{h.as_str()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 text-center border-t border-gray-200">
            <p class="text-gray-600">{SITE_PROFILE.copyright()}</p>
        </footer>
    }
}
