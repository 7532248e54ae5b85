use leptos::prelude::*;

use crate::sections::Section;

#[component]
pub fn NavBar(active: ReadSignal<Section>, scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 bg-white shadow-sm border-b border-gray-100"
            } else {
                "fixed top-0 left-0 right-0 z-50 bg-white"
            }
        }>
            <div class="max-w-4xl mx-auto px-6 py-4">
                <div class="flex justify-center space-x-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    aria-current=move || {
                                        (active.get() == section).then_some("location")
                                    }
                                    class=move || {
                                        if active.get() == section {
                                            "text-sm font-medium text-blue-600 border-b-2 border-blue-600 pb-1"
                                        } else {
                                            "text-sm font-medium text-gray-600 hover:text-blue-600"
                                        }
                                    }
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
