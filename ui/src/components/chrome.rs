use leptos::prelude::*;

const NAV: [&str; 4] = ["Games", "About", "Team", "Contact"];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let links = NAV
        .iter()
        .map(|&item| {
            view! {
                <a
                    href=format!("#{}", item.to_lowercase())
                    class="ml-4 hover:text-red-500 transition-colors"
                >{ item }</a>
            }
        })
        .collect_view();

    view! {
        <header class="flex justify-between items-center p-6 sticky top-0 bg-black/70 z-10 animate-drop">
            <div class="text-3xl font-bold flex items-center">
                <span class="mr-2 text-red-500 inline-block animate-spin-slow" aria-hidden="true">"◈"</span>
                "RAGNAROK INTERACTIVE"
            </div>
            <nav>{ links }</nav>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="mt-16">
            <h1 class="text-6xl font-extrabold mb-4 bg-gradient-to-r from-red-500 to-purple-600 text-transparent bg-clip-text animate-rise">
                "Create. Innovate. Dominate."
            </h1>
            <p class="text-xl max-w-2xl mx-auto mb-16 animate-rise" style="animation-delay:200ms">
                "Pushing the boundaries of interactive entertainment with groundbreaking game experiences."
            </p>
        </section>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="mt-16 p-6 text-center border-t border-gray-700">
            <p>"© 2024 Ragnarok Interactive Studios. All rights reserved."</p>
        </footer>
    }
}
