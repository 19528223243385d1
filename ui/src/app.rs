use leptos::*;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;

use leptos_meta::provide_meta_context;
use leptos_meta::Title;

use crate::components::chrome::{SiteFooter, SiteHeader};
use crate::pages::landing::LandingView;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Ragnarok Interactive"/>
        <div class="min-h-screen bg-gradient-to-b from-black to-gray-900 text-white overflow-hidden">
            <SiteHeader/>
            <LandingView/>
            <SiteFooter/>
        </div>
    }
}
