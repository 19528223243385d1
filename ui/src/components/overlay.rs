use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::selection::{OverlayTarget, SelectionState};

#[component]
pub fn FeatureList(features: &'static [&'static str]) -> impl IntoView {
    let items = features
        .iter()
        .map(|&feature| view! { <li>{ feature }</li> })
        .collect_view();

    view! { <ul class="list-disc pl-5 text-left">{ items }</ul> }
}

/// Detail dialog for the selected game, drawn over a dimmed backdrop.
///
/// Clicks on the backdrop dismiss; clicks inside the dialog stay inside it.
#[component]
pub fn GameOverlay(state: RwSignal<SelectionState>) -> impl IntoView {
    let click = move |target: OverlayTarget| state.update(|s| s.overlay_click(target));

    let dialog = move || {
        state.get().visible_game().map(|game| {
            view! {
                <div
                    class="overlay-backdrop fixed inset-0 bg-black/70 flex items-center justify-center z-20 animate-fade"
                    on:click=move |_| click(OverlayTarget::Backdrop)
                >
                    <div
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="overlay-title"
                        class="overlay-content bg-gray-800 p-8 rounded-lg max-w-md w-full text-center animate-rise"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            click(OverlayTarget::Content);
                        }
                    >
                        <img src=game.image alt=game.title class="mb-4 rounded"/>
                        <h2 id="overlay-title" class="text-2xl font-bold mb-4">{ game.title }</h2>
                        <p class="mb-4">{ game.description }</p>
                        <h3 class="text-xl font-semibold mb-2">"Key Features:"</h3>
                        <FeatureList features=game.features/>
                        <button
                            class="mt-6 bg-red-500 hover:bg-red-600 text-white font-bold py-2 px-4 rounded"
                            on:click=move |_| click(OverlayTarget::Close)
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    };

    view! { { dialog } }
}
