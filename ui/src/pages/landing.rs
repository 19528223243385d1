use leptos::ev::keydown;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::catalog::{self, Catalog};
use crate::components::chrome::Hero;
use crate::components::game_card::GameGrid;
use crate::components::overlay::GameOverlay;
use crate::selection::{Phase, SelectionState};

/// Opens the overlay on the tick after a card selection commits.
pub fn open_on_select(state: RwSignal<SelectionState>) {
    Effect::new(move |_| {
        if state.get().phase() == Phase::Pending {
            state.update(|s| {
                if s.settle() {
                    log::debug!("overlay opened");
                }
            });
        }
    });
}

/// Escape closes an open overlay. Returns whether it did.
pub fn dismiss_on_key(state: RwSignal<SelectionState>, key: &str) -> bool {
    if key != "Escape" || !state.get_untracked().overlay_visible() {
        return false;
    }
    state.update(SelectionState::dismiss);
    true
}

/// Hero, card grid and the detail overlay.
///
/// Each instance owns its own selection; nothing is shared between views.
#[component]
pub fn LandingView(#[prop(default = Catalog::studio())] catalog: Catalog) -> impl IntoView {
    catalog::check(&catalog);

    let state = RwSignal::new(SelectionState::default());
    open_on_select(state);

    use_event_listener(use_window(), keydown, move |ev| {
        if dismiss_on_key(state, &ev.key()) {
            log::debug!("overlay dismissed with Escape");
        }
    });

    view! {
        <main class="container mx-auto px-6 text-center">
            <Hero/>
            <GameGrid catalog state/>
        </main>
        <GameOverlay state/>
    }
}
