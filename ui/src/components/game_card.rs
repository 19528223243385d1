use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::catalog::{Catalog, Game};
use crate::selection::SelectionState;

/// Entrance stagger between neighbouring cards.
const STAGGER_MS: usize = 200;

#[component]
pub fn GameCard(game: Game, index: usize, state: RwSignal<SelectionState>) -> impl IntoView {
    let select = move || {
        log::debug!("card selected: {}", game.title);
        state.update(|s| s.select(game));
    };

    view! {
        <article
            id=game.anchor()
            role="button"
            tabindex="0"
            aria-label=format!("Show details for {}", game.title)
            class="game-card relative p-6 rounded-lg border border-gray-700 cursor-pointer \
                   transform transition-all duration-300 hover:scale-105 hover:border-gray-500 animate-rise"
            style=format!("perspective:1000px;animation-delay:{}ms", index * STAGGER_MS)
            on:click=move |_| select()
            on:keydown=move |ev: KeyboardEvent| {
                // same activation keys as a native button
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    select();
                }
            }
        >
            <div
                class=format!("card-tilt relative bg-cover bg-center rounded-lg h-[300px] {}", game.accent)
                style=format!("background-image:url({})", game.image)
            />
            <h2 class="text-2xl font-bold mt-4">{ game.title }</h2>
            <p>{ game.description }</p>
        </article>
    }
}

/// One card per game, in catalog order.
#[component]
pub fn GameGrid(catalog: Catalog, state: RwSignal<SelectionState>) -> impl IntoView {
    let cards = catalog
        .list()
        .iter()
        .enumerate()
        .map(|(index, &game)| view! { <GameCard game index state/> })
        .collect_view();

    view! {
        <div id="games" class="grid md:grid-cols-2 gap-8">
            { cards }
        </div>
    }
}
