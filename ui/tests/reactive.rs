use any_spawner::Executor;
use leptos::prelude::*;

use ui::pages::landing::{dismiss_on_key, open_on_select};
use ui::{Catalog, Phase, SelectionState};

fn with_executor(test: impl FnOnce()) {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.with(test);
}

fn tick() {
    Executor::poll_local();
}

#[test]
fn card_selection_opens_overlay_after_a_tick() {
    with_executor(|| {
        let mythic = Catalog::studio().get("Mythic Conquest").unwrap();
        let state = RwSignal::new(SelectionState::default());
        open_on_select(state);
        tick();
        assert_eq!(state.get_untracked().phase(), Phase::Idle);

        state.update(|s| s.select(mythic));
        assert_eq!(state.get_untracked().phase(), Phase::Pending);

        tick();
        let current = state.get_untracked();
        assert_eq!(current.phase(), Phase::Open);
        assert_eq!(current.visible_game(), Some(mythic));
    });
}

#[test]
fn every_card_reaches_its_overlay() {
    with_executor(|| {
        let state = RwSignal::new(SelectionState::default());
        open_on_select(state);
        tick();

        for &game in Catalog::studio().list() {
            state.update(|s| s.select(game));
            tick();
            assert_eq!(state.get_untracked().visible_game(), Some(game));

            state.update(SelectionState::dismiss);
            tick();
            assert_eq!(state.get_untracked().phase(), Phase::Idle);
        }
    });
}

#[test]
fn reselect_while_open_stays_open() {
    with_executor(|| {
        let games = Catalog::studio().list();
        let state = RwSignal::new(SelectionState::default());
        open_on_select(state);

        state.update(|s| s.select(games[0]));
        tick();
        state.update(|s| s.select(games[1]));
        tick();

        let current = state.get_untracked();
        assert_eq!(current.phase(), Phase::Open);
        assert_eq!(current.visible_game(), Some(games[1]));
    });
}

#[test]
fn escape_returns_to_idle() {
    with_executor(|| {
        let state = RwSignal::new(SelectionState::default());
        open_on_select(state);
        state.update(|s| s.select(Catalog::studio().list()[0]));
        tick();
        assert_eq!(state.get_untracked().phase(), Phase::Open);

        assert!(dismiss_on_key(state, "Escape"));
        tick();
        assert_eq!(state.get_untracked(), SelectionState::default());

        // already idle
        assert!(!dismiss_on_key(state, "Escape"));
    });
}

#[test]
fn other_keys_leave_overlay_open() {
    with_executor(|| {
        let state = RwSignal::new(SelectionState::default());
        open_on_select(state);
        state.update(|s| s.select(Catalog::studio().list()[1]));
        tick();

        for key in ["Enter", " ", "Tab", "q"] {
            assert!(!dismiss_on_key(state, key));
        }
        assert_eq!(state.get_untracked().phase(), Phase::Open);
    });
}
