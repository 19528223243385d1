use crate::catalog::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A game is selected but the overlay has not been shown yet.
    Pending,
    Open,
}

/// Where a click inside the overlay layer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Backdrop,
    Content,
    Close,
}

/// Which game is selected and whether its detail overlay is up.
///
/// Owned by a single `LandingView`; every transition is a plain method so the
/// machine can be driven without a DOM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<Game>,
    overlay_visible: bool,
}

impl SelectionState {
    pub fn selected(&self) -> Option<Game> {
        self.selected
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn phase(&self) -> Phase {
        match (self.selected, self.overlay_visible) {
            (Some(_), true) => Phase::Open,
            (Some(_), false) => Phase::Pending,
            (None, _) => Phase::Idle,
        }
    }

    /// Card activation. Only records the selection; `settle` opens the overlay.
    pub fn select(&mut self, game: Game) {
        self.selected = Some(game);
    }

    /// Opens the overlay once a game is selected. Returns true if the state changed.
    pub fn settle(&mut self) -> bool {
        if self.selected.is_some() && !self.overlay_visible {
            self.overlay_visible = true;
            true
        } else {
            false
        }
    }

    /// `select` and `settle` as one step.
    pub fn select_card(&mut self, game: Game) {
        self.select(game);
        self.settle();
    }

    /// Back to idle. Clears the selection too, so a later open never shows a stale game.
    pub fn dismiss(&mut self) {
        *self = Self::default();
    }

    pub fn overlay_click(&mut self, target: OverlayTarget) {
        match target {
            OverlayTarget::Backdrop | OverlayTarget::Close => self.dismiss(),
            OverlayTarget::Content => {}
        }
    }

    /// The game the overlay should show, if any.
    ///
    /// A visible overlay with nothing selected renders nothing.
    pub fn visible_game(&self) -> Option<Game> {
        self.selected.filter(|_| self.overlay_visible)
    }

    pub fn holds_invariant(&self) -> bool {
        !self.overlay_visible || self.selected.is_some()
    }
}
