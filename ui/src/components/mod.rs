pub mod chrome;
pub mod game_card;
pub mod overlay;
