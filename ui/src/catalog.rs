use std::collections::HashSet;

use anyhow::{Context, ensure};

/// One promotional entry on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind background class painted behind the card image.
    pub accent: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

impl Game {
    /// Fragment id for the card, e.g. `cyber-horizon`.
    pub fn anchor(&self) -> String {
        self.title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

const STUDIO_GAMES: &[Game] = &[
    Game {
        title: "Cyber Horizon",
        description: "Immersive sci-fi adventure pushing visual boundaries",
        accent: "bg-blue-500",
        features: &["Open World", "Cyberpunk Setting", "Advanced AI"],
        image: "/assets/img/cyber-horizon.jpg",
    },
    Game {
        title: "Mythic Conquest",
        description: "Epic fantasy RPG with revolutionary gameplay mechanics",
        accent: "bg-purple-500",
        features: &[
            "Massive Multiplayer",
            "Dynamic World Events",
            "Unique Class System",
        ],
        image: "/assets/img/mythic-conquest.jpg",
    },
];

/// Fixed, ordered list of games. Order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    games: &'static [Game],
}

impl Catalog {
    pub const fn new(games: &'static [Game]) -> Self {
        Self { games }
    }

    /// The catalog compiled into the site.
    pub const fn studio() -> Self {
        Self::new(STUDIO_GAMES)
    }

    pub fn list(&self) -> &'static [Game] {
        self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<Game> {
        self.games.iter().copied().find(|g| g.title == title)
    }

    /// Titles identify games, so they must be non-empty and unique.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for (i, game) in self.games.iter().enumerate() {
            ensure!(!game.title.trim().is_empty(), "game #{i} has an empty title");
            ensure!(seen.insert(game.title), "duplicate game title {:?}", game.title);
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::studio()
    }
}

/// Validates `catalog`, logging instead of failing; the page renders either way.
pub fn check(catalog: &Catalog) -> bool {
    match catalog.validate().context("studio catalog is malformed") {
        Ok(()) => true,
        Err(e) => {
            log::error!("{e:#}");
            false
        }
    }
}
