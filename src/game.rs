use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::types::Coord;
use crate::output::OutputHandle;
use crate::state::session::Session;
use crate::world::World;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// Where every new session starts.
pub const START: Coord = Coord::new(0, 0, 0);

/// Session context handed to every command handler.
pub struct Game {
    pub catalog: Arc<Catalog>,
    /// Room graph
    pub world: World,
    /// Player state
    pub player: Session,
    /// Output produced by the command currently running
    pub output: OutputHandle,

    running: bool,
    // Flavour text only; kept apart from the world RNG so chatter never changes the map
    chatter: StdRng,
}

impl Game {
    pub fn new(catalog: Arc<Catalog>, seed: Option<u64>) -> AppResult<Self> {
        let mut player = Session::new(START);
        for name in &catalog.starting_inventory {
            player.add_item(catalog.item(name)?);
        }

        let chatter = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            world: World::new(catalog.clone(), seed),
            catalog,
            player,
            output: OutputHandle::new(),
            running: true,
            chatter,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let catalog = match &cfg.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::embedded()?,
        };
        Self::new(Arc::new(catalog), cfg.seed)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the session. Nothing is persisted.
    pub fn end(&mut self) {
        self.running = false;
        tracing::info!(
            turns = self.player.turn,
            rooms = self.world.len(),
            elapsed = ?self.player.session_started.elapsed(),
            "session ended"
        );
    }

    pub fn is_sunny(&self) -> bool {
        self.catalog.is_sunny(self.player.turn)
    }

    /// Pick one of the given stock phrases.
    pub fn pick<'a>(&mut self, phrases: &[&'a str]) -> &'a str {
        phrases.choose(&mut self.chatter).copied().unwrap_or_default()
    }
}
