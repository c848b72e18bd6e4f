// src/presets/sdk.rs

//! # Preset SDK
//!
//! A **preset** is a named, reproducible chaos game: a [`GameConfig`] plus a
//! factory for the modifications it plays with. Modifications hold per-run
//! state, so a preset stores a factory rather than instances and every
//! [`Preset::game`] call starts from fresh strategies.
//!
//! ## Steps to add a preset
//! 1. Write a `fn() -> Vec<Box<dyn Modification>>` returning the
//!    modifications in priority order (first supplier of a capability wins).
//! 2. Pick the config: vertex count and factor define the attractor;
//!    point count is only a default, override it with [`Preset::with_points`].
//! 3. Add a constructor next to the others in `presets/classic.rs` and list
//!    it in `all()`.
//!
//! [`run_batch`] runs several presets back to back, deriving one seed per run
//! from a base seed so the whole batch replays exactly.

use crate::error::ChaosResult;
use crate::game::{Game, GameConfig, Outcome};
use crate::mechanics::stoch;
use crate::modifications::sdk::Modification;

/// Factory for a preset's modifications.
pub type MakeModifications = fn() -> Vec<Box<dyn Modification>>;

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub config: GameConfig,
    pub make: MakeModifications,
}

impl Preset {
    pub fn with_points(mut self, point_count: usize) -> Self {
        self.config.point_count = point_count;
        self
    }

    pub fn game(&self, seed: u64) -> ChaosResult<Game> {
        Game::seeded(self.config, (self.make)(), seed)
    }

    pub fn run(&self, seed: u64) -> ChaosResult<Outcome> {
        self.game(seed)?.run()
    }
}

/// No modifications: uniform choice on the plain polygon.
pub fn no_modifications() -> Vec<Box<dyn Modification>> {
    Vec::new()
}

/// Run each preset with its own derived seed; outcomes come back in order.
pub fn run_batch(presets: &[Preset], seed: u64) -> ChaosResult<Vec<Outcome>> {
    let mut outs = Vec::with_capacity(presets.len());
    for (i, p) in presets.iter().enumerate() {
        let run_seed = stoch::derive_seed(seed, i as u64);
        log::debug!("batch run {i}: preset '{}' with seed {run_seed}", p.name);
        outs.push(p.run(run_seed)?);
    }
    Ok(outs)
}
