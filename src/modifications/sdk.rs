// src/modifications/sdk.rs

//! # Modifications SDK
//!
//! Capability protocol for building **modifications**: strategies that change
//! which vertexes a game plays on, or which vertex it may jump toward next.
//! The driving loop in [`crate::game`] never changes; a modification only
//! plugs into one (or both) of its two seams.
//!
//! ## The two capabilities
//! 1) **Vertex supplying**: [`VertexSupplier::vertexes`]
//!    - Receives a [`GameView`] over the base polygon (the configuration is
//!      visible too) and returns the vertex list the game plays on (subset,
//!      reorder, extend, or replace it).
//!    - Called once, at initialization. The driver rejects an empty list, a
//!      non-finite coordinate, or two vertexes at the same position.
//!
//! 2) **Next-vertex supplying**: [`NextVertexSupplier::next_vertex_index`]
//!    - Receives a read-only [`GameView`], the selection history (never
//!      empty: the seed selection is always first) and the game's RNG.
//!    - Returns an index into `view.vertexes()`. The driver fails the run on
//!      an out-of-range index; it never clamps.
//!
//! ## Declaring capabilities
//! Implement [`Modification`] and override the accessor for each capability
//! you provide. Both accessors default to `None`; a modification that
//! exposes neither is rejected when the game is composed.
//!
//! ## Composition
//! Modifications are kept in registration order. For each capability the
//! **first** modification exposing it wins; later ones are shadowed (the
//! driver logs a warning naming them). With no supplier registered the game
//! plays on [`crate::mechanics::regular_polygon`] and picks vertexes with
//! [`UniformChoice`].
//!
//! ## Determinism
//! - Draw randomness only from the `rng` argument. A modification holding its
//!   own generator breaks replay under a fixed seed.
//! - Internal state is allowed (`&mut self`), but it must be a function of
//!   the calls the game made.
//!
//! ## Anti-patterns to avoid
//! - Don't recompute the jump in a strategy. Strategies choose indexes; the
//!   driver owns the interpolation.
//! - Don't substitute a fallback index when no choice exists. Return
//!   [`ChaosError::NoEligibleVertex`] so the misconfiguration surfaces.

use rand_core::RngCore;

use crate::error::{ChaosError, ChaosResult};
use crate::game::GameConfig;
use crate::mechanics::{Point, stoch};

/// What a modification may see of its game: configuration and vertexes.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    config: &'a GameConfig,
    vertexes: &'a [Point],
}

impl<'a> GameView<'a> {
    pub fn new(config: &'a GameConfig, vertexes: &'a [Point]) -> Self {
        Self { config, vertexes }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn vertexes(&self) -> &'a [Point] {
        self.vertexes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }
}

/// Supplies the vertex list a game plays on.
/// `base.vertexes()` is the regular polygon for the configured vertex count.
pub trait VertexSupplier {
    fn vertexes(&self, base: &GameView<'_>) -> ChaosResult<Vec<Point>>;
}

/// Supplies the index of the vertex to jump toward next.
pub trait NextVertexSupplier {
    fn next_vertex_index(
        &mut self,
        view: &GameView<'_>,
        history: &[usize],
        rng: &mut dyn RngCore,
    ) -> ChaosResult<usize>;
}

/// A capability-tagged strategy registered with a game.
pub trait Modification {
    /// Name used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        None
    }
    fn as_next_vertex_supplier(&mut self) -> Option<&mut dyn NextVertexSupplier> {
        None
    }
}

/// Default next-vertex policy: uniform over every vertex.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformChoice;

impl NextVertexSupplier for UniformChoice {
    fn next_vertex_index(
        &mut self,
        view: &GameView<'_>,
        _history: &[usize],
        rng: &mut dyn RngCore,
    ) -> ChaosResult<usize> {
        stoch::uniform_index(view.vertex_count(), rng)
    }
}

impl Modification for UniformChoice {
    fn name(&self) -> &str {
        "UniformChoice"
    }

    fn as_next_vertex_supplier(&mut self) -> Option<&mut dyn NextVertexSupplier> {
        Some(self)
    }
}

/// Reject empty lists, non-finite coordinates and duplicate positions.
pub fn validate_vertexes(vertexes: &[Point]) -> ChaosResult<()> {
    if vertexes.is_empty() {
        return Err(ChaosError::invalid_vertex_set("vertex list is empty"));
    }
    for (i, v) in vertexes.iter().enumerate() {
        if !v.is_finite() {
            return Err(ChaosError::invalid_vertex_set(format!(
                "vertex {i} is not finite: {v:?}"
            )));
        }
        if let Some(j) = vertexes[..i].iter().position(|w| w == v) {
            return Err(ChaosError::invalid_vertex_set(format!(
                "vertexes {j} and {i} share position {v:?}"
            )));
        }
    }
    Ok(())
}
