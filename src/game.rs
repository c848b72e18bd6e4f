// src/game.rs

//! Game driver: configuration, modification composition, and the jump loop.
//!
//! Phases run `Configured → Initialized → Generating → Done`. Any fatal
//! error moves the game to `Failed`; neither `Done` nor `Failed` can be left,
//! so a fresh run needs a fresh [`Game`].

use bevy_prng::WyRand;
use log::{debug, trace, warn};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{ChaosError, ChaosResult};
use crate::mechanics::{Point, jump, regular_polygon, stoch};
use crate::modifications::sdk::{
    GameView, Modification, NextVertexSupplier, UniformChoice, validate_vertexes,
};

/// Upper bound on up-front reservation; longer runs grow as points arrive.
const PREALLOCATE_POINTS: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Vertexes of the base polygon (≥ 2).
    pub vertex_count: usize,
    /// Points to generate.
    pub point_count: usize,
    /// Fraction of the distance jumped toward each chosen vertex, in (0, 1).
    pub factor: f64,
    /// Seed vertex index; drawn uniformly when `None`.
    pub start: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { vertex_count: 3, point_count: 1000, factor: 0.5, start: None }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ChaosResult<()> {
        if self.vertex_count < 2 {
            return Err(ChaosError::configuration(format!(
                "vertex_count must be at least 2, got {}",
                self.vertex_count
            )));
        }
        if !(self.factor.is_finite() && self.factor > 0.0 && self.factor < 1.0) {
            return Err(ChaosError::configuration(format!(
                "factor must lie in (0, 1), got {}",
                self.factor
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Configured,
    Initialized,
    Generating,
    Done,
    Failed,
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub vertexes: Vec<Point>,
    /// Vertex the walk started on.
    pub seed: usize,
    /// Vertex chosen for each point; `selections[i]` produced `points[i]`.
    pub selections: Vec<usize>,
    pub points: Vec<Point>,
}

/// Capability owner: index into the modification list and its name.
#[derive(Clone, Debug)]
struct Source {
    index: usize,
    name: String,
}

pub struct Game<R: RngCore = WyRand> {
    config: GameConfig,
    modifications: Vec<Box<dyn Modification>>,
    vertex_source: Option<Source>,
    next_source: Option<Source>,
    fallback: UniformChoice,
    rng: R,
    phase: Phase,
    vertexes: Vec<Point>,
    // seed first, then one entry per point
    history: Vec<usize>,
    points: Vec<Point>,
    current: Point,
}

impl Game<WyRand> {
    /// Game driven by a WyRand seeded from `seed`.
    pub fn seeded(
        config: GameConfig,
        modifications: Vec<Box<dyn Modification>>,
        seed: u64,
    ) -> ChaosResult<Self> {
        Self::new(config, modifications, stoch::seeded(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Compose `modifications` in order; the first one exposing each
    /// capability owns it.
    pub fn new(
        config: GameConfig,
        mut modifications: Vec<Box<dyn Modification>>,
        rng: R,
    ) -> ChaosResult<Self> {
        let mut vertex_source: Option<Source> = None;
        let mut next_source: Option<Source> = None;

        for (index, m) in modifications.iter_mut().enumerate() {
            let supplies_vertexes = m.as_vertex_supplier().is_some();
            let supplies_next = m.as_next_vertex_supplier().is_some();
            let name = m.name().to_owned();
            if !supplies_vertexes && !supplies_next {
                return Err(ChaosError::MissingCapability { name });
            }
            if supplies_vertexes {
                match &vertex_source {
                    Some(owner) => {
                        warn!("'{name}' shadowed: '{}' already supplies vertexes", owner.name)
                    }
                    None => vertex_source = Some(Source { index, name: name.clone() }),
                }
            }
            if supplies_next {
                match &next_source {
                    Some(owner) => warn!(
                        "'{name}' shadowed: '{}' already supplies the next vertex",
                        owner.name
                    ),
                    None => next_source = Some(Source { index, name }),
                }
            }
        }

        Ok(Self {
            config,
            modifications,
            vertex_source,
            next_source,
            fallback: UniformChoice,
            rng,
            phase: Phase::Configured,
            vertexes: Vec::new(),
            history: Vec::new(),
            points: Vec::new(),
            current: Point::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn vertexes(&self) -> &[Point] {
        &self.vertexes
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current position of the walk.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Full selection history, seed included.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn seed(&self) -> Option<usize> {
        self.history.first().copied()
    }

    pub fn selections(&self) -> &[usize] {
        self.history.get(1..).unwrap_or(&[])
    }

    /// `Configured → Initialized`: validate, build vertexes, seed history.
    pub fn initialize(&mut self) -> ChaosResult<()> {
        if self.phase != Phase::Configured {
            return Err(ChaosError::InvalidPhase { phase: self.phase, operation: "initialize" });
        }
        let result = self.try_initialize();
        self.settle(result)
    }

    fn try_initialize(&mut self) -> ChaosResult<()> {
        self.config.validate()?;
        let base = regular_polygon(self.config.vertex_count)?;

        let vertexes = match &self.vertex_source {
            Some(src) => self.modifications[src.index]
                .as_vertex_supplier()
                .ok_or_else(|| ChaosError::MissingCapability { name: src.name.clone() })?
                .vertexes(&GameView::new(&self.config, &base))?,
            None => base,
        };
        validate_vertexes(&vertexes)?;

        let seed = match self.config.start {
            Some(start) if start >= vertexes.len() => {
                return Err(ChaosError::configuration(format!(
                    "start {start} is out of range for {} vertexes",
                    vertexes.len()
                )));
            }
            Some(start) => start,
            None => stoch::uniform_index(vertexes.len(), &mut self.rng)?,
        };

        debug!(
            "initialized: {} vertexes, {} points, factor {}, seed vertex {seed}, \
             vertexes from {}, next vertex from {}",
            vertexes.len(),
            self.config.point_count,
            self.config.factor,
            self.vertex_source.as_ref().map_or("regular polygon", |s| s.name.as_str()),
            self.next_source.as_ref().map_or("UniformChoice", |s| s.name.as_str()),
        );

        self.current = vertexes[seed];
        self.vertexes = vertexes;
        let reserve = self.config.point_count.min(PREALLOCATE_POINTS);
        self.history = Vec::with_capacity(reserve + 1);
        self.history.push(seed);
        self.points = Vec::with_capacity(reserve);
        self.phase = Phase::Initialized;
        Ok(())
    }

    /// Produce the next point; `Ok(None)` once all points exist.
    /// A `Configured` game initializes first.
    pub fn step(&mut self) -> ChaosResult<Option<Point>> {
        match self.phase {
            Phase::Configured => self.initialize()?,
            Phase::Initialized | Phase::Generating => {}
            Phase::Done => return Ok(None),
            Phase::Failed => {
                return Err(ChaosError::InvalidPhase { phase: Phase::Failed, operation: "step" });
            }
        }
        if self.points.len() >= self.config.point_count {
            debug!("done: {} points", self.points.len());
            self.phase = Phase::Done;
            return Ok(None);
        }
        self.phase = Phase::Generating;
        let result = self.advance();
        self.settle(result).map(Some)
    }

    fn advance(&mut self) -> ChaosResult<Point> {
        let view = GameView::new(&self.config, &self.vertexes);
        let supplier: &mut dyn NextVertexSupplier = match &self.next_source {
            Some(src) => self.modifications[src.index]
                .as_next_vertex_supplier()
                .ok_or_else(|| ChaosError::MissingCapability { name: src.name.clone() })?,
            None => &mut self.fallback,
        };
        let index = supplier.next_vertex_index(&view, &self.history, &mut self.rng)?;
        let target = *self
            .vertexes
            .get(index)
            .ok_or(ChaosError::IndexOutOfRange { index, len: self.vertexes.len() })?;

        self.current = jump(self.current, target, self.config.factor);
        self.points.push(self.current);
        self.history.push(index);
        trace!("point {}: vertex {index} -> {:?}", self.points.len(), self.current);
        Ok(self.current)
    }

    fn settle<T>(&mut self, result: ChaosResult<T>) -> ChaosResult<T> {
        if let Err(e) = &result {
            warn!("game failed in phase {:?}: {e}", self.phase);
            self.phase = Phase::Failed;
        }
        result
    }

    /// Lazy view of the remaining points. Dropping it early stops generation.
    pub fn iter(&mut self) -> Points<'_, R> {
        Points { game: self, fused: false }
    }

    /// Drive the game to `Done` and hand back what it produced.
    pub fn run(mut self) -> ChaosResult<Outcome> {
        while self.step()?.is_some() {}
        let mut history = self.history;
        let selections = history.split_off(1);
        Ok(Outcome {
            vertexes: self.vertexes,
            seed: history[0],
            selections,
            points: self.points,
        })
    }
}

/// Iterator returned by [`Game::iter`]; yields at most one error, then stops.
pub struct Points<'a, R: RngCore> {
    game: &'a mut Game<R>,
    fused: bool,
}

impl<R: RngCore> Iterator for Points<'_, R> {
    type Item = ChaosResult<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.game.step() {
            Ok(Some(p)) => Some(Ok(p)),
            Ok(None) => {
                self.fused = true;
                None
            }
            Err(e) => {
                self.fused = true;
                Some(Err(e))
            }
        }
    }
}
