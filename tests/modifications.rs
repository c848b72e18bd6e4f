// tests/modifications.rs
use chaos_game::mechanics::Point;
use chaos_game::modifications::sdk::{GameView, Modification, NextVertexSupplier, VertexSupplier};
use chaos_game::modifications::{AddCentre, AddMidpoints, IgnoreWindow, SelectVertexes};
use chaos_game::{ChaosError, ChaosResult, Game, GameConfig, Phase};
use rand_core::RngCore;

fn cfg(vertex_count: usize, point_count: usize) -> GameConfig {
    GameConfig { vertex_count, point_count, ..GameConfig::default() }
}

fn only(m: impl Modification + 'static) -> Vec<Box<dyn Modification>> {
    let m: Box<dyn Modification> = Box::new(m);
    vec![m]
}

/* ──────────────────────────────────────────────────────────────────────────
Test-only modifications
────────────────────────────────────────────────────────────────────────── */

/// Declares no capability at all.
struct Inert;
impl Modification for Inert {}

/// Always answers the same index, in range or not.
struct Fixed(usize);
impl NextVertexSupplier for Fixed {
    fn next_vertex_index(
        &mut self,
        _: &GameView<'_>,
        _: &[usize],
        _: &mut dyn RngCore,
    ) -> ChaosResult<usize> {
        Ok(self.0)
    }
}
impl Modification for Fixed {
    fn as_next_vertex_supplier(&mut self) -> Option<&mut dyn NextVertexSupplier> {
        Some(self)
    }
}

/// Supplies a segment and walks it in order, counting its calls.
#[derive(Default)]
struct Segment {
    calls: usize,
}
impl VertexSupplier for Segment {
    fn vertexes(&self, _base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        Ok(vec![Point::new(0.0, 0.0), Point::new(8.0, 0.0)])
    }
}
impl NextVertexSupplier for Segment {
    fn next_vertex_index(
        &mut self,
        view: &GameView<'_>,
        _: &[usize],
        _: &mut dyn RngCore,
    ) -> ChaosResult<usize> {
        self.calls += 1;
        Ok(self.calls % view.vertex_count())
    }
}
impl Modification for Segment {
    fn name(&self) -> &str {
        "Segment"
    }

    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }

    fn as_next_vertex_supplier(&mut self) -> Option<&mut dyn NextVertexSupplier> {
        Some(self)
    }
}

/// Returns an empty vertex list.
struct Nothing;
impl VertexSupplier for Nothing {
    fn vertexes(&self, _base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        Ok(Vec::new())
    }
}
impl Modification for Nothing {
    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }
}

/// Keeps the first `vertex_count - 1` base vertexes, read from the config.
struct DropLast;
impl VertexSupplier for DropLast {
    fn vertexes(&self, base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        let keep = base.config().vertex_count - 1;
        Ok(base.vertexes()[..keep].to_vec())
    }
}
impl Modification for DropLast {
    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }
}

/* ──────────────────────────────────────────────────────────────────────────
1) Ignore the current vertex
────────────────────────────────────────────────────────────────────────── */

#[test]
fn ignore_current_never_repeats() {
    let out = Game::seeded(cfg(4, 1000), only(IgnoreWindow::current()), 21)
        .unwrap()
        .run()
        .unwrap();
    let mut prev = out.seed;
    for &s in &out.selections {
        assert_ne!(s, prev);
        prev = s;
    }
}

#[test]
fn ignore_current_on_two_vertexes_alternates() {
    let out = Game::seeded(cfg(2, 100), only(IgnoreWindow::current()), 4)
        .unwrap()
        .run()
        .unwrap();
    for (i, &s) in out.selections.iter().enumerate() {
        assert_eq!(s, (out.seed + i + 1) % 2);
    }
}

#[test]
fn ignore_current_with_one_vertex_fails_at_first_selection() {
    let mods: Vec<Box<dyn Modification>> =
        vec![Box::new(SelectVertexes(vec![0])), Box::new(IgnoreWindow::current())];
    let mut g = Game::seeded(cfg(3, 10), mods, 0).unwrap();
    g.initialize().unwrap();
    assert_eq!(g.vertexes().len(), 1);

    let err = g.step().unwrap_err();
    assert!(matches!(err, ChaosError::NoEligibleVertex { vertex_count: 1, .. }), "{err:?}");
    assert_eq!(g.phase(), Phase::Failed);
    assert!(g.points().is_empty());
    assert!(matches!(g.step(), Err(ChaosError::InvalidPhase { phase: Phase::Failed, .. })));
}

/* ──────────────────────────────────────────────────────────────────────────
2) The wider ignore-window family
────────────────────────────────────────────────────────────────────────── */

#[test]
fn ignore_previous_window_of_two() {
    let out = Game::seeded(cfg(5, 500), only(IgnoreWindow::previous(2)), 8)
        .unwrap()
        .run()
        .unwrap();
    let mut history = vec![out.seed];
    history.extend(&out.selections);
    for w in history.windows(3) {
        assert!(w[2] != w[1] && w[2] != w[0], "{w:?}");
    }
}

#[test]
fn ignore_shifted_skips_the_neighbour() {
    let out = Game::seeded(cfg(4, 500), only(IgnoreWindow::shifted(1)), 13)
        .unwrap()
        .run()
        .unwrap();
    let mut prev = out.seed;
    for &s in &out.selections {
        assert_ne!(s, (prev + 1) % 4);
        prev = s;
    }
}

#[test]
fn ignore_specific_leaves_one_choice() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(IgnoreWindow::specific([0, 1, 2]))];
    let out = Game::seeded(cfg(4, 50), mods, 3).unwrap().run().unwrap();
    assert!(out.selections.iter().all(|&s| s == 3));
}

#[test]
fn ignore_specific_covering_everything_fails() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(IgnoreWindow::specific(0..3))];
    let err = Game::seeded(cfg(3, 5), mods, 3).unwrap().run().unwrap_err();
    assert!(matches!(err, ChaosError::NoEligibleVertex { vertex_count: 3, .. }));
}

/* ──────────────────────────────────────────────────────────────────────────
3) Composition
────────────────────────────────────────────────────────────────────────── */

#[test]
fn modification_without_capability_is_rejected() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(IgnoreWindow::current()), Box::new(Inert)];
    let err = Game::seeded(cfg(3, 5), mods, 0).err().unwrap();
    assert!(matches!(err, ChaosError::MissingCapability { .. }));
}

#[test]
fn first_vertex_supplier_wins() {
    let mods: Vec<Box<dyn Modification>> =
        vec![Box::new(AddCentre), Box::new(SelectVertexes(vec![0, 1]))];
    let out = Game::seeded(cfg(4, 10), mods, 0).unwrap().run().unwrap();
    assert_eq!(out.vertexes.len(), 5);
}

#[test]
fn first_next_vertex_supplier_wins() {
    let mods: Vec<Box<dyn Modification>> =
        vec![Box::new(IgnoreWindow::specific([0, 1, 2])), Box::new(IgnoreWindow::current())];
    let out = Game::seeded(cfg(4, 20), mods, 0).unwrap().run().unwrap();
    assert!(out.selections.iter().all(|&s| s == 3));
}

#[test]
fn one_modification_can_supply_both() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(Segment::default())];
    let config = GameConfig { start: Some(0), ..cfg(3, 4) };
    let out = Game::seeded(config, mods, 0).unwrap().run().unwrap();
    assert_eq!(out.vertexes, vec![Point::new(0.0, 0.0), Point::new(8.0, 0.0)]);
    assert_eq!(out.selections, vec![1, 0, 1, 0]);
    assert_eq!(
        out.points,
        vec![Point::new(4.0, 0.0), Point::new(2.0, 0.0), Point::new(5.0, 0.0), Point::new(2.5, 0.0)]
    );
}

#[test]
fn vertex_supplier_reads_config_and_base_polygon() {
    let out = Game::seeded(cfg(5, 40), only(DropLast), 2).unwrap().run().unwrap();
    let base = chaos_game::mechanics::regular_polygon(5).unwrap();
    assert_eq!(out.vertexes, base[..4].to_vec());
    assert!(out.selections.iter().all(|&s| s < 4));
}

#[test]
fn vertex_supplier_overrides_only_vertexes() {
    let mods: Vec<Box<dyn Modification>> =
        vec![Box::new(AddMidpoints), Box::new(IgnoreWindow::current())];
    let out = Game::seeded(cfg(4, 300), mods, 6).unwrap().run().unwrap();
    assert_eq!(out.vertexes.len(), 8);
    assert!(out.selections.iter().all(|&s| s < 8));
    let mut prev = out.seed;
    for &s in &out.selections {
        assert_ne!(s, prev);
        prev = s;
    }
}

/* ──────────────────────────────────────────────────────────────────────────
4) Contract violations surface as errors
────────────────────────────────────────────────────────────────────────── */

#[test]
fn out_of_range_index_is_not_clamped() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(Fixed(7))];
    let err = Game::seeded(cfg(3, 5), mods, 0).unwrap().run().unwrap_err();
    assert_eq!(err, ChaosError::IndexOutOfRange { index: 7, len: 3 });
}

#[test]
fn empty_vertex_list_is_invalid() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(Nothing)];
    let err = Game::seeded(cfg(3, 5), mods, 0).unwrap().run().unwrap_err();
    assert!(matches!(err, ChaosError::InvalidVertexSet { .. }));
}

#[test]
fn duplicate_vertexes_are_invalid() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(SelectVertexes(vec![0, 2, 0]))];
    let err = Game::seeded(cfg(3, 5), mods, 0).unwrap().run().unwrap_err();
    assert!(matches!(err, ChaosError::InvalidVertexSet { .. }));
}

#[test]
fn lazy_iteration_yields_the_error_once() {
    let mods: Vec<Box<dyn Modification>> = vec![Box::new(Fixed(9))];
    let mut g = Game::seeded(cfg(3, 5), mods, 0).unwrap();
    let items: Vec<_> = g.iter().collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_err());
}
