/*!
`chaos_game` — chaos-game point generation with composable vertex selection.

What it does
- Places `vertex_count` vertexes on a regular polygon (or a vertex list a
  modification supplies).
- Starting on a seed vertex, repeatedly picks a vertex and jumps a `factor`
  of the remaining distance toward it: `p' = p + factor * (v - p)`.
- Records every point and every selected vertex index.

How to use (call surface only)
- Build a `GameConfig` (`vertex_count ≥ 2`, `point_count`, `factor ∈ (0, 1)`).
- Pick modifications, in priority order:
  * vertex suppliers (`AddCentre`, `AddMidpoints`, `SelectVertexes`)
  * next-vertex suppliers (`IgnoreWindow::{current, specific, shifted, previous}`)
- `Game::seeded(config, modifications, seed)?.run()` → `Outcome`, or
  `game.iter()` to consume points lazily.

What it does NOT do
- No rendering, no file formats, no CLI. Consume `Outcome::points` externally.
*/

pub mod error;
pub mod game;
pub mod mechanics;
pub mod modifications;
pub mod presets;

pub use error::{ChaosError, ChaosResult};
pub use game::{Game, GameConfig, Outcome, Phase, Points};
pub use mechanics::Point;
