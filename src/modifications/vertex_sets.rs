// src/modifications/vertex_sets.rs
#![cfg(feature = "mod-vertex_sets")]

//! Vertex-supplying modifications: extend, subset, or reorder the base polygon.

use crate::error::{ChaosError, ChaosResult};
use crate::mechanics::{Point, centroid};
use crate::modifications::sdk::{GameView, Modification, VertexSupplier};

/// Base polygon plus its centre (Vicsek-style games with factor 2/3).
#[derive(Clone, Copy, Debug, Default)]
pub struct AddCentre;

impl VertexSupplier for AddCentre {
    fn vertexes(&self, base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        let base = base.vertexes();
        let mut out = base.to_vec();
        out.push(centroid(base));
        Ok(out)
    }
}

impl Modification for AddCentre {
    fn name(&self) -> &str {
        "AddCentre"
    }

    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }
}

/// Base polygon with each edge midpoint inserted after its first endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct AddMidpoints;

impl VertexSupplier for AddMidpoints {
    fn vertexes(&self, base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        let base = base.vertexes();
        let n = base.len();
        let mut out = Vec::with_capacity(2 * n);
        for (i, &a) in base.iter().enumerate() {
            out.push(a);
            // a 2-gon has a single edge
            if n == 2 && i == 1 {
                break;
            }
            let b = base[(i + 1) % n];
            out.push(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0));
        }
        Ok(out)
    }
}

impl Modification for AddMidpoints {
    fn name(&self) -> &str {
        "AddMidpoints"
    }

    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }
}

/// Pick base vertexes by index, in the given order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectVertexes(pub Vec<usize>);

impl VertexSupplier for SelectVertexes {
    fn vertexes(&self, base: &GameView<'_>) -> ChaosResult<Vec<Point>> {
        let base = base.vertexes();
        self.0
            .iter()
            .map(|&i| {
                base.get(i).copied().ok_or_else(|| {
                    ChaosError::invalid_vertex_set(format!(
                        "selected index {i} but the base polygon has {} vertexes",
                        base.len()
                    ))
                })
            })
            .collect()
    }
}

impl Modification for SelectVertexes {
    fn name(&self) -> &str {
        "SelectVertexes"
    }

    fn as_vertex_supplier(&self) -> Option<&dyn VertexSupplier> {
        Some(self)
    }
}
