// src/modifications/ignore_window.rs
#![cfg(feature = "mod-ignore_window")]

//! Ignore-window family of next-vertex strategies.
//!
//! Every variant computes an exclusion set `E` and then draws uniformly from
//! the vertex indexes outside it:
//!
//! ```text
//! E = fixed ∪ { (h + shift) mod N : h in the last `window` selections }
//! ```
//!
//! - [`IgnoreWindow::current`]   → never repeat the current vertex
//! - [`IgnoreWindow::specific`]  → never pick a fixed set of vertexes
//! - [`IgnoreWindow::shifted`]   → never pick the vertex `shift` away from the current one
//! - [`IgnoreWindow::previous`]  → never pick any of the last `window` vertexes
//!
//! The axes combine: `IgnoreWindow::previous(2).with_shift(1)` excludes the
//! neighbours (one step counter-clockwise) of the last two selections.

use std::collections::BTreeSet;

use rand_core::RngCore;

use crate::error::ChaosResult;
use crate::mechanics::stoch;
use crate::modifications::sdk::{GameView, Modification, NextVertexSupplier};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreWindow {
    /// Trailing selections to exclude (0 disables history exclusion).
    pub window: usize,
    /// Offset applied to each excluded selection, modulo the vertex count.
    pub shift: isize,
    /// Indexes excluded regardless of history.
    pub fixed: BTreeSet<usize>,
}

impl IgnoreWindow {
    pub fn current() -> Self {
        Self::previous(1)
    }

    pub fn previous(window: usize) -> Self {
        Self { window, ..Self::default() }
    }

    pub fn shifted(shift: isize) -> Self {
        Self::current().with_shift(shift)
    }

    pub fn specific(indexes: impl IntoIterator<Item = usize>) -> Self {
        Self::previous(0).with_fixed(indexes)
    }

    pub fn with_shift(mut self, shift: isize) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_fixed(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.fixed.extend(indexes);
        self
    }

    /// Exclusion set for a game with `vertex_count` vertexes after `history`.
    pub fn excluded(&self, vertex_count: usize, history: &[usize]) -> BTreeSet<usize> {
        let mut out = self.fixed.clone();
        if vertex_count == 0 {
            return out;
        }
        let n = vertex_count as isize;
        let shift = self.shift.rem_euclid(n);
        let from = history.len().saturating_sub(self.window);
        for &h in &history[from..] {
            out.insert(((h % vertex_count) as isize + shift).rem_euclid(n) as usize);
        }
        out
    }
}

impl NextVertexSupplier for IgnoreWindow {
    fn next_vertex_index(
        &mut self,
        view: &GameView<'_>,
        history: &[usize],
        rng: &mut dyn RngCore,
    ) -> ChaosResult<usize> {
        let n = view.vertex_count();
        let excluded = self.excluded(n, history);
        stoch::choose_excluding(n, &excluded, rng)
    }
}

impl Modification for IgnoreWindow {
    fn name(&self) -> &str {
        match (self.window, self.shift, self.fixed.is_empty()) {
            (1, 0, true) => "IgnoreWindow::current",
            (0, _, false) => "IgnoreWindow::specific",
            (1, _, true) => "IgnoreWindow::shifted",
            (_, 0, true) => "IgnoreWindow::previous",
            _ => "IgnoreWindow",
        }
    }
    fn as_next_vertex_supplier(&mut self) -> Option<&mut dyn NextVertexSupplier> {
        Some(self)
    }
}
