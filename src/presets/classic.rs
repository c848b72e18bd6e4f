// src/presets/classic.rs
#![cfg(feature = "presets")]

//! Well-known chaos-game variants.
//!
//! - sierpinski_triangle  → 3 vertexes, factor 1/2, uniform choice
//! - no_repeat_square     → 4 vertexes, factor 1/2, never repeat the current vertex
//! - shifted_square       → 4 vertexes, factor 1/2, never the next vertex counter-clockwise
//! - no_repeat_pentagon   → 5 vertexes, factor 1/2, never repeat the current vertex
//! - vicsek_square        → 4 vertexes + centre, factor 2/3
//! - carpet_square        → 4 vertexes + edge midpoints, factor 2/3 (Sierpinski carpet)

use crate::game::GameConfig;
use crate::modifications::sdk::Modification;
use crate::modifications::{AddCentre, AddMidpoints, IgnoreWindow};
use crate::presets::sdk::{Preset, no_modifications};

fn config(vertex_count: usize, factor: f64) -> GameConfig {
    GameConfig { vertex_count, factor, ..GameConfig::default() }
}

pub fn sierpinski_triangle() -> Preset {
    Preset { name: "sierpinski_triangle", config: config(3, 0.5), make: no_modifications }
}

pub fn no_repeat_square() -> Preset {
    fn make() -> Vec<Box<dyn Modification>> {
        vec![Box::new(IgnoreWindow::current())]
    }
    Preset { name: "no_repeat_square", config: config(4, 0.5), make }
}

pub fn shifted_square() -> Preset {
    fn make() -> Vec<Box<dyn Modification>> {
        vec![Box::new(IgnoreWindow::shifted(1))]
    }
    Preset { name: "shifted_square", config: config(4, 0.5), make }
}

pub fn no_repeat_pentagon() -> Preset {
    fn make() -> Vec<Box<dyn Modification>> {
        vec![Box::new(IgnoreWindow::current())]
    }
    Preset { name: "no_repeat_pentagon", config: config(5, 0.5), make }
}

pub fn vicsek_square() -> Preset {
    fn make() -> Vec<Box<dyn Modification>> {
        vec![Box::new(AddCentre)]
    }
    Preset { name: "vicsek_square", config: config(4, 2.0 / 3.0), make }
}

pub fn carpet_square() -> Preset {
    fn make() -> Vec<Box<dyn Modification>> {
        vec![Box::new(AddMidpoints)]
    }
    Preset { name: "carpet_square", config: config(4, 2.0 / 3.0), make }
}

pub fn all() -> Vec<Preset> {
    vec![
        sierpinski_triangle(),
        no_repeat_square(),
        shifted_square(),
        no_repeat_pentagon(),
        vicsek_square(),
        carpet_square(),
    ]
}

pub fn by_name(name: &str) -> Option<Preset> {
    all().into_iter().find(|p| p.name == name)
}
