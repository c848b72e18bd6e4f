// src/error.rs
use thiserror::Error;

use crate::game::Phase;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChaosError {
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Invalid vertex set: {message}")]
    InvalidVertexSet { message: String },

    #[error("No eligible vertex: all {vertex_count} vertexes excluded by {excluded:?}")]
    NoEligibleVertex {
        vertex_count: usize,
        excluded: Vec<usize>,
    },

    #[error("Vertex index {index} out of range for {len} vertexes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Modification '{name}' supplies neither vertexes nor a next vertex")]
    MissingCapability { name: String },

    #[error("Cannot {operation} a game in phase {phase:?}")]
    InvalidPhase { phase: Phase, operation: &'static str },
}

impl ChaosError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub(crate) fn invalid_vertex_set(message: impl Into<String>) -> Self {
        Self::InvalidVertexSet { message: message.into() }
    }
}

pub type ChaosResult<T> = Result<T, ChaosError>;
