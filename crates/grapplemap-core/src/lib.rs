#![forbid(unsafe_code)]

//! Domain model and interaction state for grappling-flow diagrams (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (stable iteration order everywhere)
//! - all content is external data, validated once at load time
//! - interaction state (filters, view, viewport) as three independent state
//!   machines mutated only through their enumerated commands

pub mod data;
pub mod error;
pub mod filter;
pub mod geom;
pub mod model;
pub mod view;
pub mod viewport;

pub use error::{Error, Result};
pub use filter::{EligibleSet, FilterState};
pub use model::{Category, Dataset, Difficulty, Position, PositionId, Technique, TechniqueId};
pub use view::{NodeRef, PositionDetail, TechniqueDetail, ViewState};
pub use viewport::Viewport;

#[cfg(test)]
mod tests;
