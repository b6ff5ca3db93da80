#![forbid(unsafe_code)]

//! Deterministic layout for grappling-flow diagrams.
//!
//! The engine is pure: the same eligible subset and config always produce the
//! same layout. Placement runs in tiers (position columns, technique stacks,
//! counter stacks) followed by a global overlap-resolution pass, and always
//! terminates with a valid non-overlapping placement — the empty subset
//! yields the empty layout.

pub mod model;
pub mod overlap;
pub mod place;
pub mod transition;
pub mod verify;

pub use model::{Layout, LayoutConfig, NodeId, Rect};
pub use transition::{Change, DEFAULT_DURATION, TransitionPlan, plan_transition};
pub use verify::{CENTERING_TOLERANCE, Violation, check_invariants};

use grapplemap_core::EligibleSet;

/// Computes a non-overlapping placement for every visible node.
pub fn compute_layout(eligible: &EligibleSet<'_>, cfg: &LayoutConfig) -> Layout {
    let mut layout = Layout::default();
    place::place_positions(&mut layout, eligible, cfg);
    place::place_techniques(&mut layout, eligible, cfg);
    place::place_counters(&mut layout, eligible, cfg);
    overlap::resolve(&mut layout, eligible, cfg);
    tracing::debug!(nodes = layout.len(), "layout computed");
    layout
}
