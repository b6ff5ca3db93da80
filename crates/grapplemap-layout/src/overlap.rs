//! Global overlap resolution.
//!
//! Stacks move as units: pushing a counter stack as a whole shifts every
//! member's center equally, so the centering drift stays bounded while the
//! non-overlap invariant is restored. The pass is a fixed-point sweep over
//! unit pairs and is idempotent on an already-resolved layout.

use crate::model::{Layout, LayoutConfig, NodeId};
use grapplemap_core::EligibleSet;

#[derive(Debug)]
struct Unit {
    ids: Vec<NodeId>,
}

fn build_units(layout: &Layout, eligible: &EligibleSet<'_>) -> Vec<Unit> {
    let mut units = Vec::new();

    for position in eligible.positions() {
        let id = NodeId::Position(position.id.clone());
        if layout.contains(&id) {
            units.push(Unit { ids: vec![id] });
        }
    }

    for position in eligible.positions() {
        let ids: Vec<_> = eligible
            .techniques_from(&position.id)
            .map(|t| NodeId::Technique(t.id.clone()))
            .filter(|id| layout.contains(id))
            .collect();
        if !ids.is_empty() {
            units.push(Unit { ids });
        }
    }

    for parent in eligible.techniques() {
        let ids: Vec<_> = eligible
            .counters_of(&parent.id)
            .map(|c| NodeId::Technique(c.id.clone()))
            .filter(|id| layout.contains(id))
            .collect();
        if !ids.is_empty() {
            units.push(Unit { ids });
        }
    }

    units
}

fn unit_center_y(layout: &Layout, unit: &Unit) -> f64 {
    let sum: f64 = unit
        .ids
        .iter()
        .filter_map(|id| layout.get(id))
        .map(|r| r.center_y())
        .sum();
    sum / unit.ids.len() as f64
}

/// Vertical push needed on `mover` so no member overlaps a member of `fixed`.
fn required_push(layout: &Layout, fixed: &Unit, mover: &Unit, gap: f64) -> f64 {
    let mut push: f64 = 0.0;
    for a_id in &fixed.ids {
        let Some(a) = layout.get(a_id) else { continue };
        for b_id in &mover.ids {
            let Some(b) = layout.get(b_id) else { continue };
            if a.overlaps(b) {
                push = push.max(a.max_y() + gap - b.y);
            }
        }
    }
    push
}

fn shift_unit(layout: &mut Layout, unit: &Unit, dy: f64) {
    for id in &unit.ids {
        if let Some(rect) = layout.get_mut(id) {
            rect.y += dy;
        }
    }
}

/// Pushes colliding stacks outward along the secondary axis until every pair
/// of rectangles is clear. Of two colliding units the one whose aggregate
/// center sits lower moves further down, keeping the sweep monotone and
/// therefore terminating.
pub fn resolve(layout: &mut Layout, eligible: &EligibleSet<'_>, cfg: &LayoutConfig) {
    let units = build_units(layout, eligible);
    if units.len() < 2 {
        return;
    }

    let max_sweeps = units.len() * units.len() + 8;
    for sweep in 0..max_sweeps {
        let mut moved = false;
        for i in 0..units.len() {
            for j in (i + 1)..units.len() {
                let (fixed, mover) =
                    if unit_center_y(layout, &units[i]) <= unit_center_y(layout, &units[j]) {
                        (&units[i], &units[j])
                    } else {
                        (&units[j], &units[i])
                    };
                let push = required_push(layout, fixed, mover, cfg.node_gap);
                if push > 0.0 {
                    shift_unit(layout, mover, push);
                    moved = true;
                }
            }
        }
        if !moved {
            if sweep > 0 {
                tracing::debug!(sweeps = sweep, "overlap resolution converged");
            }
            return;
        }
    }

    debug_assert!(false, "overlap resolution did not converge");
}
