//! Placement passes. Each pass writes rectangles for one node tier; the
//! overlap pass afterwards resolves anything the stacking did not.

use crate::model::{Layout, LayoutConfig, NodeId, Rect};
use grapplemap_core::EligibleSet;

/// Pass 1: position columns along the primary (x) axis, authored order.
pub fn place_positions(layout: &mut Layout, eligible: &EligibleSet<'_>, cfg: &LayoutConfig) {
    for (i, position) in eligible.positions().iter().enumerate() {
        let rect = Rect::new(
            cfg.margin_x + i as f64 * cfg.column_gap,
            cfg.margin_y,
            cfg.position_width,
            cfg.position_height,
        );
        layout.insert(NodeId::Position(position.id.clone()), rect);
    }
}

/// Pass 2: each position's eligible techniques stacked down the secondary
/// (y) axis beneath the position node, `node_gap` apart.
pub fn place_techniques(layout: &mut Layout, eligible: &EligibleSet<'_>, cfg: &LayoutConfig) {
    for position in eligible.positions() {
        let Some(anchor) = layout.get(&NodeId::Position(position.id.clone())).copied() else {
            continue;
        };
        let mut y = anchor.max_y() + cfg.node_gap;
        for technique in eligible.techniques_from(&position.id) {
            let rect = Rect::new(anchor.x, y, cfg.technique_width, cfg.technique_height);
            y = rect.max_y() + cfg.node_gap;
            layout.insert(NodeId::Technique(technique.id.clone()), rect);
        }
    }
}

/// Pass 3: counters stacked in the gutter left of their parent, evenly
/// spaced with the mean of their vertical centers equal to the parent's
/// vertical center. This holds for any stack size n >= 1.
pub fn place_counters(layout: &mut Layout, eligible: &EligibleSet<'_>, cfg: &LayoutConfig) {
    // A counter's parent must already have a rectangle. Parents that are
    // themselves counters gain rectangles as the loop progresses, so repeat
    // until nothing new can be placed.
    loop {
        let mut placed_any = false;
        let parents: Vec<_> = eligible
            .techniques()
            .filter(|t| layout.contains(&NodeId::Technique(t.id.clone())))
            .map(|t| t.id.clone())
            .collect();

        for parent in parents {
            let anchor = match layout.get(&NodeId::Technique(parent.clone())) {
                Some(rect) => *rect,
                None => continue,
            };
            let counters: Vec<_> = eligible
                .counters_of(&parent)
                .filter(|c| !layout.contains(&NodeId::Technique(c.id.clone())))
                .collect();
            if counters.is_empty() {
                continue;
            }

            let n = counters.len() as f64;
            let span = n * cfg.counter_height + (n - 1.0) * cfg.node_gap;
            let mut y = anchor.center_y() - span / 2.0;
            let x = anchor.x - cfg.counter_offset;
            for counter in counters {
                let rect = Rect::new(x, y, cfg.counter_width, cfg.counter_height);
                y = rect.max_y() + cfg.node_gap;
                layout.insert(NodeId::Technique(counter.id.clone()), rect);
                placed_any = true;
            }
        }

        if !placed_any {
            break;
        }
    }
}
