//! Transition planning between two layouts.
//!
//! The plan is pure data computed at the instant a state change is accepted;
//! no clock lives here. The render adapter owns wall time and samples
//! [`TransitionPlan::geometry_at`] with its own elapsed value.

use crate::model::{Layout, NodeId, Rect};
use indexmap::IndexMap;
use serde::Serialize;

/// Reference settle time, in layout time units.
pub const DEFAULT_DURATION: f64 = 550.0;

/// What happens to one node over the course of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Change {
    /// Fades/scales in at its new rectangle.
    Enter { to: Rect },
    /// Fades/scales out from its old rectangle, then disappears.
    Exit { from: Rect },
    /// Interpolates from its old rectangle to its new one.
    Move { from: Rect, to: Rect },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    changes: IndexMap<NodeId, Change>,
    duration: f64,
}

/// Diffs two layouts: present in both is `Move`, only in `old` is `Exit`,
/// only in `new` is `Enter`.
pub fn plan_transition(old: &Layout, new: &Layout, duration: f64) -> TransitionPlan {
    let mut changes = IndexMap::with_capacity(old.len().max(new.len()));

    for (id, to) in new.iter() {
        let change = match old.get(id) {
            Some(from) => Change::Move {
                from: *from,
                to: *to,
            },
            None => Change::Enter { to: *to },
        };
        changes.insert(id.clone(), change);
    }
    for (id, from) in old.iter() {
        if !new.contains(id) {
            changes.insert(id.clone(), Change::Exit { from: *from });
        }
    }

    TransitionPlan { changes, duration }
}

impl TransitionPlan {
    /// A plan that is already settled on `layout` (used for the initial state).
    pub fn settled(layout: &Layout) -> Self {
        plan_transition(layout, layout, 0.0)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn change(&self, id: &NodeId) -> Option<&Change> {
        self.changes.get(id)
    }

    pub fn changes(&self) -> impl Iterator<Item = (&NodeId, &Change)> {
        self.changes.iter()
    }

    pub fn is_settled(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }

    /// The rendered geometry `elapsed` time units into the transition.
    ///
    /// For any `elapsed >= duration` this is exactly the target layout: moves
    /// and enters sit at their final rectangles and exits are gone, and no
    /// further geometry change occurs until the next plan.
    pub fn geometry_at(&self, elapsed: f64) -> IndexMap<NodeId, Rect> {
        let settled = self.is_settled(elapsed);
        let t = if settled {
            1.0
        } else {
            ease_in_out_cubic((elapsed / self.duration).clamp(0.0, 1.0))
        };

        let mut out = IndexMap::with_capacity(self.changes.len());
        for (id, change) in &self.changes {
            let rect = match change {
                Change::Enter { to } => *to,
                Change::Move { from, to } => lerp_rect(from, to, t),
                Change::Exit { from } => {
                    if settled {
                        continue;
                    }
                    *from
                }
            };
            out.insert(id.clone(), rect);
        }
        out
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

fn lerp_rect(from: &Rect, to: &Rect, t: f64) -> Rect {
    Rect::new(
        from.x + (to.x - from.x) * t,
        from.y + (to.y - from.y) * t,
        from.width + (to.width - from.width) * t,
        from.height + (to.height - from.height) * t,
    )
}
