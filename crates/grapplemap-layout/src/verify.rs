//! Layout invariant checks.
//!
//! A reported violation is a defect in the layout engine, never a condition
//! to tolerate: tests assert the returned list is empty, and the facade
//! debug-asserts it after every recomputation.

use crate::model::{Layout, NodeId};
use grapplemap_core::{EligibleSet, TechniqueId};

/// Allowed distance between a counter stack's mean vertical center and its
/// parent's vertical center.
pub const CENTERING_TOLERANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Overlap {
        a: NodeId,
        b: NodeId,
    },
    CounterNotLeftOfParent {
        counter: TechniqueId,
        parent: TechniqueId,
    },
    CounterStackOffCenter {
        parent: TechniqueId,
        drift: f64,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Overlap { a, b } => write!(f, "nodes {a} and {b} overlap"),
            Violation::CounterNotLeftOfParent { counter, parent } => {
                write!(f, "counter {counter} is not strictly left of {parent}")
            }
            Violation::CounterStackOffCenter { parent, drift } => {
                write!(f, "counters of {parent} drift {drift} units off center")
            }
        }
    }
}

/// Checks every layout invariant for the visible node set and reports each
/// violation found. An empty result means the layout is valid.
pub fn check_invariants(layout: &Layout, eligible: &EligibleSet<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();

    let rects: Vec<(NodeId, crate::Rect)> =
        layout.iter().map(|(id, r)| (id.clone(), *r)).collect();
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].1.overlaps(&rects[j].1) {
                violations.push(Violation::Overlap {
                    a: rects[i].0.clone(),
                    b: rects[j].0.clone(),
                });
            }
        }
    }

    for parent in eligible.techniques() {
        let Some(parent_rect) = layout.get(&NodeId::Technique(parent.id.clone())) else {
            continue;
        };
        let mut centers = Vec::new();
        for counter in eligible.counters_of(&parent.id) {
            let Some(rect) = layout.get(&NodeId::Technique(counter.id.clone())) else {
                continue;
            };
            if rect.x >= parent_rect.x {
                violations.push(Violation::CounterNotLeftOfParent {
                    counter: counter.id.clone(),
                    parent: parent.id.clone(),
                });
            }
            centers.push(rect.center_y());
        }
        if !centers.is_empty() {
            let mean = centers.iter().sum::<f64>() / centers.len() as f64;
            let drift = (mean - parent_rect.center_y()).abs();
            if drift >= CENTERING_TOLERANCE {
                violations.push(Violation::CounterStackOffCenter {
                    parent: parent.id.clone(),
                    drift,
                });
            }
        }
    }

    violations
}
