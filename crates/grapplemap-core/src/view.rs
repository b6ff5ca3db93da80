//! View/navigation state machine and the detail-view projections.
//!
//! The machine stores only the selected entity's id; detail views are
//! computed from the dataset on query.

use crate::model::{Category, Dataset, Difficulty, PositionId, TechniqueId};
use serde::Serialize;

/// A selectable node in the rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    Position(PositionId),
    Technique(TechniqueId),
}

/// Exactly one view is visible at a time: the full diagram, one position's
/// detail, or one technique's detail (counters included).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Diagram,
    PositionDetail(PositionId),
    TechniqueDetail(TechniqueId),
}

impl ViewState {
    pub fn is_diagram(&self) -> bool {
        matches!(self, ViewState::Diagram)
    }

    /// Selection is only accepted from the diagram view; selecting from a
    /// detail view (including re-selecting the shown entity) is a no-op.
    /// Returns whether the state changed.
    pub fn select(&mut self, node: NodeRef) -> bool {
        if !self.is_diagram() {
            return false;
        }
        *self = match node {
            NodeRef::Position(id) => ViewState::PositionDetail(id),
            NodeRef::Technique(id) => ViewState::TechniqueDetail(id),
        };
        true
    }

    /// Back-navigation from either detail view. A no-op on the diagram view.
    /// Returns whether the state changed.
    pub fn back(&mut self) -> bool {
        if self.is_diagram() {
            return false;
        }
        *self = ViewState::Diagram;
        true
    }
}

/// Projection of a position for its detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDetail {
    pub id: PositionId,
    pub label: String,
    /// Non-counter techniques performed from this position, authored order.
    pub techniques: Vec<TechniqueId>,
}

/// Projection of a technique (or counter) for its detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueDetail {
    pub id: TechniqueId,
    pub label: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub steps: Vec<String>,
    pub counter_of: Option<TechniqueId>,
}

impl Dataset {
    pub fn position_detail(&self, id: &PositionId) -> Option<PositionDetail> {
        let position = self.position(id)?;
        Some(PositionDetail {
            id: position.id.clone(),
            label: position.label.clone(),
            techniques: self.techniques_from(id).map(|t| t.id.clone()).collect(),
        })
    }

    pub fn technique_detail(&self, id: &TechniqueId) -> Option<TechniqueDetail> {
        let technique = self.technique(id)?;
        Some(TechniqueDetail {
            id: technique.id.clone(),
            label: technique.label.clone(),
            category: technique.category,
            difficulty: technique.difficulty,
            steps: technique.steps.clone(),
            counter_of: technique.counter_of.clone(),
        })
    }
}
