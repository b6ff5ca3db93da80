//! Render-boundary projection.
//!
//! The typed records here are the source of truth the render adapter
//! projects into whatever attribute form its surface needs (`data-category`,
//! `data-difficulty`, label text, toggle active classes).

use crate::Engine;
use grapplemap_core::{Category, Difficulty};
use grapplemap_layout::{NodeId, Rect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Position,
    Technique,
}

/// One visible node with its stable identity, classification, and target
/// rectangle. `category`/`difficulty` are `None` for position nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub rect: Rect,
}

/// Current status of one filter toggle control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleState {
    pub label: &'static str,
    pub active: bool,
}

impl Engine {
    /// The visible nodes in layout order, one record per target rectangle.
    pub fn scene(&self) -> Vec<SceneNode> {
        let mut nodes = Vec::with_capacity(self.layout().len());
        for (id, rect) in self.layout().iter() {
            let node = match id {
                NodeId::Position(pid) => self.dataset().position(pid).map(|p| SceneNode {
                    id: id.clone(),
                    kind: NodeKind::Position,
                    label: p.label.clone(),
                    category: None,
                    difficulty: None,
                    rect: *rect,
                }),
                NodeId::Technique(tid) => self.dataset().technique(tid).map(|t| SceneNode {
                    id: id.clone(),
                    kind: NodeKind::Technique,
                    label: t.label.clone(),
                    category: Some(t.category),
                    difficulty: Some(t.difficulty),
                    rect: *rect,
                }),
            };
            if let Some(node) = node {
                nodes.push(node);
            }
        }
        nodes
    }

    /// Category toggle controls in display order with their active status.
    pub fn category_toggles(&self) -> Vec<ToggleState> {
        Category::ALL
            .into_iter()
            .map(|c| ToggleState {
                label: c.as_str(),
                active: self.filters().is_category_active(c),
            })
            .collect()
    }

    /// Difficulty toggle controls in display order with their active status.
    pub fn difficulty_toggles(&self) -> Vec<ToggleState> {
        Difficulty::ALL
            .into_iter()
            .map(|d| ToggleState {
                label: d.as_str(),
                active: self.filters().is_difficulty_active(d),
            })
            .collect()
    }
}
