//! Layout output types and the tunable geometry constants.

use grapplemap_core::{PositionId, TechniqueId};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Identity of a laid-out node. Serialized as `"position:<id>"` or
/// `"technique:<id>"` so layouts can be dumped as flat JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Position(PositionId),
    Technique(TechniqueId),
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeId::Position(id) => write!(f, "position:{id}"),
            NodeId::Technique(id) => write!(f, "technique:{id}"),
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Axis-aligned bounding box in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Strict interior intersection: touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// Computed placement: node id to bounding rectangle, in placement order
/// (positions, then technique stacks, then counter stacks).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Layout {
    rects: IndexMap<NodeId, Rect>,
}

impl Layout {
    pub fn insert(&mut self, id: NodeId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &NodeId) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Rect> {
        self.rects.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Rect)> {
        self.rects.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.rects.keys()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.rects.contains_key(id)
    }
}

/// Geometry constants. Defaults mirror the reference diagram: position
/// columns along the x axis, technique stacks down the y axis, counters in
/// the gutter left of their parent's column.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub position_width: f64,
    pub position_height: f64,
    pub technique_width: f64,
    pub technique_height: f64,
    pub counter_width: f64,
    pub counter_height: f64,
    /// Horizontal distance between consecutive position columns.
    pub column_gap: f64,
    /// Minimum vertical gap between adjacent boxes in a stack.
    pub node_gap: f64,
    /// How far a counter's left edge sits left of its parent technique.
    pub counter_offset: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            position_width: 160.0,
            position_height: 60.0,
            technique_width: 150.0,
            technique_height: 44.0,
            counter_width: 150.0,
            counter_height: 40.0,
            column_gap: 380.0,
            node_gap: 16.0,
            counter_offset: 170.0,
            margin_x: 40.0,
            margin_y: 40.0,
        }
    }
}
