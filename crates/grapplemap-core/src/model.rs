//! Typed domain records: positions, techniques, and the relations between
//! them. Authored order is meaningful — it is the content-defined progression
//! the layout engine places along its primary axis.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(pub String);

impl PositionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechniqueId(pub String);

impl TechniqueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TechniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Escape,
    Submission,
    Sweep,
    Pass,
    Takedown,
    Counter,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Escape,
        Category::Submission,
        Category::Sweep,
        Category::Pass,
        Category::Takedown,
        Category::Counter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Escape => "escape",
            Category::Submission => "submission",
            Category::Sweep => "sweep",
            Category::Pass => "pass",
            Category::Takedown => "takedown",
            Category::Counter => "counter",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grappling control state. Coordinates are engine-assigned at layout time;
/// the record itself is pure content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub label: String,
}

/// A transition/action performed from exactly one [`Position`].
///
/// A technique with `counter_of: Some(parent)` is a counter: it defends
/// against `parent` and is rendered left of and vertically centered on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    pub id: TechniqueId,
    pub label: String,
    pub position: PositionId,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub target: Option<PositionId>,
    #[serde(default)]
    pub counter_of: Option<TechniqueId>,
}

impl Technique {
    pub fn is_counter(&self) -> bool {
        self.counter_of.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    positions: Vec<Position>,
    techniques: Vec<Technique>,
}

/// The loaded and validated content snapshot. Immutable after load; every
/// downstream computation (filtering, layout) reads it through `&self`.
#[derive(Debug, Clone)]
pub struct Dataset {
    positions: IndexMap<PositionId, Position>,
    techniques: IndexMap<TechniqueId, Technique>,
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawDataset =
            serde_json::from_str(text).map_err(|e| Error::InvalidDatasetJson {
                message: e.to_string(),
            })?;
        Self::from_parts(raw.positions, raw.techniques)
    }

    pub fn from_parts(positions: Vec<Position>, techniques: Vec<Technique>) -> Result<Self> {
        let mut position_map: IndexMap<PositionId, Position> =
            IndexMap::with_capacity(positions.len());
        for p in positions {
            if position_map.contains_key(&p.id) {
                return Err(Error::DuplicatePositionId { id: p.id.0 });
            }
            position_map.insert(p.id.clone(), p);
        }

        let mut technique_map: IndexMap<TechniqueId, Technique> =
            IndexMap::with_capacity(techniques.len());
        for t in techniques {
            if technique_map.contains_key(&t.id) {
                return Err(Error::DuplicateTechniqueId { id: t.id.0 });
            }
            technique_map.insert(t.id.clone(), t);
        }

        for t in technique_map.values() {
            if !position_map.contains_key(&t.position) {
                return Err(Error::UnknownOriginPosition {
                    technique: t.id.0.clone(),
                    position: t.position.0.clone(),
                });
            }
            if let Some(target) = &t.target {
                if !position_map.contains_key(target) {
                    return Err(Error::UnknownTargetPosition {
                        technique: t.id.0.clone(),
                        position: target.0.clone(),
                    });
                }
            }
            match (&t.counter_of, t.category) {
                (Some(parent), Category::Counter) => {
                    if !technique_map.contains_key(parent) {
                        return Err(Error::UnknownCounterParent {
                            counter: t.id.0.clone(),
                            parent: parent.0.clone(),
                        });
                    }
                }
                (Some(_), _) => {
                    return Err(Error::NonCounterWithParent {
                        technique: t.id.0.clone(),
                    });
                }
                (None, Category::Counter) => {
                    return Err(Error::CounterWithoutParent {
                        technique: t.id.0.clone(),
                    });
                }
                (None, _) => {}
            }
        }

        tracing::debug!(
            positions = position_map.len(),
            techniques = technique_map.len(),
            "dataset validated"
        );
        Ok(Self {
            positions: position_map,
            techniques: technique_map,
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn techniques(&self) -> impl Iterator<Item = &Technique> {
        self.techniques.values()
    }

    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn technique(&self, id: &TechniqueId) -> Option<&Technique> {
        self.techniques.get(id)
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn technique_count(&self) -> usize {
        self.techniques.len()
    }

    /// Non-counter techniques performed from `position`, in authored order.
    pub fn techniques_from<'a>(
        &'a self,
        position: &'a PositionId,
    ) -> impl Iterator<Item = &'a Technique> {
        self.techniques
            .values()
            .filter(move |t| &t.position == position && !t.is_counter())
    }

    /// Counters of `parent`, in authored order.
    pub fn counters_of<'a>(
        &'a self,
        parent: &'a TechniqueId,
    ) -> impl Iterator<Item = &'a Technique> {
        self.techniques
            .values()
            .filter(move |t| t.counter_of.as_ref() == Some(parent))
    }
}
