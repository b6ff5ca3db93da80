//! Category/difficulty filter state and the derived eligible subset.

use crate::model::{Category, Dataset, Difficulty, Position, PositionId, Technique, TechniqueId};
use rustc_hash::FxHashSet;

/// Active category and difficulty toggles. Initially everything is active.
/// Toggling to an empty set is permitted and yields an empty eligible set.
#[derive(Debug, Clone)]
pub struct FilterState {
    active_categories: FxHashSet<Category>,
    active_difficulties: FxHashSet<Difficulty>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_categories: Category::ALL.into_iter().collect(),
            active_difficulties: Difficulty::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `category` in the active set and returns the new set.
    pub fn toggle_category(&mut self, category: Category) -> &FxHashSet<Category> {
        if !self.active_categories.remove(&category) {
            self.active_categories.insert(category);
        }
        &self.active_categories
    }

    /// Flips membership of `tier` in the active set and returns the new set.
    pub fn toggle_difficulty(&mut self, tier: Difficulty) -> &FxHashSet<Difficulty> {
        if !self.active_difficulties.remove(&tier) {
            self.active_difficulties.insert(tier);
        }
        &self.active_difficulties
    }

    pub fn is_category_active(&self, category: Category) -> bool {
        self.active_categories.contains(&category)
    }

    pub fn is_difficulty_active(&self, tier: Difficulty) -> bool {
        self.active_difficulties.contains(&tier)
    }

    /// The raw filter test: category and difficulty both active. Counters have
    /// the additional parent-eligibility requirement applied in [`Self::eligible`].
    pub fn is_eligible(&self, technique: &Technique) -> bool {
        self.active_categories.contains(&technique.category)
            && self.active_difficulties.contains(&technique.difficulty)
    }

    /// Derives the display-eligible subset of `dataset` for the current
    /// toggles. A counter is eligible only if it passes the filter itself and
    /// its parent technique is eligible — a counter never renders as an
    /// orphan when its parent is filtered out.
    pub fn eligible<'a>(&self, dataset: &'a Dataset) -> EligibleSet<'a> {
        let mut ids: FxHashSet<TechniqueId> = FxHashSet::default();
        for t in dataset.techniques() {
            if !t.is_counter() && self.is_eligible(t) {
                ids.insert(t.id.clone());
            }
        }

        // Counters attach to an already-eligible parent. Iterate to a fixed
        // point so a counter whose parent is itself a counter still resolves.
        loop {
            let mut changed = false;
            for t in dataset.techniques() {
                if ids.contains(&t.id) || !self.is_eligible(t) {
                    continue;
                }
                let parent_ok = match &t.counter_of {
                    Some(parent) => ids.contains(parent),
                    None => false,
                };
                if parent_ok {
                    ids.insert(t.id.clone());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let techniques: Vec<&Technique> = dataset
            .techniques()
            .filter(|t| ids.contains(&t.id))
            .collect();
        EligibleSet {
            positions: dataset.positions().collect(),
            techniques,
            ids,
        }
    }
}

/// The subset of a dataset that is currently eligible for display. Positions
/// are not filtered; they always appear. Iteration order is authored order.
#[derive(Debug, Clone)]
pub struct EligibleSet<'a> {
    positions: Vec<&'a Position>,
    techniques: Vec<&'a Technique>,
    ids: FxHashSet<TechniqueId>,
}

impl<'a> EligibleSet<'a> {
    pub fn positions(&self) -> &[&'a Position] {
        &self.positions
    }

    pub fn techniques(&self) -> impl Iterator<Item = &'a Technique> + '_ {
        self.techniques.iter().copied()
    }

    pub fn contains(&self, id: &TechniqueId) -> bool {
        self.ids.contains(id)
    }

    pub fn technique_count(&self) -> usize {
        self.techniques.len()
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.techniques
            .iter()
            .filter(|t| t.category == category)
            .count()
    }

    /// Eligible non-counter techniques performed from `position`.
    pub fn techniques_from<'b>(
        &'b self,
        position: &'b PositionId,
    ) -> impl Iterator<Item = &'a Technique> + 'b {
        self.techniques
            .iter()
            .copied()
            .filter(move |t| &t.position == position && !t.is_counter())
    }

    /// Eligible counters of `parent`.
    pub fn counters_of<'b>(
        &'b self,
        parent: &'b TechniqueId,
    ) -> impl Iterator<Item = &'a Technique> + 'b {
        self.techniques
            .iter()
            .copied()
            .filter(move |t| t.counter_of.as_ref() == Some(parent))
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.techniques.is_empty()
    }
}
