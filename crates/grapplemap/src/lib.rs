#![forbid(unsafe_code)]

//! Headless engine for an interactive grappling-flow diagram.
//!
//! The [`Engine`] owns the dataset and three independent state machines
//! (filters, view, viewport), recomputes layout whenever the filter state
//! changes, and exposes the queries a render adapter needs: eligible nodes,
//! target rectangles, in-flight transition geometry, detail projections, and
//! the viewport transform. All commands are synchronous, single-threaded
//! state transitions; none of them can fail.

pub use grapplemap_core::*;
pub use grapplemap_layout::{
    Change, DEFAULT_DURATION, Layout, LayoutConfig, NodeId, Rect, TransitionPlan, Violation,
};

pub mod scene;

pub use scene::{NodeKind, SceneNode, ToggleState};

use grapplemap_core::geom::{Transform, Vector};

#[derive(Debug, Clone)]
pub struct Engine {
    dataset: Dataset,
    filters: FilterState,
    view: ViewState,
    viewport: Viewport,
    config: LayoutConfig,
    layout: Layout,
    plan: TransitionPlan,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_dataset(data::builtin())
    }
}

impl Engine {
    /// Engine over the embedded reference dataset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        let filters = FilterState::new();
        let layout = grapplemap_layout::compute_layout(
            &filters.eligible(&dataset),
            &LayoutConfig::default(),
        );
        let plan = TransitionPlan::settled(&layout);
        Self {
            dataset,
            filters,
            view: ViewState::default(),
            viewport: Viewport::default(),
            config: LayoutConfig::default(),
            layout,
            plan,
        }
    }

    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        let eligible = self.filters.eligible(&self.dataset);
        self.layout = grapplemap_layout::compute_layout(&eligible, &self.config);
        self.plan = TransitionPlan::settled(&self.layout);
        self
    }

    // --- commands -------------------------------------------------------

    pub fn toggle_category(&mut self, category: Category) {
        let active = self.filters.toggle_category(category).contains(&category);
        tracing::debug!(category = %category, active, "toggle category");
        self.refresh_layout();
    }

    pub fn toggle_difficulty(&mut self, tier: Difficulty) {
        let active = self.filters.toggle_difficulty(tier).contains(&tier);
        tracing::debug!(tier = %tier, active, "toggle difficulty");
        self.refresh_layout();
    }

    /// Selecting an unknown node, or selecting while a detail view is open,
    /// is a no-op.
    pub fn select_node(&mut self, node: NodeRef) {
        let known = match &node {
            NodeRef::Position(id) => self.dataset.position(id).is_some(),
            NodeRef::Technique(id) => self.dataset.technique(id).is_some(),
        };
        if !known {
            return;
        }
        if self.view.select(node) {
            tracing::debug!(view = ?self.view, "node selected");
        }
    }

    /// Returns to the diagram, leaving filter and viewport state untouched.
    pub fn navigate_back(&mut self) {
        if self.view.back() {
            tracing::debug!("back to diagram");
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn pan(&mut self, delta: Vector) {
        self.viewport.pan(delta);
    }

    pub fn reset_viewport(&mut self) {
        self.viewport.reset();
    }

    // --- queries --------------------------------------------------------

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn eligible(&self) -> EligibleSet<'_> {
        self.filters.eligible(&self.dataset)
    }

    /// The current target layout (where every node settles).
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The transition plan toward the current target layout.
    pub fn plan(&self) -> &TransitionPlan {
        &self.plan
    }

    /// In-flight rendered geometry, `elapsed` time units after the last
    /// state change. At or past the plan's duration this equals the target
    /// layout exactly.
    pub fn geometry_at(&self, elapsed: f64) -> indexmap::IndexMap<NodeId, Rect> {
        self.plan.geometry_at(elapsed)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn position_detail(&self) -> Option<PositionDetail> {
        match &self.view {
            ViewState::PositionDetail(id) => self.dataset.position_detail(id),
            _ => None,
        }
    }

    pub fn technique_detail(&self) -> Option<TechniqueDetail> {
        match &self.view {
            ViewState::TechniqueDetail(id) => self.dataset.technique_detail(id),
            _ => None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_transform(&self) -> Transform {
        self.viewport.transform()
    }

    // --- internals ------------------------------------------------------

    /// Recomputes the target layout from the current logical filter state and
    /// replaces the in-flight plan. Old rectangles come from the previous
    /// target layout: a command arriving mid-transition plans from logical
    /// state and the visuals catch up.
    fn refresh_layout(&mut self) {
        let eligible = self.filters.eligible(&self.dataset);
        let new_layout = grapplemap_layout::compute_layout(&eligible, &self.config);
        debug_assert!(
            grapplemap_layout::check_invariants(&new_layout, &eligible).is_empty(),
            "layout invariant violation"
        );
        self.plan = grapplemap_layout::plan_transition(&self.layout, &new_layout, DEFAULT_DURATION);
        self.layout = new_layout;
    }
}

#[cfg(test)]
mod tests;
