use std::path::Path;

use crate::color::ColorMap;
use crate::data::filter::{apply_filters, dimension_options, Dimension, Predicates};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup (or via File → Open). Never mutated.
    pub base: Dataset,

    /// Filtered copy the panels render; rebuilt whenever `filters` change.
    pub view: Dataset,

    /// Per-dimension filter selections.
    pub filters: Predicates,

    /// Selector options per dimension, taken from `base`.
    pub options: Vec<(Dimension, Vec<String>)>,

    /// Segment colours, stable across filter changes.
    pub segment_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(base: Dataset) -> Self {
        let mut state = AppState {
            view: base.clone(),
            options: Vec::new(),
            segment_colors: ColorMap::new(std::iter::empty()),
            filters: Predicates::new(),
            status_message: None,
            base,
        };
        state.rebuild_from_base();
        state.status_message = state.base.empty_reason().map(|r| format!("No data: {r}"));
        state
    }

    /// Replace the base dataset and reset every filter.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.base = dataset;
        self.filters.clear();
        self.view = self.base.clone();
        self.rebuild_from_base();
        self.status_message = self.base.empty_reason().map(|r| format!("No data: {r}"));
    }

    /// Load `path` and make it the base dataset.
    pub fn open_file(&mut self, path: &Path) {
        self.set_dataset(crate::data::load(path));
    }

    fn rebuild_from_base(&mut self) {
        self.options = Dimension::ALL
            .iter()
            .map(|&dim| (dim, dimension_options(&self.base, dim)))
            .collect();
        self.segment_colors = ColorMap::new(
            self.base
                .aggregates
                .orders_by_segment
                .iter()
                .map(|row| row.segment.as_str()),
        );
    }

    /// Recompute `view` after a filter change.
    pub fn refilter(&mut self) {
        self.view = apply_filters(&self.base, &self.filters);
    }

    pub fn is_selected(&self, dim: Dimension, value: &str) -> bool {
        self.filters
            .get(&dim)
            .is_some_and(|selected| selected.contains(value))
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.filters.entry(dim).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Drop every constraint on one dimension.
    pub fn clear_dimension(&mut self, dim: Dimension) {
        if self.filters.remove(&dim).is_some() {
            self.refilter();
        }
    }

    /// Drop every constraint.
    pub fn clear_all(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.refilter();
        }
    }

    /// Number of values selected for a dimension (0 = unconstrained).
    pub fn selected_count(&self, dim: Dimension) -> usize {
        self.filters.get(&dim).map_or(0, |s| s.len())
    }
}
