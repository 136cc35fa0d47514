// ABOUTME: Minimum pane size resolution.
// ABOUTME: Combines per-pane minimums with the layout-wide default and a fallback.

use crate::size::SizeModel;
use crate::state::Pane;

/// Minimum used when neither the pane nor the layout declares one.
pub const FALLBACK_MIN_SIZE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintPolicy {
    default_min: Option<f64>,
}

impl ConstraintPolicy {
    pub fn new(default_min: Option<f64>) -> Self {
        Self { default_min }
    }

    /// Smallest absolute length pane `index` may shrink to.
    ///
    /// Out-of-range indices resolve to the layout default.
    pub fn min_size(&self, index: usize, panes: &[Pane]) -> f64 {
        panes
            .get(index)
            .and_then(|p| p.min_size)
            .or(self.default_min)
            .unwrap_or(FALLBACK_MIN_SIZE)
            .max(0.0)
    }

    /// Minimum for pane `index` in the model's active unit.
    ///
    /// Not cached: in the proportional regime the result depends on the
    /// extent at the time of the call.
    pub fn min_in_unit(&self, index: usize, panes: &[Pane], model: SizeModel, extent: f64) -> f64 {
        model.from_length(self.min_size(index, panes), extent)
    }
}

impl Default for ConstraintPolicy {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpl_core::{PaneDescriptor, SizeRegime};

    fn panes(descriptors: &[PaneDescriptor]) -> Vec<Pane> {
        descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| Pane::new(i, d))
            .collect()
    }

    #[test]
    fn pane_minimum_wins() {
        let panes = panes(&[PaneDescriptor::new().with_min_size(120.0)]);
        let policy = ConstraintPolicy::new(Some(30.0));
        assert_eq!(policy.min_size(0, &panes), 120.0);
    }

    #[test]
    fn layout_default_used_when_pane_has_none() {
        let panes = panes(&PaneDescriptor::uniform(2));
        let policy = ConstraintPolicy::new(Some(30.0));
        assert_eq!(policy.min_size(1, &panes), 30.0);
    }

    #[test]
    fn fallback_when_nothing_declared() {
        let panes = panes(&PaneDescriptor::uniform(1));
        assert_eq!(ConstraintPolicy::default().min_size(0, &panes), FALLBACK_MIN_SIZE);
    }

    #[test]
    fn proportional_minimum_tracks_extent() {
        let panes = panes(&PaneDescriptor::uniform(2));
        let policy = ConstraintPolicy::new(Some(50.0));
        let model = SizeModel::new(SizeRegime::Proportional);
        assert_eq!(policy.min_in_unit(0, &panes, model, 500.0), 10.0);
        assert_eq!(policy.min_in_unit(0, &panes, model, 1000.0), 5.0);
    }

    #[test]
    fn absolute_minimum_ignores_extent() {
        let panes = panes(&PaneDescriptor::uniform(2));
        let policy = ConstraintPolicy::new(Some(50.0));
        let model = SizeModel::new(SizeRegime::Absolute);
        assert_eq!(policy.min_in_unit(1, &panes, model, 1000.0), 50.0);
    }
}
