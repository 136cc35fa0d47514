// ABOUTME: Conversion between proportional and absolute pane sizes.
// ABOUTME: Computes starting sizes from explicit sizes, per-pane defaults or an equal split.

use mpl_core::{PaneDescriptor, SizeRegime};

/// Convert an absolute length to a percentage of `extent`; 0 when unmeasured.
pub fn to_proportional(size: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    size / extent * 100.0
}

/// Convert a percentage of `extent` to an absolute length; 0 when unmeasured.
pub fn to_absolute(percent: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    percent * extent / 100.0
}

/// Starting share of each pane in percent.
///
/// Panes with a `default_size` get that share; the rest of the container is
/// divided evenly among the others. With no defaults at all this is a plain
/// equal split.
pub fn initial_shares(panes: &[PaneDescriptor]) -> Vec<f64> {
    let declared: f64 = panes.iter().filter_map(|p| p.default_size).sum();
    let without_default = panes.iter().filter(|p| p.default_size.is_none()).count();

    let equal_share = if without_default == 0 {
        0.0
    } else {
        ((100.0 - declared) / without_default as f64).max(0.0)
    };

    panes
        .iter()
        .map(|p| p.default_size.unwrap_or(equal_share))
        .collect()
}

/// The unit a layout keeps its pane sizes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeModel {
    regime: SizeRegime,
}

impl SizeModel {
    pub fn new(regime: SizeRegime) -> Self {
        Self { regime }
    }

    pub fn regime(&self) -> SizeRegime {
        self.regime
    }

    pub fn is_absolute(&self) -> bool {
        self.regime == SizeRegime::Absolute
    }

    /// Percentage share -> active unit
    pub fn from_percent(&self, percent: f64, extent: f64) -> f64 {
        match self.regime {
            SizeRegime::Proportional => percent,
            SizeRegime::Absolute => to_absolute(percent, extent),
        }
    }

    /// Active unit -> percentage share
    pub fn to_percent(&self, value: f64, extent: f64) -> f64 {
        match self.regime {
            SizeRegime::Proportional => value,
            SizeRegime::Absolute => to_proportional(value, extent),
        }
    }

    /// Absolute length -> active unit
    pub fn from_length(&self, length: f64, extent: f64) -> f64 {
        match self.regime {
            SizeRegime::Proportional => to_proportional(length, extent),
            SizeRegime::Absolute => length,
        }
    }

    /// Active unit -> absolute length
    pub fn to_length(&self, value: f64, extent: f64) -> f64 {
        match self.regime {
            SizeRegime::Proportional => to_absolute(value, extent),
            SizeRegime::Absolute => value,
        }
    }

    /// Compute starting sizes in the active unit.
    ///
    /// `explicit` is used verbatim when it has exactly one entry per pane and
    /// is ignored otherwise.
    pub fn initial_sizes(
        &self,
        panes: &[PaneDescriptor],
        explicit: Option<&[f64]>,
        extent: f64,
    ) -> Vec<f64> {
        if let Some(sizes) = explicit {
            if sizes.len() == panes.len() {
                return sizes.to_vec();
            }
            tracing::debug!(
                "Ignoring {} explicit sizes for {} panes",
                sizes.len(),
                panes.len()
            );
        }

        initial_shares(panes)
            .into_iter()
            .map(|share| self.from_percent(share, extent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn conversions_fail_soft_on_zero_extent() {
        assert_eq!(to_proportional(50.0, 0.0), 0.0);
        assert_eq!(to_absolute(50.0, -10.0), 0.0);
    }

    #[test]
    fn conversions_are_inverse() {
        assert!(approx(to_proportional(50.0, 200.0), 25.0));
        assert!(approx(to_absolute(25.0, 200.0), 50.0));
    }

    #[test]
    fn equal_split_without_defaults() {
        let model = SizeModel::new(SizeRegime::Absolute);
        let sizes = model.initial_sizes(&PaneDescriptor::uniform(3), None, 300.0);
        assert_eq!(sizes.len(), 3);
        assert!(sizes.iter().all(|s| approx(*s, 100.0)));
    }

    #[test]
    fn mixed_defaults_split_remaining_share() {
        let panes = [PaneDescriptor::new().with_default_size(30.0), PaneDescriptor::new()];
        let model = SizeModel::new(SizeRegime::Absolute);
        let sizes = model.initial_sizes(&panes, None, 200.0);
        assert!(approx(sizes[0], 60.0));
        assert!(approx(sizes[1], 140.0));
    }

    #[test]
    fn all_defaults_leave_no_equal_share() {
        let panes = [
            PaneDescriptor::new().with_default_size(40.0),
            PaneDescriptor::new().with_default_size(60.0),
        ];
        assert_eq!(initial_shares(&panes), vec![40.0, 60.0]);
    }

    #[test]
    fn oversubscribed_defaults_clamp_equal_share_to_zero() {
        let panes = [
            PaneDescriptor::new().with_default_size(80.0),
            PaneDescriptor::new().with_default_size(40.0),
            PaneDescriptor::new(),
        ];
        assert_eq!(initial_shares(&panes)[2], 0.0);
    }

    #[test]
    fn explicit_sizes_used_verbatim_when_count_matches() {
        let model = SizeModel::new(SizeRegime::Proportional);
        let sizes = model.initial_sizes(&PaneDescriptor::uniform(2), Some(&[20.0, 80.0][..]), 500.0);
        assert_eq!(sizes, vec![20.0, 80.0]);
    }

    #[test]
    fn explicit_sizes_ignored_on_count_mismatch() {
        let model = SizeModel::new(SizeRegime::Proportional);
        let sizes = model.initial_sizes(&PaneDescriptor::uniform(2), Some(&[10.0, 20.0, 70.0][..]), 500.0);
        assert_eq!(sizes, vec![50.0, 50.0]);
    }

    #[test]
    fn no_panes_gives_no_sizes() {
        let model = SizeModel::new(SizeRegime::Absolute);
        assert!(model.initial_sizes(&[], None, 100.0).is_empty());
    }

    #[test]
    fn length_round_trip_in_proportional_regime() {
        let model = SizeModel::new(SizeRegime::Proportional);
        assert!(approx(model.from_length(80.0, 400.0), 20.0));
        assert!(approx(model.to_length(20.0, 400.0), 80.0));
    }
}
