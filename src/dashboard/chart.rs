//! Declarative chart specs and owned chart handles.
//!
//! A [`ChartHandle`] owns at most one live [`ChartInstance`]. Redrawing goes
//! through [`ChartHandle::replace`], which disposes the previous instance
//! before creating the next, so instances never stack up across scans.

use std::time::Duration;

use super::palette::Tone;

/// Shape of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical or horizontal bars, one per series entry.
    Bar,
    /// Ring split proportionally between series entries.
    Doughnut,
}

/// One labelled value in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Category label.
    pub label: String,
    /// Value plotted for the category.
    pub value: f64,
    /// Fill colour.
    pub tone: Tone,
}

impl ChartSeries {
    /// Creates a series entry.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value,
            tone,
        }
    }
}

/// Everything needed to draw a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart shape.
    pub kind: ChartKind,
    /// Entries in draw order.
    pub series: Vec<ChartSeries>,
    /// How long the entry animation runs.
    pub animation: Duration,
}

impl ChartSpec {
    /// Sum of all series values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.series.iter().map(|entry| entry.value).sum()
    }

    /// Largest series value, or zero for an empty chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .map(|entry| entry.value)
            .fold(0.0, f64::max)
    }
}

/// A created chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    /// Sequence number assigned by the owning handle, starting at 1.
    pub id: u64,
    /// Spec the instance was created from.
    pub spec: ChartSpec,
}

/// Owner of one chart slot.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    name: &'static str,
    current: Option<ChartInstance>,
    created: u64,
    disposed: u64,
}

impl ChartHandle {
    /// Creates an empty handle; `name` only appears in logs.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
            created: 0,
            disposed: 0,
        }
    }

    /// Disposes the live instance, if any, then creates one from `spec`.
    pub fn replace(&mut self, spec: ChartSpec) -> &ChartInstance {
        self.dispose();
        self.created += 1;
        tracing::debug!(chart = self.name, id = self.created, "created chart instance");
        self.current.insert(ChartInstance {
            id: self.created,
            spec,
        })
    }

    /// Disposes the live instance. Returns `false` when the slot was empty.
    pub fn dispose(&mut self) -> bool {
        let Some(prior) = self.current.take() else {
            return false;
        };
        self.disposed += 1;
        tracing::debug!(chart = self.name, id = prior.id, "disposed chart instance");
        true
    }

    /// The live instance.
    #[must_use]
    pub const fn current(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    /// Number of instances created so far; also the id of the live one.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.created
    }

    /// Number of instances disposed so far.
    #[must_use]
    pub const fn disposed_count(&self) -> u64 {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn bar_spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            series: vec![
                ChartSeries::new("Genuine Accounts", 70.0, Tone::Emerald),
                ChartSeries::new("AI/Bot Generators", 30.0, Tone::Red),
            ],
            animation: Duration::from_millis(1500),
        }
    }

    #[rstest]
    fn first_replace_disposes_nothing(bar_spec: ChartSpec) {
        let mut handle = ChartHandle::new("distribution");

        let id = handle.replace(bar_spec).id;

        assert_eq!(id, 1);
        assert_eq!(handle.disposed_count(), 0);
    }

    #[rstest]
    fn each_replace_disposes_exactly_one_prior_instance(bar_spec: ChartSpec) {
        let mut handle = ChartHandle::new("distribution");

        for _ in 0..3 {
            handle.replace(bar_spec.clone());
        }

        assert_eq!(handle.generation(), 3);
        assert_eq!(handle.disposed_count(), 2);
        assert_eq!(handle.current().map(|chart| chart.id), Some(3));
    }

    #[rstest]
    fn dispose_empties_the_slot(bar_spec: ChartSpec) {
        let mut handle = ChartHandle::new("gauge");
        handle.replace(bar_spec);

        assert!(handle.dispose());
        assert!(!handle.dispose());
        assert!(handle.current().is_none());
    }

    #[rstest]
    fn spec_totals(bar_spec: ChartSpec) {
        assert!((bar_spec.total() - 100.0).abs() < f64::EPSILON);
        assert!((bar_spec.max_value() - 70.0).abs() < f64::EPSILON);
    }
}
