//! Timeline filter
//!
//! Maps a slider position onto a cutoff timestamp and keeps every record at or
//! before it.
//!
//! ```text
//! span   = last.timestamp - first.timestamp
//! cutoff = first.timestamp + span * end%
//! view   = records where timestamp <= cutoff
//! ```
//!
//! Records are ascending, so the view is always a prefix of the sequence and
//! is returned as a borrowed slice.

use crate::dataset::TimeSeriesRecord;

use super::error::{TimelineError, TimelineResult};
use super::range::{Percent, RangeSelection};

/// Validated, ascending record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    records: Vec<TimeSeriesRecord>,
}

impl Timeline {
    /// Build a timeline, checking it is non-empty and strictly ascending by
    /// timestamp
    pub fn new(records: Vec<TimeSeriesRecord>) -> TimelineResult<Self> {
        validate(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    pub fn first(&self) -> &TimeSeriesRecord {
        // Non-empty by construction
        &self.records[0]
    }

    pub fn last(&self) -> &TimeSeriesRecord {
        &self.records[self.records.len() - 1]
    }

    /// Milliseconds between the first and last record
    pub fn span_millis(&self) -> u64 {
        self.last().timestamp.abs_diff(self.first().timestamp)
    }

    /// Records visible for the given selection
    pub fn view(&self, selection: RangeSelection) -> FilteredView<'_> {
        let cutoff = cutoff_timestamp(
            self.first().timestamp,
            self.last().timestamp,
            selection.end(),
        );
        let visible = prefix_len(&self.records, cutoff);

        tracing::debug!(
            end_percent = selection.end().value(),
            cutoff,
            visible,
            total = self.records.len(),
            "Timeline view recomputed"
        );

        FilteredView {
            records: &self.records[..visible],
            selection,
            cutoff,
            total: self.records.len(),
        }
    }
}

/// Interpolated inclusive upper bound for a slider position
///
/// The span is taken in `f64` so any pair of `i64` timestamps is accepted.
pub fn cutoff_timestamp(first: i64, last: i64, end: Percent) -> f64 {
    let span = last as f64 - first as f64;
    first as f64 + span * end.fraction()
}

/// Records at or before the cutoff for `end_percent`, in their original order
///
/// Free-standing form of [`Timeline::view`] for callers holding a plain
/// slice. The slice is validated on every call.
pub fn compute_filtered_view(
    records: &[TimeSeriesRecord],
    end_percent: Percent,
) -> TimelineResult<&[TimeSeriesRecord]> {
    validate(records)?;

    let first = records[0].timestamp;
    let last = records[records.len() - 1].timestamp;
    let cutoff = cutoff_timestamp(first, last, end_percent);

    Ok(&records[..prefix_len(records, cutoff)])
}

fn validate(records: &[TimeSeriesRecord]) -> TimelineResult<()> {
    if records.is_empty() {
        return Err(TimelineError::Empty);
    }

    if let Some(pos) = records
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(TimelineError::Unordered { index: pos + 1 });
    }

    Ok(())
}

fn prefix_len(records: &[TimeSeriesRecord], cutoff: f64) -> usize {
    records.partition_point(|r| r.timestamp as f64 <= cutoff)
}

/// Records on display for one slider position
///
/// Borrowed from its [`Timeline`] and rebuilt on every selection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredView<'a> {
    records: &'a [TimeSeriesRecord],
    selection: RangeSelection,
    cutoff: f64,
    total: usize,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &'a [TimeSeriesRecord] {
        self.records
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    /// Inclusive cutoff timestamp, milliseconds
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for views built from a [`Timeline`]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether every record of the timeline is visible
    pub fn is_complete(&self) -> bool {
        self.records.len() == self.total
    }

    pub fn iter(&self) -> std::slice::Iter<'a, TimeSeriesRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&'a TimeSeriesRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for FilteredView<'a> {
    type Item = &'a TimeSeriesRecord;
    type IntoIter = std::slice::Iter<'a, TimeSeriesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::mock::historical_flows;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    const T0: i64 = 1704067200000;

    fn record(label: &str, timestamp: i64) -> TimeSeriesRecord {
        TimeSeriesRecord::new(label, 1.0, 1.0, 2.0, timestamp)
    }

    fn pct(value: f64) -> Percent {
        Percent::clamped(value).unwrap()
    }

    fn three_points() -> Timeline {
        Timeline::new(vec![
            record("a", T0),
            record("b", T0 + 30 * DAY_MS),
            record("c", T0 + 90 * DAY_MS),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_records() {
        assert_eq!(Timeline::new(Vec::new()), Err(TimelineError::Empty));
        assert_eq!(
            compute_filtered_view(&[], Percent::FULL),
            Err(TimelineError::Empty)
        );
    }

    #[test]
    fn test_rejects_unordered_records() {
        let records = vec![record("a", 10), record("b", 30), record("c", 20)];
        assert_eq!(
            Timeline::new(records.clone()),
            Err(TimelineError::Unordered { index: 2 })
        );
        assert_eq!(
            compute_filtered_view(&records, Percent::FULL),
            Err(TimelineError::Unordered { index: 2 })
        );
    }

    #[test]
    fn test_rejects_repeated_timestamps() {
        let records = vec![record("a", 1000), record("b", 1000), record("c", 2000)];
        assert_eq!(
            Timeline::new(records.clone()),
            Err(TimelineError::Unordered { index: 1 })
        );
        assert_eq!(
            compute_filtered_view(&records, Percent::ZERO),
            Err(TimelineError::Unordered { index: 1 })
        );
    }

    #[test]
    fn test_extreme_timestamps() {
        let timeline = Timeline::new(vec![
            record("min", i64::MIN),
            record("zero", 0),
            record("max", i64::MAX),
        ])
        .unwrap();

        assert_eq!(timeline.span_millis(), u64::MAX);
        assert_eq!(timeline.view(RangeSelection::up_to(Percent::ZERO)).len(), 1);
        assert_eq!(timeline.view(RangeSelection::up_to(pct(50.0))).len(), 2);
        assert!(timeline.view(RangeSelection::full()).is_complete());
    }

    #[test]
    fn test_midpoint_cutoff() {
        let timeline = three_points();
        let view = timeline.view(RangeSelection::up_to(pct(50.0)));

        assert_eq!(view.cutoff(), (T0 + 45 * DAY_MS) as f64);
        let labels: Vec<_> = view.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert!(!view.is_complete());
    }

    #[test]
    fn test_zero_percent_keeps_first_record() {
        let timeline = three_points();
        let view = timeline.view(RangeSelection::up_to(Percent::ZERO));

        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].label, "a");
        assert_eq!(view.cutoff(), T0 as f64);
    }

    #[test]
    fn test_full_range_keeps_everything() {
        let timeline = Timeline::new(historical_flows()).unwrap();
        let view = timeline.view(RangeSelection::full());

        assert!(view.is_complete());
        assert_eq!(view.records(), timeline.records());
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let exact = Timeline::new(vec![record("a", 0), record("b", 50), record("c", 100)])
            .unwrap();
        assert_eq!(exact.view(RangeSelection::up_to(pct(50.0))).len(), 2);
        assert_eq!(exact.view(RangeSelection::up_to(pct(49.0))).len(), 1);
    }

    #[test]
    fn test_views_are_nonempty_prefixes() {
        let timeline = Timeline::new(historical_flows()).unwrap();
        let all = timeline.records();

        for step in 0..=100 {
            let view = timeline.view(RangeSelection::up_to(pct(step as f64)));
            assert!(!view.is_empty(), "empty view at {}%", step);
            assert_eq!(view.records(), &all[..view.len()]);
        }
    }

    #[test]
    fn test_views_grow_monotonically() {
        let timeline = Timeline::new(historical_flows()).unwrap();

        let mut previous = 0;
        for step in 0..=100 {
            let view = timeline.view(RangeSelection::up_to(pct(step as f64)));
            assert!(view.len() >= previous, "view shrank at {}%", step);
            previous = view.len();
        }
        assert_eq!(previous, timeline.records().len());
    }

    #[test]
    fn test_view_is_repeatable() {
        let timeline = Timeline::new(historical_flows()).unwrap();
        let selection = RangeSelection::up_to(pct(37.0));

        assert_eq!(timeline.view(selection), timeline.view(selection));
    }

    #[test]
    fn test_free_function_matches_timeline() {
        let records = historical_flows();
        let timeline = Timeline::new(records.clone()).unwrap();

        for end in [0.0, 12.5, 50.0, 99.0, 100.0] {
            let slice = compute_filtered_view(&records, pct(end)).unwrap();
            assert_eq!(slice, timeline.view(RangeSelection::up_to(pct(end))).records());
        }
    }

    #[test]
    fn test_historical_quarter() {
        // Jan 1 .. Apr 15 is 105 days; 25% lands on Jan 27
        let records = historical_flows();
        let view = compute_filtered_view(&records, pct(25.0)).unwrap();

        let labels: Vec<_> = view.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-01-01", "2024-01-15"]);
    }

    #[test]
    fn test_single_record_timeline() {
        let timeline = Timeline::new(vec![record("only", T0)]).unwrap();

        assert_eq!(timeline.span_millis(), 0);
        assert_eq!(timeline.view(RangeSelection::up_to(Percent::ZERO)).len(), 1);
        assert_eq!(timeline.view(RangeSelection::full()).len(), 1);
    }
}
