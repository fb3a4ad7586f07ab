// Filter state model: the independent pieces edited by the panel widgets and
// the aggregate snapshot emitted to the embedding application. The snapshot is
// always derived on demand, so no field can be stale relative to another.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{DateMode, Language};
use crate::ui_constants::RANGE_DEFAULT_MAX;

/// Closed integer interval `[min, max]` bounding a count or metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
}

impl NumericRange {
    /// Full default range; `max` intentionally exceeds every slider's widget
    /// bound (see `ui_constants::RANGE_DEFAULT_MAX`).
    pub const FULL: NumericRange = NumericRange {
        min: 0,
        max: RANGE_DEFAULT_MAX,
    };

    /// Builds a range with `max` clamped up to `min`, so `max >= min` holds
    /// by construction.
    pub fn new(min: u32, max: u32) -> Self {
        NumericRange {
            min,
            max: max.max(min),
        }
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        NumericRange::FULL
    }
}

/// A mode plus up to two calendar dates expressing a temporal constraint.
/// `end` only carries meaning in `Between` mode; switching the mode away does
/// not clear it (the emitted state surfaces it as-is, consumers ignore it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateFilter {
    pub mode: DateMode,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Label sub-filter: free-text label name plus a count range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFilter {
    pub name: String,
    pub count_range: NumericRange,
}

/// Aggregate snapshot of all filter criteria, emitted on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub issues: NumericRange,
    pub pull_requests: NumericRange,
    pub stars: NumericRange,
    pub languages: Vec<Language>,
    pub created: DateFilter,
    pub last_push: DateFilter,
    pub label: LabelFilter,
}

/// The independent state pieces owned by the panel. Widgets mutate these
/// in-place; `snapshot()` derives the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterForm {
    pub issues: NumericRange,
    pub pull_requests: NumericRange,
    pub stars: NumericRange,
    pub languages: BTreeSet<Language>,
    pub created: DateFilter,
    pub last_push: DateFilter,
    pub label_name: String,
    pub label_count: NumericRange,
}

impl FilterForm {
    /// Restores every piece to its fixed default value.
    pub fn reset(&mut self) {
        *self = FilterForm::default();
    }

    /// Pure, synchronous derivation of the aggregate from the current pieces.
    pub fn snapshot(&self) -> FilterState {
        FilterState {
            issues: self.issues,
            pull_requests: self.pull_requests,
            stars: self.stars,
            languages: self.languages.iter().copied().collect(),
            created: self.created,
            last_push: self.last_push,
            label: LabelFilter {
                name: self.label_name.clone(),
                count_range: self.label_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_snapshot_is_the_fixed_default() {
        let state = FilterForm::default().snapshot();
        let full = NumericRange { min: 0, max: 1_000_000 };
        assert_eq!(state.issues, full);
        assert_eq!(state.pull_requests, full);
        assert_eq!(state.stars, full);
        assert!(state.languages.is_empty());
        assert_eq!(state.created, DateFilter::default());
        assert_eq!(state.last_push, DateFilter::default());
        assert_eq!(state.label.name, "");
        assert_eq!(state.label.count_range, full);
        assert_eq!(state.created.mode, DateMode::In);
        assert_eq!(state.created.start, None);
        assert_eq!(state.created.end, None);
    }

    #[test]
    fn numeric_range_never_inverts() {
        let r = NumericRange::new(500, 20);
        assert_eq!(r.min, 500);
        assert_eq!(r.max, 500);
        let r = NumericRange::new(10, 700);
        assert_eq!((r.min, r.max), (10, 700));
    }

    #[test]
    fn snapshot_reflects_latest_edits_only() {
        let mut form = FilterForm::default();
        form.issues = NumericRange::new(5, 50);
        form.issues = NumericRange::new(7, 80);
        form.stars = NumericRange::new(100, 2000);
        form.label_name = "bug".to_string();
        form.label_name = "help wanted".to_string();

        let state = form.snapshot();
        assert_eq!(state.issues, NumericRange::new(7, 80));
        assert_eq!(state.stars, NumericRange::new(100, 2000));
        assert_eq!(state.label.name, "help wanted");
        // pieces not edited stay at their defaults
        assert_eq!(state.pull_requests, NumericRange::FULL);
    }

    #[test]
    fn snapshot_is_pure() {
        let mut form = FilterForm::default();
        form.languages.insert(Language::Rust);
        form.created.mode = DateMode::After;
        form.created.start = Some(date(2023, 6, 1));

        let a = form.snapshot();
        let b = form.snapshot();
        assert_eq!(a, b);
    }

    #[test]
    fn language_selection_is_a_set() {
        let mut form = FilterForm::default();
        form.languages.insert(Language::JavaScript);
        form.languages.insert(Language::Go);
        // duplicate insert is a no-op
        form.languages.insert(Language::Go);
        form.languages.remove(&Language::JavaScript);

        assert_eq!(form.snapshot().languages, vec![Language::Go]);
    }

    #[test]
    fn between_mode_surfaces_both_dates() {
        let mut form = FilterForm::default();
        form.created.mode = DateMode::Between;
        form.created.start = Some(date(2020, 1, 1));
        form.created.end = Some(date(2021, 1, 1));

        let state = form.snapshot();
        assert_eq!(state.created.mode, DateMode::Between);
        assert_eq!(state.created.start, Some(date(2020, 1, 1)));
        assert_eq!(state.created.end, Some(date(2021, 1, 1)));
    }

    #[test]
    fn leaving_between_keeps_populated_dates() {
        let mut form = FilterForm::default();
        form.last_push.mode = DateMode::Between;
        form.last_push.start = Some(date(2020, 1, 1));
        form.last_push.end = Some(date(2021, 1, 1));
        form.last_push.mode = DateMode::Before;

        let state = form.snapshot();
        assert_eq!(state.last_push.mode, DateMode::Before);
        assert_eq!(state.last_push.start, Some(date(2020, 1, 1)));
        assert_eq!(state.last_push.end, Some(date(2021, 1, 1)));
    }

    #[test]
    fn reset_restores_the_fixed_default() {
        let mut form = FilterForm::default();
        form.issues = NumericRange::new(1, 2);
        form.pull_requests = NumericRange::new(3, 4);
        form.stars = NumericRange::new(5, 6);
        form.languages.insert(Language::Kotlin);
        form.created.mode = DateMode::Between;
        form.created.start = Some(date(2019, 5, 5));
        form.created.end = Some(date(2020, 5, 5));
        form.label_name = "enhancement".to_string();
        form.label_count = NumericRange::new(1, 10);

        form.reset();
        assert_eq!(form, FilterForm::default());
        assert_eq!(form.snapshot(), FilterForm::default().snapshot());
    }

    #[test]
    fn snapshot_serializes_with_wire_field_names() {
        let mut form = FilterForm::default();
        form.languages.insert(Language::Cpp);
        let json = serde_json::to_value(form.snapshot()).unwrap();
        assert!(json.get("pullRequests").is_some());
        assert!(json.get("lastPush").is_some());
        assert_eq!(json["languages"][0], "C++");
        assert!(json["label"].get("countRange").is_some());
        assert_eq!(json["created"]["mode"], "in");
    }
}
