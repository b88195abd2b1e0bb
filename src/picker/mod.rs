//! Check-in / check-out date-range picker.
//!
//! Pure widget state: the host owns a [`DateRange`] store and feeds committed
//! changes back into it. All comparisons are by calendar day — time-of-day is
//! truncated away before the picker ever sees a date.

use chrono::{Duration, NaiveDate};

use crate::calendar::{month_grid, ViewMonth, GRID_CELLS};

/// A committed stay: `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end:   NaiveDate,
}

impl DateRange {
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Selection phase. `Partial` already carries a provisional end two nights
/// after the start, so the range reads complete after the first click — the
/// storefront's deliberate default-stay behavior. The phase still matters:
/// only a `Partial` picker treats the next click as "choose the end".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Empty,
    Partial { start: NaiveDate, provisional_end: NaiveDate },
    Complete(DateRange),
}

/// Display flags for one grid cell, derived per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellState {
    pub is_today:      bool,
    pub outside_month: bool,
    pub is_past:       bool,
    pub range_start:   bool,
    pub range_end:     bool,
    pub in_range:      bool, // strictly between start and end
}

impl CellState {
    pub fn disabled(&self) -> bool {
        self.is_past || self.outside_month
    }
}

pub struct DateRangePicker {
    view:      ViewMonth,
    selection: Selection,
    hover:     Option<NaiveDate>,
}

impl DateRangePicker {
    /// A fresh picker: view month follows the prior selection if the store
    /// has one, otherwise today's month; the range defaults to a two-night
    /// stay starting today.
    pub fn new(today: NaiveDate, prior: Option<DateRange>) -> Self {
        let range = prior.unwrap_or(DateRange {
            start: today,
            end:   today + Duration::days(2),
        });
        Self {
            view:      ViewMonth::containing(range.start),
            selection: Selection::Complete(range),
            hover:     None,
        }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
    }

    /// The currently committed range, if any.
    pub fn range(&self) -> Option<DateRange> {
        match self.selection {
            Selection::Empty => None,
            Selection::Partial { start, provisional_end } => {
                Some(DateRange { start, end: provisional_end })
            }
            Selection::Complete(r) => Some(r),
        }
    }

    /// Handle a click on `date`. Returns the newly committed range, or `None`
    /// when the click was rejected (past date). The host writes every
    /// returned range into its booking store.
    pub fn click(&mut self, date: NaiveDate, today: NaiveDate) -> Option<DateRange> {
        if date < today {
            return None; // past dates are never selectable
        }

        let committed = match self.selection {
            Selection::Empty | Selection::Complete(_) => {
                // First click proposes a default two-night stay
                let end = date + Duration::days(2);
                self.selection = Selection::Partial { start: date, provisional_end: end };
                DateRange { start: date, end }
            }
            Selection::Partial { start, .. } => {
                let range = if date > start {
                    DateRange { start, end: date }
                } else {
                    // Clicking at or before the start swaps the endpoints
                    DateRange { start: date, end: start }
                };
                self.selection = Selection::Complete(range);
                range
            }
        };
        self.hover = None;
        Some(committed)
    }

    /// Hover feedback: only meaningful mid-selection, never mutates the
    /// committed range. Disabled cells get no hover.
    pub fn set_hover(&mut self, date: NaiveDate, today: NaiveDate) {
        if date < today || !self.view.contains(date) {
            return;
        }
        self.hover = Some(date);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// The grid for the current view month, always [`GRID_CELLS`] entries.
    pub fn grid(&self) -> Vec<NaiveDate> {
        month_grid(self.view)
    }

    /// Derive the display flags for one cell.
    pub fn cell_state(&self, date: NaiveDate, today: NaiveDate) -> CellState {
        let mut cs = CellState {
            is_today:      date == today,
            outside_month: !self.view.contains(date),
            is_past:       date < today,
            ..CellState::default()
        };

        // While partial, the highlight tracks the hovered date instead of the
        // provisional end, normalized so the interval is always forward.
        let highlight = match (self.selection, self.hover) {
            (Selection::Partial { start, .. }, Some(h)) => Some(DateRange {
                start: start.min(h),
                end:   start.max(h),
            }),
            _ => self.range(),
        };

        if let Some(r) = highlight {
            cs.range_start = date == r.start;
            cs.range_end   = date == r.end;
            cs.in_range    = date > r.start && date < r.end;
        }
        cs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2024, 4, 1)
    }

    fn empty_picker() -> DateRangePicker {
        let mut p = DateRangePicker::new(today(), None);
        p.selection = Selection::Empty;
        p
    }

    #[test]
    fn defaults_to_two_nights_from_today() {
        let p = DateRangePicker::new(today(), None);
        assert_eq!(p.range(), Some(DateRange { start: d(2024, 4, 1), end: d(2024, 4, 3) }));
        assert_eq!(p.view(), ViewMonth { year: 2024, month: 4 });
    }

    #[test]
    fn prior_selection_wins_over_the_default() {
        let prior = DateRange { start: d(2024, 6, 10), end: d(2024, 6, 14) };
        let p = DateRangePicker::new(today(), Some(prior));
        assert_eq!(p.range(), Some(prior));
        // view follows the selection, not today
        assert_eq!(p.view(), ViewMonth { year: 2024, month: 6 });
    }

    #[test]
    fn first_click_proposes_a_two_night_stay() {
        let mut p = empty_picker();
        let r = p.click(d(2024, 4, 10), today());
        assert_eq!(r, Some(DateRange { start: d(2024, 4, 10), end: d(2024, 4, 12) }));
        assert_eq!(p.range(), r);
    }

    #[test]
    fn second_click_after_start_completes_the_range() {
        let mut p = empty_picker();
        p.click(d(2024, 4, 10), today());
        let r = p.click(d(2024, 4, 20), today());
        assert_eq!(r, Some(DateRange { start: d(2024, 4, 10), end: d(2024, 4, 20) }));
    }

    #[test]
    fn second_click_before_start_swaps_the_endpoints() {
        let mut p = empty_picker();
        p.click(d(2024, 4, 10), today());
        let r = p.click(d(2024, 4, 5), today());
        assert_eq!(r, Some(DateRange { start: d(2024, 4, 5), end: d(2024, 4, 10) }));
    }

    #[test]
    fn click_after_complete_starts_over() {
        let mut p = empty_picker();
        p.click(d(2024, 4, 10), today());
        p.click(d(2024, 4, 20), today());
        let r = p.click(d(2024, 4, 25), today());
        assert_eq!(r, Some(DateRange { start: d(2024, 4, 25), end: d(2024, 4, 27) }));
    }

    #[test]
    fn past_clicks_are_ignored_in_every_state() {
        let mut p = empty_picker();
        assert_eq!(p.click(d(2024, 3, 28), today()), None);
        assert_eq!(p.range(), None);

        p.click(d(2024, 4, 10), today());
        let before = p.range();
        assert_eq!(p.click(d(2024, 3, 15), today()), None);
        assert_eq!(p.range(), before);
    }

    #[test]
    fn start_never_exceeds_end_over_arbitrary_click_sequences() {
        let mut p = empty_picker();
        let clicks = [
            d(2024, 4, 18), d(2024, 4, 3), d(2024, 4, 3), d(2024, 5, 20),
            d(2024, 4, 9), d(2024, 4, 9), d(2024, 7, 1), d(2024, 4, 2),
        ];
        for c in clicks {
            p.click(c, today());
            let r = p.range().unwrap();
            assert!(r.start <= r.end, "violated by click on {c}");
        }
    }

    #[test]
    fn hover_highlight_is_normalized_and_uncommitted() {
        let mut p = empty_picker();
        p.click(d(2024, 4, 10), today());
        p.set_hover(d(2024, 4, 5), today());

        // open interval between hover (5th) and start (10th)
        let mid = p.cell_state(d(2024, 4, 7), today());
        assert!(mid.in_range);
        assert!(p.cell_state(d(2024, 4, 5), today()).range_start);
        assert!(p.cell_state(d(2024, 4, 10), today()).range_end);

        // committed state untouched
        assert_eq!(p.range(), Some(DateRange { start: d(2024, 4, 10), end: d(2024, 4, 12) }));
        p.clear_hover();
        assert!(!p.cell_state(d(2024, 4, 7), today()).in_range);
    }

    #[test]
    fn hover_is_rejected_on_disabled_cells() {
        let mut p = empty_picker();
        p.click(d(2024, 4, 10), today());
        p.set_hover(d(2024, 3, 20), today()); // past
        assert!(!p.cell_state(d(2024, 4, 7), today()).in_range);
        p.set_hover(d(2024, 5, 2), today()); // outside view month
        assert!(!p.cell_state(d(2024, 4, 7), today()).in_range);
    }

    #[test]
    fn cell_flags_cover_the_rendering_policy() {
        let p = DateRangePicker::new(today(), Some(DateRange {
            start: d(2024, 4, 10),
            end:   d(2024, 4, 14),
        }));
        assert!(p.cell_state(d(2024, 4, 1), today()).is_today);
        assert!(p.cell_state(d(2024, 3, 31), today()).outside_month);
        assert!(p.cell_state(d(2024, 3, 31), today()).disabled());
        assert!(p.cell_state(d(2024, 4, 10), today()).range_start);
        assert!(p.cell_state(d(2024, 4, 14), today()).range_end);
        assert!(p.cell_state(d(2024, 4, 12), today()).in_range);
        // endpoints are not "in range" — the interval is open
        assert!(!p.cell_state(d(2024, 4, 10), today()).in_range);
        assert!(!p.cell_state(d(2024, 4, 14), today()).in_range);
    }

    #[test]
    fn grid_matches_the_view_month() {
        let mut p = DateRangePicker::new(today(), None);
        assert_eq!(p.grid().len(), GRID_CELLS);
        p.next_month();
        assert_eq!(p.view(), ViewMonth { year: 2024, month: 5 });
        p.prev_month();
        p.prev_month();
        assert_eq!(p.view(), ViewMonth { year: 2024, month: 3 });
    }
}
