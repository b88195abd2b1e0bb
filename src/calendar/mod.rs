use chrono::{Datelike, Duration, NaiveDate};

/// Number of cells in the fixed picker grid: 6 rows × 7 columns.
pub const GRID_CELLS: usize = 42;

/// The month currently shown in the picker, independent of any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    pub year:  i32,
    pub month: u32, // 1-12
}

impl ViewMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is kept in 1..=12, so this cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// Returns the fixed 42-cell grid for a view month, week starting Sunday:
/// trailing days of the previous month up to the 1st's weekday, every day of
/// the month, then days of the next month to pad to exactly 42. The cells are
/// always consecutive calendar days, so the grid height never changes.
pub fn month_grid(view: ViewMonth) -> Vec<NaiveDate> {
    let first  = view.first_day();
    let offset = first.weekday().num_days_from_sunday() as i64;
    let start  = first - Duration::days(offset);

    (0..GRID_CELLS as i64).map(|i| start + Duration::days(i)).collect()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    (next.unwrap() - first).num_days() as u32
}

fn month_name(m: u32) -> &'static str {
    match m {
        1=>"January", 2=>"February", 3=>"March",    4=>"April",
        5=>"May",     6=>"June",     7=>"July",      8=>"August",
        9=>"September",10=>"October",11=>"November",12=>"December",
        _=>"???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn grid_always_has_42_cells() {
        for year in [1999, 2024, 2025, 2100] {
            for month in 1..=12 {
                assert_eq!(month_grid(ViewMonth { year, month }).len(), GRID_CELLS);
            }
        }
    }

    #[test]
    fn grid_is_consecutive_and_brackets_the_month() {
        for month in 1..=12 {
            let view = ViewMonth { year: 2024, month };
            let grid = month_grid(view);
            for w in grid.windows(2) {
                assert_eq!(w[1] - w[0], Duration::days(1));
            }
            let first = view.first_day();
            let last  = d(2024, month, days_in_month(2024, month));
            // leading cells precede the 1st, trailing cells follow the last day
            assert!(grid[0] <= first && *grid.last().unwrap() >= last);
            let lead = grid.iter().take_while(|c| **c < first).count();
            assert_eq!(grid[lead], first);
        }
    }

    #[test]
    fn march_2024_first_row_runs_feb_25_to_mar_2() {
        // March 1st 2024 is a Friday, so the row starts on Sunday Feb 25
        let grid = month_grid(ViewMonth { year: 2024, month: 3 });
        assert_eq!(grid[0], d(2024, 2, 25));
        assert_eq!(grid[6], d(2024, 3, 2));
        assert_eq!(*grid.last().unwrap(), d(2024, 4, 6));
    }

    #[test]
    fn sunday_first_month_has_no_leading_cells() {
        // September 2024 starts on a Sunday
        let grid = month_grid(ViewMonth { year: 2024, month: 9 });
        assert_eq!(grid[0], d(2024, 9, 1));
    }

    #[test]
    fn six_row_month_fits_the_fixed_grid() {
        // March 2025: 31 days starting Saturday — spills into a 6th row
        let grid = month_grid(ViewMonth { year: 2025, month: 3 });
        assert_eq!(grid.len(), GRID_CELLS);
        assert!(grid.contains(&d(2025, 3, 31)));
    }

    #[test]
    fn view_month_navigation_wraps_years() {
        let dec = ViewMonth { year: 2024, month: 12 };
        assert_eq!(dec.next(), ViewMonth { year: 2025, month: 1 });
        let jan = ViewMonth { year: 2024, month: 1 };
        assert_eq!(jan.prev(), ViewMonth { year: 2023, month: 12 });
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
