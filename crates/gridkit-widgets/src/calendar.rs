//! Calendar state model: month grid generation, single and range
//! selection, and quick-select presets.
//!
//! Time never comes from a system clock; "today" is always passed in so
//! grids and presets are reproducible.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalendarMode {
    /// One date
    #[default]
    Single,
    /// An inclusive start/end pair
    Range,
}

/// The committed selection carried by [`DateSelected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSelection {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
    Cleared,
}

/// Message emitted when a selection is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelected {
    pub value: DateSelection,
}

/// One day cell in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub disabled: bool,
    pub selected: bool,
    /// Between a pending range start and the hovered/selected end
    pub in_range: bool,
    pub today: bool,
}

/// A generated month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1, per the configured first day of week
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

/// Quick-select presets for range mode, resolved against a reference
/// date. Weeks run Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickRange {
    Today,
    Tomorrow,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
}

impl QuickRange {
    /// Every preset, in display order.
    pub const ALL: [Self; 11] = [
        Self::Today,
        Self::Tomorrow,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisQuarter,
        Self::LastQuarter,
        Self::ThisYear,
        Self::LastYear,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::ThisQuarter => "This Quarter",
            Self::LastQuarter => "Last Quarter",
            Self::ThisYear => "This Year",
            Self::LastYear => "Last Year",
        }
    }

    /// Resolve the preset into an inclusive date range.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
        let (q_year, q_month) = quarter_start(today.year(), today.month());
        match self {
            Self::Today => (today, today),
            Self::Tomorrow => {
                let d = today + Days::new(1);
                (d, d)
            }
            Self::Yesterday => {
                let d = today - Days::new(1);
                (d, d)
            }
            Self::ThisWeek => (week_start, week_start + Days::new(6)),
            Self::LastWeek => {
                let start = week_start - Days::new(7);
                (start, start + Days::new(6))
            }
            Self::ThisMonth => month_span(today.year(), today.month()),
            Self::LastMonth => {
                let (y, m) = prev_month(today.year(), today.month());
                month_span(y, m)
            }
            Self::ThisQuarter => quarter_span(q_year, q_month),
            Self::LastQuarter => {
                let (y, m) = if q_month == 1 {
                    (q_year - 1, 10)
                } else {
                    (q_year, q_month - 3)
                };
                quarter_span(y, m)
            }
            Self::ThisYear => year_span(today.year()),
            Self::LastYear => year_span(today.year() - 1),
        }
    }

    /// Match a committed range back to its preset, if any.
    #[must_use]
    pub fn detect(range: (NaiveDate, NaiveDate), today: NaiveDate) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.resolve(today) == range)
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn month_span(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let (ny, nm) = next_month(year, month);
    (
        first_of_month(year, month),
        first_of_month(ny, nm) - Days::new(1),
    )
}

fn quarter_start(year: i32, month: u32) -> (i32, u32) {
    (year, ((month - 1) / 3) * 3 + 1)
}

fn quarter_span(year: i32, start_month: u32) -> (NaiveDate, NaiveDate) {
    let (end_y, end_m) = match start_month {
        10 => (year + 1, 1),
        m => (year, m + 3),
    };
    (
        first_of_month(year, start_month),
        first_of_month(end_y, end_m) - Days::new(1),
    )
}

fn year_span(year: i32) -> (NaiveDate, NaiveDate) {
    (
        first_of_month(year, 1),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default(),
    )
}

/// Calendar interaction state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    mode: CalendarMode,
    /// First day of the displayed month
    cursor: NaiveDate,
    /// Committed single selection
    selected: Option<NaiveDate>,
    /// Committed range selection
    range: Option<(NaiveDate, NaiveDate)>,
    /// Pending range being built by two clicks
    #[serde(skip)]
    temp: (Option<NaiveDate>, Option<NaiveDate>),
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    disabled_dates: Vec<NaiveDate>,
    disabled_weekdays: Vec<Weekday>,
    first_day_of_week: Weekday,
}

impl Calendar {
    /// Create a calendar showing the month of `cursor`.
    #[must_use]
    pub fn new(mode: CalendarMode, cursor: NaiveDate) -> Self {
        Self {
            mode,
            cursor: first_of_month(cursor.year(), cursor.month()),
            selected: None,
            range: None,
            temp: (None, None),
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            disabled_weekdays: Vec::new(),
            first_day_of_week: Weekday::Sun,
        }
    }

    /// Earliest selectable date.
    #[must_use]
    pub const fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Latest selectable date.
    #[must_use]
    pub const fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Disable individual dates.
    #[must_use]
    pub fn disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    /// Disable whole weekdays.
    #[must_use]
    pub fn disabled_weekdays(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.disabled_weekdays = days.into_iter().collect();
        self
    }

    /// Set the first day of the week for grid layout.
    #[must_use]
    pub const fn first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// The committed single selection.
    #[must_use]
    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The committed range selection.
    #[must_use]
    pub const fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.range
    }

    /// First day of the displayed month.
    #[must_use]
    pub const fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) {
        let (y, m) = prev_month(self.cursor.year(), self.cursor.month());
        self.cursor = first_of_month(y, m);
    }

    /// Show the next month.
    pub fn next_month(&mut self) {
        let (y, m) = next_month(self.cursor.year(), self.cursor.month());
        self.cursor = first_of_month(y, m);
    }

    /// Show the same month a year earlier.
    pub fn prev_year(&mut self) {
        self.cursor = first_of_month(self.cursor.year() - 1, self.cursor.month());
    }

    /// Show the same month a year later.
    pub fn next_year(&mut self) {
        self.cursor = first_of_month(self.cursor.year() + 1, self.cursor.month());
    }

    /// Whether a date is unselectable.
    #[must_use]
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if self.disabled_dates.contains(&date) {
            return true;
        }
        if self.disabled_weekdays.contains(&date.weekday()) {
            return true;
        }
        if self.min_date.is_some_and(|min| date < min) {
            return true;
        }
        self.max_date.is_some_and(|max| date > max)
    }

    /// Handle a click on a day.
    ///
    /// Single mode commits immediately. Range mode builds a pending range
    /// over two clicks, swapping endpoints when clicked out of order, and
    /// commits only on [`Calendar::apply`]. Disabled dates are ignored.
    pub fn select(&mut self, date: NaiveDate) -> Option<DateSelected> {
        if self.is_disabled(date) {
            return None;
        }
        match self.mode {
            CalendarMode::Single => {
                self.selected = Some(date);
                tracing::debug!(%date, "date selected");
                Some(DateSelected {
                    value: DateSelection::Single(date),
                })
            }
            CalendarMode::Range => {
                match self.temp {
                    // Start a new range on first click or after a complete one.
                    (None, _) | (Some(_), Some(_)) => self.temp = (Some(date), None),
                    (Some(start), None) => {
                        self.temp = if date < start {
                            (Some(date), Some(start))
                        } else {
                            (Some(start), Some(date))
                        };
                    }
                }
                None
            }
        }
    }

    /// Commit the pending range. Incomplete ranges do not commit.
    pub fn apply(&mut self) -> Option<DateSelected> {
        if let (Some(start), Some(end)) = self.temp {
            self.range = Some((start, end));
            tracing::debug!(%start, %end, "range applied");
            Some(DateSelected {
                value: DateSelection::Range(start, end),
            })
        } else {
            None
        }
    }

    /// Discard the pending range, restoring the committed one.
    pub fn cancel(&mut self) {
        self.temp = match self.range {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };
    }

    /// Clear any selection.
    pub fn clear(&mut self) -> DateSelected {
        self.selected = None;
        self.range = None;
        self.temp = (None, None);
        DateSelected {
            value: DateSelection::Cleared,
        }
    }

    /// Apply a quick-select preset, committing immediately and moving the
    /// cursor to the range start.
    pub fn quick_select(&mut self, preset: QuickRange, today: NaiveDate) -> DateSelected {
        let (start, end) = preset.resolve(today);
        self.range = Some((start, end));
        self.temp = (Some(start), Some(end));
        self.cursor = first_of_month(start.year(), start.month());
        DateSelected {
            value: DateSelection::Range(start, end),
        }
    }

    /// The preset matching the committed range, if any.
    #[must_use]
    pub fn active_preset(&self, today: NaiveDate) -> Option<QuickRange> {
        self.range.and_then(|r| QuickRange::detect(r, today))
    }

    fn is_cell_selected(&self, date: NaiveDate) -> bool {
        match self.mode {
            CalendarMode::Single => self.selected == Some(date),
            CalendarMode::Range => match self.temp {
                (Some(start), Some(end)) => date >= start && date <= end,
                (Some(start), None) => date == start,
                _ => false,
            },
        }
    }

    /// Generate the displayed month's grid.
    #[must_use]
    pub fn month_grid(&self, today: NaiveDate) -> MonthGrid {
        let year = self.cursor.year();
        let month = self.cursor.month();
        let first = self.cursor;
        let leading_blanks = ((first.weekday().num_days_from_sunday() + 7
            - self.first_day_of_week.num_days_from_sunday())
            % 7) as usize;
        let (_, end) = month_span(year, month);

        let days = (1..=end.day())
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .map(|date| DayCell {
                date,
                disabled: self.is_disabled(date),
                selected: self.is_cell_selected(date),
                in_range: matches!(self.temp, (Some(start), None) if self.mode == CalendarMode::Range && date > start),
                today: date == today,
            })
            .collect();

        MonthGrid {
            year,
            month,
            leading_blanks,
            days,
        }
    }
}
