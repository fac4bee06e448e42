use chrono::NaiveDate;
use pickem_ui::date_range::{DatePolicy, DateRange, DateRangeState, PickerEvent, RangePosition};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 12)
}

fn open_state() -> DateRangeState {
    let mut state = DateRangeState::new(today());
    state.open(today());
    state
}

#[test]
fn test_dates_outside_bounds_are_disabled_and_ignored() {
    let policy = DatePolicy::default().min_date(date(2024, 1, 5)).max_date(date(2024, 1, 25));
    for day in [date(2024, 1, 4), date(2024, 1, 26), date(2023, 12, 31), date(2024, 2, 1)] {
        assert!(policy.is_disabled(day, today(), RangePosition::Start));
        assert!(policy.is_disabled(day, today(), RangePosition::End));
    }

    let mut state = open_state();
    state.policy = policy;
    assert!(state.select_date(date(2024, 1, 4), today()).is_empty());
    assert!(state.select_date(date(2024, 1, 26), today()).is_empty());
    assert_eq!(state.value(), DateRange::EMPTY);
    assert_eq!(state.range_position(), RangePosition::Start);
}

#[test]
fn test_later_start_drops_stale_end() {
    let mut state = DateRangeState::new(today()).with_default_value(DateRange::new(
        Some(date(2024, 1, 2)),
        Some(date(2024, 1, 8)),
    ));
    state.close_on_select = false;
    state.open(today());

    let events = state.select_date(date(2024, 1, 20), today());
    assert_eq!(state.value(), DateRange::new(Some(date(2024, 1, 20)), None));
    assert_eq!(state.range_position(), RangePosition::End);
    assert_eq!(
        events,
        vec![
            PickerEvent::Change(DateRange::new(Some(date(2024, 1, 20)), None)),
            PickerEvent::RangePositionChange(RangePosition::End),
        ]
    );
}

#[test]
fn test_clear_resets_without_closing() {
    let mut state = open_state();
    state.close_on_select = false;
    state.select_date(date(2024, 1, 10), today());
    state.select_date(date(2024, 1, 15), today());
    assert!(state.value().is_complete());

    assert_eq!(state.clear(), vec![PickerEvent::Change(DateRange::EMPTY)]);
    assert_eq!(state.value(), DateRange::EMPTY);
    assert!(state.is_open());

    // Clearing an empty range is still a reset
    assert_eq!(state.clear(), vec![PickerEvent::Change(DateRange::EMPTY)]);
}

#[test]
fn test_earlier_end_click_clears_start() {
    let mut state = open_state();

    state.select_date(date(2024, 1, 10), today());
    assert_eq!(state.range_position(), RangePosition::End);
    assert_eq!(state.value().start, Some(date(2024, 1, 10)));

    state.select_date(date(2024, 1, 5), today());
    assert_eq!(state.value(), DateRange::new(None, Some(date(2024, 1, 5))));
    assert_eq!(state.range_position(), RangePosition::Start);
    assert!(state.is_open());
}

#[test]
fn test_completing_range_accepts_and_closes() {
    let mut state = open_state();
    state.select_date(date(2024, 1, 10), today());
    let events = state.select_date(date(2024, 1, 14), today());
    let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 14)));
    assert_eq!(
        events,
        vec![
            PickerEvent::Change(range),
            PickerEvent::Accept(range),
            PickerEvent::Close,
            PickerEvent::RangePositionChange(RangePosition::Start),
        ]
    );
    assert!(!state.is_open());
}

#[test]
fn test_cancel_keeps_partial_selection() {
    let mut state = open_state();
    state.select_date(date(2024, 1, 10), today());
    assert_eq!(state.close(), vec![PickerEvent::Close]);

    state.open(today());
    assert_eq!(state.value().start, Some(date(2024, 1, 10)));
    assert_eq!(state.range_position(), RangePosition::End);
}

#[test]
fn test_accept_requires_complete_range() {
    let mut state = open_state();
    state.close_on_select = false;
    state.select_date(date(2024, 1, 10), today());
    assert!(state.accept().is_empty());
    assert!(state.is_open());

    state.select_date(date(2024, 1, 11), today());
    let events = state.accept();
    assert!(matches!(events.as_slice(), [PickerEvent::Accept(_), PickerEvent::Close]));
}

#[test]
fn test_controlled_state_only_notifies() {
    let mut state = DateRangeState::new(today());
    state.control_open(Some(false));
    assert_eq!(state.open(today()), vec![PickerEvent::Open]);
    assert!(!state.is_open());

    let fixed = DateRange::new(Some(date(2024, 1, 1)), None);
    state.control_value(Some(fixed));
    state.control_open(Some(true));
    let events = state.select_date(date(2024, 1, 3), today());
    assert_eq!(events[0], PickerEvent::Change(DateRange::new(Some(date(2024, 1, 3)), None)));
    assert_eq!(state.value(), fixed);
}

#[test]
fn test_disabled_and_read_only_do_not_open() {
    let mut state = DateRangeState::new(today());
    state.read_only = true;
    assert!(state.open(today()).is_empty());
    state.read_only = false;
    state.disabled = true;
    assert!(state.open(today()).is_empty());
    assert!(!state.is_open());
}

#[test]
fn test_predicate_sees_range_position() {
    let mut state = open_state();
    state.policy = DatePolicy::default().should_disable_date(|date: NaiveDate, position| {
        position == RangePosition::End && date == NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    });
    assert!(!state.select_date(date(2024, 1, 20), today()).is_empty());
    // Now editing the end, where the 20th is blocked
    state.set_range_position(RangePosition::End);
    state.clear();
    assert!(state.select_date(date(2024, 1, 20), today()).is_empty());
}

#[test]
fn test_commit_text_ignores_bad_input() {
    let mut state = DateRangeState::new(today());
    assert!(state.commit_text("next tuesday", today()).is_empty());
    assert!(state.commit_text("01/20/2024 - 01/10/2024", today()).is_empty());

    let events = state.commit_text("01/10/2024 - 01/20/2024", today());
    let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
    // Already closed, so no Close follows the accept
    assert_eq!(events, vec![PickerEvent::Change(range), PickerEvent::Accept(range)]);
    assert_eq!(state.value(), range);
}

mod grid {
    use super::date;
    use pickem_ui::date_range::calendar::{days_in_month, first_weekday_offset, month_title, GRID_CELLS};
    use pickem_ui::date_range::{CalendarCell, DatePolicy, DateRange, GridContext, MonthGrid, RangePosition};
    use pretty_assertions::assert_eq;

    fn build(anchor: chrono::NaiveDate, range: DateRange, show_outside_days: bool) -> MonthGrid {
        let policy = DatePolicy::default().max_date(date(2024, 3, 20));
        MonthGrid::build(
            anchor,
            &GridContext {
                range,
                today: date(2024, 3, 12),
                position: RangePosition::Start,
                policy: &policy,
                show_outside_days,
            },
        )
    }

    #[test]
    fn test_grid_size_without_outside_days() {
        for month in 1..=12 {
            let anchor = date(2024, month, 1);
            let grid = build(anchor, DateRange::EMPTY, false);
            let expected = (first_weekday_offset(anchor) + days_in_month(anchor)) as usize;
            assert_eq!(grid.cells.len(), expected, "month {month}");
            assert_eq!(grid.day_count(), days_in_month(anchor) as usize);
        }
    }

    #[test]
    fn test_grid_size_with_outside_days() {
        for month in 1..=12 {
            let grid = build(date(2023, month, 9), DateRange::EMPTY, true);
            assert_eq!(grid.cells.len(), GRID_CELLS, "month {month}");
            assert_eq!(grid.weeks().count(), 6);
        }
    }

    #[test]
    fn test_leading_blanks_match_offset() {
        // March 2024 starts on a Friday
        let grid = build(date(2024, 3, 1), DateRange::EMPTY, false);
        assert!(grid.cells[..5].iter().all(|cell| *cell == CalendarCell::Blank));
        assert_eq!(grid.cells[5].day().map(|day| day.date), Some(date(2024, 3, 1)));
        assert_eq!(month_title(grid.month), "March 2024");
    }

    #[test]
    fn test_cells_reflect_range_and_policy() {
        let range = DateRange::new(Some(date(2024, 3, 4)), Some(date(2024, 3, 8)));
        let grid = build(date(2024, 3, 1), range, false);

        let start = grid.find(date(2024, 3, 4)).unwrap();
        assert!(start.is_range_start && start.is_in_range && start.is_selected());
        let middle = grid.find(date(2024, 3, 6)).unwrap();
        assert!(middle.is_in_range && !middle.is_selected());
        assert!(grid.find(date(2024, 3, 12)).unwrap().is_today);
        assert!(grid.find(date(2024, 3, 21)).unwrap().is_disabled);
        assert!(!grid.find(date(2024, 3, 20)).unwrap().is_disabled);
    }
}

mod text {
    use super::date;
    use pickem_ui::date_range::{format_display_value, parse_date, DateRange, DEFAULT_FORMAT};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_value_complete_and_partial() {
        let both = DateRange::new(Some(date(2024, 1, 15)), Some(date(2024, 1, 25)));
        assert_eq!(format_display_value(&both, DEFAULT_FORMAT), "01/15/2024 - 01/25/2024");

        let start_only = DateRange::new(Some(date(2024, 1, 15)), None);
        let shown = format_display_value(&start_only, DEFAULT_FORMAT);
        assert_eq!(shown, "01/15/2024 - ");
        assert!(shown.ends_with(" - "));

        assert_eq!(format_display_value(&DateRange::EMPTY, DEFAULT_FORMAT), "");
    }

    #[test]
    fn test_parse_accepted_layouts() {
        assert_eq!(parse_date("01/15/2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024/01/15"), None);
    }
}
