#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use planit::libs::error::Error;
    use planit::libs::semester::Semester;
    use planit::libs::task::{Due, ScheduleBlock};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_due_from_parts_combines_date_and_time() {
        let due = Due::from_parts(Some(date(2025, 4, 6)), Some(time(14, 30))).unwrap().unwrap();

        assert_eq!(due, Due::Moment(date(2025, 4, 6).and_time(time(14, 30))));
        assert_eq!(due.date(), date(2025, 4, 6));
        assert_eq!(due.time(), Some(time(14, 30)));
    }

    #[test]
    fn test_due_from_parts_date_only() {
        let due = Due::from_parts(Some(date(2025, 4, 6)), None).unwrap().unwrap();

        assert_eq!(due, Due::Date(date(2025, 4, 6)));
        assert!(due.time().is_none());
    }

    #[test]
    fn test_due_from_parts_absent() {
        assert!(Due::from_parts(None, None).unwrap().is_none());
    }

    #[test]
    fn test_due_from_parts_rejects_time_without_date() {
        let result = Due::from_parts(None, Some(time(14, 30)));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_due_merge_drops_orphan_time() {
        // A stored time with no date has no meaning
        assert!(Due::merge(None, Some(time(14, 30))).is_none());
    }

    #[test]
    fn test_schedule_block_positive_duration() {
        let start = date(2025, 9, 30).and_time(time(18, 0));
        let end = date(2025, 9, 30).and_time(time(19, 30));

        let block = ScheduleBlock::from_parts(Some(start), Some(end)).unwrap().unwrap();
        assert_eq!(block.duration().num_minutes(), 90);
    }

    #[test]
    fn test_schedule_block_rejects_half_present_pair() {
        let start = date(2025, 9, 30).and_time(time(18, 0));

        assert!(matches!(ScheduleBlock::from_parts(Some(start), None), Err(Error::Validation(_))));
        assert!(matches!(ScheduleBlock::from_parts(None, Some(start)), Err(Error::Validation(_))));
    }

    #[test]
    fn test_schedule_block_rejects_zero_and_negative_duration() {
        let start = date(2025, 9, 30).and_time(time(18, 0));
        let end = date(2025, 9, 30).and_time(time(17, 0));

        assert!(matches!(ScheduleBlock::from_parts(Some(start), Some(start)), Err(Error::Validation(_))));
        assert!(matches!(ScheduleBlock::from_parts(Some(start), Some(end)), Err(Error::Validation(_))));
    }

    #[test]
    fn test_schedule_block_absent() {
        assert!(ScheduleBlock::from_parts(None, None).unwrap().is_none());
    }

    #[test]
    fn test_semester_contains_is_inclusive() {
        let semester = Semester {
            id: 1,
            title: "Fall 2025".to_string(),
            start_date: date(2025, 8, 25),
            end_date: date(2025, 12, 15),
        };

        assert!(semester.contains(date(2025, 8, 25)));
        assert!(semester.contains(date(2025, 10, 1)));
        assert!(semester.contains(date(2025, 12, 15)));
        assert!(!semester.contains(date(2025, 8, 24)));
        assert!(!semester.contains(date(2025, 12, 16)));
    }
}
