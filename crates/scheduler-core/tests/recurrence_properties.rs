use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use scheduler_core::date::DateFormat;
use scheduler_core::formatting::format_task;
use scheduler_core::models::TaskInput;
use scheduler_core::rule::RepeatRule;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2060
    (0u64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Days::new(offset)
    })
}

fn last_day(date: NaiveDate) -> u32 {
    let next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next.unwrap().pred_opt().unwrap().day()
}

proptest! {
    #[test]
    fn daily_is_after_today_and_keeps_phase(
        interval in 1u32..=400,
        anchor in any_date(),
        today in any_date(),
    ) {
        let rule = RepeatRule::Daily { interval };
        let next = rule.next_after(today, anchor).unwrap();
        prop_assert!(next > today);
        prop_assert!(next > anchor);
        prop_assert_eq!((next - anchor).num_days() % i64::from(interval), 0);
        // The previous occurrence was not yet past today, unless it is the anchor itself.
        let previous = next - chrono::Days::new(u64::from(interval));
        prop_assert!(previous <= today || previous == anchor);
    }

    #[test]
    fn weekly_lands_on_listed_weekday(
        weekdays in prop::collection::btree_set(1u32..=7, 1..=7),
        anchor in any_date(),
        today in any_date(),
    ) {
        let rule = RepeatRule::Weekly { weekdays: weekdays.clone() };
        let next = rule.next_after(today, anchor).unwrap();
        prop_assert!(next > today);
        prop_assert!(next > anchor);
        prop_assert!((next - anchor.max(today)).num_days() <= 7);
        prop_assert!(weekdays.contains(&next.weekday().number_from_monday()));
    }

    #[test]
    fn monthly_lands_on_listed_day_and_month(
        days in prop::collection::btree_set(prop_oneof![Just(-2i32), Just(-1i32), 1i32..=28], 1..=4),
        months in prop::collection::btree_set(1u32..=12, 0..=3),
        anchor in any_date(),
        today in any_date(),
    ) {
        let rule = RepeatRule::Monthly { days: days.clone(), months: months.clone() };
        let next = rule.next_after(today, anchor).unwrap();
        prop_assert!(next > today);
        prop_assert!(months.is_empty() || months.contains(&next.month()));

        let length = last_day(next);
        let resolved: BTreeSet<u32> = days
            .iter()
            .map(|&d| match d {
                -1 => length,
                -2 => length - 1,
                d => d as u32,
            })
            .collect();
        prop_assert!(resolved.contains(&next.day()));
    }

    #[test]
    fn yearly_keeps_month_and_day(anchor in any_date(), today in any_date()) {
        let next = RepeatRule::Yearly.next_after(today, anchor).unwrap();
        prop_assert!(next > today);
        prop_assert_eq!(next.month(), anchor.month());
        let leap = NaiveDate::from_ymd_opt(next.year(), 2, 29).is_some();
        if anchor.month() == 2 && anchor.day() == 29 && !leap {
            prop_assert_eq!(next.day(), 28);
        } else {
            prop_assert_eq!(next.day(), anchor.day());
        }
    }

    #[test]
    fn canonical_text_round_trips(
        weekdays in prop::collection::btree_set(1u32..=7, 1..=7),
        days in prop::collection::btree_set(prop_oneof![Just(-2i32), Just(-1i32), 1i32..=31], 1..=5),
        months in prop::collection::btree_set(1u32..=12, 0..=12),
        interval in 1u32..=400,
    ) {
        for rule in [
            RepeatRule::Daily { interval },
            RepeatRule::Yearly,
            RepeatRule::Weekly { weekdays: weekdays.clone() },
            RepeatRule::Monthly { days: days.clone(), months: months.clone() },
        ] {
            let reparsed: RepeatRule = rule.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, rule);
        }
    }

    #[test]
    fn formatting_a_normalized_task_is_a_no_op(
        anchor in any_date(),
        today in any_date(),
        repeat in prop_oneof![Just(""), Just("d 3"), Just("y"), Just("w 2,6"), Just("m -1,10")],
    ) {
        let format = DateFormat::default();
        let input = TaskInput {
            date: format.format(anchor),
            title: "Property".to_string(),
            repeat: repeat.to_string(),
            ..Default::default()
        };
        let once = format_task(input, today, &format).unwrap();
        let again = format_task(
            TaskInput {
                date: once.date.clone(),
                title: once.title.clone(),
                repeat: once.repeat.clone(),
                ..Default::default()
            },
            today,
            &format,
        )
        .unwrap();
        prop_assert_eq!(once, again);
    }
}
