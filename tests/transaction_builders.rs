//! Integration tests for the transaction mock builders.

use chrono::{Datelike, FixedOffset, Timelike};

use transaction_mock_builder::domain::Transaction;
use transaction_mock_builder::test_utils::builders::{
    DEFAULT_AMOUNT, DEFAULT_DAY, DEFAULT_HOUR, DEFAULT_MINUTE, DEFAULT_MONTH, DEFAULT_NANOSECOND,
    DEFAULT_SECOND, DEFAULT_TRANSACTION_ID, DEFAULT_YEAR,
};
use transaction_mock_builder::test_utils::{transaction, zoned_date_time};

#[test]
fn test_default_transactions_are_equal() {
    assert_eq!(transaction().build(), transaction().build());
}

#[test]
fn test_nested_defaults_are_pinned() {
    assert_eq!(DEFAULT_TRANSACTION_ID, "transaction-id");
    assert_eq!(DEFAULT_AMOUNT, 1);
    assert_eq!((DEFAULT_YEAR, DEFAULT_MONTH, DEFAULT_DAY), (2021, 1, 1));
    assert_eq!((DEFAULT_HOUR, DEFAULT_MINUTE, DEFAULT_SECOND, DEFAULT_NANOSECOND), (0, 0, 0, 0));
    assert_eq!(
        transaction().build().date_time().to_rfc3339(),
        "2021-01-01T00:00:00+00:00"
    );
}

#[test]
fn test_overriding_id_keeps_other_defaults() {
    let defaults = transaction().build();
    let overridden = transaction().id("tx-42").build();

    assert_eq!(overridden.id(), "tx-42");
    assert_eq!(overridden.amount(), defaults.amount());
    assert_eq!(overridden.date_time(), defaults.date_time());
}

#[test]
fn test_overriding_amount_keeps_other_defaults() {
    let defaults = transaction().build();
    let overridden = transaction().amount(99).build();

    assert_eq!(overridden.id(), defaults.id());
    assert_eq!(overridden.amount(), 99);
    assert_eq!(overridden.date_time(), defaults.date_time());
}

#[test]
fn test_overriding_date_time_keeps_other_defaults() {
    let defaults = transaction().build();
    let date_time = zoned_date_time().year(2030).month(6).build();
    let overridden = transaction().date_time(date_time).build();

    assert_eq!(overridden.id(), defaults.id());
    assert_eq!(overridden.amount(), defaults.amount());
    assert_eq!(overridden.date_time(), date_time);
}

#[test]
fn test_overriding_each_date_time_field_keeps_the_rest() {
    let base = zoned_date_time().build();

    let cases = [
        zoned_date_time().year(2000).build(),
        zoned_date_time().month(7).build(),
        zoned_date_time().day(15).build(),
        zoned_date_time().hour(9).build(),
        zoned_date_time().minute(45).build(),
        zoned_date_time().second(30).build(),
        zoned_date_time().nanosecond(500).build(),
    ];

    let changed_fields: Vec<usize> = cases
        .iter()
        .map(|dt| {
            [
                dt.year() != base.year(),
                dt.month() != base.month(),
                dt.day() != base.day(),
                dt.hour() != base.hour(),
                dt.minute() != base.minute(),
                dt.second() != base.second(),
                dt.nanosecond() != base.nanosecond(),
            ]
            .iter()
            .filter(|changed| **changed)
            .count()
        })
        .collect();

    assert_eq!(changed_fields, vec![1; cases.len()]);
    assert!(cases.iter().all(|dt| dt.offset() == base.offset()));
}

#[test]
fn test_overriding_offset_keeps_local_fields() {
    let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
    let date_time = zoned_date_time().offset(minus_five).build();

    assert_eq!(date_time.offset(), &minus_five);
    assert_eq!(date_time.year(), DEFAULT_YEAR);
    assert_eq!(date_time.month(), DEFAULT_MONTH);
    assert_eq!(date_time.day(), DEFAULT_DAY);
    assert_eq!(date_time.hour(), DEFAULT_HOUR);
    assert_eq!(date_time.minute(), DEFAULT_MINUTE);
    assert_eq!(date_time.second(), DEFAULT_SECOND);
    assert_eq!(date_time.nanosecond(), DEFAULT_NANOSECOND);
}

#[test]
fn test_reduce_by_ten_by_two_equals_eight() {
    let reduced = transaction().amount(10).build().reduce_by(2);

    assert_eq!(reduced, transaction().amount(8).build());
}

#[test]
fn test_reduce_by_leaves_original_untouched() {
    let original = transaction().amount(10).build();
    let _ = original.reduce_by(2);

    assert_eq!(original, transaction().amount(10).build());
}

#[test]
fn test_is_after_2022_vs_2021() {
    let in_2021 = transaction()
        .date_time(zoned_date_time().year(2021).build())
        .build();
    let in_2022 = transaction()
        .date_time(zoned_date_time().year(2022).build())
        .build();

    assert!(in_2022.is_after(&in_2021));
    assert!(!in_2021.is_after(&in_2022));
}

#[test]
fn test_is_after_is_irreflexive() {
    let transaction = transaction().build();

    assert!(!transaction.is_after(&transaction));
    assert!(!transaction.is_after(&transaction.clone()));
}

#[test]
fn test_is_after_uses_instants_not_wall_clock() {
    let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
    // 02:00+03:00 is 23:00Z the day before
    let wall_clock_later = transaction()
        .date_time(zoned_date_time().hour(2).offset(plus_three).build())
        .build();
    let utc_midnight = transaction().build();

    assert!(utc_midnight.is_after(&wall_clock_later));
    assert!(!wall_clock_later.is_after(&utc_midnight));
}

#[test]
fn test_same_instant_in_different_offsets_is_not_equal() {
    let utc = transaction().build();
    let shifted = transaction()
        .date_time(
            utc.date_time()
                .with_timezone(&FixedOffset::east_opt(3600).unwrap()),
        )
        .build();

    assert_ne!(utc, shifted);
    assert!(!utc.is_after(&shifted));
    assert!(!shifted.is_after(&utc));
}

#[test]
fn test_builder_output_matches_constructor() {
    let date_time = zoned_date_time().year(2023).build();

    assert_eq!(
        transaction().id("tx-1").amount(5).date_time(date_time).build(),
        Transaction::new("tx-1", 5, date_time)
    );
}

#[test]
fn test_builders_can_be_reused_as_templates() {
    let template = transaction().id("template").amount(100);

    let first = template.clone().amount(1).build();
    let second = template.build();

    assert_eq!(first.id(), "template");
    assert_eq!(first.amount(), 1);
    assert_eq!(second.amount(), 100);
}
