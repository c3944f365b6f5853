//! Integration tests for fetching bound result sets through a cursor.

mod support;

use chrono::NaiveDate;
use futures::stream::TryStreamExt;
use odbc_column_bind::binding::constants::*;
use odbc_column_bind::{
    ColumnMetadata, Cursor, CursorOptions, CursorStreamExt, Error, Field, RowCursor,
};
use support::ScriptedSource;

async fn single_row(source: ScriptedSource, expected: Field) {
    let counters = source.counters();
    let mut cursor = RowCursor::open(source, &CursorOptions::default()).unwrap();

    let row = cursor.next().await.unwrap().expect("one row");
    assert_eq!(row.len(), 1);
    assert_eq!(row.get(0), Some(&expected));
    assert!(cursor.next().await.unwrap().is_none());
    assert!(cursor.is_closed());
    assert!(counters.is_closed());
}

#[tokio::test]
async fn test_single_row_null_result() {
    single_row(
        ScriptedSource::single("A", SQL_INTEGER, 10, vec![Field::Null]),
        Field::Null,
    )
    .await;
}

#[tokio::test]
async fn test_single_row_integer_result() {
    single_row(
        ScriptedSource::single("A", SQL_INTEGER, 10, vec![Field::Integer(42)]),
        Field::Integer(42),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_bool_result() {
    single_row(
        ScriptedSource::single("A", SQL_BIT, 1, vec![Field::Boolean(true)]),
        Field::Boolean(true),
    )
    .await;
    single_row(
        ScriptedSource::single("A", SQL_BIT, 1, vec![Field::Boolean(false)]),
        Field::Boolean(false),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_string_result() {
    single_row(
        ScriptedSource::single("A", SQL_VARCHAR, 5, vec![Field::String("value".into())]),
        Field::String("value".into()),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_unicode_result() {
    single_row(
        ScriptedSource::single(
            "A",
            SQL_WVARCHAR,
            7,
            vec![Field::String("value \u{2665}".into())],
        ),
        Field::String("value \u{2665}".into()),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_double_result() {
    single_row(
        ScriptedSource::single("A", SQL_DOUBLE, 15, vec![Field::FloatingPoint(3.25)]),
        Field::FloatingPoint(3.25),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_date_result() {
    let date = NaiveDate::from_ymd_opt(2015, 12, 31).unwrap();
    single_row(
        ScriptedSource::single("A", SQL_TYPE_DATE, 10, vec![Field::Date(date)]),
        Field::Date(date),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_timestamp_result() {
    let ts = NaiveDate::from_ymd_opt(2015, 12, 31)
        .unwrap()
        .and_hms_opt(1, 2, 3)
        .unwrap();
    single_row(
        ScriptedSource::single("A", SQL_TYPE_TIMESTAMP, 19, vec![Field::Timestamp(ts)]),
        Field::Timestamp(ts),
    )
    .await;
}

#[tokio::test]
async fn test_single_row_large_numeric_result_as_string() {
    single_row(
        ScriptedSource::single(
            "A",
            SQL_NUMERIC,
            22,
            vec![Field::String("-1234567890123.123456789".into())],
        ),
        Field::String("-1234567890123.123456789".into()),
    )
    .await;
}

#[tokio::test]
async fn test_string_truncated_to_max_length() {
    let source = ScriptedSource::single(
        "A",
        SQL_LONGVARCHAR,
        0,
        vec![Field::String("abcdefghij".into())],
    );
    let options = CursorOptions::new().with_max_string_length(4);
    let mut cursor = RowCursor::open(source, &options).unwrap();
    let row = cursor.next().await.unwrap().unwrap();
    assert_eq!(row.get(0), Some(&Field::String("abcd".into())));
}

fn numbered_rows(n: i64) -> ScriptedSource {
    let columns = vec![
        ColumnMetadata::new("ID".to_string(), SQL_BIGINT).with_nullable(false),
        ColumnMetadata::new("SCORE".to_string(), SQL_DOUBLE),
    ];
    let rows = (0..n)
        .map(|i| {
            let score = if i % 2 == 0 {
                Field::FloatingPoint(i as f64 / 2.0)
            } else {
                Field::Null
            };
            vec![Field::Integer(i), score]
        })
        .collect();
    ScriptedSource::new(columns, rows)
}

#[tokio::test]
async fn test_multiple_rowsets() {
    let source = numbered_rows(5);
    let counters = source.counters();
    let options = CursorOptions::new().with_fetch_size(2);
    let mut cursor = RowCursor::open(source, &options).unwrap();

    assert_eq!(cursor.column_names(), vec!["ID", "SCORE"]);

    let mut ids = Vec::new();
    while let Some(row) = cursor.next().await.unwrap() {
        ids.push(row.get_by_name("id").unwrap().as_i64().unwrap());
        let score = row.get_by_name("score").unwrap();
        if ids.len() % 2 == 0 {
            assert!(score.is_null());
        } else {
            assert_eq!(score.to_f64(), Some((ids.len() - 1) as f64 / 2.0));
        }
    }

    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(cursor.rowcount(), 5);
    // 2 + 2 + 1 + the empty fetch that ends the result set
    assert_eq!(counters.fetches(), 4);
    assert!(counters.is_closed());
}

#[tokio::test]
async fn test_fetch_many_and_fetch_all() {
    let options = CursorOptions::new().with_fetch_size(3);
    let mut cursor = RowCursor::open(numbered_rows(8), &options).unwrap();

    let first = cursor.fetch_many(4).await.unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first[3].get(0), Some(&Field::Integer(3)));
    assert!(cursor.has_more());

    let one = cursor.fetch_one().await.unwrap().unwrap();
    assert_eq!(one.get(0), Some(&Field::Integer(4)));

    let rest = cursor.fetch_all().await.unwrap();
    let ids: Vec<i64> = rest.iter().map(|r| r.get(0).unwrap().as_i64().unwrap()).collect();
    assert_eq!(ids, vec![5, 6, 7]);
    assert!(!cursor.has_more());
    assert!(cursor.fetch_many(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_fetch_size_between_fetches() {
    let source = numbered_rows(7);
    let counters = source.counters();
    let mut cursor = RowCursor::open(source, &CursorOptions::new().with_fetch_size(2)).unwrap();

    assert_eq!(cursor.fetch_many(2).await.unwrap().len(), 2);
    assert_eq!(counters.fetches(), 1);

    cursor.set_fetch_size(10);
    assert_eq!(cursor.fetch_size(), 10);
    assert_eq!(cursor.fetch_many(3).await.unwrap().len(), 3);
    assert_eq!(counters.fetches(), 2);
    assert_eq!(cursor.buffered_count(), 2);

    cursor.set_fetch_size(0);
    assert_eq!(cursor.fetch_size(), 1);
}

#[tokio::test]
async fn test_stream() {
    let cursor = RowCursor::open(numbered_rows(4), &CursorOptions::new().with_fetch_size(3))
        .unwrap();

    let ids: Vec<i64> = cursor
        .into_stream()
        .map_ok(|row| row.get(0).unwrap().as_i64().unwrap())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_driver_error_propagates() {
    let source = numbered_rows(6).failing_on_fetch(2);
    let mut cursor = RowCursor::open(source, &CursorOptions::new().with_fetch_size(2)).unwrap();

    assert_eq!(cursor.fetch_many(2).await.unwrap().len(), 2);
    match cursor.next().await {
        Err(Error::Driver {
            state, native_code, ..
        }) => {
            assert_eq!(state, "HY000");
            assert_eq!(native_code, 1205);
        }
        other => panic!("Expected driver error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_close() {
    let source = numbered_rows(3);
    let counters = source.counters();
    let mut cursor = RowCursor::open(source, &CursorOptions::default()).unwrap();

    assert!(cursor.next().await.unwrap().is_some());
    cursor.close().await.unwrap();
    assert!(counters.is_closed());
    assert!(cursor.is_closed());
    assert!(!cursor.has_more());
    assert!(matches!(cursor.next().await, Err(Error::CursorClosed)));
    assert!(matches!(cursor.fetch_all().await, Err(Error::CursorClosed)));

    // closing twice is harmless
    cursor.close().await.unwrap();
}

#[tokio::test]
async fn test_affected_rows() {
    let cursor = RowCursor::open(numbered_rows(1), &CursorOptions::default()).unwrap();
    assert_eq!(cursor.affected_rows(), None);

    let source = numbered_rows(1).with_row_count(1);
    let cursor = RowCursor::open(source, &CursorOptions::default()).unwrap();
    assert_eq!(cursor.affected_rows(), Some(1));
    // rows handed out so far, not the driver's count
    assert_eq!(cursor.rowcount(), 0);
}

#[tokio::test]
async fn test_empty_result_set() {
    let source = numbered_rows(0);
    let counters = source.counters();
    let mut cursor = RowCursor::open(source, &CursorOptions::default()).unwrap();
    assert_eq!(cursor.num_columns(), 2);

    assert!(cursor.next().await.unwrap().is_none());
    assert!(counters.is_closed());
    assert_eq!(cursor.rowcount(), 0);
    assert!(cursor.fetch_all().await.unwrap().is_empty());
    assert!(!cursor.has_more());
}

#[test]
fn test_out_of_range_options_rejected_at_open() {
    let options = CursorOptions {
        max_string_length: usize::MAX,
        ..CursorOptions::default()
    };
    let source = ScriptedSource::single("NAME", SQL_VARCHAR, 0, Vec::new());
    assert!(matches!(
        RowCursor::open(source, &options),
        Err(Error::InvalidOptions { .. })
    ));

    let options = CursorOptions {
        fetch_size: usize::MAX,
        ..CursorOptions::default()
    };
    assert!(matches!(
        RowCursor::open(numbered_rows(1), &options),
        Err(Error::InvalidOptions { .. })
    ));
}

#[test]
fn test_oversized_row_set_rejected_at_open() {
    // each limit is in range, their product is not
    let options = CursorOptions::new()
        .with_fetch_size(4)
        .with_max_string_length(MAX_STRING_LENGTH);
    let source = ScriptedSource::single("NAME", SQL_VARCHAR, 0, Vec::new());
    assert!(matches!(
        RowCursor::open(source, &options),
        Err(Error::RowSetTooLarge { capacity: 4, .. })
    ));
}

#[tokio::test]
async fn test_fetch_size_clamped() {
    let mut cursor = RowCursor::open(numbered_rows(3), &CursorOptions::default()).unwrap();
    cursor.set_fetch_size(usize::MAX);
    assert_eq!(cursor.fetch_size(), MAX_FETCH_SIZE);
    cursor.set_fetch_size(2);
    assert_eq!(cursor.fetch_all().await.unwrap().len(), 3);
}

#[test]
fn test_no_result_set() {
    let source = ScriptedSource::new(Vec::new(), Vec::new());
    assert!(matches!(
        RowCursor::open(source, &CursorOptions::default()),
        Err(Error::NoResultSet)
    ));
}

#[test]
fn test_unsupported_column_type() {
    // SQL_LONGVARBINARY
    let source = ScriptedSource::single("DATA", -4, 0, Vec::new());
    assert!(matches!(
        RowCursor::open(source, &CursorOptions::default()),
        Err(Error::UnsupportedType { sql_type: -4 })
    ));
}

#[test]
fn test_bound_columns() {
    let cursor = RowCursor::open(numbered_rows(0), &CursorOptions::default()).unwrap();
    let columns = cursor.columns();
    assert_eq!(columns.len(), 2);
    assert!(!columns[0].nullable);
    assert_eq!(columns[0].description.element_size(), 8);
    assert_eq!(columns[1].description.c_type_tag().as_raw(), SQL_C_DOUBLE);
}
