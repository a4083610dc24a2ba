use plotdoc::Table;
use serde_json::{Map, Value, json};

fn row(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("row object")
}

#[test]
fn from_rows_builds_equal_length_columns() {
    let table = Table::from_rows(vec![
        row(json!({"month": "Jan", "sales": 10})),
        row(json!({"month": "Feb", "sales": 5})),
    ]);

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column("month"), Some(&[json!("Jan"), json!("Feb")][..]));
    assert_eq!(table.column("sales"), Some(&[json!(10), json!(5)][..]));
}

#[test]
fn missing_cells_become_null() {
    let table = Table::from_rows(vec![
        row(json!({"month": "Jan", "sales": 10})),
        row(json!({"month": "Feb"})),
        row(json!({"month": "Mar", "revenue": 7})),
    ]);

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.column("sales"),
        Some(&[json!(10), Value::Null, Value::Null][..])
    );
    assert_eq!(
        table.column("revenue"),
        Some(&[Value::Null, Value::Null, json!(7)][..])
    );
}

#[test]
fn with_column_replaces_existing_column() {
    let table = Table::new()
        .with_column("x", vec![json!(1), json!(2)])
        .with_column("x", vec![json!(3), json!(4)]);

    assert_eq!(table.column("x"), Some(&[json!(3), json!(4)][..]));
    assert_eq!(table.column_names().count(), 1);
}

#[test]
fn lookups_on_absent_columns() {
    let table = Table::new().with_column("x", vec![json!(1)]);
    assert!(table.has_column("x"));
    assert!(!table.has_column("y"));
    assert_eq!(table.column("y"), None);
}

#[test]
fn empty_table_reports_zero_rows() {
    let table = Table::new();
    assert!(table.is_empty());
    assert_eq!(table.row_count(), 0);
    assert_eq!(Table::from_rows(Vec::new()), table);
}
