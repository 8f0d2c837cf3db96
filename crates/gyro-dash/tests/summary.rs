// File: crates/gyro-dash/tests/summary.rs
// Purpose: Descriptive statistics and the summary table rendering.

use gyro_dash::summary::{self, ColumnStats, NO_DATA};
use gyro_dash::{describe, Dataset, SummaryError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn stats_match_describe_semantics() {
    let s = ColumnStats::compute("X", &[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(s.count, 4);
    assert!(close(s.mean, 2.5));
    // Sample standard deviation (n - 1).
    assert!(close(s.std, (5.0f64 / 3.0).sqrt()));
    assert_eq!(s.min, 1.0);
    assert!(close(s.q25, 1.75));
    assert!(close(s.q50, 2.5));
    assert!(close(s.q75, 3.25));
    assert_eq!(s.max, 4.0);
}

#[test]
fn missing_values_are_skipped() {
    let s = ColumnStats::compute("Y", &[f64::NAN, 2.0, f64::NAN]);
    assert_eq!(s.count, 1);
    assert_eq!(s.mean, 2.0);
    assert!(s.std.is_nan());
    assert_eq!(s.q75, 2.0);

    let all_missing = ColumnStats::compute("Z", &[f64::NAN]);
    assert_eq!(all_missing.count, 0);
    assert!(all_missing.mean.is_nan() && all_missing.min.is_nan() && all_missing.max.is_nan());
}

#[test]
fn describe_covers_every_column_in_order() {
    let ds = Dataset::from_columns(vec![("X", vec![1.0, 2.0]), ("Y", vec![3.0, 5.0]), ("Time", vec![0.0, 1.0])]).unwrap();
    let summary = describe(&ds).unwrap();
    let names: Vec<&str> = summary.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["X", "Y", "Time"]);
    assert_eq!(summary.column("Y").map(|c| c.mean), Some(4.0));
}

#[test]
fn empty_window_renders_no_data() {
    let empty = Dataset::from_columns(vec![("X", vec![]), ("Time", vec![])]).unwrap();
    let result = describe(&empty);
    assert_eq!(result, Err(SummaryError::NoData));
    assert_eq!(summary::render(&result), NO_DATA);
    assert_eq!(summary::render(&describe(&Dataset::default())), "No data available");
}

#[test]
fn html_table_layout() {
    let ds = Dataset::from_columns(vec![("X", vec![1.0, 3.0]), ("a<b", vec![0.0, 0.0])]).unwrap();
    let html = describe(&ds).unwrap().to_html();
    assert!(html.starts_with("<table border=\"1\" class=\"dataframe\">"));
    assert!(html.ends_with("</table>"));
    assert!(html.contains("<th>X</th>"));
    assert!(html.contains("<th>a&lt;b</th>"));
    for label in summary::STAT_LABELS {
        assert!(html.contains(&format!("<th>{label}</th>")), "missing row {label}");
    }
    assert!(html.contains("<td>2.000000</td>"));
    assert_eq!(html.matches("<td>").count(), 16);
}

#[test]
fn text_columns_are_left_out() {
    let csv = "X,Y,Z,Label\n1,2,3,a\n4,5,,b\n";
    let mut ds = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
    ds.ensure_time_column();
    let summary = describe(&ds).unwrap();
    let names: Vec<&str> = summary.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["X", "Y", "Z", "Time"]);
    // An empty cell is missing, not text.
    assert_eq!(summary.column("Z").map(|c| c.count), Some(1));
    assert!(!describe(&ds).unwrap().to_html().contains("Label"));

    let window = ds.slice(1..2).unwrap();
    assert!(describe(&window).unwrap().column("Label").is_none());
}

#[test]
fn only_text_columns_is_an_error() {
    let ds = Dataset::from_csv_reader("Label\na\nb\n".as_bytes()).unwrap();
    let result = describe(&ds);
    assert_eq!(result, Err(SummaryError::NoNumericColumns));
    assert_eq!(summary::render(&result), NO_DATA);
}
