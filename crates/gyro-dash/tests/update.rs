// File: crates/gyro-dash/tests/update.rs
// Purpose: End-to-end behavior of one dashboard update.

use gyro_dash::config::ControlDefaults;
use gyro_dash::{
    ChartBuildError, ChartOutcome, Dashboard, DashboardConfig, Dataset, GraphType, Navigation,
    NavigationMode, SummaryError, SummaryOutcome, VariableSelection, ViewRequest, NO_DATA,
};

fn readings(n: usize) -> Dataset {
    let mut ds = Dataset::from_columns(vec![
        ("X", (0..n).map(|i| i as f64).collect()),
        ("Y", (0..n).map(|i| -(i as f64)).collect()),
        ("Z", vec![0.5; n]),
    ])
    .unwrap();
    ds.ensure_time_column();
    ds
}

fn request(graph: &str, vars: VariableSelection, samples: usize, prev: u64, next: u64) -> ViewRequest {
    ViewRequest {
        graph_type: GraphType::from(graph),
        variables: vars,
        sample_count: samples,
        nav: Navigation::new(prev, next),
    }
}

#[test]
fn next_click_pages_chart_and_summary() {
    let dash = Dashboard::new(readings(100), DashboardConfig::default());
    let out = dash.update(&request("scatter", VariableSelection::All, 10, 0, 1));

    assert_eq!(out.window.range(), 10..20);
    let ChartOutcome::Ready(chart) = &out.chart else { panic!("expected chart, got {:?}", out.chart) };
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.series[0].data_xy.first(), Some(&(10.0, 10.0)));

    let SummaryOutcome::Ready(summary) = &out.summary else { panic!("expected summary") };
    let x = summary.column("X").unwrap();
    assert_eq!(x.count, 10);
    assert_eq!(x.min, 10.0);
    assert_eq!(x.max, 19.0);
    assert!(out.summary_html().contains("<table"));
}

#[test]
fn empty_dataset_shows_blank_chart_and_no_data() {
    let mut empty = Dataset::default();
    empty.ensure_time_column();
    let dash = Dashboard::new(empty, DashboardConfig::default());

    for graph in ["scatter", "line", "distribution", "bogus"] {
        let out = dash.update(&request(graph, VariableSelection::All, 100, 2, 5));
        assert!(out.window.is_empty());
        assert_eq!(out.chart, ChartOutcome::Empty(ChartBuildError::EmptyData));
        assert_eq!(out.summary, SummaryOutcome::Empty(SummaryError::NoData));
        assert!(out.chart_or_blank().is_blank());
        assert_eq!(out.summary_html(), NO_DATA);
    }
}

#[test]
fn missing_column_gives_blank_chart_but_summary() {
    let mut ds = Dataset::from_columns(vec![("X", vec![1.0, 2.0, 3.0])]).unwrap();
    ds.ensure_time_column();
    let dash = Dashboard::new(ds, DashboardConfig::default());
    let out = dash.update(&request("line", VariableSelection::Z, 5, 0, 0));
    assert_eq!(out.chart, ChartOutcome::Empty(ChartBuildError::MissingColumn("Z".into())));
    assert!(matches!(out.summary, SummaryOutcome::Ready(_)));
}

#[test]
fn cursor_mode_from_config() {
    let config = DashboardConfig { navigation: NavigationMode::Cursor, ..DashboardConfig::default() };
    let dash = Dashboard::new(readings(100), config);
    let out = dash.update(&request("line", VariableSelection::X, 10, 1, 3));
    assert_eq!(out.window.range(), 20..30);
}

#[test]
fn initial_request_uses_defaults() {
    let dash = Dashboard::new(readings(5), DashboardConfig::default());
    let req = dash.initial_request();
    assert_eq!(req.graph_type, GraphType::Scatter);
    assert_eq!(req.variables, VariableSelection::All);
    assert_eq!(req.sample_count, 100);
    assert_eq!(req.nav, Navigation::default());

    let odd = ViewRequest::from_defaults(&ControlDefaults { graph_type: "line".into(), variables: "Q".into(), samples: 0 });
    assert_eq!(odd.variables, VariableSelection::All);
    assert_eq!(odd.sample_count, 1);
}

#[test]
fn load_missing_data_file_still_updates() {
    let config = DashboardConfig { data_path: "target/test_out/no_such_readings.csv".into(), ..DashboardConfig::default() };
    let dash = Dashboard::load(config).expect("missing file is recovered");
    assert!(dash.dataset().is_empty());
    let out = dash.update(&dash.initial_request());
    assert_eq!(out.summary_html(), NO_DATA);
}

#[test]
fn dashboard_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dashboard>();
}
