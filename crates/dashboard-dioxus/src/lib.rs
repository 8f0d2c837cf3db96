// File: crates/dashboard-dioxus/src/lib.rs
// Summary: Desktop presentation shell for the gyroscope dashboard (Dioxus, behind `desktop`).
// Notes:
// - `Controls` owns the widget values and click counters and is UI-independent.
// - Every control change re-renders the view, which runs one `Dashboard::update`.

use gyro_dash::{GraphType, Navigation, VariableSelection, ViewRequest};

/// Graph type dropdown entries: (value, label).
pub const GRAPH_TYPE_OPTIONS: [(&str, &str); 3] = [
    ("scatter", "Scatter Plot"),
    ("line", "Line Chart"),
    ("distribution", "Distribution Plot"),
];

/// Data variable dropdown entries: (value, label).
pub const VARIABLE_OPTIONS: [(&str, &str); 4] = [("X", "X"), ("Y", "Y"), ("Z", "Z"), ("all", "All")];

/// Widget state as the shell holds it between events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub graph_type: String,
    pub variables: VariableSelection,
    pub samples: usize,
    pub prev_clicks: u64,
    pub next_clicks: u64,
}

impl Controls {
    pub fn new(initial: &ViewRequest) -> Self {
        Self {
            graph_type: initial.graph_type.to_string(),
            variables: initial.variables,
            samples: initial.sample_count,
            prev_clicks: initial.nav.prev_clicks,
            next_clicks: initial.nav.next_clicks,
        }
    }

    pub fn set_graph_type(&mut self, value: &str) {
        self.graph_type = value.to_string();
    }

    /// Unknown values leave the selection unchanged.
    pub fn set_variables(&mut self, value: &str) {
        if let Ok(v) = value.parse() {
            self.variables = v;
        }
    }

    /// Raw text from the number input; empty, non-numeric or zero input is ignored.
    pub fn set_samples(&mut self, raw: &str) {
        match raw.trim().parse::<usize>() {
            Ok(n) if n >= 1 => self.samples = n,
            _ => {}
        }
    }

    pub fn click_prev(&mut self) {
        self.prev_clicks += 1;
    }

    pub fn click_next(&mut self) {
        self.next_clicks += 1;
    }

    pub fn request(&self) -> ViewRequest {
        ViewRequest {
            graph_type: GraphType::from(self.graph_type.as_str()),
            variables: self.variables,
            sample_count: self.samples,
            nav: Navigation::new(self.prev_clicks, self.next_clicks),
        }
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use std::sync::Arc;

    use base64::Engine as _;
    use dioxus::prelude::*;
    use gyro_dash::Dashboard;

    #[derive(Props, Clone)]
    pub struct DashboardViewProps {
        pub dashboard: Arc<Dashboard>,
    }

    impl PartialEq for DashboardViewProps {
        fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.dashboard, &other.dashboard) }
    }

    /// Controls, chart image and summary table. The chart is rendered to PNG and
    /// shown through a data URL.
    #[component]
    pub fn DashboardView(props: DashboardViewProps) -> Element {
        let dashboard = props.dashboard.clone();
        let mut controls = use_signal(|| Controls::new(&dashboard.initial_request()));

        let current = controls.read().clone();
        let out = dashboard.update(&current.request());
        let opts = dashboard.config().render.render_options();
        let img_src = match out.chart_or_blank().render_to_png_bytes(&opts) {
            Ok(bytes) => Some(format!(
                "data:image/png;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(bytes)
            )),
            Err(e) => {
                tracing::warn!(error = %e, "chart render failed");
                None
            }
        };
        let summary_html = out.summary_html();

        rsx! {
            div {
                style: "font-family: sans-serif; margin: 16px; color:#ddd; background:#121214;",
                h1 { "Gyroscope Data Visualization" }

                label { "Select Graph Type:" }
                select {
                    value: "{current.graph_type}",
                    onchange: move |evt| controls.write().set_graph_type(&evt.value()),
                    for (value, label) in GRAPH_TYPE_OPTIONS {
                        option { value: value, selected: current.graph_type == value, "{label}" }
                    }
                }

                label { "Select Data Variables:" }
                select {
                    onchange: move |evt| controls.write().set_variables(&evt.value()),
                    for (value, label) in VARIABLE_OPTIONS {
                        option { value: value, selected: current.variables.to_string() == value, "{label}" }
                    }
                }

                label { "Number of Data Samples:" }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{current.samples}",
                    oninput: move |evt| controls.write().set_samples(&evt.value()),
                }

                button { onclick: move |_| controls.write().click_prev(), "Previous" }
                button { onclick: move |_| controls.write().click_next(), "Next" }

                if let Some(src) = img_src {
                    img { style: "display:block; max-width:100%;", src: src }
                }
                div { id: "summary", dangerous_inner_html: summary_html }
            }
        }
    }

    #[component]
    fn App() -> Element {
        let dashboard = use_context::<Arc<Dashboard>>();
        rsx! { DashboardView { dashboard } }
    }

    /// Open the dashboard window; blocks until it is closed.
    pub fn run_dashboard_ui(dashboard: Arc<Dashboard>) {
        let cfg = dioxus::desktop::Config::new().with_window(
            dioxus::desktop::WindowBuilder::new().with_title("Gyroscope Data Visualization"),
        );
        dioxus::LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context(dashboard)
            .launch(App);
    }
}
