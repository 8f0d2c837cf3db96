// File: crates/chart-core/src/chart.rs
// Summary: Chart specification and headless PNG rendering pipeline using Skia CPU raster surfaces.

use serde::Serialize;
use skia_safe as skia;

use crate::error::ChartError;
use crate::grid::{linspace, tick_label};
use crate::series::{Series, SeriesType};
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::{Axis, Theme, ViewState};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, tick labels and legend. Off in snapshot tests to avoid font variance.
    pub draw_labels: bool,
    /// Line series longer than this are reduced with LTTB before drawing.
    pub max_line_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            max_line_points: 2000,
        }
    }
}

/// Renderer-agnostic chart specification: what to draw, not how.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// The empty chart shown when there is nothing to plot.
    pub fn blank() -> Self { Self::new() }

    pub fn is_blank(&self) -> bool { self.series.iter().all(Series::is_empty) }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// Fit both axes to the data, padding Y by `y_margin` of its span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Serialize the specification as pretty JSON. Non-finite numbers become `null`.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let area = PlotArea {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };

        draw_grid(canvas, &area, &opts.theme);
        draw_axes(canvas, &area, &opts.theme);

        for (i, s) in self.series.iter().enumerate() {
            let color = opts.theme.series_color(i);
            match s.series_type {
                SeriesType::Scatter => draw_scatter_series(canvas, &area, &self.x_axis, &self.y_axis, s, color),
                SeriesType::Line => {
                    let reduced = s.downsample_xy_lttb(opts.max_line_points);
                    draw_line_series(canvas, &area, &self.x_axis, &self.y_axis, &reduced, color)
                }
                SeriesType::Histogram => {
                    draw_histogram_series(canvas, &area, &self.x_axis, &self.y_axis, s, opts.theme.histogram)
                }
            }
        }

        if opts.draw_labels {
            draw_labels(canvas, &area, self, &opts.theme);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotArea {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotArea {
    fn sx(&self, axis: &Axis, x: f64) -> f32 {
        self.l + ((x - axis.min) / axis.span()) as f32 * (self.r - self.l)
    }
    fn sy(&self, axis: &Axis, y: f64) -> f32 {
        self.b - ((y - axis.min) / axis.span()) as f32 * (self.b - self.t)
    }
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(area.l as f64, area.r as f64, 10) {
        canvas.draw_line((x as f32, area.t), (x as f32, area.b), &paint);
    }
    // horizontals
    for y in linspace(area.t as f64, area.b as f64, 6) {
        canvas.draw_line((area.l, y as f32), (area.r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((area.l, area.b), (area.r, area.b), &paint);
    canvas.draw_line((area.l, area.t), (area.l, area.b), &paint);
}

fn draw_labels(canvas: &skia::Canvas, area: &PlotArea, chart: &Chart, theme: &Theme) {
    let mut text = skia::Paint::default();
    text.set_color(theme.axis_label);
    text.set_anti_alias(true);
    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);

    let mut font = skia::Font::default();
    font.set_size(14.0);
    let mut small = skia::Font::default();
    small.set_size(11.0);

    if !chart.title.is_empty() {
        let mut title_font = skia::Font::default();
        title_font.set_size(18.0);
        canvas.draw_str(&chart.title, (area.l, area.t - 18.0), &title_font, &text);
    }

    // Tick values along both axes
    let xs = chart.x_axis.span();
    for (v, px) in linspace(chart.x_axis.min, chart.x_axis.max, 6)
        .into_iter()
        .zip(linspace(area.l as f64, area.r as f64, 6))
    {
        canvas.draw_str(tick_label(v, xs), (px as f32 - 12.0, area.b + 16.0), &small, &tick);
    }
    let ys = chart.y_axis.span();
    for (v, py) in linspace(chart.y_axis.min, chart.y_axis.max, 6)
        .into_iter()
        .zip(linspace(area.b as f64, area.t as f64, 6))
    {
        canvas.draw_str(tick_label(v, ys), (area.l - 72.0, py as f32 + 4.0), &small, &tick);
    }

    canvas.draw_str(&chart.x_axis.label, (area.r - 80.0, area.b + 40.0), &font, &text);
    canvas.draw_str(&chart.y_axis.label, (area.l - 72.0, area.t - 4.0), &font, &text);

    // Legend in the right margin, one swatch per named series
    let mut swatch = skia::Paint::default();
    swatch.set_style(skia::paint::Style::Fill);
    for (i, s) in chart.series.iter().enumerate() {
        let y = area.t + 8.0 + i as f32 * 20.0;
        let color = if s.series_type == SeriesType::Histogram { theme.histogram } else { theme.series_color(i) };
        swatch.set_color(color);
        canvas.draw_rect(skia::Rect::from_xywh(area.r + 12.0, y - 10.0, 12.0, 12.0), &swatch);
        canvas.draw_str(&s.name, (area.r + 30.0, y), &font, &text);
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(color);

    for &(x, y) in &series.data_xy {
        canvas.draw_circle((area.sx(x_axis, x), area.sy(y_axis, y)), 3.0, &dot);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.data_xy.len() < 2 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    for pair in series.data_xy.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        canvas.draw_line(
            (area.sx(x_axis, x0), area.sy(y_axis, y0)),
            (area.sx(x_axis, x1), area.sy(y_axis, y1)),
            &stroke,
        );
    }
}

fn draw_histogram_series(
    canvas: &skia::Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color);

    let base = area.sy(y_axis, 0.0_f64.max(y_axis.min));
    for bin in &series.bins {
        let left = area.sx(x_axis, bin.start) + 1.0;
        let right = (area.sx(x_axis, bin.end) - 1.0).max(left + 1.0);
        let top = area.sy(y_axis, bin.count as f64);
        canvas.draw_rect(skia::Rect::from_ltrb(left, top.min(base), right, base), &body);
    }
}
