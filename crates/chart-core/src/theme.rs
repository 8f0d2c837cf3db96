// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the per-series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub histogram: skia::Color,
    /// Series colors, cycled in series order.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            histogram: skia::Color::from_argb(255, 96, 156, 255),
            palette: [
                skia::Color::from_argb(255, 0x63, 0x6e, 0xfa),
                skia::Color::from_argb(255, 0xef, 0x55, 0x3b),
                skia::Color::from_argb(255, 0x00, 0xcc, 0x96),
                skia::Color::from_argb(255, 0xab, 0x63, 0xfa),
                skia::Color::from_argb(255, 0xff, 0xa1, 0x5a),
                skia::Color::from_argb(255, 0x19, 0xd3, 0xf3),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            histogram: skia::Color::from_argb(255, 40, 120, 200),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x17, 0xbe, 0xcf),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            histogram: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
            ],
        }
    }

    /// Color for the series at `index`, wrapping around the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
