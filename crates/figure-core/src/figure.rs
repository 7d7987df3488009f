// File: crates/figure-core/src/figure.rs
// Summary: Figure samples a Calculator over the fixed domain and paints markers, labels and a polyline.

use tracing::debug;

use crate::calculator::Calculator;
use crate::grid::sample_domain;
use crate::raster::DEFAULT_FONT_SIZE;
use crate::surface::DrawingSurface;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH, X_SCALE, Y_SCALE};

/// Pixel layout of a figure. `Default` reproduces the classic canvas layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Pixels per domain unit (x = x_scale * i).
    pub x_scale: f64,
    /// Pixels per output unit (y = height - y_scale * v).
    pub y_scale: f64,
    /// Side of the square sample marker.
    pub marker_size: f32,
    /// Offset of text labels from the surface edge and from markers.
    pub text_inset: f32,
    /// Distance of the input-unit label from the right edge.
    pub unit_label_right: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            x_scale: X_SCALE,
            y_scale: Y_SCALE,
            marker_size: 5.0,
            text_inset: 5.0,
            unit_label_right: 30.0,
        }
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub layout: Layout,
    /// Label text size used by raster surfaces.
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            layout: Layout::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// One sampled domain value with its output and marker position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub input: f64,
    pub output: f64,
    pub x: f32,
    pub y: f32,
}

/// A calculator bound to a theme and layout. Every draw fully repaints the
/// surface it is given; the figure keeps no reference to the surface.
pub struct Figure<'c> {
    calculator: &'c dyn Calculator,
    theme: Theme,
    layout: Layout,
}

impl<'c> Figure<'c> {
    pub fn new(calculator: &'c dyn Calculator, theme: Theme, layout: Layout) -> Self {
        Self { calculator, theme, layout }
    }

    /// Build a figure and draw it once onto `surface`.
    pub fn plot(calculator: &'c dyn Calculator, surface: &mut dyn DrawingSurface, opts: &RenderOptions) -> Self {
        let figure = Self::new(calculator, opts.theme, opts.layout);
        figure.draw(surface);
        figure
    }

    pub fn calculator(&self) -> &dyn Calculator {
        self.calculator
    }

    /// Sample positions for a surface of the given height, in domain order.
    pub fn sample_points(&self, surface_height: f32) -> Vec<SamplePoint> {
        let l = &self.layout;
        sample_domain()
            .into_iter()
            .map(|i| {
                let v = self.calculator.compute(i);
                SamplePoint {
                    input: i,
                    output: v,
                    x: (l.x_scale * i) as f32,
                    y: (surface_height as f64 - l.y_scale * v) as f32,
                }
            })
            .collect()
    }

    /// Clear `surface` and paint the whole figure.
    pub fn draw(&self, surface: &mut dyn DrawingSurface) {
        let (w, h) = (surface.width(), surface.height());
        let l = &self.layout;
        surface.clear_rect(0.0, 0.0, w, h);
        surface.set_fill_color(self.theme.foreground);

        let points = self.sample_points(h);
        for p in &points {
            surface.fill_rect(p.x, p.y, l.marker_size, l.marker_size);
            surface.fill_text(&format_domain(p.input), p.x, h - l.text_inset);
            surface.fill_text(&format_value(p.output), l.text_inset, p.y - l.text_inset);
        }

        surface.fill_text(self.calculator.input_unit(), w - l.unit_label_right, h - l.text_inset);
        if let Some(last) = points.last() {
            surface.fill_text(self.calculator.output_unit(), l.text_inset, last.y - l.text_inset);
        }

        if let Some((first, rest)) = points.split_first() {
            surface.begin_path();
            surface.move_to(first.x, first.y);
            for p in rest {
                surface.line_to(p.x, p.y);
            }
            surface.set_stroke_color(self.theme.line_stroke);
            surface.stroke();
        }

        debug!(calculator = self.calculator.name(), samples = points.len(), width = w, height = h, "figure drawn");
    }
}

/// Format an output value with one decimal place. Non-finite values keep a
/// readable spelling and negative zero prints as `0.0`.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        let s = format!("{:.1}", v);
        if s == "-0.0" { "0.0".to_string() } else { s }
    }
}

/// Domain values are whole numbers; `Display` for f64 prints them without a fraction.
fn format_domain(i: f64) -> String {
    format!("{}", i)
}
