// File: crates/figure-core/src/surface.rs
// Summary: Drawing-surface abstraction (canvas-style primitives) and an in-memory recording backend.

use skia_safe as skia;

/// Canvas-style 2D drawing primitives a figure renders through.
///
/// Coordinates are pixels with the origin at the top-left corner. Path
/// operations follow the begin/move/line/stroke model: `begin_path` discards
/// the current path, `stroke` paints it with the current stroke color.
pub trait DrawingSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_color(&mut self, color: skia::Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Draw `text` with its baseline-left corner at `(x, y)` using the fill color.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    fn set_stroke_color(&mut self, color: skia::Color);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
}

/// One primitive as recorded by [`RecordingSurface`], with the color in
/// effect when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: skia::Color },
    FillText { text: String, x: f32, y: f32, color: skia::Color },
    /// A stroked path; each inner vec is one subpath started by `move_to`.
    Stroke { subpaths: Vec<Vec<(f32, f32)>>, color: skia::Color },
}

/// Headless surface that logs every primitive instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    fill: skia::Color,
    stroke: skia::Color,
    path: Vec<Vec<(f32, f32)>>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            fill: skia::Color::BLACK,
            stroke: skia::Color::BLACK,
            path: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Every command issued since creation, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands still visible: everything after the last clear that covered
    /// the whole surface.
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| self.covers_surface(c))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Number of full-surface clears issued so far.
    pub fn clear_count(&self) -> usize {
        self.commands.iter().filter(|c| self.covers_surface(c)).count()
    }

    pub fn visible_texts(&self) -> Vec<&str> {
        self.visible()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn visible_rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.visible()
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, w, h, .. } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    pub fn visible_strokes(&self) -> Vec<&[Vec<(f32, f32)>]> {
        self.visible()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { subpaths, .. } => Some(subpaths.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn covers_surface(&self, c: &DrawCommand) -> bool {
        match *c {
            DrawCommand::ClearRect { x, y, w, h } => {
                x <= 0.0 && y <= 0.0 && x + w >= self.width && y + h >= self.height
            }
            _ => false,
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> f32 { self.width }
    fn height(&self) -> f32 { self.height }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: skia::Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color: self.fill });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText { text: text.to_owned(), x, y, color: self.fill });
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.stroke = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        // Canvas semantics: a line_to without a current point acts as move_to.
        match self.path.last_mut() {
            Some(sub) => sub.push((x, y)),
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke { subpaths: self.path.clone(), color: self.stroke });
    }
}
