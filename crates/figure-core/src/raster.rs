// File: crates/figure-core/src/raster.rs
// Summary: Skia CPU raster implementation of DrawingSurface with PNG/RGBA export.

use skia_safe as skia;
use std::path::Path;

use crate::error::{FigureError, Result};
use crate::figure::RenderOptions;
use crate::surface::DrawingSurface;
use crate::theme::Theme;

/// Canvas default text size, in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// A raster canvas backed by a Skia N32 premultiplied surface.
pub struct SkiaSurface {
    surface: skia::Surface,
    background: skia::Color,
    fill: skia::Paint,
    stroke: skia::Paint,
    font: skia::Font,
    path: skia::Path,
}

impl SkiaSurface {
    /// Create a `width` x `height` surface cleared to `theme.background`.
    pub fn new(width: i32, height: i32, theme: &Theme) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(FigureError::SurfaceCreation { width, height })?;
        surface.canvas().clear(theme.background);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.foreground);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(theme.line_stroke);

        Ok(Self {
            surface,
            background: theme.background,
            fill,
            stroke,
            font: default_font(DEFAULT_FONT_SIZE),
            path: skia::Path::new(),
        })
    }

    /// Create a surface sized, themed and with the font size from `opts`.
    pub fn from_options(opts: &RenderOptions) -> Result<Self> {
        let mut surface = Self::new(opts.width, opts.height, &opts.theme)?;
        surface.set_font_size(opts.font_size);
        Ok(surface)
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font.set_size(size.max(1.0));
    }

    /// Encode the current surface content as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(FigureError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        let io_err = |source| FigureError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels. Returns (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(FigureError::Readback);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

fn default_font(size: f32) -> skia::Font {
    let mgr = skia::FontMgr::default();
    match mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()) {
        Some(typeface) => skia::Font::from_typeface(typeface, size),
        None => {
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> f32 { self.surface.width() as f32 }
    fn height(&self) -> f32 { self.surface.height() as f32 }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(skia::Rect::from_xywh(x, y, w, h), None, None);
        canvas.clear(self.background);
        canvas.restore();
    }

    fn set_fill_color(&mut self, color: skia::Color) {
        self.fill.set_color(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.surface.canvas().draw_rect(skia::Rect::from_xywh(x, y, w, h), &self.fill);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.surface.canvas().draw_str(text, (x, y), &self.font, &self.fill);
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.stroke.set_color(color);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x, y));
    }

    fn stroke(&mut self) {
        self.surface.canvas().draw_path(&self.path, &self.stroke);
    }
}
