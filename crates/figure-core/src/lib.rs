// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports calculators, surfaces, the figure and selection dispatch.

pub mod calculator;
pub mod dispatch;
pub mod error;
pub mod figure;
pub mod grid;
pub mod raster;
pub mod surface;
pub mod theme;
pub mod types;

pub use calculator::{Calculator, InchesToCm, KphToMps, ResistanceToCurrent};
pub use dispatch::{Dispatch, Dispatcher, ParameterRequest, Selection};
pub use error::{FigureError, InputError, Parameter};
pub use figure::{Figure, Layout, RenderOptions, SamplePoint};
pub use raster::SkiaSurface;
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface};
pub use theme::Theme;
