// File: crates/figure-core/src/dispatch.rs
// Summary: Selection handling; maps a chosen calculator to a redraw, with a two-phase parameter request for current.
// Notes:
// - Exactly one calculator is active after the first successful draw.
// - Rejected parameters never touch the surface or the active calculator.

use tracing::{info, warn};

use crate::calculator::{Calculator, InchesToCm, KphToMps, ResistanceToCurrent};
use crate::error::{InputError, Parameter};
use crate::figure::{Figure, RenderOptions};
use crate::surface::DrawingSurface;

/// The calculators a user can pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    LengthConversion,
    SpeedConversion,
    CurrentCalculator,
}

impl Selection {
    pub const ALL: [Selection; 3] =
        [Selection::LengthConversion, Selection::SpeedConversion, Selection::CurrentCalculator];

    /// Parse a selection value. Accepts the canonical keys (`inchesToCm`,
    /// `kmToMps`, `resistanceToCurrent`) and short names, case-insensitively.
    /// Anything else is not a selection.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "inchestocm" | "length" => Some(Selection::LengthConversion),
            "kmtomps" | "kphtomps" | "speed" => Some(Selection::SpeedConversion),
            "resistancetocurrent" | "current" => Some(Selection::CurrentCalculator),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Selection::LengthConversion => "inchesToCm",
            Selection::SpeedConversion => "kmToMps",
            Selection::CurrentCalculator => "resistanceToCurrent",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Selection::LengthConversion => "length",
            Selection::SpeedConversion => "speed",
            Selection::CurrentCalculator => "current",
        }
    }
}

/// Outstanding request for voltage and resistance. Consumed by
/// [`Dispatcher::resume`]; a newer selection makes it stale.
#[derive(Debug, PartialEq, Eq)]
pub struct ParameterRequest {
    id: u64,
}

impl ParameterRequest {
    pub fn parameters(&self) -> [Parameter; 2] {
        [Parameter::Voltage, Parameter::Resistance]
    }
}

/// What a selection (or a resumed request) did.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The surface was repainted with the new active calculator.
    Drawn,
    /// Nothing drawn yet; answer the request through `resume`.
    NeedsParameters(ParameterRequest),
    /// Unknown selection or stale request; nothing changed.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Active {
    Length,
    Speed,
    Current(ResistanceToCurrent),
}

pub struct Dispatcher {
    options: RenderOptions,
    length: InchesToCm,
    speed: KphToMps,
    active: Option<Active>,
    pending: Option<u64>,
    next_request: u64,
}

impl Dispatcher {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            length: InchesToCm,
            speed: KphToMps,
            active: None,
            pending: None,
            next_request: 0,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Draw the default selection, as done once at startup.
    pub fn start(&mut self, surface: &mut dyn DrawingSurface) -> Dispatch {
        self.select(Selection::default(), surface)
    }

    /// Handle a raw selection value; unknown values are a no-op.
    pub fn select_value(&mut self, value: &str, surface: &mut dyn DrawingSurface) -> Dispatch {
        match Selection::parse(value) {
            Some(selection) => self.select(selection, surface),
            None => {
                info!(value, "ignoring unknown selection");
                Dispatch::Ignored
            }
        }
    }

    pub fn select(&mut self, selection: Selection, surface: &mut dyn DrawingSurface) -> Dispatch {
        info!(selection = selection.key(), "selection changed");
        self.pending = None;
        match selection {
            Selection::LengthConversion => self.activate(Active::Length, surface),
            Selection::SpeedConversion => self.activate(Active::Speed, surface),
            Selection::CurrentCalculator => {
                let id = self.next_request;
                self.next_request += 1;
                self.pending = Some(id);
                Dispatch::NeedsParameters(ParameterRequest { id })
            }
        }
    }

    /// Answer a parameter request with the raw user input.
    ///
    /// Both values must parse as numbers; otherwise the error names the first
    /// rejected one and neither the surface nor the active calculator change.
    pub fn resume(
        &mut self,
        request: ParameterRequest,
        voltage: &str,
        resistance: &str,
        surface: &mut dyn DrawingSurface,
    ) -> Result<Dispatch, InputError> {
        if self.pending != Some(request.id) {
            info!(request = request.id, "ignoring stale parameter request");
            return Ok(Dispatch::Ignored);
        }
        self.pending = None;

        let parsed = parse_number(Parameter::Voltage, voltage)
            .and_then(|v| parse_number(Parameter::Resistance, resistance).map(|r| (v, r)));
        let (v, r) = parsed.map_err(|err| {
            warn!(%err, "rejected calculator parameters");
            err
        })?;
        Ok(self.activate(Active::Current(ResistanceToCurrent::new(v, r)), surface))
    }

    /// The active calculator, if any draw has happened.
    pub fn active(&self) -> Option<&dyn Calculator> {
        self.active.as_ref().map(|a| self.calculator_for(a))
    }

    pub fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    /// Repaint the active calculator; returns false when none is active.
    pub fn redraw(&self, surface: &mut dyn DrawingSurface) -> bool {
        match self.active() {
            Some(calculator) => {
                Figure::plot(calculator, surface, &self.options);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, active: Active, surface: &mut dyn DrawingSurface) -> Dispatch {
        self.active = Some(active);
        self.redraw(surface);
        Dispatch::Drawn
    }

    fn calculator_for<'a>(&'a self, active: &'a Active) -> &'a dyn Calculator {
        match active {
            Active::Length => &self.length,
            Active::Speed => &self.speed,
            Active::Current(c) => c,
        }
    }
}

/// Parse one decimal parameter. Surrounding whitespace is ignored and NaN is
/// rejected; infinities are accepted.
pub fn parse_number(parameter: Parameter, raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(InputError::invalid_number(parameter, raw)),
    }
}
