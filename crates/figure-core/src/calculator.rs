// File: crates/figure-core/src/calculator.rs
// Summary: Calculator trait and the three built-in conversion formulas.

/// A scalar conversion with declared input/output units.
///
/// The set of implementors is closed: [`InchesToCm`], [`KphToMps`] and
/// [`ResistanceToCurrent`]. Implementations must not fail; non-finite
/// results are returned as-is.
pub trait Calculator {
    fn name(&self) -> &'static str;
    fn compute(&self, x: f64) -> f64;
    fn input_unit(&self) -> &'static str;
    fn output_unit(&self) -> &'static str;
}

pub const CM_PER_INCH: f64 = 2.54;
pub const KPH_PER_MPS: f64 = 3.6;

/// Length conversion, inches to centimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InchesToCm;

impl Calculator for InchesToCm {
    fn name(&self) -> &'static str { "inches-to-cm" }

    fn compute(&self, inches: f64) -> f64 {
        inches * CM_PER_INCH
    }

    fn input_unit(&self) -> &'static str { "in" }
    fn output_unit(&self) -> &'static str { "cm" }
}

/// Speed conversion, kilometers per hour to meters per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KphToMps;

impl Calculator for KphToMps {
    fn name(&self) -> &'static str { "kph-to-mps" }

    fn compute(&self, kph: f64) -> f64 {
        kph / KPH_PER_MPS
    }

    fn input_unit(&self) -> &'static str { "km/h" }
    fn output_unit(&self) -> &'static str { "m/s" }
}

/// Ohm's law current for a fixed voltage and resistance.
///
/// `compute` ignores its argument and always yields `voltage / resistance`,
/// so a plot of it is a horizontal line. A zero resistance gives an infinite
/// (or NaN for `0/0`) current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceToCurrent {
    voltage: f64,
    resistance: f64,
}

impl ResistanceToCurrent {
    pub const fn new(voltage: f64, resistance: f64) -> Self {
        Self { voltage, resistance }
    }

    pub const fn voltage(&self) -> f64 { self.voltage }
    pub const fn resistance(&self) -> f64 { self.resistance }
}

impl Calculator for ResistanceToCurrent {
    fn name(&self) -> &'static str { "resistance-to-current" }

    fn compute(&self, _x: f64) -> f64 {
        self.voltage / self.resistance
    }

    fn input_unit(&self) -> &'static str { "V" }
    fn output_unit(&self) -> &'static str { "A" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_declared() {
        assert_eq!((InchesToCm.input_unit(), InchesToCm.output_unit()), ("in", "cm"));
        assert_eq!((KphToMps.input_unit(), KphToMps.output_unit()), ("km/h", "m/s"));
        let c = ResistanceToCurrent::new(1.0, 1.0);
        assert_eq!((c.input_unit(), c.output_unit()), ("V", "A"));
    }

    #[test]
    fn zero_resistance_propagates() {
        assert_eq!(ResistanceToCurrent::new(5.0, 0.0).compute(3.0), f64::INFINITY);
        assert_eq!(ResistanceToCurrent::new(-5.0, 0.0).compute(3.0), f64::NEG_INFINITY);
        assert!(ResistanceToCurrent::new(0.0, 0.0).compute(3.0).is_nan());
    }
}
