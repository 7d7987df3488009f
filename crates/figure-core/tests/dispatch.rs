// File: crates/figure-core/tests/dispatch.rs
// Purpose: Selection flow, two-phase parameter requests and rejected input.

use figure_core::{
    Dispatch, Dispatcher, InputError, Parameter, RecordingSurface, RenderOptions, Selection,
};

fn setup() -> (Dispatcher, RecordingSurface) {
    (Dispatcher::new(RenderOptions::default()), RecordingSurface::new(500.0, 400.0))
}

fn request(d: &mut Dispatcher, s: &mut RecordingSurface) -> figure_core::ParameterRequest {
    match d.select(Selection::CurrentCalculator, s) {
        Dispatch::NeedsParameters(req) => req,
        other => panic!("expected a parameter request, got {other:?}"),
    }
}

#[test]
fn startup_draws_length_conversion() {
    let (mut d, mut s) = setup();
    assert!(d.active().is_none());
    assert_eq!(d.start(&mut s), Dispatch::Drawn);
    assert_eq!(d.active().map(|c| c.output_unit()), Some("cm"));
    assert!(s.visible_texts().contains(&"in"));
}

#[test]
fn switching_selection_replaces_the_plot() {
    let (mut d, mut s) = setup();
    d.start(&mut s);
    assert_eq!(d.select_value("kmToMps", &mut s), Dispatch::Drawn);
    assert_eq!(d.active().map(|c| c.input_unit()), Some("km/h"));
    let texts = s.visible_texts();
    assert!(texts.contains(&"5.6"));
    assert!(!texts.contains(&"cm"));
    assert_eq!(s.visible_rects().len(), 11);
}

#[test]
fn unknown_selection_is_a_no_op() {
    let (mut d, mut s) = setup();
    d.start(&mut s);
    let before = s.commands().len();
    assert_eq!(d.select_value("fahrenheitToCelsius", &mut s), Dispatch::Ignored);
    assert_eq!(s.commands().len(), before);
    assert_eq!(d.active().map(|c| c.output_unit()), Some("cm"));
}

#[test]
fn current_requests_parameters_before_drawing() {
    let (mut d, mut s) = setup();
    let req = request(&mut d, &mut s);
    assert_eq!(req.parameters(), [Parameter::Voltage, Parameter::Resistance]);
    assert!(d.has_pending_request());
    assert!(s.commands().is_empty(), "nothing drawn until parameters arrive");

    assert_eq!(d.resume(req, "12", "4", &mut s), Ok(Dispatch::Drawn));
    assert!(!d.has_pending_request());
    let active = d.active().expect("current calculator active");
    assert_eq!(active.compute(0.0), 3.0);
    assert_eq!(active.compute(20.0), 3.0);

    let ys: Vec<f32> = s.visible_rects().iter().map(|r| r.1).collect();
    assert_eq!(ys.len(), 11);
    assert!(ys.iter().all(|y| *y == ys[0]));
}

#[test]
fn invalid_voltage_leaves_previous_plot_untouched() {
    let (mut d, mut s) = setup();
    d.start(&mut s);
    let snapshot = s.commands().to_vec();

    let req = request(&mut d, &mut s);
    let err = d.resume(req, "abc", "4", &mut s).unwrap_err();
    assert_eq!(err, InputError::invalid_number(Parameter::Voltage, "abc"));
    assert!(err.to_string().contains("voltage"));

    assert_eq!(s.commands(), snapshot.as_slice());
    assert_eq!(d.active().map(|c| c.output_unit()), Some("cm"));
}

#[test]
fn invalid_resistance_is_rejected() {
    let (mut d, mut s) = setup();
    let req = request(&mut d, &mut s);
    let err = d.resume(req, "12", "", &mut s).unwrap_err();
    assert_eq!(err.parameter(), Parameter::Resistance);
    assert!(s.commands().is_empty());
    assert!(d.active().is_none());
}

#[test]
fn zero_resistance_is_plotted_not_rejected() {
    let (mut d, mut s) = setup();
    let req = request(&mut d, &mut s);
    assert_eq!(d.resume(req, "5", "0", &mut s), Ok(Dispatch::Drawn));
    assert!(s.visible_texts().contains(&"Infinity"));
}

#[test]
fn newer_selection_makes_request_stale() {
    let (mut d, mut s) = setup();
    let req = request(&mut d, &mut s);
    d.select(Selection::SpeedConversion, &mut s);
    let before = s.commands().len();

    assert_eq!(d.resume(req, "12", "4", &mut s), Ok(Dispatch::Ignored));
    assert_eq!(s.commands().len(), before);
    assert_eq!(d.active().map(|c| c.output_unit()), Some("m/s"));
}

#[test]
fn redraw_repaints_active_calculator() {
    let (mut d, mut s) = setup();
    assert!(!d.redraw(&mut s));
    d.select(Selection::SpeedConversion, &mut s);
    assert!(d.redraw(&mut s));
    assert_eq!(s.clear_count(), 2);
    assert!(s.visible_texts().contains(&"m/s"));
}
