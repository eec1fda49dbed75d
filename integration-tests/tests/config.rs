//! Options loaded from TOML, and solver logging.

use approx::assert_relative_eq;
use simplelog::{Config, LevelFilter, TestLogger};

use scalarmin_observers::LogObserver;
use scalarmin_solvers::{
    Options, minimize_fn,
    optimization::{Objective, minimize},
};

fn init_logger() {
    // Tests share one process; only the first init succeeds.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

#[test]
fn partial_toml_keeps_defaults() {
    let options: Options = toml::from_str(
        r#"
        tolerance = 1e-10
        lower_bound = 0.0
        "#,
    )
    .expect("valid options");

    assert_eq!(options.tolerance, 1e-10);
    assert_eq!(options.lower_bound, 0.0);
    assert_eq!(options.upper_bound, f64::INFINITY);
    assert_eq!(options.guess, None);
    assert_eq!(options.max_iterations, 100);
}

#[test]
fn toml_accepts_infinite_bounds_and_guess() {
    let options: Options = toml::from_str(
        r#"
        lower_bound = -inf
        upper_bound = inf
        guess = -3.0
        initial_increment = 0.5
        max_iterations = 200
        "#,
    )
    .expect("valid options");

    assert_eq!(options.guess, Some(-3.0));
    assert_eq!(options.max_iterations, 200);

    let x = minimize_fn(f64::cos, &options, None);
    assert_relative_eq!(x, -std::f64::consts::PI, epsilon = 1e-6);
}

#[test]
fn options_round_trip_through_toml() {
    let options = Options {
        tolerance: 1e-6,
        lower_bound: -1.0,
        upper_bound: 4.0,
        ..Options::default()
    };

    let text = toml::to_string(&options).expect("serializable");
    let parsed: Options = toml::from_str(&text).expect("parsable");

    assert_eq!(parsed, options);
}

#[test]
fn invalid_toml_options_fail_validation() {
    let options: Options = toml::from_str("tolerance = -1.0").expect("valid toml");

    assert!(options.validate().is_err());
    assert!(minimize_fn(|x| x * x, &options, None).is_nan());
}

#[test]
fn log_observer_sees_both_stages() {
    init_logger();

    let parabola = Objective(|x: f64| (x - 3.0).powi(2));
    let mut logger = LogObserver::new(log::Level::Trace);

    let solution = minimize::minimize(
        &parabola,
        &parabola,
        &minimize::Options::default(),
        &mut logger,
    )
    .expect("should converge");

    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);

    // Bracketing observes every evaluation; refinement all but the first.
    assert!(logger.evaluations() > solution.iters + solution.bracket_iters);
}

#[test]
fn facade_failures_are_logged_not_raised() {
    init_logger();

    assert!(minimize_fn(|_| f64::NAN, &Options::default(), None).is_nan());
}
