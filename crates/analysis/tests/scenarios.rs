//! End-to-end runs of the physical models through the integrators and analyses.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use strobe_analysis::{
    Divergence,
    bifurcation::{self, BifurcationDiagram, TimeStep},
    divergence, refinement,
};
use strobe_core::{AngleWrap, StateVector, TimeGrid};
use strobe_models::{
    Decay, LinearPendulum, NonlinearPendulum, Oscillator, OscillatorParams, PendulumParams,
    Scenario,
};
use strobe_solvers::{Euler, Method, Rk4, fixed};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

const CHAOTIC: &str = r#"
    omega = 1.0
    q = 0.5
    Fe = 1.5
    theta0 = 10.0
    dt = 0.05
    t_max = 100.0
    method = "rk4"
"#;

#[test]
fn decay_matches_exponential_at_t_10() {
    let scenario = Scenario::from_toml("k = 1.0\nx0 = 1.0\ndt = 0.1\nt_max = 10.0").unwrap();

    let grid = scenario.grid().unwrap();
    let solution = fixed::solve_unobserved(
        &Decay,
        &scenario.decay_params().unwrap(),
        scenario.decay_initial_state(),
        grid,
        scenario.method(),
        (),
    )
    .unwrap();

    let last = solution.trajectory.last().unwrap();
    assert_relative_eq!(last.t, 10.0, epsilon = 1e-12);
    assert!((last.state[0] - (-10.0_f64).exp()).abs() < 1e-4);
}

#[test]
fn undamped_pendulum_returns_after_one_period() {
    let scenario = Scenario::from_toml("theta0 = 10.0\ndt = 0.05\nt_max = 6.3").unwrap();
    let params = scenario.pendulum_params();
    let initial = scenario.pendulum_initial_state();

    // Snap the step so a whole number of steps spans the period 2π / Ω.
    let period = TAU / params.omega;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (period / scenario.dt).round() as usize;
    #[allow(clippy::cast_precision_loss)]
    let dt = period / steps as f64;
    let grid = TimeGrid::from_steps(0.0, dt, steps).unwrap();

    let last = fixed::advance(
        &LinearPendulum,
        &params,
        initial,
        grid,
        Rk4,
        AngleWrap::new(0),
    )
    .unwrap();

    assert_relative_eq!(last[0], initial[0], epsilon = 1e-6);
    assert_relative_eq!(last[1], initial[1], epsilon = 1e-6);
}

#[test]
fn undamped_pendulum_traces_a_closed_ellipse() {
    let scenario = Scenario::from_toml("theta0 = 10.0\ndt = 0.05\nt_max = 20.0").unwrap();
    let params = scenario.pendulum_params();
    let initial = scenario.pendulum_initial_state();
    let grid = scenario.grid().unwrap();
    assert_eq!(grid.n_steps(), 400);

    let solution = fixed::solve_unobserved(
        &LinearPendulum,
        &params,
        initial,
        grid,
        scenario.method(),
        AngleWrap::new(0),
    )
    .unwrap();

    // Every (θ, ω) sample stays on the ellipse ω² + Ω² θ² = const.
    let ellipse = OscillatorParams::undamped(params.omega);
    let e0 = ellipse.energy(&initial);
    for state in solution.trajectory.states() {
        assert_relative_eq!(ellipse.energy(state), e0, max_relative = 1e-6);
    }

    // The grid point nearest t = 2π is 6.3, within dt / 2 of the period, so
    // the state is back at the start to within Ω θ0 dt / 2.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nearest = (TAU / params.omega / grid.dt()).round() as usize;
    let sample = &solution.trajectory.samples()[nearest];
    assert_relative_eq!(sample.t, 6.3, epsilon = 1e-12);

    let tolerance = params.omega * initial[0] * grid.dt() / 2.0;
    assert_relative_eq!(sample.state[0], initial[0], epsilon = tolerance);
    assert_relative_eq!(sample.state[1], initial[1], epsilon = tolerance);

    // And it sits on the analytic orbit at that exact time.
    let exact = Oscillator::exact(&initial, params.omega, sample.t);
    assert_relative_eq!(sample.state[0], exact[0], epsilon = 1e-6);
    assert_relative_eq!(sample.state[1], exact[1], epsilon = 1e-6);
}

#[test]
fn driven_nonlinear_pendulum_is_chaotic() {
    init_tracing();

    let scenario = Scenario::from_toml(CHAOTIC).unwrap();
    let nudged =
        Scenario::from_toml(&CHAOTIC.replace("theta0 = 10.0", "theta0 = 9.999")).unwrap();
    let config = divergence::Config::new(10.0, 40.0).unwrap();

    let record = divergence::analyze(
        &NonlinearPendulum,
        &scenario.pendulum_params(),
        scenario.pendulum_initial_state(),
        nudged.pendulum_initial_state(),
        scenario.grid().unwrap(),
        scenario.method(),
        AngleWrap::new(0),
        &config,
    )
    .unwrap();

    assert_eq!(record.reference.len(), 2001);
    assert_eq!(record.perturbed.len(), 2001);
    assert!(record.is_chaotic(), "λ = {}", record.lyapunov_exponent());
    assert!(record.timescale().is_some_and(|tau| tau > 0.0));
}

#[test]
fn zero_perturbation_is_degenerate() {
    let scenario = Scenario::from_toml(CHAOTIC).unwrap();

    let record = divergence::analyze_perturbed(
        &NonlinearPendulum,
        &scenario.pendulum_params(),
        scenario.pendulum_initial_state(),
        0.0,
        scenario.grid().unwrap(),
        Rk4,
        AngleWrap::new(0),
        &divergence::Config::default(),
    )
    .unwrap();

    assert_eq!(record.divergence, Divergence::Degenerate);
    assert_relative_eq!(record.lyapunov_exponent(), 0.0);
    assert!(!record.is_chaotic());
}

#[test]
fn euler_amplitude_grows_while_rk4_holds() {
    let params = OscillatorParams::undamped(1.0);
    let initial = StateVector::new([1.0, 0.0]);
    let grid = TimeGrid::from_duration(0.0, 0.2, 100.0).unwrap();

    let euler = fixed::solve_unobserved(&Oscillator, &params, initial, grid, Euler, ()).unwrap();
    let rk4 = fixed::solve_unobserved(&Oscillator, &params, initial, grid, Rk4, ()).unwrap();

    // Peak |x| over each run of 31 steps (about one period) keeps increasing.
    let peaks: Vec<f64> = euler
        .trajectory
        .samples()
        .chunks_exact(31)
        .map(|chunk| chunk.iter().map(|s| s.state[0].abs()).fold(0.0, f64::max))
        .collect();
    assert!(peaks.windows(2).all(|pair| pair[1] > pair[0]));

    let energies: Vec<f64> = euler.trajectory.states().map(|s| params.energy(s)).collect();
    assert!(energies.windows(2).all(|pair| pair[1] > pair[0]));

    let e0 = params.energy(&initial);
    for state in rk4.trajectory.states() {
        let e = params.energy(state);
        assert!(e <= e0 * (1.0 + 1e-12));
        assert!(e > 0.99 * e0);
    }
}

#[test]
fn local_error_ratios_match_method_orders() {
    let params = OscillatorParams::undamped(1.0);
    let initial = StateVector::new([1.0, 0.0]);
    let exact = |t: f64| Oscillator::exact(&initial, 1.0, t);

    let rk4_coarse =
        refinement::local_error(&Oscillator, &params, Rk4, initial, 0.0, 0.1, exact).unwrap();
    let rk4_fine =
        refinement::local_error(&Oscillator, &params, Rk4, initial, 0.0, 0.05, exact).unwrap();
    assert_relative_eq!(rk4_coarse / rk4_fine, 32.0, max_relative = 0.03);

    let euler_coarse =
        refinement::local_error(&Oscillator, &params, Euler, initial, 0.0, 0.1, exact).unwrap();
    let euler_fine =
        refinement::local_error(&Oscillator, &params, Euler, initial, 0.0, 0.05, exact).unwrap();
    assert_relative_eq!(euler_coarse / euler_fine, 4.0, max_relative = 0.02);
}

#[test]
fn global_error_orders_match_method_orders() {
    let params = OscillatorParams::undamped(1.0);
    let initial = StateVector::new([1.0, 0.0]);
    let exact = |t: f64| Oscillator::exact(&initial, 1.0, t);

    let order = |stepper: Method, coarse_dt: f64| {
        let coarse = TimeGrid::from_duration(0.0, coarse_dt, 10.0).unwrap();
        let fine = TimeGrid::from_duration(0.0, coarse_dt / 2.0, 10.0).unwrap();
        let e_coarse =
            refinement::global_error(&Oscillator, &params, stepper, initial, coarse, exact)
                .unwrap();
        let e_fine =
            refinement::global_error(&Oscillator, &params, stepper, initial, fine, exact).unwrap();
        refinement::observed_order(e_coarse, e_fine, 2.0)
    };

    assert_relative_eq!(order(Method::Euler, 0.001), 1.0, epsilon = 0.05);
    assert_relative_eq!(order(Method::Rk4, 0.1), 4.0, epsilon = 0.1);
}

#[test]
fn bifurcation_sweep_is_deterministic_and_ordered() {
    init_tracing();

    let base = PendulumParams::new(1.0, 0.5, 1.4, 2.0 / 3.0);
    let controls = bifurcation::linspace(1.35, 1.50, 4);
    let config = bifurcation::Config::new(20, 10, TimeStep::PerPeriod(100)).unwrap();

    let run = || {
        bifurcation::sweep(
            &NonlinearPendulum,
            &base,
            &controls,
            |p: &PendulumParams, fe| p.with_forcing_amplitude(fe),
            StateVector::new([10f64.to_radians(), 0.0]),
            0.0,
            Rk4,
            &config,
        )
        .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    assert_eq!(first.len(), 40);
    for (i, sample) in first.iter().enumerate() {
        assert_eq!(sample.control, controls[i / 10]);
        assert_eq!(sample.index, i % 10);
        assert!(sample.angle > -std::f64::consts::PI && sample.angle <= std::f64::consts::PI);
    }
}

#[test]
fn weak_forcing_settles_on_a_period_one_orbit() {
    let base = PendulumParams::new(1.0, 0.5, 0.5, 2.0 / 3.0);
    let config = bifurcation::Config::new(100, 20, TimeStep::Requested(0.05)).unwrap();

    let samples = bifurcation::sweep(
        &NonlinearPendulum,
        &base,
        &[0.5],
        |p: &PendulumParams, fe| p.with_forcing_amplitude(fe),
        StateVector::new([10f64.to_radians(), 0.0]),
        0.0,
        Rk4,
        &config,
    )
    .unwrap();

    let diagram = BifurcationDiagram::from_samples(&samples);
    assert_eq!(diagram.periodicity(1e-6), vec![(0.5, 1)]);
}

#[test]
fn free_pendulum_strobed_at_its_own_period_stands_still() {
    // With Ωe = Ω and no forcing, every sample lands on the initial angle.
    let base = PendulumParams::new(1.0, 0.0, 0.0, 1.0);
    let config = bifurcation::Config::new(0, 5, TimeStep::Requested(0.05)).unwrap();
    let theta0 = 10f64.to_radians();

    let samples = bifurcation::sweep(
        &LinearPendulum,
        &base,
        &[0.0],
        |p: &PendulumParams, fe| p.with_forcing_amplitude(fe),
        StateVector::new([theta0, 0.0]),
        0.0,
        Rk4,
        &config,
    )
    .unwrap();

    for sample in &samples {
        assert_relative_eq!(sample.angle, theta0, epsilon = 1e-6);
    }
}
