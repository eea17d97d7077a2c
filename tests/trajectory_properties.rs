use approx::assert_abs_diff_eq;
use hivp::{Float, Izhikevich, Settings, rk4, simulate};

mod common;
use common::{Center, reference_cell, settings};

#[test]
fn time_is_strictly_monotonic_from_zero() {
    let cell = reference_cell();
    let opts = settings(5_000);
    let sol = simulate(&cell, &[0.0, 0.0], &opts).unwrap();

    assert_eq!(sol.t[0], 0.0);
    assert_eq!(sol.y[0], vec![0.0, 0.0]);
    for i in 0..sol.len() - 1 {
        assert!(sol.t[i + 1] > sol.t[i]);
        // A refined step is always shorter than the nominal one.
        assert!(sol.t[i + 1] - sol.t[i] <= opts.h * (1.0 + 1e-12));
    }
    assert!(sol.nevent > 0, "scenario expected to spike");
}

#[test]
fn length_is_fixed_regardless_of_events() {
    let cell = reference_cell();
    for nsteps in [1, 2, 100, 5_000] {
        let sol = simulate(&cell, &[0.0, 0.0], &settings(nsteps)).unwrap();
        assert_eq!(sol.len(), nsteps);
        assert_eq!(sol.t.len(), nsteps);
        assert_eq!(sol.y.len(), nsteps);
        assert_eq!(sol.nstep, nsteps - 1);
    }
}

#[test]
fn unreachable_threshold_reduces_to_plain_rk4() {
    let field = Center;
    let opts = Settings::builder()
        .nsteps(200)
        .threshold(Float::INFINITY)
        .build();
    let sol = simulate(&field, &[1.0, 0.0], &opts).unwrap();

    assert_eq!(sol.nreset, 0);
    assert_eq!(sol.nevent, 0);

    // Drive the public kernel directly; the driver must produce the same
    // samples bit for bit when no event machinery engages.
    let mut ws = rk4::Workspace::new(2);
    let mut y = vec![1.0, 0.0];
    let mut ynext = vec![0.0; 2];
    for i in 0..sol.len() - 1 {
        rk4::step(&field, sol.t[i], &y, opts.h, &mut ws, &mut ynext);
        assert_eq!(sol.y[i + 1], ynext);
        assert_eq!(sol.t[i + 1], sol.t[i] + opts.h);
        y.copy_from_slice(&ynext);
    }
}

#[test]
fn single_step_matches_direct_formula() {
    let cell = reference_cell();
    let opts = settings(2);
    let sol = simulate(&cell, &[0.0, 0.0], &opts).unwrap();

    let expected = reference_rk4_step([0.0, 0.0], opts.h, &cell);
    assert_abs_diff_eq!(sol.y[1][0], expected[0], epsilon = 1e-6);
    assert_abs_diff_eq!(sol.y[1][1], expected[1], epsilon = 1e-6);
    assert_eq!(sol.t[1], opts.h);
}

/// Direct scalar reimplementation of the four-stage formula, kept independent
/// of the library kernel.
fn reference_rk4_step(y: [Float; 2], h: Float, cell: &Izhikevich) -> [Float; 2] {
    let f = |y: [Float; 2]| -> [Float; 2] {
        [
            0.04 * y[0] * y[0] + 5.0 * y[0] + 140.0 - y[1] + cell.i,
            cell.a * (cell.b * y[0] - y[1]),
        ]
    };
    let d1 = f(y);
    let k1 = [h * d1[0], h * d1[1]];
    let d2 = f([y[0] + k1[0] / 2.0, y[1] + k1[1] / 2.0]);
    let k2 = [h * d2[0], h * d2[1]];
    let d3 = f([y[0] + k2[0] / 2.0, y[1] + k2[1] / 2.0]);
    let k3 = [h * d3[0], h * d3[1]];
    let d4 = f([y[0] + k3[0], y[1] + k3[1]]);
    let k4 = [h * d4[0], h * d4[1]];
    [
        y[0] + (k1[0] + 2.0 * k2[0] + 2.0 * k3[0] + k4[0]) / 6.0,
        y[1] + (k1[1] + 2.0 * k2[1] + 2.0 * k3[1] + k4[1]) / 6.0,
    ]
}
