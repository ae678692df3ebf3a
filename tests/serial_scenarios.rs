use heat_ring::solver::*;
use heat_ring::HeatError;

use float_cmp::assert_approx_eq;

fn serial(initial: &[f64], dx: f64, dt: f64, nt: usize) -> Vec<f64> {
    let mut u = initial.to_vec();
    let n = u.len();
    advance_serial(&mut u, dx, n, dt, nt).unwrap();
    u
}

#[test]
fn single_hot_cell() {
    let u = serial(&[0.0, 0.0, 1.0, 0.0, 0.0], 1.0, 0.25, 1);
    assert_eq!(u, vec![0.0, 0.25, 0.5, 0.25, 0.0]);
}

#[test]
fn single_hot_cell_two_steps() {
    let u = serial(&[0.0, 0.0, 1.0, 0.0, 0.0], 1.0, 0.25, 2);
    assert_eq!(u, vec![0.0625, 0.25, 0.375, 0.25, 0.0625]);
}

#[test]
fn periodic_wrap() {
    let u = serial(&[1.0, 0.0, 0.0, 0.0], 1.0, 0.25, 1);
    assert_eq!(u, vec![0.5, 0.25, 0.0, 0.25]);
}

#[test]
fn constant_steady_state() {
    let u = serial(&[3.0; 8], 1.0, 0.25, 100);
    for x in &u {
        assert_approx_eq!(f64, *x, 3.0, ulps = 2);
    }
}

#[test]
fn zero_steps_is_identity() {
    let initial = [0.1, -7.5, 1e300, f64::MIN_POSITIVE, 42.0];
    let u = serial(&initial, 0.3, 0.01, 0);
    for (a, b) in u.iter().zip(initial.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn mass_conservation() {
    let n = 200;
    let nt = 500;
    let initial: Vec<f64> = (0..n)
        .map(|i| ((i as f64) * 0.37).sin().abs() * 10.0)
        .collect();
    let before: f64 = initial.iter().sum();
    let u = serial(&initial, 0.1, 0.004, nt);
    let after: f64 = u.iter().sum();
    let bound = (nt * n) as f64 * f64::EPSILON * before.abs();
    assert_approx_eq!(f64, after, before, epsilon = bound);
}

#[test]
fn two_points_conserve_mass() {
    let u = serial(&[3.0, 1.0], 1.0, 0.1, 25);
    assert_approx_eq!(f64, u[0] + u[1], 4.0, ulps = 4);
    assert!(u[0] > u[1]);
}

#[test]
fn symmetry_is_kept() {
    // symmetric about index 0: u[i] == u[n - i]
    let n = 16;
    let initial: Vec<f64> = (0..n)
        .map(|i| {
            let d = i.min(n - i) as f64;
            (-d * d / 8.0).exp()
        })
        .collect();
    let mut u = initial.clone();
    for _ in 0..40 {
        advance_serial(&mut u, 1.0, n, 0.2, 1).unwrap();
        for i in 1..n {
            assert_approx_eq!(f64, u[i], u[n - i], epsilon = 1e-14);
        }
    }
}

#[test]
fn linearity() {
    let n = 32;
    let a: Vec<f64> = (0..n).map(|i| (i % 5) as f64).collect();
    let b: Vec<f64> = (0..n).map(|i| ((i * i) % 7) as f64 - 3.0).collect();
    let (alpha, beta) = (1.5, -0.75);
    let combined: Vec<f64> = a
        .iter()
        .zip(&b)
        .map(|(x, y)| alpha * x + beta * y)
        .collect();

    let ua = serial(&a, 1.0, 0.25, 30);
    let ub = serial(&b, 1.0, 0.25, 30);
    let uc = serial(&combined, 1.0, 0.25, 30);
    for i in 0..n {
        assert_approx_eq!(f64, uc[i], alpha * ua[i] + beta * ub[i], epsilon = 1e-12);
    }
}

#[test]
fn invalid_geometry() {
    let mut u = vec![1.0];
    assert!(matches!(
        advance_serial(&mut u, 1.0, 1, 0.25, 1),
        Err(HeatError::InvalidGeometry(_))
    ));

    let mut u = vec![1.0, 2.0, 3.0];
    for (dx, dt) in [(0.0, 0.1), (1.0, -0.1), (f64::NAN, 0.1), (1.0, f64::INFINITY)] {
        assert!(matches!(
            advance_serial(&mut u, dx, 3, dt, 1),
            Err(HeatError::InvalidGeometry(_))
        ));
    }
    assert_eq!(u, vec![1.0, 2.0, 3.0]);
}
