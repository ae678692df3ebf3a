use crate::domain::Geometry;

/// Three point Forward Euler stencil for the heat equation.
/// Every update in this crate is evaluated as
/// `middle + nu * (left - 2.0 * middle + right)`,
/// serial and distributed kernels agree bit for bit only because they
/// share this order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatStencil {
    nu: f64,
}

impl HeatStencil {
    pub fn new(nu: f64) -> Self {
        HeatStencil { nu }
    }

    pub fn from_geometry(geometry: &Geometry) -> Self {
        HeatStencil::new(geometry.nu())
    }

    #[inline]
    pub fn apply(&self, left: f64, middle: f64, right: f64) -> f64 {
        middle + self.nu * (left - 2.0 * middle + right)
    }

    /// Write `output[1..n-1]` from `input`, touching neither edge.
    /// Empty when `n < 3`.
    pub fn apply_interior(&self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), output.len());
        let n = input.len();
        if n < 3 {
            return;
        }
        for (o, w) in output[1..n - 1].iter_mut().zip(input.windows(3)) {
            *o = self.apply(w[0], w[1], w[2]);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn apply_test() {
        let s = HeatStencil::new(0.25);
        assert_approx_eq!(f64, s.apply(0.0, 1.0, 0.0), 0.5);
        assert_approx_eq!(f64, s.apply(1.0, 0.0, 0.0), 0.25);
        assert_approx_eq!(f64, s.apply(3.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn interior_leaves_edges() {
        let s = HeatStencil::new(0.25);
        let input = [0.0, 0.0, 1.0, 0.0, 0.0];
        let mut output = [-1.0; 5];
        s.apply_interior(&input, &mut output);
        assert_eq!(output, [-1.0, 0.25, 0.5, 0.25, -1.0]);
    }

    #[test]
    fn interior_empty_for_two_points() {
        let s = HeatStencil::new(0.25);
        let input = [1.0, 2.0];
        let mut output = [-1.0; 2];
        s.apply_interior(&input, &mut output);
        assert_eq!(output, [-1.0, -1.0]);
    }

    #[test]
    fn from_geometry_test() {
        let g = Geometry::new(0.5, 4, 0.05, 1).unwrap();
        let s = HeatStencil::from_geometry(&g);
        assert_eq!(s, HeatStencil::new(g.nu()));
    }
}
