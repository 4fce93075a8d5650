use crate::error::Malformation;

/// A trapezoidal membership function built from four `(x, y)` control points.
///
/// The shape rises from `y0` to `y1` over `[x0, x1]`, interpolates between
/// `y1` and `y2` over `[x1, x2]` and falls from `y2` to `y3` over `[x2, x3]`.
/// Outside of `[x0, x3]` the degree is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembershipFunction {
    points: [(f64, f64); 4],
}

impl MembershipFunction {
    /// Exactly four points are accepted. Extra points are rejected rather than
    /// truncated so a richer shape is never silently cut short.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, Malformation> {
        let points: [(f64, f64); 4] = match points.len() {
            4 => [points[0], points[1], points[2], points[3]],
            n if n < 4 => return Err(Malformation::TooFewPoints(n)),
            n => return Err(Malformation::TooManyPoints(n)),
        };

        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Malformation::NonFinite);
        }
        if points.iter().any(|(_, y)| !(0. ..=1.).contains(y)) {
            return Err(Malformation::DegreeOutOfRange);
        }
        if points.windows(2).any(|w| w[0].0 > w[1].0) {
            return Err(Malformation::Unordered);
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64); 4] {
        &self.points
    }

    /// The closed interval outside of which the degree is always zero
    pub fn support(&self) -> (f64, f64) {
        (self.points[0].0, self.points[3].0)
    }

    /// Degree of membership of `x`, always within `[0, 1]`
    pub fn eval(&self, x: f64) -> f64 {
        let [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] = self.points;

        if x < x0 || x > x3 {
            return 0.;
        }

        // Checked before the edges so a vertical shoulder steps straight to the plateau
        if x1 <= x && x <= x2 {
            return if x1 == x2 { y1 } else { lerp(x, (x1, y1), (x2, y2)) };
        }

        // Only the end points themselves are left outside the ramps
        if x == x0 || x == x3 {
            0.
        } else if x < x1 {
            lerp(x, (x0, y0), (x1, y1))
        } else {
            lerp(x, (x2, y2), (x3, y3))
        }
    }
}

#[inline]
fn lerp(x: f64, (xa, ya): (f64, f64), (xb, yb): (f64, f64)) -> f64 {
    // Rounding may overshoot an endpoint by an ulp
    (ya + (x - xa) * (yb - ya) / (xb - xa)).clamp(f64::min(ya, yb), f64::max(ya, yb))
}

#[test]
fn test_trapezoid() {
    let cold = MembershipFunction::new(&[(0., 0.), (5., 1.), (10., 1.), (12., 0.)]).unwrap();

    assert_eq!(cold.eval(-1.), 0.);
    assert_eq!(cold.eval(0.), 0.);
    assert_eq!(cold.eval(2.5), 0.5);
    assert_eq!(cold.eval(5.), 1.);
    assert_eq!(cold.eval(7.), 1.);
    assert_eq!(cold.eval(10.), 1.);
    assert_eq!(cold.eval(11.), 0.5);
    assert_eq!(cold.eval(12.), 0.);
    assert_eq!(cold.eval(15.), 0.);
    assert_eq!(cold.support(), (0., 12.));
}

#[test]
fn test_shoulders() {
    // Left shoulder: vertical rise at x = 0
    let weak = MembershipFunction::new(&[(0., 0.), (0., 1.), (5., 1.), (8., 0.)]).unwrap();

    assert_eq!(weak.eval(0.), 1.);
    assert_eq!(weak.eval(6.5), 0.5);
    assert_eq!(weak.eval(-0.1), 0.);

    // Right shoulder: vertical fall at x = 10
    let high = MembershipFunction::new(&[(2., 0.), (4., 1.), (10., 1.), (10., 0.)]).unwrap();

    assert_eq!(high.eval(10.), 1.);
    assert_eq!(high.eval(10.01), 0.);
    assert_eq!(high.eval(3.), 0.5);
}

#[test]
fn test_sloped_plateau() {
    let mf = MembershipFunction::new(&[(0., 0.), (1., 0.2), (3., 0.8), (4., 0.)]).unwrap();

    assert!((mf.eval(2.) - 0.5).abs() < 1e-12);
    assert!((mf.eval(0.5) - 0.1).abs() < 1e-12);
    assert!((mf.eval(3.5) - 0.4).abs() < 1e-12);
}

#[test]
fn test_malformed_points() {
    let five = [(0., 0.), (24., 0.), (26., 1.), (40., 1.), (50., 0.)];

    assert_eq!(MembershipFunction::new(&five), Err(Malformation::TooManyPoints(5)));
    assert_eq!(MembershipFunction::new(&five[..3]), Err(Malformation::TooFewPoints(3)));
    assert_eq!(
        MembershipFunction::new(&[(0., 0.), (5., 1.), (4., 1.), (12., 0.)]),
        Err(Malformation::Unordered)
    );
    assert_eq!(
        MembershipFunction::new(&[(0., 0.), (5., 1.5), (10., 1.), (12., 0.)]),
        Err(Malformation::DegreeOutOfRange)
    );
    assert_eq!(
        MembershipFunction::new(&[(f64::NAN, 0.), (5., 1.), (10., 1.), (12., 0.)]),
        Err(Malformation::NonFinite)
    );
}
