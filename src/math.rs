use num::Float;

/// Linearly interpolates `x` on a sampled curve given as `(xp, fp)` pairs with
/// ascending `xp`. Points outside of the sampled range map to zero, so a curve
/// only contributes where it was actually sampled.
pub(crate) fn interp_zero_outside<F: Float>(x: F, coords: impl IntoIterator<Item = (F, F)>) -> F {
    let mut iter = coords.into_iter().peekable();
    let mut first = true;

    while let Some((x1, y1)) = iter.next() {
        if first && x < x1 {
            return F::zero();
        }
        first = false;

        let Some(&(x2, y2)) = iter.peek() else {
            // Last sample: only an exact hit lands on the curve
            return if x == x1 { y1 } else { F::zero() };
        };

        if x1 <= x && x <= x2 {
            if x2 == x1 {
                return y1;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    F::zero()
}

#[test]
fn test_interp_zero_outside() {
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];
    let coords = || xs.into_iter().zip(ys);

    assert_eq!(interp_zero_outside(0., coords()), 0.);
    assert_eq!(interp_zero_outside(1., coords()), 3.);
    assert_eq!(interp_zero_outside(1.5, coords()), 2.5);
    assert_eq!(interp_zero_outside(2.72, coords()), 0.5599999999999996);
    assert_eq!(interp_zero_outside(3., coords()), 0.);
    assert_eq!(interp_zero_outside(3.24, coords()), 0.);

    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];

    assert_eq!(interp_zero_outside(2.5, xs.into_iter().zip(ys)), 4.);
    assert_eq!(interp_zero_outside(-1., xs.into_iter().zip(ys)), 0.);
    assert_eq!(interp_zero_outside(4.5, xs.into_iter().zip(ys)), 2.);
    assert_eq!(interp_zero_outside(7.5, xs.into_iter().zip(ys)), 0.);
    assert_eq!(interp_zero_outside::<f64>(1., std::iter::empty()), 0.);
}
