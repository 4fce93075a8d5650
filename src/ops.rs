use std::iter::Sum;

use num::Float;

/// Mamdani implication: clips a consequent membership at the firing strength.
pub fn clip<F: Float>(strength: F, membership: impl IntoIterator<Item = F>) -> impl Iterator<Item = F> {
    membership.into_iter().map(move |m| F::min(strength, m))
}

/// Aggregates a clipped set into the running output set by pointwise maximum.
///
/// Max is commutative and associative, so the order rules are folded in
/// never changes the result.
pub fn aggregate_into<F: Float>(aggregated: &mut [F], clipped: impl IntoIterator<Item = F>) {
    for (agg, c) in aggregated.iter_mut().zip(clipped) {
        *agg = F::max(*agg, c);
    }
}

/// Centroid of a sampled fuzzy set: `Σ(x·μ) / Σμ`.
///
/// Returns `None` when the set has no mass.
pub fn centroid<F: Float + Sum>(universe: &[F], membership: &[F]) -> Option<F> {
    let den = membership.iter().copied().sum::<F>();

    if den <= F::zero() {
        return None;
    }

    let num = universe
        .iter()
        .copied()
        .zip(membership.iter().copied())
        .map(|(x, m)| x * m)
        .sum::<F>();

    Some(num / den)
}

#[test]
fn test_clip() {
    let clipped: Vec<f64> = clip(0.5, [0., 0.25, 0.75, 1.]).collect();

    assert_eq!(clipped, vec![0., 0.25, 0.5, 0.5]);
}

#[test]
fn test_aggregate_into() {
    let mut agg = vec![0.; 4];

    aggregate_into(&mut agg, [0.1, 0.5, 0., 0.]);
    aggregate_into(&mut agg, [0., 0.2, 0.7, 0.]);

    assert_eq!(agg, vec![0.1, 0.5, 0.7, 0.]);
}

#[test]
fn test_centroid() {
    let universe = [0., 1., 2., 3., 4.];

    assert_eq!(centroid(&universe, &[0., 1., 1., 1., 0.]), Some(2.));
    assert_eq!(centroid(&universe, &[1., 0., 0., 0., 1.]), Some(2.));
    assert_eq!(centroid(&universe, &[0., 0., 0., 0., 1.]), Some(4.));
    assert_eq!(centroid(&universe, &[0.; 5]), None);
    assert_eq!(centroid::<f64>(&[], &[]), None);
}
