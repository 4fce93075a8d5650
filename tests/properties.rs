//! Property tests for membership evaluation, aggregation and defuzzification.

use fuzzy_mamdani::{centroid, Error, LinguisticVariable, MamdaniInference, MembershipFunction, Rules};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Four ascending control points with arbitrary degrees.
fn arb_points() -> impl Strategy<Value = [(f64, f64); 4]> {
    (
        prop::collection::vec(-100.0..100.0f64, 4),
        prop::collection::vec(0.0..=1.0f64, 4),
    )
        .prop_map(|(mut xs, ys)| {
            xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
            [(xs[0], ys[0]), (xs[1], ys[1]), (xs[2], ys[2]), (xs[3], ys[3])]
        })
}

/// An antecedent term whose plateau covers zero at height `h`.
fn arb_covering_term() -> impl Strategy<Value = [(f64, f64); 4]> {
    (0.1..10.0f64, 0.1..10.0f64, 0.1..10.0f64, 0.1..10.0f64, 0.05..=1.0f64)
        .prop_map(|(a, b, c, d, h)| [(-a - b, 0.), (-a, h), (c, h), (c + d, 0.)])
}

/// A consequent term somewhere in `[0, 80]`.
fn arb_consequent_term() -> impl Strategy<Value = [(f64, f64); 4]> {
    (0.0..50.0f64, 0.1..10.0f64, 0.1..10.0f64, 0.1..10.0f64)
        .prop_map(|(s, w1, w2, w3)| [(s, 0.), (s + w1, 1.), (s + w1 + w2, 1.), (s + w1 + w2 + w3, 0.)])
}

fn arb_rule_terms() -> impl Strategy<Value = Vec<([(f64, f64); 4], [(f64, f64); 4])>> {
    prop::collection::vec((arb_covering_term(), arb_consequent_term()), 1..6)
}

fn build(terms: &[([(f64, f64); 4], [(f64, f64); 4])]) -> (LinguisticVariable, LinguisticVariable) {
    let mut antecedent = LinguisticVariable::new("input", 0.5).unwrap();
    let mut consequent = LinguisticVariable::new("output", 0.25).unwrap();

    for (i, (a, c)) in terms.iter().enumerate() {
        antecedent.add_term(format!("a{i}"), a).unwrap();
        consequent.add_term(format!("c{i}"), c).unwrap();
    }

    (antecedent, consequent)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn membership_is_zero_outside_support(points in arb_points(), offset in 0.001..100.0f64) {
        let mf = MembershipFunction::new(&points).unwrap();
        let (x0, x3) = mf.support();

        prop_assert_eq!(mf.eval(x0 - offset), 0.);
        prop_assert_eq!(mf.eval(x3 + offset), 0.);
    }

    #[test]
    fn membership_stays_within_unit_interval(points in arb_points(), x in -120.0..120.0f64) {
        let mu = MembershipFunction::new(&points).unwrap().eval(x);

        prop_assert!((0. ..=1.).contains(&mu));
    }

    #[test]
    fn plateau_interpolates_between_degrees(points in arb_points(), t in 0.0..=1.0f64) {
        let mf = MembershipFunction::new(&points).unwrap();
        let [_, (x1, y1), (x2, y2), _] = points;
        prop_assume!(x2 - x1 > 1e-6);

        let x = (x1 + t * (x2 - x1)).clamp(x1, x2);
        let expected = y1 + (x - x1) * (y2 - y1) / (x2 - x1);

        prop_assert!((mf.eval(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn flat_plateau_is_full_membership(x0 in -50.0..0.0f64, w in 0.1..50.0f64, t in 0.0..=1.0f64) {
        let mf = MembershipFunction::new(&[(x0, 0.), (0., 1.), (w, 1.), (w + 1., 0.)]).unwrap();

        prop_assert_eq!(mf.eval(t * w), 1.);
    }

    #[test]
    fn rule_order_never_changes_the_output(
        (terms, shuffled) in arb_rule_terms().prop_flat_map(|terms| {
            let order: Vec<usize> = (0..terms.len()).collect();
            (Just(terms), Just(order).prop_shuffle())
        })
    ) {
        let (antecedent, consequent) = build(&terms);
        let rules: Rules = (0..terms.len()).map(|i| (format!("a{i}"), format!("c{i}"))).collect();
        let permuted: Rules = shuffled.iter().map(|i| (format!("a{i}"), format!("c{i}"))).collect();
        let model = MamdaniInference::default();

        let a = model.eval(&antecedent, &consequent, &rules, 0.).unwrap();
        let b = model.eval(&antecedent, &consequent, &permuted, 0.).unwrap();

        prop_assert_eq!(a.aggregated(), b.aggregated());
        prop_assert_eq!(a.crisp(), b.crisp());
    }

    #[test]
    fn centroid_is_scale_invariant(
        membership in prop::collection::vec(0.0..=1.0f64, 2..200),
        scale in 0.01..100.0f64,
    ) {
        prop_assume!(membership.iter().sum::<f64>() > 1e-6);

        let universe: Vec<f64> = (0..membership.len()).map(|i| i as f64 * 0.1).collect();
        let scaled: Vec<f64> = membership.iter().map(|m| m * scale).collect();

        let original = centroid(&universe, &membership).unwrap();
        let rescaled = centroid(&universe, &scaled).unwrap();

        prop_assert!((original - rescaled).abs() <= 1e-9 * original.abs().max(1.));
    }

    #[test]
    fn input_outside_all_supports_has_empty_output(terms in arb_rule_terms(), offset in 0.001..100.0f64) {
        let (antecedent, consequent) = build(&terms);
        let rules: Rules = (0..terms.len()).map(|i| (format!("a{i}"), format!("c{i}"))).collect();
        let (min_x, max_x) = antecedent.bounds().unwrap();
        let model = MamdaniInference::default();

        for input in [min_x - offset, max_x + offset] {
            prop_assert!(matches!(
                model.infer(&antecedent, &consequent, &rules, input),
                Err(Error::EmptyOutputRegion)
            ));
        }
    }
}
