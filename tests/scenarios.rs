use fuzzy_mamdani::{centroid, Error, LinguisticVariable, Malformation, MamdaniInference, Rules, VariableDefinition};

fn cold_to_intense() -> (LinguisticVariable, LinguisticVariable, Rules) {
    let mut temperature = LinguisticVariable::with_default_antecedent_step("temperature");
    let mut heating = LinguisticVariable::with_default_consequent_step("heating");

    temperature
        .add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12., 0.)])
        .unwrap();
    heating
        .add_term("intense", &[(13., 0.), (18., 1.), (23., 1.), (26., 0.)])
        .unwrap();

    let mut rules = Rules::new();

    rules.add("cold", "intense");

    (temperature, heating, rules)
}

#[test]
fn test_input_outside_support_has_empty_output() {
    let (temperature, heating, rules) = cold_to_intense();

    assert_eq!(temperature.membership("cold", 15.).unwrap(), 0.);
    assert!(matches!(
        MamdaniInference::default().infer(&temperature, &heating, &rules, 15.),
        Err(Error::EmptyOutputRegion)
    ));
}

#[test]
fn test_full_strength_keeps_consequent_unchanged() {
    let (temperature, heating, rules) = cold_to_intense();
    let outputs = MamdaniInference::default()
        .eval(&temperature, &heating, &rules, 7.)
        .unwrap();

    assert_eq!(outputs.activations().len(), 1);
    assert_eq!(outputs.activations()[0].strength, 1.);
    assert_eq!(outputs.aggregated(), &heating.sampled_membership("intense").unwrap()[..]);

    // Weighted centroid of the trapezoid sampled every 0.1 over [13, 26)
    assert!((outputs.crisp() - 19.925925925925927).abs() < 1e-9);
    assert!(outputs.crisp() > 18. && outputs.crisp() < 23.);
}

#[test]
fn test_two_rules_weighted_toward_stronger() {
    let mut level = LinguisticVariable::with_default_antecedent_step("level");
    let mut valve = LinguisticVariable::with_default_consequent_step("valve");

    level.add_term("low", &[(0., 0.), (0., 1.), (10., 1.), (20., 0.)]).unwrap();
    level.add_term("high", &[(10., 0.), (20., 1.), (30., 1.), (30., 0.)]).unwrap();
    valve.add_term("shut", &[(0., 0.), (2., 1.), (4., 1.), (6., 0.)]).unwrap();
    valve.add_term("open", &[(10., 0.), (12., 1.), (14., 1.), (16., 0.)]).unwrap();

    let mut rules = Rules::new();

    rules.add("low", "shut");
    rules.add("high", "open");

    let outputs = MamdaniInference::default().eval(&level, &valve, &rules, 17.).unwrap();
    let strengths: Vec<f64> = outputs.activations().iter().map(|a| a.strength).collect();

    assert_eq!(strengths.len(), 2);
    assert!((strengths[0] - 0.3).abs() < 1e-12);
    assert!((strengths[1] - 0.7).abs() < 1e-12);

    let universe: Vec<f64> = valve.universe().iter().collect();
    let shut = centroid(&universe, &valve.sampled_membership("shut").unwrap()).unwrap();
    let open = centroid(&universe, &valve.sampled_membership("open").unwrap()).unwrap();
    let crisp = outputs.crisp();

    assert!(shut < crisp && crisp < open);
    assert!(crisp > (shut + open) / 2.);
}

#[test]
fn test_failed_call_can_be_retried() {
    let (temperature, heating, rules) = cold_to_intense();
    let model = MamdaniInference::default();

    assert!(model.infer(&temperature, &heating, &rules, 15.).is_err());

    let output = model.infer(&temperature, &heating, &rules, 7.).unwrap();

    assert!((output - 19.925925925925927).abs() < 1e-9);
    assert!(model.infer(&temperature, &heating, &rules, 15.).is_err());
}

#[test]
fn test_unknown_terms_are_skipped() {
    let (temperature, heating, mut rules) = cold_to_intense();

    rules.add("freezing", "intense");
    rules.add("cold", "scorching");

    let outputs = MamdaniInference::default()
        .eval(&temperature, &heating, &rules, 7.)
        .unwrap();

    assert_eq!(outputs.activations().len(), 1);
    assert!((outputs.crisp() - 19.925925925925927).abs() < 1e-9);

    let mut only_unknown = Rules::new();

    only_unknown.add("freezing", "intense");

    assert!(matches!(
        MamdaniInference::default().infer(&temperature, &heating, &only_unknown, 7.),
        Err(Error::EmptyOutputRegion)
    ));
}

#[test]
fn test_concurrent_inference_shares_definitions() {
    let (temperature, heating, rules) = cold_to_intense();
    let model = MamdaniInference::default();
    let inputs: Vec<f64> = (0..16).map(|i| i as f64 * 0.75).collect();

    let sequential: Vec<_> = inputs
        .iter()
        .map(|x| model.infer(&temperature, &heating, &rules, *x).ok())
        .collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|x| scope.spawn(|| model.infer(&temperature, &heating, &rules, *x).ok()))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
    // x = 0 is on the support's edge, everything else fires
    assert_eq!(sequential[0], None);
    assert!(sequential[1..].iter().all(Option::is_some));
}

#[test]
fn test_too_fine_step_is_a_definition_error() {
    let json = r#"{"c": [{"id": "mid", "points": [[0, 0], [1, 1], [2, 1], [3, 0]]}]}"#;
    let err = VariableDefinition::from_json(json)
        .unwrap()
        .into_variable(1e-300)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedDefinition {
            reason: Malformation::UniverseTooLarge,
            ..
        }
    ));

    // A fine step that stays within the limit still infers
    let (temperature, _, rules) = cold_to_intense();
    let heating = VariableDefinition::from_json(
        r#"{"heating": [{"id": "intense", "points": [[13, 0], [18, 1], [23, 1], [26, 0]]}]}"#,
    )
    .unwrap()
    .into_variable(1e-5)
    .unwrap();
    let output = MamdaniInference::default()
        .infer(&temperature, &heating, &rules, 7.)
        .unwrap();

    assert!((output - 19.93).abs() < 0.1);
}
