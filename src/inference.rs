use crate::error::{Error, Result};
use crate::math::interp_zero_outside;
use crate::ops::{aggregate_into, centroid, clip};
use crate::outputs::{Activation, Outputs};
use crate::rules::Rules;
use crate::variable::LinguisticVariable;

/// How the crisp input's firing strength is read off an antecedent term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fuzzification {
    /// Evaluate the trapezoid at the input directly
    #[default]
    Exact,
    /// Interpolate the term over the antecedent universe samples, reading zero
    /// outside of the sampled range. The antecedent step then governs precision.
    Sampled,
}

/// Single-input, single-output Mamdani inference: min implication, max
/// aggregation and centroid defuzzification.
///
/// The engine only holds configuration. Variables and rules are borrowed
/// read-only for each call, so one set of definitions can be shared across
/// threads and a failed call can be retried with another input as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct MamdaniInference {
    fuzzification: Fuzzification,
}

impl MamdaniInference {
    pub fn new(fuzzification: Fuzzification) -> Self {
        Self { fuzzification }
    }

    pub fn fuzzification(&self) -> Fuzzification {
        self.fuzzification
    }

    pub fn eval(
        &self,
        antecedent: &LinguisticVariable,
        consequent: &LinguisticVariable,
        rules: &Rules,
        crisp_input: f64,
    ) -> Result<Outputs> {
        if !crisp_input.is_finite() {
            return Err(Error::InvalidInput(crisp_input));
        }

        // Fuzzificate the input and keep only the rules that fire
        let antecedent_universe = antecedent.universe();
        let mut activations = Vec::new();

        for rule in rules.eligible(antecedent, consequent) {
            let mf = antecedent.term(rule.antecedent())?;
            let strength = match self.fuzzification {
                Fuzzification::Exact => mf.eval(crisp_input),
                Fuzzification::Sampled => {
                    interp_zero_outside(crisp_input, antecedent_universe.iter().map(|x| (x, mf.eval(x))))
                },
            };

            tracing::trace!(
                antecedent = rule.antecedent(),
                consequent = rule.consequent(),
                strength,
                "rule fuzzificated"
            );

            if strength > 0. {
                activations.push(Activation {
                    antecedent: rule.antecedent().to_owned(),
                    consequent: rule.consequent().to_owned(),
                    strength,
                });
            }
        }

        // Clip each fired consequent and fold it into the output set
        let universe: Vec<f64> = consequent.universe().iter().collect();
        let mut aggregated = vec![0.; universe.len()];

        for activation in &activations {
            let mf = consequent.term(&activation.consequent)?;

            aggregate_into(
                &mut aggregated,
                clip(activation.strength, universe.iter().map(|x| mf.eval(*x))),
            );
        }

        // Defuzzificate
        let Some(crisp) = centroid(&universe, &aggregated) else {
            tracing::debug!(
                input = crisp_input,
                fired = activations.len(),
                "output region is empty"
            );
            return Err(Error::EmptyOutputRegion);
        };

        tracing::debug!(input = crisp_input, output = crisp, fired = activations.len(), "inference complete");

        Ok(Outputs::new(crisp, universe, aggregated, activations))
    }

    /// Same as [`eval`](Self::eval), returning only the crisp output.
    pub fn infer(
        &self,
        antecedent: &LinguisticVariable,
        consequent: &LinguisticVariable,
        rules: &Rules,
        crisp_input: f64,
    ) -> Result<f64> {
        self.eval(antecedent, consequent, rules, crisp_input)
            .map(|outputs| outputs.crisp())
    }
}

#[cfg(test)]
fn thermostat() -> (LinguisticVariable, LinguisticVariable, Rules) {
    let mut temperature = LinguisticVariable::with_default_antecedent_step("temperature");
    let mut heating = LinguisticVariable::with_default_consequent_step("heating");

    temperature
        .add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12., 0.)])
        .unwrap();
    temperature
        .add_term("comfortable", &[(18., 0.), (22., 1.), (24., 1.), (26., 0.)])
        .unwrap();
    temperature
        .add_term("hot", &[(24., 0.), (26., 1.), (40., 1.), (50., 0.)])
        .unwrap();
    heating.add_term("weak", &[(0., 0.), (0., 1.), (5., 1.), (8., 0.)]).unwrap();
    heating
        .add_term("moderate", &[(5., 0.), (8., 1.), (13., 1.), (16., 0.)])
        .unwrap();
    heating
        .add_term("intense", &[(13., 0.), (18., 1.), (23., 1.), (26., 0.)])
        .unwrap();

    let mut rules = Rules::with_capacity(3);

    rules.add("cold", "intense");
    rules.add("comfortable", "moderate");
    rules.add("hot", "weak");

    (temperature, heating, rules)
}

#[test]
fn test_thermostat() {
    let (temperature, heating, rules) = thermostat();
    let model = MamdaniInference::default();

    let cases = [
        (7., 19.925925925925924),
        (11., 19.73484848484848),
        (20., 10.499999999999998),
        (25., 7.606100217864926),
        (30., 3.282188295165394),
        (25.5, 5.71721501390176),
    ];

    for (input, expected) in cases {
        let output = model.infer(&temperature, &heating, &rules, input).unwrap();

        assert!((output - expected).abs() < 1e-9, "input {input}: {output} != {expected}");
    }

    // Between the supports of `cold` and `comfortable` nothing fires
    assert!(matches!(
        model.infer(&temperature, &heating, &rules, 15.),
        Err(Error::EmptyOutputRegion)
    ));
}

#[test]
fn test_outputs_expose_activations() {
    let (temperature, heating, rules) = thermostat();
    let outputs = MamdaniInference::default()
        .eval(&temperature, &heating, &rules, 25.)
        .unwrap();

    assert_eq!(
        outputs.activations(),
        &[
            Activation {
                antecedent: "comfortable".into(),
                consequent: "moderate".into(),
                strength: 0.5,
            },
            Activation {
                antecedent: "hot".into(),
                consequent: "weak".into(),
                strength: 0.5,
            },
        ]
    );
    assert_eq!(outputs.universe().len(), 260);
    assert_eq!(outputs.aggregated().len(), 260);
    assert!(outputs.aggregated().iter().all(|m| *m <= 0.5));
    // Nothing from `intense` leaks into the output
    assert!(outputs.aggregated()[170..].iter().all(|m| *m == 0.));
}

#[test]
fn test_sampled_fuzzification() {
    let mut temperature = LinguisticVariable::with_default_antecedent_step("temperature");
    let mut heating = LinguisticVariable::with_default_consequent_step("heating");

    temperature
        .add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12.5, 0.)])
        .unwrap();
    temperature
        .add_term("comfortable", &[(18., 0.), (22., 1.), (24., 1.), (26., 0.)])
        .unwrap();
    heating
        .add_term("intense", &[(13., 0.), (18., 1.), (23., 1.), (26., 0.)])
        .unwrap();

    let mut rules = Rules::new();

    rules.add("cold", "intense");
    rules.add("comfortable", "intense");

    let exact = MamdaniInference::new(Fuzzification::Exact);
    let sampled = MamdaniInference::new(Fuzzification::Sampled);

    // Inside the support both readings agree up to sampling
    let outputs = exact.eval(&temperature, &heating, &rules, 12.2).unwrap();

    assert!((outputs.activations()[0].strength - 0.12).abs() < 1e-12);

    let outputs = sampled.eval(&temperature, &heating, &rules, 12.2).unwrap();

    assert!((outputs.activations()[0].strength - 0.16).abs() < 1e-12);

    // 12.7 sits past the support of `cold` but between the samples 12 and 13
    assert!(matches!(
        exact.eval(&temperature, &heating, &rules, 12.7),
        Err(Error::EmptyOutputRegion)
    ));

    let outputs = sampled.eval(&temperature, &heating, &rules, 12.7).unwrap();

    assert_eq!(outputs.activations().len(), 1);
    assert_eq!(outputs.activations()[0].antecedent, "cold");
    assert!((outputs.activations()[0].strength - 0.06).abs() < 1e-12);

    // 25.5 is inside `comfortable` but past the last universe sample
    let outputs = exact.eval(&temperature, &heating, &rules, 25.5).unwrap();

    assert_eq!(outputs.activations()[0].strength, 0.25);
    assert!(matches!(
        sampled.eval(&temperature, &heating, &rules, 25.5),
        Err(Error::EmptyOutputRegion)
    ));
}

#[test]
fn test_invalid_input() {
    let (temperature, heating, rules) = thermostat();
    let model = MamdaniInference::default();

    assert!(matches!(
        model.infer(&temperature, &heating, &rules, f64::NAN),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        model.infer(&temperature, &heating, &rules, f64::INFINITY),
        Err(Error::InvalidInput(_))
    ));
}
