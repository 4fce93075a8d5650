use indexmap::IndexMap;

use crate::error::{Error, Malformation, Result};
use crate::membership::MembershipFunction;
use crate::universe::Universe;

/// Sampling step used for input variables unless overridden
pub const DEFAULT_ANTECEDENT_STEP: f64 = 1.0;
/// Sampling step used for output variables unless overridden
pub const DEFAULT_CONSEQUENT_STEP: f64 = 0.1;
/// Upper bound on the number of samples a universe may hold
pub const MAX_UNIVERSE_SAMPLES: usize = 1 << 22;

/// A named set of linguistic terms sharing one discretized universe.
///
/// The universe isn't supplied by the caller: it spans from the smallest to
/// the largest control point `x` of all registered terms, so every term is
/// within bounds by construction.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    step: f64,
    terms: IndexMap<String, MembershipFunction>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, step: f64) -> Result<Self> {
        let name = name.into();

        if !step.is_finite() || step <= 0. {
            return Err(Error::malformed(name, Malformation::InvalidStep));
        }

        Ok(Self {
            name,
            step,
            terms: IndexMap::new(),
        })
    }

    pub fn with_default_antecedent_step(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            step: DEFAULT_ANTECEDENT_STEP,
            terms: IndexMap::new(),
        }
    }

    pub fn with_default_consequent_step(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            step: DEFAULT_CONSEQUENT_STEP,
            terms: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Registers a trapezoidal term from exactly four control points.
    pub fn add_term(&mut self, name: impl Into<String>, points: &[(f64, f64)]) -> Result<()> {
        let name = name.into();

        if self.terms.contains_key(&name) {
            return Err(Error::malformed(name, Malformation::DuplicateTerm));
        }

        let mf = match MembershipFunction::new(points) {
            Ok(mf) => mf,
            Err(reason) => return Err(Error::malformed(name, reason)),
        };

        // The universe only grows here, so bounding it here bounds every inference pass
        let (min_x, max_x) = mf.points().iter().fold(
            self.bounds().unwrap_or((f64::INFINITY, f64::NEG_INFINITY)),
            |(min, max), (x, _)| (f64::min(min, *x), f64::max(max, *x)),
        );

        if (max_x - min_x) / self.step > MAX_UNIVERSE_SAMPLES as f64 {
            return Err(Error::malformed(name, Malformation::UniverseTooLarge));
        }

        self.terms.insert(name, mf);

        Ok(())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Terms in the order they were added
    pub fn terms(&self) -> impl Iterator<Item = (&str, &MembershipFunction)> {
        self.terms.iter().map(|(name, mf)| (name.as_str(), mf))
    }

    pub fn term(&self, term: &str) -> Result<&MembershipFunction> {
        self.terms.get(term).ok_or_else(|| Error::UnknownTerm {
            variable: self.name.clone(),
            term: term.to_owned(),
        })
    }

    /// Smallest and largest control point `x` across all terms
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.terms
            .values()
            .flat_map(|mf| mf.points().iter().map(|(x, _)| *x))
            .fold(None, |bounds, x| match bounds {
                None => Some((x, x)),
                Some((min, max)) => Some((f64::min(min, x), f64::max(max, x))),
            })
    }

    pub fn universe(&self) -> Universe {
        match self.bounds() {
            Some((min_x, max_x)) => Universe::new(min_x, max_x, self.step),
            None => Universe::empty(self.step),
        }
    }

    pub fn membership(&self, term: &str, x: f64) -> Result<f64> {
        Ok(self.term(term)?.eval(x))
    }

    /// The named term evaluated at every sample of the universe
    pub fn sampled_membership(&self, term: &str) -> Result<Vec<f64>> {
        let mf = self.term(term)?;

        Ok(self.universe().iter().map(|x| mf.eval(x)).collect())
    }
}

#[cfg(test)]
fn temperature() -> LinguisticVariable {
    let mut var = LinguisticVariable::with_default_antecedent_step("temperature");

    var.add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12., 0.)]).unwrap();
    var.add_term("comfortable", &[(18., 0.), (22., 1.), (24., 1.), (26., 0.)])
        .unwrap();
    var
}

#[test]
fn test_universe_from_terms() {
    let var = temperature();

    assert_eq!(var.bounds(), Some((0., 26.)));
    assert_eq!(var.universe().len(), 26);
    assert_eq!(var.universe().iter().last(), Some(25.));
    assert_eq!(
        var.terms().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["cold", "comfortable"]
    );

    let empty = LinguisticVariable::with_default_consequent_step("heating");

    assert_eq!(empty.bounds(), None);
    assert!(empty.universe().is_empty());
}

#[test]
fn test_membership_lookup() {
    let var = temperature();

    assert_eq!(var.membership("cold", 7.).unwrap(), 1.);
    assert_eq!(var.membership("comfortable", 20.).unwrap(), 0.5);
    assert!(matches!(
        var.membership("hot", 30.),
        Err(Error::UnknownTerm { ref variable, ref term }) if variable == "temperature" && term == "hot"
    ));

    let sampled = var.sampled_membership("cold").unwrap();

    assert_eq!(sampled.len(), 26);
    assert_eq!(&sampled[..6], &[0., 0.2, 0.4, 0.6, 0.8, 1.]);
    assert_eq!(sampled[11], 0.5);
    assert!(sampled[12..].iter().all(|m| *m == 0.));
}

#[test]
fn test_rejects_bad_definitions() {
    let mut var = temperature();

    assert!(matches!(
        var.add_term("cold", &[(0., 0.), (1., 1.), (2., 1.), (3., 0.)]),
        Err(Error::MalformedDefinition {
            reason: Malformation::DuplicateTerm,
            ..
        })
    ));
    assert!(matches!(
        var.add_term("hot", &[(0., 0.), (24., 0.), (26., 1.), (40., 1.), (50., 0.)]),
        Err(Error::MalformedDefinition {
            reason: Malformation::TooManyPoints(5),
            ..
        })
    ));
    // A rejected term leaves the variable untouched
    assert!(!var.contains_term("hot"));
    assert_eq!(var.bounds(), Some((0., 26.)));

    for step in [0., -1., f64::NAN, f64::INFINITY] {
        assert!(matches!(
            LinguisticVariable::new("temperature", step),
            Err(Error::MalformedDefinition {
                reason: Malformation::InvalidStep,
                ..
            })
        ));
    }
}

#[test]
fn test_rejects_oversized_universe() {
    let mut var = LinguisticVariable::new("c", 1e-300).unwrap();

    assert!(matches!(
        var.add_term("mid", &[(0., 0.), (1., 1.), (2., 1.), (3., 0.)]),
        Err(Error::MalformedDefinition {
            reason: Malformation::UniverseTooLarge,
            ..
        })
    ));
    assert!(var.universe().is_empty());

    // A term that fits on its own can still overflow the shared universe
    let mut var = LinguisticVariable::new("c", 1e-6).unwrap();

    var.add_term("narrow", &[(0., 0.), (0.5, 1.), (1., 1.), (1.5, 0.)]).unwrap();
    assert!(matches!(
        var.add_term("far", &[(1e3, 0.), (1e3, 1.), (2e3, 1.), (3e3, 0.)]),
        Err(Error::MalformedDefinition {
            reason: Malformation::UniverseTooLarge,
            ..
        })
    ));
    assert_eq!(var.bounds(), Some((0., 1.5)));
    assert_eq!(var.universe().len(), 1_500_000);
}
