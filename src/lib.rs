//! Single-input, single-output Mamdani fuzzy inference.
//!
//! A crisp input is fuzzificated against the terms of an antecedent
//! [`LinguisticVariable`], every rule that fires clips its consequent term at
//! its firing strength, the clipped sets are aggregated by pointwise maximum
//! and the result is defuzzificated by centroid.
//!
//! ```
//! use fuzzy_mamdani::{LinguisticVariable, MamdaniInference, Rules};
//!
//! let mut temperature = LinguisticVariable::with_default_antecedent_step("temperature");
//! let mut heating = LinguisticVariable::with_default_consequent_step("heating");
//!
//! temperature.add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12., 0.)])?;
//! heating.add_term("intense", &[(13., 0.), (18., 1.), (23., 1.), (26., 0.)])?;
//!
//! let mut rules = Rules::new();
//! rules.add("cold", "intense");
//!
//! let output = MamdaniInference::default().infer(&temperature, &heating, &rules, 7.)?;
//! assert!((output - 19.926).abs() < 1e-3);
//! # Ok::<(), fuzzy_mamdani::Error>(())
//! ```

mod definition;
mod error;
mod inference;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod universe;
mod variable;

pub use definition::{TermDefinition, VariableDefinition};
pub use error::{Error, Malformation, Result};
pub use inference::{Fuzzification, MamdaniInference};
pub use membership::MembershipFunction;
pub use ops::{aggregate_into, centroid, clip};
pub use outputs::{Activation, Outputs};
pub use rules::{Rule, Rules};
pub use universe::{Samples, Universe};
pub use variable::{LinguisticVariable, DEFAULT_ANTECEDENT_STEP, DEFAULT_CONSEQUENT_STEP, MAX_UNIVERSE_SAMPLES};
