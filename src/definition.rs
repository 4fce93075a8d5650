//! Definition documents for variables and rules.
//!
//! A variable document is a JSON object holding a single variable, keyed by
//! its name:
//!
//! ```json
//! { "temperature": [
//!     { "id": "cold", "points": [[0, 0], [5, 1], [10, 1], [12, 0]] }
//! ] }
//! ```
//!
//! A rules document is a list of `[antecedent_term, consequent_term]` pairs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Malformation, Result};
use crate::rules::Rules;
use crate::variable::LinguisticVariable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermDefinition {
    pub id: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub terms: Vec<TermDefinition>,
}

impl VariableDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        let document: IndexMap<String, Vec<TermDefinition>> = serde_json::from_str(json)?;
        let mut variables = document.into_iter();

        match (variables.next(), variables.next()) {
            (Some((name, terms)), None) => Ok(Self { name, terms }),
            (first, _) => {
                let name = first.map(|(name, _)| name).unwrap_or_default();

                Err(Error::malformed(name, Malformation::DocumentShape))
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut document = IndexMap::with_capacity(1);

        document.insert(&self.name, &self.terms);

        Ok(serde_json::to_string(&document)?)
    }

    /// Builds the variable, failing on the first malformed term
    pub fn into_variable(self, step: f64) -> Result<LinguisticVariable> {
        let mut var = LinguisticVariable::new(self.name, step)?;

        for term in self.terms {
            let points: Vec<(f64, f64)> = term.points.iter().map(|[x, y]| (*x, *y)).collect();

            var.add_term(term.id, &points)?;
        }

        Ok(var)
    }
}

impl Rules {
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Vec<[String; 2]> = serde_json::from_str(json)?;

        Ok(document
            .into_iter()
            .map(|[antecedent, consequent]| (antecedent, consequent))
            .collect())
    }
}

#[test]
fn test_variable_document() {
    let json = r#"{
        "temperature": [
            {"id": "cold", "points": [[0, 0], [5, 1], [10, 1], [12, 0]]},
            {"id": "comfortable", "points": [[18, 0], [22, 1], [24, 1], [26, 0]]}
        ]
    }"#;
    let definition = VariableDefinition::from_json(json).unwrap();

    assert_eq!(definition.name, "temperature");
    assert_eq!(definition.terms[1].id, "comfortable");
    assert_eq!(definition.terms[1].points[1], [22., 1.]);

    let reparsed = VariableDefinition::from_json(&definition.to_json().unwrap()).unwrap();

    assert_eq!(reparsed, definition);

    let var = definition.into_variable(1.).unwrap();

    assert_eq!(var.name(), "temperature");
    assert_eq!(var.membership("cold", 11.).unwrap(), 0.5);
    assert_eq!(var.universe().len(), 26);
}

#[test]
fn test_malformed_documents() {
    assert!(matches!(VariableDefinition::from_json("[1, 2]"), Err(Error::Json(_))));
    assert!(matches!(
        VariableDefinition::from_json(r#"{"a": [], "b": []}"#),
        Err(Error::MalformedDefinition {
            reason: Malformation::DocumentShape,
            ..
        })
    ));
    assert!(matches!(
        VariableDefinition::from_json("{}"),
        Err(Error::MalformedDefinition {
            reason: Malformation::DocumentShape,
            ..
        })
    ));

    let hot = r#"{"temperature": [
        {"id": "hot", "points": [[0, 0], [24, 0], [26, 1], [40, 1], [50, 0]]}
    ]}"#;
    let err = VariableDefinition::from_json(hot)
        .unwrap()
        .into_variable(1.)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedDefinition { ref term, reason: Malformation::TooManyPoints(5) } if term == "hot"
    ));
}

#[test]
fn test_rules_document() {
    let rules = Rules::from_json(r#"[["cold", "intense"], ["comfortable", "moderate"]]"#).unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules.iter().nth(1).map(|r| r.antecedent()), Some("comfortable"));
    assert!(matches!(Rules::from_json(r#"[["cold"]]"#), Err(Error::Json(_))));
}
