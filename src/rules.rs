use crate::variable::LinguisticVariable;

/// Ordered list of single-antecedent rules: `IF input IS a THEN output IS c`
#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, antecedent: impl Into<String>, consequent: impl Into<String>) {
        self.0.push(Rule {
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    /// Rules whose terms both exist in their variables, in their original order.
    ///
    /// A rule naming an unknown term is a partial configuration, not an error,
    /// so it is skipped.
    pub fn eligible<'r>(&'r self, antecedent: &LinguisticVariable, consequent: &LinguisticVariable) -> Vec<&'r Rule> {
        self.0
            .iter()
            .filter(|rule| {
                let eligible =
                    antecedent.contains_term(&rule.antecedent) && consequent.contains_term(&rule.consequent);

                if !eligible {
                    tracing::debug!(
                        antecedent = %rule.antecedent,
                        consequent = %rule.consequent,
                        "skipping rule with unknown term"
                    );
                }

                eligible
            })
            .collect()
    }
}

impl<A: Into<String>, C: Into<String>> FromIterator<(A, C)> for Rules {
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut rules = Rules::with_capacity(iter.size_hint().0);

        for (antecedent, consequent) in iter {
            rules.add(antecedent, consequent);
        }

        rules
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    antecedent: String,
    consequent: String,
}

impl Rule {
    pub fn antecedent(&self) -> &str {
        &self.antecedent
    }

    pub fn consequent(&self) -> &str {
        &self.consequent
    }
}

#[test]
fn test_eligible_rules() {
    let mut temperature = LinguisticVariable::with_default_antecedent_step("temperature");
    let mut heating = LinguisticVariable::with_default_consequent_step("heating");

    temperature
        .add_term("cold", &[(0., 0.), (5., 1.), (10., 1.), (12., 0.)])
        .unwrap();
    temperature
        .add_term("comfortable", &[(18., 0.), (22., 1.), (24., 1.), (26., 0.)])
        .unwrap();
    heating
        .add_term("moderate", &[(5., 0.), (8., 1.), (13., 1.), (16., 0.)])
        .unwrap();
    heating
        .add_term("intense", &[(13., 0.), (18., 1.), (23., 1.), (26., 0.)])
        .unwrap();

    let rules: Rules = [
        ("comfortable", "moderate"),
        ("hot", "weak"),
        ("cold", "intense"),
        ("cold", "scorching"),
    ]
    .into_iter()
    .collect();

    let eligible = rules.eligible(&temperature, &heating);

    assert_eq!(rules.len(), 4);
    assert_eq!(
        eligible
            .iter()
            .map(|r| (r.antecedent(), r.consequent()))
            .collect::<Vec<_>>(),
        vec![("comfortable", "moderate"), ("cold", "intense")]
    );
}
