/// A rule that fired during inference, with its firing strength
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub antecedent: String,
    pub consequent: String,
    pub strength: f64,
}

/// Result of a single inference pass
#[derive(Debug)]
pub struct Outputs {
    crisp: f64,
    universe: Vec<f64>,
    aggregated: Vec<f64>,
    activations: Vec<Activation>,
}

impl Outputs {
    pub(crate) fn new(crisp: f64, universe: Vec<f64>, aggregated: Vec<f64>, activations: Vec<Activation>) -> Self {
        Self {
            crisp,
            universe,
            aggregated,
            activations,
        }
    }

    /// The defuzzified output value
    pub fn crisp(&self) -> f64 {
        self.crisp
    }

    /// Consequent universe samples the aggregated set is defined over
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn aggregated(&self) -> &[f64] {
        &self.aggregated
    }

    /// Fired rules in rule base order
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }
}
