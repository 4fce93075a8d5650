use thiserror::Error;

/// Why a term or variable definition was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Malformation {
    TooFewPoints(usize),
    TooManyPoints(usize),
    NonFinite,
    Unordered,
    DegreeOutOfRange,
    DuplicateTerm,
    InvalidStep,
    /// The step is too fine for the span of the terms
    UniverseTooLarge,
    /// A variable document must be an object with exactly one key
    DocumentShape,
}

impl std::fmt::Display for Malformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPoints(n) => write!(f, "expected four control points, got {n}"),
            Self::TooManyPoints(n) => write!(f, "expected four control points, got {n}"),
            Self::NonFinite => f.write_str("control points must be finite"),
            Self::Unordered => f.write_str("control points must be ordered by ascending x"),
            Self::DegreeOutOfRange => f.write_str("membership degrees must lie in [0, 1]"),
            Self::DuplicateTerm => f.write_str("term is already defined"),
            Self::InvalidStep => f.write_str("universe step must be a finite positive number"),
            Self::UniverseTooLarge => write!(
                f,
                "universe would exceed {} samples",
                crate::variable::MAX_UNIVERSE_SAMPLES
            ),
            Self::DocumentShape => f.write_str("document must hold exactly one variable"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown term `{term}` in variable `{variable}`")]
    UnknownTerm { variable: String, term: String },

    #[error("output region is empty: no rule contributed to the consequent")]
    EmptyOutputRegion,

    #[error("malformed definition for `{term}`: {reason}")]
    MalformedDefinition { term: String, reason: Malformation },

    #[error("crisp input must be finite, got {0}")]
    InvalidInput(f64),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(term: impl Into<String>, reason: Malformation) -> Self {
        Error::MalformedDefinition {
            term: term.into(),
            reason,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[test]
fn test_error_messages() {
    let err = Error::malformed("hot", Malformation::TooManyPoints(5));

    assert_eq!(
        err.to_string(),
        "malformed definition for `hot`: expected four control points, got 5"
    );

    let err = Error::UnknownTerm {
        variable: "temperature".into(),
        term: "freezing".into(),
    };

    assert_eq!(err.to_string(), "unknown term `freezing` in variable `temperature`");
}
