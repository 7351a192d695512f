use serde::Serialize;
use thiserror::Error;

/// Literal returned whenever the trivia service cannot produce a fact.
pub const FUN_FACT_FALLBACK: &str = "No fun fact available.";

/// A syntactically valid integer together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub raw: String,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub parity: Parity,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl ClassificationResult {
    /// Parity label first, then `armstrong` when it applies.
    pub fn properties(&self) -> Vec<String> {
        let mut properties = vec![self.parity.as_str().to_string()];
        if self.is_armstrong {
            properties.push("armstrong".to_string());
        }
        properties
    }
}

/// Success body. Field declaration order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl From<ClassificationResult> for ClassificationResponse {
    fn from(result: ClassificationResult) -> Self {
        let properties = result.properties();
        Self {
            number: result.number,
            is_prime: result.is_prime,
            is_perfect: result.is_perfect,
            properties,
            digit_sum: result.digit_sum,
            fun_fact: result.fun_fact,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("No number was provided")]
    MissingInput,

    #[error("'{input}' is not a valid integer")]
    NotANumber { input: String },

    #[error("Negative numbers are not accepted: {input}")]
    Negative { input: String },

    #[error("'{input}' does not fit in a 64-bit signed integer")]
    OutOfRange { input: String },
}

impl ClassificationError {
    pub fn classification(&self) -> &'static str {
        match self {
            ClassificationError::MissingInput | ClassificationError::NotANumber { .. } => {
                "alphabet"
            }
            ClassificationError::Negative { .. } => "negative",
            ClassificationError::OutOfRange { .. } => "out_of_range",
        }
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            ClassificationError::MissingInput => None,
            ClassificationError::NotANumber { input }
            | ClassificationError::Negative { input }
            | ClassificationError::OutOfRange { input } => Some(input),
        }
    }
}

/// Error body. `input` is `null` when the parameter was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub input: Option<String>,
    pub classification: &'static str,
    pub error: bool,
    pub message: String,
}

impl From<&ClassificationError> for ErrorBody {
    fn from(err: &ClassificationError) -> Self {
        Self {
            input: err.input().map(str::to_string),
            classification: err.classification(),
            error: true,
            message: err.to_string(),
        }
    }
}
