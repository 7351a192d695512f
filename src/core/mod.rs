pub mod classifier;
pub mod parser;

pub use crate::domain::model::{
    ClassificationError, ClassificationResponse, ClassificationResult, Parity, ParsedNumber,
};
pub use crate::domain::ports::{ConfigProvider, TriviaLookup};
pub use crate::utils::error::Result;
