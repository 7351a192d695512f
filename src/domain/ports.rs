use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Outbound capability that produces a short fact about an integer.
#[async_trait]
pub trait TriviaLookup: Send + Sync {
    async fn lookup(&self, number: i64) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn trivia_endpoint(&self) -> &str;
    fn trivia_timeout(&self) -> Duration;
    fn reject_negatives(&self) -> bool;
}
