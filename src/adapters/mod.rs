// Adapters layer: concrete implementations for external systems (inbound HTTP, outbound trivia).

pub mod http;
pub mod numbers_api;
