// Domain layer: core models and ports (interfaces). No HTTP server or client types here.

pub mod model;
pub mod ports;
