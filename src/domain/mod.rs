// Domain layer: API models, ports (interfaces) and the pure eligibility rules.

pub mod model;
pub mod ports;
pub mod services;
