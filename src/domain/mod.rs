// Domain layer: core models and ports (interfaces). No DOM access here.

pub mod model;
pub mod ports;
