// Domain layer: core models and ports (interfaces). No process or I/O dependencies here.

pub mod model;
pub mod ports;
