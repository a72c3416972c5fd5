// Domain layer: project model, the static folder template, and the ports
// (interfaces) the orchestration drives. No I/O happens here.

pub mod model;
pub mod ports;
