// Domain layer: the restaurant list model and the ports its collaborators
// implement. No I/O here.

pub mod model;
pub mod ports;
