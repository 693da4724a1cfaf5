// Domain layer: the factory capability, its implementers and the ports the loader reads through.

pub mod model;
pub mod ports;
