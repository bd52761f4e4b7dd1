// Domain layer: greeting model and the config port. No process access here.

pub mod model;
pub mod ports;
