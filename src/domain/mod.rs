// Domain layer: form models and the ports the page / lookup service implement.

pub mod model;
pub mod ports;
