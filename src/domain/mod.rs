// Domain layer: the item chain and the port through which items are provided.

pub mod model;
pub mod ports;
