// Domain layer: the converter itself, the batch records and the ports
// (interfaces) the batch pipeline is written against.

pub mod converter;
pub mod model;
pub mod place_value;
pub mod ports;
