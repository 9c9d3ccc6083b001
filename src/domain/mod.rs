// Domain layer: Adafruit IO models and the ports the driver is wired through.

pub mod model;
pub mod ports;
