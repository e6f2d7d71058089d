// Module exports for models

pub mod holiday;
pub mod rotation;
pub mod settings;
pub mod week;
