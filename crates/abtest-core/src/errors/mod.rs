//! Error handling for abtest.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::AbTestErrorCode;
pub use input_error::InputError;
