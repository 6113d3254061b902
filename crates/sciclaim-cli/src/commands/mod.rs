//! Command implementations.

pub mod config;
pub mod engines;
pub mod extract;
pub mod patterns;

pub use self::config::execute_config;
pub use self::engines::execute_engines;
pub use self::extract::execute_extract;
pub use self::patterns::execute_patterns;
