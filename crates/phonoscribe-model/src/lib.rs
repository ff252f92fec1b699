pub mod config;
pub mod results;

pub use config::*;
pub use results::*;
