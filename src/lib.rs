pub mod config;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod run;

pub use errors::*;
pub use models::*;
