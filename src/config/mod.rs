pub mod lib;
pub mod models;
pub mod validation;

pub use lib::load_config;
