pub mod casing;
pub mod column_mapping;
pub mod command;
pub mod config;
pub mod conventions;
pub mod database_schema;
pub mod error;
pub mod field_generator;
pub mod imports;
pub mod logging;
pub mod model_generator;
pub mod model_writer;
pub mod types;

pub use error::{GeneratorError, Result};
pub use model_generator::generate_model;
