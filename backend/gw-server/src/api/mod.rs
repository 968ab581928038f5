pub mod error;
pub mod query;
pub mod services;
pub mod submit;
