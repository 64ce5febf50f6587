//! Infrastructure services

mod dsl_generator_service;

pub use dsl_generator_service::{DslGeneratorService, GenerateRequest};
