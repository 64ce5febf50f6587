//! Infrastructure layer - LLM clients, intent analysis, logging and services

pub mod intent;
pub mod llm;
pub mod logging;
pub mod services;
