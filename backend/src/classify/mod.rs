pub mod models;
pub mod openai_service;
pub mod prompt;
pub mod service;
