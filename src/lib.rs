//! The `question-generator` entry point.
//!
//! A lead-capture and customer-discovery backend: leads are forwarded to an
//! email and a newsletter provider, business ideas to a language model that
//! writes interview questions and conversation starters.

pub mod app;
pub mod domain;
pub mod email_client;
pub mod llm_client;
pub mod prompts;
pub mod routes;
pub mod subscription_client;
pub mod upstream;
