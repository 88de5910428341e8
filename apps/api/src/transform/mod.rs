// Transform: raw text + brand voice in, five LinkedIn post variations out.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
