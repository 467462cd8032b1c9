//! LLM integration for describing classes
//!
//! A single trait stands between the document assembler and whatever service
//! writes the prose, so the pipeline can run against a deterministic stub.

mod documenter;
mod providers;

pub use documenter::ClassDocumenter;
pub use providers::create_documenter;
