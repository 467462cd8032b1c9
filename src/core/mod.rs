mod assembler;
mod discovery;
mod engine;
mod languages;
mod llm;
mod parser;

pub use assembler::DocumentAssembler;
pub use llm::{create_documenter, ClassDocumenter};
pub use parser::{ClassCatalog, ClassRecord, CodeParser, MethodRecord};

// Export the main engine
pub use engine::Engine;
