use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ClassdocError;
use super::{create_documenter, ClassDocumenter, CodeParser, DocumentAssembler};

/// Main orchestration engine: discover, extract, describe, write
pub struct Engine {
    config: Config,
    parser: CodeParser,
    assembler: DocumentAssembler,
    documenter: Box<dyn ClassDocumenter>,
}

impl Engine {
    /// Create an engine backed by the configured LLM provider
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let documenter = create_documenter(&config.llm)?;
        Self::with_documenter(config, documenter)
    }

    /// Create an engine around an already constructed documenter
    pub fn with_documenter(config: Config, documenter: Box<dyn ClassDocumenter>) -> Result<Self> {
        debug!("Loaded configuration: {:?}", config.project);

        let parser = CodeParser::new(&config.parsing)?;
        let assembler = DocumentAssembler::new(config.output.title.clone());

        info!(
            "LLM documenter: {} ({})",
            documenter.provider_name(),
            documenter.model_name()
        );

        Ok(Self {
            config,
            parser,
            assembler,
            documenter,
        })
    }

    /// Run the whole pipeline.
    ///
    /// The output file is written once, after every class has been described.
    /// Any failure before that point leaves it untouched.
    pub async fn generate(&mut self) -> Result<()> {
        let source_dir = self.config.project.source_dir.clone();
        let output_file = self.config.output.output_file.clone();

        info!("Source: {}", source_dir.display());
        info!("Output: {}", output_file.display());

        let catalog = self.parser.parse_directory(&source_dir)?;
        info!(
            "Extracted {} classes from {} files",
            catalog.class_count(),
            catalog.file_count()
        );

        let document = self.assembler.assemble(&catalog, self.documenter.as_ref()).await?;
        let content = document.render()?;

        std::fs::write(&output_file, content).map_err(|e| {
            ClassdocError::FileSystem(format!("failed to write {}: {}", output_file.display(), e))
        })?;

        info!("Documentation written to {}", output_file.display());
        Ok(())
    }
}
