use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::error::Result;
use super::{ClassCatalog, ClassDocumenter};

const DOCUMENT_TEMPLATE: &str = r#"# {{ title }}

{% for section in sections -%}
## {{ section.file_name }}

{% for entry in section.classes -%}
### Class: {{ entry.name }}

{{ entry.description }}

{% endfor -%}
{% endfor -%}
"#;

/// One generated class description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSection {
    pub name: String,
    pub description: String,
}

/// All class descriptions for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSection {
    /// Base name of the source file
    pub file_name: String,
    pub classes: Vec<ClassSection>,
}

/// The complete generated document, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<FileSection>,
}

impl Document {
    /// Render the document as Markdown text
    pub fn render(&self) -> Result<String> {
        let context = Context::from_serialize(self)?;
        Ok(Tera::one_off(DOCUMENT_TEMPLATE, &context, false)?)
    }
}

/// Walks a catalog and asks the documenter for every class, one call at a time
pub struct DocumentAssembler {
    title: String,
}

impl DocumentAssembler {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub async fn assemble(&self, catalog: &ClassCatalog, documenter: &dyn ClassDocumenter) -> Result<Document> {
        let total = catalog.class_count();
        let mut described = 0;
        let mut sections = Vec::with_capacity(catalog.file_count());

        for file in catalog.files() {
            let file_name = file.base_name();
            debug!("Assembling section for {}", file.path.display());

            let mut classes = Vec::with_capacity(file.classes.len());
            for class in &file.classes {
                described += 1;
                info!("Describing class {} ({}/{})", class.name, described, total);

                let description = documenter.describe_class(class).await?;
                classes.push(ClassSection {
                    name: class.name.clone(),
                    description,
                });
            }

            sections.push(FileSection { file_name, classes });
        }

        Ok(Document {
            title: self.title.clone(),
            sections,
        })
    }
}
