use crate::error::Result;
use super::super::ClassRecord;

/// Trait for services that can describe a class from its structure
#[async_trait::async_trait]
pub trait ClassDocumenter: Send + Sync {
    /// Produce a one-paragraph description of the class
    async fn describe_class(&self, class: &ClassRecord) -> Result<String>;

    /// Get the provider name (e.g., "OpenAI")
    fn provider_name(&self) -> &str;

    /// Get the model name being used
    fn model_name(&self) -> &str;
}

/// Render the fixed description prompt for one class.
///
/// Only method names are included; signatures and docstrings are not captured.
pub fn build_class_prompt(class: &ClassRecord) -> String {
    let mut methods = String::new();
    for name in class.method_names() {
        methods.push_str(&format!("\nMethod Name: {}\n", name));
    }

    format!(
        "Generate a short description for the following Python class based on its functions and init section:\n\n\
         Class Name: {}\n\n\
         Methods:\n{}\n\n\
         Description:",
        class.name, methods
    )
}
