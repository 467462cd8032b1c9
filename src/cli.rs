use clap::Parser;
use std::path::PathBuf;
use anyhow::Result;

use crate::config::Config;
use crate::core::Engine;

#[derive(Parser, Debug)]
#[command(name = "classdoc")]
#[command(about = "Generate README documentation for Python classes using the OpenAI API")]
#[command(version)]
pub struct Cli {
    /// OpenAI API key
    #[arg(long = "api_key", visible_alias = "api-key", value_name = "KEY")]
    pub api_key: String,

    /// Source directory containing Python files
    #[arg(long = "src_dir", visible_alias = "src-dir", value_name = "DIR")]
    pub src_dir: PathBuf,

    /// Output file for the generated README (overwritten)
    #[arg(long = "output_file", visible_alias = "output-file", value_name = "FILE")]
    pub output_file: PathBuf,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config::new(self.api_key.clone(), self.src_dir.clone(), self.output_file.clone())
    }

    pub async fn execute(self) -> Result<()> {
        let mut engine = Engine::new(self.to_config())?;
        engine.generate().await
    }
}
