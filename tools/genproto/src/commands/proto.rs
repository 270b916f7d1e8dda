use std::path::PathBuf;

use anyhow::{Context, Result};
use bqproto::translate_schema_file;
use clap::Args;
use tracing::info;

use crate::format::OutputFormat;

#[derive(Args)]
pub struct ProtoArgs {
    /// Path to the JSON table schema
    schema: PathBuf,

    /// Output file path
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, env = "GENPROTO_FORMAT", default_value_t = OutputFormat::Proto)]
    format: OutputFormat,
}

impl ProtoArgs {
    pub fn run(self) -> Result<()> {
        info!(schema = %self.schema.display(), "generating proto from table schema");
        info!(output = %self.output.display(), format = ?self.format, "output");

        let translated = translate_schema_file(&self.schema)?;
        self.format
            .write(&translated.document, &translated.entity_name, &self.output)
            .with_context(|| format!("writing {}", self.output.display()))?;

        info!(message = %translated.document.message.name, "proto file generated");
        Ok(())
    }
}
