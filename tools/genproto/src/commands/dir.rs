use std::path::PathBuf;

use anyhow::{Context, Result};
use bqproto::{schema_files_in_dir, translate_schema_file};
use clap::Args;
use tracing::{info, warn};

use crate::format::OutputFormat;

#[derive(Args)]
pub struct DirArgs {
    /// Directory containing `*.json` table schemas
    schema_dir: PathBuf,

    /// Directory receiving one output file per schema
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, env = "GENPROTO_FORMAT", default_value_t = OutputFormat::Proto)]
    format: OutputFormat,
}

impl DirArgs {
    pub fn run(self) -> Result<()> {
        let schemas = schema_files_in_dir(&self.schema_dir)?;
        if schemas.is_empty() {
            warn!(dir = %self.schema_dir.display(), "no JSON schema files found");
            return Ok(());
        }
        info!(count = schemas.len(), dir = %self.schema_dir.display(), "generating protos");

        for schema in &schemas {
            let translated = translate_schema_file(schema)?;
            let output = self.output_dir.join(format!(
                "{}.{}",
                translated.entity_name,
                self.format.extension()
            ));

            self.format
                .write(&translated.document, &translated.entity_name, &output)
                .with_context(|| format!("writing {}", output.display()))?;
            info!(schema = %schema.display(), output = %output.display(), "generated");
        }

        info!(count = schemas.len(), "all proto files generated");
        Ok(())
    }
}
