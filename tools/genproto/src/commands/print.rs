use std::path::PathBuf;

use anyhow::Result;
use bqproto::translate_schema_file;
use clap::Args;

#[derive(Args)]
pub struct PrintArgs {
    /// Path to the JSON table schema
    schema: PathBuf,
}

impl PrintArgs {
    pub fn run(self) -> Result<()> {
        let translated = translate_schema_file(&self.schema)?;
        print!("{}", translated.document);
        Ok(())
    }
}
