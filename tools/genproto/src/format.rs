use std::path::Path;

use anyhow::Result;
use bqproto::{core::ProtoDocument, descriptor::encode_file_descriptor_set, write_document};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `.proto` text
    Proto,
    /// Serialized `google.protobuf.FileDescriptorSet`
    DescriptorSet,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Proto => "proto",
            OutputFormat::DescriptorSet => "pb",
        }
    }

    /// Write `doc` to `output` in this format. `entity_name` names the
    /// descriptor's file (`<entity_name>.proto`).
    pub fn write(&self, doc: &ProtoDocument, entity_name: &str, output: &Path) -> Result<()> {
        match self {
            OutputFormat::Proto => write_document(output, doc.to_string())?,
            OutputFormat::DescriptorSet => {
                let file_name = format!("{entity_name}.proto");
                write_document(output, encode_file_descriptor_set(doc, &file_name))?
            }
        }
        Ok(())
    }
}
