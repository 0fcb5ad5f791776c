//! Upload validation CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::services::upload::format_file_size;
use crate::services::{AcceptList, FileCandidate};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Upload commands
#[derive(Args, Debug)]
pub struct UploadArgs {
    #[command(subcommand)]
    command: UploadCommand,
}

#[derive(Subcommand, Debug)]
enum UploadCommand {
    /// Check files against the upload limits
    Check(UploadCheckArgs),
}

/// Check files against the upload limits
#[derive(Args, Debug)]
pub struct UploadCheckArgs {
    /// Files to check
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Accepted types (e.g., "image/*,.pdf")
    #[arg(long, value_name = "LIST")]
    accept: Option<String>,

    /// Size cap in bytes (0 = unlimited)
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,

    /// Maximum number of files
    #[arg(long, value_name = "N")]
    max_files: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CheckResponse {
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    files: Vec<FileInfo>,
}

#[derive(Serialize, Debug)]
struct FileInfo {
    name: String,
    mime: String,
    size: u64,
    size_label: String,
}

impl From<&FileCandidate> for FileInfo {
    fn from(file: &FileCandidate) -> Self {
        Self {
            name: file.name.clone(),
            mime: file.mime.clone(),
            size: file.size,
            size_label: format_file_size(file.size),
        }
    }
}

impl UploadArgs {
    /// Execute upload subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            UploadCommand::Check(args) => args.execute(),
        }
    }
}

impl UploadCheckArgs {
    /// Execute check command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let mut policy = config.upload_policy();
        if let Some(accept) = &self.accept {
            policy.accept = Some(AcceptList::parse(accept));
        }
        if let Some(max_size) = self.max_size {
            policy.max_size = Some(max_size);
        }
        if let Some(max_files) = self.max_files {
            if max_files == 0 {
                return Err(CliError::validation("--max-files must be at least 1"));
            }
            policy.max_files = max_files;
        }

        let candidates = self
            .files
            .iter()
            .map(|path| {
                FileCandidate::from_path(path).map_err(|e| CliError::io(format!("{e:#}")))
            })
            .collect::<CliResult<Vec<_>>>()?;

        let response = match policy.accept_batch(&[], candidates.clone(), None) {
            Ok(files) => CheckResponse {
                accepted: true,
                error: None,
                files: files.iter().map(FileInfo::from).collect(),
            },
            Err(rejection) => CheckResponse {
                accepted: false,
                error: Some(rejection.to_string()),
                files: candidates.iter().map(FileInfo::from).collect(),
            },
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.accepted {
                println!("✓ {} file(s) accepted", response.files.len());
            } else {
                println!("✗ Upload rejected");
            }
            for file in &response.files {
                println!("  {:<30} {:<24} {}", file.name, file.mime, file.size_label);
            }
            if let Some(error) = &response.error {
                println!("\n  ✗ {error}");
            }
        }

        match response.error {
            Some(error) => Err(CliError::validation(error)),
            None => Ok(()),
        }
    }
}
