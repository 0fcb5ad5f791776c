//! Upload validation: accepted types, size caps, file counts, and custom checks.
//!
//! Only the predicates live here. Reading files, previews, and upload progress
//! belong to whatever hosts the field. Every rejection is a typed
//! [`FileRejection`] returned to the caller.

// Size display divides byte counts as floats
#![allow(clippy::cast_precision_loss)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::DEFAULT_MAX_FILES;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// A file offered to an upload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCandidate {
    /// File name including extension
    pub name: String,
    /// MIME type (e.g., "image/png")
    pub mime: String,
    /// Size in bytes
    pub size: u64,
}

impl FileCandidate {
    /// Creates a candidate.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Builds a candidate from a file on disk, guessing the MIME type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .context(format!("Failed to read file metadata: {}", path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("Not a regular file: {}", path.display());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self::new(name, mime, metadata.len()))
    }

    /// Whether the MIME type is an image (used to decide on previews).
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// One entry of an `accept` list.
#[derive(Debug, Clone)]
enum AcceptRule {
    /// `.pdf` - matched against the end of the file name, case-insensitively
    Extension(String),
    /// `image/*` - matched against the MIME type
    MimePattern(Regex),
    /// `application/pdf` - exact MIME type
    Mime(String),
}

impl AcceptRule {
    fn parse(entry: &str) -> Option<Self> {
        if entry.starts_with('.') {
            return Some(Self::Extension(entry.to_lowercase()));
        }
        if entry.contains('*') {
            let pattern = entry
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            return match Regex::new(&format!("^{pattern}$")) {
                Ok(regex) => Some(Self::MimePattern(regex)),
                Err(e) => {
                    warn!(entry, error = %e, "ignoring unusable accept pattern");
                    None
                }
            };
        }
        Some(Self::Mime(entry.to_string()))
    }

    fn matches(&self, file: &FileCandidate) -> bool {
        match self {
            Self::Extension(ext) => file.name.to_lowercase().ends_with(ext.as_str()),
            Self::MimePattern(regex) => regex.is_match(&file.mime),
            Self::Mime(mime) => file.mime == *mime,
        }
    }
}

/// A parsed `accept` list such as `"image/*,.pdf"`.
#[derive(Debug, Clone)]
pub struct AcceptList {
    raw: String,
    rules: Vec<AcceptRule>,
}

impl AcceptList {
    /// Parses a comma separated list; blank entries are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let rules = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(AcceptRule::parse)
            .collect();
        Self {
            raw: raw.to_string(),
            rules,
        }
    }

    /// Whether any entry accepts the file.
    #[must_use]
    pub fn accepts(&self, file: &FileCandidate) -> bool {
        self.rules.iter().any(|rule| rule.matches(file))
    }

    /// The list as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for AcceptList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Why a file or selection was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    /// The selection would exceed the file count limit.
    #[error("Maximum of {max} file(s) allowed")]
    TooManyFiles {
        /// Configured limit
        max: usize,
    },
    /// A file exceeds the size cap.
    #[error("File '{name}' is too large. Maximum allowed: {}", size_label(.max))]
    TooLarge {
        /// Offending file
        name: String,
        /// Configured cap in bytes
        max: u64,
    },
    /// A file matches none of the accepted types.
    #[error("File type not allowed for '{name}'. Accepted: {accept}")]
    TypeNotAccepted {
        /// Offending file
        name: String,
        /// The accept list as configured
        accept: String,
    },
    /// A caller-supplied check refused the selection.
    #[error("{0}")]
    Invalid(String),
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

/// Outcome of a caller-supplied validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomVerdict {
    /// Selection is fine
    Accept,
    /// Selection is refused with the generic message
    Reject,
    /// Selection is refused with this message
    RejectWith(String),
}

impl CustomVerdict {
    fn into_result(self) -> Result<(), FileRejection> {
        match self {
            Self::Accept => Ok(()),
            Self::Reject => Err(FileRejection::Invalid("Invalid files".to_string())),
            Self::RejectWith(message) => Err(FileRejection::Invalid(message)),
        }
    }
}

impl From<bool> for CustomVerdict {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Accept
        } else {
            Self::Reject
        }
    }
}

/// Shape of the value an upload field hands to form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadValue {
    /// No file selected
    Empty,
    /// Single-file field
    Single(FileCandidate),
    /// Multi-file field
    Many(Vec<FileCandidate>),
}

/// Limits applied to an upload field.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Accepted types; `None` accepts everything
    pub accept: Option<AcceptList>,
    /// Size cap in bytes; `None` or `Some(0)` means unlimited
    pub max_size: Option<u64>,
    /// Maximum number of files held by the field
    pub max_files: usize,
    /// Whether the field stores a list
    pub multiple: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accept: None,
            max_size: None,
            max_files: DEFAULT_MAX_FILES,
            multiple: false,
        }
    }
}

impl UploadPolicy {
    /// Checks size and type of a single file.
    pub fn validate_file(&self, file: &FileCandidate) -> Result<(), FileRejection> {
        if let Some(max) = self.max_size.filter(|&m| m > 0) {
            if file.size > max {
                return Err(FileRejection::TooLarge {
                    name: file.name.clone(),
                    max,
                });
            }
        }

        if let Some(accept) = &self.accept {
            if !accept.accepts(file) {
                return Err(FileRejection::TypeNotAccepted {
                    name: file.name.clone(),
                    accept: accept.as_str().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Validates files being added to a field that already holds `existing`.
    ///
    /// Order: file count, then each file, then the custom check. On success the
    /// combined list (existing first) is returned.
    pub fn accept_batch(
        &self,
        existing: &[FileCandidate],
        incoming: Vec<FileCandidate>,
        custom: Option<&dyn Fn(&[FileCandidate]) -> CustomVerdict>,
    ) -> Result<Vec<FileCandidate>, FileRejection> {
        if let Err(rejection) = self.check_batch(existing, &incoming, custom) {
            warn!(%rejection, incoming = incoming.len(), "upload rejected");
            return Err(rejection);
        }

        debug!(added = incoming.len(), total = existing.len() + incoming.len(), "upload accepted");
        let mut files = existing.to_vec();
        files.extend(incoming);
        Ok(files)
    }

    fn check_batch(
        &self,
        existing: &[FileCandidate],
        incoming: &[FileCandidate],
        custom: Option<&dyn Fn(&[FileCandidate]) -> CustomVerdict>,
    ) -> Result<(), FileRejection> {
        if existing.len() + incoming.len() > self.max_files {
            return Err(FileRejection::TooManyFiles {
                max: self.max_files,
            });
        }

        for file in incoming {
            self.validate_file(file)?;
        }

        match custom {
            Some(check) => check(incoming).into_result(),
            None => Ok(()),
        }
    }

    /// Validates the single file of a simple file field.
    pub fn accept_one(
        &self,
        file: FileCandidate,
        custom: Option<&dyn Fn(&FileCandidate) -> CustomVerdict>,
    ) -> Result<FileCandidate, FileRejection> {
        let result = self.validate_file(&file).and_then(|()| match custom {
            Some(check) => check(&file).into_result(),
            None => Ok(()),
        });

        match result {
            Ok(()) => Ok(file),
            Err(rejection) => {
                warn!(%rejection, file = %file.name, "file rejected");
                Err(rejection)
            }
        }
    }

    /// Shapes the held files into the form value.
    #[must_use]
    pub fn form_value(&self, files: &[FileCandidate]) -> UploadValue {
        if self.multiple {
            UploadValue::Many(files.to_vec())
        } else {
            files
                .first()
                .cloned()
                .map_or(UploadValue::Empty, UploadValue::Single)
        }
    }
}

/// Human-readable size with 1024-based units and at most two decimals.
///
/// # Examples
///
/// ```
/// use fieldkit::services::upload::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = format!("{:.2}", bytes as f64 / scale as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, SIZE_UNITS[unit])
}
