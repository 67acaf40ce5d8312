use std::fmt;

use super::translation_id::TranslationId;

const INPUT_PREFIX: &str = "temp_";
const OUTPUT_PREFIX: &str = "processed_";
const FALLBACK_FILE_NAME: &str = "audio.wav";
const MAX_FILE_NAME_BYTES: usize = 120;
const MAX_EXTENSION_BYTES: usize = 16;

/// Location of a staged artifact, relative to the staging root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StagedPath(String);

impl StagedPath {
    /// `temp_<id>_<name>`: the raw upload.
    pub fn input(id: &TranslationId, file_name: &str) -> Self {
        Self::prefixed(INPUT_PREFIX, id, file_name)
    }

    /// `processed_<id>_<name>`: the encoded translation.
    pub fn output(id: &TranslationId, file_name: &str) -> Self {
        Self::prefixed(OUTPUT_PREFIX, id, file_name)
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefixed(prefix: &str, id: &TranslationId, file_name: &str) -> Self {
        Self(format!(
            "{}{}_{}",
            prefix,
            id.as_uuid().simple(),
            sanitize_file_name(file_name)
        ))
    }
}

impl fmt::Display for StagedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name the caller sees for a staged download: `processed_<name>`.
pub fn download_file_name(file_name: &str) -> String {
    format!("{}{}", OUTPUT_PREFIX, sanitize_file_name(file_name))
}

/// Reduces an uploaded file name to a single safe path component.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]` becomes
/// `_`. Leading dots are stripped so the result is never hidden or `..`.
/// Names longer than 120 bytes are shortened, keeping a short extension, so
/// prefixed staging keys stay within filesystem name limits.
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        truncate_file_name(cleaned)
    }
}

/// `name` is ASCII at this point, so byte offsets are char boundaries.
fn truncate_file_name(name: &str) -> String {
    if name.len() <= MAX_FILE_NAME_BYTES {
        return name.to_string();
    }

    match name.rfind('.') {
        Some(dot) if name.len() - dot <= MAX_EXTENSION_BYTES => {
            let extension = &name[dot..];
            format!(
                "{}{}",
                &name[..MAX_FILE_NAME_BYTES - extension.len()],
                extension
            )
        }
        _ => name[..MAX_FILE_NAME_BYTES].to_string(),
    }
}
