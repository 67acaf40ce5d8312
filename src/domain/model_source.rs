use std::fmt;
use std::path::{Path, PathBuf};

/// Where the translation model weights come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    LocalDir(PathBuf),
    Hub(String),
}

impl ModelSource {
    /// Prefers a provisioned local directory and falls back to the hub id.
    pub fn resolve(local_dir: &Path, hub_model_id: &str) -> Self {
        if local_dir.exists() {
            Self::LocalDir(local_dir.to_path_buf())
        } else {
            Self::Hub(hub_model_id.to_string())
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::LocalDir(_) => "local path",
            Self::Hub(_) => "Hugging Face",
        }
    }

    /// Identifier forwarded to the engine: a directory or a repository id.
    pub fn identifier(&self) -> String {
        match self {
            Self::LocalDir(path) => path.display().to_string(),
            Self::Hub(id) => id.clone(),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}
