//! JSON file I/O for design and build fonts.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use kern_groups::BuildFont;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let text = read_to_string(&self.path)
            .with_context(|| format!("Failed to read: {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON: {}", self.path.display()))
    }

    /// Pretty-print `value` into the file, creating parent directories.
    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        self.ensure_parent_dir()?;
        let text = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
        write(&self.path, text + "\n")
            .with_context(|| format!("Failed to write: {}", self.path.display()))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<BuildFont>),
    One(BuildFont),
}

/// Read build fonts from files holding either one build font or an array.
///
/// A build font without a path gets the file it was read from, so warnings
/// can name it.
pub fn read_build_fonts(paths: &[PathBuf]) -> Result<Vec<BuildFont>> {
    let mut fonts = Vec::new();
    for path in paths {
        let read: Vec<BuildFont> = match JsonFile::new(path).read()? {
            OneOrMany::Many(many) => many,
            OneOrMany::One(one) => vec![one],
        };
        fonts.extend(read.into_iter().map(|mut font| {
            if font.path.is_none() && font.style_name.is_none() {
                font.path = Some(path.clone());
            }
            font
        }));
    }
    Ok(fonts)
}
