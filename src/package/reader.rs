//! Read package ZIP contents into memory

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use anyhow::Result;
use zip::ZipArchive;

use crate::error::CodegenError;

/// All entries of a package ZIP, loaded into memory.
pub struct PackageContents {
    files: HashMap<String, Vec<u8>>,
}

impl PackageContents {
    /// Read all entries from a package file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CodegenError::PackageReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Read all entries from any seekable ZIP source; `label` names it in errors.
    pub fn from_reader<R: Read + Seek>(reader: R, label: &str) -> Result<Self> {
        let mut archive = ZipArchive::new(reader).map_err(|e| CodegenError::ZipError {
            message: format!("Failed to read package {}: {}", label, e),
        })?;

        let mut files = HashMap::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| CodegenError::ZipError {
                message: format!("Failed to read entry {} in {}: {}", i, label, e),
            })?;
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            // Sizes in the archive headers are not trusted for reservation
            let mut data = Vec::new();
            entry.read_to_end(&mut data).map_err(|e| CodegenError::ZipError {
                message: format!("Failed to read entry {} in {}: {}", name, label, e),
            })?;
            files.insert(name, data);
        }

        Ok(Self { files })
    }

    /// Raw entry contents. Part names match case-insensitively, with or without a leading `/`.
    pub fn get_bytes(&self, name: &str) -> Option<&[u8]> {
        let name = name.trim_start_matches('/');
        self.files
            .get(name)
            .or_else(|| {
                self.files
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, data)| data)
            })
            .map(|v| v.as_slice())
    }

    /// List all entry names in the package.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
