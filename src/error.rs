//! Error types for oxml-codegen

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a load or a code generation request.
///
/// Data-quality problems inside a document (for example an enumeration
/// attribute holding an unknown member) are never reported through this type;
/// they surface as comment statements in the generated output instead.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to read package: {path}")]
    PackageReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML part {part}")]
    XmlParseError {
        part: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid package format: {message}")]
    InvalidPackageFormat { message: String },

    #[error("ZIP read error: {message}")]
    ZipError { message: String },

    #[error("Part not found in package: {uri}")]
    PartNotFound { uri: String },

    #[error("Required identifier is empty: {name}")]
    EmptyIdentifier { name: &'static str },

    #[error("Root element {type_name} is excluded by the ignore settings")]
    IgnoredRoot { type_name: &'static str },

    #[error("Part {uri} was already registered as a blueprint")]
    DuplicateBlueprint { uri: String },

    #[error("Failed to write output to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<zip::result::ZipError> for CodegenError {
    fn from(err: zip::result::ZipError) -> Self {
        CodegenError::ZipError {
            message: err.to_string(),
        }
    }
}
