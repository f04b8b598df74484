//! oxml-codegen: turns OpenXML documents into code that rebuilds them
//!
//! A document package is loaded into an in-memory graph of parts and
//! elements, and the graph is translated into a renderer-agnostic
//! compilation unit. A separate renderer prints that unit as source code
//! for a concrete language.

pub mod codegen;
pub mod dom;
pub mod error;
pub mod package;
pub mod schema;
pub mod util;

use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

pub use codegen::{
    generate_element_unit, generate_package_unit, generate_part_unit, CodegenOptions, CompilationUnit,
};
pub use error::CodegenError;

/// Package file extensions picked up when walking a directory
pub const PACKAGE_EXTENSIONS: &[&str] = &[
    "docx", "docm", "dotx", "dotm", "xlsx", "xlsm", "xltx", "xltm", "pptx", "pptm", "potx", "potm",
];

/// Minimum number of inputs to benefit from parallel processing.
const PARALLEL_THRESHOLD: usize = 4;

/// Options for generating code from package files
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory for the generated units (defaults to next to each input)
    pub output_dir: Option<PathBuf>,
    /// Generate only this part and what it owns instead of the whole package
    pub part: Option<String>,
    pub codegen: CodegenOptions,
    /// Enable verbose output
    pub verbose: bool,
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber once; `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let default_level = if verbose { "info" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

/// Load a package and generate its compilation unit
pub fn generate_from_path(path: &Path, options: &GenerateOptions) -> Result<CompilationUnit> {
    let package = package::read_package(path)?;

    let unit = match &options.part {
        Some(uri) => {
            let part_id = package
                .find_part(&dom::PartUri::new(uri))
                .ok_or_else(|| CodegenError::PartNotFound { uri: uri.clone() })?;
            generate_part_unit(&package, part_id, &options.codegen)?
        }
        None => generate_package_unit(&package, &options.codegen)?,
    };

    info!(
        path = %path.display(),
        parts = package.part_count(),
        statements = unit.statements().len(),
        anomalies = unit.comments().len(),
        "Generated compilation unit"
    );
    Ok(unit)
}

/// Where the unit for `input` is written
pub fn output_path_for(input: &Path, options: &GenerateOptions) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| input.parent().unwrap_or(Path::new(".")).to_path_buf());
    dir.join(format!("{}.json", stem))
}

/// Serialize a unit as pretty JSON.
pub fn write_unit(unit: &CompilationUnit, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(unit)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CodegenError::OutputWriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, json).map_err(|e| CodegenError::OutputWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Generate one input and write its unit, returning the output path
pub fn generate_file(input: &Path, options: &GenerateOptions) -> Result<PathBuf> {
    let unit = generate_from_path(input, options)?;
    let output = output_path_for(input, options);
    write_unit(&unit, &output)?;
    if options.verbose {
        info!(output = %output.display(), "Wrote compilation unit");
    }
    Ok(output)
}

/// Expand directories into the package files they contain; files are kept as given.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();
    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }
        let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_package_file(p))
            .collect();
        found.sort();
        inputs.extend(found);
    }
    inputs
}

fn is_package_file(path: &Path) -> bool {
    // Office lock files share the extension
    let is_lock = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("~$"));
    !is_lock
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| PACKAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Generate every input, in parallel for larger batches. Results keep input order.
pub fn generate_all(inputs: &[PathBuf], options: &GenerateOptions) -> Vec<Result<PathBuf>> {
    if inputs.len() >= PARALLEL_THRESHOLD {
        inputs.par_iter().map(|input| generate_file(input, options)).collect()
    } else {
        inputs.iter().map(|input| generate_file(input, options)).collect()
    }
}
