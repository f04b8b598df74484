use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use oxml_codegen::codegen::ir::AliasOrder;
use oxml_codegen::dom::XmlNodeKind;
use oxml_codegen::{collect_inputs, generate_all, init_tracing, CodegenOptions, GenerateOptions};

#[derive(Parser)]
#[command(name = "oxml-codegen")]
#[command(author, version, about = "Generate code that rebuilds OpenXML documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate compilation units for .docx, .xlsx and .pptx packages
    Generate {
        /// Package files or directories to search for packages
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (defaults to next to each input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generate a single part (e.g. /word/document.xml) instead of the whole package
        #[arg(short, long)]
        part: Option<String>,

        /// Drop elements the schema does not describe
        #[arg(long)]
        ignore_unknown: bool,

        /// Raw node kinds to drop (comment, pi, whitespace)
        #[arg(long = "ignore-misc", value_name = "KIND")]
        ignore_misc: Vec<XmlNodeKind>,

        /// Import namespaces plainly instead of aliasing them
        #[arg(long)]
        no_aliases: bool,

        /// Write aliased imports namespace first
        #[arg(long)]
        namespace_first: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            output,
            part,
            ignore_unknown,
            ignore_misc,
            no_aliases,
            namespace_first,
            verbose,
        } => {
            init_tracing(verbose);

            let mut codegen = CodegenOptions {
                ignore_unknown_elements: ignore_unknown,
                ignored_node_kinds: ignore_misc,
                ..Default::default()
            };
            codegen.namespace_aliases.use_aliases = !no_aliases;
            if namespace_first {
                codegen.namespace_aliases.order = AliasOrder::NamespaceFirst;
            }
            let options = GenerateOptions {
                output_dir: output,
                part,
                codegen,
                verbose,
            };

            let files = collect_inputs(&inputs);
            if files.is_empty() {
                bail!("No package files found");
            }

            let mut failures = 0;
            for (file, result) in files.iter().zip(generate_all(&files, &options)) {
                match result {
                    Ok(out) => println!("{} -> {}", file.display(), out.display()),
                    Err(err) => {
                        failures += 1;
                        eprintln!("{}: {:#}", file.display(), err);
                    }
                }
            }
            if failures > 0 {
                bail!("{} of {} packages failed", failures, files.len());
            }
        }
    }

    Ok(())
}
