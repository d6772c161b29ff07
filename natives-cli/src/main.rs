use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, info};

use natives_codegen::emitters::csharp::CSharpEmitter;
use natives_codegen::{generate_all, BindingConfig, Dialect, DocumentGenerator, GenerateOptions};
use natives_model::{Document, Severity, ValidationReport};

#[derive(Parser)]
#[command(
    name = "natives-typegen",
    about = "Generate typed bindings and declarations for a native function library"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate output files from a natives document
    Generate {
        /// Document JSON file
        input: PathBuf,
        /// Output dialects (typescript, csharp)
        #[arg(short, long = "dialect", default_values = ["typescript", "csharp"])]
        dialects: Vec<String>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// File name stem for generated files
        #[arg(long, default_value = "natives")]
        name: String,
        /// Do not emit the file header
        #[arg(long)]
        no_header: bool,
        /// Do not emit documentation blocks
        #[arg(long)]
        no_docs: bool,
        /// Extra header comment line (repeatable)
        #[arg(long = "header-line")]
        header_lines: Vec<String>,
        /// Leave the generation time out of the header
        #[arg(long)]
        no_timestamp: bool,
        /// Namespace of the C# wrapper class
        #[arg(long)]
        namespace: Option<String>,
        /// Name of the C# wrapper class
        #[arg(long)]
        class_name: Option<String>,
    },
    /// Validate a natives document
    Validate {
        /// Document JSON file
        input: PathBuf,
    },
}

/// Options for `generate`, gathered from the command line.
struct GenerateArgs {
    dialects: Vec<String>,
    output_dir: PathBuf,
    name: String,
    options: GenerateOptions,
    binding: BindingConfig,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            input,
            dialects,
            output_dir,
            name,
            no_header,
            no_docs,
            header_lines,
            no_timestamp,
            namespace,
            class_name,
        } => {
            let mut options = GenerateOptions::new()
                .emit_header(!no_header)
                .generate_documentation(!no_docs);
            if !header_lines.is_empty() {
                options = options.custom_header_lines(header_lines);
            }
            if !no_timestamp {
                let now = chrono::Local::now();
                options = options.timestamp(now.format("%Y-%m-%d %H:%M").to_string());
            }

            let mut binding = BindingConfig::default();
            if let Some(namespace) = namespace {
                binding.namespace = namespace;
            }
            if let Some(class_name) = class_name {
                binding.class_name = class_name;
            }

            cmd_generate(
                &input,
                GenerateArgs {
                    dialects,
                    output_dir,
                    name,
                    options,
                    binding,
                },
            )
        }
        Command::Validate { input } => cmd_validate(&input),
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &Path) -> Result<Document> {
    natives_model::load_document(input)
        .with_context(|| format!("Failed to load document '{}'", input.display()))
}

fn print_report(report: &ValidationReport) {
    for entry in &report.errors {
        let severity_str = match entry.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!(
            "  {} [{}] {} ({})",
            severity_str,
            entry.code.dimmed(),
            entry.message,
            entry.path.dimmed(),
        );
    }
}

fn cmd_validate(input: &Path) -> Result<bool> {
    let document = load(input)?;
    let report = natives_model::validate(&document);
    print_report(&report);

    let error_count = report.count(Severity::Error);
    let warning_count = report.count(Severity::Warning);

    println!();
    if error_count == 0 && warning_count == 0 {
        println!(
            "{} Document is valid ({} modules, {} functions, {} interfaces, {} type aliases)",
            "✓".green().bold(),
            document.modules.len(),
            document.function_count(),
            document.interfaces.len(),
            document.type_aliases.len(),
        );
        Ok(true)
    } else if error_count == 0 {
        println!(
            "{} Valid with {} warning(s)",
            "⚠".yellow().bold(),
            warning_count
        );
        Ok(true)
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "✗".red().bold(),
            error_count,
            warning_count
        );
        Ok(false)
    }
}

fn cmd_generate(input: &Path, args: GenerateArgs) -> Result<bool> {
    // 1. Load & validate
    let document = load(input)?;
    let report = natives_model::validate(&document);
    if report.has_errors() {
        print_report(&report);
        eprintln!(
            "{} {} validation error(s), nothing generated",
            "✗".red().bold(),
            report.count(Severity::Error)
        );
        return Ok(false);
    }

    // 2. One generator per requested dialect
    let generators = args
        .dialects
        .iter()
        .map(|name| {
            let dialect: Dialect = name
                .parse()
                .with_context(|| format!("Invalid --dialect '{}'", name))?;
            Ok(match dialect {
                Dialect::CSharp => DocumentGenerator::with_emitter(
                    Box::new(CSharpEmitter::new(args.binding.clone())),
                    args.options.clone(),
                ),
                Dialect::TypeScript => DocumentGenerator::new(dialect, args.options.clone()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // 3. Generate (dialects render in parallel)
    info!(
        modules = document.modules.len(),
        functions = document.function_count(),
        dialects = generators.len(),
        "generating"
    );
    let outputs = generate_all(&document, &generators);

    // 4. Write output
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create '{}'", args.output_dir.display()))?;

    let mut written = Vec::new();
    for (generator, output) in generators.iter().zip(outputs) {
        let dialect = generator.dialect();
        let content = output.with_context(|| format!("Generation failed for {}", dialect))?;
        let path = args.output_dir.join(format!(
            "{}.{}",
            args.name,
            generator.emitter().file_extension()
        ));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        debug!(%dialect, path = %path.display(), "wrote output");
        written.push(path);
    }

    println!(
        "{} Generated {} file(s) from {}",
        "✓".green().bold(),
        written.len(),
        input.display()
    );
    for path in &written {
        println!("  {} {}", "→".dimmed(), path.display());
    }

    Ok(true)
}
