//! Command-line interface for geoapi code lists

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use geoapi::exports::{CatalogueSnapshot, CodeListSnapshot, ExportFormat};
#[cfg(feature = "cli")]
use geoapi::loaders::DictionaryLoader;
#[cfg(feature = "cli")]
use geoapi::{catalog, validation};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "geoapi")]
#[command(author, version, about = "Inspect, extend and export OGC/ISO code lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every code list in the catalogue
    Lists,

    /// Show the values of one code list
    Values {
        /// Code list type name or ISO identifier
        #[arg(value_name = "CODE_LIST")]
        code_list: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Look up one value without creating it
    Lookup {
        /// Code list type name or ISO identifier
        #[arg(value_name = "CODE_LIST")]
        code_list: String,

        /// Name, identifier or alias of the value
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Load a GML code list dictionary and report what it added
    Load {
        /// Path to the dictionary file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Create code lists named by the file that are not known yet
        #[arg(long)]
        create_missing: bool,
    },

    /// Export the catalogue
    Export {
        /// Output format: json or xml
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dictionary to load before exporting
        #[arg(short, long, value_name = "FILE")]
        load: Option<PathBuf>,
    },

    /// Check the consistency of every code list
    Check,
}

#[cfg(feature = "cli")]
fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lists => cmd_lists(),
        Commands::Values { code_list, json } => cmd_values(&code_list, json),
        Commands::Lookup { code_list, name } => cmd_lookup(&code_list, &name),
        Commands::Load {
            file,
            create_missing,
        } => cmd_load(file, create_missing),
        Commands::Export {
            format,
            output,
            load,
        } => cmd_export(&format, output, load),
        Commands::Check => cmd_check(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings by default)
#[cfg(feature = "cli")]
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn cmd_lists() -> Result<(), Box<dyn std::error::Error>> {
    println!("geoapi v{}", geoapi::VERSION);
    println!();
    for registry in catalog::registries() {
        println!(
            "  {:<28} {:<32} {:>3} values",
            registry.code_list(),
            registry.identifier().unwrap_or("-"),
            registry.len()
        );
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_values(code_list: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = catalog::registry(code_list)
        .ok_or_else(|| geoapi::Error::UnknownCodeList(code_list.to_string()))?;

    if json_output {
        let snapshot = CodeListSnapshot::capture(registry);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("=== {} ===", registry.code_list());
    for entry in registry.entries() {
        let marker = if entry.is_well_known() { ' ' } else { '+' };
        match entry.identifier() {
            Some(identifier) => {
                println!("{} {:>3}  {:<36} {}", marker, entry.ordinal(), entry.name(), identifier)
            }
            None => println!("{} {:>3}  {}", marker, entry.ordinal(), entry.name()),
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_lookup(code_list: &str, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(code) = catalog::lookup(code_list, name)? else {
        println!("No value '{}' in {}", name, code_list);
        std::process::exit(2);
    };

    let entry = code.entry();
    println!("{}", code);
    println!("  Code list: {}", code.code_list());
    println!("  Ordinal: {}", code.ordinal());
    if let Some(identifier) = entry.identifier() {
        println!("  Identifier: {}", identifier);
    }
    let aliases = entry.aliases();
    if !aliases.is_empty() {
        println!("  Aliases: {}", aliases.join(", "));
    }
    if let Some(description) = entry.description() {
        println!("  Description: {}", description);
    }
    println!("  Well known: {}", entry.is_well_known());
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_load(file: PathBuf, create_missing: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = DictionaryLoader::new()
        .with_create_missing(create_missing)
        .load_file(&file)?;

    for dictionary in &report.dictionaries {
        match dictionary.code_list {
            Some(code_list) => println!(
                "  {} -> {}: {} matched, {} created",
                dictionary.identifier, code_list, dictionary.matched, dictionary.created
            ),
            None => println!("  {} skipped (unknown code list)", dictionary.identifier),
        }
        if !dictionary.conflicts.is_empty() {
            println!("    conflicting: {}", dictionary.conflicts.join(", "));
        }
    }
    println!();
    println!(
        "Loaded {} dictionaries: {} matched, {} created, {} skipped",
        report.dictionaries.len(),
        report.matched(),
        report.created(),
        report.skipped().len()
    );
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_export(
    format: &str,
    output: Option<PathBuf>,
    load: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format: ExportFormat = format.parse()?;

    if let Some(file) = load {
        DictionaryLoader::new().with_create_missing(true).load_file(&file)?;
    }

    let snapshot = CatalogueSnapshot::capture();
    match output {
        Some(path) => {
            snapshot.write_to(&path, format)?;
            eprintln!(
                "Wrote {} code lists ({} codes) to {}",
                snapshot.code_lists.len(),
                snapshot.code_count(),
                path.display()
            );
        }
        None => println!("{}", snapshot.render(format)?),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_check() -> Result<(), Box<dyn std::error::Error>> {
    let errors = validation::validate_catalog();

    if errors.is_empty() {
        println!("✓ {} code lists are consistent", catalog::registries().len());
        Ok(())
    } else {
        println!("✗ Catalogue is inconsistent");
        println!();
        println!("Errors:");
        for error in &errors {
            println!("  - {}", error);
        }
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
