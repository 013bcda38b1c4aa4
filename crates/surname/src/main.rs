use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use surname_processor::io::{load_options, load_people};
use surname_processor::{FormatOptions, FormattedName, NameFormatter, PersonName, ProcessorError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON schema for person records
    Schema,
    /// Format the last names and prefixes of a people file
    Format {
        /// Path to the people file (YAML/JSON/CBOR)
        #[arg(index = 1)]
        people: PathBuf,

        /// Path to a formatting options file (YAML/JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Specific person ids to format (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a single name given on the command line
    Name {
        /// Own family name
        #[arg(long)]
        family: Option<String>,

        /// Prefix of the own family name
        #[arg(long)]
        prefix: Option<String>,

        /// Partner's family name
        #[arg(long)]
        partner: Option<String>,

        /// Prefix of the partner's family name
        #[arg(long)]
        partner_prefix: Option<String>,

        /// Naming convention code (B, BP, P, PB)
        #[arg(long)]
        convention: Option<String>,

        /// Path to a formatting options file (YAML/JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a people file
    Validate {
        /// Path to the people file (YAML/JSON/CBOR)
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), ProcessorError> {
    match command {
        Commands::Schema => {
            #[cfg(feature = "schema")]
            print_json(&schemars::schema_for!(surname_processor::Person));
            #[cfg(not(feature = "schema"))]
            {
                eprintln!("Schema generation requires the 'schema' feature.");
                std::process::exit(1);
            }
        }
        Commands::Format {
            people,
            config,
            keys,
            json,
        } => {
            let formatter = NameFormatter::with_options(options_from(config.as_deref())?);
            let people = load_people(&people)?;
            tracing::debug!(count = people.len(), "loaded people");

            let formatted = match keys {
                Some(ids) => ids
                    .into_iter()
                    .map(|id| {
                        let f = formatter.format_person(&people, &id)?;
                        Ok((id, f))
                    })
                    .collect::<Result<indexmap::IndexMap<_, _>, ProcessorError>>()?,
                None => formatter.format_people(&people),
            };

            if json {
                print_json(&formatted);
            } else {
                for (id, f) in &formatted {
                    println!("[{}] {}", id, human(f));
                }
            }
        }
        Commands::Name {
            family,
            prefix,
            partner,
            partner_prefix,
            convention,
            config,
            json,
        } => {
            let formatter = NameFormatter::with_options(options_from(config.as_deref())?);
            let name = PersonName {
                family_name: family,
                family_name_prefix: prefix,
                family_name_partner: partner,
                family_name_partner_prefix: partner_prefix,
                convention: convention.map(Into::into),
            };
            let formatted = formatter.format(&name);

            if json {
                print_json(&formatted);
            } else {
                println!("{}", human(&formatted));
            }
        }
        Commands::Validate { path } => {
            let people = load_people(&path)?;
            println!("People file is valid ({} records).", people.len());
        }
    }
    Ok(())
}

fn options_from(config: Option<&Path>) -> Result<FormatOptions, ProcessorError> {
    match config {
        Some(path) => load_options(path),
        None => Ok(FormatOptions::default()),
    }
}

fn human(formatted: &FormattedName) -> String {
    format!(
        "prefix: {}, last name: {}",
        formatted.prefix.as_deref().unwrap_or("-"),
        formatted.last_name.as_deref().unwrap_or("-")
    )
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}
