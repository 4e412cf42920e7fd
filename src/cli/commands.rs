use std::io::Read;
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use anyhow::{Context, Result};
use crate::config::Config;
use crate::models::{Locale, StatusCategory, StatusDefinition, StatusKey};
use crate::status::{self, summarize, AliasTable, Catalog, Normalizer, StatusError, UnknownPolicy};
use crate::cli::abbrev;
use crate::cli::error::{user_error, validate_inputs};
use crate::cli::output::{
    format_classification, format_status_table, format_summary, is_tty, ClassifiedRecord,
};
use crate::utils::suggest_statuses;

#[derive(Parser)]
#[command(name = "befast-status")]
#[command(about = "Normalize and classify BeFast order statuses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize raw status values to canonical keys
    Normalize {
        /// Raw status values (e.g. "picked_up", "ALREADY_DELIVERED")
        raw: Vec<String>,
        /// Fail on unrecognized values instead of defaulting to PENDING
        #[arg(long)]
        strict: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show label, category, progress and flags for raw status values
    Classify {
        /// Raw status values
        raw: Vec<String>,
        /// Label language (es, en)
        #[arg(long)]
        locale: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List canonical statuses in workflow order
    List {
        /// Only statuses in this category (pending, in_progress, completed, cancelled)
        #[arg(long)]
        category: Option<String>,
        /// Label language (es, en)
        #[arg(long)]
        locale: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show registered spellings for canonical statuses
    Aliases {
        /// Canonical key or any alias of it (all statuses when omitted)
        status: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Count statuses by category, one per line or a JSON array (stdin when no file)
    Summary {
        /// Input file
        file: Option<PathBuf>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Run the status catalog and alias table self-tests
    Check,
}

/// Everything a command needs from the environment
struct CommandEnv {
    config: Config,
    table: AliasTable,
    color: bool,
}

impl CommandEnv {
    fn load() -> Result<Self> {
        let config = Config::load()?;
        let table = config.alias_table()?;
        let color = config.color.enabled(is_tty());
        Ok(Self { config, table, color })
    }

    fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.table).with_policy(self.config.unknown)
    }

    fn locale(&self, flag: Option<String>) -> Locale {
        match flag {
            Some(value) => Locale::from_str(&value).unwrap_or_else(|| {
                user_error(&format!("Unknown locale '{}'. Use es or en.", value))
            }),
            None => self.config.locale,
        }
    }
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or("BEFAST_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

pub fn run() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Expand command abbreviations before processing
    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => {
            user_error(&e);
        }
    };

    let clap_args = std::iter::once("befast-status".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too; clap picks the exit code
            e.exit();
        }
    };

    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    let ctx = CommandEnv::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Normalize { raw, strict, json } => handle_normalize(&ctx, raw, strict, json),
        Commands::Classify { raw, locale, json } => {
            let locale = ctx.locale(locale);
            handle_classify(&ctx, raw, locale, json)
        }
        Commands::List { category, locale, json } => {
            let locale = ctx.locale(locale);
            handle_list(&ctx, category, locale, json)
        }
        Commands::Aliases { status, json } => handle_aliases(&ctx, status, json),
        Commands::Summary { file, json } => handle_summary(&ctx, file, json),
        Commands::Check => handle_check(&ctx),
    }
}

/// Resolve one input under the active policy, exiting with suggestions on rejection
fn resolve_or_exit(ctx: &CommandEnv, normalizer: &Normalizer<'_>, raw: &str) -> StatusKey {
    match normalizer.apply(raw) {
        Ok(key) => key,
        Err(e) => {
            let suggestions = suggest_statuses(raw, &ctx.table, 2);
            if suggestions.is_empty() {
                user_error(&e.to_string());
            }
            let names: Vec<&str> = suggestions.iter().map(|k| k.as_str()).collect();
            user_error(&format!("{}. Did you mean: {}?", e, names.join(", ")));
        }
    }
}

fn handle_normalize(ctx: &CommandEnv, raw: Vec<String>, strict: bool, json: bool) -> Result<()> {
    validate_inputs(&raw).unwrap_or_else(|e| user_error(&e));

    let mut normalizer = ctx.normalizer();
    if strict {
        normalizer = normalizer.with_policy(UnknownPolicy::Reject);
    }

    let keys: Vec<StatusKey> = raw
        .iter()
        .map(|value| resolve_or_exit(ctx, &normalizer, value))
        .collect();

    if json {
        let entries: Vec<serde_json::Value> = raw
            .iter()
            .zip(&keys)
            .map(|(input, key)| {
                serde_json::json!({
                    "input": input,
                    "status": key,
                    "fallback": normalizer.is_fallback(input),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for key in keys {
            println!("{}", key);
        }
    }
    Ok(())
}

fn handle_classify(ctx: &CommandEnv, raw: Vec<String>, locale: Locale, json: bool) -> Result<()> {
    validate_inputs(&raw).unwrap_or_else(|e| user_error(&e));

    let normalizer = ctx.normalizer();
    let records: Vec<ClassifiedRecord<'_>> = raw
        .iter()
        .map(|value| {
            let key = resolve_or_exit(ctx, &normalizer, value);
            ClassifiedRecord::new(value, key, locale)
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", format_classification(record, ctx.color));
        }
    }
    Ok(())
}

fn handle_list(ctx: &CommandEnv, category: Option<String>, locale: Locale, json: bool) -> Result<()> {
    let defs: Vec<&StatusDefinition> = match category {
        Some(value) => {
            let category = StatusCategory::from_str(&value).unwrap_or_else(|| {
                user_error(&format!(
                    "Unknown category '{}'. Use pending, in_progress, completed or cancelled.",
                    value
                ))
            });
            Catalog::by_category(category).collect()
        }
        None => Catalog::list_definitions().iter().collect(),
    };

    if json {
        let entries: Vec<serde_json::Value> = defs
            .iter()
            .map(|def| {
                serde_json::json!({
                    "key": def.key,
                    "label": def.label_for(locale),
                    "category": def.category,
                    "terminal": def.is_terminal,
                    "progress": def.progress,
                    "color": def.color,
                    "icon": def.icon,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_status_table(&defs, locale, ctx.color));
    }
    Ok(())
}

fn handle_aliases(ctx: &CommandEnv, status: Option<String>, json: bool) -> Result<()> {
    let keys: Vec<StatusKey> = match status {
        Some(value) => match ctx.table.resolve(&value) {
            Some(key) => vec![key],
            None => user_error(&StatusError::UnrecognizedStatus(value.trim().to_string()).to_string()),
        },
        None => StatusKey::ALL.to_vec(),
    };

    if json {
        let map: serde_json::Map<String, serde_json::Value> = keys
            .iter()
            .map(|key| (key.as_str().to_string(), serde_json::json!(ctx.table.aliases_for(*key))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for key in keys {
            println!("{}: {}", key, ctx.table.aliases_for(key).join(", "));
        }
    }
    Ok(())
}

/// Statuses from a JSON array of strings, or one per line
fn parse_status_input(input: &str) -> Result<Vec<String>> {
    if input.trim_start().starts_with('[') {
        let values: Vec<Option<String>> = serde_json::from_str(input)
            .context("Failed to parse JSON status array")?;
        // null entries count as missing statuses
        return Ok(values.into_iter().map(|v| v.unwrap_or_default()).collect());
    }
    Ok(input.lines().map(|line| line.to_string()).collect())
}

fn handle_summary(ctx: &CommandEnv, file: Option<PathBuf>, json: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read statuses from stdin")?;
            buf
        }
    };

    let values = parse_status_input(&input)?;
    let summary = summarize(&ctx.normalizer(), values.iter().map(|s| s.as_str()));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary, ctx.color));
    }
    Ok(())
}

fn handle_check(ctx: &CommandEnv) -> Result<()> {
    status::self_test().context("Status model self-test failed")?;
    ctx.table.verify().context("Configured alias table self-test failed")?;

    println!(
        "Status catalog OK: {} statuses, {} aliases",
        Catalog::list_definitions().len(),
        ctx.table.len()
    );
    Ok(())
}
