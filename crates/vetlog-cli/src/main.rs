use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;
use vetlog_cli::{commands, config};
use vetlog_core::models::profile::{ProfileId, ProfileType};
use vetlog_storage::logs::FileLogStore;

#[derive(Debug, Parser)]
#[command(
    name = "vetlog",
    version,
    about = "Estimate VA disability ratings from symptom logs"
)]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config directory instead of the platform default
    #[arg(long, global = true, env = "VETLOG_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the conditions that can be analyzed
    Conditions,
    /// Estimate supported ratings for a profile
    Analyze(AnalyzeArgs),
    /// Print a rating summary for a profile
    Report(ReportArgs),
    /// Add a symptom log entry
    Record(RecordArgs),
    /// Append logs from an exported JSON array
    Import {
        path: PathBuf,
    },
    /// Test whether a percentage falls within a supported rating
    Check {
        percent: i64,
        /// A number, or a "low-high" range
        supported: String,
    },
    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
struct ProfileArg {
    /// Profile to analyze (defaults to the configured profile)
    #[arg(long)]
    profile: Option<String>,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    profile: ProfileArg,

    /// Only this condition (see `vetlog conditions`)
    #[arg(long)]
    condition: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ReportArgs {
    #[command(flatten)]
    profile: ProfileArg,

    /// Also save the summary in the data directory
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Args)]
struct RecordArgs {
    #[command(flatten)]
    profile: ProfileArg,

    /// Symptom label; repeat for several
    #[arg(long = "symptom", required = true)]
    symptoms: Vec<String>,

    /// Condition tag to link; repeat for several
    #[arg(long = "condition")]
    conditions: Vec<String>,

    #[arg(long)]
    notes: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the current configuration
    Show,
    /// Set who is using the app: veteran or caregiver
    SetProfileType { profile_type: ProfileType },
    /// Set the profile used when --profile is omitted
    SetDefaultProfile { profile: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::config_dir()?,
    };
    let mut cfg = config::load_or_init(&config_dir, config::default_data_dir)?;
    let data_dir = cli.data_dir.unwrap_or_else(|| cfg.data_dir.clone());
    let store = FileLogStore::new(data_dir);

    let resolve = |arg: &ProfileArg| -> Result<ProfileId> {
        let raw = arg
            .profile
            .as_deref()
            .or(cfg.default_profile.as_deref())
            .ok_or_else(|| eyre::eyre!("no --profile given and no default profile configured"))?;
        Ok(ProfileId::parse(raw)?)
    };

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Conditions => commands::list_conditions(&mut stdout)?,
        Command::Analyze(args) => {
            let profile = resolve(&args.profile)?;
            commands::analyze(&store, &profile, args.condition.as_deref(), args.json, &mut stdout)?;
        }
        Command::Report(args) => {
            let profile = resolve(&args.profile)?;
            commands::report(&store, &profile, cfg.profile_type, args.save, &mut stdout)?;
        }
        Command::Record(args) => {
            let profile = resolve(&args.profile)?;
            let log = commands::record(
                &store,
                &profile,
                &args.symptoms,
                &args.conditions,
                args.notes.as_deref(),
            )?;
            if let Some(id) = log.id {
                writeln!(stdout, "recorded {id}")?;
            }
        }
        Command::Import { path } => {
            let count = commands::import(&store, &path)?;
            writeln!(stdout, "imported {count} logs")?;
        }
        Command::Check { percent, supported } => {
            commands::check(percent, &supported, &mut stdout)?;
        }
        Command::Config(ConfigCommand::Show) => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&cfg)?)?;
        }
        Command::Config(ConfigCommand::SetProfileType { profile_type }) => {
            cfg.profile_type = profile_type;
            config::save_config(&config_dir, &cfg)?;
        }
        Command::Config(ConfigCommand::SetDefaultProfile { profile }) => {
            cfg.default_profile = Some(ProfileId::parse(&profile)?.to_string());
            config::save_config(&config_dir, &cfg)?;
        }
    }
    Ok(())
}
