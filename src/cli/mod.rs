pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::ReportKind;
use tracing::{info, level_filters::LevelFilter, warn};

use crate::{
    fs::operations::write_report,
    model::parser::load,
    utils::{
        dir::create_application_default_path,
        logging::{CLI_PREFIX, enable_logging},
    },
};

pub const DEFAULT_INPUT: &str = "Activities.txt";

#[derive(Parser, Debug)]
#[command(name = "Actilog", version, long_about = None)]
#[command(about = "Statistics over a log of activity intervals", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        short,
        default_value = DEFAULT_INPUT,
        help = "Activity log. Each line is START, END and NAME separated by two tabs"
    )]
    input: PathBuf,
    #[arg(long, help = "Print logs to stderr")]
    log: bool,
    #[arg(long = "log-filter", help = "Log level. Defaults to RUST_LOG or info")]
    log_filter: Option<LevelFilter>,
    #[arg(
        long = "log-dir",
        help = "Log directory. Defaults to $XDG_STATE_HOME/actilog/logs or \
                $HOME/.local/state/actilog/logs"
    )]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Count distinct days covered by the log")]
    Days {
        #[command(flatten)]
        options: ReportOptions,
    },
    #[command(about = "Count occurrences of each activity")]
    Occurrences {
        #[command(flatten)]
        options: ReportOptions,
    },
    #[command(about = "Count occurrences of each activity per day of year")]
    Daily {
        #[command(flatten)]
        options: ReportOptions,
    },
    #[command(about = "Total duration of activities that took at least 10 hours")]
    Durations {
        #[arg(long, help = "Show totals of every activity, not only the ones over 10 hours")]
        all: bool,
        #[command(flatten)]
        options: ReportOptions,
    },
    #[command(about = "Activities with 90% of instances below 5 minutes")]
    Short {
        #[command(flatten)]
        options: ReportOptions,
    },
    #[command(about = "Duration of every record in the log")]
    Records {
        #[command(flatten)]
        options: ReportOptions,
    },
}

impl Commands {
    fn into_parts(self) -> (ReportKind, ReportOptions) {
        match self {
            Commands::Days { options } => (ReportKind::DistinctDays, options),
            Commands::Occurrences { options } => (ReportKind::Occurrences, options),
            Commands::Daily { options } => (ReportKind::DailyOccurrences, options),
            Commands::Durations { all: false, options } => (ReportKind::LongDurations, options),
            Commands::Durations { all: true, options } => (ReportKind::AllDurations, options),
            Commands::Short { options } => (ReportKind::ShortActivities, options),
            Commands::Records { options } => (ReportKind::RecordDurations, options),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
struct ReportOptions {
    #[arg(
        long,
        short,
        help = "Save the report into this file instead of the default one"
    )]
    output: Option<PathBuf>,
    #[arg(long = "no-save", help = "Only print the report")]
    no_save: bool,
    #[arg(long, help = "Print the underlying numbers as JSON")]
    json: bool,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let log_dir = match &args.log_dir {
        Some(dir) => dir.clone(),
        None => create_application_default_path()?.join("logs"),
    };
    enable_logging(CLI_PREFIX, &log_dir, args.log_filter, args.log)?;

    let report = execute(args).await?;
    print!("{report}");
    Ok(())
}

/// Loads the log, renders the requested report and saves it. Returns the rendered report.
pub async fn execute(
    Args {
        commands, input, ..
    }: Args,
) -> Result<String> {
    let (kind, options) = commands.into_parts();

    let records = load(&input).await?;
    info!("Loaded {} records from {input:?}", records.len());

    let report = if options.json {
        kind.render_json(&records)? + "\n"
    } else {
        kind.render(&records)
    };

    if kind == ReportKind::LongDurations && !options.json && report.is_empty() {
        warn!("No activity took at least 10 hours, `durations --all` shows every total");
    }

    let destination = options
        .output
        .or_else(|| kind.default_file_name().map(PathBuf::from));
    match destination {
        Some(path) if !options.no_save => {
            write_report(&path, &report).await?;
            info!("Saved {kind:?} report into {path:?}");
        }
        _ => (),
    }

    Ok(report)
}
