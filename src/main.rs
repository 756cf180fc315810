mod cli;

use cli::Args;
use depsnap::adapters::outbound::console::StderrProgressReporter;
use depsnap::adapters::outbound::filesystem::FileSystemReader;
use depsnap::adapters::outbound::workspace::InMemoryWorkspaceContext;
use depsnap::application::dto::{OutputFormat, ReplayRequest};
use depsnap::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depsnap::application::read_models::SnapshotReadModelBuilder;
use depsnap::application::snapshot_store::SnapshotStore;
use depsnap::application::use_cases::ReplayScriptUseCase;
use depsnap::config::{discover_config, load_config_from_path, ConfigFile};
use depsnap::ports::outbound::{OutputPresenter, SnapshotFormatter};
use depsnap::shared::error::{ExitCode, SnapshotError};
use depsnap::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on its own)
    let args = Args::parse_args();

    // Load config: explicit path, or discovered next to the script
    let config = load_config(&args)?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let fail_on_unresolved = args.fail_on_unresolved || config.fail_on_unresolved.unwrap_or(false);
    let provider_types = config.provider_types.unwrap_or_default();

    // Create adapters (Dependency Injection)
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = ReplayScriptUseCase::new(
        FileSystemReader::new(),
        Arc::new(SnapshotStore::new()),
        InMemoryWorkspaceContext::new(),
        progress_reporter,
    );

    // Replay the script
    let response = use_case.execute(ReplayRequest::new(&args.script, provider_types.clone()))?;

    // Restrict to the requested target
    let mut targets = response.targets;
    if let Some(name) = args.target.as_deref() {
        targets.retain(|(context, _)| context.target_framework().matches_name(name));
        if targets.is_empty() {
            return Err(SnapshotError::UnknownTarget {
                target: name.to_string(),
            }
            .into());
        }
    }

    // Render and present
    let read_model = SnapshotReadModelBuilder::build(&targets, &provider_types);
    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let color = use_color(&args, format);
    let formatter: Box<dyn SnapshotFormatter> = FormatterFactory::create(format, color);
    let formatted_output = formatter.format(&read_model)?;

    let presenter: Box<dyn OutputPresenter> =
        PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    if fail_on_unresolved && read_model.any_unresolved() {
        eprintln!("⚠️  Unresolved dependencies found");
        return Ok(ExitCode::UnresolvedDependencies);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return load_config_from_path(path);
    }

    let dir = match args.script.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    Ok(discover_config(dir)?.unwrap_or_default())
}

/// Colors only for text written to an interactive terminal
fn use_color(args: &Args, format: OutputFormat) -> bool {
    format == OutputFormat::Text
        && !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
