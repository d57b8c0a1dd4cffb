use clap::Parser;
use tracing_subscriber::EnvFilter;

use scaffold_audit::checker::AuditRunner;
use scaffold_audit::checks::default_checks;
use scaffold_audit::cli::Cli;
use scaffold_audit::config::{AuditConfig, ConfigLoader, FileConfigLoader};
use scaffold_audit::output::{ConsoleReporter, write_reports};
use scaffold_audit::{AuditError, EXIT_CONFIG_ERROR, exit_code_for};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.suggestion() {
                eprintln!("  Hint: {hint}");
            }
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> scaffold_audit::Result<i32> {
    let root = &cli.root;
    if !root.is_dir() {
        return Err(AuditError::Config(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    let config = load_config(cli)?;
    let checks = default_checks(&config, !cli.no_external)?;

    let mut console = ConsoleReporter::stdout(cli.color.into(), cli.quiet);
    console.start();
    let report = AuditRunner::new(root.clone(), checks).run(&mut console);
    console.summary(&report);

    let written = write_reports(root, &report, &config.report)?;
    console.saved("Full report", &written.text);
    console.saved("JSON report", &written.json);
    console.finish(&report);

    Ok(exit_code_for(&report))
}

fn load_config(cli: &Cli) -> scaffold_audit::Result<AuditConfig> {
    if cli.no_config {
        return Ok(AuditConfig::default());
    }

    let loader = FileConfigLoader::new();
    cli.config.as_deref().map_or_else(
        || loader.load(&cli.root),
        |path| loader.load_from_path(path),
    )
}
