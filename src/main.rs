use clap::Parser;
use drawio_tool::utils::{logger, validation::Validate};
use drawio_tool::{
    create_and_open, opener_for, ConfigProvider, DrawioError, EnvConfig, FileCreator, NewArgs,
    Settings, TomlConfig,
};
use std::path::PathBuf;

fn main() {
    let args = NewArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Could not create diagram: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(args: &NewArgs) -> Result<PathBuf, DrawioError> {
    let file_config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let env_config = EnvConfig::from_env();
    let mut sources: Vec<&dyn ConfigProvider> = Vec::new();
    sources.push(args);
    sources.push(&env_config);
    if let Some(config) = &file_config {
        sources.push(config);
    }
    let settings = Settings::resolve(&sources)?;

    let creator = FileCreator::from_settings(&settings);
    let requested = args.file_name.as_deref().unwrap_or_default();
    let opener = opener_for(&settings.open);

    create_and_open(&creator, requested, opener.as_ref())
}
