use anyhow::Context;
use clap::Parser;
use drawio_tool::utils::logger;
use drawio_tool::{parse_diagram, render, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drawio-parse")]
#[command(about = "List the shapes of draw.io diagrams")]
struct Args {
    /// Diagram files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    for file in &args.files {
        println!("== Processing {}", file.display());

        let elements = parse_diagram(file)
            .with_context(|| format!("Failed to parse diagram '{}'", file.display()))?;
        tracing::debug!("{} shapes in {}", elements.len(), file.display());

        let report = render(&elements, args.format)
            .with_context(|| format!("Failed to render shapes of '{}'", file.display()))?;
        print!("{}", report);
        if !report.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
