//! Chartbook CLI — figure listing, rendering, and sample data commands.
//!
//! Commands:
//! - `list` — print the figure catalog
//! - `render` — render figures (all or one) into an output directory
//! - `sample-data` — write the built-in datasets as CSV files

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use chartbook_core::data::sample;
use chartbook_render::figures::{catalog, find_figure, Datasets, Figure};
use chartbook_render::{render_figures, OutputFormat, RenderConfig, RenderOptions, RenderSummary};

#[derive(Parser)]
#[command(name = "chartbook", about = "Chartbook CLI — declarative chart figures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the figure catalog.
    List,

    /// Render figures into an output directory.
    Render {
        /// Render only this figure id (defaults to the whole catalog).
        #[arg(long)]
        figure: Option<String>,

        /// Directory with stocks.csv, athletes.csv, proteins.csv.
        /// Defaults to the built-in sample data.
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output directory for figures and manifest.json.
        #[arg(long, default_value = "figures")]
        out_dir: PathBuf,

        /// Output format: svg or html. Overrides the config file when given.
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Path to a render settings TOML file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the built-in sample datasets as CSV files.
    SampleData {
        /// Output directory.
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => run_list(),
        Commands::Render {
            figure,
            data_dir,
            out_dir,
            format,
            config,
        } => run_render(figure, data_dir, out_dir, format, config),
        Commands::SampleData { out_dir } => run_sample_data(out_dir),
    }
}

fn run_list() -> Result<()> {
    for figure in catalog() {
        println!("{:<22} {}", figure.id, figure.title);
    }
    Ok(())
}

fn run_render(
    figure: Option<String>,
    data_dir: Option<PathBuf>,
    out_dir: PathBuf,
    format: Option<OutputFormat>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let figures: Vec<Figure> = match &figure {
        Some(id) => match find_figure(id) {
            Some(f) => vec![*f],
            None => bail!("unknown figure '{id}' (run `chartbook list` for the catalog)"),
        },
        None => catalog().to_vec(),
    };

    let datasets = match &data_dir {
        Some(dir) => Datasets::from_dir(dir)?,
        None => Datasets::sample(),
    };

    let config = match &config_path {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let options = render_options(&config, format)?;

    let summary = render_figures(&figures, &datasets, &options, &out_dir)?;
    print_summary(&summary, &out_dir);

    if !summary.all_ok() {
        std::process::exit(1);
    }
    Ok(())
}

fn render_options(config: &RenderConfig, format: Option<OutputFormat>) -> Result<RenderOptions> {
    Ok(RenderOptions {
        width: config.width,
        height: config.height,
        // The command-line flag wins over the config file.
        format: format.unwrap_or(config.format),
        theme_override: config.theme_override()?,
    })
}

fn run_sample_data(out_dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&out_dir)?;
    sample::write_sample_csvs(&out_dir)?;
    println!("Sample data written to: {}", out_dir.display());
    Ok(())
}

fn print_summary(summary: &RenderSummary, out_dir: &Path) {
    for record in &summary.written {
        println!("OK    {:<22} -> {}", record.id, record.file);
    }
    for (id, err) in &summary.failures {
        eprintln!("FAIL  {id:<22} {err}");
    }
    println!(
        "{} rendered, {} failed, output in {}",
        summary.written.len(),
        summary.failures.len(),
        out_dir.display()
    );
}
