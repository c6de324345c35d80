//! `nuvem` — generate a word cloud and frequency table from a chat log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use nuvem::frequency::{count_frequencies, frequency_table, print_table, FREQUENCY_THRESHOLD};
use nuvem::pipeline::Pipeline;
use nuvem::render::{render, RenderOptions};
use nuvem::settings::Settings;

/// Directory input files are resolved against.
const DATA_DIR: &str = "data";

#[derive(Debug, Parser)]
#[command(name = "nuvem", version, about = "Generate a word cloud from a text file")]
struct Cli {
    /// Input text file, relative to the data directory.
    file: String,

    /// Settings file.
    #[arg(long, default_value = "data/settings.toml")]
    settings: PathBuf,

    /// Directory the rendered image is written into.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Shape mask image; layout is confined to its non-white pixels.
    #[arg(long, default_value = "cloud.png")]
    mask: PathBuf,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let progress = ProgressBar::new(5).with_style(
        ProgressStyle::with_template("{msg:<28} {bar:40.cyan} {pos}/{len}")
            .expect("static progress template"),
    );
    progress.set_message("Generating wordcloud...");

    // Settings and patterns resolve before any text is read; a malformed
    // document or pattern aborts here with no partial output.
    let settings = Settings::load(&cli.settings)?;
    let pipeline = Pipeline::new(&settings)?;
    progress.inc(1);

    let input_path = PathBuf::from(DATA_DIR).join(&cli.file);
    let text = std::fs::read_to_string(&input_path)
        .with_context(|| format!("cannot read input file: {}", input_path.display()))?;
    let tokens = pipeline.preprocess(&text);
    progress.inc(1);

    let lemmas = pipeline.lemmatize(&tokens);
    info!("{} tokens survived filtering, {} lemmas", tokens.len(), lemmas.len());
    progress.inc(1);

    let counts = count_frequencies(&lemmas);
    let rows = frequency_table(&counts, FREQUENCY_THRESHOLD);
    progress.inc(1);

    let stem = input_path
        .file_stem()
        .context("input filename has no stem")?
        .to_string_lossy()
        .into_owned();
    let output_path = cli.output_dir.join(format!("{}.png", stem));

    let options = RenderOptions {
        mask_path: cli.mask.exists().then(|| cli.mask.clone()),
        ..RenderOptions::default()
    };
    // The cloud draws every counted lemma (up to max_words); the console
    // table below only shows those at or above the threshold.
    let cloud_rows = frequency_table(&counts, 1);
    render(&cloud_rows, &options, &output_path)?;
    progress.inc(1);
    progress.finish_and_clear();

    info!("wrote {}", output_path.display());
    print_table(&rows);
    Ok(())
}
