use clap::Parser;
use log::debug;
use mealkit_import::pipelines::session;
use mealkit_import::{Importer, OutputFormat, Settings};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Import Blue Apron and Hello Fresh recipes for a static recipe site.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Recipe URLs; prompts for URLs when none are given
    urls: Vec<String>,

    /// Output document format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory for recipe documents
    #[arg(long)]
    recipes_dir: Option<PathBuf>,

    /// Directory for downloaded images
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Only emit layout, title, image, tags, ingredients and directions
    #[arg(long)]
    no_extended: bool,

    /// Import the configured sample URL once
    #[arg(long)]
    test: bool,

    /// Print the extracted recipe as JSON instead of writing files
    #[arg(long)]
    extract_only: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.render.format = format;
        }
        if let Some(dir) = &self.recipes_dir {
            settings.recipes_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.images_dir {
            settings.images_dir = dir.clone();
        }
        if self.no_extended {
            settings.render.include_extended_fields = false;
        }
        if self.test {
            settings.test_mode = true;
        }
    }
}

/// Lines from stdin, prompting before each read.
fn prompt_lines() -> impl Iterator<Item = String> {
    let stdin = io::stdin();
    std::iter::from_fn(move || {
        println!("Enter URL (exit to quit): ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    cli.apply(&mut settings);
    debug!("{:#?}", settings);

    let test_url = settings.test_mode.then(|| settings.test_url.clone());
    let importer = Importer::new(settings)?;

    if cli.extract_only {
        for url in test_url.iter().chain(&cli.urls) {
            let recipe = importer.extract(url)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        return Ok(());
    }

    let mut out = io::stdout();
    let summary = if let Some(url) = test_url {
        writeln!(out, "Executing test download")?;
        session::run(&importer, [url], &mut out)?
    } else if !cli.urls.is_empty() {
        session::run(&importer, cli.urls.clone(), &mut out)?
    } else {
        session::run(&importer, prompt_lines(), &mut out)?
    };

    debug!(
        "Imported {} recipe(s), {} failure(s)",
        summary.imported.len(),
        summary.failures.len()
    );
    Ok(())
}
