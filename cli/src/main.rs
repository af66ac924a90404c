mod list;
mod show;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookscale_core::{parse, Recipe};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::show::{DragArg, ShowOptions};

#[derive(Parser)]
#[command(name = "cookscale")]
#[command(about = "Scale and follow Cooklang recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the recipes in a directory
    List {
        /// Directory holding .cook files
        #[arg(long, default_value = "recipes")]
        dir: PathBuf,
    },
    /// Show a recipe with scaled quantities
    Show {
        /// Recipe name (file stem) or path to a .cook file
        recipe: String,
        /// Directory holding .cook files
        #[arg(long, default_value = "recipes")]
        dir: PathBuf,
        /// Scale factor applied to every quantity
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Mark a step done (1-based, repeatable)
        #[arg(long = "done")]
        done: Vec<usize>,
        /// Drag ingredient I (1-based) by DX pixels, e.g. "2:35" or "1:-20"
        #[arg(long, value_parser = show::parse_drag)]
        drag: Option<DragArg>,
    },
    /// Print the parsed recipe as JSON
    Json {
        /// Recipe name (file stem) or path to a .cook file
        recipe: String,
        /// Directory holding .cook files
        #[arg(long, default_value = "recipes")]
        dir: PathBuf,
    },
}

/// Console logging to stderr, filtered by RUST_LOG.
fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { dir } => {
            for summary in list::list_recipes(&dir)? {
                println!("{}: {}", summary.stem, summary.title);
            }
        }
        Commands::Show {
            recipe,
            dir,
            scale,
            done,
            drag,
        } => {
            let recipe = load_recipe(&dir, &recipe)?;
            let options = ShowOptions { scale, done, drag };
            print!("{}", show::render(recipe, &options)?);
        }
        Commands::Json { recipe, dir } => {
            let recipe = load_recipe(&dir, &recipe)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
    }

    Ok(())
}

/// Resolve a recipe by stem under `dir`, or use it directly as a path.
fn recipe_path(dir: &Path, recipe: &str) -> PathBuf {
    if recipe.ends_with(".cook") || recipe.contains(std::path::MAIN_SEPARATOR) {
        PathBuf::from(recipe)
    } else {
        dir.join(format!("{}.cook", recipe))
    }
}

fn load_recipe(dir: &Path, recipe: &str) -> Result<Recipe> {
    let path = recipe_path(dir, recipe);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read recipe {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse recipe {}", path.display()))
}
