use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::config::TreeConfig;
use crate::output::write_rendering;
use crate::tree::{Branches, TreeBuilder};
use crate::values::Value;

/// bintree - complete binary tree generator
///
/// With no arguments, builds one tree of random depth filled with random
/// values and prints it.
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tree depth (default: random, from the configured depth range)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i32>,

    /// Comma-separated node values, repeated as needed (default: random)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Option<Vec<Value>>,

    /// Seed for random depth and values
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: bintree.toml in this or any parent directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the constructor-style representation instead of the pretty one
    #[arg(long)]
    repr: bool,

    /// Also write the rendering to this file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => TreeConfig::load(path)?,
            None => TreeConfig::discover()?,
        };

        let Some(content) = self.render(&config)? else {
            tracing::warn!("depth yields no nodes, nothing to print");
            return Ok(());
        };

        println!("{}", content);

        if let Some(path) = &self.output {
            write_rendering(&content, path)?;
            tracing::info!("Wrote tree to: {:?}", path);
        }

        Ok(())
    }

    /// Build the tree and render it, or `None` when the depth yields no nodes
    pub fn render(&self, config: &TreeConfig) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let depth = match self.depth {
            Some(depth) => depth,
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                config.depth.pick(&mut rng)
            }
        };

        tracing::info!(depth, seed = ?self.seed, "generating tree");

        let Some(tree) = TreeBuilder::generate(depth, self.values.clone(), config.values, self.seed)
        else {
            return Ok(None);
        };

        let content = if self.repr {
            tree.to_string()
        } else {
            tree.pretty()?
        };

        Ok(Some(content))
    }
}
