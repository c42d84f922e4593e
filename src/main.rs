use anyhow::{Context, Result};
use clap::Parser;
use lightgrid::{debug, parse_instructions, GridConfig, GridLike, LightGrid, SANTA_INSTRUCTIONS};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Applies santa's light instructions to a grid and reports its brightness.
#[derive(Parser, Debug)]
#[command(name = "lightgrid", version)]
struct Cli {
    /// Number of rows in the grid
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Number of lights per row
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Run range operations and sums on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// Print the whole grid after applying the instructions
    #[arg(long)]
    dump: bool,

    /// Instructions such as "turn on 0,0 through 9,9"; defaults to the santa list
    instructions: Vec<String>,
}

impl Cli {
    fn config(&self) -> GridConfig {
        GridConfig {
            enable_parallel: self.parallel,
            ..GridConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lines: Vec<&str> = if cli.instructions.is_empty() {
        SANTA_INSTRUCTIONS.to_vec()
    } else {
        cli.instructions.iter().map(String::as_str).collect()
    };
    let instructions = parse_instructions(lines).context("Failed to parse instructions")?;

    let mut grid = LightGrid::with_config(cli.width, cli.height, cli.config())
        .context("Failed to create grid")?;
    info!(
        "Applying {} instructions to a {}x{} grid",
        instructions.len(),
        cli.width,
        cli.height
    );
    grid.apply_all(&instructions)
        .context("Failed to apply instructions")?;

    println!("total brightness: {}", grid.total_light_value());
    println!("lights on: {}", grid.lights_on());
    println!("lights off: {}", grid.lights_off());

    if cli.dump {
        debug::write_dump(&grid, std::io::stdout().lock()).context("Failed to dump grid")?;
    }

    Ok(())
}
