use clap::{Parser, Subcommand};
use infring::config::{self, Config};
use infring::explain;
use infring::output::{self, OutputFormat, OutputOptions, Rendering};
use infring::render::Theme;
use modring::Diagram;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infring", version, about = "Draw modular arithmetic as infinity rings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: png, svg, json or text
    #[arg(short = 'f', long, global = true)]
    format: Option<OutputFormat>,

    /// Where to write the result (images default to infinity-ring.<ext>, data to stdout)
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    /// Canvas size in pixels
    #[arg(long, global = true)]
    size: Option<u32>,

    /// Describe what happened along the way
    #[arg(long, global = true)]
    explain: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Walk x <- (x + a) mod b from 0 until it is back at 0
    Add {
        /// The base number b (one tick per residue)
        #[arg(short, long, allow_negative_numbers = true)]
        base: Option<i64>,
        /// The addition number a
        #[arg(short, long, allow_negative_numbers = true)]
        addition: Option<i64>,
    },
    /// Join every x below b to (x * m) mod b
    Mult {
        /// The base number b (one tick per residue)
        #[arg(short, long, allow_negative_numbers = true)]
        base: Option<i64>,
        /// The multiplier m
        #[arg(short, long, allow_negative_numbers = true)]
        multiplier: Option<i64>,
    },
    /// Write the default config file if there is none, and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Commands::InitConfig = cli.command {
        let path = config::write_default_config(cli.config.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let diagram = build_diagram(&cli.command, &config)?;
    log::info!(
        "{} ring with base {} and operand {}: {} segments",
        diagram.mode,
        diagram.base,
        diagram.operand,
        diagram.walk.len()
    );

    let style = diagram
        .mode
        .arrow_style()
        .with_head_width(config.style.head_width)?;
    let arrows = diagram.arrows(&style);
    let theme = Theme::from(&config.theme);
    let options = OutputOptions {
        format: cli.format.unwrap_or(config.style.format),
        path: cli.output.as_deref(),
        size: cli.size.unwrap_or(config.style.size),
        theme: &theme,
    };
    let rendering = Rendering {
        diagram: &diagram,
        arrows: &arrows,
    };

    let written = output::write(&rendering, &options)?;

    if cli.explain {
        let lines = explain::narrate(&diagram);
        if written.is_some() {
            lines.iter().for_each(|line| println!("{line}"));
        } else {
            // stdout already carries the data
            lines.iter().for_each(|line| eprintln!("{line}"));
        }
    }

    if let Some(path) = written {
        log::info!("Wrote {}", path.display());
        println!("{}", path.display());
    }
    Ok(())
}

fn build_diagram(command: &Commands, config: &Config) -> anyhow::Result<Diagram> {
    let radius = config.style.radius;
    let diagram = match *command {
        Commands::Add { base, addition } => Diagram::additive(
            base.unwrap_or(config.additive.base),
            addition.unwrap_or(config.additive.addition),
            radius,
        )?,
        Commands::Mult { base, multiplier } => Diagram::multiplicative(
            base.unwrap_or(config.multiplicative.base),
            multiplier.unwrap_or(config.multiplicative.multiplier),
            radius,
        )?,
        Commands::InitConfig => anyhow::bail!("init-config does not draw a ring"),
    };
    Ok(diagram)
}

/// A broken default config falls back to the built-in values; an explicit one is fatal.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match config::load_config(cli.config.as_deref()) {
        Ok(c) => Ok(c),
        Err(e) if cli.config.is_none() => {
            log::error!("Failed to load config, using defaults: {}", e);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}
