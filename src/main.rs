// Copyright 2020 TwoCookingMice

use dfglut::io::{write_table, OutputFormat};
use dfglut::renderers::table::{Renderer, TableRenderer};
use dfglut::{DfgIntegrator, DEFAULT_RESOLUTION, DEFAULT_SAMPLE_COUNT};

use clap::Parser;
use std::path::PathBuf;

/// Generate a DFG lookup texture, pre-integrated for multiscattering.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Horizontal and vertical resolution of the table.
    #[arg(short = 'r', long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,
    /// Number of importance samples per texel.
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: u32,
    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,
    /// Output file.
    #[arg(short = 'o', long)]
    output: PathBuf,
    /// Worker threads, 0 uses every available core.
    #[arg(short = 'j', long, default_value_t = 0)]
    threads: usize,
}

fn run(args: &Args) -> dfglut::Result<()> {
    let integrator = DfgIntegrator::new(args.samples)?;
    let renderer = TableRenderer::new(Box::new(integrator), args.resolution)
        .with_threads(args.threads)
        .with_progress(true);
    let table = renderer.render()?;
    write_table(&table, args.format, &args.output)?;
    log::info!("DFG table written to: {}.", args.output.display());
    Ok(())
}

fn main() {
    dfglut::init_logger();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
