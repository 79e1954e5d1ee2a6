use dfglut::io::raw::read_raw_file;

use clap::Parser;
use std::path::PathBuf;

/// Print size and per-channel statistics of a raw half-float DFG table.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw table to inspect.
    input: PathBuf,
    /// Resolution the table was generated with.
    resolution: usize,
}

fn main() {
    dfglut::init_logger();

    let args = Args::parse();
    let table = match read_raw_file(&args.input, args.resolution) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("failed to read {}: {}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut sum = (0.0f64, 0.0f64);

    for texel in table.texels() {
        min.0 = min.0.min(texel.dfg1);
        min.1 = min.1.min(texel.dfg2);
        max.0 = max.0.max(texel.dfg1);
        max.1 = max.1.max(texel.dfg2);
        sum.0 += texel.dfg1;
        sum.1 += texel.dfg2;
    }

    let n = table.texels().len() as f64;
    println!("Size: {}x{} ({} texels)", table.width(), table.height(), table.texels().len());
    println!("Min DFG: {:.6}, {:.6}", min.0, min.1);
    println!("Max DFG: {:.6}, {:.6}", max.0, max.1);
    println!("Mean DFG: {:.6}, {:.6}", sum.0 / n, sum.1 / n);
}
