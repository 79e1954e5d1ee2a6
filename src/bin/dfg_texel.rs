use dfglut::{integrate_dfg, DEFAULT_SAMPLE_COUNT};

use clap::Parser;

/// Integrate a single DFG texel and print both channels.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Cosine between the normal and the view direction, in (0, 1].
    nov: f64,
    /// Roughness (squared perceptual roughness), in (0, 1].
    a: f64,
    /// Number of importance samples.
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: u32,
}

fn main() {
    dfglut::init_logger();

    let args = Args::parse();
    match integrate_dfg(args.nov, args.a, args.samples) {
        Ok(texel) => println!(
            "nov={} a={} spp={} -> DFG1 {:.6}, DFG2 {:.6}",
            args.nov, args.a, args.samples, texel.dfg1, texel.dfg2
        ),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
