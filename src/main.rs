use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod ascii;
mod bands;
mod export;
mod filter;
mod generate;
mod grid;
mod growth;

use generate::{NoiseFamily, NoiseParams};

#[derive(Parser, Debug)]
#[command(name = "noisegen")]
#[command(about = "Generate procedural 2D noise maps and terrain masks")]
struct Args {
    /// Width of the noise map in pixels
    #[arg(short = 'W', long, default_value = "256")]
    width: usize,

    /// Height of the noise map in pixels
    #[arg(short = 'H', long, default_value = "256")]
    height: usize,

    /// Noise family: uniform, growth, or coherent
    #[arg(short = 'f', long, default_value = "uniform")]
    family: String,

    /// Seed density for growth noise, in percent of cells
    #[arg(long, default_value = "0.8")]
    density: f64,

    /// Growth rounds before smoothing
    #[arg(long, default_value = "3")]
    spread: usize,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Classify the map into terrain colors before export
    #[arg(long)]
    terrain: bool,

    /// Sea level for terrain classification (0-255)
    #[arg(long, default_value = "24")]
    sea_level: u8,

    /// Apply a glow pass around maximum-intensity cells with this brightness
    #[arg(long)]
    glow: Option<f64>,

    /// Print the map as a glyph gradient to stdout
    #[arg(long)]
    ascii: bool,

    /// Output PNG path
    #[arg(short = 'o', long, default_value = "noise.png")]
    output: String,

    /// Also export the glyph map to a text file
    #[arg(long)]
    export_text: Option<String>,
}

fn main() {
    let args = Args::parse();

    let family: NoiseFamily = match args.family.parse() {
        Ok(family) => family,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Generating {} noise with seed: {}", family.name(), seed);
    println!("Map size: {}x{}", args.width, args.height);

    let params = NoiseParams {
        density_percent: args.density,
        spread_distance: args.spread,
    };

    let progress: &dyn Fn(usize, usize) =
        &|done, total| println!("  smoothing {}/{}", done, total);

    let start = Instant::now();
    let mut noise_map = match generate::generate(
        args.width,
        args.height,
        family,
        &params,
        &mut rng,
        Some(progress),
    ) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Generated in {:.2?}", start.elapsed());

    if let Some(brightness) = args.glow {
        println!("Applying glow (brightness {})...", brightness);
        filter::glow(&mut noise_map, brightness);
    }

    if args.ascii {
        print!("{}", ascii::render_text(&noise_map));
    }

    if let Some(ref path) = args.export_text {
        match ascii::export_text(&noise_map, path, seed) {
            Ok(()) => println!("Exported text map to: {}", path),
            Err(e) => {
                eprintln!("Error exporting text map: {}", e);
                std::process::exit(1);
            }
        }
    }

    let result = if args.terrain {
        println!("Classifying terrain (sea level {})...", args.sea_level);
        let terrain_bands = bands::terrain_bands(args.sea_level);
        let terrain = bands::classify(&noise_map, &terrain_bands);
        export::export_terrain(&terrain, &args.output)
    } else {
        export::export_intensity(&noise_map, &args.output)
    };

    match result {
        Ok(()) => println!("Exported noise map to: {}", args.output),
        Err(e) => {
            eprintln!("Error exporting image: {}", e);
            std::process::exit(1);
        }
    }
}
