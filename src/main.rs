//! Atlas Pack CLI - Validate an Aseprite export and write the atlas JSON.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use atlas_pack::{AtlasConfig, parse_atlas_json};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <atlas.json> [out.json]", args[0]);
        eprintln!();
        eprintln!("Validate an Aseprite sprite sheet export and print its films.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  atlas.json  Aseprite JSON export");
        eprintln!("  out.json    Write the parsed atlas JSON here (optional)");
        eprintln!();
        eprintln!("Expected film IDs are read from <atlas>.config.json if present.");
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    let atlas_path = PathBuf::from(&args[1]);
    let out_path = args.get(2).map(PathBuf::from);

    let json = fs::read_to_string(&atlas_path).unwrap_or_else(|e| {
        eprintln!("Error reading atlas file: {}", e);
        std::process::exit(1);
    });

    // Load optional configuration
    let config_path = atlas_path.with_extension("config.json");
    let config: AtlasConfig = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        AtlasConfig::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let start = Instant::now();
    let atlas = parse_atlas_json(&json, config.ids.as_ref()).unwrap_or_else(|e| {
        eprintln!("Invalid atlas: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    println!("Atlas {}", atlas.filename);
    println!("==========");
    println!("Aseprite: {}", atlas.version);
    println!("Image: {}x{} {}", atlas.wh.w, atlas.wh.h, atlas.format);
    println!("Films: {}", atlas.film_by_id.len());
    println!("Cels: {}", atlas.cel_count());
    println!();

    for film in atlas.film_by_id.values() {
        let loops = film
            .loops
            .map_or_else(|| "∞".to_string(), |loops| loops.to_string());
        println!(
            "  {}: {}x{} {}, {} cels ({} entries), period {}, duration {}, loops {}",
            film.id,
            film.wh.w,
            film.wh.h,
            film.direction,
            film.distinct_cels().count(),
            film.cels.len(),
            film.period,
            film.duration,
            loops
        );
    }
    println!();
    println!("Parsed in {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(out_path) = out_path {
        let out = atlas.to_json_pretty().unwrap_or_else(|e| {
            eprintln!("Error serializing atlas: {}", e);
            std::process::exit(1);
        });
        fs::write(&out_path, out).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {}", out_path.display(), e);
            std::process::exit(1);
        });
        println!("Wrote {}", out_path.display());
    }
}

fn print_example_config() {
    let config = AtlasConfig::with_ids(["frog--idle", "frog--walk"]);

    println!("Example configuration (atlas.config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
