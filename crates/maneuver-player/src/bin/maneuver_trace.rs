//! Maneuver trace CLI
//!
//! Plays a built-in shape on a simulated clock and prints every point the
//! pointer visits.
//!
//! # Usage
//!
//! ```bash
//! # 120-tick circle as x,y lines
//! maneuver-trace circle
//!
//! # 60-tick heart as a JSON array, with a custom frame interval
//! maneuver-trace heart 60 --config player.json --json
//! ```

use std::path::Path;
use std::process;

use maneuver_core::Result;
use maneuver_math::{dvec2, Point};
use maneuver_player::{HeadlessPlayer, ManeuverPlayer, PlayerConfig, TraceRecorder};
use maneuver_shapes::Maneuver;

const DEFAULT_TICKS: usize = 120;

fn print_usage() {
    eprintln!(
        r#"Maneuver trace CLI

USAGE:
    maneuver-trace <shape> [ticks] [--config <player.json>] [--json]

ARGS:
    <shape>     One of: circle, heart, arc, line
    [ticks]     Number of ticks the shape takes (default 120)

OPTIONS:
    --config    Load player settings from a JSON file
    --json      Print the trace as a JSON array instead of x,y lines
    --help      Show this help message
"#
    );
}

struct Options {
    shape: String,
    ticks: usize,
    config: Option<String>,
    json: bool,
}

fn parse_args(args: &[String]) -> std::result::Result<Options, String> {
    let mut shape = None;
    let mut ticks = None;
    let mut config = None;
    let mut json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = iter.next().ok_or("--config requires a file path")?;
                config = Some(path.clone());
            }
            other if other.starts_with("--") => return Err(format!("unknown option {}", other)),
            other if shape.is_none() => shape = Some(other.to_string()),
            other if ticks.is_none() => {
                let n = other
                    .parse::<usize>()
                    .map_err(|_| format!("ticks must be a positive integer, got {}", other))?;
                ticks = Some(n);
            }
            other => return Err(format!("unexpected argument {}", other)),
        }
    }

    Ok(Options {
        shape: shape.ok_or("missing required argument <shape>")?,
        ticks: ticks.unwrap_or(DEFAULT_TICKS),
        config,
        json,
    })
}

fn build_shape(name: &str, ticks: usize) -> Result<Maneuver> {
    match name {
        "circle" => maneuver_shapes::circle(ticks),
        "heart" => maneuver_shapes::heart(ticks),
        "arc" => maneuver_shapes::arc(ticks, dvec2(-1.0, 0.0), dvec2(1.0, 0.0), 0.5),
        "line" => maneuver_shapes::line(ticks, dvec2(0.0, 0.0), dvec2(1.0, 1.0)),
        other => Err(maneuver_core::ManeuverError::InvalidOperation(format!(
            "unknown shape {}",
            other
        ))),
    }
}

fn trace(maneuver: Maneuver, config: PlayerConfig) -> Vec<Point> {
    let mut player = HeadlessPlayer::new(TraceRecorder::new(), config);
    player.play(maneuver);
    while player.is_running() {
        player.run(config.frame_interval());
    }
    log::info!("traced {} frames", player.frames());
    player.into_sink().points
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        process::exit(0);
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_usage();
            process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => PlayerConfig::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {}", path, e);
            process::exit(1);
        }),
        None => PlayerConfig::default(),
    };

    let maneuver = build_shape(&options.shape, options.ticks).unwrap_or_else(|e| {
        eprintln!("Error building {}: {}", options.shape, e);
        process::exit(1);
    });

    let points = trace(maneuver, config);
    if options.json {
        let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        match serde_json::to_string(&pairs) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding trace: {}", e);
                process::exit(1);
            }
        }
    } else {
        for p in &points {
            println!("{:.6},{:.6}", p.x, p.y);
        }
    }
}
