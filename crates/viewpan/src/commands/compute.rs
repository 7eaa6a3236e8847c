use clap::Args;

use viewpan_core::{Rect, compute_offset, config, log, log_debug};

/// Arguments for the `compute` subcommand.
#[derive(Args)]
pub struct ComputeArgs {
    /// Stage rectangle as LEFT,TOP,WIDTHxHEIGHT (e.g. 0,0,1000x800)
    #[arg(long)]
    stage: Option<String>,
    /// Target rectangle as LEFT,TOP,WIDTHxHEIGHT
    #[arg(long)]
    target: Option<String>,
    /// Whether the side panel is currently open
    #[arg(long)]
    panel_open: bool,
    /// Override the configured bar height in pixels
    #[arg(long)]
    bar_height: Option<f64>,
    /// Override the configured panel width in pixels
    #[arg(long)]
    panel_width: Option<f64>,
    /// Print the offset as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &ComputeArgs) {
    let config = config::load();
    log::init(&config.log);

    let mut chrome = config.chrome;
    if let Some(height) = args.bar_height {
        chrome.bar_height = height;
    }
    if let Some(width) = args.panel_width {
        chrome.panel_width = width;
    }

    let stage = parse_rect_flag(args.stage.as_deref(), "--stage");
    let target = parse_rect_flag(args.target.as_deref(), "--target");

    let offset = compute_offset(stage.as_ref(), target.as_ref(), args.panel_open, &chrome);
    log_debug!(
        "compute stage={stage:?} target={target:?} panel_open={} -> ({}, {})",
        args.panel_open,
        offset.dx,
        offset.dy
    );

    if args.json {
        match serde_json::to_string(&offset) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                // serde_json refuses non-finite floats.
                eprintln!("Error: could not encode offset as JSON: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("dx: {} dy: {}", offset.dx, offset.dy);
    }
}

/// Parses an optional rect flag, exiting with an error message when the
/// value is present but malformed. An absent flag stays absent: the
/// calculator turns it into the zero offset.
fn parse_rect_flag(value: Option<&str>, flag: &str) -> Option<Rect> {
    let value = value?;
    match parse_rect(value) {
        Ok(rect) => Some(rect),
        Err(e) => {
            eprintln!("Error: {flag}: {e}");
            std::process::exit(1);
        }
    }
}

/// Parses a rectangle from `LEFT,TOP,WIDTHxHEIGHT`.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let &[left, top, size] = parts.as_slice() else {
        return Err(format!("invalid rect '{s}': expected LEFT,TOP,WIDTHxHEIGHT"));
    };
    let Some((width, height)) = size.split_once('x') else {
        return Err(format!("invalid rect '{s}': expected LEFT,TOP,WIDTHxHEIGHT"));
    };

    let num = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid rect '{s}': {e}"))
    };
    Ok(Rect::new(num(left)?, num(top)?, num(width)?, num(height)?))
}
