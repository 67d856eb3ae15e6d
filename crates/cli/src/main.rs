#![deny(unsafe_code)]
//! CLI binary for the huebox color picker core.
//!
//! Subcommands:
//! - `convert <color>` — decode a color string, print every representation
//! - `gradient <hue>` — print the saturation/value gradient rows for a hue

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use huebox_core::{hsv_to_hsl, parse_color_string, Hsv};
use huebox_picker::{gradient_rows, PickerState};
use std::process;

#[derive(Parser)]
#[command(name = "huebox", about = "Color picker conversion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a color string and print every representation.
    Convert {
        /// Color in any accepted notation: "#rrggbb", "#rgb", "rgb(r, g, b)",
        /// or "hsl(h, s%, l%)".
        color: String,

        /// Fall back to the picker default color on unrecognized input
        /// instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Print the saturation/value gradient rows for a hue.
    Gradient {
        /// Hue in degrees; values outside [0, 360) wrap.
        hue: f64,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color, lenient } => {
            let hsv = if lenient {
                parse_color_string(&color).unwrap_or_default()
            } else {
                parse_color_string(&color)?
            };
            let state = PickerState::with_color(hsv);
            let rgb = state.rgb();
            let hsl = state.hsl();

            if cli.json {
                let info = serde_json::json!({
                    "hex": state.hex(),
                    "rgb": { "r": rgb.r, "g": rgb.g, "b": rgb.b },
                    "hsl": hsl,
                    "hsv": hsv,
                    "css_rgb": state.css_rgb(),
                    "css_hsl": state.css_hsl(),
                    "foreground": state.foreground(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", state.hex());
                println!("{}", state.css_rgb());
                println!("{}", state.css_hsl());
                println!("hsv({}, {}%, {}%)", hsv.h, hsv.s, hsv.v);
                println!("foreground: {}", state.foreground());
            }
        }
        Command::Gradient { hue } => {
            if !hue.is_finite() {
                return Err(CliError::Input(format!("hue must be finite, got {hue}")));
            }
            let rows = gradient_rows(hue);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let pure = hsv_to_hsl(Hsv {
                    h: hue,
                    s: 100.0,
                    v: 100.0,
                });
                eprintln!("gradient for hue {} ({} rows)", pure.h, rows.len());
                for row in rows {
                    println!(
                        "{:>3}%  hsl({}, {}%, {}%) -> hsl({}, {}%, {}%)",
                        row.offset,
                        row.start.h,
                        row.start.s,
                        row.start.l,
                        row.end.h,
                        row.end.s,
                        row.end.l,
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
