#![deny(unsafe_code)]
//! CLI binary for the snowflake generator.
//!
//! Subcommands:
//! - `render <kind>`: draw a batch of snowflakes and write one PNG each
//! - `list`: print available kinds and palettes

mod console;
mod error;
mod logging;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use error::{CliError, USAGE_EXIT_CODE};
use snowflake_core::{Drawer, Palette, Recipe, SnowflakeError, Xorshift64};
use snowflake_drawers::label::{annotate, caption};
use snowflake_drawers::snapshot::save;
use snowflake_drawers::{render, SnowflakeKind};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

const COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=100;
const SIZE_RANGE: std::ops::RangeInclusive<u32> = 64..=4096;

#[derive(Parser)]
#[command(name = "snowflake", about = "Procedural snowflake generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a batch of snowflakes and write one PNG per image.
    Render {
        /// Snowflake kind (crystal, radiating-dendrite, stellar-plate, triangular-crystal).
        kind: String,

        /// Existing directory to write images into.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Number of images to render.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// PRNG seed; the whole batch draws from one stream.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (classic, frost, aurora, ink) or path to a palette JSON file.
        #[arg(short, long, default_value = "classic")]
        palette: String,

        /// Square canvas size in pixels.
        #[arg(long, default_value_t = 1024)]
        size: u32,

        /// Family parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Stamp each image with its kind, index and parameters.
        #[arg(long)]
        label: bool,

        /// Ask for the image count and canvas size on the console.
        #[arg(short, long)]
        interactive: bool,
    },
    /// List available snowflake kinds and palettes.
    List,
}

struct RenderArgs {
    kind: String,
    output: PathBuf,
    count: usize,
    seed: u64,
    palette: String,
    size: u32,
    params: String,
    label: bool,
    interactive: bool,
}

/// Resolves `--palette`: a preset name, or a `.json` file holding a palette.
fn load_palette(spec: &str) -> Result<Palette, CliError> {
    if spec.ends_with(".json") {
        let text = std::fs::read_to_string(spec)
            .map_err(|e| CliError::Io(format!("cannot read palette {spec}: {e}")))?;
        Ok(Palette::from_json(&text)?)
    } else {
        Ok(Palette::from_name(spec)?)
    }
}

fn resolve_kind(name: &str, params: &serde_json::Value) -> Result<SnowflakeKind, CliError> {
    SnowflakeKind::from_name(name, params).map_err(|e| match e {
        SnowflakeError::UnknownKind(_) => CliError::Input(format!(
            "unknown snowflake kind '{name}'; valid kinds: {}",
            SnowflakeKind::list_names().join(", ")
        )),
        other => other.into(),
    })
}

/// Rejects a flag value outside `range`.
fn check_range<T>(flag: &str, value: T, range: &std::ops::RangeInclusive<T>) -> Result<T, CliError>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CliError::Input(format!(
            "--{flag} {value} is outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}

fn output_path(dir: &Path, kind: &str, index: usize) -> PathBuf {
    dir.join(format!("{kind}_{index:03}.png"))
}

fn run_render(args: RenderArgs, json: bool) -> Result<(), CliError> {
    let params: serde_json::Value = serde_json::from_str(&args.params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let kind = resolve_kind(&args.kind, &params)?;
    let palette = load_palette(&args.palette)?;

    let (count, size) = if args.interactive {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut prompt = std::io::stderr();
        let count = console::prompt_in_range(
            &mut input,
            &mut prompt,
            "Number of images",
            COUNT_RANGE,
            args.count.clamp(*COUNT_RANGE.start(), *COUNT_RANGE.end()),
        )?;
        let size = console::prompt_in_range(
            &mut input,
            &mut prompt,
            "Canvas size",
            SIZE_RANGE,
            args.size.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end()),
        )?;
        (count, size)
    } else {
        (
            check_range("count", args.count, &COUNT_RANGE)?,
            check_range("size", args.size, &SIZE_RANGE)?,
        )
    };

    if !args.output.is_dir() {
        return Err(SnowflakeError::MissingDirectory(args.output.display().to_string()).into());
    }

    let recipe = Recipe {
        params: kind.params(),
        ..Recipe::new(kind.name(), size, args.seed)
    };
    recipe.validate()?;
    debug!(kind = kind.name(), count, size, seed = args.seed, "starting batch");

    let mut rng = Xorshift64::new(args.seed);
    let mut written = Vec::with_capacity(count);
    for index in 0..count {
        let mut raster = render(&kind, size, &palette, &mut rng)?;
        if args.label {
            annotate(&mut raster, &caption(&kind, index), &palette);
        }
        let path = output_path(&args.output, kind.name(), index);
        save(&raster, &path)?;
        written.push((recipe.at(index), path));
    }
    info!(count, "batch complete");

    if json {
        let images: Vec<serde_json::Value> = written
            .iter()
            .map(|(recipe, path)| {
                serde_json::json!({
                    "recipe": recipe,
                    "output": path.display().to_string(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "kind": kind.name(),
            "palette": palette.name,
            "images": images,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for (_, path) in &written {
            eprintln!("rendered {} -> {}", kind.name(), path.display());
        }
    }
    Ok(())
}

fn run_list(json: bool) -> Result<(), CliError> {
    let kinds = SnowflakeKind::list_names();
    let palettes = Palette::list_names();
    if json {
        let mut schemas = serde_json::Map::new();
        for name in kinds {
            let kind = SnowflakeKind::from_name(name, &serde_json::json!({}))?;
            schemas.insert((*name).to_string(), kind.param_schema());
        }
        let info = serde_json::json!({
            "kinds": kinds,
            "palettes": palettes,
            "params": schemas,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Kinds:");
        for name in kinds {
            println!("  {name}");
        }
        println!("Palettes:");
        println!("  {}", palettes.join(", "));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => run_list(cli.json),
        Command::Render {
            kind,
            output,
            count,
            seed,
            palette,
            size,
            params,
            label,
            interactive,
        } => run_render(
            RenderArgs {
                kind,
                output,
                count,
                seed,
                palette,
                size,
                params,
                label,
                interactive,
            },
            cli.json,
        ),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = e.print();
                process::exit(USAGE_EXIT_CODE);
            }
            _ => e.exit(),
        },
    };
    logging::init_logging(cli.verbose);

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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("snowflake").chain(args.iter().copied()))
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = parse(&["--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn render_defaults() {
        let cli = parse(&["render", "crystal"]).unwrap();
        match cli.command {
            Command::Render {
                kind,
                count,
                seed,
                palette,
                size,
                label,
                interactive,
                ..
            } => {
                assert_eq!(kind, "crystal");
                assert_eq!(count, 1);
                assert_eq!(seed, 42);
                assert_eq!(palette, "classic");
                assert_eq!(size, 1024);
                assert!(!label && !interactive);
            }
            Command::List => panic!("expected render"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--json", "--verbose"]).unwrap();
        assert!(cli.json && cli.verbose);
    }

    #[test]
    fn unknown_kind_lists_valid_kinds() {
        let err = resolve_kind("hexagon", &serde_json::json!({})).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let msg = err.to_string();
        for name in SnowflakeKind::list_names() {
            assert!(msg.contains(name), "{msg}");
        }
    }

    #[test]
    fn bad_family_params_are_draw_errors() {
        let err = resolve_kind("crystal", &serde_json::json!({"fold_count": 0})).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn output_names_are_zero_padded() {
        let path = output_path(Path::new("out"), "stellar-plate", 7);
        assert_eq!(path, Path::new("out").join("stellar-plate_007.png"));
    }

    #[test]
    fn palette_by_name_or_unknown() {
        assert_eq!(load_palette("frost").unwrap().name, "frost");
        assert_eq!(load_palette("sepia").unwrap_err().exit_code(), 12);
    }

    #[test]
    fn missing_palette_file_is_io_error() {
        assert_eq!(
            load_palette("/definitely/not/here.json")
                .unwrap_err()
                .exit_code(),
            11
        );
    }

    #[test]
    fn render_into_missing_directory_fails_with_io_code() {
        let args = RenderArgs {
            kind: "crystal".into(),
            output: PathBuf::from("/definitely/not/here"),
            count: 1,
            seed: 1,
            palette: "classic".into(),
            size: 64,
            params: "{}".into(),
            label: false,
            interactive: false,
        };
        assert_eq!(run_render(args, false).unwrap_err().exit_code(), 11);
    }

    fn batch(count: usize, size: u32, params: &str) -> RenderArgs {
        RenderArgs {
            kind: "crystal".into(),
            output: PathBuf::from("."),
            count,
            seed: 1,
            palette: "classic".into(),
            size,
            params: params.into(),
            label: false,
            interactive: false,
        }
    }

    #[test]
    fn bad_params_json_is_input_error() {
        assert_eq!(
            run_render(batch(1, 64, "{oops"), false)
                .unwrap_err()
                .exit_code(),
            12
        );
    }

    #[test]
    fn oversized_canvas_is_input_error() {
        let err = run_render(batch(1, 100_000, "{}"), false).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("--size 100000"), "{err}");
    }

    #[test]
    fn undersized_canvas_is_input_error() {
        assert_eq!(
            run_render(batch(1, 63, "{}"), false)
                .unwrap_err()
                .exit_code(),
            12
        );
    }

    #[test]
    fn batch_count_outside_range_is_input_error() {
        for count in [0, 101] {
            let err = run_render(batch(count, 64, "{}"), false).unwrap_err();
            assert_eq!(err.exit_code(), 12, "count {count}");
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(check_range("size", 64, &SIZE_RANGE).unwrap(), 64);
        assert_eq!(check_range("size", 4096, &SIZE_RANGE).unwrap(), 4096);
        assert_eq!(check_range("count", 100, &COUNT_RANGE).unwrap(), 100);
    }
}
