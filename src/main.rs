use clap::{Parser, Subcommand};
use image_directive::imaging::{Format, parse_directive};
use image_directive::{config, output};
use std::path::{Path, PathBuf};

/// Shared arguments for commands that parse a directive.
#[derive(clap::Args, Clone)]
struct DirectiveArgs {
    /// Operation name, e.g. resize, fill, fit
    action: String,

    /// Directive, e.g. "300x200 Center Lanczos q90"
    directive: String,
}

#[derive(Parser)]
#[command(name = "image-directive")]
#[command(about = "Parse image processing directives and derive cache keys")]
#[command(long_about = "\
Parse image processing directives and derive cache keys

A directive is a space-separated list of tokens, in any order:

  300x200, 300x, x200   target size (one side may be derived)
  q80                   JPEG quality, 1-100
  r90                   rotate counter-clockwise, degrees
  Lanczos, Box, ...     resample filter
  Center, TopLeft, ...  crop anchor for fill
  Smart                 smart crop for fill

Missing filter and anchor come from the [imaging] table of config.toml
in the content directory.

Run 'image-directive gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory holding config.toml
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Language whose [languages.<lang>.imaging] overrides apply
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Log debug details (ignored tokens, default fallbacks) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a directive and show the resulting operation
    Parse {
        #[command(flatten)]
        args: DirectiveArgs,

        /// Output file; its extension selects the format for the cache key
        #[arg(long)]
        target: Option<PathBuf>,

        /// Print the operation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the cache key for a directive
    Key {
        #[command(flatten)]
        args: DirectiveArgs,

        /// Output file; its extension selects the format
        #[arg(long)]
        target: PathBuf,

        /// Use this key instead of the derived one
        #[arg(long)]
        key: Option<String>,
    },
    /// Validate the [imaging] config and show the resolved defaults
    Check,
    /// Print a stock config.toml with all imaging options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let lang = cli.lang.as_deref();

    match cli.command {
        Command::Parse { args, target, json } => {
            let defaults = config::load_imaging(&cli.source, lang)?;
            let image_config = parse_directive(&args.action, &args.directive, &defaults)?;
            let format = target.as_deref().map(target_format).transpose()?;
            if json {
                let mut value = serde_json::to_value(&image_config)?;
                if let (Some(format), Some(obj)) = (format, value.as_object_mut()) {
                    obj.insert("format".into(), serde_json::to_value(format)?);
                    obj.insert("cacheKey".into(), image_config.key(format).into());
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                output::print_image_config(&image_config, &defaults, format);
            }
        }
        Command::Key { args, target, key } => {
            let defaults = config::load_imaging(&cli.source, lang)?;
            let mut image_config = parse_directive(&args.action, &args.directive, &defaults)?;
            if let Some(key) = key {
                image_config = image_config.with_key(key);
            }
            println!("{}", image_config.key(target_format(&target)?));
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let imaging = config::load_imaging(&cli.source, lang)?;
            let config_path = cli.source.join(config::CONFIG_FILENAME);
            let source = config_path.exists().then_some(config_path.as_path());
            output::print_imaging(&imaging, source);
            println!("==> Imaging config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the output format from a target filename.
fn target_format(target: &Path) -> Result<Format, String> {
    Format::from_path(target).ok_or_else(|| {
        format!(
            "unsupported target format for {} (expected .jpg, .jpeg, .png, .tif, .tiff, .bmp or .gif)",
            target.display()
        )
    })
}
