//! Inspect a color in every representation, list or render its shade ramp,
//! and keep a file of favorite colors.

mod store;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use image::RgbImage;
use log::{info, LevelFilter, SetLoggerError};
use shadekit::{
    closest_shade_index, Favorites, HexColor, HexParseError, Rgb, StoreError, Workspace,
    WorkspaceOptions, BASE_INDEX,
};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use thiserror::Error;

use crate::store::JsonFileStore;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Log what the workspace does.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a color as hex, RGB, HSL, HSB and CMYK.
    Show {
        /// The color, as #rrggbb.
        #[arg(env = "SHADEKIT_COLOR")]
        color: String,
    },
    /// Print the shade ramp of a color.
    Shades {
        /// The color, as #rrggbb.
        #[arg(env = "SHADEKIT_COLOR")]
        color: String,
        /// Print every n-th shade.
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        step: u16,
    },
    /// Render the shade ramp of a color to an image.
    Render {
        /// The color, as #rrggbb.
        #[arg(env = "SHADEKIT_COLOR")]
        color: String,
        /// Where to write the image.
        #[arg(short, long, default_value = "shades.png")]
        output: PathBuf,
        /// Width of the image in pixels.
        #[arg(long, default_value_t = 804, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,
        /// Height of the image in pixels.
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },
    /// Manage the favorites file.
    Fav {
        /// The file the favorites are kept in.
        #[arg(long, env = "SHADEKIT_FAVORITES", default_value = "favorites.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Debug, Subcommand)]
enum FavAction {
    /// Add a color to the front of the favorites.
    Add {
        /// The color, as #rrggbb.
        color: String,
        /// A name for the color.
        #[arg(long)]
        name: Option<String>,
    },
    /// List the favorites, newest first.
    List,
    /// Remove the favorite at an index.
    Remove { index: usize },
    /// Rename the favorite at an index.
    Rename { index: usize, name: String },
    /// Remove every favorite.
    Clear,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid color '{input}': {source}")]
    Color {
        input: String,
        source: HexParseError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("there is no favorite at index {0}")]
    NoFavorite(usize),
}

fn parse_color(input: &str) -> Result<HexColor, CliError> {
    input.parse().map_err(|source| CliError::Color {
        input: input.to_owned(),
        source,
    })
}

fn workspace(color: &str) -> Result<Workspace, CliError> {
    Ok(Workspace::new(WorkspaceOptions {
        initial: parse_color(color)?,
    }))
}

fn show(color: &str) -> Result<(), CliError> {
    let ws = workspace(color)?;

    let rgb = ws.rgb();
    let hsl = ws.hsl();
    let hsb = ws.hsb();
    let cmyk = ws.cmyk();

    println!("hex   {}", ws.color());
    println!("rgb   {} {} {}", rgb.red, rgb.green, rgb.blue);
    println!("hsl   {} {}% {}%", hsl.hue, hsl.saturation, hsl.lightness);
    println!("hsb   {} {}% {}%", hsb.hue, hsb.saturation, hsb.brightness);
    println!(
        "cmyk  {}% {}% {}% {}%",
        cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key
    );
    println!("shade ~{}", closest_shade_index(color));

    Ok(())
}

fn shades(color: &str, step: u16) -> Result<(), CliError> {
    let ws = workspace(color)?;

    for (index, shade) in ws.shades().iter().enumerate().step_by(step as usize) {
        let marker = if index == BASE_INDEX { '*' } else { ' ' };
        println!("{:>3}{} {}", index, marker, shade);
    }

    Ok(())
}

fn render(color: &str, output: &Path, width: u32, height: u32) -> Result<(), CliError> {
    let ws = workspace(color)?;
    let ramp = ws.shades();

    let mut img = RgbImage::new(width, height);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let index = (x as usize * ramp.len() / width as usize).min(ramp.len() - 1);
        let Rgb { red, green, blue } = ramp[index].to_rgb();
        *pixel = image::Rgb([red, green, blue]);
    }

    img.save(output)?;
    info!("wrote {} shades of {} to {}", ramp.len(), ws.color(), output.display());

    Ok(())
}

fn favorites(file: PathBuf, action: FavAction) -> Result<(), CliError> {
    let store = JsonFileStore::new(file);
    info!("using favorites in {}", store.path().display());
    let mut favorites = Favorites::load(store)?;

    match action {
        FavAction::Add { color, name } => {
            let options = WorkspaceOptions {
                initial: parse_color(&color)?,
            };
            let mut ws = Workspace::with_favorites(options, favorites);
            if !ws.add_current_to_favorites()? {
                println!("{} is already a favorite", ws.color());
            } else if let Some(name) = name {
                ws.rename_favorite(0, name)?;
            }
        }
        FavAction::List => {
            for (index, favorite) in favorites.iter().enumerate() {
                println!("{:>3} {} {}", index, favorite.color, favorite.name);
            }
        }
        FavAction::Remove { index } => {
            favorites.remove(index)?.ok_or(CliError::NoFavorite(index))?;
        }
        FavAction::Rename { index, name } => {
            if !favorites.rename(index, name)? {
                return Err(CliError::NoFavorite(index));
            }
        }
        FavAction::Clear => favorites.clear()?,
    }

    Ok(())
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Show { color } => show(&color),
        Command::Shades { color, step } => shades(&color, step),
        Command::Render {
            color,
            output,
            width,
            height,
        } => render(&color, &output, width, height),
        Command::Fav { file, action } => favorites(file, action),
    }
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Fails only if a logger is already set.
fn init_logging(verbose: bool) -> Result<(), SetLoggerError> {
    TermLogger::init(
        log_level(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.verbose) {
        eprintln!("warning: logging is disabled: {}", err);
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
