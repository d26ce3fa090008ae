use std::env;
use args::Args;
use getopts::Occur;
use log::{debug, info};
use thiserror::Error;

pub mod hash;
pub mod color;
pub mod grid;
pub mod pixels;
pub mod data;
pub mod raster;
pub mod encoder;

use crate::data::Image;
use crate::encoder::{encode_and_persist, FileStore, ImageEncoder, PngEncoder};


static PROGRAM_NAME: &str = "identicon";
static PROGRAM_DESCRIPTION: &str =
    "A small program for generating identicon avatars from arbitrary input strings";

static KEY_OUTPUT_FILE: &str = "OUTPUT";

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("cannot save identicon image")]
    FailedToSaveIdenticon(#[from] encoder::ErrorKind),

    #[error(transparent)]
    CliError(#[from] args::ArgsError)
}

pub type Result<T> = std::result::Result<T, ErrorKind>;

struct GenerateOption {
    input: String,
    output: Option<String>
}

pub fn launch() -> Result<()> {
    init_logging();

    let options = parse_args()?;
    let file_name = options.output
        .unwrap_or_else(|| default_file_name(&options.input));

    generate_and_save_as(&options.input, &file_name)?;
    info!("saved identicon for {:?} to {}", options.input, file_name);
    Ok(())
}

/// Runs the full pipeline minus persistence: hash the input, pick the
/// fill color, build and filter the symmetric grid, map the surviving
/// cells to pixel rects and rasterize them.
pub fn generate(input: &str) -> Image {
    let hashed = hash::hash_input(input);
    let color = color::pick_color(&hashed);

    let cells = grid::filter_even(grid::build_grid(&hashed));
    debug!("input {:?}: color {}, {} of {} cells filled",
           input, color, cells.len(), grid::GRID_CELLS);

    let rects = pixels::map_to_rects(&cells);
    raster::draw(color, &rects)
}

pub fn generate_and_save(input: &str) -> encoder::Result<()> {
    generate_and_save_as(input, &default_file_name(input))
}

pub fn generate_and_save_as(input: &str, file_name: &str) -> encoder::Result<()> {
    let image = generate(input);
    encode_and_persist(&PngEncoder, &FileStore, &image, file_name)
}

fn default_file_name(input: &str) -> String {
    format!("{}.{}", input, PngEncoder.file_extension())
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

fn parse_args() -> Result<GenerateOption> {
    let mut args = Args::new(PROGRAM_NAME, PROGRAM_DESCRIPTION);

    args.option("i",
                "input",
                "String the identicon is derived from",
                "INPUT",
                Occur::Req,
                None);

    args.option("o",
                "output",
                "File the generated image is written to",
                "FILE",
                Occur::Optional,
                env::var(KEY_OUTPUT_FILE).ok());

    args.parse_from_cli()?;

    let input: String = args.value_of("input")?;
    let output: Option<String> = args.optional_value_of("output")?;

    Ok(GenerateOption { input, output })
}
