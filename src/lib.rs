use std::path::PathBuf;

pub use cli::CLIParser;
use session::RangeThresholdSession;

mod cli;
pub mod color;
mod error;
mod loader;
mod logger;
pub mod plane;
pub mod session;
mod tuner;
pub mod writer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: Option<PathBuf>,
    color_space: color::ColorSpace,
    output_dir: PathBuf,
    key_step: u8,
}

pub fn run_tuner(arguments: &Arguments) -> Result<()> {
    let image = loader::load_image(arguments.input_file.as_deref())?;
    let (width, height) = image.dimensions();
    log::info!(
        "tuning {}x{} image in {:?} space",
        width,
        height,
        arguments.color_space
    );
    let planes = plane::decompose_planes(width, height, image.as_raw(), arguments.color_space);
    let mut session = RangeThresholdSession::new(planes);
    tuner::run_tuner_loop(
        &mut session,
        image.as_raw(),
        arguments.color_space,
        arguments.key_step,
    )?;
    log::info!("final ranges: {:?}", session.ranges());
    let stdin = std::io::stdin();
    writer::prompt_for_persistence(
        &session,
        arguments.color_space,
        &arguments.output_dir,
        &mut stdin.lock(),
    )
}
