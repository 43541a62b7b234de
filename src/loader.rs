use std::io::BufRead;
use std::path::Path;

use image::RgbImage;

use crate::error::Error;
use crate::Result;

const EXIT_TOKEN: &str = "--exit";
const PATH_PROMPT: &str = "please enter the path to the image (\"--exit\" to exit application): ";

/// Loads the image to tune, falling back to an interactive prompt loop on
/// stdin when the argument is missing or does not decode.
pub fn load_image(input_file: Option<&Path>) -> Result<RgbImage> {
    let stdin = std::io::stdin();
    select_image(input_file, &mut stdin.lock())
}

pub fn select_image<R: BufRead>(input_file: Option<&Path>, input: &mut R) -> Result<RgbImage> {
    if let Some(path) = input_file {
        if let Some(image) = decode_image(path) {
            return Ok(image);
        }
    }
    loop {
        eprint!("{}", PATH_PROMPT);
        let mut line = String::new();
        let bytes_read = input
            .read_line(&mut line)
            .map_err(Error::UnableToReadUserInput)?;
        if bytes_read == 0 {
            return Err(Error::ImageSelectionAborted);
        }
        let filename = line.trim_end_matches(['\r', '\n']);
        if filename == EXIT_TOKEN {
            return Err(Error::ImageSelectionAborted);
        }
        if let Some(image) = decode_image(Path::new(filename)) {
            return Ok(image);
        }
    }
}

fn decode_image(path: &Path) -> Option<RgbImage> {
    match image::open(path) {
        Ok(decoded) => {
            log::info!("decoded image '{}'", path.display());
            Some(decoded.into_rgb8())
        }
        Err(error) => {
            log::warn!("decoding image '{}' failed: {}", path.display(), error);
            None
        }
    }
}
