use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use image::RgbImage;

use crate::color::ColorSpace;
use crate::error::Error;
use crate::session::{Range, RangeThresholdSession};
use crate::Result;

pub struct PersistenceReport {
    pub settings_saved: bool,
    pub image_saved: bool,
}

/// Asks whether to persist the tuning result and on confirmation writes the
/// settings file and the preview image under `<output_dir>/<name>/`. Write
/// failures are reported per artifact and never abort the run.
pub fn prompt_for_persistence<R: BufRead>(
    session: &RangeThresholdSession,
    color_space: ColorSpace,
    output_dir: &Path,
    input: &mut R,
) -> Result<()> {
    write_prompt("Do you want to write created image? (y - yes/ other key - no): ")?;
    let answer = read_line(input)?;
    if answer.trim() != "y" {
        return Ok(());
    }
    write_prompt("Enter name of image: ")?;
    let name = read_line(input)?;
    let name = name.trim();
    let artifact_dir = output_dir.join(name);
    let report = write_artifacts(session, color_space, &artifact_dir, name);
    println!(
        "{}",
        if report.settings_saved {
            "Settings have been saved"
        } else {
            "Settings haven't been saved"
        }
    );
    println!(
        "{}",
        if report.image_saved {
            "Image has been saved"
        } else {
            "Image hasn't been saved"
        }
    );
    Ok(())
}

pub fn write_artifacts(
    session: &RangeThresholdSession,
    color_space: ColorSpace,
    artifact_dir: &Path,
    name: &str,
) -> PersistenceReport {
    if let Err(error) = fs::create_dir_all(artifact_dir) {
        log::warn!(
            "creating result directory '{}' failed: {}",
            artifact_dir.display(),
            error
        );
        return PersistenceReport {
            settings_saved: false,
            image_saved: false,
        };
    }
    PersistenceReport {
        settings_saved: write_settings_file(session, color_space, artifact_dir, name),
        image_saved: write_preview_image(session, artifact_dir, name),
    }
}

/// Three lines in plane order, bounds separated by a tab, no trailing
/// newline.
pub fn format_settings(color_space: ColorSpace, ranges: &[Range; 3]) -> String {
    let labels = color_space.channel_labels();
    let lines: Vec<String> = labels
        .iter()
        .zip(ranges)
        .map(|(label, range)| format!("{0}Min: {1}\t{0}Max: {2}", label, range.min, range.max))
        .collect();
    lines.join("\n")
}

/// Converts the composed preview to an RGB image with the display
/// convention applied, so the file shows what the composite window showed.
pub fn preview_to_image(session: &RangeThresholdSession) -> Option<RgbImage> {
    let preview = session.render_preview();
    let rgb_samples: Vec<u8> = preview
        .chunks_exact(3)
        .flat_map(|pixel| [pixel[2], pixel[1], pixel[0]])
        .collect();
    RgbImage::from_raw(session.width(), session.height(), rgb_samples)
}

fn write_settings_file(
    session: &RangeThresholdSession,
    color_space: ColorSpace,
    artifact_dir: &Path,
    name: &str,
) -> bool {
    let path = artifact_dir.join(format!("{}_settings.txt", name));
    let content = format_settings(color_space, &session.ranges());
    if let Err(error) = fs::write(&path, content) {
        log::warn!("writing settings '{}' failed: {}", path.display(), error);
        return false;
    }
    // success is judged by the resulting file size
    fs::metadata(&path)
        .map(|metadata| metadata.len() > 0)
        .unwrap_or(false)
}

fn write_preview_image(session: &RangeThresholdSession, artifact_dir: &Path, name: &str) -> bool {
    let path = artifact_dir.join(format!("{}.png", name));
    let image = match preview_to_image(session) {
        Some(image) => image,
        None => return false,
    };
    match image.save(&path) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("writing image '{}' failed: {}", path.display(), error);
            false
        }
    }
}

fn write_prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(Error::UnableToWriteUserPrompt)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(Error::UnableToReadUserInput)?;
    Ok(line)
}

#[cfg(test)]
mod test {
    use super::{format_settings, preview_to_image, ColorSpace, Range};
    use crate::plane::ChannelPlane;
    use crate::session::{RangeBound, RangeThresholdSession};

    fn create_session() -> RangeThresholdSession {
        let planes = [
            ChannelPlane::new(2, 1, vec![50, 100]),
            ChannelPlane::new(2, 1, vec![60, 110]),
            ChannelPlane::new(2, 1, vec![70, 120]),
        ];
        RangeThresholdSession::new(planes)
    }

    #[test]
    fn format_rgb_settings() {
        let ranges = [
            Range { min: 0, max: 255 },
            Range { min: 12, max: 34 },
            Range { min: 100, max: 200 },
        ];
        let settings = format_settings(ColorSpace::RGB, &ranges);
        assert_eq!(
            settings,
            "BMin: 0\tBMax: 255\nGMin: 12\tGMax: 34\nRMin: 100\tRMax: 200"
        );
    }

    #[test]
    fn format_hsv_settings() {
        let ranges = [
            Range { min: 1, max: 2 },
            Range { min: 3, max: 4 },
            Range { min: 5, max: 6 },
        ];
        let settings = format_settings(ColorSpace::HSV, &ranges);
        assert_eq!(
            settings,
            "HMin: 1\tHMax: 2\nSMin: 3\tSMax: 4\nVMin: 5\tVMax: 6"
        );
    }

    #[test]
    fn preview_image_swaps_planes_into_rgb_order() {
        let mut session = create_session();
        session.set_range(0, RangeBound::Min, 90);
        let image = preview_to_image(&session).expect("preview image missing");
        assert_eq!(image.dimensions(), (2, 1));
        // first pixel: plane 0 filtered out, planes 1 and 2 in range
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255]);
    }
}
