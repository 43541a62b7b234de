use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::color::ColorSpace;
use crate::error::Error;
use crate::session::{RangeBound, RangeThresholdSession};
use crate::Result;

const FRAMES_PER_SECOND: usize = 30;
const ORIGINAL_WINDOW_TITLE: &str = "original";

/// Keyboard bindings replacing the six min/max trackbars:
/// (key, channel index, bound, raise).
const KEY_BINDINGS: [(Key, usize, RangeBound, bool); 12] = [
    (Key::A, 0, RangeBound::Min, true),
    (Key::Z, 0, RangeBound::Min, false),
    (Key::S, 1, RangeBound::Min, true),
    (Key::X, 1, RangeBound::Min, false),
    (Key::D, 2, RangeBound::Min, true),
    (Key::C, 2, RangeBound::Min, false),
    (Key::F, 0, RangeBound::Max, true),
    (Key::V, 0, RangeBound::Max, false),
    (Key::G, 1, RangeBound::Max, true),
    (Key::B, 1, RangeBound::Max, false),
    (Key::H, 2, RangeBound::Max, true),
    (Key::N, 2, RangeBound::Max, false),
];

/// Runs the interactive loop: polls key input, applies range updates to the
/// session and redraws both windows until Escape is pressed or a window is
/// closed. All session access stays on this one thread.
pub fn run_tuner_loop(
    session: &mut RangeThresholdSession,
    original_samples: &[u8],
    color_space: ColorSpace,
    key_step: u8,
) -> Result<()> {
    let width = session.width() as usize;
    let height = session.height() as usize;
    let composite_title = color_space.composite_window_title();
    let mut original_window = create_window(ORIGINAL_WINDOW_TITLE, width, height)?;
    let mut composite_window = create_window(composite_title, width, height)?;

    let original_buffer = rgb_samples_to_argb(original_samples);
    let mut composite_buffer = vec![0_u32; width * height];

    println!("Tap \"esc\" to exit application");

    while original_window.is_open()
        && composite_window.is_open()
        && !original_window.is_key_down(Key::Escape)
        && !composite_window.is_key_down(Key::Escape)
    {
        apply_key_input(&original_window, session, color_space, key_step);
        apply_key_input(&composite_window, session, color_space, key_step);

        let preview = session.render_preview();
        compose_preview_buffer(&preview, &mut composite_buffer);

        original_window
            .update_with_buffer(&original_buffer, width, height)
            .map_err(|e| Error::UnableToUpdateWindow(ORIGINAL_WINDOW_TITLE, e))?;
        composite_window
            .update_with_buffer(&composite_buffer, width, height)
            .map_err(|e| Error::UnableToUpdateWindow(composite_title, e))?;
    }
    Ok(())
}

fn create_window(title: &'static str, width: usize, height: usize) -> Result<Window> {
    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| Error::UnableToCreateWindow(title, e))?;
    window.set_target_fps(FRAMES_PER_SECOND);
    Ok(window)
}

fn apply_key_input(
    window: &Window,
    session: &mut RangeThresholdSession,
    color_space: ColorSpace,
    key_step: u8,
) {
    for (key, channel_index, bound, raise) in KEY_BINDINGS {
        if !window.is_key_pressed(key, KeyRepeat::No) {
            continue;
        }
        let range = session.range(channel_index);
        let current = match bound {
            RangeBound::Min => range.min,
            RangeBound::Max => range.max,
        };
        let adjusted = if raise {
            current.saturating_add(key_step)
        } else {
            current.saturating_sub(key_step)
        };
        if adjusted == current {
            continue;
        }
        session.set_range(channel_index, bound, adjusted);
        let label = color_space.channel_labels()[channel_index];
        log::info!("{}{:?} set to {}", label, bound, adjusted);
    }
}

/// Packs interleaved RGB samples into the 0RGB format the window expects.
fn rgb_samples_to_argb(rgb_samples: &[u8]) -> Vec<u32> {
    rgb_samples
        .chunks_exact(3)
        .map(|pixel| ((pixel[0] as u32) << 16) | ((pixel[1] as u32) << 8) | pixel[2] as u32)
        .collect()
}

/// Maps preview triples to screen pixels with the raw display convention:
/// plane 0 on blue, plane 1 on green, plane 2 on red.
fn compose_preview_buffer(preview: &[u8], buffer: &mut [u32]) {
    for (pixel, target) in preview.chunks_exact(3).zip(buffer.iter_mut()) {
        *target = ((pixel[2] as u32) << 16) | ((pixel[1] as u32) << 8) | pixel[0] as u32;
    }
}

#[cfg(test)]
mod test {
    use super::{compose_preview_buffer, rgb_samples_to_argb, RangeBound, KEY_BINDINGS};

    #[test]
    fn pack_rgb_samples() {
        let argb = rgb_samples_to_argb(&[255, 0, 0, 16, 32, 48]);
        assert_eq!(argb, vec![0x00FF0000, 0x00102030]);
    }

    #[test]
    fn compose_preview_pixels_in_display_order() {
        let mut buffer = vec![0_u32; 2];
        compose_preview_buffer(&[255, 0, 128, 0, 255, 0], &mut buffer);
        assert_eq!(
            buffer[0], 0x008000FF,
            "plane 0 must land on blue and plane 2 on red"
        );
        assert_eq!(buffer[1], 0x0000FF00);
    }

    #[test]
    fn key_bindings_cover_every_bound_of_every_channel() {
        for channel_index in 0..3 {
            for bound in [RangeBound::Min, RangeBound::Max] {
                for raise in [true, false] {
                    let count = KEY_BINDINGS
                        .iter()
                        .filter(|(_, c, b, r)| *c == channel_index && *b == bound && *r == raise)
                        .count();
                    assert_eq!(
                        count, 1,
                        "channel {} {:?} raise={} must have exactly one key",
                        channel_index, bound, raise
                    );
                }
            }
        }
    }
}
