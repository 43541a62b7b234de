use crate::color::{ColorSpace, HSVColorFormat, RGBColorFormat};

/// One single-sample plane split from a decoded image. Planes are computed
/// once at session start and never recomputed.
pub struct ChannelPlane {
    samples: Vec<u8>,
    width: u32,
    height: u32,
}

impl ChannelPlane {
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Self {
        Self {
            samples,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Observed (min, max) sample span of the plane.
    pub fn sample_span(&self) -> (u8, u8) {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for &sample in &self.samples {
            if sample < min {
                min = sample;
            }
            if sample > max {
                max = sample;
            }
        }
        (min, max)
    }
}

/// Splits interleaved RGB samples into three planes. The plane order follows
/// the composite display convention: [Blue, Green, Red] for RGB and
/// [Hue, Saturation, Value] for HSV.
pub fn decompose_planes(
    width: u32,
    height: u32,
    rgb_samples: &[u8],
    color_space: ColorSpace,
) -> [ChannelPlane; 3] {
    let pixel_count = (width * height) as usize;
    let mut planes = [
        Vec::with_capacity(pixel_count),
        Vec::with_capacity(pixel_count),
        Vec::with_capacity(pixel_count),
    ];
    for pixel in rgb_samples.chunks_exact(3) {
        let rgb = RGBColorFormat {
            red: pixel[0],
            green: pixel[1],
            blue: pixel[2],
        };
        let components = match color_space {
            ColorSpace::RGB => [rgb.blue, rgb.green, rgb.red],
            ColorSpace::HSV => {
                let hsv = HSVColorFormat::from(&rgb);
                [hsv.hue, hsv.saturation, hsv.value]
            }
        };
        for (plane, component) in planes.iter_mut().zip(components) {
            plane.push(component);
        }
    }
    planes.map(|samples| ChannelPlane::new(width, height, samples))
}
