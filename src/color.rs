use clap::builder::PossibleValue;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpace {
    RGB,
    HSV,
}

impl ValueEnum for ColorSpace {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::RGB, Self::HSV]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::RGB => Some(PossibleValue::new("RGB")),
            Self::HSV => Some(PossibleValue::new("HSV")),
        }
    }
}

impl ColorSpace {
    /// Channel labels in plane order.
    pub fn channel_labels(&self) -> [&'static str; 3] {
        match self {
            Self::RGB => ["B", "G", "R"],
            Self::HSV => ["H", "S", "V"],
        }
    }

    pub fn composite_window_title(&self) -> &'static str {
        match self {
            Self::RGB => "bgr",
            Self::HSV => "hsv and",
        }
    }
}

#[derive(Clone, Copy)]
pub struct RGBColorFormat {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Clone, Copy)]
pub struct HSVColorFormat {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl From<&RGBColorFormat> for HSVColorFormat {
    fn from(value: &RGBColorFormat) -> Self {
        let red = value.red as f32 / 255.0;
        let green = value.green as f32 / 255.0;
        let blue = value.blue as f32 / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue_degrees = if delta == 0.0 {
            0.0
        } else if max == red {
            60.0 * (((green - blue) / delta) % 6.0)
        } else if max == green {
            60.0 * (((blue - red) / delta) + 2.0)
        } else {
            60.0 * (((red - green) / delta) + 4.0)
        };
        let hue_degrees = if hue_degrees < 0.0 {
            hue_degrees + 360.0
        } else {
            hue_degrees
        };

        // hue takes the full byte range, not the 179 cap
        let hue = (hue_degrees * 255.0 / 360.0).round() as u8;
        let saturation = if max == 0.0 {
            0
        } else {
            (delta / max * 255.0).round() as u8
        };
        let value = (max * 255.0).round() as u8;

        HSVColorFormat {
            hue,
            saturation,
            value,
        }
    }
}

impl From<RGBColorFormat> for HSVColorFormat {
    fn from(value: RGBColorFormat) -> Self {
        HSVColorFormat::from(&value)
    }
}

#[cfg(test)]
mod test {
    use super::{HSVColorFormat, RGBColorFormat};

    fn convert(red: u8, green: u8, blue: u8) -> HSVColorFormat {
        HSVColorFormat::from(&RGBColorFormat { red, green, blue })
    }

    #[test]
    fn convert_pure_red_to_hsv() {
        let result = convert(255, 0, 0);
        assert_eq!(result.hue, 0, "hue is wrong");
        assert_eq!(result.saturation, 255, "saturation is wrong");
        assert_eq!(result.value, 255, "value is wrong");
    }

    #[test]
    fn convert_pure_green_to_hsv() {
        let result = convert(0, 255, 0);
        assert_eq!(result.hue, 85, "hue is wrong");
        assert_eq!(result.saturation, 255, "saturation is wrong");
        assert_eq!(result.value, 255, "value is wrong");
    }

    #[test]
    fn convert_pure_blue_to_hsv() {
        let result = convert(0, 0, 255);
        assert_eq!(result.hue, 170, "hue is wrong");
        assert_eq!(result.saturation, 255, "saturation is wrong");
        assert_eq!(result.value, 255, "value is wrong");
    }

    #[test]
    fn convert_gray_to_hsv() {
        let result = convert(128, 128, 128);
        assert_eq!(result.hue, 0, "hue of an achromatic color must be 0");
        assert_eq!(
            result.saturation, 0,
            "saturation of an achromatic color must be 0"
        );
        assert_eq!(result.value, 128, "value is wrong");
    }

    #[test]
    fn convert_black_to_hsv() {
        let result = convert(0, 0, 0);
        assert_eq!(result.hue, 0, "hue is wrong");
        assert_eq!(result.saturation, 0, "saturation is wrong");
        assert_eq!(result.value, 0, "value is wrong");
    }

    #[test]
    fn convert_negative_hue_sector_to_hsv() {
        // magenta-ish color whose raw hue angle is negative before wrapping
        let result = convert(255, 0, 128);
        assert_eq!(result.hue, 234, "hue is wrong");
        assert_eq!(result.saturation, 255, "saturation is wrong");
        assert_eq!(result.value, 255, "value is wrong");
    }
}
