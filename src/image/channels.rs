//! Channel plane splitting, merging and colour inversion.

use image::{imageops, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// The four 8-bit planes of an RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlanes {
    pub red: GrayImage,
    pub green: GrayImage,
    pub blue: GrayImage,
    pub alpha: GrayImage,
}

impl ChannelPlanes {
    /// Split an RGBA image into its planes.
    #[must_use]
    pub fn split(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let plane = |channel: usize| {
            GrayImage::from_fn(width, height, |x, y| Luma([image.get_pixel(x, y)[channel]]))
        };

        Self {
            red: plane(0),
            green: plane(1),
            blue: plane(2),
            alpha: plane(3),
        }
    }

    /// Dimensions shared by all planes.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.alpha.dimensions()
    }

    /// Merge the red, green and blue planes into a colour image, leaving alpha out.
    #[must_use]
    pub fn color(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                self.red.get_pixel(x, y)[0],
                self.green.get_pixel(x, y)[0],
                self.blue.get_pixel(x, y)[0],
            ])
        })
    }

    /// Replace the colour planes with those of `color`, keeping this alpha plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneMismatch`] if `color` is not the size of the alpha plane.
    pub fn with_color(self, color: &RgbImage) -> Result<Self> {
        let expected = self.dimensions();
        let actual = color.dimensions();
        if expected != actual {
            return Err(Error::PlaneMismatch { expected, actual });
        }

        let (width, height) = actual;
        let plane = |channel: usize| {
            GrayImage::from_fn(width, height, |x, y| Luma([color.get_pixel(x, y)[channel]]))
        };

        Ok(Self {
            red: plane(0),
            green: plane(1),
            blue: plane(2),
            alpha: self.alpha,
        })
    }

    /// Merge all four planes back into an RGBA image.
    #[must_use]
    pub fn merge(&self) -> RgbaImage {
        let (width, height) = self.dimensions();
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([
                self.red.get_pixel(x, y)[0],
                self.green.get_pixel(x, y)[0],
                self.blue.get_pixel(x, y)[0],
                self.alpha.get_pixel(x, y)[0],
            ])
        })
    }
}

/// Invert the red, green and blue channels of `image` (`v -> 255 - v`).
///
/// The alpha plane of the result is the alpha plane of `image`, untouched.
///
/// # Errors
///
/// Returns [`Error::PlaneMismatch`] if the recombined planes disagree in size.
pub fn invert_color(image: &RgbaImage) -> Result<RgbaImage> {
    let planes = ChannelPlanes::split(image);

    let mut color = planes.color();
    imageops::invert(&mut color);

    Ok(planes.with_color(&color)?.merge())
}
