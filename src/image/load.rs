//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as 8-bit RGBA.
///
/// The format is guessed from the file content, not from its name. The file
/// itself must store four channels: palette or RGB images are rejected even
/// when a transparency chunk would let the decoder expand them to RGBA.
/// 16-bit images are narrowed to 8 bits.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be read or decoded, and
/// [`Error::NotRgba`] if the stored colour type is not RGBA.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let decoder = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_error(ImageError::IoError(err)))?
        .into_decoder()
        .map_err(load_error)?;

    let color = decoder.original_color_type();
    if !is_rgba(color) {
        return Err(Error::NotRgba {
            path: path.to_path_buf(),
            color,
        });
    }

    let img = DynamicImage::from_decoder(decoder).map_err(load_error)?;

    Ok(img.into_rgba8())
}

/// Colour types stored with a real alpha channel next to R, G and B.
fn is_rgba(color: ExtendedColorType) -> bool {
    matches!(
        color,
        ExtendedColorType::Rgba8 | ExtendedColorType::Rgba16 | ExtendedColorType::Rgba32F
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{LumaA, Rgb, RgbImage, Rgba};

    fn write_png(
        path: &Path,
        color: png::ColorType,
        data: &[u8],
        palette: Option<Vec<u8>>,
        trns: Vec<u8>,
    ) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 1, 1);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        encoder.set_trns(trns);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_load_rgba_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_load_rgba16_narrowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        let deep: image::ImageBuffer<Rgba<u16>, Vec<u16>> =
            image::ImageBuffer::from_pixel(1, 1, Rgba([0xFFFF, 0, 0, 0xFFFF]));
        deep.save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_load_rejects_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        RgbImage::from_pixel(2, 2, Rgb([9, 9, 9])).save(&path).unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::NotRgba {
                color: ExtendedColorType::Rgb8,
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_luma_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grey.png");
        image::GrayAlphaImage::from_pixel(1, 1, LumaA([40, 200]))
            .save(&path)
            .unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::NotRgba { .. }));
    }

    #[test]
    fn test_load_rejects_indexed_with_trns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indexed.png");
        write_png(
            &path,
            png::ColorType::Indexed,
            &[0],
            Some(vec![10, 200, 0]),
            vec![128],
        );

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::NotRgba { .. }));
    }

    #[test]
    fn test_load_rejects_rgb_with_trns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyed.png");
        write_png(
            &path,
            png::ColorType::Rgb,
            &[10, 200, 0],
            None,
            vec![0, 10, 0, 200, 0, 0],
        );

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::NotRgba {
                color: ExtendedColorType::Rgb8,
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rgba(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(
            err,
            Error::ImageLoad {
                source: ImageError::IoError(_),
                ..
            }
        ));
    }
}
