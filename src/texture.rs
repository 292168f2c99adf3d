use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, ImageReader, RgbaImage};
use thiserror::Error;

/// Errors raised while turning an image file into texture data.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("unable to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("not implemented to handle image with {channels} channels")]
    UnsupportedChannels { channels: u8 },
}

/// Source pixel layout selected from the decoded channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    pub fn from_channels(channels: u8) -> Result<Self, TextureError> {
        match channels {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            channels => Err(TextureError::UnsupportedChannels { channels }),
        }
    }
}

/// One level of the mip chain, tightly packed RGBA8 rows.
#[derive(Debug, Clone, PartialEq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// A decoded, flipped and mipmapped image waiting for GPU upload.
#[derive(Debug, Clone)]
pub struct DecodedTexture {
    pub name: String,
    pub layout: PixelLayout,
    pub levels: Vec<MipLevel>,
}

impl DecodedTexture {
    /// Reads and prepares the image at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let decode_error = |source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        };
        // The container is sniffed from the file contents, not the extension.
        let image = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(ImageError::IoError)
            .and_then(ImageReader::decode)
            .map_err(decode_error)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_image(name, image)
    }

    /// Prepares an already decoded image.
    ///
    /// Rows are flipped so that `v = 0` addresses the bottom of the picture,
    /// which is how the scene's texture coordinates were authored.
    pub fn from_image(name: impl Into<String>, image: DynamicImage) -> Result<Self, TextureError> {
        let layout = PixelLayout::from_channels(image.color().channel_count())?;
        let image = image.flipv();
        // Both layouts are stored as RGBA8; RGB sources gain an opaque alpha.
        let base = image.to_rgba8();
        Ok(Self {
            name: name.into(),
            layout,
            levels: build_mip_chain(base),
        })
    }

    pub fn width(&self) -> u32 {
        self.levels[0].width
    }

    pub fn height(&self) -> u32 {
        self.levels[0].height
    }

    pub fn mip_level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}

/// Number of levels in a full mip chain for the given extent.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

fn build_mip_chain(base: RgbaImage) -> Vec<MipLevel> {
    let (width, height) = base.dimensions();
    let count = mip_level_count(width, height);
    let mut levels = Vec::with_capacity(count as usize);
    for level in 1..count {
        let level_width = (width >> level).max(1);
        let level_height = (height >> level).max(1);
        let resized = imageops::resize(&base, level_width, level_height, FilterType::Triangle);
        levels.push(MipLevel {
            width: level_width,
            height: level_height,
            pixels: resized.into_raw(),
        });
    }
    levels.insert(
        0,
        MipLevel {
            width,
            height,
            pixels: base.into_raw(),
        },
    );
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Rgb, RgbImage, Rgba};

    #[test]
    fn channel_count_selects_upload_path() {
        assert_eq!(PixelLayout::from_channels(3).unwrap(), PixelLayout::Rgb);
        assert_eq!(PixelLayout::from_channels(4).unwrap(), PixelLayout::Rgba);
        for channels in [0, 1, 2, 5] {
            let err = PixelLayout::from_channels(channels).unwrap_err();
            assert!(matches!(err, TextureError::UnsupportedChannels { channels: c } if c == channels));
        }
    }

    #[test]
    fn rgb_images_are_expanded_with_opaque_alpha() {
        let image = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let texture = DecodedTexture::from_image("rgb", DynamicImage::ImageRgb8(image)).unwrap();
        assert_eq!(texture.layout, PixelLayout::Rgb);
        assert_eq!(&texture.levels[0].pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn every_rgb_texel_becomes_opaque() {
        let mut image = RgbImage::new(3, 3);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgb([x as u8 * 40, y as u8 * 40, 9]);
        }
        let texture = DecodedTexture::from_image("rgb", DynamicImage::ImageRgb8(image)).unwrap();
        let base = &texture.levels[0];
        assert_eq!(base.pixels.len(), 3 * 3 * 4);
        assert!(base.pixels.chunks_exact(4).all(|texel| texel[3] == u8::MAX));
        assert_eq!(&base.pixels[..4], &[0, 80, 9, 255]);
    }

    #[test]
    fn rgba_images_keep_alpha() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
        let texture = DecodedTexture::from_image("rgba", DynamicImage::ImageRgba8(image)).unwrap();
        assert_eq!(texture.layout, PixelLayout::Rgba);
        assert_eq!(texture.levels[0].pixels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn grayscale_images_are_rejected() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        let err = DecodedTexture::from_image("gray", gray).unwrap_err();
        assert!(matches!(err, TextureError::UnsupportedChannels { channels: 1 }));

        let gray_alpha = DynamicImage::ImageLumaA8(GrayAlphaImage::new(4, 4));
        let err = DecodedTexture::from_image("gray-alpha", gray_alpha).unwrap_err();
        assert_eq!(err.to_string(), "not implemented to handle image with 2 channels");
    }

    #[test]
    fn rows_are_flipped_vertically() {
        let mut image = RgbImage::new(1, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        let texture = DecodedTexture::from_image("flip", DynamicImage::ImageRgb8(image)).unwrap();
        assert_eq!(&texture.levels[0].pixels[..4], &[0, 0, 255, 255]);
        assert_eq!(&texture.levels[0].pixels[4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn mip_chain_reaches_one_texel() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(256, 256), 9);
        assert_eq!(mip_level_count(300, 20), 9);

        let image = RgbImage::from_pixel(8, 2, Rgb([7, 7, 7]));
        let texture = DecodedTexture::from_image("mips", DynamicImage::ImageRgb8(image)).unwrap();
        let extents: Vec<_> = texture.levels.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(extents, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
        for level in &texture.levels {
            assert_eq!(level.pixels.len() as u32, level.width * level.height * 4);
        }
        assert_eq!(texture.mip_level_count(), 4);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = DecodedTexture::load("definitely-not-here.jpg").unwrap_err();
        assert!(err.to_string().contains("definitely-not-here.jpg"));
    }
}
