use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage,
    codecs::ico::IcoEncoder,
    imageops::FilterType,
};
use log::{debug, info};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use crate::error::{AssetError, open_image};

pub const FAVICON_SIZE: u32 = 32;

/// Ignores aspect ratio; always FAVICON_SIZE square.
pub fn resize_favicon(image: &DynamicImage) -> RgbaImage {
    image
        .resize_exact(FAVICON_SIZE, FAVICON_SIZE, FilterType::Lanczos3)
        .into_rgba8()
}

pub fn generate_favicon(source: &Path, dest: &Path) -> Result<(), AssetError> {
    let image = open_image(source)?;
    debug!("Decoded {}: {}x{}", source.display(), image.width(), image.height());

    let resized = resize_favicon(&image);

    if let Some(dir) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            debug!("Created directory {}", dir.display());
        }
    }

    let writer = BufWriter::new(File::create(dest)?);
    IcoEncoder::new(writer).write_image(
        resized.as_raw(),
        resized.width(),
        resized.height(),
        ExtendedColorType::Rgba8,
    )?;
    info!("Wrote {FAVICON_SIZE}x{FAVICON_SIZE} favicon to {}", dest.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn resize_ignores_aspect_ratio() {
        for (w, h) in [(1, 1), (100, 7), (7, 100), (64, 64)] {
            let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([10, 20, 30])));
            assert_eq!(resize_favicon(&image).dimensions(), (FAVICON_SIZE, FAVICON_SIZE));
        }
    }
}
