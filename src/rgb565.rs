//! RGB565 logo header, written for the LCD driver's `logo_data` array.

use image::RgbImage;
use log::{debug, info};
use std::{fmt, fs, path::Path};

use crate::error::{AssetError, open_image};

pub const VALUES_PER_LINE: usize = 12;

/// Truncates each channel to 5/6/5 bits, no rounding.
pub fn to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r = (r as u16 & 0xF8) << 8;
    let g = (g as u16 & 0xFC) << 3;
    let b = b as u16 >> 3;
    r | g | b
}

pub fn render_header(image: &RgbImage) -> String {
    let (width, height) = image.dimensions();
    let mut out = String::with_capacity(256 + width as usize * height as usize * 8);
    write_header(&mut out, image).expect("writing to a String cannot fail");
    out
}

pub fn write_header(out: &mut impl fmt::Write, image: &RgbImage) -> fmt::Result {
    let (width, height) = image.dimensions();

    writeln!(out, "// Auto-generated logo data")?;
    writeln!(out, "// Image size: {width}x{height} pixels")?;
    writeln!(out, "// Format: RGB565\n")?;
    writeln!(out, "#ifndef LOGO_H")?;
    writeln!(out, "#define LOGO_H\n")?;
    writeln!(out, "#include <stdint.h>\n")?;
    writeln!(out, "#define LOGO_WIDTH {width}")?;
    writeln!(out, "#define LOGO_HEIGHT {height}\n")?;
    writeln!(out, "const uint16_t logo_data[{width}*{height}] = {{")?;

    // 行优先顺序
    for (i, pixel) in image.pixels().enumerate() {
        let [r, g, b] = pixel.0;
        write!(out, "0x{:04X}, ", to_rgb565(r, g, b))?;
        if (i + 1) % VALUES_PER_LINE == 0 {
            writeln!(out)?;
        }
    }

    writeln!(out, "\n}};\n")?;
    writeln!(out, "#endif // LOGO_H")
}

/// Decodes `source`, renders the whole header, then writes `dest` in one go.
/// A failed decode never touches an existing `dest`.
pub fn generate_logo_header(source: &Path, dest: &Path) -> Result<(u32, u32), AssetError> {
    let image = open_image(source)?.into_rgb8();
    let dimensions = image.dimensions();
    debug!("Decoded {}: {}x{}", source.display(), dimensions.0, dimensions.1);

    let header = render_header(&image);
    fs::write(dest, &header)?;
    info!("Wrote {} ({} bytes)", dest.display(), header.len());

    Ok(dimensions)
}
