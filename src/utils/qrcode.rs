use base64::{engine::general_purpose, Engine as _};
use image::codecs::png::PngEncoder;
use image::{ImageBuffer, ImageEncoder, Rgb, RgbImage};
use qrcode::{Color, QrCode};

use crate::core::error::{AppError, AppResult};
use crate::core::generator::QrEncoder;
use crate::core::models::RenderOptions;

/// Production encoder: QR matrix -> RGB raster -> PNG -> base64 data URI.
pub struct PngQrEncoder;

impl QrEncoder for PngQrEncoder {
    fn encode(&self, text: &str, options: &RenderOptions) -> AppResult<String> {
        let png_bytes = render_png(text, options)?;
        let encoded = general_purpose::STANDARD.encode(&png_bytes);
        Ok(format!("data:image/png;base64,{}", encoded))
    }
}

fn render_png(text: &str, options: &RenderOptions) -> AppResult<Vec<u8>> {
    let code =
        QrCode::with_error_correction_level(text.as_bytes(), options.error_correction.into())?;
    let dark = parse_hex_color(&options.dark)?;
    let light = parse_hex_color(&options.light)?;

    let modules = code.width() as u32;
    let total = modules + 2 * options.margin;

    // Draw at an integer module scale first, then resize to the exact
    // requested width. Nearest-neighbor keeps module edges crisp.
    let scale = (options.width / total).max(1);
    let drawn_size = total * scale;

    let mut img: RgbImage = ImageBuffer::from_pixel(drawn_size, drawn_size, light);
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] != Color::Dark {
                continue;
            }
            let px = (options.margin + x) * scale;
            let py = (options.margin + y) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, py + dy, dark);
                }
            }
        }
    }

    let img = if drawn_size != options.width {
        image::imageops::resize(
            &img,
            options.width,
            options.width,
            image::imageops::FilterType::Nearest,
        )
    } else {
        img
    };

    let mut png_bytes = Vec::new();
    let encoder = PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        img.as_raw(),
        options.width,
        options.width,
        image::ColorType::Rgb8,
    )?;

    Ok(png_bytes)
}

fn parse_hex_color(hex: &str) -> AppResult<Rgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| AppError::InvalidColor(hex.to_string()))
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
