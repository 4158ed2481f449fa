use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use qrcode::{Color, QrCode};

use super::token::SessionToken;
use crate::{
    api::ClassDescriptor, config::QrRenderConfig, error::AppError, utils::time::now_utc,
};

/// A rendered attendance code.
#[derive(Debug, Clone, PartialEq)]
pub struct QrImage {
    pub token: SessionToken,
    pub payload: String,
    pub size_px: u32,
    pub png: Vec<u8>,
    pub data_url: String,
}

impl QrImage {
    pub fn download_name(&self) -> String {
        format!("{}-attendance-qr.png", self.token.subject)
    }
}

#[derive(Debug, Clone)]
pub struct QrEncoder {
    options: QrRenderConfig,
}

impl QrEncoder {
    pub fn new(options: QrRenderConfig) -> Self {
        Self { options }
    }

    pub fn encode(&self, class: &ClassDescriptor, teacher: &str) -> Result<QrImage, AppError> {
        self.encode_at(class, teacher, now_utc())
    }

    pub fn encode_at(
        &self,
        class: &ClassDescriptor,
        teacher: &str,
        now: DateTime<Utc>,
    ) -> Result<QrImage, AppError> {
        let token = SessionToken::for_class(class, teacher, now);
        let payload = token.to_payload()?;
        let result = self.render_png(&payload);
        let png = match result {
            Ok(png) => png,
            Err(err) => {
                log::error!("failed to render session {}: {err}", token.session_id);
                return Err(err);
            }
        };
        log::info!("generated attendance code {}", token.session_id);
        let data_url = format!("data:image/png;base64,{}", STANDARD.encode(&png));
        Ok(QrImage {
            token,
            payload,
            size_px: self.options.size_px,
            png,
            data_url,
        })
    }

    pub fn render_png(&self, payload: &str) -> Result<Vec<u8>, AppError> {
        let pixels = self.render_pixels(payload)?;
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                pixels.as_raw(),
                pixels.width(),
                pixels.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|err| AppError::encode(format!("Failed to encode PNG: {err}")))?;
        Ok(png)
    }

    /// Draws the symbol centred on a `size_px` square with `margin_modules`
    /// of light quiet zone on every side.
    pub fn render_pixels(&self, payload: &str) -> Result<RgbImage, AppError> {
        let opts = &self.options;
        let code = QrCode::with_error_correction_level(payload, opts.error_correction.into())
            .map_err(|err| AppError::encode(format!("Failed to generate QR code: {err}")))?;
        let dark = parse_hex_color(&opts.dark_color)?;
        let light = parse_hex_color(&opts.light_color)?;

        let modules = code.width() as u32;
        let span = opts
            .margin_modules
            .checked_mul(2)
            .and_then(|margins| margins.checked_add(modules))
            .ok_or_else(|| {
                AppError::encode(format!("Margin of {} modules is too large", opts.margin_modules))
            })?;
        let module_px = opts.size_px / span;
        if module_px == 0 {
            return Err(AppError::encode(format!(
                "QR code needs {span} modules but the image is only {}px wide",
                opts.size_px
            )));
        }
        let origin = (opts.size_px - module_px * span) / 2 + opts.margin_modules * module_px;

        let mut pixels = RgbImage::from_pixel(opts.size_px, opts.size_px, light);
        for (idx, color) in code.to_colors().into_iter().enumerate() {
            if color != Color::Dark {
                continue;
            }
            let mx = idx as u32 % modules;
            let my = idx as u32 / modules;
            let x0 = origin + mx * module_px;
            let y0 = origin + my * module_px;
            for y in y0..y0 + module_px {
                for x in x0..x0 + module_px {
                    pixels.put_pixel(x, y, dark);
                }
            }
        }
        Ok(pixels)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(QrRenderConfig::default())
    }
}

fn parse_hex_color(raw: &str) -> Result<Rgb<u8>, AppError> {
    let invalid = || AppError::encode(format!("Invalid color: {raw}"));
    let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
