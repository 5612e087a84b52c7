use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("PNG encoding error: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders the membership badge: a QR code whose payload is the session's
/// user identifier, checked at the front desk.
#[derive(Clone, Default)]
pub struct BadgeRenderer;

impl BadgeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_png(&self, payload: &str) -> Result<Vec<u8>, BadgeError> {
        let code = QrCode::new(payload.as_bytes())?;
        let image = code.render::<Luma<u8>>().build();
        let mut buffer: Vec<u8> = Vec::new();
        image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }

    /// Base64 data URI form, for embedding directly in the profile payload.
    pub fn render_data_uri(&self, payload: &str) -> Result<String, BadgeError> {
        let png = self.render_png(payload)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}
