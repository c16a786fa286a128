use std::borrow::Cow;
use std::io::Cursor;

use super::port::{ClipboardImage, ClipboardPort};

/// `ClipboardPort` backed by the OS clipboard via `arboard`.
///
/// An `arboard::Clipboard` is created per call rather than stored; the
/// handle is not `Send` on every platform and creation can fail on headless
/// systems, in which case operations quietly yield nothing.
///
/// The image slot speaks encoded bytes: incoming clipboard pixels are
/// re-encoded to canonical PNG, and stored cover bytes are decoded to RGBA
/// before being offered to the OS.
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn text(&mut self) -> Option<String> {
        let mut clip = arboard::Clipboard::new().ok()?;
        clip.get_text().ok().filter(|t| !t.is_empty())
    }

    fn set_text(&mut self, text: &str) {
        if let Ok(mut clip) = arboard::Clipboard::new() {
            let _ = clip.set_text(text.to_string());
        }
    }

    fn image(&mut self) -> Option<ClipboardImage> {
        let mut clip = arboard::Clipboard::new().ok()?;
        let img = clip.get_image().ok()?;
        let rgba = image::RgbaImage::from_raw(
            img.width as u32,
            img.height as u32,
            img.bytes.into_owned(),
        )?;

        let mut data = Vec::new();
        image::DynamicImage::ImageRgba8(rgba)
            .write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png)
            .ok()?;

        Some(ClipboardImage { data, mime: "image/png".to_string() })
    }

    fn set_image(&mut self, data: &[u8], _mime: &str) {
        let Ok(decoded) = image::load_from_memory(data) else {
            return;
        };
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        if let Ok(mut clip) = arboard::Clipboard::new() {
            let _ = clip.set_image(arboard::ImageData {
                width: width as usize,
                height: height as usize,
                bytes: Cow::Owned(rgba.into_raw()),
            });
        }
    }
}
