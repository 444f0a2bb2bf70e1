use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// PNG バイト列をデコードする
///
/// フォーマットはマジックナンバーから推測し、PNG 以外は拒否する
pub fn decode_png(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("failed to guess format: {e}")))?;

    match reader.format() {
        Some(ImageFormat::Png) => {}
        Some(_) => return Err(TransformError::UnsupportedFormat),
        None => {
            return Err(TransformError::Decode(
                "unrecognized image data".to_string(),
            ));
        }
    }

    reader
        .decode()
        .map_err(|e| TransformError::Decode(format!("decode failed: {e}")))
}
