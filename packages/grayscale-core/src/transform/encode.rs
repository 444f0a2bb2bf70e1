use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// 画像を PNG バイト列にエンコードする
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| TransformError::Encode(format!("PNG encode failed: {e}")))?;

    Ok(buf.into_inner())
}
