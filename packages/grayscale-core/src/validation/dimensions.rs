use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
