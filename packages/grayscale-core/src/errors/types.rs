use thiserror::Error;

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unsupported image format (PNG only)")]
    UnsupportedFormat,

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("PNG encode failed: {0}")]
    Encode(String),
}
