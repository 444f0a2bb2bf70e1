use std::fs;
use std::path::{Path, PathBuf};

use grayscale_core::{
    decode_png, derive_output_path, encode_png, grayscale_image, validate_dimensions,
    TransformError,
};

/// アプリケーションエラー
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// 入力ファイルをグレースケール化して新しいファイルに書き出す
///
/// 元ファイルは変更しない。書き出すファイルは導出パス（pic.png → pic_new.png）
/// の1つだけで、エラー時は何も書き出さない。成功時は書き出したファイルの
/// 絶対パスを返す
pub fn convert_file(input: &Path) -> Result<PathBuf, AppError> {
    let input_bytes = fs::read(input).map_err(|_| AppError::InputNotFound {
        path: input.to_path_buf(),
    })?;

    tracing::info!(path = %input.display(), bytes = input_bytes.len(), "decoding input");
    let img = decode_png(&input_bytes)?;
    validate_dimensions(img.width(), img.height())?;

    tracing::info!(width = img.width(), height = img.height(), "applying grayscale");
    let gray = grayscale_image(img);
    let output_bytes = encode_png(&gray)?;

    let output_path = derive_output_path(input);
    fs::write(&output_path, &output_bytes).map_err(|source| AppError::Write {
        path: output_path.clone(),
        source,
    })?;

    tracing::info!(path = %output_path.display(), bytes = output_bytes.len(), "wrote output");

    // 書き込み直後なので canonicalize は通常成功する。失敗時は導出パスをそのまま返す
    Ok(output_path.canonicalize().unwrap_or(output_path))
}
