use crate::constants::OUTPUT_SUFFIX;
use std::path::{Path, PathBuf};

/// 出力ファイルパスを導出する
///
/// 拡張子の直前にサフィックスを挿入する（pic.png → pic_new.png）。
/// 拡張子がない場合はファイル名の末尾に付加する
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str());
    let ext = input.extension().and_then(|s| s.to_str());

    let file_name = match (stem, ext) {
        (Some(stem), Some(ext)) => format!("{stem}{OUTPUT_SUFFIX}.{ext}"),
        _ => {
            let name = input.file_name().and_then(|s| s.to_str()).unwrap_or("out");
            format!("{name}{OUTPUT_SUFFIX}")
        }
    };

    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("pic.png")),
            PathBuf::from("pic_new.png")
        );
    }

    #[test]
    fn test_derive_output_path_with_directory() {
        assert_eq!(
            derive_output_path(Path::new("photos/2024/pic.png")),
            PathBuf::from("photos/2024/pic_new.png")
        );
    }

    #[test]
    fn test_derive_output_path_without_extension() {
        assert_eq!(
            derive_output_path(Path::new("picture")),
            PathBuf::from("picture_new")
        );
    }

    #[test]
    fn test_derive_output_path_multiple_dots() {
        // 最後のドットのみ拡張子として扱う
        assert_eq!(
            derive_output_path(Path::new("pic.backup.png")),
            PathBuf::from("pic.backup_new.png")
        );
    }
}
