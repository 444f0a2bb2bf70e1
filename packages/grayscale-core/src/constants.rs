/// 画像の最大ピクセル数（1GP = 実質無制限、極端な入力のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// 出力ファイル名で拡張子の直前に挿入するサフィックス（pic.png → pic_new.png）
pub const OUTPUT_SUFFIX: &str = "_new";
