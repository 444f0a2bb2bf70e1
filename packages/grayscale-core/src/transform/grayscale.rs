use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

// Rec. 601 輝度係数（1000 倍の固定小数点）
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// RGB 値から輝度を計算する
///
/// Rec. 601 の重み付け（0.299R + 0.587G + 0.114B）を整数演算で行い、
/// 四捨五入して返す。r == g == b のときは入力値をそのまま返すため、
/// 変換は冪等になる
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((weighted + 500) / 1000) as u8
}

/// 画像全体をグレースケール化する
///
/// 各ピクセルの RGB を輝度 v に置き換えて (v, v, v) とする。
/// アルファチャンネルを持つ画像は RGBA のまま処理し、アルファ値は保持する。
/// 寸法は変わらない
pub fn grayscale_image(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        let mut rgba: RgbaImage = img.into_rgba8();
        for pixel in rgba.pixels_mut() {
            let Rgba([r, g, b, a]) = *pixel;
            let v = luminance(r, g, b);
            *pixel = Rgba([v, v, v, a]);
        }
        DynamicImage::ImageRgba8(rgba)
    } else {
        let mut rgb: RgbImage = img.into_rgb8();
        for pixel in rgb.pixels_mut() {
            let Rgb([r, g, b]) = *pixel;
            let v = luminance(r, g, b);
            *pixel = Rgb([v, v, v]);
        }
        DynamicImage::ImageRgb8(rgb)
    }
}
