pub mod decode;
pub mod encode;
pub mod grayscale;

pub use decode::decode_png;
pub use encode::encode_png;
pub use grayscale::{grayscale_image, luminance};
