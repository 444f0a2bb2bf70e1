pub mod constants;
pub mod errors;
pub mod naming;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{MAX_PIXELS, OUTPUT_SUFFIX};
pub use errors::TransformError;
pub use naming::derive_output_path;
pub use transform::{decode_png, encode_png, grayscale_image, luminance};
pub use validation::validate_dimensions;
