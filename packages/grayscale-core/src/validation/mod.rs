pub mod dimensions;

pub use dimensions::validate_dimensions;
