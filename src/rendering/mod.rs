pub mod c_array;
pub mod image_loader;
pub mod preview;

pub use c_array::{c_identifier, CArrayFiles};
pub use image_loader::{load_raster, to_raster};
pub use preview::encode_preview;
