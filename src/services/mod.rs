pub mod batch;
pub mod converter;

pub use batch::{run_batch, BatchReport};
pub use converter::{Conversion, ConversionService};
