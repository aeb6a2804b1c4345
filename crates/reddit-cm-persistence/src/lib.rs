pub mod document;
pub mod format;
pub mod serialization;
pub mod store;
pub mod traits;

pub use document::{ExportWriter, ImportLoader};
pub use format::DocumentFormat;
pub use serialization::*;
pub use store::*;
pub use traits::*;
