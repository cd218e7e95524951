pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod sheets;

pub use error::{GsheetError, Result};
pub use model::*;
