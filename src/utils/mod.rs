pub mod error;

pub use error::{JestRunItError, Result};
