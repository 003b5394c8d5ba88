mod client;
mod error;


pub use client::AnnotationClient;
pub use error::{AnnotationError, Result};
