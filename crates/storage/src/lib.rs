#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod file;
pub mod log;
pub mod settings;
pub mod source;

pub use file::FileRepository;
pub use source::{SourceFile, SourceFormat};
