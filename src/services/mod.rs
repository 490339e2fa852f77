//! Support services for the removal pipeline

pub mod io;

pub use io::ImageIoService;
