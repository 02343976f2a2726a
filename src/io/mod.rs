/// Command-line parsing and batch file processing
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG quantization into faces and PNG export
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Front-view rendering of cubie transforms
pub mod render;
