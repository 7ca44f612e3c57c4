pub mod config;
pub mod controls;
pub mod draft;
pub mod image;
pub mod sample;

pub use config::*;
pub use controls::*;
pub use draft::*;
pub use image::*;
