pub mod gallery;
pub mod image_ops;
pub mod notice;
pub mod tags;
pub mod view;

pub use gallery::Gallery;
pub use image_ops::GalleryError;
pub use notice::{LogNotifier, Notice, Notifier};
