//! UI Components for the moderation client.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`TokenInput`] - Bearer token entry and persistence
//! - [`ImageUpload`] - Image picker and submit control
//! - [`ResultDisplay`] - Safety verdict and category confidence
//! - [`CategoryGuide`] - Categories the service detects

mod hero;
mod token_input;
mod image_upload;
mod result_display;
mod category_guide;
mod footer;

pub use hero::*;
pub use token_input::*;
pub use image_upload::*;
pub use result_display::*;
pub use category_guide::*;
pub use footer::*;
