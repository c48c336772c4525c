//! Moderation client services.
//!
//! Everything here is independent of the view layer:
//!
//! # Services
//!
//! - [`storage`] - Durable key-value storage (`localStorage`, in-memory)
//! - [`credentials`] - Bearer token holder
//! - [`moderation`] - HTTP transport for the moderation API
//! - [`flow`] - Upload-and-moderate state machine and its driver
//! - [`notify`] - User-visible alerts
//! - [`render`] - Result formatting

pub mod storage;
pub mod credentials;
pub mod moderation;
pub mod flow;
pub mod notify;
pub mod render;

pub use storage::*;
pub use credentials::*;
pub use moderation::*;
pub use flow::*;
pub use notify::*;
pub use render::*;
