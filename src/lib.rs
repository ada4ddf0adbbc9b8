//! Flat-shaded primitives on the PlayStation 2 Graphics Synthesizer.
//!
//! On the EE the drawing calls go to gsKit through [`gskit::GsKit`]. On any
//! other target [`soft::Framebuffer`] rasterises the same calls in memory,
//! which is what the tests look at.
#![cfg_attr(not(test), no_std)]

#[cfg(not(ps2_ee))]
extern crate alloc;

pub mod backend;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod logger;
pub mod scene;
pub mod vertex;

#[cfg(ps2_ee)]
pub mod gskit;
#[cfg(not(ps2_ee))]
pub mod soft;

pub use backend::GsBackend;
pub use canvas::Canvas;
pub use color::{Alpha, Rgbaq};
pub use config::{ClampMode, DisplayConfig, FlipMode, VideoMode};
pub use error::Error;
pub use scene::Scene;
pub use vertex::Vertex;

pub type Result<T> = core::result::Result<T, Error>;
