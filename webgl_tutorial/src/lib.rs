//! Helpers shared by the WebGL 2.0 tutorial stages under `demos/`.
//!
//! Every stage follows the same steps: load shader text, compile and link it, upload vertex data
//! into buffers recorded on a vertex array, compute a transform matrix and draw. This crate holds
//! the few lines of glue each of those steps needs, so that the stages themselves read as a
//! straight line from top to bottom.

pub mod animation;
pub mod buffer;
pub mod canvas;
pub mod config;
pub mod context_options;
pub mod error;
pub mod event;
pub mod fetch;
pub mod geometry;
pub mod logging;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod transform;

mod util;

pub use crate::error::StageError;
pub use web_sys::WebGl2RenderingContext as Gl;
