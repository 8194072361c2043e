//! Terminal-facing UI facade.
//!
//! Groups the rendering contract, colour conversion for theme swatches, and
//! user-visible notices so the CLI can depend on `ui` alone.

pub mod color;
pub mod notice;
pub mod render;

pub use notice::{Notice, NoticeKind};
pub use render::{RenderSink, Renderer};
