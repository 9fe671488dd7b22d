//! Window-relative plot translation for the Glyphplot renderer.
//!
//! Takes rasterized curve points, relative to a window center, and produces
//! the ordered list of absolute-coordinate plot nodes the renderer draws.
//! Window coordinates put home at the upper left corner, so the Cartesian y
//! axis inverts on the way through.

pub mod errors;
mod list;
mod node;
mod window;

pub use errors::GridError;
pub use list::build_plot_list;
pub use node::{DEFAULT_GLYPH, PlotNode};
pub use window::{Orientation, determine_center};
