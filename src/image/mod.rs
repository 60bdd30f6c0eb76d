//! Image loading, channel handling, and saving utilities.

mod channels;
mod load;
mod save;

pub use channels::{invert_color, ChannelPlanes};
pub use load::load_rgba;
pub use save::save_png;
