//! Text rendering helpers shared by the console and file transports.

mod color;
mod template;

pub use color::{Color, paint};
pub use template::{Placeholder, Segment, Template, Values};
