//! Rendering primitives shared by the console sink and the dispatcher.

mod color;

pub use color::*;
