//! # panelkit
//!
//! Graphics backend agnostic panel geometry.
//!
//! This crate computes vector paths for bordered panel containers: rounded
//! rectangles with pluggable corner styles (circular, continuous "squircle",
//! elliptical, superellipse, concave), open-topped variants that leave a gap
//! for an inset title label, and the stroke layers for single and double
//! borders. Everything here is a pure function of a rectangle and a
//! configuration value; rendering is handled by whatever backend consumes the
//! emitted [`Path`] commands.

mod algorithm;
mod base;
mod border;
mod circular;
mod color;
mod continuous;
mod corner;
mod elliptical;
mod path;
mod primitives;
mod shapes;
mod superellipse;

pub use algorithm::*;
pub use base::*;
pub use border::*;
pub use circular::*;
pub use color::*;
pub use continuous::*;
pub use corner::*;
pub use elliptical::*;
pub use path::*;
pub use primitives::*;
pub use shapes::*;
pub use superellipse::*;
