//! # panelkit-panels
//!
//! Panel assembly built on the `panelkit` geometry core.
//!
//! A [`Panel`] is a configuration value; [`Panel::layers`] turns it plus a
//! rectangle and a corner algorithm into an ordered list of draw layers
//! (fill, content area, border strokes, optional scrollbar overlay, optional
//! title) that any renderer can composite back-to-front.

mod layers;
mod panel;
mod scrollbar;

pub use layers::*;
pub use panel::*;
pub use scrollbar::*;
