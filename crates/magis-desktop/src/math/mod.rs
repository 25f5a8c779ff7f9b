//! Geometry for window placement
//!
//! Positions are unconstrained canvas coordinates; a window may be dragged
//! off-screen and nothing here clamps it.

mod vec2;

pub use vec2::Vec2;
