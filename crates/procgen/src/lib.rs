//! Procedural mesh generation: flat grids and rounded boxes.
//!
//! Everything here is a pure function of its parameters. Each call builds fresh
//! buffers and hands them back by value, so independent generations can run on
//! any number of threads.

pub mod box_colliders;
pub mod box_faces;
pub mod grid;
pub mod params;
pub mod rounded_box;

pub use box_colliders::*;
pub use box_faces::*;
pub use grid::*;
pub use params::*;
pub use rounded_box::*;
