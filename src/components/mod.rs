//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – markers for keyboard and pointer driven movement
//! - [`mapposition`] – world-space position, moves with the camera
//! - [`screenposition`] – screen-space position, ignores the camera
//! - [`sprite`] – texture key and size of a drawable image
//! - [`titlelabel`] – static text with precomputed layout

pub mod inputcontrolled;
pub mod mapposition;
pub mod screenposition;
pub mod sprite;
pub mod titlelabel;
