//! Demo systems.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`keyboardcontroller`] – move the sprite and camera one unit per held arrow key
//! - [`mousecontroller`] – center the sprite on the cursor while the button is held
//! - [`camera`] – rebuild the camera transform after movement
//! - [`render`] – plan and draw the frame using Raylib

pub mod camera;
pub mod input;
pub mod keyboardcontroller;
pub mod mousecontroller;
pub mod render;
