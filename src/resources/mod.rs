//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `assetstore` – loaded textures and fonts keyed by string IDs
//! - `camera2d` – the camera's translation and derived view transform
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard and pointer state
//! - `viewport` – current window size in pixels and y-flip helpers
pub mod assetstore;
pub mod camera2d;
pub mod gameconfig;
pub mod input;
pub mod viewport;
