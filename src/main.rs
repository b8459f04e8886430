//! GatorQuest demo entry point.
//!
//! A tiny 2D demo written in Rust using:
//! - **raylib** for windowing, textures, fonts, input, and drawing
//! - **bevy_ecs** for holding the demo state and ordering the frame's systems
//!
//! # Main Loop
//!
//! 1. Read `config.ini`, open the window, load the textures and title font
//! 2. Spawn the background, the movable sprite and the title; center the camera
//! 3. Every frame: poll input, move sprite and camera, rebuild the camera
//!    transform, draw background, sprite and title
//! 4. On close, release every loaded asset before the window goes away
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use gatorquest::game;
use gatorquest::resources::gameconfig::GameConfig;
use gatorquest::resources::viewport::Viewport;
use gatorquest::systems::camera::update_camera;
use gatorquest::systems::input::update_input_state;
use gatorquest::systems::keyboardcontroller::keyboard_controller;
use gatorquest::systems::render::render_system;
use std::path::PathBuf;

/// GatorQuest 2D demo
#[derive(Parser)]
#[command(version, about = "Moves a sprite around with the arrow keys or the mouse.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory to load assets from, overriding the configuration.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(root) = cli.assets {
        config.assets.root = root;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);

    let assets = game::load_assets(&mut rl, &thread, &config)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(Viewport::new(rl.get_screen_width(), rl.get_screen_height()));
    world.insert_resource(config);
    game::create(&mut world, assets);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = game::update_schedule();
    update.add_systems(update_input_state.before(keyboard_controller));
    update.add_systems(render_system.after(update_camera));

    if let Err(e) = update.initialize(&mut world) {
        // The world owns the window too; release assets while it is still open.
        game::dispose(&mut world);
        return Err(format!("Failed to initialize schedule: {}", e));
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        // Update viewport each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut viewport = world.resource_mut::<Viewport>();
            if viewport.w != new_w || viewport.h != new_h {
                log::debug!("Viewport resized to {}x{}", new_w, new_h);
                viewport.w = new_w;
                viewport.h = new_h;
            }
        }

        update.run(&mut world);
    }

    // Textures and fonts must go before the window does.
    game::dispose(&mut world);
    Ok(())
}
