//! Map Explorer main entry point.
//!
//! A small map viewer written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** to hold viewer state as resources and run per-frame systems
//!
//! It shows a large generated tile map (or an image loaded from disk)
//! full-screen, with keyboard pan/zoom and a minimap overlay.
//!
//! # Controls
//!
//! | Key        | Action                          |
//! |------------|---------------------------------|
//! | Arrows     | scroll                          |
//! | Z / X      | zoom in / out                   |
//! | H          | toggle minimap                  |
//! | S          | switch between the two maps     |
//! | F5         | reload `config.ini`             |
//! | F11        | toggle debug overlay            |
//! | Escape     | quit                            |
//!
//! # Main Loop
//!
//! 1. Load configuration, open the raylib window, build both map textures
//! 2. Insert resources and observers into the ECS world
//! 3. Each frame: refresh the screen size, poll input, update the viewport,
//!    render
//! 4. Stop when the window closes or the quit key is pressed
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 1234
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use mapexplorer::events::reloadconfig::reload_config_observer;
use mapexplorer::events::switchdebug::switch_debug_observer;
use mapexplorer::game;
use mapexplorer::resources::exitrequest::ExitRequested;
use mapexplorer::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use mapexplorer::resources::screensize::ScreenSize;
use mapexplorer::systems::gameconfig::{apply_window_settings, sync_viewer_settings};
use mapexplorer::systems::input::update_input_state;
use mapexplorer::systems::render::render_system;
use mapexplorer::systems::viewport::viewport_controller;

/// Map Explorer
#[derive(Parser)]
#[command(version, about = "Pan and zoom around a large generated map with a minimap overlay.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Image to show as the alternate map (overrides the config file).
    #[arg(long, value_name = "PATH")]
    map_image: Option<PathBuf>,

    /// Seed for the generated map (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.map_image {
        config.map_image = path;
    }
    if let Some(seed) = cli.seed {
        config.map_seed = seed;
    }

    // Early-exit: write the config file and quit (no window needed)
    if cli.write_default_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    info!("Starting Map Explorer");
    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Map Explorer")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the viewport controller
    rl.set_exit_key(None);

    let textures = match game::load_map_textures(&mut rl, &thread, &config) {
        Ok(textures) => textures,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    game::insert_viewer_resources(&mut world, config, screen);
    world.insert_resource(textures.store());
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(reload_config_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_window_settings);
    update.add_systems(sync_viewer_settings);
    update.add_systems(update_input_state);
    update.add_systems(
        viewport_controller
            .after(update_input_state)
            .after(sync_viewer_settings),
    );
    update.add_systems(render_system.after(viewport_controller));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.contains_resource::<ExitRequested>()
    {
        // Screen size may change due to resize
        let (w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            if screen.w != w || screen.h != h {
                screen.w = w;
                screen.h = h;
            }
        }

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Bye!");
}
