//! Bear Country main entry point.
//!
//! A top-down walking demo written in Rust using:
//! - **raylib** for windowing, input, graphics and the frame limiter
//! - **bevy_ecs** for entities, resources and the per-frame schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when absent), open the window
//! 2. Load and upload every sprite, with placeholders for missing files
//! 3. Spawn the player and the scenery, register observers
//! 4. While the loop state is running:
//!    - Update frame time
//!    - Input → intent → movement → animation → camera → render
//! 5. Release textures, then close the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --sprites-dir sprites
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bear_country::events::quit::{QuitEvent, QuitReason, quit_observer};
use bear_country::events::switchdebug::switch_debug_observer;
use bear_country::game;
use bear_country::resources::camera::PlayerCamera;
use bear_country::resources::gameconfig::GameConfig;
use bear_country::resources::input::InputState;
use bear_country::resources::loopstate::LoopState;
use bear_country::resources::movementintent::MovementIntent;
use bear_country::resources::screensize::ScreenSize;
use bear_country::resources::texturestore::TextureStore;
use bear_country::resources::worldtime::WorldTime;
use bear_country::systems::animation::player_animation;
use bear_country::systems::camera::update_camera;
use bear_country::systems::input::update_input_state;
use bear_country::systems::inputintent::update_movement_intent;
use bear_country::systems::movement::movement;
use bear_country::systems::render::render_system;
use bear_country::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Bear Country
#[derive(Parser)]
#[command(version, about = "Walk a bear around a small scrolling world.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory holding sprite.<n>.png files (overrides the config file).
    #[arg(long, value_name = "DIR")]
    sprites_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} - using defaults", e);
    }
    if let Some(dir) = cli.sprites_dir {
        config.sprites_dir = dir;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let width = i32::try_from(window_width)
        .map_err(|_| format!("Window width {} is too large", window_width))?;
    let height = i32::try_from(window_height)
        .map_err(|_| format!("Window height {} is too large", window_height))?;
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the input system
    rl.set_exit_key(None);

    let textures = game::load_textures(&mut rl, &thread, &config)?;

    // --------------- ECS world + resources ---------------
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(LoopState::new());
    world.insert_resource(InputState::default());
    world.insert_resource(MovementIntent::default());
    world.insert_resource(screen);
    world.insert_resource(PlayerCamera::new(screen));
    world.insert_resource(textures);

    game::spawn_player(&mut world, &config);
    let scenery = game::spawn_scenery(&mut world, &game::world_layout());
    log::info!("Spawned player and {} scenery objects", scenery.len());

    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(quit_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            update_movement_intent,
            movement,
            player_animation,
            update_camera,
            render_system,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while world.resource::<LoopState>().is_running() {
        let (close_requested, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.window_should_close(), rl.get_frame_time())
        };
        if close_requested {
            world.trigger(QuitEvent {
                reason: QuitReason::WindowClosed,
            });
            world.flush();
            continue;
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    shutdown(&mut world);
    log::info!("Bye!");
    Ok(())
}

/// Unload GPU textures while the GL context still exists, then close the window.
fn shutdown(world: &mut World) {
    world.remove_resource::<TextureStore>();
    world.remove_non_send_resource::<raylib::RaylibThread>();
    world.remove_non_send_resource::<raylib::RaylibHandle>();
}
