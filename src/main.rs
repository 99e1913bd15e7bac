//! Courtyard main entry point.
//!
//! A pair of small interactive toys written in Rust using:
//! - **raylib** for windowing, graphics, input, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Toys
//!
//! - `courtyard flyer` – a third-person movement playground: WASD/arrows to
//!   run, Space to jump, with a smoothed chase camera and a fenced arena.
//! - `courtyard garden` – a zen garden: draw rake furrows and rivers, place
//!   rocks and plants (keys 1-4 pick the tool), C clears, F5/F9 save/load.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window, build the ECS world
//! 2. Insert shared resources, spawn the audio thread (garden), run the
//!    toy's setup
//! 3. Run the frame loop: update world time, tick the schedule, draw,
//!    refresh the window size
//! 4. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- garden
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::{RaylibHandle, RaylibThread};
use std::path::PathBuf;

use courtyard::events::audio::{AudioCmd, AudioMessage};
use courtyard::events::switchdebug::switch_debug_observer;
use courtyard::resources::audio::{setup_audio, shutdown_audio};
use courtyard::resources::gameconfig::GameConfig;
use courtyard::resources::input::InputState;
use courtyard::resources::windowsize::WindowSize;
use courtyard::resources::worldsignals::WorldSignals;
use courtyard::resources::worldtime::WorldTime;
use courtyard::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use courtyard::systems::avatarcontroller::avatar_controller;
use courtyard::systems::brush::garden_brush;
use courtyard::systems::camera::camera_follow;
use courtyard::systems::confine::keep_in_arena;
use courtyard::systems::gardenfile::{garden_load, garden_save};
use courtyard::systems::heading::heading_system;
use courtyard::systems::input::{quit_on_back, update_input_state};
use courtyard::systems::mouse::update_mouse_state;
use courtyard::systems::movement::movement;
use courtyard::systems::render;
use courtyard::systems::time::update_world_time;
use courtyard::systems::toolselect::{apply_tool_cursor, tool_select};
use courtyard::systems::waterflow::water_flow;
use courtyard::toys::{self, Toy};

/// Courtyard: a pair of tiny raylib toys
#[derive(Parser)]
#[command(version, about = "Courtyard: a flyer playground and a zen garden")]
struct Cli {
    /// Which toy to run.
    #[arg(value_enum, default_value_t = Toy::Garden)]
    toy: Toy,

    /// Path to an alternative config file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let toy = cli.toy;

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // missing file keeps defaults

    log::info!("starting {}", toy);

    // --------------- Raylib window ---------------
    let title = match toy {
        Toy::Flyer => "Courtyard - Flyer",
        Toy::Garden => "Courtyard - Zen Garden",
    };
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if !rl.is_window_ready() {
        log::error!("graphics unavailable: no window could be created on this machine");
        std::process::exit(1);
    }
    rl.set_target_fps(config.target_fps);
    // Escape quits through the input system instead
    rl.set_exit_key(None);
    if toy == Toy::Garden {
        rl.set_mouse_cursor(courtyard::resources::toolbox::Tool::Rake.cursor());
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    let audio_enabled = config.audio_enabled && toy == Toy::Garden;
    world.insert_resource(config);

    if audio_enabled {
        // Must go before the toy setup so load commands find the bridge
        setup_audio(&mut world);
    }

    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    match toy {
        Toy::Flyer => toys::flyer::setup(&mut world),
        Toy::Garden => toys::garden::setup(&mut world),
    }
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(quit_on_back.after(update_input_state));
    match toy {
        Toy::Flyer => {
            update.add_systems(avatar_controller.after(update_input_state));
            update.add_systems(movement.after(avatar_controller));
            update.add_systems(keep_in_arena.after(movement));
            update.add_systems(heading_system.after(avatar_controller));
            update.add_systems(camera_follow.after(keep_in_arena));
        }
        Toy::Garden => {
            update.add_systems(update_mouse_state);
            update.add_systems(tool_select.after(update_input_state));
            update.add_systems(apply_tool_cursor.after(tool_select));
            update.add_systems(
                garden_brush
                    .after(update_mouse_state)
                    .after(tool_select),
            );
            update.add_systems(water_flow.after(garden_brush));
            update.add_systems(garden_save.after(garden_brush));
            update.add_systems(garden_load.after(garden_save));
            update.add_systems(
                // audio systems must run together, in this order
                (
                    update_bevy_audio_cmds,
                    forward_audio_cmds,
                    poll_audio_messages,
                    update_bevy_audio_messages,
                )
                    .chain(),
            );
        }
    }
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world.non_send_resource::<RaylibHandle>().get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Window size may change due to resize
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }

        // Pull the handle out for the draw pass, reinsert after
        let mut rl = world
            .remove_non_send_resource::<RaylibHandle>()
            .expect("raylib handle");
        let rl_thread = world
            .remove_non_send_resource::<RaylibThread>()
            .expect("raylib thread");
        {
            let mut d = rl.begin_drawing(&rl_thread);
            render::draw_frame(&mut world, &mut d, toy);
        }
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(rl_thread);
    }

    shutdown_audio(&mut world);
}
