use std::rc::Rc;

use anyhow::{Context, Result};
use glam::{IVec2, Vec2};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::renderer::{Camera, LogCanvas};
use game::characters::{Character, CharacterManager, CharacterResources, Entity};
use game::level::stage_collision_map;

mod core;
mod engine;
mod game;

/// Native resolution of the play field
const VIEW_WIDTH: f32 = 256.0;
const VIEW_HEIGHT: f32 = 224.0;
/// Screen pixels per world pixel at a scale factor of 1
const VIEW_SCALE: f64 = 3.0;

/// Starting tiles (`x` column, `y` row) for each local player
const SPAWN_TILES: [IVec2; 2] = [IVec2::new(1, 1), IVec2::new(13, 11)];

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Bomber Arena...");

    let collision_map = Rc::new(stage_collision_map().context("Failed to load stage")?);
    let resources = CharacterResources::bomber().context("Invalid bomber animations")?;
    info!(
        "Stage loaded: {}x{} tiles",
        collision_map.columns(),
        collision_map.rows()
    );

    let mut game_loop = GameLoop::new();
    let mut input = InputManager::new(SPAWN_TILES.len());
    let mut characters = CharacterManager::new();
    for (player_id, tile) in SPAWN_TILES.into_iter().enumerate() {
        let character = Character::new(
            player_id,
            tile,
            &game_loop.clock(),
            resources.clone(),
            Rc::clone(&collision_map),
        )
        .with_context(|| format!("Failed to spawn player {}", player_id))?;
        characters.add(character);
    }

    let mut camera = Camera::new(Vec2::ZERO, VIEW_WIDTH, VIEW_HEIGHT);
    // Headless stand-in: a real backend implements `Canvas` by blitting
    // `FrameRect` regions of the bomber texture as textured quads, and
    // replaces this value without touching the game code.
    let mut canvas = LogCanvas::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Bomber Arena")
        .with_inner_size(winit::dpi::LogicalSize::new(
            f64::from(VIEW_WIDTH) * VIEW_SCALE,
            f64::from(VIEW_HEIGHT) * VIEW_SCALE,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                let pixel = window.scale_factor() * VIEW_SCALE;
                camera.resize(
                    (f64::from(physical_size.width) / pixel) as f32,
                    (f64::from(physical_size.height) / pixel) as f32,
                );
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.global_just_pressed(Action::Menu) {
                    game_loop.toggle_pause();
                }
                if input.global_just_pressed(Action::ToggleDebug) {
                    for character in characters.all_mut() {
                        character.debug_overlay_mut().toggle();
                    }
                }

                for _ in 0..game_loop.begin_frame() {
                    let time = game_loop.next_tick();
                    characters.update(&time, &input);
                }
                input.update();

                if let Some(player) = characters.get_by_player(0) {
                    camera.follow(player.position(), collision_map.pixel_size());
                }
                characters.draw(&mut canvas, &camera);

                if game_loop.frame_count() % 600 == 0 {
                    info!(
                        "FPS: {:.1}, ticks: {}, draw calls: {}{}",
                        game_loop.fps(),
                        game_loop.tick_count(),
                        canvas.draw_calls(),
                        if game_loop.is_paused() { " (paused)" } else { "" }
                    );
                    for player_id in 0..SPAWN_TILES.len() {
                        if let Some(character) = characters.get_by_player(player_id) {
                            debug!(
                                "Player {} {:?} facing {:?} at {:?} velocity {:?}",
                                player_id,
                                character.state(),
                                character.direction(),
                                character.position(),
                                character.velocity()
                            );
                        }
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
