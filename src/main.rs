use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::Renderer;
use game::characters::Character;
use game::DemoConfig;

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Sprite Walker...");

    let config = DemoConfig::default();

    // The sheet must load before anything is built on top of it
    if !AssetLoader::is_supported(&config.sheet_path) {
        warn!(
            "{} does not look like a PNG or JPEG, trying to decode it anyway",
            config.sheet_path
        );
    }
    let loader = AssetLoader::new(&config.asset_dir);
    let sheet = loader
        .load_sprite_sheet(&config.sheet_path)
        .with_context(|| format!("Failed to load sprite sheet {}", config.sheet_path))?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.window_title)
            .with_inner_size(LogicalSize::new(
                config.window_size.x,
                config.window_size.y,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let texture = renderer.upload_sheet(&sheet)?;

    let mut character = Character::from_layout(config.spawn, &config.layout, &sheet, config.stats)
        .context("Sprite sheet does not match the expected layout")?
        .with_texture(texture);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new(config.frame_limit);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::Focused(false) => {
                    // Keys released while unfocused never reach us
                    input.reset();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                    if input.quit_requested() {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let dt = game_loop.tick();

                    character.set_direction(input.direction());
                    character.update(dt);

                    let sprites = renderer.sprite_renderer_mut();
                    sprites.clear();
                    sprites.add_sprite(character.sprite().clone());

                    if let Err(e) = renderer.render() {
                        match e.downcast_ref::<wgpu::SurfaceError>() {
                            Some(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                renderer.reconfigure();
                            }
                            Some(wgpu::SurfaceError::OutOfMemory) => {
                                error!("GPU out of memory, shutting down...");
                                elwt.exit();
                            }
                            _ => error!("Frame skipped: {}", e),
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // The frame limit is advisory: wake up when the next frame is due
                if game_loop.frame_due(Instant::now()) {
                    elwt.set_control_flow(ControlFlow::Poll);
                    window.request_redraw();
                } else if let Some(next_frame) = game_loop.next_frame_at() {
                    elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
