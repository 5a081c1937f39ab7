//! Pong entry point
//!
//! Owns all mutable state and runs the per-frame cycle: sample the latest
//! pointer position, drain pending key intents, advance the simulation one
//! frame, redraw, then park until the next 60 Hz deadline.

use std::time::Instant;

use anyhow::Result;
use pixels::{Pixels, SurfaceTexture};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowBuilder;

use pocket_arcade::input::{self, PongIntent};
use pocket_arcade::platform::{self, FramePacer, TARGET_FPS};
use pocket_arcade::pong::consts::{LOGICAL_H, LOGICAL_W};
use pocket_arcade::pong::{self, FrameInput, PongState};
use pocket_arcade::render::frame::Frame;
use pocket_arcade::render::scene;

fn main() -> Result<()> {
    env_logger::init();

    let seed = platform::clock_seed();
    log::info!("pong starting (seed {seed})");
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = PongState::new(&mut rng);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Pong")
        .with_inner_size(LogicalSize::new(LOGICAL_W as f64, LOGICAL_H as f64))
        .with_resizable(false)
        .build(&event_loop)?;
    let mut pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(LOGICAL_W, LOGICAL_H, surface)?
    };

    let mut pacer = FramePacer::new(TARGET_FPS);
    let mut pending: Vec<PongIntent> = Vec::new();
    let mut pointer_y: Option<f32> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.state == ElementState::Pressed && !key.repeat {
                    if let PhysicalKey::Code(code) = key.physical_key {
                        if let Some(intent) = input::pong_intent(code) {
                            pending.push(intent);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Window physical coordinates to surface pixels
                let (_, y) = pixels
                    .window_pos_to_pixel((position.x as f32, position.y as f32))
                    .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                pointer_y = Some(y as f32);
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log::error!("surface resize failed: {err}");
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let mut frame = Frame::new(pixels.frame_mut(), LOGICAL_W, LOGICAL_H);
                scene::draw_pong(&state, &mut frame);
                if let Err(err) = pixels.render() {
                    log::error!("render failed: {err}");
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if pacer.frame_due(now) {
                for intent in pending.drain(..) {
                    match intent {
                        // The quit keys only mean it at the game-over prompt
                        PongIntent::Quit if state.game_over => elwt.exit(),
                        intent => pong::apply(&mut state, intent, &mut rng),
                    }
                }
                let input = FrameInput { pointer_y };
                pong::tick(&mut state, &input, &mut rng);
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    Ok(())
}
