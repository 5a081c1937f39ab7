//! Snake entry point
//!
//! Owns all mutable state and runs the per-frame cycle: drain pending
//! input intents, advance the simulation clock, dispatch audio cues,
//! redraw, then park until the next 60 Hz deadline.

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

use pocket_arcade::audio::AudioManager;
use pocket_arcade::input::{self, SnakeIntent};
use pocket_arcade::platform::{self, FramePacer, TARGET_FPS};
use pocket_arcade::render::frame::Frame;
use pocket_arcade::render::scene;
use pocket_arcade::snake::consts::{LOGICAL_H, LOGICAL_W, WINDOW_SCALE};
use pocket_arcade::snake::{self, SnakeState};

fn main() -> Result<()> {
    env_logger::init();

    let seed = platform::clock_seed();
    log::info!("snake starting (seed {seed})");
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = SnakeState::new(&mut rng);
    let audio = AudioManager::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Snake — Atari Mode")
        .with_inner_size(LogicalSize::new(
            (LOGICAL_W * WINDOW_SCALE) as f64,
            (LOGICAL_H * WINDOW_SCALE) as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)?;
    let mut pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(LOGICAL_W, LOGICAL_H, surface)?
    };

    let start = Instant::now();
    let mut pacer = FramePacer::new(TARGET_FPS);
    let mut last_update = Instant::now();
    let mut pending: Vec<SnakeIntent> = Vec::new();
    let mut cues = Vec::new();

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.state == ElementState::Pressed && !key.repeat {
                    if let PhysicalKey::Code(code) = key.physical_key {
                        if let Some(intent) = input::snake_intent(code) {
                            pending.push(intent);
                        }
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log::error!("surface resize failed: {err}");
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let now_ms = start.elapsed().as_millis() as u64;
                let mut frame = Frame::new(pixels.frame_mut(), LOGICAL_W, LOGICAL_H);
                scene::draw_snake(&state, &mut frame, now_ms);
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
                let was_alive = state.alive;
                for intent in pending.drain(..) {
                    snake::apply(&mut state, intent, &mut rng);
                }
                if !was_alive && state.alive {
                    log::info!("snake restarted");
                }
                snake::tick(&mut state, now - last_update, &mut rng, &mut cues);
                last_update = now;
                for cue in cues.drain(..) {
                    audio.play(cue);
                }
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    Ok(())
}
