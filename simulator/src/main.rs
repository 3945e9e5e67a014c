//! Hourline watchface simulator for desktop.
//!
//! Runs the watchface in a host window using the embedded-graphics-simulator
//! crate. The event loop polls the OS clock once per frame and fires a minute
//! tick whenever the wall-clock minute rolls over.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;

use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use hourline_common::colors::BLACK;
use hourline_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use hourline_common::{Clock, Redrawable, TickObserver, Watchface};

use crate::clock::LocalClock;

/// Delay between event-loop iterations. A minute hand does not need a high
/// frame rate; 100ms keeps key handling responsive.
const FRAME_TIME: Duration = Duration::from_millis(100);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Hourline Watchface Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let tick_clock = LocalClock;
    let mut face = Watchface::new(LocalClock);
    if let Err(err) = face.attach(display.bounding_box()) {
        eprintln!("watchface failed to start: {err}");
        return;
    }

    let mut last_minute = tick_clock.now_local().map(|now| now.minute).ok();
    let mut force_redraw = false;

    loop {
        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        Keycode::Space => force_redraw = true,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Emulate the platform tick service by polling for minute rollover.
        if let Ok(now) = tick_clock.now_local()
            && last_minute != Some(now.minute)
        {
            face.on_minute_tick();
            last_minute = Some(now.minute);
        }

        if face.is_dirty() || force_redraw {
            face.redraw(&mut display).ok();
            force_redraw = false;
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
