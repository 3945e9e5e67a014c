//! Hourline watchface firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Drives the analog watchface on the Pimoroni PIM715 Display Pack 2.8".
//! Without a battery-backed RTC the board cannot know the real time of day,
//! so the dial starts at 12:00 on boot and advances with uptime.

#![no_std]
#![no_main]

mod clock;
mod display;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use embedded_graphics::prelude::*;
use hourline_common::{Clock, Redrawable, TickObserver, Watchface};
use {defmt_rtt as _, panic_probe as _};

use crate::clock::UptimeClock;
use crate::display::{display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"hourline-pico"),
    embassy_rp::binary_info::rp_program_description!(c"Hourline analog watchface on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Hourline watchface starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize RGB LED (active-low: Low = ON)
    // PIM715: Red=26, Green=27, Blue=28
    let mut led_r = Output::new(p.PIN_26, Level::High); // Off
    let mut led_g = Output::new(p.PIN_27, Level::High); // Off
    let mut led_b = Output::new(p.PIN_28, Level::High); // Off

    // Flash red to indicate startup
    led_r.set_low(); // Red ON
    Timer::after_millis(200).await;
    led_r.set_high(); // Red OFF

    // Initialize display pins
    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut _backlight = Output::new(p.PIN_20, Level::High); // Turn on backlight

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    // Initialize display (no reset pin on PIM715)
    let mut display = match init_display(spi, cs, dc) {
        Ok(display) => display,
        Err(err) => defmt::panic!("display init failed: {}", err),
    };

    info!("Display initialized!");

    // Flash green to indicate display init success
    led_g.set_low(); // Green ON
    Timer::after_millis(200).await;
    led_g.set_high(); // Green OFF

    // Copies of the clock share one boot instant, so the tick poll below and
    // the watchface read the same wall time.
    let clock = UptimeClock::new();
    let mut face = Watchface::new(clock);
    if let Err(err) = face.attach(display.bounding_box()) {
        defmt::panic!("watchface failed to start: {}", err);
    }

    let mut last_minute = clock.now_local().map(|now| now.minute).ok();

    info!("Starting main loop...");

    loop {
        // Poll for minute rollover; the dial only moves once a minute.
        if let Ok(now) = clock.now_local()
            && last_minute != Some(now.minute)
        {
            face.on_minute_tick();
            last_minute = Some(now.minute);
            if !face.is_dirty() {
                warn!("minute tick skipped, keeping previous face");
            }
        }

        if face.is_dirty() && face.redraw(&mut display).is_err() {
            warn!("redraw failed, retrying next cycle");
        }

        // Toggle blue LED every cycle to show loop is running
        led_b.toggle();
        Timer::after_millis(1000).await;
    }
}
