//! envmon firmware for the nRF52840.
//!
//! Wires the monitor core to the hardware:
//!
//! - SSD1306 OLED on TWIM0
//! - SHT3x temperature / humidity sensor on TWIM1
//! - supply voltage through the SAADC internal VDD channel
//! - wake button on a GPIOTE edge task
//!
//! The main task is a plain polling loop: one `Monitor::tick` every
//! `POLL_INTERVAL_MS`. The radio is never enabled.

#![no_std]
#![no_main]

mod battery;
mod sensor;
mod ui;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim};
use embassy_time::{Delay, Instant, Timer};
use envmon::clock::Millis;
use envmon::hal::PairedReadings;
use envmon::{config, Monitor, WakeTrigger};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
    SAADC => saadc::InterruptHandler;
});

/// Shared between the button task (producer) and the main loop (consumer).
static WAKE: WakeTrigger = WakeTrigger::new();

/// Wrapping millisecond clock for the monitor core.
pub fn now_ms() -> Millis {
    Instant::now().as_millis() as Millis
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.dcdc.reg1 = true;
    let p = embassy_nrf::init(nrf_config);

    info!("envmon v{}", env!("CARGO_PKG_VERSION"));

    // Display (fatal if missing)
    let mut display_cfg = twim::Config::default();
    display_cfg.frequency = twim::Frequency::K400;
    let display_bus = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, display_cfg);
    let panel = match ui::display::init(display_bus) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    // Sensor
    let sensor_bus = twim::Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, twim::Config::default());
    let sensor = PairedReadings::new(sensor::Sht3x::new(sensor_bus, Delay));

    // Supply voltage
    let vdd = saadc::ChannelConfig::single_ended(saadc::VddInput);
    let mut adc = saadc::Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [vdd]);
    adc.calibrate().await;
    let battery = battery::VddGauge::new(adc);

    spawner.must_spawn(ui::buttons::wake_button_task(p.P0_11.degrade(), &WAKE));

    let mut monitor = Monitor::new(sensor, battery, panel, Delay, &WAKE, now_ms());
    monitor.boot(now_ms());
    info!("Boot complete, sampling every {} ms", config::SAMPLE_INTERVAL_MS);

    loop {
        monitor.tick(now_ms());
        Timer::after_millis(config::POLL_INTERVAL_MS).await;
    }
}

/// Park the CPU forever.
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
