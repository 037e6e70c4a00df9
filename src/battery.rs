//! Supply voltage measured on the nRF52840's own VDD rail.
//!
//! The cell powers the chip directly, so VDD is the battery voltage.
//! SAADC internal VDD channel, gain 1/6, 0.6 V reference, 12-bit:
//! `V = raw × 3.6 / 4096`.

use embassy_nrf::saadc::Saadc;
use envmon::config::{VDD_ADC_COUNTS, VDD_ADC_FULL_SCALE_V};
use envmon::hal::BatteryGauge;

pub struct VddGauge<'d> {
    adc: Saadc<'d, 1>,
}

impl<'d> VddGauge<'d> {
    pub fn new(adc: Saadc<'d, 1>) -> Self {
        Self { adc }
    }
}

impl BatteryGauge for VddGauge<'_> {
    fn read_volts(&mut self) -> f32 {
        let mut buf = [0i16; 1];
        self.adc.blocking_sample(&mut buf);
        // Single-ended readings can dip slightly below zero.
        buf[0].max(0) as f32 * VDD_ADC_FULL_SCALE_V / VDD_ADC_COUNTS
    }
}
