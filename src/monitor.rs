//! Main-loop orchestration.
//!
//! [`Monitor::tick`] is called once per loop iteration with the current
//! time and, in order:
//!
//! 1. puts the screen to sleep if its display window has expired,
//! 2. serves a pending button wake request,
//! 3. reads the sensor when the sampling interval has elapsed.
//!
//! Everything runs synchronously inside the tick. Errors never leave the
//! monitor: they are logged and the loop carries on.

use embedded_hal::delay::DelayNs;

use crate::clock::Millis;
use crate::config::SAMPLE_INTERVAL_MS;
use crate::error::Error;
use crate::hal::{BatteryGauge, ClimateSensor, Panel};
use crate::history::{History, Sample};
use crate::power::{DisplayPower, ScreenState, WakeOutcome};
use crate::render::{self, wipe, Layout};
use crate::scheduler::SampleScheduler;
use crate::wake::WakeTrigger;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// The screen went to sleep this tick.
    pub slept: bool,
    /// A button wake request was served.
    pub woke: Option<WakeOutcome>,
    /// A sensor read was attempted.
    pub sample: Option<Result<Sample, Error>>,
    /// Layout of the last frame painted this tick.
    pub frame: Option<Layout>,
}

pub struct Monitor<'a, S, B, P, D> {
    sensor: S,
    battery: B,
    panel: P,
    delay: D,
    wake: &'a WakeTrigger,
    history: History,
    scheduler: SampleScheduler,
    power: DisplayPower,
}

impl<'a, S, B, P, D> Monitor<'a, S, B, P, D>
where
    S: ClimateSensor,
    B: BatteryGauge,
    P: Panel,
    D: DelayNs,
{
    /// Build the monitor. The screen starts ACTIVE with its display window
    /// opening at `now`.
    pub fn new(sensor: S, battery: B, panel: P, delay: D, wake: &'a WakeTrigger, now: Millis) -> Self {
        Self {
            sensor,
            battery,
            panel,
            delay,
            wake,
            history: History::new(),
            scheduler: SampleScheduler::new(),
            power: DisplayPower::new(now),
        }
    }

    /// Boot sequence: paint the (empty) first frame, then run the first
    /// tick, which takes the initial sample and repaints.
    pub fn boot(&mut self, now: Millis) -> TickReport {
        let first = self.paint();
        let mut report = self.tick(now);
        if report.frame.is_none() {
            report.frame = first;
        }
        report
    }

    pub fn tick(&mut self, now: Millis) -> TickReport {
        let mut report = TickReport::default();

        if self.power.tick(now) {
            self.sleep_panel();
            report.slept = true;
        }

        if self.wake.take() {
            let outcome = self.power.wake(now);
            if outcome == WakeOutcome::PoweredOn {
                if let Err(e) = self.panel.power_on() {
                    error!("Display: power on failed: {}", e);
                }
            }
            report.woke = Some(outcome);
            report.frame = self.paint();
        }

        if self.scheduler.poll(now) {
            let result = self.sample();
            if result.is_ok() && self.power.is_active() {
                report.frame = self.paint();
            }
            report.sample = Some(result);
        }

        report
    }

    fn sample(&mut self) -> Result<Sample, Error> {
        let temperature = self.sensor.read_temperature();
        let humidity = self.sensor.read_humidity();
        match self.history.record(temperature, humidity) {
            Ok(sample) => {
                info!("Sample: T={} C, H={} %", sample.temperature, sample.humidity);
                Ok(sample)
            }
            Err(e) => {
                warn!("Sensor read failed, retry in {} ms", SAMPLE_INTERVAL_MS);
                Err(e)
            }
        }
    }

    fn paint(&mut self) -> Option<Layout> {
        let volts = self.battery.read_volts();
        match render::render_frame(&mut self.panel, &self.history, volts) {
            Ok(layout) => Some(layout),
            Err(e) => {
                error!("Display: frame failed: {}", e);
                None
            }
        }
    }

    fn sleep_panel(&mut self) {
        if let Err(e) = wipe::wipe(&mut self.panel, &mut self.delay) {
            warn!("Display: wipe failed: {}", e);
        }
        if let Err(e) = self.panel.power_off() {
            error!("Display: power off failed: {}", e);
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn screen_state(&self) -> ScreenState {
        self.power.state()
    }

    pub fn off_at(&self) -> Option<Millis> {
        self.power.off_at()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }
}
