//! The node: event routing, measurement tasks, send pipeline
//!
//! `Node` is the owned application context: it holds the scheduler,
//! the sample streams, the header latch and the activity machine,
//! plus the board it drives. Driver callbacks arrive as
//! [`NodeEvent`]s and scheduler passes run as [`Node::service`]
//! calls, all on one logical thread — nothing here needs locking.

use heapless::Vec;

use boreal_protocol::console;
use boreal_protocol::{Header, Report};

use crate::config::NodeConfig;
use crate::scheduler::{Scheduler, Tick};
use crate::state::{ActivationEffect, Activity};
use crate::stream::SampleStream;
use crate::traits::{
    Board, Console, Display, LedMode, RadioEvent, RadioTransport, StatusIndicator, SystemClock,
    TemperatureSource, VoltageSource,
};

/// Samples held per measured quantity in this deployment
pub const SAMPLE_WINDOW: usize = 1;

/// Number of distinct tasks, bounds the scheduler table
pub const TASK_COUNT: usize = 4;

/// The node's task set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Task {
    /// Kick off a battery voltage measurement
    MeasureBattery,
    /// Kick off a temperature conversion; periodic while active
    MeasureTemperature,
    /// Assemble and transmit a report, retrying while the radio is busy
    SendReport,
    /// Idle timeout: drop back to sleep
    SleepTimeout,
}

/// Hardware events delivered by the driver layer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NodeEvent {
    /// Physical button click; latches the report header
    ButtonClick,
    /// Physical button hold; latches the report header
    ButtonHold,
    /// Activation trigger (LCD button press): wake or refresh the
    /// active cycle
    Activation,
    /// Battery measurement finished; `None` means the reading failed
    BatteryUpdate(Option<f32>),
    /// Temperature conversion finished; `None` means the probe
    /// returned no valid reading
    TemperatureUpdate(Option<f32>),
    /// Radio modem status change
    Radio(RadioEvent),
}

/// The orchestration core of the sensor node
pub struct Node<B: Board> {
    board: B,
    config: NodeConfig,
    scheduler: Scheduler<Task, TASK_COUNT>,
    activity: Activity,
    /// Header for the next report; consumed by each transmission
    header: Header,
    voltage: SampleStream<SAMPLE_WINDOW>,
    temperature: SampleStream<SAMPLE_WINDOW>,
    /// Raw last probe reading, shown on the display
    last_temperature: Option<f32>,
    /// Radio fault latched until the next successful send
    warning: bool,
}

impl<B: Board> Node<B> {
    /// Construct the node and run its boot sequence
    ///
    /// The node boots asleep with a `Boot` header; the first battery
    /// measurement is planned shortly after power-on so the very
    /// first report can carry a voltage.
    pub fn new(mut board: B, config: NodeConfig, now: Tick) -> Self {
        board.display().power_off();
        board.status_led().pulse(2_000);

        let mut scheduler = Scheduler::new();
        scheduler.run_after(Task::MeasureBattery, now, config.boot_battery_delay_ms);

        Self {
            board,
            config,
            scheduler,
            activity: Activity::Sleeping,
            header: Header::Boot,
            voltage: SampleStream::new(),
            temperature: SampleStream::new(),
            last_temperature: None,
            warning: false,
        }
    }

    /// Run one scheduler pass at `now`
    ///
    /// Tasks that replan themselves during the pass (busy retries)
    /// run on a later call, never within this one.
    pub fn service(&mut self, now: Tick) {
        let mut due: Vec<Task, TASK_COUNT> = Vec::new();
        while let Some(task) = self.scheduler.pop_due(now) {
            let _ = due.push(task);
        }
        for task in due {
            self.run_task(now, task);
        }
    }

    /// Route one hardware event
    pub fn handle_event(&mut self, now: Tick, event: NodeEvent) {
        match event {
            NodeEvent::ButtonClick => self.header = Header::ButtonClick,
            NodeEvent::ButtonHold => self.header = Header::ButtonHold,
            NodeEvent::Activation => self.on_activation(now),
            NodeEvent::BatteryUpdate(Some(volts)) => self.voltage.feed(volts),
            NodeEvent::BatteryUpdate(None) => {}
            NodeEvent::TemperatureUpdate(reading) => self.on_temperature(reading),
            NodeEvent::Radio(event) => self.on_radio(now, event),
        }
    }

    /// `$SEND` console command: force an immediate transmission
    pub fn cmd_send(&mut self, now: Tick) {
        self.scheduler.run_now(Task::SendReport, now);
    }

    /// `$STATUS` console command: dump current averages
    pub fn cmd_status(&mut self) {
        let line = console::status_line("Voltage", self.voltage.average());
        self.board.console().emit(&line);
        let line = console::status_line("Temperature0", self.temperature.average());
        self.board.console().emit(&line);
    }

    /// Current activity mode
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Header the next report will carry
    pub fn header(&self) -> Header {
        self.header
    }

    /// True while a radio fault is latched
    pub fn has_warning(&self) -> bool {
        self.warning
    }

    /// Read access to the deadline table
    pub fn scheduler(&self) -> &Scheduler<Task, TASK_COUNT> {
        &self.scheduler
    }

    /// The board, for driver-layer plumbing
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    fn run_task(&mut self, now: Tick, task: Task) {
        match task {
            Task::MeasureBattery => {
                if !self.board.voltage().start_conversion() {
                    self.scheduler.run_now(Task::MeasureBattery, now);
                }
            }
            Task::MeasureTemperature => {
                // The sleep timeout can fall due on the same tick as a
                // measurement; the pass pops both before running either,
                // so the park cannot catch this instance. Asleep means
                // no measurement, no retry, no send.
                if !self.activity.is_active() {
                    return;
                }
                if !self.board.temperature().start_conversion() {
                    self.scheduler.run_now(Task::MeasureTemperature, now);
                    return;
                }
                self.scheduler.run_after(
                    Task::MeasureTemperature,
                    now,
                    self.config.measure_interval_ms,
                );
                // Report directly from here; the averages still hold
                // the previous reading, which is what goes on the air.
                self.try_send(now);
            }
            Task::SendReport => self.try_send(now),
            Task::SleepTimeout => {
                if self.activity.on_sleep_timeout() {
                    self.scheduler.park(Task::MeasureTemperature);
                    self.board.display().power_off();
                }
            }
        }
    }

    /// The transmission pipeline
    ///
    /// Averages are read at actual send time, not frozen at a failed
    /// attempt; a busy radio just pushes the task out by the retry
    /// interval.
    fn try_send(&mut self, now: Tick) {
        if !self.board.radio().is_ready() {
            self.scheduler
                .run_after(Task::SendReport, now, self.config.radio_retry_ms);
            return;
        }

        let report = Report {
            header: self.header,
            voltage: self.voltage.average(),
            temperature: self.temperature.average(),
        };
        let frame = report.encode();

        self.board.radio().send(&frame);

        let line = console::send_line(&frame);
        self.board.console().emit(&line);
        self.board.lcd_led().pulse(500);

        // Header is consumed; subsequent reports are plain updates
        // until the next button event overwrites it.
        self.header = Header::Update;
    }

    fn on_activation(&mut self, now: Tick) {
        self.board.lcd_led().pulse(500);
        self.scheduler.run_now(Task::MeasureBattery, now);

        match self.activity.on_activation() {
            ActivationEffect::StartMeasuring => {
                self.scheduler.run_now(Task::MeasureTemperature, now);
            }
            ActivationEffect::SendNow => self.try_send(now),
        }

        // Replaces any pending instance: exactly one sleep timer is
        // ever outstanding.
        self.scheduler
            .run_after(Task::SleepTimeout, now, self.config.sleep_timeout_ms);
    }

    fn on_temperature(&mut self, reading: Option<f32>) {
        self.last_temperature = reading;
        if !self.activity.is_active() {
            return;
        }
        if let Some(celsius) = reading {
            self.refresh_display();
            self.temperature.feed(celsius);
        }
    }

    fn on_radio(&mut self, now: Tick, event: RadioEvent) {
        match event {
            RadioEvent::Error => {
                self.warning = true;
                self.board.status_led().set(LedMode::BlinkFast);
            }
            RadioEvent::SendStart => {
                self.board.status_led().set(LedMode::Blink(5));
                // Re-measure under TX load to catch the voltage sag
                self.scheduler
                    .run_after(Task::MeasureBattery, now, self.config.tx_battery_delay_ms);
            }
            RadioEvent::SendDone | RadioEvent::Ready => {
                self.warning = false;
                self.board.status_led().set(LedMode::Off);
            }
            RadioEvent::JoinSuccess => self.board.console().emit(console::JOIN_OK),
            RadioEvent::JoinError => self.board.console().emit(console::JOIN_ERROR),
        }
    }

    fn refresh_display(&mut self) {
        let Some(reading) = self.last_temperature else {
            return;
        };
        // Readiness is checked before the clock is raised, so a
        // skipped render never leaves the PLL on.
        if !self.board.display().is_ready() {
            return;
        }
        self.board.clock().pll_enable();
        self.board.display().render(reading);
        self.board.display().power_on();
        self.board.clock().pll_disable();
    }
}
