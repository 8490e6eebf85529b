//! Tap event reporting.
//!
//! [`TapMonitor`] polls [`AllSources`](crate::AllSources), turns the tap
//! flags into text lines and pushes them to a [`SerialTx`] sink:
//!
//! ```text
//! D-Tap: x-axis positive sign\r\n
//! S-Tap: z-axis negative sign\r\n
//! ```
//!
//! Double and single taps are checked independently. A snapshot with both
//! flags set yields two lines, double tap first.

use core::fmt::{self, Write as _};

use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::driver::Lsm6dsrx;
use crate::error::Error;
use crate::interface::Interface;
use crate::status::{TapAxis, TapSign, TapSource};

/// Capacity of the reusable line buffer.
pub const LINE_CAPACITY: usize = 32;

// "D-Tap: x-axis negative sign\r\n"
const LONGEST_LINE: usize = 29;
const _: () = assert!(LINE_CAPACITY >= LONGEST_LINE);

/// Kind of tap reported in a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapKind {
    /// Single tap (`S-Tap`).
    Single,
    /// Double tap (`D-Tap`).
    Double,
}

impl TapKind {
    /// Line prefix for this kind.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "S-Tap",
            Self::Double => "D-Tap",
        }
    }
}

/// One reportable tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapEvent {
    /// Single or double.
    pub kind: TapKind,
    /// Attributed axis (X over Y over Z).
    pub axis: TapAxis,
    /// Sign of the acceleration.
    pub sign: TapSign,
}

impl TapEvent {
    /// Builds an event of `kind` from the axis and sign flags in `source`.
    pub const fn from_source(kind: TapKind, source: TapSource) -> Self {
        Self {
            kind,
            axis: source.axis(),
            sign: source.sign(),
        }
    }
}

impl fmt::Display for TapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}-axis {} sign",
            self.kind.label(),
            self.axis.as_str(),
            self.sign.as_str()
        )
    }
}

/// Events carried by a tap source, double tap first.
pub fn tap_events(source: TapSource) -> impl Iterator<Item = TapEvent> {
    let double = source
        .double_tap
        .then(|| TapEvent::from_source(TapKind::Double, source));
    let single = source
        .single_tap
        .then(|| TapEvent::from_source(TapKind::Single, source));
    [double, single].into_iter().flatten()
}

/// Byte sink for report lines (UART, USB CDC, semihosting, ...).
#[allow(async_fn_in_trait)]
pub trait SerialTx {
    /// Transport error.
    type Error;

    /// Sends all of `bytes`.
    async fn transmit(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SerialTx + ?Sized> SerialTx for &mut T {
    type Error = T::Error;

    async fn transmit(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::transmit(self, bytes).await
    }
}

/// Poll loop settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Delay between status polls in milliseconds. 0 polls back to back.
    pub poll_period_ms: u32,
}

impl MonitorConfig {
    /// Default settings: 1 ms between polls.
    pub const DEFAULT: Self = Self { poll_period_ms: 1 };

    /// Creates the default settings.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the poll period.
    #[must_use]
    pub const fn with_poll_period_ms(mut self, poll_period_ms: u32) -> Self {
        self.poll_period_ms = poll_period_ms;
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Counters accumulated by a [`TapMonitor`]. They wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorStats {
    /// Status snapshots requested.
    pub polls: u32,
    /// Lines transmitted successfully.
    pub lines: u32,
    /// Status reads that failed on the bus.
    pub bus_errors: u32,
    /// Lines the sink rejected.
    pub tx_errors: u32,
}

/// Error from a single poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError<E> {
    /// Reading the status registers failed.
    Bus(Error),
    /// The serial sink rejected a line.
    Serial(E),
}

/// Formats tap events and forwards them to a serial sink.
pub struct TapMonitor<S> {
    serial: S,
    line: String<LINE_CAPACITY>,
    config: MonitorConfig,
    stats: MonitorStats,
}

impl<S> TapMonitor<S>
where
    S: SerialTx,
{
    /// Creates a monitor with default settings.
    pub fn new(serial: S) -> Self {
        Self::with_config(serial, MonitorConfig::DEFAULT)
    }

    /// Creates a monitor with custom settings.
    pub fn with_config(serial: S, config: MonitorConfig) -> Self {
        Self {
            serial,
            line: String::new(),
            config,
            stats: MonitorStats::default(),
        }
    }

    /// Returns the counters accumulated so far.
    pub const fn stats(&self) -> MonitorStats {
        self.stats
    }

    /// Returns the last formatted line.
    pub fn last_line(&self) -> &str {
        &self.line
    }

    /// Releases the serial sink.
    pub fn release(self) -> S {
        self.serial
    }

    /// Transmits one line per tap flag in `source` and returns how many
    /// were sent.
    ///
    /// A rejected line does not stop the next one; the first sink error is
    /// returned after both flags were handled.
    pub async fn report(&mut self, source: TapSource) -> Result<usize, S::Error> {
        let mut sent = 0;
        let mut first_err = None;
        for event in tap_events(source) {
            match self.send(event).await {
                Ok(()) => sent += 1,
                Err(err) => {
                    self.stats.tx_errors = self.stats.tx_errors.wrapping_add(1);
                    first_err.get_or_insert(err);
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(sent),
        }
    }

    /// Reads one status snapshot from `imu` and reports its taps.
    pub async fn poll<I: Interface>(
        &mut self,
        imu: &mut Lsm6dsrx<I>,
    ) -> Result<usize, MonitorError<S::Error>> {
        self.stats.polls = self.stats.polls.wrapping_add(1);
        let sources = match imu.all_sources().await {
            Ok(sources) => sources,
            Err(err) => {
                self.stats.bus_errors = self.stats.bus_errors.wrapping_add(1);
                return Err(MonitorError::Bus(err));
            }
        };
        self.report(sources.tap).await.map_err(MonitorError::Serial)
    }

    /// Polls until `keep_running` returns false, waiting the configured
    /// period between polls.
    ///
    /// Bus and sink errors are counted in [`MonitorStats`] and the loop
    /// carries on with the next poll.
    pub async fn run<I, D, F>(
        &mut self,
        imu: &mut Lsm6dsrx<I>,
        delay: &mut D,
        mut keep_running: F,
    ) -> MonitorStats
    where
        I: Interface,
        D: DelayNs,
        F: FnMut() -> bool,
    {
        while keep_running() {
            // Already counted in `stats`.
            let _ = self.poll(imu).await;
            if self.config.poll_period_ms > 0 {
                delay.delay_ms(self.config.poll_period_ms).await;
            }
        }
        self.stats
    }

    async fn send(&mut self, event: TapEvent) -> Result<(), S::Error> {
        self.line.clear();
        // Cannot overflow: LINE_CAPACITY covers the longest line.
        let _ = write!(self.line, "{event}\r\n");
        self.serial.transmit(self.line.as_bytes()).await?;
        self.stats.lines = self.stats.lines.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::register::{Register, tap_src};
    use crate::testing::{MockDelay, MockInterface, MockSerial};
    use futures::executor::block_on;

    fn source(bits: u8) -> TapSource {
        TapSource::from_reg(bits)
    }

    fn lines(bits: u8) -> Vec<std::string::String> {
        let mut monitor = TapMonitor::new(MockSerial::default());
        block_on(monitor.report(source(bits))).expect("report");
        monitor.release().lines
    }

    #[test]
    fn double_tap_on_x_positive() {
        assert_eq!(
            lines(tap_src::DOUBLE_TAP | tap_src::X_TAP),
            ["D-Tap: x-axis positive sign\r\n"]
        );
    }

    #[test]
    fn single_axis_flag_and_sign_are_reported() {
        let cases = [
            (tap_src::Y_TAP, "D-Tap: y-axis positive sign\r\n"),
            (tap_src::Z_TAP | tap_src::TAP_SIGN, "D-Tap: z-axis negative sign\r\n"),
            (tap_src::X_TAP | tap_src::TAP_SIGN, "D-Tap: x-axis negative sign\r\n"),
        ];
        for (bits, expected) in cases {
            assert_eq!(lines(tap_src::DOUBLE_TAP | bits), [expected]);
        }
    }

    #[test]
    fn x_wins_over_y() {
        assert_eq!(
            lines(tap_src::SINGLE_TAP | tap_src::X_TAP | tap_src::Y_TAP | tap_src::Z_TAP),
            ["S-Tap: x-axis positive sign\r\n"]
        );
        assert_eq!(
            lines(tap_src::SINGLE_TAP | tap_src::Y_TAP | tap_src::Z_TAP),
            ["S-Tap: y-axis positive sign\r\n"]
        );
    }

    #[test]
    fn no_axis_flag_falls_back_to_z() {
        assert_eq!(
            lines(tap_src::SINGLE_TAP | tap_src::TAP_SIGN),
            ["S-Tap: z-axis negative sign\r\n"]
        );
    }

    #[test]
    fn both_flags_emit_double_then_single() {
        assert_eq!(
            lines(tap_src::DOUBLE_TAP | tap_src::SINGLE_TAP | tap_src::Y_TAP | tap_src::TAP_SIGN),
            [
                "D-Tap: y-axis negative sign\r\n",
                "S-Tap: y-axis negative sign\r\n"
            ]
        );
    }

    #[test]
    fn no_tap_flags_emit_nothing() {
        assert!(lines(0).is_empty());
        assert!(lines(tap_src::TAP_IA | tap_src::X_TAP | tap_src::TAP_SIGN).is_empty());
    }

    #[test]
    fn line_buffer_is_reused() {
        let mut monitor = TapMonitor::new(MockSerial::default());
        block_on(monitor.report(source(tap_src::DOUBLE_TAP | tap_src::Z_TAP | tap_src::TAP_SIGN)))
            .expect("first");
        block_on(monitor.report(source(tap_src::SINGLE_TAP | tap_src::X_TAP))).expect("second");
        assert_eq!(monitor.last_line(), "S-Tap: x-axis positive sign\r\n");
    }

    #[test]
    fn failed_line_does_not_block_the_next() {
        let mut monitor = TapMonitor::new(MockSerial::failing(1));
        let result = block_on(monitor.report(source(
            tap_src::DOUBLE_TAP | tap_src::SINGLE_TAP | tap_src::X_TAP,
        )));
        assert_eq!(result, Err(()));
        let stats = monitor.stats();
        assert_eq!(stats.tx_errors, 1);
        assert_eq!(stats.lines, 1);
        assert_eq!(monitor.release().lines, ["S-Tap: x-axis positive sign\r\n"]);
    }

    #[test]
    fn poll_reads_tap_source_from_device() {
        let interface = MockInterface::default().with_reg(
            Register::TapSrc.addr(),
            tap_src::TAP_IA | tap_src::DOUBLE_TAP | tap_src::X_TAP,
        );
        let mut imu = Lsm6dsrx::from_interface(interface);
        let mut monitor = TapMonitor::new(MockSerial::default());

        assert_eq!(block_on(monitor.poll(&mut imu)), Ok(1));
        assert_eq!(monitor.release().lines, ["D-Tap: x-axis positive sign\r\n"]);
    }

    #[test]
    fn run_stops_on_signal_and_counts_sink_errors() {
        let interface = MockInterface::default().with_script(
            Register::TapSrc.addr(),
            &[tap_src::SINGLE_TAP | tap_src::Y_TAP, 0, tap_src::DOUBLE_TAP],
        );
        let mut imu = Lsm6dsrx::from_interface(interface);
        let mut monitor = TapMonitor::new(MockSerial::failing(1));
        let mut delay = MockDelay::default();
        let mut remaining = 3;

        let stats = block_on(monitor.run(&mut imu, &mut delay, || {
            let keep = remaining > 0;
            remaining -= 1;
            keep
        }));

        assert_eq!(stats.polls, 3);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.tx_errors, 1);
        assert_eq!(stats.bus_errors, 0);
        assert_eq!(delay.calls, 3);
        assert_eq!(delay.total_ns, 3_000_000);
        assert_eq!(monitor.release().lines, ["D-Tap: z-axis positive sign\r\n"]);
    }

    #[test]
    fn counters_wrap_instead_of_overflowing() {
        let interface = MockInterface::default().with_failing_read(Register::D6dSrc.addr());
        let mut imu = Lsm6dsrx::from_interface(interface);
        let config = MonitorConfig::new().with_poll_period_ms(0);
        let mut monitor = TapMonitor::with_config(MockSerial::failing(1), config);
        monitor.stats = MonitorStats {
            polls: u32::MAX,
            lines: u32::MAX,
            bus_errors: u32::MAX,
            tx_errors: u32::MAX,
        };
        let mut delay = MockDelay::default();
        let mut polls = 0;

        let stats = block_on(monitor.run(&mut imu, &mut delay, || {
            polls += 1;
            polls <= 1
        }));

        // The single poll fails on the bus, so only `polls` and `bus_errors` move.
        assert_eq!(stats.polls, 0);
        assert_eq!(stats.bus_errors, 0);
        assert_eq!(stats.lines, u32::MAX);
        assert_eq!(stats.tx_errors, u32::MAX);

        let mut monitor = TapMonitor::new(MockSerial::failing(1));
        monitor.stats.lines = u32::MAX;
        monitor.stats.tx_errors = u32::MAX;
        let source = source(tap_src::DOUBLE_TAP | tap_src::SINGLE_TAP | tap_src::Z_TAP);
        assert_eq!(block_on(monitor.report(source)), Err(()));
        assert_eq!(monitor.stats().lines, 0);
        assert_eq!(monitor.stats().tx_errors, 0);
    }

    #[test]
    fn run_survives_bus_errors() {
        let interface = MockInterface::default().with_failing_read(Register::TapSrc.addr());
        let mut imu = Lsm6dsrx::from_interface(interface);
        let config = MonitorConfig::new().with_poll_period_ms(0);
        let mut monitor = TapMonitor::with_config(MockSerial::default(), config);
        let mut delay = MockDelay::default();
        let mut polls = 0;

        let stats = block_on(monitor.run(&mut imu, &mut delay, || {
            polls += 1;
            polls <= 5
        }));

        assert_eq!(stats.polls, 5);
        assert_eq!(stats.bus_errors, 5);
        assert_eq!(stats.lines, 0);
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn stop_signal_checked_before_first_poll() {
        let mut imu = Lsm6dsrx::from_interface(MockInterface::default());
        let mut monitor = TapMonitor::new(MockSerial::default());
        let mut delay = MockDelay::default();

        let stats = block_on(monitor.run(&mut imu, &mut delay, || false));

        assert_eq!(stats, MonitorStats::default());
        assert!(imu.release_interface().reads().is_empty());
    }

    #[test]
    fn display_matches_line_without_terminator() {
        let event = TapEvent {
            kind: TapKind::Double,
            axis: TapAxis::X,
            sign: TapSign::Positive,
        };
        let mut out: String<LINE_CAPACITY> = String::new();
        write!(out, "{event}").expect("fits");
        assert_eq!(out.as_str(), "D-Tap: x-axis positive sign");
    }
}
