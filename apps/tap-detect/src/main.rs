#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]
//! Single/double tap detection demo for the LSM6DSRX IMU.
//!
//! This app targets an ESP32-S3 board and demonstrates:
//! - Boot check and software reset, with retry on `Error::NotReady`.
//! - Programming the embedded tap engine and routing it to INT2.
//! - Polling the interrupt sources and printing one line per tap on UART0.
//!
//! The sensor sits on I2C by default; build with `--features spi` to use SPI.

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, TxError, Uart};
use ph_lsm6dsrx::{
    AccelOutputDataRate,
    AccelRange,
    Error as ImuError,
    InterruptPin,
    MonitorConfig,
    SerialTx,
    TapAxes,
    TapDetectConfig,
    TapMode,
    TapMonitor,
    TapThresholds,
    TapTiming,
};
use {esp_backtrace as _, esp_println as _};

esp_bootloader_esp_idf::esp_app_desc!();

defmt::timestamp!("{=u64:ms}", embassy_time::Instant::now().as_millis());

#[used]
static APP_DESC_REF: &esp_bootloader_esp_idf::EspAppDesc = &ESP_APP_DESC;

#[cfg(not(feature = "spi"))]
mod bus {
    use esp_hal::i2c::master::{Config as I2cConfig, I2c};
    use esp_hal::peripherals::{GPIO11, GPIO12, I2C0};
    use esp_hal::time::Rate;
    use ph_lsm6dsrx::{Lsm6dsrxAddress, Lsm6dsrxI2c};

    pub type ImuDriver = Lsm6dsrxI2c<I2c<'static, esp_hal::Async>>;

    pub const NAME: &str = "i2c";

    /// I2C at 400 kHz, SA0 tied low.
    pub fn imu(
        i2c0: I2C0<'static>,
        sda: GPIO11<'static>,
        scl: GPIO12<'static>,
    ) -> ImuDriver {
        let config = I2cConfig::default().with_frequency(Rate::from_khz(400));
        let i2c = I2c::new(i2c0, config)
            .unwrap()
            .with_sda(sda)
            .with_scl(scl)
            .into_async();
        let i2c_config = ph_lsm6dsrx::I2cConfig::new(Lsm6dsrxAddress::Primary.addr());
        Lsm6dsrxI2c::with_i2c_config(i2c, i2c_config)
    }
}

#[cfg(feature = "spi")]
mod bus {
    use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
    use esp_hal::gpio::{Level, Output, OutputConfig};
    use esp_hal::peripherals::{GPIO10, GPIO11, GPIO12, GPIO13, SPI2};
    use esp_hal::spi::Mode;
    use esp_hal::spi::master::{Config as SpiConfig, Spi};
    use esp_hal::time::Rate;
    use ph_lsm6dsrx::Lsm6dsrxSpi;

    type SpiBus = Spi<'static, esp_hal::Async>;
    pub type ImuDriver = Lsm6dsrxSpi<ExclusiveDevice<SpiBus, Output<'static>, NoDelay>>;

    pub const NAME: &str = "spi";

    /// SPI mode 3 at 8 MHz with a dedicated chip select.
    pub fn imu(
        spi2: SPI2<'static>,
        sck: GPIO12<'static>,
        mosi: GPIO11<'static>,
        miso: GPIO13<'static>,
        cs: GPIO10<'static>,
    ) -> ImuDriver {
        let config = SpiConfig::default()
            .with_frequency(Rate::from_mhz(8))
            .with_mode(Mode::_3);
        let spi = Spi::new(spi2, config)
            .unwrap()
            .with_sck(sck)
            .with_mosi(mosi)
            .with_miso(miso)
            .into_async();
        let cs = Output::new(cs, Level::High, OutputConfig::default());
        let device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
        Lsm6dsrxSpi::new_spi(device)
    }
}

use bus::ImuDriver;

/// Console baud rate.
const UART_BAUDRATE: u32 = 115_200;
/// Delay between init retries when the IMU reports `NotReady`.
const INIT_RETRY_DELAY_MS: u64 = 100;
/// Tap engine settings.
const TAP_CONFIG: TapDetectConfig = TapDetectConfig::DEFAULT
    .with_odr(AccelOutputDataRate::Hz416)
    .with_range(AccelRange::G2)
    .with_axes(TapAxes::ALL)
    .with_thresholds(TapThresholds::uniform(0x08))
    .with_timing(TapTiming::new(7, 3, 3))
    .with_mode(TapMode::SingleAndDouble)
    .with_pin(InterruptPin::Int2);
/// Status poll period.
const MONITOR_CONFIG: MonitorConfig = MonitorConfig::DEFAULT.with_poll_period_ms(1);

/// UART0 transmitter used as the report sink.
struct Console(Uart<'static, esp_hal::Async>);

impl SerialTx for Console {
    type Error = TxError;

    async fn transmit(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut pending = bytes;
        while !pending.is_empty() {
            let written = self.0.write_async(pending).await?;
            pending = &pending[written..];
        }
        self.0.flush_async().await
    }
}

async fn configure_imu(imu: &mut ImuDriver, delay: &mut Delay) -> Result<(), ImuError> {
    loop {
        match imu.init(delay, &TAP_CONFIG).await {
            Err(ImuError::NotReady) => {
                warn!("IMU reset not complete, retrying...");
                Timer::after(Duration::from_millis(INIT_RETRY_DELAY_MS)).await;
            }
            result => break result,
        }
    }
}

fn log_tap_config() {
    info!(
        "tap: odr={} range={} threshold_x={}mg mode={} pin={}",
        TAP_CONFIG.odr,
        TAP_CONFIG.range,
        TAP_CONFIG.threshold_x_mg(),
        TAP_CONFIG.mode,
        TAP_CONFIG.pin
    );
    if let Some(windows) = TAP_CONFIG.timing.windows(TAP_CONFIG.odr) {
        info!(
            "tap windows: dur={}us shock={}us quiet={}us",
            windows.duration_us, windows.shock_us, windows.quiet_us
        );
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    // Bring up clocks and timers early so delays are reliable.
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Report lines go out on UART0.
    let uart_config = UartConfig::default().with_baudrate(UART_BAUDRATE);
    let uart = Uart::new(peripherals.UART0, uart_config)
        .unwrap()
        .with_tx(peripherals.GPIO43)
        .with_rx(peripherals.GPIO44)
        .into_async();

    #[cfg(not(feature = "spi"))]
    let mut imu = bus::imu(peripherals.I2C0, peripherals.GPIO11, peripherals.GPIO12);
    #[cfg(feature = "spi")]
    let mut imu = bus::imu(
        peripherals.SPI2,
        peripherals.GPIO12,
        peripherals.GPIO11,
        peripherals.GPIO13,
        peripherals.GPIO10,
    );

    let mut delay = Delay;
    // A wrong WHO_AM_I or a bus fault is fatal; park the task.
    if let Err(err) = configure_imu(&mut imu, &mut delay).await {
        match err {
            ImuError::WrongDevice => error!("LSM6DSRX not found on {}", bus::NAME),
            err => error!("IMU init failed: {}", err),
        }
        loop {
            Timer::after(Duration::from_secs(1)).await;
        }
    }
    info!("IMU init ok ({})", bus::NAME);
    log_tap_config();

    let mut monitor = TapMonitor::with_config(Console(uart), MONITOR_CONFIG);
    info!("tap monitor running, {} baud", UART_BAUDRATE);

    let stats = monitor.run(&mut imu, &mut delay, || true).await;
    warn!("tap monitor stopped: {}", stats);
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
