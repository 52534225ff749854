//! High-level MAX17043 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::input::InputPinAdapter;
use crate::interface::{FuelGaugeInterface, PowerSourceInput};
use crate::measurement::{percent_from_raw, voltage_from_raw, Readings};
use crate::params::PowerSource;
use crate::registers::{ConfigRegister, REG_CONFIG, REG_SOC, REG_VCELL};
use crate::sink::{BinarySink, NumericSink, SinkSummary};
use crate::status::{Fault, Status, Warning, Warnings};
use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;

/// Lifecycle of one driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// `setup()` has not run yet.
    Uninitialized,
    /// `setup()` is probing the device.
    Validating,
    /// The device was recognised.
    Ready {
        /// The sleep bit was written since setup. Only a power cycle wakes
        /// the gauge again, which requires a new `setup()`.
        asleep: bool,
    },
    /// Setup failed. Nothing talks to the device until the next `setup()`.
    Failed,
}

/// Synchronous driver for a MAX17043 fuel gauge and its power-source input.
///
/// Sinks are borrowed for `'a`; a missing sink means the matching quantity is
/// neither read nor published.
pub struct Max17043<'a, IFACE, PIN> {
    interface: IFACE,
    input: PIN,
    config: Config,
    state: DriverState,
    warnings: Warnings,
    fault: Option<Fault>,
    voltage_sink: Option<&'a dyn NumericSink>,
    battery_percent_sink: Option<&'a dyn NumericSink>,
    power_source_sink: Option<&'a dyn BinarySink>,
}

impl<'a, IFACE, PIN> Max17043<'a, IFACE, PIN> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided transport and input.
    pub fn new(interface: IFACE, input: PIN, config: Config) -> Self {
        Self {
            interface,
            input,
            config,
            state: DriverState::Uninitialized,
            warnings: Warnings::default(),
            fault: None,
            voltage_sink: None,
            battery_percent_sink: None,
            power_source_sink: None,
        }
    }

    /// Consumes the driver and returns the owned transport, input and configuration.
    pub fn release(self) -> (IFACE, PIN, Config) {
        (self.interface, self.input, self.config)
    }

    /// Provides mutable access to the underlying transport.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    // ==================================================================
    // == Sinks ==========================================================
    // ==================================================================
    /// Attaches the battery voltage sink (volts).
    pub fn set_voltage_sink(&mut self, sink: &'a dyn NumericSink) {
        self.voltage_sink = Some(sink);
    }

    /// Attaches the battery level sink (percent).
    pub fn set_battery_percent_sink(&mut self, sink: &'a dyn NumericSink) {
        self.battery_percent_sink = Some(sink);
    }

    /// Attaches the power source sink; `true` is published while on battery.
    pub fn set_power_source_sink(&mut self, sink: &'a dyn BinarySink) {
        self.power_source_sink = Some(sink);
    }

    /// Reports which sinks are attached.
    pub fn sinks(&self) -> SinkSummary {
        SinkSummary {
            voltage: self.voltage_sink.is_some(),
            battery_percent: self.battery_percent_sink.is_some(),
            power_source: self.power_source_sink.is_some(),
        }
    }

    // ==================================================================
    // == Introspection ==================================================
    // ==================================================================
    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 7-bit bus address of the gauge.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether setup latched a failure.
    pub fn is_failed(&self) -> bool {
        self.state == DriverState::Failed
    }

    /// Whether the sleep bit was written since setup.
    pub fn is_asleep(&self) -> bool {
        matches!(self.state, DriverState::Ready { asleep: true })
    }

    /// Health as seen by host diagnostics.
    pub fn status(&self) -> Status {
        if let Some(fault) = self.fault {
            return Status::Error(fault);
        }

        match self.warnings.first() {
            Some(warning) => Status::Warning(warning),
            None => Status::Healthy,
        }
    }

    /// Logs the address, failure state and attached sinks.
    pub fn dump_config(&self) {
        info!("MAX17043:");
        info!("  Address: {=u8:#x}", self.config.address);
        if self.is_failed() {
            error!("Communication with MAX17043 failed");
        }
        let sinks = self.sinks();
        info!("  Battery Voltage: {=bool}", sinks.voltage);
        info!("  Battery Level: {=bool}", sinks.battery_percent);
        info!("  Power Source: {=bool}", sinks.power_source);
    }

    fn ensure_ready<CommE>(&self) -> Result<(), CommE> {
        match self.state {
            DriverState::Ready { .. } => Ok(()),
            _ => Err(Error::NotReady),
        }
    }

    fn fail(&mut self, fault: Fault) -> Fault {
        self.state = DriverState::Failed;
        self.fault = Some(fault);
        fault
    }
}

impl<'a, I2C, P> Max17043<'a, I2cInterface<I2C>, InputPinAdapter<P>>
where
    I2C: I2c,
    P: InputPin,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports and HAL input pins.
    pub fn new_i2c(i2c: I2C, pin: P, config: Config) -> Result<Self, I2C::Error> {
        config.validate().map_err(|_| Error::InvalidConfig)?;
        Ok(Self::new(
            I2cInterface::new(i2c, config.address),
            InputPinAdapter::new(pin),
            config,
        ))
    }

    /// Releases the driver, returning the bus, the pin and the configuration.
    pub fn release_i2c(self) -> (I2C, P, Config) {
        let (iface, input, config) = self.release();
        (iface.release(), input.release(), config)
    }
}

impl<'a, IFACE, PIN, CommE> Max17043<'a, IFACE, PIN>
where
    IFACE: FuelGaugeInterface<Error = CommE>,
    PIN: PowerSourceInput,
{
    // ==================================================================
    // == Lifecycle ======================================================
    // ==================================================================
    /// Validates the device identity and clears any sleep bit left over from
    /// a previous session.
    ///
    /// A failure is latched: `update()` and `sleep_mode()` stay silent until
    /// `setup()` succeeds again.
    pub fn setup(&mut self) -> core::result::Result<(), Fault> {
        info!("Setting up MAX17043 at {=u8:#x}...", self.config.address);

        self.state = DriverState::Validating;
        self.fault = None;
        self.warnings = Warnings::default();

        match self.check_identity() {
            Ok(_) => {}
            Err(Error::Unrecognised { config }) => {
                error!("Device does not appear to be a MAX17043 (CONFIG {=u16:#x})", config);
                return Err(self.fail(Fault::Unrecognised));
            }
            Err(_) => {
                warn!("Unable to read the CONFIG register");
                self.warnings.set(Warning::Communication);
                self.state = DriverState::Failed;
                return Err(Fault::Communication);
            }
        }

        if self.write_config(ConfigRegister::power_up_default()).is_err() {
            error!("Unable to clear the sleep bit");
            return Err(self.fail(Fault::SleepResetFailed));
        }

        self.input.configure_as_input();
        self.state = DriverState::Ready { asleep: false };
        Ok(())
    }

    /// Reads every quantity that has a sink and publishes it.
    ///
    /// Failed reads raise a warning and leave the previously published value
    /// alone; they never fail the driver. Does nothing unless setup succeeded.
    pub fn update(&mut self) -> Readings {
        let mut readings = Readings::default();
        if self.ensure_ready::<CommE>().is_err() {
            return readings;
        }

        if let Some(sink) = self.voltage_sink {
            match self.read_voltage() {
                Ok(voltage) => {
                    sink.publish_numeric(voltage);
                    self.warnings.clear(Warning::VcellRead);
                    readings.voltage = Some(voltage);
                }
                Err(_) => {
                    warn!("{=str}", Warning::VcellRead.message());
                    self.warnings.set(Warning::VcellRead);
                }
            }
        }

        if let Some(sink) = self.battery_percent_sink {
            match self.read_state_of_charge() {
                Ok(percent) => {
                    sink.publish_numeric(percent);
                    self.warnings.clear(Warning::SocRead);
                    readings.battery_percent = Some(percent);
                }
                Err(_) => {
                    warn!("{=str}", Warning::SocRead.message());
                    self.warnings.set(Warning::SocRead);
                }
            }
        }

        if let Some(sink) = self.power_source_sink {
            let source = self.power_source();
            sink.publish_boolean(source.is_battery());
            readings.power_source = Some(source);
        }

        debug!("update: {}", readings);
        readings
    }

    /// Puts the gauge into low-power sleep.
    ///
    /// Writes the power-up default with the sleep bit set, without reading the
    /// register first. Does nothing if setup failed.
    pub fn sleep_mode(&mut self) {
        if self.is_failed() {
            return;
        }

        match self.write_config(ConfigRegister::sleep_command()) {
            Ok(()) => {
                self.warnings.clear(Warning::SleepWrite);
                if let DriverState::Ready { .. } = self.state {
                    self.state = DriverState::Ready { asleep: true };
                }
            }
            Err(_) => {
                warn!("Unable to write the sleep bit to config register");
                self.warnings.set(Warning::SleepWrite);
            }
        }
    }

    // ==================================================================
    // == Register Access ================================================
    // ==================================================================
    /// Reads `CONFIG` the way the gauge expects on first contact: a register
    /// select write followed by a separate two byte read.
    pub fn read_config(&mut self) -> Result<ConfigRegister, CommE> {
        self.interface.write(&[REG_CONFIG]).map_err(Error::from)?;

        let mut raw = [0u8; 2];
        self.interface.read(&mut raw).map_err(Error::from)?;

        let value = u16::from_be_bytes(raw);
        debug!("CONFIG register reads {=u16:#x}", value);
        Ok(ConfigRegister::from(value))
    }

    /// Writes `CONFIG` verbatim.
    pub fn write_config(&mut self, value: ConfigRegister) -> Result<(), CommE> {
        self.interface
            .write_u16(REG_CONFIG, u16::from(value))
            .map_err(Error::from)
    }

    /// Verifies that the masked `CONFIG` register holds the power-up default.
    pub fn check_identity(&mut self) -> Result<ConfigRegister, CommE> {
        let config = self.read_config()?;
        if !config.is_power_up_default() {
            return Err(Error::Unrecognised {
                config: u16::from(config.masked()),
            });
        }

        Ok(config)
    }

    /// Reads the cell voltage in volts.
    pub fn read_voltage(&mut self) -> Result<f32, CommE> {
        self.ensure_ready::<CommE>()?;
        let raw = self.interface.read_u16(REG_VCELL).map_err(Error::from)?;
        Ok(voltage_from_raw(raw))
    }

    /// Reads the state of charge in percent.
    pub fn read_state_of_charge(&mut self) -> Result<f32, CommE> {
        self.ensure_ready::<CommE>()?;
        let raw = self.interface.read_u16(REG_SOC).map_err(Error::from)?;
        Ok(percent_from_raw(raw))
    }

    /// Samples the power-source input.
    pub fn power_source(&mut self) -> PowerSource {
        let level = self.input.is_high();
        self.config.polarity.power_source(level)
    }
}
