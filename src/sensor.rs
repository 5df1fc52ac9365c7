//! Environmental Sensing characteristic table

use clap::ValueEnum;
use uuid::Uuid;

/// Every known payload is a 2-byte little-endian integer.
pub const PAYLOAD_LEN: usize = 2;

// Standard 16-bit Environmental Sensing characteristics, expanded to the
// 128-bit Bluetooth base UUID.
const HUMIDITY_UUID: Uuid = Uuid::from_u128(0x00002a6f_0000_1000_8000_00805f9b34fb);
const IRRADIANCE_UUID: Uuid = Uuid::from_u128(0x00002a77_0000_1000_8000_00805f9b34fb);
const PRESSURE_UUID: Uuid = Uuid::from_u128(0x00002a6d_0000_1000_8000_00805f9b34fb);
const TEMPERATURE_UUID: Uuid = Uuid::from_u128(0x00002a6e_0000_1000_8000_00805f9b34fb);

/// The sensor characteristics this tool knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum SensorKind {
    /// Relative humidity in %
    Humidity,

    /// Irradiance in W/m^2
    Irradiance,

    /// Barometric pressure in kPa
    Pressure,

    /// Temperature in Celsius
    Temperature,
}

/// Fixed decode parameters for one sensor kind. UUID, signedness and divisor
/// never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSpec {
    pub uuid: Uuid,
    pub signed: bool,
    pub divisor: u32,
    pub label: &'static str,
    pub unit: &'static str,
}

const HUMIDITY: SensorSpec = SensorSpec {
    uuid: HUMIDITY_UUID,
    signed: false,
    divisor: 100,
    label: "Humidity",
    unit: "%",
};

const IRRADIANCE: SensorSpec = SensorSpec {
    uuid: IRRADIANCE_UUID,
    signed: false,
    divisor: 10,
    label: "Irradiance",
    unit: "W/m^2",
};

const PRESSURE: SensorSpec = SensorSpec {
    uuid: PRESSURE_UUID,
    signed: false,
    divisor: 10000,
    label: "Barometric Pressure",
    unit: "kPa",
};

const TEMPERATURE: SensorSpec = SensorSpec {
    uuid: TEMPERATURE_UUID,
    signed: true,
    divisor: 100,
    label: "Temperature",
    unit: "Celsius",
};

impl SensorKind {
    pub fn spec(&self) -> &'static SensorSpec {
        match self {
            SensorKind::Humidity => &HUMIDITY,
            SensorKind::Irradiance => &IRRADIANCE,
            SensorKind::Pressure => &PRESSURE,
            SensorKind::Temperature => &TEMPERATURE,
        }
    }
}
