//! Decoded sensor measurements

use std::fmt;

use crate::error::Error;
use crate::sensor::{SensorKind, PAYLOAD_LEN};

/// The result of one characteristic read: raw payload plus the decoded
/// integer. Immutable; built once, printed once.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    kind: SensorKind,
    raw: Vec<u8>,
    integer: i32,
}

impl SensorReading {
    /// Decode a little-endian payload according to the sensor's spec.
    ///
    /// The payload must be exactly [`PAYLOAD_LEN`] bytes. Temperature is
    /// signed; the other kinds are unsigned.
    pub fn decode(kind: SensorKind, raw: Vec<u8>) -> Result<Self, Error> {
        let spec = kind.spec();

        if raw.len() != PAYLOAD_LEN {
            return Err(Error::UnexpectedLength {
                uuid: spec.uuid,
                expected: PAYLOAD_LEN,
                got: raw.len(),
            });
        }

        let bytes: [u8; PAYLOAD_LEN] =
            raw.as_slice().try_into().map_err(|_| Error::Decode {
                expected: PAYLOAD_LEN,
                got: raw.len(),
            })?;

        let integer = if spec.signed {
            i16::from_le_bytes(bytes) as i32
        } else {
            u16::from_le_bytes(bytes) as i32
        };

        Ok(Self { kind, raw, integer })
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn integer(&self) -> i32 {
        self.integer
    }

    /// Scaled display value: decoded integer over the per-kind divisor.
    pub fn value(&self) -> f64 {
        self.integer as f64 / self.kind.spec().divisor as f64
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.kind.spec();
        write!(f, "{}: {} {}", spec.label, self.value(), spec.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_positive() {
        let reading = SensorReading::decode(SensorKind::Temperature, vec![0x54, 0x08]).unwrap();
        assert_eq!(reading.integer(), 2132);
        assert_eq!(reading.value(), 21.32);
        assert_eq!(reading.to_string(), "Temperature: 21.32 Celsius");
    }

    #[test]
    fn temperature_signed_minimum() {
        let reading = SensorReading::decode(SensorKind::Temperature, vec![0x00, 0x80]).unwrap();
        assert_eq!(reading.integer(), -32768);
        assert_eq!(reading.value(), -327.68);
        assert_eq!(reading.to_string(), "Temperature: -327.68 Celsius");
    }

    #[test]
    fn humidity_is_unsigned() {
        let reading = SensorReading::decode(SensorKind::Humidity, vec![0x2C, 0x11]).unwrap();
        assert_eq!(reading.integer(), 4396);
        assert_eq!(reading.value(), 43.96);
        assert_eq!(reading.to_string(), "Humidity: 43.96 %");
    }

    #[test]
    fn irradiance_unsigned_maximum() {
        // 0xFFFF must not wrap negative for an unsigned kind
        let reading = SensorReading::decode(SensorKind::Irradiance, vec![0xFF, 0xFF]).unwrap();
        assert_eq!(reading.integer(), 65535);
        assert_eq!(reading.value(), 6553.5);
        assert_eq!(reading.to_string(), "Irradiance: 6553.5 W/m^2");
    }

    #[test]
    fn pressure_scaling() {
        // 101325 Pa does not fit 16 bits; a plausible on-wire value is
        // 0x2710 = 10000 -> 1 kPa
        let reading = SensorReading::decode(SensorKind::Pressure, vec![0x10, 0x27]).unwrap();
        assert_eq!(reading.integer(), 10000);
        assert_eq!(reading.value(), 1.0);
        assert_eq!(reading.to_string(), "Barometric Pressure: 1 kPa");
    }

    #[test]
    fn decode_matches_native_division() {
        for kind in [
            SensorKind::Humidity,
            SensorKind::Irradiance,
            SensorKind::Pressure,
            SensorKind::Temperature,
        ] {
            let spec = kind.spec();
            for bytes in [[0x00, 0x00], [0x01, 0x00], [0x34, 0x12], [0xFF, 0x7F]] {
                let reading = SensorReading::decode(kind, bytes.to_vec()).unwrap();
                let expected = if spec.signed {
                    i16::from_le_bytes(bytes) as f64
                } else {
                    u16::from_le_bytes(bytes) as f64
                };
                assert_eq!(reading.value(), expected / spec.divisor as f64);
            }
        }
    }

    #[test]
    fn rejects_short_payload() {
        let err = SensorReading::decode(SensorKind::Humidity, vec![0x2C]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedLength {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_long_payload() {
        let err = SensorReading::decode(SensorKind::Pressure, vec![0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedLength {
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_payload() {
        let err = SensorReading::decode(SensorKind::Temperature, vec![]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedLength { got: 0, .. }));
    }

    #[test]
    fn raw_bytes_are_kept() {
        let reading = SensorReading::decode(SensorKind::Temperature, vec![0x54, 0x08]).unwrap();
        assert_eq!(reading.raw(), &[0x54, 0x08]);
        assert_eq!(reading.kind(), SensorKind::Temperature);
    }
}
