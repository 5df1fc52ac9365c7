//! One-shot read over an abstract GATT transport

use uuid::Uuid;

use crate::error::Error;
use crate::reading::SensorReading;
use crate::sensor::SensorKind;

/// Connect-by-address GATT transport. The only primitives consumed from the
/// platform stack: connect, read a characteristic by UUID, disconnect.
pub trait Transport {
    type Session: Session;

    /// Open an exclusive session with the peripheral at `address`.
    async fn connect(&self, address: &str) -> Result<Self::Session, Error>;
}

/// A live connection to one peripheral.
pub trait Session {
    /// Read the value of the characteristic with the given UUID.
    async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>, Error>;

    /// Release the connection. Consumes the session so it cannot be reused
    /// or released twice.
    async fn disconnect(self) -> Result<(), Error>;
}

/// Connect to `address`, read the characteristic for `kind` once, release
/// the session, and decode.
///
/// The session is released on every exit path: the read result is captured
/// before disconnecting, and decoding happens only after the link is down.
/// A read failure takes precedence over a release failure.
pub async fn read_sensor<T: Transport>(
    transport: &T,
    address: &str,
    kind: SensorKind,
) -> Result<SensorReading, Error> {
    let spec = kind.spec();

    let session = transport.connect(address).await?;
    tracing::info!(%address, "connected");

    let read = session.read_characteristic(spec.uuid).await;
    let released = session.disconnect().await;
    tracing::debug!(%address, "session released");

    let raw = read?;
    released?;
    tracing::info!(characteristic = %spec.uuid, len = raw.len(), "characteristic read");

    SensorReading::decode(kind, raw)
}
