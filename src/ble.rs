//! BlueZ-backed GATT transport
//!
//! Connects to a peripheral by address and reads one characteristic. No
//! scanning, no writes, no subscriptions; service discovery happens inside
//! BlueZ as part of connecting.

use std::time::Duration;

use bluer::{Adapter, Address};
use uuid::Uuid;

use crate::error::Error;
use crate::reader::{Session, Transport};

/// How often to ask BlueZ whether GATT services are resolved yet.
const RESOLVE_POLL: Duration = Duration::from_millis(100);

pub struct BluezTransport {
    adapter: Adapter,
}

impl BluezTransport {
    /// Connect to the BlueZ daemon and select an adapter; the default
    /// adapter when no name is given.
    pub async fn new(adapter_name: Option<&str>) -> Result<Self, Error> {
        let session = bluer::Session::new().await.map_err(|e| Error::Adapter {
            reason: format!("failed to connect to BlueZ: {}", e),
        })?;

        let adapter = match adapter_name {
            Some(name) => session.adapter(name).map_err(|e| Error::Adapter {
                reason: format!("failed to get adapter '{}': {}", name, e),
            })?,
            None => session.default_adapter().await.map_err(|e| Error::Adapter {
                reason: format!("failed to get default adapter: {}", e),
            })?,
        };

        tracing::debug!(adapter = %adapter.name(), "using adapter");
        Ok(Self { adapter })
    }
}

fn parse_address(addr: &str) -> Result<Address, Error> {
    addr.parse().map_err(|_| Error::Connection {
        address: addr.to_string(),
        reason: "invalid Bluetooth address (expected 6 colon-separated hex octets)".to_string(),
    })
}

impl Transport for BluezTransport {
    type Session = BluezGattSession;

    async fn connect(&self, address: &str) -> Result<BluezGattSession, Error> {
        let addr = parse_address(address)?;

        let device = self.adapter.device(addr).map_err(|e| Error::Connection {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        device.connect().await.map_err(|e| Error::Connection {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        Ok(BluezGattSession { device })
    }
}

pub struct BluezGattSession {
    device: bluer::Device,
}

impl BluezGattSession {
    /// Wait until BlueZ has resolved the peripheral's GATT database. The
    /// transport's own policy bounds this: BlueZ drops the link on failure,
    /// which surfaces as an error from the property poll.
    async fn wait_for_services(&self, uuid: Uuid) -> Result<(), Error> {
        loop {
            let resolved = self
                .device
                .is_services_resolved()
                .await
                .map_err(|e| Error::Read {
                    uuid,
                    reason: format!("service resolution failed: {}", e),
                })?;
            if resolved {
                return Ok(());
            }
            tokio::time::sleep(RESOLVE_POLL).await;
        }
    }
}

impl Session for BluezGattSession {
    async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>, Error> {
        self.wait_for_services(uuid).await?;

        let services = self.device.services().await.map_err(|e| Error::Read {
            uuid,
            reason: format!("failed to enumerate services: {}", e),
        })?;

        for service in services {
            let characteristics = service.characteristics().await.map_err(|e| Error::Read {
                uuid,
                reason: format!("failed to enumerate characteristics: {}", e),
            })?;

            for characteristic in characteristics {
                let char_uuid = characteristic.uuid().await.map_err(|e| Error::Read {
                    uuid,
                    reason: e.to_string(),
                })?;

                if char_uuid == uuid {
                    return characteristic.read().await.map_err(|e| Error::Read {
                        uuid,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(Error::Read {
            uuid,
            reason: "characteristic not found on device".to_string(),
        })
    }

    async fn disconnect(self) -> Result<(), Error> {
        let address = self.device.address();
        self.device.disconnect().await.map_err(|e| Error::Connection {
            address: address.to_string(),
            reason: format!("disconnect failed: {}", e),
        })
    }
}
