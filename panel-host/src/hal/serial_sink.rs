// Serial Sink - PayloadSink über einen echten Serial Port
//
// Öffnet die UART-Verbindung zum Mikrocontroller einmal beim Start und hält
// sie bis zum Shutdown offen.

use std::io::Write;

use log::{debug, info};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::config::SerialConfig;

pub use panel_core::{PayloadSink, TransportError};

// ============================================================================
// Real Serial Port Implementation
// ============================================================================

/// Serial Port Writer
///
/// Fire-and-forget: es wird nie vom Port gelesen.
/// Nach `close()` ist `port` leer und jedes `send()` liefert `NotOpen`.
pub struct SerialSink {
    port: Option<Box<dyn SerialPort>>,
    name: String,
}

impl SerialSink {
    /// Öffnet den Serial Port
    ///
    /// Feste Parameter: 8 Datenbits, Parität Even, 1 Stopbit, keine Flow Control.
    pub fn open(config: &SerialConfig) -> Result<Self, serialport::Error> {
        info!(
            "Opening serial port {} @ {} baud",
            config.port_name, config.baud_rate
        );

        let port = serialport::new(config.port_name.as_str(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::Even)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.write_timeout)
            .open()?;

        Ok(Self::from_port(port))
    }

    /// Übernimmt einen bereits geöffneten Port
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        let name = port.name().unwrap_or_else(|| "<unnamed>".to_string());
        Self {
            port: Some(port),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }
}

impl PayloadSink for SerialSink {
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        let port = self.port.as_mut().ok_or(TransportError::NotOpen)?;
        port.write_all(payload)?;
        port.flush()?;
        debug!("Wrote {} bytes to {}", payload.len(), self.name);
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        // Port wird beim Drop geschlossen, vorher noch ausstehende Bytes senden
        if let Some(mut port) = self.port.take() {
            port.flush()?;
            info!("Serial port {} closed", self.name);
        }
        Ok(())
    }
}

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

#[cfg(test)]
#[derive(Default)]
pub struct MockPayloadSink {
    /// Alle geschriebenen Payloads (für Assertions in Tests)
    pub writes: Vec<Vec<u8>>,
    /// Simuliere Fehler beim nächsten send()
    pub fail_next_write: bool,
    /// close() wurde aufgerufen
    pub closed: bool,
}

#[cfg(test)]
impl MockPayloadSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl PayloadSink for MockPayloadSink {
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::NotOpen);
        }
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(TransportError::WriteFailed(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "mock write timeout",
            )));
        }

        self.writes.push(payload.to_vec());
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.closed = true;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
