//! Transport Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum Mikrocontroller
//! ohne konkrete Serial-Port-Implementierung.

use core::fmt;

/// Fehler-Typ für Transport-Operationen
#[derive(Debug)]
pub enum TransportError {
    /// Verbindung ist nicht (mehr) offen
    NotOpen,
    /// Schreiben auf die Verbindung ist fehlgeschlagen
    WriteFailed(std::io::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotOpen => write!(f, "serial connection is not open"),
            TransportError::WriteFailed(e) => write!(f, "serial write failed: {e}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::NotOpen => None,
            TransportError::WriteFailed(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::WriteFailed(e)
    }
}

/// Trait für die Byte-Verbindung zum Mikrocontroller
///
/// Fire-and-forget: es wird nichts zurückgelesen.
///
/// # Implementierungen
/// - **Production:** SerialSink (serialport)
/// - **Testing:** MockPayloadSink (in-memory Mock)
pub trait PayloadSink {
    /// Schreibt eine komplette Payload auf die Verbindung
    ///
    /// # Fehlerbehandlung
    /// Gibt `TransportError::NotOpen` zurück wenn die Verbindung geschlossen ist,
    /// `TransportError::WriteFailed` bei I/O-Fehlern
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;

    /// Flusht und schließt die Verbindung
    ///
    /// Danach schlägt jedes `send()` mit `TransportError::NotOpen` fehl.
    fn close(&mut self) -> Result<(), TransportError>;
}

/// Schreibt eine Payload genau einmal auf die Verbindung
///
/// Kein Retry, keine Bestätigung vom Gerät.
pub fn transmit<S: PayloadSink + ?Sized>(
    payload: &[u8],
    sink: &mut S,
) -> Result<(), TransportError> {
    sink.send(payload)
}
