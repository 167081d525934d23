// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt den Serial-Port-Zugriff hinter dem PayloadSink-Trait,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod serial_sink;

pub use serial_sink::{PayloadSink, SerialSink, TransportError};

#[cfg(test)]
pub use serial_sink::MockPayloadSink;
