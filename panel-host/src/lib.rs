// Library-Root: Wiederverwendbare Logik und Module des Host-Panels

// Module
pub mod cli;
pub mod config;
pub mod console;
pub mod hal;

// Re-exports von panel-core
pub use panel_core::{
    Channel, ChannelLevels, PanelController, PanelError, PayloadSink, PersistedConfig,
    SettingsError, SettingsStore, TransportError,
};

/// Controller mit echtem Serial Port
pub type SerialPanel = PanelController<hal::SerialSink>;
