//! Panel Controller
//!
//! Hält den kompletten Anwendungs-Zustand (aktuelle Kanalwerte + gespeicherte
//! Defaults) und verbindet ihn mit Transport und Settings-Store.
//! Jede Benutzer-Aktion löst genau einen Transmit aus.

use core::fmt;

use crate::logic::encode;
use crate::settings::{SettingsError, SettingsStore};
use crate::traits::{PayloadSink, TransportError, transmit};
use crate::types::{Channel, ChannelLevels, Payload, PersistedConfig};

/// Fehler-Typ für Controller-Operationen
#[derive(Debug)]
pub enum PanelError {
    Transport(TransportError),
    Settings(SettingsError),
    Encode(serde_json::Error),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Transport(e) => write!(f, "{e}"),
            PanelError::Settings(e) => write!(f, "{e}"),
            PanelError::Encode(e) => write!(f, "payload could not be encoded: {e}"),
        }
    }
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PanelError::Transport(e) => Some(e),
            PanelError::Settings(e) => Some(e),
            PanelError::Encode(e) => Some(e),
        }
    }
}

impl From<TransportError> for PanelError {
    fn from(e: TransportError) -> Self {
        PanelError::Transport(e)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        PanelError::Encode(e)
    }
}

impl From<SettingsError> for PanelError {
    fn from(e: SettingsError) -> Self {
        PanelError::Settings(e)
    }
}

/// Anwendungs-Zustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Aktuelle Werte der Regler
    pub levels: ChannelLevels,
    /// Zuletzt gespeicherte Default-Einstellung
    pub defaults: PersistedConfig,
}

impl PanelState {
    /// Startzustand: Regler stehen auf den gespeicherten Defaults
    pub fn from_defaults(defaults: PersistedConfig) -> Self {
        Self {
            levels: defaults.levels(),
            defaults,
        }
    }
}

/// Controller für alle Benutzer-Aktionen
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: PayloadSink` ermöglicht:
/// - Serial Port (SerialSink) im Production-Code
/// - Mock Implementation (MockPayloadSink) in Tests
pub struct PanelController<S: PayloadSink> {
    state: PanelState,
    sink: S,
    store: SettingsStore,
}

impl<S: PayloadSink> PanelController<S> {
    /// Erstellt den Controller mit bereits geladenen Defaults
    ///
    /// Sendet noch nichts, die Regler stehen danach auf den Defaults.
    pub fn new(sink: S, store: SettingsStore, defaults: PersistedConfig) -> Self {
        Self {
            state: PanelState::from_defaults(defaults),
            sink,
            store,
        }
    }

    /// Lädt die Defaults aus dem Store und erstellt den Controller
    ///
    /// Eine ungültige Settings-Datei ist ein harter Fehler.
    pub fn load(sink: S, store: SettingsStore) -> Result<Self, PanelError> {
        let defaults = store.load()?;
        Ok(Self::new(sink, store, defaults))
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn levels(&self) -> ChannelLevels {
        self.state.levels
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Vorschau-Farbe der aktuellen Regler
    pub fn mixed_color(&self) -> String {
        self.state.levels.mixed_color()
    }

    /// Regler eines Kanals geändert
    pub fn set_channel(&mut self, channel: Channel, value: u8) -> Result<(), PanelError> {
        self.state.levels.set(channel, value);
        self.send_current()
    }

    /// Alle Kanäle auf einen Wert (Buttons "Zero" und "Maximum")
    pub fn set_all(&mut self, value: u8) -> Result<(), PanelError> {
        self.state.levels = ChannelLevels::splat(value);
        self.send_current()
    }

    /// Regler auf die gespeicherten Defaults setzen und senden
    ///
    /// Fehlende Kanäle in den Defaults werden zu 0.
    pub fn restore_default(&mut self) -> Result<(), PanelError> {
        self.state.levels = self.state.defaults.levels();
        self.send_current()
    }

    /// Aktuelle Regler als Default speichern und mit `setAsDefault=true` senden
    ///
    /// Erst wird persistiert; schlägt das fehl, wird nichts gesendet.
    pub fn save_as_default(&mut self) -> Result<(), PanelError> {
        let payload = Payload::new(self.state.levels, true);
        let config = PersistedConfig::from(payload);

        self.store.save(&config)?;
        self.state.defaults = config;

        self.send(true)
    }

    /// Aktuelle Regler erneut senden (`setAsDefault=false`)
    pub fn send_current(&mut self) -> Result<(), PanelError> {
        self.send(false)
    }

    fn send(&mut self, set_as_default: bool) -> Result<(), PanelError> {
        #[cfg(feature = "log")]
        log::info!(
            "Sending values: {} setAsDefault={}",
            self.state.levels,
            set_as_default
        );

        let bytes = encode(self.state.levels, set_as_default)?;
        transmit(&bytes, &mut self.sink)?;
        Ok(())
    }

    /// Verbindung flushen und schließen
    ///
    /// Danach schlägt jede weitere Aktion mit `TransportError::NotOpen` fehl.
    pub fn shutdown(&mut self) -> Result<(), PanelError> {
        self.sink.close()?;

        #[cfg(feature = "log")]
        log::info!("Connection closed");

        Ok(())
    }
}
