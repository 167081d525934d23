//! Settings Store
//!
//! Lädt und speichert die Default-Einstellung als JSON-Datei.

use core::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::types::PersistedConfig;

/// Fehler-Typ für Settings-Operationen
#[derive(Debug)]
pub enum SettingsError {
    /// Datei konnte nicht gelesen oder geschrieben werden
    Io { path: PathBuf, source: std::io::Error },
    /// Datei existiert, enthält aber kein gültiges Settings-Objekt
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Einstellung konnte nicht als JSON kodiert werden
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "settings file {}: {source}", path.display())
            }
            SettingsError::Malformed { path, source } => {
                write!(f, "settings file {} is malformed: {source}", path.display())
            }
            SettingsError::Encode { path, source } => {
                write!(f, "settings for {} could not be encoded: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Malformed { source, .. } => Some(source),
            SettingsError::Encode { source, .. } => Some(source),
        }
    }
}

/// Persistenz der Default-Einstellung an einem festen Pfad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Liest die gespeicherte Einstellung
    ///
    /// Fehlende Datei ergibt ein leeres Mapping. Ungültiger Inhalt ist ein
    /// harter Fehler (`SettingsError::Malformed`), es wird nicht weitergemacht.
    pub fn load(&self) -> Result<PersistedConfig, SettingsError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                #[cfg(feature = "log")]
                log::info!(
                    "No settings file at {}, starting with empty defaults",
                    self.path.display()
                );
                return Ok(PersistedConfig::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| SettingsError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Überschreibt die Datei mit der übergebenen Einstellung
    ///
    /// Kein atomares Schreiben, kein Backup: last writer wins.
    pub fn save(&self, config: &PersistedConfig) -> Result<(), SettingsError> {
        let json = serde_json::to_vec(config).map_err(|source| SettingsError::Encode {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        #[cfg(feature = "log")]
        log::info!("Saved default settings to {}", self.path.display());

        Ok(())
    }
}
