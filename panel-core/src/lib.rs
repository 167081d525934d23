//! Panel Core - Plattform-unabhängige Logik und Traits
//!
//! Diese Crate enthält KEINE Serial-Port-Dependencies.
//! Sie definiert Typen, Traits, den Payload-Encoder und den Settings-Store.

pub mod controller;
pub mod logic;
pub mod settings;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{PanelController, PanelError, PanelState};
pub use logic::{encode, encode_payload, mix_color};
pub use settings::{SettingsError, SettingsStore};
pub use traits::{PayloadSink, TransportError, transmit};
pub use types::{Channel, ChannelLevels, Payload, PersistedConfig};
