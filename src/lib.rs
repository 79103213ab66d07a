//! Core library for the Creative Houses management panel.
//! Decodes host messages, keeps the panel's view state, derives typed view models for the
//! player and admin screens, and turns user actions into fire-and-forget intents.

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
mod gui;
mod lenient;
pub mod model;
pub mod overlay;
pub mod panel;
pub mod polygon;
pub mod preview;
pub mod state;
pub mod statics;
pub mod view;

pub use bridge::{
    ChannelBridge, Envelope, HostBridge, HostMessage, Intent, LogBridge, RecordingBridge,
};
pub use config::PanelConfig;
pub use error::{BridgeError, ValidationError};
pub use gui::run_gui;
pub use model::{House, Member, MemberRole, Player};
pub use panel::Panel;
