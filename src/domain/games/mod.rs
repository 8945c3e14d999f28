//! Game-type plugin module.
//!
//! Configuration-driven polymorphism over game templates: each game type
//! registers a plugin that supplies its settings sections, default settings,
//! and content validation hook.

mod memory;
mod plugin;
mod registry;

pub use memory::MemoryGamePlugin;
pub use plugin::{ContentError, GamePlugin, SettingsSection};
pub use registry::GamePluginRegistry;
