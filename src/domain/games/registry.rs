//! Game plugin registry.
//!
//! Keyed lookup from game-type string to plugin. The registry itself is
//! immutable after construction; a shared default instance carries the
//! built-in game types.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{GamePlugin, MemoryGamePlugin};

static BUILTIN: Lazy<GamePluginRegistry> = Lazy::new(GamePluginRegistry::with_builtin);

/// Lookup table of registered game plugins.
#[derive(Default)]
pub struct GamePluginRegistry {
    plugins: HashMap<String, Arc<dyn GamePlugin>>,
}

impl GamePluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in game types registered.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MemoryGamePlugin));
        registry
    }

    /// Shared registry of built-in game types.
    pub fn builtin() -> &'static GamePluginRegistry {
        &BUILTIN
    }

    /// Registers a plugin under its own game-type key.
    ///
    /// Re-registering a key replaces the previous plugin.
    pub fn register(&mut self, plugin: Arc<dyn GamePlugin>) {
        self.plugins.insert(plugin.game_type().to_string(), plugin);
    }

    /// Looks up a plugin by game-type key.
    pub fn get(&self, game_type: &str) -> Option<&Arc<dyn GamePlugin>> {
        self.plugins.get(game_type)
    }

    /// Registered game-type keys, sorted for stable display.
    pub fn game_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}
