//! Memory game plugin.

use serde_json::{json, Value};

use super::{ContentError, GamePlugin, SettingsSection};

/// Minimum card pairs for a playable board.
const MIN_PAIRS: u64 = 2;

/// Maximum card pairs the board layout supports.
const MAX_PAIRS: u64 = 18;

/// Matching-pairs memory game.
pub struct MemoryGamePlugin;

impl GamePlugin for MemoryGamePlugin {
    fn game_type(&self) -> &str {
        "memory_game"
    }

    fn display_name(&self) -> &str {
        "משחק זיכרון"
    }

    fn default_settings(&self) -> Value {
        json!({
            "pairs_count": 6,
            "flip_back_delay_ms": 1200,
            "shuffle": true,
        })
    }

    fn settings_sections(&self) -> Vec<SettingsSection> {
        let mut sections = vec![SettingsSection::new("pairs", "זוגות קלפים")];
        sections.extend(super::plugin::base_sections());
        sections
    }

    fn validate_content(&self, content: &Value) -> Result<(), ContentError> {
        let pairs = content
            .get("pairs")
            .and_then(Value::as_array)
            .ok_or_else(|| ContentError::missing("pairs"))?;

        let count = pairs.len() as u64;
        if !(MIN_PAIRS..=MAX_PAIRS).contains(&count) {
            return Err(ContentError::invalid(
                "pairs",
                format!("pair count must be between {} and {}, got {}", MIN_PAIRS, MAX_PAIRS, count),
            ));
        }

        for (i, pair) in pairs.iter().enumerate() {
            let complete = pair.get("first").is_some() && pair.get("second").is_some();
            if !complete {
                return Err(ContentError::invalid(
                    "pairs",
                    format!("pair {} is missing a side", i),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(first: &str, second: &str) -> Value {
        json!({"first": first, "second": second})
    }

    #[test]
    fn valid_board_passes() {
        let content = json!({"pairs": [pair("א", "Apple"), pair("ב", "Banana")]});
        assert!(MemoryGamePlugin.validate_content(&content).is_ok());
    }

    #[test]
    fn missing_pairs_field_fails() {
        let result = MemoryGamePlugin.validate_content(&json!({}));
        assert_eq!(result, Err(ContentError::missing("pairs")));
    }

    #[test]
    fn single_pair_board_fails() {
        let content = json!({"pairs": [pair("א", "Apple")]});
        assert!(MemoryGamePlugin.validate_content(&content).is_err());
    }

    #[test]
    fn oversized_board_fails() {
        let pairs: Vec<Value> = (0..19).map(|i| pair(&i.to_string(), "x")).collect();
        let content = json!({ "pairs": pairs });
        assert!(MemoryGamePlugin.validate_content(&content).is_err());
    }

    #[test]
    fn one_sided_pair_fails() {
        let content = json!({"pairs": [pair("א", "Apple"), json!({"first": "ב"})]});
        assert!(MemoryGamePlugin.validate_content(&content).is_err());
    }

    #[test]
    fn sections_put_pairs_before_shared_sections() {
        let keys: Vec<String> = MemoryGamePlugin
            .settings_sections()
            .into_iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(keys, vec!["pairs", "general", "display"]);
    }

    #[test]
    fn default_settings_have_playable_pair_count() {
        let settings = MemoryGamePlugin.default_settings();
        let count = settings["pairs_count"].as_u64().unwrap();
        assert!((MIN_PAIRS..=MAX_PAIRS).contains(&count));
    }
}
