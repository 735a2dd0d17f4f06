use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeSessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
            seed: None,
        }
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            first_player_mode: config.first_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_cli_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: GameConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: GameConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let file_path = get_temp_file_path();
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayerMode::Bot,
            bot_delay_ms: 0,
            seed: Some(17),
        };

        get_config_manager(Some(&file_path)).set_config(&config).unwrap();
        let loaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let file_path = get_temp_file_path();
        let loaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(loaded, GameConfig::default());
    }

    #[test]
    fn test_handwritten_yaml_uses_lowercase_difficulty() {
        let serializer = YamlConfigSerializer::new();
        let config: GameConfig = serializer
            .deserialize("difficulty: medium\nfirst_player: Random\nbot_delay_ms: 250\n")
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.first_player, FirstPlayerMode::Random);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_excessive_delay_is_invalid() {
        let config = GameConfig {
            bot_delay_ms: 10_000,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_settings_follow_config() {
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayerMode::Bot,
            ..GameConfig::default()
        };
        let settings = TicTacToeSessionSettings::from(&config);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.first_player_mode, FirstPlayerMode::Bot);
    }
}
