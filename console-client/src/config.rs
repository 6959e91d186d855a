use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::GameConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    override_path: Option<&PathBuf>,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    match override_path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}
