use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "QUIZ_MAKER_DATA_DIR";
pub const BASE_URL_ENV: &str = "QUIZ_MAKER_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://quiz-maker.local/";
pub const LOG_FILE_NAME: &str = "quiz-maker.log";

const DATA_DIR_NAME: &str = ".quiz-maker";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Holds the store and the log file.
    pub data_dir: PathBuf,
    /// Prefix of generated share links.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            base_url: env::var(BASE_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Apply values given on the command line over the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, base_url: Option<String>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    #[cfg(test)]
    pub fn test_config(data_dir: &std::path::Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            base_url: "https://quiz.test/".to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_has_values() {
        let config = Config::from_env();
        assert!(!config.base_url.is_empty());
        assert!(!config.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_env().with_overrides(
            Some(PathBuf::from("/tmp/quizzes")),
            Some("https://example.org/".into()),
        );
        assert_eq!(config.data_dir, PathBuf::from("/tmp/quizzes"));
        assert_eq!(config.base_url, "https://example.org/");
        assert_eq!(config.log_path(), PathBuf::from("/tmp/quizzes/quiz-maker.log"));
    }

    #[test]
    fn test_missing_overrides_keep_values() {
        let config = Config::test_config(std::path::Path::new("/data"));
        let same = config.clone().with_overrides(None, None);
        assert_eq!(same, config);
    }
}
