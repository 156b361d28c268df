use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use chrono_tz::Tz;

pub const DEFAULT_SHEET: &str = "расписание для 2-4 курса на 1-6";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.trim().to_string(), value);
        }
        Ok(Self { values })
    }

    /// `CONFIG_FILE` when set and readable, otherwise empty.
    pub fn load() -> Self {
        match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config file {}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// File value first, then the process environment.
    pub fn get_prop(&self, key: &str) -> Option<String> {
        self.get(key)
            .or_else(|| env::var(key).ok())
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Option<String>,
    pub sheet: String,
    pub timezone: Tz,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Self {
        let timezone = match config.get_prop("SCHEDULE_TIMEZONE") {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown timezone '{}', using {}", name, DEFAULT_TIMEZONE);
                DEFAULT_TIMEZONE
            }),
            None => DEFAULT_TIMEZONE,
        };
        let timeout = config
            .get_prop("SCHEDULE_TIMEOUT_SECS")
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    log::warn!("Ignoring invalid SCHEDULE_TIMEOUT_SECS '{}'", raw);
                    None
                }
            });
        Self {
            endpoint: config.get_prop("SCHEDULE_ENDPOINT"),
            sheet: config
                .get_prop("SCHEDULE_SHEET")
                .unwrap_or_else(|| DEFAULT_SHEET.to_string()),
            timezone,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotenv_style_lines() {
        let config = AppConfig::parse(
            "# comment\nexport SCHEDULE_ENDPOINT=\"https://example.test/schedule\"\nSCHEDULE_SHEET='курс 1'\n\nSCHEDULE_TIMEZONE = Asia/Yekaterinburg\n",
        )
        .unwrap();
        assert_eq!(
            config.get("SCHEDULE_ENDPOINT").as_deref(),
            Some("https://example.test/schedule")
        );
        assert_eq!(config.get("SCHEDULE_SHEET").as_deref(), Some("курс 1"));
        assert_eq!(config.get("SCHEDULE_TIMEZONE").as_deref(), Some("Asia/Yekaterinburg"));
    }

    #[test]
    fn rejects_lines_without_equals() {
        let err = AppConfig::parse("SCHEDULE_SHEET").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn settings_read_file_values() {
        let config = AppConfig::parse(
            "SCHEDULE_ENDPOINT=https://example.test/s\nSCHEDULE_SHEET=a\nSCHEDULE_TIMEZONE=Asia/Yekaterinburg\nSCHEDULE_TIMEOUT_SECS=5\n",
        )
        .unwrap();
        let settings = Settings::from_config(&config);
        assert_eq!(settings.endpoint.as_deref(), Some("https://example.test/s"));
        assert_eq!(settings.sheet, "a");
        assert_eq!(settings.timezone, chrono_tz::Asia::Yekaterinburg);
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn unknown_timezone_falls_back_to_default() {
        let config = AppConfig::parse("SCHEDULE_TIMEZONE=Mars/Olympus\nSCHEDULE_TIMEOUT_SECS=soon\n").unwrap();
        let settings = Settings::from_config(&config);
        assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
        assert_eq!(settings.timeout, None);
    }
}
