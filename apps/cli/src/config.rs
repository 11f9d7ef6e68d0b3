use clap::ValueEnum;
use wealthfolio_demo_core::constants::{DEFAULT_ASSET_COUNT, DEFAULT_HISTORY_DAYS};
use wealthfolio_demo_core::{DemoSettings, Error};

/// How views are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Config {
    pub settings: DemoSettings,
    pub format: OutputFormat,
}

impl Config {
    /// Reads settings from the environment (and `.env` when present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let asset_count = env_number("WF_DEMO_ASSET_COUNT")?.unwrap_or(DEFAULT_ASSET_COUNT);
        let history_days = env_number("WF_DEMO_HISTORY_DAYS")?.unwrap_or(DEFAULT_HISTORY_DAYS);
        let seed = env_number("WF_DEMO_SEED")?;
        let format = match env_value("WF_DEMO_FORMAT") {
            Some(raw) => parse_format("WF_DEMO_FORMAT", &raw)?,
            None => OutputFormat::Text,
        };
        Ok(Self {
            settings: DemoSettings {
                asset_count,
                history_days,
                seed,
            },
            format,
        })
    }

    /// Applies command-line overrides on top of environment values.
    pub fn with_overrides(
        mut self,
        asset_count: Option<usize>,
        history_days: Option<usize>,
        seed: Option<u64>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(asset_count) = asset_count {
            self.settings.asset_count = asset_count;
        }
        if let Some(history_days) = history_days {
            self.settings.history_days = history_days;
        }
        if seed.is_some() {
            self.settings.seed = seed;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn env_number<T>(key: &str) -> Result<Option<T>, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_value(key).map(|raw| parse_number(key, &raw)).transpose()
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| Error::InvalidConfigValue(format!("{} = '{}' ({})", key, raw, e)))
}

fn parse_format(key: &str, raw: &str) -> Result<OutputFormat, Error> {
    OutputFormat::from_str(raw, true)
        .map_err(|e| Error::InvalidConfigValue(format!("{} = '{}' ({})", key, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            settings: DemoSettings::default(),
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = base().with_overrides(Some(3), None, Some(9), Some(OutputFormat::Json));
        assert_eq!(config.settings.asset_count, 3);
        assert_eq!(config.settings.history_days, 30);
        assert_eq!(config.settings.seed, Some(9));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_number_accepts_integers() {
        let days: usize = parse_number("WF_DEMO_HISTORY_DAYS", "90").unwrap();
        assert_eq!(days, 90);
    }

    #[test]
    fn test_malformed_number_is_invalid_config_value() {
        let result: Result<usize, Error> = parse_number("WF_DEMO_ASSET_COUNT", "five");
        match result {
            Err(Error::InvalidConfigValue(message)) => {
                assert!(message.contains("WF_DEMO_ASSET_COUNT"));
                assert!(message.contains("'five'"));
            }
            other => panic!("expected InvalidConfigValue, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_seed_is_invalid_config_value() {
        let result: Result<u64, Error> = parse_number("WF_DEMO_SEED", "-1");
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_parse_format_is_case_insensitive() {
        assert_eq!(parse_format("WF_DEMO_FORMAT", "JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            parse_format("WF_DEMO_FORMAT", "yaml"),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_no_overrides_keep_environment_values() {
        let config = base().with_overrides(None, None, None, None);
        assert_eq!(config.settings, DemoSettings::default());
        assert_eq!(config.format, OutputFormat::Text);
    }
}
