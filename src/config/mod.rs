mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::DEFAULT_COUNT_HINT;
use std::path::Path;
use std::time::Duration;

/// Upper bound for any interval setting: one day
pub const MAX_DURATION_MINUTES: u64 = 24 * 60;

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Fill settings left unset with the values of the selected preset
    pub fn apply_preset(&mut self) {
        let Some(preset) = self.preset else {
            return;
        };

        if self.session.reminder_interval_minutes.is_none() {
            self.session.reminder_interval_minutes = preset.reminder_interval_minutes();
        }
        if self.planner.subtask_count_hint.is_none() {
            self.planner.subtask_count_hint = Some(preset.subtask_count_hint().to_string());
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        let session = &self.session;
        let durations = [
            ("work_duration_minutes", Some(session.work_duration_minutes)),
            ("break_duration_minutes", Some(session.break_duration_minutes)),
            ("reminder_interval_minutes", session.reminder_interval_minutes),
        ];

        for (field, value) in durations {
            match value {
                Some(0) => return Err(ConfigError::ZeroDuration { field }),
                Some(value) if value > MAX_DURATION_MINUTES => {
                    return Err(ConfigError::DurationTooLong {
                        field,
                        value,
                        max: MAX_DURATION_MINUTES,
                    })
                }
                _ => {}
            }
        }

        self.planner.count_hint()?;

        Ok(())
    }
}

impl PlannerConfig {
    pub fn count_hint(&self) -> Result<CountHint, ConfigError> {
        let raw = self
            .subtask_count_hint
            .as_deref()
            .unwrap_or(DEFAULT_COUNT_HINT);
        raw.parse().map_err(ConfigError::CountHint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

impl SessionConfig {
    pub fn work_duration(&self) -> Duration {
        minutes(self.work_duration_minutes)
    }

    pub fn break_duration(&self) -> Duration {
        minutes(self.break_duration_minutes)
    }

    pub fn reminder_interval(&self) -> Option<Duration> {
        self.reminder_interval_minutes.map(minutes)
    }
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m.saturating_mul(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.work_duration_minutes, 25);
        assert_eq!(config.session.break_duration_minutes, 5);
        assert_eq!(config.session.reminder_interval_minutes, None);
        assert!(config.planner.review_subtasks);
        assert_eq!(config.planner.provider, Provider::Openai);
        assert_eq!(
            config.planner.count_hint().unwrap(),
            CountHint { min: 2, max: 3 }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
session:
  work_duration_minutes: 50
  reminder_interval_minutes: 10
planner:
  subtask_count_hint: "4-6"
  provider: claude_cli
speech:
  enabled: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.session.work_duration_minutes, 50);
        assert_eq!(config.session.break_duration_minutes, 5);
        assert_eq!(config.session.reminder_interval_minutes, Some(10));
        assert_eq!(config.planner.provider, Provider::ClaudeCli);
        assert_eq!(config.planner.timeout_sec, 120);
        assert!(!config.speech.enabled);
        assert!(config.speech.wait_for_speech);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pomodrill.yaml");
        std::fs::write(&path, "preset: drill\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.preset, Some(Preset::Drill));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            Config::load(&missing),
            Err(ConfigError::ReadFile { .. })
        ));
        assert!(Config::load_or_default(&missing).is_ok());
    }

    #[test]
    fn test_drill_preset_fills_unset_fields() {
        let mut config = Config {
            preset: Some(Preset::Drill),
            ..Config::default()
        };
        config.apply_preset();
        assert_eq!(config.session.reminder_interval_minutes, Some(5));
        assert_eq!(config.planner.subtask_count_hint.as_deref(), Some("2-3"));
    }

    #[test]
    fn test_preset_does_not_override_explicit_values() {
        let mut config = Config {
            preset: Some(Preset::Classic),
            ..Config::default()
        };
        config.session.reminder_interval_minutes = Some(10);
        config.planner.subtask_count_hint = Some("3".to_string());
        config.apply_preset();
        assert_eq!(config.session.reminder_interval_minutes, Some(10));
        assert_eq!(config.planner.subtask_count_hint.as_deref(), Some("3"));
    }

    #[test]
    fn test_validate_rejects_zero_durations() {
        let mut config = Config::default();
        config.session.work_duration_minutes = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDuration {
                field: "work_duration_minutes"
            })
        ));

        let mut config = Config::default();
        config.session.reminder_interval_minutes = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_durations_over_a_day() {
        let mut config = Config::default();
        config.session.work_duration_minutes = MAX_DURATION_MINUTES;
        assert!(config.validate().is_ok());

        config.session.work_duration_minutes = 400_000_000_000_000_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DurationTooLong {
                field: "work_duration_minutes",
                ..
            })
        ));

        let mut config = Config::default();
        config.session.break_duration_minutes = MAX_DURATION_MINUTES + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.session.reminder_interval_minutes = Some(200_000_000_000_000_000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DurationTooLong {
                field: "reminder_interval_minutes",
                ..
            })
        ));
    }

    #[test]
    fn test_huge_minutes_do_not_overflow() {
        let session = SessionConfig {
            work_duration_minutes: u64::MAX,
            ..SessionConfig::default()
        };
        assert_eq!(session.work_duration(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_count_hint_parsing() {
        assert_eq!("2-3".parse::<CountHint>(), Ok(CountHint { min: 2, max: 3 }));
        assert_eq!(" 4 - 6 ".parse::<CountHint>(), Ok(CountHint { min: 4, max: 6 }));
        assert_eq!("5".parse::<CountHint>(), Ok(CountHint { min: 5, max: 5 }));
        assert!("0-3".parse::<CountHint>().is_err());
        assert!("6-4".parse::<CountHint>().is_err());
        assert!("a few".parse::<CountHint>().is_err());

        let mut config = Config::default();
        config.planner.subtask_count_hint = Some("lots".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::CountHint(_))));
    }

    #[test]
    fn test_count_hint_display() {
        assert_eq!(CountHint { min: 2, max: 3 }.to_string(), "2-3");
        assert_eq!(CountHint { min: 4, max: 4 }.to_string(), "4");
        assert!(CountHint { min: 2, max: 3 }.contains(3));
        assert!(!CountHint { min: 2, max: 3 }.contains(4));
    }
}
