use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Day/month order applied when a sheet date such as "03/04/2025" is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Runtime configuration: the business-day target plus the locale profile used
/// to recognize the sheet's column headers and date format. The defaults match
/// the Portuguese sheet layout the tool was born with ("Data", "Início", "Fim",
/// "Horas requeridas"); other locales just list their own synonyms here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_hours")]
    pub business_day_target_hours: f64,

    #[serde(default = "default_date_order")]
    pub date_order: DateOrder,

    #[serde(default = "default_date_labels")]
    pub date_labels: Vec<String>,

    #[serde(default = "default_start_labels")]
    pub start_labels: Vec<String>,

    #[serde(default = "default_end_labels")]
    pub end_labels: Vec<String>,

    #[serde(default = "default_override_labels")]
    pub override_labels: Vec<String>,

    /// How many trailing days end up on the chart.
    #[serde(default = "default_window_days")]
    pub window_days: usize,

    /// Minimum non-empty cells (date excluded) for a row to count as real data.
    #[serde(default = "default_completeness_threshold")]
    pub completeness_threshold: usize,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_target_hours() -> f64 {
    8.5
}
fn default_date_order() -> DateOrder {
    DateOrder::DayFirst
}
fn default_date_labels() -> Vec<String> {
    vec!["data".into(), "date".into()]
}
fn default_start_labels() -> Vec<String> {
    vec!["inicio".into(), "início".into(), "start".into()]
}
fn default_end_labels() -> Vec<String> {
    vec!["fim".into(), "end".into()]
}
fn default_override_labels() -> Vec<String> {
    vec!["horas requeridas".into(), "required hours".into()]
}
fn default_window_days() -> usize {
    7
}
fn default_completeness_threshold() -> usize {
    4
}
fn default_chart_width() -> u32 {
    900
}
fn default_chart_height() -> u32 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_day_target_hours: default_target_hours(),
            date_order: default_date_order(),
            date_labels: default_date_labels(),
            start_labels: default_start_labels(),
            end_labels: default_end_labels(),
            override_labels: default_override_labels(),
            window_days: default_window_days(),
            completeness_threshold: default_completeness_threshold(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workbalance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workbalance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workbalance.conf")
    }

    /// Load the configuration: an explicit path wins, otherwise the standard
    /// config file is used if present, otherwise the built-in defaults.
    pub fn load(explicit_path: Option<&str>) -> AppResult<Self> {
        let path = match explicit_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            if explicit_path.is_some() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the current configuration to the standard config file.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
        fs::write(&path, yaml)?;

        Ok(path)
    }
}
