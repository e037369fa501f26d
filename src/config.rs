use std::env::current_exe;
use std::fs::File;
use std::io::{BufReader, Error as IOError, Read};
use std::path::{Path, PathBuf};

use serde_json::{error::Error as SerdeError, Value};
use thiserror::Error;

use super::corpus::{OutputMode, OutputModeErr};
use super::resources;

pub const DEFAULT_REPORT_FILE_NAME: &str = "zemberek_comparison.txt";
pub const DEFAULT_OUTPUT_PREFIX: &str = "zemberek_";

#[derive(Error, Debug)]
pub enum ConfigErr {
  #[error("{self:?}")]
  IOError(#[from] IOError),
  #[error("{self:?}")]
  SerdeError(#[from] SerdeError),
  #[error("`{0}` not defined in setting file")]
  NotDefinedErr(String),
  #[error("`{0}` has invalid value {1}")]
  InvalidValueErr(String, String),
  #[error("{0}")]
  OutputModeErr(#[from] OutputModeErr),
  #[error("could not find the directory of {0}")]
  NotFoundParentDirErr(String),
}

#[derive(Debug)]
pub struct Config {
  pub settings: Value,
  pub resource_dir: PathBuf,
}

impl Config {
  pub fn new(settings: Value, resource_dir: PathBuf) -> Config {
    Config {
      settings,
      resource_dir,
    }
  }
  /// `resources/` next to the running executable.
  pub fn default_resource_dir() -> Result<PathBuf, ConfigErr> {
    let exe = current_exe()?;
    let dir = exe
      .parent()
      .ok_or_else(|| ConfigErr::NotFoundParentDirErr(exe.display().to_string()))?;
    Ok(dir.join("resources"))
  }
  /// Without a settings path the bundled defaults are written to the default
  /// resource directory and read from there.
  pub fn setup(path: Option<&str>, resource_dir: Option<&str>) -> Result<Config, ConfigErr> {
    let (path, resource_dir) = match (path, resource_dir) {
      (Some(p), Some(d)) => (PathBuf::from(p), PathBuf::from(d)),
      (Some(p), None) => {
        let p = PathBuf::from(p);
        let d = p
          .parent()
          .ok_or_else(|| ConfigErr::NotFoundParentDirErr(p.display().to_string()))?
          .to_path_buf();
        (p, d)
      }
      (None, d) => {
        let d = match d {
          Some(d) => PathBuf::from(d),
          None => Config::default_resource_dir()?,
        };
        let p = d.join(resources::SETTINGS_FILE);
        resources::write_settings_json(&p)?;
        resources::write_resources(&d)?;
        (p, d)
      }
    };
    Config::from_file(path, resource_dir)
  }
  pub fn from_file<P: AsRef<Path>>(path: P, resource_dir: PathBuf) -> Result<Config, ConfigErr> {
    let mut buf = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut buf)?;
    let settings = serde_json::from_str(&buf)?;
    Ok(Config::new(settings, resource_dir))
  }
  pub fn lexicon_paths(&self) -> Result<Vec<PathBuf>, ConfigErr> {
    match self.settings.get("lexiconFiles") {
      Some(Value::Array(arr)) if !arr.is_empty() => {
        let mut paths = vec![];
        for v in arr {
          match v {
            Value::String(path) => paths.push(self.resource_dir.join(path)),
            _ => {
              return Err(ConfigErr::InvalidValueErr(
                String::from("lexiconFiles"),
                v.to_string(),
              ))
            }
          }
        }
        Ok(paths)
      }
      _ => Err(ConfigErr::NotDefinedErr(String::from("lexiconFiles"))),
    }
  }
  pub fn transition_path(&self) -> Option<PathBuf> {
    self.get_path("transitionFile")
  }
  pub fn abbreviation_path(&self) -> Option<PathBuf> {
    self.get_path("abbreviationFile")
  }
  pub fn output_mode(&self) -> Result<OutputMode, ConfigErr> {
    match self.settings.get("outputMode") {
      Some(Value::String(mode)) => Ok(mode.parse::<OutputMode>()?),
      None => Ok(OutputMode::default()),
      Some(v) => Err(ConfigErr::InvalidValueErr(
        String::from("outputMode"),
        v.to_string(),
      )),
    }
  }
  pub fn report_file_name(&self) -> String {
    self.get_string("reportFileName", DEFAULT_REPORT_FILE_NAME)
  }
  pub fn output_prefix(&self) -> String {
    self.get_string("outputPrefix", DEFAULT_OUTPUT_PREFIX)
  }
  pub fn parallel(&self) -> bool {
    self
      .settings
      .get("parallel")
      .and_then(Value::as_bool)
      .unwrap_or(false)
  }
  fn get_path(&self, key: &str) -> Option<PathBuf> {
    if let Some(Value::String(p)) = self.settings.get(key) {
      Some(self.resource_dir.join(p))
    } else {
      None
    }
  }
  fn get_string(&self, key: &str, default: &str) -> String {
    self
      .settings
      .get(key)
      .and_then(Value::as_str)
      .unwrap_or(default)
      .to_string()
  }
}
