use std::fmt;
use std::fs::{self, metadata, read_dir, symlink_metadata};
use std::io::Error as IOError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{error, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use super::config::{Config, ConfigErr, DEFAULT_OUTPUT_PREFIX, DEFAULT_REPORT_FILE_NAME};
use super::stem_record::{join_stems, StemRecord};
use super::stemmer::{read_file_to_string, Stemmer};

/// Layout of the stemmed output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
  /// One comparison report next to the input root.
  SingleFile,
  /// One prefixed stem file next to every input file.
  MultipleFiles,
}

impl Default for OutputMode {
  fn default() -> OutputMode {
    OutputMode::SingleFile
  }
}

#[derive(Error, Debug)]
pub enum OutputModeErr {
  #[error("{0} is invalid output mode")]
  InvalidOutputModeErr(String),
}

impl FromStr for OutputMode {
  type Err = OutputModeErr;
  fn from_str(key: &str) -> Result<Self, Self::Err> {
    match key {
      "single" => Ok(OutputMode::SingleFile),
      "multiple" => Ok(OutputMode::MultipleFiles),
      _ => Err(OutputModeErr::InvalidOutputModeErr(key.to_string())),
    }
  }
}

impl fmt::Display for OutputMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OutputMode::SingleFile => f.write_str("single"),
      OutputMode::MultipleFiles => f.write_str("multiple"),
    }
  }
}

#[derive(Error, Debug)]
pub enum CorpusErr {
  #[error("{0}")]
  IOError(#[from] IOError),
  #[error("{0} doesn't exist")]
  NotFoundErr(String),
  #[error("could not find the directory of {0}")]
  NotFoundParentDirErr(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileStatus {
  Stemmed,
  ReadFailed(String),
  WriteFailed(String),
}

#[derive(Clone, Debug)]
pub struct FileOutcome {
  pub path: PathBuf,
  pub output: Option<PathBuf>,
  pub stem_count: usize,
  pub status: FileStatus,
}

impl FileOutcome {
  pub fn is_failed(&self) -> bool {
    self.status != FileStatus::Stemmed
  }
  fn failure_reason(&self) -> Option<&str> {
    match &self.status {
      FileStatus::Stemmed => None,
      FileStatus::ReadFailed(reason) | FileStatus::WriteFailed(reason) => Some(reason.as_str()),
    }
  }
}

/// One input file while it is being processed.
#[derive(Clone, Debug)]
pub struct CorpusEntry {
  pub path: PathBuf,
  pub text: String,
  pub stems: Vec<StemRecord>,
}

impl CorpusEntry {
  /// The report block, byte for byte: each part followed by a newline.
  pub fn to_report_block(&self) -> String {
    format!(
      "Path: {}\n\nActual:\n{}\n\nStemmed:\n{}\n\n\n",
      self.path.display(),
      self.text,
      join_stems(&self.stems)
    )
  }
}

#[derive(Debug)]
pub struct CorpusSummary {
  pub mode: OutputMode,
  pub outputs: Vec<PathBuf>,
  pub outcomes: Vec<FileOutcome>,
}

impl CorpusSummary {
  pub fn failed(&self) -> Vec<&FileOutcome> {
    self.outcomes.iter().filter(|o| o.is_failed()).collect()
  }
}

/// Regular files under `root` (or `root` itself), sorted by path.
/// Symlinked directories are not followed; symlinks to files are kept.
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, CorpusErr> {
  let root = root.as_ref();
  if !root.exists() {
    return Err(CorpusErr::NotFoundErr(root.display().to_string()));
  }
  let mut files = vec![];
  walk(root, &mut files)?;
  files.sort();
  Ok(files)
}

fn walk(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), CorpusErr> {
  if symlink_metadata(path)?.is_dir() {
    for entry in read_dir(path)? {
      walk(&entry?.path(), files)?;
    }
  } else if metadata(path).map(|m| m.is_file()).unwrap_or(false) {
    files.push(path.to_path_buf());
  }
  Ok(())
}

pub struct CorpusDriver<'a> {
  stemmer: &'a Stemmer,
  mode: OutputMode,
  parallel: bool,
  report_file_name: String,
  output_prefix: String,
}

impl<'a> CorpusDriver<'a> {
  pub fn new(stemmer: &'a Stemmer, mode: OutputMode) -> CorpusDriver<'a> {
    CorpusDriver {
      stemmer,
      mode,
      parallel: false,
      report_file_name: String::from(DEFAULT_REPORT_FILE_NAME),
      output_prefix: String::from(DEFAULT_OUTPUT_PREFIX),
    }
  }
  pub fn from_config(stemmer: &'a Stemmer, config: &Config) -> Result<CorpusDriver<'a>, ConfigErr> {
    Ok(
      CorpusDriver::new(stemmer, config.output_mode()?)
        .parallel(config.parallel())
        .report_file_name(config.report_file_name())
        .output_prefix(config.output_prefix()),
    )
  }
  pub fn mode(mut self, mode: OutputMode) -> Self {
    self.mode = mode;
    self
  }
  pub fn parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }
  pub fn report_file_name<S: Into<String>>(mut self, name: S) -> Self {
    self.report_file_name = name.into();
    self
  }
  pub fn output_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
    self.output_prefix = prefix.into();
    self
  }
  pub fn get_mode(&self) -> OutputMode {
    self.mode
  }

  pub fn report_path<P: AsRef<Path>>(&self, root: P) -> Result<PathBuf, CorpusErr> {
    let root = root.as_ref();
    let parent = root
      .parent()
      .ok_or_else(|| CorpusErr::NotFoundParentDirErr(root.display().to_string()))?;
    Ok(parent.join(&self.report_file_name))
  }
  pub fn output_path<P: AsRef<Path>>(&self, file: P) -> Result<PathBuf, CorpusErr> {
    let file = file.as_ref();
    match (file.parent(), file.file_name()) {
      (Some(parent), Some(name)) => Ok(parent.join(format!(
        "{}{}",
        self.output_prefix,
        name.to_string_lossy()
      ))),
      _ => Err(CorpusErr::NotFoundParentDirErr(file.display().to_string())),
    }
  }

  pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<CorpusSummary, CorpusErr> {
    match self.mode {
      OutputMode::SingleFile => self.generate_single_file(root),
      OutputMode::MultipleFiles => self.generate_multiple_files(root),
    }
  }

  /// Unreadable files still get a block, with empty text and stems, and are
  /// listed again under `Failed:` at the end of the report.
  pub fn generate_single_file<P: AsRef<Path>>(&self, root: P) -> Result<CorpusSummary, CorpusErr> {
    let root = root.as_ref();
    let out = self.report_path(root)?;
    let files = collect_files(root)?;
    info!("{} files under {}", files.len(), root.display());

    let processed = self.map_files(&files, |path| self.process(path));
    let mut report = String::new();
    let mut outcomes = Vec::with_capacity(processed.len());
    for (entry, status) in processed {
      report.push_str(&entry.to_report_block());
      outcomes.push(FileOutcome {
        path: entry.path,
        output: Some(out.clone()),
        stem_count: entry.stems.len(),
        status,
      });
    }
    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.is_failed()).collect();
    if !failed.is_empty() {
      report.push_str("Failed:\n");
      for outcome in failed {
        report.push_str(&format!(
          "{}: {}\n",
          outcome.path.display(),
          outcome.failure_reason().unwrap_or_default()
        ));
      }
    }
    fs::write(&out, report)?;
    info!("wrote {}", out.display());

    Ok(CorpusSummary {
      mode: OutputMode::SingleFile,
      outputs: vec![out],
      outcomes,
    })
  }

  pub fn generate_multiple_files<P: AsRef<Path>>(
    &self,
    root: P,
  ) -> Result<CorpusSummary, CorpusErr> {
    let root = root.as_ref();
    let files = collect_files(root)?;
    info!("{} files under {}", files.len(), root.display());

    let outcomes = self.map_files(&files, |path| {
      let (entry, status) = self.process(path);
      let out = match self.output_path(path) {
        Ok(out) => out,
        Err(e) => {
          error!("{}", e);
          return FileOutcome {
            path: entry.path,
            output: None,
            stem_count: entry.stems.len(),
            status: FileStatus::WriteFailed(e.to_string()),
          };
        }
      };
      let status = match fs::write(&out, format!("{}\n", join_stems(&entry.stems))) {
        Ok(()) => status,
        Err(e) => {
          error!("failed to write {}: {}", out.display(), e);
          FileStatus::WriteFailed(e.to_string())
        }
      };
      FileOutcome {
        path: entry.path,
        output: Some(out),
        stem_count: entry.stems.len(),
        status,
      }
    });
    let outputs = outcomes
      .iter()
      .filter(|o| !matches!(o.status, FileStatus::WriteFailed(_)))
      .filter_map(|o| o.output.clone())
      .collect();

    Ok(CorpusSummary {
      mode: OutputMode::MultipleFiles,
      outputs,
      outcomes,
    })
  }

  fn process(&self, path: &Path) -> (CorpusEntry, FileStatus) {
    match read_file_to_string(path) {
      Ok(text) => {
        let stems = self.stemmer.stems(&text);
        info!("stemmed {} ({} stems)", path.display(), stems.len());
        let entry = CorpusEntry {
          path: path.to_path_buf(),
          text,
          stems,
        };
        (entry, FileStatus::Stemmed)
      }
      Err(e) => {
        error!("failed to read {}: {}", path.display(), e);
        let entry = CorpusEntry {
          path: path.to_path_buf(),
          text: String::new(),
          stems: vec![],
        };
        (entry, FileStatus::ReadFailed(e.to_string()))
      }
    }
  }

  /// Results come back in `files` order, also when run on the rayon pool.
  fn map_files<T, F>(&self, files: &[PathBuf], f: F) -> Vec<T>
  where
    T: Send,
    F: Fn(&PathBuf) -> T + Sync + Send,
  {
    if self.parallel {
      if files.len() < 2 {
        warn!("parallel run requested for {} file(s)", files.len());
      }
      files.par_iter().map(f).collect()
    } else {
      files.iter().map(f).collect()
    }
  }
}
