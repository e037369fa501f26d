use std::collections::HashMap;
use std::fs::File;
use std::io::{Error as IOError, Read};
use std::num::ParseIntError;
use std::path::Path;

use log::{debug, error};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use super::pos::PrimaryPos;

const MIN_COLS_NUM: usize = 3;
const MAX_COLS_NUM: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
  pub lemma: String,
  pub pos: PrimaryPos,
  pub cost: i32,
}

#[derive(Error, Debug)]
pub enum LexiconErr {
  #[error("invalid format at line {0}")]
  InvalidFormatErr(u64),
  #[error("{1} is invalid part of speech at line {0}")]
  InvalidPosErr(u64, String),
  #[error("{0}")]
  ParseIntError(#[from] ParseIntError),
  #[error("{0}")]
  CSVError(#[from] csv::Error),
  #[error("{0}")]
  IOError(#[from] IOError),
}

/// Surface forms, NFC normalized and case folded, mapped to their possible analyses in file order.
#[derive(Debug, Default)]
pub struct Lexicon {
  entries: HashMap<String, Vec<LexiconEntry>>,
  size: usize,
}

impl Lexicon {
  pub fn read_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<&Self, LexiconErr> {
    let path = path.as_ref();
    debug!("reading lexicon {}", path.display());
    match self.read_from(File::open(path)?) {
      Ok(lexicon) => Ok(lexicon),
      Err(e) => {
        error!("{} in {}", e, path.display());
        Err(e)
      }
    }
  }
  pub fn read_from<R: Read>(&mut self, reader: R) -> Result<&Self, LexiconErr> {
    let mut reader = csv::ReaderBuilder::new()
      .has_headers(false)
      .comment(Some(b'#'))
      .flexible(true)
      .trim(csv::Trim::All)
      .from_reader(reader);
    for record in reader.records() {
      let record = record?;
      let line = record.position().map(|p| p.line()).unwrap_or(0);
      if record.len() < MIN_COLS_NUM || record.len() > MAX_COLS_NUM || record[0].is_empty() {
        return Err(LexiconErr::InvalidFormatErr(line));
      }
      let pos = record[2]
        .parse::<PrimaryPos>()
        .map_err(|_| LexiconErr::InvalidPosErr(line, record[2].to_string()))?;
      let cost = match record.get(3) {
        Some(c) if !c.is_empty() => c.parse::<i32>()?,
        _ => 0,
      };
      let lemma = if record[1].is_empty() {
        record[0].to_string()
      } else {
        record[1].to_string()
      };
      self.add(&record[0], LexiconEntry { lemma, pos, cost });
    }
    Ok(self)
  }
  pub fn add(&mut self, surface: &str, entry: LexiconEntry) {
    let candidates = self
      .entries
      .entry(lookup_key(surface))
      .or_insert_with(Vec::new);
    if candidates
      .iter()
      .any(|c| c.lemma == entry.lemma && c.pos == entry.pos)
    {
      return;
    }
    candidates.push(entry);
    self.size += 1;
  }
  pub fn lookup(&self, surface: &str) -> &[LexiconEntry] {
    self
      .entries
      .get(&lookup_key(surface))
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }
  pub fn len(&self) -> usize {
    self.size
  }
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }
}

fn lookup_key(surface: &str) -> String {
  turkish_lowercase(&surface.nfc().collect::<String>())
}

/// Lowercases with the Turkish dotted/dotless i rules.
pub fn turkish_lowercase(s: &str) -> String {
  let mut lower = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      'I' => lower.push('ı'),
      'İ' => lower.push('i'),
      _ => lower.extend(c.to_lowercase()),
    }
  }
  lower
}
