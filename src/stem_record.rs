use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::pos::{PosErr, PrimaryPos};

pub const SEPARATOR: char = '_';

/// A lemma, or the surface form of an unresolved word, paired with its tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StemRecord {
  pub text: String,
  pub pos: PrimaryPos,
}

#[derive(Error, Debug)]
pub enum StemRecordErr {
  #[error("`{0}` has no tag separator")]
  MissingSeparatorErr(String),
  #[error("{0}")]
  PosErr(#[from] PosErr),
}

impl StemRecord {
  pub fn new<S: Into<String>>(text: S, pos: PrimaryPos) -> StemRecord {
    StemRecord {
      text: text.into(),
      pos,
    }
  }
}

impl fmt::Display for StemRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}{}", self.text, SEPARATOR, self.pos)
  }
}

/// Tags never contain the separator, so the last one splits text from tag.
impl FromStr for StemRecord {
  type Err = StemRecordErr;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.rfind(SEPARATOR) {
      Some(index) => Ok(StemRecord::new(
        &s[..index],
        s[index + SEPARATOR.len_utf8()..].parse::<PrimaryPos>()?,
      )),
      None => Err(StemRecordErr::MissingSeparatorErr(s.to_string())),
    }
  }
}

pub fn join_stems(stems: &[StemRecord]) -> String {
  stems
    .iter()
    .map(|s| s.to_string())
    .collect::<Vec<String>>()
    .join(" ")
}
