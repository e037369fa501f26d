use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Error as IOError};
use std::num::ParseIntError;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::pos::PrimaryPos;

pub const DEFAULT_TRANSITION_COST: i32 = 1000;

/// One side of a POS bigram.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum State {
  Bos,
  Eos,
  Pos(PrimaryPos),
  Any,
}

#[derive(Error, Debug)]
pub enum TransitionErr {
  #[error("invalid format at line {0}")]
  InvalidFormatErr(usize),
  #[error("{1} is invalid state at line {0}")]
  InvalidStateErr(usize, String),
  #[error("{0}")]
  ParseIntError(#[from] ParseIntError),
  #[error("{0}")]
  IOError(#[from] IOError),
}

lazy_static! {
  static ref ONLY_SPACES: Regex = Regex::new(r"^\s*$").unwrap();
}

/// Bigram costs between part of speech states, read from `transition.def`:
/// `LEFT RIGHT COST` per line, where a side is a tag, `BOS`, `EOS` or `*`.
#[derive(Debug)]
pub struct TransitionMatrix {
  costs: HashMap<(State, State), i32>,
  default_cost: i32,
}

impl Default for TransitionMatrix {
  fn default() -> TransitionMatrix {
    TransitionMatrix {
      costs: HashMap::new(),
      default_cost: DEFAULT_TRANSITION_COST,
    }
  }
}

impl TransitionMatrix {
  pub fn read_transition_definition<P: AsRef<Path>>(
    &mut self,
    path: P,
  ) -> Result<&Self, TransitionErr> {
    self.read_from(BufReader::new(File::open(path)?))
  }
  pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<&Self, TransitionErr> {
    for (index, line) in reader.lines().enumerate() {
      let line = line?;
      let line_str = line.trim_end();
      if ONLY_SPACES.is_match(line_str) || line_str.trim_start().starts_with('#') {
        continue;
      }
      let cols: Vec<&str> = line_str.split_whitespace().collect();
      if cols.len() != 3 {
        return Err(TransitionErr::InvalidFormatErr(index));
      }
      let left = parse_state(cols[0]).ok_or_else(|| {
        TransitionErr::InvalidStateErr(index, cols[0].to_string())
      })?;
      let right = parse_state(cols[1]).ok_or_else(|| {
        TransitionErr::InvalidStateErr(index, cols[1].to_string())
      })?;
      let cost = cols[2].parse::<i32>()?;
      self.set_cost(left, right, cost);
    }
    Ok(self)
  }
  pub fn set_cost(&mut self, left: State, right: State, cost: i32) {
    if left == State::Any && right == State::Any {
      self.default_cost = cost;
    } else {
      self.costs.insert((left, right), cost);
    }
  }
  /// Exact pair first, then `(left, *)`, `(*, right)` and the default.
  pub fn get_cost(&self, left: State, right: State) -> i32 {
    self
      .costs
      .get(&(left, right))
      .or_else(|| self.costs.get(&(left, State::Any)))
      .or_else(|| self.costs.get(&(State::Any, right)))
      .copied()
      .unwrap_or(self.default_cost)
  }
  pub fn len(&self) -> usize {
    self.costs.len()
  }
  pub fn is_empty(&self) -> bool {
    self.costs.is_empty()
  }
}

fn parse_state(key: &str) -> Option<State> {
  match key {
    "BOS" => Some(State::Bos),
    "EOS" => Some(State::Eos),
    "*" => Some(State::Any),
    _ => key.parse::<PrimaryPos>().ok().map(State::Pos),
  }
}
