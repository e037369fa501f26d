use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Error as IOError};
use std::path::Path;

use thiserror::Error;

use super::lexicon::turkish_lowercase;

const BOUNDARY_CHARS: [char; 4] = ['.', '!', '?', '…'];
const CLOSING_CHARS: [char; 7] = ['"', '\'', '»', '”', '’', ')', ']'];

pub trait SegmentSentences: Send + Sync {
  fn get_sentences(&self, text: &str) -> Vec<String>;
}

#[derive(Error, Debug)]
pub enum SegmenterErr {
  #[error("{0}")]
  IOError(#[from] IOError),
}

#[derive(Debug, Default)]
pub struct SimpleSentenceBoundaryDetector {
  abbreviations: HashSet<String>,
}

impl SimpleSentenceBoundaryDetector {
  pub fn new<I: IntoIterator<Item = S>, S: AsRef<str>>(abbreviations: I) -> Self {
    let mut detector = SimpleSentenceBoundaryDetector::default();
    for abbreviation in abbreviations {
      detector.add_abbreviation(abbreviation.as_ref());
    }
    detector
  }
  pub fn read_abbreviations<P: AsRef<Path>>(&mut self, path: P) -> Result<&Self, SegmenterErr> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
      let line = line?;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      self.add_abbreviation(line);
    }
    Ok(self)
  }
  pub fn add_abbreviation(&mut self, abbreviation: &str) {
    let abbreviation = abbreviation.trim().trim_end_matches('.');
    if !abbreviation.is_empty() {
      self.abbreviations.insert(turkish_lowercase(abbreviation));
    }
  }
  pub fn is_abbreviation(&self, word: &str) -> bool {
    self.abbreviations.contains(&turkish_lowercase(word))
  }
  fn suppresses_boundary(&self, chars: &[(usize, char)], start: usize, end: usize) -> bool {
    // the word right before the period run
    let mut begin = start;
    while begin > 0 && chars[begin - 1].1.is_alphanumeric() {
      begin -= 1;
    }
    let word: String = chars[begin..start].iter().map(|(_, c)| *c).collect();
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
      return true;
    }
    if !word.is_empty() && self.is_abbreviation(&word) {
      return true;
    }
    match chars[end..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace()) {
      Some(next) => next.is_lowercase() || next.is_numeric(),
      None => false,
    }
  }
}

impl SegmentSentences for SimpleSentenceBoundaryDetector {
  fn get_sentences(&self, text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map(|(b, _)| *b).unwrap_or_else(|| text.len());
    let mut cuts = vec![];
    let mut i = 0;
    while i < chars.len() {
      let c = chars[i].1;
      if c == '\n' {
        let mut j = i + 1;
        while j < chars.len() && matches!(chars[j].1, ' ' | '\t' | '\r') {
          j += 1;
        }
        if j < chars.len() && chars[j].1 == '\n' {
          cuts.push(byte_at(i));
          i = j + 1;
          continue;
        }
        i += 1;
        continue;
      }
      if !BOUNDARY_CHARS.contains(&c) {
        i += 1;
        continue;
      }
      let mut j = i;
      let mut only_periods = true;
      while j < chars.len() && BOUNDARY_CHARS.contains(&chars[j].1) {
        only_periods &= chars[j].1 == '.';
        j += 1;
      }
      while j < chars.len() && CLOSING_CHARS.contains(&chars[j].1) {
        j += 1;
      }
      let followed_by_space = j == chars.len() || chars[j].1.is_whitespace();
      if followed_by_space && !(only_periods && self.suppresses_boundary(&chars, i, j)) {
        cuts.push(byte_at(j));
      }
      i = j;
    }

    let mut sentences = vec![];
    let mut start = 0;
    for cut in cuts.into_iter().chain(std::iter::once(text.len())) {
      let sentence = text[start..cut].trim();
      if !sentence.is_empty() {
        sentences.push(sentence.to_string());
      }
      start = cut;
    }
    sentences
  }
}
