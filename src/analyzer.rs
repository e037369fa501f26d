use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon::{Lexicon, LexiconEntry};
use super::morph_parse::MorphParse;
use super::pos::PrimaryPos;
use super::sentence::{SentenceParse, Token};

lazy_static! {
  static ref TOKEN: Regex = Regex::new(
    r"(?:\p{L}|\p{M})+(?:['’](?:\p{L}|\p{M})+)?|\p{N}+(?:[.,:]\p{N}+)*|[\p{P}\p{S}]+|[^\s\p{Cf}]"
  )
  .unwrap();
  static ref PUNCTUATION: Regex = Regex::new(r"^[\p{P}\p{S}]+$").unwrap();
  static ref NUMBER: Regex = Regex::new(r"^\p{N}+(?:[.,:]\p{N}+)*$").unwrap();
}

const APOSTROPHES: [char; 2] = ['\'', '’'];

pub trait AnalyzeSentence: Send + Sync {
  /// Every token of the sentence appears in the result, unresolved ones tagged `Unk`.
  fn parse(&self, sentence: &str) -> SentenceParse;
}

pub struct LexiconAnalyzer {
  lexicon: Lexicon,
}

impl LexiconAnalyzer {
  pub fn new(lexicon: Lexicon) -> LexiconAnalyzer {
    LexiconAnalyzer { lexicon }
  }
  /// Tokens are slices of the input, so surfaces keep their original form.
  pub fn tokenize(&self, sentence: &str) -> Vec<String> {
    TOKEN
      .find_iter(sentence)
      .map(|m| m.as_str().to_string())
      .collect()
  }
  pub fn analyze(&self, surface: &str) -> Vec<MorphParse> {
    let parses = to_parses(self.lexicon.lookup(surface), surface);
    if !parses.is_empty() {
      return parses;
    }
    if let Some(index) = surface.find(&APOSTROPHES[..]) {
      let stem = &surface[..index];
      let parses = to_parses(self.lexicon.lookup(stem), surface);
      if !parses.is_empty() {
        return parses;
      }
      if stem.chars().next().map_or(false, char::is_uppercase) {
        return vec![MorphParse::new(stem, PrimaryPos::Noun, surface, 0)];
      }
    }
    if PUNCTUATION.is_match(surface) {
      vec![MorphParse::new(surface, PrimaryPos::Punctuation, surface, 0)]
    } else if NUMBER.is_match(surface) {
      vec![MorphParse::new(surface, PrimaryPos::Numeral, surface, 0)]
    } else {
      vec![MorphParse::unknown(surface)]
    }
  }
}

impl AnalyzeSentence for LexiconAnalyzer {
  fn parse(&self, sentence: &str) -> SentenceParse {
    let tokens = self
      .tokenize(sentence)
      .into_iter()
      .map(|surface| {
        let parses = self.analyze(&surface);
        Token::new(surface, parses)
      })
      .collect();
    SentenceParse::new(sentence, tokens)
  }
}

fn to_parses(entries: &[LexiconEntry], surface: &str) -> Vec<MorphParse> {
  entries
    .iter()
    .map(|e| MorphParse::new(e.lemma.as_str(), e.pos, surface, e.cost))
    .collect()
}
