use std::fs;
use std::io::Error as IOError;
use std::path::Path;
use std::string::FromUtf8Error;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use super::analyzer::{AnalyzeSentence, LexiconAnalyzer};
use super::config::{Config, ConfigErr};
use super::disambiguator::{Disambiguate, MarkovDisambiguator};
use super::lexicon::{Lexicon, LexiconErr};
use super::pos::PrimaryPos;
use super::segmenter::{SegmentSentences, SegmenterErr, SimpleSentenceBoundaryDetector};
use super::sentence::SentenceParse;
use super::stem_record::StemRecord;
use super::transition::{TransitionErr, TransitionMatrix};

#[derive(Error, Debug)]
pub enum StemmerErr {
  #[error("{0}")]
  IOError(#[from] IOError),
  #[error("{0}")]
  FromUtf8Error(#[from] FromUtf8Error),
  #[error("{0}")]
  ConfigErr(#[from] ConfigErr),
  #[error("{0}")]
  LexiconErr(#[from] LexiconErr),
  #[error("{0}")]
  TransitionErr(#[from] TransitionErr),
  #[error("{0}")]
  SegmenterErr(#[from] SegmenterErr),
}

/// Stems of one disambiguated sentence, in token order.
///
/// Only the top ranked parse of a token is looked at. Punctuation is dropped,
/// unknown words keep their surface form and tokens without parses are skipped.
pub fn extract_stems(sentence: &SentenceParse) -> Vec<StemRecord> {
  sentence
    .iter()
    .filter_map(|token| {
      let parse = token.best_parse()?;
      match parse.primary_pos {
        PrimaryPos::Punctuation => None,
        PrimaryPos::Unknown => Some(StemRecord::new(
          token.surface.as_str(),
          PrimaryPos::Unknown,
        )),
        pos => Some(StemRecord::new(parse.lemma.as_str(), pos)),
      }
    })
    .collect()
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strict UTF-8. A leading byte order mark is dropped.
pub fn read_file_to_string<P: AsRef<Path>>(path: P) -> Result<String, StemmerErr> {
  let text = String::from_utf8(fs::read(path)?)?;
  match text.strip_prefix(BYTE_ORDER_MARK) {
    Some(stripped) => Ok(stripped.to_string()),
    None => Ok(text),
  }
}

/// Segmenter, analyzer and disambiguator chained into one service. Built once
/// and shared across files.
pub struct Stemmer {
  segmenter: Arc<dyn SegmentSentences>,
  analyzer: Arc<dyn AnalyzeSentence>,
  disambiguator: Arc<dyn Disambiguate>,
}

impl Stemmer {
  pub fn new(
    segmenter: Arc<dyn SegmentSentences>,
    analyzer: Arc<dyn AnalyzeSentence>,
    disambiguator: Arc<dyn Disambiguate>,
  ) -> Stemmer {
    Stemmer {
      segmenter,
      analyzer,
      disambiguator,
    }
  }
  pub fn setup(config: &Config) -> Result<Stemmer, StemmerErr> {
    let mut lexicon = Lexicon::default();
    for path in config.lexicon_paths()? {
      lexicon.read_lexicon(&path)?;
    }
    info!("{} lexicon entries", lexicon.len());

    let mut transitions = TransitionMatrix::default();
    if let Some(path) = config.transition_path() {
      transitions.read_transition_definition(&path)?;
      info!("{} transitions", transitions.len());
    }

    let mut segmenter = SimpleSentenceBoundaryDetector::default();
    if let Some(path) = config.abbreviation_path() {
      segmenter.read_abbreviations(&path)?;
    }

    Ok(Stemmer::new(
      Arc::new(segmenter),
      Arc::new(LexiconAnalyzer::new(lexicon)),
      Arc::new(MarkovDisambiguator::new(transitions)),
    ))
  }
  pub fn get_sentences(&self, text: &str) -> Vec<String> {
    self.segmenter.get_sentences(text)
  }
  pub fn sentence_stems(&self, sentence: &str) -> Vec<StemRecord> {
    let parse = self.analyzer.parse(sentence);
    let parse = self.disambiguator.disambiguate(&parse);
    debug!(
      "{} tokens, {} ambiguous: {}",
      parse.len(),
      parse.ambiguous_count(),
      sentence
    );
    extract_stems(&parse)
  }
  pub fn stems<T: AsRef<str>>(&self, text: T) -> Vec<StemRecord> {
    self
      .get_sentences(text.as_ref())
      .iter()
      .flat_map(|sentence| self.sentence_stems(sentence))
      .collect()
  }
  pub fn stems_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<StemRecord>, StemmerErr> {
    Ok(self.stems(read_file_to_string(path)?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::morph_parse::MorphParse;
  use crate::sentence::Token;
  use crate::stem_record::join_stems;
  use std::collections::HashMap;
  use std::fs::{create_dir_all, remove_dir_all, write};
  use std::path::PathBuf;

  struct DictionaryAnalyzer {
    words: HashMap<&'static str, (&'static str, PrimaryPos)>,
  }

  impl AnalyzeSentence for DictionaryAnalyzer {
    fn parse(&self, sentence: &str) -> SentenceParse {
      let tokens = sentence
        .split_whitespace()
        .flat_map(|word| {
          let mut tokens = vec![];
          let (word, period) = match word.strip_suffix('.') {
            Some(w) => (w, true),
            None => (word, false),
          };
          let parse = match self.words.get(word) {
            Some((lemma, pos)) => MorphParse::new(*lemma, *pos, word, 0),
            None => MorphParse::unknown(word),
          };
          tokens.push(Token::new(word, vec![parse]));
          if period {
            tokens.push(Token::new(
              ".",
              vec![MorphParse::new(".", PrimaryPos::Punctuation, ".", 0)],
            ));
          }
          tokens
        })
        .collect();
      SentenceParse::new(sentence, tokens)
    }
  }

  struct KeepOrder;

  impl Disambiguate for KeepOrder {
    fn disambiguate(&self, sentence: &SentenceParse) -> SentenceParse {
      sentence.clone()
    }
  }

  fn build_stemmer() -> Stemmer {
    let mut words = HashMap::new();
    words.insert("Ali", ("Ali", PrimaryPos::Noun));
    words.insert("eve", ("ev", PrimaryPos::Noun));
    words.insert("gitti", ("git", PrimaryPos::Verb));
    words.insert("geldi", ("gel", PrimaryPos::Verb));
    Stemmer::new(
      Arc::new(SimpleSentenceBoundaryDetector::default()),
      Arc::new(DictionaryAnalyzer { words }),
      Arc::new(KeepOrder),
    )
  }

  fn parse(lemma: &str, pos: PrimaryPos, surface: &str) -> MorphParse {
    MorphParse::new(lemma, pos, surface, 0)
  }

  fn resources_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
      .join("corpus_stemmer_test")
      .join(name);
    create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn test_extract_stems() {
    let sentence = SentenceParse::new(
      "Ali eve gitti.",
      vec![
        Token::new("Ali", vec![parse("Ali", PrimaryPos::Noun, "Ali")]),
        Token::new("eve", vec![parse("ev", PrimaryPos::Noun, "eve")]),
        Token::new("gitti", vec![parse("git", PrimaryPos::Verb, "gitti")]),
        Token::new(".", vec![parse(".", PrimaryPos::Punctuation, ".")]),
      ],
    );
    let stems = extract_stems(&sentence);
    assert_eq!(
      vec!["Ali_Noun", "ev_Noun", "git_Verb"],
      stems.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    );
    assert!(stems.len() < sentence.len());
  }

  #[test]
  fn test_extract_stems_uses_only_top_parse() {
    let sentence = SentenceParse::new(
      "yüz",
      vec![Token::new(
        "yüz",
        vec![
          parse("yüz", PrimaryPos::Verb, "yüz"),
          parse("yüz", PrimaryPos::Punctuation, "yüz"),
          parse("yüz", PrimaryPos::Noun, "yüz"),
        ],
      )],
    );
    assert_eq!(
      vec![StemRecord::new("yüz", PrimaryPos::Verb)],
      extract_stems(&sentence)
    );
  }

  #[test]
  fn test_extract_stems_unknown_uses_surface() {
    let sentence = SentenceParse::new(
      "Schwarzenegger geldi",
      vec![
        Token::new("Schwarzenegger", vec![MorphParse::unknown("Schwarzenegger")]),
        Token::new("geldi", vec![parse("gel", PrimaryPos::Verb, "geldi")]),
      ],
    );
    assert_eq!(
      vec![
        StemRecord::new("Schwarzenegger", PrimaryPos::Unknown),
        StemRecord::new("gel", PrimaryPos::Verb),
      ],
      extract_stems(&sentence)
    );
  }

  #[test]
  fn test_extract_stems_skips_tokens_without_parses() {
    let sentence = SentenceParse::new(
      "a , b",
      vec![
        Token::new("a", vec![parse("a", PrimaryPos::Noun, "a")]),
        Token::new(",", vec![]),
        Token::new("b", vec![parse("b", PrimaryPos::Adjective, "b")]),
      ],
    );
    assert_eq!("a_Noun b_Adj", join_stems(&extract_stems(&sentence)));
    assert!(extract_stems(&SentenceParse::default()).is_empty());
  }

  #[test]
  fn test_extract_stems_without_punctuation_keeps_every_token() {
    let sentence = SentenceParse::new(
      "eve gitti",
      vec![
        Token::new("eve", vec![parse("ev", PrimaryPos::Noun, "eve")]),
        Token::new("gitti", vec![parse("git", PrimaryPos::Verb, "gitti")]),
      ],
    );
    assert_eq!(sentence.len(), extract_stems(&sentence).len());
  }

  #[test]
  fn test_stems_concatenates_sentences() {
    let stemmer = build_stemmer();
    assert_eq!(
      "Ali_Noun ev_Noun git_Verb Ali_Noun gel_Verb",
      join_stems(&stemmer.stems("Ali eve gitti. Ali geldi."))
    );
    assert_eq!(
      "Ali_Noun Schwarzenegger_Unk",
      join_stems(&stemmer.stems("Ali Schwarzenegger."))
    );
    assert!(stemmer.stems("").is_empty());
  }

  #[test]
  fn test_stems_from_path() {
    let dir = resources_test_dir("stemmer_read");
    let path = dir.join("input.txt");
    write(&path, "Ali eve gitti.").unwrap();
    let stems = build_stemmer().stems_from_path(&path).unwrap();
    assert_eq!("Ali_Noun ev_Noun git_Verb", join_stems(&stems));

    let with_bom = dir.join("bom.txt");
    write(&with_bom, "\u{feff}Ali geldi.").unwrap();
    assert_eq!("Ali geldi.", read_file_to_string(&with_bom).unwrap());

    let invalid = dir.join("invalid.txt");
    write(&invalid, vec![0xffu8, 0xfe, 0x41]).unwrap();
    match build_stemmer().stems_from_path(&invalid) {
      Ok(_) => panic!("should throw decode error"),
      Err(StemmerErr::FromUtf8Error(_)) => (),
      Err(err) => panic!("unexpected error {}", err),
    }
    remove_dir_all(dir).unwrap();
  }

  #[test]
  fn test_setup_with_default_resources() {
    let dir = resources_test_dir("stemmer_setup");
    let config = Config::setup(None, Some(dir.to_str().unwrap())).unwrap();
    let stemmer = Stemmer::setup(&config).unwrap();
    assert_eq!(
      "Ali_Noun ev_Noun git_Verb Schwarzenegger_Unk gel_Verb",
      join_stems(&stemmer.stems("Ali eve gitti. Schwarzenegger geldi."))
    );
    assert_eq!(
      "Dr_Unk Ahmet_Noun okul_Noun git_Verb",
      join_stems(&stemmer.stems("Dr. Ahmet okula gitti."))
    );
    assert_eq!(
      "cafe\u{301}_Unk gel_Verb",
      join_stems(&stemmer.stems("cafe\u{301} geldi."))
    );
    assert_eq!(
      "Ali_Noun gel_Verb",
      join_stems(&stemmer.stems("\u{feff}Ali geldi."))
    );
    remove_dir_all(dir).unwrap();
  }
}
