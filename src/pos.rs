use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PrimaryPos {
  Noun,
  Adjective,
  Adverb,
  Conjunction,
  Interjection,
  Verb,
  Pronoun,
  Numeral,
  Determiner,
  PostPositive,
  Question,
  Duplicator,
  Punctuation,
  Unknown,
}

#[derive(Error, Debug)]
pub enum PosErr {
  #[error("key error {0}")]
  PosKeyErr(String),
}

impl PrimaryPos {
  pub fn as_str(self) -> &'static str {
    match self {
      PrimaryPos::Noun => "Noun",
      PrimaryPos::Adjective => "Adj",
      PrimaryPos::Adverb => "Adv",
      PrimaryPos::Conjunction => "Conj",
      PrimaryPos::Interjection => "Interj",
      PrimaryPos::Verb => "Verb",
      PrimaryPos::Pronoun => "Pron",
      PrimaryPos::Numeral => "Num",
      PrimaryPos::Determiner => "Det",
      PrimaryPos::PostPositive => "Postp",
      PrimaryPos::Question => "Ques",
      PrimaryPos::Duplicator => "Dup",
      PrimaryPos::Punctuation => "Punc",
      PrimaryPos::Unknown => "Unk",
    }
  }
}

impl fmt::Display for PrimaryPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PrimaryPos {
  type Err = PosErr;
  fn from_str(key: &str) -> Result<Self, Self::Err> {
    match key {
      "Noun" => Ok(PrimaryPos::Noun),
      "Adj" => Ok(PrimaryPos::Adjective),
      "Adv" => Ok(PrimaryPos::Adverb),
      "Conj" => Ok(PrimaryPos::Conjunction),
      "Interj" => Ok(PrimaryPos::Interjection),
      "Verb" => Ok(PrimaryPos::Verb),
      "Pron" => Ok(PrimaryPos::Pronoun),
      "Num" => Ok(PrimaryPos::Numeral),
      "Det" => Ok(PrimaryPos::Determiner),
      "Postp" => Ok(PrimaryPos::PostPositive),
      "Ques" => Ok(PrimaryPos::Question),
      "Dup" => Ok(PrimaryPos::Duplicator),
      "Punc" => Ok(PrimaryPos::Punctuation),
      "Unk" => Ok(PrimaryPos::Unknown),
      _ => Err(PosErr::PosKeyErr(key.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_string_forms_parse_back() {
    for pos in &[
      PrimaryPos::Noun,
      PrimaryPos::Verb,
      PrimaryPos::PostPositive,
      PrimaryPos::Punctuation,
      PrimaryPos::Unknown,
    ] {
      assert_eq!(*pos, pos.as_str().parse::<PrimaryPos>().unwrap());
    }
    assert_eq!("Punc", PrimaryPos::Punctuation.to_string());
    assert_eq!("Unk", format!("{}", PrimaryPos::Unknown));
  }

  #[test]
  fn test_invalid_key() {
    match "Noun_".parse::<PrimaryPos>() {
      Ok(_) => panic!("should throw key error"),
      Err(err) => assert_eq!("key error Noun_", format!("{}", err)),
    }
  }
}
