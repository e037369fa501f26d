use super::morph_parse::MorphParse;

/// A surface token with its candidate parses, best first once disambiguated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  pub surface: String,
  pub parses: Vec<MorphParse>,
}

impl Token {
  pub fn new<S: Into<String>>(surface: S, parses: Vec<MorphParse>) -> Token {
    Token {
      surface: surface.into(),
      parses,
    }
  }
  pub fn best_parse(&self) -> Option<&MorphParse> {
    self.parses.first()
  }
  pub fn is_ambiguous(&self) -> bool {
    self.parses.len() > 1
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceParse {
  pub sentence: String,
  tokens: Vec<Token>,
}

impl SentenceParse {
  pub fn new<S: Into<String>>(sentence: S, tokens: Vec<Token>) -> SentenceParse {
    SentenceParse {
      sentence: sentence.into(),
      tokens,
    }
  }
  pub fn len(&self) -> usize {
    self.tokens.len()
  }
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
  pub fn get(&self, index: usize) -> Option<&Token> {
    self.tokens.get(index)
  }
  pub fn iter(&self) -> std::slice::Iter<'_, Token> {
    self.tokens.iter()
  }
  pub fn ambiguous_count(&self) -> usize {
    self.tokens.iter().filter(|t| t.is_ambiguous()).count()
  }
}

impl<'a> IntoIterator for &'a SentenceParse {
  type Item = &'a Token;
  type IntoIter = std::slice::Iter<'a, Token>;

  fn into_iter(self) -> Self::IntoIter {
    self.tokens.iter()
  }
}
