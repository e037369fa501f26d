use super::pos::PrimaryPos;

pub const UNKNOWN_LEMMA: &str = "UNK";

/// One candidate analysis of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphParse {
  pub lemma: String,
  pub primary_pos: PrimaryPos,
  pub surface: String,
  pub cost: i32,
}

impl MorphParse {
  pub fn new<L: Into<String>, S: Into<String>>(
    lemma: L,
    primary_pos: PrimaryPos,
    surface: S,
    cost: i32,
  ) -> MorphParse {
    MorphParse {
      lemma: lemma.into(),
      primary_pos,
      surface: surface.into(),
      cost,
    }
  }
  pub fn unknown<S: Into<String>>(surface: S) -> MorphParse {
    MorphParse::new(UNKNOWN_LEMMA, PrimaryPos::Unknown, surface, 0)
  }
  pub fn is_punctuation(&self) -> bool {
    self.primary_pos == PrimaryPos::Punctuation
  }
  pub fn is_unknown(&self) -> bool {
    self.primary_pos == PrimaryPos::Unknown
  }
}
