//! ```no_run
//! use corpus_stemmer::prelude::*;
//!
//! let config = Config::setup(None, None).unwrap();
//! let stemmer = Stemmer::setup(&config).unwrap();
//!
//! // lemma_POS per token, punctuation dropped, unknown words keep their surface
//! let stems: Vec<String> = stemmer
//!   .stems("Ali eve gitti. Schwarzenegger geldi.")
//!   .iter()
//!   .map(|s| s.to_string())
//!   .collect();
//! println!("{}", stems.join(" "));
//! // => Ali_Noun ev_Noun git_Verb Schwarzenegger_Unk gel_Verb
//!
//! // Whole corpus: one comparison report next to the directory
//! let summary = CorpusDriver::new(&stemmer, OutputMode::SingleFile)
//!   .run("data/corpus")
//!   .unwrap();
//! println!("{:?}", summary.outputs);
//! // => ["data/zemberek_comparison.txt"]
//! ```

#![crate_name = "corpus_stemmer"]

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod disambiguator;
pub mod lexicon;
pub mod morph_parse;
pub mod pos;
mod resources;
pub mod segmenter;
pub mod sentence;
pub mod stem_record;
pub mod stemmer;
pub mod transition;

pub mod prelude {
  pub use crate::config::Config;
  pub use crate::corpus::{CorpusDriver, OutputMode};
  pub use crate::stem_record::StemRecord;
  pub use crate::stemmer::Stemmer;
}
