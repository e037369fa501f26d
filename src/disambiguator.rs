use log::{debug, log_enabled, Level};

use super::morph_parse::MorphParse;
use super::sentence::{SentenceParse, Token};
use super::transition::{State, TransitionMatrix};

pub trait Disambiguate: Send + Sync {
  /// Returns a copy of `sentence` whose parse lists are ranked best first.
  /// No parse is ever removed.
  fn disambiguate(&self, sentence: &SentenceParse) -> SentenceParse;
}

#[derive(Clone, Copy, Debug)]
struct ViterbiNode {
  state: State,
  total_cost: i64,
  best_previous_node: Option<usize>,
}

/// First order Markov model over part of speech tags, decoded with Viterbi.
#[derive(Debug, Default)]
pub struct MarkovDisambiguator {
  transitions: TransitionMatrix,
}

impl MarkovDisambiguator {
  pub fn new(transitions: TransitionMatrix) -> MarkovDisambiguator {
    MarkovDisambiguator { transitions }
  }
  fn connect_node(&self, previous: &[ViterbiNode], state: State, cost: i64) -> ViterbiNode {
    let mut node = ViterbiNode {
      state,
      total_cost: i64::max_value(),
      best_previous_node: None,
    };
    for (index, l_node) in previous.iter().enumerate() {
      let connect_cost = self.transitions.get_cost(l_node.state, state) as i64;
      let total_cost = l_node.total_cost + connect_cost;
      // strict comparison: the earlier candidate wins a tie
      if total_cost < node.total_cost {
        node.total_cost = total_cost;
        node.best_previous_node = Some(index);
      }
    }
    node.total_cost += cost;
    node
  }
  /// Index of the chosen parse for every token, `None` for tokens without parses.
  pub fn get_best_path(&self, sentence: &SentenceParse) -> Vec<Option<usize>> {
    let bos_node = ViterbiNode {
      state: State::Bos,
      total_cost: 0,
      best_previous_node: None,
    };
    let mut columns: Vec<(usize, Vec<ViterbiNode>)> = vec![];
    for (token_index, token) in sentence.iter().enumerate() {
      if token.parses.is_empty() {
        continue;
      }
      let column: Vec<ViterbiNode> = {
        let previous = columns
          .last()
          .map(|(_, nodes)| nodes.as_slice())
          .unwrap_or_else(|| std::slice::from_ref(&bos_node));
        token
          .parses
          .iter()
          .map(|parse| {
            self.connect_node(previous, State::Pos(parse.primary_pos), parse.cost as i64)
          })
          .collect()
      };
      columns.push((token_index, column));
    }

    let mut path = vec![None; sentence.len()];
    let last = match columns.last() {
      Some((_, nodes)) => nodes,
      None => return path,
    };
    let eos_node = self.connect_node(last, State::Eos, 0);
    let mut node = eos_node.best_previous_node;
    for (token_index, nodes) in columns.iter().rev() {
      let index = match node {
        Some(index) => index,
        None => break,
      };
      path[*token_index] = Some(index);
      node = nodes[index].best_previous_node;
    }
    debug!("best path cost {}", eos_node.total_cost);
    path
  }
}

impl Disambiguate for MarkovDisambiguator {
  fn disambiguate(&self, sentence: &SentenceParse) -> SentenceParse {
    let path = self.get_best_path(sentence);
    let tokens: Vec<Token> = sentence
      .iter()
      .zip(path)
      .map(|(token, best)| Token::new(token.surface.as_str(), rank(&token.parses, best)))
      .collect();
    log_path(&tokens);
    SentenceParse::new(sentence.sentence.as_str(), tokens)
  }
}

fn rank(parses: &[MorphParse], best: Option<usize>) -> Vec<MorphParse> {
  let best = match best {
    Some(best) if best < parses.len() => best,
    _ => return parses.to_vec(),
  };
  let mut rest: Vec<MorphParse> = parses
    .iter()
    .enumerate()
    .filter(|(i, _)| *i != best)
    .map(|(_, p)| p.clone())
    .collect();
  rest.sort_by_key(|p| p.cost);
  let mut ranked = Vec::with_capacity(parses.len());
  ranked.push(parses[best].clone());
  ranked.extend(rest);
  ranked
}

fn log_path(tokens: &[Token]) {
  if !log_enabled!(Level::Debug) {
    return;
  }
  for (i, token) in tokens.iter().enumerate() {
    if let Some(parse) = token.best_parse() {
      debug!(
        "{}: {} {} {} ({} candidates)",
        i,
        token.surface,
        parse.lemma,
        parse.primary_pos,
        token.parses.len()
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pos::PrimaryPos;

  fn parse(lemma: &str, pos: PrimaryPos, surface: &str, cost: i32) -> MorphParse {
    MorphParse::new(lemma, pos, surface, cost)
  }

  fn build_disambiguator() -> MarkovDisambiguator {
    let mut transitions = TransitionMatrix::default();
    transitions
      .read_from(
        "* * 100\nAdj Noun 10\nAdv Verb 10\nDet Noun 5\nNoun Verb 20\n".as_bytes(),
      )
      .unwrap();
    MarkovDisambiguator::new(transitions)
  }

  #[test]
  fn test_context_selects_parse() {
    let disambiguator = build_disambiguator();
    let guzel = vec![
      parse("güzel", PrimaryPos::Adverb, "güzel", 0),
      parse("güzel", PrimaryPos::Adjective, "güzel", 0),
    ];
    let before_noun = SentenceParse::new(
      "güzel ev",
      vec![
        Token::new("güzel", guzel.clone()),
        Token::new("ev", vec![parse("ev", PrimaryPos::Noun, "ev", 0)]),
      ],
    );
    let ranked = disambiguator.disambiguate(&before_noun);
    assert_eq!(
      PrimaryPos::Adjective,
      ranked.get(0).unwrap().best_parse().unwrap().primary_pos
    );
    assert_eq!(2, ranked.get(0).unwrap().parses.len());

    let before_verb = SentenceParse::new(
      "güzel gitti",
      vec![
        Token::new("güzel", guzel),
        Token::new("gitti", vec![parse("git", PrimaryPos::Verb, "gitti", 0)]),
      ],
    );
    let ranked = disambiguator.disambiguate(&before_verb);
    assert_eq!(
      PrimaryPos::Adverb,
      ranked.get(0).unwrap().best_parse().unwrap().primary_pos
    );
  }

  #[test]
  fn test_tie_keeps_first_candidate() {
    let disambiguator = MarkovDisambiguator::default();
    let sentence = SentenceParse::new(
      "yüz",
      vec![Token::new(
        "yüz",
        vec![
          parse("yüz", PrimaryPos::Numeral, "yüz", 0),
          parse("yüz", PrimaryPos::Noun, "yüz", 0),
          parse("yüz", PrimaryPos::Verb, "yüz", 0),
        ],
      )],
    );
    let ranked = disambiguator.disambiguate(&sentence);
    let pos: Vec<PrimaryPos> = ranked
      .get(0)
      .unwrap()
      .parses
      .iter()
      .map(|p| p.primary_pos)
      .collect();
    assert_eq!(
      vec![PrimaryPos::Numeral, PrimaryPos::Noun, PrimaryPos::Verb],
      pos
    );
  }

  #[test]
  fn test_remaining_parses_sorted_by_cost() {
    let disambiguator = MarkovDisambiguator::default();
    let sentence = SentenceParse::new(
      "bir",
      vec![Token::new(
        "bir",
        vec![
          parse("bir", PrimaryPos::Adverb, "bir", 30),
          parse("bir", PrimaryPos::Numeral, "bir", 1),
          parse("bir", PrimaryPos::Determiner, "bir", 10),
        ],
      )],
    );
    let ranked = disambiguator.disambiguate(&sentence);
    let costs: Vec<i32> = ranked.get(0).unwrap().parses.iter().map(|p| p.cost).collect();
    assert_eq!(vec![1, 10, 30], costs);
  }

  #[test]
  fn test_tokens_without_parses_pass_through() {
    let disambiguator = build_disambiguator();
    let sentence = SentenceParse::new(
      "bu ev",
      vec![
        Token::new(
          "bu",
          vec![
            parse("bu", PrimaryPos::Pronoun, "bu", 0),
            parse("bu", PrimaryPos::Determiner, "bu", 0),
          ],
        ),
        Token::new("", vec![]),
        Token::new("ev", vec![parse("ev", PrimaryPos::Noun, "ev", 0)]),
      ],
    );
    let path = disambiguator.get_best_path(&sentence);
    assert_eq!(vec![Some(1), None, Some(0)], path);
    let ranked = disambiguator.disambiguate(&sentence);
    assert_eq!(3, ranked.len());
    assert!(ranked.get(1).unwrap().parses.is_empty());
    assert_eq!(
      PrimaryPos::Determiner,
      ranked.get(0).unwrap().best_parse().unwrap().primary_pos
    );
  }

  #[test]
  fn test_input_is_not_mutated() {
    let disambiguator = build_disambiguator();
    let sentence = SentenceParse::new(
      "güzel ev",
      vec![
        Token::new(
          "güzel",
          vec![
            parse("güzel", PrimaryPos::Adverb, "güzel", 0),
            parse("güzel", PrimaryPos::Adjective, "güzel", 0),
          ],
        ),
        Token::new("ev", vec![parse("ev", PrimaryPos::Noun, "ev", 0)]),
      ],
    );
    let before = sentence.clone();
    let ranked = disambiguator.disambiguate(&sentence);
    assert_eq!(before, sentence);
    assert_ne!(sentence, ranked);
  }

  #[test]
  fn test_empty_sentence() {
    let disambiguator = MarkovDisambiguator::default();
    let sentence = SentenceParse::new("", vec![]);
    assert!(disambiguator.get_best_path(&sentence).is_empty());
    assert!(disambiguator.disambiguate(&sentence).is_empty());
  }
}
