use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::{crate_name, crate_version, App, Arg, ArgMatches};
use log::{info, warn};

use corpus_stemmer::config::Config;
use corpus_stemmer::corpus::{CorpusDriver, OutputMode};
use corpus_stemmer::stemmer::Stemmer;

// Argument names
const FPATH_SETTING_ARG: &str = "fpath_setting";
const RESOURCE_DIR_ARG: &str = "resource_dir";
const MODE_ARG: &str = "mode";
const PARALLEL_ARG: &str = "parallel";
const VERBOSE_ARG: &str = "verbose";
const QUIET_ARG: &str = "quiet";
const INPUT_ARG: &str = "input";

fn unwrap<T, E: Error>(t: Result<T, E>) -> T {
  match t {
    Ok(t) => t,
    Err(e) => {
      eprintln!("{}: error: {}", crate_name!(), e);
      exit(1);
    }
  }
}

fn input_validator(input: String) -> Result<(), String> {
  if Path::new(&input).exists() {
    Ok(())
  } else {
    Err(format!("{}: error: {} doesn't exist", crate_name!(), input))
  }
}

fn init_logger(args: &ArgMatches) {
  if let Err(e) = stderrlog::new()
    .module("corpus_stemmer")
    .quiet(args.is_present(QUIET_ARG))
    .verbosity(args.occurrences_of(VERBOSE_ARG) as usize + 1)
    .init()
  {
    eprintln!("{}: failed to set up logging: {}", crate_name!(), e);
  }
}

fn stem(args: &ArgMatches) {
  let config = unwrap(Config::setup(
    args.value_of(FPATH_SETTING_ARG),
    args.value_of(RESOURCE_DIR_ARG),
  ));
  let stemmer = unwrap(Stemmer::setup(&config));

  let mut driver = unwrap(CorpusDriver::from_config(&stemmer, &config));
  if let Some(mode) = args.value_of(MODE_ARG) {
    driver = driver.mode(unwrap(mode.parse::<OutputMode>()));
  }
  if args.is_present(PARALLEL_ARG) {
    driver = driver.parallel(true);
  }

  let input = args.value_of(INPUT_ARG).unwrap_or_default();
  info!("stemming {} ({} output)", input, driver.get_mode());
  let summary = unwrap(driver.run(input));
  for output in summary.outputs.iter() {
    info!("wrote {}", output.display());
  }
  let failed = summary.failed();
  if !failed.is_empty() {
    warn!(
      "{} of {} files could not be processed",
      failed.len(),
      summary.outcomes.len()
    );
  }
}

fn main() {
  let app = App::new("Corpus Stemmer")
    .version(crate_version!())
    .about("Converts text files into lemma_POS stem sequences")
    .arg(
      Arg::with_name(FPATH_SETTING_ARG)
        .short("r")
        .long("setting")
        .takes_value(true)
        .help("the setting file in JSON format"),
    )
    .arg(
      Arg::with_name(RESOURCE_DIR_ARG)
        .short("d")
        .long("resource-dir")
        .takes_value(true)
        .help("directory holding the lexicon and model files"),
    )
    .arg(
      Arg::with_name(MODE_ARG)
        .short("m")
        .long("mode")
        .takes_value(true)
        .possible_values(&["single", "multiple"])
        .help("one comparison report (single) or one stem file per input (multiple)"),
    )
    .arg(
      Arg::with_name(PARALLEL_ARG)
        .short("p")
        .long("parallel")
        .help("stem files on a thread pool"),
    )
    .arg(
      Arg::with_name(VERBOSE_ARG)
        .short("v")
        .multiple(true)
        .help("increase log verbosity"),
    )
    .arg(
      Arg::with_name(QUIET_ARG)
        .short("q")
        .help("silence all log output"),
    )
    .arg(
      Arg::with_name(INPUT_ARG)
        .required(true)
        .index(1)
        .help("a text file or a directory of text files, utf-8")
        .validator(input_validator),
    );
  let matches = app.get_matches();
  init_logger(&matches);
  stem(&matches);
}
