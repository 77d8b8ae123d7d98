use super::{write_output_file, CipherMode};
use crate::reports;
use clap::{ArgMatches, Args};
use quadbreak::alphabet::Alphabet;
use quadbreak::classic::{affine, caesar};
use quadbreak::config::SearchParams;
use quadbreak::dictionary::Dictionary;
use quadbreak::error::{BreakError, BreakResult};
use quadbreak::key::Key;
use quadbreak::optimizer::ProgressCallback;
use quadbreak::pipeline::break_monoalphabetic;
use quadbreak::redact;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Args, Debug, Clone)]
pub struct BreakArgs {
    /// Cipher the input was encrypted with
    pub cipher: CipherMode,

    /// Ciphertext file
    pub file: PathBuf,

    /// Word list used for validation (and as the corpus unless --corpus is given)
    #[arg(short, long, default_value = "dictionary.txt")]
    pub dictionary: PathBuf,

    /// Separate word list to train the quadgram model on
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// JSON file with search parameters; explicit flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Write the decryption without redacting unknown words
    #[arg(long, default_value_t = false)]
    pub no_redact: bool,

    /// Print a JSON summary instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct BreakReport<'a> {
    cipher: String,
    key: Option<String>,
    score: Option<u64>,
    trials: Option<usize>,
    degenerate: bool,
    coverage: f32,
    output: &'a str,
}

struct LogProgress;

impl ProgressCallback for LogProgress {
    fn on_progress(&self, trials: usize, best_score: u64, _best_key: &Key) -> bool {
        debug!("    {:6} trials | best {}", trials, best_score);
        true
    }
}

fn resolve_params(args: &BreakArgs, matches: &ArgMatches) -> BreakResult<SearchParams> {
    match &args.config {
        Some(path) => {
            info!("⚙️  Loading search parameters from: {}", path.display());
            let mut params = SearchParams::load_from_file(path)?;
            params.merge_from_cli(&args.search, matches);
            Ok(params)
        }
        None => Ok(args.search.clone()),
    }
}

pub fn run(args: BreakArgs, matches: &ArgMatches) -> BreakResult<()> {
    let ciphertext = fs::read_to_string(&args.file)?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;

    let (decrypted, key, score, trials, degenerate) = match args.cipher {
        CipherMode::Caesar => {
            let found = caesar::crack(&ciphertext, &dictionary)
                .ok_or_else(|| BreakError::Validation("No valid Caesar decryption found".into()))?;
            (found.plaintext, None, None, None, false)
        }
        CipherMode::Affine => {
            let found = affine::crack(&ciphertext, &dictionary)
                .ok_or_else(|| BreakError::Validation("No valid Affine decryption found".into()))?;
            (found.plaintext, None, None, None, false)
        }
        CipherMode::Mono => {
            let params = resolve_params(&args, matches)?;
            let corpus = match &args.corpus {
                Some(path) => Dictionary::load_from_file(path)?,
                None => dictionary.clone(),
            };
            let alphabet = Alphabet::english();
            let result = break_monoalphabetic(
                &ciphertext,
                &corpus,
                &alphabet,
                &params,
                args.seed,
                LogProgress,
            )?;

            if !args.json {
                reports::print_key_grid(&alphabet, &result.key);
                reports::print_search_summary(&result);
            }

            let key_path = args.out_dir.join("break_mono.key");
            fs::create_dir_all(&args.out_dir)?;
            fs::write(&key_path, format!("{}\n", result.key))?;
            info!("🔑 Key written to {}", key_path.display());

            let degenerate = result.search.is_degenerate();
            (
                result.plaintext,
                Some(result.key),
                Some(result.score),
                Some(result.search.trials),
                degenerate,
            )
        }
    };

    if degenerate {
        warn!("⚠️  Decryption has no statistical support; treat the output as unreliable.");
    }

    let coverage = redact::dictionary_coverage(&decrypted, &dictionary);
    let output = if args.no_redact {
        decrypted
    } else {
        redact::validate_text(&decrypted, &dictionary)
    };

    let path = write_output_file(&args.out_dir, "break", args.cipher, &output)?;
    info!("💾 Wrote {} ({:.0}% dictionary words)", path.display(), coverage * 100.0);

    if args.json {
        let report = BreakReport {
            cipher: args.cipher.to_string(),
            key,
            score,
            trials,
            degenerate,
            coverage,
            output: &output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", output);
    }

    Ok(())
}
