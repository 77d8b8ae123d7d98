use super::{write_output_file, CipherMode};
use clap::Args;
use quadbreak::alphabet::Alphabet;
use quadbreak::applier::KeyApplier;
use quadbreak::classic::{affine, caesar};
use quadbreak::error::{BreakError, BreakResult};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Cipher to apply
    pub cipher: CipherMode,

    /// Plaintext file
    pub file: PathBuf,

    /// Shift for the Caesar cipher
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub shift: Option<i32>,

    /// Multiplier for the Affine cipher (coprime with 26)
    #[arg(short = 'a')]
    pub a: Option<i32>,

    /// Offset for the Affine cipher
    #[arg(short = 'b')]
    pub b: Option<i32>,

    /// 26-letter substitution alphabet for the Monoalphabetic cipher
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

fn missing(what: &str, mode: CipherMode) -> BreakError {
    BreakError::Config(format!("{} is required for the {} cipher", what, mode))
}

pub fn run(args: EncryptArgs) -> BreakResult<()> {
    let text = fs::read_to_string(&args.file)?;

    let result = match args.cipher {
        CipherMode::Caesar => {
            let shift = args.shift.ok_or_else(|| missing("--shift", args.cipher))?;
            caesar::encrypt(&text, shift.rem_euclid(26))
        }
        CipherMode::Affine => {
            let a = args.a.ok_or_else(|| missing("-a", args.cipher))?;
            let b = args.b.ok_or_else(|| missing("-b", args.cipher))?;
            affine::encrypt(&text, a, b)?
        }
        CipherMode::Mono => {
            let key = args.key.as_deref().ok_or_else(|| missing("--key", args.cipher))?;
            KeyApplier::new(&Alphabet::english(), &key.to_lowercase())?.apply(&text)
        }
    };

    let path = write_output_file(&args.out_dir, "encrypt", args.cipher, &result)?;
    info!("💾 Wrote {}", path.display());
    println!("{}", result);
    Ok(())
}
