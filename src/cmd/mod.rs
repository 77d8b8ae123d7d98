pub mod crack;
pub mod encrypt;

use clap::ValueEnum;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CipherMode {
    Caesar,
    Affine,
    Mono,
}

/// Writes `<prefix>_<mode>.txt` into `dir`.
pub fn write_output_file(
    dir: &Path,
    prefix: &str,
    mode: CipherMode,
    text: &str,
) -> std::io::Result<std::path::PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_{}.txt", prefix, mode));
    fs::write(&path, text)?;
    Ok(path)
}
