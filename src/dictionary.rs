use crate::error::BreakResult;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Word list used both as the training corpus and for membership checks.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for w in words {
            dict.insert(w.as_ref());
        }
        dict
    }

    /// One word per line. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> BreakResult<Self> {
        let mut dict = Self::default();
        for line in reader.lines() {
            dict.insert(&line?);
        }
        Ok(dict)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BreakResult<Self> {
        let path = path.as_ref();
        let dict = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!("📖 Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self.lookup.insert(word.clone()) {
            self.words.push(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Words in load order, without duplicates.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
