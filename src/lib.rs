pub mod alphabet;
pub mod applier;
pub mod ciphertext;
pub mod classic;
pub mod config;
pub mod consts;
pub mod dictionary;
pub mod error;
pub mod fitness;
pub mod key;
pub mod model;
pub mod optimizer;
pub mod pipeline;
pub mod redact;
// cmd and reports belong to the binary (main.rs).
