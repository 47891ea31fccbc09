//! Prompt token estimation
//!
//! Counts tokens with tiktoken (cl100k_base) and falls back to a chars/4
//! heuristic when the encoding cannot be loaded. Used only to flag oversized
//! prompts in the log; nothing is ever trimmed based on this estimate.

use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// Advisory threshold above which a prompt-size warning is logged
pub const PROMPT_TOKEN_WARN_THRESHOLD: usize = 100_000;

// Lazy-initialized BPE encoding (loaded once on first use)
static CL100K_BPE: Lazy<Option<CoreBPE>> = Lazy::new(|| cl100k_base().ok());

/// Estimate the token count of a text.
pub fn estimate_tokens(text: &str) -> usize {
    match CL100K_BPE.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => heuristic_tokens(text),
    }
}

/// Fast heuristic: roughly 4 characters per token.
fn heuristic_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
