//! Contributor identity normalization
//!
//! Raw author strings are turned into canonical names here and nowhere else.
//! An author matching the distinguished contributor's marker resolves to the
//! distinguished identity (the contributor plus a co-attributed name), every
//! other author to a single title-cased name.

use crate::config::IdentityConfig;
use crate::models::Identity;
use anyhow::{bail, Result};

/// Resolves raw author names to identities.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    distinguished: String,
    /// Lowercased marker substring
    marker: String,
    identity: Identity,
}

impl IdentityResolver {
    /// Build a resolver.
    ///
    /// # Arguments
    /// * `distinguished` - Canonical name of the distinguished contributor
    /// * `marker` - Substring identifying the distinguished contributor's aliases
    /// * `co_attributed` - Optional second name credited alongside them
    pub fn new(distinguished: &str, marker: &str, co_attributed: Option<&str>) -> Result<Self> {
        if distinguished.trim().is_empty() {
            bail!("identity.name must not be empty");
        }
        if marker.trim().is_empty() {
            bail!("identity.marker must not be empty");
        }

        Ok(Self {
            distinguished: distinguished.to_string(),
            marker: marker.to_lowercase(),
            identity: Identity::pair(distinguished, co_attributed),
        })
    }

    pub fn from_config(config: &IdentityConfig) -> Result<Self> {
        Self::new(&config.name, &config.marker, config.co_attributed())
    }

    /// Name of the distinguished contributor.
    pub fn distinguished(&self) -> &str {
        &self.distinguished
    }

    /// The identity credited for the distinguished contributor's commits.
    pub fn distinguished_identity(&self) -> &Identity {
        &self.identity
    }

    /// Normalize a raw author name.
    pub fn normalize(&self, raw: &str) -> Identity {
        if raw.to_lowercase().contains(&self.marker) {
            self.identity.clone()
        } else {
            Identity::single(title_case(raw))
        }
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        let config = IdentityConfig::default();
        Self {
            distinguished: config.name.clone(),
            marker: config.marker.to_lowercase(),
            identity: Identity::pair(config.name.clone(), config.co_attributed()),
        }
    }
}

/// Title-case a name the way Python's `str.title()` does: the first cased
/// character of every run of cased characters gets its titlecase form, the
/// rest are lowercased. Uncased characters (digits, punctuation, CJK) are
/// copied through and end the current word.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.chars() {
        if is_cased(c) {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut out, c);
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Latin digraphs with a distinct titlecase form, as (upper, title, lower).
const DIGRAPHS: [(char, char, char); 4] = [
    ('\u{01C4}', '\u{01C5}', '\u{01C6}'),
    ('\u{01C7}', '\u{01C8}', '\u{01C9}'),
    ('\u{01CA}', '\u{01CB}', '\u{01CC}'),
    ('\u{01F1}', '\u{01F2}', '\u{01F3}'),
];

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || DIGRAPHS.iter().any(|&(_, title, _)| title == c)
}

fn push_titlecase(out: &mut String, c: char) {
    match DIGRAPHS
        .iter()
        .find(|&&(upper, title, lower)| c == upper || c == title || c == lower)
    {
        Some(&(_, title, _)) => out.push(title),
        None => out.extend(c.to_uppercase()),
    }
}
