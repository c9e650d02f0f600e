//! Identity-keyed memoization of assembled sentences
//!
//! A [`SentenceCache`] owns exactly one slot. It recomputes when the identity
//! of its input changes and never compares contents: two equal sequences
//! behind different `Arc`s, or the same contents under a new token, are
//! misses. The cache is meant to live at a single call site and is mutated
//! through `&mut self`, so it needs no locking.

use std::sync::Arc;

use crate::assembler::{Assembler, Sentence};
use crate::segment::Segment;

/// Caller-supplied identity of an input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityToken(u64);

impl IdentityToken {
    /// Wrap a caller-chosen version number
    pub const fn new(version: u64) -> Self {
        Self(version)
    }

    /// The next version
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The raw version number
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
enum CacheKey {
    Vacant,
    Absent,
    // Holding the Arc keeps its allocation, and so its identity, alive
    Shared(Arc<[Segment]>),
    Token(IdentityToken),
}

impl CacheKey {
    fn matches_shared(&self, segments: Option<&Arc<[Segment]>>) -> bool {
        match (self, segments) {
            (CacheKey::Absent, None) => true,
            (CacheKey::Shared(held), Some(segments)) => Arc::ptr_eq(held, segments),
            _ => false,
        }
    }
}

/// Single-slot cache of the last assembled sentence
#[derive(Debug)]
pub struct SentenceCache {
    assembler: Assembler,
    key: CacheKey,
    sentence: Sentence,
    recomputations: usize,
}

impl SentenceCache {
    /// Create an empty cache using the default assembler
    pub fn new() -> Self {
        Self::with_assembler(Assembler::new())
    }

    /// Create an empty cache using a configured assembler
    pub fn with_assembler(assembler: Assembler) -> Self {
        Self {
            assembler,
            key: CacheKey::Vacant,
            sentence: Sentence::empty(),
            recomputations: 0,
        }
    }

    /// Assemble `segments`, reusing the cached sentence while the same `Arc`
    /// (or absence) is passed again
    pub fn use_assembled(&mut self, segments: Option<&Arc<[Segment]>>) -> &Sentence {
        let hit = self.key.matches_shared(segments);
        if !hit {
            let key = match segments {
                Some(segments) => CacheKey::Shared(Arc::clone(segments)),
                None => CacheKey::Absent,
            };
            self.store(key, segments.map(|s| &s[..]));
        } else {
            log::trace!("sentence cache hit");
        }
        &self.sentence
    }

    /// Assemble `segments`, reusing the cached sentence while `token` is
    /// unchanged
    ///
    /// The caller owns the token: contents are never inspected, so handing
    /// different segments under an unchanged token returns the stale
    /// sentence.
    pub fn assemble_versioned(
        &mut self,
        token: IdentityToken,
        segments: Option<&[Segment]>,
    ) -> &Sentence {
        let hit = matches!(self.key, CacheKey::Token(held) if held == token);
        if !hit {
            self.store(CacheKey::Token(token), segments);
        } else {
            log::trace!("sentence cache hit for token {}", token.value());
        }
        &self.sentence
    }

    /// How many times assembly actually ran
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Drop the cached sentence
    pub fn invalidate(&mut self) {
        self.key = CacheKey::Vacant;
        self.sentence = Sentence::empty();
    }

    fn store(&mut self, key: CacheKey, segments: Option<&[Segment]>) {
        log::trace!("sentence cache miss, assembling");
        let sentence = self.assembler.assemble(segments);
        self.recomputations += 1;
        self.key = key;
        self.sentence = sentence;
    }
}

impl Default for SentenceCache {
    fn default() -> Self {
        Self::new()
    }
}
