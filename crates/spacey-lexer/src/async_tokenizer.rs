//! Asynchronous and parallel tokenization front ends.
//!
//! Scanning itself is synchronous and single-threaded. These wrappers only
//! decide where scans run: `AsyncTokenizer` reads files with tokio and
//! `ParallelTokenizer` runs independent scans on a rayon thread pool. Each
//! scan owns its scanner, context and tokens; the matcher set is shared
//! read-only.
//!
//! # Example
//!
//! ```ignore
//! use spacey_lexer::AsyncTokenizer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let tokenizer = AsyncTokenizer::new();
//!     let tokens = tokenizer.tokenize_file("script.js").await.unwrap();
//!     println!("{} tokens", tokens.len());
//! }
//! ```

#[cfg(feature = "async")]
use std::path::Path;

#[cfg(feature = "async")]
use tokio::fs;
use tracing::debug;

#[cfg(feature = "async")]
use crate::error::Error;
#[cfg(feature = "parallel")]
use crate::error::ScanFailure;
use crate::error::Result;
use crate::lexer::{MatcherSet, Token, tokenize_with};

/// Tokenizes files without blocking the runtime on I/O.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Default)]
pub struct AsyncTokenizer {
    matchers: MatcherSet,
}

#[cfg(feature = "async")]
impl AsyncTokenizer {
    /// Creates a tokenizer with the standard matcher set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with a caller-supplied matcher set.
    pub fn with_matchers(matchers: MatcherSet) -> Self {
        Self { matchers }
    }

    /// Tokenizes source text.
    pub async fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        Ok(tokenize_with(source, &self.matchers)?)
    }

    /// Reads and tokenizes one file.
    pub async fn tokenize_file(&self, path: impl AsRef<Path>) -> Result<Vec<Token>> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} ({} bytes)", path.display(), source.len());

        self.tokenize(&source).await
    }

    /// Reads and tokenizes several files concurrently.
    ///
    /// Results come back in the order of `paths`.
    pub async fn tokenize_files(&self, paths: &[impl AsRef<Path>]) -> Vec<Result<Vec<Token>>> {
        let futures: Vec<_> = paths.iter().map(|p| self.tokenize_file(p)).collect();

        futures::future::join_all(futures).await
    }
}

/// Runs many independent scans on a thread pool.
#[cfg(feature = "parallel")]
#[derive(Debug)]
pub struct ParallelTokenizer {
    /// Thread pool for the scans
    pool: rayon::ThreadPool,
    matchers: MatcherSet,
}

#[cfg(feature = "parallel")]
impl ParallelTokenizer {
    /// Creates a tokenizer with the default number of threads.
    pub fn new() -> Result<Self> {
        Self::build(rayon::ThreadPoolBuilder::new())
    }

    /// Creates a tokenizer with a specific number of threads.
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        Self::build(rayon::ThreadPoolBuilder::new().num_threads(num_threads))
    }

    fn build(builder: rayon::ThreadPoolBuilder) -> Result<Self> {
        let pool = builder.build()?;
        debug!("Tokenizer pool with {} threads", pool.current_num_threads());
        Ok(Self {
            pool,
            matchers: MatcherSet::standard(),
        })
    }

    /// Replaces the matcher set used by every scan.
    pub fn with_matchers(mut self, matchers: MatcherSet) -> Self {
        self.matchers = matchers;
        self
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Tokenizes every source; results are in input order.
    pub fn tokenize_all<S>(&self, sources: &[S]) -> Vec<std::result::Result<Vec<Token>, ScanFailure>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        self.pool.install(|| {
            sources
                .par_iter()
                .map(|source| tokenize_with(source.as_ref(), &self.matchers))
                .collect()
        })
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(path: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(path)
    }

    #[tokio::test]
    async fn test_tokenize_source() {
        let tokenizer = AsyncTokenizer::new();
        let tokens = tokenizer.tokenize("a + 1").await.unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[tokio::test]
    async fn test_tokenize_file() {
        let tokenizer = AsyncTokenizer::new();
        let tokens = tokenizer.tokenize_file(fixture("punctuators/shifts/src.js")).await.unwrap();
        assert!(!tokens.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let tokenizer = AsyncTokenizer::new();
        let err = tokenizer.tokenize_file(fixture("does/not/exist.js")).await.unwrap_err();
        assert!(matches!(&err, Error::Read { path, .. } if path.ends_with("exist.js")));
    }

    #[tokio::test]
    async fn test_tokenize_files_keeps_order() {
        let tokenizer = AsyncTokenizer::new();
        let paths = [fixture("literals/numbers/src.js"), fixture("missing.js"), fixture("comments/mixed/src.js")];
        let results = tokenizer.tokenize_files(&paths).await;
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
