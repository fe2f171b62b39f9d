//! Historical replay: one feed message per line, optionally gzip-compressed.
//!
//! Replay feeds the store exactly like the live feed does; the store cannot
//! tell the two apart. Bad lines are logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use flate2::read::GzDecoder;
use tracing::{info, warn};

use crate::error::FeedError;
use crate::feed::message::decode_message;
use crate::market::SharedMarketStore;
use crate::types::Quote;

/// Iterator over the quotes of a replay source.
///
/// Yields one `Result` per non-blank line, tagged with its 1-based line number.
pub struct ReplayReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> ReplayReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl ReplayReader<Box<dyn BufRead>> {
    /// Open a replay file, decompressing it when the name ends in `.gz`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> Iterator for ReplayReader<R> {
    type Item = (usize, Result<Quote, FeedError>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            match line {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => return Some((self.line, decode_message(text.as_bytes()))),
                Err(err) => return Some((self.line, Err(FeedError::Io(err)))),
            }
        }
    }
}

/// Counters of one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub recorded: u64,
    pub rejected: u64,
}

/// Record every valid quote from `source` into `store`
///
/// Rejected lines are logged at `warn` and counted; an I/O error ends the
/// replay early (after logging) since the rest of the stream is unreadable.
pub fn replay_into<R: BufRead>(source: ReplayReader<R>, store: &SharedMarketStore) -> ReplayStats {
    replay_until_stopped(source, store, &AtomicBool::new(false))
}

/// [`replay_into`] that also ends once `stop` is set
///
/// The flag is checked before each line, so at most one more quote is
/// recorded after it is raised.
pub fn replay_until_stopped<R: BufRead>(
    source: ReplayReader<R>,
    store: &SharedMarketStore,
    stop: &AtomicBool,
) -> ReplayStats {
    let mut stats = ReplayStats::default();

    for (line, result) in source {
        if stop.load(Ordering::Relaxed) {
            info!(line, "replay stopped");
            break;
        }
        match result {
            Ok(quote) => {
                store.record(quote);
                stats.recorded += 1;
            }
            Err(FeedError::Io(err)) => {
                warn!(line, %err, "replay aborted by read error");
                stats.rejected += 1;
                break;
            }
            Err(err) => {
                warn!(line, %err, "rejected feed message");
                stats.rejected += 1;
            }
        }
    }

    info!(recorded = stats.recorded, rejected = stats.rejected, "replay finished");
    stats
}

// ============================================================================
// Unit Tests
// ============================================================================
