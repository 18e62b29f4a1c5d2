//! Receivers for bracket snapshots
//!
//! The engine never stores anything itself. Whoever drives a tournament
//! hands each new snapshot to a sink, which decides what durable storage
//! means (memory, a JSON file, the session state).

use std::path::{Path, PathBuf};

use crate::bracket::Bracket;

/// Receives every new bracket snapshot
pub trait BracketSink {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()>;
}

impl<S: BracketSink + ?Sized> BracketSink for &mut S {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()> {
        (**self).accept(bracket)
    }
}

impl<S: BracketSink + ?Sized> BracketSink for Box<S> {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()> {
        (**self).accept(bracket)
    }
}

/// Sink that drops every snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl BracketSink for DiscardSink {
    fn accept(&mut self, _bracket: &Bracket) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sink that keeps every snapshot in arrival order
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    history: Vec<Bracket>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Bracket] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Bracket> {
        self.history.last()
    }
}

impl BracketSink for MemorySink {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()> {
        self.history.push(bracket.clone());
        Ok(())
    }
}

/// Sink that overwrites a JSON file with the latest snapshot
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    writes: usize,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writes: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshots written so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BracketSink for JsonFileSink {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()> {
        bracket.save(&self.path)?;
        self.writes += 1;
        tracing::debug!(path = %self.path.display(), writes = self.writes, "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use shinobi_core::{Fighter, StatTier};

    fn bracket() -> Bracket {
        let fighters = vec![
            Fighter::with_stats("Zabuza Momochi", StatTier::Elite.stats()),
            Fighter::with_stats("Haku", StatTier::Top.stats()),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        Bracket::seed(fighters, 2, &mut rng).unwrap()
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        let b = bracket();
        sink.accept(&b).unwrap();
        sink.accept(&b).unwrap();
        assert_eq!(sink.history().len(), 2);
        assert_eq!(sink.latest(), Some(&b));
    }

    #[test]
    fn test_sink_through_mut_ref() {
        fn feed<S: BracketSink>(mut sink: S, bracket: &Bracket) {
            sink.accept(bracket).unwrap();
        }

        let mut sink = MemorySink::new();
        feed(&mut sink, &bracket());
        feed(&mut sink, &bracket());
        assert_eq!(sink.history().len(), 2);
    }

    #[test]
    fn test_json_file_sink_round_trip() {
        let path = std::env::temp_dir().join(format!("shinobi-sink-{}.json", std::process::id()));
        let mut sink = JsonFileSink::new(&path);
        let b = bracket();

        sink.accept(&b).unwrap();
        assert_eq!(sink.writes(), 1);
        assert_eq!(Bracket::load(sink.path()).unwrap(), b);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_file_sink_reports_io_errors() {
        let mut sink = JsonFileSink::new("/nonexistent-dir/shinobi/bracket.json");
        assert!(sink.accept(&bracket()).is_err());
        assert_eq!(sink.writes(), 0);
    }
}
