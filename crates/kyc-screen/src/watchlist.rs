//! # Watchlist Snapshots
//!
//! A [`WatchlistSnapshot`] is an immutable, versioned set of entries with a
//! name search. A [`WatchlistStore`] publishes the current snapshot behind
//! an atomic pointer.
//!
//! ## Concurrency
//!
//! Readers call [`WatchlistStore::snapshot`] once per screening and keep the
//! returned `Arc` for the whole run. A refresh builds a complete new
//! snapshot and swaps it in with [`WatchlistStore::replace`]; runs already
//! in flight keep reading the version they started with. Nothing is ever
//! mutated in place, and readers never block.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

use kyc_core::{KycError, WatchlistEntry};
use kyc_match::{normalize, normalize_arabic, normalize_latin, Script};

/// Immutable, versioned collection of watchlist entries.
#[derive(Debug)]
pub struct WatchlistSnapshot {
    version: u64,
    published_at: DateTime<Utc>,
    entries: Vec<WatchlistEntry>,
    // normalized search keys, parallel to `entries`
    keys: Vec<Vec<String>>,
}

impl WatchlistSnapshot {
    /// Build a snapshot, precomputing normalized search keys.
    pub fn new(entries: Vec<WatchlistEntry>, version: u64) -> Self {
        let keys = entries.iter().map(search_keys).collect();
        Self {
            version,
            published_at: Utc::now(),
            entries,
            keys,
        }
    }

    /// Parse a JSON array of entries as version 1.
    pub fn from_json_str(json: &str) -> Result<Self, KycError> {
        let entries: Vec<WatchlistEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries, 1))
    }

    /// Read a JSON array of entries from `path` as version 1.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, KycError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = snapshot.len(),
            "loaded watchlist"
        );
        Ok(snapshot)
    }

    /// Snapshot version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// When this snapshot was built.
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    /// All entries, in load order.
    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose primary name, alias or secondary-script name contains
    /// `term` after normalization.
    ///
    /// Results are ordered by declared risk level (most severe first), then
    /// by primary name, and truncated to `limit`. A term that normalizes to
    /// nothing matches nothing.
    pub fn search(&self, term: &str, limit: usize) -> Vec<&WatchlistEntry> {
        let needle = normalize(term, Script::detect(term));
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<&WatchlistEntry> = self
            .entries
            .iter()
            .zip(&self.keys)
            .filter(|(_, keys)| keys.iter().any(|k| k.contains(&needle)))
            .map(|(entry, _)| entry)
            .collect();
        hits.sort_by(|a, b| {
            b.risk_level
                .cmp(&a.risk_level)
                .then_with(|| a.name.cmp(&b.name))
        });
        hits.truncate(limit);

        tracing::debug!(hits = hits.len(), version = self.version, "watchlist search");
        hits
    }
}

fn search_keys(entry: &WatchlistEntry) -> Vec<String> {
    entry
        .names()
        .map(normalize_latin)
        .chain(entry.secondary_names().map(normalize_arabic))
        .filter(|k| !k.is_empty())
        .collect()
}

/// Holder of the currently published snapshot.
#[derive(Debug)]
pub struct WatchlistStore {
    current: ArcSwap<WatchlistSnapshot>,
}

impl WatchlistStore {
    /// Publish `snapshot` as the initial version.
    pub fn new(snapshot: WatchlistSnapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    /// The current snapshot. Holding the `Arc` pins that version.
    pub fn snapshot(&self) -> Arc<WatchlistSnapshot> {
        self.current.load_full()
    }

    /// Atomically publish `entries` as the next version and return the new
    /// version number.
    pub fn replace(&self, entries: Vec<WatchlistEntry>) -> u64 {
        let previous = self
            .current
            .rcu(|old| WatchlistSnapshot::new(entries.clone(), old.version() + 1));
        let version = previous.version() + 1;
        tracing::info!(version, entries = entries.len(), "published watchlist snapshot");
        version
    }
}

impl Default for WatchlistStore {
    fn default() -> Self {
        Self::new(WatchlistSnapshot::new(Vec::new(), 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_watchlist;
    use kyc_core::{EntryRiskLevel, ListSource};

    fn names<'a>(hits: &[&'a WatchlistEntry]) -> Vec<&'a str> {
        hits.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn search_matches_primary_name_substring() {
        let snap = WatchlistSnapshot::new(sample_watchlist(), 1);
        assert_eq!(names(&snap.search("petrov", 50)), vec!["Ivan Petrov"]);
    }

    #[test]
    fn search_normalizes_the_term() {
        let snap = WatchlistSnapshot::new(sample_watchlist(), 1);
        let hits = snap.search("Dr. Ahmed Ali Al Masri", 50);
        assert_eq!(names(&hits), vec!["Ahmed Ali Al-Masri"]);
    }

    #[test]
    fn search_matches_aliases() {
        let snap = WatchlistSnapshot::new(sample_watchlist(), 1);
        assert_eq!(names(&snap.search("the russian", 50)), vec!["Ivan Petrov"]);
    }

    #[test]
    fn search_matches_secondary_script() {
        let snap = WatchlistSnapshot::new(sample_watchlist(), 1);
        // hamza spelling differs from the listed name
        assert_eq!(names(&snap.search("احمد", 50)), vec!["Ahmed Ali Al-Masri"]);
    }

    #[test]
    fn search_orders_by_risk_then_name_and_truncates() {
        let entries = vec![
            WatchlistEntry::new("1", ListSource::Un, "Zed Group")
                .with_risk_level(EntryRiskLevel::Low),
            WatchlistEntry::new("2", ListSource::Un, "Beta Group"),
            WatchlistEntry::new("3", ListSource::Un, "Alpha Group"),
            WatchlistEntry::new("4", ListSource::Un, "Omega Group")
                .with_risk_level(EntryRiskLevel::Critical),
        ];
        let snap = WatchlistSnapshot::new(entries, 1);
        assert_eq!(
            names(&snap.search("group", 50)),
            vec!["Omega Group", "Alpha Group", "Beta Group", "Zed Group"]
        );
        assert_eq!(names(&snap.search("group", 2)), vec!["Omega Group", "Alpha Group"]);
    }

    #[test]
    fn blank_term_matches_nothing() {
        let snap = WatchlistSnapshot::new(sample_watchlist(), 1);
        assert!(snap.search("", 50).is_empty());
        assert!(snap.search("Mr.", 50).is_empty());
        assert!(snap.search("ahmed", 0).is_empty());
    }

    #[test]
    fn from_json_str_reads_entries() {
        let json = r#"[{"entry_id": "X1", "list_source": "UK", "name": "Some Body",
            "risk_level": "CRITICAL"}]"#;
        let snap = WatchlistSnapshot::from_json_str(json).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.version(), 1);
        assert_eq!(snap.entries()[0].risk_level, EntryRiskLevel::Critical);
    }

    #[test]
    fn from_json_str_rejects_unknown_source() {
        let json = r#"[{"entry_id": "X1", "list_source": "MARS", "name": "Some Body"}]"#;
        assert!(matches!(
            WatchlistSnapshot::from_json_str(json),
            Err(KycError::Serialization(_))
        ));
    }

    #[test]
    fn load_json_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, serde_json::to_string(&sample_watchlist()).unwrap()).unwrap();
        let snap = WatchlistSnapshot::load_json(&path).unwrap();
        assert_eq!(snap.entries(), sample_watchlist().as_slice());
    }

    #[test]
    fn load_json_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WatchlistSnapshot::load_json(dir.path().join("absent.json")),
            Err(KycError::Io(_))
        ));
    }

    #[test]
    fn replace_publishes_new_version_without_disturbing_readers() {
        let store = WatchlistStore::new(WatchlistSnapshot::new(sample_watchlist(), 1));
        let pinned = store.snapshot();

        let version = store.replace(Vec::new());
        assert_eq!(version, 2);
        assert_eq!(store.snapshot().version(), 2);
        assert!(store.snapshot().is_empty());

        assert_eq!(pinned.version(), 1);
        assert_eq!(pinned.len(), 5);
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let store = Arc::new(WatchlistStore::new(WatchlistSnapshot::new(sample_watchlist(), 1)));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let snap = store.snapshot();
                        assert!(snap.len() == 5 || snap.is_empty());
                    }
                })
            })
            .collect();
        for _ in 0..10 {
            store.replace(Vec::new());
            store.replace(sample_watchlist());
        }
        for r in readers {
            r.join().unwrap();
        }
        assert_eq!(store.snapshot().version(), 21);
    }
}
