//! Two-way reconciliation between demo state and the browser URL.
//!
//! # Design
//! - The URL wins at mount and on external navigation carrying demo parameters.
//! - At mount, absent or invalid parameters take the configured defaults; on navigation
//!   they keep the current value, so `?role=admin` changes only the role.
//! - The store wins for in-session mutations; writes use replace, never push.
//! - A write happens only when the decoded URL differs from the canonical encoding,
//!   so a write that triggers a navigation event does not write again.

use tracing::{debug, info};

use crate::context::DemoContext;
use crate::error::{DemoError, DemoResult};
use crate::model::{DemoChanges, DemoDefaults, DemoState};
use crate::store::DemoStore;
use crate::url::{UrlSyncRecord, derive_state, derive_url, join_url, split_url};

/// Browser history operations the reconciler needs.
pub trait History {
    /// Full relative URL (path, query and fragment) of the current entry.
    fn current_url(&self) -> String;
    /// Replace the current entry without adding a new one.
    fn replace_url(&mut self, url: &str);
}

/// In-memory history used by tests and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    replace_count: usize,
}

impl MemoryHistory {
    /// History with a single entry.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            index: 0,
            replace_count: 0,
        }
    }

    /// Push a new entry, discarding forward entries.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.into());
        self.index = self.entries.len() - 1;
    }

    /// Move back one entry. Returns `false` at the start.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move forward one entry. Returns `false` at the end.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; a history always has its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times [`History::replace_url`] was called.
    #[must_use]
    pub const fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn current_url(&self) -> String {
        self.entries.get(self.index).cloned().unwrap_or_default()
    }

    fn replace_url(&mut self, url: &str) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            url.clone_into(entry);
        }
        self.replace_count += 1;
    }
}

/// Anything holding a [`DemoContext`] the reconciler may overwrite.
pub trait SyncTarget {
    /// Context to read state, catalog and defaults from.
    fn context(&self) -> &DemoContext;

    /// Apply a state decoded from the URL.
    ///
    /// # Errors
    /// Returns [`DemoError::InvalidTenant`] when the tenant is not in the catalog.
    fn apply(&mut self, state: DemoState) -> DemoResult<DemoChanges>;
}

impl SyncTarget for DemoContext {
    fn context(&self) -> &DemoContext {
        self
    }

    fn apply(&mut self, state: DemoState) -> DemoResult<DemoChanges> {
        self.replace_state(state)
    }
}

impl SyncTarget for DemoStore {
    fn context(&self) -> &DemoContext {
        DemoStore::context(self)
    }

    fn apply(&mut self, state: DemoState) -> DemoResult<DemoChanges> {
        self.replace_state(state)
    }
}

/// Outcome of reading the URL into the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Fields the URL changed.
    pub changes: DemoChanges,
    /// Parameters ignored in favour of defaults.
    pub issues: Vec<DemoError>,
    /// URL written back, if a write was needed.
    pub written: Option<String>,
}

/// Reconciler state: pending debounced write and write counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlSync {
    pending: bool,
    writes: u64,
}

impl UrlSync {
    /// Fresh reconciler with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: false,
            writes: 0,
        }
    }

    /// Read the current URL into `target` and canonicalize it.
    ///
    /// # Errors
    /// Propagates errors from [`SyncTarget::apply`].
    pub fn mount(
        &mut self,
        history: &mut impl History,
        target: &mut impl SyncTarget,
    ) -> DemoResult<SyncReport> {
        let record = current_record(history);
        let defaults = target.context().defaults().clone();
        let report = self.read(&record, &defaults, history, target)?;
        debug!(issues = report.issues.len(), "mounted demo url sync");
        Ok(report)
    }

    /// Handle an external navigation (link, back, forward).
    ///
    /// A URL without demo parameters keeps the current state and gets the
    /// canonical query appended. Demo parameters that are absent or invalid
    /// keep their current value.
    ///
    /// # Errors
    /// Propagates errors from [`SyncTarget::apply`].
    pub fn navigate(
        &mut self,
        history: &mut impl History,
        target: &mut impl SyncTarget,
    ) -> DemoResult<SyncReport> {
        let record = current_record(history);
        if !record.has_demo_params() {
            let written = self.write_if_needed(history, target.context().state());
            return Ok(SyncReport {
                written,
                ..SyncReport::default()
            });
        }
        let current = DemoDefaults::from(target.context().state());
        self.read(&record, &current, history, target)
    }

    /// Record a store change. Returns `true` when the caller must schedule a
    /// [`UrlSync::flush`]; later changes in the same window return `false`.
    pub fn note_change(&mut self) -> bool {
        let schedule = !self.pending;
        self.pending = true;
        schedule
    }

    /// Whether a flush is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop an outstanding flush (component unmount).
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Write the latest state if a change is pending and the URL differs.
    pub fn flush(&mut self, history: &mut impl History, context: &DemoContext) -> Option<String> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.write_if_needed(history, context.state())
    }

    /// Number of history writes performed.
    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    fn read(
        &mut self,
        record: &UrlSyncRecord,
        fallback: &DemoDefaults,
        history: &mut impl History,
        target: &mut impl SyncTarget,
    ) -> DemoResult<SyncReport> {
        let derived = derive_state(record, target.context().catalog(), fallback);
        let changes = target.apply(derived.state)?;
        let written = self.write_if_needed(history, target.context().state());
        Ok(SyncReport {
            changes,
            issues: derived.issues,
            written,
        })
    }

    fn write_if_needed(&mut self, history: &mut impl History, state: &DemoState) -> Option<String> {
        let current = history.current_url();
        let (path, query, fragment) = split_url(&current);
        let record = UrlSyncRecord::from_query(query);
        let canonical = derive_url(state, &record.extras);
        if record == canonical {
            return None;
        }
        let url = join_url(path, &canonical.to_query(), fragment);
        history.replace_url(&url);
        self.writes += 1;
        info!(%url, "replaced demo url");
        Some(url)
    }
}

fn current_record(history: &impl History) -> UrlSyncRecord {
    let current = history.current_url();
    let (_, query, _) = split_url(&current);
    UrlSyncRecord::from_query(query)
}
