//! Watch mode: rebuild when inputs change.
//!
//! Filesystem events are coalesced through a debounce window so that one
//! editor save (which often produces several events) triggers one rebuild.
//! A failed rebuild is logged and watching continues; only a dead watch
//! backend ends the loop.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};

use palisade_core::{tracing_config::TARGET_PREFIX, BuildError, BuildResult};

use crate::pipeline::{run_build, BuildOptions};

/// File extensions that trigger a rebuild.
pub const WATCH_EXTENSIONS: &[&str] = &["css", "html", "js", "json"];

/// How often the loop wakes to check the debounce deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Deadline-restart debouncer over a set of changed paths.
///
/// Every noted path restarts the window; the batch fires once the window
/// elapses with no further events.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
    pending: BTreeSet<PathBuf>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            pending: BTreeSet::new(),
        }
    }

    /// Record one changed path, restarting the window.
    pub fn note(&mut self, path: PathBuf, now: Instant) {
        self.pending.insert(path);
        self.deadline = Some(now + self.window);
    }

    /// Whether the window has elapsed with changes pending.
    #[must_use]
    pub fn due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline) && !self.pending.is_empty()
    }

    /// Drain the pending batch and clear the deadline.
    pub fn take(&mut self) -> BTreeSet<PathBuf> {
        self.deadline = None;
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Whether a changed path should trigger a rebuild.
///
/// Output artifacts are excluded so the rebuild's own writes never feed
/// back into the watcher.
#[must_use]
pub fn is_relevant(path: &Path, output_dir: &Path) -> bool {
    if path.starts_with(output_dir) {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WATCH_EXTENSIONS.contains(&ext))
}

/// Watch the project and rebuild on changes. Runs until the watch backend
/// dies.
///
/// # Errors
///
/// Returns [`BuildError::Watch`] when the backend cannot be started or its
/// event channel disconnects.
pub fn run_watch(options: &BuildOptions, debounce_ms: u64) -> BuildResult<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |event| {
        // A closed receiver means the loop already exited.
        let _ = tx.send(event);
    })
    .map_err(|error| BuildError::Watch {
        reason: error.to_string(),
    })?;

    watcher
        .watch(&options.project_root, RecursiveMode::Recursive)
        .map_err(|error| BuildError::Watch {
            reason: error.to_string(),
        })?;

    // The assets tree is covered by the recursive root watch in the
    // conventional layout; watch it separately when it lives elsewhere.
    if !options.assets_dir.starts_with(&options.project_root) {
        watcher
            .watch(&options.assets_dir, RecursiveMode::Recursive)
            .map_err(|error| BuildError::Watch {
                reason: error.to_string(),
            })?;
    }

    info!(
        target: TARGET_PREFIX,
        root = %options.project_root.display(),
        debounce_ms,
        "watching for changes (Ctrl+C to stop)"
    );

    let mut debouncer = Debouncer::new(Duration::from_millis(debounce_ms));
    loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(Ok(event)) => {
                let now = Instant::now();
                for path in event.paths {
                    if is_relevant(&path, &options.output_dir) {
                        debug!(target: TARGET_PREFIX, path = %path.display(), "change noted");
                        debouncer.note(path, now);
                    }
                }
            }
            Ok(Err(error)) => {
                warn!(target: TARGET_PREFIX, %error, "watch event error, continuing");
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(BuildError::Watch {
                    reason: "watch event channel disconnected".to_owned(),
                });
            }
        }

        if debouncer.due(Instant::now()) {
            let changed = debouncer.take();
            info!(
                target: TARGET_PREFIX,
                changed_files = changed.len(),
                "rebuilding"
            );
            match run_build(options) {
                Ok(summary) => {
                    info!(
                        target: TARGET_PREFIX,
                        input_file = %summary.input_file.display(),
                        "rebuild complete"
                    );
                }
                Err(build_error) => {
                    // Keep watching; the author will fix the input and save again.
                    error!(target: TARGET_PREFIX, %build_error, "rebuild failed");
                }
            }
        }
    }
}
