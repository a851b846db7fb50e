//! Progress bookkeeping for fire-and-forget asset loads.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug)]
struct LoadItem {
    url: String,
    state: LoadState,
}

/// Snapshot returned after every completion or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub failed: usize,
    pub total: usize,
}

impl LoadProgress {
    /// Finished items (loaded or failed) as a whole percentage.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (((self.loaded + self.failed) as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_done(&self) -> bool {
        self.loaded + self.failed >= self.total
    }
}

/// Tracks a batch of loads by slot id. Completions may arrive in any order.
#[derive(Clone, Debug, Default)]
pub struct LoadingManager {
    items: SmallVec<[LoadItem; 4]>,
}

impl LoadingManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load and get its slot id.
    pub fn begin(&mut self, url: impl Into<String>) -> usize {
        self.items.push(LoadItem {
            url: url.into(),
            state: LoadState::Pending,
        });
        self.items.len() - 1
    }

    pub fn url(&self, slot: usize) -> Option<&str> {
        self.items.get(slot).map(|i| i.url.as_str())
    }

    pub fn state(&self, slot: usize) -> Option<LoadState> {
        self.items.get(slot).map(|i| i.state)
    }

    pub fn complete(&mut self, slot: usize) -> LoadProgress {
        self.finish(slot, LoadState::Loaded)
    }

    pub fn fail(&mut self, slot: usize) -> LoadProgress {
        self.finish(slot, LoadState::Failed)
    }

    pub fn progress(&self) -> LoadProgress {
        let mut p = LoadProgress {
            loaded: 0,
            failed: 0,
            total: self.items.len(),
        };
        for item in &self.items {
            match item.state {
                LoadState::Loaded => p.loaded += 1,
                LoadState::Failed => p.failed += 1,
                LoadState::Pending => {}
            }
        }
        p
    }

    // A slot settles once; late duplicate callbacks are ignored.
    fn finish(&mut self, slot: usize, state: LoadState) -> LoadProgress {
        if let Some(item) = self.items.get_mut(slot) {
            if item.state == LoadState::Pending {
                item.state = state;
            }
        }
        self.progress()
    }
}
