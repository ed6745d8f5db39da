/// One recorded extraction. `position` is the byte offset where it started.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
    /// Index path of the enclosing list elements, like `$[1][0]`.
    /// Only set when `Options::log_list_path` is enabled.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Logger {
    enable: bool,
    track_path: bool,
    window: usize,
    entries: Vec<ScanLogEntry>,
    path: Vec<usize>,
}

impl Logger {
    pub(crate) fn new(enable: bool, track_path: bool, window: usize) -> Self {
        Self {
            enable: enable && cfg!(feature = "logging"),
            track_path,
            window,
            entries: Vec::new(),
            path: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(&mut self, source: &str, position: usize, message: &'static str) {
        if !self.enable {
            return;
        }
        let path = if self.track_path {
            Some(self.format_path())
        } else {
            None
        };
        self.entries.push(ScanLogEntry {
            position,
            message,
            context: build_context(source, position, self.window),
            path,
        });
    }

    fn format_path(&self) -> String {
        let mut s = String::from("$");
        for i in &self.path {
            s.push('[');
            s.push_str(&i.to_string());
            s.push(']');
        }
        s
    }

    #[inline]
    pub(crate) fn push_index(&mut self, idx: usize) {
        if self.enable && self.track_path {
            self.path.push(idx);
        }
    }

    #[inline]
    pub(crate) fn pop_index(&mut self) {
        if self.enable && self.track_path {
            let _ = self.path.pop();
        }
    }

    pub(crate) fn take_entries(&mut self) -> Vec<ScanLogEntry> {
        std::mem::take(&mut self.entries)
    }
}

/// Up to `window` characters on each side of the byte offset `pos`.
fn build_context(source: &str, pos: usize, window: usize) -> String {
    let (before, after) = source.split_at(pos);
    let skip = before.chars().count().saturating_sub(window);
    let mut s: String = before.chars().skip(skip).collect();
    s.extend(after.chars().take(window));
    s
}
