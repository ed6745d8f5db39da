/// Grammar of a delimited list: `padding* value (separator padding* value)*`.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct ListFormat {
    /// Character that must follow an element for another one to be read.
    pub separator: char,
    /// Character skipped (any number of copies) before each element.
    pub padding: char,
}

impl Default for ListFormat {
    fn default() -> Self {
        Self {
            separator: ',',
            padding: ' ',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Record a scan log entry for each successful extraction.
    /// Use `Cursor::take_log` or `parse_with_log` to retrieve it.
    pub logging: bool,
    /// Characters kept on each side of a log entry's position in its `context`.
    pub log_context_window: usize,
    /// When enabled, attach the index path of enclosing list elements to log entries.
    pub log_list_path: bool,
    /// List grammar used by `Cursor::read_list`.
    pub list: ListFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            logging: false,
            log_context_window: 10,
            log_list_path: false,
            list: ListFormat::default(),
        }
    }
}
