use super::*;

// Shared test helpers
fn drained(c: &Cursor<'_>) -> bool {
    c.is_done() && c.remaining().is_empty() && c.offset() == c.source().len()
}

fn logged_cursor(s: &str) -> Cursor<'_> {
    let opts = Options {
        logging: true,
        ..Default::default()
    };
    Cursor::with_options(s, &opts)
}

// Submodules (topic-based)
mod consume;
