/// Countdown badge text, e.g. `"7s"`.
#[must_use]
pub fn format_countdown(secs: u32) -> String {
    format!("{secs}s")
}

/// Elapsed run time as `m:ss`. Negative spans render as zero.
#[must_use]
pub fn format_elapsed(secs: i64) -> String {
    let secs = secs.max(0);
    let minutes = secs / 60;
    let remainder = secs % 60;
    format!("{minutes}:{remainder:02}")
}
