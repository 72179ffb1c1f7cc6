/// Render a remaining duration for display.
///
/// Under a minute shows whole seconds (`"45s"`); otherwise hours and minutes
/// (`"1h 30m"`). Both parts are floored and negative input reads as zero.
pub fn format_remaining(ms: i64) -> String {
    let ms = ms.max(0);
    if ms < 60_000 {
        format!("{}s", ms / 1000)
    } else {
        format!("{}h {}m", ms / 3_600_000, (ms % 3_600_000) / 60_000)
    }
}
