//! Formatting utilities used for CLI outputs.

/// "3/5"-style ratio.
pub fn ratio(part: usize, total: usize) -> String {
    format!("{}/{}", part, total)
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
