/// Average reading speed used when no rate is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes at the default rate. Never 0.
pub fn estimate(text: &str) -> u32 {
    estimate_with_rate(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimated reading time at `words_per_minute`.
///
/// `round(words / rate)` with ties going to the even neighbour, floored at
/// one minute. A rate of 0 falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn estimate_with_rate(text: &str, words_per_minute: u32) -> u32 {
    let rate = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        n => n,
    };
    let minutes = (word_count(text) as f64 / f64::from(rate)).round_ties_even();
    (minutes as u32).max(1)
}
