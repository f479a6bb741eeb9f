/// Validate a reconstruction threshold against the number of shares on hand.
pub fn validate_threshold(threshold: usize, available: usize) -> bool {
    (1..=available).contains(&threshold)
}
