// File: crates/figure-core/src/grid.rs
// Summary: Sample domain layout helpers.

use crate::types::{DOMAIN_END, DOMAIN_START, DOMAIN_STEP};

/// Inclusive stepped range `start, start + step, ..., <= end`.
pub fn stepped(start: u32, end: u32, step: u32) -> Vec<f64> {
    if step == 0 { return vec![start as f64]; }
    (start..=end).step_by(step as usize).map(f64::from).collect()
}

/// The fixed domain every figure samples: `0, 2, ..., 20`.
pub fn sample_domain() -> Vec<f64> {
    stepped(DOMAIN_START, DOMAIN_END, DOMAIN_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_eleven_even_values() {
        let d = sample_domain();
        assert_eq!(d.len(), 11);
        assert_eq!(d.first(), Some(&0.0));
        assert_eq!(d.last(), Some(&20.0));
        assert!(d.windows(2).all(|w| w[1] - w[0] == 2.0));
    }

    #[test]
    fn zero_step_yields_start_only() {
        assert_eq!(stepped(3, 9, 0), vec![3.0]);
    }
}
