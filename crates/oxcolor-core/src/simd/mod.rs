//! Batch kernels with runtime CPU dispatch
//!
//! Each kernel is compiled for AVX2, SSE4.1 and NEON through `multiversion`
//! and falls back to portable code elsewhere. Slice conversions in
//! [`adaptation`](crate::adaptation) call these instead of looping over the
//! single-value methods.

mod matrix;

pub use matrix::{diagonal_sandwich_vec3_batch, matrix_multiply_vec3_batch};

/// Name of the instruction set the kernels dispatch to on this CPU
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        match (
            is_x86_feature_detected!("avx2"),
            is_x86_feature_detected!("sse4.1"),
        ) {
            (true, _) => "AVX2",
            (false, true) => "SSE4.1",
            (false, false) => "portable",
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "portable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_features() {
        let features = active_features();
        eprintln!("dispatching to: {features}");
        assert!(["AVX2", "SSE4.1", "NEON", "portable"].contains(&features));
    }
}
