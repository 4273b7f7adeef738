//! Backend selection for the vector networks
//!
//! The lane width is fixed at build time, so the only "configuration"
//! is which register backend [`crate::simd::Native`] resolves to.

use crate::constants::VECTOR_BYTES;

/// The register backend the networks are compiled against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// x86_64 SSE2 (`__m128i`)
    Sse2,
    /// ARM NEON (`int32x4_t`)
    Neon,
    /// Plain arrays, any architecture
    Portable,
}

impl Backend {
    /// Check if this backend uses hardware vector registers
    pub fn has_simd_support(&self) -> bool {
        !matches!(self, Backend::Portable)
    }

    /// Short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Sse2 => "sse2",
            Backend::Neon => "neon",
            Backend::Portable => "portable",
        }
    }

    /// Get the vector width in bytes for this backend
    pub fn vector_width_bytes(&self) -> usize {
        // Every backend holds the same four lanes.
        VECTOR_BYTES
    }
}

/// Detects the backend [`crate::simd::Native`] was compiled against
pub fn detect_backend() -> Backend {
    #[cfg(target_arch = "x86_64")]
    {
        // SSE2 is part of the x86_64 baseline
        return Backend::Sse2;
    }

    #[cfg(target_arch = "aarch64")]
    {
        return Backend::Neon;
    }

    // Fallback for other architectures
    #[allow(unreachable_code)]
    Backend::Portable
}
