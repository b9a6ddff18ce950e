//! Variant keys and the generation matrix.

use crate::{SampleType, SwapMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel widths covered by the generated converter family.
///
/// A width is the number of interleaved channels one converter instance
/// handles. Width 1 selects the single-channel skeleton; widths 2 through 4
/// select the multi-channel skeleton, which is width-generic. Extending the
/// family to a new width only extends this axis.
pub const CHANNEL_WIDTHS: [usize; 4] = [1, 2, 3, 4];

/// One generation unit: a sample type, a swap mode, and a channel width.
///
/// Each key yields exactly two converter functions (host-to-wire and
/// wire-to-host). The key maps injectively into both function names, which
/// is what keeps all names distinct across the full matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    /// Host-side sample representation.
    pub sample: SampleType,
    /// Wire byte-order handling.
    pub swap: SwapMode,
    /// Number of interleaved channels.
    pub width: usize,
}

impl VariantKey {
    /// Build a key from its three axis values.
    pub fn new(sample: SampleType, swap: SwapMode, width: usize) -> Self {
        Self {
            sample,
            swap,
            width,
        }
    }

    /// Name of the host-to-wire converter for this key.
    pub fn host_to_wire_name(&self) -> String {
        format!(
            "convert_{}_{}_to_item32_1_{}",
            self.sample.name(),
            self.width,
            self.swap.token()
        )
    }

    /// Name of the wire-to-host converter for this key.
    pub fn wire_to_host_name(&self) -> String {
        format!(
            "convert_item32_1_to_{}_{}_{}",
            self.sample.name(),
            self.width,
            self.swap.token()
        )
    }

    /// The full generation matrix in its pinned order: width ascending
    /// (outer), native before swapped (middle), sample types in declared
    /// order (inner).
    ///
    /// The order is part of the output contract: a regenerated artifact must
    /// be diff-stable under version control.
    pub fn enumerate() -> Vec<VariantKey> {
        let mut keys =
            Vec::with_capacity(CHANNEL_WIDTHS.len() * SwapMode::ALL.len() * SampleType::ALL.len());
        for &width in &CHANNEL_WIDTHS {
            for &swap in &SwapMode::ALL {
                for &sample in &SampleType::ALL {
                    keys.push(VariantKey {
                        sample,
                        swap,
                        width,
                    });
                }
            }
        }
        keys
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.sample, self.width, self.swap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_matrix_covers_full_cross_product() {
        let keys = VariantKey::enumerate();
        assert_eq!(keys.len(), 24);

        let distinct: HashSet<_> = keys.iter().copied().collect();
        assert_eq!(distinct.len(), keys.len());
    }

    #[test]
    fn test_matrix_order_is_pinned() {
        let keys = VariantKey::enumerate();

        assert_eq!(
            keys[0],
            VariantKey::new(SampleType::Fc64, SwapMode::Native, 1)
        );
        assert_eq!(
            keys[1],
            VariantKey::new(SampleType::Fc32, SwapMode::Native, 1)
        );
        assert_eq!(
            keys[3],
            VariantKey::new(SampleType::Fc64, SwapMode::Swapped, 1)
        );
        assert_eq!(
            keys[23],
            VariantKey::new(SampleType::Sc16, SwapMode::Swapped, 4)
        );

        // Widths never decrease along the enumeration.
        for pair in keys.windows(2) {
            assert!(pair[0].width <= pair[1].width);
        }
        // Within a width, all native keys precede all swapped keys.
        for width in CHANNEL_WIDTHS {
            let modes: Vec<SwapMode> = keys
                .iter()
                .filter(|k| k.width == width)
                .map(|k| k.swap)
                .collect();
            assert_eq!(
                modes,
                [
                    SwapMode::Native,
                    SwapMode::Native,
                    SwapMode::Native,
                    SwapMode::Swapped,
                    SwapMode::Swapped,
                    SwapMode::Swapped
                ]
            );
        }
    }

    #[test]
    fn test_converter_names_follow_pattern() {
        let key = VariantKey::new(SampleType::Sc16, SwapMode::Native, 1);
        assert_eq!(key.host_to_wire_name(), "convert_sc16_1_to_item32_1_nswap");
        assert_eq!(key.wire_to_host_name(), "convert_item32_1_to_sc16_1_nswap");

        let key = VariantKey::new(SampleType::Fc32, SwapMode::Swapped, 3);
        assert_eq!(key.host_to_wire_name(), "convert_fc32_3_to_item32_1_bswap");
        assert_eq!(key.wire_to_host_name(), "convert_item32_1_to_fc32_3_bswap");
    }

    #[test]
    fn test_names_are_distinct_across_the_matrix() {
        let mut names = HashSet::new();
        for key in VariantKey::enumerate() {
            assert!(names.insert(key.host_to_wire_name()));
            assert!(names.insert(key.wire_to_host_name()));
        }
        assert_eq!(names.len(), 48);
    }

    #[test]
    fn test_key_serialization_round_trip() {
        let key = VariantKey::new(SampleType::Fc32, SwapMode::Swapped, 2);

        let serialized = serde_json::to_string(&key).unwrap();
        let deserialized: VariantKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(key, deserialized);
    }

    #[test]
    fn test_display() {
        let key = VariantKey::new(SampleType::Fc64, SwapMode::Swapped, 4);
        assert_eq!(key.to_string(), "fc64_4_bswap");
    }
}
