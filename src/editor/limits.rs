// src/editor/limits.rs

/// Doors are capped at one conceptual slot per side.
pub const MAX_DOORS: usize = 4;

/// Share of the interior that may hold features, as `numerator / denominator`.
/// At least 60% of the floor stays open.
const FEATURE_DENSITY: (usize, usize) = (2, 5);

/// Caps on door and feature counts for a given room size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_doors: usize,
    pub max_features: usize,
}

impl Limits {
    pub fn clamp_doors(&self, doors: usize) -> usize {
        doors.min(self.max_doors)
    }

    pub fn clamp_features(&self, features: usize) -> usize {
        features.min(self.max_features)
    }
}

/// `max_doors = min(4, (size-2)*4)` and `max_features = floor((size-2)^2 * 0.4)`.
/// Degenerate sizes (2 and below) have no room for either.
pub fn limits(size: usize) -> Limits {
    if size <= 2 {
        return Limits {
            max_doors: 0,
            max_features: 0,
        };
    }
    let span = size - 2;
    let inner_area = span.saturating_mul(span);
    Limits {
        max_doors: MAX_DOORS.min(span.saturating_mul(4)),
        max_features: inner_area.saturating_mul(FEATURE_DENSITY.0) / FEATURE_DENSITY.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_for_reference_sizes() {
        assert_eq!(limits(5), Limits { max_doors: 4, max_features: 3 });
        assert_eq!(limits(8), Limits { max_doors: 4, max_features: 14 });
        assert_eq!(limits(20), Limits { max_doors: 4, max_features: 129 });
    }

    #[test]
    fn test_limits_for_degenerate_sizes() {
        assert_eq!(limits(0), Limits { max_doors: 0, max_features: 0 });
        assert_eq!(limits(1), Limits { max_doors: 0, max_features: 0 });
        assert_eq!(limits(2), Limits { max_doors: 0, max_features: 0 });
        // a single interior cell: four wall slots, no room for features
        assert_eq!(limits(3), Limits { max_doors: 4, max_features: 0 });
    }

    #[test]
    fn test_limits_saturate_for_huge_sizes() {
        let huge = limits(usize::MAX);
        assert_eq!(huge.max_doors, MAX_DOORS);
        assert_eq!(huge.max_features, usize::MAX / 5);
    }

    #[test]
    fn test_feature_cap_matches_floor_of_forty_percent() {
        for size in 3..=40 {
            let inner = ((size - 2) * (size - 2)) as f64;
            let expected = (inner * 0.4).floor() as usize;
            assert_eq!(limits(size).max_features, expected, "size {}", size);
        }
    }

    #[test]
    fn test_clamp_helpers() {
        let l = limits(6);
        assert_eq!(l.clamp_doors(1000), 4);
        assert_eq!(l.clamp_doors(2), 2);
        assert_eq!(l.clamp_features(1000), 6);
        assert_eq!(l.clamp_features(0), 0);
    }
}
