//! Power-of-two decode sample sizes.

/// Compute the decode sample size for an image of `native_width` x `native_height`
/// drawn into a `target_width` x `target_height` surface.
///
/// Returns the power of two (at least 1) found by doubling while both halved
/// native dimensions, divided by the current factor, still exceed the target.
/// The decoded image therefore stays close to, but not below, half the native
/// size per doubling step.
pub fn calculate_in_sample_size(
    native_width: u32,
    native_height: u32,
    target_width: u32,
    target_height: u32,
) -> u32 {
    let mut sample_size: u32 = 1;
    if native_height > target_height || native_width > target_width {
        let half_height = native_height / 2;
        let half_width = native_width / 2;
        while half_height / sample_size > target_height && half_width / sample_size > target_width {
            sample_size *= 2;
        }
    }
    sample_size
}

/// Length of a dimension after decoding at `sample_size`, never below one pixel.
pub fn scaled_dimension(native: u32, sample_size: u32) -> u32 {
    (native / sample_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        assert_eq!(calculate_in_sample_size(1024, 768, 200, 200), 2);
    }

    #[test]
    fn test_small_image_not_sampled() {
        assert_eq!(calculate_in_sample_size(100, 100, 200, 200), 1);
        assert_eq!(calculate_in_sample_size(200, 200, 200, 200), 1);
        assert_eq!(calculate_in_sample_size(0, 0, 10, 10), 1);
    }

    #[test]
    fn test_large_image() {
        // 4000/2 = 2000: 2000 > 100 -> 2, 1000 > 100 -> 4, 500 -> 8, 250 -> 16, 125 -> 32, 62 stops
        assert_eq!(calculate_in_sample_size(4000, 4000, 100, 100), 32);
    }

    #[test]
    fn test_one_axis_within_target_stops() {
        // Width already fits after halving, so no doubling happens.
        assert_eq!(calculate_in_sample_size(300, 5000, 200, 100), 1);
    }

    #[test]
    fn test_result_is_smallest_power_of_two() {
        let cases = [
            (1024, 768, 200, 200),
            (4096, 2160, 320, 240),
            (640, 480, 1, 1),
            (3000, 2000, 299, 199),
            (17, 9000, 3, 10),
        ];
        for (nw, nh, tw, th) in cases {
            let s = calculate_in_sample_size(nw, nh, tw, th);
            assert!(s >= 1 && s.is_power_of_two());
            // Doubling stopped because the condition failed at s.
            assert!(!((nh / 2) / s > th && (nw / 2) / s > tw));
            // Every smaller power of two still satisfied it.
            let mut smaller = 1;
            while smaller < s {
                assert!((nh / 2) / smaller > th && (nw / 2) / smaller > tw);
                smaller *= 2;
            }
        }
    }

    #[test]
    fn test_scaled_dimension() {
        assert_eq!(scaled_dimension(1024, 2), 512);
        assert_eq!(scaled_dimension(3, 4), 1);
        assert_eq!(scaled_dimension(10, 0), 10);
    }
}
