//! Process memory reporting for the `/status` route.

use sysinfo::{System, SystemExt};

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Used host memory in gigabytes, rounded to two decimals.
pub(crate) fn memory_usage_gb() -> f64 {
    let mut sys = System::new();
    sys.refresh_memory();
    round2(sys.used_memory() as f64 / BYTES_PER_GB)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_at_most_two_decimals(value: f64) -> bool {
        ((value * 100.0) - (value * 100.0).round()).abs() < 1e-9
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(0.999), 1.0);
        assert_eq!(round2(0.0), 0.0);
        assert!(has_at_most_two_decimals(round2(3.14159)));
    }

    #[test]
    fn memory_reading_is_sane() {
        let reading = memory_usage_gb();
        assert!(reading >= 0.0);
        assert!(has_at_most_two_decimals(reading));
    }
}
