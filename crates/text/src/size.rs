//! Human readable sizes on a logarithmic scale of units.

/// A scale of unit suffixes, each `factor` times the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeUnits<'a> {
    /// Suffixes from the smallest unit up.
    pub suffixes: &'a [&'a str],
    /// Ratio between consecutive units.
    pub factor: u32,
}

/// Byte units in powers of 1024.
pub const BINARY_UNITS: SizeUnits<'static> = SizeUnits {
    suffixes: &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"],
    factor: 1024,
};

/// Byte units in powers of 1000.
pub const DECIMAL_UNITS: SizeUnits<'static> = SizeUnits {
    suffixes: &["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"],
    factor: 1000,
};

/// Format `value` in the largest unit it reaches, returning the number and
/// its suffix.
///
/// The number keeps at most `precision` decimals, and never more than the
/// unit can meaningfully carry: values in the base unit have none, and each
/// step up allows as many more as the factor has digits. Values beyond the
/// last unit stay in the last unit.
///
/// ```
/// use datakit_text::{BINARY_UNITS, format_size};
///
/// assert_eq!(format_size(1500, &BINARY_UNITS, 1), ("1.5".to_string(), "KiB"));
/// assert_eq!(format_size(35, &BINARY_UNITS, 1), ("35".to_string(), "B"));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size<'a>(value: u64, units: &SizeUnits<'a>, precision: usize) -> (String, &'a str) {
    let Some(&largest) = units.suffixes.last() else {
        return (value.to_string(), "");
    };
    let factor = f64::from(units.factor);
    let step = units.factor.checked_ilog10().unwrap_or(0) as usize;

    let mut scaled = value as f64;
    let mut last = scaled;
    let mut decimals = 0;
    for &suffix in units.suffixes {
        if scaled < factor {
            return (render(scaled, decimals.min(precision)), suffix);
        }
        last = scaled;
        scaled /= factor;
        decimals += step;
    }
    (render(last, decimals.min(precision)), largest)
}

fn render(value: f64, decimals: usize) -> String {
    if decimals == 0 {
        format!("{:.0}", value.trunc())
    } else {
        format!("{value:.decimals$}")
    }
}
