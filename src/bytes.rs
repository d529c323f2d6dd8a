//! Byte string helpers: hex dumps, integers and sizes.

const SIZE_UNITS: &[&str] = &["b", "kb", "mb", "gb", "tb", "pb"];

/// Render bytes as space separated uppercase hex pairs, e.g. `"0A FF"`.
pub fn hexdump(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read bytes as a big-endian unsigned integer.
///
/// Returns `None` if the value does not fit in a `u64`.
pub fn bytes_to_int(data: &[u8]) -> Option<u64> {
    data.iter().try_fold(0u64, |acc, &b| {
        acc.checked_mul(256)?.checked_add(u64::from(b))
    })
}

/// Reverse the byte order.
pub fn reverse_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}

/// Format a byte count for humans, e.g. `1536` becomes `"1.5kb"`.
pub fn format_size(size: f64) -> String {
    if size == 0.0 {
        return "0b".to_string();
    }
    let sign = if size < 0.0 { "-" } else { "" };
    let mut scaled = size.abs();
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{}{}{}", sign, rounded, SIZE_UNITS[unit])
}
