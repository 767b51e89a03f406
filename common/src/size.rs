//! Disk size strings as used for RBD image sizes: an integer followed by a
//! binary unit suffix (`M`, `G` or `T`), e.g. `100G`.

use crate::error::GatewayError;

pub const SIZE_SUFFIXES: [char; 3] = ['M', 'G', 'T'];

const HUMAN_UNITS: [(&str, usize); 8] = [
    ("b", 0),
    ("K", 0),
    ("M", 0),
    ("G", 0),
    ("T", 1),
    ("P", 1),
    ("E", 2),
    ("Z", 2),
];

fn suffix_power(unit: char) -> Option<u32> {
    SIZE_SUFFIXES
        .iter()
        .position(|suffix| *suffix == unit.to_ascii_uppercase())
        .map(|offset| offset as u32 + 2)
}

fn split_suffix(size: &str) -> Option<(&str, char)> {
    let unit: char = size.chars().last()?;
    Some((&size[..size.len() - unit.len_utf8()], unit))
}

/// True if `size` is an integer followed by one of [`SIZE_SUFFIXES`].
pub fn valid_size(size: &str) -> bool {
    match split_suffix(size) {
        Some((value, unit)) => suffix_power(unit).is_some() && value.parse::<u64>().is_ok(),
        None => false,
    }
}

/// Converts a size string to bytes.
///
/// A bare integer is taken to be a byte count already.
pub fn convert_to_bytes(size: &str) -> Result<u64, GatewayError> {
    if let Ok(bytes) = size.parse::<u64>() {
        return Ok(bytes);
    }

    let (value, unit) =
        split_suffix(size).ok_or_else(|| GatewayError::invalid("empty disk size"))?;
    let power: u32 = suffix_power(unit)
        .ok_or_else(|| GatewayError::invalid(format!("unknown size suffix '{unit}' in '{size}'")))?;
    let value: u64 = value
        .parse()
        .map_err(|e| GatewayError::invalid(format!("invalid disk size '{size}': {e}")))?;

    1024u64
        .checked_pow(power)
        .and_then(|multiplier| value.checked_mul(multiplier))
        .ok_or_else(|| GatewayError::invalid(format!("disk size '{size}' is too large")))
}

/// Renders a byte count with the largest unit that divides it evenly.
pub fn human_size(bytes: u64) -> String {
    let mut num: u64 = bytes;
    for (unit, precision) in HUMAN_UNITS {
        if num % 1024 != 0 {
            return match precision {
                0 => format!("{num}{unit}"),
                _ => format!("{:.precision$}{unit}", num as f64),
            };
        }
        num /= 1024;
    }
    format!("{:.2}Y", num as f64)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
