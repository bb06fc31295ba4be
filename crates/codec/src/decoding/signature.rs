use alloy_primitives::hex;
use inbox_primitives::SeqSignature;

/// The hex encoding of the 3 byte all-zero signature sentinel.
const ZERO_SENTINEL: &str = "000000";

/// The minimum hex length holding full r, s and v components.
const MIN_COMPONENTS_LEN: usize = 130;

/// Normalizes a raw sequencer signature blob into its components.
///
/// The 3 byte all-zero sentinel maps to the zero component triple. A blob
/// shorter than 65 bytes maps to [`SeqSignature::Empty`]. Otherwise the hex
/// encoding splits into `r = [0..64]`, `s = [64..128]`, `v = [128..]`, each
/// stripped of leading zero digits.
pub fn normalize_signature(raw: &[u8]) -> SeqSignature {
    let encoded = hex::encode(raw);
    if encoded == ZERO_SENTINEL {
        return SeqSignature::zero()
    }
    if encoded.len() < MIN_COMPONENTS_LEN {
        return SeqSignature::Empty
    }

    let r = format!("0x{}", strip_leading_zeros(&encoded[..64]));
    let s = format!("0x{}", strip_leading_zeros(&encoded[64..128]));
    let v_digits = &encoded[128..];
    let v = if v_digits.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", strip_leading_zeros(v_digits))
    };

    SeqSignature::Components { r, s, v }
}

/// Strips leading zero digits, keeping at least one digit.
fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_normalize_zero_sentinel() {
        let signature = normalize_signature(&[0, 0, 0]);
        assert_eq!(signature, SeqSignature::zero());
        assert_eq!(signature.to_string(), "0x0,0x0,0x0");
    }

    #[test]
    fn test_should_mark_short_blob_empty() {
        let signature = normalize_signature(&[0xab; 64]);
        assert_eq!(signature, SeqSignature::Empty);
        assert_eq!(signature.to_string(), "");
    }

    #[test]
    fn test_should_strip_leading_zeros() {
        let mut raw = vec![0u8; 65];
        raw[31] = 0x1a; // r with leading zeros
        raw[63] = 0x02; // s with leading zeros
        raw[64] = 0x01; // v = 1

        let signature = normalize_signature(&raw);
        assert_eq!(
            signature,
            SeqSignature::Components {
                r: "0x1a".to_string(),
                s: "0x2".to_string(),
                v: "0x1".to_string()
            }
        );
        assert_eq!(signature.to_string(), "0x1a,0x2,0x1");
    }

    #[test]
    fn test_should_keep_full_components() {
        let raw = [0xff; 65];
        let signature = normalize_signature(&raw);
        let SeqSignature::Components { r, s, v } = signature else {
            panic!("expected components");
        };
        assert_eq!(r, format!("0x{}", "f".repeat(64)));
        assert_eq!(s, format!("0x{}", "f".repeat(64)));
        assert_eq!(v, "0xff");
    }
}
