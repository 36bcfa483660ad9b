/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC time as an RFC 3339 string (reservation `createdAt` format).
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Generate a time-based reservation ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at lounge scale)
///
/// Rendered as a decimal string because reservation IDs are string-typed
/// in the stored records.
pub fn booking_id() -> String {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    ((ts << 12) | rand_bits).to_string()
}

/// Keep only the digit characters of a phone string.
///
/// # Examples
///
/// ```
/// use shared::util::digits_only;
///
/// assert_eq!(digits_only("+7 (999) 123-45-67"), "79991234567");
/// assert_eq!(digits_only("звонить после 18"), "18");
/// ```
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Compare two phone strings digit-wise.
///
/// Matches either on the full digit sequence or on the last 10 digits,
/// so "+7 (999) 123-45-67" and "8 999 123 45 67" refer to the same number.
pub fn phones_match(a: &str, b: &str) -> bool {
    let da = digits_only(a);
    let db = digits_only(b);
    if da.is_empty() || db.is_empty() {
        return false;
    }
    if da == db {
        return true;
    }
    let tail = |s: &str| s.chars().rev().take(10).collect::<Vec<_>>();
    tail(&da) == tail(&db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_unique() {
        let mut ids: Vec<String> = (0..100).map(|_| booking_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_booking_id_is_numeric() {
        assert!(booking_id().parse::<i64>().is_ok());
    }

    #[test]
    fn test_phones_match() {
        assert!(phones_match("+7 (999) 123-45-67", "+7 (999) 123-45-67"));
        // Same number, different trunk prefix
        assert!(phones_match("+7 (999) 123-45-67", "8 999 123 45 67"));
        assert!(!phones_match("+7 (999) 123-45-67", "+7 (999) 123-45-68"));
        assert!(!phones_match("", "+7 (999) 123-45-67"));
    }
}
