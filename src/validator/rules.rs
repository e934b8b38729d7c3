use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_ADDRESS_LEN: usize = 5;
pub const PHONE_DIGITS: usize = 10;
pub const MIN_RENTAL_DAYS: i64 = 1;
pub const MAX_RENTAL_DAYS: i64 = 30;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Ten digits once every non-digit character is stripped.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

/// Whole number of rental days in `1..=30`.
pub fn validate_days(days: &str) -> bool {
    match days.trim().parse::<i64>() {
        Ok(n) => (MIN_RENTAL_DAYS..=MAX_RENTAL_DAYS).contains(&n),
        Err(_) => false,
    }
}

/// Length in UTF-16 code units, the way the browser measures input values.
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("driver.one@rentals.example.in"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn phone_digits_after_stripping() {
        assert!(validate_phone("9876543210"));
        assert!(validate_phone("987-654-3210"));
        assert!(validate_phone("(987) 654 3210"));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("98765432100"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn days_boundaries() {
        assert!(validate_days("1"));
        assert!(validate_days("30"));
        assert!(validate_days(" 7 "));
        assert!(!validate_days("0"));
        assert!(!validate_days("31"));
        assert!(!validate_days("-3"));
        assert!(!validate_days(""));
        assert!(!validate_days("ten"));
    }

    #[test]
    fn min_len_counts_utf16_units() {
        assert!(has_min_len("Ann", MIN_NAME_LEN));
        assert!(!has_min_len("Al", MIN_NAME_LEN));
        assert!(has_min_len("Åsa", MIN_NAME_LEN));
        // Each emoji is a surrogate pair.
        assert!(has_min_len("😀😀", MIN_NAME_LEN));
        assert!(!has_min_len("😀", MIN_NAME_LEN));
    }
}
