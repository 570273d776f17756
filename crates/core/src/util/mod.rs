/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took at the given level, and evaluates to the
/// value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Convert a zero-based column index to spreadsheet-style letters: `0` is `A`,
/// `25` is `Z`, `26` is `AA`, `27` is `AB`, and so on (bijective base-26).
pub fn column_letters(column: u32) -> String {
    let mut letters = Vec::new();
    // Shift to one-based so that every digit is in 1..=26
    let mut remaining = u64::from(column) + 1;
    while remaining > 0 {
        let digit = ((remaining - 1) % 26) as u8;
        letters.push(char::from(b'A' + digit));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(51), "AZ");
        assert_eq!(column_letters(52), "BA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }

    #[test]
    fn test_timed_passes_value_through() {
        let value = timed!("adding", 1 + 2);
        assert_eq!(value, 3);
    }
}
