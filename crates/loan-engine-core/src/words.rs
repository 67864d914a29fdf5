//! Indian numbering-system formatting: crore/lakh words and digit grouping.
//!
//! Pure, total functions over non-negative integers. The word form groups by
//! crore (10^7), lakh (10^5), thousand, hundred and a final 0–99 remainder;
//! crore counts of one hundred and above recurse, so "1,23,00,00,000"
//! reads "One Hundred Twenty Three Crore".

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a non-negative integer to Indian-system words. `0` is `"Zero"`.
pub fn to_indian_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let crore = n / 10_000_000;
    let lakh = (n % 10_000_000) / 100_000;
    let thousand = (n % 100_000) / 1_000;
    let hundreds = (n % 1_000) / 100;
    let remainder = n % 100;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        parts.push(format!("{} Crore", to_indian_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if hundreds > 0 {
        parts.push(format!("{} Hundred", two_digit_words(hundreds)));
    }
    if remainder > 0 {
        parts.push(two_digit_words(remainder));
    }

    parts.join(" ")
}

/// Group digits en-IN style: last three digits, then pairs (`12,34,567`).
pub fn group_indian_digits(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Display convention for currency results: grouped digits plus the word form.
pub fn format_inr(n: u64) -> String {
    format!("₹ {} ({})", group_indian_digits(n), to_indian_words(n))
}

/// Words for 0–99. Returns an empty string for zero; segment callers skip it.
fn two_digit_words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let unit = n % 10;
            if unit == 0 {
                TENS[(n / 10) as usize].to_string()
            } else {
                format!("{} {}", TENS[(n / 10) as usize], ONES[unit as usize])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_indian_words(0), "Zero");
    }

    #[test]
    fn test_round_units() {
        assert_eq!(to_indian_words(100_000), "One Lakh");
        assert_eq!(to_indian_words(10_000_000), "One Crore");
    }

    #[test]
    fn test_mixed_segments() {
        assert_eq!(
            to_indian_words(1_234),
            "One Thousand Two Hundred Thirty Four"
        );
        assert_eq!(
            to_indian_words(12_34_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn test_teens_and_round_tens() {
        assert_eq!(to_indian_words(14), "Fourteen");
        assert_eq!(to_indian_words(40), "Forty");
        assert_eq!(to_indian_words(19_00_017), "Nineteen Lakh Seventeen");
    }

    #[test]
    fn test_hundred_crore_and_above() {
        assert_eq!(to_indian_words(1_000_000_000), "One Hundred Crore");
        assert_eq!(
            to_indian_words(123_450_000_000),
            "Twelve Thousand Three Hundred Forty Five Crore"
        );
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(group_indian_digits(0), "0");
        assert_eq!(group_indian_digits(999), "999");
        assert_eq!(group_indian_digits(1_000), "1,000");
        assert_eq!(group_indian_digits(12_34_567), "12,34,567");
        assert_eq!(group_indian_digits(1_00_00_000), "1,00,00,000");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(
            format_inr(106_618),
            "₹ 1,06,618 (One Lakh Six Thousand Six Hundred Eighteen)"
        );
    }
}
