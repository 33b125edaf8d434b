//! Number-to-words in the Indian numbering system
//!
//! Groups are crore (10^7), lakh (10^5), thousand and hundred, most
//! significant first. Only the integer part of a value is spoken.

pub mod lexicon;

use crate::rounding::round_half_up;
use lexicon::*;

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// 2^64; integer parts at or above this do not fit in `u64`
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Language the words are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Hindi,
    IndianEnglish,
}

impl Language {
    fn zero(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_ZERO,
            Language::IndianEnglish => ENGLISH_ZERO,
        }
    }

    fn below_hundred(self, n: u64) -> String {
        match self {
            Language::Hindi => HINDI_BELOW_HUNDRED[n as usize].to_string(),
            Language::IndianEnglish => english_below_hundred(n as usize),
        }
    }

    fn hundred(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_HUNDRED,
            Language::IndianEnglish => ENGLISH_HUNDRED,
        }
    }

    fn thousand(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_THOUSAND,
            Language::IndianEnglish => ENGLISH_THOUSAND,
        }
    }

    fn lakh(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_LAKH,
            Language::IndianEnglish => ENGLISH_LAKH,
        }
    }

    fn crore(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_CRORE,
            Language::IndianEnglish => ENGLISH_CRORE,
        }
    }

    fn rupees(self) -> &'static str {
        match self {
            Language::Hindi => HINDI_RUPEES,
            Language::IndianEnglish => ENGLISH_RUPEES,
        }
    }
}

/// Spell the integer part of `value`
///
/// Non-finite, negative and out-of-range (>= 2^64) input yields an empty
/// string, which callers should show as "unavailable" rather than zero.
pub fn number_in_words(value: f64, language: Language) -> String {
    if !value.is_finite() || value < 0.0 || value >= U64_LIMIT {
        return String::new();
    }

    let n = value.trunc() as u64;
    if n == 0 {
        return language.zero().to_string();
    }

    let mut parts = Vec::new();
    push_groups(n, language, &mut parts);
    parts.retain(|p| !p.is_empty());
    parts.join(" ").trim().to_string()
}

/// Hindi words for the integer part of `value`
pub fn number_to_words(value: f64) -> String {
    number_in_words(value, Language::Hindi)
}

/// Indian-English words ("two lakh fifty thousand") for the integer part of `value`
pub fn number_to_english_words(value: f64) -> String {
    number_in_words(value, Language::IndianEnglish)
}

/// Amount rounded to the rupee and spelled with the currency word
pub fn rupees_in(amount: f64, language: Language) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let words = number_in_words(round_half_up(amount), language);
    if words.is_empty() {
        return words;
    }
    format!("{} {}", words, language.rupees())
}

/// Hindi rupee prose, e.g. "इक्कीस हज़ार रुपये"
pub fn rupees_in_words(amount: f64) -> String {
    rupees_in(amount, Language::Hindi)
}

fn push_groups(n: u64, language: Language, parts: &mut Vec<String>) {
    if n >= CRORE {
        push_groups(n / CRORE, language, parts);
        parts.push(language.crore().to_string());
        if n % CRORE > 0 {
            push_groups(n % CRORE, language, parts);
        }
    } else if n >= LAKH {
        push_groups(n / LAKH, language, parts);
        parts.push(language.lakh().to_string());
        if n % LAKH > 0 {
            push_groups(n % LAKH, language, parts);
        }
    } else if n >= THOUSAND {
        push_groups(n / THOUSAND, language, parts);
        parts.push(language.thousand().to_string());
        if n % THOUSAND > 0 {
            push_below_thousand(n % THOUSAND, language, parts);
        }
    } else {
        push_below_thousand(n, language, parts);
    }
}

fn push_below_thousand(n: u64, language: Language, parts: &mut Vec<String>) {
    if n >= 100 {
        parts.push(language.below_hundred(n / 100));
        parts.push(language.hundred().to_string());
        if n % 100 > 0 {
            parts.push(language.below_hundred(n % 100));
        }
    } else {
        parts.push(language.below_hundred(n));
    }
}

/// Format with Indian digit grouping: last three digits, then pairs
///
/// `format_indian_grouping(1234567.0, 2)` gives `"12,34,567.00"`.
pub fn format_indian_grouping(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    let formatted = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let head_len = digits.len().saturating_sub(3);
    for (i, c) in digits[..head_len].iter().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if head_len > 0 {
        grouped.push(',');
    }
    grouped.extend(&digits[head_len..]);

    let sign = if amount < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(number_to_words(0.0), "शून्य");
        assert_eq!(number_to_words(0.99), "शून्य");
        assert_eq!(number_to_words(f64::NAN), "");
        assert_eq!(number_to_words(f64::INFINITY), "");
        assert_eq!(number_to_words(-5.0), "");
    }

    #[test]
    fn test_irregular_twenty_one() {
        assert_eq!(number_to_words(21.0), "इक्कीस");
        assert_eq!(number_to_english_words(21.0), "twenty one");
    }

    #[test]
    fn test_truncates_fraction() {
        assert_eq!(number_to_words(21.9), number_to_words(21.0));
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(number_to_words(100.0), "एक सौ");
        assert_eq!(number_to_words(305.0), "तीन सौ पाँच");
        assert_eq!(number_to_words(999.0), "नौ सौ निन्यानबे");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(number_to_words(1_000.0), "एक हज़ार");
        assert_eq!(number_to_words(63_960.0), "तिरेसठ हज़ार नौ सौ साठ");
        assert_eq!(number_to_words(12_400.0), "बारह हज़ार चार सौ");
    }

    #[test]
    fn test_lakh_without_remainder() {
        assert_eq!(number_to_words(100_000.0), "एक लाख");
        assert_eq!(number_to_english_words(100_000.0), "one lakh");
    }

    #[test]
    fn test_lakh_with_remainder() {
        assert_eq!(number_to_words(250_075.0), "दो लाख पचास हज़ार पचहत्तर");
        assert_eq!(number_to_english_words(250_075.0), "two lakh fifty thousand seventy five");
    }

    #[test]
    fn test_crore() {
        assert_eq!(number_to_words(10_000_000.0), "एक करोड़");
        assert_eq!(
            number_to_english_words(123_456_789.0),
            "twelve crore thirty four lakh fifty six thousand seven hundred eighty nine"
        );
    }

    #[test]
    fn test_beyond_ten_to_the_ten() {
        // 10^10 = 1000 crore
        assert_eq!(number_to_english_words(1e10), "one thousand crore");
        // 10^15 = 1 crore crore
        assert_eq!(number_to_english_words(1e15), "one crore crore");
        assert_eq!(number_to_words(1e10), "एक हज़ार करोड़");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(number_to_english_words(1e20), "");
        assert_eq!(number_to_words(U64_LIMIT), "");
        assert_eq!(rupees_in_words(1e20), "");
        // largest double below 2^64 still spells
        assert!(!number_to_english_words(18_446_744_073_709_549_568.0).is_empty());
    }

    #[test]
    fn test_idempotent() {
        for n in [7.0, 48.0, 1_001.0, 99_999.0, 4_567_890.0, 98_765_432_10.0] {
            let first = number_to_words(n);
            assert!(!first.is_empty());
            assert_eq!(first, number_to_words(n));
            assert!(!first.contains("  "));
            assert_eq!(first, first.trim());
        }
    }

    #[test]
    fn test_rupees_in_words() {
        assert_eq!(rupees_in_words(63_960.4), "तिरेसठ हज़ार नौ सौ साठ रुपये");
        assert_eq!(rupees_in_words(20_999.5), "इक्कीस हज़ार रुपये");
        assert_eq!(rupees_in(1.0, Language::IndianEnglish), "one rupees");
        assert_eq!(rupees_in_words(f64::NAN), "");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian_grouping(1_234_567.0, 2), "12,34,567.00");
        assert_eq!(format_indian_grouping(63_960.0, 0), "63,960");
        assert_eq!(format_indian_grouping(999.0, 2), "999.00");
        assert_eq!(format_indian_grouping(100_000.0, 0), "1,00,000");
        assert_eq!(format_indian_grouping(123_456_789.5, 1), "12,34,56,789.5");
        assert_eq!(format_indian_grouping(-1_500.0, 0), "-1,500");
        assert_eq!(format_indian_grouping(f64::NAN, 2), "");
    }
}
