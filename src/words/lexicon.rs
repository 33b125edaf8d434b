//! Number words for Hindi and Indian-English

/// Hindi words for 0..=99
///
/// Compound numbers are contracted forms that cannot be assembled from a
/// tens word and a units word, so every value is listed. Index 0 is empty
/// because it is only ever looked up as a remainder.
pub const HINDI_BELOW_HUNDRED: [&str; 100] = [
    "", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरेपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरेसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उन्यासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानबे", "बानबे", "तिरानबे", "चौरानबे", "पंचानबे", "छियानबे", "सत्तानबे", "अट्ठानबे", "निन्यानबे",
];

pub const HINDI_ZERO: &str = "शून्य";
pub const HINDI_HUNDRED: &str = "सौ";
pub const HINDI_THOUSAND: &str = "हज़ार";
pub const HINDI_LAKH: &str = "लाख";
pub const HINDI_CRORE: &str = "करोड़";
pub const HINDI_RUPEES: &str = "रुपये";

const ENGLISH_ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const ENGLISH_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const ENGLISH_ZERO: &str = "zero";
pub const ENGLISH_HUNDRED: &str = "hundred";
pub const ENGLISH_THOUSAND: &str = "thousand";
pub const ENGLISH_LAKH: &str = "lakh";
pub const ENGLISH_CRORE: &str = "crore";
pub const ENGLISH_RUPEES: &str = "rupees";

/// English words for 0..=99; English compounds are regular
pub fn english_below_hundred(n: usize) -> String {
    match n {
        0..=19 => ENGLISH_ONES[n].to_string(),
        _ => {
            let tens = ENGLISH_TENS[n / 10];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ENGLISH_ONES[ones]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hindi_table_complete() {
        assert!(HINDI_BELOW_HUNDRED[0].is_empty());
        assert!(HINDI_BELOW_HUNDRED[1..].iter().all(|w| !w.is_empty() && !w.contains(' ')));
    }

    #[test]
    fn test_hindi_irregular_compounds() {
        assert_eq!(HINDI_BELOW_HUNDRED[21], "इक्कीस");
        assert_eq!(HINDI_BELOW_HUNDRED[49], "उनचास");
        assert_eq!(HINDI_BELOW_HUNDRED[99], "निन्यानबे");
    }

    #[test]
    fn test_english_below_hundred() {
        assert_eq!(english_below_hundred(0), "");
        assert_eq!(english_below_hundred(13), "thirteen");
        assert_eq!(english_below_hundred(40), "forty");
        assert_eq!(english_below_hundred(21), "twenty one");
    }
}
