use lazy_static::lazy_static;
use std::collections::HashSet;

/// ü 行韵母跟 j、q、x 相拼时写作 u，这三个声母需要还原 ü
pub const SPECIAL_INITIALS: [&str; 3] = ["j", "q", "x"];

/// u 写法的韵母与 ü 写法的对应，长韵母在前，逐项精确比对
pub const SPECIAL_FINALS: [(&str, &str); 20] = [
    ("uān", "üān"),
    ("uán", "üán"),
    ("uǎn", "üǎn"),
    ("uàn", "üàn"),
    ("uan", "üan"),
    ("uē", "üē"),
    ("ué", "üé"),
    ("uě", "üě"),
    ("uè", "üè"),
    ("ue", "üe"),
    ("ūn", "ǖn"),
    ("ún", "ǘn"),
    ("ǔn", "ǚn"),
    ("ùn", "ǜn"),
    ("un", "ün"),
    ("ū", "ǖ"),
    ("ú", "ǘ"),
    ("ǔ", "ǚ"),
    ("ù", "ǜ"),
    ("u", "ü"),
];

// 「一」「不」变调：触发字、本调、后继声调、改写后的拼音
pub const SANDHI_RULES: [(char, u8, u8, &str); 5] = [
    ('一', 1, 4, "yí"),
    ('一', 1, 1, "yì"),
    ('一', 1, 2, "yì"),
    ('一', 1, 3, "yì"),
    ('不', 4, 4, "bú"),
];

lazy_static! {
    // 带韵头（介音）的韵母
    pub static ref DOUBLE_FINALS: HashSet<&'static str> = vec![
        "ia", "ian", "iang", "iao", "ie", "iu", "iong", "ua", "uai", "uan", "uang", "ue", "ui",
        "uo", "üan", "üe",
    ]
    .into_iter()
    .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_finals_order() {
        // 长韵母在前，避免部分替换
        let uan_pos = SPECIAL_FINALS.iter().position(|(p, _)| *p == "uan").unwrap();
        let u_pos = SPECIAL_FINALS.iter().position(|(p, _)| *p == "u").unwrap();
        assert!(uan_pos < u_pos);
        assert_eq!(SPECIAL_FINALS.len(), 20);
    }

    #[test]
    fn test_double_finals() {
        assert!(DOUBLE_FINALS.contains("iang"));
        assert!(DOUBLE_FINALS.contains("üe"));
        assert!(!DOUBLE_FINALS.contains("ong"));
        assert!(!DOUBLE_FINALS.contains("an"));
    }
}
