use crate::dict::special::{SPECIAL_FINALS, SPECIAL_INITIALS};
use crate::resolve::ResolvedReading;

/// ü 行韵母跟声母 j、q、x 拼的时候写成 ju、qu、xu，韵母部分还原成 ü 行。
/// 表层拼音保持 u 写法，只改写韵母部分。
pub fn normalize_final(initials: &str, finals: &str) -> Option<String> {
    if !SPECIAL_INITIALS.contains(&initials) {
        return None;
    }
    for (plain, umlaut) in SPECIAL_FINALS.iter() {
        if finals == *plain {
            return Some(umlaut.to_string());
        }
    }
    None
}

pub fn normalize_finals(readings: &mut [ResolvedReading]) {
    for reading in readings.iter_mut() {
        if let Some(syllable) = reading.syllable.as_mut() {
            if let Some(finals) = normalize_final(&syllable.initials, &syllable.finals) {
                syllable.finals = finals;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::Syllable;

    #[test]
    fn test_normalize_final() {
        let cases = vec![
            ("j", "ū", Some("ǖ")),
            ("q", "uè", Some("üè")),
            ("x", "uǎn", Some("üǎn")),
            ("j", "ùn", Some("ǜn")),
            ("x", "ué", Some("üé")),
            // j、q、x 之外的声母不改写
            ("b", "u", None),
            ("l", "ù", None),
            ("zh", "ū", None),
            // 不在表中的韵母不改写
            ("j", "iā", None),
            ("q", "ǐ", None),
        ];
        for (initials, finals, expected) in cases {
            assert_eq!(
                normalize_final(initials, finals),
                expected.map(|s: &str| s.to_string())
            );
        }
    }

    #[test]
    fn test_normalize_finals_pass() {
        let mut readings = vec![
            ResolvedReading {
                origin: '居',
                syllable: Some(Syllable::parse("jū")),
            },
            ResolvedReading {
                origin: '不',
                syllable: Some(Syllable::parse("bù")),
            },
            ResolvedReading {
                origin: '!',
                syllable: None,
            },
        ];
        normalize_finals(&mut readings);

        let ju = readings[0].syllable.as_ref().unwrap();
        assert_eq!(ju.finals, "ǖ");
        // 表层拼音保持 u 写法
        assert_eq!(ju.pinyin, "jū");

        let bu = readings[1].syllable.as_ref().unwrap();
        assert_eq!(bu.finals, "ù");
        assert!(readings[2].syllable.is_none());
    }
}
