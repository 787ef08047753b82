use fnv::FnvHashMap;
use lazy_static::lazy_static;
use substring::Substring;

lazy_static! {
    // 带声调字母 -> (不带声调字母, 声调)
    static ref PHONETIC_SYMBOLS: FnvHashMap<char, (char, u8)> = {
        let mut m = FnvHashMap::default();
        for (symbol, plain, tone) in [
            ('ā', 'a', 1),
            ('á', 'a', 2),
            ('ǎ', 'a', 3),
            ('à', 'a', 4),
            ('ē', 'e', 1),
            ('é', 'e', 2),
            ('ě', 'e', 3),
            ('è', 'e', 4),
            ('ō', 'o', 1),
            ('ó', 'o', 2),
            ('ǒ', 'o', 3),
            ('ò', 'o', 4),
            ('ī', 'i', 1),
            ('í', 'i', 2),
            ('ǐ', 'i', 3),
            ('ì', 'i', 4),
            ('ū', 'u', 1),
            ('ú', 'u', 2),
            ('ǔ', 'u', 3),
            ('ù', 'u', 4),
            ('ǖ', 'ü', 1),
            ('ǘ', 'ü', 2),
            ('ǚ', 'ü', 3),
            ('ǜ', 'ü', 4),
            ('ń', 'n', 2),
            ('ň', 'n', 3),
            ('ǹ', 'n', 4),
        ] {
            m.insert(symbol, (plain, tone));
        }
        m
    };
    static ref INITIALS: [&'static str; 21] = {
        [
            "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "zh", "ch", "sh",
            "r", "z", "c", "s",
        ]
    };
    static ref INITIALS_NOT_STRICT: [&'static str; 23] = {
        [
            "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "zh", "ch", "sh",
            "r", "z", "c", "s", "y", "w",
        ]
    };
}

/// 获取拼音的声调，轻声为 0
pub fn tone_number(pinyin: &str) -> u8 {
    for c in pinyin.chars() {
        if let Some((_, tone)) = PHONETIC_SYMBOLS.get(&c) {
            return *tone;
        }
    }
    0
}

/// 去掉声调符号，如 zhōng -> zhong，lǜ -> lü
pub fn strip_tone(pinyin: &str) -> String {
    pinyin
        .chars()
        .map(|c| match PHONETIC_SYMBOLS.get(&c) {
            Some((plain, _)) => *plain,
            None => c,
        })
        .collect()
}

/// 获取单个拼音中的声母.
//
//     :param strict: 是否严格遵照《汉语拼音方案》来处理声母（y/w 不算声母）
pub fn initial_of(pinyin: &str, strict: bool) -> String {
    let initials = match strict {
        true => INITIALS.to_vec(),
        false => INITIALS_NOT_STRICT.to_vec(),
    };
    for i in initials {
        if pinyin.starts_with(i) {
            return i.to_string();
        }
    }
    "".to_string()
}

/// 获取单个拼音中的韵母（带声调）
pub fn final_of(pinyin: &str, strict: bool) -> String {
    let initials = initial_of(pinyin, strict);
    pinyin
        .substring(initials.chars().count(), pinyin.chars().count())
        .to_string()
}

/// 一个已解析的音节：表层拼音加上声母、韵母、声调三部分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub pinyin: String,
    pub initials: String,
    pub finals: String,
    pub tone: u8,
}

impl Syllable {
    pub fn parse(pinyin: &str) -> Self {
        let initials = initial_of(pinyin, false);
        let finals = final_of(pinyin, false);
        Self {
            pinyin: pinyin.to_string(),
            initials,
            finals,
            tone: tone_number(pinyin),
        }
    }
}
