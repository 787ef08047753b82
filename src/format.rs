use crate::dict::special::DOUBLE_FINALS;
use crate::dict::DictContext;
use crate::options::{Options, Pattern, ToneStyle, UmlautStyle};
use crate::resolve::{is_han, ResolvedReading};
use crate::syllable::{strip_tone, Syllable};
use substring::Substring;

/// 韵母拆成韵头、韵腹、韵尾。
//
//     韵头：带介音的韵母取首字母，见 DOUBLE_FINALS；
//     韵尾：尾部的 ng、n、i、o、u，只在拆出后韵腹非空时成立；
//     韵腹：其余部分，声调符号落在这里。
pub fn split_final(finals: &str) -> (String, String, String) {
    let plain = strip_tone(finals);
    let (head, rest) = if DOUBLE_FINALS.contains(plain.as_str()) {
        (
            finals.substring(0, 1).to_string(),
            finals
                .substring(1, finals.chars().count())
                .to_string(),
        )
    } else {
        (String::new(), finals.to_string())
    };
    for tail in ["ng", "n", "i", "o", "u"] {
        let rest_len = rest.chars().count();
        if rest.ends_with(tail) && rest_len > tail.len() {
            let body = rest.substring(0, rest_len - tail.len()).to_string();
            return (head, body, tail.to_string());
        }
    }
    (head, rest, String::new())
}

fn project(syllable: &Syllable, pattern: Pattern) -> String {
    match pattern {
        Pattern::Pinyin => syllable.pinyin.clone(),
        Pattern::Initial => syllable.initials.clone(),
        Pattern::Final => syllable.finals.clone(),
        Pattern::Num => syllable.tone.to_string(),
        Pattern::First => syllable.pinyin.substring(0, 1).to_string(),
        Pattern::FinalHead => split_final(&syllable.finals).0,
        Pattern::FinalBody => split_final(&syllable.finals).1,
        Pattern::FinalTail => split_final(&syllable.finals).2,
    }
}

fn strip_umlaut(text: String, options: &Options) -> String {
    match &options.umlaut {
        UmlautStyle::Umlaut => text,
        UmlautStyle::V => text.replace('ü', "v"),
        UmlautStyle::Custom(repl) => text.replace('ü', repl),
    }
}

/// 按选项渲染单个音节
pub fn render_syllable(syllable: &Syllable, options: &Options) -> String {
    if options.pattern == Pattern::Num {
        return syllable.tone.to_string();
    }
    let projected = project(syllable, options.pattern);
    match options.tone_style {
        ToneStyle::Symbol => projected,
        ToneStyle::None => strip_umlaut(strip_tone(&projected), options),
        ToneStyle::Num => format!("{}{}", strip_tone(&projected), syllable.tone),
    }
}

/// 渲染一个解析结果，无音节的字符原样输出
pub fn render_one(reading: &ResolvedReading, options: &Options) -> String {
    match reading.syllable.as_ref() {
        Some(syllable) => render_syllable(syllable, options),
        None => reading.origin.to_string(),
    }
}

pub fn render_strings(readings: &[ResolvedReading], options: &Options) -> Vec<String> {
    readings
        .iter()
        .map(|reading| render_one(reading, options))
        .collect()
}

/// 单个字符的完整解析信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub origin: String,
    pub pinyin: String,
    pub initials: String,
    pub finals: String,
    pub num: u8,
    pub first: String,
    pub final_head: String,
    pub final_body: String,
    pub final_tail: String,
    pub is_zh: bool,
    pub polyphonic: Vec<String>,
}

pub fn render_details(ctx: &DictContext, readings: &[ResolvedReading]) -> Vec<Detail> {
    readings
        .iter()
        .map(|reading| match reading.syllable.as_ref() {
            Some(syllable) => {
                let (head, body, tail) = split_final(&syllable.finals);
                Detail {
                    origin: reading.origin.to_string(),
                    pinyin: syllable.pinyin.clone(),
                    initials: syllable.initials.clone(),
                    finals: syllable.finals.clone(),
                    num: syllable.tone,
                    first: syllable.pinyin.substring(0, 1).to_string(),
                    final_head: head,
                    final_body: body,
                    final_tail: tail,
                    is_zh: true,
                    polyphonic: ctx
                        .readings_of(reading.origin)
                        .map(|all| all.to_vec())
                        .unwrap_or_default(),
                }
            }
            None => Detail {
                origin: reading.origin.to_string(),
                pinyin: String::new(),
                initials: String::new(),
                finals: String::new(),
                num: 0,
                first: String::new(),
                final_head: String::new(),
                final_body: String::new(),
                final_tail: String::new(),
                is_zh: is_han(reading.origin),
                polyphonic: Vec::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(origin: char, pinyin: &str) -> ResolvedReading {
        ResolvedReading {
            origin,
            syllable: Some(Syllable::parse(pinyin)),
        }
    }

    #[test]
    fn test_split_final() {
        let cases = vec![
            ("iāng", ("i", "ā", "ng")),
            ("ōng", ("", "ō", "ng")),
            ("ǎo", ("", "ǎ", "o")),
            ("uó", ("u", "ó", "")),
            ("uài", ("u", "à", "i")),
            ("àn", ("", "à", "n")),
            ("í", ("", "í", "")),
            ("ér", ("", "ér", "")),
            ("üè", ("ü", "è", "")),
        ];
        for (finals, (head, body, tail)) in cases {
            assert_eq!(
                split_final(finals),
                (head.to_string(), body.to_string(), tail.to_string()),
                "finals {}",
                finals
            );
        }
    }

    #[test]
    fn test_patterns() {
        let zhong = reading('中', "zhōng");
        let kuai = reading('快', "kuài");
        let cases = vec![
            (&zhong, Pattern::Pinyin, "zhōng"),
            (&zhong, Pattern::Initial, "zh"),
            (&zhong, Pattern::Final, "ōng"),
            (&zhong, Pattern::Num, "1"),
            (&zhong, Pattern::First, "z"),
            (&zhong, Pattern::FinalHead, ""),
            (&zhong, Pattern::FinalBody, "ō"),
            (&zhong, Pattern::FinalTail, "ng"),
            (&kuai, Pattern::FinalHead, "u"),
            (&kuai, Pattern::FinalBody, "à"),
            (&kuai, Pattern::FinalTail, "i"),
        ];
        for (reading, pattern, expected) in cases {
            let options = Options {
                pattern,
                ..Options::default()
            };
            assert_eq!(render_one(reading, &options), expected, "{:?}", pattern);
        }
    }

    #[test]
    fn test_tone_styles() {
        let zhong = reading('中', "zhōng");
        let de = reading('的', "de");
        let cases = vec![
            (&zhong, ToneStyle::Symbol, "zhōng"),
            (&zhong, ToneStyle::None, "zhong"),
            (&zhong, ToneStyle::Num, "zhong1"),
            (&de, ToneStyle::Symbol, "de"),
            (&de, ToneStyle::Num, "de0"),
        ];
        for (reading, tone_style, expected) in cases {
            let options = Options {
                tone_style,
                ..Options::default()
            };
            assert_eq!(render_one(reading, &options), expected, "{:?}", tone_style);
        }
    }

    #[test]
    fn test_umlaut_styles() {
        let lv = reading('绿', "lǜ");
        let with_style = |tone_style, umlaut| Options {
            tone_style,
            umlaut,
            ..Options::default()
        };
        let cases = vec![
            (ToneStyle::None, UmlautStyle::Umlaut, "lü"),
            (ToneStyle::None, UmlautStyle::V, "lv"),
            (ToneStyle::None, UmlautStyle::Custom("yu".to_string()), "lyu"),
            // 只在无声调输出时替换
            (ToneStyle::Num, UmlautStyle::V, "lü4"),
            (ToneStyle::Symbol, UmlautStyle::V, "lǜ"),
        ];
        for (tone_style, umlaut, expected) in cases {
            assert_eq!(
                render_one(&lv, &with_style(tone_style, umlaut)),
                expected
            );
        }
    }

    #[test]
    fn test_unresolved_passthrough() {
        let bang = ResolvedReading {
            origin: '!',
            syllable: None,
        };
        assert_eq!(render_one(&bang, &Options::default()), "!");
        let options = Options {
            tone_style: ToneStyle::Num,
            ..Options::default()
        };
        assert_eq!(render_one(&bang, &options), "!");
    }

    #[test]
    fn test_details() {
        let ctx = DictContext::builtin();
        let readings = vec![
            reading('汉', "hàn"),
            ResolvedReading {
                origin: 'a',
                syllable: None,
            },
        ];
        let details = render_details(&ctx, &readings);

        assert_eq!(details[0].origin, "汉");
        assert_eq!(details[0].pinyin, "hàn");
        assert_eq!(details[0].initials, "h");
        assert_eq!(details[0].finals, "àn");
        assert_eq!(details[0].num, 4);
        assert_eq!(details[0].first, "h");
        assert_eq!(details[0].final_head, "");
        assert_eq!(details[0].final_body, "à");
        assert_eq!(details[0].final_tail, "n");
        assert!(details[0].is_zh);
        assert_eq!(details[0].polyphonic, vec!["hàn".to_string()]);

        assert_eq!(details[1].origin, "a");
        assert_eq!(details[1].pinyin, "");
        assert!(!details[1].is_zh);
        assert!(details[1].polyphonic.is_empty());
    }
}
