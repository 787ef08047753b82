use crate::dict::DictContext;
use crate::finals::{normalize_final, normalize_finals};
use crate::matcher::{find_matches, select_matches};
use crate::sandhi::apply_tone_sandhi;
use crate::segment::{segment, TokenizationAlgorithm};
use crate::syllable::Syllable;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref RE_HAN: Regex = Regex::new(r"[一-龥]").unwrap();
}

/// 汉字判定，与词典收字范围一致
pub fn is_han(ch: char) -> bool {
    let mut buf = [0u8; 4];
    RE_HAN.is_match(ch.encode_utf8(&mut buf))
}

/// 姓氏读音模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurnameMode {
    /// 不启用
    Off,
    /// 全部字按姓氏读音
    All,
    /// 仅首字按姓氏读音
    Head,
}

/// 输入中一个字符的解析结果。非汉字和词典缺字没有音节，原样保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReading {
    pub origin: char,
    pub syllable: Option<Syllable>,
}

/// 整条解析流水线：短语匹配、姓氏覆盖、未覆盖区间分词、逐字兜底，
/// 然后变调与韵母还原。输出与输入字符一一对应。
pub fn resolve(
    ctx: &DictContext,
    input: &str,
    algorithm: TokenizationAlgorithm,
    surname_mode: SurnameMode,
    tone_sandhi: bool,
) -> Vec<ResolvedReading> {
    let chars: Vec<char> = input.chars().collect();
    let mut readings: Vec<ResolvedReading> = chars
        .iter()
        .map(|ch| ResolvedReading {
            origin: *ch,
            syllable: None,
        })
        .collect();
    if chars.is_empty() {
        return readings;
    }

    let matches = select_matches(
        find_matches(&ctx.phrase_trie, &ctx.phrase_entries, &chars),
        chars.len(),
    );
    let mut claimed = vec![false; chars.len()];
    for m in matches.iter() {
        let entry = &ctx.phrase_entries[m.entry];
        for (offset, reading) in entry.readings.iter().enumerate() {
            claimed[m.start + offset] = true;
            readings[m.start + offset].syllable = Some(Syllable::parse(reading));
        }
    }

    // 未被短语覆盖的连续汉字区间逐段分词
    let mut cursor = 0;
    while cursor < chars.len() {
        if claimed[cursor] || !is_han(chars[cursor]) {
            cursor += 1;
            continue;
        }
        let start = cursor;
        while cursor < chars.len() && !claimed[cursor] && is_han(chars[cursor]) {
            cursor += 1;
        }
        resolve_span(ctx, &chars, start, cursor, algorithm, surname_mode, &mut readings);
    }

    if tone_sandhi {
        apply_tone_sandhi(&mut readings);
    }
    normalize_finals(&mut readings);
    readings
}

/// 单字的全部候选读音，用于多音字展开。姓氏读音排在最前，重复候选去除。
pub fn candidates(ctx: &DictContext, ch: char, surname_mode: SurnameMode) -> Vec<Syllable> {
    let mut list: Vec<String> = Vec::new();
    if surname_mode != SurnameMode::Off {
        if let Some(reading) = ctx.surname_reading(ch) {
            list.push(reading.to_string());
        }
    }
    if let Some(all) = ctx.readings_of(ch) {
        for candidate in all.iter() {
            if !list.contains(candidate) {
                list.push(candidate.clone());
            }
        }
    }
    list.iter()
        .map(|pinyin| {
            let mut syllable = Syllable::parse(pinyin);
            if let Some(finals) = normalize_final(&syllable.initials, &syllable.finals) {
                syllable.finals = finals;
            }
            syllable
        })
        .collect()
}

fn resolve_span(
    ctx: &DictContext,
    chars: &[char],
    start: usize,
    end: usize,
    algorithm: TokenizationAlgorithm,
    surname_mode: SurnameMode,
    readings: &mut [ResolvedReading],
) {
    for seg in segment(ctx, &chars[start..end], algorithm) {
        let seg_len = seg.end - seg.start;
        let word_readings = if seg_len >= 2 {
            ctx.word(&seg.text).and_then(|word| word.readings.as_ref())
        } else {
            None
        };
        for offset in 0..seg_len {
            let pos = start + seg.start + offset;
            let ch = chars[pos];
            let surname = match surname_mode {
                SurnameMode::Off => None,
                SurnameMode::All => ctx.surname_reading(ch),
                SurnameMode::Head if pos == 0 => ctx.surname_reading(ch),
                SurnameMode::Head => None,
            };
            let pinyin = surname
                .or_else(|| word_readings.map(|list| list[offset].as_str()))
                .or_else(|| ctx.readings_of(ch).map(|all| all[0].as_str()));
            match pinyin {
                Some(pinyin) => readings[pos].syllable = Some(Syllable::parse(pinyin)),
                None => debug!("no dictionary reading for {}", ch),
            }
        }
    }
}
