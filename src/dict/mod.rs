pub mod chars;
pub mod phrases;
pub mod special;
pub mod surnames;
pub mod words;

use crate::matcher::CharTrie;
use anyhow::{bail, Context, Result};
use fnv::FnvHashMap;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;

/// 短语词条：文本、逐字读音、优先级
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    pub text: String,
    pub readings: Vec<String>,
    pub priority: u8,
}

/// 分词词条：文本、词频权重、可选的逐字读音
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub weight: u32,
    pub readings: Option<Vec<String>>,
}

/// 外部传入的词典表，可从 JSON 反序列化。
//
//     chars:    "好" -> "hǎo,hào"（候选逗号分隔，常用在前）
//     phrases:  文本 + 空格分隔的逐字读音 + 优先级
//     words:    词 -> 权重与可选读音
//     surnames: "单" -> "shàn"
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CustomTables {
    #[serde(default)]
    pub chars: HashMap<String, String>,
    #[serde(default)]
    pub phrases: Vec<PhraseSpec>,
    #[serde(default)]
    pub words: HashMap<String, WordSpec>,
    #[serde(default)]
    pub surnames: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhraseSpec {
    pub text: String,
    pub readings: String,
    pub priority: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordSpec {
    pub weight: u32,
    #[serde(default)]
    pub readings: Option<String>,
}

impl CustomTables {
    /// 从 JSON 文件读取词典表
    pub fn from_json_file(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open dict file {}", path))?;
        let tables = serde_json::from_reader(&file)
            .with_context(|| format!("Failed to parse dict file {}", path))?;
        Ok(tables)
    }
}

/// 所有词典的只读容器，构造一次后在调用间共享。
pub struct DictContext {
    pub(crate) reading_table: FnvHashMap<char, Vec<String>>,
    pub(crate) phrase_entries: Vec<PhraseEntry>,
    pub(crate) phrase_trie: CharTrie,
    pub(crate) words: Vec<WordEntry>,
    pub(crate) word_index: FnvHashMap<String, usize>,
    pub(crate) word_trie: CharTrie,
    pub(crate) max_word_len: usize,
    pub(crate) surname_table: FnvHashMap<char, String>,
}

impl DictContext {
    /// 内置词典。进程内通常只构造一次，见 crate 根部的共享实例。
    pub fn builtin() -> Self {
        let mut tables = CustomTables::default();
        for (ch, readings) in chars::CHAR_READINGS {
            tables.chars.insert(ch.to_string(), readings.to_string());
        }
        for (table, priority) in [
            (phrases::PHRASES_2, 2u8),
            (phrases::PHRASES_3, 3u8),
            (phrases::PHRASES_4, 4u8),
            (phrases::PHRASES_5, 5u8),
        ] {
            for (text, readings) in table {
                tables.phrases.push(PhraseSpec {
                    text: text.to_string(),
                    readings: readings.to_string(),
                    priority,
                });
            }
        }
        for (text, weight, readings) in words::WORD_WEIGHTS {
            tables.words.insert(
                text.to_string(),
                WordSpec {
                    weight: *weight,
                    readings: readings.map(|r| r.to_string()),
                },
            );
        }
        for (ch, reading) in surnames::SURNAME_READINGS {
            tables.surnames.insert(ch.to_string(), reading.to_string());
        }
        Self::from_tables(tables).expect("builtin dictionary tables are malformed")
    }

    /// 从外部词典表构造。表中数据不合法视为致命错误，在这里一次性报出，
    /// 解析调用本身不再返回错误。
    pub fn from_tables(tables: CustomTables) -> Result<Self> {
        let mut reading_table = FnvHashMap::default();
        for (key, value) in tables.chars.iter() {
            let ch = single_char(key).with_context(|| format!("char entry '{}'", key))?;
            let candidates: Vec<String> = value
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if candidates.is_empty() {
                bail!("char entry '{}' has no readings", key);
            }
            reading_table.insert(ch, candidates);
        }

        let mut phrase_entries = Vec::new();
        let mut phrase_trie = CharTrie::new();
        for spec in tables.phrases.iter() {
            let len = spec.text.chars().count();
            if !(2..=5).contains(&len) {
                bail!(
                    "phrase entry '{}' has length {}, expected 2 to 5",
                    spec.text,
                    len
                );
            }
            let readings: Vec<String> = spec
                .readings
                .split_whitespace()
                .map(|r| r.to_string())
                .collect();
            if readings.len() != len {
                bail!(
                    "phrase entry '{}' has {} readings for {} characters",
                    spec.text,
                    readings.len(),
                    len
                );
            }
            phrase_trie.insert(&spec.text, phrase_entries.len());
            phrase_entries.push(PhraseEntry {
                text: spec.text.clone(),
                readings,
                priority: spec.priority,
            });
        }

        let mut words = Vec::new();
        let mut word_index = FnvHashMap::default();
        let mut word_trie = CharTrie::new();
        let mut max_word_len = 0;
        for (text, spec) in tables.words.iter() {
            let len = text.chars().count();
            if len == 0 {
                bail!("word entry with empty text");
            }
            if spec.weight == 0 {
                bail!("word entry '{}' has zero weight", text);
            }
            let readings = match spec.readings.as_ref() {
                Some(value) => {
                    let list: Vec<String> =
                        value.split_whitespace().map(|r| r.to_string()).collect();
                    if list.len() != len {
                        bail!(
                            "word entry '{}' has {} readings for {} characters",
                            text,
                            list.len(),
                            len
                        );
                    }
                    Some(list)
                }
                None => None,
            };
            word_trie.insert(text, words.len());
            word_index.insert(text.clone(), words.len());
            max_word_len = max_word_len.max(len);
            words.push(WordEntry {
                text: text.clone(),
                weight: spec.weight,
                readings,
            });
        }

        let mut surname_table = FnvHashMap::default();
        for (key, value) in tables.surnames.iter() {
            let ch = single_char(key).with_context(|| format!("surname entry '{}'", key))?;
            if value.trim().is_empty() {
                bail!("surname entry '{}' has no reading", key);
            }
            surname_table.insert(ch, value.trim().to_string());
        }

        info!(
            "dictionary context: {} chars, {} phrases, {} words, {} surnames",
            reading_table.len(),
            phrase_entries.len(),
            words.len(),
            surname_table.len()
        );

        Ok(Self {
            reading_table,
            phrase_entries,
            phrase_trie,
            words,
            word_index,
            word_trie,
            max_word_len,
            surname_table,
        })
    }

    /// 单字的全部候选读音，常用在前
    pub fn readings_of(&self, ch: char) -> Option<&[String]> {
        self.reading_table.get(&ch).map(|v| v.as_slice())
    }

    pub fn surname_reading(&self, ch: char) -> Option<&str> {
        self.surname_table.get(&ch).map(|s| s.as_str())
    }

    pub fn word(&self, text: &str) -> Option<&WordEntry> {
        self.word_index.get(text).map(|id| &self.words[*id])
    }
}

fn single_char(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("expected a single character, got '{}'", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let ctx = DictContext::builtin();
        assert!(ctx.reading_table.len() > 400);
        assert!(ctx.phrase_entries.len() > 100);
        assert!(ctx.words.len() > 100);
        assert!(ctx.surname_table.len() > 20);

        assert_eq!(
            ctx.readings_of('好'),
            Some(vec!["hǎo".to_string(), "hào".to_string()].as_slice())
        );
        assert_eq!(ctx.surname_reading('能'), Some("nài"));
        assert!(ctx.word("银行").unwrap().weight > 0);
    }

    #[test]
    fn test_phrase_reading_count_mismatch_is_fatal() {
        let tables = CustomTables {
            phrases: vec![PhraseSpec {
                text: "中国".to_string(),
                readings: "zhōng".to_string(),
                priority: 2,
            }],
            ..CustomTables::default()
        };
        assert!(DictContext::from_tables(tables).is_err());
    }

    #[test]
    fn test_phrase_length_out_of_range_is_fatal() {
        let tables = CustomTables {
            phrases: vec![PhraseSpec {
                text: "中华人民共和国".to_string(),
                readings: "zhōng huá rén mín gòng hé guó".to_string(),
                priority: 5,
            }],
            ..CustomTables::default()
        };
        assert!(DictContext::from_tables(tables).is_err());
    }

    #[test]
    fn test_zero_weight_word_is_fatal() {
        let tables = CustomTables {
            words: HashMap::from([(
                "人民".to_string(),
                WordSpec {
                    weight: 0,
                    readings: None,
                },
            )]),
            ..CustomTables::default()
        };
        assert!(DictContext::from_tables(tables).is_err());
    }

    #[test]
    fn test_multi_char_key_is_fatal() {
        let tables = CustomTables {
            chars: HashMap::from([("好的".to_string(), "hǎo".to_string())]),
            ..CustomTables::default()
        };
        assert!(DictContext::from_tables(tables).is_err());
    }

    #[test]
    fn test_word_reading_count_mismatch_is_fatal() {
        let tables = CustomTables {
            words: HashMap::from([(
                "银行".to_string(),
                WordSpec {
                    weight: 10,
                    readings: Some("yín".to_string()),
                },
            )]),
            ..CustomTables::default()
        };
        assert!(DictContext::from_tables(tables).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "chars": {"好": "hǎo,hào"},
            "phrases": [{"text": "你好", "readings": "nǐ hǎo", "priority": 2}],
            "words": {"你好": {"weight": 10}},
            "surnames": {"单": "shàn"}
        }"#;
        let tables: CustomTables = serde_json::from_str(json).unwrap();
        let ctx = DictContext::from_tables(tables).unwrap();
        assert_eq!(ctx.readings_of('好').unwrap().len(), 2);
        assert_eq!(ctx.surname_reading('单'), Some("shàn"));
        assert!(ctx.word("你好").is_some());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join("han2pinyin_tables.json");
        std::fs::write(
            &path,
            r#"{"chars": {"好": "hǎo,hào"}, "surnames": {"单": "shàn"}}"#,
        )
        .unwrap();
        let tables = CustomTables::from_json_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        let ctx = DictContext::from_tables(tables).unwrap();
        assert_eq!(ctx.readings_of('好').unwrap().len(), 2);
        assert_eq!(ctx.surname_reading('单'), Some("shàn"));

        assert!(CustomTables::from_json_file("/no/such/dict.json").is_err());
    }
}
