use crate::dict::DictContext;

const COST_EPS: f64 = 1e-9;

/// 分词算法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizationAlgorithm {
    /// 逆向最大匹配，速度最快，默认算法
    ReverseMaxMatch,
    /// 最大概率路径
    MaxProbability,
    /// 最少词数路径
    MinSegmentCount,
}

/// 分词结果中的一个词段，区间为 [start, end)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// 把一段未被短语词典覆盖的字符切分成词段，全覆盖不重叠。
pub fn segment(ctx: &DictContext, chars: &[char], algorithm: TokenizationAlgorithm) -> Vec<Segment> {
    match algorithm {
        TokenizationAlgorithm::ReverseMaxMatch => reverse_max_match(ctx, chars),
        TokenizationAlgorithm::MaxProbability => lattice_segments(ctx, chars, false),
        TokenizationAlgorithm::MinSegmentCount => lattice_segments(ctx, chars, true),
    }
}

/// 从右向左，每个位置贪心取以它结尾的最长词，无词则退为单字
fn reverse_max_match(ctx: &DictContext, chars: &[char]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut end = chars.len();
    while end > 0 {
        let longest = ctx.max_word_len.min(end);
        let mut len = 1;
        for cand in (2..=longest).rev() {
            let text: String = chars[end - cand..end].iter().collect();
            if ctx.word_index.contains_key(&text) {
                len = cand;
                break;
            }
        }
        segments.push(Segment {
            start: end - len,
            end,
            text: chars[end - len..end].iter().collect(),
        });
        end -= len;
    }
    segments.reverse();
    segments
}

/// 词图上的动态规划，从右往前逐位置求最优路径。
//
//     prefer_min_count 为假：最大化词频对数和，同分取更少词段，再取更长首段；
//     prefer_min_count 为真：最小化词段数，同数取最大概率，再取更长首段。
//     单字永远可用（词典无此单字时按权重 1 计），因此任何区间都有完整切分。
fn lattice_segments(ctx: &DictContext, chars: &[char], prefer_min_count: bool) -> Vec<Segment> {
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }

    let mut best_cost = vec![f64::INFINITY; n + 1];
    let mut best_keys = vec![usize::MAX; n + 1];
    let mut best_next = vec![0usize; n + 1];
    best_cost[n] = 0.0;
    best_keys[n] = 0;

    for pos in (0..n).rev() {
        let mut edges: Vec<(usize, u32)> = ctx
            .word_trie
            .walk(chars, pos)
            .into_iter()
            .map(|(end, id)| (end, ctx.words[id].weight))
            .collect();
        if !edges.iter().any(|(end, _)| *end == pos + 1) {
            edges.push((pos + 1, 1));
        }

        for (end, weight) in edges {
            if best_cost[end].is_infinite() {
                continue;
            }
            let cand_cost = -(weight as f64).ln() + best_cost[end];
            let cand_keys = 1 + best_keys[end];

            let take = if prefer_min_count {
                cand_keys < best_keys[pos]
                    || (cand_keys == best_keys[pos]
                        && (cand_cost < best_cost[pos] - COST_EPS
                            || ((cand_cost - best_cost[pos]).abs() < COST_EPS
                                && end > best_next[pos])))
            } else {
                cand_cost < best_cost[pos] - COST_EPS
                    || ((cand_cost - best_cost[pos]).abs() < COST_EPS
                        && (cand_keys < best_keys[pos]
                            || (cand_keys == best_keys[pos] && end > best_next[pos])))
            };
            if take {
                best_cost[pos] = cand_cost;
                best_keys[pos] = cand_keys;
                best_next[pos] = end;
            }
        }
    }

    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < n {
        let end = best_next[pos];
        segments.push(Segment {
            start: pos,
            end,
            text: chars[pos..end].iter().collect(),
        });
        pos = end;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::{CustomTables, WordSpec};
    use std::collections::HashMap;

    fn context_of(words: Vec<(&str, u32)>) -> DictContext {
        let tables = CustomTables {
            words: words
                .into_iter()
                .map(|(text, weight)| {
                    (
                        text.to_string(),
                        WordSpec {
                            weight,
                            readings: None,
                        },
                    )
                })
                .collect::<HashMap<_, _>>(),
            ..CustomTables::default()
        };
        DictContext::from_tables(tables).unwrap()
    }

    fn texts(segments: &[Segment]) -> Vec<String> {
        segments.iter().map(|s| s.text.clone()).collect()
    }

    fn assert_partition(segments: &[Segment], len: usize) {
        let mut pos = 0;
        for s in segments {
            assert_eq!(s.start, pos);
            assert!(s.end > s.start);
            pos = s.end;
        }
        assert_eq!(pos, len);
    }

    #[test]
    fn test_reverse_max_match() {
        let ctx = context_of(vec![
            ("研究", 100),
            ("研究生", 30),
            ("生命", 60),
            ("起源", 40),
        ]);
        let chars: Vec<char> = "研究生命起源".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::ReverseMaxMatch);
        assert_eq!(texts(&segments), vec!["研究", "生命", "起源"]);
        assert_partition(&segments, chars.len());
    }

    #[test]
    fn test_reverse_max_match_single_char_fallback() {
        let ctx = context_of(vec![("人民", 100), ("公益", 50)]);
        let chars: Vec<char> = "为人民办公益".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::ReverseMaxMatch);
        assert_eq!(texts(&segments), vec!["为", "人民", "办", "公益"]);
    }

    #[test]
    fn test_max_probability_follows_weights() {
        let ctx = context_of(vec![
            ("研究", 100),
            ("研究生", 2),
            ("生命", 60),
            ("起源", 40),
        ]);
        let chars: Vec<char> = "研究生命起源".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::MaxProbability);
        assert_eq!(texts(&segments), vec!["研究", "生命", "起源"]);
    }

    #[test]
    fn test_max_probability_tie_prefers_longer_leading() {
        // 权重全同，词段数同为三，取更长首段
        let ctx = context_of(vec![
            ("研究", 10),
            ("研究生", 10),
            ("生命", 10),
            ("命", 10),
            ("起源", 10),
        ]);
        let chars: Vec<char> = "研究生命起源".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::MaxProbability);
        assert_eq!(texts(&segments), vec!["研究生", "命", "起源"]);
    }

    #[test]
    fn test_min_segment_count() {
        let ctx = context_of(vec![
            ("中华", 500),
            ("人民", 400),
            ("共和国", 100),
            ("中华人民", 50),
        ]);
        let chars: Vec<char> = "中华人民共和国".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::MinSegmentCount);
        assert_eq!(texts(&segments), vec!["中华人民", "共和国"]);
    }

    #[test]
    fn test_min_segment_count_tie_uses_probability() {
        let ctx = context_of(vec![("天地", 10), ("天", 5), ("地人", 100)]);
        let chars: Vec<char> = "天地人".chars().collect();
        let segments = segment(&ctx, &chars, TokenizationAlgorithm::MinSegmentCount);
        // 两词方案有两种，取概率更大的 天|地人
        assert_eq!(texts(&segments), vec!["天", "地人"]);
    }

    #[test]
    fn test_unknown_span_degenerates_to_single_chars() {
        let ctx = context_of(vec![("人民", 100)]);
        let chars: Vec<char> = "山川湖海".chars().collect();
        for algorithm in [
            TokenizationAlgorithm::ReverseMaxMatch,
            TokenizationAlgorithm::MaxProbability,
            TokenizationAlgorithm::MinSegmentCount,
        ] {
            let segments = segment(&ctx, &chars, algorithm);
            assert_eq!(texts(&segments), vec!["山", "川", "湖", "海"]);
            assert_partition(&segments, chars.len());
        }
    }

    #[test]
    fn test_empty_span() {
        let ctx = context_of(vec![("人民", 100)]);
        for algorithm in [
            TokenizationAlgorithm::ReverseMaxMatch,
            TokenizationAlgorithm::MaxProbability,
            TokenizationAlgorithm::MinSegmentCount,
        ] {
            assert!(segment(&ctx, &[], algorithm).is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let ctx = context_of(vec![("研究", 100), ("研究生", 30), ("生命", 60)]);
        let chars: Vec<char> = "研究生命研究".chars().collect();
        for algorithm in [
            TokenizationAlgorithm::ReverseMaxMatch,
            TokenizationAlgorithm::MaxProbability,
            TokenizationAlgorithm::MinSegmentCount,
        ] {
            let first = segment(&ctx, &chars, algorithm);
            let second = segment(&ctx, &chars, algorithm);
            assert_eq!(first, second);
            assert_partition(&first, chars.len());
        }
    }
}
