use crate::dict::PhraseEntry;
use fnv::FnvHashMap;

/// 按字符索引词条的前缀树，从任一起点一次下行取出全部命中的词条。
#[derive(Debug, Default)]
pub struct CharTrie {
    children: FnvHashMap<char, Box<CharTrie>>,
    entries: Vec<usize>,
}

impl CharTrie {
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, text: &str, id: usize) {
        let mut node = self;
        for ch in text.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(CharTrie::new()));
        }
        node.entries.push(id);
    }

    /// 从 input[start] 开始沿树下行，返回所有结束位置与词条编号
    pub fn walk(&self, input: &[char], start: usize) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    for id in node.entries.iter() {
                        found.push((idx, *id));
                    }
                }
                None => break,
            }
        }
        found
    }
}

/// 词典短语在输入中的一次出现
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub priority: u8,
    pub entry: usize,
}

/// 一次左到右扫描，找出短语词典在输入中的全部出现
pub fn find_matches(trie: &CharTrie, entries: &[PhraseEntry], chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    for start in 0..chars.len() {
        for (end, id) in trie.walk(chars, start) {
            matches.push(Match {
                start,
                end,
                priority: entries[id].priority,
                entry: id,
            });
        }
    }
    matches
}

/// 重叠消解：优先级高者先取，同级取更长，再同取更靠左；
/// 选中的短语占住整段字符，与已占字符相交的候选全部丢弃。
pub fn select_matches(mut candidates: Vec<Match>, input_len: usize) -> Vec<Match> {
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut claimed = vec![false; input_len];
    let mut selected = Vec::new();
    for m in candidates {
        if claimed[m.start..m.end].iter().any(|c| *c) {
            continue;
        }
        for slot in claimed[m.start..m.end].iter_mut() {
            *slot = true;
        }
        selected.push(m);
    }
    selected.sort_by_key(|m| m.start);
    selected
}
