//! 汉字转拼音：短语词典优先，未覆盖部分分词后逐字取音，
//! 支持多音字展开、姓氏模式、「一」「不」变调与多种输出格式。
//!
//! ```
//! use han2pinyin::Options;
//!
//! assert_eq!(han2pinyin::pinyin("汉语拼音", &Options::default()), "hàn yǔ pīn yīn");
//! ```

pub mod dict;
pub mod finals;
pub mod format;
pub mod matcher;
pub mod options;
pub mod resolve;
pub mod sandhi;
pub mod segment;
pub mod syllable;

pub use dict::{CustomTables, DictContext};
pub use format::Detail;
pub use options::{Options, Pattern, ToneStyle, UmlautStyle};
pub use resolve::{ResolvedReading, SurnameMode};
pub use segment::TokenizationAlgorithm;
pub use syllable::Syllable;

use lazy_static::lazy_static;

lazy_static! {
    static ref BUILTIN: DictContext = DictContext::builtin();
}

/// 内置词典的共享实例，首次使用时构造一次
pub fn builtin() -> &'static DictContext {
    &BUILTIN
}

/// 内置词典转换，`separator` 连接
pub fn pinyin(input: &str, options: &Options) -> String {
    pinyin_with(builtin(), input, options)
}

pub fn pinyin_with(ctx: &DictContext, input: &str, options: &Options) -> String {
    pinyin_vec_with(ctx, input, options).join(&options.separator)
}

/// 逐字符的转换结果
pub fn pinyin_vec(input: &str, options: &Options) -> Vec<String> {
    pinyin_vec_with(builtin(), input, options)
}

pub fn pinyin_vec_with(ctx: &DictContext, input: &str, options: &Options) -> Vec<String> {
    if let Some((_, candidates)) = expanded_candidates(ctx, input, options) {
        // 多音字展开按渲染后的形式去重，去声调后同形的候选只留一个
        let mut out: Vec<String> = Vec::new();
        for syllable in candidates.iter() {
            let rendered = format::render_syllable(syllable, options);
            if !out.contains(&rendered) {
                out.push(rendered);
            }
        }
        return out;
    }
    let readings = resolve::resolve(
        ctx,
        input,
        options.algorithm,
        options.surname,
        options.tone_sandhi,
    );
    format::render_strings(&readings, options)
}

/// 逐字符的完整解析信息
pub fn pinyin_detail(input: &str, options: &Options) -> Vec<Detail> {
    pinyin_detail_with(builtin(), input, options)
}

pub fn pinyin_detail_with(ctx: &DictContext, input: &str, options: &Options) -> Vec<Detail> {
    if let Some((origin, candidates)) = expanded_candidates(ctx, input, options) {
        let readings: Vec<ResolvedReading> = candidates
            .into_iter()
            .map(|syllable| ResolvedReading {
                origin,
                syllable: Some(syllable),
            })
            .collect();
        return format::render_details(ctx, &readings);
    }
    let readings = resolve::resolve(
        ctx,
        input,
        options.algorithm,
        options.surname,
        options.tone_sandhi,
    );
    format::render_details(ctx, &readings)
}

/// 多音字展开只对单个汉字输入生效
fn expanded_candidates(
    ctx: &DictContext,
    input: &str,
    options: &Options,
) -> Option<(char, Vec<Syllable>)> {
    if !options.multiple {
        return None;
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            let list = resolve::candidates(ctx, ch, options.surname);
            if list.is_empty() {
                None
            } else {
                Some((ch, list))
            }
        }
        _ => None,
    }
}
