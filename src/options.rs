use crate::resolve::SurnameMode;
use crate::segment::TokenizationAlgorithm;

/// 声调呈现方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStyle {
    /// 符号声调，如 pīn
    Symbol,
    /// 数字声调缀在末尾，如 pin1，轻声为 0
    Num,
    /// 不带声调，如 pin
    None,
}

/// 输出取音节的哪一部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Pinyin,
    Initial,
    Final,
    Num,
    First,
    FinalHead,
    FinalBody,
    FinalTail,
}

/// ü 的书写形式，只在无声调输出时生效
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UmlautStyle {
    /// 保留 ü
    Umlaut,
    /// ü 写作 v
    V,
    /// ü 替换为指定字符串，如拼音输入法常用的 yu
    Custom(String),
}

/// 一次转换的全部选项
#[derive(Debug, Clone)]
pub struct Options {
    pub pattern: Pattern,
    pub tone_style: ToneStyle,
    pub separator: String,
    /// 单字输入时展开全部候选读音
    pub multiple: bool,
    pub surname: SurnameMode,
    pub tone_sandhi: bool,
    pub algorithm: TokenizationAlgorithm,
    pub umlaut: UmlautStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: Pattern::Pinyin,
            tone_style: ToneStyle::Symbol,
            separator: " ".to_string(),
            multiple: false,
            surname: SurnameMode::Off,
            tone_sandhi: true,
            algorithm: TokenizationAlgorithm::ReverseMaxMatch,
            umlaut: UmlautStyle::Umlaut,
        }
    }
}
