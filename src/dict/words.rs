//! 分词词频表。权重为相对词频，供最大概率切分使用。
//! 第三列为可选的逐字读音，仅在词内读音偏离单字默认候选时给出。

pub const WORD_WEIGHTS: &[(&str, u32, Option<&str>)] = &[
    // 单字
    ("的", 95000, None),
    ("是", 46000, None),
    ("了", 38000, None),
    ("我", 35000, None),
    ("不", 32000, None),
    ("在", 29000, None),
    ("人", 26000, None),
    ("有", 25000, None),
    ("他", 24000, None),
    ("这", 23000, None),
    ("一", 22000, None),
    ("你", 16000, None),
    ("上", 15000, None),
    ("个", 14500, None),
    ("来", 14000, None),
    ("就", 13500, None),
    ("到", 13000, None),
    ("也", 12800, None),
    ("说", 12500, None),
    ("着", 12200, None),
    ("大", 12000, None),
    ("都", 11500, None),
    ("中", 11000, None),
    ("要", 11000, None),
    ("得", 10800, None),
    ("和", 10500, None),
    ("那", 10200, None),
    ("会", 10000, None),
    ("好", 9800, None),
    ("还", 9700, None),
    ("去", 9600, None),
    ("能", 9500, None),
    ("为", 9400, None),
    ("很", 9200, None),
    ("地", 9000, None),
    ("对", 8800, None),
    ("她", 8600, None),
    ("里", 8400, None),
    ("下", 8200, None),
    ("时", 8000, None),
    ("年", 7800, None),
    ("天", 7500, None),
    ("看", 7200, None),
    ("生", 6900, None),
    ("国", 6800, None),
    ("走", 4200, None),
    // 多字词
    ("我们", 5200, None),
    ("什么", 4600, None),
    ("可以", 4200, None),
    ("不是", 3900, None),
    ("他们", 3900, None),
    ("工作", 3800, None),
    ("自己", 3700, None),
    ("知道", 3600, None),
    ("这个", 3600, Some("zhè ge")),
    ("现在", 3500, None),
    ("问题", 3400, None),
    ("时间", 3300, None),
    ("生活", 3200, None),
    ("但是", 3200, None),
    ("人民", 3100, None),
    ("已经", 3100, None),
    ("需要", 3000, None),
    ("时候", 3000, None),
    ("学习", 2900, None),
    ("世界", 2900, None),
    ("国家", 2900, None),
    ("因为", 2900, Some("yīn wèi")),
    ("北京", 2800, None),
    ("所以", 2800, None),
    ("觉得", 2800, Some("jué de")),
    ("社会", 2700, None),
    ("学生", 2700, None),
    ("那个", 2700, Some("nà ge")),
    ("研究", 2600, None),
    ("上海", 2600, None),
    ("今天", 2600, None),
    ("如果", 2600, None),
    ("发展", 2600, None),
    ("朋友", 2600, None),
    ("经济", 2500, None),
    ("开始", 2500, None),
    ("怎么", 2500, None),
    ("老师", 2500, None),
    ("认为", 2400, None),
    ("大家", 2400, None),
    ("孩子", 2400, Some("hái zi")),
    ("文化", 2300, None),
    ("非常", 2300, None),
    ("东西", 2300, Some("dōng xi")),
    ("你们", 2200, None),
    ("希望", 2200, None),
    ("地方", 2200, Some("dì fang")),
    ("历史", 2100, None),
    ("一样", 2100, None),
    ("喜欢", 2100, None),
    ("技术", 2000, None),
    ("一起", 2000, None),
    ("生命", 1900, None),
    ("科学", 1900, None),
    ("一定", 1800, None),
    ("手机", 1700, None),
    ("汽车", 1600, None),
    ("可是", 1600, None),
    ("中华", 1500, None),
    ("明天", 1500, None),
    ("电话", 1500, None),
    ("广州", 1400, None),
    ("虽然", 1400, None),
    ("电脑", 1400, None),
    ("天气", 1300, None),
    ("银行", 1300, Some("yín háng")),
    ("汉语", 1200, None),
    ("昨天", 1200, None),
    ("漂亮", 1100, Some("piào liang")),
    ("飞机", 1100, None),
    ("火车", 1000, None),
    ("重庆", 950, Some("chóng qìng")),
    ("拼音", 900, None),
    ("害怕", 900, None),
    ("共和国", 700, None),
    ("起源", 520, None),
    ("研究生", 480, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_words() {
        let mut seen = std::collections::HashSet::new();
        for (text, _, _) in WORD_WEIGHTS {
            assert!(seen.insert(*text), "duplicate word {}", text);
        }
    }

    #[test]
    fn test_weights_and_readings_are_well_formed() {
        for (text, weight, readings) in WORD_WEIGHTS {
            assert!(*weight > 0, "zero weight for {}", text);
            if let Some(readings) = readings {
                assert_eq!(
                    readings.split_whitespace().count(),
                    text.chars().count(),
                    "readings of {}",
                    text
                );
            }
        }
    }
}
