//! 短语读音表，按长度分层。逐字读音空格分隔。
//!
//! 收录原则：短语中至少一个字偏离其单字默认读音，或含轻声。

pub const PHRASES_2: &[(&str, &str)] = &[
    ("爱好", "ài hào"),
    ("安乐", "ān lè"),
    ("背包", "bēi bāo"),
    ("便宜", "pián yi"),
    ("参差", "cēn cī"),
    ("长城", "cháng chéng"),
    ("长大", "zhǎng dà"),
    ("朝鲜", "cháo xiǎn"),
    ("朝阳", "cháo yáng"),
    ("成长", "chéng zhǎng"),
    ("处理", "chǔ lǐ"),
    ("传记", "zhuàn jì"),
    ("大夫", "dài fu"),
    ("得到", "dé dào"),
    ("调查", "diào chá"),
    ("都市", "dū shì"),
    ("发现", "fā xiàn"),
    ("干活", "gàn huó"),
    ("高兴", "gāo xìng"),
    ("更加", "gèng jiā"),
    ("故事", "gù shi"),
    ("关系", "guān xì"),
    ("还是", "hái shì"),
    ("还原", "huán yuán"),
    ("行业", "háng yè"),
    ("好处", "hǎo chù"),
    ("号召", "hào zhào"),
    ("和面", "huó miàn"),
    ("会计", "kuài jì"),
    ("假期", "jià qī"),
    ("将军", "jiāng jūn"),
    ("教室", "jiào shì"),
    ("结果", "jié guǒ"),
    ("解决", "jiě jué"),
    ("尽管", "jǐn guǎn"),
    ("空闲", "kòng xián"),
    ("快乐", "kuài lè"),
    ("老师", "lǎo shī"),
    ("了解", "liǎo jiě"),
    ("没有", "méi yǒu"),
    ("难过", "nán guò"),
    ("暖和", "nuǎn huo"),
    ("朋友", "péng you"),
    ("奇数", "jī shù"),
    ("强迫", "qiǎng pò"),
    ("亲切", "qīn qiè"),
    ("曲子", "qǔ zi"),
    ("人参", "rén shēn"),
    ("石头", "shí tou"),
    ("时候", "shí hou"),
    ("首都", "shǒu dū"),
    ("数学", "shù xué"),
    ("睡觉", "shuì jiào"),
    ("说服", "shuō fú"),
    ("思量", "sī liang"),
    ("暑假", "shǔ jià"),
    ("弹琴", "tán qín"),
    ("挑战", "tiǎo zhàn"),
    ("同行", "tóng háng"),
    ("头发", "tóu fa"),
    ("为了", "wèi le"),
    ("西藏", "xī zàng"),
    ("喜欢", "xǐ huan"),
    ("相处", "xiāng chǔ"),
    ("行李", "xíng li"),
    ("行为", "xíng wéi"),
    ("兴趣", "xìng qù"),
    ("要求", "yāo qiú"),
    ("衣裳", "yī shang"),
    ("音乐", "yīn yuè"),
    ("应该", "yīng gāi"),
    ("幽默", "yōu mò"),
    ("愿意", "yuàn yì"),
    ("月亮", "yuè liang"),
    ("运转", "yùn zhuǎn"),
    ("着急", "zháo jí"),
    ("正月", "zhēng yuè"),
    ("知识", "zhī shi"),
    ("中国", "zhōng guó"),
    ("种地", "zhòng dì"),
    ("仔细", "zǐ xì"),
    ("自然", "zì rán"),
    ("琢磨", "zuó mo"),
    ("尊重", "zūn zhòng"),
    ("作坊", "zuō fang"),
];

pub const PHRASES_3: &[(&str, &str)] = &[
    ("不由得", "bù yóu de"),
    ("差不多", "chà bu duō"),
    ("出难题", "chū nán tí"),
    ("打招呼", "dǎ zhāo hu"),
    ("电视剧", "diàn shì jù"),
    ("董事长", "dǒng shì zhǎng"),
    ("发脾气", "fā pí qi"),
    ("干什么", "gàn shén me"),
    ("好莱坞", "hǎo lái wù"),
    ("核武器", "hé wǔ qì"),
    ("红绿灯", "hóng lǜ dēng"),
    ("解放军", "jiě fàng jūn"),
    ("九重天", "jiǔ chóng tiān"),
    ("喇叭花", "lǎ ba huā"),
    ("老大爷", "lǎo dà yé"),
    ("莫斯科", "mò sī kē"),
    ("入场券", "rù chǎng quàn"),
    ("太阳能", "tài yáng néng"),
    ("小时候", "xiǎo shí hou"),
    ("压岁钱", "yā suì qián"),
    ("圆明园", "yuán míng yuán"),
    ("中秋节", "zhōng qiū jié"),
];

pub const PHRASES_4: &[(&str, &str)] = &[
    ("爱憎分明", "ài zēng fēn míng"),
    ("安步当车", "ān bù dàng chē"),
    ("薄利多销", "bó lì duō xiāo"),
    ("长年累月", "cháng nián lěi yuè"),
    ("乘人之危", "chéng rén zhī wēi"),
    ("处心积虑", "chǔ xīn jī lǜ"),
    ("春华秋实", "chūn huá qiū shí"),
    ("担惊受怕", "dān jīng shòu pà"),
    ("丢三落四", "diū sān là sì"),
    ("独当一面", "dú dāng yī miàn"),
    ("阿谀奉承", "ē yú fèng chéng"),
    ("风调雨顺", "fēng tiáo yǔ shùn"),
    ("高楼大厦", "gāo lóu dà shà"),
    ("供不应求", "gōng bù yìng qiú"),
    ("哄堂大笑", "hōng táng dà xiào"),
    ("浑水摸鱼", "hún shuǐ mō yú"),
    ("降龙伏虎", "xiáng lóng fú hǔ"),
    ("宁死不屈", "nìng sǐ bù qū"),
    ("排忧解难", "pái yōu jiě nàn"),
    ("千载难逢", "qiān zǎi nán féng"),
    ("曲高和寡", "qǔ gāo hè guǎ"),
    ("所向披靡", "suǒ xiàng pī mǐ"),
    ("心宽体胖", "xīn kuān tǐ pán"),
    ("一唱一和", "yī chàng yī hè"),
    ("衣锦还乡", "yī jǐn huán xiāng"),
    ("张灯结彩", "zhāng dēng jié cǎi"),
    ("自给自足", "zì jǐ zì zú"),
];

pub const PHRASES_5: &[(&str, &str)] = &[
    ("巴尔干半岛", "bā ěr gàn bàn dǎo"),
    ("巴尔喀什湖", "bā ěr kā shí hú"),
    ("不幸而言中", "bù xìng ér yán zhòng"),
    ("布尔什维克", "bù ěr shí wéi kè"),
    ("何乐而不为", "hé lè ér bù wéi"),
    ("苛政猛于虎", "kē zhè měng yú hǔ"),
    ("蒙得维的亚", "méng de wéi de yà"),
    ("民以食为天", "mín yǐ shí wéi tiān"),
    ("拧成一股绳", "níng chéng yī gǔ shéng"),
    ("事后诸葛亮", "shì hòu zhū gé liàng"),
    ("物以稀为贵", "wù yǐ xī wéi guì"),
    ("先下手为强", "xiān xià shǒu wéi qiáng"),
    ("行行出状元", "háng háng chū zhuàng yuán"),
    ("亚得里亚海", "yà de lǐ yà hǎi"),
    ("眼不见为净", "yǎn bù jiàn wéi jìng"),
    ("竹筒倒豆子", "zhú tǒng dǎo dòu zi"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_counts_match_lengths() {
        for (table, len) in [
            (PHRASES_2, 2),
            (PHRASES_3, 3),
            (PHRASES_4, 4),
            (PHRASES_5, 5),
        ] {
            for (text, readings) in table {
                assert_eq!(text.chars().count(), len, "length of {}", text);
                assert_eq!(
                    readings.split_whitespace().count(),
                    len,
                    "readings of {}",
                    text
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_phrases() {
        let mut seen = std::collections::HashSet::new();
        for table in [PHRASES_2, PHRASES_3, PHRASES_4, PHRASES_5] {
            for (text, _) in table {
                assert!(seen.insert(*text), "duplicate phrase {}", text);
            }
        }
    }
}
