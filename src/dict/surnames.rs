//! 姓氏读音表。只收姓氏读音与默认读音不同的字。

pub const SURNAME_READINGS: &[(char, &str)] = &[
    ('仇', "qiú"),
    ('单', "shàn"),
    ('朴', "piáo"),
    ('查', "zhā"),
    ('折', "shé"),
    ('都', "dū"),
    ('区', "ōu"),
    ('乐', "yuè"),
    ('乜', "niè"),
    ('任', "rén"),
    ('华', "huà"),
    ('曲', "qū"),
    ('曾', "zēng"),
    ('盛', "shèng"),
    ('种', "chóng"),
    ('翟', "zhái"),
    ('纪', "jǐ"),
    ('缪', "miào"),
    ('能', "nài"),
    ('燕', "yān"),
    ('瞿', "qú"),
    ('解', "xiè"),
    ('过', "guō"),
    ('阚', "kàn"),
];
