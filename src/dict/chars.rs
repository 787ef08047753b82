//! 单字读音表。候选读音逗号分隔，常用读音在前。

pub const CHAR_READINGS: &[(char, &str)] = &[
    ('阿', "ā,ē,à"),
    ('啊', "ā,a"),
    ('爱', "ài"),
    ('安', "ān"),
    ('岸', "àn"),
    ('八', "bā"),
    ('巴', "bā"),
    ('叭', "bā"),
    ('吧', "ba,bā"),
    ('爸', "bà"),
    ('把', "bǎ,bà"),
    ('白', "bái"),
    ('百', "bǎi,bó"),
    ('班', "bān"),
    ('般', "bān,bō"),
    ('办', "bàn"),
    ('半', "bàn"),
    ('帮', "bāng"),
    ('包', "bāo"),
    ('薄', "báo,bó,bò"),
    ('北', "běi"),
    ('被', "bèi"),
    ('背', "bèi,bēi"),
    ('本', "běn"),
    ('比', "bǐ"),
    ('笔', "bǐ"),
    ('便', "biàn,pián"),
    ('表', "biǎo"),
    ('别', "bié,biè"),
    ('病', "bìng"),
    ('波', "bō"),
    ('不', "bù"),
    ('布', "bù"),
    ('步', "bù"),
    ('才', "cái"),
    ('菜', "cài"),
    ('彩', "cǎi"),
    ('参', "cān,shēn,cēn"),
    ('藏', "cáng,zàng"),
    ('曾', "céng,zēng"),
    ('茶', "chá"),
    ('查', "chá,zhā"),
    ('差', "chà,chā,chāi,cī"),
    ('场', "chǎng,cháng"),
    ('长', "cháng,zhǎng"),
    ('常', "cháng"),
    ('唱', "chàng"),
    ('朝', "cháo,zhāo"),
    ('车', "chē,jū"),
    ('成', "chéng"),
    ('城', "chéng"),
    ('承', "chéng"),
    ('乘', "chéng,shèng"),
    ('吃', "chī"),
    ('仇', "chóu,qiú"),
    ('出', "chū"),
    ('除', "chú"),
    ('处', "chù,chǔ"),
    ('传', "chuán,zhuàn"),
    ('窗', "chuāng"),
    ('床', "chuáng"),
    ('春', "chūn"),
    ('词', "cí"),
    ('从', "cóng,zòng"),
    ('村', "cūn"),
    ('错', "cuò"),
    ('答', "dá,dā"),
    ('打', "dǎ,dá"),
    ('大', "dà,dài"),
    ('担', "dān,dàn"),
    ('单', "dān,shàn,chán"),
    ('但', "dàn"),
    ('弹', "dàn,tán"),
    ('当', "dāng,dàng"),
    ('岛', "dǎo"),
    ('倒', "dǎo,dào"),
    ('到', "dào"),
    ('道', "dào"),
    ('得', "dé,de,děi"),
    ('的', "de,dí,dì"),
    ('灯', "dēng"),
    ('等', "děng"),
    ('第', "dì"),
    ('地', "dì,de"),
    ('弟', "dì,tì"),
    ('电', "diàn"),
    ('调', "diào,tiáo"),
    ('定', "dìng"),
    ('丢', "diū"),
    ('东', "dōng"),
    ('冬', "dōng"),
    ('董', "dǒng"),
    ('动', "dòng"),
    ('都', "dōu,dū"),
    ('豆', "dòu"),
    ('独', "dú"),
    ('读', "dú,dòu"),
    ('度', "dù,duó"),
    ('队', "duì"),
    ('对', "duì"),
    ('多', "duō"),
    ('翟', "dí,zhái"),
    ('鹅', "é"),
    ('而', "ér"),
    ('儿', "ér"),
    ('耳', "ěr"),
    ('尔', "ěr"),
    ('二', "èr"),
    ('发', "fā,fà"),
    ('饭', "fàn"),
    ('方', "fāng"),
    ('芳', "fāng"),
    ('坊', "fāng,fáng"),
    ('房', "fáng"),
    ('放', "fàng"),
    ('非', "fēi"),
    ('飞', "fēi"),
    ('分', "fēn,fèn"),
    ('风', "fēng"),
    ('冯', "féng,píng"),
    ('逢', "féng"),
    ('奉', "fèng"),
    ('夫', "fū,fú"),
    ('服', "fú,fù"),
    ('伏', "fú"),
    ('福', "fú"),
    ('该', "gāi"),
    ('干', "gān,gàn"),
    ('感', "gǎn"),
    ('刚', "gāng"),
    ('高', "gāo"),
    ('哥', "gē"),
    ('歌', "gē"),
    ('葛', "gé,gě"),
    ('个', "gè,gě"),
    ('给', "gěi,jǐ"),
    ('跟', "gēn"),
    ('更', "gèng,gēng"),
    ('工', "gōng"),
    ('公', "gōng"),
    ('供', "gōng,gòng"),
    ('共', "gòng,gōng"),
    ('狗', "gǒu"),
    ('故', "gù"),
    ('股', "gǔ"),
    ('寡', "guǎ"),
    ('关', "guān"),
    ('管', "guǎn"),
    ('光', "guāng"),
    ('广', "guǎng"),
    ('贵', "guì"),
    ('国', "guó"),
    ('果', "guǒ"),
    ('过', "guò,guō"),
    ('还', "hái,huán"),
    ('孩', "hái"),
    ('海', "hǎi"),
    ('害', "hài"),
    ('汉', "hàn"),
    ('好', "hǎo,hào"),
    ('号', "hào,háo"),
    ('喝', "hē,hè"),
    ('何', "hé"),
    ('和', "hé,hè,huó,huò,hú"),
    ('河', "hé"),
    ('核', "hé,hú"),
    ('黑', "hēi"),
    ('很', "hěn"),
    ('红', "hóng"),
    ('哄', "hōng,hǒng,hòng"),
    ('后', "hòu"),
    ('候', "hòu"),
    ('呼', "hū"),
    ('湖', "hú"),
    ('虎', "hǔ"),
    ('花', "huā"),
    ('华', "huá,huà"),
    ('化', "huà"),
    ('画', "huà"),
    ('话', "huà"),
    ('欢', "huān"),
    ('黄', "huáng"),
    ('会', "huì,kuài"),
    ('浑', "hún"),
    ('活', "huó"),
    ('火', "huǒ"),
    ('机', "jī"),
    ('积', "jī"),
    ('急', "jí"),
    ('集', "jí"),
    ('己', "jǐ"),
    ('纪', "jì,jǐ"),
    ('记', "jì"),
    ('计', "jì"),
    ('技', "jì"),
    ('济', "jì,jǐ"),
    ('加', "jiā"),
    ('家', "jiā"),
    ('假', "jiǎ,jià"),
    ('间', "jiān,jiàn"),
    ('见', "jiàn,xiàn"),
    ('将', "jiāng,jiàng"),
    ('江', "jiāng"),
    ('降', "jiàng,xiáng"),
    ('叫', "jiào"),
    ('教', "jiào,jiāo"),
    ('接', "jiē"),
    ('节', "jié,jiē"),
    ('结', "jié,jiē"),
    ('解', "jiě,jiè,xiè"),
    ('姐', "jiě"),
    ('界', "jiè"),
    ('今', "jīn"),
    ('锦', "jǐn"),
    ('尽', "jìn,jǐn"),
    ('近', "jìn"),
    ('进', "jìn"),
    ('京', "jīng"),
    ('经', "jīng"),
    ('惊', "jīng"),
    ('净', "jìng"),
    ('九', "jiǔ"),
    ('酒', "jiǔ"),
    ('究', "jiū"),
    ('就', "jiù"),
    ('旧', "jiù"),
    ('居', "jū"),
    ('局', "jú"),
    ('举', "jǔ"),
    ('句', "jù"),
    ('剧', "jù"),
    ('据', "jù,jū"),
    ('捐', "juān"),
    ('卷', "juàn,juǎn"),
    ('决', "jué"),
    ('绝', "jué"),
    ('觉', "jué,jiào"),
    ('军', "jūn"),
    ('均', "jūn"),
    ('君', "jūn"),
    ('菌', "jūn,jùn"),
    ('喀', "kā"),
    ('开', "kāi"),
    ('看', "kàn,kān"),
    ('阚', "kàn,hǎn"),
    ('科', "kē"),
    ('苛', "kē"),
    ('可', "kě"),
    ('克', "kè"),
    ('课', "kè"),
    ('空', "kōng,kòng"),
    ('口', "kǒu"),
    ('苦', "kǔ"),
    ('快', "kuài"),
    ('宽', "kuān"),
    ('喇', "lǎ"),
    ('辣', "là"),
    ('来', "lái"),
    ('莱', "lái"),
    ('蓝', "lán"),
    ('老', "lǎo"),
    ('乐', "lè,yuè"),
    ('了', "le,liǎo"),
    ('累', "lèi,lěi,léi"),
    ('冷', "lěng"),
    ('里', "lǐ"),
    ('理', "lǐ"),
    ('李', "lǐ"),
    ('历', "lì"),
    ('利', "lì"),
    ('力', "lì"),
    ('凉', "liáng,liàng"),
    ('量', "liàng,liáng"),
    ('亮', "liàng"),
    ('林', "lín"),
    ('零', "líng"),
    ('六', "liù"),
    ('龙', "lóng"),
    ('楼', "lóu"),
    ('驴', "lǘ"),
    ('旅', "lǚ"),
    ('吕', "lǚ"),
    ('律', "lǜ"),
    ('绿', "lǜ,lù"),
    ('虑', "lǜ"),
    ('率', "lǜ,shuài"),
    ('略', "lüè"),
    ('掠', "lüè"),
    ('落', "luò,là,lào"),
    ('妈', "mā"),
    ('马', "mǎ"),
    ('吗', "ma,mǎ"),
    ('买', "mǎi"),
    ('卖', "mài"),
    ('慢', "màn"),
    ('猫', "māo"),
    ('毛', "máo"),
    ('貌', "mào"),
    ('么', "me,mó"),
    ('没', "méi,mò"),
    ('妹', "mèi"),
    ('门', "mén"),
    ('们', "men,mén"),
    ('蒙', "méng,mēng,měng"),
    ('猛', "měng"),
    ('米', "mǐ"),
    ('靡', "mí,mǐ"),
    ('面', "miàn"),
    ('乜', "miē,niè"),
    ('民', "mín"),
    ('明', "míng"),
    ('命', "mìng"),
    ('缪', "miù,móu,miào"),
    ('摸', "mō"),
    ('磨', "mó,mò"),
    ('莫', "mò"),
    ('默', "mò"),
    ('目', "mù"),
    ('拿', "ná"),
    ('那', "nà,nè"),
    ('哪', "nǎ,né"),
    ('难', "nán,nàn"),
    ('南', "nán"),
    ('脑', "nǎo"),
    ('呢', "ne,ní"),
    ('内', "nèi"),
    ('能', "néng,nài"),
    ('你', "nǐ"),
    ('年', "nián"),
    ('鸟', "niǎo"),
    ('拧', "níng,nǐng"),
    ('宁', "níng,nìng"),
    ('牛', "niú"),
    ('暖', "nuǎn"),
    ('女', "nǚ"),
    ('哦', "ó,ò"),
    ('排', "pái"),
    ('怕', "pà"),
    ('胖', "pàng,pán"),
    ('跑', "pǎo"),
    ('朋', "péng"),
    ('脾', "pí"),
    ('披', "pī"),
    ('漂', "piào,piāo,piǎo"),
    ('拼', "pīn"),
    ('平', "píng"),
    ('迫', "pò,pǎi"),
    ('朴', "pǔ,piáo"),
    ('七', "qī"),
    ('期', "qī"),
    ('奇', "qí,jī"),
    ('起', "qǐ"),
    ('气', "qì"),
    ('汽', "qì"),
    ('器', "qì"),
    ('千', "qiān"),
    ('钱', "qián"),
    ('前', "qián"),
    ('强', "qiáng,qiǎng,jiàng"),
    ('切', "qiē,qiè"),
    ('亲', "qīn,qìng"),
    ('琴', "qín"),
    ('青', "qīng"),
    ('轻', "qīng"),
    ('庆', "qìng"),
    ('秋', "qiū"),
    ('求', "qiú"),
    ('区', "qū,ōu"),
    ('曲', "qū,qǔ"),
    ('屈', "qū"),
    ('取', "qǔ"),
    ('去', "qù"),
    ('趣', "qù"),
    ('瞿', "qú,jù"),
    ('圈', "quān,juàn"),
    ('全', "quán"),
    ('权', "quán"),
    ('券', "quàn,xuàn"),
    ('缺', "quē"),
    ('确', "què"),
    ('雀', "què,qiāo"),
    ('群', "qún"),
    ('然', "rán"),
    ('让', "ràng"),
    ('热', "rè"),
    ('人', "rén"),
    ('任', "rèn,rén"),
    ('认', "rèn"),
    ('日', "rì"),
    ('肉', "ròu"),
    ('如', "rú"),
    ('入', "rù"),
    ('三', "sān"),
    ('色', "sè,shǎi"),
    ('山', "shān"),
    ('上', "shàng"),
    ('裳', "shang,cháng"),
    ('少', "shǎo,shào"),
    ('厦', "shà,xià"),
    ('社', "shè"),
    ('身', "shēn"),
    ('什', "shén,shí"),
    ('生', "shēng"),
    ('声', "shēng"),
    ('绳', "shéng"),
    ('盛', "shèng,chéng"),
    ('师', "shī"),
    ('十', "shí"),
    ('时', "shí"),
    ('石', "shí,dàn"),
    ('食', "shí"),
    ('实', "shí"),
    ('识', "shí,zhì"),
    ('史', "shǐ"),
    ('始', "shǐ"),
    ('是', "shì"),
    ('事', "shì"),
    ('市', "shì"),
    ('世', "shì"),
    ('视', "shì"),
    ('室', "shì"),
    ('手', "shǒu"),
    ('首', "shǒu"),
    ('受', "shòu"),
    ('书', "shū"),
    ('暑', "shǔ"),
    ('数', "shù,shǔ,shuò"),
    ('术', "shù"),
    ('树', "shù"),
    ('水', "shuǐ"),
    ('睡', "shuì"),
    ('顺', "shùn"),
    ('说', "shuō,shuì"),
    ('思', "sī"),
    ('斯', "sī"),
    ('死', "sǐ"),
    ('四', "sì"),
    ('送', "sòng"),
    ('酸', "suān"),
    ('虽', "suī"),
    ('岁', "suì"),
    ('所', "suǒ"),
    ('他', "tā"),
    ('她', "tā"),
    ('它', "tā"),
    ('太', "tài"),
    ('堂', "táng"),
    ('糖', "táng"),
    ('题', "tí"),
    ('体', "tǐ"),
    ('天', "tiān"),
    ('田', "tián"),
    ('甜', "tián"),
    ('挑', "tiāo,tiǎo"),
    ('听', "tīng"),
    ('同', "tóng"),
    ('筒', "tǒng"),
    ('头', "tóu,tou"),
    ('外', "wài"),
    ('万', "wàn,mò"),
    ('晚', "wǎn"),
    ('往', "wǎng"),
    ('望', "wàng"),
    ('危', "wēi"),
    ('维', "wéi"),
    ('为', "wéi,wèi"),
    ('位', "wèi"),
    ('温', "wēn"),
    ('文', "wén"),
    ('问', "wèn"),
    ('我', "wǒ"),
    ('屋', "wū"),
    ('坞', "wù"),
    ('五', "wǔ"),
    ('武', "wǔ"),
    ('午', "wǔ"),
    ('物', "wù"),
    ('西', "xī"),
    ('希', "xī"),
    ('稀', "xī"),
    ('习', "xí"),
    ('喜', "xǐ"),
    ('系', "xì,jì"),
    ('细', "xì"),
    ('下', "xià"),
    ('夏', "xià"),
    ('先', "xiān"),
    ('鲜', "xiān,xiǎn"),
    ('闲', "xián"),
    ('现', "xiàn"),
    ('相', "xiāng,xiàng"),
    ('乡', "xiāng"),
    ('向', "xiàng"),
    ('销', "xiāo"),
    ('小', "xiǎo"),
    ('笑', "xiào"),
    ('校', "xiào,jiào"),
    ('写', "xiě"),
    ('心', "xīn"),
    ('新', "xīn"),
    ('兴', "xìng,xīng"),
    ('行', "xíng,háng"),
    ('幸', "xìng"),
    ('姓', "xìng"),
    ('需', "xū"),
    ('许', "xǔ"),
    ('续', "xù"),
    ('宣', "xuān"),
    ('选', "xuǎn"),
    ('学', "xué"),
    ('雪', "xuě"),
    ('血', "xuè,xiě"),
    ('寻', "xún"),
    ('旬', "xún"),
    ('训', "xùn"),
    ('迅', "xùn"),
    ('压', "yā,yà"),
    ('呀', "ya,yā"),
    ('亚', "yà"),
    ('言', "yán"),
    ('研', "yán"),
    ('盐', "yán"),
    ('眼', "yǎn"),
    ('燕', "yàn,yān"),
    ('羊', "yáng"),
    ('阳', "yáng"),
    ('样', "yàng"),
    ('要', "yào,yāo"),
    ('药', "yào"),
    ('爷', "yé"),
    ('也', "yě"),
    ('业', "yè"),
    ('夜', "yè"),
    ('一', "yī"),
    ('衣', "yī"),
    ('医', "yī"),
    ('宜', "yí"),
    ('已', "yǐ"),
    ('以', "yǐ"),
    ('意', "yì"),
    ('音', "yīn"),
    ('因', "yīn"),
    ('银', "yín"),
    ('应', "yīng,yìng"),
    ('幽', "yōu"),
    ('忧', "yōu"),
    ('由', "yóu"),
    ('友', "yǒu"),
    ('有', "yǒu"),
    ('又', "yòu"),
    ('右', "yòu"),
    ('于', "yú"),
    ('鱼', "yú"),
    ('谀', "yú"),
    ('雨', "yǔ"),
    ('语', "yǔ,yù"),
    ('元', "yuán"),
    ('园', "yuán"),
    ('圆', "yuán"),
    ('源', "yuán"),
    ('原', "yuán"),
    ('远', "yuǎn"),
    ('愿', "yuàn"),
    ('月', "yuè"),
    ('云', "yún"),
    ('运', "yùn"),
    ('在', "zài"),
    ('再', "zài"),
    ('载', "zài,zǎi"),
    ('早', "zǎo"),
    ('怎', "zěn"),
    ('憎', "zēng"),
    ('展', "zhǎn"),
    ('站', "zhàn"),
    ('战', "zhàn"),
    ('张', "zhāng"),
    ('招', "zhāo"),
    ('找', "zhǎo"),
    ('召', "zhào,shào"),
    ('着', "zhe,zháo,zhuó,zhāo"),
    ('这', "zhè"),
    ('真', "zhēn"),
    ('正', "zhèng,zhēng"),
    ('政', "zhèng"),
    ('折', "zhé,shé,zhē"),
    ('知', "zhī"),
    ('之', "zhī"),
    ('只', "zhǐ,zhī"),
    ('纸', "zhǐ"),
    ('中', "zhōng,zhòng"),
    ('种', "zhǒng,zhòng,chóng"),
    ('重', "zhòng,chóng"),
    ('州', "zhōu"),
    ('诸', "zhū"),
    ('竹', "zhú"),
    ('主', "zhǔ"),
    ('住', "zhù"),
    ('转', "zhuǎn,zhuàn"),
    ('状', "zhuàng"),
    ('琢', "zhuó,zuó"),
    ('仔', "zǐ,zǎi"),
    ('子', "zǐ,zi"),
    ('字', "zì"),
    ('自', "zì"),
    ('走', "zǒu"),
    ('足', "zú"),
    ('最', "zuì"),
    ('尊', "zūn"),
    ('昨', "zuó"),
    ('左', "zuǒ"),
    ('坐', "zuò"),
    ('作', "zuò,zuō"),
    ('做', "zuò"),
];
