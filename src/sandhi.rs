use crate::dict::special::SANDHI_RULES;
use crate::resolve::ResolvedReading;
use crate::syllable::Syllable;

/// 「一」「不」根据后继音节的声调变调。
//
//     「一」本调一声：后接四声变二声（一定 yí dìng），后接一二三声变四声（一天 yì tiān）。
//     「不」本调四声：后接四声变二声（不是 bú shì）。
//     只有仍带本调的触发字才改写，重复应用结果不变。
pub fn apply_tone_sandhi(readings: &mut [ResolvedReading]) {
    if readings.len() < 2 {
        return;
    }
    for i in 0..readings.len() - 1 {
        let next_tone = match readings[i + 1].syllable.as_ref() {
            Some(syllable) => syllable.tone,
            None => continue,
        };
        let origin = readings[i].origin;
        let tone = match readings[i].syllable.as_ref() {
            Some(syllable) => syllable.tone,
            None => continue,
        };
        for (trigger, citation, follower, replacement) in SANDHI_RULES.iter() {
            if origin == *trigger && tone == *citation && next_tone == *follower {
                readings[i].syllable = Some(Syllable::parse(replacement));
                break;
            }
        }
    }
}
