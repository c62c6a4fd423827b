//! Sound-element labels (nayin) of the sixty pillars.
//!
//! Consecutive pillar pairs of the cycle share one label, so there are 30
//! labels. The label's element is read from the element character embedded
//! in it.

use crate::element::Element;
use crate::pillar::Pillar;

/// Labels in cycle order; entry `i` covers cycle indices `2i` and `2i + 1`.
pub const SOUND_LABELS: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", //
    "涧下水", "城头土", "白蜡金", "杨柳木", "泉中水", "屋上土", //
    "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木", //
    "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金", //
    "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// Element characters in the order they are searched for.
const ELEMENT_MARKERS: [(char, Element); 5] = [
    ('金', Element::Metal),
    ('木', Element::Wood),
    ('水', Element::Water),
    ('火', Element::Fire),
    ('土', Element::Earth),
];

/// Sound label of a pillar, `None` for a mixed-parity pair.
pub fn sound_label(pillar: Pillar) -> Option<&'static str> {
    pillar
        .cycle_index()
        .map(|i| SOUND_LABELS[(i / 2) as usize])
}

/// Element embedded in a composite label.
///
/// The first marker found in 金/木/水/火/土 order wins; a label with no
/// marker yields `None`.
pub fn element_from_label(label: &str) -> Option<Element> {
    ELEMENT_MARKERS
        .iter()
        .find(|(c, _)| label.contains(*c))
        .map(|&(_, e)| e)
}

/// Element of a pillar's sound label.
pub fn sound_element(pillar: Pillar) -> Option<Element> {
    sound_label(pillar).and_then(element_from_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{Branch, Stem};

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn first_and_last_labels() {
        assert_eq!(sound_label(p("甲子")), Some("海中金"));
        assert_eq!(sound_label(p("乙丑")), Some("海中金"));
        assert_eq!(sound_label(p("丙寅")), Some("炉中火"));
        assert_eq!(sound_label(p("壬戌")), Some("大海水"));
        assert_eq!(sound_label(p("癸亥")), Some("大海水"));
    }

    #[test]
    fn sample_elements() {
        assert_eq!(sound_element(p("庚午")), Some(Element::Earth));
        assert_eq!(sound_element(p("戊辰")), Some(Element::Wood));
        assert_eq!(sound_element(p("丙午")), Some(Element::Water));
        assert_eq!(sound_element(p("壬寅")), Some(Element::Metal));
    }

    #[test]
    fn every_label_has_an_element() {
        for label in SOUND_LABELS {
            assert!(element_from_label(label).is_some(), "{label}");
        }
    }

    #[test]
    fn each_element_labels_six_pairs() {
        let mut counts = [0; 5];
        for label in SOUND_LABELS {
            if let Some(e) = element_from_label(label) {
                counts[e.index() as usize] += 1;
            }
        }
        assert_eq!(counts, [6; 5]);
    }

    #[test]
    fn unknown_label_and_mixed_pillar() {
        assert_eq!(element_from_label("unknown"), None);
        assert_eq!(sound_label(Pillar::new(Stem::Jia, Branch::Chou)), None);
    }
}
