//! Heavenly stems (天干) and earthly branches (地支).
//!
//! Ten stems and twelve branches cycle independently; each stem carries a
//! fixed element (two stems per element) and a polarity that alternates with
//! the stem index. Index 0 is 甲 for stems and 子 for branches.

use serde::Serialize;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for any integer offset, wrapping modulo 10.
    pub fn from_index(i: i32) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Single-character name.
    pub fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    /// Romanized name.
    pub fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Element of the stem: `index / 2`.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    /// Polarity of the stem: even indices are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Shorthand for `polarity() == Polarity::Yang`.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for any integer offset, wrapping modulo 12.
    pub fn from_index(i: i32) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Single-character name.
    pub fn hanzi(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    /// Romanized name.
    pub fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Polarity of the branch: even indices are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Branch of the two-hour period (时辰) containing `hour`.
    ///
    /// 子 spans 23:00-01:00, so hour 23 maps to 子 alongside hours 0.
    pub fn from_hour(hour: u32) -> Self {
        ALL_BRANCHES[((hour + 1) / 2 % 12) as usize]
    }
}

/// The five elements (五行), in generating order.
///
/// Each element generates the next one cyclically and overcomes the one
/// two steps ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Element {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

/// All 5 elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-character name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// Steps from `self` to `other` along the generating cycle, in `0..5`.
    pub const fn steps_to(self, other: Self) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/yang polarity (阴阳).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Single-character name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(25), Branch::Chou);
    }

    #[test]
    fn two_stems_per_element() {
        for e in ALL_ELEMENTS {
            let n = ALL_STEMS.iter().filter(|s| s.element() == e).count();
            assert_eq!(n, 2, "{e:?}");
        }
    }

    #[test]
    fn element_and_polarity_follow_index() {
        for s in ALL_STEMS {
            assert_eq!(s.element().index(), s.index() / 2);
            assert_eq!(s.is_yang(), s.index() % 2 == 0);
            assert_eq!(s.polarity() == Polarity::Yang, s.is_yang());
        }
    }

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Water.steps_to(Element::Wood), 1);
        assert_eq!(Element::Wood.steps_to(Element::Water), 4);
    }

    #[test]
    fn hour_branch_boundaries() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(11), Branch::Wu);
        assert_eq!(Branch::from_hour(13), Branch::Wei);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
    }

    #[test]
    fn names() {
        assert_eq!(Stem::Xin.hanzi(), "辛");
        assert_eq!(Branch::Si.hanzi(), "巳");
        assert_eq!(Stem::Geng.pinyin(), "Geng");
        assert_eq!(Element::Metal.hanzi(), "金");
    }
}
