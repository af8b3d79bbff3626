//! Display names for solar terms, lunar months and days, and weekdays.

/// The 24 solar terms (节气), index 0 = 冬至 (apparent solar longitude 270°).
///
/// Term `k` starts when the Sun reaches `270° + 15°·k`. Odd indices are the
/// twelve "jie" terms that open a sexagenary month.
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
    "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
];

/// Number of solar terms per tropical year.
pub const SOLAR_TERM_COUNT: u8 = 24;

/// Index of 立春, the term that opens the sexagenary year.
pub const LICHUN_INDEX: u8 = 3;

const LUNAR_MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const LUNAR_DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

const WEEKDAY_NAMES: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// Name of solar term `index` (taken modulo 24).
pub fn solar_term_name(index: u8) -> &'static str {
    SOLAR_TERM_NAMES[(index % SOLAR_TERM_COUNT) as usize]
}

/// Whether term `index` is a "jie" (odd index), eligible as a month boundary.
pub const fn is_major_term(index: u8) -> bool {
    index % 2 == 1
}

/// Lunar month name, prefixed with 闰 for a leap month.
///
/// Returns `None` when `month` is outside `1..=12`.
pub fn lunar_month_name(month: u8, is_leap: bool) -> Option<String> {
    let idx = usize::from(month).checked_sub(1)?;
    let base = LUNAR_MONTH_NAMES.get(idx)?;
    Some(if is_leap {
        format!("闰{base}")
    } else {
        (*base).to_string()
    })
}

/// Lunar day name (初一 .. 三十). `None` outside `1..=30`.
pub fn lunar_day_name(day: u8) -> Option<&'static str> {
    let idx = usize::from(day).checked_sub(1)?;
    LUNAR_DAY_NAMES.get(idx).copied()
}

/// Weekday name from a Monday-based index (0 = 周一).
pub fn weekday_name(days_from_monday: u8) -> &'static str {
    WEEKDAY_NAMES[(days_from_monday % 7) as usize]
}
