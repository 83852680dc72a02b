use crate::crawler::parser::ChapterLink;

/// 目录里章节的归属：卷首、正文、卷末
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Front,
    Body,
    Back,
}

// 先查卷末关键词，"后序" 以 "序" 结尾但属于卷末
const BACK_KEYWORDS: [&str; 5] = ["后记", "后序", "跋", "附录", "外篇补遗"];
const FRONT_KEYWORDS: [&str; 7] = ["自序", "原序", "序", "前言", "题辞", "凡例", "导读"];

pub fn classify(title: &str) -> Section {
    let title = title.trim();
    if BACK_KEYWORDS.iter().any(|k| title.starts_with(k)) {
        return Section::Back;
    }
    if FRONT_KEYWORDS.iter().any(|k| title.starts_with(k)) {
        return Section::Front;
    }
    Section::Body
}

fn cn_digit(c: char) -> Option<u32> {
    match c {
        '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

fn cn_unit(c: char) -> Option<u32> {
    match c {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// 中文数字转数值：十二 -> 12，二十一 -> 21，一百零三 -> 103
pub fn chinese_numeral(text: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut num = 0u32;
    let mut seen = false;
    for c in text.chars() {
        if let Some(d) = cn_digit(c) {
            num = d;
            seen = true;
        } else if let Some(unit) = cn_unit(c) {
            let n = if num == 0 { 1 } else { num };
            total += n * unit;
            num = 0;
            seen = true;
        } else {
            return None;
        }
    }
    if seen { Some(total + num) } else { None }
}

/// 从标题提取序号。阿拉伯数字优先，其次中文数字。
/// "第12章" -> 12，"卷三" -> 3，"三十五．马说" -> 35
pub fn parse_ordinal(title: &str) -> Option<u32> {
    let mut digits = String::new();
    for c in title.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    if !digits.is_empty() {
        return digits.parse().ok();
    }

    let mut run = String::new();
    for c in title.chars() {
        if cn_digit(c).is_some() || cn_unit(c).is_some() {
            run.push(c);
        } else if !run.is_empty() {
            break;
        }
    }
    if run.is_empty() { None } else { chinese_numeral(&run) }
}

/// 对目录章节做稳定排序：卷首在前，卷末在后；
/// 同类里按序号升序，无序号的排在有序号之后并保持目录顺序。
pub fn sort_chapters(links: &mut [ChapterLink]) {
    links.sort_by_cached_key(|link| {
        (classify(&link.title), parse_ordinal(&link.title).unwrap_or(u32::MAX))
    });
}
