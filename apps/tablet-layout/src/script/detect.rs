//! Cheap checks that decide whether text needs Simplified→Traditional conversion.
//!
//! Detection runs before the conversion engine is ever loaded, so it must stay
//! dependency-free. The character list is a curated set of common surnames and
//! everyday characters, not a full simplified table: rare simplified characters
//! are allowed to slip through. The locale check catches users whose system is
//! Simplified-oriented even when the text itself looks ambiguous.

/// Curated characters whose presence triggers conversion.
///
/// Basic: 国 让 观 门 车 东 钟 华 为 开 关 书 长. The remainder are the most common
/// surnames and given-name characters in their simplified form.
const KNOWN_SIMPLIFIED: &str = "国让观门车东钟华为开关书长\
刘赵张陈杨黄吴孙马罗郑谢许韩冯邓叶苏吕卢谭陆贾韦邹闫龙贺顾龚万钱严汤蒋范\
萧沈余潘戴乔赖庞樊兰颜倪温芦鲁葛毕聂丛齐庄涂谷时费纪欧项游阳卫鲍单宁闵解强边饶晋邬臧畅蒙闻莘党贡劳\
姬扶堵郦雍郤璩濮寿通扈冀郏农别晏充慕连茹习宦鱼容慎戈庾终暨衡步都满弘匡寇广禄阙殳沃利蔚越夔隆师巩厍晁\
勾敖融冷訾辛阚那简空曾毋沙乜养鞠须丰巢蒯相查后荆红竺权逯盖益桓公";

/// True if `text` contains any character from the curated simplified list.
pub fn has_simplified_chars(text: &str) -> bool {
    text.chars().any(|c| KNOWN_SIMPLIFIED.contains(c))
}

/// Lower-cases a locale tag and maps POSIX spellings onto BCP-47 ones.
///
/// `zh_CN.UTF-8` and `zh_CN@pinyin` both become `zh-cn`.
pub fn normalize_locale(locale: &str) -> String {
    let tag = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    tag.replace('_', "-").to_lowercase()
}

/// True for `zh-cn*`, bare `zh` and `zh-hans` (case-insensitive).
pub fn is_simplified_locale(locale: &str) -> bool {
    let tag = normalize_locale(locale);
    tag.starts_with("zh-cn") || tag == "zh" || tag == "zh-hans"
}

/// Decides whether `text` should go through the conversion engine.
///
/// 1. Known simplified characters → always convert.
/// 2. Simplified-preferring locale → convert as a safety net.
/// 3. Otherwise (Traditional or non-Chinese text) → leave alone.
pub fn needs_conversion(text: &str, locale: Option<&str>) -> bool {
    if text.is_empty() {
        return false;
    }
    if has_simplified_chars(text) {
        return true;
    }
    locale.is_some_and(is_simplified_locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_never_needs_conversion() {
        assert!(!needs_conversion("", None));
        assert!(!needs_conversion("", Some("zh-CN")));
    }

    #[test]
    fn test_pure_traditional_text_is_left_alone() {
        assert!(!needs_conversion("長生祿位", None));
        assert!(!needs_conversion("長生祿位", Some("zh-TW")));
        assert!(!needs_conversion("張偉", Some("en-US")));
    }

    #[test]
    fn test_known_simplified_char_converts_regardless_of_locale() {
        for locale in [None, Some("zh-TW"), Some("en-US"), Some("zh-CN")] {
            assert!(needs_conversion("长生禄位", locale), "{locale:?}");
            assert!(needs_conversion("刘德华", locale), "{locale:?}");
        }
    }

    #[test]
    fn test_simplified_locale_is_a_safety_net() {
        assert!(needs_conversion("張偉", Some("zh-CN")));
        assert!(needs_conversion("張偉", Some("zh-cn")));
        assert!(needs_conversion("張偉", Some("zh")));
        assert!(needs_conversion("張偉", Some("zh-Hans")));
        assert!(needs_conversion("John", Some("zh-CN")));
    }

    #[test]
    fn test_locale_matching() {
        assert!(is_simplified_locale("zh-CN"));
        assert!(is_simplified_locale("zh_CN.UTF-8"));
        assert!(is_simplified_locale("zh-cn-x-private"));
        assert!(!is_simplified_locale("zh-TW"));
        assert!(!is_simplified_locale("zh-Hant"));
        assert!(!is_simplified_locale("zh-Hans-CN"));
        assert!(!is_simplified_locale("en-US"));
        assert!(!is_simplified_locale(""));
    }

    #[test]
    fn test_latin_text_without_locale() {
        assert!(!needs_conversion("John Smith", None));
        assert!(!needs_conversion("123 Main Street", Some("en-US")));
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("zh_CN.UTF-8"), "zh-cn");
        assert_eq!(normalize_locale(" zh-Hans "), "zh-hans");
        assert_eq!(normalize_locale("zh_TW@calendar"), "zh-tw");
    }
}
