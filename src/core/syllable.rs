//! 한글 음절 분해/조합 유틸리티
//!
//! 완성형 음절을 초성/중성/종성 자모로 분해하고, 자모를 다시
//! 음절로 조합합니다. 자모는 호환용 자모(ㄱ~ㅎ, ㅏ~ㅣ)로 다루며
//! 비어 있는 슬롯은 `None`으로 표현합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 호환용 자음 시작 코드포인트 (ㄱ)
const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
/// 호환용 자음 끝 코드포인트 (ㅎ)
const COMPAT_CONSONANT_LAST: u32 = 0x314E;
/// 호환용 모음 시작 코드포인트 (ㅏ)
const COMPAT_VOWEL_FIRST: u32 = 0x314F;
/// 호환용 모음 끝 코드포인트 (ㅣ)
const COMPAT_VOWEL_LAST: u32 = 0x3163;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 자모 목록 (인덱스 = 초성 인덱스)
#[rustfmt::skip]
const CHOSEONG_TABLE: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 자모 목록 (인덱스 = 중성 인덱스)
#[rustfmt::skip]
const JUNGSEONG_TABLE: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 자모 목록 (인덱스 0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_TABLE: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'),
    Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'),
    Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'), Some('ㅈ'), Some('ㅊ'),
    Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 한글 단위(호환용 자음/모음, 완성형 음절) 여부
pub fn is_hangul(c: char) -> bool {
    let code = c as u32;
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code)
        || (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&code)
        || (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&code)
}

/// 글자를 (초성, 중성, 종성) 자모로 분해
///
/// - 완성형 음절: 세 슬롯으로 분해 (종성 없으면 `None`)
/// - 단독 자음: `(Some(c), None, None)`
/// - 단독 모음: `(None, Some(c), None)`
/// - 그 외: `(None, None, None)`
pub fn separate(c: char) -> (Option<char>, Option<char>, Option<char>) {
    let code = c as u32;
    if (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        let offset = code - HANGUL_SYLLABLE_BASE;
        let jong = (offset % JONGSEONG_COUNT) as usize;
        let jung = ((offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT) as usize;
        let cho = (offset / (JONGSEONG_COUNT * JUNGSEONG_COUNT)) as usize;
        return (
            Some(CHOSEONG_TABLE[cho]),
            Some(JUNGSEONG_TABLE[jung]),
            JONGSEONG_TABLE[jong],
        );
    }
    if (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&code) {
        return (Some(c), None, None);
    }
    if (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&code) {
        return (None, Some(c), None);
    }
    (None, None, None)
}

/// (초성, 중성, 종성) 자모를 글자로 조합
///
/// 슬롯이 하나뿐이면 해당 자모를 그대로 반환합니다. 여러 슬롯이
/// 채워져 있으면 완성형 음절로 조합하며, 자모가 목록에 없거나
/// 초성/중성이 비어 있으면 조합 실패로 `None`을 반환합니다.
pub fn compose(
    choseong: Option<char>,
    jungseong: Option<char>,
    jongseong: Option<char>,
) -> Option<char> {
    let filled =
        choseong.is_some() as usize + jungseong.is_some() as usize + jongseong.is_some() as usize;
    if filled == 0 {
        return None;
    }
    if filled == 1 {
        return choseong.or(jungseong).or(jongseong);
    }
    let cho = CHOSEONG_TABLE.iter().position(|&j| Some(j) == choseong)? as u32;
    let jung = JUNGSEONG_TABLE.iter().position(|&j| Some(j) == jungseong)? as u32;
    let jong = JONGSEONG_TABLE.iter().position(|&j| j == jongseong)? as u32;
    char::from_u32(HANGUL_SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong)
}
