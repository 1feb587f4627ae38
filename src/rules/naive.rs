//! 낱자 치환 규칙 (naive transform)
//!
//! 음절 쌍 하나에 대한 양방향 치환 규칙입니다. 초성/중성/종성
//! 슬롯별 플래그로 어떤 자모를 비교·치환할지 고르고, 꺼진 슬롯은
//! 와일드카드로 동작해 입력 글자의 자모를 그대로 유지합니다.

use std::fs;
use std::path::Path;

use crate::core::syllable::{compose, separate};

use super::{parse_korean_char, RuleError};

/// 음절 쌍 양방향 치환 규칙
///
/// syl1→syl2 방향을 먼저 시도하고, 실패하면 syl2→syl1 방향을
/// 시도합니다.
#[derive(Debug, Clone)]
pub struct NaiveTransform {
    /// 초성 슬롯 참여 여부
    use_choseong: bool,
    /// 중성 슬롯 참여 여부
    use_jungseong: bool,
    /// 종성 슬롯 참여 여부
    use_jongseong: bool,
    /// 치환 쌍 첫 번째 글자
    syl1: char,
    /// 치환 쌍 두 번째 글자
    syl2: char,
}

impl NaiveTransform {
    pub fn new(
        use_choseong: bool,
        use_jungseong: bool,
        use_jongseong: bool,
        syl1: char,
        syl2: char,
    ) -> Self {
        Self {
            use_choseong,
            use_jungseong,
            use_jongseong,
            syl1,
            syl2,
        }
    }

    /// 규칙 적용 시도
    ///
    /// 반환: 치환 결과 (규칙이 매칭되지 않으면 `None`)
    pub fn apply(&self, c: char) -> Option<char> {
        self.apply_direction(c, self.syl1, self.syl2)
            .or_else(|| self.apply_direction(c, self.syl2, self.syl1))
    }

    /// 한 방향(from→to) 치환 시도
    ///
    /// 플래그가 켜진 슬롯은 from과 일치해야 하고 to의 자모로
    /// 바뀝니다. 꺼진 슬롯은 입력 글자의 자모를 유지합니다.
    fn apply_direction(&self, c: char, from: char, to: char) -> Option<char> {
        let (ci, cm, cf) = separate(c);
        let (fi, fm, ff) = separate(from);
        let (ti, tm, tf) = separate(to);

        if self.use_choseong && ci != fi {
            return None;
        }
        if self.use_jungseong && cm != fm {
            return None;
        }
        if self.use_jongseong && cf != ff {
            return None;
        }

        let cho = if self.use_choseong { ti } else { ci };
        let jung = if self.use_jungseong { tm } else { cm };
        let jong = if self.use_jongseong { tf } else { cf };

        // 치환 결과가 조합 불가면 원본 글자 유지 (매칭은 성립)
        Some(compose(cho, jung, jong).unwrap_or(c))
    }
}

/// 치환 규칙 테이블 문자열 파싱
///
/// 한 줄에 규칙 하나:
/// `<초성 0|1> <중성 0|1> <종성 0|1> <글자1> <글자2>`
/// 빈 줄은 무시하고, 규칙 순서는 파일 순서를 따릅니다.
pub fn parse_naive_table(src: &str) -> Result<Vec<NaiveTransform>, RuleError> {
    let mut rules = Vec::new();
    for (lineno, line) in src.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 5 {
            return Err(RuleError::FormatError(format!(
                "{}번째 줄: 필드 5개 필요 (실제 {}개)",
                lineno + 1,
                fields.len()
            )));
        }
        let use_choseong = parse_flag(fields[0], lineno)?;
        let use_jungseong = parse_flag(fields[1], lineno)?;
        let use_jongseong = parse_flag(fields[2], lineno)?;
        let syl1 = parse_korean_char(fields[3], lineno)?;
        let syl2 = parse_korean_char(fields[4], lineno)?;
        rules.push(NaiveTransform::new(
            use_choseong,
            use_jungseong,
            use_jongseong,
            syl1,
            syl2,
        ));
    }
    Ok(rules)
}

/// 치환 규칙 테이블 파일 로드
pub fn load_naive_table(path: &Path) -> Result<Vec<NaiveTransform>, RuleError> {
    let content = fs::read_to_string(path)?;
    parse_naive_table(&content)
}

/// 슬롯 플래그 파싱 ("0" | "1")
fn parse_flag(field: &str, lineno: usize) -> Result<bool, RuleError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(RuleError::FormatError(format!(
            "{}번째 줄: 잘못된 플래그 '{}' (0 또는 1)",
            lineno + 1,
            other
        ))),
    }
}
