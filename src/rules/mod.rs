//! 야민정음 변환 규칙 시스템
//!
//! 한글 텍스트를 모양이 닮은 글자로 바꾸는 두 가지 전략을 제공합니다:
//!
//! 1. **낱자 치환**: 음절 쌍 규칙 테이블을 순서대로 적용
//! 2. **회전 매칭**: 자모를 90/180/270도 회전한 대응 자모로 재조합
//!
//! 규칙 테이블은 엔진 생성 시 한 번 로드되고 이후 변경되지 않습니다.
//!
//! # 사용 예시
//!
//! ```
//! use yamin::rules::Yaminator;
//!
//! let engine = Yaminator::builtin().unwrap();
//! assert_eq!(engine.transform("명작"), "띵작");
//! assert_eq!(engine.rotate("곰"), "문");
//! ```
//!
//! 규칙 디렉토리에서 로드할 수도 있습니다:
//!
//! ```no_run
//! use yamin::rules::{TransformMode, Yaminator};
//!
//! let engine = Yaminator::load("db").unwrap();
//! let out = engine.convert(TransformMode::Transrotate, "명작이 귀엽다");
//! ```

mod naive;
mod rotation;
mod yaminator;

// 공개 인터페이스
pub use naive::NaiveTransform;
pub use rotation::RotationTable;
pub use yaminator::{TransformMode, Yaminator, NAIVE_DICT_FILE, ROTATION_DICT_FILE};

use crate::core::syllable::is_hangul;

/// 규칙 파일 로드/파싱 에러
#[derive(Debug)]
pub enum RuleError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// 규칙 줄 형식 오류
    FormatError(String),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            RuleError::FormatError(s) => write!(f, "규칙 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for RuleError {}

impl From<std::io::Error> for RuleError {
    fn from(e: std::io::Error) -> Self {
        RuleError::IoError(e)
    }
}

/// 규칙 필드를 한 글자 한글로 파싱 (줄 번호는 0부터)
pub(crate) fn parse_korean_char(field: &str, lineno: usize) -> Result<char, RuleError> {
    let mut chars = field.chars();
    let c = chars.next().ok_or_else(|| {
        RuleError::FormatError(format!("{}번째 줄: 빈 글자 필드", lineno + 1))
    })?;
    if chars.next().is_some() || !is_hangul(c) {
        return Err(RuleError::FormatError(format!(
            "{}번째 줄: 한 글자 한글이 아닌 값 '{}'",
            lineno + 1,
            field
        )));
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_korean_char() {
        assert_eq!(parse_korean_char("가", 0).unwrap(), '가');
        assert_eq!(parse_korean_char("ㄱ", 0).unwrap(), 'ㄱ');
        assert_eq!(parse_korean_char("ㅏ", 0).unwrap(), 'ㅏ');

        // 한글이 아니거나 두 글자 이상이면 거부
        assert!(parse_korean_char("a", 0).is_err());
        assert!(parse_korean_char("가나", 0).is_err());
    }

    #[test]
    fn test_rule_error_display() {
        let err = parse_korean_char("x", 2).unwrap_err();
        // 줄 번호는 1부터 표시
        assert!(err.to_string().contains("3번째 줄"));
    }
}
