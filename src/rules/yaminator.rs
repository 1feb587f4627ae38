//! 야민정음 변환 엔진
//!
//! 낱자 치환 규칙 목록과 회전 대응표를 묶어 글자 단위로 변환을
//! 수행합니다. 한글이 아닌 글자는 그대로 통과시키고, 규칙 목록은
//! 파일 등장 순서대로 먼저 매칭되는 규칙 하나만 적용합니다.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::syllable::is_hangul;

use super::naive::{load_naive_table, parse_naive_table, NaiveTransform};
use super::rotation::RotationTable;
use super::RuleError;

/// 낱자 치환 규칙 파일 이름
pub const NAIVE_DICT_FILE: &str = "dic_naive.txt";
/// 회전 대응표 파일 이름
pub const ROTATION_DICT_FILE: &str = "dic_naive_rot.txt";

/// 변환 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// 낱자 치환만
    Transform,
    /// 회전 매칭만
    Rotate,
    /// 치환 우선, 실패 시 회전
    Transrotate,
}

impl TransformMode {
    /// 모드 토큰 파싱 ("transform" | "rotate" | "transrotate")
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "transform" => Some(TransformMode::Transform),
            "rotate" => Some(TransformMode::Rotate),
            "transrotate" => Some(TransformMode::Transrotate),
            _ => None,
        }
    }

    /// 모드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMode::Transform => "transform",
            TransformMode::Rotate => "rotate",
            TransformMode::Transrotate => "transrotate",
        }
    }
}

/// 야민정음 변환 엔진
///
/// 규칙 테이블은 생성 시 한 번 로드되고 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct Yaminator {
    /// 낱자 치환 규칙 (파일 순서 유지)
    rules: Vec<NaiveTransform>,
    /// 회전 대응표
    rotation: RotationTable,
}

impl Yaminator {
    /// 규칙 디렉토리에서 엔진 생성
    ///
    /// `dir/dic_naive.txt`와 `dir/dic_naive_rot.txt`를 로드합니다.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RuleError> {
        let dir = dir.as_ref();
        let rules = load_naive_table(&dir.join(NAIVE_DICT_FILE))?;
        let rotation = RotationTable::load(&dir.join(ROTATION_DICT_FILE))?;
        Ok(Self { rules, rotation })
    }

    /// 테이블 문자열에서 엔진 생성
    pub fn from_tables(naive_src: &str, rotation_src: &str) -> Result<Self, RuleError> {
        let rules = parse_naive_table(naive_src)?;
        let rotation = RotationTable::parse(rotation_src)?;
        Ok(Self { rules, rotation })
    }

    /// 내장 사전으로 엔진 생성
    ///
    /// 빌드에 포함된 db/ 사전을 사용하므로 외부 파일 없이 동작합니다.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_tables(
            include_str!("../../db/dic_naive.txt"),
            include_str!("../../db/dic_naive_rot.txt"),
        )
    }

    /// 낱자 치환만 적용
    ///
    /// 글자마다 규칙 목록을 순서대로 시도하고 처음 매칭되는 규칙의
    /// 결과를 사용합니다. 매칭이 없으면 원본 글자를 유지합니다.
    pub fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.match_rule(c).unwrap_or(c))
            .collect()
    }

    /// 회전 매칭만 적용
    pub fn rotate(&self, text: &str) -> String {
        let mut out = String::new();
        for c in text.chars() {
            match self.rotate_char(c) {
                Some(rotated) => out.push_str(&rotated),
                None => out.push(c),
            }
        }
        out
    }

    /// 치환 우선, 실패 시 회전
    ///
    /// 글자마다 두 전략 중 하나의 결과만 사용합니다.
    pub fn transrotate(&self, text: &str) -> String {
        let mut out = String::new();
        for c in text.chars() {
            if let Some(replaced) = self.match_rule(c) {
                out.push(replaced);
                continue;
            }
            match self.rotate_char(c) {
                Some(rotated) => out.push_str(&rotated),
                None => out.push(c),
            }
        }
        out
    }

    /// 선택한 모드로 변환
    pub fn convert(&self, mode: TransformMode, text: &str) -> String {
        match mode {
            TransformMode::Transform => self.transform(text),
            TransformMode::Rotate => self.rotate(text),
            TransformMode::Transrotate => self.transrotate(text),
        }
    }

    /// 낱자 치환 규칙 수
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 회전 항목 수
    pub fn rotation_count(&self) -> usize {
        self.rotation.rotation_count()
    }

    /// 회전 예외 항목 수
    pub fn exception_count(&self) -> usize {
        self.rotation.exception_count()
    }

    /// 글자 하나에 규칙 목록을 순서대로 시도
    fn match_rule(&self, c: char) -> Option<char> {
        if !is_hangul(c) {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.apply(c))
    }

    /// 글자 하나 회전 시도 (한글이 아니면 시도하지 않음)
    fn rotate_char(&self, c: char) -> Option<String> {
        if !is_hangul(c) {
            return None;
        }
        self.rotation.rotate(c)
    }
}
