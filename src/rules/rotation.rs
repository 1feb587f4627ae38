//! 회전 대응표 (90/180/270도 시각 회전 매칭)
//!
//! 역할(초성/중성/중성 역방향/종성)별로 자모 → {각도 → 회전 자모}
//! 매핑을 보관하고, 음절 전체를 덮어쓰는 예외 쌍을 함께 관리합니다.
//! 한 자모의 각도 목록은 규칙 파일 등장 순서를 유지하며, 직접 회전
//! 매칭은 이 순서대로 세 역할 모두에 성립하는 첫 번째 각도를
//! 사용합니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::syllable::{compose, separate};

use super::{parse_korean_char, RuleError};

/// 자모 → [(각도, 회전 자모)] (등장 순서 유지)
type RoleMap = HashMap<Option<char>, Vec<(Angle, Option<char>)>>;

/// 회전 각도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// 각도 토큰 파싱 ("90" | "180" | "270")
    fn from_token(s: &str) -> Option<Self> {
        match s {
            "90" => Some(Angle::Deg90),
            "180" => Some(Angle::Deg180),
            "270" => Some(Angle::Deg270),
            _ => None,
        }
    }
}

/// 자모 역할 (규칙 파일의 역할 토큰)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// 초성 (`i`)
    Choseong,
    /// 중성 (`m`)
    Jungseong,
    /// 중성 역방향 (`m-1`, 교차 역할 매칭 전용)
    JungseongInverse,
    /// 종성 (`f`)
    Jongseong,
}

impl Role {
    fn from_token(s: &str) -> Option<Self> {
        match s {
            "i" => Some(Role::Choseong),
            "m" => Some(Role::Jungseong),
            "m-1" => Some(Role::JungseongInverse),
            "f" => Some(Role::Jongseong),
            _ => None,
        }
    }
}

/// 역할별 회전 대응표 + 음절 예외 쌍
#[derive(Debug, Clone, Default)]
pub struct RotationTable {
    /// 초성 역할 대응표
    choseong: RoleMap,
    /// 중성 역할 대응표
    jungseong: RoleMap,
    /// 중성 역방향 대응표 (교차 역할 매칭 전용)
    jungseong_inv: RoleMap,
    /// 종성 역할 대응표
    jongseong: RoleMap,
    /// 음절 예외 쌍 (양방향 등록)
    exceptions: HashMap<char, char>,
}

impl RotationTable {
    /// 회전 대응표 문자열 파싱
    ///
    /// 한 줄에 항목 하나, 두 가지 레코드:
    /// - 예외: `s <글자A> <글자B>` (양방향 등록)
    /// - 회전: `<i|m|m-1|f> <90|180|270> <자모|_> <회전 자모|_>`
    ///   (`_`는 빈 슬롯)
    /// 빈 줄은 무시합니다.
    pub fn parse(src: &str) -> Result<Self, RuleError> {
        let mut table = RotationTable::default();
        for (lineno, line) in src.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields[0] == "s" {
                if fields.len() != 3 {
                    return Err(RuleError::FormatError(format!(
                        "{}번째 줄: 예외 레코드는 필드 3개 필요 (실제 {}개)",
                        lineno + 1,
                        fields.len()
                    )));
                }
                let a = parse_korean_char(fields[1], lineno)?;
                let b = parse_korean_char(fields[2], lineno)?;
                table.insert_exception(a, b);
                continue;
            }
            if fields.len() != 4 {
                return Err(RuleError::FormatError(format!(
                    "{}번째 줄: 회전 레코드는 필드 4개 필요 (실제 {}개)",
                    lineno + 1,
                    fields.len()
                )));
            }
            let role = Role::from_token(fields[0]).ok_or_else(|| {
                RuleError::FormatError(format!(
                    "{}번째 줄: 알 수 없는 역할 '{}'",
                    lineno + 1,
                    fields[0]
                ))
            })?;
            let angle = Angle::from_token(fields[1]).ok_or_else(|| {
                RuleError::FormatError(format!(
                    "{}번째 줄: 알 수 없는 각도 '{}'",
                    lineno + 1,
                    fields[1]
                ))
            })?;
            let comp = parse_component(fields[2], lineno)?;
            let rotated = parse_component(fields[3], lineno)?;
            table.insert_rotation(role, comp, angle, rotated);
        }
        Ok(table)
    }

    /// 회전 대응표 파일 로드
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// 음절 회전 시도
    ///
    /// 1. 예외 쌍 확인 (등록되어 있으면 즉시 반환)
    /// 2. 직접 회전: 초/중/종을 각자 역할 표에서 찾아, 세 역할
    ///    모두에 있는 첫 번째 각도로 재조합
    /// 3. 교차 역할 회전: 초성을 종성 표에서, 중성을 역방향 표에서,
    ///    종성을 초성 표에서 찾는 270도 전용 경로
    ///
    /// 90/270도 결과는 두 글자(회전 종성 + 블록)입니다. 성립한
    /// 각도의 재조합이 조합 불가면 매칭 없음으로 처리합니다.
    /// 반환: 회전 결과 (매칭 없으면 `None`)
    pub fn rotate(&self, c: char) -> Option<String> {
        if let Some(&mapped) = self.exceptions.get(&c) {
            return Some(mapped.to_string());
        }
        let (i, m, f) = separate(c);
        if let Some((angle, ri, rm, rf)) = self.find_direct(i, m, f) {
            return Self::recombine(angle, ri, rm, rf);
        }
        self.rotate_cross_role(i, m, f)
    }

    /// 등록된 (역할, 자모, 각도) 회전 항목 수
    pub fn rotation_count(&self) -> usize {
        [
            &self.choseong,
            &self.jungseong,
            &self.jungseong_inv,
            &self.jongseong,
        ]
        .iter()
        .map(|m| m.values().map(Vec::len).sum::<usize>())
        .sum()
    }

    /// 등록된 예외 항목 수 (양방향 각각 포함)
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// 직접 회전: 세 역할 모두에 성립하는 첫 번째 각도와 회전 자모
    ///
    /// 어느 한 역할 표에 자모 항목 자체가 없거나 공통 각도가 없으면
    /// `None`을 반환합니다 (교차 역할 경로로 넘어감).
    fn find_direct(
        &self,
        i: Option<char>,
        m: Option<char>,
        f: Option<char>,
    ) -> Option<(Angle, Option<char>, Option<char>, Option<char>)> {
        let i_entries = self.choseong.get(&i)?;
        let m_entries = self.jungseong.get(&m)?;
        let f_entries = self.jongseong.get(&f)?;
        for &(angle, ri) in i_entries {
            let rm = m_entries.iter().find(|(a, _)| *a == angle).map(|&(_, r)| r);
            let rf = f_entries.iter().find(|(a, _)| *a == angle).map(|&(_, r)| r);
            if let (Some(rm), Some(rf)) = (rm, rf) {
                return Some((angle, ri, rm, rf));
            }
        }
        None
    }

    /// 성립한 각도에 따라 회전 자모를 재조합
    ///
    /// - 180도: 종성·초성이 역할을 맞바꾼 한 글자
    /// - 90도: 초성+중성 블록 뒤에 회전 종성을 덧붙인 형태
    /// - 270도: 회전 종성을 블록 앞에 붙인 형태
    fn recombine(
        angle: Angle,
        ri: Option<char>,
        rm: Option<char>,
        rf: Option<char>,
    ) -> Option<String> {
        match angle {
            Angle::Deg180 => compose(rf, rm, ri).map(|c| c.to_string()),
            Angle::Deg90 => {
                let block = compose(ri, rm, None)?;
                let mut out = block.to_string();
                if let Some(tail) = rf {
                    out.push(tail);
                }
                Some(out)
            }
            Angle::Deg270 => {
                let block = compose(ri, rm, None)?;
                let mut out = String::new();
                if let Some(lead) = rf {
                    out.push(lead);
                }
                out.push(block);
                Some(out)
            }
        }
    }

    /// 교차 역할 회전 (270도 전용)
    ///
    /// 글자의 초성을 종성 표에서, 중성을 역방향 표에서, 종성을
    /// 초성 표에서 찾는 예약 조합 경로. 세 조회 모두 270도 항목이
    /// 있어야 하고, 결과는 회전 종성 + 블록 순서입니다.
    fn rotate_cross_role(
        &self,
        i: Option<char>,
        m: Option<char>,
        f: Option<char>,
    ) -> Option<String> {
        let lead = Self::lookup(&self.jongseong, i, Angle::Deg270)?;
        let rm = Self::lookup(&self.jungseong_inv, m, Angle::Deg270)?;
        let rf = Self::lookup(&self.choseong, f, Angle::Deg270)?;

        let block = compose(rf, rm, None)?;
        let mut out = String::new();
        if let Some(c) = lead {
            out.push(c);
        }
        out.push(block);
        Some(out)
    }

    /// 역할 표에서 (자모, 각도) 항목 조회
    fn lookup(map: &RoleMap, comp: Option<char>, angle: Angle) -> Option<Option<char>> {
        map.get(&comp)?
            .iter()
            .find(|(a, _)| *a == angle)
            .map(|&(_, r)| r)
    }

    /// 회전 항목 등록 (같은 각도 재등록 시 자리를 유지한 채 교체)
    fn insert_rotation(
        &mut self,
        role: Role,
        comp: Option<char>,
        angle: Angle,
        rotated: Option<char>,
    ) {
        let entries = self.role_map_mut(role).entry(comp).or_default();
        if let Some(slot) = entries.iter_mut().find(|(a, _)| *a == angle) {
            slot.1 = rotated;
        } else {
            entries.push((angle, rotated));
        }
    }

    /// 음절 예외 쌍 등록 (양방향)
    fn insert_exception(&mut self, a: char, b: char) {
        self.exceptions.insert(a, b);
        self.exceptions.insert(b, a);
    }

    fn role_map_mut(&mut self, role: Role) -> &mut RoleMap {
        match role {
            Role::Choseong => &mut self.choseong,
            Role::Jungseong => &mut self.jungseong,
            Role::JungseongInverse => &mut self.jungseong_inv,
            Role::Jongseong => &mut self.jongseong,
        }
    }
}

/// 자모 필드 파싱 (`_`는 빈 슬롯)
fn parse_component(field: &str, lineno: usize) -> Result<Option<char>, RuleError> {
    if field == "_" {
        return Ok(None);
    }
    parse_korean_char(field, lineno).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_180_src() -> &'static str {
        "i 180 ㄱ ㄴ
         i 180 ㄴ ㄱ
         i 180 ㅁ ㅁ
         m 180 ㅗ ㅜ
         m 180 ㅜ ㅗ
         f 180 ㄱ ㄴ
         f 180 ㄴ ㄱ
         f 180 ㅁ ㅁ"
    }

    fn table_180() -> RotationTable {
        RotationTable::parse(table_180_src()).unwrap()
    }

    #[test]
    fn test_rotate_180() {
        let table = table_180();
        // 곰을 반 바퀴 돌리면 종성·초성이 자리를 바꿈
        assert_eq!(table.rotate('곰'), Some("문".to_string()));
        assert_eq!(table.rotate('문'), Some("곰".to_string()));
        assert_eq!(table.rotate('국'), Some("논".to_string()));
    }

    #[test]
    fn test_rotate_90_appends_final() {
        let table = RotationTable::parse(
            "i 90 ㅁ ㅁ
             m 90 ㅗ ㅏ
             f 90 ㅁ ㅁ",
        )
        .unwrap();
        assert_eq!(table.rotate('몸'), Some("마ㅁ".to_string()));
    }

    #[test]
    fn test_rotate_270_prepends_final() {
        let table = RotationTable::parse(
            "i 270 ㅁ ㅁ
             m 270 ㅏ ㅗ
             f 270 ㅁ ㅁ",
        )
        .unwrap();
        assert_eq!(table.rotate('맘'), Some("ㅁ모".to_string()));
    }

    #[test]
    fn test_rotate_quarter_turn_round_trip() {
        // 90도 결과를 270도로 다시 돌리면 원래 자모 구성으로 복원
        let table = RotationTable::parse(
            "i 90 ㅁ ㅁ
             i 270 ㅁ ㅁ
             m 90 ㅗ ㅏ
             m 270 ㅏ ㅗ
             m 90 _ _
             m 270 _ _
             f 90 ㅁ ㅁ
             f 270 ㅁ ㅁ
             f 90 _ _
             f 270 _ _",
        )
        .unwrap();
        assert_eq!(table.rotate('몸'), Some("마ㅁ".to_string()));
        // 마 -> 모 (270도), 단독 ㅁ -> ㅁ
        assert_eq!(table.rotate('마'), Some("모".to_string()));
        assert_eq!(table.rotate('ㅁ'), Some("ㅁ".to_string()));
    }

    #[test]
    fn test_angle_priority_follows_insertion_order() {
        // 90도가 먼저 등록되면 90도 결과
        let first_90 = RotationTable::parse(
            "i 90 ㅁ ㅁ
             i 180 ㅁ ㅁ
             m 90 ㅗ ㅏ
             m 180 ㅗ ㅜ
             f 90 ㅁ ㅁ
             f 180 ㅁ ㅁ",
        )
        .unwrap();
        assert_eq!(first_90.rotate('몸'), Some("마ㅁ".to_string()));

        // 180도가 먼저 등록되면 180도 결과
        let first_180 = RotationTable::parse(
            "i 180 ㅁ ㅁ
             i 90 ㅁ ㅁ
             m 180 ㅗ ㅜ
             m 90 ㅗ ㅏ
             f 180 ㅁ ㅁ
             f 90 ㅁ ㅁ",
        )
        .unwrap();
        assert_eq!(first_180.rotate('몸'), Some("뭄".to_string()));
    }

    #[test]
    fn test_exception_overrides_component_match() {
        let mut src = String::from("s 곰 가\n");
        src.push_str(table_180_src());
        let table = RotationTable::parse(&src).unwrap();
        // 180도 직접 회전이 가능하더라도 예외 쌍이 우선
        assert_eq!(table.rotate('곰'), Some("가".to_string()));
        assert_eq!(table.rotate('가'), Some("곰".to_string()));
        // 예외가 없는 글자는 여전히 직접 회전
        assert_eq!(table.rotate('문'), Some("곰".to_string()));
    }

    #[test]
    fn test_cross_role_rotation() {
        let table = RotationTable::parse(
            "f 270 ㅅ ㅅ
             m-1 270 ㅜ ㅓ
             i 270 _ _",
        )
        .unwrap();
        // 수: 초성 ㅅ은 초성 표에 없지만 종성 표에 있음 -> 교차 역할
        assert_eq!(table.rotate('수'), Some("ㅅㅓ".to_string()));
    }

    #[test]
    fn test_cross_role_requires_270() {
        // 교차 역할 경로는 270도 항목만 인정
        let table = RotationTable::parse(
            "f 180 ㅅ ㅅ
             m-1 180 ㅜ ㅓ
             i 180 _ _",
        )
        .unwrap();
        assert_eq!(table.rotate('수'), None);
    }

    #[test]
    fn test_uncomposable_match_yields_none() {
        // 성립한 180도 재조합이 조합 불가(초성 자리에 모음)면
        // 교차 역할 경로를 다시 시도하지 않고 매칭 없음
        let table = RotationTable::parse(
            "i 180 ㄱ ㅏ
             m 180 ㅏ ㅓ
             f 180 _ ㄱ
             f 270 ㄱ ㄴ
             m-1 270 ㅏ ㅗ
             i 270 _ _",
        )
        .unwrap();
        assert_eq!(table.rotate('가'), None);
    }

    #[test]
    fn test_duplicate_angle_replaces_in_place() {
        let table = RotationTable::parse(
            "i 180 ㅇ ㅇ
             m 180 ㅗ ㅜ
             m 180 ㅗ ㅏ
             f 180 ㅇ ㅇ",
        )
        .unwrap();
        // 같은 (역할, 자모, 각도) 재등록은 교체만 하고 항목 수는 그대로
        assert_eq!(table.rotation_count(), 3);
        assert_eq!(table.rotate('옹'), Some("앙".to_string()));
    }

    #[test]
    fn test_rotate_unmatched() {
        let empty = RotationTable::parse("").unwrap();
        assert_eq!(empty.rotate('가'), None);
        assert_eq!(empty.rotate('a'), None);

        let table = table_180();
        // 초성 ㅂ은 어느 표에도 없음
        assert_eq!(table.rotate('봄'), None);
    }

    #[test]
    fn test_exception_counts() {
        let table = RotationTable::parse("s 톰 뭍\ns 눞 폭\n").unwrap();
        assert_eq!(table.exception_count(), 4);
        assert_eq!(table.rotation_count(), 0);
        assert_eq!(table.rotate('톰'), Some("뭍".to_string()));
        assert_eq!(table.rotate('뭍'), Some("톰".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        // 알 수 없는 역할
        assert!(matches!(
            RotationTable::parse("x 180 ㄱ ㄴ"),
            Err(RuleError::FormatError(_))
        ));
        // 알 수 없는 각도
        assert!(matches!(
            RotationTable::parse("i 45 ㄱ ㄴ"),
            Err(RuleError::FormatError(_))
        ));
        // 필드 수 부족
        assert!(matches!(
            RotationTable::parse("i 180 ㄱ"),
            Err(RuleError::FormatError(_))
        ));
        // 예외 레코드 필드 수
        assert!(matches!(
            RotationTable::parse("s 가"),
            Err(RuleError::FormatError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RotationTable::load(Path::new("없는_파일.txt"));
        assert!(matches!(result, Err(RuleError::IoError(_))));
    }
}
