//! 설정 파일 로드/저장 (JSON)

use crate::rules::TransformMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Yamin 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct YaminConfig {
    /// 기본 변환 모드 (transform / rotate / transrotate)
    #[serde(default = "default_mode")]
    pub mode: TransformMode,
    /// 외부 규칙 디렉토리 (없으면 내장 사전 사용)
    #[serde(default)]
    pub db_dir: Option<PathBuf>,
}

fn default_mode() -> TransformMode {
    TransformMode::Transrotate
}

impl Default for YaminConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            db_dir: None,
        }
    }
}

/// 설정 파일 경로: ~/.config/yamin/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("yamin").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> YaminConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            YaminConfig::default()
        }),
        Err(_) => YaminConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &YaminConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
