use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::kill_sheet::{DEFAULT_SCHEDULE_ROWS, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP};
use crate::units::*;

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 오일필드(in, ft, psi, bbl, ppg). 내부 계산 기본값.
    Oilfield,
    /// 미터법(mm, m, bar, m3, SG)
    Metric,
}

/// 각 물리량별 입력/표시 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    /// 홀/관 직경
    pub diameter: LengthUnit,
    /// 심도 및 구간 길이
    pub depth: LengthUnit,
    pub pressure: PressureUnit,
    /// 용량, 체적, 펌프 토출량(체적/stroke)
    pub volume: VolumeUnit,
    pub density: DensityUnit,
}

impl DefaultUnits {
    /// 프리셋에 해당하는 단위 묶음을 돌려준다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Oilfield => Self {
                diameter: LengthUnit::Inch,
                depth: LengthUnit::Foot,
                pressure: PressureUnit::Psi,
                volume: VolumeUnit::Barrel,
                density: DensityUnit::Ppg,
            },
            UnitSystem::Metric => Self {
                diameter: LengthUnit::Millimeter,
                depth: LengthUnit::Meter,
                pressure: PressureUnit::Bar,
                volume: VolumeUnit::CubicMeter,
                density: DensityUnit::SpecificGravity,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Oilfield)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드(auto/ko/en)
    pub language: String,
    /// 언어팩(TOML) 디렉터리. 없으면 내장 문자열을 쓴다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 압력 스케줄 표 행 수
    pub schedule_rows: u32,
    /// 차트 x축 최소 범위(stroke)
    pub series_min_strokes: u32,
    /// 차트 점 간격(stroke)
    pub series_step: u32,
    /// 입력 변경 후 재계산까지 대기 시간(ms)
    pub debounce_ms: u64,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Oilfield,
            language: "auto".to_string(),
            language_pack_dir: None,
            schedule_rows: DEFAULT_SCHEDULE_ROWS,
            series_min_strokes: DEFAULT_SERIES_MIN_STROKES,
            series_step: DEFAULT_SERIES_STEP,
            debounce_ms: 300,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 시스템 프리셋을 적용한다.
    pub fn apply_preset(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}
