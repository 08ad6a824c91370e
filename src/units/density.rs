use serde::{Deserialize, Serialize};

/// 머드 비중 단위. 내부 기준은 ppg(lb/US gal)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    Ppg,
    /// 물 대비 비중(SG)
    SpecificGravity,
    KgPerCubicMeter,
}

impl DensityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DensityUnit::Ppg => "ppg",
            DensityUnit::SpecificGravity => "SG",
            DensityUnit::KgPerCubicMeter => "kg/m3",
        }
    }
}

const KG_M3_PER_PPG: f64 = 119.826_427;
/// 물(SG 1.0)의 ppg 값
const PPG_PER_SG: f64 = 8.345_404;

fn to_ppg(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::Ppg => value,
        DensityUnit::SpecificGravity => value * PPG_PER_SG,
        DensityUnit::KgPerCubicMeter => value / KG_M3_PER_PPG,
    }
}

fn from_ppg(value_ppg: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::Ppg => value_ppg,
        DensityUnit::SpecificGravity => value_ppg / PPG_PER_SG,
        DensityUnit::KgPerCubicMeter => value_ppg * KG_M3_PER_PPG,
    }
}

/// 머드 비중을 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    if from == to {
        return value;
    }
    from_ppg(to_ppg(value, from), to)
}
