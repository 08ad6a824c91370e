use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 psi(게이지)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Bar,
    KiloPascal,
    MegaPascal,
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psi",
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
        }
    }
}

const KPA_PER_PSI: f64 = 6.894_757_293;

/// 주어진 압력을 psi 로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value * 100.0 / KPA_PER_PSI,
        PressureUnit::KiloPascal => value / KPA_PER_PSI,
        PressureUnit::MegaPascal => value * 1000.0 / KPA_PER_PSI,
    }
}

/// psi 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::Bar => value_psi * KPA_PER_PSI / 100.0,
        PressureUnit::KiloPascal => value_psi * KPA_PER_PSI,
        PressureUnit::MegaPascal => value_psi * KPA_PER_PSI / 1000.0,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_psi(to_psi(value, from), to)
}
