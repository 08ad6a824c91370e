use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 배럴(bbl, 42 US gal)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Barrel,
    CubicMeter,
    Liter,
    UsGallon,
}

impl VolumeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Barrel => "bbl",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Liter => "L",
            VolumeUnit::UsGallon => "gal",
        }
    }
}

const M3_PER_BBL: f64 = 0.158_987_294_928;

fn to_barrel(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Barrel => value,
        VolumeUnit::CubicMeter => value / M3_PER_BBL,
        VolumeUnit::Liter => value / (M3_PER_BBL * 1000.0),
        VolumeUnit::UsGallon => value / 42.0,
    }
}

fn from_barrel(value_bbl: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Barrel => value_bbl,
        VolumeUnit::CubicMeter => value_bbl * M3_PER_BBL,
        VolumeUnit::Liter => value_bbl * M3_PER_BBL * 1000.0,
        VolumeUnit::UsGallon => value_bbl * 42.0,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    from_barrel(to_barrel(value, from), to)
}
