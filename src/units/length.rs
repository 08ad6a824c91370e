use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 피트(ft)이다. 직경도 같은 enum을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Inch,
    Meter,
    Millimeter,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
        }
    }
}

fn to_foot(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value / 12.0,
        LengthUnit::Meter => value / 0.3048,
        LengthUnit::Millimeter => value / 304.8,
    }
}

fn from_foot(value_ft: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value_ft,
        LengthUnit::Inch => value_ft * 12.0,
        LengthUnit::Meter => value_ft * 0.3048,
        LengthUnit::Millimeter => value_ft * 304.8,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    from_foot(to_foot(value, from), to)
}
