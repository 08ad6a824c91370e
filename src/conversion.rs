use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `psi`, `bar`, `ft`, `m`, `bbl`, `m3`, `ppg`, `sg` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let base = to_base(kind, value, from_unit_str)?;
    from_base(base, to_unit_str)
}

/// 값을 해당 물리량의 내부 기준 단위로 환산한다.
pub fn to_base(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    let value_base = match kind {
        QuantityKind::Pressure => {
            convert_pressure(value, parse_pressure_unit(unit_str)?, PressureUnit::Psi)
        }
        QuantityKind::Length => {
            convert_length(value, parse_length_unit(unit_str)?, LengthUnit::Foot)
        }
        QuantityKind::Volume => {
            convert_volume(value, parse_volume_unit(unit_str)?, VolumeUnit::Barrel)
        }
        QuantityKind::Density => {
            convert_density(value, parse_density_unit(unit_str)?, DensityUnit::Ppg)
        }
    };
    Ok(QuantityValue { kind, value_base })
}

/// 기준 단위 값을 요청한 단위 문자열로 환산한다.
pub fn from_base(quantity: QuantityValue, unit_str: &str) -> Result<f64, ConversionError> {
    let v = quantity.value_base;
    let out = match quantity.kind {
        QuantityKind::Pressure => {
            convert_pressure(v, PressureUnit::Psi, parse_pressure_unit(unit_str)?)
        }
        QuantityKind::Length => convert_length(v, LengthUnit::Foot, parse_length_unit(unit_str)?),
        QuantityKind::Volume => {
            convert_volume(v, VolumeUnit::Barrel, parse_volume_unit(unit_str)?)
        }
        QuantityKind::Density => {
            convert_density(v, DensityUnit::Ppg, parse_density_unit(unit_str)?)
        }
    };
    Ok(out)
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" | "psig" => Ok(PressureUnit::Psi),
        "bar" => Ok(PressureUnit::Bar),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bbl" | "barrel" => Ok(VolumeUnit::Barrel),
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "gal" | "usgal" => Ok(VolumeUnit::UsGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ppg" | "lb/gal" => Ok(DensityUnit::Ppg),
        "sg" => Ok(DensityUnit::SpecificGravity),
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
