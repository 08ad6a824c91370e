//! 단위 정의 및 변환 모듈 모음.
//!
//! 내부 계산은 모두 오일필드 단위(ft, in, psi, bbl, ppg)로 한다.

pub mod density;
pub mod length;
pub mod pressure;
pub mod volume;

pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use volume::{convert_volume, VolumeUnit};
