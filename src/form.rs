//! 입력 폼 값을 계산용 레코드로 옮기는 계층.
//!
//! 폼은 문자열을 그대로 들고 있고, 계산 직전에 한 번에 정규화한다.
//! 비어 있거나 숫자가 아니거나 음수인 값은 0으로 처리한다.

use std::collections::HashMap;

use crate::config::DefaultUnits;
use crate::kill_sheet::KillSheetInput;
use crate::units::*;

/// 입력 필드가 속한 구역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Well,
    Kick,
    Pump,
    Casing,
    DrillCollar,
    DrillPipe,
    Hwdp,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Well,
        Section::Kick,
        Section::Pump,
        Section::Casing,
        Section::DrillCollar,
        Section::DrillPipe,
        Section::Hwdp,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Well => "section.well",
            Section::Kick => "section.kick",
            Section::Pump => "section.pump",
            Section::Casing => "section.casing",
            Section::DrillCollar => "section.drill_collar",
            Section::DrillPipe => "section.drill_pipe",
            Section::Hwdp => "section.hwdp",
        }
    }
}

/// 필드 값의 차원. 표시 단위를 정하고 오일필드 단위로 환산할 때 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Diameter,
    Depth,
    Pressure,
    Volume,
    /// 체적/stroke
    VolumePerStroke,
    Density,
    /// spm, 환산 없음
    StrokeRate,
    /// lb/ft, 환산 없음
    LinearWeight,
}

impl Dimension {
    /// 설정된 표시 단위 값을 오일필드 단위로 바꾼다.
    pub fn to_oilfield(&self, value: f64, units: &DefaultUnits) -> f64 {
        match self {
            Dimension::Diameter => convert_length(value, units.diameter, LengthUnit::Inch),
            Dimension::Depth => convert_length(value, units.depth, LengthUnit::Foot),
            Dimension::Pressure => convert_pressure(value, units.pressure, PressureUnit::Psi),
            Dimension::Volume | Dimension::VolumePerStroke => {
                convert_volume(value, units.volume, VolumeUnit::Barrel)
            }
            Dimension::Density => convert_density(value, units.density, DensityUnit::Ppg),
            Dimension::StrokeRate | Dimension::LinearWeight => value,
        }
    }

    /// 오일필드 단위 값을 설정된 표시 단위로 바꾼다.
    pub fn from_oilfield(&self, value: f64, units: &DefaultUnits) -> f64 {
        match self {
            Dimension::Diameter => convert_length(value, LengthUnit::Inch, units.diameter),
            Dimension::Depth => convert_length(value, LengthUnit::Foot, units.depth),
            Dimension::Pressure => convert_pressure(value, PressureUnit::Psi, units.pressure),
            Dimension::Volume | Dimension::VolumePerStroke => {
                convert_volume(value, VolumeUnit::Barrel, units.volume)
            }
            Dimension::Density => convert_density(value, DensityUnit::Ppg, units.density),
            Dimension::StrokeRate | Dimension::LinearWeight => value,
        }
    }

    /// 표시용 단위 기호.
    pub fn unit_symbol(&self, units: &DefaultUnits) -> String {
        match self {
            Dimension::Diameter => units.diameter.symbol().to_string(),
            Dimension::Depth => units.depth.symbol().to_string(),
            Dimension::Pressure => units.pressure.symbol().to_string(),
            Dimension::Volume => units.volume.symbol().to_string(),
            Dimension::VolumePerStroke => format!("{}/stk", units.volume.symbol()),
            Dimension::Density => units.density.symbol().to_string(),
            Dimension::StrokeRate => "spm".to_string(),
            Dimension::LinearWeight => "lb/ft".to_string(),
        }
    }
}

/// 숫자 입력 필드 식별자. HWDP 사용 여부는 체크박스라 여기에 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    HoleDiameter,
    HoleDepth,
    CurrentMudWeight,
    Sidpp,
    Sicp,
    PitGain,
    NormalCirculatingPressure,
    UserStrokePressure,
    PumpCapacity,
    StrokesPerMinute,
    CasingId,
    CasingOd,
    CasingSettingDepth,
    DcOd,
    DcId,
    DcLength,
    DpOd,
    DpId,
    DpNominalWeight,
    HwdpOd,
    HwdpId,
    HwdpLength,
}

impl FieldId {
    pub const ALL: [FieldId; 22] = [
        FieldId::HoleDiameter,
        FieldId::HoleDepth,
        FieldId::CurrentMudWeight,
        FieldId::Sidpp,
        FieldId::Sicp,
        FieldId::PitGain,
        FieldId::NormalCirculatingPressure,
        FieldId::UserStrokePressure,
        FieldId::PumpCapacity,
        FieldId::StrokesPerMinute,
        FieldId::CasingId,
        FieldId::CasingOd,
        FieldId::CasingSettingDepth,
        FieldId::DcOd,
        FieldId::DcId,
        FieldId::DcLength,
        FieldId::DpOd,
        FieldId::DpId,
        FieldId::DpNominalWeight,
        FieldId::HwdpOd,
        FieldId::HwdpId,
        FieldId::HwdpLength,
    ];

    /// 입력 레코드의 필드 이름과 같은 키.
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::HoleDiameter => "hole_diameter",
            FieldId::HoleDepth => "hole_depth",
            FieldId::CurrentMudWeight => "current_mud_weight",
            FieldId::Sidpp => "sidpp",
            FieldId::Sicp => "sicp",
            FieldId::PitGain => "pit_gain",
            FieldId::NormalCirculatingPressure => "normal_circulating_pressure",
            FieldId::UserStrokePressure => "user_stroke_pressure",
            FieldId::PumpCapacity => "pump_capacity",
            FieldId::StrokesPerMinute => "strokes_per_minute",
            FieldId::CasingId => "casing_id",
            FieldId::CasingOd => "casing_od",
            FieldId::CasingSettingDepth => "casing_setting_depth",
            FieldId::DcOd => "dc_od",
            FieldId::DcId => "dc_id",
            FieldId::DcLength => "dc_length",
            FieldId::DpOd => "dp_od",
            FieldId::DpId => "dp_id",
            FieldId::DpNominalWeight => "dp_nominal_weight",
            FieldId::HwdpOd => "hwdp_od",
            FieldId::HwdpId => "hwdp_id",
            FieldId::HwdpLength => "hwdp_length",
        }
    }

    /// i18n 라벨 키.
    pub fn label_key(&self) -> String {
        format!("field.{}", self.key())
    }

    pub fn section(&self) -> Section {
        match self {
            FieldId::HoleDiameter | FieldId::HoleDepth | FieldId::CurrentMudWeight => {
                Section::Well
            }
            FieldId::Sidpp
            | FieldId::Sicp
            | FieldId::PitGain
            | FieldId::NormalCirculatingPressure
            | FieldId::UserStrokePressure => Section::Kick,
            FieldId::PumpCapacity | FieldId::StrokesPerMinute => Section::Pump,
            FieldId::CasingId | FieldId::CasingOd | FieldId::CasingSettingDepth => {
                Section::Casing
            }
            FieldId::DcOd | FieldId::DcId | FieldId::DcLength => Section::DrillCollar,
            FieldId::DpOd | FieldId::DpId | FieldId::DpNominalWeight => Section::DrillPipe,
            FieldId::HwdpOd | FieldId::HwdpId | FieldId::HwdpLength => Section::Hwdp,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            FieldId::HoleDiameter
            | FieldId::CasingId
            | FieldId::CasingOd
            | FieldId::DcOd
            | FieldId::DcId
            | FieldId::DpOd
            | FieldId::DpId
            | FieldId::HwdpOd
            | FieldId::HwdpId => Dimension::Diameter,
            FieldId::HoleDepth
            | FieldId::CasingSettingDepth
            | FieldId::DcLength
            | FieldId::HwdpLength => Dimension::Depth,
            FieldId::CurrentMudWeight => Dimension::Density,
            FieldId::Sidpp
            | FieldId::Sicp
            | FieldId::NormalCirculatingPressure
            | FieldId::UserStrokePressure => Dimension::Pressure,
            FieldId::PitGain => Dimension::Volume,
            FieldId::PumpCapacity => Dimension::VolumePerStroke,
            FieldId::StrokesPerMinute => Dimension::StrokeRate,
            FieldId::DpNominalWeight => Dimension::LinearWeight,
        }
    }

    /// 레코드에서 이 필드의 값(오일필드 단위)을 읽는다.
    pub fn get(&self, input: &KillSheetInput) -> f64 {
        match self {
            FieldId::HoleDiameter => input.hole_diameter,
            FieldId::HoleDepth => input.hole_depth,
            FieldId::CurrentMudWeight => input.current_mud_weight,
            FieldId::Sidpp => input.sidpp,
            FieldId::Sicp => input.sicp,
            FieldId::PitGain => input.pit_gain,
            FieldId::NormalCirculatingPressure => input.normal_circulating_pressure,
            FieldId::UserStrokePressure => input.user_stroke_pressure,
            FieldId::PumpCapacity => input.pump_capacity,
            FieldId::StrokesPerMinute => input.strokes_per_minute,
            FieldId::CasingId => input.casing_id,
            FieldId::CasingOd => input.casing_od,
            FieldId::CasingSettingDepth => input.casing_setting_depth,
            FieldId::DcOd => input.dc_od,
            FieldId::DcId => input.dc_id,
            FieldId::DcLength => input.dc_length,
            FieldId::DpOd => input.dp_od,
            FieldId::DpId => input.dp_id,
            FieldId::DpNominalWeight => input.dp_nominal_weight,
            FieldId::HwdpOd => input.hwdp_od,
            FieldId::HwdpId => input.hwdp_id,
            FieldId::HwdpLength => input.hwdp_length,
        }
    }

    /// 레코드의 이 필드에 값(오일필드 단위)을 쓴다.
    pub fn set(&self, input: &mut KillSheetInput, value: f64) {
        let slot = match self {
            FieldId::HoleDiameter => &mut input.hole_diameter,
            FieldId::HoleDepth => &mut input.hole_depth,
            FieldId::CurrentMudWeight => &mut input.current_mud_weight,
            FieldId::Sidpp => &mut input.sidpp,
            FieldId::Sicp => &mut input.sicp,
            FieldId::PitGain => &mut input.pit_gain,
            FieldId::NormalCirculatingPressure => &mut input.normal_circulating_pressure,
            FieldId::UserStrokePressure => &mut input.user_stroke_pressure,
            FieldId::PumpCapacity => &mut input.pump_capacity,
            FieldId::StrokesPerMinute => &mut input.strokes_per_minute,
            FieldId::CasingId => &mut input.casing_id,
            FieldId::CasingOd => &mut input.casing_od,
            FieldId::CasingSettingDepth => &mut input.casing_setting_depth,
            FieldId::DcOd => &mut input.dc_od,
            FieldId::DcId => &mut input.dc_id,
            FieldId::DcLength => &mut input.dc_length,
            FieldId::DpOd => &mut input.dp_od,
            FieldId::DpId => &mut input.dp_id,
            FieldId::DpNominalWeight => &mut input.dp_nominal_weight,
            FieldId::HwdpOd => &mut input.hwdp_od,
            FieldId::HwdpId => &mut input.hwdp_id,
            FieldId::HwdpLength => &mut input.hwdp_length,
        };
        *slot = value;
    }
}

/// 입력 값을 정규화한다. 유한하지 않거나 음수면 0.
pub fn normalize_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 입력 문자열을 숫자로 정규화한다. 비었거나, 숫자가 아니거나, 음수면 0.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().map(normalize_value).unwrap_or(0.0)
}

/// 폼을 거치지 않고 들어온 레코드(TOML 케이스 등)를 폼과 같은 규칙으로 정규화한다.
pub fn normalize_input(mut input: KillSheetInput) -> KillSheetInput {
    for field in FieldId::ALL {
        let value = normalize_value(field.get(&input));
        field.set(&mut input, value);
    }
    input
}

/// 폼에 입력된 원시 문자열 모음.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputForm {
    fields: HashMap<FieldId, String>,
    pub hwdp_present: bool,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 문자열을 돌려준다. 입력된 적이 없으면 빈 문자열.
    pub fn text(&self, field: FieldId) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// 편집 위젯이 직접 수정할 수 있도록 문자열 버퍼를 빌려준다.
    pub fn text_mut(&mut self, field: FieldId) -> &mut String {
        self.fields.entry(field).or_default()
    }

    pub fn set_text(&mut self, field: FieldId, text: impl Into<String>) {
        self.fields.insert(field, text.into());
    }

    /// 현재 입력을 오일필드 단위의 계산 레코드로 만든다.
    pub fn to_input(&self, units: &DefaultUnits) -> KillSheetInput {
        let mut input = KillSheetInput {
            hwdp_present: self.hwdp_present,
            ..KillSheetInput::default()
        };
        for field in FieldId::ALL {
            let raw = parse_field(self.text(field));
            field.set(&mut input, field.dimension().to_oilfield(raw, units));
        }
        input
    }

    /// 계산 레코드 값을 표시 단위 문자열로 채운 폼을 만든다.
    pub fn from_input(input: &KillSheetInput, units: &DefaultUnits) -> Self {
        let mut form = Self {
            fields: HashMap::new(),
            hwdp_present: input.hwdp_present,
        };
        for field in FieldId::ALL {
            let shown = field.dimension().from_oilfield(field.get(input), units);
            form.set_text(field, trim_number(shown));
        }
        form
    }
}

/// 단위 환산 잡음을 걷어낸 짧은 문자열. 유효숫자 12자리를 남긴다.
fn trim_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    let rounded: f64 = format!("{value:.11e}").parse().unwrap_or(value);
    format!("{rounded}")
}
