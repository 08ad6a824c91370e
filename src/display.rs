//! 계산 결과를 화면/콘솔 표시용 문자열로 바꾼다.
//!
//! 반올림은 표시할 때만 한다. 유한하지 않은 값은 `--`로 표시하고 그 이상
//! 전달하지 않는다.

use crate::config::DefaultUnits;
use crate::form::Dimension;
use crate::kill_sheet::{KillSheetResult, PressurePoint};

/// 값을 표시할 수 없을 때 쓰는 자리표시자.
pub const PLACEHOLDER: &str = "--";

/// 소수점 자릿수를 지정해 값을 표시한다. NaN/무한대는 자리표시자.
pub fn format_value(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// 스트로크는 정수로 표시한다.
pub fn format_strokes(value: f64) -> String {
    format_value(value, 0)
}

/// 압력은 소수 둘째 자리까지 표시한다.
pub fn format_pressure(value: f64) -> String {
    format_value(value, 2)
}

/// 결과 값의 성격. 단위 환산과 자릿수를 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultKind {
    Density,
    Pressure,
    Volume,
    Length,
    Strokes,
    Minutes,
    PressurePer100Strokes,
}

impl ResultKind {
    fn decimals(&self) -> usize {
        match self {
            ResultKind::Density => 2,
            ResultKind::Pressure | ResultKind::PressurePer100Strokes => 2,
            ResultKind::Volume => 2,
            ResultKind::Length => 1,
            ResultKind::Strokes => 0,
            ResultKind::Minutes => 1,
        }
    }

    fn convert(&self, value: f64, units: &DefaultUnits) -> f64 {
        match self {
            ResultKind::Density => Dimension::Density.from_oilfield(value, units),
            ResultKind::Pressure | ResultKind::PressurePer100Strokes => {
                Dimension::Pressure.from_oilfield(value, units)
            }
            ResultKind::Volume => Dimension::Volume.from_oilfield(value, units),
            ResultKind::Length => Dimension::Depth.from_oilfield(value, units),
            ResultKind::Strokes | ResultKind::Minutes => value,
        }
    }

    fn unit(&self, units: &DefaultUnits) -> String {
        match self {
            ResultKind::Density => units.density.symbol().to_string(),
            ResultKind::Pressure => units.pressure.symbol().to_string(),
            ResultKind::PressurePer100Strokes => format!("{}/100 stk", units.pressure.symbol()),
            ResultKind::Volume => units.volume.symbol().to_string(),
            ResultKind::Length => units.depth.symbol().to_string(),
            ResultKind::Strokes => "stk".to_string(),
            ResultKind::Minutes => "min".to_string(),
        }
    }
}

/// 결과 표의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// i18n 라벨 키 (`result.*`)
    pub label_key: &'static str,
    /// 표시 단위로 환산된 값
    pub value: f64,
    pub unit: String,
    decimals: usize,
}

impl ResultRow {
    pub fn formatted(&self) -> String {
        format_value(self.value, self.decimals)
    }
}

fn labelled(result: &KillSheetResult) -> [(&'static str, f64, ResultKind); 23] {
    use ResultKind::*;
    [
        ("result.kill_mud_weight", result.kill_mud_weight, Density),
        ("result.icp", result.icp, Pressure),
        ("result.fcp", result.fcp, Pressure),
        ("result.drill_pipe_capacity", result.drill_pipe_capacity, Volume),
        ("result.drill_collar_capacity", result.drill_collar_capacity, Volume),
        ("result.hwdp_internal_capacity", result.hwdp_internal_capacity, Volume),
        ("result.drill_string_capacity", result.drill_string_capacity, Volume),
        ("result.drill_string_volume", result.drill_string_volume, Volume),
        ("result.surface_to_bit_strokes", result.surface_to_bit_strokes, Strokes),
        ("result.open_hole_depth", result.open_hole_depth, Length),
        ("result.open_hole_dp_length", result.open_hole_dp_length, Length),
        ("result.total_dp_length", result.total_dp_length, Length),
        ("result.ann_open_dc", result.ann_open_dc, Volume),
        ("result.ann_open_hwdp", result.ann_open_hwdp, Volume),
        ("result.ann_open_dp", result.ann_open_dp, Volume),
        ("result.ann_cased_dp", result.ann_cased_dp, Volume),
        ("result.total_annular_capacity", result.total_annular_capacity, Volume),
        ("result.bit_to_surface_strokes", result.bit_to_surface_strokes, Strokes),
        ("result.total_strokes", result.total_strokes, Strokes),
        ("result.time_surface_to_bit", result.time_surface_to_bit, Minutes),
        ("result.bit_to_surface_time", result.bit_to_surface_time, Minutes),
        ("result.total_pumping_time", result.total_pumping_time, Minutes),
        (
            "result.pressure_drop_per_100_strokes",
            result.pressure_drop_per_100_strokes,
            PressurePer100Strokes,
        ),
    ]
}

/// 결과 레코드를 표시 단위로 환산한 행 목록으로 만든다.
pub fn result_rows(result: &KillSheetResult, units: &DefaultUnits) -> Vec<ResultRow> {
    labelled(result)
        .into_iter()
        .map(|(label_key, value, kind)| ResultRow {
            label_key,
            value: kind.convert(value, units),
            unit: kind.unit(units),
            decimals: kind.decimals(),
        })
        .collect()
}

/// 입력이 유효하지 않을 때 보여줄 비워진 행 목록. 모든 값이 자리표시자로 나온다.
pub fn cleared_rows(units: &DefaultUnits) -> Vec<ResultRow> {
    result_rows(&KillSheetResult::invalid(), units)
}

/// 압력 스케줄 표의 한 행(표시용 문자열).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub strokes: String,
    pub pressure: String,
}

/// 스케줄 점들을 표 행으로 바꾼다. 압력은 표시 단위로 환산한다.
pub fn schedule_rows(points: &[PressurePoint], units: &DefaultUnits) -> Vec<ScheduleRow> {
    points
        .iter()
        .map(|p| ScheduleRow {
            strokes: format_strokes(p.strokes),
            pressure: format_pressure(Dimension::Pressure.from_oilfield(p.pressure, units)),
        })
        .collect()
}
