//! 킬 시트(Kill Sheet) 계산 모듈.
//!
//! 입력 레코드 하나를 받아 킬 머드 비중, 순환 압력, 드릴스트링/환형 용량,
//! 스트로크 수, 펌핑 시간을 한 번에 계산한다. 상태를 갖지 않으며 같은 입력에는
//! 항상 같은 결과를 돌려준다.
//!
//! 단위: 직경 in, 길이/심도 ft, 머드 비중 ppg, 압력 psi, 체적 bbl, 펌프 속도 spm.

pub mod capacity;
pub mod schedule;

use serde::{Deserialize, Serialize};

pub use capacity::{annular_capacity_bbl, internal_capacity_bbl, BBL_PER_IN2_FT};
pub use schedule::{
    bounded_pressure_series, pressure_schedule, pressure_series, series_len, PressurePoint,
    DEFAULT_SCHEDULE_ROWS, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP, MAX_SERIES_POINTS,
};

/// 정수압 구배 계수 (psi/ft per ppg).
pub const PSI_PER_FT_PER_PPG: f64 = 0.052;

/// 킬 시트 계산 입력값.
///
/// 모든 수치는 0 이상이어야 한다. 비어 있거나 음수인 값은 폼 단계에서 0으로
/// 정규화된다 (`crate::form` 참고).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KillSheetInput {
    /// 홀 직경(in)
    pub hole_diameter: f64,
    /// 홀 심도, 수직심도 TVD(ft)
    pub hole_depth: f64,
    /// 현재 머드 비중(ppg)
    pub current_mud_weight: f64,

    /// 드릴파이프 폐쇄압 SIDPP(psi)
    pub sidpp: f64,
    /// 케이싱 폐쇄압 SICP(psi). 계산에는 쓰지 않는다.
    pub sicp: f64,
    /// 핏 게인(bbl). 계산에는 쓰지 않는다.
    pub pit_gain: f64,
    /// 정상 순환 압력(psi). 계산에는 쓰지 않는다.
    pub normal_circulating_pressure: f64,
    /// 저속 펌프 압력(psi). ICP/FCP 계산에 사용한다.
    pub user_stroke_pressure: f64,

    /// 펌프 토출량(bbl/stroke)
    pub pump_capacity: f64,
    /// 펌프 속도(spm)
    pub strokes_per_minute: f64,

    pub casing_id: f64,
    /// 케이싱 외경(in). 계산에는 쓰지 않는다.
    pub casing_od: f64,
    pub casing_setting_depth: f64,

    pub dc_od: f64,
    pub dc_id: f64,
    pub dc_length: f64,

    pub dp_od: f64,
    pub dp_id: f64,
    /// 드릴파이프 공칭 중량(lb/ft). 계산에는 쓰지 않는다.
    pub dp_nominal_weight: f64,

    /// HWDP 사용 여부. `false`이면 HWDP 관련 값은 모두 0으로 본다.
    pub hwdp_present: bool,
    pub hwdp_od: f64,
    pub hwdp_id: f64,
    pub hwdp_length: f64,
}

impl KillSheetInput {
    /// HWDP가 있을 때만 길이를 돌려준다.
    fn effective_hwdp_length(&self) -> f64 {
        if self.hwdp_present {
            self.hwdp_length
        } else {
            0.0
        }
    }
}

/// 킬 시트 계산 결과. 호출마다 새로 만들어지며 이후 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KillSheetResult {
    pub kill_mud_weight: f64,
    pub icp: f64,
    pub fcp: f64,
    pub drill_pipe_capacity: f64,
    pub drill_collar_capacity: f64,
    pub hwdp_internal_capacity: f64,
    pub drill_string_capacity: f64,
    pub drill_string_volume: f64,
    pub surface_to_bit_strokes: f64,
    pub open_hole_depth: f64,
    pub open_hole_dp_length: f64,
    pub total_dp_length: f64,
    pub ann_open_dc: f64,
    pub ann_open_hwdp: f64,
    pub ann_open_dp: f64,
    pub ann_cased_dp: f64,
    pub total_annular_capacity: f64,
    pub bit_to_surface_strokes: f64,
    pub total_strokes: f64,
    pub time_surface_to_bit: f64,
    pub bit_to_surface_time: f64,
    pub total_pumping_time: f64,
    /// 100 스트로크당 압력 강하(psi). FCP > ICP 이면 음수가 된다.
    pub pressure_drop_per_100_strokes: f64,
}

impl KillSheetResult {
    /// 전제 조건을 만족하지 못했을 때 쓰는 표시용 결과. 모든 값이 NaN이다.
    pub fn invalid() -> Self {
        let nan = f64::NAN;
        Self {
            kill_mud_weight: nan,
            icp: nan,
            fcp: nan,
            drill_pipe_capacity: nan,
            drill_collar_capacity: nan,
            hwdp_internal_capacity: nan,
            drill_string_capacity: nan,
            drill_string_volume: nan,
            surface_to_bit_strokes: nan,
            open_hole_depth: nan,
            open_hole_dp_length: nan,
            total_dp_length: nan,
            ann_open_dc: nan,
            ann_open_hwdp: nan,
            ann_open_dp: nan,
            ann_cased_dp: nan,
            total_annular_capacity: nan,
            bit_to_surface_strokes: nan,
            total_strokes: nan,
            time_surface_to_bit: nan,
            bit_to_surface_time: nan,
            total_pumping_time: nan,
            pressure_drop_per_100_strokes: nan,
        }
    }

    /// 모든 필드를 선언 순서대로 나열한다.
    pub fn values(&self) -> [f64; 23] {
        [
            self.kill_mud_weight,
            self.icp,
            self.fcp,
            self.drill_pipe_capacity,
            self.drill_collar_capacity,
            self.hwdp_internal_capacity,
            self.drill_string_capacity,
            self.drill_string_volume,
            self.surface_to_bit_strokes,
            self.open_hole_depth,
            self.open_hole_dp_length,
            self.total_dp_length,
            self.ann_open_dc,
            self.ann_open_hwdp,
            self.ann_open_dp,
            self.ann_cased_dp,
            self.total_annular_capacity,
            self.bit_to_surface_strokes,
            self.total_strokes,
            self.time_surface_to_bit,
            self.bit_to_surface_time,
            self.total_pumping_time,
            self.pressure_drop_per_100_strokes,
        ]
    }

    /// 모든 값이 유한한지 확인한다.
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

/// 계산 전제 조건 위반을 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KillSheetError {
    /// 0보다 커야 하는 입력이 0 이하인 경우
    #[error("{field} 값은 0보다 커야 합니다.")]
    NonPositive { field: &'static str },
}

/// 계산 전제 조건(심도, 펌프 토출량, 머드 비중 > 0)을 확인한다.
pub fn check_preconditions(input: &KillSheetInput) -> Result<(), KillSheetError> {
    let required = [
        ("hole_depth", input.hole_depth),
        ("pump_capacity", input.pump_capacity),
        ("current_mud_weight", input.current_mud_weight),
    ];
    for (field, value) in required {
        // NaN 도 여기서 걸러진다
        if !(value > 0.0) {
            return Err(KillSheetError::NonPositive { field });
        }
    }
    Ok(())
}

/// 킬 시트를 계산한다.
///
/// 어떤 입력에도 패닉하지 않는다. 0으로 나누는 경우는 모두 0으로 처리하되,
/// 심도가 0이면 킬 머드 비중은 무한대가 될 수 있으므로 정상 결과가 필요하면
/// [`compute_checked`]를 사용한다.
pub fn compute(input: KillSheetInput) -> KillSheetResult {
    let hwdp_length = input.effective_hwdp_length();

    // 압력
    let kill_mud_weight =
        input.current_mud_weight + input.sidpp / (PSI_PER_FT_PER_PPG * input.hole_depth);
    let icp = input.sidpp + input.user_stroke_pressure;
    let fcp = if input.current_mud_weight != 0.0 {
        input.user_stroke_pressure * (kill_mud_weight / input.current_mud_weight)
    } else {
        0.0
    };

    // 드릴스트링 내부 용량
    let drill_pipe_capacity = internal_capacity_bbl(input.hole_depth, input.dp_id);
    let drill_collar_capacity = internal_capacity_bbl(input.dc_length, input.dc_id);
    let hwdp_internal_capacity = if input.hwdp_present {
        internal_capacity_bbl(input.hwdp_length, input.hwdp_id)
    } else {
        0.0
    };
    let drill_string_capacity = drill_pipe_capacity + drill_collar_capacity + hwdp_internal_capacity;
    let drill_string_volume = drill_string_capacity;
    let surface_to_bit_strokes = if input.pump_capacity > 0.0 {
        drill_string_volume / input.pump_capacity
    } else {
        0.0
    };

    // 오픈홀/케이싱 구간 길이
    let open_hole_depth = (input.hole_depth - input.casing_setting_depth).max(0.0);
    let bha_length = input.dc_length + hwdp_length;
    let open_hole_dp_length = (open_hole_depth - bha_length).max(0.0);
    let total_dp_length = open_hole_dp_length + input.casing_setting_depth + hwdp_length;

    // 환형 용량
    let ann_open_dc = annular_capacity_bbl(input.dc_length, input.hole_diameter, input.dc_od);
    let ann_open_hwdp = if input.hwdp_present {
        annular_capacity_bbl(input.hwdp_length, input.hole_diameter, input.hwdp_od)
    } else {
        0.0
    };
    let ann_open_dp = annular_capacity_bbl(open_hole_dp_length, input.hole_diameter, input.dp_od);
    let cased_length = input.casing_setting_depth.min(input.hole_depth);
    let ann_cased_dp = annular_capacity_bbl(cased_length, input.casing_id, input.dp_od);
    let total_annular_capacity = ann_open_dc + ann_open_hwdp + ann_open_dp + ann_cased_dp;

    let bit_to_surface_strokes = if input.pump_capacity > 0.0 {
        total_annular_capacity / input.pump_capacity
    } else {
        0.0
    };
    let total_strokes = surface_to_bit_strokes + bit_to_surface_strokes;

    // 펌핑 시간(min)
    let (time_surface_to_bit, bit_to_surface_time) =
        if input.strokes_per_minute > 0.0 && input.pump_capacity > 0.0 {
            let bbl_per_min = input.strokes_per_minute * input.pump_capacity;
            (
                drill_string_volume / bbl_per_min,
                total_annular_capacity / bbl_per_min,
            )
        } else {
            (0.0, 0.0)
        };
    let total_pumping_time = time_surface_to_bit + bit_to_surface_time;

    let pressure_drop_per_100_strokes = if surface_to_bit_strokes > 0.0 {
        ((icp - fcp) / surface_to_bit_strokes) * 100.0
    } else {
        0.0
    };

    KillSheetResult {
        kill_mud_weight,
        icp,
        fcp,
        drill_pipe_capacity,
        drill_collar_capacity,
        hwdp_internal_capacity,
        drill_string_capacity,
        drill_string_volume,
        surface_to_bit_strokes,
        open_hole_depth,
        open_hole_dp_length,
        total_dp_length,
        ann_open_dc,
        ann_open_hwdp,
        ann_open_dp,
        ann_cased_dp,
        total_annular_capacity,
        bit_to_surface_strokes,
        total_strokes,
        time_surface_to_bit,
        bit_to_surface_time,
        total_pumping_time,
        pressure_drop_per_100_strokes,
    }
}

/// 전제 조건을 확인한 뒤 계산한다. 조건을 만족하지 못하면 계산하지 않는다.
pub fn compute_checked(input: KillSheetInput) -> Result<KillSheetResult, KillSheetError> {
    if let Err(err) = check_preconditions(&input) {
        tracing::debug!(%err, "kill sheet preconditions not met, skipping computation");
        return Err(err);
    }
    let result = compute(input);
    tracing::debug!(
        kmw = result.kill_mud_weight,
        icp = result.icp,
        fcp = result.fcp,
        total_strokes = result.total_strokes,
        "kill sheet computed"
    );
    Ok(result)
}

/// 전제 조건을 만족하지 못하면 [`KillSheetResult::invalid`]를 돌려준다.
pub fn compute_or_invalid(input: KillSheetInput) -> KillSheetResult {
    compute_checked(input).unwrap_or_else(|_| KillSheetResult::invalid())
}
