//! 스트로크 대비 드릴파이프 압력 스케줄.
//!
//! 압력은 ICP에서 FCP까지 선형으로 떨어지며, 어떤 경우에도 FCP 아래로는
//! 내려가지 않는다. 하한만 두고 상한은 두지 않으므로 FCP > ICP 인 경우에도
//! "FCP 이상" 조건만 적용된다.

use serde::{Deserialize, Serialize};

use super::KillSheetResult;

/// 스케줄 표 기본 행 수.
pub const DEFAULT_SCHEDULE_ROWS: u32 = 10;
/// 차트 x축 최소 범위(stroke).
pub const DEFAULT_SERIES_MIN_STROKES: u32 = 1400;
/// 차트 점 간격(stroke).
pub const DEFAULT_SERIES_STEP: u32 = 100;

/// (스트로크, 압력) 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressurePoint {
    pub strokes: f64,
    /// 드릴파이프 압력(psi)
    pub pressure: f64,
}

/// 스트로크당 압력 강하와 하한을 묶어 둔 선형 프로파일.
#[derive(Debug, Clone, Copy)]
struct LinearDecline {
    icp: f64,
    fcp: f64,
    per_stroke_drop: f64,
}

impl LinearDecline {
    /// 지표→비트 스트로크가 0 이하(또는 NaN)면 프로파일이 정의되지 않는다.
    fn from_result(result: &KillSheetResult) -> Option<Self> {
        if !(result.surface_to_bit_strokes > 0.0) {
            return None;
        }
        Some(Self {
            icp: result.icp,
            fcp: result.fcp,
            per_stroke_drop: (result.icp - result.fcp) / result.surface_to_bit_strokes,
        })
    }

    fn point(&self, strokes: f64) -> PressurePoint {
        let linear = self.icp - self.per_stroke_drop * strokes;
        PressurePoint {
            strokes,
            pressure: linear.max(self.fcp),
        }
    }
}

/// 지표→비트 구간을 `row_count` 등분한 압력 스케줄(`row_count + 1` 행)을 만든다.
///
/// 지표→비트 스트로크가 0 이하이거나 `row_count`가 0이면 빈 목록을 돌려준다.
pub fn pressure_schedule(result: &KillSheetResult, row_count: u32) -> Vec<PressurePoint> {
    let Some(profile) = LinearDecline::from_result(result) else {
        return Vec::new();
    };
    if row_count == 0 {
        return Vec::new();
    }
    let increment = result.surface_to_bit_strokes / f64::from(row_count);
    (0..=row_count)
        .map(|i| profile.point(f64::from(i) * increment))
        .collect()
}

/// 호출자가 허용하는 시리즈 점 개수 상한 기본값.
pub const MAX_SERIES_POINTS: u64 = 10_000;

/// 시리즈의 마지막 점 인덱스. 프로파일이 없거나 `step`이 0이면 `None`.
fn series_extent(
    result: &KillSheetResult,
    min_max_strokes: u32,
    step: u32,
) -> Option<(LinearDecline, f64, u64)> {
    let profile = LinearDecline::from_result(result)?;
    if step == 0 {
        return None;
    }
    let min_bound = f64::from(min_max_strokes);
    let bound = if result.total_strokes.is_finite() {
        min_bound.max(result.total_strokes.ceil())
    } else {
        min_bound
    };
    let step = f64::from(step);
    let last_index = (bound / step).ceil() as u64;
    Some((profile, step, last_index))
}

/// 차트용 압력 시리즈를 만든다.
///
/// 스트로크는 `0, step, 2*step, ...` 이며 `max(min_max_strokes, ceil(total_strokes))`
/// 이상이 되는 첫 배수에서 끝난다. 따라서 마지막 점은 범위를 최대 `step - 1`
/// 만큼 넘을 수 있다.
pub fn pressure_series(
    result: &KillSheetResult,
    min_max_strokes: u32,
    step: u32,
) -> Vec<PressurePoint> {
    let Some((profile, step, last_index)) = series_extent(result, min_max_strokes, step) else {
        return Vec::new();
    };
    (0..=last_index)
        .map(|i| profile.point(i as f64 * step))
        .collect()
}

/// [`pressure_series`]가 만들 점 개수. 점을 만들지 않고 센다.
pub fn series_len(result: &KillSheetResult, min_max_strokes: u32, step: u32) -> u64 {
    series_extent(result, min_max_strokes, step)
        .map(|(_, _, last_index)| last_index.saturating_add(1))
        .unwrap_or(0)
}

/// 점 개수가 `max_points`를 넘으면 `None`. 펌프 토출량이 극히 작을 때
/// 수십억 개의 점을 만들지 않도록 화면 쪽에서 쓴다.
pub fn bounded_pressure_series(
    result: &KillSheetResult,
    min_max_strokes: u32,
    step: u32,
    max_points: u64,
) -> Option<Vec<PressurePoint>> {
    let len = series_len(result, min_max_strokes, step);
    if len > max_points {
        tracing::warn!(len, max_points, "pressure series too long, skipped");
        return None;
    }
    Some(pressure_series(result, min_max_strokes, step))
}
