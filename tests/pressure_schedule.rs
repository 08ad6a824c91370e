//! 압력 스케줄/차트 시리즈 테스트.
use well_control_toolbox::kill_sheet::{
    bounded_pressure_series, compute, pressure_schedule, pressure_series, series_len,
    KillSheetInput, KillSheetResult, DEFAULT_SCHEDULE_ROWS, DEFAULT_SERIES_MIN_STROKES,
    DEFAULT_SERIES_STEP, MAX_SERIES_POINTS,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected:.6} got {actual:.6}"
    );
}

fn worked_example() -> KillSheetResult {
    compute(KillSheetInput {
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 0.1,
        dp_id: 3.0,
        hole_diameter: 8.5,
        dp_od: 5.0,
        casing_id: 8.5,
        ..KillSheetInput::default()
    })
}

#[test]
fn default_schedule_spans_icp_to_fcp() {
    let r = worked_example();
    let schedule = pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS);
    assert_eq!(schedule.len(), 11);
    assert_eq!(schedule[0].strokes, 0.0);
    assert_close("first", schedule[0].pressure, 1_300.0, 1e-9);
    let last = schedule[10];
    assert_close("last strokes", last.strokes, r.surface_to_bit_strokes, 1e-9);
    assert_close("last pressure", last.pressure, r.fcp, 1e-6);
    for pair in schedule.windows(2) {
        assert!(pair[1].strokes > pair[0].strokes);
        assert!(pair[1].pressure <= pair[0].pressure);
    }
    for p in &schedule {
        assert!(p.pressure >= r.fcp);
    }
}

#[test]
fn schedule_increment_follows_row_count() {
    let r = worked_example();
    let schedule = pressure_schedule(&r, 4);
    assert_eq!(schedule.len(), 5);
    let increment = r.surface_to_bit_strokes / 4.0;
    for (i, p) in schedule.iter().enumerate() {
        assert_close("strokes", p.strokes, increment * i as f64, 1e-9);
    }
    // 두 번째 행: ICP - 감소율 * 증분
    let per_stroke = (r.icp - r.fcp) / r.surface_to_bit_strokes;
    assert_close(
        "row 1",
        schedule[1].pressure,
        r.icp - per_stroke * increment,
        1e-9,
    );
}

#[test]
fn zero_rows_gives_empty_schedule() {
    assert!(pressure_schedule(&worked_example(), 0).is_empty());
}

#[test]
fn no_surface_to_bit_strokes_gives_empty_outputs() {
    let mut r = worked_example();
    r.surface_to_bit_strokes = 0.0;
    assert!(pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS).is_empty());
    assert!(pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP).is_empty());

    r.surface_to_bit_strokes = f64::NAN;
    assert!(pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS).is_empty());
}

#[test]
fn fcp_above_icp_is_clamped_to_fcp() {
    let r = compute(KillSheetInput {
        hole_depth: 1_000.0,
        current_mud_weight: 10.0,
        sidpp: 100.0,
        user_stroke_pressure: 1_000.0,
        pump_capacity: 0.1,
        dp_id: 3.0,
        ..KillSheetInput::default()
    });
    assert!(r.fcp > r.icp);
    let schedule = pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS);
    assert_eq!(schedule.len(), 11);
    for p in &schedule {
        assert!(p.pressure >= r.fcp);
        assert_close("clamped", p.pressure, r.fcp, 1e-6);
    }
}

#[test]
fn series_runs_past_total_strokes() {
    let r = worked_example();
    assert_close("total", r.total_strokes, 5_470.452_709_856_5, 1e-6);
    let series = pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP);
    // ceil(5470.45) = 5471 -> 마지막 점은 5500
    assert_eq!(series.len(), 56);
    assert_eq!(series[0].strokes, 0.0);
    assert_eq!(series[55].strokes, 5_500.0);
    for (i, p) in series.iter().enumerate() {
        assert_eq!(p.strokes, 100.0 * i as f64);
        assert!(p.pressure >= r.fcp);
    }
    // 비트 도달 이후는 FCP 유지
    let after_bit: Vec<_> = series
        .iter()
        .filter(|p| p.strokes >= r.surface_to_bit_strokes)
        .collect();
    assert!(!after_bit.is_empty());
    for p in after_bit {
        assert_eq!(p.pressure, r.fcp);
    }
}

#[test]
fn series_uses_minimum_range_for_short_circulation() {
    let r = compute(KillSheetInput {
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 5.0,
        dp_id: 3.0,
        hole_diameter: 8.5,
        dp_od: 5.0,
        ..KillSheetInput::default()
    });
    assert!(r.total_strokes < 1_400.0);
    let series = pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP);
    assert_eq!(series.len(), 15);
    assert_eq!(series[14].strokes, 1_400.0);
}

#[test]
fn series_matches_schedule_profile() {
    let r = worked_example();
    let series = pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP);
    let per_stroke = (r.icp - r.fcp) / r.surface_to_bit_strokes;
    let at_500 = series[5];
    assert_eq!(at_500.strokes, 500.0);
    assert_close("500 strokes", at_500.pressure, r.icp - per_stroke * 500.0, 1e-9);
}

#[test]
fn zero_step_gives_empty_series() {
    assert!(pressure_series(&worked_example(), DEFAULT_SERIES_MIN_STROKES, 0).is_empty());
}

#[test]
fn non_finite_total_falls_back_to_minimum() {
    let mut r = worked_example();
    r.total_strokes = f64::INFINITY;
    let series = pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP);
    assert_eq!(series.len(), 15);
}

#[test]
fn zero_pump_capacity_gives_empty_schedule_and_series() {
    let r = compute(KillSheetInput {
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 0.0,
        dp_id: 3.0,
        hole_diameter: 8.5,
        dp_od: 5.0,
        ..KillSheetInput::default()
    });
    assert_eq!(r.surface_to_bit_strokes, 0.0);
    assert!(pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS).is_empty());
    assert!(pressure_series(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP).is_empty());
    assert_eq!(series_len(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP), 0);
}

#[test]
fn series_length_is_known_before_building() {
    let r = worked_example();
    assert_eq!(series_len(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP), 56);
    assert_eq!(series_len(&r, DEFAULT_SERIES_MIN_STROKES, 0), 0);
    let series = bounded_pressure_series(
        &r,
        DEFAULT_SERIES_MIN_STROKES,
        DEFAULT_SERIES_STEP,
        MAX_SERIES_POINTS,
    )
    .expect("within limit");
    assert_eq!(series.len(), 56);
}

#[test]
fn tiny_pump_capacity_series_is_refused() {
    let r = compute(KillSheetInput {
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 1e-9,
        dp_id: 3.0,
        hole_diameter: 8.5,
        dp_od: 5.0,
        ..KillSheetInput::default()
    });
    assert!(r.total_strokes > 1e11);
    // 표는 행 수가 고정이라 그대로 만든다
    assert_eq!(pressure_schedule(&r, DEFAULT_SCHEDULE_ROWS).len(), 11);
    assert!(series_len(&r, DEFAULT_SERIES_MIN_STROKES, DEFAULT_SERIES_STEP) > MAX_SERIES_POINTS);
    assert!(bounded_pressure_series(
        &r,
        DEFAULT_SERIES_MIN_STROKES,
        DEFAULT_SERIES_STEP,
        MAX_SERIES_POINTS,
    )
    .is_none());
}
