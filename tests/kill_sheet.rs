//! 킬 시트 계산 회귀 테스트. 손계산 예제 값과 합계 불변식을 확인한다.
use well_control_toolbox::kill_sheet::{
    check_preconditions, compute, compute_checked, compute_or_invalid, KillSheetError,
    KillSheetInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 케이싱 없이 DP만 있는 단순 웰.
fn worked_example() -> KillSheetInput {
    KillSheetInput {
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 0.1,
        dp_id: 3.0,
        dc_length: 0.0,
        dc_id: 0.0,
        hwdp_present: false,
        hole_diameter: 8.5,
        dp_od: 5.0,
        casing_id: 8.5,
        casing_setting_depth: 0.0,
        ..KillSheetInput::default()
    }
}

/// 케이싱, DC, HWDP가 모두 있는 웰.
fn cased_well_with_hwdp() -> KillSheetInput {
    KillSheetInput {
        hole_diameter: 8.5,
        hole_depth: 10_000.0,
        current_mud_weight: 10.0,
        sidpp: 500.0,
        sicp: 700.0,
        pit_gain: 20.0,
        normal_circulating_pressure: 2_500.0,
        user_stroke_pressure: 800.0,
        pump_capacity: 0.1,
        strokes_per_minute: 30.0,
        casing_id: 8.681,
        casing_od: 9.625,
        casing_setting_depth: 6_000.0,
        dc_od: 6.5,
        dc_id: 2.8125,
        dc_length: 600.0,
        dp_od: 5.0,
        dp_id: 4.276,
        dp_nominal_weight: 19.5,
        hwdp_present: true,
        hwdp_od: 5.0,
        hwdp_id: 3.0,
        hwdp_length: 300.0,
    }
}

#[test]
fn worked_example_pressures() {
    let r = compute(worked_example());
    assert_eq!(format!("{:.2}", r.kill_mud_weight), "10.96");
    assert_eq!(format!("{:.2}", r.icp), "1300.00");
    assert_eq!(format!("{:.2}", r.fcp), "876.92");
    assert_close("kmw", r.kill_mud_weight, 10.961_538_461_538, 1e-9);
    assert_close("fcp", r.fcp, 876.923_076_923_077, 1e-9);
}

#[test]
fn worked_example_volumes_and_strokes() {
    let r = compute(worked_example());
    assert_close("dp cap", r.drill_pipe_capacity, 87.527_243_357_704, 1e-9);
    assert_eq!(r.drill_collar_capacity, 0.0);
    assert_eq!(r.hwdp_internal_capacity, 0.0);
    assert_close("s2b", r.surface_to_bit_strokes, 875.272_433_577_04, 1e-9);
    assert_close("ann oh dp", r.ann_open_dp, 459.518_027_627_946, 1e-9);
    assert_eq!(r.ann_cased_dp, 0.0);
    assert_close("b2s", r.bit_to_surface_strokes, 4_595.180_276_279_46, 1e-9);
    assert_close("drop/100", r.pressure_drop_per_100_strokes, 48.336_598_623, 1e-9);
    // spm 미입력은 정상 상태이며 시간은 0이다
    assert_eq!(r.time_surface_to_bit, 0.0);
    assert_eq!(r.bit_to_surface_time, 0.0);
    assert_eq!(r.total_pumping_time, 0.0);
}

#[test]
fn cased_well_section_lengths() {
    let r = compute(cased_well_with_hwdp());
    assert_eq!(r.open_hole_depth, 4_000.0);
    assert_eq!(r.open_hole_dp_length, 3_100.0);
    assert_eq!(r.total_dp_length, 9_400.0);
}

#[test]
fn cased_well_capacities() {
    let r = compute(cased_well_with_hwdp());
    assert_close("dp", r.drill_pipe_capacity, 177.818_169_149_677, 1e-9);
    assert_close("dc", r.drill_collar_capacity, 4.615_694_473_941, 1e-9);
    assert_close("hwdp", r.hwdp_internal_capacity, 2.625_817_300_731, 1e-9);
    assert_close("string", r.drill_string_capacity, 185.059_680_924_349, 1e-9);
    assert_close("oh dc", r.ann_open_dc, 17.505_448_671_541, 1e-9);
    assert_close("oh hwdp", r.ann_open_hwdp, 13.785_540_828_838, 1e-9);
    assert_close("oh dp", r.ann_open_dp, 142.450_588_563_317, 1e-9);
    assert_close("cased dp", r.ann_cased_dp, 293.856_737_098_854, 1e-9);
    assert_close("annulus", r.total_annular_capacity, 467.598_315_163_897, 1e-9);
    assert_close("t s2b", r.time_surface_to_bit, 185.059_680_924_349 / 3.0, 1e-9);
    assert_close("t b2s", r.bit_to_surface_time, 467.598_315_163_897 / 3.0, 1e-9);
}

#[test]
fn sum_invariants_hold() {
    let mut shallow_casing = cased_well_with_hwdp();
    shallow_casing.casing_setting_depth = 1_500.0;
    let mut no_hwdp = cased_well_with_hwdp();
    no_hwdp.hwdp_present = false;
    for input in [worked_example(), cased_well_with_hwdp(), shallow_casing, no_hwdp] {
        let r = compute(input);
        assert_close(
            "string capacity",
            r.drill_string_capacity,
            r.drill_pipe_capacity + r.drill_collar_capacity + r.hwdp_internal_capacity,
            1e-9,
        );
        assert_eq!(r.drill_string_volume, r.drill_string_capacity);
        assert_close(
            "strokes",
            r.total_strokes,
            r.surface_to_bit_strokes + r.bit_to_surface_strokes,
            1e-9,
        );
        assert_close(
            "time",
            r.total_pumping_time,
            r.time_surface_to_bit + r.bit_to_surface_time,
            1e-9,
        );
        assert_close(
            "annulus",
            r.total_annular_capacity,
            r.ann_open_dc + r.ann_open_hwdp + r.ann_open_dp + r.ann_cased_dp,
            1e-9,
        );
    }
}

#[test]
fn open_hole_lengths_never_negative() {
    // 케이싱이 홀보다 깊은 경우
    let mut deep_casing = cased_well_with_hwdp();
    deep_casing.casing_setting_depth = 12_000.0;
    let r = compute(deep_casing);
    assert_eq!(r.open_hole_depth, 0.0);
    assert_eq!(r.open_hole_dp_length, 0.0);
    // 케이싱 구간 길이는 홀 심도로 제한된다
    let expected_cased =
        well_control_toolbox::kill_sheet::annular_capacity_bbl(10_000.0, 8.681, 5.0);
    assert_close("cased", r.ann_cased_dp, expected_cased, 1e-12);

    // BHA가 오픈홀보다 긴 경우
    let mut long_bha = cased_well_with_hwdp();
    long_bha.dc_length = 5_000.0;
    let r = compute(long_bha);
    assert_eq!(r.open_hole_depth, 4_000.0);
    assert_eq!(r.open_hole_dp_length, 0.0);
    assert_eq!(r.total_dp_length, 6_300.0);
}

#[test]
fn absent_hwdp_contributes_nothing() {
    let mut with_values = cased_well_with_hwdp();
    with_values.hwdp_present = false;
    let mut zeroed = with_values;
    zeroed.hwdp_od = 0.0;
    zeroed.hwdp_id = 0.0;
    zeroed.hwdp_length = 0.0;

    let a = compute(with_values);
    let b = compute(zeroed);
    assert_eq!(a.hwdp_internal_capacity, 0.0);
    assert_eq!(a.ann_open_hwdp, 0.0);
    assert_eq!(a, b);
    // HWDP 길이는 오픈홀 DP 길이에서도 빠지지 않는다
    assert_eq!(a.open_hole_dp_length, 3_400.0);
    assert_eq!(a.total_dp_length, 9_400.0);
}

#[test]
fn unused_fields_do_not_change_results() {
    let base = cased_well_with_hwdp();
    let mut altered = base;
    altered.sicp = 9_999.0;
    altered.pit_gain = 123.0;
    altered.normal_circulating_pressure = 1.0;
    altered.casing_od = 20.0;
    altered.dp_nominal_weight = 50.0;
    assert_eq!(compute(base), compute(altered));
}

#[test]
fn compute_is_idempotent() {
    let input = cased_well_with_hwdp();
    let first = compute(input);
    let second = compute(input);
    assert_eq!(first, second);
    for (a, b) in first.values().iter().zip(second.values().iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn zero_pump_capacity_yields_zero_strokes() {
    let mut input = worked_example();
    input.pump_capacity = 0.0;
    input.strokes_per_minute = 30.0;
    let r = compute(input);
    assert_eq!(r.surface_to_bit_strokes, 0.0);
    assert_eq!(r.bit_to_surface_strokes, 0.0);
    assert_eq!(r.total_strokes, 0.0);
    assert_eq!(r.pressure_drop_per_100_strokes, 0.0);
    assert_eq!(r.time_surface_to_bit, 0.0);
    assert_eq!(r.bit_to_surface_time, 0.0);
    // 체적은 펌프와 무관하게 계산된다
    assert!(r.drill_string_volume > 0.0);
}

#[test]
fn fcp_above_icp_gives_negative_drop() {
    let input = KillSheetInput {
        hole_depth: 1_000.0,
        current_mud_weight: 10.0,
        sidpp: 100.0,
        user_stroke_pressure: 1_000.0,
        pump_capacity: 0.1,
        dp_id: 3.0,
        ..KillSheetInput::default()
    };
    let r = compute(input);
    assert!(r.fcp > r.icp, "fcp {} icp {}", r.fcp, r.icp);
    assert!(r.pressure_drop_per_100_strokes < 0.0);
}

#[test]
fn preconditions_gate_computation() {
    assert!(check_preconditions(&worked_example()).is_ok());

    let mut no_depth = worked_example();
    no_depth.hole_depth = 0.0;
    assert_eq!(
        compute_checked(no_depth),
        Err(KillSheetError::NonPositive { field: "hole_depth" })
    );

    let mut no_pump = worked_example();
    no_pump.pump_capacity = 0.0;
    assert_eq!(
        check_preconditions(&no_pump),
        Err(KillSheetError::NonPositive {
            field: "pump_capacity"
        })
    );

    let mut no_mud = worked_example();
    no_mud.current_mud_weight = 0.0;
    assert!(compute_checked(no_mud).is_err());
    assert!(!compute_or_invalid(no_mud).is_finite());
    assert!(compute_or_invalid(worked_example()).is_finite());
}

#[test]
fn degenerate_inputs_do_not_panic() {
    // 전제 조건을 무시하고 직접 호출해도 패닉 없이 값을 돌려준다
    let r = compute(KillSheetInput::default());
    assert!(!r.kill_mud_weight.is_finite());
    assert_eq!(r.fcp, 0.0);
    assert_eq!(r.surface_to_bit_strokes, 0.0);
    assert_eq!(r.total_pumping_time, 0.0);
}
