use std::f64::consts::PI;

/// in²·ft 를 bbl 로 환산하는 계수 (1 bbl = 9691.04 in³, 1 ft = 12 in).
pub const BBL_PER_IN2_FT: f64 = 12.0 / 9691.04;

/// 원형 단면적(in²).
fn circle_area_in2(diameter_in: f64) -> f64 {
    PI * diameter_in * diameter_in / 4.0
}

/// 길이 `length_ft`, 내경 `id_in`인 관 내부 용량(bbl).
pub fn internal_capacity_bbl(length_ft: f64, id_in: f64) -> f64 {
    length_ft * circle_area_in2(id_in) * BBL_PER_IN2_FT
}

/// 보어 직경 `bore_in`과 관 외경 `od_in` 사이 환형 공간의 용량(bbl).
///
/// 외경이 보어보다 크면 음수가 나올 수 있으며, 입력 검증은 호출자 몫이다.
pub fn annular_capacity_bbl(length_ft: f64, bore_in: f64, od_in: f64) -> f64 {
    let area_in2 = PI * (bore_in * bore_in - od_in * od_in) / 4.0;
    length_ft * area_in2 * BBL_PER_IN2_FT
}
