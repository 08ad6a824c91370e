/// 단위 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Length,
    Volume,
    Density,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Density,
    ];
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// `value_base`는 오일필드 기준 단위(압력=psi, 길이=ft, 체적=bbl, 비중=ppg)로 저장한다.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}
