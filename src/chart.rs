//! 압력-스트로크 차트 모델.
//!
//! GUI가 소유하는 차트 자원이다. 최신 시리즈를 받아 점 목록을 교체하며,
//! 유한하지 않은 점은 받는 즉시 버린다. 축과 눈금은 그리는 쪽(`egui_plot`)이 정한다.

use crate::kill_sheet::PressurePoint;

#[derive(Debug, Clone, Default)]
pub struct ChartModel {
    points: Vec<PressurePoint>,
}

impl ChartModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 시리즈로 교체한다.
    pub fn update(&mut self, series: &[PressurePoint]) {
        self.points = series
            .iter()
            .copied()
            .filter(|p| p.strokes.is_finite() && p.pressure.is_finite())
            .collect();
    }

    /// 표시할 점이 없으면 비운다.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PressurePoint] {
        &self.points
    }

    /// `[strokes, pressure]` 쌍으로 내보낸다.
    pub fn xy(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().map(|p| [p.strokes, p.pressure])
    }
}
