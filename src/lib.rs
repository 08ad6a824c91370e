//! 킬 시트 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 코어를 쓰도록 한다.

pub mod app;
pub mod chart;
pub mod config;
pub mod conversion;
pub mod debounce;
pub mod display;
pub mod form;
pub mod i18n;
pub mod kill_sheet;
pub mod quantity;
pub mod ui_cli;
pub mod units;
