#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Line, Plot, PlotPoints};
use image::GenericImageView;
use std::{env, fs, path::Path, time::Instant};
use well_control_toolbox::{
    chart::ChartModel,
    config::{self, DefaultUnits, UnitSystem},
    debounce::Debouncer,
    display::{self, ResultRow, ScheduleRow},
    form::{Dimension, FieldId, InputForm, Section},
    i18n::{self, keys},
    kill_sheet::{self, KillSheetInput, PressurePoint},
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!(%err, "config not loaded, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = lang_cli;
    }
    eframe::run_native(
        "Well Control Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 프로젝트/시스템 폰트를 찾아 적용한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ] {
        candidates.push(p.into());
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found, falling back to default font.".into())
}

/// 처음 띄울 때 채워 두는 예제 웰.
fn sample_input() -> KillSheetInput {
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

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    save_status: Option<String>,
    show_settings: bool,
    form: InputForm,
    debouncer: Debouncer,
    valid: bool,
    result_rows: Vec<ResultRow>,
    schedule: Vec<ScheduleRow>,
    // 차트 자원은 앱이 소유하고 재계산마다 갱신한다
    chart: ChartModel,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let form = InputForm::from_input(&sample_input(), &config.default_units);
        let mut app = Self {
            lang_input: config.language.clone(),
            debouncer: Debouncer::from_millis(config.debounce_ms),
            config,
            tr,
            save_status: None,
            show_settings: false,
            form,
            valid: false,
            result_rows: Vec::new(),
            schedule: Vec::new(),
            chart: ChartModel::new(),
        };
        app.recompute();
        app
    }

    fn units(&self) -> DefaultUnits {
        self.config.default_units
    }

    /// 폼 스냅샷으로 전체를 다시 계산한다. 전제 조건을 만족하지 못하면 표시를 비운다.
    fn recompute(&mut self) {
        let units = self.units();
        let input = self.form.to_input(&units);
        match kill_sheet::compute_checked(input) {
            Ok(result) => {
                self.valid = true;
                self.result_rows = display::result_rows(&result, &units);
                let schedule = kill_sheet::pressure_schedule(&result, self.config.schedule_rows);
                self.schedule = display::schedule_rows(&schedule, &units);
                match kill_sheet::bounded_pressure_series(
                    &result,
                    self.config.series_min_strokes,
                    self.config.series_step,
                    kill_sheet::MAX_SERIES_POINTS,
                ) {
                    Some(series) => {
                        let shown: Vec<PressurePoint> = series
                            .into_iter()
                            .map(|p| PressurePoint {
                                strokes: p.strokes,
                                pressure: Dimension::Pressure.from_oilfield(p.pressure, &units),
                            })
                            .collect();
                        self.chart.update(&shown);
                    }
                    None => self.chart.clear(),
                }
            }
            Err(_) => {
                self.valid = false;
                self.result_rows = display::cleared_rows(&units);
                self.schedule.clear();
                self.chart.clear();
            }
        }
    }

    /// 단위 프리셋을 바꾸면서 입력값은 같은 물리량을 유지하도록 환산한다.
    fn apply_unit_preset(&mut self, system: UnitSystem) {
        let input = self.form.to_input(&self.units());
        self.config.apply_preset(system);
        self.form = InputForm::from_input(&input, &self.units());
        self.recompute();
    }

    /// 입력 폼을 그린다. 하나라도 바뀌면 `true`.
    fn ui_form(&mut self, ui: &mut egui::Ui) -> bool {
        let units = self.units();
        let mut changed = false;
        for section in Section::ALL {
            egui::CollapsingHeader::new(self.tr.t(section.label_key()))
                .default_open(true)
                .show(ui, |ui| {
                    if section == Section::Hwdp {
                        changed |= ui
                            .checkbox(&mut self.form.hwdp_present, self.tr.t(keys::GUI_HWDP_PRESENT))
                            .changed();
                    }
                    egui::Grid::new(section.label_key())
                        .num_columns(3)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            for field in FieldId::ALL.iter().filter(|f| f.section() == section) {
                                ui.label(self.tr.t(&field.label_key()));
                                let enabled = section != Section::Hwdp || self.form.hwdp_present;
                                let edit = egui::TextEdit::singleline(self.form.text_mut(*field))
                                    .desired_width(90.0);
                                changed |= ui.add_enabled(enabled, edit).changed();
                                ui.label(field.dimension().unit_symbol(&units));
                                ui.end_row();
                            }
                        });
                });
        }
        changed
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        if !self.valid {
            ui.colored_label(ui.visuals().warn_fg_color, self.tr.t(keys::KILL_SHEET_INVALID));
        }
        egui::Grid::new("results")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for row in &self.result_rows {
                    ui.label(self.tr.t(row.label_key));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(row.formatted());
                    });
                    ui.label(row.unit.as_str());
                    ui.end_row();
                }
            });
    }

    fn ui_schedule(&self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_SCHEDULE));
        if self.schedule.is_empty() {
            ui.label(display::PLACEHOLDER);
            return;
        }
        egui::Grid::new("schedule")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 2.0])
            .show(ui, |ui| {
                ui.strong(self.tr.t(keys::COLUMN_STROKES));
                ui.strong(format!(
                    "{} ({})",
                    self.tr.t(keys::COLUMN_PRESSURE),
                    self.units().pressure.symbol()
                ));
                ui.end_row();
                for row in &self.schedule {
                    ui.monospace(row.strokes.as_str());
                    ui.monospace(row.pressure.as_str());
                    ui.end_row();
                }
            });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let mut preset = self.config.unit_system;
        egui::Window::new(self.tr.t(keys::GUI_SETTINGS))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.tr.t(keys::GUI_UNIT_PRESET));
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut preset, UnitSystem::Oilfield, "Oilfield");
                    ui.selectable_value(&mut preset, UnitSystem::Metric, "Metric");
                });
                ui.separator();
                ui.label(self.tr.t(keys::GUI_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                    });
                if ui.button(self.tr.t(keys::GUI_SAVE)).clicked() {
                    self.config.language = self.lang_input.clone();
                    let resolved = i18n::resolve_language(&self.config.language, None);
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.save_status = Some(match self.config.save() {
                        Ok(()) => self.tr.t(keys::GUI_SAVED),
                        Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                    });
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg.as_str());
                }
            });
        self.show_settings = open;
        if preset != self.config.unit_system {
            self.apply_unit_preset(preset);
        }
    }
}

/// 차트 모델을 그린다. 모델은 호출자가 소유하며 여기서는 읽기만 한다.
fn render_chart(
    ui: &mut egui::Ui,
    chart: &ChartModel,
    tr: &i18n::Translator,
    pressure_unit: &str,
) {
    if chart.is_empty() {
        ui.label(tr.t(keys::GUI_NO_DATA));
        return;
    }
    let y_label = format!("{} ({pressure_unit})", tr.t(keys::COLUMN_PRESSURE));
    Plot::new("pressure_chart")
        .height(280.0)
        .x_axis_label(tr.t(keys::COLUMN_STROKES))
        .y_axis_label(y_label)
        .include_x(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let points: PlotPoints = chart.xy().collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(220, 80, 60))
                    .width(2.0),
            );
        });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS)).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        let mut changed = false;
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading(self.tr.t(keys::GUI_INPUTS));
                egui::ScrollArea::vertical().show(ui, |ui| {
                    changed = self.ui_form(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.columns(2, |cols| {
                        self.ui_results(&mut cols[0]);
                        self.ui_schedule(&mut cols[1]);
                    });
                    ui.separator();
                    ui.heading(self.tr.t(keys::GUI_CHART));
                    let unit = self.units().pressure.symbol();
                    render_chart(ui, &self.chart, &self.tr, unit);
                });
        });

        let now = Instant::now();
        if changed {
            self.debouncer.touch(now);
        }
        if self.debouncer.poll(now) {
            self.recompute();
        } else if let Some(wait) = self.debouncer.remaining(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_well_produces_results_and_chart() {
        let app = GuiApp::new(config::Config::default());
        assert!(app.valid);
        assert_eq!(app.schedule.len(), 11);
        assert!(!app.chart.is_empty());
        assert!(app
            .result_rows
            .iter()
            .all(|row| row.formatted() != display::PLACEHOLDER));
    }

    #[test]
    fn clearing_depth_clears_display() {
        let mut app = GuiApp::new(config::Config::default());
        app.form.set_text(FieldId::HoleDepth, "");
        app.recompute();
        assert!(!app.valid);
        assert!(app.schedule.is_empty());
        assert!(app.chart.is_empty());
        assert!(app
            .result_rows
            .iter()
            .all(|row| row.formatted() == display::PLACEHOLDER));
    }

    #[test]
    fn tiny_pump_capacity_keeps_results_but_skips_chart() {
        let mut app = GuiApp::new(config::Config::default());
        app.form.set_text(FieldId::PumpCapacity, "0.000000001");
        app.recompute();
        assert!(app.valid);
        assert_eq!(app.schedule.len(), 11);
        assert!(app.chart.is_empty());
    }

    #[test]
    fn metric_preset_keeps_physical_inputs() {
        let mut app = GuiApp::new(config::Config::default());
        let before = app.form.to_input(&app.units());
        app.apply_unit_preset(UnitSystem::Metric);
        assert_eq!(app.units().depth.symbol(), "m");
        let after = app.form.to_input(&app.units());
        assert!((after.hole_depth - before.hole_depth).abs() < 1e-3);
        assert!((after.current_mud_weight - before.current_mud_weight).abs() < 1e-4);
        assert!(app.valid);
    }
}
