use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::display;
use crate::form::{FieldId, InputForm, Section};
use crate::i18n::{keys, Translator};
use crate::kill_sheet::{self, KillSheetInput};
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    KillSheet,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_KILL_SHEET));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::KillSheet),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 킬 시트 메뉴를 처리한다. 필드를 구역 순서대로 묻고 결과를 출력한다.
pub fn handle_kill_sheet(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::KILL_SHEET_HEADING));
    println!("{}", tr.t(keys::KILL_SHEET_NOTE_BLANK));
    let units = cfg.default_units;
    let mut form = InputForm::new();
    for section in Section::ALL {
        if section == Section::Hwdp {
            let ans = read_line(&tr.t(keys::KILL_SHEET_PROMPT_HWDP))?;
            form.hwdp_present = matches!(ans.trim().to_lowercase().as_str(), "y" | "yes");
            if !form.hwdp_present {
                continue;
            }
        }
        println!("[{}]", tr.t(section.label_key()));
        for field in FieldId::ALL.iter().filter(|f| f.section() == section) {
            let prompt = format!(
                "  {} [{}]: ",
                tr.t(&field.label_key()),
                field.dimension().unit_symbol(&units)
            );
            let text = read_line(&prompt)?;
            form.set_text(*field, text.trim());
        }
    }
    let input = form.to_input(&units);
    print!("{}", render_kill_sheet(tr, cfg, &input));
    Ok(())
}

/// 킬 시트 결과, 압력 스케줄, 차트 데이터를 하나의 보고서 문자열로 만든다.
///
/// 전제 조건을 만족하지 못하면 계산하지 않고 모든 결과를 자리표시자로 채운다.
pub fn render_kill_sheet(tr: &Translator, cfg: &Config, input: &KillSheetInput) -> String {
    let units = cfg.default_units;
    let mut out = String::new();
    let result = match kill_sheet::compute_checked(*input) {
        Ok(result) => Some(result),
        Err(_) => {
            let _ = writeln!(out, "{}", tr.t(keys::KILL_SHEET_INVALID));
            None
        }
    };

    let _ = writeln!(out, "{}", tr.t(keys::KILL_SHEET_RESULTS));
    let rows = match &result {
        Some(r) => display::result_rows(r, &units),
        None => display::cleared_rows(&units),
    };
    for row in &rows {
        let _ = writeln!(
            out,
            "  {:<32} {:>14} {}",
            tr.t(row.label_key),
            row.formatted(),
            row.unit
        );
    }

    let Some(result) = result else {
        return out;
    };

    let pressure_unit = units.pressure.symbol();
    let header = format!(
        "  {:>10}  {:>12}",
        tr.t(keys::COLUMN_STROKES),
        format!("{} ({pressure_unit})", tr.t(keys::COLUMN_PRESSURE))
    );

    let _ = writeln!(out, "{}", tr.t(keys::KILL_SHEET_SCHEDULE));
    let schedule = kill_sheet::pressure_schedule(&result, cfg.schedule_rows);
    if schedule.is_empty() {
        let _ = writeln!(out, "  {}", tr.t(keys::KILL_SHEET_NO_SCHEDULE));
        return out;
    }
    let _ = writeln!(out, "{header}");
    for row in display::schedule_rows(&schedule, &units) {
        let _ = writeln!(out, "  {:>10}  {:>12}", row.strokes, row.pressure);
    }

    let _ = writeln!(out, "{}", tr.t(keys::KILL_SHEET_SERIES));
    let Some(series) = kill_sheet::bounded_pressure_series(
        &result,
        cfg.series_min_strokes,
        cfg.series_step,
        kill_sheet::MAX_SERIES_POINTS,
    ) else {
        let _ = writeln!(out, "  {}", tr.t(keys::KILL_SHEET_SERIES_TOO_LONG));
        return out;
    };
    let _ = writeln!(out, "{header}");
    for row in display::schedule_rows(&series, &units) {
        let _ = writeln!(out, "  {:>10}  {:>12}", row.strokes, row.pressure);
    }
    out
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuantityKind::ALL.get(i).copied())
        {
            break kind;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{}{result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}{:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let system = match sel.trim() {
        "1" => UnitSystem::Oilfield,
        "2" => UnitSystem::Metric,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_preset(system);
    println!("{}{:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
