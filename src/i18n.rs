use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_KILL_SHEET: &str = "main_menu.kill_sheet";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const KILL_SHEET_HEADING: &str = "kill_sheet.heading";
    pub const KILL_SHEET_NOTE_BLANK: &str = "kill_sheet.note_blank";
    pub const KILL_SHEET_PROMPT_HWDP: &str = "kill_sheet.prompt_hwdp";
    pub const KILL_SHEET_INVALID: &str = "kill_sheet.invalid";
    pub const KILL_SHEET_RESULTS: &str = "kill_sheet.results";
    pub const KILL_SHEET_SCHEDULE: &str = "kill_sheet.schedule";
    pub const KILL_SHEET_SERIES: &str = "kill_sheet.series";
    pub const KILL_SHEET_NO_SCHEDULE: &str = "kill_sheet.no_schedule";
    pub const KILL_SHEET_SERIES_TOO_LONG: &str = "kill_sheet.series_too_long";
    pub const COLUMN_STROKES: &str = "column.strokes";
    pub const COLUMN_PRESSURE: &str = "column.pressure";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_APP_TITLE: &str = "gui.app_title";
    pub const GUI_INPUTS: &str = "gui.inputs";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_SCHEDULE: &str = "gui.schedule";
    pub const GUI_CHART: &str = "gui.chart";
    pub const GUI_SETTINGS: &str = "gui.settings";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_UNIT_PRESET: &str = "gui.unit_preset";
    pub const GUI_SAVE: &str = "gui.save";
    pub const GUI_SAVED: &str = "gui.saved";
    pub const GUI_HWDP_PRESENT: &str = "gui.hwdp_present";
    pub const GUI_NO_DATA: &str = "gui.no_data";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 한국어 → 키 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        built_in.map(str::to_string).unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    match fs::read_to_string(&path) {
        Ok(content) => parse_toml_to_map(&content),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "language pack not loaded");
            None
        }
    }
}

/// 중첩 테이블을 `a.b.c` 형태의 평평한 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Well Control Toolbox ===",
        MAIN_MENU_KILL_SHEET => "1) 킬 시트 계산",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        KILL_SHEET_HEADING => "\n-- 킬 시트 --",
        KILL_SHEET_NOTE_BLANK => "참고: 비워두거나 음수를 입력하면 0으로 처리됩니다.",
        KILL_SHEET_PROMPT_HWDP => "HWDP 사용 여부 (y/N): ",
        KILL_SHEET_INVALID => {
            "홀 심도, 펌프 토출량, 머드 비중은 0보다 커야 합니다. 결과를 표시하지 않습니다."
        }
        KILL_SHEET_RESULTS => "\n[계산 결과]",
        KILL_SHEET_SCHEDULE => "\n[압력 스케줄]",
        KILL_SHEET_SERIES => "\n[차트 데이터]",
        KILL_SHEET_NO_SCHEDULE => "지표→비트 스트로크가 0이라 스케줄이 없습니다.",
        KILL_SHEET_SERIES_TOO_LONG => "스트로크 수가 너무 많아 차트 데이터를 생략합니다.",
        COLUMN_STROKES => "스트로크",
        COLUMN_PRESSURE => "압력",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 압력  2) 길이  3) 체적  4) 머드 비중",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: psi, ft, bbl, ppg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: bar, m, m3, sg): ",
        UNIT_CONVERSION_RESULT => "변환 결과: ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템: ",
        SETTINGS_OPTIONS => "1) 오일필드(in, ft, psi, bbl, ppg)  2) 미터법(mm, m, bar, m3, SG)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다: ",
        GUI_APP_TITLE => "Well Control Toolbox",
        GUI_INPUTS => "입력",
        GUI_RESULTS => "계산 결과",
        GUI_SCHEDULE => "압력 스케줄",
        GUI_CHART => "압력 vs 스트로크",
        GUI_SETTINGS => "설정",
        GUI_LANGUAGE => "언어",
        GUI_UNIT_PRESET => "단위 시스템",
        GUI_SAVE => "설정 저장",
        GUI_SAVED => "저장되었습니다.",
        GUI_HWDP_PRESENT => "HWDP 사용",
        GUI_NO_DATA => "표시할 데이터가 없습니다.",

        "section.well" => "웰",
        "section.kick" => "킥/압력",
        "section.pump" => "펌프",
        "section.casing" => "케이싱",
        "section.drill_collar" => "드릴 칼라",
        "section.drill_pipe" => "드릴 파이프",
        "section.hwdp" => "HWDP",

        "field.hole_diameter" => "홀 직경",
        "field.hole_depth" => "홀 심도(TVD)",
        "field.current_mud_weight" => "현재 머드 비중",
        "field.sidpp" => "SIDPP",
        "field.sicp" => "SICP",
        "field.pit_gain" => "핏 게인",
        "field.normal_circulating_pressure" => "정상 순환 압력",
        "field.user_stroke_pressure" => "저속 펌프 압력",
        "field.pump_capacity" => "펌프 토출량",
        "field.strokes_per_minute" => "펌프 속도",
        "field.casing_id" => "케이싱 내경",
        "field.casing_od" => "케이싱 외경",
        "field.casing_setting_depth" => "케이싱 설치 심도",
        "field.dc_od" => "DC 외경",
        "field.dc_id" => "DC 내경",
        "field.dc_length" => "DC 길이",
        "field.dp_od" => "DP 외경",
        "field.dp_id" => "DP 내경",
        "field.dp_nominal_weight" => "DP 공칭 중량",
        "field.hwdp_od" => "HWDP 외경",
        "field.hwdp_id" => "HWDP 내경",
        "field.hwdp_length" => "HWDP 길이",

        "result.kill_mud_weight" => "킬 머드 비중",
        "result.icp" => "초기 순환 압력(ICP)",
        "result.fcp" => "최종 순환 압력(FCP)",
        "result.drill_pipe_capacity" => "DP 내부 용량",
        "result.drill_collar_capacity" => "DC 내부 용량",
        "result.hwdp_internal_capacity" => "HWDP 내부 용량",
        "result.drill_string_capacity" => "드릴스트링 용량",
        "result.drill_string_volume" => "드릴스트링 체적",
        "result.surface_to_bit_strokes" => "지표→비트 스트로크",
        "result.open_hole_depth" => "오픈홀 길이",
        "result.open_hole_dp_length" => "오픈홀 DP 길이",
        "result.total_dp_length" => "DP 총 길이",
        "result.ann_open_dc" => "환형(오픈홀 x DC)",
        "result.ann_open_hwdp" => "환형(오픈홀 x HWDP)",
        "result.ann_open_dp" => "환형(오픈홀 x DP)",
        "result.ann_cased_dp" => "환형(케이싱 x DP)",
        "result.total_annular_capacity" => "환형 총 용량",
        "result.bit_to_surface_strokes" => "비트→지표 스트로크",
        "result.total_strokes" => "총 스트로크",
        "result.time_surface_to_bit" => "지표→비트 시간",
        "result.bit_to_surface_time" => "비트→지표 시간",
        "result.total_pumping_time" => "총 펌핑 시간",
        "result.pressure_drop_per_100_strokes" => "100 스트로크당 압력 강하",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Well Control Toolbox ===",
        MAIN_MENU_KILL_SHEET => "1) Kill sheet",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        KILL_SHEET_HEADING => "\n-- Kill Sheet --",
        KILL_SHEET_NOTE_BLANK => "Note: blank or negative entries are treated as 0.",
        KILL_SHEET_PROMPT_HWDP => "HWDP in string? (y/N): ",
        KILL_SHEET_INVALID => {
            "Hole depth, pump output and mud weight must be greater than 0. No results shown."
        }
        KILL_SHEET_RESULTS => "\n[Results]",
        KILL_SHEET_SCHEDULE => "\n[Pressure schedule]",
        KILL_SHEET_SERIES => "\n[Chart data]",
        KILL_SHEET_NO_SCHEDULE => "Surface-to-bit strokes are 0, no schedule.",
        KILL_SHEET_SERIES_TOO_LONG => "Too many strokes, chart data skipped.",
        COLUMN_STROKES => "Strokes",
        COLUMN_PRESSURE => "Pressure",
        UNIT_CONVERSION_HEADING => "\n-- Unit conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Pressure  2) Length  3) Volume  4) Mud weight",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: psi, ft, bbl, ppg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: bar, m, m3, sg): ",
        UNIT_CONVERSION_RESULT => "Result: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system: ",
        SETTINGS_OPTIONS => "1) Oilfield (in, ft, psi, bbl, ppg)  2) Metric (mm, m, bar, m3, SG)",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, unchanged.",
        SETTINGS_SAVED => "Unit system set to: ",
        GUI_APP_TITLE => "Well Control Toolbox",
        GUI_INPUTS => "Inputs",
        GUI_RESULTS => "Results",
        GUI_SCHEDULE => "Pressure schedule",
        GUI_CHART => "Pressure vs strokes",
        GUI_SETTINGS => "Settings",
        GUI_LANGUAGE => "Language",
        GUI_UNIT_PRESET => "Unit system",
        GUI_SAVE => "Save settings",
        GUI_SAVED => "Saved.",
        GUI_HWDP_PRESENT => "HWDP in string",
        GUI_NO_DATA => "Nothing to show.",

        "section.well" => "Well",
        "section.kick" => "Kick / pressures",
        "section.pump" => "Pump",
        "section.casing" => "Casing",
        "section.drill_collar" => "Drill collar",
        "section.drill_pipe" => "Drill pipe",
        "section.hwdp" => "HWDP",

        "field.hole_diameter" => "Hole diameter",
        "field.hole_depth" => "Hole depth (TVD)",
        "field.current_mud_weight" => "Current mud weight",
        "field.sidpp" => "SIDPP",
        "field.sicp" => "SICP",
        "field.pit_gain" => "Pit gain",
        "field.normal_circulating_pressure" => "Normal circulating pressure",
        "field.user_stroke_pressure" => "Slow pump pressure",
        "field.pump_capacity" => "Pump output",
        "field.strokes_per_minute" => "Pump rate",
        "field.casing_id" => "Casing ID",
        "field.casing_od" => "Casing OD",
        "field.casing_setting_depth" => "Casing shoe depth",
        "field.dc_od" => "DC OD",
        "field.dc_id" => "DC ID",
        "field.dc_length" => "DC length",
        "field.dp_od" => "DP OD",
        "field.dp_id" => "DP ID",
        "field.dp_nominal_weight" => "DP nominal weight",
        "field.hwdp_od" => "HWDP OD",
        "field.hwdp_id" => "HWDP ID",
        "field.hwdp_length" => "HWDP length",

        "result.kill_mud_weight" => "Kill mud weight",
        "result.icp" => "Initial circulating pressure",
        "result.fcp" => "Final circulating pressure",
        "result.drill_pipe_capacity" => "DP capacity",
        "result.drill_collar_capacity" => "DC capacity",
        "result.hwdp_internal_capacity" => "HWDP capacity",
        "result.drill_string_capacity" => "Drill string capacity",
        "result.drill_string_volume" => "Drill string volume",
        "result.surface_to_bit_strokes" => "Surface to bit strokes",
        "result.open_hole_depth" => "Open hole length",
        "result.open_hole_dp_length" => "DP length in open hole",
        "result.total_dp_length" => "Total DP length",
        "result.ann_open_dc" => "Annulus OH x DC",
        "result.ann_open_hwdp" => "Annulus OH x HWDP",
        "result.ann_open_dp" => "Annulus OH x DP",
        "result.ann_cased_dp" => "Annulus casing x DP",
        "result.total_annular_capacity" => "Total annular capacity",
        "result.bit_to_surface_strokes" => "Bit to surface strokes",
        "result.total_strokes" => "Total strokes",
        "result.time_surface_to_bit" => "Surface to bit time",
        "result.bit_to_surface_time" => "Bit to surface time",
        "result.total_pumping_time" => "Total pumping time",
        "result.pressure_drop_per_100_strokes" => "Pressure drop per 100 strokes",
        _ => return None,
    };
    Some(s)
}
