use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::form;
use crate::i18n::{self, Translator};
use crate::kill_sheet::KillSheetInput;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 케이스 파일(TOML) 파싱 오류
    #[error("입력 파일 오류: {0}")]
    CaseFile(#[from] toml::de::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::KillSheet => ui_cli::handle_kill_sheet(tr, config)?,
            MenuChoice::UnitConversion => {
                // 잘못된 단위 문자열은 메뉴로 돌아가 다시 입력받는다
                if let Err(err) = ui_cli::handle_unit_conversion(tr) {
                    match err {
                        AppError::Conversion(e) => {
                            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX))
                        }
                        other => return Err(other),
                    }
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// TOML 케이스 파일(오일필드 단위)을 읽는다. 빠진 값, 음수, NaN은 폼 입력과 같이 0이 된다.
pub fn load_case(path: &Path) -> Result<KillSheetInput, AppError> {
    let content = fs::read_to_string(path)?;
    let raw: KillSheetInput = toml::from_str(&content)?;
    let input = form::normalize_input(raw);
    if input != raw {
        tracing::warn!(path = %path.display(), "negative or non-finite case values replaced with 0");
    }
    tracing::info!(path = %path.display(), "loaded kill sheet case");
    Ok(input)
}

/// TOML 케이스 파일을 읽어 한 번 계산하고 출력한다.
pub fn run_case_file(path: &Path, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let input = load_case(path)?;
    print!("{}", ui_cli::render_kill_sheet(tr, config, &input));
    Ok(())
}
