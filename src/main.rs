use std::path::PathBuf;

use clap::Parser;
use well_control_toolbox::{app, config, i18n};

/// 킬 시트 CLI. `--input` 이 없으면 대화형 메뉴를 실행한다.
#[derive(Parser, Debug)]
#[command(name = "well_control_toolbox_cli")]
#[command(about = "Well control kill sheet calculator")]
#[command(version)]
struct CliArgs {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 오일필드 단위로 작성된 TOML 입력 케이스. 지정하면 한 번 계산하고 종료한다.
    #[arg(short, long, value_name = "CASE.toml")]
    input: Option<PathBuf>,

    /// 압력 스케줄 행 수 (설정값 대신 사용)
    #[arg(long, requires = "input")]
    rows: Option<u32>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    if let Err(err) = try_run(args) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: CliArgs) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    match args.input {
        Some(path) => {
            if let Some(rows) = args.rows {
                cfg.schedule_rows = rows;
            }
            app::run_case_file(&path, &cfg, &tr)
        }
        None => app::run(&mut cfg, &tr),
    }
}
