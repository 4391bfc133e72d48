use std::path::PathBuf;
use std::process::ExitCode;

use capital_appraisal_toolbox::{app, config, i18n};
use clap::Parser;

/// 리스안과 직영안을 NPV/IRR/회수기간/EAA 등으로 비교하는 투자안 평가 도구.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// 표시 언어 (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 가정값 설정 파일. 없으면 기본값으로 생성한다.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어팩(<code>.toml) 디렉터리
    #[arg(long, default_value = "locales")]
    locales: PathBuf,
    /// 메뉴 없이 전체 보고서를 한 번 출력하고 종료한다.
    #[arg(long)]
    report: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, &cli.locales);

    let result = if cli.report {
        app::print_report(&cfg, &tr)
    } else {
        app::run(&mut cfg, &cli.config, &tr)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
