use std::path::Path;

use thiserror::Error;

use crate::appraisal::AppraisalError;
use crate::config::{Config, ConfigError};
use crate::evaluation::{self, EvaluationError};
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("지표 계산 오류: {0}")]
    Appraisal(#[from] AppraisalError),
    #[error("평가 오류: {0}")]
    Evaluation(#[from] EvaluationError),
    /// 값 입력 중 표준입력이 닫힌 경우
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 모든 화면을 한 번씩 출력한다(`--report`).
pub fn print_report(config: &Config, tr: &Translator) -> Result<(), AppError> {
    let eval = evaluation::evaluate(&config.analysis_inputs())?;
    ui_cli::show_cash_flow(tr, &eval);
    ui_cli::show_analysis(tr, &eval)?;
    ui_cli::show_evaluation(tr, &eval, config)?;
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::CashFlow => {
                let eval = evaluation::evaluate(&config.analysis_inputs())?;
                ui_cli::show_cash_flow(tr, &eval);
            }
            MenuChoice::Analysis => {
                let eval = evaluation::evaluate(&config.analysis_inputs())?;
                ui_cli::show_analysis(tr, &eval)?;
            }
            MenuChoice::Evaluation => {
                let eval = evaluation::evaluate(&config.analysis_inputs())?;
                ui_cli::show_evaluation(tr, &eval, config)?;
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save(config_path)?;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
