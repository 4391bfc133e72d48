use std::io::{self, Write};

use crate::app::AppError;
use crate::appraisal::{cumulative_cash_flows, discounted_cash_flows};
use crate::config::Config;
use crate::evaluation::{investment_sensitivity, Evaluation, ProjectReport};
use crate::i18n::{keys, Translator};
use crate::scenario::{CashFlowSchedule, Variant};

const SENSITIVITY_STEPS: usize = 5;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CashFlow,
    Analysis,
    Evaluation,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CASH_FLOW));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_EVALUATION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        // 입력 스트림이 닫히면 종료
        if sel.is_empty() {
            return Ok(MenuChoice::Exit);
        }
        match sel.trim() {
            "1" => return Ok(MenuChoice::CashFlow),
            "2" => return Ok(MenuChoice::Analysis),
            "3" => return Ok(MenuChoice::Evaluation),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 두 투자안의 현금흐름표를 출력한다.
pub fn show_cash_flow(tr: &Translator, eval: &Evaluation) {
    println!("{}", tr.t(keys::CASH_FLOW_HEADING));
    for variant in Variant::ALL {
        print_schedule(tr, &eval.project(variant).schedule);
    }
}

fn print_schedule(tr: &Translator, schedule: &CashFlowSchedule) {
    println!("\n[{}]", schedule.variant.display_name());
    print!("{:<26}", tr.t(keys::CASH_FLOW_CATEGORY));
    for row in &schedule.years {
        print!("{:>16}", format!("{} {}", tr.t(keys::CASH_FLOW_YEAR), row.year));
    }
    println!();

    print!("{:<26}", tr.t(keys::CASH_FLOW_INVESTMENT));
    for row in &schedule.years {
        let outlay = if row.year == 0 {
            row.operating_cash_flow
        } else {
            0.0
        };
        print!("{outlay:>16.2}");
    }
    println!();

    for item in schedule.variant.line_items() {
        print!("{:<26}", tr.t(item.label_key()));
        for value in schedule.row(*item) {
            print!("{value:>16.2}");
        }
        println!();
    }
}

/// NPV, IRR, 회수기간과 연도별 현재가치/누적 현금흐름을 출력한다.
pub fn show_analysis(tr: &Translator, eval: &Evaluation) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYSIS_HEADING));
    println!(
        "{}: {:.3}%  ({}: {:.3}%)",
        tr.t(keys::ANALYSIS_DISCOUNT_RATE),
        eval.discount_rate * 100.0,
        tr.t(keys::ANALYSIS_WACC),
        eval.wacc * 100.0
    );
    for variant in Variant::ALL {
        let report = eval.project(variant);
        println!("\n[{}]", variant.display_name());
        println!("{}: {:.2}", tr.t(keys::ANALYSIS_NPV), report.appraisal.npv);
        match report.appraisal.irr {
            Some(irr) => println!("{}: {:.2}%", tr.t(keys::ANALYSIS_IRR), irr * 100.0),
            None => println!(
                "{}: {}",
                tr.t(keys::ANALYSIS_IRR),
                tr.t(keys::ANALYSIS_IRR_UNAVAILABLE)
            ),
        }
        match report.appraisal.payback_period {
            Some(year) => println!("{}: {year}", tr.t(keys::ANALYSIS_PAYBACK)),
            None => println!(
                "{}: {}",
                tr.t(keys::ANALYSIS_PAYBACK),
                tr.t(keys::ANALYSIS_PAYBACK_NONE)
            ),
        }
        let discounted = discounted_cash_flows(&report.cash_flows, eval.discount_rate)?;
        print_series(tr.t(keys::ANALYSIS_DISCOUNTED), &discounted);
        print_series(
            tr.t(keys::ANALYSIS_CUMULATIVE),
            &cumulative_cash_flows(&report.cash_flows),
        );
    }
    Ok(())
}

/// ROI, PI, EAA, 공통기간 비교, 민감도 분석과 추천안을 출력한다.
pub fn show_evaluation(tr: &Translator, eval: &Evaluation, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EVALUATION_HEADING));
    for variant in Variant::ALL {
        let report = eval.project(variant);
        println!("\n[{}]", variant.display_name());
        print_series(tr.t(keys::EVALUATION_ROI), &report.appraisal.roi_per_year);
        print_metrics(tr, report);
        println!(
            "{} ({}x): {:.2}",
            tr.t(keys::EVALUATION_EXTENDED_NPV),
            eval.extended(variant).repetitions,
            eval.extended(variant).npv
        );

        println!(
            "{} ({}):",
            tr.t(keys::EVALUATION_SENSITIVITY),
            tr.t(keys::EVALUATION_SENSITIVITY_COLUMNS)
        );
        let points = investment_sensitivity(
            variant,
            cfg.assumptions.tax_rate,
            eval.discount_rate,
            SENSITIVITY_STEPS,
        )?;
        for p in points {
            let irr = p
                .irr
                .map(|r| format!("{:.2}%", r * 100.0))
                .unwrap_or_else(|| tr.t(keys::ANALYSIS_IRR_UNAVAILABLE).to_string());
            println!("  {:>14.2} {:>16.2} {:>10}", p.investment_amount, p.npv, irr);
        }
    }
    println!(
        "\n{}: {}",
        tr.t(keys::EVALUATION_COMMON_HORIZON),
        eval.common_horizon
    );
    println!(
        "{}: {}",
        tr.t(keys::EVALUATION_RECOMMENDED),
        eval.recommended.display_name()
    );
    Ok(())
}

fn print_metrics(tr: &Translator, report: &ProjectReport) {
    let a = &report.appraisal;
    println!("{}: {:.2}", tr.t(keys::EVALUATION_MEAN_ROI), a.mean_roi);
    println!("{}: {:.4}", tr.t(keys::EVALUATION_PI), a.profitability_index);
    println!("{}: {:.2}", tr.t(keys::EVALUATION_EAA), a.eaa);
}

fn print_series(label: &str, values: &[f64]) {
    let joined = values
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{label}: [{joined}]");
}

/// 가정 설정 메뉴를 처리한다. 값이 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    let a = &cfg.assumptions;
    println!(
        "tax={} debt={} Re={} Rd={} hurdle={:?} | {}={} {}={}",
        a.tax_rate,
        a.debt_share,
        a.cost_of_equity,
        a.interest_rate,
        a.hurdle_rate,
        Variant::Lease.display_name(),
        cfg.lease.investment_amount,
        Variant::Build.display_name(),
        cfg.build.investment_amount
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS_LINE1));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS_LINE2));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(false);
    }

    let value = read_f64(tr, tr.t(keys::SETTINGS_PROMPT_VALUE))?;
    let mut candidate = cfg.clone();
    match sel {
        "1" => candidate.assumptions.tax_rate = value,
        "2" => candidate.assumptions.debt_share = value,
        "3" => candidate.assumptions.cost_of_equity = value,
        "4" => candidate.assumptions.interest_rate = value,
        "5" => candidate.set_hurdle_rate(value),
        "6" => candidate.set_investment(Variant::Lease, value),
        "7" => candidate.set_investment(Variant::Build, value),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(false);
        }
    }
    if candidate.validate().is_err() {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
        return Ok(false);
    }
    *cfg = candidate;
    Ok(true)
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
        if s.is_empty() {
            return Err(AppError::InputClosed);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::NOT_A_NUMBER)),
        }
    }
}
