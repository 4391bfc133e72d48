use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CASH_FLOW: &str = "main_menu.cash_flow";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_EVALUATION: &str = "main_menu.evaluation";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const NOT_A_NUMBER: &str = "error.not_a_number";

    pub const CASH_FLOW_HEADING: &str = "cash_flow.heading";
    pub const CASH_FLOW_CATEGORY: &str = "cash_flow.category";
    pub const CASH_FLOW_YEAR: &str = "cash_flow.year";
    pub const CASH_FLOW_INVESTMENT: &str = "cash_flow.investment";
    pub const LINE_NET_ROOM_REVENUE: &str = "line_item.net_room_revenue";
    pub const LINE_RENTAL_REVENUE: &str = "line_item.rental_revenue";
    pub const LINE_SALES_REVENUE: &str = "line_item.sales_revenue";
    pub const LINE_PATRONAGE_CHARGE: &str = "line_item.patronage_charge";
    pub const LINE_FOOD_BEVERAGE_COST: &str = "line_item.food_beverage_cost";
    pub const LINE_OTHER_EXPENSES: &str = "line_item.other_expenses";
    pub const LINE_REPAIR_COST: &str = "line_item.repair_cost";
    pub const LINE_DEPRECIATION: &str = "line_item.depreciation";
    pub const LINE_EBT: &str = "line_item.ebt";
    pub const LINE_NET_INCOME: &str = "line_item.net_income";
    pub const LINE_OPERATING_CASH_FLOW: &str = "line_item.operating_cash_flow";

    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const ANALYSIS_DISCOUNT_RATE: &str = "analysis.discount_rate";
    pub const ANALYSIS_WACC: &str = "analysis.wacc";
    pub const ANALYSIS_NPV: &str = "analysis.npv";
    pub const ANALYSIS_IRR: &str = "analysis.irr";
    pub const ANALYSIS_IRR_UNAVAILABLE: &str = "analysis.irr_unavailable";
    pub const ANALYSIS_PAYBACK: &str = "analysis.payback";
    pub const ANALYSIS_PAYBACK_NONE: &str = "analysis.payback_none";
    pub const ANALYSIS_DISCOUNTED: &str = "analysis.discounted";
    pub const ANALYSIS_CUMULATIVE: &str = "analysis.cumulative";

    pub const EVALUATION_HEADING: &str = "evaluation.heading";
    pub const EVALUATION_ROI: &str = "evaluation.roi";
    pub const EVALUATION_MEAN_ROI: &str = "evaluation.mean_roi";
    pub const EVALUATION_PI: &str = "evaluation.pi";
    pub const EVALUATION_EAA: &str = "evaluation.eaa";
    pub const EVALUATION_COMMON_HORIZON: &str = "evaluation.common_horizon";
    pub const EVALUATION_EXTENDED_NPV: &str = "evaluation.extended_npv";
    pub const EVALUATION_RECOMMENDED: &str = "evaluation.recommended";
    pub const EVALUATION_SENSITIVITY: &str = "evaluation.sensitivity";
    pub const EVALUATION_SENSITIVITY_COLUMNS: &str = "evaluation.sensitivity_columns";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS_LINE1: &str = "settings.options_line1";
    pub const SETTINGS_OPTIONS_LINE2: &str = "settings.options_line2";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_VALUE: &str = "settings.prompt_value";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(locales/ 등)의 `<code>.toml`로 내장 문자열을 덮어쓴다.
    /// 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &Path) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/한국어 순으로 찾고, 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin: Option<&'a str> = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        builtin.unwrap_or(key)
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

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .or_else(|| std::env::var("LANG").ok())
        .or_else(|| std::env::var("LC_ALL").ok())
        .and_then(|loc| {
            let lang = loc.split(['.', '_', '-']).next().unwrap_or_default();
            normalize_lang(lang)
        })
}

/// TOML 언어팩을 로드한다. `[section] key = "value"`를 `section.key`로 평탄화한다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
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
        MAIN_MENU_TITLE => "\n=== Capital Appraisal Toolbox ===",
        MAIN_MENU_CASH_FLOW => "1) 현금흐름표",
        MAIN_MENU_ANALYSIS => "2) 분석 (NPV / IRR / 회수기간)",
        MAIN_MENU_EVALUATION => "3) 평가 및 추천",
        MAIN_MENU_SETTINGS => "4) 가정 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        NOT_A_NUMBER => "숫자를 입력하세요.",
        CASH_FLOW_HEADING => "\n-- 현금흐름표 --",
        CASH_FLOW_CATEGORY => "항목",
        CASH_FLOW_YEAR => "Year",
        CASH_FLOW_INVESTMENT => "초기 투자",
        LINE_NET_ROOM_REVENUE => "객실 순매출",
        LINE_RENTAL_REVENUE => "임대 수입",
        LINE_SALES_REVENUE => "업장 매출",
        LINE_PATRONAGE_CHARGE => "고객 이탈 비용",
        LINE_FOOD_BEVERAGE_COST => "식음료 원가",
        LINE_OTHER_EXPENSES => "기타 비용",
        LINE_REPAIR_COST => "수선/유지비",
        LINE_DEPRECIATION => "감가상각비",
        LINE_EBT => "세전이익(EBT)",
        LINE_NET_INCOME => "당기순이익",
        LINE_OPERATING_CASH_FLOW => "영업현금흐름",
        ANALYSIS_HEADING => "\n-- 분석 --",
        ANALYSIS_DISCOUNT_RATE => "할인율",
        ANALYSIS_WACC => "WACC",
        ANALYSIS_NPV => "NPV",
        ANALYSIS_IRR => "IRR",
        ANALYSIS_IRR_UNAVAILABLE => "계산 불가",
        ANALYSIS_PAYBACK => "회수기간(년)",
        ANALYSIS_PAYBACK_NONE => "기간 내 회수 불가",
        ANALYSIS_DISCOUNTED => "연도별 현재가치",
        ANALYSIS_CUMULATIVE => "누적 현금흐름",
        EVALUATION_HEADING => "\n-- 평가 및 추천 --",
        EVALUATION_ROI => "연도별 ROI(%)",
        EVALUATION_MEAN_ROI => "평균 ROI(%)",
        EVALUATION_PI => "수익성지수(PI)",
        EVALUATION_EAA => "등가연금(EAA)",
        EVALUATION_COMMON_HORIZON => "공통 비교기간(년)",
        EVALUATION_EXTENDED_NPV => "공통기간 NPV",
        EVALUATION_RECOMMENDED => "추천 투자안",
        EVALUATION_SENSITIVITY => "투자금 민감도",
        EVALUATION_SENSITIVITY_COLUMNS => "투자금 / NPV / IRR",
        SETTINGS_HEADING => "\n-- 가정 설정 --",
        SETTINGS_OPTIONS_LINE1 => "1) 세율  2) 부채 비중  3) 자기자본비용  4) 이자율",
        SETTINGS_OPTIONS_LINE2 => "5) 요구수익률(0 입력 시 WACC 사용)  6) Planet 투자금  7) Beach 투자금",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_VALUE => "새 값: ",
        SETTINGS_INVALID => "허용 범위를 벗어나 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Capital Appraisal Toolbox ===",
        MAIN_MENU_CASH_FLOW => "1) Cash flow tables",
        MAIN_MENU_ANALYSIS => "2) Analysis (NPV / IRR / Payback)",
        MAIN_MENU_EVALUATION => "3) Evaluation & recommendation",
        MAIN_MENU_SETTINGS => "4) Assumptions",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        NOT_A_NUMBER => "Please enter a number.",
        CASH_FLOW_HEADING => "\n-- Cash Flow --",
        CASH_FLOW_CATEGORY => "Category",
        CASH_FLOW_YEAR => "Year",
        CASH_FLOW_INVESTMENT => "Initial Investment",
        LINE_NET_ROOM_REVENUE => "Net Room Revenue",
        LINE_RENTAL_REVENUE => "Rental Revenue",
        LINE_SALES_REVENUE => "Sales Revenue",
        LINE_PATRONAGE_CHARGE => "Patronage Charge",
        LINE_FOOD_BEVERAGE_COST => "Food & Beverage Cost",
        LINE_OTHER_EXPENSES => "Other Expenses",
        LINE_REPAIR_COST => "Repair/Maintenance Cost",
        LINE_DEPRECIATION => "Depreciation",
        LINE_EBT => "EBT",
        LINE_NET_INCOME => "Net Income",
        LINE_OPERATING_CASH_FLOW => "Operating Cash Flow",
        ANALYSIS_HEADING => "\n-- Analysis --",
        ANALYSIS_DISCOUNT_RATE => "Discount rate",
        ANALYSIS_WACC => "WACC",
        ANALYSIS_NPV => "NPV",
        ANALYSIS_IRR => "IRR",
        ANALYSIS_IRR_UNAVAILABLE => "n/a",
        ANALYSIS_PAYBACK => "Payback (years)",
        ANALYSIS_PAYBACK_NONE => "not recovered",
        ANALYSIS_DISCOUNTED => "Discounted cash flow",
        ANALYSIS_CUMULATIVE => "Cumulative cash flow",
        EVALUATION_HEADING => "\n-- Evaluation & Recommendation --",
        EVALUATION_ROI => "ROI by year (%)",
        EVALUATION_MEAN_ROI => "Mean ROI (%)",
        EVALUATION_PI => "Profitability index",
        EVALUATION_EAA => "Equivalent annual annuity",
        EVALUATION_COMMON_HORIZON => "Common horizon (years)",
        EVALUATION_EXTENDED_NPV => "NPV over common horizon",
        EVALUATION_RECOMMENDED => "Recommended project",
        EVALUATION_SENSITIVITY => "Investment sensitivity",
        EVALUATION_SENSITIVITY_COLUMNS => "Investment / NPV / IRR",
        SETTINGS_HEADING => "\n-- Assumptions --",
        SETTINGS_OPTIONS_LINE1 => "1) Tax rate  2) Debt share  3) Cost of equity  4) Interest rate",
        SETTINGS_OPTIONS_LINE2 => {
            "5) Hurdle rate (0 = use WACC)  6) Planet investment  7) Beach investment"
        }
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_PROMPT_VALUE => "New value: ",
        SETTINGS_INVALID => "Value out of range; not changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}
