//! 투자안별 현금흐름표 생성 모듈 모음.
//! 리스(Planet, 4년)와 직영 신축(Beach, 6년) 두 시나리오의 고정 상수와 연도별 현금흐름 계산으로 구성한다.

pub mod build;
pub mod lease;
pub mod schedule;

pub use schedule::*;

use thiserror::Error;

/// 현금흐름표 생성 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// 범위를 벗어나거나 유한하지 않은 입력값
    #[error("입력 오류: {0}")]
    InvalidParameter(String),
}

/// 비교 대상 투자안.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 기존 업장 임대(4년)
    Lease,
    /// 리모델링 후 직영(6년)
    Build,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Lease, Variant::Build];

    /// 사업 기간 [년]
    pub fn life_years(self) -> u32 {
        match self {
            Variant::Lease => lease::LIFE_YEARS,
            Variant::Build => build::LIFE_YEARS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Lease => "Planet Karaoke Pub",
            Variant::Build => "Beach Karaoke Pub",
        }
    }

    /// 투자금 입력 허용 구간(최소, 최대). 민감도 분석의 기본 구간으로도 쓴다.
    pub fn investment_range(self) -> (f64, f64) {
        match self {
            Variant::Lease => lease::INVESTMENT_RANGE,
            Variant::Build => build::INVESTMENT_RANGE,
        }
    }

    /// 현금흐름표에 표시할 항목 순서.
    pub fn line_items(self) -> &'static [LineItem] {
        match self {
            Variant::Lease => lease::LINE_ITEMS,
            Variant::Build => build::LINE_ITEMS,
        }
    }
}

/// 현금흐름표 계산 입력. 매 재계산마다 새로 만들어 값으로 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParameters {
    /// 초기 투자금(양수). Build는 여기에 리모델링 자본 900,000이 더해진다.
    pub investment_amount: f64,
    /// 법인세율(0~1)
    pub tax_rate: f64,
}

impl ScenarioParameters {
    pub fn new(investment_amount: f64, tax_rate: f64) -> Self {
        Self {
            investment_amount,
            tax_rate,
        }
    }

    /// 입력 범위를 검사한다. 값을 보정하지 않고 오류로 돌려준다.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.investment_amount.is_finite() || self.investment_amount <= 0.0 {
            return Err(ScenarioError::InvalidParameter(format!(
                "투자금은 0보다 커야 합니다 (입력값 {})",
                self.investment_amount
            )));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ScenarioError::InvalidParameter(format!(
                "세율은 0과 1 사이여야 합니다 (입력값 {})",
                self.tax_rate
            )));
        }
        Ok(())
    }

    /// 주어진 투자안의 현금흐름표를 만든다.
    pub fn build(self, variant: Variant) -> Result<CashFlowSchedule, ScenarioError> {
        build_schedule(self.investment_amount, self.tax_rate, variant)
    }
}
