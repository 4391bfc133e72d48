//! 두 투자안을 같은 가정으로 계산해 비교한다.
//! 현금흐름표 생성 → 지표 계산 → 공통기간(최소공배수) 비교 → 추천안 결정 순서로 진행한다.

use log::{debug, info};
use thiserror::Error;

use crate::appraisal::{
    self, compute_irr, compute_npv, compute_wacc, extend_for_common_horizon,
    least_common_multiple, AppraisalError, AppraisalResult,
};
use crate::scenario::{CashFlowSchedule, ScenarioError, ScenarioParameters, Variant};

/// 비교 평가 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("현금흐름표 오류: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("지표 계산 오류: {0}")]
    Appraisal(#[from] AppraisalError),
}

/// 비교 평가 입력. 사용자가 조정하는 가정 전체를 값으로 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisInputs {
    pub tax_rate: f64,
    /// 부채 비중(0~1). 자기자본 비중은 1 - debt_share
    pub debt_share: f64,
    pub cost_of_equity: f64,
    pub interest_rate: f64,
    /// 고정 요구수익률. None이면 WACC로 할인한다.
    pub hurdle_rate: Option<f64>,
    pub lease_investment: f64,
    pub build_investment: f64,
}

impl Default for AnalysisInputs {
    fn default() -> Self {
        Self {
            tax_rate: 0.3,
            debt_share: 0.25,
            cost_of_equity: 0.08,
            interest_rate: 0.05,
            hurdle_rate: Some(0.115),
            lease_investment: 770_000.0,
            build_investment: 800_000.0,
        }
    }
}

impl AnalysisInputs {
    pub fn equity_share(&self) -> f64 {
        1.0 - self.debt_share
    }

    pub fn wacc(&self) -> f64 {
        compute_wacc(
            self.equity_share(),
            self.cost_of_equity,
            self.debt_share,
            self.interest_rate,
            self.tax_rate,
        )
    }

    /// 할인율: 요구수익률이 있으면 그것을, 없으면 WACC를 쓴다.
    pub fn discount_rate(&self) -> f64 {
        self.hurdle_rate.unwrap_or_else(|| self.wacc())
    }

    pub fn scenario(&self, variant: Variant) -> ScenarioParameters {
        let investment = match variant {
            Variant::Lease => self.lease_investment,
            Variant::Build => self.build_investment,
        };
        ScenarioParameters::new(investment, self.tax_rate)
    }
}

/// 투자안 하나의 현금흐름표와 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    pub variant: Variant,
    pub schedule: CashFlowSchedule,
    pub cash_flows: Vec<f64>,
    pub appraisal: AppraisalResult,
}

impl ProjectReport {
    pub fn compute(
        params: ScenarioParameters,
        variant: Variant,
        discount_rate: f64,
    ) -> Result<Self, EvaluationError> {
        let schedule = params.build(variant)?;
        let cash_flows = schedule.cash_flow_series();
        let appraisal = appraisal::appraise(&cash_flows, discount_rate)?;
        Ok(Self {
            variant,
            schedule,
            cash_flows,
            appraisal,
        })
    }
}

/// 공통기간으로 늘린 현금흐름과 그 NPV.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedProject {
    pub variant: Variant,
    pub repetitions: u32,
    pub cash_flows: Vec<f64>,
    pub npv: f64,
}

/// 두 투자안 비교 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub discount_rate: f64,
    pub wacc: f64,
    pub lease: ProjectReport,
    pub build: ProjectReport,
    /// 두 사업 기간의 최소공배수 [년]
    pub common_horizon: u32,
    pub lease_extended: ExtendedProject,
    pub build_extended: ExtendedProject,
    pub recommended: Variant,
}

impl Evaluation {
    pub fn project(&self, variant: Variant) -> &ProjectReport {
        match variant {
            Variant::Lease => &self.lease,
            Variant::Build => &self.build,
        }
    }

    pub fn extended(&self, variant: Variant) -> &ExtendedProject {
        match variant {
            Variant::Lease => &self.lease_extended,
            Variant::Build => &self.build_extended,
        }
    }
}

/// 두 투자안을 계산하고 비교한다.
pub fn evaluate(inputs: &AnalysisInputs) -> Result<Evaluation, EvaluationError> {
    let discount_rate = inputs.discount_rate();
    let wacc = inputs.wacc();
    let lease = ProjectReport::compute(
        inputs.scenario(Variant::Lease),
        Variant::Lease,
        discount_rate,
    )?;
    let build = ProjectReport::compute(
        inputs.scenario(Variant::Build),
        Variant::Build,
        discount_rate,
    )?;

    let common_horizon = least_common_multiple(lease.schedule.life(), build.schedule.life())?;
    let lease_extended = extend(&lease, common_horizon, discount_rate)?;
    let build_extended = extend(&build, common_horizon, discount_rate)?;

    let recommended = recommend(&lease, &build, &lease_extended, &build_extended);
    info!(
        "evaluation done: r={discount_rate:.4}, horizon={common_horizon}, recommended={:?}",
        recommended
    );

    Ok(Evaluation {
        discount_rate,
        wacc,
        lease,
        build,
        common_horizon,
        lease_extended,
        build_extended,
        recommended,
    })
}

fn extend(
    report: &ProjectReport,
    horizon: u32,
    discount_rate: f64,
) -> Result<ExtendedProject, EvaluationError> {
    let cash_flows = extend_for_common_horizon(&report.cash_flows, horizon)?;
    let npv = compute_npv(&cash_flows, discount_rate)?;
    Ok(ExtendedProject {
        variant: report.variant,
        repetitions: horizon / report.schedule.life(),
        cash_flows,
        npv,
    })
}

/// EAA가 큰 쪽을 추천한다. 같으면 공통기간 NPV, 그래도 같으면 Lease.
fn recommend(
    lease: &ProjectReport,
    build: &ProjectReport,
    lease_extended: &ExtendedProject,
    build_extended: &ExtendedProject,
) -> Variant {
    let by_eaa = build.appraisal.eaa.partial_cmp(&lease.appraisal.eaa);
    match by_eaa {
        Some(std::cmp::Ordering::Greater) => Variant::Build,
        Some(std::cmp::Ordering::Less) => Variant::Lease,
        _ if build_extended.npv > lease_extended.npv => Variant::Build,
        _ => Variant::Lease,
    }
}

/// 투자금 민감도 분석의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityPoint {
    pub investment_amount: f64,
    pub npv: f64,
    pub irr: Option<f64>,
}

/// 투자금을 입력 허용 구간에서 `steps`개 등간격으로 바꿔 가며 NPV/IRR을 계산한다.
pub fn investment_sensitivity(
    variant: Variant,
    tax_rate: f64,
    discount_rate: f64,
    steps: usize,
) -> Result<Vec<SensitivityPoint>, EvaluationError> {
    if steps < 2 {
        return Err(ScenarioError::InvalidParameter(format!(
            "민감도 분석 구간 수는 2 이상이어야 합니다 (입력값 {steps})"
        ))
        .into());
    }
    let (low, high) = variant.investment_range();
    let step = (high - low) / (steps - 1) as f64;

    (0..steps)
        .map(|i| -> Result<SensitivityPoint, EvaluationError> {
            let investment_amount = low + step * i as f64;
            let schedule = ScenarioParameters::new(investment_amount, tax_rate).build(variant)?;
            let cash_flows = schedule.cash_flow_series();
            let npv = compute_npv(&cash_flows, discount_rate)?;
            let irr = compute_irr(&cash_flows).ok();
            debug!("{variant:?} sensitivity: I={investment_amount}, npv={npv}");
            Ok(SensitivityPoint {
                investment_amount,
                npv,
                irr,
            })
        })
        .collect()
}
