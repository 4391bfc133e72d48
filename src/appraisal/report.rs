use log::warn;

use super::{
    calculate_eaa, compute_irr, compute_npv, compute_payback_period, compute_roi_series,
    profitability_index, AppraisalError,
};

/// 한 현금흐름에 대한 평가 지표 묶음. 요청마다 새로 계산하며 캐시하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct AppraisalResult {
    pub npv: f64,
    /// 수렴하지 않으면 None (경고 로그만 남긴다)
    pub irr: Option<f64>,
    /// 회수 연도(1부터). 기간 내 회수 불가면 None
    pub payback_period: Option<u32>,
    /// 연도별 ROI [%]
    pub roi_per_year: Vec<f64>,
    /// 평균 ROI [%]
    pub mean_roi: f64,
    pub eaa: f64,
    pub profitability_index: f64,
}

/// 모든 평가 지표를 한 번에 계산한다.
///
/// IRR 미수렴은 결과 수준의 실패로 보고 `irr: None`으로 남긴다. 나머지 오류는 그대로 돌려준다.
pub fn appraise(cash_flows: &[f64], discount_rate: f64) -> Result<AppraisalResult, AppraisalError> {
    let npv = compute_npv(cash_flows, discount_rate)?;
    let irr = match compute_irr(cash_flows) {
        Ok(rate) => Some(rate),
        Err(err @ AppraisalError::Convergence { .. }) => {
            warn!("IRR을 구하지 못했습니다: {err}");
            None
        }
        Err(err) => return Err(err),
    };
    let payback_period = compute_payback_period(cash_flows)?;
    let roi_per_year = compute_roi_series(cash_flows)?;
    let mean_roi = roi_per_year.iter().sum::<f64>() / roi_per_year.len() as f64;
    let life = (cash_flows.len() - 1) as u32;
    let eaa = annualize(npv, discount_rate, life)?;
    let profitability_index = profitability_index(cash_flows, discount_rate)?;

    Ok(AppraisalResult {
        npv,
        irr,
        payback_period,
        roi_per_year,
        mean_roi,
        eaa,
        profitability_index,
    })
}

/// EAA. 할인율 0이면 NPV를 기간으로 나눈 정액값을 쓴다.
pub fn annualize(npv: f64, discount_rate: f64, n: u32) -> Result<f64, AppraisalError> {
    match calculate_eaa(npv, discount_rate, n) {
        Err(AppraisalError::ZeroDiscountRate) => Ok(npv / n as f64),
        other => other,
    }
}
