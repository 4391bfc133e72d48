//! 투자안 평가 지표 계산 모듈 모음.
//! 현금흐름 배열 [CF_0, CF_1, ..., CF_N] (CF_0는 부호가 붙은 초기 투자금)을 입력으로 받아
//! NPV, IRR, 회수기간, ROI, EAA, 수익성지수, 공통기간 확장, WACC를 계산한다. 모든 함수는 상태가 없다.

pub mod eaa;
pub mod horizon;
pub mod irr;
pub mod npv;
pub mod payback;
pub mod report;
pub mod roi;
pub mod wacc;

pub use eaa::*;
pub use horizon::*;
pub use irr::*;
pub use npv::*;
pub use payback::*;
pub use report::*;
pub use roi::*;
pub use wacc::*;

use thiserror::Error;

/// 평가 지표 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppraisalError {
    /// 범위를 벗어난 할인율, 유한하지 않은 현금흐름 등
    #[error("입력 오류: {0}")]
    InvalidInput(String),
    /// 지표 계산에 필요한 현금흐름 개수가 부족한 경우
    #[error("현금흐름이 부족합니다: 최소 {required}개 필요, {actual}개 입력")]
    EmptySeries { required: usize, actual: usize },
    /// IRR 반복 계산이 수렴하지 않은 경우
    #[error("IRR 계산이 {iterations}회 반복 후에도 수렴하지 않았습니다 (마지막 추정값 {last_rate})")]
    Convergence { iterations: u32, last_rate: f64 },
    /// 할인율 0에서는 연금계수가 정의되지 않는다
    #[error("할인율이 0이면 연금계수를 계산할 수 없습니다")]
    ZeroDiscountRate,
    /// 초기 투자금이 0이면 비율 지표를 계산할 수 없다
    #[error("초기 투자금(CF_0)이 0이므로 비율 지표를 계산할 수 없습니다")]
    ZeroOutlay,
}

pub(crate) fn require_len(cash_flows: &[f64], required: usize) -> Result<(), AppraisalError> {
    if cash_flows.len() < required {
        return Err(AppraisalError::EmptySeries {
            required,
            actual: cash_flows.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_finite(cash_flows: &[f64]) -> Result<(), AppraisalError> {
    match cash_flows.iter().position(|cf| !cf.is_finite()) {
        Some(idx) => Err(AppraisalError::InvalidInput(format!(
            "{idx}년차 현금흐름이 유한한 수가 아닙니다"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn require_rate(discount_rate: f64) -> Result<(), AppraisalError> {
    if !(0.0..=1.0).contains(&discount_rate) {
        return Err(AppraisalError::InvalidInput(format!(
            "할인율은 0과 1 사이여야 합니다 (입력값 {discount_rate})"
        )));
    }
    Ok(())
}

/// |CF_0|. 0이면 비율 지표의 분모가 없으므로 오류.
pub(crate) fn outlay_magnitude(cash_flows: &[f64]) -> Result<f64, AppraisalError> {
    let outlay = cash_flows.first().copied().unwrap_or_default().abs();
    if outlay == 0.0 {
        return Err(AppraisalError::ZeroOutlay);
    }
    Ok(outlay)
}
