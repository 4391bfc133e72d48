use super::{outlay_magnitude, require_finite, require_len, require_rate, AppraisalError};

/// 순현재가치(NPV)를 계산한다.
///
/// NPV = CF_0 + Σ_{t=1..N} CF_t / (1 + r)^t
/// - 0년차는 할인하지 않는다.
pub fn compute_npv(cash_flows: &[f64], discount_rate: f64) -> Result<f64, AppraisalError> {
    Ok(discounted_cash_flows(cash_flows, discount_rate)?.iter().sum())
}

/// 연도별 현재가치 [CF_0, CF_1/(1+r), ..., CF_N/(1+r)^N].
pub fn discounted_cash_flows(
    cash_flows: &[f64],
    discount_rate: f64,
) -> Result<Vec<f64>, AppraisalError> {
    require_len(cash_flows, 1)?;
    require_finite(cash_flows)?;
    require_rate(discount_rate)?;
    let one_plus_r = 1.0 + discount_rate;
    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / one_plus_r.powi(t as i32))
        .collect())
}

/// 할인하지 않은 누적 현금흐름. 회수 시점 확인용.
pub fn cumulative_cash_flows(cash_flows: &[f64]) -> Vec<f64> {
    cash_flows
        .iter()
        .scan(0.0, |acc, cf| {
            *acc += cf;
            Some(*acc)
        })
        .collect()
}

/// 수익성지수(PI) = 유입 현금흐름의 현재가치 / |CF_0|.
pub fn profitability_index(cash_flows: &[f64], discount_rate: f64) -> Result<f64, AppraisalError> {
    let present_values = discounted_cash_flows(cash_flows, discount_rate)?;
    let outlay = outlay_magnitude(cash_flows)?;
    let pv_inflows: f64 = present_values.iter().sum::<f64>() - cash_flows[0];
    Ok(pv_inflows / outlay)
}
