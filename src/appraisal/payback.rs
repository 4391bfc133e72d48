use super::{require_finite, require_len, AppraisalError};

/// 단순(비할인) 회수기간을 계산한다.
///
/// CF_1부터 누적한 합이 |CF_0| 이상이 되는 첫 연도(1부터)를 돌려준다.
/// 관측 기간 안에 회수되지 않으면 `None`.
pub fn compute_payback_period(cash_flows: &[f64]) -> Result<Option<u32>, AppraisalError> {
    require_len(cash_flows, 2)?;
    require_finite(cash_flows)?;

    let initial_investment = cash_flows[0].abs();
    let mut cumulative = 0.0;
    for (period, cf) in cash_flows.iter().enumerate().skip(1) {
        cumulative += cf;
        if cumulative >= initial_investment {
            return Ok(Some(period as u32));
        }
    }
    Ok(None)
}
