use super::{outlay_magnitude, require_finite, require_len, AppraisalError};

/// 연도별 ROI [%] = CF_t / |CF_0| × 100 (t ≥ 1).
pub fn compute_roi_series(cash_flows: &[f64]) -> Result<Vec<f64>, AppraisalError> {
    require_len(cash_flows, 2)?;
    require_finite(cash_flows)?;
    let outlay = outlay_magnitude(cash_flows)?;
    Ok(cash_flows[1..].iter().map(|cf| cf / outlay * 100.0).collect())
}

/// 연도별 ROI의 산술평균 [%].
pub fn mean_roi(cash_flows: &[f64]) -> Result<f64, AppraisalError> {
    let series = compute_roi_series(cash_flows)?;
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}
