use super::AppraisalError;

/// 등가연금(EAA)을 계산한다.
///
/// 연금계수 = r / (1 - (1 + r)^-n), EAA = NPV × 연금계수
/// - 할인율 0은 정의되지 않으므로 오류를 돌려준다. 호출 측에서 NPV / n으로 처리한다.
pub fn calculate_eaa(npv: f64, discount_rate: f64, n: u32) -> Result<f64, AppraisalError> {
    if n == 0 {
        return Err(AppraisalError::InvalidInput(
            "기간은 1년 이상이어야 합니다".into(),
        ));
    }
    if discount_rate == 0.0 {
        return Err(AppraisalError::ZeroDiscountRate);
    }
    if !npv.is_finite() || !discount_rate.is_finite() || discount_rate <= -1.0 {
        return Err(AppraisalError::InvalidInput(format!(
            "NPV와 할인율이 올바르지 않습니다 (npv={npv}, r={discount_rate})"
        )));
    }
    let annuity_factor = discount_rate / (1.0 - (1.0 + discount_rate).powi(-(n as i32)));
    Ok(npv * annuity_factor)
}
