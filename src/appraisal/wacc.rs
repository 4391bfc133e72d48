/// 가중평균자본비용(WACC).
///
/// WACC = E × Re + D × Rd × (1 - t)
/// - E + D = 1 을 전제로 한다. 이 함수는 검사하지 않으며 호출 측이 맞춰야 한다.
pub fn compute_wacc(
    equity_share: f64,
    cost_of_equity: f64,
    debt_share: f64,
    interest_rate: f64,
    tax_rate: f64,
) -> f64 {
    equity_share * cost_of_equity + debt_share * interest_rate * (1.0 - tax_rate)
}
