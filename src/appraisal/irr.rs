use log::trace;

use super::{require_finite, require_len, AppraisalError};

/// 초기 추정값 10%
pub const IRR_INITIAL_GUESS: f64 = 0.10;
pub const IRR_MAX_ITERATIONS: u32 = 100;
/// |NPV| 수렴 판정 기준
pub const IRR_NPV_TOLERANCE: f64 = 1e-7;
/// 추정값 변화량 수렴 판정 기준. 금액이 커서 NPV가 0 근처에서 진동할 때 쓴다.
const IRR_STEP_TOLERANCE: f64 = 1e-12;
/// (1 + r)이 0 이하가 되지 않도록 하한을 둔다.
const IRR_RATE_FLOOR: f64 = -0.99;
/// 변화량으로 멈췄을 때 허용하는 |NPV| / Σ|CF|
const IRR_RESIDUAL_TOLERANCE: f64 = 1e-9;

/// 내부수익률(IRR)을 Newton-Raphson으로 계산한다.
///
/// 0 = Σ_{t=0..N} CF_t / (1 + r)^t 의 근을 10%에서 출발해 찾는다.
/// 부호가 두 번 이상 바뀌는 현금흐름은 근이 여러 개일 수 있으며, 이 경우 초기값에서
/// 수렴한 근을 그대로 돌려준다. 근의 유일성은 보장하지 않는다.
pub fn compute_irr(cash_flows: &[f64]) -> Result<f64, AppraisalError> {
    require_len(cash_flows, 2)?;
    require_finite(cash_flows)?;

    let scale: f64 = cash_flows.iter().map(|cf| cf.abs()).sum();
    let mut rate = IRR_INITIAL_GUESS;
    for iteration in 0..IRR_MAX_ITERATIONS {
        let (npv, slope) = npv_and_derivative(cash_flows, rate);
        trace!("irr iteration {iteration}: rate={rate}, npv={npv}");

        if npv.abs() < IRR_NPV_TOLERANCE {
            return Ok(rate);
        }
        if slope == 0.0 || !slope.is_finite() || !npv.is_finite() {
            return Err(AppraisalError::Convergence {
                iterations: iteration,
                last_rate: rate,
            });
        }

        let next = (rate - npv / slope).max(IRR_RATE_FLOOR);
        if (next - rate).abs() < IRR_STEP_TOLERANCE {
            // 하한에 붙어 멈춘 경우 등 근이 아니면 수렴 실패
            let (residual, _) = npv_and_derivative(cash_flows, next);
            if residual.abs() <= IRR_RESIDUAL_TOLERANCE * scale {
                return Ok(next);
            }
            return Err(AppraisalError::Convergence {
                iterations: iteration + 1,
                last_rate: next,
            });
        }
        rate = next;
    }

    Err(AppraisalError::Convergence {
        iterations: IRR_MAX_ITERATIONS,
        last_rate: rate,
    })
}

/// r에서의 NPV와 dNPV/dr.
fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let one_plus_r = 1.0 + rate;
    cash_flows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, slope), (t, cf)| {
            let discount = one_plus_r.powi(t as i32);
            let t = t as f64;
            (npv + cf / discount, slope - t * cf / (discount * one_plus_r))
        })
}
