use super::{require_len, AppraisalError};

/// 두 사업 기간의 최소공배수. 기간이 다른 투자안을 같은 기간에서 비교할 때 쓴다.
/// 결과가 u32를 넘으면 `InvalidInput`.
pub fn least_common_multiple(a: u32, b: u32) -> Result<u32, AppraisalError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / greatest_common_divisor(a, b))
        .checked_mul(b)
        .ok_or_else(|| {
            AppraisalError::InvalidInput(format!("사업 기간 {a}, {b}의 최소공배수가 너무 큽니다"))
        })
}

fn greatest_common_divisor(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// 공통 기간까지 현금흐름을 반복해 늘린다.
///
/// CF_0는 한 번만 두고 CF_1..CF_N을 `target_horizon / N`(내림)회 이어 붙인다.
/// 이후 주기는 같은 현금흐름이 반복되며 추가 투자는 없다고 가정한다.
pub fn extend_for_common_horizon(
    cash_flows: &[f64],
    target_horizon: u32,
) -> Result<Vec<f64>, AppraisalError> {
    require_len(cash_flows, 2)?;
    let life = cash_flows.len() - 1;
    let repetitions = target_horizon as usize / life;
    if repetitions == 0 {
        return Err(AppraisalError::InvalidInput(format!(
            "공통 기간({target_horizon}년)이 사업 기간({life}년)보다 짧습니다"
        )));
    }

    let mut extended = Vec::with_capacity(1 + life * repetitions);
    extended.push(cash_flows[0]);
    for _ in 0..repetitions {
        extended.extend_from_slice(&cash_flows[1..]);
    }
    Ok(extended)
}
