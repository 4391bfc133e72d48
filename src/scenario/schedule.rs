use log::debug;

use crate::i18n::keys;

use super::{build, lease, ScenarioError, ScenarioParameters, Variant};

/// 한 해의 손익/현금흐름 항목. 투자안에 해당하지 않는 항목은 0으로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashFlowYear {
    pub year: u32,
    /// 객실 순매출. 참고용 항목으로 EBT 계산에는 들어가지 않는다.
    pub net_room_revenue: f64,
    /// Lease는 임대 수입, Build는 업장 매출
    pub revenue: f64,
    /// 고객 이탈(patronage loss)로 인한 비용
    pub patronage_charge: f64,
    pub food_beverage_cost: f64,
    pub other_expenses: f64,
    pub repair_cost: f64,
    /// 정액법 감가상각비(잔존가치 0)
    pub depreciation: f64,
    pub ebt: f64,
    pub net_income: f64,
    /// 0년차에는 부호가 붙은 초기 투자금만 들어간다.
    pub operating_cash_flow: f64,
}

impl CashFlowYear {
    /// 0년차 행. 초기 투자 지출 외 모든 항목이 0이다.
    pub(crate) fn outlay(amount: f64) -> Self {
        Self {
            operating_cash_flow: -amount,
            ..Self::default()
        }
    }

    /// 세전이익이 채워진 행에 세금과 감가상각 가산을 적용한다.
    pub(crate) fn after_tax(mut self, tax_rate: f64) -> Self {
        self.net_income = self.ebt * (1.0 - tax_rate);
        self.operating_cash_flow = self.net_income + self.depreciation;
        self
    }
}

/// 현금흐름표의 표시 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItem {
    NetRoomRevenue,
    RentalRevenue,
    SalesRevenue,
    PatronageCharge,
    FoodBeverageCost,
    OtherExpenses,
    RepairCost,
    Depreciation,
    Ebt,
    NetIncome,
    OperatingCashFlow,
}

impl LineItem {
    /// 표시 이름의 번역 키 (`i18n::keys::LINE_*`).
    pub fn label_key(self) -> &'static str {
        match self {
            LineItem::NetRoomRevenue => keys::LINE_NET_ROOM_REVENUE,
            LineItem::RentalRevenue => keys::LINE_RENTAL_REVENUE,
            LineItem::SalesRevenue => keys::LINE_SALES_REVENUE,
            LineItem::PatronageCharge => keys::LINE_PATRONAGE_CHARGE,
            LineItem::FoodBeverageCost => keys::LINE_FOOD_BEVERAGE_COST,
            LineItem::OtherExpenses => keys::LINE_OTHER_EXPENSES,
            LineItem::RepairCost => keys::LINE_REPAIR_COST,
            LineItem::Depreciation => keys::LINE_DEPRECIATION,
            LineItem::Ebt => keys::LINE_EBT,
            LineItem::NetIncome => keys::LINE_NET_INCOME,
            LineItem::OperatingCashFlow => keys::LINE_OPERATING_CASH_FLOW,
        }
    }

    pub fn value(self, row: &CashFlowYear) -> f64 {
        match self {
            LineItem::NetRoomRevenue => row.net_room_revenue,
            LineItem::RentalRevenue | LineItem::SalesRevenue => row.revenue,
            LineItem::PatronageCharge => row.patronage_charge,
            LineItem::FoodBeverageCost => row.food_beverage_cost,
            LineItem::OtherExpenses => row.other_expenses,
            LineItem::RepairCost => row.repair_cost,
            LineItem::Depreciation => row.depreciation,
            LineItem::Ebt => row.ebt,
            LineItem::NetIncome => row.net_income,
            LineItem::OperatingCashFlow => row.operating_cash_flow,
        }
    }
}

/// 0..N년의 현금흐름표. 입력이 바뀌면 통째로 다시 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSchedule {
    pub variant: Variant,
    pub years: Vec<CashFlowYear>,
}

impl CashFlowSchedule {
    /// 사업 기간 [년] (0년차 제외)
    pub fn life(&self) -> u32 {
        self.years.len().saturating_sub(1) as u32
    }

    /// 영업현금흐름 열만 뽑은 [CF_0, CF_1, ..., CF_N].
    pub fn cash_flow_series(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.operating_cash_flow).collect()
    }

    pub fn total_depreciation(&self) -> f64 {
        self.years.iter().map(|y| y.depreciation).sum()
    }

    /// 표시 항목 하나를 연도 순으로 뽑는다.
    pub fn row(&self, item: LineItem) -> Vec<f64> {
        self.years.iter().map(|y| item.value(y)).collect()
    }
}

/// 투자금과 세율로 투자안의 연도별 현금흐름표를 만든다.
pub fn build_schedule(
    investment_amount: f64,
    tax_rate: f64,
    variant: Variant,
) -> Result<CashFlowSchedule, ScenarioError> {
    ScenarioParameters::new(investment_amount, tax_rate).validate()?;

    let years = match variant {
        Variant::Lease => lease::schedule_years(investment_amount, tax_rate),
        Variant::Build => build::schedule_years(investment_amount, tax_rate),
    };
    debug!(
        "{:?} schedule built: investment={investment_amount}, tax={tax_rate}, years={}",
        variant,
        years.len()
    );
    Ok(CashFlowSchedule { variant, years })
}
