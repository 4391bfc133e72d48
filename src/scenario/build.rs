//! Beach Karaoke Pub 직영안(6년). 리모델링 자본이 투자금에 더해지고 F&B 매출/원가가 붙는다.
//!
//! 연도별 상수는 가장 최근 버전의 입력값을 기준으로 한다. 이전 버전과 Sales Revenue 등에
//! 차이가 있으며 DESIGN.md에 기록해 두었다.

use super::{CashFlowYear, LineItem};

pub const LIFE_YEARS: u32 = 6;
pub const INVESTMENT_RANGE: (f64, f64) = (800_000.0, 1_200_000.0);

/// 리모델링 자본 [THB]. 투자금과 함께 0년차에 지출되고 감가상각 대상에 포함된다.
pub const RENOVATION_CAPITAL: f64 = 900_000.0;

pub const NET_ROOM_REVENUE: [f64; 6] = [
    13_200_000.0,
    13_464_000.0,
    14_137_000.0,
    14_844_000.0,
    15_140_000.0,
    15_443_000.0,
];
pub const SALES_REVENUE: [f64; 6] = [
    4_672_000.0,
    4_905_600.0,
    5_150_880.0,
    5_408_424.0,
    5_678_845.0,
    5_962_537.25,
];
pub const PATRONAGE_CHARGE: [f64; 6] = [
    1_650_000.0,
    1_683_000.0,
    1_767_125.0,
    1_855_500.0,
    1_892_500.0,
    1_930_375.0,
];
pub const FOOD_BEVERAGE_COST: [f64; 6] = [
    1_168_000.0,
    1_226_400.0,
    1_287_720.0,
    1_352_106.0,
    1_419_711.3,
    1_490_696.87,
];
pub const OTHER_EXPENSES: [f64; 6] = [
    1_027_840.0,
    1_079_232.0,
    1_133_192.6,
    1_189_853.3,
    1_249_345.9,
    1_311_813.24,
];
pub const REPAIR_COST: f64 = 10_000.0;

pub const LINE_ITEMS: &[LineItem] = &[
    LineItem::NetRoomRevenue,
    LineItem::SalesRevenue,
    LineItem::PatronageCharge,
    LineItem::FoodBeverageCost,
    LineItem::OtherExpenses,
    LineItem::RepairCost,
    LineItem::Depreciation,
    LineItem::Ebt,
    LineItem::NetIncome,
    LineItem::OperatingCashFlow,
];

/// 감가상각 대상 금액(투자금 + 리모델링 자본).
pub fn depreciable_base(investment_amount: f64) -> f64 {
    investment_amount + RENOVATION_CAPITAL
}

pub(super) fn schedule_years(investment_amount: f64, tax_rate: f64) -> Vec<CashFlowYear> {
    let base = depreciable_base(investment_amount);
    let depreciation = base / LIFE_YEARS as f64;
    let mut years = Vec::with_capacity(LIFE_YEARS as usize + 1);
    years.push(CashFlowYear::outlay(base));

    for idx in 0..LIFE_YEARS as usize {
        let ebt = SALES_REVENUE[idx]
            - FOOD_BEVERAGE_COST[idx]
            - OTHER_EXPENSES[idx]
            - PATRONAGE_CHARGE[idx]
            - REPAIR_COST
            - depreciation;
        let row = CashFlowYear {
            year: idx as u32 + 1,
            net_room_revenue: NET_ROOM_REVENUE[idx],
            revenue: SALES_REVENUE[idx],
            patronage_charge: PATRONAGE_CHARGE[idx],
            food_beverage_cost: FOOD_BEVERAGE_COST[idx],
            other_expenses: OTHER_EXPENSES[idx],
            repair_cost: REPAIR_COST,
            depreciation,
            ebt,
            ..CashFlowYear::default()
        };
        years.push(row.after_tax(tax_rate));
    }
    years
}
