//! Planet Karaoke Pub 임대안(4년). 임대료 수입에서 고객 이탈 비용과 수선비를 뺀다.

use super::{CashFlowYear, LineItem};

pub const LIFE_YEARS: u32 = 4;
pub const INVESTMENT_RANGE: (f64, f64) = (770_000.0, 1_000_000.0);

/// 월 임대료 [THB/월]. 3년차부터 5% 인상된다.
const MONTHLY_RENT: f64 = 170_000.0;
const RENT_ESCALATION: f64 = 1.05;
const ESCALATION_FROM_YEAR: usize = 3;

pub const NET_ROOM_REVENUE: [f64; 4] = [13_200_000.0, 13_464_000.0, 14_137_000.0, 14_844_000.0];
pub const PATRONAGE_CHARGE: [f64; 4] = [1_650_000.0, 1_683_000.0, 1_767_125.0, 1_855_500.0];
pub const REPAIR_COST: f64 = 10_000.0;

pub const LINE_ITEMS: &[LineItem] = &[
    LineItem::NetRoomRevenue,
    LineItem::RentalRevenue,
    LineItem::PatronageCharge,
    LineItem::RepairCost,
    LineItem::Depreciation,
    LineItem::Ebt,
    LineItem::NetIncome,
    LineItem::OperatingCashFlow,
];

/// 해당 연도(1부터)의 연간 임대 수입.
pub fn rental_revenue(year: usize) -> f64 {
    if year >= ESCALATION_FROM_YEAR {
        MONTHLY_RENT * RENT_ESCALATION * 12.0
    } else {
        MONTHLY_RENT * 12.0
    }
}

pub(super) fn schedule_years(investment_amount: f64, tax_rate: f64) -> Vec<CashFlowYear> {
    let depreciation = investment_amount / LIFE_YEARS as f64;
    let mut years = Vec::with_capacity(LIFE_YEARS as usize + 1);
    years.push(CashFlowYear::outlay(investment_amount));

    for idx in 0..LIFE_YEARS as usize {
        let year = idx + 1;
        let revenue = rental_revenue(year);
        let ebt = revenue - REPAIR_COST - depreciation - PATRONAGE_CHARGE[idx];
        let row = CashFlowYear {
            year: year as u32,
            net_room_revenue: NET_ROOM_REVENUE[idx],
            revenue,
            patronage_charge: PATRONAGE_CHARGE[idx],
            repair_cost: REPAIR_COST,
            depreciation,
            ebt,
            ..CashFlowYear::default()
        };
        years.push(row.after_tax(tax_rate));
    }
    years
}
