//! Dashboard read-model aggregation.
//!
//! A single pass over the order list plus two keyed groupings. Pure and
//! allocation-only: no I/O, no clock, no mutation of the input records. The
//! surrounding layers re-run it on every filter change.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rota_ops_core::models::{ExpenseRecord, OrderRecord, PaymentStatus};

/// Region label when an order carries no city.
const UNKNOWN_CITY: &str = "Desconhecido";
/// Region label when an order carries no state.
const UNKNOWN_STATE: &str = "UF";

/// Daily sales target attached to every time-series bucket until real
/// projections exist.
const PROJECTED_DAILY: Decimal = Decimal::ONE_THOUSAND;

const PT_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Summary metrics over the filtered order set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_orders: i64,
    /// Sum of final prices
    pub revenue: Decimal,
    /// Sum of commissions
    pub total_commission: Decimal,
    /// COD still with customers: payment Pending or Failed
    pub cash_to_collect: Decimal,
    /// COD sitting with delivery agents: payment Collected
    pub cash_collected: Decimal,
    /// Collected cash awaiting transfer to the treasury; no separate ledger
    /// exists yet, so this mirrors `cash_collected`
    pub remittance_pending: Decimal,
    /// Zero when the order set is empty
    pub average_order_value: Decimal,
    /// Percentage of delivered orders, full precision; zero when empty
    pub delivery_success_rate: Decimal,
}

/// Accumulated metrics for one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStat {
    pub name: String,
    pub city: String,
    pub state: String,
    pub revenue: Decimal,
    pub deliveries: i64,
    /// Reserved, always zero
    pub efficiency: Decimal,
    /// Reserved, always zero
    pub cod_collection_rate: Decimal,
}

impl RegionStat {
    fn new(city: String, state: String) -> Self {
        Self {
            name: city.clone(),
            city,
            state,
            revenue: Decimal::ZERO,
            deliveries: 0,
            efficiency: Decimal::ZERO,
            cod_collection_rate: Decimal::ZERO,
        }
    }
}

/// One calendar-day bucket of the sales series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Day label, e.g. "11 nov"
    pub day: String,
    pub projected: Decimal,
    /// Revenue placed on this day
    pub realized: Decimal,
    /// COD collected from orders placed on this day
    pub cash_collected: Decimal,
}

/// The derived read-model, recomputed fresh on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub kpis: Kpis,
    pub sales_series: Vec<SalesPoint>,
    pub regions: Vec<RegionStat>,
    pub orders: Vec<OrderRecord>,
    pub expenses: Vec<ExpenseRecord>,
}

/// Builds the dashboard read-model from already-filtered records.
///
/// Amount fields that are absent contribute zero; nothing here panics on
/// malformed records. Expenses pass through unaggregated. Orders without a
/// placement date are excluded from the daily series but still count toward
/// every scalar metric and the region rollup.
#[must_use]
pub fn aggregate(orders: Vec<OrderRecord>, expenses: Vec<ExpenseRecord>) -> DashboardData {
    let mut revenue = Decimal::ZERO;
    let mut total_commission = Decimal::ZERO;
    let mut cash_to_collect = Decimal::ZERO;
    let mut cash_collected = Decimal::ZERO;
    let mut delivered: i64 = 0;

    let mut region_index: HashMap<String, usize> = HashMap::new();
    let mut regions: Vec<RegionStat> = Vec::new();
    let mut day_index: HashMap<String, usize> = HashMap::new();
    let mut sales_series: Vec<SalesPoint> = Vec::new();

    for order in &orders {
        let price = order.order_final_price.unwrap_or_default();
        let cod = order.cod_amount.unwrap_or_default();

        revenue += price;
        total_commission += order.commission.unwrap_or_default();

        match order.payment() {
            Some(PaymentStatus::Pending | PaymentStatus::Failed) => cash_to_collect += cod,
            Some(PaymentStatus::Collected) => cash_collected += cod,
            _ => {}
        }

        if order.is_delivered() {
            delivered += 1;
        }

        // Region rollup, keyed by city-state so same-named cities in
        // different states stay apart. First-seen order is preserved.
        let city = non_empty(order.client_address_city.as_deref(), UNKNOWN_CITY);
        let state = non_empty(order.client_address_state.as_deref(), UNKNOWN_STATE);
        let key = format!("{city}-{state}");
        let idx = match region_index.get(&key) {
            Some(&i) => i,
            None => {
                let i = regions.len();
                region_index.insert(key, i);
                regions.push(RegionStat::new(city, state));
                i
            }
        };
        regions[idx].revenue += price;
        regions[idx].deliveries += 1;

        // Daily series; orders never placed stay out of the chart entirely.
        if let Some(placed) = order.date_order {
            let label = day_label(placed);
            let idx = match day_index.get(&label) {
                Some(&i) => i,
                None => {
                    let i = sales_series.len();
                    day_index.insert(label.clone(), i);
                    sales_series.push(SalesPoint {
                        day: label,
                        projected: PROJECTED_DAILY,
                        realized: Decimal::ZERO,
                        cash_collected: Decimal::ZERO,
                    });
                    i
                }
            };
            sales_series[idx].realized += price;
            if order.payment() == Some(PaymentStatus::Collected) {
                sales_series[idx].cash_collected += cod;
            }
        }
    }

    let total_orders = i64::try_from(orders.len()).unwrap_or(i64::MAX);
    let (average_order_value, delivery_success_rate) = if total_orders > 0 {
        (
            revenue / Decimal::from(total_orders),
            Decimal::from(delivered) / Decimal::from(total_orders) * Decimal::ONE_HUNDRED,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let kpis = Kpis {
        total_orders,
        revenue,
        total_commission,
        cash_to_collect,
        cash_collected,
        remittance_pending: cash_collected,
        average_order_value,
        delivery_success_rate,
    };

    DashboardData {
        kpis,
        sales_series,
        regions,
        orders,
        expenses,
    }
}

fn non_empty(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

fn day_label(ts: DateTime<Utc>) -> String {
    format!("{:02} {}", ts.day(), PT_MONTHS[ts.month0() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rota_ops_core::models::status;
    use rust_decimal_macros::dec;

    fn order(id: i64) -> OrderRecord {
        let created = Utc.with_ymd_and_hms(2025, 11, 11, 10, 30, 0).unwrap();
        OrderRecord {
            id,
            created_at: created,
            order_number: format!("ORD-{id}"),
            order_status: status::PENDING.to_string(),
            order_final_price: None,
            order_quantity: 1,
            date_order: None,
            date_delivery: None,
            client_name: "Cliente".to_string(),
            client_email: None,
            client_document: None,
            client_phone: "(11) 90000-0000".to_string(),
            client_zip_code: None,
            client_address: None,
            client_address_number: None,
            client_address_district: None,
            client_address_city: None,
            client_address_state: None,
            client_address_comp: None,
            product_name: "Kit 3 Potes".to_string(),
            product_code: None,
            commission: None,
            producer_commission: None,
            logistic_operator: None,
            delivery_man: None,
            payment_status: "Pending".to_string(),
            cod_amount: None,
            notes: None,
        }
    }

    fn with(id: i64, build: impl FnOnce(&mut OrderRecord)) -> OrderRecord {
        let mut o = order(id);
        build(&mut o);
        o
    }

    #[test]
    fn empty_input_yields_all_zeros() {
        let data = aggregate(Vec::new(), Vec::new());

        assert_eq!(data.kpis.total_orders, 0);
        assert_eq!(data.kpis.revenue, Decimal::ZERO);
        assert_eq!(data.kpis.total_commission, Decimal::ZERO);
        assert_eq!(data.kpis.cash_to_collect, Decimal::ZERO);
        assert_eq!(data.kpis.cash_collected, Decimal::ZERO);
        assert_eq!(data.kpis.average_order_value, Decimal::ZERO);
        assert_eq!(data.kpis.delivery_success_rate, Decimal::ZERO);
        assert!(data.regions.is_empty());
        assert!(data.sales_series.is_empty());
    }

    #[test]
    fn revenue_and_count_are_conserved_across_regions() {
        let orders = vec![
            with(1, |o| {
                o.order_final_price = Some(dec!(100));
                o.client_address_city = Some("Recife".to_string());
                o.client_address_state = Some("PE".to_string());
            }),
            with(2, |o| {
                o.order_final_price = Some(dec!(250));
                o.client_address_city = Some("Olinda".to_string());
                o.client_address_state = Some("PE".to_string());
            }),
            with(3, |o| {
                o.order_final_price = Some(dec!(50));
                o.client_address_city = Some("Recife".to_string());
                o.client_address_state = Some("PE".to_string());
            }),
            with(4, |o| o.order_final_price = Some(dec!(75))),
        ];
        let total: Decimal = orders
            .iter()
            .map(|o| o.order_final_price.unwrap_or_default())
            .sum();

        let data = aggregate(orders, Vec::new());
        let region_revenue: Decimal = data.regions.iter().map(|r| r.revenue).sum();
        let region_count: i64 = data.regions.iter().map(|r| r.deliveries).sum();

        assert_eq!(region_revenue, total);
        assert_eq!(region_count, data.kpis.total_orders);
        assert_eq!(data.regions.len(), 3);
    }

    #[test]
    fn average_order_value() {
        let orders = vec![
            with(1, |o| o.order_final_price = Some(dec!(100))),
            with(2, |o| o.order_final_price = Some(dec!(200))),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.average_order_value, dec!(150));
    }

    #[test]
    fn delivery_rate_counts_entregue_and_completo() {
        let orders = vec![
            with(1, |o| o.order_status = status::DELIVERED.to_string()),
            with(2, |o| o.order_status = status::PENDING.to_string()),
            with(3, |o| o.order_status = status::COMPLETED.to_string()),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.delivery_success_rate.round_dp(2), dec!(66.67));
    }

    #[test]
    fn cod_partition_by_payment_status() {
        let orders = vec![
            with(1, |o| {
                o.payment_status = "Pending".to_string();
                o.cod_amount = Some(dec!(50));
            }),
            with(2, |o| {
                o.payment_status = "Collected".to_string();
                o.cod_amount = Some(dec!(30));
            }),
            with(3, |o| {
                o.payment_status = "Failed".to_string();
                o.cod_amount = Some(dec!(20));
            }),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.cash_to_collect, dec!(70));
        assert_eq!(data.kpis.cash_collected, dec!(30));
    }

    #[test]
    fn remittance_mirrors_collected_cash() {
        let orders = vec![
            with(1, |o| {
                o.payment_status = "Collected".to_string();
                o.cod_amount = Some(dec!(197));
            }),
            with(2, |o| {
                o.payment_status = "Remitted".to_string();
                o.cod_amount = Some(dec!(300));
            }),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.remittance_pending, data.kpis.cash_collected);
        assert_eq!(data.kpis.remittance_pending, dec!(197));
    }

    #[test]
    fn unknown_payment_status_lands_in_neither_partition() {
        let orders = vec![with(1, |o| {
            o.payment_status = "Estornado".to_string();
            o.cod_amount = Some(dec!(99));
        })];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.cash_to_collect, Decimal::ZERO);
        assert_eq!(data.kpis.cash_collected, Decimal::ZERO);
    }

    #[test]
    fn missing_date_order_skips_series_but_not_kpis() {
        let orders = vec![with(1, |o| o.order_final_price = Some(dec!(10)))];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.total_orders, 1);
        assert_eq!(data.kpis.revenue, dec!(10));
        assert!(data.sales_series.is_empty());
        assert_eq!(data.regions.len(), 1);
    }

    #[test]
    fn missing_amounts_count_as_zero() {
        let orders = vec![
            with(1, |o| o.order_final_price = Some(dec!(40))),
            with(2, |o| {
                o.order_final_price = None;
                o.commission = None;
                o.cod_amount = None;
            }),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.kpis.revenue, dec!(40));
        assert_eq!(data.kpis.total_commission, Decimal::ZERO);
    }

    #[test]
    fn daily_series_buckets_by_placement_day() {
        let day1 = Utc.with_ymd_and_hms(2025, 11, 11, 9, 0, 0).unwrap();
        let day1_later = Utc.with_ymd_and_hms(2025, 11, 11, 18, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2025, 11, 12, 9, 0, 0).unwrap();

        let orders = vec![
            with(1, |o| {
                o.date_order = Some(day1);
                o.order_final_price = Some(dec!(197));
                o.payment_status = "Collected".to_string();
                o.cod_amount = Some(dec!(197));
            }),
            with(2, |o| {
                o.date_order = Some(day1_later);
                o.order_final_price = Some(dec!(100));
                o.payment_status = "Pending".to_string();
                o.cod_amount = Some(dec!(100));
            }),
            with(3, |o| {
                o.date_order = Some(day2);
                o.order_final_price = Some(dec!(297));
            }),
        ];
        let data = aggregate(orders, Vec::new());

        assert_eq!(data.sales_series.len(), 2);
        let first = &data.sales_series[0];
        assert_eq!(first.day, "11 nov");
        assert_eq!(first.realized, dec!(297));
        assert_eq!(first.cash_collected, dec!(197));
        assert_eq!(first.projected, dec!(1000));

        let second = &data.sales_series[1];
        assert_eq!(second.day, "12 nov");
        assert_eq!(second.realized, dec!(297));
        assert_eq!(second.cash_collected, Decimal::ZERO);
    }

    #[test]
    fn empty_city_falls_back_to_sentinels() {
        let orders = vec![with(1, |o| {
            o.client_address_city = Some(String::new());
            o.client_address_state = None;
        })];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.regions[0].city, "Desconhecido");
        assert_eq!(data.regions[0].state, "UF");
    }

    #[test]
    fn same_city_name_in_different_states_stays_apart() {
        let orders = vec![
            with(1, |o| {
                o.client_address_city = Some("Santa Cruz".to_string());
                o.client_address_state = Some("RN".to_string());
                o.order_final_price = Some(dec!(10));
            }),
            with(2, |o| {
                o.client_address_city = Some("Santa Cruz".to_string());
                o.client_address_state = Some("PE".to_string());
                o.order_final_price = Some(dec!(20));
            }),
        ];
        let data = aggregate(orders, Vec::new());
        assert_eq!(data.regions.len(), 2);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let orders = vec![
            with(1, |o| {
                o.order_final_price = Some(dec!(197));
                o.date_order = Some(Utc.with_ymd_and_hms(2025, 11, 11, 9, 0, 0).unwrap());
                o.client_address_city = Some("Recife".to_string());
            }),
            with(2, |o| o.order_final_price = Some(dec!(297))),
        ];
        let first = aggregate(orders.clone(), Vec::new());
        let second = aggregate(orders, Vec::new());

        let a = serde_json::to_value(&first).unwrap();
        let b = serde_json::to_value(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn expenses_pass_through_untouched() {
        let expenses = vec![ExpenseRecord {
            id: 1,
            created_at: None,
            description: "Combustível".to_string(),
            amount: Some(dec!(120.50)),
            date: Utc.with_ymd_and_hms(2025, 11, 10, 0, 0, 0).unwrap(),
            category: "Logística".to_string(),
            kind: "saida".to_string(),
        }];
        let data = aggregate(Vec::new(), expenses.clone());
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].description, expenses[0].description);
    }
}
