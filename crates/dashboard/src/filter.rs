//! In-memory filters applied before aggregation.
//!
//! Date comparison is calendar-day inclusive on both ends; an order's
//! effective date falls back from delivery to placement to row creation.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use rota_ops_core::models::{ExpenseRecord, OrderRecord};

/// Status value that disables status filtering in the orders list.
pub const ALL_STATUSES: &str = "Todos";

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The calendar month containing `date`, first day through last day.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Global dashboard filter: optional date range plus free-text search.
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    pub range: Option<DateRange>,
    pub search: String,
}

impl DashboardFilter {
    /// Whether an order survives the filter. Search matches the client name,
    /// the order number (case-insensitive), or the decimal id.
    #[must_use]
    pub fn matches_order(&self, order: &OrderRecord) -> bool {
        let in_range = self
            .range
            .map_or(true, |r| r.contains(order.effective_date().date_naive()));
        in_range && self.matches_search(order)
    }

    fn matches_search(&self, order: &OrderRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        order.client_name.to_lowercase().contains(&needle)
            || order.order_number.to_lowercase().contains(&needle)
            || order.id.to_string().contains(&self.search)
    }

    /// Whether an expense falls inside the date range. Search does not apply
    /// to expenses.
    #[must_use]
    pub fn matches_expense(&self, expense: &ExpenseRecord) -> bool {
        self.range
            .map_or(true, |r| r.contains(expense.date.date_naive()))
    }

    #[must_use]
    pub fn apply_orders(&self, orders: Vec<OrderRecord>) -> Vec<OrderRecord> {
        orders
            .into_iter()
            .filter(|o| self.matches_order(o))
            .collect()
    }

    #[must_use]
    pub fn apply_expenses(&self, expenses: Vec<ExpenseRecord>) -> Vec<ExpenseRecord> {
        expenses
            .into_iter()
            .filter(|e| self.matches_expense(e))
            .collect()
    }
}

/// Status + free-text filter for the orders list view. Search matches client
/// name, phone, or product name.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub status: Option<String>,
    pub search: String,
}

impl ListFilter {
    #[must_use]
    pub fn matches(&self, order: &OrderRecord) -> bool {
        let status_ok = match self.status.as_deref() {
            None | Some(ALL_STATUSES) => true,
            Some(s) => order.order_status == s,
        };
        if !status_ok {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        order.client_name.to_lowercase().contains(&needle)
            || order.client_phone.contains(&self.search)
            || order.product_name.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rota_ops_core::models::status;

    fn order(id: i64) -> OrderRecord {
        OrderRecord {
            id,
            created_at: Utc.with_ymd_and_hms(2025, 11, 5, 12, 0, 0).unwrap(),
            order_number: format!("ORD-{id}"),
            order_status: status::SCHEDULED.to_string(),
            order_final_price: None,
            order_quantity: 1,
            date_order: None,
            date_delivery: None,
            client_name: "Maria Oliveira".to_string(),
            client_email: None,
            client_document: None,
            client_phone: "(21) 98888-8888".to_string(),
            client_zip_code: None,
            client_address: None,
            client_address_number: None,
            client_address_district: None,
            client_address_city: None,
            client_address_state: None,
            client_address_comp: None,
            product_name: "Kit 5 Potes".to_string(),
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

    fn nov_range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        }
    }

    #[test]
    fn month_of_spans_first_to_last_day() {
        let range = DateRange::month_of(NaiveDate::from_ymd_opt(2025, 11, 17).unwrap());
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());

        let feb = DateRange::month_of(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = nov_range();
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));
    }

    #[test]
    fn order_date_falls_back_delivery_then_order_then_created() {
        let filter = DashboardFilter {
            range: Some(nov_range()),
            search: String::new(),
        };

        // Only created_at (Nov 5): in range.
        assert!(filter.matches_order(&order(1)));

        // Delivery date wins over placement date.
        let mut o = order(2);
        o.date_order = Some(Utc.with_ymd_and_hms(2025, 11, 10, 0, 0, 0).unwrap());
        o.date_delivery = Some(Utc.with_ymd_and_hms(2025, 12, 2, 0, 0, 0).unwrap());
        assert!(!filter.matches_order(&o));
    }

    #[test]
    fn search_matches_name_number_and_id() {
        let filter = |search: &str| DashboardFilter {
            range: None,
            search: search.to_string(),
        };
        let o = order(731);

        assert!(filter("maria").matches_order(&o));
        assert!(filter("ord-731").matches_order(&o));
        assert!(filter("731").matches_order(&o));
        assert!(!filter("joão").matches_order(&o));
        assert!(filter("").matches_order(&o));
    }

    #[test]
    fn expense_filter_uses_expense_date() {
        let filter = DashboardFilter {
            range: Some(nov_range()),
            search: "ignored for expenses".to_string(),
        };
        let expense = ExpenseRecord {
            id: 1,
            created_at: None,
            description: "Frete".to_string(),
            amount: None,
            date: Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap(),
            category: "Logística".to_string(),
            kind: "saida".to_string(),
        };
        assert!(filter.matches_expense(&expense));

        let mut outside = expense.clone();
        outside.date = Utc.with_ymd_and_hms(2025, 12, 20, 0, 0, 0).unwrap();
        assert!(!filter.matches_expense(&outside));
    }

    #[test]
    fn list_filter_by_status_and_text() {
        let o = order(1);

        let todos = ListFilter {
            status: Some(ALL_STATUSES.to_string()),
            search: String::new(),
        };
        assert!(todos.matches(&o));

        let scheduled = ListFilter {
            status: Some(status::SCHEDULED.to_string()),
            search: "98888".to_string(),
        };
        assert!(scheduled.matches(&o));

        let delivered = ListFilter {
            status: Some(status::DELIVERED.to_string()),
            search: String::new(),
        };
        assert!(!delivered.matches(&o));

        let by_product = ListFilter {
            status: None,
            search: "kit 5".to_string(),
        };
        assert!(by_product.matches(&o));
    }
}
