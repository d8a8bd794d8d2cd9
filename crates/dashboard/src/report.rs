//! Plain-text dashboard report for the CLI.

use rust_decimal::Decimal;

use crate::aggregate::DashboardData;
use crate::financial::cash_flow;

/// Formats a Decimal as Brazilian currency: `R$ 1.234,56`.
#[must_use]
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();
    let text = format!("{abs:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {int_grouped},{frac_part}")
}

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format(data: &DashboardData) -> String {
        let mut output = String::new();
        let kpis = &data.kpis;

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    PAINEL DE OPERAÇÕES                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("Resumo\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("Pedidos:               {}\n", kpis.total_orders));
        output.push_str(&format!(
            "Faturamento:           {}\n",
            format_brl(kpis.revenue)
        ));
        output.push_str(&format!(
            "Comissão Total:        {}\n",
            format_brl(kpis.total_commission)
        ));
        output.push_str(&format!(
            "Ticket Médio:          {}\n",
            format_brl(kpis.average_order_value)
        ));
        output.push_str(&format!(
            "Taxa de Entrega:       {:.2}%\n",
            kpis.delivery_success_rate
        ));
        output.push('\n');

        output.push_str("Dinheiro na Rua\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "A Coletar:             {}\n",
            format_brl(kpis.cash_to_collect)
        ));
        output.push_str(&format!(
            "Em Caixa (Agentes):    {}\n",
            format_brl(kpis.cash_collected)
        ));
        output.push_str(&format!(
            "A Repassar:            {}\n",
            format_brl(kpis.remittance_pending)
        ));
        output.push('\n');

        let flow = cash_flow(&data.orders, &data.expenses);
        output.push_str("Fluxo de Caixa\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Entradas:              {}\n",
            format_brl(flow.inflows)
        ));
        output.push_str(&format!(
            "Saídas:                {}\n",
            format_brl(flow.outflows)
        ));
        output.push_str(&format!("Saldo Líquido:         {}\n", format_brl(flow.net)));
        output.push_str(&format!(
            "A Receber:             {}\n",
            format_brl(flow.pending_commission)
        ));
        output.push('\n');

        if !data.regions.is_empty() {
            output.push_str("Regiões\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for region in &data.regions {
                output.push_str(&format!(
                    "{:<28} {:>14}  {:>5} entregas\n",
                    format!("{}/{}", region.city, region.state),
                    format_brl(region.revenue),
                    region.deliveries
                ));
            }
            output.push('\n');
        }

        if !data.sales_series.is_empty() {
            output.push_str("Vendas por Dia\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for point in &data.sales_series {
                output.push_str(&format!(
                    "{:<8} realizado {:>14}  coletado {:>14}\n",
                    point.day,
                    format_brl(point.realized),
                    format_brl(point.cash_collected)
                ));
            }
            output.push('\n');
        }

        output
    }
}
