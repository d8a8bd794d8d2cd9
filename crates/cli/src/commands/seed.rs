//! Demo dataset seeding, inserted through the regular repositories.

use anyhow::{Context, Result};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rota_ops_core::models::{NewFutureDelivery, NewOrder};
use rota_ops_data::{DatabaseClient, Repositories};

use crate::commands::load_config;

struct SeedOrder {
    client: &'static str,
    phone: &'static str,
    product: &'static str,
    quantity: i32,
    price: Decimal,
    commission: Decimal,
    status: &'static str,
    payment: &'static str,
    cod: Decimal,
    day: u32,
    hour: u32,
    minute: u32,
}

fn seed_orders() -> Vec<SeedOrder> {
    vec![
        SeedOrder {
            client: "João Silva",
            phone: "(11) 99999-9999",
            product: "Kit 3 Potes",
            quantity: 1,
            price: dec!(197.00),
            commission: dec!(50.00),
            status: "Entregue",
            payment: "Collected",
            cod: dec!(197.00),
            day: 11,
            hour: 10,
            minute: 30,
        },
        SeedOrder {
            client: "Maria Oliveira",
            phone: "(21) 98888-8888",
            product: "Kit 5 Potes",
            quantity: 1,
            price: dec!(297.00),
            commission: dec!(80.00),
            status: "Em Trânsito",
            payment: "Pending",
            cod: dec!(297.00),
            day: 12,
            hour: 14,
            minute: 15,
        },
        SeedOrder {
            client: "Carlos Souza",
            phone: "(31) 97777-7777",
            product: "Kit 1 Pote",
            quantity: 2,
            price: dec!(194.00),
            commission: dec!(40.00),
            status: "Pendente",
            payment: "Pending",
            cod: dec!(194.00),
            day: 13,
            hour: 9,
            minute: 0,
        },
        SeedOrder {
            client: "Ana Costa",
            phone: "(41) 96666-6666",
            product: "Kit 3 Potes",
            quantity: 1,
            price: dec!(197.00),
            commission: dec!(50.00),
            status: "Cancelado",
            payment: "Failed",
            cod: dec!(0.00),
            day: 14,
            hour: 16,
            minute: 45,
        },
        SeedOrder {
            client: "Pedro Santos",
            phone: "(51) 95555-5555",
            product: "Kit 5 Potes",
            quantity: 1,
            price: dec!(297.00),
            commission: dec!(80.00),
            status: "Entregue",
            payment: "Remitted",
            cod: dec!(297.00),
            day: 15,
            hour: 11,
            minute: 20,
        },
        SeedOrder {
            client: "Lucia Ferreira",
            phone: "(61) 94444-4444",
            product: "Kit 1 Pote",
            quantity: 3,
            price: dec!(291.00),
            commission: dec!(60.00),
            status: "Agendado",
            payment: "Pending",
            cod: dec!(291.00),
            day: 16,
            hour: 13,
            minute: 10,
        },
        SeedOrder {
            client: "Marcos Lima",
            phone: "(71) 93333-3333",
            product: "Kit 3 Potes",
            quantity: 1,
            price: dec!(197.00),
            commission: dec!(50.00),
            status: "Em Trânsito",
            payment: "Pending",
            cod: dec!(197.00),
            day: 17,
            hour: 15,
            minute: 30,
        },
        SeedOrder {
            client: "Fernanda Alves",
            phone: "(81) 92222-2222",
            product: "Kit 5 Potes",
            quantity: 1,
            price: dec!(297.00),
            commission: dec!(80.00),
            status: "Pendente",
            payment: "Pending",
            cod: dec!(297.00),
            day: 18,
            hour: 10,
            minute: 0,
        },
    ]
}

/// Inserts the demo orders and future deliveries.
///
/// # Errors
/// Returns an error if the database connection or any insert fails.
pub async fn run_seed() -> Result<()> {
    let config = load_config();
    let db = DatabaseClient::from_config(&config.database).await?;
    let repos = Repositories::new(db.pool());

    tracing::info!("seeding database");

    for (i, seed) in seed_orders().into_iter().enumerate() {
        let placed = Utc
            .with_ymd_and_hms(2025, 11, seed.day, seed.hour, seed.minute, 0)
            .single()
            .context("invalid seed timestamp")?;

        let order = NewOrder {
            client_name: seed.client.to_string(),
            client_phone: seed.phone.to_string(),
            product_name: seed.product.to_string(),
            product_code: Some("MOCK-PROD".to_string()),
            order_quantity: seed.quantity,
            order_final_price: Some(seed.price),
            order_status: Some(seed.status.to_string()),
            date_order: Some(placed),
            date_delivery: Some(placed + Duration::days(2)),
            commission: Some(seed.commission),
            payment_status: Some(seed.payment.to_string()),
            cod_amount: Some(seed.cod),
            client_address: Some("Endereço Mock".to_string()),
            client_address_city: Some("Cidade Mock".to_string()),
            client_address_state: Some("UF".to_string()),
            logistic_operator: Some("Logzz Logística".to_string()),
            delivery_man: Some("Entregador Mock".to_string()),
            notes: None,
        };

        // Stagger the insert clock so generated order numbers stay unique.
        let stamp = Utc::now() + Duration::milliseconds(i64::try_from(i).unwrap_or_default());
        repos.orders.insert(&order, stamp).await?;
    }
    tracing::info!("orders seeded");

    let future = vec![
        NewFutureDelivery {
            client_name: "Roberto Gomes".to_string(),
            client_phone: "(11) 91111-1111".to_string(),
            product_name: "Kit 3 Potes".to_string(),
            quantity: 1,
            delivery_date: Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).single(),
            cod_amount: Some(dec!(197.00)),
            notes: Some("Ligar antes".to_string()),
        },
        NewFutureDelivery {
            client_name: "Camila Dias".to_string(),
            client_phone: "(21) 92222-2222".to_string(),
            product_name: "Kit 5 Potes".to_string(),
            quantity: 1,
            delivery_date: Utc.with_ymd_and_hms(2025, 11, 21, 14, 0, 0).single(),
            cod_amount: Some(dec!(297.00)),
            notes: Some("Portaria".to_string()),
        },
    ];

    for delivery in &future {
        repos.future_deliveries.insert(delivery, Utc::now()).await?;
    }
    tracing::info!("future deliveries seeded");

    Ok(())
}
