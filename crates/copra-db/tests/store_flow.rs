//! End-to-end flow over an in-memory store: the sequence a real shift
//! follows, from login through saving defaults to finalizing a receipt.

use copra_core::settlement::{format_amount, parse_amount, settlement_total};
use copra_core::ReceiptDraft;
use copra_db::{Store, StoreConfig};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[tokio::test]
async fn full_shift_flow() {
    init_tracing();

    let store = Store::new(StoreConfig::in_memory());

    // Operator logs in with seeded credentials.
    assert!(store.login("admin", "admin123").await.unwrap());

    // Admin saves the day's defaults.
    store.save_defaults("8.50", "100").await.unwrap();
    let defaults = store.get_defaults().await.unwrap();
    assert_eq!(defaults.unit_price, "8.50");
    assert_eq!(defaults.transport_fee, "100");

    // Transaction form: weigh, compute, finalize.
    let unit_price = parse_amount("unit_price", &defaults.unit_price).unwrap();
    let transport_fee = parse_amount("transport_fee", &defaults.transport_fee).unwrap();
    let (gross, deduction) = (1000.0, 50.0);
    let total = settlement_total(gross, deduction, unit_price, transport_fee);
    assert_eq!(format_amount(total), "8175.00");

    let receipt_number = store.next_receipt_number().await.unwrap();
    assert_eq!(receipt_number, "RCT-0001");

    store
        .save_receipt(&ReceiptDraft {
            receipt_number: receipt_number.clone(),
            customer_name: "Juan Cruz".to_string(),
            address: "Barangay 4".to_string(),
            unit_price,
            gross_weight: gross,
            deduction_weight: deduction,
            transport_fee,
            total,
        })
        .await
        .unwrap();

    // Ledger reflects the transaction; numbering has moved on.
    let receipts = store.list_receipts().await.unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].receipt_number, receipt_number);
    assert!((receipts[0].total - 8175.0).abs() < 1e-9);

    assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0002");
}

#[tokio::test]
async fn defaults_survive_while_receipts_accumulate() {
    init_tracing();

    let store = Store::new(StoreConfig::in_memory());
    store.save_defaults("7.75", "60").await.unwrap();

    for i in 1..=3u64 {
        let number = store.next_receipt_number().await.unwrap();
        store
            .save_receipt(&ReceiptDraft {
                receipt_number: number,
                customer_name: format!("Customer {}", i),
                address: String::new(),
                unit_price: 7.75,
                gross_weight: 100.0 * i as f64,
                deduction_weight: 0.0,
                transport_fee: 60.0,
                total: settlement_total(100.0 * i as f64, 0.0, 7.75, 60.0),
            })
            .await
            .unwrap();
    }

    assert_eq!(store.list_receipts().await.unwrap().len(), 3);
    assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0004");

    let defaults = store.get_defaults().await.unwrap();
    assert_eq!(defaults.unit_price, "7.75");
    assert_eq!(defaults.transport_fee, "60");
}
