//! A rendered receipt travelling through the gateway: what the UI shell
//! does after a transaction is finalized.

use chrono::{TimeZone, Utc};

use copra_core::receipt_text::{render_receipt, ReceiptLayout};
use copra_core::Receipt;
use copra_printer::{MockPrinter, PrinterPort};

fn finalized_receipt() -> Receipt {
    Receipt {
        id: "00000000-0000-0000-0000-000000000001".to_string(),
        receipt_number: "RCT-0001".to_string(),
        customer_name: "Juan Cruz".to_string(),
        address: "Barangay 4".to_string(),
        unit_price: 8.5,
        gross_weight: 1000.0,
        deduction_weight: 50.0,
        transport_fee: 100.0,
        total: 8175.0,
        created_at: Utc.with_ymd_and_hms(2026, 8, 6, 9, 15, 0).unwrap(),
    }
}

#[tokio::test]
async fn rendered_receipt_reaches_printer() {
    let layout = ReceiptLayout {
        store_name: "COPRA TRADING".to_string(),
        address_lines: vec!["Poblacion, Quezon".to_string()],
        paper_width: 32,
        footer: Some("Thank you!".to_string()),
    };
    let text = render_receipt(&finalized_receipt(), &layout);

    let printer = MockPrinter::new();
    let devices = printer.list_paired_devices().await.unwrap();
    assert!(printer.connect(&devices[0].address).await.unwrap());
    assert!(printer.print_text(&text).await.unwrap());

    let printed = printer.printed();
    assert_eq!(printed.len(), 1);
    assert!(printed[0].contains("COPRA TRADING"));
    assert!(printed[0].contains("RCT-0001"));
    assert!(printed[0].contains("8175.00"));

    assert!(printer.disconnect().await.unwrap());
}
