use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, Luma};
use qrcode::QrCode;
use std::io::Cursor;

use crate::errors::Errors;
use crate::models::invoice::Invoice;

/// UPI payment-request link for the stored invoice total.
pub fn upi_payment_link(upi_id: &str, payee_name: &str, amount: f64) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR",
        upi_id,
        urlencoding::encode(payee_name),
        amount
    )
}

/// Render arbitrary text as a base64-encoded QR PNG, suitable for an
/// `<img src="data:image/png;base64,...">` tag.
pub fn qr_png_base64(data: &str) -> Result<String, Errors> {
    let code = match QrCode::new(data) {
        Ok(code) => code,
        Err(_) => return Err(Errors::new(&[("qr", "failed to encode payload")])),
    };

    let image = code.render::<Luma<u8>>().build();
    let dynamic_image = DynamicImage::ImageLuma8(image);

    let mut buffer = Cursor::new(Vec::new());
    if dynamic_image
        .write_to(&mut buffer, image::ImageOutputFormat::Png)
        .is_err()
    {
        return Err(Errors::new(&[("qr", "failed to render png")]));
    }

    Ok(general_purpose::STANDARD.encode(buffer.get_ref()))
}

/// Plain-text invoice summary sent over WhatsApp.
pub fn whatsapp_share_message(invoice: &Invoice, shop_name: &str) -> String {
    let items = invoice
        .items
        .0
        .iter()
        .map(|item| {
            format!(
                "{} ({} x Rs{} + Rs{} labour) = Rs{}",
                item.name,
                item.qty,
                item.price,
                item.labour_charges,
                item.line_total()
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "*{}*\nInvoice #{}\nCustomer: {}\nContact: {}\nDate: {}\n\n{}\n\nSubtotal: Rs{}\nTax: {}%\nDiscount: Rs{}\n*Total: Rs{}*",
        shop_name,
        invoice.id,
        invoice.customer_name,
        invoice.customer_contact,
        invoice.date,
        items,
        invoice.subtotal,
        invoice.tax,
        invoice.discount,
        invoice.total
    )
}

/// wa.me deep link for the customer's contact number. Everything but digits
/// is stripped from the number before it goes into the path.
pub fn whatsapp_share_link(contact: &str, message: &str) -> String {
    let phone = contact
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>();

    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::LineItem;
    use chrono::NaiveDate;
    use sqlx::types::Json;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: "INV-20250101-001".to_string(),
            customer_name: "Asha Verma".to_string(),
            customer_contact: "+91 98000-00000".to_string(),
            customer_address: None,
            vehicle_name: None,
            vehicle_number: Some("WB26A1234".to_string()),
            items: Json(vec![LineItem {
                name: "Oil change".to_string(),
                qty: 1.0,
                price: 450.0,
                labour_charges: 0.0,
            }]),
            subtotal: 450.0,
            tax: 18.0,
            discount: 0.0,
            total: 531.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn upi_link_carries_payee_and_amount() {
        let link = upi_payment_link("shop@axl", "The Wrench King", 275.0);

        assert_eq!(
            link,
            "upi://pay?pa=shop@axl&pn=The%20Wrench%20King&am=275&cu=INR"
        );
    }

    #[test]
    fn qr_payload_renders_to_png() {
        let encoded = qr_png_base64("upi://pay?pa=shop@axl&am=275&cu=INR").unwrap();
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();

        // PNG signature
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn share_message_lists_items_and_totals() {
        let message = whatsapp_share_message(&sample_invoice(), "The Wrench King");

        assert!(message.contains("Invoice #INV-20250101-001"));
        assert!(message.contains("Oil change (1 x Rs450 + Rs0 labour) = Rs450"));
        assert!(message.contains("*Total: Rs531*"));
    }

    #[test]
    fn share_link_strips_non_digits_from_the_contact() {
        let link = whatsapp_share_link("+91 98000-00000", "hello");

        assert_eq!(link, "https://wa.me/919800000000?text=hello");
    }
}
