use serde::Deserialize;
use validator_derive::Validate;

use crate::models::item::LineItem;

/// Create payload as submitted by the billing form. The server assigns the
/// id, the date, and the stored totals; any client-side figures are ignored.
#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreateInvoice {
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(length(min = 1))]
    pub customer_contact: String,
    pub customer_address: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_number: Option<String>,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
}

#[derive(Deserialize, Debug)]
pub struct RequestGetInvoices {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn deserializes_the_form_payload() {
        let body: RequestCreateInvoice = serde_json::from_str(
            r#"{
                "customerName": "Asha Verma",
                "customerContact": "+91 9800000000",
                "vehicleNumber": "WB26A1234",
                "items": [{"name": "Oil change", "qty": 1, "price": 450}],
                "tax": 18,
                "subtotal": 450,
                "total": 531
            }"#,
        )
        .unwrap();

        assert_eq!(body.customer_name, "Asha Verma");
        assert_eq!(body.items[0].labour_charges, 0.0);
        assert_eq!(body.discount, 0.0);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn empty_customer_name_fails_validation() {
        let body: RequestCreateInvoice = serde_json::from_str(
            r#"{"customerName": "", "customerContact": "123", "items": []}"#,
        )
        .unwrap();

        assert!(body.validate().is_err());
    }
}
