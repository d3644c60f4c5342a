use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::errors::Errors;
use crate::functions;
use crate::logger::Logger;
use crate::models::invoice::Invoice;
use crate::models::requests::invoice::{RequestCreateInvoice, RequestGetInvoices};
use crate::models::responses::DefaultResponse;
use crate::utils;

fn shop_name() -> String {
    std::env::var("SHOP_NAME").unwrap_or_else(|_| "The Wrench King".to_string())
}

fn upi_id() -> String {
    std::env::var("UPI_ID").unwrap_or_else(|_| "8276076909-2@axl".to_string())
}

pub async fn get_all(
    State(db): State<PgPool>,
    Query(query): Query<RequestGetInvoices>,
) -> Response {
    let search = query.search.as_deref().map(str::trim).unwrap_or("");

    let result = if search.is_empty() {
        Invoice::get_all(&db).await
    } else {
        Invoice::search(&db, search).await
    };

    let invoices = match result {
        Ok(invoices) => invoices,
        Err(err) => {
            let body = DefaultResponse::error("get invoices failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let body = DefaultResponse::ok("get invoices success")
        .with_data(json!(invoices))
        .into_json();

    (StatusCode::OK, body).into_response()
}

pub async fn create(
    State(db): State<PgPool>,
    Json(body): Json<RequestCreateInvoice>,
) -> Response {
    match validator::Validate::validate(&body) {
        Ok(_) => (),
        Err(err) => {
            let value = Errors::into_string(err);

            let body = DefaultResponse::error(value.as_str(), "".to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let today = Utc::now().date_naive();
    let day_part = today.format("%Y%m%d").to_string();

    // Snapshot of today's ids. A concurrent create can read the same snapshot
    // before either row lands and take the same sequence number.
    let existing_ids = match Invoice::get_ids_for_day(&db, &day_part).await {
        Ok(ids) => ids,
        Err(err) => {
            let body = DefaultResponse::error("create invoice failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let id = functions::next_invoice_number(&today, &existing_ids);
    let (subtotal, total) = functions::compute_totals(&body.items, body.tax, body.discount);

    let invoice = match Invoice::create(
        &db,
        &id,
        &body.customer_name,
        &body.customer_contact,
        &body.customer_address,
        &body.vehicle_name,
        &body.vehicle_number,
        &body.items,
        &subtotal,
        &body.tax,
        &body.discount,
        &total,
        &today,
    )
    .await
    {
        Ok(invoice) => invoice,
        Err(err) => {
            Logger::new(format!("{:?}", err)).log();

            let body = DefaultResponse::error("create invoice failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let body = DefaultResponse::ok("create invoice success")
        .with_data(json!(invoice))
        .into_json();

    (StatusCode::CREATED, body).into_response()
}

pub async fn remove(State(db): State<PgPool>, Path((id,)): Path<(String,)>) -> Response {
    match Invoice::delete_by_id(&db, &id).await {
        Ok(_) => (),
        Err(err) => {
            Logger::new(format!("{:?}", err)).log();

            let body = DefaultResponse::error("delete invoice failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let body = DefaultResponse::ok("delete invoice success").into_json();

    (StatusCode::OK, body).into_response()
}

pub async fn print(State(db): State<PgPool>, Path((id,)): Path<(String,)>) -> Response {
    let invoice = match Invoice::get_by_id(&db, &id).await {
        Ok(invoice) => invoice,
        Err(sqlx::Error::RowNotFound) => {
            let body = DefaultResponse::error("invoice not found", id).into_json();

            return (StatusCode::NOT_FOUND, body).into_response();
        }
        Err(err) => {
            let body = DefaultResponse::error("get invoice failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let shop_name = shop_name();
    let upi_link = utils::upi_payment_link(&upi_id(), &shop_name, invoice.total);

    let qr_base64 = match utils::qr_png_base64(&upi_link) {
        Ok(qr_base64) => qr_base64,
        Err(err) => {
            Logger::new(format!("{:?}", err)).log();

            return err.into_response();
        }
    };

    Html(printable_invoice(&invoice, &shop_name, &qr_base64)).into_response()
}

pub async fn share(State(db): State<PgPool>, Path((id,)): Path<(String,)>) -> Response {
    let invoice = match Invoice::get_by_id(&db, &id).await {
        Ok(invoice) => invoice,
        Err(sqlx::Error::RowNotFound) => {
            let body = DefaultResponse::error("invoice not found", id).into_json();

            return (StatusCode::NOT_FOUND, body).into_response();
        }
        Err(err) => {
            let body = DefaultResponse::error("get invoice failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let message = utils::whatsapp_share_message(&invoice, &shop_name());
    let url = utils::whatsapp_share_link(&invoice.customer_contact, &message);

    let body = DefaultResponse::ok("share invoice success")
        .with_data(json!({ "message": message, "url": url }))
        .into_json();

    (StatusCode::OK, body).into_response()
}

pub async fn dashboard(State(db): State<PgPool>) -> Response {
    let summary = match Invoice::daily_summary(&db).await {
        Ok(summary) => summary,
        Err(err) => {
            let body = DefaultResponse::error("get dashboard failed", err.to_string()).into_json();

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let total_invoices = summary.iter().map(|row| row.count).sum::<i64>();
    let total_revenue = summary.iter().map(|row| row.revenue).sum::<f64>();

    let body = DefaultResponse::ok("get dashboard success")
        .with_data(json!({
            "totalInvoices": total_invoices,
            "totalRevenue": total_revenue,
            "byDate": summary,
        }))
        .into_json();

    (StatusCode::OK, body).into_response()
}

fn printable_invoice(invoice: &Invoice, shop_name: &str, qr_base64: &str) -> String {
    let rows = invoice
        .items
        .0
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>₹{}</td><td>₹{}</td><td>₹{}</td></tr>",
                item.name,
                item.qty,
                item.price,
                item.labour_charges,
                item.line_total()
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    let tax_amount = invoice.subtotal * invoice.tax / 100.0;

    format!(
        r#"<html>
  <head>
    <title>Invoice #{id}</title>
    <style>
      @page {{ size: A4; margin: 12mm; }}
      body {{ font-family: Arial, sans-serif; color: #333; font-size: 13px; }}
      .header {{ display: flex; justify-content: space-between; border-bottom: 2px solid #000; padding-bottom: 6px; }}
      .bill-to {{ display: flex; justify-content: space-between; margin: 10px 0; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 10px; }}
      th, td {{ border: 1px solid #aaa; padding: 6px; text-align: left; }}
      th {{ background: #f2f2f2; }}
      .summary-qr {{ display: flex; justify-content: space-between; margin-top: 20px; }}
      .summary {{ width: 45%; }}
      .summary td {{ border: none; }}
      .summary tr.total td {{ font-weight: bold; border-top: 2px solid #000; }}
      .qr-box {{ text-align: center; width: 45%; }}
      .qr-box img {{ width: 160px; height: 160px; }}
      .footer {{ margin-top: 25px; text-align: center; font-size: 11px; color: #555; border-top: 1px dashed #aaa; padding-top: 6px; }}
    </style>
  </head>
  <body>
    <div class="header">
      <h2>{shop_name}</h2>
      <div>
        <p><b>No:</b> {id}</p>
        <p><b>Date:</b> {date}</p>
      </div>
    </div>
    <div class="bill-to">
      <div>
        <h3>Billed To:</h3>
        <p><b>{customer_name}</b></p>
        <p>Contact: {customer_contact}</p>
        <p>Address: {customer_address}</p>
        <p>Vehicle: {vehicle_name} - {vehicle_number}</p>
      </div>
    </div>
    <table>
      <thead>
        <tr><th>Description</th><th>Qty</th><th>Unit Price</th><th>Labour</th><th>Total</th></tr>
      </thead>
      <tbody>
{rows}
      </tbody>
    </table>
    <div class="summary-qr">
      <div class="summary">
        <table>
          <tr><td>Subtotal:</td><td>₹{subtotal}</td></tr>
          <tr><td>CGST + SGST ({tax}%):</td><td>₹{tax_amount:.2}</td></tr>
          <tr><td>Discount:</td><td>₹{discount}</td></tr>
          <tr class="total"><td>Total:</td><td>₹{total}</td></tr>
        </table>
      </div>
      <div class="qr-box">
        <h3>Scan to Pay</h3>
        <img src="data:image/png;base64,{qr_base64}" alt="Payment QR" />
      </div>
    </div>
    <div class="footer">
      <p>Thank you for choosing <b>{shop_name}</b>!</p>
      <p>This is a computer-generated invoice and does not require a signature.</p>
    </div>
  </body>
</html>"#,
        id = invoice.id,
        date = invoice.date,
        shop_name = shop_name,
        customer_name = invoice.customer_name,
        customer_contact = invoice.customer_contact,
        customer_address = invoice.customer_address.as_deref().unwrap_or(""),
        vehicle_name = invoice.vehicle_name.as_deref().unwrap_or(""),
        vehicle_number = invoice.vehicle_number.as_deref().unwrap_or(""),
        rows = rows,
        subtotal = invoice.subtotal,
        tax = invoice.tax,
        tax_amount = tax_amount,
        discount = invoice.discount,
        total = invoice.total,
        qr_base64 = qr_base64,
    )
}
