//! Row and payload types for companies and invoices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entry of `GET /companies`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Company plus the ids of the invoices it owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

impl CompanyDetail {
    pub fn new(company: Company, invoices: Vec<i32>) -> Self {
        CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }
    }
}

/// Entry of `GET /invoices`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Invoice joined with its owning company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

/// Body of `POST /companies` and `PUT /companies/:code`. A `code` field, if sent, is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /invoices`.
#[derive(Clone, Debug, Deserialize)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Body of `PUT /invoices/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct InvoiceUpdate {
    pub amt: f64,
    pub paid: bool,
}

/// New `paid_date` for an invoice update.
///
/// Un-paying always clears the date. Paying an invoice without a date stamps `today`;
/// paying one that already has a date keeps it.
pub fn derive_paid_date(previous: Option<NaiveDate>, paid: bool, today: NaiveDate) -> Option<NaiveDate> {
    if !paid {
        return None;
    }
    previous.or(Some(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn paying_unpaid_invoice_stamps_today() {
        let today = date(2026, 10, 16);
        assert_eq!(derive_paid_date(None, true, today), Some(today));
    }

    #[test]
    fn unpaying_clears_date() {
        let today = date(2026, 10, 16);
        assert_eq!(derive_paid_date(Some(date(2020, 3, 3)), false, today), None);
        assert_eq!(derive_paid_date(None, false, today), None);
    }

    #[test]
    fn repaying_keeps_existing_date() {
        // An existing date combined with paid=true must keep the date rather than restamp it.
        let paid_on = date(2019, 2, 2);
        assert_eq!(derive_paid_date(Some(paid_on), true, date(2026, 10, 16)), Some(paid_on));
    }

    #[test]
    fn dates_serialize_as_iso_days() {
        let inv = Invoice {
            id: 1,
            comp_code: "apple".into(),
            amt: 200.0,
            paid: true,
            add_date: date(2019, 2, 2),
            paid_date: None,
        };
        let v = serde_json::to_value(&inv).unwrap();
        assert_eq!(v["add_date"], "2019-02-02");
        assert!(v["paid_date"].is_null());
    }

    #[test]
    fn company_payload_ignores_code_and_defaults_description() {
        let p: CompanyPayload = serde_json::from_value(serde_json::json!({"code": "x", "name": "Eataly"})).unwrap();
        assert_eq!(p.name, "Eataly");
        assert!(p.description.is_none());
    }
}
