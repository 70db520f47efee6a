//! Load debt account snapshots from CSV

use super::{AccountKind, Debt};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row for an account balance snapshot
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AccountType")]
    account_type: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "MinPayment")]
    min_payment: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: Option<f64>,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt, Box<dyn Error>> {
        let kind = match self.account_type.as_str() {
            "Credit Card" | "credit" => AccountKind::CreditCard,
            "Loan" | "loan" => AccountKind::Loan,
            "Other" | "other" => AccountKind::Other,
            other => return Err(format!("Unknown AccountType: {}", other).into()),
        };

        if self.balance < 0.0 {
            return Err(format!("Negative balance for account {}: {}", self.name, self.balance).into());
        }
        if self.min_payment < 0.0 {
            return Err(format!(
                "Negative minimum payment for account {}: {}",
                self.name, self.min_payment
            )
            .into());
        }

        Ok(Debt::from_snapshot(
            self.name,
            kind,
            self.balance,
            self.min_payment,
            self.annual_rate,
        ))
    }
}

/// Load all debt accounts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let debt = row.to_debt()?;
        debts.push(debt);
    }

    Ok(debts)
}

/// Load debt accounts from any reader (e.g., string buffer, network stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let debt = row.to_debt()?;
        debts.push(debt);
    }

    Ok(debts)
}
