use serde::{Deserialize, Serialize};

/// Currency selected by the user. Every formatter takes it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyType {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Chf,
    Inr,
    Mxn,
    Brl,
    Sek,
    Pln,
    Cny,
    Krw,
}

impl CurrencyType {
    pub const ALL: [CurrencyType; 14] = [
        CurrencyType::Usd,
        CurrencyType::Eur,
        CurrencyType::Gbp,
        CurrencyType::Cad,
        CurrencyType::Aud,
        CurrencyType::Jpy,
        CurrencyType::Chf,
        CurrencyType::Inr,
        CurrencyType::Mxn,
        CurrencyType::Brl,
        CurrencyType::Sek,
        CurrencyType::Pln,
        CurrencyType::Cny,
        CurrencyType::Krw,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyType::Usd => "USD",
            CurrencyType::Eur => "EUR",
            CurrencyType::Gbp => "GBP",
            CurrencyType::Cad => "CAD",
            CurrencyType::Aud => "AUD",
            CurrencyType::Jpy => "JPY",
            CurrencyType::Chf => "CHF",
            CurrencyType::Inr => "INR",
            CurrencyType::Mxn => "MXN",
            CurrencyType::Brl => "BRL",
            CurrencyType::Sek => "SEK",
            CurrencyType::Pln => "PLN",
            CurrencyType::Cny => "CNY",
            CurrencyType::Krw => "KRW",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyType::Usd => "$",
            CurrencyType::Eur => "€",
            CurrencyType::Gbp => "£",
            CurrencyType::Cad => "CA$",
            CurrencyType::Aud => "A$",
            CurrencyType::Jpy => "¥",
            CurrencyType::Chf => "CHF ",
            CurrencyType::Inr => "₹",
            CurrencyType::Mxn => "MX$",
            CurrencyType::Brl => "R$",
            CurrencyType::Sek => "kr ",
            CurrencyType::Pln => "zł ",
            CurrencyType::Cny => "CN¥",
            CurrencyType::Krw => "₩",
        }
    }

    /// Case-insensitive lookup by ISO code (CLI / config input).
    pub fn from_code(code: &str) -> Option<Self> {
        let upper = code.trim().to_uppercase();
        Self::ALL.into_iter().find(|c| c.code() == upper)
    }
}
