// ============================================================================
// Currency Families
// Closed set of supported currency families
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A currency family: one cryptocurrency or stablecoin sharing a single
/// atomic unit.
///
/// The set is fixed at build time. Every denomination in the registry belongs
/// to exactly one family, and values of different families never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyFamily {
    Bitcoin,
    Ethereum,
    BinanceCoin,
    Solana,
    Xrp,
    Cardano,
    Avalanche,
    Dogecoin,
    Polkadot,
    Polygon,
    Usdc,
    Usdt,
}

impl CurrencyFamily {
    /// Every family, in registry listing order.
    pub const ALL: [CurrencyFamily; 12] = [
        CurrencyFamily::Bitcoin,
        CurrencyFamily::Ethereum,
        CurrencyFamily::BinanceCoin,
        CurrencyFamily::Solana,
        CurrencyFamily::Xrp,
        CurrencyFamily::Cardano,
        CurrencyFamily::Avalanche,
        CurrencyFamily::Dogecoin,
        CurrencyFamily::Polkadot,
        CurrencyFamily::Polygon,
        CurrencyFamily::Usdc,
        CurrencyFamily::Usdt,
    ];

    /// Canonical ticker symbol, matched case-sensitively by the resolver.
    pub const fn symbol(self) -> &'static str {
        match self {
            CurrencyFamily::Bitcoin => "BTC",
            CurrencyFamily::Ethereum => "ETH",
            CurrencyFamily::BinanceCoin => "BNB",
            CurrencyFamily::Solana => "SOL",
            CurrencyFamily::Xrp => "XRP",
            CurrencyFamily::Cardano => "ADA",
            CurrencyFamily::Avalanche => "AVAX",
            CurrencyFamily::Dogecoin => "DOGE",
            CurrencyFamily::Polkadot => "DOT",
            CurrencyFamily::Polygon => "MATIC",
            CurrencyFamily::Usdc => "USDC",
            CurrencyFamily::Usdt => "USDT",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            CurrencyFamily::Bitcoin => "Bitcoin",
            CurrencyFamily::Ethereum => "Ethereum",
            CurrencyFamily::BinanceCoin => "Binance Coin",
            CurrencyFamily::Solana => "Solana",
            CurrencyFamily::Xrp => "XRP",
            CurrencyFamily::Cardano => "Cardano",
            CurrencyFamily::Avalanche => "Avalanche",
            CurrencyFamily::Dogecoin => "Dogecoin",
            CurrencyFamily::Polkadot => "Polkadot",
            CurrencyFamily::Polygon => "Polygon",
            CurrencyFamily::Usdc => "USD Coin",
            CurrencyFamily::Usdt => "Tether",
        }
    }
}

impl fmt::Display for CurrencyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
