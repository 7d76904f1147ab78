// ============================================================================
// Denominations
// Static table of display units and their scaling exponents
// ============================================================================

use super::family::CurrencyFamily;
use num_bigint::BigInt;

/// A named unit of display for a currency family.
///
/// One unit of a denomination equals `10^scale_exponent` atomic units of its
/// family. The atomic unit itself has `scale_exponent == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    /// Human-readable name
    pub name: &'static str,
    /// Symbol, unique within its family only
    pub symbol: &'static str,
    /// Owning family
    pub family: CurrencyFamily,
    /// Power of ten relating one unit to the atomic unit
    pub scale_exponent: u8,
}

impl Denomination {
    /// Whether this is its family's indivisible unit.
    #[inline]
    pub const fn is_atomic(&self) -> bool {
        self.scale_exponent == 0
    }

    /// `10^scale_exponent` as an arbitrary-precision integer.
    #[inline]
    pub fn scale_factor(&self) -> BigInt {
        pow10(u32::from(self.scale_exponent))
    }
}

/// Compute 10^n
#[inline]
pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

const fn denom(
    name: &'static str,
    symbol: &'static str,
    family: CurrencyFamily,
    scale_exponent: u8,
) -> Denomination {
    Denomination {
        name,
        symbol,
        family,
        scale_exponent,
    }
}

use CurrencyFamily::*;

/// Every known denomination, grouped by family in listing order.
pub static DENOMINATIONS: [Denomination; 27] = [
    denom("Bitcoin", "BTC", Bitcoin, 8),
    denom("Satoshi", "SAT", Bitcoin, 0),
    denom("Millibit", "mBTC", Bitcoin, 5),
    denom("Microbit", "μBTC", Bitcoin, 2),
    denom("Ether", "ETH", Ethereum, 18),
    denom("Gwei", "GWEI", Ethereum, 9),
    denom("Wei", "WEI", Ethereum, 0),
    denom("Binance Coin", "BNB", BinanceCoin, 18),
    denom("Jager", "JAGER", BinanceCoin, 0),
    denom("Solana", "SOL", Solana, 9),
    denom("Lamport", "LAMP", Solana, 0),
    denom("XRP", "XRP", Xrp, 6),
    denom("Drop", "DROP", Xrp, 0),
    denom("Cardano", "ADA", Cardano, 6),
    denom("Lovelace", "LOVELACE", Cardano, 0),
    denom("Avalanche", "AVAX", Avalanche, 18),
    denom("nAVAX", "nAVAX", Avalanche, 0),
    denom("Dogecoin", "DOGE", Dogecoin, 8),
    denom("Satoshi", "SAT", Dogecoin, 0),
    denom("Polkadot", "DOT", Polkadot, 10),
    denom("Planck", "PLANCK", Polkadot, 0),
    denom("Polygon", "MATIC", Polygon, 18),
    denom("Wei", "WEI", Polygon, 0),
    denom("USD Coin", "USDC", Usdc, 6),
    denom("Micro USD Coin", "μUSDC", Usdc, 0),
    denom("Tether", "USDT", Usdt, 6),
    denom("Micro Tether", "μUSDT", Usdt, 0),
];
