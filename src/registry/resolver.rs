// ============================================================================
// Symbol Resolver
// Case-sensitive lookup of families and denominations by symbol
// ============================================================================

use super::denomination::{Denomination, DENOMINATIONS};
use super::family::CurrencyFamily;

/// Find the family whose canonical symbol is exactly `symbol`.
pub fn resolve_family(symbol: &str) -> Option<CurrencyFamily> {
    CurrencyFamily::ALL
        .iter()
        .copied()
        .find(|family| family.symbol() == symbol)
}

/// Find a denomination of `family` by its symbol.
///
/// Symbols only identify a denomination within one family ("SAT" exists for
/// both Bitcoin and Dogecoin), so the family is always part of the key.
pub fn resolve_denomination(
    family: CurrencyFamily,
    symbol: &str,
) -> Option<&'static Denomination> {
    DENOMINATIONS
        .iter()
        .find(|d| d.family == family && d.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_family() {
        assert_eq!(resolve_family("BTC"), Some(CurrencyFamily::Bitcoin));
        assert_eq!(resolve_family("USDT"), Some(CurrencyFamily::Usdt));
        assert_eq!(resolve_family("btc"), None);
        assert_eq!(resolve_family(""), None);
        assert_eq!(resolve_family("XYZ"), None);
    }

    #[test]
    fn test_resolve_denomination_is_scoped_to_family() {
        let btc_sat = resolve_denomination(CurrencyFamily::Bitcoin, "SAT").unwrap();
        let doge_sat = resolve_denomination(CurrencyFamily::Dogecoin, "SAT").unwrap();
        assert_eq!(btc_sat.family, CurrencyFamily::Bitcoin);
        assert_eq!(doge_sat.family, CurrencyFamily::Dogecoin);

        assert!(resolve_denomination(CurrencyFamily::Ethereum, "SAT").is_none());
    }

    #[test]
    fn test_resolve_denomination_case_sensitive() {
        assert!(resolve_denomination(CurrencyFamily::Bitcoin, "mBTC").is_some());
        assert!(resolve_denomination(CurrencyFamily::Bitcoin, "MBTC").is_none());
        assert!(resolve_denomination(CurrencyFamily::Bitcoin, "μBTC").is_some());
    }
}
