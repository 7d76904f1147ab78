// ============================================================================
// Registry Module
// Read-only denomination metadata for every supported currency family
// ============================================================================
//
// This module provides:
// - CurrencyFamily: the closed set of families
// - Denomination: display units with their scaling exponents
// - Registry: process-wide view over the static table, plus listings
// - Resolver functions keyed by (family, symbol)
//
// The table is compiled in as constant data; nothing here mutates after
// startup, so every lookup is safe from any thread.

mod denomination;
mod family;
mod resolver;

pub(crate) use denomination::pow10;
pub use denomination::{Denomination, DENOMINATIONS};
pub use family::CurrencyFamily;
pub use resolver::{resolve_denomination, resolve_family};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of the family listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyInfo {
    pub symbol: String,
    pub name: String,
}

/// One row of the denomination listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenominationInfo {
    pub symbol: String,
    pub name: String,
    pub family_symbol: String,
    pub scale_exponent: u8,
}

impl From<&Denomination> for DenominationInfo {
    fn from(d: &Denomination) -> Self {
        Self {
            symbol: d.symbol.to_string(),
            name: d.name.to_string(),
            family_symbol: d.family.symbol().to_string(),
            scale_exponent: d.scale_exponent,
        }
    }
}

/// Immutable view over the denomination table.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    denominations: &'static [Denomination],
}

static GLOBAL: Registry = Registry {
    denominations: &DENOMINATIONS,
};

impl Registry {
    /// The process-wide registry backed by [`DENOMINATIONS`].
    #[inline]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// All families, in listing order.
    pub fn families(&self) -> impl Iterator<Item = CurrencyFamily> + '_ {
        CurrencyFamily::ALL.iter().copied()
    }

    /// Every denomination, in table order.
    pub fn denominations(&self) -> impl Iterator<Item = &'static Denomination> {
        self.denominations.iter()
    }

    /// Denominations belonging to `family`, in table order.
    pub fn denominations_of(
        &self,
        family: CurrencyFamily,
    ) -> impl Iterator<Item = &'static Denomination> {
        self.denominations.iter().filter(move |d| d.family == family)
    }

    /// The family's atomic unit (scale exponent 0).
    pub fn atomic_unit(&self, family: CurrencyFamily) -> Option<&'static Denomination> {
        self.denominations_of(family).find(|d| d.is_atomic())
    }

    /// Scale exponent of a denomination, looked up by `(family, symbol)`.
    pub fn scale_exponent(&self, family: CurrencyFamily, symbol: &str) -> Option<u8> {
        self.denominations_of(family)
            .find(|d| d.symbol == symbol)
            .map(|d| d.scale_exponent)
    }

    /// The `(symbol, name)` listing of families.
    pub fn family_listing(&self) -> Vec<FamilyInfo> {
        self.families()
            .map(|f| FamilyInfo {
                symbol: f.symbol().to_string(),
                name: f.name().to_string(),
            })
            .collect()
    }

    /// The `(symbol, name, family_symbol, scale_exponent)` listing of
    /// denominations.
    pub fn denomination_listing(&self) -> Vec<DenominationInfo> {
        self.denominations().map(DenominationInfo::from).collect()
    }

    /// Check the table's structural invariants.
    ///
    /// Every family must own at least one denomination, exactly one of which
    /// is atomic, and symbols must not repeat inside a family.
    pub fn check_invariants(&self) -> Result<(), String> {
        for family in self.families() {
            let denoms: Vec<_> = self.denominations_of(family).collect();
            if denoms.is_empty() {
                return Err(format!("family {} has no denominations", family));
            }

            let atomic = denoms.iter().filter(|d| d.is_atomic()).count();
            if atomic != 1 {
                return Err(format!(
                    "family {} has {} atomic units, expected exactly one",
                    family, atomic
                ));
            }

            for (i, d) in denoms.iter().enumerate() {
                if denoms[i + 1..].iter().any(|o| o.symbol == d.symbol) {
                    return Err(format!(
                        "symbol {} appears more than once in family {}",
                        d.symbol, family
                    ));
                }
            }
        }
        Ok(())
    }
}
