// ============================================================================
// Basic Usage Example
// ============================================================================

use crypto_decimal::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Crypto Decimal Example ===\n");

    let registry = Registry::global();

    println!("Supported families:");
    for info in registry.family_listing() {
        println!("  {:<5} {}", info.symbol, info.name);
    }

    println!("\nBitcoin denominations:");
    for d in registry.denominations_of(CurrencyFamily::Bitcoin) {
        println!("  {:<5} {:<10} 10^{}", d.symbol, d.name, d.scale_exponent);
    }

    // Engine API: parse, combine, format
    let btc = resolve_denomination(CurrencyFamily::Bitcoin, "BTC").ok_or("unknown BTC")?;
    let mbtc = resolve_denomination(CurrencyFamily::Bitcoin, "mBTC").ok_or("unknown mBTC")?;
    let sat = resolve_denomination(CurrencyFamily::Bitcoin, "SAT").ok_or("unknown SAT")?;

    let deposit = parse("0.75", btc)?;
    let fee = parse("1250", sat)?;
    let net = sub(&deposit, &fee)?;

    println!("\n=== Arithmetic ===");
    println!("deposit:  {} BTC", format(&deposit, btc)?);
    println!("fee:      {} SAT", format(&fee, sat)?);
    println!("net:      {} BTC = {} mBTC", format(&net, btc)?, format(&net, mbtc)?);

    let share = Scalar::integer(3);
    for mode in RoundingMode::ALL {
        let third = divide_by_scalar(&net, &share, mode)?;
        println!("net / 3 ({:<5}): {} SAT", mode, format(&third, sat)?);
    }

    // String-level surface
    println!("\n=== Functions ===");
    let functions = Functions::new(EngineConfig::strict())?;
    println!(
        "crypto_add(ETH, GWEI, 1.5, 2.25) = {}",
        functions.call_scalar(ScalarOp::Add, "ETH", "GWEI", "1.5", "2.25")?
    );
    println!(
        "crypto_scale(ETH, GWEI, ETH, 1) = {}",
        functions.scale("ETH", "GWEI", "ETH", "1")?
    );
    if let Err(e) = functions.call_scalar(ScalarOp::DivTrunc, "BTC", "BTC", "1", "0") {
        println!("rejected: {}", e);
    }

    let mut total = Aggregate::new(AggregateKind::Sum, "SOL", "LAMP", "SOL", functions.config())?;
    for row in ["500000000", "250000000", "1"] {
        total.step(Some(row))?;
    }
    println!("crypto_sum(SOL, LAMP, SOL) = {:?}", total.finish()?);

    Ok(())
}
