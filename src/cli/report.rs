use super::*;
use crate::rpc::BalanceSource;

/// Writes the address line, then queries the balance and writes the balance
/// line. A failed query leaves only the address line behind.
pub async fn report<W: Write, S: BalanceSource>(
    out: &mut W,
    address: &Pubkey,
    source: &S,
) -> Result {
    writeln!(out, "My address: {address}")?;
    tracing::debug!(%address, "requesting balance");
    let lamports = source.get_balance(address).await?;
    writeln!(out, "My balance: {} SOL", format_sol(lamports))?;
    Ok(())
}
