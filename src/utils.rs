use super::types::*;
use rust_decimal::Decimal;

/// Lamports as a SOL amount with no trailing zeros, e.g. `1` -> `0.000000001`.
pub fn format_sol(lamports: u64) -> String {
    Decimal::from_i128_with_scale(lamports as i128, SOL_DECIMALS)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_sol() {
        assert_eq!(format_sol(0), "0");
        assert_eq!(format_sol(1), "0.000000001");
        assert_eq!(format_sol(LAMPORTS_PER_SOL), "1");
        assert_eq!(format_sol(1_500_000_000), "1.5");
        assert_eq!(format_sol(2_039_280), "0.00203928");
        assert_eq!(format_sol(u64::MAX), "18446744073.709551615");
    }
}
