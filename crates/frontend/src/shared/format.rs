//! Formatage des montants en euros pour l'affichage.

/// Formate un montant en euros à la française : milliers séparés par une
/// espace, virgule décimale, symbole en suffixe.
///
/// # Exemples
/// ```
/// use frontend::shared::format::format_price;
/// assert_eq!(format_price(1234.5), "1 234,50 €");
/// assert_eq!(format_price(0.0), "0,00 €");
/// ```
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let integer = cents / 100;
    let decimals = cents % 100;

    let digits = integer.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, decimals)
}

/// Montant arrondi à l'euro, sans décimales, pour la jauge ("850€").
pub fn format_euros_rounded(value: f64) -> String {
    format!("{}€", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0,00 €");
        assert_eq!(format_price(42.0), "42,00 €");
        assert_eq!(format_price(999.9), "999,90 €");
        assert_eq!(format_price(1000.0), "1 000,00 €");
        assert_eq!(format_price(1234567.89), "1 234 567,89 €");
    }

    #[test]
    fn test_format_price_rounds_cents() {
        assert_eq!(format_price(10.005), "10,01 €");
        assert_eq!(format_price(10.004), "10,00 €");
    }

    #[test]
    fn test_format_euros_rounded() {
        assert_eq!(format_euros_rounded(0.0), "0€");
        assert_eq!(format_euros_rounded(849.6), "850€");
        assert_eq!(format_euros_rounded(1000.0), "1000€");
    }
}
