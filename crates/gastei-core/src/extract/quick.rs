//! Legacy `categoria - valor` messages.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::QuickEntryError;
use crate::models::record::QuickEntry;

/// Parse `"mercado - 12.00"` into a [`QuickEntry`].
///
/// Only the first comma of the value is turned into a dot.
pub fn parse_quick(message: &str) -> Result<QuickEntry, QuickEntryError> {
    let parts: Vec<&str> = message.split('-').collect();
    let [categoria, valor] = parts.as_slice() else {
        return Err(QuickEntryError::Format { parts: parts.len() });
    };

    let valor = valor.trim().replacen(',', ".", 1);
    let amount = Decimal::from_str(&valor).map_err(|_| QuickEntryError::InvalidAmount(valor.clone()))?;

    Ok(QuickEntry {
        categoria: categoria.trim().to_string(),
        valor: amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_quick() {
        let entry = parse_quick("mercado - 12.00").unwrap();
        assert_eq!(entry.categoria, "mercado");
        assert_eq!(entry.valor, Decimal::new(12, 0));

        let entry = parse_quick("  farmácia-7,5 ").unwrap();
        assert_eq!(entry.categoria, "farmácia");
        assert_eq!(entry.valor, Decimal::new(75, 1));
    }

    #[test]
    fn test_parse_quick_wrong_shape() {
        assert_eq!(parse_quick("mercado 12"), Err(QuickEntryError::Format { parts: 1 }));
        assert_eq!(
            parse_quick("pague-menos - 12"),
            Err(QuickEntryError::Format { parts: 3 })
        );
    }

    #[test]
    fn test_parse_quick_invalid_amount() {
        assert_eq!(
            parse_quick("mercado - doze"),
            Err(QuickEntryError::InvalidAmount("doze".to_string()))
        );
    }

    #[test]
    fn test_quick_entry_json_shape() {
        let entry = parse_quick("mercado - 12.5").unwrap();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"categoria": "mercado", "valor": 12.5})
        );
    }
}
