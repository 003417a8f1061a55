//! User-facing reply texts.

use crate::error::FormatError;
use crate::extract::format_cost;
use crate::models::record::{LedgerRecord, QuickEntry};

/// Help text for the labelled format.
pub const INSTRUCTIONS: &str = "👋 Olá! Envie sua transação no formato:

👉 *Por texto:*
Tipo: Despesa ou Entrada
Descrição: Mercado
Categoria: Supermercado
Valor: 12.50
";

/// Help text for deployments that also accept receipt photos.
pub const PHOTO_INSTRUCTIONS: &str = "👋 Olá! Envie sua transação no formato:

👉 *Por texto:*
Tipo: Despesa ou Entrada
Descrição: Mercado
Categoria: Supermercado
Valor: 12.50

Ou envie uma *foto do comprovante* que eu tento ler os dados!
";

/// Help text for the `categoria - valor` format.
pub const QUICK_INSTRUCTIONS: &str =
    "Envie sua despesa no formato: categoria - valor\nExemplo: mercado - 12.00";

/// Confirmation after the ledger stored a record.
pub fn added<R: LedgerRecord>(record: &R) -> String {
    let cost = record
        .cost()
        .map(format_cost)
        .unwrap_or_else(|| "?".to_string());
    format!(
        "✅ Adicionado: {} ({}) - R${}",
        record.description(),
        record.category(),
        cost
    )
}

/// Confirmation for a quick entry.
pub fn quick_added(entry: &QuickEntry) -> String {
    format!("Adicionado: {} - R${}", entry.categoria, format_cost(entry.valor))
}

/// Reply for a rejected segment. Multi-segment messages quote the segment.
pub fn format_error(error: Option<&FormatError>) -> String {
    match error {
        Some(e) if !e.is_empty_segment() => format!(
            "⚠️ Formato incorreto em:\n{}\n\nEnvie assim:\n{}",
            e.raw_segment, INSTRUCTIONS
        ),
        _ => format!("⚠️ Formato incorreto. Envie assim:\n{}", INSTRUCTIONS),
    }
}

pub fn save_failed() -> &'static str {
    "❌ Erro ao salvar na planilha."
}

pub fn processing_failed() -> &'static str {
    "❌ Erro ao processar a mensagem."
}

pub fn image_failed() -> &'static str {
    "❌ Erro ao processar a imagem."
}

pub fn processing_image() -> &'static str {
    "🔍 Processando imagem..."
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatProblem;
    use crate::models::record::{ReceiptDraft, TransactionRecord};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_added() {
        let record = TransactionRecord {
            kind: "Despesa".to_string(),
            description: "Mercado".to_string(),
            category: "Supermercado".to_string(),
            cost: Decimal::new(125, 1),
            user: "Ana".to_string(),
        };
        assert_eq!(added(&record), "✅ Adicionado: Mercado (Supermercado) - R$12.50");
    }

    #[test]
    fn test_added_without_cost() {
        let draft = ReceiptDraft {
            kind: "Despesa".to_string(),
            description: "Sem descrição".to_string(),
            category: "Outros".to_string(),
            cost: None,
            user: "Ana".to_string(),
        };
        assert_eq!(added(&draft), "✅ Adicionado: Sem descrição (Outros) - R$?");
    }

    #[test]
    fn test_quick_added() {
        let entry = QuickEntry {
            categoria: "mercado".to_string(),
            valor: Decimal::new(12, 0),
        };
        assert_eq!(quick_added(&entry), "Adicionado: mercado - R$12.00");
    }

    #[test]
    fn test_format_error() {
        let generic = format_error(None);
        assert!(generic.starts_with("⚠️ Formato incorreto. Envie assim:\n"));
        assert!(generic.ends_with(INSTRUCTIONS));

        let err = FormatError::new("Tipo: Despesa", FormatProblem::MissingFields(vec!["Valor"]));
        let quoted = format_error(Some(&err));
        assert!(quoted.contains("Tipo: Despesa"));

        let empty = FormatError::new("", FormatProblem::MissingFields(vec!["Tipo"]));
        assert_eq!(format_error(Some(&empty)), generic);
    }
}
