//! Labelled field extraction for one transaction segment.

use regex::Regex;
use tracing::debug;

use crate::error::{FormatError, FormatProblem};
use crate::models::record::TransactionRecord;

use super::amounts::parse_cost;
use super::patterns::{CATEGORIA, DESCRICAO, TIPO, VALOR};
use super::FieldExtractor;

/// A labelled field of the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kind,
    Description,
    Category,
    Cost,
}

impl Field {
    /// The label as users type it.
    pub fn label(self) -> &'static str {
        match self {
            Field::Kind => "Tipo",
            Field::Description => "Descrição",
            Field::Category => "Categoria",
            Field::Cost => "Valor",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Field::Kind => &*TIPO,
            Field::Description => &*DESCRICAO,
            Field::Category => &*CATEGORIA,
            Field::Cost => &*VALOR,
        }
    }
}

/// Fields every segment must carry, in reporting order.
pub const FIELDS: [Field; 4] = [Field::Kind, Field::Description, Field::Category, Field::Cost];

impl FieldExtractor for Field {
    type Output = String;

    /// First occurrence of `label:` in the text, trimmed. A capture that is
    /// blank after trimming counts as absent.
    fn extract(&self, text: &str) -> Option<String> {
        let caps = self.pattern().captures(text)?;
        let value = caps[1].trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Extract a [`TransactionRecord`] from one segment.
///
/// All four fields must be present and the cost must parse; otherwise the
/// whole segment is rejected and no partial record is produced.
pub fn extract(segment: &str, user: &str) -> Result<TransactionRecord, FormatError> {
    let mut values: [Option<String>; 4] = Default::default();
    let mut missing = Vec::new();

    for (slot, field) in values.iter_mut().zip(FIELDS) {
        *slot = field.extract(segment);
        if slot.is_none() {
            missing.push(field.label());
        }
    }

    if !missing.is_empty() {
        debug!("Segment is missing fields: {:?}", missing);
        return Err(FormatError::new(segment, FormatProblem::MissingFields(missing)));
    }

    let [Some(kind), Some(description), Some(category), Some(cost_token)] = values else {
        return Err(FormatError::new(
            segment,
            FormatProblem::MissingFields(FIELDS.iter().map(|f| f.label()).collect()),
        ));
    };

    let cost = parse_cost(&cost_token).ok_or_else(|| {
        debug!("Cost token {:?} does not parse", cost_token);
        FormatError::new(segment, FormatProblem::InvalidCost(cost_token.clone()))
    })?;

    Ok(TransactionRecord {
        kind,
        description,
        category,
        cost,
        user: user.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    const WELL_FORMED: &str = "Tipo: Despesa\nDescrição: Mercado\nCategoria: Supermercado\nValor: 12.50";

    #[test]
    fn test_extract_well_formed() {
        let record = extract(WELL_FORMED, "Ana").unwrap();

        assert_eq!(record.kind, "Despesa");
        assert_eq!(record.description, "Mercado");
        assert_eq!(record.category, "Supermercado");
        assert_eq!(record.cost, Decimal::new(1250, 2));
        assert_eq!(record.user, "Ana");
    }

    #[test]
    fn test_extract_comma_decimal() {
        let text = "Tipo: Despesa\nDescrição: Pão\nCategoria: Padaria\nValor: 12,50";
        let record = extract(text, "Ana").unwrap();
        assert_eq!(record.cost, Decimal::new(1250, 2));
    }

    #[test]
    fn test_extract_trims_and_keeps_case() {
        let text = "tipo:   entrada  \nDESCRIÇÃO:  Salário de Março \ncategoria: Trabalho\t\nvalor: 3500";
        let record = extract(text, "Bruno").unwrap();

        assert_eq!(record.kind, "entrada");
        assert_eq!(record.description, "Salário de Março");
        assert_eq!(record.category, "Trabalho");
        assert_eq!(record.cost, Decimal::new(3500, 0));
    }

    #[test]
    fn test_extract_any_order_and_noise() {
        let text = "Oi!\nValor: 30\nCategoria: Lazer\nTipo: Despesa\nDescrição: Cinema\nobrigado";
        let record = extract(text, "Ana").unwrap();

        assert_eq!(record.description, "Cinema");
        assert_eq!(record.cost, Decimal::new(30, 0));
    }

    #[test]
    fn test_extract_first_occurrence_wins() {
        let text = format!("{}\nValor: 99", WELL_FORMED);
        let record = extract(&text, "Ana").unwrap();
        assert_eq!(record.cost, Decimal::new(1250, 2));
    }

    #[test]
    fn test_extract_missing_field() {
        let text = "Tipo: Despesa\nDescrição: Mercado\nValor: 12.50";
        let err = extract(text, "Ana").unwrap_err();

        assert_eq!(err.raw_segment, text);
        assert_eq!(err.problem, FormatProblem::MissingFields(vec!["Categoria"]));
    }

    #[test]
    fn test_extract_reports_every_missing_field() {
        let err = extract("Descrição: Mercado", "Ana").unwrap_err();
        assert_eq!(
            err.problem,
            FormatProblem::MissingFields(vec!["Tipo", "Categoria", "Valor"])
        );
    }

    #[test]
    fn test_extract_non_numeric_cost_is_missing() {
        let text = "Tipo: Despesa\nDescrição: Mercado\nCategoria: Casa\nValor: doze";
        let err = extract(text, "Ana").unwrap_err();
        assert_eq!(err.problem, FormatProblem::MissingFields(vec!["Valor"]));
    }

    #[test]
    fn test_extract_unparseable_cost() {
        let text = "Tipo: Despesa\nDescrição: Mercado\nCategoria: Casa\nValor: 1.234,56";
        let err = extract(text, "Ana").unwrap_err();
        assert_eq!(err.problem, FormatProblem::InvalidCost("1.234,56".to_string()));
    }

    #[test]
    fn test_extract_empty_segment() {
        let err = extract("", "Ana").unwrap_err();
        assert!(err.is_empty_segment());
        assert_eq!(err.problem, FormatProblem::MissingFields(vec!["Tipo", "Descrição", "Categoria", "Valor"]));
    }

    #[test]
    fn test_field_extractor_blank_value_is_absent() {
        assert_eq!(Field::Kind.extract("Tipo:   "), None);
        assert_eq!(Field::Kind.extract("Tipo: Despesa"), Some("Despesa".to_string()));
    }
}
