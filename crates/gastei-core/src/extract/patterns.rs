//! Regex patterns for chat message and receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labelled fields of the text format. The capture runs to end of line.
    pub static ref TIPO: Regex = Regex::new(r"(?i)Tipo:\s*(.+)").unwrap();

    pub static ref DESCRICAO: Regex = Regex::new(r"(?i)Descrição:\s*(.+)").unwrap();

    pub static ref CATEGORIA: Regex = Regex::new(r"(?i)Categoria:\s*(.+)").unwrap();

    pub static ref VALOR: Regex = Regex::new(r"(?i)Valor:\s*([\d.,]+)").unwrap();

    // Receipt amounts: "Valor: R$ 12,50", "VALOR 12.50"
    pub static ref RECEIPT_LABELED_COST: Regex = Regex::new(
        r"(?i)valor\s*:?\s*R?\$?\s*([\d.,]+)"
    ).unwrap();

    // Receipt amounts without a label: "R$ 12,50"
    pub static ref RECEIPT_CURRENCY_COST: Regex = Regex::new(
        r"R\$\s*([\d.,]+)"
    ).unwrap();
}
