//! Curated merchant patterns.
//!
//! Keep the order: a generic pattern placed above a specific one for a
//! different category would shadow it.

/// `(merchant substring, category)` in priority order.
pub static BUILTIN_RULES: &[(&str, &str)] = &[
    ("Compra no Carrefour Express", "Mercado"),
    ("Bistek", "Mercado"),
    ("Atacadista", "Mercado"),
    ("Koch", "Mercado"),
    ("Mercado", "Mercado"),
    ("Supermercado", "Mercado"),
    ("Giassi", "Mercado"),
    ("Angeloni", "Mercado"),
    ("Pagamento Angeloni Loja", "Mercado"),
    ("Supermercado Big Blumenau", "Mercado"),
    ("Assai Atacadista Compra", "Mercado"),
    ("Mercado São José", "Mercado"),
    ("Hiper Bom Preço", "Mercado"),
    ("Compra no Atacadão Joinville", "Mercado"),
    // Fast food and delivery
    ("Pedido Ifood", "Lanche"),
    ("ifood", "Lanche"),
    ("Mc Donald", "Lanche"),
    ("Compra no Burger King", "Lanche"),
    ("Pagamento BK Delivery", "Lanche"),
    ("Habib's", "Lanche"),
    ("Kalzone", "Lanche"),
    ("Subway", "Lanche"),
    ("Pizza Hut", "Lanche"),
    ("Lanche da esquina", "Lanche"),
    ("Corrida Uber", "Transporte"),
    ("Pagamento 99Pop", "Transporte"),
    ("99 corrida", "Transporte"),
    ("Cabify viagem", "Transporte"),
    ("Pista", "Pedágio"),
    ("Compra na Drogasil", "Farmácia"),
    ("Panvel Farmácia", "Farmácia"),
    ("Farmácia Santa Maria", "Farmácia"),
    ("Droga Raia", "Farmácia"),
    ("Drogaria Pacheco", "Farmácia"),
    // Streaming and subscriptions
    ("Assinatura Netflix", "Entretenimento"),
    ("Spotify pagamento", "Entretenimento"),
    ("Cinema Arcoplex", "Entretenimento"),
    ("Prime Video", "Entretenimento"),
    ("Disney Plus", "Entretenimento"),
    ("HBO Max", "Entretenimento"),
    ("Bar do Zé", "Restaurante"),
    ("Restaurante Sabor", "Restaurante"),
    ("Churrascaria Fogo de Chão", "Restaurante"),
    ("Padaria Pão Quente", "Restaurante"),
    ("Parque Beto Carrero", "Lazer"),
    ("Escape Room", "Lazer"),
    ("Boliche Strike", "Lazer"),
    ("Clube de Tiro", "Lazer"),
    ("Academia Smartfit", "Lazer"),
    ("futpanelas1@gmail.com", "Lazer"),
    ("Barbearia", "Estética"),
    ("Fatura", "Cartão de crédito"),
    ("Pagamento fatura", "Cartão de crédito"),
    ("Compra no cartão", "Cartão de crédito"),
    ("Pagamento parcelado", "Cartão de crédito"),
    ("Fatura do cartão", "Cartão de crédito"),
    // Utilities, home and insurance
    ("Conta de luz Celesc", "Casa"),
    ("CELESC", "Casa"),
    ("CASAN", "Casa"),
    ("Pagamento Casan", "Casa"),
    ("Compra Cassol", "Casa"),
    ("Cobrança de condomínio", "Casa"),
    ("Internet Claro", "Casa"),
    ("Compra na Leroy Merlin", "Casa"),
    ("Madeireira São José", "Casa"),
    ("HDI SEGUROS", "Casa"),
    ("VERO", "Casa"),
    ("Posto Shell", "Carro"),
    ("Abastecimento Ipiranga", "Carro"),
    ("Posto Petrobras", "Carro"),
    ("Mecânica Auto Center", "Carro"),
    ("Troca de óleo Lubicar", "Carro"),
    ("Oficina Mecânica São Pedro", "Carro"),
    ("Estacionamento Central Park", "Carro"),
    ("CATARINENSE ASSOCIACAO", "Carro"),
    ("Transferência PIX", "Transferência"),
    ("PIX", "Transferência"),
    ("TED recebida", "Transferência"),
    ("Depósito em conta", "Transferência"),
    ("Pagamento desconhecido", "Transferência"),
];
