// src/formula.rs

/// Fragmento de una etiqueta con marcado de fórmula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Subscript(String),
}

/// Convierte cada letra seguida de dígitos en letra + subíndice ("H2O" -> H, ₂, O).
pub fn format_formula(text: &str) -> Vec<Span> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        plain.push(c);
        i += 1;

        if c.is_ascii_alphabetic() && i < chars.len() && chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            spans.push(Span::Text(std::mem::take(&mut plain)));
            spans.push(Span::Subscript(chars[start..i].iter().collect()));
        }
    }

    if !plain.is_empty() {
        spans.push(Span::Text(plain));
    }
    spans
}

/// Serializa los fragmentos como marcado HTML (`H<sub>2</sub>O`).
pub fn to_markup(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(t) => t.clone(),
            Span::Subscript(d) => format!("<sub>{d}</sub>"),
        })
        .collect()
}
