// File: src/dom/style.rs
//! Reading and writing single properties of an inline `style` attribute.

fn declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some((property.to_string(), value.trim().to_string()))
        })
        .collect()
}

pub fn get_property(style: &str, property: &str) -> Option<String> {
    declarations(style)
        .into_iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(property))
        .map(|(_, v)| v)
}

/// Sets `property` to `value`, keeping the position of an existing
/// declaration and appending a new one otherwise.
pub fn set_property(style: &str, property: &str, value: &str) -> String {
    let mut decls = declarations(style);
    match decls.iter_mut().find(|(p, _)| p.eq_ignore_ascii_case(property)) {
        Some(decl) => decl.1 = value.to_string(),
        None => decls.push((property.to_string(), value.to_string())),
    }
    decls
        .iter()
        .map(|(p, v)| format!("{p}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}
