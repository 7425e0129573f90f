//! Utilidades de normalización de texto
//!
//! Los registros se persisten siempre normalizados: nombres y texto libre
//! en title case, identificadores en mayúsculas. Los controllers aplican
//! estas reglas tanto al crear como al editar.

/// Normaliza un texto a title case: cada letra que sigue a un carácter
/// no alfabético se escribe en mayúscula, el resto en minúscula.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Normaliza un identificador a mayúsculas (placas, códigos, números de afiliación).
pub fn upper_case(value: &str) -> String {
    value.to_uppercase()
}

/// Construye el nombre completo de un empleado a partir de sus componentes.
///
/// Formato: `"{Nombre} {Inicial}. {Apellido}"` más el sufijo (`Jr.`, `III`, ...)
/// cuando existe. Si no hay segundo nombre se omite la inicial.
pub fn build_full_name(first: &str, middle: &str, last: &str, extn: &str) -> String {
    let first = title_case(first.trim());
    let last = title_case(last.trim());
    let extn = title_case(extn.trim());

    let mut full = match middle.trim().chars().next() {
        Some(initial) => format!(
            "{} {}. {}",
            first,
            initial.to_uppercase(),
            last
        ),
        None => format!("{} {}", first, last),
    };

    if !extn.is_empty() {
        full.push(' ');
        full.push_str(&extn);
    }

    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("davao city"), "Davao City");
        assert_eq!(title_case("REPAIR AND SERVICE"), "Repair And Service");
        assert_eq!(title_case("cdo via buda"), "Cdo Via Buda");
    }

    #[test]
    fn test_title_case_preserves_separators() {
        assert_eq!(title_case("repair/service"), "Repair/Service");
        assert_eq!(title_case("juan-carlos"), "Juan-Carlos");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_upper_case() {
        assert_eq!(upper_case("abc-1234"), "ABC-1234");
        assert_eq!(upper_case("bir"), "BIR");
    }

    #[test]
    fn test_build_full_name() {
        assert_eq!(build_full_name("juan", "dela", "cruz", ""), "Juan D. Cruz");
        assert_eq!(
            build_full_name("juan", "dela", "cruz", "jr."),
            "Juan D. Cruz Jr."
        );
    }

    #[test]
    fn test_build_full_name_without_middle() {
        assert_eq!(build_full_name("ana", "", "santos", ""), "Ana Santos");
    }

    #[test]
    fn test_build_full_name_normalizes_case() {
        assert_eq!(
            build_full_name("MARIA", "LUISA", "REYES", "iii"),
            "Maria L. Reyes Iii"
        );
    }
}
