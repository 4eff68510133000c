/// Utilitários para manipulação segura de strings UTF-8

/// Trunca uma string garantindo que o corte não aconteça no meio de um
/// caractere UTF-8. Usado para registrar prévias de tokens sem expor o
/// valor completo nos logs.
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_safe_ascii() {
        let token = "EwBgA8l6BAAUO9chh8cJscQL";
        assert_eq!(truncate_safe(token, 8), "EwBgA8l6");
        assert_eq!(truncate_safe(token, 100), token);
    }

    #[test]
    fn test_truncate_safe_utf8() {
        let text = "Olá, mundo!";
        // "Olá" ocupa 4 bytes (á = 2 bytes)
        assert_eq!(truncate_safe(text, 3), "Ol");
        assert_eq!(truncate_safe(text, 4), "Olá");
    }

    #[test]
    fn test_truncate_safe_empty() {
        assert_eq!(truncate_safe("", 10), "");
        assert_eq!(truncate_safe("abc", 0), "");
    }
}
