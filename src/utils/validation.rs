//! Utilidades de validação
//!
//! Funções helper para validações de domínio que o derive do
//! `validator` não cobre sozinho.

use validator::ValidationError;

/// Validar CPF (apenas forma: 11 dígitos, não todos iguais)
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let digitos: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digitos.len() != 11 {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    if digitos.chars().all(|c| c == digitos.chars().next().unwrap()) {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar UF (duas letras maiúsculas)
pub fn validate_uf(value: &str) -> Result<(), ValidationError> {
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        let mut error = ValidationError::new("uf");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_exige_onze_digitos() {
        assert!(validate_cpf("529.982.247-25").is_ok());
        assert!(validate_cpf("52998224725").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("11111111111").is_err());
    }

    #[test]
    fn uf_duas_letras_maiusculas() {
        assert!(validate_uf("BA").is_ok());
        assert!(validate_uf("sp").is_err());
        assert!(validate_uf("BAH").is_err());
    }
}
