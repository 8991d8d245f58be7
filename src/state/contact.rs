// Contact form state - submission is simulated locally, nothing is sent

/// Variant shown by the status modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Payload for the status modal overlay.
#[derive(Clone, Debug)]
pub struct StatusModal {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated submission: validate, report through the modal, reset on
    /// success. No network transmission occurs.
    pub fn submit(&mut self) -> StatusModal {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return StatusModal {
                kind: StatusKind::Error,
                message: "Complete todos los campos antes de enviar.".to_string(),
            };
        }

        self.reset();
        StatusModal {
            kind: StatusKind::Success,
            message: "¡Mensaje Enviado con Éxito! Su consulta ha sido recibida y será \
                      respondida a la brevedad posible. Gracias por contactarme."
                .to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_with_fields_succeeds_and_resets() {
        let mut form = ContactForm::new();
        form.name = "Ana".to_string();
        form.email = "ana@example.com".to_string();
        form.message = "Hola".to_string();

        let modal = form.submit();
        assert_eq!(modal.kind, StatusKind::Success);
        assert!(modal.message.contains("Enviado"));
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_submit_with_missing_fields_errors_and_preserves_input() {
        let mut form = ContactForm::new();
        form.name = "Ana".to_string();

        let modal = form.submit();
        assert_eq!(modal.kind, StatusKind::Error);
        assert_eq!(form.name, "Ana");
    }
}
