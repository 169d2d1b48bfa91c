//! Community enrollment form.

use crate::backend::Backend;
use crate::config::COMMUNITY_COLLECTION;
use crate::error::FormError;
use crate::form::{require_text, FormFlow};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const MISSING_LEVEL_MESSAGE: &str = "Por favor selecciona tu nivel académico.";
pub const MISSING_INTEREST_MESSAGE: &str = "Selecciona al menos una preferencia.";
pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "Este correo electrónico ya está registrado en nuestra comunidad.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Ocurrió un error al procesar tu solicitud. Intenta nuevamente.";

/// Public group link shown after a successful enrollment.
pub const WHATSAPP_GROUP_URL: &str = "https://chat.whatsapp.com/LyY3Qo6XsEEIBWnofjzj4O";

/// Highest academic level reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Técnico")]
    Technician,
    #[serde(rename = "Tecnólogo")]
    Technologist,
    #[serde(rename = "Profesional")]
    Professional,
    #[serde(rename = "Posgrado")]
    Postgraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Technician,
        EducationLevel::Technologist,
        EducationLevel::Professional,
        EducationLevel::Postgraduate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Technician => "Técnico",
            EducationLevel::Technologist => "Tecnólogo",
            EducationLevel::Professional => "Profesional",
            EducationLevel::Postgraduate => "Posgrado",
        }
    }
}

/// Topics a member can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "Inversiones")]
    Investing,
    #[serde(rename = "Trading Algorítmico")]
    AlgorithmicTrading,
    #[serde(rename = "Venture Capital")]
    VentureCapital,
    #[serde(rename = "Análisis Macroeconómico")]
    Macroeconomics,
    #[serde(rename = "Tecnología y Blockchain")]
    Blockchain,
    #[serde(rename = "Inteligencia Artificial")]
    ArtificialIntelligence,
    #[serde(rename = "Políticas públicas")]
    PublicPolicy,
    #[serde(rename = "Análisis de sentimientos en RRSS")]
    SocialSentiment,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::Investing,
        Interest::AlgorithmicTrading,
        Interest::VentureCapital,
        Interest::Macroeconomics,
        Interest::Blockchain,
        Interest::ArtificialIntelligence,
        Interest::PublicPolicy,
        Interest::SocialSentiment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::Investing => "Inversiones",
            Interest::AlgorithmicTrading => "Trading Algorítmico",
            Interest::VentureCapital => "Venture Capital",
            Interest::Macroeconomics => "Análisis Macroeconómico",
            Interest::Blockchain => "Tecnología y Blockchain",
            Interest::ArtificialIntelligence => "Inteligencia Artificial",
            Interest::PublicPolicy => "Políticas públicas",
            Interest::SocialSentiment => "Análisis de sentimientos en RRSS",
        }
    }
}

/// Field values of the enrollment form. Interests keep selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommunityValues {
    pub full_name: String,
    pub whatsapp: String,
    pub email: String,
    pub country: String,
    pub level: Option<EducationLevel>,
    pub interests: Vec<Interest>,
}

impl CommunityValues {
    /// Adds `interest` if absent, removes it otherwise.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }
}

/// Row written to the enrollment collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityEnrollment {
    pub nombre_completo: String,
    pub whatsapp: String,
    pub email: String,
    pub pais: String,
    pub nivel_alcanzado: EducationLevel,
    pub preferencias: Vec<Interest>,
    pub created_at: String,
}

impl CommunityEnrollment {
    /// Builds the row from validated values.
    ///
    /// Returns a validation error if the level is missing.
    pub fn from_values(values: &CommunityValues, now: DateTime<Utc>) -> Result<Self, FormError> {
        let level = values
            .level
            .ok_or_else(|| FormError::Validation(MISSING_LEVEL_MESSAGE.to_string()))?;

        Ok(Self {
            nombre_completo: values.full_name.clone(),
            whatsapp: values.whatsapp.clone(),
            email: values.email.clone(),
            pais: values.country.clone(),
            nivel_alcanzado: level,
            preferencias: values.interests.clone(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// What the success view greets the new member with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunitySummary {
    pub first_name: String,
    pub interest: Interest,
}

/// Enrollment flow: validate, insert one row, greet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommunityFlow;

#[async_trait::async_trait(?Send)]
impl FormFlow for CommunityFlow {
    type Values = CommunityValues;
    type Summary = CommunitySummary;
    const NAME: &'static str = "community";

    fn validate(&self, values: &CommunityValues) -> Result<(), FormError> {
        require_text(&values.full_name, "Por favor ingresa tu nombre completo.")?;
        require_text(&values.whatsapp, "Por favor ingresa tu número de WhatsApp.")?;
        require_text(&values.email, "Por favor ingresa tu correo electrónico.")?;
        require_text(&values.country, "Por favor ingresa tu país de residencia.")?;

        if values.level.is_none() {
            return Err(FormError::Validation(MISSING_LEVEL_MESSAGE.to_string()));
        }
        if values.interests.is_empty() {
            return Err(FormError::Validation(MISSING_INTEREST_MESSAGE.to_string()));
        }
        Ok(())
    }

    async fn send(
        &self,
        backend: &dyn Backend,
        values: &CommunityValues,
    ) -> Result<CommunitySummary, FormError> {
        let interest = *values
            .interests
            .first()
            .ok_or_else(|| FormError::Validation(MISSING_INTEREST_MESSAGE.to_string()))?;

        let row = CommunityEnrollment::from_values(values, Utc::now())?;
        let record = serde_json::to_value(&row).map_err(|e| FormError::Service(e.to_string()))?;

        backend.insert_record(COMMUNITY_COLLECTION, record).await?;
        tracing::info!(level = row.nivel_alcanzado.label(), "community enrollment stored");

        Ok(CommunitySummary {
            first_name: first_name(&values.full_name),
            interest,
        })
    }

    fn after_success(&self, values: &mut CommunityValues, _summary: &CommunitySummary) {
        *values = CommunityValues::default();
    }

    fn failure_message(&self, _values: &CommunityValues, err: &FormError) -> String {
        match err {
            FormError::Validation(message) | FormError::Service(message) => message.clone(),
            FormError::DuplicateEntry => DUPLICATE_EMAIL_MESSAGE.to_string(),
            FormError::Unknown => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// First whitespace-separated token of a full name.
pub fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::InMemoryBackend;
    use crate::form::{submit, FormState, FormStatus};
    use crate::state::{shared, StateCell};
    use chrono::TimeZone;

    fn filled() -> CommunityValues {
        CommunityValues {
            full_name: "Ana María Pérez".into(),
            whatsapp: "+57 300 123 4567".into(),
            email: "ana@example.com".into(),
            country: "Colombia".into(),
            level: Some(EducationLevel::Professional),
            interests: vec![Interest::VentureCapital, Interest::Investing],
        }
    }

    #[test]
    fn test_toggle_interest_keeps_order() {
        let mut values = CommunityValues::default();
        values.toggle_interest(Interest::Blockchain);
        values.toggle_interest(Interest::Investing);
        values.toggle_interest(Interest::PublicPolicy);
        values.toggle_interest(Interest::Investing);
        assert_eq!(
            values.interests,
            vec![Interest::Blockchain, Interest::PublicPolicy]
        );
        assert!(!values.has_interest(Interest::Investing));
    }

    #[test]
    fn test_validation_order() {
        let flow = CommunityFlow;
        let mut values = filled();
        values.level = None;
        values.interests.clear();
        assert_eq!(
            flow.validate(&values),
            Err(FormError::Validation(MISSING_LEVEL_MESSAGE.into()))
        );

        values.level = Some(EducationLevel::Postgraduate);
        assert_eq!(
            flow.validate(&values),
            Err(FormError::Validation(MISSING_INTEREST_MESSAGE.into()))
        );

        values.country = "   ".into();
        assert!(matches!(
            flow.validate(&values),
            Err(FormError::Validation(m)) if m.contains("país")
        ));
    }

    #[test]
    fn test_row_serialization_uses_wire_names() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let row = CommunityEnrollment::from_values(&filled(), now).unwrap();
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["nombre_completo"], "Ana María Pérez");
        assert_eq!(json["pais"], "Colombia");
        assert_eq!(json["nivel_alcanzado"], "Profesional");
        assert_eq!(
            json["preferencias"],
            serde_json::json!(["Venture Capital", "Inversiones"])
        );
        assert_eq!(json["created_at"], "2025-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("  Ana María Pérez"), "Ana");
        assert_eq!(first_name(""), "");
    }

    #[tokio::test]
    async fn test_duplicate_email_message() {
        let backend = InMemoryBackend::new();
        let form = shared(FormState::<CommunityFlow>::new());

        form.with_mut(|f| f.values = filled());
        assert!(submit(&form, &backend).await);
        assert!(form.snapshot().status().is_success());

        form.with_mut(|f| f.values = filled());
        assert!(submit(&form, &backend).await);
        let state = form.snapshot();
        assert_eq!(
            state.status(),
            &FormStatus::Error(DUPLICATE_EMAIL_MESSAGE.to_string())
        );
        // Fields stay for correction
        assert_eq!(state.values, filled());
        assert_eq!(backend.records(COMMUNITY_COLLECTION).len(), 1);
    }

    #[tokio::test]
    async fn test_blank_service_error_uses_default() {
        let backend = InMemoryBackend::new();
        backend.fail_next(crate::error::BackendError::service(None, ""));
        let form = shared(FormState::<CommunityFlow>::new());
        form.with_mut(|f| f.values = filled());

        submit(&form, &backend).await;
        assert_eq!(
            form.snapshot().status().error_message(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
    }
}
