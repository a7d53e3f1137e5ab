use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

/// A structured audit event for changes to clinical records.
///
/// Emitted via `tracing` so it lands in the same log stream as request
/// logs, tagged with the clinician who made the change.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_type: &'static str,
    pub resource_id: String,
    pub patient_id: String,
    pub user_sub: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn assessment(
        action: AuditAction,
        assessment_id: impl ToString,
        patient_id: impl ToString,
        user_sub: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_type: "assessment",
            resource_id: assessment_id.to_string(),
            patient_id: patient_id.to_string(),
            user_sub: user_sub.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action.as_str(),
            audit.resource_type = self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.patient_id = %self.patient_id,
            audit.user_sub = %self.user_sub,
            audit.details = %details,
            "audit event"
        );
    }
}
