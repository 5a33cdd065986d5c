use contracts::domain::a001_postgresql_source::{PostgreSQLSource, SOURCE_STATUS_LOCKED};
use contracts::shared::error::ConfigurationError;
use contracts::shared::record::{field_as_i64, Record};
use serde_json::Value;

use crate::shared::api::EntityApi;
use crate::shared::config::Config;
use crate::shared::edit_session::{EditSession, SessionError};
use crate::shared::form_generator::FormModel;

/// ViewModel for the PostgreSQL source details form
///
/// - Form data lives in the edit session as a UI record
/// - Table names are edited as one comma-separated string
/// - Commands for load and save
pub struct PostgreSQLSourceDetailsViewModel<A: EntityApi> {
    session: EditSession<PostgreSQLSource, A>,
}

impl<A: EntityApi> PostgreSQLSourceDetailsViewModel<A> {
    pub fn new(api: A, config: Config) -> Result<Self, ConfigurationError> {
        Ok(Self {
            session: EditSession::new(api, config)?,
        })
    }

    pub fn session(&self) -> &EditSession<PostgreSQLSource, A> {
        &self.session
    }

    pub fn is_edit_mode(&self) -> bool {
        self.session.is_edit_mode()
    }

    /// The source is locked while the backend is applying its configuration
    pub fn is_locked(&self) -> bool {
        field_as_i64(self.session.form(), "status") == Some(SOURCE_STATUS_LOCKED)
    }

    /// Table names as currently entered, split and trimmed
    pub fn table_names(&self) -> Vec<String> {
        match self.session.form().get("tableNameList") {
            Some(Value::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn title(&self) -> String {
        self.session.title()
    }

    pub fn form_model(&self) -> FormModel {
        self.session.form_model()
    }

    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), SessionError> {
        self.session.set_field(name, value)
    }

    /// Load form data from server if ID is provided, otherwise reset to default
    pub async fn load_or_reset(&mut self, id: Option<i64>) -> Result<(), SessionError> {
        self.session.open(id).await
    }

    /// Save form data to server; a locked source is never submitted
    pub async fn save_command(&mut self) -> Result<Record, SessionError> {
        if self.is_locked() {
            return Err(SessionError::Locked);
        }
        let payload = self.session.submit().await?;
        self.session.close();
        Ok(payload)
    }

    pub fn cancel_command(&mut self) {
        self.session.close();
    }
}
