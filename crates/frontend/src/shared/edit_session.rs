//! Generic entity edit session (modal view-model)
//!
//! - `open(None)` resets the form to each field's initial value
//! - `open(Some(id))` fetches the record and parses it through the entity codec
//! - `submit()` validates, stringifies, filters to synced fields, injects the
//!   id when editing and posts to the create/update endpoint
//!
//! The session owns its form record exclusively; nothing is shared between
//! sessions.

use std::marker::PhantomData;

use contracts::domain::common::EntityClass;
use contracts::shared::error::{CodecError, ConfigurationError};
use contracts::shared::i18n::{Catalog, Locale, Localizer};
use contracts::shared::metadata::{FieldRegistry, FormMode};
use contracts::shared::record::Record;
use serde_json::Value;
use thiserror::Error;

use super::api::{expect_record, ApiError, EntityApi};
use super::api_utils::api_url;
use super::config::Config;
use super::form_generator::{build_form, coerce_input, validate_fields, FieldError, FormModel};

/// Errors of load/submit operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Edit session is not open")]
    NotOpen,

    #[error("Record is locked and cannot be changed")]
    Locked,

    #[error("Record was not loaded and cannot be saved")]
    NotLoaded,
}

pub struct EditSession<E: EntityClass, A: EntityApi> {
    api: A,
    config: Config,
    registry: FieldRegistry,
    id: Option<i64>,
    form: Record,
    visible: bool,
    /// Form holds the record of `id` (or a fresh one when `id` is None)
    loaded: bool,
    error: Option<String>,
    field_errors: Vec<FieldError>,
    _entity: PhantomData<E>,
}

impl<E: EntityClass, A: EntityApi> EditSession<E, A> {
    pub fn new(api: A, config: Config) -> Result<Self, ConfigurationError> {
        let registry = E::registry()?;
        Ok(Self {
            form: registry.initial_record(),
            api,
            config,
            registry,
            id: None,
            visible: false,
            loaded: false,
            error: None,
            field_errors: Vec::new(),
            _entity: PhantomData,
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn localizer(&self) -> &'static Catalog {
        Catalog::builtin(self.config.ui.locale)
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn mode(&self) -> FormMode {
        FormMode::from_id(self.id)
    }

    /// Current UI record
    pub fn form(&self) -> &Record {
        &self.form
    }

    /// Last load/submit error, as shown above the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inline errors from the last submit attempt
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Modal title, e.g. "编辑用户" / "New PostgreSQL source"
    pub fn title(&self) -> String {
        let localizer = self.localizer();
        let action = localizer.t(if self.is_edit_mode() {
            "basic.Edit"
        } else {
            "basic.Create"
        });
        let element = localizer.t(E::entity_metadata_info().element_key);
        match self.config.ui.locale {
            Locale::ZhCn => format!("{}{}", action, element),
            Locale::EnUs => format!("{} {}", action, element),
        }
    }

    /// Open the session: load the record when `id` is given, otherwise reset
    pub async fn open(&mut self, id: Option<i64>) -> Result<(), SessionError> {
        self.visible = true;
        self.loaded = false;
        self.id = id;
        self.error = None;
        self.field_errors.clear();

        match id {
            Some(existing_id) => {
                if let Err(e) = self.load(existing_id).await {
                    log::warn!(
                        "{}: failed to load {}: {}",
                        E::entity_metadata_info().entity_name,
                        existing_id,
                        e
                    );
                    // Never keep the previous record under the new id
                    self.form = self.registry.initial_record();
                    self.error = Some(format!("Failed to load: {}", e));
                    return Err(e);
                }
                self.loaded = true;
                Ok(())
            }
            None => {
                self.reset_form();
                self.loaded = true;
                Ok(())
            }
        }
    }

    /// Close the session; the form is kept until the next `open`
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Reset form to initial values
    pub fn reset_form(&mut self) {
        self.form = self.registry.initial_record();
        self.error = None;
        self.field_errors.clear();
    }

    async fn load(&mut self, id: i64) -> Result<(), SessionError> {
        let url = api_url(&self.config.api, &E::endpoints().get_path(id));
        log::debug!("GET {}", url);
        let wire = expect_record(self.api.get(&url).await?)?;
        self.form = E::parse(&wire)?;
        Ok(())
    }

    /// Update one field from control input
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), SessionError> {
        let field = self
            .registry
            .get(name)
            .ok_or_else(|| SessionError::UnknownField(name.to_string()))?;
        self.form
            .insert(field.name.to_string(), coerce_input(field, value));
        self.field_errors.retain(|e| e.field != field.name);
        Ok(())
    }

    /// Remove a value from the form, e.g. a secret echoed by the backend
    pub fn clear_field(&mut self, name: &str) -> Option<Value> {
        self.form.remove(name)
    }

    /// Form model for the current record (dynamic props re-evaluated)
    pub fn form_model(&self) -> FormModel {
        build_form(&self.registry, self.mode(), &self.form, self.localizer())
    }

    /// Validate -> stringify -> sync filter -> inject id -> POST
    ///
    /// Returns the payload that was sent.
    pub async fn submit(&mut self) -> Result<Record, SessionError> {
        if !self.visible {
            return Err(SessionError::NotOpen);
        }
        if !self.loaded {
            return Err(SessionError::NotLoaded);
        }

        let result = self.try_submit().await;
        match &result {
            Ok(_) => {
                self.error = None;
                log::info!(
                    "{}: {}",
                    E::entity_metadata_info().entity_name,
                    self.localizer().t("basic.SaveSuccess")
                );
            }
            Err(SessionError::Validation(errors)) => {
                self.field_errors = errors.clone();
            }
            Err(e) => {
                log::warn!("{}: submit failed: {}", E::entity_metadata_info().entity_name, e);
                self.error = Some(e.to_string());
            }
        }
        result
    }

    async fn try_submit(&mut self) -> Result<Record, SessionError> {
        validate_fields(&self.registry, self.mode(), &self.form, self.localizer())
            .map_err(SessionError::Validation)?;
        self.field_errors.clear();

        let mut payload = self.registry.sync_filter(&E::stringify(&self.form)?);
        if let Some(id) = self.id {
            payload.insert("id".to_string(), Value::from(id));
        }
        E::decode_wire(&payload)?;

        let url = api_url(&self.config.api, E::endpoints().save_path(self.id));
        log::debug!("POST {}", url);
        self.api.post(&url, &payload).await?;
        Ok(payload)
    }
}
