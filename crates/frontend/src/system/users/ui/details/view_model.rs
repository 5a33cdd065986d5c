use contracts::shared::error::ConfigurationError;
use contracts::shared::record::{field_as_i64, Record};
use contracts::system::users::{UserAccount, ACCOUNT_TYPE_ADMIN};
use serde_json::Value;

use crate::shared::api::EntityApi;
use crate::shared::config::Config;
use crate::shared::edit_session::{EditSession, SessionError};
use crate::shared::form_generator::FormModel;

/// ViewModel for the user details modal
///
/// Password is asked for on registration only; when editing it is neither
/// shown nor sent.
pub struct UserDetailsViewModel<A: EntityApi> {
    session: EditSession<UserAccount, A>,
}

impl<A: EntityApi> UserDetailsViewModel<A> {
    pub fn new(api: A, config: Config) -> Result<Self, ConfigurationError> {
        Ok(Self {
            session: EditSession::new(api, config)?,
        })
    }

    pub fn session(&self) -> &EditSession<UserAccount, A> {
        &self.session
    }

    pub fn is_edit_mode(&self) -> bool {
        self.session.is_edit_mode()
    }

    pub fn is_admin(&self) -> bool {
        field_as_i64(self.session.form(), "type") == Some(ACCOUNT_TYPE_ADMIN)
    }

    /// "新建用户" / "编辑用户"
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
        self.session.open(id).await?;
        if self.session.is_edit_mode() {
            self.session.clear_field("password");
        }
        Ok(())
    }

    /// Register or update the user
    pub async fn save_command(&mut self) -> Result<Record, SessionError> {
        let payload = self.session.submit().await?;
        self.session.close();
        Ok(payload)
    }

    pub fn cancel_command(&mut self) {
        self.session.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::MemoryApi;
    use serde_json::json;

    fn view_model(api: MemoryApi) -> UserDetailsViewModel<MemoryApi> {
        UserDetailsViewModel::new(api, Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_register_user() {
        let mut vm = view_model(MemoryApi::default());
        vm.load_or_reset(None).await.unwrap();
        assert_eq!(vm.title(), "新建用户");
        assert!(!vm.is_admin());
        assert!(vm.form_model().control("password").is_some());

        vm.set_field("username", json!("alice")).unwrap();
        vm.set_field("password", json!("s3cret")).unwrap();
        vm.set_field("validDays", json!("30")).unwrap();

        let payload = vm.save_command().await.unwrap();
        assert_eq!(payload["type"], json!(1));
        assert_eq!(payload["validDays"], json!(30));
        assert_eq!(vm.session().api().posted.borrow()[0].0, "/api/user/register");
    }

    #[tokio::test]
    async fn test_edit_user_never_sends_password() {
        let api = MemoryApi::default().with_response(
            "/api/user/get/4",
            json!({
                "id": 4,
                "type": 0,
                "username": "root",
                "password": "hash",
                "validDays": 365
            }),
        );
        let mut vm = view_model(api);
        vm.load_or_reset(Some(4)).await.unwrap();
        assert_eq!(vm.title(), "编辑用户");
        assert!(vm.is_admin());
        assert!(vm.form_model().control("password").is_none());

        let payload = vm.save_command().await.unwrap();
        assert_eq!(payload["id"], json!(4));
        assert!(payload.get("password").is_none());
        assert_eq!(vm.session().api().posted.borrow()[0].0, "/api/user/update");
    }

    #[tokio::test]
    async fn test_radio_text_input_is_saved_as_number() {
        let mut vm = view_model(MemoryApi::default());
        vm.load_or_reset(None).await.unwrap();
        vm.set_field("type", json!("0")).unwrap();
        vm.set_field("username", json!("ops")).unwrap();
        vm.set_field("password", json!("pw")).unwrap();
        vm.set_field("validDays", json!(7)).unwrap();
        assert!(vm.is_admin());

        let payload = vm.save_command().await.unwrap();
        assert_eq!(payload["type"], json!(0));
    }

    #[tokio::test]
    async fn test_valid_days_must_be_positive() {
        let mut vm = view_model(MemoryApi::default());
        vm.load_or_reset(None).await.unwrap();
        vm.set_field("username", json!("bob")).unwrap();
        vm.set_field("password", json!("pw")).unwrap();
        vm.set_field("validDays", json!(0)).unwrap();

        let err = vm.save_command().await.unwrap_err();
        assert!(matches!(err, SessionError::Validation(ref e) if e[0].field == "validDays"));
        assert!(vm.session().is_visible());
    }
}
