use crate::core::action::Effect;
use crate::core::resource::Resource;
use crate::library::CurrentUser;
use crate::library::accounts::normalize_email;

/// Sign-in and sign-up share this. `outcome` is `None` until the first
/// attempt, then tracks the last one.
#[derive(Debug, Default)]
pub struct LoginViewModel {
    pub outcome: Option<Resource<CurrentUser>>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, email: &str) -> Effect {
        match self.validate(email) {
            Some(email) => Effect::SignIn(email),
            None => Effect::None,
        }
    }

    pub fn create_account(&mut self, email: &str) -> Effect {
        match self.validate(email) {
            Some(email) => Effect::CreateAccount(email),
            None => Effect::None,
        }
    }

    fn validate(&mut self, email: &str) -> Option<String> {
        match normalize_email(email) {
            Ok(email) => {
                self.outcome = Some(Resource::Loading);
                Some(email)
            }
            Err(e) => {
                self.outcome = Some(Resource::Failure(e.to_string()));
                None
            }
        }
    }

    pub fn on_signed_in(&mut self, outcome: Resource<CurrentUser>) {
        self.outcome = Some(outcome);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, Some(Resource::Loading))
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(Resource::error)
    }

    pub fn reset(&mut self) {
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_rejected_locally() {
        let mut vm = LoginViewModel::new();
        assert_eq!(vm.sign_in("   "), Effect::None);
        assert_eq!(vm.error(), Some("enter a valid email"));
    }

    #[test]
    fn test_sign_in_normalizes_email() {
        let mut vm = LoginViewModel::new();
        assert_eq!(
            vm.sign_in(" Ada@Example.com"),
            Effect::SignIn("ada@example.com".to_string())
        );
        assert!(vm.is_loading());
    }

    #[test]
    fn test_create_account_effect() {
        let mut vm = LoginViewModel::new();
        assert_eq!(
            vm.create_account("ada@example.com"),
            Effect::CreateAccount("ada@example.com".to_string())
        );
    }

    #[test]
    fn test_failure_then_reset() {
        let mut vm = LoginViewModel::new();
        vm.on_signed_in(Resource::Failure("no account for x@y".to_string()));
        assert_eq!(vm.error(), Some("no account for x@y"));
        vm.reset();
        assert_eq!(vm.outcome, None);
    }
}
