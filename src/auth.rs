//! Login form check against a single configured account.

#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    MissingFields,
    Invalid,
    Success,
}

impl LoginOutcome {
    pub fn message(self) -> &'static str {
        match self {
            LoginOutcome::MissingFields => "Please fill in all fields!",
            LoginOutcome::Invalid => "Invalid login or password!",
            LoginOutcome::Success => "Login successful!",
        }
    }

    pub fn is_success(self) -> bool {
        self == LoginOutcome::Success
    }
}

pub fn check_login(credentials: &Credentials, login: &str, password: &str) -> LoginOutcome {
    let login = login.trim();
    let password = password.trim();
    if login.is_empty() || password.is_empty() {
        return LoginOutcome::MissingFields;
    }
    if login == credentials.login && password == credentials.password {
        LoginOutcome::Success
    } else {
        LoginOutcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Credentials {
        Credentials {
            login: "admin".into(),
            password: "admin123".into(),
        }
    }

    #[test]
    fn empty_fields_are_reported_first() {
        assert_eq!(check_login(&admin(), "", "admin123"), LoginOutcome::MissingFields);
        assert_eq!(check_login(&admin(), "admin", "   "), LoginOutcome::MissingFields);
        assert_eq!(
            LoginOutcome::MissingFields.message(),
            "Please fill in all fields!"
        );
    }

    #[test]
    fn matching_credentials_succeed_after_trim() {
        let outcome = check_login(&admin(), " admin ", "admin123\n");
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "Login successful!");
    }

    #[test]
    fn mismatch_is_invalid() {
        assert_eq!(check_login(&admin(), "admin", "wrong"), LoginOutcome::Invalid);
        assert_eq!(check_login(&admin(), "Admin", "admin123"), LoginOutcome::Invalid);
    }
}
