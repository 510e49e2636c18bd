use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An external event a record knows how to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A failed login was observed for the record's key.
    AccountLogin,
}

impl Action {
    /// Look up an action by its wire name, returning `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "accountLogin" => Some(Action::AccountLogin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AccountLogin => "accountLogin",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_name(s).ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Action::from_name("accountLogin"), Some(Action::AccountLogin));
        assert_eq!(Action::from_name("AccountLogin"), None);
        assert_eq!(Action::from_name(""), None);
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = "bogusAction".parse::<Action>().unwrap_err();
        assert!(matches!(err, Error::UnknownAction(name) if name == "bogusAction"));
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(Action::AccountLogin.to_string(), "accountLogin");
        assert_eq!("accountLogin".parse::<Action>().unwrap(), Action::AccountLogin);
    }
}
