use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret value whose backing memory is zeroed on drop.
///
/// Form fields hold candidate secrets for as long as the user is typing;
/// wrapping them keeps the plaintext from lingering in memory afterwards and
/// from leaking through `Debug`/`Display` output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureCredential {
    data: String,
}

impl SecureCredential {
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Borrow the secret for validation.
    ///
    /// The reference points at memory that is zeroed when this value drops;
    /// do not stash it anywhere longer-lived.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for SecureCredential {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Clone for SecureCredential {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for SecureCredential {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureCredential {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredential")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SecureCredential: {} bytes]", self.len())
    }
}

impl PartialEq for SecureCredential {
    fn eq(&self, other: &Self) -> bool {
        // Length leak is acceptable; the contents are compared bytewise
        if self.len() != other.len() {
            return false;
        }
        self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for SecureCredential {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let credential = SecureCredential::from("hunter22");
        assert_eq!(credential.as_str(), "hunter22");
        assert_eq!(credential.len(), 8);
        assert!(!credential.is_empty());
        assert!(SecureCredential::default().is_empty());
    }

    #[test]
    fn equality() {
        assert_eq!(
            SecureCredential::from("same"),
            SecureCredential::from("same")
        );
        assert_ne!(
            SecureCredential::from("same"),
            SecureCredential::from("other")
        );
    }

    #[test]
    fn debug_and_display_redact() {
        let credential = SecureCredential::from("secret");
        let debug_str = format!("{credential:?}");
        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("REDACTED"));

        let display_str = format!("{credential}");
        assert!(!display_str.contains("secret"));
        assert!(display_str.contains("6 bytes"));
    }
}
