//! Secret handling: in-memory credential hygiene and change policies.

pub mod policy;
pub mod secure_credential;

pub use policy::{PolicyRequirement, PolicyRule, RuleStatus, SecretPolicy, StrengthBand};
pub use secure_credential::SecureCredential;
