//! Input hardening for the lead forms: attribute limits, sanitizing,
//! inline validation, a resubmit cooldown and the CSRF token.

use crate::constants::RESUBMIT_COOLDOWN_MS;
use instant::{Duration, Instant};
use rand::distributions::Alphanumeric;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

pub const SANITIZED_MAX_CHARS: usize = 1000;
pub const CSRF_TOKEN_LEN: usize = 32;
pub const CSRF_FIELD_NAME: &str = "csrf_token";
pub const CSRF_STORAGE_KEY: &str = "csrf_token";

pub const EMAIL_MAX_LENGTH: u32 = 254;
pub const PHONE_MAX_LENGTH: u32 = 20;
pub const TEXT_MAX_LENGTH: u32 = 100;
pub const TEXTAREA_MAX_LENGTH: u32 = 1000;

pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
pub const PHONE_PATTERN: &str = r"^[\d\s\+\-\(\)]+$";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Tel,
    Text,
    TextArea,
}

impl InputKind {
    /// Maps an `<input type>` (or `textarea`) to its kind. Other input
    /// types are left unhardened.
    pub fn from_type(ty: &str) -> Option<Self> {
        match ty {
            "email" => Some(Self::Email),
            "tel" => Some(Self::Tel),
            "text" => Some(Self::Text),
            "textarea" => Some(Self::TextArea),
            _ => None,
        }
    }

    /// Hardening attributes applied to inputs of this kind.
    pub fn attributes(self) -> Vec<(&'static str, String)> {
        match self {
            InputKind::Email => vec![
                ("pattern", EMAIL_PATTERN.to_string()),
                ("maxlength", EMAIL_MAX_LENGTH.to_string()),
                ("autocomplete", "email".to_string()),
                ("spellcheck", "false".to_string()),
            ],
            InputKind::Tel => vec![
                ("pattern", PHONE_PATTERN.to_string()),
                ("inputmode", "tel".to_string()),
                ("maxlength", PHONE_MAX_LENGTH.to_string()),
                ("autocomplete", "tel".to_string()),
            ],
            InputKind::Text => vec![
                ("maxlength", TEXT_MAX_LENGTH.to_string()),
                ("autocomplete", "off".to_string()),
            ],
            InputKind::TextArea => vec![
                ("maxlength", TEXTAREA_MAX_LENGTH.to_string()),
                ("autocomplete", "off".to_string()),
            ],
        }
    }

    /// Free-text inputs are sanitized as the user types.
    pub fn is_free_text(self) -> bool {
        matches!(self, InputKind::Text | InputKind::TextArea)
    }
}

/// What inline validation needs to know about a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub kind: InputKind,
    pub name: &'a str,
    pub required: bool,
}

pub fn validate_field(field: &FieldSpec<'_>, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if field.required && value.is_empty() {
        return Err(ValidationError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }
    match field.kind {
        InputKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        InputKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        _ if field.name == "name" && value.chars().count() < 2 => {
            Err(ValidationError::NameTooShort)
        }
        _ if field.name == "message" && value.chars().count() < 10 => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9+\-()]{10,}$").unwrap();

    static ref SCRIPT_BLOCK_RE: Regex = Regex::new(r"(?is)<script\b.*?</script>").unwrap();
    static ref JS_SCHEME_RE: Regex = Regex::new(r"(?i)javascript:").unwrap();
    static ref INLINE_HANDLER_RE: Regex =
        Regex::new(r#"(?i)on\w+\s*=\s*["'][^"']*["']"#).unwrap();
    static ref ESCAPED_OPEN_RE: Regex = Regex::new(r"(?i)&lt;script").unwrap();
    static ref ESCAPED_CLOSE_RE: Regex = Regex::new(r"(?i)&lt;/script&gt;").unwrap();
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whitespace is ignored; at least ten of digits, `+`, `-`, `(`, `)` remain.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Strip script blocks, `javascript:` schemes, inline handlers and control
/// characters, then trim and cap at [`SANITIZED_MAX_CHARS`].
pub fn sanitize_input(input: &str) -> String {
    let out = SCRIPT_BLOCK_RE.replace_all(input, "");
    let out = JS_SCHEME_RE.replace_all(&out, "");
    let out = INLINE_HANDLER_RE.replace_all(&out, "");
    let out = ESCAPED_OPEN_RE.replace_all(&out, "");
    let out = ESCAPED_CLOSE_RE.replace_all(&out, "");
    let out: String = out
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect();
    out.trim().chars().take(SANITIZED_MAX_CHARS).collect()
}

pub fn csrf_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please wait before submitting again")]
pub struct RateLimited;

/// Refuses a second submission within the cooldown window.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    last: Option<Instant>,
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    pub fn try_acquire(&mut self) -> Result<(), RateLimited> {
        self.try_acquire_at(Instant::now())
    }

    pub fn try_acquire_at(&mut self, now: Instant) -> Result<(), RateLimited> {
        let cooling = self
            .last
            .and_then(|last| last.checked_add(self.cooldown))
            .is_some_and(|ready| now < ready);
        if cooling {
            return Err(RateLimited);
        }
        self.last = Some(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(RESUBMIT_COOLDOWN_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(kind: InputKind, name: &str, required: bool) -> FieldSpec<'_> {
        FieldSpec {
            kind,
            name,
            required,
        }
    }

    #[test]
    fn required_fields_must_not_be_blank() {
        let f = field(InputKind::Text, "city", true);
        assert_eq!(validate_field(&f, "   "), Err(ValidationError::Required));
        let optional = field(InputKind::Email, "email", false);
        assert_eq!(validate_field(&optional, ""), Ok(()));
    }

    #[test]
    fn only_known_input_types_are_hardened() {
        assert_eq!(InputKind::from_type("tel"), Some(InputKind::Tel));
        assert_eq!(InputKind::from_type("hidden"), None);
        let attrs = InputKind::TextArea.attributes();
        assert!(attrs.contains(&("maxlength", "1000".to_string())));
    }

    #[test]
    fn email_and_phone_rules() {
        assert!(is_valid_email("hello@anelia.in"));
        assert!(!is_valid_email("hello@anelia"));
        assert!(!is_valid_email("he llo@anelia.in"));
        assert!(is_valid_phone("+91 98450 12345"));
        assert!(is_valid_phone("(080) 2345-6789"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98450x12345"));
    }

    #[test]
    fn name_and_message_lengths() {
        let name = field(InputKind::Text, "name", true);
        assert_eq!(validate_field(&name, "A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_field(&name, "Al"), Ok(()));
        let msg = field(InputKind::TextArea, "message", true);
        assert_eq!(
            validate_field(&msg, "too short"),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn sanitize_strips_scripts_and_handlers() {
        let dirty = "Hi <SCRIPT>alert(1)</script>there <a onclick=\"x()\">javascript:go</a>\u{0007}";
        assert_eq!(sanitize_input(dirty), "Hi there <a >go</a>");
        assert_eq!(sanitize_input("&lt;script&gt;x&lt;/script&gt;"), "&gt;x");
    }

    #[test]
    fn sanitize_caps_length() {
        let long = "a".repeat(SANITIZED_MAX_CHARS + 50);
        assert_eq!(sanitize_input(&long).len(), SANITIZED_MAX_CHARS);
    }

    #[test]
    fn csrf_tokens_are_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = csrf_token(&mut rng);
        assert_eq!(t.len(), CSRF_TOKEN_LEN);
        assert!(t.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(t, csrf_token(&mut rng));
    }

    #[test]
    fn rate_limiter_enforces_cooldown() {
        let mut rl = RateLimiter::default();
        let t0 = Instant::now();
        assert_eq!(rl.try_acquire_at(t0), Ok(()));
        assert_eq!(
            rl.try_acquire_at(t0 + Duration::from_millis(1500)),
            Err(RateLimited)
        );
        assert_eq!(rl.try_acquire_at(t0 + Duration::from_millis(3000)), Ok(()));
    }
}
