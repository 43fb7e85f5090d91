use regex::Regex;
use std::sync::LazyLock;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern is valid"));

pub fn required(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(re: Regex, message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(msg.clone())
        }
    })
}

/// Minimal `something@something.something` check, not RFC 5322.
pub fn email_shape(message: impl Into<String>) -> Validator {
    pattern(EMAIL_SHAPE.clone(), message)
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(move |value: &str| if f(value) { Ok(()) } else { Err(msg.clone()) })
}

/// Runs validators in order and stops at the first failure.
pub fn run_all(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{custom, email_shape, required, run_all};

    #[test]
    fn required_rejects_whitespace_only() {
        let v = required("missing");
        assert_eq!(v("   \t"), Err("missing".to_string()));
        assert_eq!(v(" x "), Ok(()));
    }

    #[test]
    fn email_shape_accepts_minimal_addresses() {
        let v = email_shape("bad");
        assert!(v("ana@example.com").is_ok());
        assert!(v("a@b.c").is_ok());
        assert!(v("  padded a@b.c  ").is_ok());
    }

    #[test]
    fn email_shape_rejects_missing_parts() {
        let v = email_shape("bad");
        for value in ["ana", "ana@example", "ana.example.com", "@example.com", "ana@.com", "a @b.c"] {
            assert_eq!(v(value), Err("bad".to_string()), "{value} should be rejected");
        }
    }

    #[test]
    fn run_all_stops_at_first_failure() {
        let validators = vec![required("first"), custom(|v| v.len() > 5, "second")];
        assert_eq!(run_all(&validators, ""), Err("first".to_string()));
        assert_eq!(run_all(&validators, "abc"), Err("second".to_string()));
        assert_eq!(run_all(&validators, "abcdef"), Ok(()));
    }
}
