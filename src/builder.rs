//! Custom candidate builders.
//!
//! A builder contributes extra literal candidates on top of the built-in
//! generators. The director only collects and escapes what each builder
//! returns; it never interprets it.

use secrecy::SecretString;

use crate::error::BuilderError;
use crate::options::WordListOptions;

/// Capability implemented by caller-supplied candidate builders.
///
/// Builders are invoked in registration order and their candidates are kept
/// in the order returned. Returning an empty list is valid.
pub trait CandidateBuilder: Send + Sync {
    fn build(
        &self,
        password: &SecretString,
        options: &WordListOptions,
    ) -> Result<Vec<String>, BuilderError>;
}

impl<F> CandidateBuilder for F
where
    F: Fn(&SecretString, &WordListOptions) -> Result<Vec<String>, BuilderError> + Send + Sync,
{
    fn build(
        &self,
        password: &SecretString,
        options: &WordListOptions,
    ) -> Result<Vec<String>, BuilderError> {
        self(password, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    struct FixedBuilder;

    impl CandidateBuilder for FixedBuilder {
        fn build(
            &self,
            _password: &SecretString,
            _options: &WordListOptions,
        ) -> Result<Vec<String>, BuilderError> {
            Ok(vec!["testpassword1430".to_string()])
        }
    }

    #[test]
    fn test_struct_builder() {
        let pwd = SecretString::new("mypassword".to_string().into());
        let result = FixedBuilder.build(&pwd, &WordListOptions::default());
        assert_eq!(result.unwrap(), vec!["testpassword1430".to_string()]);
    }

    #[test]
    fn test_closure_builder() {
        let upper = |password: &SecretString, _: &WordListOptions| -> Result<Vec<String>, BuilderError> {
            Ok(vec![password.expose_secret().to_uppercase()])
        };
        let pwd = SecretString::new("mypassword".to_string().into());
        let result = upper.build(&pwd, &WordListOptions::default());
        assert_eq!(result.unwrap(), vec!["MYPASSWORD".to_string()]);
    }
}
