//! Pattern director - assembles the weak password matching expression.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::PatternError;
use crate::escape::escape;
use crate::generators::{
    doubled_word_generator, number_suffix_generator, reversed_word_generator, GeneratorResult,
};
use crate::options::WordListOptions;

/// Delay applied by [`match_password_expression_tx`] before building.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Builds an anchored alternation matching the password and its enabled weak variants.
///
/// Candidates appear in this order, each escaped:
/// 1. the password itself
/// 2. the password without its trailing digits (`check_number_suffix`)
/// 3. the first half of a doubled password (`check_doubled_word`)
/// 4. the reversed password (`check_reversed_word`)
/// 5. every string returned by each custom builder, in registration order
///
/// Duplicates are kept. The result embeds the password, so it is returned
/// as a secret.
///
/// # Errors
/// - `PatternError::InvalidArgument` if `password` or `options` is absent, or
///   the password is empty. Checked before anything else runs.
/// - `PatternError::Builder` carrying a custom builder's own error unchanged.
pub fn match_password_expression(
    password: Option<&SecretString>,
    options: Option<&WordListOptions>,
) -> Result<SecretString, PatternError> {
    let Some(password) = password else {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern build FAILED: password is absent");
        return Err(PatternError::InvalidArgument("password is required"));
    };
    let Some(options) = options else {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern build FAILED: options are absent");
        return Err(PatternError::InvalidArgument("options are required"));
    };
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Pattern build FAILED: password is empty");
        return Err(PatternError::InvalidArgument("password must not be empty"));
    }

    let mut candidates = vec![escape(password.expose_secret())];

    // Built-in generators, fixed order, all fed the original password
    let generators: [(&str, bool, fn(&SecretString) -> GeneratorResult); 3] = [
        ("number-suffix", options.check_number_suffix, number_suffix_generator),
        ("doubled-word", options.check_doubled_word, doubled_word_generator),
        ("reversed-word", options.check_reversed_word, reversed_word_generator),
    ];

    for (generator_name, enabled, generator_fn) in generators {
        if !enabled {
            continue;
        }

        match generator_fn(password) {
            Some(candidate) => candidates.push(escape(&candidate)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Generator {} produced no candidate", generator_name);
            }
        }
    }

    for (index, builder) in options.custom_builders().iter().enumerate() {
        let extra = builder.build(password, options).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Custom builder #{} FAILED: {}", index, e);
            PatternError::Builder(e)
        })?;
        candidates.extend(extra.iter().map(|c| escape(c)));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Pattern built with {} candidates ({} custom builders)",
        candidates.len(),
        options.custom_builders().len()
    );

    let pattern = format!("^{}$", candidates.join("|"));
    Ok(SecretString::new(pattern.into()))
}

/// Async version that debounces, then sends the built pattern via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn match_password_expression_tx(
    password: &SecretString,
    options: &WordListOptions,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, PatternError>>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Pattern build cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = match_password_expression(Some(password), Some(options));

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password pattern: {}", e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_password_expression_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let options = WordListOptions::new().with_reversed_word(true);

        let pwd = secret("Password1");
        match_password_expression_tx(&pwd, &options, token, tx).await;

        let result = rx.recv().await.expect("Should receive pattern");
        let pattern = result.expect("pattern should build");
        assert_eq!(pattern.expose_secret(), "^Password1|1drowssaP$");
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_password_expression_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("Password1");
        match_password_expression_tx(&pwd, &WordListOptions::default(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_password_expression_tx_sends_errors() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = secret("");
        match_password_expression_tx(&pwd, &WordListOptions::default(), token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert!(matches!(result, Err(PatternError::InvalidArgument(_))));
    }
}
