// Per-evaluation options. Kept deliberately small: everything else an
// evaluation needs (wordlists, keyboard graphs, the leet table) is owned by
// the estimator and shared across calls.

/// Options attached to a single evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Strings the attacker may already know about this user — names,
    /// email addresses, service names. They become a per-evaluation ranked
    /// dictionary (plus a leet wrapper over it) and are discarded after the
    /// call. Default: empty.
    pub user_inputs: Vec<String>,
    /// Locale tag the caller will render warnings, suggestions, and the
    /// crack-time display into. Opaque to the core: carried for the caller's
    /// renderer, never read here. Default: none.
    pub translation: Option<String>,
}

impl EvalOptions {
    /// Options with user inputs and no translation tag.
    pub fn with_user_inputs<I, S>(user_inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EvalOptions {
            user_inputs: user_inputs.into_iter().map(Into::into).collect(),
            translation: None,
        }
    }
}
