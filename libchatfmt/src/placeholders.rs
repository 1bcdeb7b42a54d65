use libcommon::ChatError;
use std::fmt::Display;

/// Ordered list of literal `token -> value` replacements.
///
/// Pairs are applied one after another, so a later pair also sees
/// whatever an earlier pair has put into the text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pairs: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new() -> Self {
        Placeholders::default()
    }

    /// Build from a flat alternating `token, value, token, value...` list.
    /// Odd length is refused, rather than silently losing the last token.
    pub fn from_flat(flat: &[&dyn Display]) -> Result<Self, ChatError> {
        if flat.len() % 2 != 0 {
            return Err(ChatError::OddPlaceholders(flat.len()));
        }

        Ok(Placeholders { pairs: flat.chunks_exact(2).map(|p| (p[0].to_string(), p[1].to_string())).collect() })
    }

    /// Same as [`Placeholders::from_flat`], for values that are already strings,
    /// e.g. coming from a command line.
    pub fn from_strings<S: AsRef<str>>(flat: &[S]) -> Result<Self, ChatError> {
        if flat.len() % 2 != 0 {
            return Err(ChatError::OddPlaceholders(flat.len()));
        }

        Ok(Placeholders { pairs: flat.chunks_exact(2).map(|p| (p[0].as_ref().to_string(), p[1].as_ref().to_string())).collect() })
    }

    /// Add another replacement
    pub fn with(mut self, token: impl Display, value: impl Display) -> Self {
        self.pairs.push((token.to_string(), value.to_string()));
        self
    }

    /// Append all pairs of `other` after the current ones
    pub fn extend(&mut self, other: &Placeholders) {
        self.pairs.extend(other.pairs.iter().cloned());
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Display, V: Display> FromIterator<(K, V)> for Placeholders {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Placeholders { pairs: iter.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
}

/// Replace placeholders in the message. Matching is literal, no patterns.
pub fn format(message: &str, placeholders: &Placeholders) -> String {
    let mut out = message.to_string();
    for (token, value) in &placeholders.pairs {
        out = out.replace(token.as_str(), value);
    }

    out
}

/// Replace placeholders given as a flat alternating list.
///
/// ```
/// use libchatfmt::placeholders::format_flat;
/// let s = format_flat("Hi &name, you have &count pts", &[&"&name", &"Steve", &"&count", &5]).unwrap();
/// assert_eq!(s, "Hi Steve, you have 5 pts");
/// ```
pub fn format_flat(message: &str, flat: &[&dyn Display]) -> Result<String, ChatError> {
    Ok(format(message, &Placeholders::from_flat(flat)?))
}
