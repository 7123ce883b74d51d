//! `{name}` placeholder substitution for resolved messages.

use std::borrow::Cow;
use std::collections::HashMap;

/// Named values substituted into `{name}` placeholders.
pub type Params<'a> = HashMap<Cow<'a, str>, Cow<'a, str>>;

/// Replace every `{name}` placeholder in `template` with its parameter.
///
/// Names consist of ASCII alphanumerics, `_` and `-`. Placeholders without a
/// matching parameter render as empty strings, braces around anything else
/// are kept verbatim, and the result is trimmed.
///
/// ```
/// use lexis_common::i18n::{Params, interpolate};
///
/// let mut params = Params::new();
/// params.insert("name".into(), "Image".into());
/// assert_eq!(interpolate("Select {name} {missing}", &params), "Select Image");
/// assert_eq!(interpolate("{not a name}", &params), "{not a name}");
/// ```
#[must_use]
pub fn interpolate(template: &str, params: &Params<'_>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once('{') {
        output.push_str(before);
        match after_open.split_once('}') {
            Some((name, after_close)) if is_placeholder_name(name) => {
                if let Some(value) = params.get(name) {
                    output.push_str(value);
                }
                rest = after_close;
            }
            _ => {
                output.push('{');
                rest = after_open;
            }
        }
    }
    output.push_str(rest);

    output.trim().to_owned()
}

fn is_placeholder_name(name: &str) -> bool {
    name.chars()
        .all(|character| character.is_ascii_alphanumeric() || matches!(character, '_' | '-'))
}
