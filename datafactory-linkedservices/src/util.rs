/*!
This module provides helpers shared by the polymorphic decoders.
*/
use itertools::Itertools;
use serde_json::Value;

use crate::error::Error;

/// Name of the discriminator member in every polymorphic payload.
pub static DISCRIMINATOR: &str = "type";

/// Reads the discriminator of a JSON object
///
/// # Arguments
/// * `kind` - Name of the polymorphic family, used in error messages
/// * `value` - The payload to inspect
///
/// # Returns
/// * `Ok(Some(tag))` if the object carries a string discriminator
/// * `Ok(None)` if the discriminator is absent or `null`
/// * `Err` if the payload is not an object or the discriminator is not a string
pub fn discriminator<'a>(kind: &'static str, value: &'a Value) -> Result<Option<&'a str>, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::InvalidFormat(format!("{kind} payload")))?;
    match object.get(DISCRIMINATOR) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(tag)) => Ok(Some(tag.as_str())),
        Some(_) => Err(Error::InvalidFormat(format!("{kind} discriminator"))),
    }
}

/// Finds the registry entry registered under `tag`, ignoring ASCII case
///
/// # Examples
/// ```
/// use datafactory_linkedservices::util::lookup;
/// let registry = [("MongoDbV2", 1), ("Xero", 2)];
/// assert_eq!(lookup(&registry, "mongodbv2"), Some(&1));
/// assert_eq!(lookup(&registry, "Zoho"), None);
/// ```
pub fn lookup<'a, T>(registry: &'a [(&'static str, T)], tag: &str) -> Option<&'a T> {
    registry
        .iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(tag))
        .map(|(_, entry)| entry)
}

/// Decodes a payload with the registry entry selected by its discriminator
///
/// # Arguments
/// * `kind` - Name of the polymorphic family, used in error messages
/// * `registry` - Decoders keyed by discriminator
/// * `value` - The payload to decode
pub fn dispatch<T>(
    kind: &'static str,
    registry: &[(&'static str, fn(Value) -> Result<T, Error>)],
    value: Value,
) -> Result<T, Error> {
    let tag = discriminator(kind, &value)?.ok_or(Error::MissingDiscriminator(kind))?;
    let decode = lookup(registry, tag).ok_or_else(|| {
        tracing::debug!(
            kind,
            tag,
            expected = %registry.iter().map(|(registered, _)| registered).join(", "),
            "rejecting unknown discriminator"
        );
        Error::UnknownDiscriminator {
            kind,
            found: tag.to_owned(),
        }
    })?;
    decode(value)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::error::Error;

    use super::{discriminator, dispatch, lookup};

    #[test]
    fn discriminator_behaves_as_expected() {
        assert_eq!(
            discriminator("SecretBase", &json!({"type": "SecureString"})).unwrap(),
            Some("SecureString")
        );
        assert_eq!(
            discriminator("SecretBase", &json!({"type": null})).unwrap(),
            None
        );
        assert_eq!(discriminator("SecretBase", &json!({})).unwrap(), None);
        assert!(discriminator("SecretBase", &json!({"type": 3})).is_err());
        assert!(discriminator("SecretBase", &json!(["SecureString"])).is_err());
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = [("SapHana", "hana"), ("SapEcc", "ecc")];
        assert_eq!(lookup(&registry, "SAPHANA"), Some(&"hana"));
        assert_eq!(lookup(&registry, "sapecc"), Some(&"ecc"));
        assert_eq!(lookup(&registry, "SapTable"), None);
    }

    #[test]
    fn dispatch_selects_decoder() {
        fn first(_: Value) -> Result<u8, Error> {
            Ok(1)
        }
        fn second(_: Value) -> Result<u8, Error> {
            Ok(2)
        }
        let registry: [(&str, fn(Value) -> Result<u8, Error>); 2] =
            [("First", first), ("Second", second)];
        assert_eq!(
            dispatch("Test", &registry, json!({"type": "second"})).unwrap(),
            2
        );
        assert!(matches!(
            dispatch("Test", &registry, json!({"type": "Third"})),
            Err(Error::UnknownDiscriminator { kind: "Test", .. })
        ));
        assert!(matches!(
            dispatch("Test", &registry, json!({})),
            Err(Error::MissingDiscriminator("Test"))
        ));
    }
}
