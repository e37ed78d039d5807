/*!
 * Polymorphic secret values
 *
 * Credential-bearing properties of a linked service hold a [SecretBase]. The concrete
 * representation is selected by the `type` member of the payload:
 *
 * - `SecureString`: the secret in plain text, encrypted at rest by the service
 * - `AzureKeyVaultSecret`: a pointer to a secret stored in an Azure Key Vault linked service
 */

use std::{fmt, str};

use derive_getters::Getters;
use enum_as_inner::EnumAsInner;
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::Error,
    util::{discriminator, dispatch},
};

use super::references::LinkedServiceReference;

type SecretDecoder = fn(Value) -> Result<SecretBase, Error>;

/// Decoders of the secret family keyed by discriminator
static REGISTRY: &[(&str, SecretDecoder)] = &[
    (SecureString::TYPE, decode_secure_string),
    (AzureKeyVaultSecretReference::TYPE, decode_azure_key_vault_secret),
];

fn decode_secure_string(value: Value) -> Result<SecretBase, Error> {
    Ok(SecretBase::SecureString(serde_json::from_value(value)?))
}

fn decode_azure_key_vault_secret(value: Value) -> Result<SecretBase, Error> {
    Ok(SecretBase::AzureKeyVaultSecret(
        AzureKeyVaultSecretReference::from_value(value)?,
    ))
}

#[derive(Debug, PartialEq, Clone, EnumAsInner)]
/// The base definition of a secret type.
pub enum SecretBase {
    /// Secret value stored in plain text
    SecureString(SecureString),
    /// Secret stored in Azure Key Vault
    AzureKeyVaultSecret(AzureKeyVaultSecretReference),
}

impl SecretBase {
    /// Name of the polymorphic family in error messages
    pub const KIND: &'static str = "SecretBase";

    /// Creates a plain text secret
    pub fn secure_string(value: impl Into<String>) -> Self {
        SecretBase::SecureString(SecureString::new(value))
    }

    /// Discriminator written for this secret
    pub fn type_name(&self) -> &'static str {
        match self {
            SecretBase::SecureString(_) => SecureString::TYPE,
            SecretBase::AzureKeyVaultSecret(_) => AzureKeyVaultSecretReference::TYPE,
        }
    }

    /// Resolves the concrete secret representation from its `type` member
    ///
    /// # Errors
    /// * [Error::MissingDiscriminator] if the payload has no `type`
    /// * [Error::UnknownDiscriminator] if the `type` is not a known secret kind
    /// * [Error::JSONSerde] if the payload doesn't match the selected representation
    #[instrument(
        name = "datafactory_linkedservices::secret::from_value",
        level = "trace",
        skip(value)
    )]
    pub fn from_value(value: Value) -> Result<Self, Error> {
        dispatch(Self::KIND, REGISTRY, value)
    }

    /// Discriminators of all known secret kinds
    pub fn known_types() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(tag, _)| *tag)
    }
}

impl Serialize for SecretBase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SecretBase::SecureString(secret) => secret.serialize(serializer),
            SecretBase::AzureKeyVaultSecret(secret) => secret.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SecretBase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SecretBase::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<SecureString> for SecretBase {
    fn from(value: SecureString) -> Self {
        SecretBase::SecureString(value)
    }
}

impl From<AzureKeyVaultSecretReference> for SecretBase {
    fn from(value: AzureKeyVaultSecretReference) -> Self {
        SecretBase::AzureKeyVaultSecret(value)
    }
}

impl fmt::Display for SecretBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?,
        )
    }
}

impl str::FromStr for SecretBase {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecretBase::from_value(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Getters)]
/// Secret value kept in plain text.
pub struct SecureString {
    /// Value of secure string.
    value: String,
}

impl SecureString {
    /// Discriminator of plain text secrets
    pub const TYPE: &'static str = "SecureString";

    /// Wraps a plain text secret
    pub fn new(value: impl Into<String>) -> Self {
        SecureString {
            value: value.into(),
        }
    }
}

impl Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SecureString", 2)?;
        state.serialize_field("type", Self::TYPE)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

#[derive(Debug, PartialEq, Clone, Getters)]
/// Azure Key Vault secret reference.
pub struct AzureKeyVaultSecretReference {
    /// The Azure Key Vault linked service reference.
    store: LinkedServiceReference,
    /// The name of the secret in Azure Key Vault. Type: string (or Expression with resultType string).
    secret_name: Value,
    /// The version of the secret in Azure Key Vault. The default value is the latest version of the secret.
    secret_version: Option<Value>,
}

impl AzureKeyVaultSecretReference {
    /// Discriminator of key vault secrets
    pub const TYPE: &'static str = "AzureKeyVaultSecret";

    /// References the latest version of `secret_name` in the key vault linked service `store`
    pub fn new(store: LinkedServiceReference, secret_name: impl Into<Value>) -> Self {
        AzureKeyVaultSecretReference {
            store,
            secret_name: secret_name.into(),
            secret_version: None,
        }
    }

    /// Pins the secret to a version
    pub fn with_secret_version(mut self, secret_version: impl Into<Value>) -> Self {
        self.secret_version = Some(secret_version.into());
        self
    }

    /// Decodes a key vault secret, for members that accept no other secret kind
    ///
    /// A missing `type` is accepted.
    ///
    /// # Errors
    /// * [Error::DiscriminatorMismatch] if the `type` names the other secret kind
    /// * [Error::UnknownDiscriminator] if the `type` is not a known secret kind
    /// * [Error::JSONSerde] if the payload is not a key vault secret
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match discriminator(SecretBase::KIND, &value)? {
            None => (),
            Some(tag) if tag.eq_ignore_ascii_case(Self::TYPE) => (),
            Some(tag) if tag.eq_ignore_ascii_case(SecureString::TYPE) => {
                return Err(Error::DiscriminatorMismatch {
                    expected: Self::TYPE,
                    found: tag.to_owned(),
                })
            }
            Some(tag) => {
                return Err(Error::UnknownDiscriminator {
                    kind: SecretBase::KIND,
                    found: tag.to_owned(),
                })
            }
        }
        Ok(serde_json::from_value::<_serde::AzureKeyVaultSecretWire>(value)?.into())
    }
}

impl<'de> Deserialize<'de> for AzureKeyVaultSecretReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        AzureKeyVaultSecretReference::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AzureKeyVaultSecretReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AzureKeyVaultSecretReference", 4)?;
        state.serialize_field("type", Self::TYPE)?;
        state.serialize_field("store", &self.store)?;
        state.serialize_field("secretName", &self.secret_name)?;
        match &self.secret_version {
            Some(secret_version) => state.serialize_field("secretVersion", secret_version)?,
            None => state.skip_field("secretVersion")?,
        }
        state.end()
    }
}

mod _serde {
    use serde_derive::Deserialize;
    use serde_json::Value;

    use crate::spec::references::LinkedServiceReference;

    use super::AzureKeyVaultSecretReference;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct AzureKeyVaultSecretWire {
        store: LinkedServiceReference,
        secret_name: Value,
        #[serde(default)]
        secret_version: Option<Value>,
    }

    impl From<AzureKeyVaultSecretWire> for AzureKeyVaultSecretReference {
        fn from(value: AzureKeyVaultSecretWire) -> Self {
            AzureKeyVaultSecretReference {
                store: value.store,
                secret_name: value.secret_name,
                secret_version: value.secret_version,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn secure_string() -> Result<(), Error> {
        let secret = SecretBase::from_value(json!({"type": "SecureString", "value": "hunter2"}))?;
        assert_eq!(secret, SecretBase::secure_string("hunter2"));
        assert_eq!(
            secret.as_secure_string().map(|s| s.value().as_str()),
            Some("hunter2")
        );
        Ok(())
    }

    #[test]
    fn azure_key_vault_secret() -> Result<(), Error> {
        let json = json!({
            "type": "AzureKeyVaultSecret",
            "store": {
                "referenceName": "vault",
                "type": "LinkedServiceReference"
            },
            "secretName": "mongo-password",
            "secretVersion": "3"
        });
        let secret: SecretBase = serde_json::from_value(json.clone())?;
        let reference = secret.as_azure_key_vault_secret().unwrap();
        assert_eq!(reference.store().reference_name, "vault");
        assert_eq!(reference.secret_name(), &json!("mongo-password"));
        assert_eq!(serde_json::to_value(&secret)?, json);
        Ok(())
    }

    #[test]
    fn tag_is_case_insensitive() {
        let secret: SecretBase = r#"{"type": "securestring", "value": "x"}"#.parse().unwrap();
        assert_eq!(secret.type_name(), "SecureString");
    }

    #[test]
    fn unknown_tag_fails() {
        let err = SecretBase::from_value(json!({"type": "PlainText", "value": "x"})).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownDiscriminator { kind: "SecretBase", ref found } if found == "PlainText"
        ));
    }

    #[test]
    fn missing_tag_fails() {
        let err = SecretBase::from_value(json!({"value": "x"})).unwrap_err();
        assert!(matches!(err, Error::MissingDiscriminator("SecretBase")));
        assert!(serde_json::from_value::<SecretBase>(json!("x")).is_err());
    }

    #[test]
    fn encode_forces_type() {
        let reference =
            AzureKeyVaultSecretReference::new(LinkedServiceReference::new("vault"), "token");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({
                "type": "AzureKeyVaultSecret",
                "store": {"type": "LinkedServiceReference", "referenceName": "vault"},
                "secretName": "token"
            })
        );
        assert_eq!(
            SecretBase::secure_string("x").to_string(),
            r#"{"type":"SecureString","value":"x"}"#
        );
    }

    #[test]
    fn key_vault_secret_checks_its_tag() {
        let unknown = serde_json::from_value::<AzureKeyVaultSecretReference>(json!({
            "type": "Bogus",
            "store": {"type": "LinkedServiceReference", "referenceName": "vault"},
            "secretName": "token"
        }));
        assert!(unknown.unwrap_err().to_string().contains("Bogus"));

        let err = AzureKeyVaultSecretReference::from_value(
            json!({"type": "securestring", "value": "x"}),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DiscriminatorMismatch { expected: "AzureKeyVaultSecret", ref found } if found == "securestring"
        ));

        let untagged = AzureKeyVaultSecretReference::from_value(json!({
            "store": {"referenceName": "vault"},
            "secretName": "token"
        }))
        .unwrap();
        assert_eq!(
            untagged,
            AzureKeyVaultSecretReference::new(LinkedServiceReference::new("vault"), "token")
        );
    }

    #[test]
    fn store_reference_is_written_canonically() -> Result<(), Error> {
        let secret = SecretBase::from_value(json!({
            "type": "azurekeyvaultsecret",
            "store": {"type": "Bogus", "referenceName": "vault"},
            "secretName": "token"
        }))?;
        assert_eq!(
            secret.to_string(),
            r#"{"type":"AzureKeyVaultSecret","store":{"type":"LinkedServiceReference","referenceName":"vault"},"secretName":"token"}"#
        );
        Ok(())
    }

    #[test]
    fn known_types() {
        assert_eq!(
            SecretBase::known_types().collect::<Vec<_>>(),
            vec!["SecureString", "AzureKeyVaultSecret"]
        );
    }
}
