/*!
 * References to other factory entities and parameter declarations
 *
 * A reference always encodes its own kind as `type`. The tag found on decode is not kept.
*/

use std::collections::HashMap;

use serde::{
    ser::{SerializeMap, SerializeStruct},
    Deserialize, Serialize, Serializer,
};
use serde_json::Value;

use super::constants::ParameterType;

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Reference to another linked service of the same factory, e.g. the key vault holding a secret.
pub struct LinkedServiceReference {
    /// Name of the referenced linked service.
    pub reference_name: String,
    /// Arguments for the parameters of the referenced linked service.
    #[serde(default)]
    pub parameters: Option<HashMap<String, Value>>,
}

impl LinkedServiceReference {
    /// Kind written as `type`
    pub const TYPE: &'static str = "LinkedServiceReference";

    /// Creates a reference to the linked service called `reference_name`
    pub fn new(reference_name: impl Into<String>) -> Self {
        LinkedServiceReference {
            reference_name: reference_name.into(),
            parameters: None,
        }
    }
}

impl Serialize for LinkedServiceReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_reference(
            serializer,
            Self::TYPE,
            &self.reference_name,
            self.parameters.as_ref(),
        )
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Reference to the integration runtime a linked service connects through.
pub struct IntegrationRuntimeReference {
    /// Reference integration runtime name.
    pub reference_name: String,
    /// Arguments for integration runtime.
    #[serde(default)]
    pub parameters: Option<HashMap<String, Value>>,
}

impl IntegrationRuntimeReference {
    /// Kind written as `type`
    pub const TYPE: &'static str = "IntegrationRuntimeReference";

    /// Creates a reference to the integration runtime called `reference_name`
    pub fn new(reference_name: impl Into<String>) -> Self {
        IntegrationRuntimeReference {
            reference_name: reference_name.into(),
            parameters: None,
        }
    }
}

impl Serialize for IntegrationRuntimeReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_reference(
            serializer,
            Self::TYPE,
            &self.reference_name,
            self.parameters.as_ref(),
        )
    }
}

fn serialize_reference<S>(
    serializer: S,
    reference_type: &'static str,
    reference_name: &str,
    parameters: Option<&HashMap<String, Value>>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct(reference_type, 3)?;
    state.serialize_field("type", reference_type)?;
    state.serialize_field("referenceName", reference_name)?;
    match parameters {
        Some(parameters) => state.serialize_field("parameters", parameters)?,
        None => state.skip_field("parameters")?,
    }
    state.end()
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(from = "self::_serde::CredentialReferenceWire")]
/// Reference to a factory credential, e.g. a user assigned managed identity.
pub struct CredentialReference {
    /// Reference credential name.
    pub reference_name: String,
    /// Properties the service attaches to the reference, kept verbatim.
    pub additional_properties: HashMap<String, Value>,
}

impl CredentialReference {
    /// Kind written as `type`
    pub const TYPE: &'static str = "CredentialReference";

    /// Creates a reference to the credential called `reference_name`
    pub fn new(reference_name: impl Into<String>) -> Self {
        CredentialReference {
            reference_name: reference_name.into(),
            additional_properties: HashMap::new(),
        }
    }
}

impl Serialize for CredentialReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(2 + self.additional_properties.len()))?;
        state.serialize_entry("type", Self::TYPE)?;
        state.serialize_entry("referenceName", &self.reference_name)?;
        for (key, value) in &self.additional_properties {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
/// Definition of a single parameter for an entity.
pub struct ParameterSpecification {
    /// Parameter type.
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// Default value of parameter.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<Value>,
}

impl ParameterSpecification {
    /// Declares a parameter of the given type without default value
    pub fn new(parameter_type: ParameterType) -> Self {
        ParameterSpecification {
            parameter_type,
            default_value: None,
        }
    }

    /// Sets the default value of the parameter
    pub fn with_default_value(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }
}


mod _serde {
    use std::collections::HashMap;

    use serde::de::IgnoredAny;
    use serde_derive::Deserialize;
    use serde_json::Value;

    use super::CredentialReference;

    /// Decoding shape of [CredentialReference], keeps `type` out of the extra members
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct CredentialReferenceWire {
        #[serde(rename = "type", default)]
        _reference_type: Option<IgnoredAny>,
        reference_name: String,
        #[serde(flatten)]
        additional_properties: HashMap<String, Value>,
    }

    impl From<CredentialReferenceWire> for CredentialReference {
        fn from(value: CredentialReferenceWire) -> Self {
            CredentialReference {
                reference_name: value.reference_name,
                additional_properties: value.additional_properties,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn linked_service_reference() {
        let reference: LinkedServiceReference = serde_json::from_value(json!({
            "referenceName": "vault",
            "type": "LinkedServiceReference",
            "parameters": { "env": "prod" }
        }))
        .unwrap();
        assert_eq!(reference.reference_name, "vault");
        assert_eq!(
            serde_json::to_value(&reference).unwrap()["type"],
            json!("LinkedServiceReference")
        );
        assert_eq!(reference.parameters.unwrap()["env"], json!("prod"));
    }

    #[test]
    fn new_reference_writes_type() {
        let reference = IntegrationRuntimeReference::new("selfhosted");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({
                "type": "IntegrationRuntimeReference",
                "referenceName": "selfhosted"
            })
        );
    }

    #[test]
    fn foreign_tag_is_rewritten() {
        let linked_service: LinkedServiceReference =
            serde_json::from_value(json!({"type": "Bogus", "referenceName": "vault"})).unwrap();
        assert_eq!(linked_service, LinkedServiceReference::new("vault"));
        assert_eq!(
            serde_json::to_value(&linked_service).unwrap(),
            json!({"type": "LinkedServiceReference", "referenceName": "vault"})
        );

        let runtime: IntegrationRuntimeReference = serde_json::from_value(
            json!({"type": "linkedservicereference", "referenceName": "ir"}),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&runtime).unwrap(),
            json!({"type": "IntegrationRuntimeReference", "referenceName": "ir"})
        );

        let credential: CredentialReference =
            serde_json::from_value(json!({"type": "Bogus", "referenceName": "uami"})).unwrap();
        assert_eq!(credential, CredentialReference::new("uami"));
        assert_eq!(
            serde_json::to_value(&credential).unwrap(),
            json!({"type": "CredentialReference", "referenceName": "uami"})
        );
    }

    #[test]
    fn credential_reference_keeps_additional_properties() {
        let json = json!({
            "type": "CredentialReference",
            "referenceName": "uami",
            "resourceId": "/subscriptions/0000/identity"
        });
        let reference: CredentialReference = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(
            reference.additional_properties["resourceId"],
            json!("/subscriptions/0000/identity")
        );
        assert!(!reference.additional_properties.contains_key("type"));
        assert_eq!(serde_json::to_value(&reference).unwrap(), json);
    }

    #[test]
    fn parameter_specification() {
        let parameter = ParameterSpecification::new(ParameterType::Int).with_default_value(json!(5));
        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({"type": "Int", "defaultValue": 5})
        );
        let parameter: ParameterSpecification =
            serde_json::from_value(json!({"type": "String"})).unwrap();
        assert_eq!(parameter.default_value, None);
    }
}
