/*!
 * Resource envelope of linked services
 *
 * The management API wraps every linked service in a resource carrying its identity,
 * the polymorphic [LinkedService] lives in `properties`.
*/

use std::{fmt, str};

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::linked_service::{AsLinkedService, LinkedService};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(build_fn(error = "Error"), setter(prefix = "with"))]
/// Linked service resource type.
pub struct LinkedServiceResource {
    /// The resource identifier.
    #[builder(setter(strip_option, into), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// The resource name.
    #[builder(setter(strip_option, into), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// The resource type.
    #[builder(setter(strip_option, into), default)]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    /// Etag identifies change in the resource.
    #[builder(setter(strip_option, into), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
    /// Properties of linked service.
    #[builder(setter(into))]
    properties: LinkedService,
}

impl LinkedServiceResource {
    /// Creates a new builder for the resource
    pub fn builder() -> LinkedServiceResourceBuilder {
        LinkedServiceResourceBuilder::default()
    }

    /// Discriminator of the wrapped linked service
    pub fn linked_service_type(&self) -> &'static str {
        self.properties.type_name()
    }

    /// Unwraps the linked service
    pub fn into_properties(self) -> LinkedService {
        self.properties
    }
}

impl fmt::Display for LinkedServiceResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?,
        )
    }
}

impl str::FromStr for LinkedServiceResource {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(Error::from)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Getters)]
#[serde(rename_all = "camelCase")]
/// A list of linked service resources.
pub struct LinkedServiceListResponse {
    /// List of linked services.
    value: Vec<LinkedServiceResource>,
    /// The link to the next page of results, if any remaining results exist.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    next_link: Option<String>,
}

impl LinkedServiceListResponse {
    /// Creates a page of resources
    pub fn new(value: Vec<LinkedServiceResource>, next_link: Option<String>) -> Self {
        LinkedServiceListResponse { value, next_link }
    }

    /// Iterates over the linked services of the page
    pub fn linked_services(&self) -> impl Iterator<Item = &LinkedService> {
        self.value.iter().map(LinkedServiceResource::properties)
    }
}

impl IntoIterator for LinkedServiceListResponse {
    type Item = LinkedServiceResource;
    type IntoIter = std::vec::IntoIter<LinkedServiceResource>;
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::spec::linked_service::{JiraLinkedService, JiraLinkedServiceTypeProperties};

    use super::*;

    fn check_resource_roundtrip(json: &str) {
        let resource: LinkedServiceResource = json.parse().unwrap();
        let text = resource.to_string();
        let reparsed: LinkedServiceResource = text.parse().unwrap();
        assert_eq!(resource, reparsed);
    }

    #[test]
    fn resource() {
        let json = r#"
            {
                "id": "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.DataFactory/factories/adf/linkedservices/zoho",
                "name": "zoho",
                "type": "Microsoft.DataFactory/factories/linkedservices",
                "etag": "0a008ad4-0000-0000-0000-5b245c6e0000",
                "properties": {
                    "type": "Zoho",
                    "typeProperties": {
                        "endpoint": "crm.zoho.com/crm/private",
                        "accessToken": {"type": "SecureString", "value": "token"}
                    }
                }
            }
        "#;
        let resource: LinkedServiceResource = json.parse().unwrap();
        assert_eq!(resource.name().as_deref(), Some("zoho"));
        assert_eq!(resource.linked_service_type(), "Zoho");
        assert!(resource.properties().as_zoho().is_some());
        check_resource_roundtrip(json);
    }

    #[test]
    fn unknown_properties_type_fails() {
        let result = r#"{"name": "s3", "properties": {"type": "AmazonS3", "typeProperties": {}}}"#
            .parse::<LinkedServiceResource>();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("AmazonS3"));
    }

    #[test]
    fn builder() -> Result<(), Error> {
        let resource = LinkedServiceResource::builder()
            .with_name("jira")
            .with_properties(JiraLinkedService::new(JiraLinkedServiceTypeProperties {
                host: json!("jira.example.com"),
                username: json!("svc"),
                ..Default::default()
            }))
            .build()?;
        assert_eq!(
            serde_json::to_value(&resource)?,
            json!({
                "name": "jira",
                "properties": {
                    "type": "Jira",
                    "typeProperties": {"host": "jira.example.com", "username": "svc"}
                }
            })
        );
        Ok(())
    }

    #[test]
    fn list_response() {
        let page: LinkedServiceListResponse = serde_json::from_value(json!({
            "value": [
                {
                    "name": "vault",
                    "properties": {
                        "type": "AzureKeyVault",
                        "typeProperties": {"baseUrl": "https://myakv.vault.azure.net"}
                    }
                },
                {
                    "name": "mongo",
                    "properties": {
                        "type": "MongoDbAtlas",
                        "typeProperties": {
                            "connectionString": "mongodb+srv://cluster0.example.net",
                            "database": "orders"
                        }
                    }
                }
            ],
            "nextLink": "https://management.azure.com/next"
        }))
        .unwrap();
        assert_eq!(
            page.linked_services()
                .map(AsLinkedService::type_name)
                .collect::<Vec<_>>(),
            vec!["AzureKeyVault", "MongoDbAtlas"]
        );
        assert_eq!(
            page.next_link().as_deref(),
            Some("https://management.azure.com/next")
        );
        assert_eq!(page.into_iter().count(), 2);
    }
}
