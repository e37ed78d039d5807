/*!
 * Salesforce clouds
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::secret::SecretBase;

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for Salesforce.
pub type SalesforceLinkedService = GeneralLinkedService<SalesforceLinkedServiceTypeProperties>;
/// Linked service for Salesforce Service Cloud.
pub type SalesforceServiceCloudLinkedService =
    GeneralLinkedService<SalesforceServiceCloudLinkedServiceTypeProperties>;
/// Linked service for Salesforce Marketing Cloud.
pub type SalesforceMarketingCloudLinkedService =
    GeneralLinkedService<SalesforceMarketingCloudLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Salesforce linked service properties.
pub struct SalesforceLinkedServiceTypeProperties {
    /// The URL of Salesforce instance. Default is 'https://login.salesforce.com'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The security token is optional to remotely access Salesforce instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_token: Option<SecretBase>,
    /// The Salesforce API version used in ADF. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SalesforceLinkedServiceTypeProperties {
    const TYPE: &'static str = "Salesforce";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "securityToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Salesforce Service Cloud linked service properties.
pub struct SalesforceServiceCloudLinkedServiceTypeProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_token: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<Value>,
    /// Extended properties appended to the connection string. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SalesforceServiceCloudLinkedServiceTypeProperties {
    const TYPE: &'static str = "SalesforceServiceCloud";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "securityToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Salesforce Marketing Cloud linked service properties.
pub struct SalesforceMarketingCloudLinkedServiceTypeProperties {
    /// Properties used to connect to Salesforce Marketing Cloud. It is mutually exclusive with any other properties in the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Value>,
    /// The client ID associated with the Salesforce Marketing Cloud application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,
    /// The client secret associated with the Salesforce Marketing Cloud application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    /// Specifies whether the data source endpoints are encrypted using HTTPS. The default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    /// Specifies whether to require the host name in the server's certificate to match the host name of the server when connecting over SSL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    /// Specifies whether to verify the identity of the server when connecting over SSL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SalesforceMarketingCloudLinkedServiceTypeProperties {
    const TYPE: &'static str = "SalesforceMarketingCloud";
    const SECRET_FIELDS: &'static [&'static str] = &["clientSecret"];
}
