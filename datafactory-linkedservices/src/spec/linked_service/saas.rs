/*!
 * Software-as-a-service applications
 *
 * Most of these connectors talk to a hosted HTTPS API and share the
 * `useEncryptedEndpoints`, `useHostVerification` and `usePeerVerification` switches.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{
    constants::{ServiceNowAuthenticationType, ZendeskAuthenticationType},
    secret::SecretBase,
};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for Xero.
pub type XeroLinkedService = GeneralLinkedService<XeroLinkedServiceTypeProperties>;
/// Linked service for Zoho.
pub type ZohoLinkedService = GeneralLinkedService<ZohoLinkedServiceTypeProperties>;
/// Linked service for Zendesk.
pub type ZendeskLinkedService = GeneralLinkedService<ZendeskLinkedServiceTypeProperties>;
/// Linked service for ServiceNow.
pub type ServiceNowLinkedService = GeneralLinkedService<ServiceNowLinkedServiceTypeProperties>;
/// Linked service for Jira.
pub type JiraLinkedService = GeneralLinkedService<JiraLinkedServiceTypeProperties>;
/// Linked service for Marketo.
pub type MarketoLinkedService = GeneralLinkedService<MarketoLinkedServiceTypeProperties>;
/// Linked service for QuickBooks.
pub type QuickBooksLinkedService = GeneralLinkedService<QuickBooksLinkedServiceTypeProperties>;
/// Linked service for Hubspot.
pub type HubspotLinkedService = GeneralLinkedService<HubspotLinkedServiceTypeProperties>;
/// Linked service for Shopify.
pub type ShopifyLinkedService = GeneralLinkedService<ShopifyLinkedServiceTypeProperties>;
/// Linked service for Square.
pub type SquareLinkedService = GeneralLinkedService<SquareLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Xero Service linked service properties.
pub struct XeroLinkedServiceTypeProperties {
    /// Properties used to connect to Xero. It is mutually exclusive with any other properties in the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Value>,
    /// The endpoint of the Xero server. (i.e. api.xero.com)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Value>,
    /// The consumer key associated with the Xero application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<SecretBase>,
    /// The private key from the .pem file that was generated for your Xero private application.
    /// You must include all the text from the .pem file, including the Unix line endings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<SecretBase>,
    /// Specifies whether the data source endpoints are encrypted using HTTPS. The default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    /// Specifies whether to require the host name in the server's certificate to match the host name of the server when connecting over SSL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    /// Specifies whether to verify the identity of the server when connecting over SSL. The default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for XeroLinkedServiceTypeProperties {
    const TYPE: &'static str = "Xero";
    const SECRET_FIELDS: &'static [&'static str] = &["consumerKey", "privateKey"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Zoho server linked service properties.
pub struct ZohoLinkedServiceTypeProperties {
    /// Properties used to connect to Zoho. It is mutually exclusive with any other properties in the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Value>,
    /// The endpoint of the Zoho server. (i.e. crm.zoho.com/crm/private)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    /// The access token for Zoho authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for ZohoLinkedServiceTypeProperties {
    const TYPE: &'static str = "Zoho";
    const SECRET_FIELDS: &'static [&'static str] = &["accessToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Zendesk linked service type properties.
pub struct ZendeskLinkedServiceTypeProperties {
    /// The authentication type to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<ZendeskAuthenticationType>,
    /// The url to connect Zendesk source. Type: string (or Expression with resultType string).
    pub url: Value,
    /// The username of the Zendesk source. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// The password of the Zendesk source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The api token for the Zendesk source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for ZendeskLinkedServiceTypeProperties {
    const TYPE: &'static str = "Zendesk";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "apiToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// ServiceNow server linked service properties.
pub struct ServiceNowLinkedServiceTypeProperties {
    /// The endpoint of the ServiceNow server. (i.e. <instance>.service-now.com)
    pub endpoint: Value,
    /// The authentication type to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<ServiceNowAuthenticationType>,
    /// The user name used to connect to the ServiceNow server for Basic and OAuth2 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// The password corresponding to the user name for Basic and OAuth2 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The client id for OAuth2 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,
    /// The client secret for OAuth2 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for ServiceNowLinkedServiceTypeProperties {
    const TYPE: &'static str = "ServiceNow";
    const SECRET_FIELDS: &'static [&'static str] = &["password", "clientSecret"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Jira Service linked service properties.
pub struct JiraLinkedServiceTypeProperties {
    /// The IP address or host name of the Jira service. (e.g. jira.example.com)
    pub host: Value,
    /// The TCP port that the Jira server uses to listen for client connections.
    /// The default value is 443 if connecting through HTTPS, or 8080 if connecting through HTTP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    /// The user name that you use to access Jira Service.
    pub username: Value,
    /// The password corresponding to the user name that you provided in the username field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for JiraLinkedServiceTypeProperties {
    const TYPE: &'static str = "Jira";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Marketo server linked service properties.
pub struct MarketoLinkedServiceTypeProperties {
    /// The endpoint of the Marketo server. (i.e. 123-ABC-321.mktorest.com)
    pub endpoint: Value,
    /// The client Id of your Marketo service.
    pub client_id: Value,
    /// The client secret of your Marketo service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for MarketoLinkedServiceTypeProperties {
    const TYPE: &'static str = "Marketo";
    const SECRET_FIELDS: &'static [&'static str] = &["clientSecret"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// QuickBooks server linked service properties.
pub struct QuickBooksLinkedServiceTypeProperties {
    /// Properties used to connect to QuickBooks. It is mutually exclusive with any other properties in the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Value>,
    /// The endpoint of the QuickBooks server. (i.e. quickbooks.api.intuit.com)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    /// The company ID of the QuickBooks company to authorize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Value>,
    /// The consumer key for OAuth 1.0 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<Value>,
    /// The consumer secret for OAuth 1.0 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_secret: Option<SecretBase>,
    /// The access token for OAuth 1.0 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SecretBase>,
    /// The access token secret for OAuth 1.0 authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_secret: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for QuickBooksLinkedServiceTypeProperties {
    const TYPE: &'static str = "QuickBooks";
    const SECRET_FIELDS: &'static [&'static str] =
        &["consumerSecret", "accessToken", "accessTokenSecret"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Hubspot Service linked service properties.
pub struct HubspotLinkedServiceTypeProperties {
    /// The client ID associated with your Hubspot application.
    pub client_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    /// The access token obtained when initially authenticating your OAuth integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SecretBase>,
    /// The refresh token obtained when initially authenticating your OAuth integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for HubspotLinkedServiceTypeProperties {
    const TYPE: &'static str = "Hubspot";
    const SECRET_FIELDS: &'static [&'static str] = &["clientSecret", "accessToken", "refreshToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Shopify Service linked service properties.
pub struct ShopifyLinkedServiceTypeProperties {
    /// The endpoint of the Shopify server. (i.e. mystore.myshopify.com)
    pub host: Value,
    /// The API access token that can be used to access Shopify's data. The token won't expire if it is offline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for ShopifyLinkedServiceTypeProperties {
    const TYPE: &'static str = "Shopify";
    const SECRET_FIELDS: &'static [&'static str] = &["accessToken"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Square Service linked service properties.
pub struct SquareLinkedServiceTypeProperties {
    /// Properties used to connect to Square. It is mutually exclusive with any other properties in the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Value>,
    /// The URL of the Square instance. (i.e. mystore.mysquare.com)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Value>,
    /// The client ID associated with your Square application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,
    /// The client secret associated with your Square application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    /// The redirect URL assigned in the Square application dashboard. (i.e. http://localhost:2500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_encrypted_endpoints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_host_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peer_verification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SquareLinkedServiceTypeProperties {
    const TYPE: &'static str = "Square";
    const SECRET_FIELDS: &'static [&'static str] = &["clientSecret"];
}
