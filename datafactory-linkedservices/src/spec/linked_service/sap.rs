/*!
 * SAP systems
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{constants::SapHanaAuthenticationType, secret::SecretBase};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for SAP Cloud for Customer.
pub type SapCloudForCustomerLinkedService =
    GeneralLinkedService<SapCloudForCustomerLinkedServiceTypeProperties>;
/// Linked service for SAP ERP Central Component.
pub type SapEccLinkedService = GeneralLinkedService<SapEccLinkedServiceTypeProperties>;
/// Linked service for SAP HANA.
pub type SapHanaLinkedService = GeneralLinkedService<SapHanaLinkedServiceTypeProperties>;
/// Linked service for SAP tables.
pub type SapTableLinkedService = GeneralLinkedService<SapTableLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// SAP Cloud for Customer linked service properties.
pub struct SapCloudForCustomerLinkedServiceTypeProperties {
    /// The URL of SAP Cloud for Customer OData API. For example, '[https://[tenantname].crm.ondemand.com/sap/c4c/odata/v1]'.
    /// Type: string (or Expression with resultType string).
    pub url: Value,
    /// The username for Basic authentication. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// The password for Basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The encrypted credential used for authentication. Either encryptedCredential or username/password must be provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SapCloudForCustomerLinkedServiceTypeProperties {
    const TYPE: &'static str = "SapCloudForCustomer";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// SAP ECC linked service properties.
pub struct SapEccLinkedServiceTypeProperties {
    /// The URL of SAP ECC OData API. For example, '[https://hostname:port/sap/opu/odata/sap/servicename/]'.
    pub url: Value,
    /// The username for Basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// The password for Basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The encrypted credential used for authentication. Either encryptedCredential or username/password must be provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SapEccLinkedServiceTypeProperties {
    const TYPE: &'static str = "SapEcc";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Properties specific to this linked service type.
pub struct SapHanaLinkedServiceTypeProperties {
    /// SAP HANA ODBC connection string. Type: string, SecureString or AzureKeyVaultSecretReference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<Value>,
    /// Host name of the SAP HANA server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Value>,
    /// The authentication type to be used to connect to the SAP HANA server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<SapHanaAuthenticationType>,
    /// Username to access the SAP HANA server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password to access the SAP HANA server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SapHanaLinkedServiceTypeProperties {
    const TYPE: &'static str = "SapHana";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Properties specific to this linked service type.
pub struct SapTableLinkedServiceTypeProperties {
    /// Host name of the SAP instance where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Value>,
    /// System number of the SAP system where the table is located. (Usually a two-digit decimal number represented as a string.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_number: Option<Value>,
    /// Client ID of the client on the SAP system where the table is located. (Usually a three-digit decimal number represented as a string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,
    /// Language of the SAP system where the table is located. The default value is EN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Value>,
    /// SystemID of the SAP system where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_id: Option<Value>,
    /// Username to access the SAP server where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password to access the SAP server where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The hostname of the SAP Message Server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_server: Option<Value>,
    /// The service name or port number of the Message Server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_server_service: Option<Value>,
    /// SNC activation indicator to access the SAP server where the table is located. Must be either 0 (off) or 1 (on).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snc_mode: Option<Value>,
    /// Initiator's SNC name to access the SAP server where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snc_my_name: Option<Value>,
    /// Communication partner's SNC name to access the SAP server where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snc_partner_name: Option<Value>,
    /// External security product's library to access the SAP server where the table is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snc_library_path: Option<Value>,
    /// SNC Quality of Protection. Allowed value include: 1, 2, 3, 8, 9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snc_qop: Option<Value>,
    /// The Logon Group for the SAP System.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logon_group: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SapTableLinkedServiceTypeProperties {
    const TYPE: &'static str = "SapTable";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}
