/*!
 * MongoDB compatible document stores
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{constants::MongoDbAuthenticationType, secret::SecretBase};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for a MongoDB server reached through host and credentials.
pub type MongoDbLinkedService = GeneralLinkedService<MongoDbLinkedServiceTypeProperties>;
/// Linked service for a MongoDB server reached through a connection string.
pub type MongoDbV2LinkedService = GeneralLinkedService<MongoDbV2LinkedServiceTypeProperties>;
/// Linked service for a MongoDB Atlas cluster.
pub type MongoDbAtlasLinkedService = GeneralLinkedService<MongoDbAtlasLinkedServiceTypeProperties>;
/// Linked service for the MongoDB API of Cosmos DB.
pub type CosmosDbMongoDbApiLinkedService =
    GeneralLinkedService<CosmosDbMongoDbApiLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// MongoDB linked service properties.
pub struct MongoDbLinkedServiceTypeProperties {
    /// The IP address or server name of the MongoDB server. Type: string (or Expression with resultType string).
    pub server: Value,
    /// The authentication type to be used to connect to the MongoDB database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<MongoDbAuthenticationType>,
    /// The name of the MongoDB database that you want to access. Type: string (or Expression with resultType string).
    pub database_name: Value,
    /// Username for authentication. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Password for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// Database to verify the username and password. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_source: Option<Value>,
    /// The TCP port number that the MongoDB server uses to listen for client connections.
    /// The default value is 27017. Type: integer (or Expression with resultType integer), minimum: 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    /// Specifies whether the connections to the server are encrypted using SSL. The default value is false.
    /// Type: boolean (or Expression with resultType boolean).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<Value>,
    /// Specifies whether to allow self-signed certificates from the server. The default value is false.
    /// Type: boolean (or Expression with resultType boolean).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_self_signed_server_cert: Option<Value>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for MongoDbLinkedServiceTypeProperties {
    const TYPE: &'static str = "MongoDb";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// MongoDB linked service properties.
pub struct MongoDbV2LinkedServiceTypeProperties {
    /// The MongoDB connection string. Type: string, SecureString or AzureKeyVaultSecretReference.
    pub connection_string: Value,
    /// The name of the MongoDB database that you want to access. Type: string (or Expression with resultType string).
    pub database: Value,
}

impl LinkedServiceProperties for MongoDbV2LinkedServiceTypeProperties {
    const TYPE: &'static str = "MongoDbV2";
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// MongoDB Atlas linked service properties.
pub struct MongoDbAtlasLinkedServiceTypeProperties {
    /// The MongoDB Atlas connection string. Type: string, SecureString or AzureKeyVaultSecretReference.
    pub connection_string: Value,
    /// The name of the MongoDB Atlas database that you want to access. Type: string (or Expression with resultType string).
    pub database: Value,
    /// The driver version that you want to choose. Allowed value are v1 and v2. Type: string (or Expression with resultType string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_version: Option<Value>,
}

impl LinkedServiceProperties for MongoDbAtlasLinkedServiceTypeProperties {
    const TYPE: &'static str = "MongoDbAtlas";
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// CosmosDB (MongoDB API) linked service properties.
pub struct CosmosDbMongoDbApiLinkedServiceTypeProperties {
    /// Whether the CosmosDB (MongoDB API) server version is higher than 3.2. The default value is false.
    /// Type: boolean (or Expression with resultType boolean).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_server_version_above32: Option<Value>,
    /// The CosmosDB (MongoDB API) connection string. Type: string, SecureString or AzureKeyVaultSecretReference.
    pub connection_string: Value,
    /// The name of the CosmosDB (MongoDB API) database that you want to access. Type: string (or Expression with resultType string).
    pub database: Value,
}

impl LinkedServiceProperties for CosmosDbMongoDbApiLinkedServiceTypeProperties {
    const TYPE: &'static str = "CosmosDbMongoDbApi";
}
