/*!
 * Relational databases and warehouses
 *
 * Oracle and Snowflake only accept a key vault reference for their password,
 * every other connector here takes any [SecretBase].
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{
    constants::{Db2AuthenticationType, TeradataAuthenticationType},
    secret::{AzureKeyVaultSecretReference, SecretBase},
};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for an Oracle database.
pub type OracleLinkedService = GeneralLinkedService<OracleLinkedServiceTypeProperties>;
/// Linked service for a Snowflake warehouse.
pub type SnowflakeLinkedService = GeneralLinkedService<SnowflakeLinkedServiceTypeProperties>;
/// Linked service for a DB2 database.
pub type Db2LinkedService = GeneralLinkedService<Db2LinkedServiceTypeProperties>;
/// Linked service for a Teradata database.
pub type TeradataLinkedService = GeneralLinkedService<TeradataLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Oracle database linked service properties.
pub struct OracleLinkedServiceTypeProperties {
    /// The connection string. Type: string, SecureString or AzureKeyVaultSecretReference.
    pub connection_string: Value,
    /// The Azure key vault secret reference of password in connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<AzureKeyVaultSecretReference>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for OracleLinkedServiceTypeProperties {
    const TYPE: &'static str = "Oracle";
    const KEY_VAULT_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Snowflake linked service properties.
pub struct SnowflakeLinkedServiceTypeProperties {
    /// The connection string of snowflake. Type: string, SecureString.
    pub connection_string: Value,
    /// The Azure key vault secret reference of password in connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<AzureKeyVaultSecretReference>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for SnowflakeLinkedServiceTypeProperties {
    const TYPE: &'static str = "Snowflake";
    const KEY_VAULT_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// DB2 linked service properties.
pub struct Db2LinkedServiceTypeProperties {
    /// The connection string. It is mutually exclusive with server, database, authenticationType,
    /// userName, packageCollection and certificateCommonName property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<Value>,
    /// Server name for connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Value>,
    /// Database name for connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<Value>,
    /// AuthenticationType to be used for connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<Db2AuthenticationType>,
    /// Username for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Password for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// Under where packages are created when querying database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_collection: Option<Value>,
    /// Certificate Common Name when TLS is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_common_name: Option<Value>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for Db2LinkedServiceTypeProperties {
    const TYPE: &'static str = "Db2";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Teradata linked service properties.
pub struct TeradataLinkedServiceTypeProperties {
    /// Teradata ODBC connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<Value>,
    /// Server name for connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Value>,
    /// AuthenticationType to be used for connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<TeradataAuthenticationType>,
    /// Username for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Password for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for TeradataLinkedServiceTypeProperties {
    const TYPE: &'static str = "Teradata";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        error::Error,
        spec::{linked_service::LinkedService, references::LinkedServiceReference},
    };

    use super::*;

    #[test]
    fn oracle_key_vault_password() -> Result<(), Error> {
        let json = json!({
            "type": "Oracle",
            "typeProperties": {
                "connectionString": "Host=oracle.internal;Port=1521;Sid=orcl;User Id=etl",
                "password": {
                    "type": "AzureKeyVaultSecret",
                    "store": {"type": "LinkedServiceReference", "referenceName": "vault"},
                    "secretName": "oracle-password"
                }
            }
        });
        let linked_service = OracleLinkedService::from_value(json.clone())?;
        assert_eq!(
            linked_service.type_properties.password,
            Some(AzureKeyVaultSecretReference::new(
                LinkedServiceReference::new("vault"),
                "oracle-password"
            ))
        );
        assert_eq!(serde_json::to_value(&linked_service)?, json);
        Ok(())
    }

    #[test]
    fn snowflake_requires_connection_string() {
        assert!(SnowflakeLinkedService::from_value(json!({
            "type": "Snowflake",
            "typeProperties": {}
        }))
        .is_err());
    }

    #[test]
    fn db2_basic() -> Result<(), Error> {
        let linked_service = Db2LinkedService::from_value(json!({
            "type": "Db2",
            "typeProperties": {
                "server": "db2.internal:50000",
                "database": "SAMPLE",
                "authenticationType": "Basic",
                "username": "db2inst1",
                "password": {"type": "SecureString", "value": "db2"},
                "packageCollection": "NULLID"
            }
        }))?;
        assert_eq!(
            linked_service.type_properties.authentication_type,
            Some(Db2AuthenticationType::Basic)
        );
        assert_eq!(linked_service.type_properties.connection_string, None);
        Ok(())
    }

    #[test]
    fn teradata_password_error_names_field() {
        let err = TeradataLinkedService::from_value(json!({
            "type": "Teradata",
            "typeProperties": {
                "server": "td.internal",
                "password": "plain"
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Secret {
                linked_service: "Teradata",
                field: "password",
                ..
            }
        ));
    }

    #[test]
    fn key_vault_password_rejects_other_secret_kinds() {
        for (tag, source_is_unknown) in [("PlainText", true), ("SecureString", false)] {
            for connector in ["Oracle", "Snowflake"] {
                let err = LinkedService::from_value(json!({
                    "type": connector,
                    "typeProperties": {
                        "connectionString": "account=xy12345",
                        "password": {"type": tag, "value": "x"}
                    }
                }))
                .unwrap_err();
                match err {
                    Error::Secret {
                        linked_service,
                        field: "password",
                        source,
                    } => {
                        assert_eq!(linked_service, connector);
                        assert_eq!(
                            matches!(*source, Error::UnknownDiscriminator { .. }),
                            source_is_unknown
                        );
                        assert_eq!(
                            matches!(*source, Error::DiscriminatorMismatch { .. }),
                            !source_is_unknown
                        );
                    }
                    other => panic!("{connector} accepted a {tag} password: {other:?}"),
                }
            }
        }
    }
}
