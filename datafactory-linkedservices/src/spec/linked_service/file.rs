/*!
 * File and HTTP servers
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{
    constants::{FtpAuthenticationType, HttpAuthenticationType, SftpAuthenticationType},
    secret::SecretBase,
};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for an SFTP server.
pub type SftpServerLinkedService = GeneralLinkedService<SftpServerLinkedServiceTypeProperties>;
/// Linked service for an FTP server.
pub type FtpServerLinkedService = GeneralLinkedService<FtpServerLinkedServiceTypeProperties>;
/// Linked service for an HTTP source.
pub type HttpLinkedService = GeneralLinkedService<HttpLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Properties specific to the SFTP linked service.
pub struct SftpServerLinkedServiceTypeProperties {
    /// The SFTP server host name. Type: string (or Expression with resultType string).
    pub host: Value,
    /// The TCP port number that the SFTP server uses to listen for client connections. Default value is 22.
    /// Type: integer (or Expression with resultType integer), minimum: 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    /// The authentication type to be used to connect to the FTP server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<SftpAuthenticationType>,
    /// The username used to log on to the SFTP server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password to logon the SFTP server for Basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
    /// The SSH private key file path for SshPublicKey authentication. Only valid for on-premises copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<Value>,
    /// Base64 encoded SSH private key content for SshPublicKey authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_content: Option<SecretBase>,
    /// The password to decrypt the SSH private key if the SSH private key is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_phrase: Option<SecretBase>,
    /// If true, skip the SSH host key validation. Default value is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_host_key_validation: Option<Value>,
    /// The host key finger-print of the SFTP server. When SkipHostKeyValidation is false, HostKeyFingerprint should be specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_key_fingerprint: Option<Value>,
}

impl LinkedServiceProperties for SftpServerLinkedServiceTypeProperties {
    const TYPE: &'static str = "Sftp";
    const SECRET_FIELDS: &'static [&'static str] =
        &["password", "privateKeyContent", "passPhrase"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Properties specific to this linked service type.
pub struct FtpServerLinkedServiceTypeProperties {
    /// Host name of the FTP server.
    pub host: Value,
    /// The TCP port number that the FTP server uses to listen for client connections. Default value is 21.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    /// The authentication type to be used to connect to the FTP server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<FtpAuthenticationType>,
    /// Username to logon the FTP server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password to logon the FTP server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
    /// If true, connect to the FTP server over SSL/TLS channel. Default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<Value>,
    /// If true, validate the FTP server SSL certificate when connect over SSL/TLS channel. Default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server_certificate_validation: Option<Value>,
}

impl LinkedServiceProperties for FtpServerLinkedServiceTypeProperties {
    const TYPE: &'static str = "FtpServer";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Properties specific to this linked service type.
pub struct HttpLinkedServiceTypeProperties {
    /// The base URL of the HTTP endpoint, e.g. https://www.microsoft.com.
    pub url: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<HttpAuthenticationType>,
    /// User name for Basic, Digest, or Windows authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password for Basic, Digest, Windows, or ClientCertificate with EmbeddedCertData authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The additional HTTP headers in the request to RESTful API used for authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_headers: Option<Value>,
    /// Base64 encoded certificate data for ClientCertificate authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_cert_data: Option<Value>,
    /// Thumbprint of certificate for ClientCertificate authentication. Only valid for on-premises copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_thumbprint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
    /// If true, validate the HTTPS server SSL certificate. Default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server_certificate_validation: Option<Value>,
}

impl LinkedServiceProperties for HttpLinkedServiceTypeProperties {
    const TYPE: &'static str = "HttpServer";
    const SECRET_FIELDS: &'static [&'static str] = &["password"];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{error::Error, spec::linked_service::AsLinkedService};

    use super::*;

    #[test]
    fn sftp_ssh_public_key() -> Result<(), Error> {
        let json = json!({
            "type": "Sftp",
            "typeProperties": {
                "host": "sftp.example.com",
                "port": 22,
                "authenticationType": "SshPublicKey",
                "userName": "transfer",
                "privateKeyContent": {"type": "SecureString", "value": "LS0tLS1CRUdJTi..."},
                "passPhrase": {"type": "SecureString", "value": "phrase"},
                "skipHostKeyValidation": false,
                "hostKeyFingerprint": "ssh-rsa 2048 00:11:22:33"
            }
        });
        let linked_service = SftpServerLinkedService::from_value(json.clone())?;
        assert_eq!(linked_service.type_name(), "Sftp");
        assert_eq!(
            linked_service.type_properties.authentication_type,
            Some(SftpAuthenticationType::SshPublicKey)
        );
        assert_eq!(linked_service.type_properties.password, None);
        assert_eq!(serde_json::to_value(&linked_service)?, json);
        Ok(())
    }

    #[test]
    fn sftp_pass_phrase_error_names_field() {
        let err = SftpServerLinkedService::from_value(json!({
            "type": "Sftp",
            "typeProperties": {
                "host": "sftp.example.com",
                "passPhrase": {"type": 7}
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Secret {
                linked_service: "Sftp",
                field: "passPhrase",
                ..
            }
        ));
    }

    #[test]
    fn ftp_server() -> Result<(), Error> {
        let linked_service = FtpServerLinkedService::from_value(json!({
            "type": "FtpServer",
            "typeProperties": {
                "host": "ftp.example.com",
                "authenticationType": "Anonymous",
                "enableSsl": false
            }
        }))?;
        assert_eq!(
            linked_service.type_properties.authentication_type,
            Some(FtpAuthenticationType::Anonymous)
        );
        assert_eq!(linked_service.type_properties.enable_ssl, Some(json!(false)));
        Ok(())
    }

    #[test]
    fn http_server_with_expression_url() -> Result<(), Error> {
        let url = json!({"type": "Expression", "value": "@linkedService().baseUrl"});
        let linked_service = HttpLinkedService::from_value(json!({
            "type": "HttpServer",
            "parameters": {"baseUrl": {"type": "String"}},
            "typeProperties": {
                "url": url,
                "authenticationType": "Basic",
                "userName": "reader",
                "password": {"type": "SecureString", "value": "pw"}
            }
        }))?;
        assert_eq!(linked_service.type_properties.url, url);
        assert!(linked_service
            .parameters
            .as_ref()
            .map(|parameters| parameters.contains_key("baseUrl"))
            .unwrap_or(false));
        Ok(())
    }
}
