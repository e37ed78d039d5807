/*!
 * OData feeds and REST endpoints
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{
    constants::{
        ODataAadServicePrincipalCredentialType, ODataAuthenticationType,
        RestServiceAuthenticationType,
    },
    references::CredentialReference,
    secret::SecretBase,
};

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for an OData feed.
pub type ODataLinkedService = GeneralLinkedService<ODataLinkedServiceTypeProperties>;
/// Linked service for a REST endpoint.
pub type RestServiceLinkedService = GeneralLinkedService<RestServiceLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// OData linked service properties.
pub struct ODataLinkedServiceTypeProperties {
    /// The URL of the OData service endpoint. Type: string (or Expression with resultType string).
    pub url: Value,
    /// Type of authentication used to connect to the OData service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<ODataAuthenticationType>,
    /// User name of the OData service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// Password of the OData service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The additional HTTP headers in the request to RESTful API used for authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_headers: Option<Value>,
    /// Specify the tenant information (domain name or tenant ID) under which your application resides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Value>,
    /// Specify the application id of your application registered in Azure Active Directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_id: Option<Value>,
    /// Indicates the azure cloud type of the service principle auth. Allowed values are AzurePublic, AzureChina,
    /// AzureUsGovernment, AzureGermany. Default value is the data factory regions’ cloud type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_cloud_type: Option<Value>,
    /// Specify the resource you are requesting authorization to use Directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aad_resource_id: Option<Value>,
    /// Specify the credential type (key or cert) is used for service principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aad_service_principal_credential_type: Option<ODataAadServicePrincipalCredentialType>,
    /// Specify the secret of your application registered in Azure Active Directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_key: Option<SecretBase>,
    /// Specify the base64 encoded certificate of your application registered in Azure Active Directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_embedded_cert: Option<SecretBase>,
    /// Specify the password of your certificate if your certificate has a password and you are using AadServicePrincipal authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_embedded_cert_password: Option<SecretBase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
}

impl LinkedServiceProperties for ODataLinkedServiceTypeProperties {
    const TYPE: &'static str = "OData";
    const SECRET_FIELDS: &'static [&'static str] = &[
        "password",
        "servicePrincipalKey",
        "servicePrincipalEmbeddedCert",
        "servicePrincipalEmbeddedCertPassword",
    ];
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Rest Service linked service properties.
pub struct RestServiceLinkedServiceTypeProperties {
    /// The base URL of the REST service.
    pub url: Value,
    /// Whether to validate server side SSL certificate when connecting to the endpoint. The default value is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_server_certificate_validation: Option<Value>,
    /// Type of authentication used to connect to the REST service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<RestServiceAuthenticationType>,
    /// The user name used in Basic authentication type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value>,
    /// The password used in Basic authentication type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretBase>,
    /// The additional HTTP headers in the request to RESTful API used for authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_headers: Option<Value>,
    /// The application's client ID used in AadServicePrincipal authentication type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_id: Option<Value>,
    /// The application's key used in AadServicePrincipal authentication type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_key: Option<SecretBase>,
    /// The tenant information (domain name or tenant ID) used in AadServicePrincipal authentication type
    /// under which your application resides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Value>,
    /// Indicates the azure cloud type of the service principal auth. Allowed values are AzurePublic,
    /// AzureChina, AzureUsGovernment, AzureGermany. Default value is the data factory regions' cloud type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_cloud_type: Option<Value>,
    /// The resource you are requesting authorization to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aad_resource_id: Option<Value>,
    /// The encrypted credential used for authentication. Credentials are encrypted using the integration runtime credential manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_credential: Option<String>,
    /// The credential reference containing authentication information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<CredentialReference>,
    /// The client ID associated with your application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,
    /// The client secret associated with your application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<SecretBase>,
    /// The token endpoint of the authorization server to acquire access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<Value>,
    /// The target service or resource to which the access will be requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
    /// The scope of the access required. It describes what kind of access will be requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Value>,
    /// The service principal credential type to use in Server-To-Server authentication.
    /// 'ServicePrincipalKey' for key/secret, 'ServicePrincipalCert' for certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_credential_type: Option<Value>,
    /// Specify the base64 encoded certificate of your application registered in Azure Active Directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_embedded_cert: Option<SecretBase>,
    /// Specify the password of your certificate if your certificate has a password and you are using AadServicePrincipal authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_embedded_cert_password: Option<SecretBase>,
}

impl LinkedServiceProperties for RestServiceLinkedServiceTypeProperties {
    const TYPE: &'static str = "RestService";
    const SECRET_FIELDS: &'static [&'static str] = &[
        "password",
        "servicePrincipalKey",
        "clientSecret",
        "servicePrincipalEmbeddedCert",
        "servicePrincipalEmbeddedCertPassword",
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::Error;

    use super::*;

    #[test]
    fn odata_service_principal_cert() -> Result<(), Error> {
        let linked_service = ODataLinkedService::from_value(json!({
            "type": "OData",
            "typeProperties": {
                "url": "https://services.odata.org/OData/OData.svc",
                "authenticationType": "AadServicePrincipal",
                "tenant": "contoso.onmicrosoft.com",
                "servicePrincipalId": "00000000-0000-0000-0000-000000000000",
                "aadResourceId": "https://contoso.crm.dynamics.com",
                "aadServicePrincipalCredentialType": "ServicePrincipalCert",
                "servicePrincipalEmbeddedCert": {"type": "SecureString", "value": "MIIC..."},
                "servicePrincipalEmbeddedCertPassword": {"type": "SecureString", "value": "pfx"}
            }
        }))?;
        let properties = &linked_service.type_properties;
        assert_eq!(
            properties.authentication_type,
            Some(ODataAuthenticationType::AadServicePrincipal)
        );
        assert_eq!(
            properties.aad_service_principal_credential_type,
            Some(ODataAadServicePrincipalCredentialType::ServicePrincipalCert)
        );
        assert_eq!(
            properties.service_principal_embedded_cert_password,
            Some(SecretBase::secure_string("pfx"))
        );
        assert_eq!(properties.service_principal_key, None);
        Ok(())
    }

    #[test]
    fn odata_embedded_cert_error_names_field() {
        let err = ODataLinkedService::from_value(json!({
            "type": "OData",
            "typeProperties": {
                "url": "https://services.odata.org/OData/OData.svc",
                "servicePrincipalEmbeddedCert": {"type": "Certificate", "value": "MIIC..."}
            }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Secret {
                linked_service: "OData",
                field: "servicePrincipalEmbeddedCert",
                ..
            }
        ));
    }

    #[test]
    fn rest_service_client_credential() -> Result<(), Error> {
        let json = json!({
            "type": "RestService",
            "typeProperties": {
                "url": "https://api.example.com/v1",
                "enableServerCertificateValidation": true,
                "authenticationType": "OAuth2ClientCredential",
                "clientId": "client",
                "clientSecret": {"type": "SecureString", "value": "secret"},
                "tokenEndpoint": "https://login.example.com/oauth2/token",
                "scope": "read",
                "credential": {"type": "CredentialReference", "referenceName": "uami"}
            }
        });
        let linked_service = RestServiceLinkedService::from_value(json.clone())?;
        assert_eq!(
            linked_service
                .type_properties
                .credential
                .as_ref()
                .map(|credential| credential.reference_name.as_str()),
            Some("uami")
        );
        assert_eq!(serde_json::to_value(&linked_service)?, json);
        Ok(())
    }
}
