/*!
 * Azure Key Vault
 *
 * The key vault linked service is the `store` that [AzureKeyVaultSecretReference](crate::spec::secret::AzureKeyVaultSecretReference)
 * secrets of other linked services point to.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::references::CredentialReference;

use super::{GeneralLinkedService, LinkedServiceProperties};

/// Linked service for an Azure Key Vault.
pub type AzureKeyVaultLinkedService = GeneralLinkedService<AzureKeyVaultLinkedServiceTypeProperties>;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
/// Azure Key Vault linked service properties.
pub struct AzureKeyVaultLinkedServiceTypeProperties {
    /// The base URL of the Azure Key Vault. e.g. https://myakv.vault.azure.net Type: string (or Expression with resultType string).
    pub base_url: Value,
    /// The credential reference containing authentication information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<CredentialReference>,
}

impl LinkedServiceProperties for AzureKeyVaultLinkedServiceTypeProperties {
    const TYPE: &'static str = "AzureKeyVault";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::Error;

    use super::*;

    #[test]
    fn azure_key_vault() -> Result<(), Error> {
        let linked_service = AzureKeyVaultLinkedService::from_value(json!({
            "type": "AzureKeyVault",
            "typeProperties": {"baseUrl": "https://myakv.vault.azure.net"}
        }))?;
        assert_eq!(
            linked_service.type_properties.base_url,
            json!("https://myakv.vault.azure.net")
        );
        assert_eq!(linked_service.type_properties.credential, None);
        Ok(())
    }

    #[test]
    fn foreign_type_is_rejected() {
        let err = AzureKeyVaultLinkedService::from_value(json!({
            "type": "AzureBlobStorage",
            "typeProperties": {"baseUrl": "https://myakv.vault.azure.net"}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DiscriminatorMismatch {
                expected: "AzureKeyVault",
                ref found
            } if found == "AzureBlobStorage"
        ));
    }

    #[test]
    fn missing_type_is_accepted() -> Result<(), Error> {
        let linked_service = AzureKeyVaultLinkedService::from_value(json!({
            "typeProperties": {"baseUrl": "https://myakv.vault.azure.net"}
        }))?;
        assert_eq!(
            serde_json::to_value(&linked_service)?["type"],
            json!("AzureKeyVault")
        );
        Ok(())
    }
}
