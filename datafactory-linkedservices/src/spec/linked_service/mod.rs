/*!
 * Linked services
 *
 * A linked service describes how a factory connects to an external system. Every linked
 * service shares the same envelope:
 *
 * ```json
 * {
 *   "type": "Xero",
 *   "description": "...",
 *   "connectVia": { "referenceName": "...", "type": "IntegrationRuntimeReference" },
 *   "parameters": { ... },
 *   "annotations": [ ... ],
 *   "version": "...",
 *   "typeProperties": { ... }
 * }
 * ```
 *
 * The `typeProperties` bag is specific to each connector. Connectors are modelled as
 * [GeneralLinkedService] instantiated with their properties type, and collected in the
 * [LinkedService] sum type that dispatches on the `type` discriminator.
 */

use std::{collections::HashMap, fmt, str};

use derive_builder::Builder;
use derive_getters::Getters;
use enum_as_inner::EnumAsInner;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::Error,
    util::{discriminator, dispatch},
};

use super::{
    references::{IntegrationRuntimeReference, ParameterSpecification},
    secret::{AzureKeyVaultSecretReference, SecretBase},
};

pub mod azure;
pub mod file;
pub mod mongodb;
pub mod relational;
pub mod saas;
pub mod salesforce;
pub mod sap;
pub mod web;

pub use azure::*;
pub use file::*;
pub use mongodb::*;
pub use relational::*;
pub use saas::*;
pub use salesforce::*;
pub use sap::*;
pub use web::*;

use _serde::{LinkedServiceRef, LinkedServiceWire};

/// Connector specific `typeProperties` of a linked service.
pub trait LinkedServiceProperties:
    Serialize + DeserializeOwned + fmt::Debug + Clone + PartialEq + Default
{
    /// Discriminator of the connector, written to the `type` member on encode.
    const TYPE: &'static str;
    /// Members of `typeProperties` holding a [SecretBase].
    const SECRET_FIELDS: &'static [&'static str] = &[];
    /// Members of `typeProperties` that only accept an [AzureKeyVaultSecretReference].
    const KEY_VAULT_FIELDS: &'static [&'static str] = &[];
}

/// Capability shared by every linked service representation.
pub trait AsLinkedService {
    /// Discriminator of the concrete linked service
    fn type_name(&self) -> &'static str;
    /// Projection on the fields every linked service has
    fn to_base(&self) -> BaseLinkedService;
}

#[derive(Debug, PartialEq, Clone, Default, Builder)]
#[builder(build_fn(error = "Error"), setter(prefix = "with"))]
/// A linked service whose connector specific properties are `P`.
pub struct GeneralLinkedService<P: LinkedServiceProperties> {
    /// List of tags that can be used for describing the linked service.
    #[builder(setter(strip_option), default)]
    pub annotations: Option<Vec<Value>>,
    /// The integration runtime reference.
    #[builder(setter(strip_option), default)]
    pub connect_via: Option<IntegrationRuntimeReference>,
    /// Linked service description.
    #[builder(setter(strip_option, into), default)]
    pub description: Option<String>,
    /// Parameters for linked service.
    #[builder(setter(strip_option), default)]
    pub parameters: Option<HashMap<String, ParameterSpecification>>,
    /// Version of the linked service.
    #[builder(setter(strip_option, into), default)]
    pub version: Option<String>,
    /// Connector specific properties.
    pub type_properties: P,
}

impl<P: LinkedServiceProperties> GeneralLinkedService<P> {
    /// Creates a linked service without any of the optional envelope fields
    pub fn new(type_properties: P) -> Self {
        GeneralLinkedService {
            annotations: None,
            connect_via: None,
            description: None,
            parameters: None,
            version: None,
            type_properties,
        }
    }

    /// Creates a new builder for the linked service
    pub fn builder() -> GeneralLinkedServiceBuilder<P> {
        GeneralLinkedServiceBuilder::default()
    }

    /// Decodes the linked service from a JSON value
    ///
    /// A payload without `type` is accepted. Secret-bearing type properties are resolved
    /// before the remaining fields are read, so a failure names the offending member.
    ///
    /// # Errors
    /// * [Error::DiscriminatorMismatch] if the payload is tagged for another connector
    /// * [Error::Secret] if a secret member carries an unknown or malformed secret
    /// * [Error::JSONSerde] if the payload doesn't match the connector schema
    #[instrument(
        name = "datafactory_linkedservices::linked_service::from_value",
        level = "trace",
        skip(value),
        fields(linked_service = P::TYPE)
    )]
    pub fn from_value(value: Value) -> Result<Self, Error> {
        if let Some(found) = discriminator(LinkedService::KIND, &value)? {
            if !found.eq_ignore_ascii_case(P::TYPE) {
                return Err(Error::DiscriminatorMismatch {
                    expected: P::TYPE,
                    found: found.to_owned(),
                });
            }
        }
        resolve_secrets::<P>(&value)?;
        let wire: LinkedServiceWire<P> = serde_json::from_value(value)?;
        Ok(wire.into())
    }
}

/// Checks every declared secret member of `typeProperties` against its secret resolver.
///
/// This pass only exists to name the connector and the member in the error. The
/// resolved secrets are dropped, the members are decoded again by serde through the
/// same resolvers, so both passes accept exactly the same payloads.
fn resolve_secrets<P: LinkedServiceProperties>(value: &Value) -> Result<(), Error> {
    let Some(properties) = value.get("typeProperties").and_then(Value::as_object) else {
        return Ok(());
    };
    let secrets = P::SECRET_FIELDS
        .iter()
        .map(|field| (*field, resolve_secret_base as SecretResolver))
        .chain(
            P::KEY_VAULT_FIELDS
                .iter()
                .map(|field| (*field, resolve_key_vault_secret as SecretResolver)),
        );
    for (field, resolve) in secrets {
        match properties.get(field) {
            None | Some(Value::Null) => (),
            Some(secret) => resolve(secret.clone()).map_err(|source| Error::Secret {
                linked_service: P::TYPE,
                field,
                source: Box::new(source),
            })?,
        }
    }
    Ok(())
}

type SecretResolver = fn(Value) -> Result<(), Error>;

fn resolve_secret_base(value: Value) -> Result<(), Error> {
    SecretBase::from_value(value).map(|_| ())
}

fn resolve_key_vault_secret(value: Value) -> Result<(), Error> {
    AzureKeyVaultSecretReference::from_value(value).map(|_| ())
}

impl<P: LinkedServiceProperties> AsLinkedService for GeneralLinkedService<P> {
    fn type_name(&self) -> &'static str {
        P::TYPE
    }

    fn to_base(&self) -> BaseLinkedService {
        BaseLinkedService {
            linked_service_type: P::TYPE.to_owned(),
            annotations: self.annotations.clone(),
            connect_via: self.connect_via.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
            version: self.version.clone(),
        }
    }
}

impl<P: LinkedServiceProperties> Serialize for GeneralLinkedService<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        LinkedServiceRef::from(self).serialize(serializer)
    }
}

impl<'de, P: LinkedServiceProperties> Deserialize<'de> for GeneralLinkedService<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        GeneralLinkedService::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Getters)]
#[serde(rename_all = "camelCase")]
/// The fields every linked service carries, regardless of its connector.
///
/// Decoding a payload into the base shape never inspects `typeProperties`, so it also
/// works for connectors this crate doesn't model.
pub struct BaseLinkedService {
    /// Discriminator of the linked service
    #[serde(rename = "type")]
    linked_service_type: String,
    /// List of tags that can be used for describing the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Value>>,
    /// The integration runtime reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    connect_via: Option<IntegrationRuntimeReference>,
    /// Linked service description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Parameters for linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<HashMap<String, ParameterSpecification>>,
    /// Version of the linked service.
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

type LinkedServiceDecoder = fn(Value) -> Result<LinkedService, Error>;

fn decode<P>(value: Value) -> Result<LinkedService, Error>
where
    P: LinkedServiceProperties,
    LinkedService: From<GeneralLinkedService<P>>,
{
    GeneralLinkedService::<P>::from_value(value).map(LinkedService::from)
}

macro_rules! linked_services {
    ($($variant:ident($properties:ty),)+) => {
        #[derive(Debug, PartialEq, Clone, EnumAsInner)]
        #[allow(clippy::large_enum_variant)]
        /// Any linked service, selected by its `type` discriminator.
        pub enum LinkedService {
            $(
                #[doc = concat!("`", stringify!($variant), "` linked service")]
                $variant(GeneralLinkedService<$properties>),
            )+
        }

        /// Decoders of the linked service family keyed by discriminator
        static REGISTRY: &[(&str, LinkedServiceDecoder)] = &[
            $((<$properties as LinkedServiceProperties>::TYPE, decode::<$properties>),)+
        ];

        impl AsLinkedService for LinkedService {
            fn type_name(&self) -> &'static str {
                match self {
                    $(LinkedService::$variant(linked_service) => linked_service.type_name(),)+
                }
            }

            fn to_base(&self) -> BaseLinkedService {
                match self {
                    $(LinkedService::$variant(linked_service) => linked_service.to_base(),)+
                }
            }
        }

        impl Serialize for LinkedService {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self {
                    $(LinkedService::$variant(linked_service) => linked_service.serialize(serializer),)+
                }
            }
        }

        $(
            impl From<GeneralLinkedService<$properties>> for LinkedService {
                fn from(value: GeneralLinkedService<$properties>) -> Self {
                    LinkedService::$variant(value)
                }
            }
        )+
    };
}

linked_services! {
    MongoDb(MongoDbLinkedServiceTypeProperties),
    MongoDbV2(MongoDbV2LinkedServiceTypeProperties),
    MongoDbAtlas(MongoDbAtlasLinkedServiceTypeProperties),
    CosmosDbMongoDbApi(CosmosDbMongoDbApiLinkedServiceTypeProperties),
    Salesforce(SalesforceLinkedServiceTypeProperties),
    SalesforceServiceCloud(SalesforceServiceCloudLinkedServiceTypeProperties),
    SalesforceMarketingCloud(SalesforceMarketingCloudLinkedServiceTypeProperties),
    SapCloudForCustomer(SapCloudForCustomerLinkedServiceTypeProperties),
    SapEcc(SapEccLinkedServiceTypeProperties),
    SapHana(SapHanaLinkedServiceTypeProperties),
    SapTable(SapTableLinkedServiceTypeProperties),
    Xero(XeroLinkedServiceTypeProperties),
    Zoho(ZohoLinkedServiceTypeProperties),
    Zendesk(ZendeskLinkedServiceTypeProperties),
    ServiceNow(ServiceNowLinkedServiceTypeProperties),
    Jira(JiraLinkedServiceTypeProperties),
    Marketo(MarketoLinkedServiceTypeProperties),
    QuickBooks(QuickBooksLinkedServiceTypeProperties),
    Hubspot(HubspotLinkedServiceTypeProperties),
    Shopify(ShopifyLinkedServiceTypeProperties),
    Square(SquareLinkedServiceTypeProperties),
    Oracle(OracleLinkedServiceTypeProperties),
    Snowflake(SnowflakeLinkedServiceTypeProperties),
    Db2(Db2LinkedServiceTypeProperties),
    Teradata(TeradataLinkedServiceTypeProperties),
    Sftp(SftpServerLinkedServiceTypeProperties),
    FtpServer(FtpServerLinkedServiceTypeProperties),
    HttpServer(HttpLinkedServiceTypeProperties),
    OData(ODataLinkedServiceTypeProperties),
    RestService(RestServiceLinkedServiceTypeProperties),
    AzureKeyVault(AzureKeyVaultLinkedServiceTypeProperties),
}

impl LinkedService {
    /// Name of the polymorphic family in error messages
    pub const KIND: &'static str = "LinkedService";

    /// Decodes a linked service, selecting the connector by the `type` discriminator
    ///
    /// The discriminator is compared ignoring ASCII case.
    ///
    /// # Errors
    /// * [Error::MissingDiscriminator] if the payload has no `type`
    /// * [Error::UnknownDiscriminator] if no connector is registered for the `type`
    /// * any error of [GeneralLinkedService::from_value] for the selected connector
    pub fn from_value(value: Value) -> Result<Self, Error> {
        dispatch(Self::KIND, REGISTRY, value)
    }

    /// Discriminators of all supported connectors
    pub fn known_types() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(tag, _)| *tag)
    }
}

impl<'de> Deserialize<'de> for LinkedService {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LinkedService::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LinkedService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?,
        )
    }
}

impl str::FromStr for LinkedService {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkedService::from_value(serde_json::from_str(s)?)
    }
}

mod _serde {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::spec::references::{IntegrationRuntimeReference, ParameterSpecification};

    use super::{GeneralLinkedService, LinkedServiceProperties};

    /// Borrowed wire shape, always tagged with the connector's discriminator
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct LinkedServiceRef<'a, P> {
        #[serde(rename = "type")]
        pub linked_service_type: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub annotations: Option<&'a Vec<Value>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub connect_via: Option<&'a IntegrationRuntimeReference>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<&'a String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parameters: Option<&'a HashMap<String, ParameterSpecification>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub version: Option<&'a String>,
        pub type_properties: &'a P,
    }

    /// Owned wire shape, the discriminator is checked before it is read
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct LinkedServiceWire<P> {
        pub annotations: Option<Vec<Value>>,
        pub connect_via: Option<IntegrationRuntimeReference>,
        pub description: Option<String>,
        pub parameters: Option<HashMap<String, ParameterSpecification>>,
        pub version: Option<String>,
        pub type_properties: P,
    }

    impl<'a, P: LinkedServiceProperties> From<&'a GeneralLinkedService<P>> for LinkedServiceRef<'a, P> {
        fn from(value: &'a GeneralLinkedService<P>) -> Self {
            LinkedServiceRef {
                linked_service_type: P::TYPE,
                annotations: value.annotations.as_ref(),
                connect_via: value.connect_via.as_ref(),
                description: value.description.as_ref(),
                parameters: value.parameters.as_ref(),
                version: value.version.as_ref(),
                type_properties: &value.type_properties,
            }
        }
    }

    impl<P: LinkedServiceProperties> From<LinkedServiceWire<P>> for GeneralLinkedService<P> {
        fn from(value: LinkedServiceWire<P>) -> Self {
            GeneralLinkedService {
                annotations: value.annotations,
                connect_via: value.connect_via,
                description: value.description,
                parameters: value.parameters,
                version: value.version,
                type_properties: value.type_properties,
            }
        }
    }
}
