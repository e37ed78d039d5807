/*!
 * Closed string vocabularies used by linked service properties
 *
 * Every enumeration parses case-insensitively into its canonical value.
 * Values the service added after this crate was written are not rejected,
 * they are kept verbatim in the `Unrecognized` variant and written back unchanged.
 */

use std::{convert::Infallible, fmt, str};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Hash, Clone)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A value outside the known vocabulary
            Unrecognized(String),
        }

        impl $name {
            /// All values known for this enumeration
            pub fn possible_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            /// The wire representation of the value
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unrecognized(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $(
                    if value.eq_ignore_ascii_case($value) {
                        return $name::$variant;
                    }
                )+
                tracing::trace!(value, kind = stringify!($name), "keeping unrecognized value");
                $name::Unrecognized(value.to_owned())
            }
        }

        impl str::FromStr for $name {
            type Err = Infallible;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// Type of a pipeline or linked service parameter
    ParameterType {
        Array => "Array",
        Bool => "Bool",
        Float => "Float",
        Int => "Int",
        Object => "Object",
        SecureString => "SecureString",
        String => "String",
    }
}

string_enum! {
    /// Authentication used to connect to a MongoDB server
    MongoDbAuthenticationType {
        Anonymous => "Anonymous",
        Basic => "Basic",
    }
}

string_enum! {
    /// Authentication used to connect to SAP HANA
    SapHanaAuthenticationType {
        Basic => "Basic",
        Windows => "Windows",
    }
}

string_enum! {
    /// Authentication used to connect to Zendesk
    ZendeskAuthenticationType {
        Basic => "Basic",
        Token => "Token",
    }
}

string_enum! {
    /// Authentication used to connect to ServiceNow
    ServiceNowAuthenticationType {
        Basic => "Basic",
        OAuth2 => "OAuth2",
    }
}

string_enum! {
    /// Authentication used to connect to an SFTP server
    SftpAuthenticationType {
        Basic => "Basic",
        MultiFactor => "MultiFactor",
        SshPublicKey => "SshPublicKey",
    }
}

string_enum! {
    /// Authentication used to connect to an FTP server
    FtpAuthenticationType {
        Anonymous => "Anonymous",
        Basic => "Basic",
    }
}

string_enum! {
    /// Authentication used to connect to an HTTP server
    HttpAuthenticationType {
        Anonymous => "Anonymous",
        Basic => "Basic",
        ClientCertificate => "ClientCertificate",
        Digest => "Digest",
        Windows => "Windows",
    }
}

string_enum! {
    /// Authentication used to connect to DB2
    Db2AuthenticationType {
        Basic => "Basic",
    }
}

string_enum! {
    /// Authentication used to connect to Teradata
    TeradataAuthenticationType {
        Basic => "Basic",
        Windows => "Windows",
    }
}

string_enum! {
    /// Authentication used to connect to an OData service
    ODataAuthenticationType {
        AadServicePrincipal => "AadServicePrincipal",
        Anonymous => "Anonymous",
        Basic => "Basic",
        ManagedServiceIdentity => "ManagedServiceIdentity",
        Windows => "Windows",
    }
}

string_enum! {
    /// Credential kind of an OData AAD service principal
    ODataAadServicePrincipalCredentialType {
        ServicePrincipalCert => "ServicePrincipalCert",
        ServicePrincipalKey => "ServicePrincipalKey",
    }
}

string_enum! {
    /// Authentication used to connect to a REST service
    RestServiceAuthenticationType {
        AadServicePrincipal => "AadServicePrincipal",
        Anonymous => "Anonymous",
        Basic => "Basic",
        ManagedServiceIdentity => "ManagedServiceIdentity",
        OAuth2ClientCredential => "OAuth2ClientCredential",
    }
}
