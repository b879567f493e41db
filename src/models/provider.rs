//! Storage provider models.
//!
//! A provider's `config` is an untagged union over per-backend
//! configuration shapes. Unlike the position shapes, most configs carry
//! required fields, so trial decoding usually disambiguates them even in
//! lenient mode.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, DecodeOptions, Encode, FieldSpec, Model,
    ModelDescriptor, ObjectDecoder, ObjectEncoder, UnionCandidate, UnionSpec, UnknownFieldBag,
    ValueSlot,
};
use crate::error::{DecodeError, Result};

/// Storage backend kind.
///
/// This enum is closed: the schema declares no fallback member, so an
/// unknown wire value is an
/// [`InvalidEnumValue`](crate::DecodeError::InvalidEnumValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsProviderType {
    Azure,
    Gcs,
    Leanear,
    Local,
    S3,
    SharepointOnline,
}

impl FsProviderType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Azure => "AZURE",
            Self::Gcs => "GCS",
            Self::Leanear => "LEANEAR",
            Self::Local => "LOCAL",
            Self::S3 => "S3",
            Self::SharepointOnline => "SHAREPOINT_ONLINE",
        }
    }
}

impl std::fmt::Display for FsProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for FsProviderType {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        match expect_enum_str(value, ctx)? {
            "AZURE" => Ok(Self::Azure),
            "GCS" => Ok(Self::Gcs),
            "LEANEAR" => Ok(Self::Leanear),
            "LOCAL" => Ok(Self::Local),
            "S3" => Ok(Self::S3),
            "SHAREPOINT_ONLINE" => Ok(Self::SharepointOnline),
            other => Err(DecodeError::InvalidEnumValue {
                path: ctx.path().clone(),
                value: other.to_string(),
            }),
        }
    }
}

impl Encode for FsProviderType {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static AZURE_CONFIG_FIELDS: [FieldSpec; 7] = [
    FieldSpec::required("containerName"),
    FieldSpec::optional("type"),
    FieldSpec::optional("accountName"),
    FieldSpec::optional("useWorkloadIdentity"),
    FieldSpec::optional("workloadIdentityEnabled"),
    FieldSpec::optional("connectionStringEnabled"),
    FieldSpec::optional("endpointUrl"),
];
static AZURE_CONFIG_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("FsProviderAzureConfig", &AZURE_CONFIG_FIELDS);

/// Azure Blob Storage backend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FsProviderAzureConfig {
    /// Blob container name. Required on the wire.
    pub container_name: String,
    pub config_type: ValueSlot<FsProviderType>,
    pub account_name: ValueSlot<String>,
    pub use_workload_identity: ValueSlot<bool>,
    pub workload_identity_enabled: ValueSlot<bool>,
    pub connection_string_enabled: ValueSlot<bool>,
    pub endpoint_url: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for FsProviderAzureConfig {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let container_name = obj.required("containerName")?;
        let config_type = obj.slot("type")?;
        let account_name = obj.slot("accountName")?;
        let use_workload_identity = obj.slot("useWorkloadIdentity")?;
        let workload_identity_enabled = obj.slot("workloadIdentityEnabled")?;
        let connection_string_enabled = obj.slot("connectionStringEnabled")?;
        let endpoint_url = obj.slot("endpointUrl")?;
        Ok(Self {
            container_name,
            config_type,
            account_name,
            use_workload_identity,
            workload_identity_enabled,
            connection_string_enabled,
            endpoint_url,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for FsProviderAzureConfig {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.required("containerName", &self.container_name);
        obj.slot("type", &self.config_type);
        obj.slot("accountName", &self.account_name);
        obj.slot("useWorkloadIdentity", &self.use_workload_identity);
        obj.slot("workloadIdentityEnabled", &self.workload_identity_enabled);
        obj.slot("connectionStringEnabled", &self.connection_string_enabled);
        obj.slot("endpointUrl", &self.endpoint_url);
        obj.finish()
    }
}

impl Model for FsProviderAzureConfig {
    fn descriptor() -> &'static ModelDescriptor {
        &AZURE_CONFIG_DESCRIPTOR
    }
}

static GCS_CONFIG_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("bucketName"),
    FieldSpec::required("region"),
    FieldSpec::required("projectId"),
    FieldSpec::optional("type"),
];
static GCS_CONFIG_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("FsProviderGcsConfig", &GCS_CONFIG_FIELDS);

/// Google Cloud Storage backend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FsProviderGcsConfig {
    /// Bucket name. Required on the wire.
    pub bucket_name: String,
    /// Bucket region. Required on the wire.
    pub region: String,
    /// GCP project. Required on the wire.
    pub project_id: String,
    pub config_type: ValueSlot<FsProviderType>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for FsProviderGcsConfig {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let bucket_name = obj.required("bucketName")?;
        let region = obj.required("region")?;
        let project_id = obj.required("projectId")?;
        let config_type = obj.slot("type")?;
        Ok(Self {
            bucket_name,
            region,
            project_id,
            config_type,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for FsProviderGcsConfig {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.required("bucketName", &self.bucket_name);
        obj.required("region", &self.region);
        obj.required("projectId", &self.project_id);
        obj.slot("type", &self.config_type);
        obj.finish()
    }
}

impl Model for FsProviderGcsConfig {
    fn descriptor() -> &'static ModelDescriptor {
        &GCS_CONFIG_DESCRIPTOR
    }
}

static SHAREPOINT_CONFIG_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("siteUrl"),
    FieldSpec::required("documentLibrary"),
    FieldSpec::required("tenantId"),
    FieldSpec::optional("type"),
];
static SHAREPOINT_CONFIG_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("FsProviderSharepointOnlineConfig", &SHAREPOINT_CONFIG_FIELDS);

/// SharePoint Online backend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FsProviderSharepointOnlineConfig {
    /// Site URL. Required on the wire.
    pub site_url: String,
    /// Document library name. Required on the wire.
    pub document_library: String,
    /// Azure AD tenant. Required on the wire.
    pub tenant_id: String,
    pub config_type: ValueSlot<FsProviderType>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for FsProviderSharepointOnlineConfig {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let site_url = obj.required("siteUrl")?;
        let document_library = obj.required("documentLibrary")?;
        let tenant_id = obj.required("tenantId")?;
        let config_type = obj.slot("type")?;
        Ok(Self {
            site_url,
            document_library,
            tenant_id,
            config_type,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for FsProviderSharepointOnlineConfig {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.required("siteUrl", &self.site_url);
        obj.required("documentLibrary", &self.document_library);
        obj.required("tenantId", &self.tenant_id);
        obj.slot("type", &self.config_type);
        obj.finish()
    }
}

impl Model for FsProviderSharepointOnlineConfig {
    fn descriptor() -> &'static ModelDescriptor {
        &SHAREPOINT_CONFIG_DESCRIPTOR
    }
}

/// Untagged union over the provider configuration shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
    Azure(FsProviderAzureConfig),
    Gcs(FsProviderGcsConfig),
    SharepointOnline(FsProviderSharepointOnlineConfig),
}

impl ProviderConfig {
    /// Decode from a parsed JSON value with default options.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`].
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, DecodeOptions::default())
    }

    /// Decode with explicit options (e.g. strict union resolution).
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`].
    pub fn decode_with(value: &Value, options: DecodeOptions) -> Result<Self> {
        Self::decode_value(value, &DecodeContext::root(options))
    }

    /// Encode back into a JSON value.
    #[must_use]
    pub fn encode(&self) -> Value {
        self.encode_value()
    }
}

fn decode_azure_config(value: &Value, ctx: &DecodeContext) -> Result<ProviderConfig> {
    FsProviderAzureConfig::decode_value(value, ctx).map(ProviderConfig::Azure)
}

fn decode_gcs_config(value: &Value, ctx: &DecodeContext) -> Result<ProviderConfig> {
    FsProviderGcsConfig::decode_value(value, ctx).map(ProviderConfig::Gcs)
}

fn decode_sharepoint_config(value: &Value, ctx: &DecodeContext) -> Result<ProviderConfig> {
    FsProviderSharepointOnlineConfig::decode_value(value, ctx).map(ProviderConfig::SharepointOnline)
}

/// Candidates for [`ProviderConfig`], in API declaration order.
pub static PROVIDER_CONFIG_UNION: UnionSpec<ProviderConfig> = UnionSpec {
    name: "ProviderConfig",
    candidates: &[
        UnionCandidate {
            name: "FsProviderAzureConfig",
            decode: decode_azure_config,
        },
        UnionCandidate {
            name: "FsProviderGcsConfig",
            decode: decode_gcs_config,
        },
        UnionCandidate {
            name: "FsProviderSharepointOnlineConfig",
            decode: decode_sharepoint_config,
        },
    ],
};

impl Decode for ProviderConfig {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        PROVIDER_CONFIG_UNION.resolve(value, ctx)
    }
}

impl Encode for ProviderConfig {
    fn encode_value(&self) -> Value {
        match self {
            Self::Azure(config) => config.encode_value(),
            Self::Gcs(config) => config.encode_value(),
            Self::SharepointOnline(config) => config.encode_value(),
        }
    }
}

static PROVIDER_FIELDS: [FieldSpec; 7] = [
    FieldSpec::optional("id"),
    FieldSpec::optional("createdTime"),
    FieldSpec::optional("name"),
    FieldSpec::optional("icon"),
    FieldSpec::optional("config"),
    FieldSpec::optional("type"),
    FieldSpec::optional("system"),
];
static PROVIDER_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("FsProvider", &PROVIDER_FIELDS);

/// A configured storage provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FsProvider {
    pub id: ValueSlot<String>,
    pub created_time: ValueSlot<i64>,
    pub name: ValueSlot<String>,
    pub icon: ValueSlot<String>,
    pub config: ValueSlot<ProviderConfig>,
    pub provider_type: ValueSlot<FsProviderType>,
    pub system: ValueSlot<bool>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for FsProvider {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        let created_time = obj.slot("createdTime")?;
        let name = obj.slot("name")?;
        let icon = obj.slot("icon")?;
        let config = obj.slot("config")?;
        let provider_type = obj.slot("type")?;
        let system = obj.slot("system")?;
        Ok(Self {
            id,
            created_time,
            name,
            icon,
            config,
            provider_type,
            system,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for FsProvider {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.slot("createdTime", &self.created_time);
        obj.slot("name", &self.name);
        obj.slot("icon", &self.icon);
        obj.slot("config", &self.config);
        obj.slot("type", &self.provider_type);
        obj.slot("system", &self.system);
        obj.finish()
    }
}

impl Model for FsProvider {
    fn descriptor() -> &'static ModelDescriptor {
        &PROVIDER_DESCRIPTOR
    }
}
