//! Asynchronous job models.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, Encode, FieldSpec, Model, ModelDescriptor,
    ObjectDecoder, ObjectEncoder, UnknownFieldBag, ValueSlot,
};
use crate::error::Result;

/// Job lifecycle state.
///
/// Unknown wire values decode to [`Unrecognized`](Self::Unrecognized),
/// carrying the raw string so they re-encode unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Aborted,
    Failed,
    Pending,
    Running,
    Success,
    Unrecognized(String),
}

impl JobStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aborted => "ABORTED",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Success => "SUCCESS",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether the job has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Aborted | Self::Failed | Self::Success)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for JobStatus {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        Ok(match expect_enum_str(value, ctx)? {
            "ABORTED" => Self::Aborted,
            "FAILED" => Self::Failed,
            "PENDING" => Self::Pending,
            "RUNNING" => Self::Running,
            "SUCCESS" => Self::Success,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl Encode for JobStatus {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static JOB_FIELDS: [FieldSpec; 8] = [
    FieldSpec::optional("jobId"),
    FieldSpec::optional("status"),
    FieldSpec::optional("taskType"),
    FieldSpec::optional("createdTime"),
    FieldSpec::optional("executionTime"),
    FieldSpec::optional("errorMessage").nullable(),
    FieldSpec::optional("name"),
    FieldSpec::optional("archived"),
];
static JOB_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("Job", &JOB_FIELDS);

/// A server-side job (extraction, question answering, indexing, ...).
///
/// `created_time` is epoch milliseconds; `execution_time` is seconds.
/// `error_message` is nullable on the wire: a failed job may carry an
/// explicit `null` there, which is distinct from the key being absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    pub job_id: ValueSlot<String>,
    pub status: ValueSlot<JobStatus>,
    pub task_type: ValueSlot<String>,
    pub created_time: ValueSlot<i64>,
    pub execution_time: ValueSlot<f64>,
    pub error_message: ValueSlot<String>,
    pub name: ValueSlot<String>,
    pub archived: ValueSlot<bool>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for Job {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let job_id = obj.slot("jobId")?;
        let status = obj.slot("status")?;
        let task_type = obj.slot("taskType")?;
        let created_time = obj.slot("createdTime")?;
        let execution_time = obj.slot("executionTime")?;
        let error_message = obj.slot("errorMessage")?;
        let name = obj.slot("name")?;
        let archived = obj.slot("archived")?;
        Ok(Self {
            job_id,
            status,
            task_type,
            created_time,
            execution_time,
            error_message,
            name,
            archived,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for Job {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("jobId", &self.job_id);
        obj.slot("status", &self.status);
        obj.slot("taskType", &self.task_type);
        obj.slot("createdTime", &self.created_time);
        obj.slot("executionTime", &self.execution_time);
        obj.slot("errorMessage", &self.error_message);
        obj.slot("name", &self.name);
        obj.slot("archived", &self.archived);
        obj.finish()
    }
}

impl Model for Job {
    fn descriptor() -> &'static ModelDescriptor {
        &JOB_DESCRIPTOR
    }
}
