//! AWS::IoT::TopicRule
//!
//! Use the AWS::IoT::TopicRule resource to declare an AWS IoT rule.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::TopicRule
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::tag::{CfnTag, TagManager, TagType};
use cfnkit_core::value::Value;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::IoT::TopicRule`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnTopicRuleProps {
    topic_rule_payload: TopicRulePayloadProperty,
    rule_name: Option<String>,
    tags: Option<Vec<CfnTag>>,
}
impl CfnTopicRuleProps {
    pub fn builder() -> CfnTopicRulePropsBuilder {
        CfnTopicRulePropsBuilder::default()
    }
    /// The rule payload.
    pub fn topic_rule_payload(&self) -> &TopicRulePayloadProperty {
        &self.topic_rule_payload
    }
    /// The name of the rule.
    pub fn rule_name(&self) -> Option<&str> {
        self.rule_name.as_deref()
    }
    /// Metadata which can be used to manage the topic rule.
    pub fn tags(&self) -> Option<&[CfnTag]> {
        self.tags.as_deref()
    }
}
/// Builder for [`CfnTopicRuleProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnTopicRulePropsBuilder {
    topic_rule_payload: Option<TopicRulePayloadProperty>,
    rule_name: Option<String>,
    tags: Option<Vec<CfnTag>>,
}
impl CfnTopicRulePropsBuilder {
    pub fn topic_rule_payload(mut self, value: TopicRulePayloadProperty) -> Self {
        self.topic_rule_payload = Some(value);
        self
    }
    pub fn rule_name(mut self, value: impl Into<String>) -> Self {
        self.rule_name = Some(value.into());
        self
    }
    pub fn tags(mut self, value: Vec<CfnTag>) -> Self {
        self.tags = Some(value);
        self
    }
    pub fn build(self) -> Result<CfnTopicRuleProps, RecordError> {
        Ok(CfnTopicRuleProps {
            topic_rule_payload: self
                .topic_rule_payload
                .ok_or_else(|| RecordError::missing(CfnTopicRuleProps::TYPE_NAME, "topic_rule_payload"))?,
            rule_name: self.rule_name,
            tags: self.tags,
        })
    }
}
impl PropertyRecord for CfnTopicRuleProps {
    const TYPE_NAME: &'static str = "CfnTopicRuleProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::TopicRule`")
            .attribute(
                AttributeSchema::new(
                    "topic_rule_payload",
                    AttributeType::record("TopicRulePayloadProperty"),
                )
                    .required()
                    .with_description("The rule payload.")
                    .with_provider_name("TopicRulePayload"),
            )
            .attribute(
                AttributeSchema::new("rule_name", AttributeType::String)
                    .with_description("The name of the rule.")
                    .with_provider_name("RuleName"),
            )
            .attribute(
                AttributeSchema::new(
                    "tags",
                    AttributeType::list(AttributeType::record("CfnTag")),
                )
                    .with_description(
                        "Metadata which can be used to manage the topic rule.",
                    )
                    .with_provider_name("Tags"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("topic_rule_payload", "TopicRulePayload", &self.topic_rule_payload);
        map.insert_opt("rule_name", "RuleName", self.rule_name.as_ref());
        map.insert_opt("tags", "Tags", self.tags.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            topic_rule_payload: map.required(Self::TYPE_NAME, "topic_rule_payload")?,
            rule_name: map.optional(Self::TYPE_NAME, "rule_name")?,
            tags: map.optional(Self::TYPE_NAME, "tags")?,
        })
    }
}
impl PropertyValue for CfnTopicRuleProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnTopicRuleProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes the actions associated with a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionProperty {
    cloudwatch_logs: Option<CloudwatchLogsActionProperty>,
    firehose: Option<FirehoseActionProperty>,
    kinesis: Option<KinesisActionProperty>,
    lambda: Option<LambdaActionProperty>,
    republish: Option<RepublishActionProperty>,
    s3: Option<S3ActionProperty>,
    sns: Option<SnsActionProperty>,
    sqs: Option<SqsActionProperty>,
    step_functions: Option<StepFunctionsActionProperty>,
}
impl ActionProperty {
    pub fn builder() -> ActionPropertyBuilder {
        ActionPropertyBuilder::default()
    }
    /// `CloudwatchLogs`
    pub fn cloudwatch_logs(&self) -> Option<&CloudwatchLogsActionProperty> {
        self.cloudwatch_logs.as_ref()
    }
    /// `Firehose`
    pub fn firehose(&self) -> Option<&FirehoseActionProperty> {
        self.firehose.as_ref()
    }
    /// `Kinesis`
    pub fn kinesis(&self) -> Option<&KinesisActionProperty> {
        self.kinesis.as_ref()
    }
    /// `Lambda`
    pub fn lambda(&self) -> Option<&LambdaActionProperty> {
        self.lambda.as_ref()
    }
    /// `Republish`
    pub fn republish(&self) -> Option<&RepublishActionProperty> {
        self.republish.as_ref()
    }
    /// `S3`
    pub fn s3(&self) -> Option<&S3ActionProperty> {
        self.s3.as_ref()
    }
    /// `Sns`
    pub fn sns(&self) -> Option<&SnsActionProperty> {
        self.sns.as_ref()
    }
    /// `Sqs`
    pub fn sqs(&self) -> Option<&SqsActionProperty> {
        self.sqs.as_ref()
    }
    /// `StepFunctions`
    pub fn step_functions(&self) -> Option<&StepFunctionsActionProperty> {
        self.step_functions.as_ref()
    }
}
/// Builder for [`ActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct ActionPropertyBuilder {
    cloudwatch_logs: Option<CloudwatchLogsActionProperty>,
    firehose: Option<FirehoseActionProperty>,
    kinesis: Option<KinesisActionProperty>,
    lambda: Option<LambdaActionProperty>,
    republish: Option<RepublishActionProperty>,
    s3: Option<S3ActionProperty>,
    sns: Option<SnsActionProperty>,
    sqs: Option<SqsActionProperty>,
    step_functions: Option<StepFunctionsActionProperty>,
}
impl ActionPropertyBuilder {
    pub fn cloudwatch_logs(mut self, value: CloudwatchLogsActionProperty) -> Self {
        self.cloudwatch_logs = Some(value);
        self
    }
    pub fn firehose(mut self, value: FirehoseActionProperty) -> Self {
        self.firehose = Some(value);
        self
    }
    pub fn kinesis(mut self, value: KinesisActionProperty) -> Self {
        self.kinesis = Some(value);
        self
    }
    pub fn lambda(mut self, value: LambdaActionProperty) -> Self {
        self.lambda = Some(value);
        self
    }
    pub fn republish(mut self, value: RepublishActionProperty) -> Self {
        self.republish = Some(value);
        self
    }
    pub fn s3(mut self, value: S3ActionProperty) -> Self {
        self.s3 = Some(value);
        self
    }
    pub fn sns(mut self, value: SnsActionProperty) -> Self {
        self.sns = Some(value);
        self
    }
    pub fn sqs(mut self, value: SqsActionProperty) -> Self {
        self.sqs = Some(value);
        self
    }
    pub fn step_functions(mut self, value: StepFunctionsActionProperty) -> Self {
        self.step_functions = Some(value);
        self
    }
    pub fn build(self) -> Result<ActionProperty, RecordError> {
        Ok(ActionProperty {
            cloudwatch_logs: self.cloudwatch_logs,
            firehose: self.firehose,
            kinesis: self.kinesis,
            lambda: self.lambda,
            republish: self.republish,
            s3: self.s3,
            sns: self.sns,
            sqs: self.sqs,
            step_functions: self.step_functions,
        })
    }
}
impl PropertyRecord for ActionProperty {
    const TYPE_NAME: &'static str = "ActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes the actions associated with a rule.")
            .attribute(
                AttributeSchema::new(
                    "cloudwatch_logs",
                    AttributeType::record("CloudwatchLogsActionProperty"),
                )
                    .with_provider_name("CloudwatchLogs"),
            )
            .attribute(
                AttributeSchema::new(
                    "firehose",
                    AttributeType::record("FirehoseActionProperty"),
                )
                    .with_provider_name("Firehose"),
            )
            .attribute(
                AttributeSchema::new(
                    "kinesis",
                    AttributeType::record("KinesisActionProperty"),
                )
                    .with_provider_name("Kinesis"),
            )
            .attribute(
                AttributeSchema::new(
                    "lambda",
                    AttributeType::record("LambdaActionProperty"),
                )
                    .with_provider_name("Lambda"),
            )
            .attribute(
                AttributeSchema::new(
                    "republish",
                    AttributeType::record("RepublishActionProperty"),
                )
                    .with_provider_name("Republish"),
            )
            .attribute(
                AttributeSchema::new("s3", AttributeType::record("S3ActionProperty"))
                    .with_provider_name("S3"),
            )
            .attribute(
                AttributeSchema::new("sns", AttributeType::record("SnsActionProperty"))
                    .with_provider_name("Sns"),
            )
            .attribute(
                AttributeSchema::new("sqs", AttributeType::record("SqsActionProperty"))
                    .with_provider_name("Sqs"),
            )
            .attribute(
                AttributeSchema::new(
                    "step_functions",
                    AttributeType::record("StepFunctionsActionProperty"),
                )
                    .with_provider_name("StepFunctions"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt(
            "cloudwatch_logs",
            "CloudwatchLogs",
            self.cloudwatch_logs.as_ref(),
        );
        map.insert_opt("firehose", "Firehose", self.firehose.as_ref());
        map.insert_opt("kinesis", "Kinesis", self.kinesis.as_ref());
        map.insert_opt("lambda", "Lambda", self.lambda.as_ref());
        map.insert_opt("republish", "Republish", self.republish.as_ref());
        map.insert_opt("s3", "S3", self.s3.as_ref());
        map.insert_opt("sns", "Sns", self.sns.as_ref());
        map.insert_opt("sqs", "Sqs", self.sqs.as_ref());
        map.insert_opt("step_functions", "StepFunctions", self.step_functions.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            cloudwatch_logs: map.optional(Self::TYPE_NAME, "cloudwatch_logs")?,
            firehose: map.optional(Self::TYPE_NAME, "firehose")?,
            kinesis: map.optional(Self::TYPE_NAME, "kinesis")?,
            lambda: map.optional(Self::TYPE_NAME, "lambda")?,
            republish: map.optional(Self::TYPE_NAME, "republish")?,
            s3: map.optional(Self::TYPE_NAME, "s3")?,
            sns: map.optional(Self::TYPE_NAME, "sns")?,
            sqs: map.optional(Self::TYPE_NAME, "sqs")?,
            step_functions: map.optional(Self::TYPE_NAME, "step_functions")?,
        })
    }
}
impl PropertyValue for ActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for ActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action that sends data to CloudWatch Logs.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudwatchLogsActionProperty {
    log_group_name: String,
    role_arn: String,
}
impl CloudwatchLogsActionProperty {
    pub fn builder() -> CloudwatchLogsActionPropertyBuilder {
        CloudwatchLogsActionPropertyBuilder::default()
    }
    /// The CloudWatch log name.
    pub fn log_group_name(&self) -> &str {
        &self.log_group_name
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
}
/// Builder for [`CloudwatchLogsActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct CloudwatchLogsActionPropertyBuilder {
    log_group_name: Option<String>,
    role_arn: Option<String>,
}
impl CloudwatchLogsActionPropertyBuilder {
    pub fn log_group_name(mut self, value: impl Into<String>) -> Self {
        self.log_group_name = Some(value.into());
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CloudwatchLogsActionProperty, RecordError> {
        Ok(CloudwatchLogsActionProperty {
            log_group_name: self
                .log_group_name
                .ok_or_else(|| RecordError::missing(CloudwatchLogsActionProperty::TYPE_NAME, "log_group_name"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(CloudwatchLogsActionProperty::TYPE_NAME, "role_arn"))?,
        })
    }
}
impl PropertyRecord for CloudwatchLogsActionProperty {
    const TYPE_NAME: &'static str = "CloudwatchLogsActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes an action that sends data to CloudWatch Logs.")
            .attribute(
                AttributeSchema::new("log_group_name", AttributeType::String)
                    .required()
                    .with_description("The CloudWatch log name.")
                    .with_provider_name("LogGroupName"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("log_group_name", "LogGroupName", &self.log_group_name);
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            log_group_name: map.required(Self::TYPE_NAME, "log_group_name")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
        })
    }
}
impl PropertyValue for CloudwatchLogsActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CloudwatchLogsActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action that writes data to an Amazon Kinesis Firehose stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FirehoseActionProperty {
    delivery_stream_name: String,
    role_arn: String,
    batch_mode: Option<bool>,
    separator: Option<String>,
}
impl FirehoseActionProperty {
    pub fn builder() -> FirehoseActionPropertyBuilder {
        FirehoseActionPropertyBuilder::default()
    }
    /// The delivery stream name.
    pub fn delivery_stream_name(&self) -> &str {
        &self.delivery_stream_name
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// Whether to deliver the Kinesis Data Firehose stream as a batch.
    pub fn batch_mode(&self) -> Option<bool> {
        self.batch_mode
    }
    /// A character separator that will be used to separate records written to the Kinesis Data Firehose stream.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }
}
/// Builder for [`FirehoseActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct FirehoseActionPropertyBuilder {
    delivery_stream_name: Option<String>,
    role_arn: Option<String>,
    batch_mode: Option<bool>,
    separator: Option<String>,
}
impl FirehoseActionPropertyBuilder {
    pub fn delivery_stream_name(mut self, value: impl Into<String>) -> Self {
        self.delivery_stream_name = Some(value.into());
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn batch_mode(mut self, value: bool) -> Self {
        self.batch_mode = Some(value);
        self
    }
    pub fn separator(mut self, value: impl Into<String>) -> Self {
        self.separator = Some(value.into());
        self
    }
    pub fn build(self) -> Result<FirehoseActionProperty, RecordError> {
        Ok(FirehoseActionProperty {
            delivery_stream_name: self
                .delivery_stream_name
                .ok_or_else(|| RecordError::missing(FirehoseActionProperty::TYPE_NAME, "delivery_stream_name"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(FirehoseActionProperty::TYPE_NAME, "role_arn"))?,
            batch_mode: self.batch_mode,
            separator: self.separator,
        })
    }
}
impl PropertyRecord for FirehoseActionProperty {
    const TYPE_NAME: &'static str = "FirehoseActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Describes an action that writes data to an Amazon Kinesis Firehose stream.",
            )
            .attribute(
                AttributeSchema::new("delivery_stream_name", AttributeType::String)
                    .required()
                    .with_description("The delivery stream name.")
                    .with_provider_name("DeliveryStreamName"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("batch_mode", AttributeType::Bool)
                    .with_description(
                        "Whether to deliver the Kinesis Data Firehose stream as a batch.",
                    )
                    .with_provider_name("BatchMode"),
            )
            .attribute(
                AttributeSchema::new("separator", AttributeType::String)
                    .with_description(
                        "A character separator that will be used to separate records written to the Kinesis Data Firehose stream.",
                    )
                    .with_provider_name("Separator"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert(
            "delivery_stream_name",
            "DeliveryStreamName",
            &self.delivery_stream_name,
        );
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert_opt("batch_mode", "BatchMode", self.batch_mode.as_ref());
        map.insert_opt("separator", "Separator", self.separator.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            delivery_stream_name: map.required(Self::TYPE_NAME, "delivery_stream_name")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            batch_mode: map.optional(Self::TYPE_NAME, "batch_mode")?,
            separator: map.optional(Self::TYPE_NAME, "separator")?,
        })
    }
}
impl PropertyValue for FirehoseActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for FirehoseActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to write data to an Amazon Kinesis stream.
#[derive(Debug, Clone, PartialEq)]
pub struct KinesisActionProperty {
    role_arn: String,
    stream_name: String,
    partition_key: Option<String>,
}
impl KinesisActionProperty {
    pub fn builder() -> KinesisActionPropertyBuilder {
        KinesisActionPropertyBuilder::default()
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// The name of the Amazon Kinesis stream.
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
    /// The partition key.
    pub fn partition_key(&self) -> Option<&str> {
        self.partition_key.as_deref()
    }
}
/// Builder for [`KinesisActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct KinesisActionPropertyBuilder {
    role_arn: Option<String>,
    stream_name: Option<String>,
    partition_key: Option<String>,
}
impl KinesisActionPropertyBuilder {
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn stream_name(mut self, value: impl Into<String>) -> Self {
        self.stream_name = Some(value.into());
        self
    }
    pub fn partition_key(mut self, value: impl Into<String>) -> Self {
        self.partition_key = Some(value.into());
        self
    }
    pub fn build(self) -> Result<KinesisActionProperty, RecordError> {
        Ok(KinesisActionProperty {
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(KinesisActionProperty::TYPE_NAME, "role_arn"))?,
            stream_name: self
                .stream_name
                .ok_or_else(|| RecordError::missing(KinesisActionProperty::TYPE_NAME, "stream_name"))?,
            partition_key: self.partition_key,
        })
    }
}
impl PropertyRecord for KinesisActionProperty {
    const TYPE_NAME: &'static str = "KinesisActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Describes an action to write data to an Amazon Kinesis stream.",
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("stream_name", AttributeType::String)
                    .required()
                    .with_description("The name of the Amazon Kinesis stream.")
                    .with_provider_name("StreamName"),
            )
            .attribute(
                AttributeSchema::new("partition_key", AttributeType::String)
                    .with_description("The partition key.")
                    .with_provider_name("PartitionKey"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert("stream_name", "StreamName", &self.stream_name);
        map.insert_opt("partition_key", "PartitionKey", self.partition_key.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            stream_name: map.required(Self::TYPE_NAME, "stream_name")?,
            partition_key: map.optional(Self::TYPE_NAME, "partition_key")?,
        })
    }
}
impl PropertyValue for KinesisActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for KinesisActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to invoke a Lambda function.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaActionProperty {
    function_arn: Option<String>,
}
impl LambdaActionProperty {
    pub fn builder() -> LambdaActionPropertyBuilder {
        LambdaActionPropertyBuilder::default()
    }
    /// The ARN of the Lambda function.
    pub fn function_arn(&self) -> Option<&str> {
        self.function_arn.as_deref()
    }
}
/// Builder for [`LambdaActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct LambdaActionPropertyBuilder {
    function_arn: Option<String>,
}
impl LambdaActionPropertyBuilder {
    pub fn function_arn(mut self, value: impl Into<String>) -> Self {
        self.function_arn = Some(value.into());
        self
    }
    pub fn build(self) -> Result<LambdaActionProperty, RecordError> {
        Ok(LambdaActionProperty {
            function_arn: self.function_arn,
        })
    }
}
impl PropertyRecord for LambdaActionProperty {
    const TYPE_NAME: &'static str = "LambdaActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes an action to invoke a Lambda function.")
            .attribute(
                AttributeSchema::new("function_arn", AttributeType::String)
                    .with_description("The ARN of the Lambda function.")
                    .with_provider_name("FunctionArn"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("function_arn", "FunctionArn", self.function_arn.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            function_arn: map.optional(Self::TYPE_NAME, "function_arn")?,
        })
    }
}
impl PropertyValue for LambdaActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for LambdaActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to republish to another topic.
#[derive(Debug, Clone, PartialEq)]
pub struct RepublishActionProperty {
    role_arn: String,
    topic: String,
    qos: Option<i64>,
}
impl RepublishActionProperty {
    pub fn builder() -> RepublishActionPropertyBuilder {
        RepublishActionPropertyBuilder::default()
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// The name of the MQTT topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }
    /// The Quality of Service (QoS) level to use when republishing messages.
    pub fn qos(&self) -> Option<i64> {
        self.qos
    }
}
/// Builder for [`RepublishActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct RepublishActionPropertyBuilder {
    role_arn: Option<String>,
    topic: Option<String>,
    qos: Option<i64>,
}
impl RepublishActionPropertyBuilder {
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn topic(mut self, value: impl Into<String>) -> Self {
        self.topic = Some(value.into());
        self
    }
    pub fn qos(mut self, value: i64) -> Self {
        self.qos = Some(value);
        self
    }
    pub fn build(self) -> Result<RepublishActionProperty, RecordError> {
        Ok(RepublishActionProperty {
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(RepublishActionProperty::TYPE_NAME, "role_arn"))?,
            topic: self
                .topic
                .ok_or_else(|| RecordError::missing(RepublishActionProperty::TYPE_NAME, "topic"))?,
            qos: self.qos,
        })
    }
}
impl PropertyRecord for RepublishActionProperty {
    const TYPE_NAME: &'static str = "RepublishActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes an action to republish to another topic.")
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("topic", AttributeType::String)
                    .required()
                    .with_description("The name of the MQTT topic.")
                    .with_provider_name("Topic"),
            )
            .attribute(
                AttributeSchema::new("qos", AttributeType::Int)
                    .with_description(
                        "The Quality of Service (QoS) level to use when republishing messages.",
                    )
                    .with_provider_name("Qos"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert("topic", "Topic", &self.topic);
        map.insert_opt("qos", "Qos", self.qos.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            topic: map.required(Self::TYPE_NAME, "topic")?,
            qos: map.optional(Self::TYPE_NAME, "qos")?,
        })
    }
}
impl PropertyValue for RepublishActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for RepublishActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to write data to an Amazon S3 bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct S3ActionProperty {
    bucket_name: String,
    key: String,
    role_arn: String,
    canned_acl: Option<String>,
}
impl S3ActionProperty {
    pub fn builder() -> S3ActionPropertyBuilder {
        S3ActionPropertyBuilder::default()
    }
    /// The Amazon S3 bucket.
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
    /// The object key.
    pub fn key(&self) -> &str {
        &self.key
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// The Amazon S3 canned ACL that controls access to the object identified by the object key.
    pub fn canned_acl(&self) -> Option<&str> {
        self.canned_acl.as_deref()
    }
}
/// Builder for [`S3ActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct S3ActionPropertyBuilder {
    bucket_name: Option<String>,
    key: Option<String>,
    role_arn: Option<String>,
    canned_acl: Option<String>,
}
impl S3ActionPropertyBuilder {
    pub fn bucket_name(mut self, value: impl Into<String>) -> Self {
        self.bucket_name = Some(value.into());
        self
    }
    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn canned_acl(mut self, value: impl Into<String>) -> Self {
        self.canned_acl = Some(value.into());
        self
    }
    pub fn build(self) -> Result<S3ActionProperty, RecordError> {
        Ok(S3ActionProperty {
            bucket_name: self
                .bucket_name
                .ok_or_else(|| RecordError::missing(S3ActionProperty::TYPE_NAME, "bucket_name"))?,
            key: self
                .key
                .ok_or_else(|| RecordError::missing(S3ActionProperty::TYPE_NAME, "key"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(S3ActionProperty::TYPE_NAME, "role_arn"))?,
            canned_acl: self.canned_acl,
        })
    }
}
impl PropertyRecord for S3ActionProperty {
    const TYPE_NAME: &'static str = "S3ActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Describes an action to write data to an Amazon S3 bucket.",
            )
            .attribute(
                AttributeSchema::new("bucket_name", AttributeType::String)
                    .required()
                    .with_description("The Amazon S3 bucket.")
                    .with_provider_name("BucketName"),
            )
            .attribute(
                AttributeSchema::new("key", AttributeType::String)
                    .required()
                    .with_description("The object key.")
                    .with_provider_name("Key"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("canned_acl", AttributeType::String)
                    .with_description(
                        "The Amazon S3 canned ACL that controls access to the object identified by the object key.",
                    )
                    .with_provider_name("CannedAcl"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("bucket_name", "BucketName", &self.bucket_name);
        map.insert("key", "Key", &self.key);
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert_opt("canned_acl", "CannedAcl", self.canned_acl.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            bucket_name: map.required(Self::TYPE_NAME, "bucket_name")?,
            key: map.required(Self::TYPE_NAME, "key")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            canned_acl: map.optional(Self::TYPE_NAME, "canned_acl")?,
        })
    }
}
impl PropertyValue for S3ActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for S3ActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to publish to an Amazon SNS topic.
#[derive(Debug, Clone, PartialEq)]
pub struct SnsActionProperty {
    role_arn: String,
    target_arn: String,
    message_format: Option<String>,
}
impl SnsActionProperty {
    pub fn builder() -> SnsActionPropertyBuilder {
        SnsActionPropertyBuilder::default()
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// The ARN of the SNS topic.
    pub fn target_arn(&self) -> &str {
        &self.target_arn
    }
    /// The message format of the message to publish.
    pub fn message_format(&self) -> Option<&str> {
        self.message_format.as_deref()
    }
}
/// Builder for [`SnsActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct SnsActionPropertyBuilder {
    role_arn: Option<String>,
    target_arn: Option<String>,
    message_format: Option<String>,
}
impl SnsActionPropertyBuilder {
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn target_arn(mut self, value: impl Into<String>) -> Self {
        self.target_arn = Some(value.into());
        self
    }
    pub fn message_format(mut self, value: impl Into<String>) -> Self {
        self.message_format = Some(value.into());
        self
    }
    pub fn build(self) -> Result<SnsActionProperty, RecordError> {
        Ok(SnsActionProperty {
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(SnsActionProperty::TYPE_NAME, "role_arn"))?,
            target_arn: self
                .target_arn
                .ok_or_else(|| RecordError::missing(SnsActionProperty::TYPE_NAME, "target_arn"))?,
            message_format: self.message_format,
        })
    }
}
impl PropertyRecord for SnsActionProperty {
    const TYPE_NAME: &'static str = "SnsActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes an action to publish to an Amazon SNS topic.")
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("target_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the SNS topic.")
                    .with_provider_name("TargetArn"),
            )
            .attribute(
                AttributeSchema::new(
                    "message_format",
                    AttributeType::enumeration(&["RAW", "JSON"]),
                )
                    .with_description("The message format of the message to publish.")
                    .with_provider_name("MessageFormat"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert("target_arn", "TargetArn", &self.target_arn);
        map.insert_opt("message_format", "MessageFormat", self.message_format.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            target_arn: map.required(Self::TYPE_NAME, "target_arn")?,
            message_format: map.optional(Self::TYPE_NAME, "message_format")?,
        })
    }
}
impl PropertyValue for SnsActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for SnsActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes an action to publish data to an Amazon SQS queue.
#[derive(Debug, Clone, PartialEq)]
pub struct SqsActionProperty {
    queue_url: String,
    role_arn: String,
    use_base64: Option<bool>,
}
impl SqsActionProperty {
    pub fn builder() -> SqsActionPropertyBuilder {
        SqsActionPropertyBuilder::default()
    }
    /// The URL of the Amazon SQS queue.
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// Specifies whether to use Base64 encoding.
    pub fn use_base64(&self) -> Option<bool> {
        self.use_base64
    }
}
/// Builder for [`SqsActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct SqsActionPropertyBuilder {
    queue_url: Option<String>,
    role_arn: Option<String>,
    use_base64: Option<bool>,
}
impl SqsActionPropertyBuilder {
    pub fn queue_url(mut self, value: impl Into<String>) -> Self {
        self.queue_url = Some(value.into());
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn use_base64(mut self, value: bool) -> Self {
        self.use_base64 = Some(value);
        self
    }
    pub fn build(self) -> Result<SqsActionProperty, RecordError> {
        Ok(SqsActionProperty {
            queue_url: self
                .queue_url
                .ok_or_else(|| RecordError::missing(SqsActionProperty::TYPE_NAME, "queue_url"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(SqsActionProperty::TYPE_NAME, "role_arn"))?,
            use_base64: self.use_base64,
        })
    }
}
impl PropertyRecord for SqsActionProperty {
    const TYPE_NAME: &'static str = "SqsActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Describes an action to publish data to an Amazon SQS queue.",
            )
            .attribute(
                AttributeSchema::new("queue_url", AttributeType::String)
                    .required()
                    .with_description("The URL of the Amazon SQS queue.")
                    .with_provider_name("QueueUrl"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("use_base64", AttributeType::Bool)
                    .with_description("Specifies whether to use Base64 encoding.")
                    .with_provider_name("UseBase64"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("queue_url", "QueueUrl", &self.queue_url);
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert_opt("use_base64", "UseBase64", self.use_base64.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            queue_url: map.required(Self::TYPE_NAME, "queue_url")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            use_base64: map.optional(Self::TYPE_NAME, "use_base64")?,
        })
    }
}
impl PropertyValue for SqsActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for SqsActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Starts execution of a Step Functions state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFunctionsActionProperty {
    role_arn: String,
    state_machine_name: String,
    execution_name_prefix: Option<String>,
}
impl StepFunctionsActionProperty {
    pub fn builder() -> StepFunctionsActionPropertyBuilder {
        StepFunctionsActionPropertyBuilder::default()
    }
    /// The ARN of the IAM role that grants access.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// The name of the Step Functions state machine whose execution will be started.
    pub fn state_machine_name(&self) -> &str {
        &self.state_machine_name
    }
    /// A name given to the state machine execution consisting of this prefix followed by a UUID.
    pub fn execution_name_prefix(&self) -> Option<&str> {
        self.execution_name_prefix.as_deref()
    }
}
/// Builder for [`StepFunctionsActionProperty`]
#[derive(Debug, Clone, Default)]
pub struct StepFunctionsActionPropertyBuilder {
    role_arn: Option<String>,
    state_machine_name: Option<String>,
    execution_name_prefix: Option<String>,
}
impl StepFunctionsActionPropertyBuilder {
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn state_machine_name(mut self, value: impl Into<String>) -> Self {
        self.state_machine_name = Some(value.into());
        self
    }
    pub fn execution_name_prefix(mut self, value: impl Into<String>) -> Self {
        self.execution_name_prefix = Some(value.into());
        self
    }
    pub fn build(self) -> Result<StepFunctionsActionProperty, RecordError> {
        Ok(StepFunctionsActionProperty {
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(StepFunctionsActionProperty::TYPE_NAME, "role_arn"))?,
            state_machine_name: self
                .state_machine_name
                .ok_or_else(|| RecordError::missing(StepFunctionsActionProperty::TYPE_NAME, "state_machine_name"))?,
            execution_name_prefix: self.execution_name_prefix,
        })
    }
}
impl PropertyRecord for StepFunctionsActionProperty {
    const TYPE_NAME: &'static str = "StepFunctionsActionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Starts execution of a Step Functions state machine.")
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description("The ARN of the IAM role that grants access.")
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("state_machine_name", AttributeType::String)
                    .required()
                    .with_description(
                        "The name of the Step Functions state machine whose execution will be started.",
                    )
                    .with_provider_name("StateMachineName"),
            )
            .attribute(
                AttributeSchema::new("execution_name_prefix", AttributeType::String)
                    .with_description(
                        "A name given to the state machine execution consisting of this prefix followed by a UUID.",
                    )
                    .with_provider_name("ExecutionNamePrefix"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert("state_machine_name", "StateMachineName", &self.state_machine_name);
        map.insert_opt(
            "execution_name_prefix",
            "ExecutionNamePrefix",
            self.execution_name_prefix.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            state_machine_name: map.required(Self::TYPE_NAME, "state_machine_name")?,
            execution_name_prefix: map.optional(Self::TYPE_NAME, "execution_name_prefix")?,
        })
    }
}
impl PropertyValue for StepFunctionsActionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for StepFunctionsActionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Describes a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRulePayloadProperty {
    actions: Vec<ActionProperty>,
    sql: String,
    aws_iot_sql_version: Option<String>,
    description: Option<String>,
    error_action: Option<ActionProperty>,
    rule_disabled: Option<bool>,
}
impl TopicRulePayloadProperty {
    pub fn builder() -> TopicRulePayloadPropertyBuilder {
        TopicRulePayloadPropertyBuilder::default()
    }
    /// The actions associated with the rule.
    pub fn actions(&self) -> &[ActionProperty] {
        &self.actions
    }
    /// The SQL statement used to query the topic.
    pub fn sql(&self) -> &str {
        &self.sql
    }
    /// The version of the SQL rules engine to use when evaluating the rule.
    pub fn aws_iot_sql_version(&self) -> Option<&str> {
        self.aws_iot_sql_version.as_deref()
    }
    /// The description of the rule.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    /// `ErrorAction`
    pub fn error_action(&self) -> Option<&ActionProperty> {
        self.error_action.as_ref()
    }
    /// Specifies whether the rule is disabled.
    pub fn rule_disabled(&self) -> Option<bool> {
        self.rule_disabled
    }
}
/// Builder for [`TopicRulePayloadProperty`]
#[derive(Debug, Clone, Default)]
pub struct TopicRulePayloadPropertyBuilder {
    actions: Option<Vec<ActionProperty>>,
    sql: Option<String>,
    aws_iot_sql_version: Option<String>,
    description: Option<String>,
    error_action: Option<ActionProperty>,
    rule_disabled: Option<bool>,
}
impl TopicRulePayloadPropertyBuilder {
    pub fn actions(mut self, value: Vec<ActionProperty>) -> Self {
        self.actions = Some(value);
        self
    }
    pub fn sql(mut self, value: impl Into<String>) -> Self {
        self.sql = Some(value.into());
        self
    }
    pub fn aws_iot_sql_version(mut self, value: impl Into<String>) -> Self {
        self.aws_iot_sql_version = Some(value.into());
        self
    }
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
    pub fn error_action(mut self, value: ActionProperty) -> Self {
        self.error_action = Some(value);
        self
    }
    pub fn rule_disabled(mut self, value: bool) -> Self {
        self.rule_disabled = Some(value);
        self
    }
    pub fn build(self) -> Result<TopicRulePayloadProperty, RecordError> {
        Ok(TopicRulePayloadProperty {
            actions: self
                .actions
                .ok_or_else(|| RecordError::missing(TopicRulePayloadProperty::TYPE_NAME, "actions"))?,
            sql: self
                .sql
                .ok_or_else(|| RecordError::missing(TopicRulePayloadProperty::TYPE_NAME, "sql"))?,
            aws_iot_sql_version: self.aws_iot_sql_version,
            description: self.description,
            error_action: self.error_action,
            rule_disabled: self.rule_disabled,
        })
    }
}
impl PropertyRecord for TopicRulePayloadProperty {
    const TYPE_NAME: &'static str = "TopicRulePayloadProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Describes a rule.")
            .attribute(
                AttributeSchema::new(
                    "actions",
                    AttributeType::list(AttributeType::record("ActionProperty")),
                )
                    .required()
                    .with_description("The actions associated with the rule.")
                    .with_provider_name("Actions"),
            )
            .attribute(
                AttributeSchema::new("sql", AttributeType::String)
                    .required()
                    .with_description("The SQL statement used to query the topic.")
                    .with_provider_name("Sql"),
            )
            .attribute(
                AttributeSchema::new("aws_iot_sql_version", AttributeType::String)
                    .with_description(
                        "The version of the SQL rules engine to use when evaluating the rule.",
                    )
                    .with_provider_name("AwsIotSqlVersion"),
            )
            .attribute(
                AttributeSchema::new("description", AttributeType::String)
                    .with_description("The description of the rule.")
                    .with_provider_name("Description"),
            )
            .attribute(
                AttributeSchema::new(
                    "error_action",
                    AttributeType::record("ActionProperty"),
                )
                    .with_provider_name("ErrorAction"),
            )
            .attribute(
                AttributeSchema::new("rule_disabled", AttributeType::Bool)
                    .with_description("Specifies whether the rule is disabled.")
                    .with_provider_name("RuleDisabled"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("actions", "Actions", &self.actions);
        map.insert("sql", "Sql", &self.sql);
        map.insert_opt(
            "aws_iot_sql_version",
            "AwsIotSqlVersion",
            self.aws_iot_sql_version.as_ref(),
        );
        map.insert_opt("description", "Description", self.description.as_ref());
        map.insert_opt("error_action", "ErrorAction", self.error_action.as_ref());
        map.insert_opt("rule_disabled", "RuleDisabled", self.rule_disabled.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            actions: map.required(Self::TYPE_NAME, "actions")?,
            sql: map.required(Self::TYPE_NAME, "sql")?,
            aws_iot_sql_version: map.optional(Self::TYPE_NAME, "aws_iot_sql_version")?,
            description: map.optional(Self::TYPE_NAME, "description")?,
            error_action: map.optional(Self::TYPE_NAME, "error_action")?,
            rule_disabled: map.optional(Self::TYPE_NAME, "rule_disabled")?,
        })
    }
}
impl PropertyValue for TopicRulePayloadProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for TopicRulePayloadProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::TopicRule`
#[derive(Debug, Clone)]
pub struct CfnTopicRule {
    resource: CfnResource,
    props: CfnTopicRuleProps,
    tags: TagManager,
}
impl CfnTopicRule {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::TopicRule";
    pub fn new(scope: &Scope, id: &str, props: CfnTopicRuleProps) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            tags: TagManager::new(
                TagType::Standard,
                Self::CFN_RESOURCE_TYPE_NAME,
                props.tags.as_deref(),
            ),
            props,
        }
    }
    pub fn props(&self) -> &CfnTopicRuleProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `Arn`
    pub fn attr_arn(&self) -> Value {
        self.resource.get_att("Arn")
    }
    pub fn topic_rule_payload(&self) -> &TopicRulePayloadProperty {
        self.props.topic_rule_payload()
    }
    pub fn set_topic_rule_payload(&mut self, value: TopicRulePayloadProperty) {
        self.props.topic_rule_payload = value;
    }
    pub fn rule_name(&self) -> Option<&str> {
        self.props.rule_name()
    }
    pub fn set_rule_name(&mut self, value: Option<String>) {
        self.props.rule_name = value;
    }
    pub fn tags(&self) -> &TagManager {
        &self.tags
    }
    pub fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.tags
    }
}
impl CfnElement for CfnTopicRule {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnTopicRuleProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        let mut map = self.props.to_properties();
        self.tags.apply(&mut map);
        map
    }
}
/// Registry entry for `AWS::IoT::TopicRule`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnTopicRule::CFN_RESOURCE_TYPE_NAME,
        taggable: true,
        schema: CfnTopicRuleProps::schema(),
    }
}
