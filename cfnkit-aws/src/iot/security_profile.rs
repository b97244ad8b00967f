//! AWS::IoT::SecurityProfile
//!
//! A security profile defines a set of expected behaviors for devices in your account.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::SecurityProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::tag::{CfnTag, TagManager, TagType};
use cfnkit_core::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::IoT::SecurityProfile`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnSecurityProfileProps {
    additional_metrics_to_retain_v2: Option<Vec<MetricToRetainProperty>>,
    alert_targets: Option<BTreeMap<String, AlertTargetProperty>>,
    behaviors: Option<Vec<BehaviorProperty>>,
    security_profile_description: Option<String>,
    security_profile_name: Option<String>,
    tags: Option<Vec<CfnTag>>,
    target_arns: Option<Vec<String>>,
}
impl CfnSecurityProfileProps {
    pub fn builder() -> CfnSecurityProfilePropsBuilder {
        CfnSecurityProfilePropsBuilder::default()
    }
    /// A list of metrics whose data is retained (stored).
    pub fn additional_metrics_to_retain_v2(&self) -> Option<&[MetricToRetainProperty]> {
        self.additional_metrics_to_retain_v2.as_deref()
    }
    /// Specifies the destinations to which alerts are sent.
    pub fn alert_targets(&self) -> Option<&BTreeMap<String, AlertTargetProperty>> {
        self.alert_targets.as_ref()
    }
    /// Specifies the behaviors that, when violated by a device (thing), cause an alert.
    pub fn behaviors(&self) -> Option<&[BehaviorProperty]> {
        self.behaviors.as_deref()
    }
    /// A description of the security profile.
    pub fn security_profile_description(&self) -> Option<&str> {
        self.security_profile_description.as_deref()
    }
    /// A unique identifier for the security profile.
    pub fn security_profile_name(&self) -> Option<&str> {
        self.security_profile_name.as_deref()
    }
    /// Metadata that can be used to manage the security profile.
    pub fn tags(&self) -> Option<&[CfnTag]> {
        self.tags.as_deref()
    }
    /// A set of target ARNs that the security profile is attached to.
    pub fn target_arns(&self) -> Option<&[String]> {
        self.target_arns.as_deref()
    }
}
/// Builder for [`CfnSecurityProfileProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnSecurityProfilePropsBuilder {
    additional_metrics_to_retain_v2: Option<Vec<MetricToRetainProperty>>,
    alert_targets: Option<BTreeMap<String, AlertTargetProperty>>,
    behaviors: Option<Vec<BehaviorProperty>>,
    security_profile_description: Option<String>,
    security_profile_name: Option<String>,
    tags: Option<Vec<CfnTag>>,
    target_arns: Option<Vec<String>>,
}
impl CfnSecurityProfilePropsBuilder {
    pub fn additional_metrics_to_retain_v2(
        mut self,
        value: Vec<MetricToRetainProperty>,
    ) -> Self {
        self.additional_metrics_to_retain_v2 = Some(value);
        self
    }
    pub fn alert_targets(
        mut self,
        value: BTreeMap<String, AlertTargetProperty>,
    ) -> Self {
        self.alert_targets = Some(value);
        self
    }
    pub fn behaviors(mut self, value: Vec<BehaviorProperty>) -> Self {
        self.behaviors = Some(value);
        self
    }
    pub fn security_profile_description(mut self, value: impl Into<String>) -> Self {
        self.security_profile_description = Some(value.into());
        self
    }
    pub fn security_profile_name(mut self, value: impl Into<String>) -> Self {
        self.security_profile_name = Some(value.into());
        self
    }
    pub fn tags(mut self, value: Vec<CfnTag>) -> Self {
        self.tags = Some(value);
        self
    }
    pub fn target_arns(mut self, value: Vec<String>) -> Self {
        self.target_arns = Some(value);
        self
    }
    pub fn build(self) -> Result<CfnSecurityProfileProps, RecordError> {
        Ok(CfnSecurityProfileProps {
            additional_metrics_to_retain_v2: self.additional_metrics_to_retain_v2,
            alert_targets: self.alert_targets,
            behaviors: self.behaviors,
            security_profile_description: self.security_profile_description,
            security_profile_name: self.security_profile_name,
            tags: self.tags,
            target_arns: self.target_arns,
        })
    }
}
impl PropertyRecord for CfnSecurityProfileProps {
    const TYPE_NAME: &'static str = "CfnSecurityProfileProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::SecurityProfile`")
            .attribute(
                AttributeSchema::new(
                    "additional_metrics_to_retain_v2",
                    AttributeType::list(AttributeType::record("MetricToRetainProperty")),
                )
                    .with_description(
                        "A list of metrics whose data is retained (stored).",
                    )
                    .with_provider_name("AdditionalMetricsToRetainV2"),
            )
            .attribute(
                AttributeSchema::new(
                    "alert_targets",
                    AttributeType::map(AttributeType::record("AlertTargetProperty")),
                )
                    .with_description(
                        "Specifies the destinations to which alerts are sent.",
                    )
                    .with_provider_name("AlertTargets"),
            )
            .attribute(
                AttributeSchema::new(
                    "behaviors",
                    AttributeType::list(AttributeType::record("BehaviorProperty")),
                )
                    .with_description(
                        "Specifies the behaviors that, when violated by a device (thing), cause an alert.",
                    )
                    .with_provider_name("Behaviors"),
            )
            .attribute(
                AttributeSchema::new(
                    "security_profile_description",
                    AttributeType::String,
                )
                    .with_description("A description of the security profile.")
                    .with_provider_name("SecurityProfileDescription"),
            )
            .attribute(
                AttributeSchema::new("security_profile_name", AttributeType::String)
                    .with_description("A unique identifier for the security profile.")
                    .with_provider_name("SecurityProfileName"),
            )
            .attribute(
                AttributeSchema::new(
                    "tags",
                    AttributeType::list(AttributeType::record("CfnTag")),
                )
                    .with_description(
                        "Metadata that can be used to manage the security profile.",
                    )
                    .with_provider_name("Tags"),
            )
            .attribute(
                AttributeSchema::new(
                    "target_arns",
                    AttributeType::list(AttributeType::String),
                )
                    .with_description(
                        "A set of target ARNs that the security profile is attached to.",
                    )
                    .with_provider_name("TargetArns"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt(
            "additional_metrics_to_retain_v2",
            "AdditionalMetricsToRetainV2",
            self.additional_metrics_to_retain_v2.as_ref(),
        );
        map.insert_opt("alert_targets", "AlertTargets", self.alert_targets.as_ref());
        map.insert_opt("behaviors", "Behaviors", self.behaviors.as_ref());
        map.insert_opt(
            "security_profile_description",
            "SecurityProfileDescription",
            self.security_profile_description.as_ref(),
        );
        map.insert_opt(
            "security_profile_name",
            "SecurityProfileName",
            self.security_profile_name.as_ref(),
        );
        map.insert_opt("tags", "Tags", self.tags.as_ref());
        map.insert_opt("target_arns", "TargetArns", self.target_arns.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            additional_metrics_to_retain_v2: map.optional(Self::TYPE_NAME, "additional_metrics_to_retain_v2")?,
            alert_targets: map.optional(Self::TYPE_NAME, "alert_targets")?,
            behaviors: map.optional(Self::TYPE_NAME, "behaviors")?,
            security_profile_description: map.optional(Self::TYPE_NAME, "security_profile_description")?,
            security_profile_name: map.optional(Self::TYPE_NAME, "security_profile_name")?,
            tags: map.optional(Self::TYPE_NAME, "tags")?,
            target_arns: map.optional(Self::TYPE_NAME, "target_arns")?,
        })
    }
}
impl PropertyValue for CfnSecurityProfileProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnSecurityProfileProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A structure containing the alert target ARN and the role ARN.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTargetProperty {
    alert_target_arn: String,
    role_arn: String,
}
impl AlertTargetProperty {
    pub fn builder() -> AlertTargetPropertyBuilder {
        AlertTargetPropertyBuilder::default()
    }
    /// The ARN of the notification target to which alerts are sent.
    pub fn alert_target_arn(&self) -> &str {
        &self.alert_target_arn
    }
    /// The ARN of the role that grants permission to send alerts to the notification target.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
}
/// Builder for [`AlertTargetProperty`]
#[derive(Debug, Clone, Default)]
pub struct AlertTargetPropertyBuilder {
    alert_target_arn: Option<String>,
    role_arn: Option<String>,
}
impl AlertTargetPropertyBuilder {
    pub fn alert_target_arn(mut self, value: impl Into<String>) -> Self {
        self.alert_target_arn = Some(value.into());
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn build(self) -> Result<AlertTargetProperty, RecordError> {
        Ok(AlertTargetProperty {
            alert_target_arn: self
                .alert_target_arn
                .ok_or_else(|| RecordError::missing(AlertTargetProperty::TYPE_NAME, "alert_target_arn"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(AlertTargetProperty::TYPE_NAME, "role_arn"))?,
        })
    }
}
impl PropertyRecord for AlertTargetProperty {
    const TYPE_NAME: &'static str = "AlertTargetProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "A structure containing the alert target ARN and the role ARN.",
            )
            .attribute(
                AttributeSchema::new("alert_target_arn", AttributeType::String)
                    .required()
                    .with_description(
                        "The ARN of the notification target to which alerts are sent.",
                    )
                    .with_provider_name("AlertTargetArn"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description(
                        "The ARN of the role that grants permission to send alerts to the notification target.",
                    )
                    .with_provider_name("RoleArn"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("alert_target_arn", "AlertTargetArn", &self.alert_target_arn);
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            alert_target_arn: map.required(Self::TYPE_NAME, "alert_target_arn")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
        })
    }
}
impl PropertyValue for AlertTargetProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AlertTargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// The criteria by which the behavior is determined to be normal.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorCriteriaProperty {
    comparison_operator: Option<String>,
    consecutive_datapoints_to_alarm: Option<i64>,
    consecutive_datapoints_to_clear: Option<i64>,
    duration_seconds: Option<i64>,
    statistical_threshold: Option<StatisticalThresholdProperty>,
    value: Option<MetricValueProperty>,
}
impl BehaviorCriteriaProperty {
    pub fn builder() -> BehaviorCriteriaPropertyBuilder {
        BehaviorCriteriaPropertyBuilder::default()
    }
    /// The operator that relates the thing measured (metric) to the criteria.
    pub fn comparison_operator(&self) -> Option<&str> {
        self.comparison_operator.as_deref()
    }
    /// If a device is in violation of the behavior for the specified number of consecutive datapoints, an alarm occurs.
    pub fn consecutive_datapoints_to_alarm(&self) -> Option<i64> {
        self.consecutive_datapoints_to_alarm
    }
    /// If an alarm has occurred and the offending device is no longer in violation of the behavior for the specified number of consecutive datapoints, the alarm is cleared.
    pub fn consecutive_datapoints_to_clear(&self) -> Option<i64> {
        self.consecutive_datapoints_to_clear
    }
    /// Use this to specify the time duration over which the behavior is evaluated.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.duration_seconds
    }
    /// `StatisticalThreshold`
    pub fn statistical_threshold(&self) -> Option<&StatisticalThresholdProperty> {
        self.statistical_threshold.as_ref()
    }
    /// `Value`
    pub fn value(&self) -> Option<&MetricValueProperty> {
        self.value.as_ref()
    }
}
/// Builder for [`BehaviorCriteriaProperty`]
#[derive(Debug, Clone, Default)]
pub struct BehaviorCriteriaPropertyBuilder {
    comparison_operator: Option<String>,
    consecutive_datapoints_to_alarm: Option<i64>,
    consecutive_datapoints_to_clear: Option<i64>,
    duration_seconds: Option<i64>,
    statistical_threshold: Option<StatisticalThresholdProperty>,
    value: Option<MetricValueProperty>,
}
impl BehaviorCriteriaPropertyBuilder {
    pub fn comparison_operator(mut self, value: impl Into<String>) -> Self {
        self.comparison_operator = Some(value.into());
        self
    }
    pub fn consecutive_datapoints_to_alarm(mut self, value: i64) -> Self {
        self.consecutive_datapoints_to_alarm = Some(value);
        self
    }
    pub fn consecutive_datapoints_to_clear(mut self, value: i64) -> Self {
        self.consecutive_datapoints_to_clear = Some(value);
        self
    }
    pub fn duration_seconds(mut self, value: i64) -> Self {
        self.duration_seconds = Some(value);
        self
    }
    pub fn statistical_threshold(mut self, value: StatisticalThresholdProperty) -> Self {
        self.statistical_threshold = Some(value);
        self
    }
    pub fn value(mut self, value: MetricValueProperty) -> Self {
        self.value = Some(value);
        self
    }
    pub fn build(self) -> Result<BehaviorCriteriaProperty, RecordError> {
        Ok(BehaviorCriteriaProperty {
            comparison_operator: self.comparison_operator,
            consecutive_datapoints_to_alarm: self.consecutive_datapoints_to_alarm,
            consecutive_datapoints_to_clear: self.consecutive_datapoints_to_clear,
            duration_seconds: self.duration_seconds,
            statistical_threshold: self.statistical_threshold,
            value: self.value,
        })
    }
}
impl PropertyRecord for BehaviorCriteriaProperty {
    const TYPE_NAME: &'static str = "BehaviorCriteriaProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "The criteria by which the behavior is determined to be normal.",
            )
            .attribute(
                AttributeSchema::new(
                    "comparison_operator",
                    AttributeType::enumeration(&["less-than", "less-than-equals", "greater-than", "greater-than-equals", "in-cidr-set", "not-in-cidr-set", "in-port-set", "not-in-port-set", "in-set", "not-in-set"]),
                )
                    .with_description(
                        "The operator that relates the thing measured (metric) to the criteria.",
                    )
                    .with_provider_name("ComparisonOperator"),
            )
            .attribute(
                AttributeSchema::new(
                    "consecutive_datapoints_to_alarm",
                    AttributeType::Int,
                )
                    .with_description(
                        "If a device is in violation of the behavior for the specified number of consecutive datapoints, an alarm occurs.",
                    )
                    .with_provider_name("ConsecutiveDatapointsToAlarm"),
            )
            .attribute(
                AttributeSchema::new(
                    "consecutive_datapoints_to_clear",
                    AttributeType::Int,
                )
                    .with_description(
                        "If an alarm has occurred and the offending device is no longer in violation of the behavior for the specified number of consecutive datapoints, the alarm is cleared.",
                    )
                    .with_provider_name("ConsecutiveDatapointsToClear"),
            )
            .attribute(
                AttributeSchema::new("duration_seconds", AttributeType::Int)
                    .with_description(
                        "Use this to specify the time duration over which the behavior is evaluated.",
                    )
                    .with_provider_name("DurationSeconds"),
            )
            .attribute(
                AttributeSchema::new(
                    "statistical_threshold",
                    AttributeType::record("StatisticalThresholdProperty"),
                )
                    .with_provider_name("StatisticalThreshold"),
            )
            .attribute(
                AttributeSchema::new(
                    "value",
                    AttributeType::record("MetricValueProperty"),
                )
                    .with_provider_name("Value"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt(
            "comparison_operator",
            "ComparisonOperator",
            self.comparison_operator.as_ref(),
        );
        map.insert_opt(
            "consecutive_datapoints_to_alarm",
            "ConsecutiveDatapointsToAlarm",
            self.consecutive_datapoints_to_alarm.as_ref(),
        );
        map.insert_opt(
            "consecutive_datapoints_to_clear",
            "ConsecutiveDatapointsToClear",
            self.consecutive_datapoints_to_clear.as_ref(),
        );
        map.insert_opt(
            "duration_seconds",
            "DurationSeconds",
            self.duration_seconds.as_ref(),
        );
        map.insert_opt(
            "statistical_threshold",
            "StatisticalThreshold",
            self.statistical_threshold.as_ref(),
        );
        map.insert_opt("value", "Value", self.value.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            comparison_operator: map.optional(Self::TYPE_NAME, "comparison_operator")?,
            consecutive_datapoints_to_alarm: map.optional(Self::TYPE_NAME, "consecutive_datapoints_to_alarm")?,
            consecutive_datapoints_to_clear: map.optional(Self::TYPE_NAME, "consecutive_datapoints_to_clear")?,
            duration_seconds: map.optional(Self::TYPE_NAME, "duration_seconds")?,
            statistical_threshold: map.optional(Self::TYPE_NAME, "statistical_threshold")?,
            value: map.optional(Self::TYPE_NAME, "value")?,
        })
    }
}
impl PropertyValue for BehaviorCriteriaProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for BehaviorCriteriaProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A security profile behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorProperty {
    name: String,
    criteria: Option<BehaviorCriteriaProperty>,
    metric: Option<String>,
    metric_dimension: Option<MetricDimensionProperty>,
    suppress_alerts: Option<bool>,
}
impl BehaviorProperty {
    pub fn builder() -> BehaviorPropertyBuilder {
        BehaviorPropertyBuilder::default()
    }
    /// The name for the behavior.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// `Criteria`
    pub fn criteria(&self) -> Option<&BehaviorCriteriaProperty> {
        self.criteria.as_ref()
    }
    /// What is measured by the behavior.
    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref()
    }
    /// `MetricDimension`
    pub fn metric_dimension(&self) -> Option<&MetricDimensionProperty> {
        self.metric_dimension.as_ref()
    }
    /// Manage Detect alarm SNS notifications by setting behavior notification to on or suppressed.
    pub fn suppress_alerts(&self) -> Option<bool> {
        self.suppress_alerts
    }
}
/// Builder for [`BehaviorProperty`]
#[derive(Debug, Clone, Default)]
pub struct BehaviorPropertyBuilder {
    name: Option<String>,
    criteria: Option<BehaviorCriteriaProperty>,
    metric: Option<String>,
    metric_dimension: Option<MetricDimensionProperty>,
    suppress_alerts: Option<bool>,
}
impl BehaviorPropertyBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    pub fn criteria(mut self, value: BehaviorCriteriaProperty) -> Self {
        self.criteria = Some(value);
        self
    }
    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric = Some(value.into());
        self
    }
    pub fn metric_dimension(mut self, value: MetricDimensionProperty) -> Self {
        self.metric_dimension = Some(value);
        self
    }
    pub fn suppress_alerts(mut self, value: bool) -> Self {
        self.suppress_alerts = Some(value);
        self
    }
    pub fn build(self) -> Result<BehaviorProperty, RecordError> {
        Ok(BehaviorProperty {
            name: self
                .name
                .ok_or_else(|| RecordError::missing(BehaviorProperty::TYPE_NAME, "name"))?,
            criteria: self.criteria,
            metric: self.metric,
            metric_dimension: self.metric_dimension,
            suppress_alerts: self.suppress_alerts,
        })
    }
}
impl PropertyRecord for BehaviorProperty {
    const TYPE_NAME: &'static str = "BehaviorProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("A security profile behavior.")
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .with_description("The name for the behavior.")
                    .with_provider_name("Name"),
            )
            .attribute(
                AttributeSchema::new(
                    "criteria",
                    AttributeType::record("BehaviorCriteriaProperty"),
                )
                    .with_provider_name("Criteria"),
            )
            .attribute(
                AttributeSchema::new("metric", AttributeType::String)
                    .with_description("What is measured by the behavior.")
                    .with_provider_name("Metric"),
            )
            .attribute(
                AttributeSchema::new(
                    "metric_dimension",
                    AttributeType::record("MetricDimensionProperty"),
                )
                    .with_provider_name("MetricDimension"),
            )
            .attribute(
                AttributeSchema::new("suppress_alerts", AttributeType::Bool)
                    .with_description(
                        "Manage Detect alarm SNS notifications by setting behavior notification to on or suppressed.",
                    )
                    .with_provider_name("SuppressAlerts"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("name", "Name", &self.name);
        map.insert_opt("criteria", "Criteria", self.criteria.as_ref());
        map.insert_opt("metric", "Metric", self.metric.as_ref());
        map.insert_opt(
            "metric_dimension",
            "MetricDimension",
            self.metric_dimension.as_ref(),
        );
        map.insert_opt(
            "suppress_alerts",
            "SuppressAlerts",
            self.suppress_alerts.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            name: map.required(Self::TYPE_NAME, "name")?,
            criteria: map.optional(Self::TYPE_NAME, "criteria")?,
            metric: map.optional(Self::TYPE_NAME, "metric")?,
            metric_dimension: map.optional(Self::TYPE_NAME, "metric_dimension")?,
            suppress_alerts: map.optional(Self::TYPE_NAME, "suppress_alerts")?,
        })
    }
}
impl PropertyValue for BehaviorProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for BehaviorProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// The dimension of a metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDimensionProperty {
    dimension_name: String,
    operator: Option<String>,
}
impl MetricDimensionProperty {
    pub fn builder() -> MetricDimensionPropertyBuilder {
        MetricDimensionPropertyBuilder::default()
    }
    /// A unique identifier for the dimension.
    pub fn dimension_name(&self) -> &str {
        &self.dimension_name
    }
    /// Defines how the dimensionValues of a dimension are interpreted.
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }
}
/// Builder for [`MetricDimensionProperty`]
#[derive(Debug, Clone, Default)]
pub struct MetricDimensionPropertyBuilder {
    dimension_name: Option<String>,
    operator: Option<String>,
}
impl MetricDimensionPropertyBuilder {
    pub fn dimension_name(mut self, value: impl Into<String>) -> Self {
        self.dimension_name = Some(value.into());
        self
    }
    pub fn operator(mut self, value: impl Into<String>) -> Self {
        self.operator = Some(value.into());
        self
    }
    pub fn build(self) -> Result<MetricDimensionProperty, RecordError> {
        Ok(MetricDimensionProperty {
            dimension_name: self
                .dimension_name
                .ok_or_else(|| RecordError::missing(MetricDimensionProperty::TYPE_NAME, "dimension_name"))?,
            operator: self.operator,
        })
    }
}
impl PropertyRecord for MetricDimensionProperty {
    const TYPE_NAME: &'static str = "MetricDimensionProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("The dimension of a metric.")
            .attribute(
                AttributeSchema::new("dimension_name", AttributeType::String)
                    .required()
                    .with_description("A unique identifier for the dimension.")
                    .with_provider_name("DimensionName"),
            )
            .attribute(
                AttributeSchema::new(
                    "operator",
                    AttributeType::enumeration(&["IN", "NOT_IN"]),
                )
                    .with_description(
                        "Defines how the dimensionValues of a dimension are interpreted.",
                    )
                    .with_provider_name("Operator"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("dimension_name", "DimensionName", &self.dimension_name);
        map.insert_opt("operator", "Operator", self.operator.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            dimension_name: map.required(Self::TYPE_NAME, "dimension_name")?,
            operator: map.optional(Self::TYPE_NAME, "operator")?,
        })
    }
}
impl PropertyValue for MetricDimensionProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for MetricDimensionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// The metric you want to retain. Dimensions are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricToRetainProperty {
    metric: String,
    metric_dimension: Option<MetricDimensionProperty>,
}
impl MetricToRetainProperty {
    pub fn builder() -> MetricToRetainPropertyBuilder {
        MetricToRetainPropertyBuilder::default()
    }
    /// What is measured by the behavior.
    pub fn metric(&self) -> &str {
        &self.metric
    }
    /// `MetricDimension`
    pub fn metric_dimension(&self) -> Option<&MetricDimensionProperty> {
        self.metric_dimension.as_ref()
    }
}
/// Builder for [`MetricToRetainProperty`]
#[derive(Debug, Clone, Default)]
pub struct MetricToRetainPropertyBuilder {
    metric: Option<String>,
    metric_dimension: Option<MetricDimensionProperty>,
}
impl MetricToRetainPropertyBuilder {
    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric = Some(value.into());
        self
    }
    pub fn metric_dimension(mut self, value: MetricDimensionProperty) -> Self {
        self.metric_dimension = Some(value);
        self
    }
    pub fn build(self) -> Result<MetricToRetainProperty, RecordError> {
        Ok(MetricToRetainProperty {
            metric: self
                .metric
                .ok_or_else(|| RecordError::missing(MetricToRetainProperty::TYPE_NAME, "metric"))?,
            metric_dimension: self.metric_dimension,
        })
    }
}
impl PropertyRecord for MetricToRetainProperty {
    const TYPE_NAME: &'static str = "MetricToRetainProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("The metric you want to retain. Dimensions are optional.")
            .attribute(
                AttributeSchema::new("metric", AttributeType::String)
                    .required()
                    .with_description("What is measured by the behavior.")
                    .with_provider_name("Metric"),
            )
            .attribute(
                AttributeSchema::new(
                    "metric_dimension",
                    AttributeType::record("MetricDimensionProperty"),
                )
                    .with_provider_name("MetricDimension"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("metric", "Metric", &self.metric);
        map.insert_opt(
            "metric_dimension",
            "MetricDimension",
            self.metric_dimension.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            metric: map.required(Self::TYPE_NAME, "metric")?,
            metric_dimension: map.optional(Self::TYPE_NAME, "metric_dimension")?,
        })
    }
}
impl PropertyValue for MetricToRetainProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for MetricToRetainProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// The value to be compared with the metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValueProperty {
    cidrs: Option<Vec<String>>,
    count: Option<String>,
    number: Option<f64>,
    numbers: Option<Vec<f64>>,
    ports: Option<Vec<i64>>,
    strings: Option<Vec<String>>,
}
impl MetricValueProperty {
    pub fn builder() -> MetricValuePropertyBuilder {
        MetricValuePropertyBuilder::default()
    }
    /// If the ComparisonOperator calls for a set of CIDRs, use this to specify that set to be compared with the metric.
    pub fn cidrs(&self) -> Option<&[String]> {
        self.cidrs.as_deref()
    }
    /// If the ComparisonOperator calls for a numeric value, use this to specify that (integer) numeric value to be compared with the metric.
    pub fn count(&self) -> Option<&str> {
        self.count.as_deref()
    }
    /// The numeral value of a metric.
    pub fn number(&self) -> Option<f64> {
        self.number
    }
    /// The numeral values of a metric.
    pub fn numbers(&self) -> Option<&[f64]> {
        self.numbers.as_deref()
    }
    /// If the ComparisonOperator calls for a set of ports, use this to specify that set to be compared with the metric.
    pub fn ports(&self) -> Option<&[i64]> {
        self.ports.as_deref()
    }
    /// The string values of a metric.
    pub fn strings(&self) -> Option<&[String]> {
        self.strings.as_deref()
    }
}
/// Builder for [`MetricValueProperty`]
#[derive(Debug, Clone, Default)]
pub struct MetricValuePropertyBuilder {
    cidrs: Option<Vec<String>>,
    count: Option<String>,
    number: Option<f64>,
    numbers: Option<Vec<f64>>,
    ports: Option<Vec<i64>>,
    strings: Option<Vec<String>>,
}
impl MetricValuePropertyBuilder {
    pub fn cidrs(mut self, value: Vec<String>) -> Self {
        self.cidrs = Some(value);
        self
    }
    pub fn count(mut self, value: impl Into<String>) -> Self {
        self.count = Some(value.into());
        self
    }
    pub fn number(mut self, value: f64) -> Self {
        self.number = Some(value);
        self
    }
    pub fn numbers(mut self, value: Vec<f64>) -> Self {
        self.numbers = Some(value);
        self
    }
    pub fn ports(mut self, value: Vec<i64>) -> Self {
        self.ports = Some(value);
        self
    }
    pub fn strings(mut self, value: Vec<String>) -> Self {
        self.strings = Some(value);
        self
    }
    pub fn build(self) -> Result<MetricValueProperty, RecordError> {
        Ok(MetricValueProperty {
            cidrs: self.cidrs,
            count: self.count,
            number: self.number,
            numbers: self.numbers,
            ports: self.ports,
            strings: self.strings,
        })
    }
}
impl PropertyRecord for MetricValueProperty {
    const TYPE_NAME: &'static str = "MetricValueProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("The value to be compared with the metric.")
            .attribute(
                AttributeSchema::new("cidrs", AttributeType::list(AttributeType::String))
                    .with_description(
                        "If the ComparisonOperator calls for a set of CIDRs, use this to specify that set to be compared with the metric.",
                    )
                    .with_provider_name("Cidrs"),
            )
            .attribute(
                AttributeSchema::new("count", AttributeType::String)
                    .with_description(
                        "If the ComparisonOperator calls for a numeric value, use this to specify that (integer) numeric value to be compared with the metric.",
                    )
                    .with_provider_name("Count"),
            )
            .attribute(
                AttributeSchema::new("number", AttributeType::Number)
                    .with_description("The numeral value of a metric.")
                    .with_provider_name("Number"),
            )
            .attribute(
                AttributeSchema::new(
                    "numbers",
                    AttributeType::list(AttributeType::Number),
                )
                    .with_description("The numeral values of a metric.")
                    .with_provider_name("Numbers"),
            )
            .attribute(
                AttributeSchema::new("ports", AttributeType::list(AttributeType::Int))
                    .with_description(
                        "If the ComparisonOperator calls for a set of ports, use this to specify that set to be compared with the metric.",
                    )
                    .with_provider_name("Ports"),
            )
            .attribute(
                AttributeSchema::new(
                    "strings",
                    AttributeType::list(AttributeType::String),
                )
                    .with_description("The string values of a metric.")
                    .with_provider_name("Strings"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("cidrs", "Cidrs", self.cidrs.as_ref());
        map.insert_opt("count", "Count", self.count.as_ref());
        map.insert_opt("number", "Number", self.number.as_ref());
        map.insert_opt("numbers", "Numbers", self.numbers.as_ref());
        map.insert_opt("ports", "Ports", self.ports.as_ref());
        map.insert_opt("strings", "Strings", self.strings.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            cidrs: map.optional(Self::TYPE_NAME, "cidrs")?,
            count: map.optional(Self::TYPE_NAME, "count")?,
            number: map.optional(Self::TYPE_NAME, "number")?,
            numbers: map.optional(Self::TYPE_NAME, "numbers")?,
            ports: map.optional(Self::TYPE_NAME, "ports")?,
            strings: map.optional(Self::TYPE_NAME, "strings")?,
        })
    }
}
impl PropertyValue for MetricValueProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for MetricValueProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A statistical ranking (percentile) which indicates a threshold value by which a behavior is determined to be in compliance or in violation of the behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalThresholdProperty {
    statistic: Option<String>,
}
impl StatisticalThresholdProperty {
    pub fn builder() -> StatisticalThresholdPropertyBuilder {
        StatisticalThresholdPropertyBuilder::default()
    }
    /// The percentile which resolves to a threshold value by which compliance with a behavior is determined.
    pub fn statistic(&self) -> Option<&str> {
        self.statistic.as_deref()
    }
}
/// Builder for [`StatisticalThresholdProperty`]
#[derive(Debug, Clone, Default)]
pub struct StatisticalThresholdPropertyBuilder {
    statistic: Option<String>,
}
impl StatisticalThresholdPropertyBuilder {
    pub fn statistic(mut self, value: impl Into<String>) -> Self {
        self.statistic = Some(value.into());
        self
    }
    pub fn build(self) -> Result<StatisticalThresholdProperty, RecordError> {
        Ok(StatisticalThresholdProperty {
            statistic: self.statistic,
        })
    }
}
impl PropertyRecord for StatisticalThresholdProperty {
    const TYPE_NAME: &'static str = "StatisticalThresholdProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "A statistical ranking (percentile) which indicates a threshold value by which a behavior is determined to be in compliance or in violation of the behavior.",
            )
            .attribute(
                AttributeSchema::new(
                    "statistic",
                    AttributeType::enumeration(&["Average", "p0", "p0.1", "p0.01", "p1", "p10", "p50", "p90", "p99", "p99.9", "p99.99", "p100"]),
                )
                    .with_description(
                        "The percentile which resolves to a threshold value by which compliance with a behavior is determined.",
                    )
                    .with_provider_name("Statistic"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("statistic", "Statistic", self.statistic.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            statistic: map.optional(Self::TYPE_NAME, "statistic")?,
        })
    }
}
impl PropertyValue for StatisticalThresholdProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for StatisticalThresholdProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::SecurityProfile`
#[derive(Debug, Clone)]
pub struct CfnSecurityProfile {
    resource: CfnResource,
    props: CfnSecurityProfileProps,
    tags: TagManager,
}
impl CfnSecurityProfile {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::SecurityProfile";
    pub fn new(scope: &Scope, id: &str, props: CfnSecurityProfileProps) -> Self {
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
    pub fn props(&self) -> &CfnSecurityProfileProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `SecurityProfileArn`
    pub fn attr_security_profile_arn(&self) -> Value {
        self.resource.get_att("SecurityProfileArn")
    }
    pub fn additional_metrics_to_retain_v2(&self) -> Option<&[MetricToRetainProperty]> {
        self.props.additional_metrics_to_retain_v2()
    }
    pub fn set_additional_metrics_to_retain_v2(
        &mut self,
        value: Option<Vec<MetricToRetainProperty>>,
    ) {
        self.props.additional_metrics_to_retain_v2 = value;
    }
    pub fn alert_targets(&self) -> Option<&BTreeMap<String, AlertTargetProperty>> {
        self.props.alert_targets()
    }
    pub fn set_alert_targets(
        &mut self,
        value: Option<BTreeMap<String, AlertTargetProperty>>,
    ) {
        self.props.alert_targets = value;
    }
    pub fn behaviors(&self) -> Option<&[BehaviorProperty]> {
        self.props.behaviors()
    }
    pub fn set_behaviors(&mut self, value: Option<Vec<BehaviorProperty>>) {
        self.props.behaviors = value;
    }
    pub fn security_profile_description(&self) -> Option<&str> {
        self.props.security_profile_description()
    }
    pub fn set_security_profile_description(&mut self, value: Option<String>) {
        self.props.security_profile_description = value;
    }
    pub fn security_profile_name(&self) -> Option<&str> {
        self.props.security_profile_name()
    }
    pub fn set_security_profile_name(&mut self, value: Option<String>) {
        self.props.security_profile_name = value;
    }
    pub fn target_arns(&self) -> Option<&[String]> {
        self.props.target_arns()
    }
    pub fn set_target_arns(&mut self, value: Option<Vec<String>>) {
        self.props.target_arns = value;
    }
    pub fn tags(&self) -> &TagManager {
        &self.tags
    }
    pub fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.tags
    }
}
impl CfnElement for CfnSecurityProfile {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnSecurityProfileProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        let mut map = self.props.to_properties();
        self.tags.apply(&mut map);
        map
    }
}
/// Registry entry for `AWS::IoT::SecurityProfile`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnSecurityProfile::CFN_RESOURCE_TYPE_NAME,
        taggable: true,
        schema: CfnSecurityProfileProps::schema(),
    }
}
