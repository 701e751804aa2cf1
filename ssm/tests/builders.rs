/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use smithy_types::DateTime;
use ssm::input::{SendCommandInput, UpdateMaintenanceWindowInput};
use ssm::model::{
    AutomationExecution, AutomationExecutionMetadata, AutomationExecutionStatus, AutomationType,
    Command, CommandStatus, ExecutionMode, InstanceInformation, NotificationConfig,
    NotificationEvent, OpsItem, OpsItemDataType, OpsItemDataValue, Percent, PingStatus,
    ProgressCounters, RateUnit, ScheduleExpression, StepExecution, Target, Threshold,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_command() -> Command {
    Command::builder()
        .command_id("d2ff5b8d-3ec6-4d43-9e4c-6b1a4f0a8b4e")
        .document_name("AWS-RunShellScript")
        .comment("restart the agent")
        .parameters("commands", vec!["systemctl restart amazon-ssm-agent".to_string()])
        .unwrap()
        .parameters("executionTimeout", vec!["3600".to_string()])
        .unwrap()
        .instance_ids("i-0123456789abcdef0")
        .instance_ids("i-0fedcba9876543210")
        .targets(Target::builder().key("tag:Env").values("prod").build())
        .requested_date_time(DateTime::from_secs(1576540098))
        .status(CommandStatus::InProgress)
        .max_concurrency(Threshold::percentage(50).unwrap())
        .max_errors(Threshold::Count(0))
        .target_count(2)
        .notification_config(
            NotificationConfig::builder()
                .notification_arn("arn:aws:sns:us-east-1:123456789012:ops")
                .notification_events(NotificationEvent::Failed)
                .notification_events(NotificationEvent::TimedOut)
                .build(),
        )
        .timeout_seconds(600)
        .build()
}

#[test]
fn rebuilding_with_the_same_calls_is_equal() {
    let first = sample_command();
    let second = sample_command();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn unset_fields_are_omitted_from_display() {
    assert_eq!(Command::builder().build().to_string(), "{}");
    assert_eq!(SendCommandInput::builder().build().to_string(), "{}");
    assert_eq!(
        Command::builder().target_count(3).build().to_string(),
        "{TargetCount: 3}"
    );
    assert_eq!(
        Target::builder().key("InstanceIds").build().to_string(),
        "{Key: InstanceIds}"
    );
}

#[test]
fn display_renders_fields_in_declaration_order() {
    let command = Command::builder()
        .timeout_seconds(30)
        .status(CommandStatus::Success)
        .command_id("abc")
        .max_concurrency(Threshold::Count(5))
        .instance_ids("i-1")
        .instance_ids("i-2")
        .parameters("b", vec!["2".to_string()])
        .unwrap()
        .parameters("a", vec!["1".to_string()])
        .unwrap()
        .build();
    assert_eq!(
        command.to_string(),
        "{CommandId: abc, Parameters: {a=[1], b=[2]}, InstanceIds: [i-1, i-2], \
         Status: Success, MaxConcurrency: 5, TimeoutSeconds: 30}"
    );
}

#[test]
fn nested_shapes_render_recursively() {
    let item = OpsItem::builder()
        .title("disk full")
        .operational_data(
            "/aws/resources",
            OpsItemDataValue::builder()
                .value("[{\"arn\":\"arn:aws:ec2:us-east-1:123456789012:instance/i-1\"}]")
                .r#type(OpsItemDataType::SearchableString)
                .build(),
        )
        .unwrap()
        .build();
    assert_eq!(
        item.to_string(),
        "{Title: disk full, OperationalData: {/aws/resources={Value: \
         [{\"arn\":\"arn:aws:ec2:us-east-1:123456789012:instance/i-1\"}], Type: SearchableString}}}"
    );
}

#[test]
fn duplicate_map_key_is_rejected_and_first_value_kept() {
    let builder = Command::builder()
        .parameters("commands", vec!["uptime".to_string()])
        .unwrap();
    let err = builder
        .clone()
        .parameters("commands", vec!["whoami".to_string()])
        .unwrap_err();
    assert_eq!(err.field(), "parameters");
    assert_eq!(err.duplicate(), Some("commands"));
    assert_eq!(
        err.to_string(),
        "duplicated key `commands` provided for `parameters`"
    );

    let command = builder.build();
    let mut expected = BTreeMap::new();
    expected.insert("commands".to_string(), vec!["uptime".to_string()]);
    assert_eq!(command.parameters(), Some(&expected));
}

#[test]
fn clear_then_add_succeeds() {
    let builder = SendCommandInput::builder()
        .parameters("commands", vec!["uptime".to_string()])
        .unwrap()
        .clear_parameters();
    assert_eq!(builder.get_parameters(), &None);

    let input = builder
        .parameters("commands", vec!["whoami".to_string()])
        .unwrap()
        .build();
    assert_eq!(
        input.parameters().unwrap().get("commands"),
        Some(&vec!["whoami".to_string()])
    );
}

#[test]
fn cleared_map_is_unset() {
    let input = SendCommandInput::builder()
        .parameters("commands", vec!["uptime".to_string()])
        .unwrap()
        .clear_parameters()
        .build();
    assert_eq!(input.parameters(), None);
    assert_eq!(input, SendCommandInput::builder().build());
}

#[test]
fn list_append_then_replace() {
    let builder = Command::builder()
        .instance_ids("i-1")
        .extend_instance_ids(vec!["i-2", "i-3"])
        .instance_ids("i-4");
    assert_eq!(builder.get_instance_ids().as_ref().map(Vec::len), Some(4));

    let command = builder
        .set_instance_ids(Some(vec!["i-9".to_string()]))
        .build();
    assert_eq!(command.instance_ids(), Some(&["i-9".to_string()][..]));

    let command = Command::builder()
        .instance_ids("i-1")
        .set_instance_ids(None)
        .build();
    assert_eq!(command.instance_ids(), None);
}

#[test]
fn set_overwrites_including_with_unset() {
    let command = Command::builder()
        .comment("first")
        .comment("second")
        .build();
    assert_eq!(command.comment(), Some("second"));

    let command = Command::builder()
        .comment("first")
        .set_comment(None)
        .build();
    assert_eq!(command.comment(), None);
    assert_eq!(command, Command::builder().build());
}

#[test]
fn explicitly_empty_collections_stay_set() {
    let command = Command::builder()
        .set_instance_ids(Some(vec![]))
        .set_parameters(Some(BTreeMap::new()))
        .build();
    assert_eq!(command.instance_ids(), Some(&[] as &[String]));
    assert_eq!(command.to_string(), "{Parameters: {}, InstanceIds: []}");
    assert_ne!(command, Command::builder().build());
}

#[test]
fn equality_and_hash_follow_every_field() {
    let empty_a = InstanceInformation::builder().build();
    let empty_b = InstanceInformation::builder().build();
    assert_eq!(empty_a, empty_b);
    assert_eq!(hash_of(&empty_a), hash_of(&empty_b));

    let base = sample_command();
    let mut changed = base.clone();
    changed.comment = Some("different".to_string());
    assert_ne!(base, changed);
    changed.comment = None;
    assert_ne!(base, changed);
    changed.comment = base.comment.clone();
    assert_eq!(base, changed);
    changed.max_errors = Some(Threshold::Percentage(Percent::ZERO));
    assert_ne!(base, changed);

    let reordered = Command::builder()
        .instance_ids("i-0fedcba9876543210")
        .instance_ids("i-0123456789abcdef0")
        .build();
    let ordered = Command::builder()
        .instance_ids("i-0123456789abcdef0")
        .instance_ids("i-0fedcba9876543210")
        .build();
    assert_ne!(reordered, ordered);
}

#[test]
fn enum_fields_accept_symbols_or_strings() {
    let by_symbol = InstanceInformation::builder()
        .ping_status(PingStatus::ConnectionLost)
        .build();
    let by_string = InstanceInformation::builder()
        .ping_status("ConnectionLost")
        .build();
    assert_eq!(by_symbol, by_string);
    assert_eq!(by_string.ping_status(), Some(&PingStatus::ConnectionLost));
}

#[test]
fn typed_schedule_fields() {
    let input = UpdateMaintenanceWindowInput::builder()
        .window_id("mw-0c50858d01EXAMPLE")
        .schedule("rate(12 hours)".parse::<ScheduleExpression>().unwrap())
        .duration(4)
        .cutoff(1)
        .build();
    assert_eq!(
        input.schedule(),
        Some(&ScheduleExpression::rate(12, RateUnit::Hours).unwrap())
    );
    assert_eq!(
        input.to_string(),
        "{WindowId: mw-0c50858d01EXAMPLE, Schedule: rate(12 hours), Duration: 4, Cutoff: 1}"
    );
}

#[test]
fn automation_execution_renders_steps_and_target_maps() {
    let mut target_map = BTreeMap::new();
    target_map.insert("InstanceId".to_string(), vec!["i-1".to_string()]);
    let step = StepExecution::builder()
        .step_name("restart")
        .action("aws:changeInstanceState")
        .timeout_seconds(3600)
        .step_status(AutomationExecutionStatus::Success)
        .inputs("DesiredState", "running")
        .unwrap();
    let err = step.clone().inputs("DesiredState", "stopped").unwrap_err();
    assert_eq!(err.field(), "inputs");

    let execution = AutomationExecution::builder()
        .automation_execution_id("4105a4fc-f944-11e6-9d32-0123456789ab")
        .document_name("AWS-RestartEC2Instance")
        .automation_execution_status(AutomationExecutionStatus::InProgress)
        .step_executions(step.build())
        .mode(ExecutionMode::Auto)
        .target_maps(target_map.clone())
        .max_concurrency(Threshold::Count(1))
        .progress_counters(
            ProgressCounters::builder()
                .total_steps(2)
                .success_steps(1)
                .build(),
        )
        .build();
    assert_eq!(execution.target_maps(), Some(&[target_map][..]));
    assert_eq!(
        execution.step_executions().unwrap()[0].timeout_seconds(),
        Some(3600)
    );
    assert_eq!(
        execution.to_string(),
        "{AutomationExecutionId: 4105a4fc-f944-11e6-9d32-0123456789ab, \
         DocumentName: AWS-RestartEC2Instance, AutomationExecutionStatus: InProgress, \
         StepExecutions: [{StepName: restart, Action: aws:changeInstanceState, \
         TimeoutSeconds: 3600, StepStatus: Success, Inputs: {DesiredState=running}}], \
         Mode: Auto, TargetMaps: [{InstanceId=[i-1]}], MaxConcurrency: 1, \
         ProgressCounters: {TotalSteps: 2, SuccessSteps: 1}}"
    );
}

#[test]
fn automation_metadata_target_maps_append_then_replace() {
    let mut first = BTreeMap::new();
    first.insert("a".to_string(), vec!["1".to_string()]);
    let mut second = BTreeMap::new();
    second.insert("b".to_string(), vec!["2".to_string()]);

    let builder = AutomationExecutionMetadata::builder()
        .automation_type("CrossAccount")
        .target_maps(first.clone())
        .extend_target_maps(vec![second.clone()]);
    assert_eq!(builder.get_target_maps(), &Some(vec![first, second.clone()]));

    let metadata = builder.set_target_maps(Some(vec![second])).build();
    assert_eq!(metadata.target_maps().map(<[_]>::len), Some(1));
    assert_eq!(metadata.automation_type(), Some(&AutomationType::CrossAccount));
    assert_eq!(metadata, metadata.clone());
    assert_ne!(metadata, AutomationExecutionMetadata::builder().build());
}
