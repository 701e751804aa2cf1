/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use serde_json::json;
use smithy_types::{Blob, DateTime};
use ssm::input::{
    CreateAssociationInput, PutParameterInput, SendCommandInput, UpdateMaintenanceWindowInput,
};
use ssm::model::{
    AutomationExecution, AutomationExecutionStatus, Command, CommandInvocation,
    CommandInvocationStatus, ExecutionMode, InstanceInformation, MaintenanceWindowLambdaParameters,
    MaintenanceWindowTaskInvocationParameters, ParameterType, Percent, PingStatus, RateUnit,
    ScheduleExpression, Target, TargetLocation, Threshold,
};
use ssm::output::{DescribeInstanceInformationOutput, PutParameterOutput, SendCommandOutput};

#[test]
fn unset_members_are_omitted() {
    let input = SendCommandInput::builder().build();
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({}));

    let input = SendCommandInput::builder()
        .document_name("AWS-RunShellScript")
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "DocumentName": "AWS-RunShellScript" })
    );
}

#[test]
fn members_use_wire_names_and_values() {
    let input = SendCommandInput::builder()
        .document_name("AWS-RunPowerShellScript")
        .targets(
            Target::builder()
                .key("tag:Role")
                .values("web")
                .values("api")
                .build(),
        )
        .parameters("commands", vec!["Get-Service".to_string()])
        .unwrap()
        .timeout_seconds(600)
        .max_concurrency(Threshold::percentage(10).unwrap())
        .max_errors(Threshold::Count(0))
        .output_s3_bucket_name("ssm-output")
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "Targets": [{ "Key": "tag:Role", "Values": ["web", "api"] }],
            "DocumentName": "AWS-RunPowerShellScript",
            "TimeoutSeconds": 600,
            "Parameters": { "commands": ["Get-Service"] },
            "OutputS3BucketName": "ssm-output",
            "MaxConcurrency": "10%",
            "MaxErrors": "0"
        })
    );
}

#[test]
fn explicitly_empty_collections_are_sent() {
    let input = SendCommandInput::builder()
        .set_instance_ids(Some(vec![]))
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "InstanceIds": [] })
    );
}

#[test]
fn decode_response() {
    let body = r#"{
        "Command": {
            "CommandId": "b8eac879-0541-439d-94ec-47a80EXAMPLE",
            "DocumentName": "AWS-UpdateSSMAgent",
            "Parameters": { "allowDowngrade": ["false"] },
            "InstanceIds": ["i-02573cafcfEXAMPLE"],
            "RequestedDateTime": 1582136336.5,
            "Status": "Pending",
            "MaxConcurrency": "50",
            "MaxErrors": "0%",
            "TargetCount": 1,
            "SomeFutureMember": true
        }
    }"#;
    let output: SendCommandOutput = serde_json::from_str(body).unwrap();
    let command = output.command().unwrap();
    assert_eq!(command.document_name(), Some("AWS-UpdateSSMAgent"));
    assert_eq!(
        command.requested_date_time(),
        Some(&DateTime::from_secs_and_nanos(1582136336, 500_000_000))
    );
    assert_eq!(command.max_concurrency(), Some(Threshold::Count(50)));
    assert_eq!(command.max_errors(), Some(Threshold::Percentage(Percent::ZERO)));
    assert_eq!(command.target_count(), Some(1));
    assert_eq!(command.comment(), None);
    assert_eq!(
        command.parameters().unwrap()["allowDowngrade"],
        vec!["false".to_string()]
    );
}

#[test]
fn decode_rejects_invalid_thresholds() {
    let body = r#"{ "Command": { "MaxConcurrency": "200%" } }"#;
    assert!(serde_json::from_str::<SendCommandOutput>(body).is_err());
}

#[test]
fn malformed_threshold_fails_the_whole_record() {
    for body in [
        r#"{ "CommandId": "x", "MaxErrors": "1.5" }"#,
        r#"{ "CommandId": "x", "MaxErrors": "" }"#,
        r#"{ "CommandId": "x", "MaxConcurrency": 10 }"#,
    ] {
        let err = serde_json::from_str::<Command>(body).unwrap_err();
        assert!(err.is_data(), "{}: {}", body, err);
    }
}

#[test]
fn threshold_boundaries_survive_the_wire() {
    for (concurrency, errors) in [
        (Threshold::Count(u32::MAX), Threshold::Count(0)),
        (
            Threshold::Percentage(Percent::HUNDRED),
            Threshold::Percentage(Percent::ZERO),
        ),
    ] {
        let command = Command::builder()
            .command_id("c1")
            .max_concurrency(concurrency)
            .max_errors(errors)
            .build();
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(serde_json::from_str::<Command>(&json).unwrap(), command);
    }
}

#[test]
fn schedule_boundaries_survive_the_wire() {
    for schedule in [
        ScheduleExpression::rate(1, RateUnit::Hours).unwrap(),
        ScheduleExpression::rate(u32::MAX, RateUnit::Days).unwrap(),
        ScheduleExpression::cron("0 0 ? * SUN *").unwrap(),
        ScheduleExpression::at("2021-01-01T00:00:00").unwrap(),
    ] {
        let input = UpdateMaintenanceWindowInput::builder()
            .window_id("mw-0c50858d01EXAMPLE")
            .schedule(schedule)
            .build();
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(
            serde_json::from_str::<UpdateMaintenanceWindowInput>(&json).unwrap(),
            input
        );
    }
}

#[test]
fn decode_list_of_shapes() {
    let body = r#"{
        "InstanceInformationList": [
            {
                "InstanceId": "i-1234567890abcdef0",
                "PingStatus": "Online",
                "LastPingDateTime": "2020-02-19T18:25:36Z",
                "IsLatestVersion": true,
                "IPAddress": "203.0.113.0",
                "PlatformType": "Linux"
            },
            { "InstanceId": "mi-0123456789abcdef0", "PingStatus": "Sleeping" }
        ],
        "NextToken": "token"
    }"#;
    let output: DescribeInstanceInformationOutput = serde_json::from_str(body).unwrap();
    let list = output.instance_information_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].ping_status(), Some(&PingStatus::Online));
    assert_eq!(list[0].ip_address(), Some("203.0.113.0"));
    assert_eq!(list[0].is_latest_version(), Some(true));
    assert_eq!(
        list[0].last_ping_date_time(),
        Some(&DateTime::from_secs(1582136736))
    );
    assert_eq!(list[1].ping_status().unwrap().as_str(), "Sleeping");
    assert!(!list[1].ping_status().unwrap().is_known());
    assert_eq!(output.next_token(), Some("token"));
}

#[test]
fn shapes_round_trip_through_json() {
    let invocation = CommandInvocation::builder()
        .command_id("c1")
        .instance_id("i-1")
        .status(CommandInvocationStatus::Delayed)
        .requested_date_time(DateTime::from_secs(1_600_000_000))
        .build();
    let json = serde_json::to_string(&invocation).unwrap();
    assert_eq!(
        serde_json::from_str::<CommandInvocation>(&json).unwrap(),
        invocation
    );

    let info = InstanceInformation::builder()
        .instance_id("i-1")
        .ip_address("10.0.0.1")
        .build();
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({ "InstanceId": "i-1", "IPAddress": "10.0.0.1" })
    );
}

#[test]
fn blobs_are_base64() {
    let params = MaintenanceWindowTaskInvocationParameters::builder()
        .lambda(
            MaintenanceWindowLambdaParameters::builder()
                .qualifier("$LATEST")
                .payload(Blob::new(r#"{"key":"value"}"#))
                .build(),
        )
        .build();
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(
        value,
        json!({ "Lambda": { "Qualifier": "$LATEST", "Payload": "eyJrZXkiOiJ2YWx1ZSJ9" } })
    );
    let decoded: MaintenanceWindowTaskInvocationParameters = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, params);
}

#[test]
fn schedules_are_strings() {
    let input = CreateAssociationInput::builder()
        .name("AWS-UpdateSSMAgent")
        .schedule_expression(ScheduleExpression::rate(30, RateUnit::Minutes).unwrap())
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "Name": "AWS-UpdateSSMAgent", "ScheduleExpression": "rate(30 minutes)" })
    );
}

#[test]
fn put_parameter() {
    let input = PutParameterInput::builder()
        .name("/app/db/password")
        .value("hunter2")
        .r#type(ParameterType::SecureString)
        .overwrite(true)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "Name": "/app/db/password",
            "Value": "hunter2",
            "Type": "SecureString",
            "Overwrite": true
        })
    );

    let output: PutParameterOutput =
        serde_json::from_str(r#"{ "Version": 3, "Tier": "Standard" }"#).unwrap();
    assert_eq!(output.version(), Some(3));
    assert_eq!(output.tier().unwrap().as_str(), "Standard");
}

#[test]
fn decode_automation_execution() {
    let body = r#"{
        "AutomationExecutionId": "4105a4fc-f944-11e6-9d32-0123456789ab",
        "DocumentName": "AWS-RestartEC2Instance",
        "DocumentVersion": "1",
        "ExecutionStartTime": 1583737233.5,
        "AutomationExecutionStatus": "InProgress",
        "StepExecutions": [
            {
                "StepName": "stopInstances",
                "Action": "aws:changeInstanceState",
                "TimeoutSeconds": 3600,
                "MaxAttempts": 1,
                "StepStatus": "Success",
                "Inputs": { "DesiredState": "\"stopped\"" },
                "Outputs": { "InstanceStates": ["stopped"] },
                "FailureDetails": {
                    "FailureStage": "Invocation",
                    "Details": { "ExceptionType": ["Throttling"] }
                },
                "IsCritical": true,
                "ValidNextSteps": ["startInstances"]
            }
        ],
        "StepExecutionsTruncated": false,
        "Parameters": { "InstanceId": ["i-1234567890abcdef0"] },
        "Mode": "Auto",
        "TargetMaps": [{ "InstanceId": ["i-1"] }, { "InstanceId": ["i-2"] }],
        "ResolvedTargets": { "ParameterValues": ["i-1", "i-2"], "Truncated": false },
        "MaxConcurrency": "10%",
        "MaxErrors": "0",
        "TargetLocations": [
            {
                "Accounts": ["123456789012"],
                "Regions": ["us-east-1", "us-east-2"],
                "TargetLocationMaxConcurrency": "1",
                "TargetLocationMaxErrors": "100%"
            }
        ],
        "ProgressCounters": { "TotalSteps": 4, "SuccessSteps": 1, "FailedSteps": 0 }
    }"#;
    let execution: AutomationExecution = serde_json::from_str(body).unwrap();
    assert_eq!(
        execution.automation_execution_status(),
        Some(&AutomationExecutionStatus::InProgress)
    );
    assert_eq!(execution.mode(), Some(&ExecutionMode::Auto));
    assert_eq!(
        execution.execution_start_time(),
        Some(&DateTime::from_secs_and_nanos(1583737233, 500_000_000))
    );
    let step = &execution.step_executions().unwrap()[0];
    assert_eq!(step.timeout_seconds(), Some(3600));
    assert_eq!(step.is_critical(), Some(true));
    assert_eq!(
        step.inputs().unwrap().get("DesiredState").map(String::as_str),
        Some("\"stopped\"")
    );
    assert_eq!(
        step.failure_details().unwrap().details().unwrap()["ExceptionType"],
        vec!["Throttling".to_string()]
    );
    assert_eq!(execution.target_maps().unwrap().len(), 2);
    assert_eq!(execution.resolved_targets().unwrap().truncated(), Some(false));
    assert_eq!(execution.max_concurrency(), Threshold::percentage(10).ok());
    assert_eq!(execution.max_errors(), Some(Threshold::Count(0)));
    assert_eq!(
        execution.target_locations().unwrap()[0],
        TargetLocation::builder()
            .accounts("123456789012")
            .regions("us-east-1")
            .regions("us-east-2")
            .target_location_max_concurrency(Threshold::Count(1))
            .target_location_max_errors(Threshold::Percentage(Percent::HUNDRED))
            .build()
    );
    assert_eq!(execution.progress_counters().unwrap().total_steps(), Some(4));

    let json = serde_json::to_string(&execution).unwrap();
    assert_eq!(serde_json::from_str::<AutomationExecution>(&json).unwrap(), execution);
}
