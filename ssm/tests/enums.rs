/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use ssm::model::*;
use std::collections::HashSet;
use std::str::FromStr;
use tracing_test::traced_test;

macro_rules! check_enums {
    ($($ty:ident),+ $(,)?) => {
        $(
            let values = $ty::values();
            assert!(!values.is_empty(), "{} has no values", stringify!($ty));
            let unique: HashSet<_> = values.iter().collect();
            assert_eq!(unique.len(), values.len(), "{} has duplicate values", stringify!($ty));
            for value in values {
                let parsed = $ty::from_str(value).unwrap();
                assert_eq!(parsed.as_str(), *value);
                assert_eq!(parsed.to_string(), *value);
                assert!(parsed.is_known());
                assert_eq!($ty::from(*value), parsed);
                assert_eq!(String::from(parsed.clone()), *value);
            }
            assert!($ty::from_str("").is_err());
            assert!($ty::from_str("NOT_A_REAL_VALUE").is_err());
        )+
    };
}

#[test]
fn every_enum_round_trips_through_its_wire_value() {
    check_enums!(
        CommandStatus,
        CommandInvocationStatus,
        CommandPluginStatus,
        NotificationEvent,
        NotificationType,
        DocumentHashType,
        PingStatus,
        PlatformType,
        ResourceType,
        PatchOperationType,
        RebootOption,
        OpsItemStatus,
        OpsItemDataType,
        MaintenanceWindowTaskType,
        AssociationComplianceSeverity,
        AssociationSyncCompliance,
        AssociationStatusName,
        ParameterType,
        ParameterTier,
        DocumentStatus,
        DocumentType,
        DocumentFormat,
        DocumentParameterType,
        AutomationExecutionStatus,
        ExecutionMode,
        AutomationType,
    );
}

#[test]
fn wire_values_are_exact() {
    assert_eq!(MaintenanceWindowTaskType::RunCommand.as_str(), "RUN_COMMAND");
    assert_eq!(MaintenanceWindowTaskType::StepFunctions.as_str(), "STEP_FUNCTIONS");
    assert_eq!(PingStatus::Online.as_str(), "Online");
    assert_eq!(RebootOption::RebootIfNeeded.as_str(), "RebootIfNeeded");
    assert_eq!(ResourceType::Ec2Instance.as_str(), "EC2Instance");
    assert_eq!(ParameterTier::IntelligentTiering.as_str(), "Intelligent-Tiering");
    assert_eq!(DocumentFormat::Yaml.as_str(), "YAML");
    assert_eq!(AutomationType::CrossAccount.as_str(), "CrossAccount");
    assert_eq!(ExecutionMode::Interactive.as_str(), "Interactive");
    assert_eq!(
        AutomationExecutionStatus::values(),
        &[
            "Pending",
            "InProgress",
            "Waiting",
            "Success",
            "TimedOut",
            "Cancelling",
            "Cancelled",
            "Failed"
        ]
    );
    assert_eq!(
        CommandInvocationStatus::values(),
        &[
            "Pending",
            "InProgress",
            "Delayed",
            "Success",
            "Cancelled",
            "TimedOut",
            "Failed",
            "Cancelling"
        ]
    );
}

#[test]
fn strict_parsing_is_case_sensitive() {
    assert!("online".parse::<PingStatus>().is_err());
    assert!("run_command".parse::<MaintenanceWindowTaskType>().is_err());
    assert!(" Online".parse::<PingStatus>().is_err());
    assert_eq!("Online".parse::<PingStatus>().unwrap(), PingStatus::Online);
}

#[test]
fn strict_parsing_errors_name_the_input() {
    let err = "".parse::<PingStatus>().unwrap_err();
    assert_eq!(err.to_string(), "cannot parse an empty string into PingStatus");

    let err = "NOT_A_REAL_VALUE".parse::<CommandStatus>().unwrap_err();
    assert_eq!(err.enum_name(), "CommandStatus");
    assert_eq!(err.value(), "NOT_A_REAL_VALUE");
    assert_eq!(
        err.to_string(),
        "unknown variant `NOT_A_REAL_VALUE` for CommandStatus"
    );
}

#[test]
#[traced_test]
fn lenient_conversion_preserves_unknown_values() {
    let status = PingStatus::from("Hibernating");
    assert!(!status.is_known());
    assert_eq!(status.as_str(), "Hibernating");
    assert_eq!(status.to_string(), "Hibernating");
    assert_ne!(status, PingStatus::Online);
    assert_eq!(status, PingStatus::from("Hibernating".to_string()));
    assert!(logs_contain("preserving unrecognized enum value"));
}

#[test]
fn unknown_values_survive_serde() {
    let status: CommandStatus = serde_json::from_str(r#""Paused""#).unwrap();
    assert_eq!(status.as_str(), "Paused");
    assert_eq!(serde_json::to_string(&status).unwrap(), r#""Paused""#);

    let known: CommandStatus = serde_json::from_str(r#""Cancelling""#).unwrap();
    assert_eq!(known, CommandStatus::Cancelling);
}
