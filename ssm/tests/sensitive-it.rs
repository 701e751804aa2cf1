/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Blob;
use ssm::input::{PutParameterInput, RegisterTaskWithMaintenanceWindowInput};
use ssm::model::{
    MaintenanceWindowLambdaParameters, MaintenanceWindowStepFunctionsParameters,
    MaintenanceWindowTaskParameterValueExpression, MaintenanceWindowTaskType,
};

#[test]
fn validate_sensitive_trait() {
    let params = MaintenanceWindowLambdaParameters::builder()
        .payload(Blob::new("some payload"))
        .build();
    assert_eq!(
        format!("{:?}", params),
        "MaintenanceWindowLambdaParameters { client_context: None, qualifier: None, payload: \"*** Sensitive Data Redacted ***\" }"
    );
    assert_eq!(
        params.to_string(),
        "{Payload: *** Sensitive Data Redacted ***}"
    );
}

#[test]
fn unset_sensitive_members_are_omitted_from_display() {
    let params = MaintenanceWindowStepFunctionsParameters::builder()
        .name("nightly")
        .build();
    assert_eq!(params.to_string(), "{Name: nightly}");
}

#[test]
fn secrets_never_reach_debug_or_display() {
    let input = PutParameterInput::builder()
        .name("/app/db/password")
        .value("hunter2")
        .build();
    assert!(!format!("{:?}", input).contains("hunter2"));
    assert!(!input.to_string().contains("hunter2"));
    assert_eq!(input.value(), Some("hunter2"));

    let builder = PutParameterInput::builder().value("hunter2");
    assert!(!format!("{:?}", builder).contains("hunter2"));
}

#[test]
fn sensitive_maps_are_redacted_as_a_whole() {
    let input = RegisterTaskWithMaintenanceWindowInput::builder()
        .window_id("mw-0c50858d01EXAMPLE")
        .task_type(MaintenanceWindowTaskType::RunCommand)
        .task_parameters(
            "token",
            MaintenanceWindowTaskParameterValueExpression::builder()
                .values("s3cr3t")
                .build(),
        )
        .unwrap()
        .build();
    let rendered = input.to_string();
    assert_eq!(
        rendered,
        "{WindowId: mw-0c50858d01EXAMPLE, TaskType: RUN_COMMAND, \
         TaskParameters: *** Sensitive Data Redacted ***}"
    );
    assert!(!format!("{:?}", input).contains("s3cr3t"));
}
