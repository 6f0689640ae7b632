//! End-to-end pipeline runs against scripted collaborators.

#[cfg(test)]
mod tests {
    use crate::errors::StageError;
    use crate::pipeline::{NotificationDecision, Pipeline};
    use crate::stages::ports::SUCCESS;
    use crate::testing::{
        assert_email_sent, assert_logged, assert_no_email, LogEntry, RecordingEmailer,
        RecordingLogger, StaticConfig, StubProject,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct Harness {
        pipeline: Pipeline,
        logger: Arc<RecordingLogger>,
        emailer: Arc<RecordingEmailer>,
    }

    fn harness(send_email_summary: bool) -> Harness {
        let logger = Arc::new(RecordingLogger::new());
        let emailer = Arc::new(RecordingEmailer::new());
        let pipeline = Pipeline::new(
            Arc::new(StaticConfig(send_email_summary)),
            emailer.clone(),
            logger.clone(),
        );
        Harness {
            pipeline,
            logger,
            emailer,
        }
    }

    #[test]
    fn test_no_tests_deploy_succeeds_email_enabled() {
        let h = harness(true);
        let project = StubProject::new();

        h.pipeline.run(&project);

        assert_logged(
            &h.logger,
            &[
                LogEntry::info("No tests"),
                LogEntry::info("Deployment successful"),
                LogEntry::info("Sending email"),
            ],
        );
        assert_email_sent(&h.emailer, "Deployment successful");
        assert_eq!(project.test_calls(), 0);
        assert_eq!(project.deploy_calls(), 1);
    }

    #[test]
    fn test_tests_pass_deploy_fails_email_disabled() {
        let h = harness(false);
        let project = StubProject::new()
            .with_tests("success")
            .with_deploy_outcome("failure");

        let report = h.pipeline.run_with_report(&project);

        assert_logged(
            &h.logger,
            &[
                LogEntry::info("Tests passed"),
                LogEntry::error("Deployment failed"),
                LogEntry::info("Email disabled"),
            ],
        );
        assert_no_email(&h.emailer);
        assert_eq!(report.message(), "Deployment failed");
        assert_eq!(report.notification, NotificationDecision::Suppressed);
    }

    #[test]
    fn test_tests_fail_email_enabled() {
        let h = harness(true);
        let project = StubProject::new().with_tests("failure");

        let report = h.pipeline.run_with_report(&project);

        assert_logged(
            &h.logger,
            &[LogEntry::error("Tests failed"), LogEntry::info("Sending email")],
        );
        assert_eq!(project.deploy_calls(), 0);
        assert_email_sent(&h.emailer, "Tests failed");
        assert_eq!(report.outcome.error, Some(StageError::TestsFailed));
        assert_eq!(report.outcome.executed_stages(), vec!["test"]);
    }

    #[test]
    fn test_every_outcome_notifies_iff_enabled() {
        let projects = || {
            vec![
                StubProject::new(),
                StubProject::new().with_deploy_outcome("failure"),
                StubProject::new().with_tests(SUCCESS),
                StubProject::new().with_tests(SUCCESS).with_deploy_outcome(""),
                StubProject::new().with_tests("flaky"),
            ]
        };

        for enabled in [true, false] {
            for project in projects() {
                let h = harness(enabled);
                let report = h.pipeline.run_with_report(&project);

                let expected = usize::from(enabled);
                assert_eq!(h.emailer.send_count(), expected);
                if enabled {
                    assert_eq!(h.emailer.sent(), vec![report.message().to_string()]);
                    assert_eq!(report.notification, NotificationDecision::Sent);
                } else {
                    assert_eq!(report.notification, NotificationDecision::Suppressed);
                }

                let notify_lines = h
                    .logger
                    .messages()
                    .into_iter()
                    .filter(|m| m == "Sending email" || m == "Email disabled")
                    .count();
                assert_eq!(notify_lines, 1);
            }
        }
    }

    #[test]
    fn test_terminal_message_table() {
        let cases = [
            (StubProject::new(), "Deployment successful"),
            (StubProject::new().with_tests(SUCCESS), "Deployment successful"),
            (
                StubProject::new().with_tests(SUCCESS).with_deploy_outcome("error: 503"),
                "Deployment failed",
            ),
            (StubProject::new().with_deploy_outcome("failure"), "Deployment failed"),
            (StubProject::new().with_tests("Success"), "Tests failed"),
        ];

        for (project, expected) in cases {
            let h = harness(false);
            assert_eq!(h.pipeline.run_with_report(&project).message(), expected);
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let h = harness(true);
        let failing = StubProject::new().with_tests("failure");
        let passing = StubProject::new();

        let first = h.pipeline.run_with_report(&failing);
        let second = h.pipeline.run_with_report(&passing);

        assert_ne!(first.run_id, second.run_id);
        assert_eq!(
            h.emailer.sent(),
            vec!["Tests failed".to_string(), "Deployment successful".to_string()]
        );
    }

    #[test]
    fn test_pipeline_shared_across_threads() {
        let h = harness(true);
        let pipeline = &h.pipeline;

        std::thread::scope(|scope| {
            for i in 0..4 {
                scope.spawn(move || {
                    let project = if i % 2 == 0 {
                        StubProject::new()
                    } else {
                        StubProject::new().with_tests("failure")
                    };
                    pipeline.run(&project);
                });
            }
        });

        let mut sent = h.emailer.sent();
        sent.sort();
        assert_eq!(
            sent,
            vec![
                "Deployment successful".to_string(),
                "Deployment successful".to_string(),
                "Tests failed".to_string(),
                "Tests failed".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_serializes() {
        let h = harness(true);
        let report = h.pipeline.run_with_report(&StubProject::new());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["notification"], "sent");
        assert_eq!(json["outcome"]["message"], "Deployment successful");
        assert_eq!(json["outcome"]["records"].as_array().map(Vec::len), Some(2));
    }
}
