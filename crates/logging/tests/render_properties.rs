use logging::{CallSite, Line, Logger, LoggerConfig, Severity, sprintf};
use proptest::prelude::*;
use test_support::CaptureBuffer;

const TS: &str = "24-06-15 09:23:01";

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn strip_escapes(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("\x1b[") {
        plain.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('m').map_or(after.len(), |index| index + 1);
        rest = &after[end..];
    }
    plain.push_str(rest);
    plain
}

proptest! {
    #[test]
    fn uncolored_line_layout(severity in severity(), message in "[a-zA-Z0-9 =%.,:_-]{0,40}") {
        let rendered = Line::new(severity, TS, &message).to_string();
        prop_assert_eq!(
            &rendered,
            &format!("[Figo] {TS} [{}] {message}\n", severity.label())
        );
        prop_assert_eq!(rendered.matches("[Figo]").count(), 1);
        prop_assert_eq!(rendered.matches('\n').count(), 1);
    }

    #[test]
    fn colored_line_differs_only_by_escapes(
        severity in severity(),
        message in "[a-zA-Z0-9 =.,:_-]{0,40}",
        line in 1u32..10_000,
        show_site in any::<bool>(),
    ) {
        let site = CallSite::new("src/worker.rs", line).with_function("run");
        let call_site = show_site.then_some(&site);
        let plain = Line::new(severity, TS, &message).call_site(call_site);
        let colored = plain.colored(true).to_string();

        prop_assert_eq!(colored.matches("\x1b[").count(), 4);
        prop_assert_eq!(strip_escapes(&colored), plain.to_string());
    }

    #[test]
    fn template_without_verbs_is_unchanged(template in "[^%]{0,60}") {
        prop_assert_eq!(sprintf(&template, &[]), template);
    }

    #[test]
    fn output_follows_filter(severity in severity(), verbose in any::<bool>()) {
        prop_assume!(!severity.is_fatal());
        let buffer = CaptureBuffer::new();
        let logger = Logger::builder()
            .config(LoggerConfig::default().with_verbose(verbose))
            .writer(buffer.clone())
            .build();

        logger.log(severity, format_args!("probe"));

        let expected = usize::from(verbose || severity >= Severity::Warning);
        prop_assert_eq!(buffer.lines().len(), expected);
        prop_assert_eq!(logger.enabled(severity), expected == 1);
    }
}
