//! `format!`-style macros over [`helpers`](crate::helpers).
//!
//! With no arguments each macro uses the preset's default message. A lone
//! string literal is treated as a format string; any other single expression
//! is used as the message as is.

/// Reports a `PROBE` with code `0x10` and continues.
#[macro_export]
macro_rules! probe_check {
    () => {
        $crate::helpers::check($crate::DEFAULT_MESSAGE)
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::check(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::check($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::check(::std::format!($($arg)+))
    };
}

/// Reports a warning with code `0x1B` and continues.
#[macro_export]
macro_rules! probe_notice {
    () => {
        $crate::helpers::notice($crate::Severity::Warning.default_message())
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::notice(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::notice($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::notice(::std::format!($($arg)+))
    };
}

/// Reports an error with code `0x18` and continues.
#[macro_export]
macro_rules! probe_error {
    () => {
        $crate::helpers::error($crate::Severity::Error.default_message())
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::error(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::error($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::error(::std::format!($($arg)+))
    };
}

/// Reports a `PROBE` with code `0x20` and exits with 1.
#[macro_export]
macro_rules! probe {
    () => {
        $crate::helpers::probe($crate::DEFAULT_MESSAGE)
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::probe(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::probe($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::probe(::std::format!($($arg)+))
    };
}

/// Reports a warning with code `0x2B` and exits with 11.
#[macro_export]
macro_rules! probe_warn {
    () => {
        $crate::helpers::warn($crate::Severity::Warning.default_message())
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::warn(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::warn($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::warn(::std::format!($($arg)+))
    };
}

/// Reports an error with code `0x28` and exits with 9.
#[macro_export]
macro_rules! probe_panic {
    () => {
        $crate::helpers::panic($crate::Severity::Error.default_message())
    };
    ($fmt:literal $(,)?) => {
        $crate::helpers::panic(::std::format!($fmt))
    };
    ($msg:expr $(,)?) => {
        $crate::helpers::panic($msg)
    };
    ($($arg:tt)+) => {
        $crate::helpers::panic(::std::format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_formats_arguments() {
        let probe = crate::probe_check!("value is {}", 42);
        assert_eq!(probe.message(), "value is 42");
        assert_eq!(probe.label(), "PROBE");
        assert_eq!(probe.code(), 0x10);
    }

    #[test]
    fn notice_and_error_defaults() {
        let probe = crate::probe_notice!();
        assert_eq!(probe.message(), "warning");
        assert_eq!(probe.code(), 0x1B);

        let probe = crate::probe_error!();
        assert_eq!(probe.message(), "whoopsie!");
        assert_eq!(probe.code(), 0x18);
    }

    #[test]
    fn runtime_message_expression() {
        let message = String::from("from {a} variable");
        let probe = crate::probe_check!(message);
        assert_eq!(probe.message(), "from {a} variable");

        let probe = crate::probe_error!(format!("{}-{}", 1, 2));
        assert_eq!(probe.message(), "1-2");
        assert_eq!(probe.code(), 0x18);
    }

    #[test]
    fn literal_captures_variables() {
        let value = 7;
        let probe = crate::probe_notice!("value {value}");
        assert_eq!(probe.message(), "value 7");
    }

    #[test]
    fn check_without_arguments() {
        assert_eq!(crate::probe_check!().message(), "butt");
    }
}
