//! 日志宏模块
//!
//! 提供自动捕获文件和行号信息的 glog 风格日志宏
//!
//! # 示例
//!
//! ```ignore
//! use snowlog::{log_info, log_warn_if};
//!
//! // 流式拼接，语句结束时输出
//! log_info!() << "user " << user_id << " logged in";
//!
//! // 格式化参数
//! log_info!("user {} logged in", user_id);
//!
//! // 条件为 false 时格式化参数不会被求值
//! log_warn_if!(latency_ms > 500, "slow request: {}ms", latency_ms);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_message {
    ($level:ident) => {
        $crate::log::LogMessage::new($crate::log::LogLevel::$level, file!(), line!())
    };
    ($level:ident, $($arg:tt)+) => {
        $crate::log::LogMessage::new($crate::log::LogLevel::$level, file!(), line!())
            .with_args(format_args!($($arg)+))
    };
}

// 外层括号让展开结果在语句位置也是普通表达式
#[doc(hidden)]
#[macro_export]
macro_rules! __log_message_if {
    ($level:ident, $cond:expr) => {
        (if $cond {
            $crate::log::LogMessage::new($crate::log::LogLevel::$level, file!(), line!())
        } else {
            $crate::log::LogMessage::disabled($crate::log::LogLevel::$level, file!(), line!())
        })
    };
    ($level:ident, $cond:expr, $($arg:tt)+) => {
        (if $cond {
            $crate::log::LogMessage::new($crate::log::LogLevel::$level, file!(), line!())
                .with_args(format_args!($($arg)+))
        } else {
            $crate::log::LogMessage::disabled($crate::log::LogLevel::$level, file!(), line!())
        })
    };
}

/// 记录 INFO 级别日志
///
/// ```ignore
/// log_info!() << "listening on " << addr;
/// log_info!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    () => {
        $crate::__log_message!(Info)
    };
    ($($arg:tt)+) => {
        $crate::__log_message!(Info, $($arg)+)
    };
}

/// 记录 WARN 级别日志
#[macro_export]
macro_rules! log_warn {
    () => {
        $crate::__log_message!(Warn)
    };
    ($($arg:tt)+) => {
        $crate::__log_message!(Warn, $($arg)+)
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! log_err {
    () => {
        $crate::__log_message!(Error)
    };
    ($($arg:tt)+) => {
        $crate::__log_message!(Error, $($arg)+)
    };
}

/// 记录 FATAL 级别日志，输出后终止进程
///
/// ```ignore
/// log_fatal!() << "config file missing: " << path.display();
/// ```
#[macro_export]
macro_rules! log_fatal {
    () => {
        $crate::__log_message!(Fatal)
    };
    ($($arg:tt)+) => {
        $crate::__log_message!(Fatal, $($arg)+)
    };
}

/// 条件为 true 时记录 INFO 级别日志
#[macro_export]
macro_rules! log_info_if {
    ($cond:expr $(, $($arg:tt)+)?) => {
        $crate::__log_message_if!(Info, $cond $(, $($arg)+)?)
    };
}

/// 条件为 true 时记录 WARN 级别日志
#[macro_export]
macro_rules! log_warn_if {
    ($cond:expr $(, $($arg:tt)+)?) => {
        $crate::__log_message_if!(Warn, $cond $(, $($arg)+)?)
    };
}

/// 条件为 true 时记录 ERROR 级别日志
#[macro_export]
macro_rules! log_err_if {
    ($cond:expr $(, $($arg:tt)+)?) => {
        $crate::__log_message_if!(Error, $cond $(, $($arg)+)?)
    };
}

/// 条件为 true 时记录 FATAL 级别日志并终止进程，条件为 false 时什么也不做
#[macro_export]
macro_rules! log_fatal_if {
    ($cond:expr $(, $($arg:tt)+)?) => {
        $crate::__log_message_if!(Fatal, $cond $(, $($arg)+)?)
    };
}
