//! The shared logger is process-wide, so everything that touches it runs in
//! one test.

use stacklog::{FileNameMode, Level, MemorySink, ResultExt};

#[test]
fn free_functions_configure_the_shared_logger() {
    let sink = MemorySink::new();
    stacklog::set_output(sink.clone());
    stacklog::disable_backtrace();

    stacklog::info!("hello {}", "world");
    stacklog::warning!("careful");
    stacklog::error!("failed {} times", 2);
    stacklog::debug!("{:?}", (1, "a"));
    let lines = sink.records();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" INFO hello world"));
    assert!(lines[1].ends_with(" WARN careful"));
    assert!(lines[2].ends_with("  ERR failed 2 times"));
    assert!(lines[3].ends_with("  DEB (1, \"a\")"));

    sink.clear();
    stacklog::disable_debug();
    stacklog::debug!("hidden");
    stacklog::json_debug(&[1, 2, 3]);
    assert!(sink.contents().is_empty());
    stacklog::enable_debug();
    stacklog::json_debug(&[1, 2, 3]);
    assert_eq!(sink.records()[0].matches(" DEB ").count(), 1);

    sink.clear();
    stacklog::set_file_name_mode(FileNameMode::Short);
    stacklog::set_file_name_mode_code(42);
    assert_eq!(stacklog::global().file_name_mode(), FileNameMode::Short);
    let line = line!() + 1;
    stacklog::info!("located");
    assert!(sink.records()[0].ends_with(&format!(" INFO global_api.rs:{line} located")));
    stacklog::set_file_name_mode(FileNameMode::None);

    sink.clear();
    assert!(!stacklog::error_err::<std::io::Error>(None));
    assert!(!stacklog::warning_err::<std::io::Error>(None));
    stacklog::fatal_err::<std::io::Error>(None);
    assert!(sink.contents().is_empty());
    let err = std::io::Error::other("socket closed");
    assert!(stacklog::error_err(Some(&err)));
    assert!(sink.records()[0].ends_with("  ERR socket closed"));

    sink.clear();
    assert_eq!("12".parse::<u8>().log_warn(), Some(12));
    assert_eq!("x".parse::<u8>().log_warn(), None);
    assert_eq!("300".parse::<u8>().log_err(), None);
    let lines = sink.records();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" WARN invalid digit"));
    assert!(lines[1].contains("  ERR number too large"));

    sink.clear();
    stacklog::enable_backtrace();
    let caught = stacklog::recover(|| {
        stacklog::log_panic!("boom {}", 1);
    });
    assert!(caught.is_none());
    assert!(!stacklog::global().backtrace_enabled());
    let lines = sink.records();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("  ERR PANIC: boom 1"));
    assert!(!sink.contents().contains('\t'));

    sink.clear();
    stacklog::set_prefix(Level::Info, "NOTE");
    assert!(stacklog::set_time_format("[bogus]").is_err());
    stacklog::set_time_format("[hour]:[minute]").expect("valid layout");
    stacklog::info!("short clock");
    let line = &sink.records()[0];
    assert_eq!(line.len(), "00:00 NOTE short clock".len(), "{line}");

    sink.clear();
    stacklog::enable_colored();
    stacklog::info!("green");
    assert!(sink.contents().starts_with("\x1b[32m"));
    stacklog::disable_colored();

    let writer = MemorySink::new();
    stacklog::set_writer(writer.clone());
    stacklog::info!("to writer");
    assert!(writer.contents().ends_with("NOTE to writer\n"));
}
