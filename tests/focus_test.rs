use spotmood::focus::{BrowserFocus, NoopFocus, Platform, SystemFocus};

#[test]
fn test_noop_focus_reports_unsupported() {
    assert!(!NoopFocus.focus());
}

#[test]
fn test_macos_command() {
    let focus = SystemFocus::new(Platform::MacOs, "Safari");
    let (program, args) = focus.command();
    assert_eq!(program, "osascript");
    assert_eq!(args, vec!["-e", "tell application \"Safari\" to activate"]);
}

#[test]
fn test_linux_command() {
    let focus = SystemFocus::new(Platform::Linux, "Chrome");
    let (program, args) = focus.command();
    assert_eq!(program, "wmctrl");
    assert_eq!(args, vec!["-a", "Chrome"]);
}

#[test]
fn test_windows_command_escapes_quotes() {
    let focus = SystemFocus::new(Platform::Windows, "Bob's Browser");
    let (program, args) = focus.command();
    assert_eq!(program, "powershell");
    assert_eq!(
        args.last().unwrap(),
        "(New-Object -ComObject WScript.Shell).AppActivate('Bob''s Browser')"
    );
}

#[test]
fn test_default_browsers() {
    assert_eq!(Platform::MacOs.default_browser(), "Safari");
    assert_eq!(Platform::Linux.default_browser(), "Chrome");
    assert_eq!(Platform::Windows.default_browser(), "Chrome");
}
